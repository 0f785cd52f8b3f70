mod category;
mod day_summary;
mod job;
mod multi_day_job;

pub use category::{Classification, Department};
pub use day_summary::{DaySummary, DepartmentTotals};
pub use job::{
    Appointment, AppointmentStatus, Job, JobId, JobTypeId, JobTypeTable, ReportInputs,
};
pub use multi_day_job::{DayAppointments, MultiDayJobRecord};
