// Unit tests for per-day and per-window appointment counting

use proptest::prelude::*;
use wtd_upcoming::revenue::{Appointment, AppointmentStatus, AppointmentTally};

fn appointment(job_id: i64, status: &str) -> Appointment {
    Appointment::new(Some(job_id), AppointmentStatus::from_platform(status))
}

#[test]
fn test_counts_per_day_and_total() {
    let tally = AppointmentTally::tally(&[
        vec![Appointment::for_job(1), Appointment::for_job(2)],
        vec![Appointment::for_job(1), Appointment::for_job(1)],
        vec![],
    ]);

    assert_eq!(tally.day_len(), 3);
    assert_eq!(tally.day_count(0, 1), 1);
    assert_eq!(tally.day_count(1, 1), 2);
    assert_eq!(tally.day_count(2, 1), 0);
    assert_eq!(tally.total_count(1), 3);
    assert_eq!(tally.total_count(2), 1);
    assert_eq!(tally.total_count(99), 0);
}

#[test]
fn test_cancelled_and_unused_are_not_counted() {
    let tally = AppointmentTally::tally(&[vec![
        appointment(1, "Scheduled"),
        appointment(1, "Canceled"),
        appointment(2, "Unused"),
        appointment(3, "Done"),
    ]]);

    assert_eq!(tally.day_count(0, 1), 1);
    assert_eq!(tally.total_count(2), 0);
    assert_eq!(tally.jobs_on_day(0).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_appointments_without_job_are_ignored() {
    let tally = AppointmentTally::tally(&[vec![
        Appointment::new(None, AppointmentStatus::Active),
        Appointment::for_job(7),
    ]]);

    assert_eq!(tally.job_ids().into_iter().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn test_jobs_on_day_is_ascending() {
    let tally = AppointmentTally::tally(&[vec![
        Appointment::for_job(30),
        Appointment::for_job(10),
        Appointment::for_job(20),
    ]]);

    assert_eq!(tally.jobs_on_day(0).collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(tally.jobs_on_day(5).count(), 0);
}

#[test]
fn test_span_and_breakdown() {
    let tally = AppointmentTally::tally(&[
        vec![],
        vec![Appointment::for_job(4)],
        vec![Appointment::for_job(4), Appointment::for_job(4)],
    ]);

    assert_eq!(tally.first_active_day(4), Some(1));
    assert_eq!(tally.days_spanned(4), 2);
    assert_eq!(tally.breakdown(4), vec![(1, 1), (2, 2)]);
    assert_eq!(tally.first_active_day(5), None);
}

proptest! {
    /// Property: a job's window total equals the sum of its per-day counts
    #[test]
    fn test_total_is_sum_of_days(
        days in prop::collection::vec(prop::collection::vec(1i64..6i64, 0..12), 3),
    ) {
        let appointments_by_day: Vec<Vec<Appointment>> = days
            .iter()
            .map(|jobs| jobs.iter().map(|job_id| Appointment::for_job(*job_id)).collect())
            .collect();
        let tally = AppointmentTally::tally(&appointments_by_day);

        for job_id in tally.job_ids() {
            let per_day: u32 = (0..tally.day_len()).map(|day| tally.day_count(day, job_id)).sum();
            prop_assert_eq!(per_day, tally.total_count(job_id));
            prop_assert_eq!(tally.breakdown(job_id).len(), tally.days_spanned(job_id));
        }

        let appointments: usize = days.iter().map(Vec::len).sum();
        let counted: u32 = tally.job_ids().into_iter().map(|job_id| tally.total_count(job_id)).sum();
        prop_assert_eq!(counted as usize, appointments);
    }
}
