use std::collections::{BTreeMap, BTreeSet};

use crate::modules::revenue::models::{Appointment, JobId};

/// Appointment counts per job per day, plus each job's total across the window
///
/// Ordered maps keep iteration deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentTally {
    per_day: Vec<BTreeMap<JobId, u32>>,
    totals: BTreeMap<JobId, u32>,
}

impl AppointmentTally {
    /// Count appointments for each day of the window, in window order
    ///
    /// Appointments without a job are ignored, as are cancelled or unused ones.
    pub fn tally(appointments_by_day: &[Vec<Appointment>]) -> Self {
        let mut per_day = Vec::with_capacity(appointments_by_day.len());
        let mut totals: BTreeMap<JobId, u32> = BTreeMap::new();

        for appointments in appointments_by_day {
            let mut counts: BTreeMap<JobId, u32> = BTreeMap::new();
            for appointment in appointments {
                if !appointment.status.is_counted() {
                    continue;
                }
                let Some(job_id) = appointment.job_id else {
                    continue;
                };
                *counts.entry(job_id).or_insert(0) += 1;
                *totals.entry(job_id).or_insert(0) += 1;
            }
            per_day.push(counts);
        }

        Self { per_day, totals }
    }

    /// Number of days in the tallied window
    pub fn day_len(&self) -> usize {
        self.per_day.len()
    }

    /// Appointments a job has on a day (0 when none)
    pub fn day_count(&self, day_index: usize, job_id: JobId) -> u32 {
        self.per_day
            .get(day_index)
            .and_then(|counts| counts.get(&job_id))
            .copied()
            .unwrap_or(0)
    }

    /// Appointments a job has across the whole window (0 when none)
    pub fn total_count(&self, job_id: JobId) -> u32 {
        self.totals.get(&job_id).copied().unwrap_or(0)
    }

    /// Jobs with at least one appointment on a day, ascending by id
    pub fn jobs_on_day(&self, day_index: usize) -> impl Iterator<Item = JobId> + '_ {
        self.per_day
            .get(day_index)
            .into_iter()
            .flat_map(|counts| counts.keys().copied())
    }

    /// Every job with an appointment somewhere in the window
    pub fn job_ids(&self) -> BTreeSet<JobId> {
        self.totals.keys().copied().collect()
    }

    /// Index of the first day on which the job has appointments
    pub fn first_active_day(&self, job_id: JobId) -> Option<usize> {
        self.per_day
            .iter()
            .position(|counts| counts.contains_key(&job_id))
    }

    /// Number of distinct days on which the job has appointments
    pub fn days_spanned(&self, job_id: JobId) -> usize {
        self.per_day
            .iter()
            .filter(|counts| counts.contains_key(&job_id))
            .count()
    }

    /// `(day_index, count)` for each day the job has appointments
    pub fn breakdown(&self, job_id: JobId) -> Vec<(usize, u32)> {
        self.per_day
            .iter()
            .enumerate()
            .filter_map(|(index, counts)| counts.get(&job_id).map(|count| (index, *count)))
            .collect()
    }
}
