//! Schedule (run output) types.

use serde::Serialize;

/// A batch placed on a picker, with its evaluated walk duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledBatch {
    /// Id of the scheduled batch.
    pub batch_id: usize,
    /// The batch's combined route cost, used as its processing time.
    pub duration: f64,
}

impl ScheduledBatch {
    /// Creates a scheduled batch entry.
    pub fn new(batch_id: usize, duration: f64) -> Self {
        Self { batch_id, duration }
    }
}

/// The per-picker assignment lists produced by scheduling, plus each
/// picker's accumulated load.
///
/// # Examples
///
/// ```
/// use pickbatch::models::{Schedule, ScheduledBatch};
///
/// let mut schedule = Schedule::new(2);
/// schedule.assign(0, ScheduledBatch::new(0, 10.0));
/// schedule.assign(1, ScheduledBatch::new(1, 7.0));
/// assert_eq!(schedule.makespan(), 10.0);
/// assert_eq!(schedule.picker_load(1), 7.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    assignments: Vec<Vec<ScheduledBatch>>,
    loads: Vec<f64>,
}

impl Schedule {
    /// Creates an empty schedule for the given number of pickers.
    pub fn new(num_pickers: usize) -> Self {
        Self {
            assignments: vec![Vec::new(); num_pickers],
            loads: vec![0.0; num_pickers],
        }
    }

    /// Appends a batch to a picker's list and accumulates its load.
    ///
    /// # Panics
    ///
    /// Panics if `picker` is out of range.
    pub fn assign(&mut self, picker: usize, batch: ScheduledBatch) {
        self.loads[picker] += batch.duration;
        self.assignments[picker].push(batch);
    }

    /// Number of pickers in this schedule.
    pub fn num_pickers(&self) -> usize {
        self.assignments.len()
    }

    /// The picker's assigned batches, in assignment order.
    pub fn picker_batches(&self, picker: usize) -> &[ScheduledBatch] {
        &self.assignments[picker]
    }

    /// The picker's accumulated load.
    pub fn picker_load(&self, picker: usize) -> f64 {
        self.loads[picker]
    }

    /// Index of the picker currently holding the minimum load.
    ///
    /// Ties resolve to the lowest picker index.
    pub fn least_loaded_picker(&self) -> usize {
        let mut picker = 0;
        for p in 1..self.loads.len() {
            if self.loads[p] < self.loads[picker] {
                picker = p;
            }
        }
        picker
    }

    /// The maximum completion time across all pickers.
    pub fn makespan(&self) -> f64 {
        self.loads.iter().copied().fold(0.0, f64::max)
    }
}
