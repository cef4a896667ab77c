//! LPT (Longest-Processing-Time-first) list scheduling.
//!
//! # Algorithm
//!
//! 1. Evaluate each batch's combined walk cost — its processing time.
//! 2. Sort batches by duration descending; the sort is stable, so equal
//!    durations keep their original relative order.
//! 3. Assign each batch to the picker currently holding the minimum load,
//!    lowest picker index on ties, and add its duration to that load.
//!
//! # Guarantee
//!
//! Graham (1969): the resulting makespan is at most
//! (4/3 − 1/(3m)) × optimal on m identical machines. The heuristic is
//! deliberately not exact — its ordering and tie-break rules are part of
//! the observable contract and must not be "corrected" towards optimality.
//!
//! # Complexity
//!
//! O(n log n + n·m) for n batches and m pickers.
//!
//! # Reference
//!
//! Graham, R.L. (1969). "Bounds on Multiprocessing Timing Anomalies",
//! *SIAM Journal on Applied Mathematics* 17(2), 416-429.

use crate::error::{BatchingError, Result};
use crate::evaluation::BatchCostEvaluator;
use crate::models::{Batch, Schedule, ScheduledBatch};

/// Distributes batches across `num_pickers` pickers, scoring each batch
/// with the given evaluator first.
///
/// # Errors
///
/// [`BatchingError::InvalidConfiguration`] when `num_pickers` is zero;
/// any cost evaluation failure propagates unchanged.
pub fn schedule_batches(
    num_pickers: usize,
    batches: &[Batch],
    evaluator: &BatchCostEvaluator<'_>,
) -> Result<Schedule> {
    let mut jobs = Vec::with_capacity(batches.len());
    for batch in batches {
        jobs.push(ScheduledBatch::new(batch.id(), evaluator.cost_of(batch)?));
    }
    schedule_jobs(num_pickers, jobs)
}

/// LPT list scheduling over pre-scored jobs.
///
/// # Examples
///
/// ```
/// use pickbatch::models::ScheduledBatch;
/// use pickbatch::scheduling::schedule_jobs;
///
/// let jobs = vec![
///     ScheduledBatch::new(0, 10.0),
///     ScheduledBatch::new(1, 7.0),
///     ScheduledBatch::new(2, 7.0),
/// ];
/// let schedule = schedule_jobs(2, jobs).expect("positive picker count");
/// assert_eq!(schedule.makespan(), 14.0);
/// ```
pub fn schedule_jobs(num_pickers: usize, mut jobs: Vec<ScheduledBatch>) -> Result<Schedule> {
    if num_pickers == 0 {
        return Err(BatchingError::InvalidConfiguration);
    }

    // Stable sort: equal durations keep their original batch order.
    jobs.sort_by(|a, b| {
        b.duration
            .partial_cmp(&a.duration)
            .expect("batch durations should not be NaN")
    });

    let mut schedule = Schedule::new(num_pickers);
    for job in jobs {
        let picker = schedule.least_loaded_picker();
        schedule.assign(picker, job);
    }
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceModel;
    use crate::models::{Item, Order};
    use proptest::prelude::*;

    fn jobs_from(durations: &[f64]) -> Vec<ScheduledBatch> {
        durations
            .iter()
            .enumerate()
            .map(|(k, &d)| ScheduledBatch::new(k, d))
            .collect()
    }

    /// Exact minimum makespan by enumerating every assignment.
    fn brute_force_makespan(durations: &[f64], num_pickers: usize) -> f64 {
        let mut best = f64::INFINITY;
        let total = num_pickers.pow(durations.len() as u32);
        for assignment in 0..total {
            let mut loads = vec![0.0; num_pickers];
            let mut code = assignment;
            for &d in durations {
                loads[code % num_pickers] += d;
                code /= num_pickers;
            }
            let makespan = loads.iter().copied().fold(0.0, f64::max);
            if makespan < best {
                best = makespan;
            }
        }
        best
    }

    #[test]
    fn test_zero_pickers_rejected() {
        let err = schedule_jobs(0, jobs_from(&[1.0])).unwrap_err();
        assert!(matches!(err, BatchingError::InvalidConfiguration));
    }

    #[test]
    fn test_single_picker_gets_everything() {
        let schedule = schedule_jobs(1, jobs_from(&[4.0, 2.0, 6.0])).expect("valid");
        assert_eq!(schedule.makespan(), 12.0);
        assert_eq!(schedule.picker_batches(0).len(), 3);
    }

    #[test]
    fn test_no_batches_yields_zero_makespan() {
        let schedule = schedule_jobs(3, Vec::new()).expect("valid");
        assert_eq!(schedule.makespan(), 0.0);
    }

    #[test]
    fn test_lpt_balances_ten_seven_seven() {
        // 10 goes alone; the two 7s share the other picker.
        let schedule = schedule_jobs(2, jobs_from(&[10.0, 7.0, 7.0])).expect("valid");
        assert_eq!(schedule.makespan(), 14.0);
        assert_eq!(schedule.picker_batches(0).len(), 1);
        assert_eq!(schedule.picker_batches(0)[0].batch_id, 0);
        assert_eq!(schedule.picker_batches(1).len(), 2);
    }

    #[test]
    fn test_equal_durations_keep_batch_order() {
        let schedule = schedule_jobs(2, jobs_from(&[5.0, 5.0, 5.0])).expect("valid");
        // Stable sort keeps 0, 1, 2; min-load ties go to the lowest index:
        // 0 → picker 0, 1 → picker 1, 2 → picker 0.
        let p0: Vec<usize> = schedule
            .picker_batches(0)
            .iter()
            .map(|j| j.batch_id)
            .collect();
        let p1: Vec<usize> = schedule
            .picker_batches(1)
            .iter()
            .map(|j| j.batch_id)
            .collect();
        assert_eq!(p0, vec![0, 2]);
        assert_eq!(p1, vec![1]);
        assert_eq!(schedule.makespan(), 10.0);
    }

    #[test]
    fn test_schedule_batches_scores_with_evaluator() {
        // Two locations at x = 1 and x = 3: out-and-back walks of 2 and 6.
        let distances = DistanceModel::from_points((0.0, 0.0), &[(1.0, 0.0), (3.0, 0.0)]);
        let orders = vec![
            Order::new(0, vec![Item::new(0, 0)], vec![0]),
            Order::new(1, vec![Item::new(1, 1)], vec![1]),
        ];
        let mut batches = Vec::new();
        crate::assignment::assign_orders(&[0, 1], &orders, &mut batches, 1, &distances)
            .expect("orders fit");
        let evaluator = BatchCostEvaluator::new(&orders, &distances);

        let schedule = schedule_batches(2, &batches, &evaluator).expect("valid");
        // Each batch on its own picker; the longer walk sets the makespan.
        assert!((schedule.makespan() - 6.0).abs() < 1e-10);
        // LPT considers batch 1 (duration 6) first.
        assert_eq!(schedule.picker_batches(0)[0].batch_id, 1);
    }

    #[test]
    fn test_empty_batch_failure_propagates() {
        let distances = DistanceModel::from_points((0.0, 0.0), &[(1.0, 0.0)]);
        let orders: Vec<Order> = Vec::new();
        let evaluator = BatchCostEvaluator::new(&orders, &distances);
        let batches = vec![Batch::new(0, 4)];
        let err = schedule_batches(1, &batches, &evaluator).unwrap_err();
        assert!(matches!(err, BatchingError::EmptyBatch));
    }

    proptest! {
        #[test]
        fn test_makespan_bounds(
            durations in proptest::collection::vec(0.0f64..100.0, 1..=6),
            num_pickers in 1usize..=3,
        ) {
            let schedule = schedule_jobs(num_pickers, jobs_from(&durations))
                .expect("positive picker count");
            let makespan = schedule.makespan();

            let longest = durations.iter().copied().fold(0.0, f64::max);
            let optimal = brute_force_makespan(&durations, num_pickers);
            let graham = 4.0 / 3.0 - 1.0 / (3.0 * num_pickers as f64);

            prop_assert!(makespan >= longest - 1e-9);
            prop_assert!(makespan >= optimal - 1e-9);
            prop_assert!(makespan <= graham * optimal + 1e-9);
        }

        #[test]
        fn test_single_picker_makespan_is_total(
            durations in proptest::collection::vec(0.0f64..100.0, 0..=8),
        ) {
            let schedule = schedule_jobs(1, jobs_from(&durations))
                .expect("positive picker count");
            let total: f64 = durations.iter().sum();
            prop_assert!((schedule.makespan() - total).abs() < 1e-6);
        }
    }
}
