//! End-to-end batching pipeline.
//!
//! A run is one linear pass: validate and group the item records, rank
//! savings, build each order's route against that one ranking, pack orders
//! into batches, score the batches, and balance them across pickers. No
//! retries, no partial recovery — the first failing component aborts the
//! run. All mutable state lives in an explicit per-run context; nothing
//! survives between invocations.

use serde::Serialize;
use tracing::{debug, info};

use crate::assignment::assign_orders;
use crate::constructive::{build_order_route, SavingsRanking};
use crate::distance::DistanceModel;
use crate::error::{BatchingError, Result};
use crate::evaluation::{route_cost, BatchCostEvaluator};
use crate::models::{Batch, Item, Order, Schedule};

/// Tunable parameters of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    /// Number of pickers the batches are balanced across.
    pub num_pickers: usize,
    /// Maximum number of items a batch can hold.
    pub batch_capacity: usize,
}

/// The registries owned by a single run: distance data, the frozen order
/// registry, and the grown batch collection.
#[derive(Debug)]
pub struct RunContext {
    /// Distance data the run was executed against.
    pub distances: DistanceModel,
    /// Orders in ascending id order; position equals id.
    pub orders: Vec<Order>,
    /// Batches in creation order; position equals id.
    pub batches: Vec<Batch>,
}

/// The result record of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Improvement-pass counter; always 0 for this single-pass pipeline.
    pub k: u32,
    /// Final makespan across all pickers.
    pub makespan: f64,
}

/// Everything a completed run produces.
#[derive(Debug)]
pub struct RunOutcome {
    /// The run's registries, returned for inspection.
    pub context: RunContext,
    /// Per-picker batch assignments.
    pub schedule: Schedule,
    /// The persistable result record.
    pub summary: RunSummary,
}

/// Executes the full pipeline over the given item records and distances.
///
/// # Examples
///
/// ```
/// use pickbatch::distance::DistanceModel;
/// use pickbatch::models::Item;
/// use pickbatch::pipeline::{run, RunConfig};
///
/// let distances = DistanceModel::from_points((0.0, 0.0), &[(1.0, 0.0), (2.0, 0.0)]);
/// let items = vec![Item::new(0, 0), Item::new(1, 1)];
/// let config = RunConfig { num_pickers: 2, batch_capacity: 2 };
///
/// let outcome = run(&items, distances, &config).expect("valid instance");
/// assert_eq!(outcome.summary.k, 0);
/// assert!(outcome.summary.makespan > 0.0);
/// ```
pub fn run(items: &[Item], distances: DistanceModel, config: &RunConfig) -> Result<RunOutcome> {
    let groups = group_items(items, distances.num_locations())?;

    let ranking = SavingsRanking::compute(&distances);
    debug!(pairs = ranking.len(), "savings ranking computed");

    // The order registry is populated once, in ascending id order, then
    // frozen; every route is built against the same ranking.
    let mut orders = Vec::with_capacity(groups.len());
    for (id, group) in groups.into_iter().enumerate() {
        let route = build_order_route(&group, &ranking);
        debug!("order {id}: items {:?}, route {route:?}", group);
        orders.push(Order::new(id, group, route));
    }

    let order_ids: Vec<usize> = (0..orders.len()).collect();
    let mut batches = Vec::new();
    assign_orders(
        &order_ids,
        &orders,
        &mut batches,
        config.batch_capacity,
        &distances,
    )?;

    let evaluator = BatchCostEvaluator::new(&orders, &distances);
    log_batches(&batches, &orders, &evaluator, &distances);

    let schedule = crate::scheduling::schedule_batches(config.num_pickers, &batches, &evaluator)?;
    for picker in 0..schedule.num_pickers() {
        let ids: Vec<usize> = schedule
            .picker_batches(picker)
            .iter()
            .map(|j| j.batch_id)
            .collect();
        debug!(
            "picker {picker}: batches {ids:?}, load {:.3}",
            schedule.picker_load(picker)
        );
    }
    info!(makespan = schedule.makespan(), "scheduling complete");

    let summary = RunSummary {
        k: 0,
        makespan: schedule.makespan(),
    };
    Ok(RunOutcome {
        context: RunContext {
            distances,
            orders,
            batches,
        },
        schedule,
        summary,
    })
}

/// Groups item records by order id, validating that ids are dense from 0
/// and every location resolves in the distance model.
fn group_items(items: &[Item], num_locations: usize) -> Result<Vec<Vec<Item>>> {
    if items.is_empty() {
        return Err(BatchingError::Input(
            "orders data contains no items".into(),
        ));
    }

    let num_orders = items.iter().map(|item| item.order_id).max().unwrap_or(0) + 1;
    let mut groups = vec![Vec::new(); num_orders];
    for item in items {
        if item.location >= num_locations {
            return Err(BatchingError::Input(format!(
                "order {} references unknown location {} ({} locations loaded)",
                item.order_id, item.location, num_locations
            )));
        }
        groups[item.order_id].push(*item);
    }

    if let Some(id) = groups.iter().position(|group| group.is_empty()) {
        return Err(BatchingError::Input(format!(
            "order ids are not dense from 0: no items for order {id}"
        )));
    }
    Ok(groups)
}

/// Emits one diagnostic line per batch: its orders, their routes with a
/// `'` marker on reversed traversals, each route's internal cost, and the
/// batch's combined walk cost.
fn log_batches(
    batches: &[Batch],
    orders: &[Order],
    evaluator: &BatchCostEvaluator<'_>,
    distances: &DistanceModel,
) {
    debug!("=== batches ===");
    for batch in batches {
        let mut line = format!("Batch({}): 0,", batch.id());
        for (k, &order_id) in batch.orders().iter().enumerate() {
            let route = orders[order_id].route();
            let marker = if batch.is_order_reversed()[k] { "'" } else { "" };
            line.push_str(&format!(
                " o{order_id}({route:?}){marker}[{:.3}],",
                route_cost(route, distances.matrix())
            ));
        }
        line.push_str(" 0");
        match evaluator.cost_of(batch) {
            Ok(cost) => debug!("{line}, cost [{cost:.3}]"),
            Err(_) => debug!("{line}, cost [?]"),
        }
    }
}
