//! Result and run-history persistence.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::pipeline::RunSummary;

/// One appended row of run parameters and timing for the per-input
/// run-history file.
///
/// Times are seconds since the Unix epoch.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    /// Seed the run was invoked with (recorded even though the pipeline
    /// itself draws no randomness).
    pub seed: u64,
    /// Path of the orders file.
    pub orders_file: String,
    /// Path of the coordinates file.
    pub coordinates_file: String,
    /// Picker pool size.
    pub num_pickers: usize,
    /// Batch item capacity.
    pub batch_capacity: usize,
    /// Path the result file was written to.
    pub out_file: String,
    /// Wall-clock start of the run.
    pub start_time: f64,
    /// Wall-clock end of the run.
    pub end_time: f64,
    /// `end_time − start_time`.
    pub duration: f64,
}

/// Writes the two-column result file: a `k, Makespan` header and one data
/// row, makespan truncated to an integer.
pub fn write_result_file(path: &Path, summary: &RunSummary) -> Result<()> {
    let content = format!("k, Makespan\n{}, {}\n", summary.k, summary.makespan as i64);
    fs::write(path, content)?;
    Ok(())
}

/// Appends the record to the run-history file, creating it if needed.
///
/// The header row is written only when the file is empty.
pub fn append_run_history(path: &Path, record: &RunRecord) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if file.metadata()?.len() == 0 {
        writeln!(
            file,
            "seed,orders_file,coordinates_file,num_pickers,batch_capacity,out_file,start_time,end_time,duration"
        )?;
    }
    writeln!(
        file,
        "{},{},{},{},{},{},{},{},{}",
        record.seed,
        record.orders_file,
        record.coordinates_file,
        record.num_pickers,
        record.batch_capacity,
        record.out_file,
        record.start_time,
        record.end_time,
        record.duration
    )?;
    Ok(())
}
