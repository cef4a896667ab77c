use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::info;

use pickbatch::io::{append_run_history, read_coordinates_file, read_orders_file, write_result_file, RunRecord};
use pickbatch::pipeline::{run, RunConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Random seed recorded with the run (the pipeline itself draws no
    /// randomness).
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Orders file: one `order_id,location` item record per line.
    #[arg(short, long)]
    orders_file: PathBuf,

    /// Coordinates file: one `x,y` per line, origin first.
    #[arg(short, long)]
    coordinates_file: PathBuf,

    /// Number of pickers to balance batches across.
    #[arg(short, long, default_value_t = 1)]
    num_pickers: usize,

    /// Maximum number of items a batch can hold.
    #[arg(short, long, default_value_t = 8)]
    batch_capacity: usize,

    /// Result file path (default: `<orders_file>.output.csv`).
    #[arg(long)]
    out_file: Option<PathBuf>,

    /// Enable debug logging of batch contents and picker loads.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let started = Instant::now();
    let start_time = unix_seconds()?;

    let items = read_orders_file(&cli.orders_file)?;
    let distances = read_coordinates_file(&cli.coordinates_file)?;
    let config = RunConfig {
        num_pickers: cli.num_pickers,
        batch_capacity: cli.batch_capacity,
    };

    let outcome = run(&items, distances, &config)?;
    info!(
        "final makespan: {} across {} batches",
        outcome.summary.makespan,
        outcome.context.batches.len()
    );

    let out_file = cli.out_file.clone().unwrap_or_else(|| {
        let mut path = cli.orders_file.clone().into_os_string();
        path.push(".output.csv");
        PathBuf::from(path)
    });
    write_result_file(&out_file, &outcome.summary)?;

    let end_time = unix_seconds()?;
    let record = RunRecord {
        seed: cli.seed,
        orders_file: cli.orders_file.display().to_string(),
        coordinates_file: cli.coordinates_file.display().to_string(),
        num_pickers: cli.num_pickers,
        batch_capacity: cli.batch_capacity,
        out_file: out_file.display().to_string(),
        start_time,
        end_time,
        duration: started.elapsed().as_secs_f64(),
    };
    let mut history = cli.orders_file.into_os_string();
    history.push(".test_runs.txt");
    append_run_history(&PathBuf::from(history), &record)?;

    Ok(())
}

fn unix_seconds() -> anyhow::Result<f64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs_f64())
}
