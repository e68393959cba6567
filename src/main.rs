use argh::FromArgs;
use lab1_bench_viz::config::{VizConfig, DEFAULT_RESULTS_DIR};
use lab1_bench_viz::driver::run;
use lab1_bench_viz::VizError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Renders charts for the Lab1 benchmark results
#[derive(FromArgs, Debug)]
pub struct Args {
    /// directory holding the per-category results (default: results)
    #[argh(option, short = 'r', default = "PathBuf::from(DEFAULT_RESULTS_DIR)")]
    results_dir: PathBuf,

    /// log debug output
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lab1_bench_viz={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), VizError> {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    let config = VizConfig::new(args.results_dir);
    let reports = run(&config)?;

    println!("Visualization results generated!");
    for report in &reports {
        println!("{} charts: {}", report.category.label, report.viz_dir.display());
    }

    Ok(())
}
