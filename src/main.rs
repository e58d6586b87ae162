//! Runs every optimizer on the 2-D sphere function over `[-5, 5]^2`
//! with library defaults and prints the results.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use u_localsearch::objective::sphere;
use u_localsearch::{
    Bounds, HillClimbConfig, HillClimbRunner, RandomSearchConfig, RandomSearchRunner, SaConfig,
    SaRunner,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> u_localsearch::Result<()> {
    let bounds = Bounds::uniform(2, -5.0, 5.0)?;
    tracing::info!(bounds = ?bounds.intervals(), "minimizing sphere");

    println!("Hill Climbing:");
    let (point, value) =
        HillClimbRunner::run(&sphere, &bounds, &HillClimbConfig::default())?.into_pair();
    println!("Solution: {point:?}, Value: {value}");

    println!("\nRandom Local Search:");
    let (point, value) =
        RandomSearchRunner::run(&sphere, &bounds, &RandomSearchConfig::default())?.into_pair();
    println!("Solution: {point:?}, Value: {value}");

    println!("\nSimulated Annealing:");
    let (point, value) = SaRunner::run(&sphere, &bounds, &SaConfig::default())?.into_pair();
    println!("Solution: {point:?}, Value: {value}");

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "optimization failed");
            ExitCode::FAILURE
        }
    }
}
