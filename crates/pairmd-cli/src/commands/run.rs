use crate::cli::RunArgs;
use crate::config;
use crate::error::Result;
use crate::trajectory;
use crate::utils::progress::CliProgressHandler;
use pairmd::engine::diagnostics::DriftRating;
use pairmd::engine::progress::ProgressReporter;
use pairmd::workflows;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    info!("Loading simulation configuration from {:?}", &args.config);
    let spec = config::build_spec(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting two-particle simulation...");
    info!("Invoking the core simulation workflow...");

    let report = workflows::simulate::run(&spec, &reporter)?;

    println!(
        "Simulation complete: {} steps, {:.3} fs simulated, {} snapshot(s) recorded.",
        spec.n_steps,
        report.final_time,
        report.history.len()
    );
    println!(
        "Wall collisions: particle 1 hit {} time(s), particle 2 hit {} time(s).",
        report.wall_collisions[0], report.wall_collisions[1]
    );
    println!(
        "Final energies (kcal/mol): kinetic {:.6}, potential {:.6}, total {:.6}.",
        report.final_energies.kinetic, report.final_energies.potential, report.final_energies.total
    );

    if let Some(drift) = &report.drift {
        let verdict = match drift.rating() {
            DriftRating::Excellent => "excellent energy conservation",
            DriftRating::Good => "good energy conservation",
            DriftRating::Poor => "poor energy conservation; consider a smaller time step",
        };
        println!(
            "Energy drift: {:+.6} kcal/mol ({:.4}%) - {}.",
            drift.drift, drift.relative_drift_percent, verdict
        );
    }

    if let Some(output) = &args.output {
        info!("Writing trajectory to {:?}", output);
        trajectory::write_csv(output, &report.history)?;
        println!("Trajectory written to: {}", output.display());
    }

    Ok(())
}
