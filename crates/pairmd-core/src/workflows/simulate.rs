use nalgebra::Point2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

use crate::core::forcefield::lennard_jones::LennardJones;
use crate::core::models::particle::Particle;
use crate::engine::config::{InitialPlacement, SimulationSpec};
use crate::engine::diagnostics::EnergyDrift;
use crate::engine::error::EngineError;
use crate::engine::history::Snapshot;
use crate::engine::progress::ProgressReporter;
use crate::engine::simulation::{BoxBounds, Energies, Simulation};
use crate::engine::utils::sampling::sample_separated_positions;

/// Everything a caller needs after a completed run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// The recorded trajectory, one snapshot per recording point.
    pub history: Vec<Snapshot>,
    /// Final wall-collision counts for particles 1 and 2.
    pub wall_collisions: [u64; 2],
    /// Energy breakdown at the final state.
    pub final_energies: Energies,
    /// Elapsed simulation time in femtoseconds.
    pub final_time: f64,
    /// Energy-drift diagnostic; `None` when fewer than two snapshots were
    /// recorded.
    pub drift: Option<EnergyDrift>,
}

/// Builds the two-particle system described by `spec`, runs it to
/// completion, and reports the results.
///
/// # Errors
///
/// Propagates construction failures from the particle, potential, box, and
/// simulation constructors, and sampling failures from random placement.
/// The integration itself cannot fail.
#[instrument(skip_all, name = "simulation_workflow")]
pub fn run(
    spec: &SimulationSpec,
    reporter: &ProgressReporter,
) -> Result<SimulationReport, EngineError> {
    let potential = LennardJones::new(spec.epsilon, spec.sigma)?;
    let bounds = BoxBounds::new(spec.box_width, spec.box_height)?;

    let (position1, position2) = resolve_placement(&spec.placement, &bounds)?;
    info!(
        x1 = position1.x,
        y1 = position1.y,
        x2 = position2.x,
        y2 = position2.y,
        "Resolved initial positions."
    );

    let particle1 = Particle::new(
        position1,
        spec.particle1.velocity,
        spec.particle1.mass,
        spec.particle1.fixed,
    )?;
    let particle2 = Particle::new(
        position2,
        spec.particle2.velocity,
        spec.particle2.mass,
        spec.particle2.fixed,
    )?;

    let mut simulation = Simulation::new(particle1, particle2, potential, bounds, spec.dt)?;

    info!(
        n_steps = spec.n_steps,
        dt = spec.dt,
        record_interval = spec.record_interval,
        "Starting Velocity Verlet integration."
    );
    simulation.run(spec.n_steps, spec.record_interval, reporter)?;

    let drift = EnergyDrift::from_history(simulation.history());
    let wall_collisions = simulation.wall_collisions();
    info!(
        collisions1 = wall_collisions[0],
        collisions2 = wall_collisions[1],
        "Integration finished."
    );
    if let Some(d) = &drift {
        info!(
            relative_drift_percent = d.relative_drift_percent,
            "Energy drift over the run."
        );
    }

    Ok(SimulationReport {
        wall_collisions,
        final_energies: simulation.energies(),
        final_time: simulation.time(),
        drift,
        history: simulation.into_history(),
    })
}

fn resolve_placement(
    placement: &InitialPlacement,
    bounds: &BoxBounds,
) -> Result<(Point2<f64>, Point2<f64>), EngineError> {
    match placement {
        InitialPlacement::Explicit {
            position1,
            position2,
        } => Ok((*position1, *position2)),
        InitialPlacement::Random {
            seed,
            margin,
            min_separation,
        } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            Ok(sample_separated_positions(
                bounds,
                *margin,
                *min_separation,
                &mut rng,
            )?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{ParticleSpec, SimulationSpecBuilder};
    use nalgebra::Vector2;

    fn reduced_spec(n_steps: usize, record_interval: usize) -> SimulationSpec {
        SimulationSpecBuilder::new()
            .epsilon(1.0)
            .sigma(1.0)
            .placement(InitialPlacement::Explicit {
                position1: Point2::new(9.0, 10.0),
                position2: Point2::new(11.0, 10.0),
            })
            .particle1(ParticleSpec {
                velocity: Vector2::new(0.05, 0.0),
                mass: 1.0,
                fixed: false,
            })
            .dt(0.05)
            .n_steps(n_steps)
            .record_interval(record_interval)
            .build()
            .unwrap()
    }

    #[test]
    fn run_produces_the_expected_history_length() {
        let report = run(&reduced_spec(100, 10), &ProgressReporter::new()).unwrap();
        assert_eq!(report.history.len(), 11);
        assert!((report.final_time - 100.0 * 0.05).abs() < 1e-9);
    }

    #[test]
    fn run_is_deterministic_for_a_seeded_random_placement() {
        let spec = SimulationSpecBuilder::new()
            .epsilon(0.238)
            .sigma(3.4)
            .placement(InitialPlacement::Random {
                seed: 42,
                margin: 2.0,
                min_separation: 6.8,
            })
            .dt(1.0)
            .n_steps(50)
            .build()
            .unwrap();

        let first = run(&spec, &ProgressReporter::new()).unwrap();
        let second = run(&spec, &ProgressReporter::new()).unwrap();
        assert_eq!(first.history, second.history);
        assert_eq!(first.wall_collisions, second.wall_collisions);
    }

    #[test]
    fn run_surfaces_a_drift_diagnostic() {
        let report = run(&reduced_spec(100, 1), &ProgressReporter::new()).unwrap();
        let drift = report.drift.expect("two snapshots were recorded");
        assert_eq!(drift.initial_total, report.history[0].energies.total);
        assert_eq!(
            drift.final_total,
            report.history.last().unwrap().energies.total
        );
    }

    #[test]
    fn run_rejects_invalid_potential_parameters() {
        let spec = SimulationSpec {
            epsilon: -1.0,
            ..reduced_spec(10, 1)
        };
        assert!(matches!(
            run(&spec, &ProgressReporter::new()),
            Err(EngineError::Potential(_))
        ));
    }
}
