use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileParticle};
use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use nalgebra::{Point2, Vector2};
use pairmd::engine::config::{
    InitialPlacement, ParticleSpec, SimulationSpec, SimulationSpecBuilder,
};

/// Merges the config file with CLI overrides into a validated core spec.
///
/// Precedence is CLI argument, then config file, then defaults; the same
/// layering applies to every setting.
pub fn build_spec(args: &RunArgs) -> Result<SimulationSpec> {
    let defaults = DefaultsConfig::default();
    let file = FileConfig::from_file(&args.config)?;

    let potential = file.potential.clone().unwrap_or_default();
    let epsilon = potential
        .epsilon
        .ok_or_else(|| CliError::Config("missing required key 'potential.epsilon'".into()))?;
    let sigma = potential
        .sigma
        .ok_or_else(|| CliError::Config("missing required key 'potential.sigma'".into()))?;

    let particles = file.particles.clone().unwrap_or_default();
    let particle_one = particles.one.unwrap_or_default();
    let particle_two = particles.two.unwrap_or_default();

    let placement = resolve_placement(
        args,
        &particle_one,
        &particle_two,
        &file,
        sigma,
        &defaults,
    )?;

    let run_file = file.run.unwrap_or_default();
    let steps = args
        .steps
        .or(run_file.steps)
        .ok_or_else(|| CliError::Config("missing required key 'run.steps'".into()))?;

    let mut builder = SimulationSpecBuilder::new()
        .epsilon(epsilon)
        .sigma(sigma)
        .particle1(particle_spec(&particle_one))
        .particle2(particle_spec(&particle_two))
        .placement(placement)
        .n_steps(steps);

    if let Some(dt) = args.dt.or(run_file.dt) {
        builder = builder.dt(dt);
    }
    if let Some([width, height]) = run_file.box_size {
        builder = builder.box_size(width, height);
    }
    if let Some(interval) = args.record_interval.or(run_file.record_interval) {
        builder = builder.record_interval(interval);
    }

    Ok(builder.build()?)
}

fn particle_spec(file: &FileParticle) -> ParticleSpec {
    let file_defaults = ParticleSpec::default();
    ParticleSpec {
        velocity: file
            .velocity
            .map(|[vx, vy]| Vector2::new(vx, vy))
            .unwrap_or(file_defaults.velocity),
        mass: file.mass.unwrap_or(file_defaults.mass),
        fixed: file.fixed.unwrap_or(file_defaults.fixed),
    }
}

fn resolve_placement(
    args: &RunArgs,
    particle_one: &FileParticle,
    particle_two: &FileParticle,
    file: &FileConfig,
    sigma: f64,
    defaults: &DefaultsConfig,
) -> Result<InitialPlacement> {
    match (particle_one.position, particle_two.position) {
        (Some([x1, y1]), Some([x2, y2])) => {
            if args.seed.is_some() {
                return Err(CliError::Config(
                    "--seed has no effect when both particle positions are explicit".into(),
                ));
            }
            Ok(InitialPlacement::Explicit {
                position1: Point2::new(x1, y1),
                position2: Point2::new(x2, y2),
            })
        }
        (None, None) => {
            let placement_file = file.placement.clone().unwrap_or_default();
            Ok(InitialPlacement::Random {
                seed: args.seed.or(placement_file.seed).unwrap_or(defaults.seed),
                margin: placement_file.margin.unwrap_or(defaults.margin),
                min_separation: placement_file
                    .min_separation
                    .unwrap_or(defaults.min_separation_sigma_factor * sigma),
            })
        }
        _ => Err(CliError::Config(
            "either both particles or neither must specify a position".into(),
        )),
    }
}
