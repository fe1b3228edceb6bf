use thiserror::Error;

use super::utils::sampling::SamplingError;
use crate::core::forcefield::lennard_jones::PotentialError;
use crate::core::models::particle::ParticleError;

/// Errors produced while constructing or running a simulation.
///
/// The taxonomy is deliberately narrow: the integrator itself is a closed,
/// deterministic numerical kernel with no I/O, so everything here is a
/// construction-time parameter failure. The degenerate-distance case (two
/// coincident particles) is *not* an error; the potential caps it locally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("Box dimensions must be positive and finite, got {width} x {height}")]
    InvalidBoxBounds { width: f64, height: f64 },

    #[error("Record interval must be at least 1")]
    InvalidRecordInterval,

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Particle(#[from] ParticleError),

    #[error(transparent)]
    Potential(#[from] PotentialError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}
