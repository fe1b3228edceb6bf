use nalgebra::{Point2, Vector2};

use super::error::EngineError;

/// How the two initial positions are chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialPlacement {
    /// Use these positions exactly.
    Explicit {
        position1: Point2<f64>,
        position2: Point2<f64>,
    },
    /// Draw positions from a seeded RNG, inset from the walls by `margin`
    /// and at least `min_separation` apart (rejection sampling).
    Random {
        seed: u64,
        margin: f64,
        min_separation: f64,
    },
}

/// Initial conditions for one particle (its position comes from the
/// placement, everything else from here).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Initial velocity in Angstroms/fs.
    pub velocity: Vector2<f64>,
    /// Mass in amu.
    pub mass: f64,
    /// Fixed in space for the whole run.
    pub fixed: bool,
}

impl Default for ParticleSpec {
    fn default() -> Self {
        Self {
            velocity: Vector2::zeros(),
            mass: 1.0,
            fixed: false,
        }
    }
}

/// A complete, builder-validated description of one simulation run.
///
/// Field-level validation (positivity of masses, potential parameters, dt,
/// box dimensions) happens in the constructors that consume this spec; the
/// builder only guarantees that nothing required is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSpec {
    /// Lennard-Jones well depth, kcal/mol.
    pub epsilon: f64,
    /// Lennard-Jones zero-crossing distance, Angstroms.
    pub sigma: f64,
    pub particle1: ParticleSpec,
    pub particle2: ParticleSpec,
    pub placement: InitialPlacement,
    /// Box width and height in Angstroms.
    pub box_width: f64,
    pub box_height: f64,
    /// Time step in femtoseconds.
    pub dt: f64,
    /// Number of Velocity Verlet steps to run.
    pub n_steps: usize,
    /// Record a snapshot every this many steps.
    pub record_interval: usize,
}

/// Builder for [`SimulationSpec`].
///
/// Required: `epsilon`, `sigma`, `placement`, `n_steps`. Everything else
/// defaults to a small demonstration setup: unit-mass particles at rest, a
/// 20 x 20 box, dt = 0.001 fs, recording every step.
#[derive(Debug, Default)]
pub struct SimulationSpecBuilder {
    epsilon: Option<f64>,
    sigma: Option<f64>,
    particle1: Option<ParticleSpec>,
    particle2: Option<ParticleSpec>,
    placement: Option<InitialPlacement>,
    box_width: Option<f64>,
    box_height: Option<f64>,
    dt: Option<f64>,
    n_steps: Option<usize>,
    record_interval: Option<usize>,
}

impl SimulationSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }
    pub fn particle1(mut self, spec: ParticleSpec) -> Self {
        self.particle1 = Some(spec);
        self
    }
    pub fn particle2(mut self, spec: ParticleSpec) -> Self {
        self.particle2 = Some(spec);
        self
    }
    pub fn placement(mut self, placement: InitialPlacement) -> Self {
        self.placement = Some(placement);
        self
    }
    pub fn box_size(mut self, width: f64, height: f64) -> Self {
        self.box_width = Some(width);
        self.box_height = Some(height);
        self
    }
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }
    pub fn record_interval(mut self, record_interval: usize) -> Self {
        self.record_interval = Some(record_interval);
        self
    }

    /// # Errors
    ///
    /// Returns [`EngineError::MissingParameter`] naming the first required
    /// field that was never set.
    pub fn build(self) -> Result<SimulationSpec, EngineError> {
        Ok(SimulationSpec {
            epsilon: self
                .epsilon
                .ok_or(EngineError::MissingParameter("epsilon"))?,
            sigma: self.sigma.ok_or(EngineError::MissingParameter("sigma"))?,
            particle1: self.particle1.unwrap_or_default(),
            particle2: self.particle2.unwrap_or_default(),
            placement: self
                .placement
                .ok_or(EngineError::MissingParameter("placement"))?,
            box_width: self.box_width.unwrap_or(20.0),
            box_height: self.box_height.unwrap_or(20.0),
            dt: self.dt.unwrap_or(0.001),
            n_steps: self.n_steps.ok_or(EngineError::MissingParameter("n-steps"))?,
            record_interval: self.record_interval.unwrap_or(1),
        })
    }
}
