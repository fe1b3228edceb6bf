use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::EngineError;
use super::history::Snapshot;
use super::progress::{Progress, ProgressReporter};
use crate::core::forcefield::lennard_jones::LennardJones;
use crate::core::models::particle::Particle;

/// The rectangular simulation region: `x ∈ [0, width]`, `y ∈ [0, height]`,
/// both in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxBounds {
    width: f64,
    height: f64,
}

impl BoxBounds {
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBoxBounds`] unless both dimensions are
    /// positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self, EngineError> {
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(EngineError::InvalidBoxBounds { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// The energy breakdown of the current system state, in kcal/mol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energies {
    /// Sum of both particles' kinetic energy.
    pub kinetic: f64,
    /// Lennard-Jones potential energy at the current separation.
    pub potential: f64,
    /// `kinetic + potential`. Conserved up to integration error.
    pub total: f64,
}

/// A two-particle molecular dynamics simulation in a 2D box.
///
/// The simulation owns both particles and the potential for its whole
/// lifetime, which is the ownership expression of "exclusively referenced":
/// nothing else can observe or mutate the particles mid-step. It advances
/// with the Velocity Verlet algorithm:
///
/// 1. `r(t+dt) = r(t) + v(t)·dt + ½·a(t)·dt²`
/// 2. recompute forces at the new positions
/// 3. `v(t+dt) = v(t) + ½·[a(t) + a(t+dt)]·dt`
///
/// Wall collisions are perfectly elastic: the velocity component normal to
/// the wall is reflected, preserving speed and therefore kinetic energy, so
/// total energy is conserved up to the O(dt²) error of the integrator.
///
/// Single-threaded by construction: `step` and `run` execute to completion
/// without yielding, and exclusive ownership means a `Simulation` value is
/// only ever touched by one thread at a time. Independent instances share
/// nothing and may run concurrently.
#[derive(Debug, Clone)]
pub struct Simulation {
    particle1: Particle,
    particle2: Particle,
    potential: LennardJones,
    bounds: BoxBounds,
    dt: f64,
    time: f64,
    wall_collisions: [u64; 2],
    history: Vec<Snapshot>,
}

impl Simulation {
    /// Creates a simulation and computes the initial forces on both
    /// particles, so [`Simulation::energies`] is valid immediately, before
    /// any step.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeStep`] unless `dt` is positive and
    /// finite. Particle, potential, and box validation happen in their own
    /// constructors.
    pub fn new(
        particle1: Particle,
        particle2: Particle,
        potential: LennardJones,
        bounds: BoxBounds,
        dt: f64,
    ) -> Result<Self, EngineError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(EngineError::InvalidTimeStep(dt));
        }

        let mut sim = Self {
            particle1,
            particle2,
            potential,
            bounds,
            dt,
            time: 0.0,
            wall_collisions: [0, 0],
            history: Vec::new(),
        };
        sim.compute_forces();

        debug!(
            dt = sim.dt,
            width = sim.bounds.width(),
            height = sim.bounds.height(),
            "Initialized two-particle simulation."
        );
        Ok(sim)
    }

    /// Recomputes the pair forces from the current positions.
    ///
    /// Newton's third law is enforced structurally: the force on particle 1
    /// is evaluated once and particle 2 receives its negation. It is never
    /// computed independently per particle.
    fn compute_forces(&mut self) {
        let displacement = self.particle1.position - self.particle2.position;
        let force_on_1 = self.potential.force_vector(&displacement);
        self.particle1.force = force_on_1;
        self.particle2.force = -force_on_1;
    }

    /// Clamps a particle back inside the box and reflects the offending
    /// velocity components.
    ///
    /// Both axes are checked independently in the same call, so a corner hit
    /// reflects both components at once. The collision counter increments by
    /// exactly 1 per step in which at least one wall was hit; a corner hit
    /// counts as a single collision event.
    fn reflect_off_walls(bounds: &BoxBounds, particle: &mut Particle, counter: &mut u64) {
        if particle.is_fixed() {
            return;
        }

        let mut collided = false;

        if particle.position.x <= 0.0 {
            particle.position.x = 0.0;
            particle.velocity.x = particle.velocity.x.abs();
            collided = true;
        } else if particle.position.x >= bounds.width() {
            particle.position.x = bounds.width();
            particle.velocity.x = -particle.velocity.x.abs();
            collided = true;
        }

        if particle.position.y <= 0.0 {
            particle.position.y = 0.0;
            particle.velocity.y = particle.velocity.y.abs();
            collided = true;
        } else if particle.position.y >= bounds.height() {
            particle.position.y = bounds.height();
            particle.velocity.y = -particle.velocity.y.abs();
            collided = true;
        }

        if collided {
            *counter += 1;
        }
    }

    /// Advances the system by one Velocity Verlet step.
    ///
    /// Fixed particles skip the position and velocity updates entirely; the
    /// forces on them are still computed and stored, they just never act.
    pub fn step(&mut self) {
        let dt = self.dt;

        // Accelerations from the forces stored at the end of the previous
        // step (or at construction).
        let old_accel1 = self.particle1.force / self.particle1.mass();
        let old_accel2 = self.particle2.force / self.particle2.mass();

        if !self.particle1.is_fixed() {
            self.particle1.position +=
                self.particle1.velocity * dt + 0.5 * old_accel1 * dt * dt;
        }
        if !self.particle2.is_fixed() {
            self.particle2.position +=
                self.particle2.velocity * dt + 0.5 * old_accel2 * dt * dt;
        }

        Self::reflect_off_walls(&self.bounds, &mut self.particle1, &mut self.wall_collisions[0]);
        Self::reflect_off_walls(&self.bounds, &mut self.particle2, &mut self.wall_collisions[1]);

        self.compute_forces();

        let new_accel1 = self.particle1.force / self.particle1.mass();
        let new_accel2 = self.particle2.force / self.particle2.mass();

        if !self.particle1.is_fixed() {
            self.particle1.velocity += 0.5 * (old_accel1 + new_accel1) * dt;
        }
        if !self.particle2.is_fixed() {
            self.particle2.velocity += 0.5 * (old_accel2 + new_accel2) * dt;
        }

        self.time += dt;
    }

    /// The current kinetic, potential, and total energy.
    ///
    /// Recomputed from the current state on every call, never cached, so two
    /// calls without an intervening step return identical values.
    pub fn energies(&self) -> Energies {
        let kinetic = self.particle1.kinetic_energy() + self.particle2.kinetic_energy();
        let separation = (self.particle1.position - self.particle2.position).norm();
        let potential = self.potential.potential(separation);
        Energies {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }

    fn record_state(&mut self) {
        let energies = self.energies();
        self.history.push(Snapshot {
            time: self.time,
            position1: self.particle1.position,
            position2: self.particle2.position,
            velocity1: self.particle1.velocity,
            velocity2: self.particle2.velocity,
            energies,
            wall_collisions: self.wall_collisions,
        });
    }

    /// Runs `n_steps` integration steps, appending a snapshot of the current
    /// state before the first step and after every `record_interval`-th step
    /// thereafter.
    ///
    /// With `record_interval = 1` every step is recorded, giving
    /// `n_steps + 1` history entries (and in general `n_steps / record_interval + 1`
    /// when `n_steps` is a multiple of the interval).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecordInterval`] if `record_interval`
    /// is zero.
    pub fn run(
        &mut self,
        n_steps: usize,
        record_interval: usize,
        reporter: &ProgressReporter,
    ) -> Result<(), EngineError> {
        if record_interval == 0 {
            return Err(EngineError::InvalidRecordInterval);
        }

        self.record_state();
        reporter.report(Progress::TaskStart {
            total_steps: n_steps as u64,
        });

        for step in 0..n_steps {
            self.step();
            if (step + 1) % record_interval == 0 {
                self.record_state();
            }
            reporter.report(Progress::TaskIncrement);
        }

        reporter.report(Progress::TaskFinish);
        Ok(())
    }

    #[inline]
    pub fn particle1(&self) -> &Particle {
        &self.particle1
    }

    #[inline]
    pub fn particle2(&self) -> &Particle {
        &self.particle2
    }

    #[inline]
    pub fn potential(&self) -> &LennardJones {
        &self.potential
    }

    #[inline]
    pub fn bounds(&self) -> &BoxBounds {
        &self.bounds
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Elapsed simulation time in femtoseconds. Monotonically non-negative.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Cumulative wall-collision counts for particles 1 and 2.
    #[inline]
    pub fn wall_collisions(&self) -> [u64; 2] {
        self.wall_collisions
    }

    /// The recorded trajectory so far.
    #[inline]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Consumes the simulation, handing the recorded trajectory to the
    /// caller without a copy.
    pub fn into_history(self) -> Vec<Snapshot> {
        self.history
    }
}
