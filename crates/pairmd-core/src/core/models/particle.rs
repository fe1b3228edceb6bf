use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising from particle construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParticleError {
    /// Mass must be a positive, finite number.
    #[error("Particle mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),
}

/// A point particle in the 2D simulation.
///
/// A particle has three fundamental properties: where it is (position), how
/// it moves (velocity), and how much it resists acceleration (mass). The
/// force field is transient state: it is overwritten by the simulation at the
/// end of every integration step and holds the most recently computed
/// inter-particle force.
///
/// Units follow molecular-mechanics convention: position in Angstroms,
/// velocity in Angstroms/fs, mass in amu, force in kcal/(mol·Angstrom).
///
/// `position`, `velocity`, and `force` are public fields mutated in place by
/// the owning [`crate::engine::simulation::Simulation`]; mass and the fixed
/// flag are immutable after construction. The fixed-particle invariant (a
/// fixed particle never moves, regardless of applied force) is enforced by
/// the integrator, which skips position and velocity updates for fixed
/// particles, not by these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Current position in Angstroms.
    pub position: Point2<f64>,
    /// Current velocity in Angstroms per femtosecond.
    pub velocity: Vector2<f64>,
    /// Most recently computed force in kcal/(mol·Angstrom). Transient.
    pub force: Vector2<f64>,
    mass: f64,
    is_fixed: bool,
}

impl Particle {
    /// Creates a new particle with the given position, velocity, and mass.
    ///
    /// The force accumulator starts at zero; the simulation fills it in when
    /// it takes ownership of the particle.
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::NonPositiveMass`] if `mass` is zero,
    /// negative, or not finite.
    pub fn new(
        position: Point2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        is_fixed: bool,
    ) -> Result<Self, ParticleError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(ParticleError::NonPositiveMass(mass));
        }
        Ok(Self {
            position,
            velocity,
            force: Vector2::zeros(),
            mass,
            is_fixed,
        })
    }

    /// The particle mass in amu. Always positive.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether the particle is fixed in space.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.is_fixed
    }

    /// The kinetic energy `0.5 · m · v²` in kcal/mol.
    ///
    /// Fixed particles have no kinetic energy, whatever velocity vector they
    /// were constructed with.
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_fixed {
            return 0.0;
        }
        0.5 * self.mass * self.velocity.dot(&self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn new_particle_starts_with_zero_force() {
        let p = Particle::new(
            Point2::new(1.0, 2.0),
            Vector2::new(0.5, -0.5),
            2.0,
            false,
        )
        .unwrap();

        assert_eq!(p.position, Point2::new(1.0, 2.0));
        assert_eq!(p.velocity, Vector2::new(0.5, -0.5));
        assert_eq!(p.force, Vector2::zeros());
        assert_eq!(p.mass(), 2.0);
        assert!(!p.is_fixed());
    }

    #[test]
    fn new_rejects_zero_and_negative_mass() {
        let origin = Point2::origin();
        let at_rest = Vector2::zeros();

        assert_eq!(
            Particle::new(origin, at_rest, 0.0, false),
            Err(ParticleError::NonPositiveMass(0.0))
        );
        assert_eq!(
            Particle::new(origin, at_rest, -1.5, false),
            Err(ParticleError::NonPositiveMass(-1.5))
        );
    }

    #[test]
    fn new_rejects_non_finite_mass() {
        let origin = Point2::origin();
        let at_rest = Vector2::zeros();

        assert!(Particle::new(origin, at_rest, f64::NAN, false).is_err());
        assert!(Particle::new(origin, at_rest, f64::INFINITY, false).is_err());
    }

    #[test]
    fn kinetic_energy_of_moving_particle() {
        // KE = 0.5 * 2.0 * (3^2 + 4^2) = 25.0
        let p = Particle::new(Point2::origin(), Vector2::new(3.0, 4.0), 2.0, false).unwrap();
        assert!(f64_approx_equal(p.kinetic_energy(), 25.0));
    }

    #[test]
    fn kinetic_energy_of_stationary_particle_is_zero() {
        let p = Particle::new(Point2::origin(), Vector2::zeros(), 5.0, false).unwrap();
        assert!(f64_approx_equal(p.kinetic_energy(), 0.0));
    }

    #[test]
    fn fixed_particle_has_zero_kinetic_energy_despite_velocity() {
        let p = Particle::new(Point2::origin(), Vector2::new(10.0, 10.0), 1.0, true).unwrap();
        assert!(f64_approx_equal(p.kinetic_energy(), 0.0));
    }

    #[test]
    fn position_velocity_and_force_are_mutable_in_place() {
        let mut p = Particle::new(Point2::origin(), Vector2::zeros(), 1.0, false).unwrap();

        p.position = Point2::new(5.0, 6.0);
        p.velocity = Vector2::new(-1.0, 1.0);
        p.force = Vector2::new(0.25, 0.0);

        assert_eq!(p.position, Point2::new(5.0, 6.0));
        assert_eq!(p.velocity, Vector2::new(-1.0, 1.0));
        assert_eq!(p.force, Vector2::new(0.25, 0.0));
    }
}
