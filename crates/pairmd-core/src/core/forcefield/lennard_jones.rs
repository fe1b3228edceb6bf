use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distances below this threshold are treated as the coincident-particle
/// singularity: the potential saturates to +infinity and forces are capped to
/// zero rather than blowing up. Trades physical accuracy at the singularity
/// for numerical stability.
pub const MIN_DISTANCE: f64 = 1e-10;

/// Errors arising from potential construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PotentialError {
    /// The well depth ε must be a positive, finite energy.
    #[error("Lennard-Jones epsilon must be positive and finite, got {0}")]
    NonPositiveEpsilon(f64),
    /// The zero-crossing distance σ must be a positive, finite length.
    #[error("Lennard-Jones sigma must be positive and finite, got {0}")]
    NonPositiveSigma(f64),
}

/// The Lennard-Jones 12-6 pair potential.
///
/// ```text
/// U(r) = 4ε [ (σ/r)¹² − (σ/r)⁶ ]
/// ```
///
/// ε (kcal/mol) sets the depth of the attractive well and σ (Angstroms) the
/// distance at which the potential crosses zero. The minimum value −ε occurs
/// at the equilibrium distance `2^(1/6)·σ`, where the force vanishes.
///
/// Immutable after construction; all evaluation methods are pure,
/// deterministic functions of their numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
}

impl LennardJones {
    /// Creates a Lennard-Jones potential with the given well depth and
    /// zero-crossing distance.
    ///
    /// # Errors
    ///
    /// Returns [`PotentialError`] if either parameter is zero, negative, or
    /// not finite.
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self, PotentialError> {
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(PotentialError::NonPositiveEpsilon(epsilon));
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(PotentialError::NonPositiveSigma(sigma));
        }
        Ok(Self { epsilon, sigma })
    }

    /// The well depth ε in kcal/mol.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The zero-crossing distance σ in Angstroms.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The separation `2^(1/6)·σ` at which the force vanishes and the
    /// potential reaches its minimum −ε.
    #[inline]
    pub fn equilibrium_distance(&self) -> f64 {
        2.0_f64.powf(1.0 / 6.0) * self.sigma
    }

    /// The potential energy at separation `r`, in kcal/mol.
    ///
    /// Returns `+inf` for separations below [`MIN_DISTANCE`].
    pub fn potential(&self, r: f64) -> f64 {
        if r < MIN_DISTANCE {
            return f64::INFINITY;
        }
        let sr6 = (self.sigma / r).powi(6);
        4.0 * self.epsilon * (sr6 * sr6 - sr6)
    }

    /// The radial force magnitude `−dU/dr` at separation `r`.
    ///
    /// ```text
    /// F(r) = 24ε/r [ 2(σ/r)¹² − (σ/r)⁶ ]
    /// ```
    ///
    /// Positive values push the particles apart (repulsion), negative values
    /// pull them together (attraction). Capped to zero below
    /// [`MIN_DISTANCE`], so the coincident configuration produces no force
    /// rather than an infinite one.
    pub fn force_magnitude(&self, r: f64) -> f64 {
        if r < MIN_DISTANCE {
            return 0.0;
        }
        let sr6 = (self.sigma / r).powi(6);
        24.0 * self.epsilon / r * (2.0 * sr6 * sr6 - sr6)
    }

    /// The force vector acting on the particle the displacement points
    /// toward.
    ///
    /// `displacement` is the vector from the partner particle to the particle
    /// of interest; the result is `force_magnitude(r) · displacement / r`.
    /// By Newton's third law the partner feels the negation of this vector;
    /// that negation is the caller's job, not this function's.
    ///
    /// Returns the zero vector for degenerate displacements shorter than
    /// [`MIN_DISTANCE`].
    pub fn force_vector(&self, displacement: &Vector2<f64>) -> Vector2<f64> {
        let r = displacement.norm();
        if r < MIN_DISTANCE {
            return Vector2::zeros();
        }
        self.force_magnitude(r) * (displacement / r)
    }
}
