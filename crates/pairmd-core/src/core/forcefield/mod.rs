//! # Force Field Module
//!
//! The pair interaction between the two particles, expressed as pure
//! functions of inter-particle distance or displacement.
//!
//! ## Overview
//!
//! The only interaction model is the Lennard-Jones 12-6 potential, the
//! standard description of a short-range repulsion combined with a
//! longer-range van der Waals attraction:
//!
//! ```text
//! U(r) = 4ε [ (σ/r)¹² − (σ/r)⁶ ]
//! ```
//!
//! The potential is stateless with respect to the particles: it holds only
//! its two parameters (well depth ε, zero-crossing distance σ) and evaluates
//! energy and force from whatever distance it is handed. Newton's third law
//! is the caller's responsibility: [`lennard_jones::LennardJones::force_vector`]
//! returns the force on one particle, and the engine negates it for the
//! partner.
//!
//! - [`lennard_jones`] - Potential energy, force magnitude, and force vector
//!   evaluation, with graceful handling of the `r → 0` singularity.

pub mod lennard_jones;
