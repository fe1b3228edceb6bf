//! # Core Models Module
//!
//! Data structures representing the physical state of the simulated system.
//!
//! The only model is the point particle: the system is explicitly a minimal
//! two-body setup, so there is no notion of molecules, bonds, or atom types
//! here.
//!
//! - [`particle`] - A single point particle with position, velocity, mass,
//!   a transient force accumulator, and an optional fixed-in-space flag.

pub mod particle;
