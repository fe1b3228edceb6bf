//! # Core Module
//!
//! The fundamental building blocks of the two-particle simulation: the
//! particle state container and the pure mathematics of the pair interaction.
//!
//! ## Overview
//!
//! Everything in this module is stateless with respect to time: no component
//! here knows about time steps, box walls, or trajectory history. Those
//! concerns belong to the [`crate::engine`] layer, which mutates the models
//! defined here.
//!
//! - **Particle state** ([`models`]) - Position, velocity, mass, and the
//!   transient force accumulator for a single point particle.
//! - **Pair interaction** ([`forcefield`]) - The Lennard-Jones 12-6 potential
//!   as a pure function of inter-particle distance or displacement.

pub mod forcefield;
pub mod models;
