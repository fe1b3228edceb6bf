//! # Engine Module
//!
//! The stateful integration layer: everything that advances the two-particle
//! system through time lives here.
//!
//! ## Overview
//!
//! The engine owns the mutable simulation state and drives it with the
//! Velocity Verlet scheme, a symplectic integrator favored for its long-term
//! energy stability over simpler Euler-style methods. One call to
//! [`simulation::Simulation::step`] performs exactly one Verlet update:
//! position update from the stored forces, elastic wall handling, force
//! recomputation at the new positions, then the velocity update from the
//! averaged accelerations.
//!
//! - **Integration** ([`simulation`]) - The Velocity Verlet loop, elastic
//!   wall collisions, energy bookkeeping, and the snapshot history.
//! - **Configuration** ([`config`]) - Validated, builder-constructed run
//!   descriptions consumed by the [`crate::workflows`] layer.
//! - **History** ([`history`]) - Atomic, value-copied trajectory snapshots.
//! - **Diagnostics** ([`diagnostics`]) - Energy-drift reporting; a diagnostic
//!   surfaced to callers, never a failure.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress
//!   reporting for long runs.
//! - **Error Handling** ([`error`]) - Engine-specific error types.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod history;
pub mod progress;
pub mod simulation;
pub mod utils;
