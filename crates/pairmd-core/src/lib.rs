//! # pairmd Core Library
//!
//! A minimal two-particle molecular dynamics kernel: two point particles in a
//! bounded 2D box, interacting through a Lennard-Jones pair potential and
//! integrated forward in time with the Velocity Verlet scheme. Wall collisions
//! are perfectly elastic, so total energy is conserved up to integration error.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict direction of
//! dependency, to keep the numerical kernel pure and independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models ([`core::models::particle::Particle`])
//!   and the pure mathematics of the pair interaction
//!   ([`core::forcefield::lennard_jones::LennardJones`]).
//!
//! - **[`engine`]: The Integrator.** The stateful [`engine::simulation::Simulation`]
//!   owns both particles and the potential, performs the Velocity Verlet step,
//!   applies the elastic wall rule, and records an append-only snapshot
//!   history. Energy-drift diagnostics and seeded initial placement live here
//!   as well.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry point: build a
//!   simulation from a validated [`engine::config::SimulationSpec`], run it to
//!   completion with progress reporting, and hand back a
//!   [`workflows::simulate::SimulationReport`] for external rendering.
//!
//! Units follow molecular-mechanics convention and are not dimension-checked:
//! length in Angstroms, time in femtoseconds, mass in atomic mass units,
//! energy in kcal/mol.

pub mod core;
pub mod engine;
pub mod workflows;
