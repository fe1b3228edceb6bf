//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] and [`crate::engine`]
//! layers together into complete runs.
//!
//! ## Overview
//!
//! A workflow takes a validated run description, builds the system (including
//! seeded random placement when requested), drives the integration loop to
//! completion with progress reporting, and returns everything an external
//! renderer or analysis tool needs: the trajectory history, collision counts,
//! final state, and the energy-drift diagnostic.
//!
//! - **Simulation Workflow** ([`simulate`]) - End-to-end execution of one
//!   two-particle run from a [`crate::engine::config::SimulationSpec`].

pub mod simulate;
