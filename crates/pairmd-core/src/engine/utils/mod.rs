//! Utility functions for the engine module.
//!
//! Helpers that support simulation setup but are not part of the integration
//! loop itself.

pub mod sampling;
