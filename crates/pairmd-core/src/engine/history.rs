use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::simulation::Energies;

/// One recorded state of the simulation.
///
/// A snapshot is an atomic record: positions and velocities are value copies
/// taken at recording time, never live references into the simulation, so an
/// entry is immutable once appended. Keeping every recorded field in a single
/// struct (rather than parallel per-field sequences) makes index-alignment
/// bugs between fields impossible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulation time in femtoseconds.
    pub time: f64,
    /// Position of particle 1 in Angstroms.
    pub position1: Point2<f64>,
    /// Position of particle 2 in Angstroms.
    pub position2: Point2<f64>,
    /// Velocity of particle 1 in Angstroms/fs.
    pub velocity1: Vector2<f64>,
    /// Velocity of particle 2 in Angstroms/fs.
    pub velocity2: Vector2<f64>,
    /// Kinetic, potential, and total energy at recording time.
    pub energies: Energies,
    /// Cumulative wall-collision counts for particles 1 and 2.
    pub wall_collisions: [u64; 2],
}

impl Snapshot {
    /// The inter-particle separation at recording time, in Angstroms.
    pub fn separation(&self) -> f64 {
        (self.position1 - self.position2).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_is_the_distance_between_recorded_positions() {
        let snapshot = Snapshot {
            time: 0.0,
            position1: Point2::new(3.0, 4.0),
            position2: Point2::origin(),
            velocity1: Vector2::zeros(),
            velocity2: Vector2::zeros(),
            energies: Energies {
                kinetic: 0.0,
                potential: 0.0,
                total: 0.0,
            },
            wall_collisions: [0, 0],
        };
        assert!((snapshot.separation() - 5.0).abs() < 1e-12);
    }
}
