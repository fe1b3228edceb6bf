use serde::{Deserialize, Serialize};

use super::history::Snapshot;

/// Qualitative verdict on energy conservation over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftRating {
    /// Relative drift below 0.1%.
    Excellent,
    /// Relative drift below 1%.
    Good,
    /// Anything worse; usually means the time step is too large.
    Poor,
}

/// Energy-drift statistics over a recorded trajectory.
///
/// Total energy should be conserved in this microcanonical setup; the drift
/// that remains is integration error, bounded by O(dt²) for Velocity Verlet.
/// Significant drift is a diagnostic for the caller (pick a smaller dt), not
/// an error condition; it is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyDrift {
    /// Total energy of the first recorded snapshot, kcal/mol.
    pub initial_total: f64,
    /// Total energy of the last recorded snapshot, kcal/mol.
    pub final_total: f64,
    /// `final_total − initial_total`, kcal/mol.
    pub drift: f64,
    /// `|drift / initial_total| · 100`.
    pub relative_drift_percent: f64,
}

impl EnergyDrift {
    /// Computes drift statistics from a recorded history.
    ///
    /// Returns `None` when fewer than two snapshots exist, since drift is
    /// meaningless for a trajectory that never advanced.
    pub fn from_history(history: &[Snapshot]) -> Option<Self> {
        if history.len() < 2 {
            return None;
        }
        let initial_total = history.first()?.energies.total;
        let final_total = history.last()?.energies.total;
        let drift = final_total - initial_total;
        let relative_drift_percent = if initial_total != 0.0 {
            (drift / initial_total).abs() * 100.0
        } else {
            0.0
        };
        Some(Self {
            initial_total,
            final_total,
            drift,
            relative_drift_percent,
        })
    }

    pub fn rating(&self) -> DriftRating {
        if self.relative_drift_percent < 0.1 {
            DriftRating::Excellent
        } else if self.relative_drift_percent < 1.0 {
            DriftRating::Good
        } else {
            DriftRating::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulation::Energies;
    use nalgebra::{Point2, Vector2};

    fn snapshot_with_total(time: f64, total: f64) -> Snapshot {
        Snapshot {
            time,
            position1: Point2::origin(),
            position2: Point2::new(5.0, 0.0),
            velocity1: Vector2::zeros(),
            velocity2: Vector2::zeros(),
            energies: Energies {
                kinetic: 0.0,
                potential: total,
                total,
            },
            wall_collisions: [0, 0],
        }
    }

    #[test]
    fn from_history_needs_at_least_two_snapshots() {
        assert_eq!(EnergyDrift::from_history(&[]), None);
        assert_eq!(
            EnergyDrift::from_history(&[snapshot_with_total(0.0, -1.0)]),
            None
        );
    }

    #[test]
    fn drift_is_final_minus_initial() {
        let history = [
            snapshot_with_total(0.0, -2.0),
            snapshot_with_total(1.0, -2.1),
            snapshot_with_total(2.0, -1.99),
        ];
        let report = EnergyDrift::from_history(&history).unwrap();

        assert_eq!(report.initial_total, -2.0);
        assert_eq!(report.final_total, -1.99);
        assert!((report.drift - 0.01).abs() < 1e-12);
        assert!((report.relative_drift_percent - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rating_bands_match_the_relative_drift() {
        let make = |initial: f64, fin: f64| {
            EnergyDrift::from_history(&[
                snapshot_with_total(0.0, initial),
                snapshot_with_total(1.0, fin),
            ])
            .unwrap()
        };

        assert_eq!(make(100.0, 100.05).rating(), DriftRating::Excellent);
        assert_eq!(make(100.0, 100.5).rating(), DriftRating::Good);
        assert_eq!(make(100.0, 105.0).rating(), DriftRating::Poor);
    }

    #[test]
    fn zero_initial_energy_reports_zero_relative_drift() {
        let history = [snapshot_with_total(0.0, 0.0), snapshot_with_total(1.0, 0.1)];
        let report = EnergyDrift::from_history(&history).unwrap();
        assert_eq!(report.relative_drift_percent, 0.0);
    }
}
