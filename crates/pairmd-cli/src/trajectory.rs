use crate::error::Result;
use pairmd::engine::history::Snapshot;
use std::path::Path;

const HEADER: [&str; 14] = [
    "time_fs",
    "x1",
    "y1",
    "x2",
    "y2",
    "vx1",
    "vy1",
    "vx2",
    "vy2",
    "kinetic",
    "potential",
    "total",
    "wall_collisions_1",
    "wall_collisions_2",
];

/// Writes the recorded trajectory as one flat CSV row per snapshot.
pub fn write_csv(path: &Path, history: &[Snapshot]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for snapshot in history {
        writer.write_record(&[
            snapshot.time.to_string(),
            snapshot.position1.x.to_string(),
            snapshot.position1.y.to_string(),
            snapshot.position2.x.to_string(),
            snapshot.position2.y.to_string(),
            snapshot.velocity1.x.to_string(),
            snapshot.velocity1.y.to_string(),
            snapshot.velocity2.x.to_string(),
            snapshot.velocity2.y.to_string(),
            snapshot.energies.kinetic.to_string(),
            snapshot.energies.potential.to_string(),
            snapshot.energies.total.to_string(),
            snapshot.wall_collisions[0].to_string(),
            snapshot.wall_collisions[1].to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Vector2};
    use pairmd::engine::simulation::Energies;

    fn snapshot(time: f64) -> Snapshot {
        Snapshot {
            time,
            position1: Point2::new(1.0, 2.0),
            position2: Point2::new(3.0, 4.0),
            velocity1: Vector2::new(0.1, 0.2),
            velocity2: Vector2::new(-0.1, 0.0),
            energies: Energies {
                kinetic: 0.5,
                potential: -1.0,
                total: -0.5,
            },
            wall_collisions: [2, 0],
        }
    }

    #[test]
    fn writes_a_header_and_one_row_per_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("traj.csv");

        write_csv(&path, &[snapshot(0.0), snapshot(1.0), snapshot(2.0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("time_fs,x1,y1"));
        assert!(lines[1].starts_with("0,1,2,3,4"));
        assert!(lines[3].starts_with("2,"));
    }

    #[test]
    fn empty_history_writes_only_the_header() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("traj.csv");

        write_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
