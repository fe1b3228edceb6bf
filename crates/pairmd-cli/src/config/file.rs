use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// On-disk shape of a simulation config, TOML with kebab-case keys.
///
/// Every field is optional at the parsing level; required-field and
/// consistency checks happen when the file is merged with the CLI arguments
/// in [`super::build_spec`].
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub potential: Option<FilePotential>,
    pub particles: Option<FileParticles>,
    pub placement: Option<FilePlacement>,
    pub run: Option<FileRun>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePotential {
    /// Well depth in kcal/mol.
    pub epsilon: Option<f64>,
    /// Zero-crossing distance in Angstroms.
    pub sigma: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileParticles {
    pub one: Option<FileParticle>,
    pub two: Option<FileParticle>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileParticle {
    /// Initial position [x, y] in Angstroms. When both particles carry a
    /// position the placement is explicit; when neither does, positions are
    /// drawn from the seeded sampler.
    pub position: Option<[f64; 2]>,
    /// Initial velocity [vx, vy] in Angstroms/fs.
    pub velocity: Option<[f64; 2]>,
    /// Mass in amu.
    pub mass: Option<f64>,
    /// Fix the particle in space for the whole run.
    pub fixed: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePlacement {
    pub seed: Option<u64>,
    /// Inset from the walls when sampling, Angstroms.
    pub margin: Option<f64>,
    /// Minimum initial separation, Angstroms.
    pub min_separation: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRun {
    /// Time step in femtoseconds.
    pub dt: Option<f64>,
    /// Box [width, height] in Angstroms.
    pub box_size: Option<[f64; 2]>,
    /// Number of integration steps.
    pub steps: Option<usize>,
    /// Record a snapshot every this many steps.
    pub record_interval: Option<usize>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading simulation config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParsing {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_a_complete_explicit_config() {
        let file = write_config(
            r#"
            [potential]
            epsilon = 0.238
            sigma = 3.4

            [particles.one]
            position = [5.0, 5.0]
            velocity = [0.02, 0.02]
            mass = 39.948

            [particles.two]
            position = [12.0, 12.0]
            mass = 39.948
            fixed = true

            [run]
            dt = 1.0
            box-size = [20.0, 20.0]
            steps = 5000
            record-interval = 10
            "#,
        );

        let config = FileConfig::from_file(file.path()).unwrap();
        let potential = config.potential.unwrap();
        assert_eq!(potential.epsilon, Some(0.238));
        assert_eq!(potential.sigma, Some(3.4));

        let particles = config.particles.unwrap();
        assert_eq!(particles.one.unwrap().position, Some([5.0, 5.0]));
        assert_eq!(particles.two.as_ref().unwrap().fixed, Some(true));

        let run = config.run.unwrap();
        assert_eq!(run.dt, Some(1.0));
        assert_eq!(run.box_size, Some([20.0, 20.0]));
        assert_eq!(run.steps, Some(5000));
        assert_eq!(run.record_interval, Some(10));
    }

    #[test]
    fn parses_a_random_placement_config() {
        let file = write_config(
            r#"
            [potential]
            epsilon = 1.0
            sigma = 1.0

            [placement]
            seed = 7
            margin = 2.0
            min-separation = 2.0

            [run]
            steps = 100
            "#,
        );

        let config = FileConfig::from_file(file.path()).unwrap();
        let placement = config.placement.unwrap();
        assert_eq!(placement.seed, Some(7));
        assert_eq!(placement.min_separation, Some(2.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config(
            r#"
            [potential]
            epsilon = 1.0
            sigma = 1.0
            cutoff = 2.5
            "#,
        );

        let result = FileConfig::from_file(file.path());
        assert!(matches!(result, Err(CliError::ConfigParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = FileConfig::from_file(Path::new("/nonexistent/sim.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
