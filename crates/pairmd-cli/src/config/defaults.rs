/// Fallback values for settings omitted from both the config file and the
/// command line. The separation floor is expressed as a multiple of sigma,
/// keeping randomly placed particles out of the repulsive core whatever the
/// potential's length scale.
pub struct DefaultsConfig {
    pub seed: u64,
    pub margin: f64,
    pub min_separation_sigma_factor: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            margin: 2.0,
            min_separation_sigma_factor: 2.0,
        }
    }
}
