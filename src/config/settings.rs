#[derive(Debug, Clone)]
pub struct SimulatorSettings {
    /// Decimal digits the luck rating is rounded to.
    pub luck_precision_digits: u32,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            luck_precision_digits: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepositorySettings {
    /// Directory holding one `<leagueId>-<seasonId>.json` file per season.
    pub league_dir: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            league_dir: "leagues".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub simulator: SimulatorSettings,
    pub repository: RepositorySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            simulator: SimulatorSettings::default(),
            repository: RepositorySettings::default(),
        }
    }
}

// Passed explicitly (dependency injection) rather than held in a global,
// same as the services that consume it.
