//! Sample directory settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("employee_database.json")
}

/// Controls seeding of the sample directory at startup.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the directory on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Override for the fixture file location.
    pub path: Option<PathBuf>,
}

impl ExampleDataSettings {
    /// Fixture file to read, falling back to the bundled sample directory.
    pub fn fixture_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_fixture_path)
    }
}
