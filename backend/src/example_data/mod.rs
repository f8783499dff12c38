//! Optional seeding of the sample directory at startup.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{
    SeedOutcome, StartupSeedingError, parse_fixture, seed_employees, seed_example_data_on_startup,
};
