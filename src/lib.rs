pub mod config;
pub mod errors;
pub mod loader;
pub mod migrate_service;
pub mod prompt;
pub mod rules;
pub mod synthesizer;
pub mod workspace;

// Re-export commonly used types
pub use config::MigrateConfig;
pub use errors::MigrateError;
pub use migrate_service::{MigrateOutcome, MigrateService};
pub use rules::types::*;
