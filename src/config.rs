use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MigrateConfig {
    /// Project directory being migrated (defaults to the current working directory)
    pub cwd: PathBuf,
    /// Answer every confirmation affirmatively without prompting
    pub assume_yes: bool,
    /// Path to an external rule conversion table; `None` uses the built-in table
    pub catalog_path: Option<PathBuf>,
    /// Command used to resolve the effective TSLint configuration
    pub tslint_command: String,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            assume_yes: false,
            catalog_path: None,
            tslint_command: "tslint".to_string(),
        }
    }
}
