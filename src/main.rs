use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{self, filter::EnvFilter};

use tslint_to_eslint::config::MigrateConfig;
use tslint_to_eslint::errors::MigrateError;
use tslint_to_eslint::migrate_service::{MigrateOutcome, MigrateService};
use tslint_to_eslint::prompt::ConsolePrompter;
use tslint_to_eslint::rules::catalog::CatalogConverter;
use tslint_to_eslint::rules::converter::RuleConverter;

/// Migrate a TypeScript project's lint setup from TSLint to ESLint
#[derive(Parser, Debug)]
#[command(name = "tslint-to-eslint")]
#[command(about = "Migrate a project's TSLint configuration to ESLint")]
#[command(version)]
struct Args {
    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long = "yes", help = "Assume yes for all confirmation prompts")]
    assume_yes: bool,

    /// Project directory to migrate
    #[arg(
        short = 'd',
        long = "dir",
        help = "Project directory to migrate (default: current directory)",
        value_name = "PATH"
    )]
    dir: Option<PathBuf>,

    /// External rule conversion table (JSON)
    #[arg(
        long = "catalog",
        help = "Path to an external rule conversion table (default: built-in table)",
        value_name = "PATH"
    )]
    catalog: Option<PathBuf>,

    /// Command used to resolve the effective TSLint configuration
    #[arg(
        long = "tslint-bin",
        default_value = "tslint",
        help = "Command used to resolve the effective TSLint configuration",
        value_name = "CMD"
    )]
    tslint_bin: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = create_config_from_args(&args)?;
    tracing::debug!("running with config: {:?}", config);

    let converter: Arc<dyn RuleConverter> = match &config.catalog_path {
        Some(path) => Arc::new(CatalogConverter::from_file(path).await?),
        None => Arc::new(CatalogConverter::builtin()),
    };

    let service = MigrateService::with_config(config, Arc::new(ConsolePrompter), converter);

    match service.run().await {
        Ok(MigrateOutcome::Completed) => {
            println!("Migration complete");
            Ok(())
        }
        Ok(MigrateOutcome::Aborted) => {
            println!("Migration aborted, nothing was written");
            Ok(())
        }
        Err(err @ MigrateError::Precondition { .. }) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

/// Create a MigrateConfig from command line arguments
fn create_config_from_args(args: &Args) -> Result<MigrateConfig> {
    let cwd = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    Ok(MigrateConfig {
        cwd,
        assume_yes: args.assume_yes,
        catalog_path: args.catalog.clone(),
        tslint_command: args.tslint_bin.clone(),
    })
}
