//! Keepsake CLI binary.
//!
//! This binary provides command-line access to the local asset store:
//! - Fetch a remote asset into the upload tree
//! - Store a local file as an upload
//! - Remove a stored file
//! - Show the effective configuration

use clap::Parser;
use keepsake_storage::LocalStorage;

mod cli;
mod observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_config, handle_fetch, handle_remove, handle_upload, load_config};
    use observability::{ObservabilityConfig, init_observability};

    // FRONTEND_URL / UPLOAD_DIRECTORY may live in a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut logging = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        logging = logging.with_log_level("debug");
    }
    init_observability(&logging)?;

    let config = load_config(cli.config.as_deref())?;
    let storage = LocalStorage::new(config)?;

    match cli.command {
        Commands::Fetch { url } => handle_fetch(&storage, &url).await?,
        Commands::Upload { file, mimetype } => {
            handle_upload(&storage, &file, mimetype).await?;
        }
        Commands::Remove { path } => handle_remove(&storage, &path).await?,
        Commands::Config => handle_config(storage.config())?,
    }

    Ok(())
}
