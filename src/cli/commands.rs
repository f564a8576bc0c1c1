//! CLI command implementations

use std::path::Path;

use crate::api::ApiServer;
use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::store::MemoryStore;

use super::args::Command;
use super::errors::{CliError, CliErrorCode, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(&config),
    }
}

/// Boot the store from the configured seed and serve the API until shutdown
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load_or_default(config_path)
        .map_err(|e| CliError::new(CliErrorCode::ConfigError, e.to_string()))?;

    let store = match &config.seed_path {
        Some(seed) => {
            let store = MemoryStore::load_seed(seed)
                .map_err(|e| CliError::new(CliErrorCode::SeedError, e.to_string()))?;
            Logger::info(
                "seed_loaded",
                &[
                    ("path", &seed.display().to_string()),
                    ("records", &store.len().to_string()),
                ],
            );
            store
        }
        None => MemoryStore::new(),
    };

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::new(CliErrorCode::ServeFailed, e.to_string()))?;

    runtime
        .block_on(ApiServer::new(store).serve(&config))
        .map_err(|e| CliError::new(CliErrorCode::ServeFailed, e.to_string()))
}
