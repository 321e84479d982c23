//! `oohtml block` command implementation.

use std::path::PathBuf;

use clap::Args;
use oohtml_config::{CliSettings, Config};
use oohtml_core::BlockLoader;

use crate::error::CliError;
use crate::output::write_document;

/// Arguments for the block command.
#[derive(Args)]
pub(crate) struct BlockArgs {
    /// Path to configuration file (default: auto-discover oohtml.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing block files (overrides config).
    #[arg(short, long)]
    blocks_dir: Option<PathBuf>,

    /// Block name, relative to the blocks directory and without extension.
    name: String,
}

impl BlockArgs {
    /// Execute the block command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the block cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            blocks_dir: self.blocks_dir,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let block = BlockLoader::new(&config.blocks_resolved.dir).load(&self.name)?;
        write_document(block.as_str(), None)?;
        Ok(())
    }
}
