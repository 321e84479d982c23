//! CLI error types.

use oohtml_config::ConfigError;
use oohtml_core::HtmlError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Html(#[from] HtmlError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
