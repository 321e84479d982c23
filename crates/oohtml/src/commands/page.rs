//! `oohtml page` command implementation.

use std::path::PathBuf;

use clap::Args;
use oohtml_config::{CliSettings, Config};
use oohtml_core::{BlockLoader, Context, HtmlError, Raw, Render, tags};

use crate::error::CliError;
use crate::output::{Output, write_document};

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Path to configuration file (default: auto-discover oohtml.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base URL, emitted as `<base href>` (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Directory containing block files (overrides config).
    #[arg(short, long)]
    blocks_dir: Option<PathBuf>,

    /// Page title.
    #[arg(short, long)]
    title: Option<String>,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Blocks to place in the body, in order.
    #[arg(required = true)]
    blocks: Vec<String>,
}

impl PageArgs {
    /// Execute the page command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a block cannot be loaded,
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url,
            blocks_dir: self.blocks_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let loader = BlockLoader::new(&config.blocks_resolved.dir);
        let blocks = self
            .blocks
            .iter()
            .map(|name| loader.load(name))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(blocks = blocks.len(), "Assembling page");
        let html = assemble_page(&config, self.title.as_deref(), blocks)?;
        write_document(&html, self.output.as_deref())?;

        if let Some(path) = &self.output {
            Output::new().success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

/// Render an HTML5 document with `blocks` as the body content.
pub(crate) fn assemble_page(
    config: &Config,
    title: Option<&str>,
    blocks: Vec<Raw>,
) -> Result<String, HtmlError> {
    let context = Context::new().with_base_url(config.base_url().unwrap_or_default());

    let mut head = context.element("head")?;
    head.embed(tags::meta_charset(&config.page.charset))?;
    if let Some(base_url) = context.base_url() {
        head.embed(tags::base(base_url))?;
    }
    if let Some(title) = title {
        head.embed(tags::title(title))?;
    }
    for stylesheet in &config.page.stylesheets {
        head.embed(tags::css_link_all(stylesheet))?;
    }

    let mut body = context.element("body")?;
    body.embed(blocks)?;

    let mut html = context.element("html")?;
    html.set_attribute("lang", config.page.lang.as_str())
        .embed(head)?
        .embed(body)?;

    let mut document = tags::html5_doctype().into_string();
    document.push('\n');
    html.render_to(&mut document);
    Ok(document)
}
