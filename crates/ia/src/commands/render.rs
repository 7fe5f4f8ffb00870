//! `ia render` command implementation.

use std::path::PathBuf;

use clap::Args;
use ia_config::{CliSettings, Config};
use ia_dom::{Document, MarkupMode};
use ia_elements::Element;

use super::{FormatArg, tracker_element};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover ia.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Insert tracker markup as-is instead of parsing it (overrides config).
    #[arg(long)]
    verbatim: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            format: self.format.map(Into::into),
            markup: self.verbatim.then_some(MarkupMode::Verbatim),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.warning("No ia.toml found, nothing to render"),
        }

        let mut document = Document::with_options(config.render.document_options());
        for (index, tracker) in config.trackers_resolved.iter().enumerate() {
            let analytics = tracker_element(tracker);
            if !analytics.is_valid() {
                output.warning(&format!(
                    "trackers[{index}] has no source or markup, rendered as an empty placeholder"
                ));
            }
            let node = analytics.to_node(&document);
            document.append(node);
        }

        tracing::info!(
            trackers = config.trackers_resolved.len(),
            "Rendered trackers"
        );
        output.markup(&document.to_markup())?;
        Ok(())
    }
}
