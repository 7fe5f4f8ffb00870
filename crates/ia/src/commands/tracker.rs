//! `ia tracker` command implementation.

use std::path::PathBuf;

use clap::Args;
use ia_dom::{Document, DocumentOptions, MarkupMode};
use ia_elements::{Analytics, Element, RawContentElement};

use super::FormatArg;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tracker command.
#[derive(Args)]
pub(crate) struct TrackerArgs {
    /// URI loaded by the tracking frame.
    #[arg(short, long, default_value = "")]
    source: String,

    /// Inline tracking markup.
    #[arg(long, conflicts_with = "html_file")]
    html: Option<String>,

    /// File containing inline tracking markup.
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: FormatArg,

    /// Insert markup as-is instead of parsing it.
    #[arg(long)]
    verbatim: bool,
}

impl TrackerArgs {
    /// Execute the tracker command.
    ///
    /// # Errors
    ///
    /// Returns an error if `--html-file` cannot be read or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let html = match (self.html, &self.html_file) {
            (Some(html), _) => Some(html),
            (None, Some(path)) => Some(std::fs::read_to_string(path)?),
            (None, None) => None,
        };

        let mut analytics = Analytics::create().with_source(self.source);
        if let Some(html) = html {
            analytics = analytics.attach_raw_markup_text(html);
        }

        if !analytics.is_valid() {
            output.warning("Tracker has no source or markup, rendered as an empty placeholder");
        }

        let document = Document::with_options(DocumentOptions {
            format: self.format.into(),
            markup: if self.verbatim {
                MarkupMode::Verbatim
            } else {
                MarkupMode::Parse
            },
        });
        output.markup(&analytics.render(&document))?;
        Ok(())
    }
}
