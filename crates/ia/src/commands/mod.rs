//! CLI command implementations.

mod render;
mod tracker;

use clap::ValueEnum;
use ia_config::TrackerConfig;
use ia_dom::OutputFormat;
use ia_elements::{Analytics, RawContentElement};

pub(crate) use render::RenderArgs;
pub(crate) use tracker::TrackerArgs;

/// `--format` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    /// Self-closing XML output.
    #[default]
    Xml,
    /// HTML5 output.
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Xml => Self::Xml,
            FormatArg::Html => Self::Html,
        }
    }
}

/// Build the tracker element for a configured entry.
pub(crate) fn tracker_element(tracker: &TrackerConfig) -> Analytics {
    let analytics = Analytics::create().with_source(tracker.source.as_str());
    match &tracker.html {
        Some(html) => analytics.attach_raw_markup_text(html.as_str()),
        None => analytics,
    }
}
