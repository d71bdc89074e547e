pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

use crate::scoring::MaturityReport;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

/// What sections of the report to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Limit the ranked action list; `None` shows every action
    pub top_actions: Option<usize>,
    pub show_focus_areas: bool,
    pub show_actions: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_actions: Some(10),
            show_focus_areas: true,
            show_actions: true,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &MaturityReport, options: &ReportOptions)
        -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}
