use crate::formatting::ColorMode;
use crate::io::writers::{OutputFormat, ReportOptions};
use serde::{Deserialize, Serialize};

/// Root configuration structure for maturitymap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MaturitymapConfig {
    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Report content configuration
    #[serde(default)]
    pub report: Option<ReportConfig>,

    /// Assessment loading configuration
    #[serde(default)]
    pub loading: Option<LoadingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Color mode for terminal output
    #[serde(default)]
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Number of ranked actions to show; 0 shows all
    #[serde(default = "default_top_actions")]
    pub top_actions: usize,

    #[serde(default = "default_true")]
    pub show_focus_areas: bool,

    #[serde(default = "default_true")]
    pub show_actions: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_actions: default_top_actions(),
            show_focus_areas: true,
            show_actions: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoadingConfig {
    /// Reject missing or null collections instead of treating them as empty
    #[serde(default)]
    pub strict: bool,
}

pub fn default_top_actions() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl MaturitymapConfig {
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or_default()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.output
            .as_ref()
            .and_then(|output| output.color)
            .unwrap_or_default()
    }

    pub fn strict_loading(&self) -> bool {
        self.loading.as_ref().is_some_and(|loading| loading.strict)
    }

    /// Report options from the `[report]` section; a CLI `--top` wins over the file
    pub fn report_options(&self, top_override: Option<usize>) -> ReportOptions {
        let report = self.report.clone().unwrap_or_default();
        let top = top_override.unwrap_or(report.top_actions);
        ReportOptions {
            top_actions: (top > 0).then_some(top),
            show_focus_areas: report.show_focus_areas,
            show_actions: report.show_actions,
        }
    }
}
