//! Color decisions for terminal output.
//!
//! The configured [`ColorMode`] is the starting point. `NO_COLOR` and
//! `CLICOLOR=0` turn colors off, and `CLICOLOR_FORCE=1` turns them on and
//! wins over both opt-outs.

use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal that is not `TERM=dumb`
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                env::var("TERM").map_or(true, |term| term != "dumb")
                    && std::io::stdout().is_terminal()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env(color: ColorMode) -> Self {
        Self::new(resolve_color(color, |name| env::var(name).ok()))
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Install the decision as the `colored` crate's global override
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

/// Pure function applying the color environment variables to `configured`
fn resolve_color(configured: ColorMode, lookup: impl Fn(&str) -> Option<String>) -> ColorMode {
    if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
        return ColorMode::Always;
    }
    let opted_out =
        lookup("NO_COLOR").is_some() || lookup("CLICOLOR").as_deref() == Some("0");
    if opted_out {
        ColorMode::Never
    } else {
        configured
    }
}
