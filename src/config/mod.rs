//! Configuration for maturitymap.
//!
//! Settings come from `.maturitymap.toml`, found by walking up from the
//! current directory, or from an explicit `--config` path. Every section is
//! optional and a broken discovered file falls back to defaults with a
//! warning. Command-line flags always win over the file.

mod core;
mod loader;

pub use core::{LoadingConfig, MaturitymapConfig, OutputConfig, ReportConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

/// Contents written by `maturitymap init`
pub const DEFAULT_CONFIG: &str = r#"# maturitymap configuration

[output]
# terminal, json or markdown
format = "terminal"
# auto, always or never
color = "auto"

[report]
# Ranked actions to show; 0 shows all of them
top_actions = 10
show_focus_areas = true
show_actions = true

[loading]
# Fail on missing or null focusAreas / recommendedActions instead of treating them as empty
strict = false
"#;
