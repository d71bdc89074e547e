use anyhow::{Context, Result};
use clap::Parser;
use maturitymap::cli::{Cli, Commands};
use maturitymap::commands::{init, score, stages, validate};
use maturitymap::config::{self, MaturitymapConfig};
use maturitymap::formatting::FormattingConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Score {
            path,
            format,
            output,
            top,
            strict,
        } => {
            let settings = load_settings(cli.config.as_deref())?;
            let score_config = score::ScoreConfig {
                path,
                format,
                output,
                top,
                strict,
                plain: cli.plain,
            };
            score::score_assessment(score_config, &settings)
        }
        Commands::Validate { path, strict } => {
            let settings = load_settings(cli.config.as_deref())?;
            apply_colors(cli.plain, &settings);
            validate::validate_assessment(validate::ValidateConfig { path, strict }, &settings)
        }
        Commands::Stages => {
            let settings = load_settings(cli.config.as_deref())?;
            apply_colors(cli.plain, &settings);
            stages::print_stages()
        }
        Commands::Init { force } => init::init_config(force),
    }
}

/// Log level from `-v` count unless RUST_LOG is set; logs go to stderr
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(explicit: Option<&std::path::Path>) -> Result<MaturitymapConfig> {
    match explicit {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// `--plain` wins; otherwise `[output] color` adjusted by the environment
fn apply_colors(plain: bool, settings: &MaturitymapConfig) {
    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(settings.color_mode())
    };
    formatting.apply();
}
