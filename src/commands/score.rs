use crate::config::MaturitymapConfig;
use crate::dataset;
use crate::formatting::FormattingConfig;
use crate::io::writers::{create_writer, OutputFormat};
use crate::io::{load_assessment, LoadOptions};
use crate::scoring::MaturityReport;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct ScoreConfig {
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub strict: bool,
    pub plain: bool,
}

pub fn score_assessment(config: ScoreConfig, settings: &MaturitymapConfig) -> Result<()> {
    let options = LoadOptions {
        strict: config.strict || settings.strict_loading(),
    };

    let assessment = match &config.path {
        Some(path) => load_assessment(path, options)
            .inspect_err(|err| {
                if err.is_user_fixable() {
                    tracing::warn!(
                        "Run `maturitymap validate {}` to list every problem",
                        path.display()
                    );
                }
            })
            .with_context(|| format!("Failed to load assessment {}", path.display()))?,
        None => {
            tracing::info!("No assessment file given, scoring the built-in diagnostic");
            dataset::builtin_assessment().context("Failed to load the built-in assessment")?
        }
    };

    let report = MaturityReport::build(&assessment);
    tracing::info!(
        overall = %report.overall,
        stage = %report.overall_stage,
        actions = report.actions.len(),
        "Scored assessment"
    );

    let format = config.format.unwrap_or_else(|| settings.output_format());
    formatting_for(&config, settings).apply();
    let report_options = settings.report_options(config.top);

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            create_writer(format, &mut writer).write_report(&report, &report_options)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "Wrote report");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            create_writer(format, &mut handle).write_report(&report, &report_options)?;
            handle.flush()?;
        }
    }

    Ok(())
}

/// Files never get escape codes; otherwise `--plain` or the environment decide
fn formatting_for(config: &ScoreConfig, settings: &MaturitymapConfig) -> FormattingConfig {
    if config.plain || config.output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(settings.color_mode())
    }
}
