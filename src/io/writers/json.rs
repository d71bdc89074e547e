use super::{OutputWriter, ReportOptions};
use crate::scoring::{ActionScore, CategoryScore, MaturityReport, MaturityScore, MaturityStage, StageDistribution};
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Serialized shape; the breakdown is always complete, only actions are truncated
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    overall: MaturityScore,
    overall_stage: MaturityStage,
    overall_stage_description: &'static str,
    /// Marker position on the 0-10 gauge, in percent
    gauge_position: f64,
    categories: &'a [CategoryScore],
    actions: &'a [ActionScore],
    stage_distribution: &'a StageDistribution,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(
        &mut self,
        report: &MaturityReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let view = JsonReport {
            name: report.name.as_deref(),
            overall: report.overall,
            overall_stage: report.overall_stage,
            overall_stage_description: report.overall_stage.description(),
            gauge_position: report.gauge_position(),
            categories: &report.categories,
            actions: report.top_actions(options.top_actions),
            stage_distribution: &report.stage_distribution,
        };
        serde_json::to_writer_pretty(&mut self.writer, &view)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
