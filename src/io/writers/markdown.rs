use super::{OutputWriter, ReportOptions};
use crate::scoring::MaturityReport;
use chrono::Utc;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

type SectionWriter<W> = fn(&mut MarkdownWriter<W>, &MaturityReport, &ReportOptions) -> anyhow::Result<()>;

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(
        &mut self,
        report: &MaturityReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let sections: Vec<SectionWriter<W>> = vec![
            |w, r, _| w.write_header(r),
            |w, r, _| w.write_summary(r),
            |w, r, o| w.write_breakdown(r, o),
            |w, r, _| w.write_stage_distribution(r),
            |w, r, o| w.write_actions(r, o),
        ];

        sections
            .iter()
            .try_for_each(|section| section(self, report, options))
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        let title = report.name.as_deref().unwrap_or("Maturity Assessment");
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Executive Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Overall maturity: {} ({})**",
            report.overall, report.overall_stage
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", report.overall_stage.description())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(
        &mut self,
        report: &MaturityReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## Score Breakdown")?;
        writeln!(self.writer)?;

        if report.categories.is_empty() {
            writeln!(self.writer, "_No categories assessed._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Category | Focus Area | Score | Stage |")?;
        writeln!(self.writer, "|----------|------------|-------|-------|")?;
        for category in &report.categories {
            writeln!(
                self.writer,
                "| **{}** | | **{}** | {} |",
                escape_cell(&category.name),
                category.score,
                category.stage
            )?;
            if options.show_focus_areas {
                for focus_area in &category.focus_areas {
                    writeln!(
                        self.writer,
                        "| | {} | {} | {} |",
                        escape_cell(&focus_area.name),
                        focus_area.score,
                        focus_area.stage
                    )?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_stage_distribution(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Stage Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Stage | Range | Focus Areas |")?;
        writeln!(self.writer, "|-------|-------|-------------|")?;
        for (stage, count) in report.stage_distribution.iter() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                stage,
                stage.range_label(),
                count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_actions(
        &mut self,
        report: &MaturityReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        if !options.show_actions {
            return Ok(());
        }

        writeln!(self.writer, "## Recommended Actions")?;
        writeln!(self.writer)?;

        let actions = report.top_actions(options.top_actions);
        if actions.is_empty() {
            writeln!(self.writer, "_No recommended actions._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| # | ID | Action | Focus Area | Priority | Severity | Complexity | Score |"
        )?;
        writeln!(
            self.writer,
            "|---|----|--------|------------|----------|----------|------------|-------|"
        )?;
        for (rank, action) in actions.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                rank + 1,
                escape_cell(&action.id),
                escape_cell(&action.title),
                escape_cell(&action.focus_area),
                action.priority,
                action.severity,
                action.complexity,
                action.score
            )?;
        }
        writeln!(self.writer)?;

        if actions.len() < report.actions.len() {
            writeln!(
                self.writer,
                "_Showing {} of {} actions._",
                actions.len(),
                report.actions.len()
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
