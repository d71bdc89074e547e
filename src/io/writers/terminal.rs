use super::{OutputWriter, ReportOptions};
use crate::scoring::{MaturityReport, MaturityScore, MaturityStage};
use colored::{Color, Colorize};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

const GAUGE_WIDTH: usize = 50;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

type SectionWriter<W> = fn(&mut TerminalWriter<W>, &MaturityReport, &ReportOptions) -> anyhow::Result<()>;

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(
        &mut self,
        report: &MaturityReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        let sections: Vec<SectionWriter<W>> = vec![
            |w, r, _| w.write_header(r),
            |w, r, _| w.write_overall(r),
            |w, r, o| w.write_breakdown(r, o),
            |w, r, _| w.write_stage_distribution(r),
            |w, r, o| w.write_actions(r, o),
        ];

        sections
            .iter()
            .try_for_each(|section| section(self, report, options))
    }
}

/// Terminal color for each stage, from red (Initial) to green (Optimized)
pub fn stage_color(stage: MaturityStage) -> Color {
    match stage {
        MaturityStage::Initial => Color::Red,
        MaturityStage::Developing => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        MaturityStage::Defined => Color::Yellow,
        MaturityStage::Managed => Color::BrightGreen,
        MaturityStage::Optimized => Color::Green,
    }
}

fn colored_score(score: MaturityScore) -> String {
    score.to_string().color(stage_color(score.stage())).bold().to_string()
}

/// Text gauge of the 0-10 scale with a marker at the score
pub fn maturity_gauge(score: MaturityScore, width: usize) -> String {
    let position = (usize::from(score.tenths()) * width / 100).min(width.saturating_sub(1));
    let band_width = width / MaturityStage::ALL.len();
    (0..width)
        .map(|column| {
            if column == position {
                "▲".bold().to_string()
            } else {
                let band = (column / band_width.max(1)).min(MaturityStage::ALL.len() - 1);
                "━".color(stage_color(MaturityStage::ALL[band])).to_string()
            }
        })
        .collect()
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        let title = report.name.as_deref().unwrap_or("MATURITY ASSESSMENT");
        let rule = "═══════════════════════════════════════════".cyan();
        writeln!(self.writer)?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "  {}", title.to_uppercase().bold().cyan())?;
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_overall(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        let stage = report.overall_stage;
        writeln!(
            self.writer,
            "Overall Maturity Score: {} / 10.0",
            colored_score(report.overall)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "  {}", maturity_gauge(report.overall, GAUGE_WIDTH))?;
        let labels: Vec<String> = MaturityStage::ALL
            .iter()
            .map(|stage| format!("{:<10}", stage.name()))
            .collect();
        writeln!(self.writer, "  {}", labels.join("").dimmed())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Current Stage: {}",
            stage.name().color(stage_color(stage)).bold()
        )?;
        writeln!(self.writer, "  {}", stage.description())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(
        &mut self,
        report: &MaturityReport,
        options: &ReportOptions,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Detailed Score Breakdown".bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;

        if report.categories.is_empty() {
            writeln!(self.writer, "  No categories assessed.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Category / Focus Area", "Score", "Stage"]);

        for category in &report.categories {
            table.add_row(vec![
                Cell::new(&category.name).add_attribute(comfy_table::Attribute::Bold),
                Cell::new(category.score).set_alignment(CellAlignment::Right),
                Cell::new(category.stage),
            ]);
            if options.show_focus_areas {
                for focus_area in &category.focus_areas {
                    table.add_row(vec![
                        Cell::new(format!("  {}", focus_area.name)),
                        Cell::new(focus_area.score).set_alignment(CellAlignment::Right),
                        Cell::new(focus_area.stage),
                    ]);
                }
            }
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_stage_distribution(&mut self, report: &MaturityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Stage Distribution (focus areas)".bold())?;
        writeln!(self.writer, "───────────────────────────────────────────")?;
        for (stage, count) in report.stage_distribution.iter() {
            writeln!(
                self.writer,
                "  {:<11} {:>3}  {}",
                stage.name(),
                count.to_string().color(stage_color(stage)),
                stage.range_label().dimmed()
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

        let actions = report.top_actions(options.top_actions);
        writeln!(
            self.writer,
            "{} ({} of {})",
            "Recommended Actions, least mature first".bold(),
            actions.len(),
            report.actions.len()
        )?;
        writeln!(self.writer, "───────────────────────────────────────────")?;

        if actions.is_empty() {
            writeln!(self.writer, "  No recommended actions.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        for (rank, action) in actions.iter().enumerate() {
            writeln!(
                self.writer,
                "{:>3}. [{}] {} {}",
                rank + 1,
                action.score.to_string().color(stage_color(action.stage)).bold(),
                action.id.bold(),
                action.title
            )?;
            writeln!(
                self.writer,
                "     {} / {}  priority {}, severity {}, complexity {}",
                action.category.dimmed(),
                action.focus_area.dimmed(),
                action.priority,
                action.severity,
                action.complexity
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
