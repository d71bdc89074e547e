use crate::io::writers::terminal::stage_color;
use crate::scoring::MaturityStage;
use anyhow::Result;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

pub fn print_stages() -> Result<()> {
    println!("{}", stages_table());
    Ok(())
}

pub fn stages_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Stage", "Score Range", "Description"]);
    for stage in MaturityStage::ALL {
        table.add_row(vec![
            stage.name().color(stage_color(stage)).bold().to_string(),
            stage.range_label().to_string(),
            stage.description().to_string(),
        ]);
    }
    table
}
