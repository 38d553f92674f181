use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tautiba_transform::BuildStats;

use crate::pipeline::RunOutcome;

pub fn summary_line(outcome: &RunOutcome) -> String {
    format!(
        "OK: saved {} | triples: {}",
        outcome.output.display(),
        outcome.triples
    )
}

pub fn print_summary(outcome: &RunOutcome, with_stats: bool) {
    println!("{}", summary_line(outcome));
    if with_stats {
        println!("{}", stats_table(&outcome.stats));
    }
}

pub fn stats_table(stats: &BuildStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);

    // (label, count, highlight when non-zero)
    let rows = [
        ("Rows read", stats.rows_read, false),
        ("Observations", stats.observations, false),
        ("Rows dropped", stats.rows_dropped, true),
        ("Area concepts", stats.area_concepts, false),
        ("Ethnicity concepts", stats.ethnicity_concepts, false),
        ("ATVK 2021 concepts", stats.territorial_classifier_concepts, false),
        ("TAUT 2016 concepts", stats.ethnic_classifier_concepts, false),
        ("Identifier collisions", stats.slug_collisions, true),
    ];
    for (label, count, highlight) in rows {
        let mut count_cell = Cell::new(count);
        if highlight && count > 0 {
            count_cell = count_cell.fg(Color::Yellow);
        }
        table.add_row(vec![Cell::new(label), count_cell]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
