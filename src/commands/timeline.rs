use std::path::Path;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{load_board, print_json};
use crate::error::Result;
use crate::utils::{format_date_only, truncate_string};
use crate::view::{TimelineOptions, build_timeline_entries};

/// A row in the timeline table
#[derive(Tabled)]
struct TimelineRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Offset %")]
    offset: String,
    #[tabled(rename = "Span %")]
    span: String,
}

fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

/// Print timeline entries as a table or JSON
pub fn cmd_timeline(file: &Path, options: TimelineOptions, json: bool) -> Result<()> {
    let board = load_board(file)?;
    let result = build_timeline_entries(&board, &options);

    if json {
        return print_json(&result);
    }

    match result.start_date_column_id.as_deref() {
        Some(start) => println!(
            "Timeline from column '{}' to '{}'\n",
            start,
            result.end_date_column_id.as_deref().unwrap_or(start)
        ),
        None => println!("No DATE column on this board; entries are undated.\n"),
    }

    let rows: Vec<TimelineRow> = result
        .entries
        .iter()
        .map(|entry| TimelineRow {
            item: truncate_string(&entry.item.name, 40),
            start: entry
                .start_date_value
                .as_deref()
                .map(format_date_only)
                .unwrap_or_else(|| "-".to_string()),
            end: entry
                .end_date_value
                .as_deref()
                .map(format_date_only)
                .unwrap_or_else(|| "-".to_string()),
            offset: percent(entry.start_offset_percent),
            span: percent(entry.span_percent),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("\n{} item(s)", result.entries.len());

    Ok(())
}
