use std::io::IsTerminal;
use std::path::Path;

use owo_colors::OwoColorize;

use crate::commands::{load_board, print_json};
use crate::error::Result;
use crate::view::{KanbanLane, build_kanban_lanes};

fn paint(text: &str, color: &str) -> String {
    match color {
        "slate" => text.bright_black().to_string(),
        "amber" => text.yellow().to_string(),
        "rose" => text.red().to_string(),
        "emerald" => text.green().to_string(),
        "sky" => text.cyan().to_string(),
        "violet" => text.magenta().to_string(),
        _ => text.bold().to_string(),
    }
}

/// Render lanes as plain text, one header per lane followed by its items.
pub fn render_lanes(lanes: &[KanbanLane], colored: bool) -> String {
    let mut out = String::new();

    for (index, lane) in lanes.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let header = format!("{} ({})", lane.label, lane.items.len());
        if colored {
            out.push_str(&paint(&header, &lane.color));
        } else {
            out.push_str(&header);
        }
        out.push('\n');

        if lane.items.is_empty() {
            out.push_str("  (empty)\n");
        }
        for item in &lane.items {
            out.push_str(&format!("  - {}\n", item.name));
        }
    }

    out
}

/// Print the board's kanban lanes
pub fn cmd_kanban(file: &Path, json: bool) -> Result<()> {
    let board = load_board(file)?;
    let lanes = build_kanban_lanes(&board);

    if json {
        return print_json(&lanes);
    }

    if lanes.is_empty() {
        println!("No STATUS column on this board; nothing to show as kanban.");
        return Ok(());
    }

    print!("{}", render_lanes(&lanes, std::io::stdout().is_terminal()));
    Ok(())
}
