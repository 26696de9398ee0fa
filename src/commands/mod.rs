mod export;
mod kanban;
mod merge;
mod nav;
mod page;
mod timeline;
mod view;
mod window;

pub use export::cmd_csv;
pub use kanban::{cmd_kanban, render_lanes};
pub use merge::cmd_merge;
pub use nav::cmd_nav;
pub use page::{PageOptions, cmd_limit, cmd_page};
pub use timeline::cmd_timeline;
pub use view::{ViewOptions, cmd_view};
pub use window::{WindowOptions, cmd_window};

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::{BoardError, Result};
use crate::parser::load_bootstrap_payload;
use crate::types::BoardSnapshot;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BoardError::Other(format!("JSON serialization failed: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Load the snapshot from a board file, unwrapping an envelope if present
pub fn load_board(path: &Path) -> Result<BoardSnapshot> {
    let payload = load_bootstrap_payload(path)?;
    Ok(payload.snapshot().clone())
}

/// Load config from an explicit file, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
