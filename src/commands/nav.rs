use crate::commands::print_json;
use crate::error::Result;
use crate::navigation::{ArrowKey, GridPosition, next_grid_position};

/// Print the next focus position, or `null` when focus stays put
pub fn cmd_nav(current: GridPosition, key: ArrowKey, rows: usize, cols: usize) -> Result<()> {
    print_json(&next_grid_position(current, key, rows, cols))
}
