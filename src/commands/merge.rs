use std::path::Path;

use crate::commands::{load_board, print_json};
use crate::error::Result;
use crate::pagination::merge_paged_snapshot;

/// Merge `incoming` into `current` and print the result
pub fn cmd_merge(current: &Path, incoming: &Path) -> Result<()> {
    let current = load_board(current)?;
    let incoming = load_board(incoming)?;
    print_json(&merge_paged_snapshot(&current, &incoming))
}
