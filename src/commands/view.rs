use std::path::Path;

use crate::commands::{load_board, print_json};
use crate::error::{BoardError, Result};
use crate::search::filter_board_snapshot_by_item_name;
use crate::types::ViewConfig;
use crate::view::apply_board_view_config;

/// Options for the `view` command
pub struct ViewOptions {
    pub config: ViewConfig,
    pub search: Option<String>,
    pub view_id: Option<String>,
}

/// Apply a view config, then the name search, and print the snapshot
pub fn cmd_view(file: &Path, options: ViewOptions) -> Result<()> {
    let board = load_board(file)?;

    let config = match options.view_id.as_deref() {
        Some(view_id) => {
            let view = board
                .view(view_id)
                .ok_or_else(|| BoardError::ViewNotFound(view_id.to_string()))?;
            view.config
                .clone()
                .unwrap_or_default()
                .merged_with(&options.config)
        }
        None => options.config,
    };

    let filtered = apply_board_view_config(&board, &config);
    let result = match options.search.as_deref() {
        Some(query) => filter_board_snapshot_by_item_name(&filtered, query),
        None => filtered,
    };

    print_json(&result)
}
