//! Board-level view operations: apply a saved config, lay items out as
//! kanban lanes or timeline bars, and slice them into pages.

use crate::query::{ColumnLookup, ItemQuery};
use crate::types::{BoardSnapshot, Column, ColumnType, Group, ViewConfig};

pub mod kanban;
pub mod paginate;
pub mod timeline;

pub use kanban::{KanbanLane, UNASSIGNED_LANE_ID, build_kanban_lanes};
pub use paginate::{PageRequest, PagedSnapshot, limit_board_items, paginate_board_items};
pub use timeline::{TimelineEntry, TimelineOptions, TimelineResult, build_timeline_entries};

/// Total items across every group.
pub fn count_board_items(board: &BoardSnapshot) -> usize {
    board.groups.iter().map(|group| group.items.len()).sum()
}

/// First DATE column in declared order.
pub fn get_date_column_id(board: &BoardSnapshot) -> Option<&str> {
    board
        .first_column_of_type(ColumnType::Date)
        .map(|column| column.id.as_str())
}

/// All DATE columns ordered by `position`.
pub fn get_date_columns(board: &BoardSnapshot) -> Vec<&Column> {
    let mut columns: Vec<&Column> = board
        .columns
        .iter()
        .filter(|column| column.column_type == ColumnType::Date)
        .collect();
    columns.sort_by_key(|column| column.position);
    columns
}

/// Keep groups that still hold items, plus collapsed ones so their header renders.
pub(crate) fn retain_visible_groups(groups: Vec<Group>) -> Vec<Group> {
    groups
        .into_iter()
        .filter(|group| group.is_collapsed || !group.items.is_empty())
        .collect()
}

/// Filter and sort every group's items per `config`.
///
/// Groups left empty are dropped unless collapsed. The input is untouched;
/// unchanged items are shared with the result.
pub fn apply_board_view_config(board: &BoardSnapshot, config: &ViewConfig) -> BoardSnapshot {
    let columns = ColumnLookup::from_board(board);
    let query = ItemQuery::from_config(config);

    let groups: Vec<Group> = board
        .groups
        .iter()
        .map(|group| group.with_items(query.apply(&group.items, &columns)))
        .collect();
    let groups = retain_visible_groups(groups);

    let before = count_board_items(board);
    let after: usize = groups.iter().map(|group| group.items.len()).sum();
    tracing::debug!(
        "View config kept {} of {} items in {} groups",
        after,
        before,
        groups.len()
    );

    board.with_groups(groups)
}
