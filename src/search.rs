//! Name search and status option resolution.

use std::borrow::Cow;
use std::sync::Arc;

use crate::types::{BoardSnapshot, Group, Item, StatusOption};

/// Palette used by STATUS columns that have no configured options.
pub fn default_status_options() -> Vec<StatusOption> {
    vec![
        StatusOption::new("Not Started", "slate"),
        StatusOption::new("Working", "amber"),
        StatusOption::new("Blocked", "rose"),
        StatusOption::new("Done", "emerald"),
    ]
}

/// Configured options, or the default palette when none are configured.
pub fn get_status_options(raw: &[StatusOption]) -> Cow<'_, [StatusOption]> {
    if raw.is_empty() {
        Cow::Owned(default_status_options())
    } else {
        Cow::Borrowed(raw)
    }
}

/// Keep only items whose name contains `query` (trimmed, case-insensitive).
///
/// An empty query borrows the input untouched so callers can skip work on
/// pointer equality. Otherwise groups without a match are dropped.
pub fn filter_groups_by_item_name<'a>(groups: &'a [Group], query: &str) -> Cow<'a, [Group]> {
    let normalized = query.trim().to_lowercase();

    if normalized.is_empty() {
        return Cow::Borrowed(groups);
    }

    let filtered = groups
        .iter()
        .filter_map(|group| {
            let items: Vec<Arc<Item>> = group
                .items
                .iter()
                .filter(|item| item.name.to_lowercase().contains(&normalized))
                .cloned()
                .collect();
            (!items.is_empty()).then(|| group.with_items(items))
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        "Name search '{}' kept {} of {} groups",
        normalized,
        filtered.len(),
        groups.len()
    );

    Cow::Owned(filtered)
}

/// [`filter_groups_by_item_name`] applied to a whole snapshot.
pub fn filter_board_snapshot_by_item_name(board: &BoardSnapshot, query: &str) -> BoardSnapshot {
    let groups = filter_groups_by_item_name(&board.groups, query).into_owned();
    board.with_groups(groups)
}

/// Rows a table renders: items of every expanded group, in order.
pub fn flatten_visible_rows(groups: &[Group]) -> Vec<Arc<Item>> {
    groups
        .iter()
        .filter(|group| !group.is_collapsed)
        .flat_map(|group| group.items.iter().cloned())
        .collect()
}

/// Whether a non-empty search left nothing to show.
pub fn has_no_search_results(groups: &[Group], query: &str) -> bool {
    !query.trim().is_empty() && groups.is_empty()
}
