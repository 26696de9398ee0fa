use serde::{Deserialize, Serialize};

use crate::types::{BoardSnapshot, Group, PageInfo};
use crate::view::{count_board_items, retain_visible_groups};

/// Offset/limit request. Values are normalized on use: a negative offset
/// becomes 0 and a limit below 1 becomes 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub item_offset: i64,
    pub item_limit: i64,
}

impl PageRequest {
    pub fn new(item_offset: i64, item_limit: i64) -> Self {
        Self {
            item_offset,
            item_limit,
        }
    }

    pub fn normalized_offset(&self) -> usize {
        self.item_offset.max(0) as usize
    }

    pub fn normalized_limit(&self) -> usize {
        self.item_limit.max(1) as usize
    }
}

/// Response envelope for a paginated board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedSnapshot {
    pub snapshot: BoardSnapshot,
    pub page_info: PageInfo,
}

/// Return one page of items, keeping each group's items contiguous.
///
/// The offset and limit are single counters consumed across groups in
/// order, so the whole board is walked once. An offset past the end yields
/// an empty page with `has_more == false`.
pub fn paginate_board_items(board: &BoardSnapshot, request: PageRequest) -> PagedSnapshot {
    let item_offset = request.normalized_offset();
    let item_limit = request.normalized_limit();
    let total_items = count_board_items(board);

    let mut remaining_offset = item_offset;
    let mut remaining_limit = item_limit;

    let groups: Vec<Group> = board
        .groups
        .iter()
        .map(|group| {
            if remaining_limit == 0 {
                return group.with_items(Vec::new());
            }
            if remaining_offset >= group.items.len() {
                remaining_offset -= group.items.len();
                return group.with_items(Vec::new());
            }

            let start = remaining_offset;
            let end = group.items.len().min(start + remaining_limit);
            let items = group.items[start..end].to_vec();

            remaining_offset = 0;
            remaining_limit -= items.len();
            group.with_items(items)
        })
        .collect();
    let groups = retain_visible_groups(groups);

    let returned_items: usize = groups.iter().map(|group| group.items.len()).sum();
    let page_info = PageInfo {
        item_offset,
        item_limit,
        returned_items,
        total_items,
        has_more: item_offset + returned_items < total_items,
    };

    tracing::debug!(
        "Paginated board {}: offset {} limit {} returned {} of {}",
        board.board_id,
        item_offset,
        item_limit,
        returned_items,
        total_items
    );

    PagedSnapshot {
        snapshot: board.with_groups(groups),
        page_info,
    }
}

/// Truncate the board to its first `limit` items for previews.
///
/// `limit <= 0` keeps only collapsed groups, emptied.
pub fn limit_board_items(board: &BoardSnapshot, limit: i64) -> BoardSnapshot {
    if limit <= 0 {
        let groups = board
            .groups
            .iter()
            .filter(|group| group.is_collapsed)
            .map(|group| group.with_items(Vec::new()))
            .collect();
        return board.with_groups(groups);
    }

    let mut remaining = limit as usize;
    let groups: Vec<Group> = board
        .groups
        .iter()
        .map(|group| {
            let take = group.items.len().min(remaining);
            remaining -= take;
            group.with_items(group.items[..take].to_vec())
        })
        .collect();

    board.with_groups(retain_visible_groups(groups))
}
