//! Keyboard focus movement across a spreadsheet-like grid.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Arrow keys that move grid focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

enum_display_fromstr!(
    ArrowKey,
    BoardError::InvalidArrowKey,
    {
        Up => "ArrowUp",
        Down => "ArrowDown",
        Left => "ArrowLeft",
        Right => "ArrowRight",
    }
);

/// Whether `key` names one of the four arrow keys (exact, case-sensitive).
pub fn is_arrow_key(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Compute where focus lands after pressing `key`.
///
/// The result is clamped to `[0, row_count - 1] x [0, col_count - 1]`.
/// Returns `None` when focus would not move (boundary hit) or the grid is empty.
pub fn next_grid_position(
    current: GridPosition,
    key: ArrowKey,
    row_count: usize,
    col_count: usize,
) -> Option<GridPosition> {
    if row_count == 0 || col_count == 0 {
        return None;
    }

    let last_row = row_count - 1;
    let last_col = col_count - 1;
    let mut next = current;

    match key {
        ArrowKey::Up => next.row = current.row.saturating_sub(1),
        ArrowKey::Down => next.row = (current.row + 1).min(last_row),
        ArrowKey::Left => next.col = current.col.saturating_sub(1),
        ArrowKey::Right => next.col = (current.col + 1).min(last_col),
    }

    if next == current {
        return None;
    }

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_at_top_boundary_is_none() {
        assert_eq!(
            next_grid_position(GridPosition::new(0, 0), ArrowKey::Up, 3, 4),
            None
        );
    }

    #[test]
    fn test_moves_within_bounds() {
        let start = GridPosition::new(1, 1);
        assert_eq!(
            next_grid_position(start, ArrowKey::Up, 3, 4),
            Some(GridPosition::new(0, 1))
        );
        assert_eq!(
            next_grid_position(start, ArrowKey::Down, 3, 4),
            Some(GridPosition::new(2, 1))
        );
        assert_eq!(
            next_grid_position(start, ArrowKey::Left, 3, 4),
            Some(GridPosition::new(1, 0))
        );
        assert_eq!(
            next_grid_position(start, ArrowKey::Right, 3, 4),
            Some(GridPosition::new(1, 2))
        );
    }

    #[test]
    fn test_clamps_at_far_edges() {
        let corner = GridPosition::new(2, 3);
        assert_eq!(next_grid_position(corner, ArrowKey::Down, 3, 4), None);
        assert_eq!(next_grid_position(corner, ArrowKey::Right, 3, 4), None);
    }

    #[test]
    fn test_degenerate_grid_is_none() {
        let origin = GridPosition::new(0, 0);
        assert_eq!(next_grid_position(origin, ArrowKey::Down, 0, 4), None);
        assert_eq!(next_grid_position(origin, ArrowKey::Right, 3, 0), None);
    }

    #[test]
    fn test_arrow_key_parsing() {
        assert_eq!("ArrowUp".parse::<ArrowKey>().unwrap(), ArrowKey::Up);
        assert_eq!(ArrowKey::Right.to_string(), "ArrowRight");
        assert!("Enter".parse::<ArrowKey>().is_err());
        assert!(is_arrow_key("ArrowLeft"));
        assert!(!is_arrow_key("arrowleft"));
        assert!(!is_arrow_key("Tab"));
    }
}
