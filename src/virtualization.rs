//! Windowing math for rendering only the rows scrolled into view.
//!
//! Rows outside the window are replaced by two spacers whose heights keep
//! the scrollbar geometry identical to a fully rendered list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWindowInput {
    pub total_count: usize,
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub row_height: f64,
    pub overscan: usize,
}

/// The rendered slice. `end_index < start_index` means nothing is visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWindow {
    pub start_index: i64,
    pub end_index: i64,
    pub top_spacer_height: f64,
    pub bottom_spacer_height: f64,
}

impl VirtualWindow {
    pub const EMPTY: VirtualWindow = VirtualWindow {
        start_index: 0,
        end_index: -1,
        top_spacer_height: 0.0,
        bottom_spacer_height: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.end_index < self.start_index
    }

    /// Number of rows inside the window.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end_index - self.start_index + 1) as usize
        }
    }

    /// The window as a half-open index range.
    pub fn range(&self) -> std::ops::Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        self.start_index as usize..self.end_index as usize + 1
    }
}

/// Compute the visible row window for a scroll position.
pub fn compute_window(input: VirtualWindowInput) -> VirtualWindow {
    if input.total_count == 0 {
        return VirtualWindow::EMPTY;
    }

    let row_height = input.row_height.max(1.0);
    let viewport_height = input.viewport_height.max(row_height);
    let overscan = input.overscan as i64;
    let max_index = input.total_count as i64 - 1;

    let raw_start = (input.scroll_top / row_height).floor() as i64 - overscan;
    let raw_end =
        ((input.scroll_top + viewport_height) / row_height).ceil() as i64 + overscan - 1;

    let start_index = raw_start.clamp(0, max_index);
    let end_index = raw_end.clamp(start_index, max_index);

    VirtualWindow {
        start_index,
        end_index,
        top_spacer_height: start_index as f64 * row_height,
        bottom_spacer_height: ((input.total_count as i64 - end_index - 1) as f64 * row_height)
            .max(0.0),
    }
}
