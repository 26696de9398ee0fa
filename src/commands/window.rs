use crate::commands::print_json;
use crate::config::VirtualizationConfig;
use crate::error::Result;
use crate::virtualization::{VirtualWindowInput, compute_window};

/// Options for the `window` command. Unset geometry comes from config.
pub struct WindowOptions {
    pub total: usize,
    pub scroll_top: f64,
    pub viewport_height: Option<f64>,
    pub row_height: Option<f64>,
    pub overscan: Option<usize>,
}

impl WindowOptions {
    fn into_input(self, defaults: &VirtualizationConfig) -> VirtualWindowInput {
        VirtualWindowInput {
            total_count: self.total,
            scroll_top: self.scroll_top,
            viewport_height: self.viewport_height.unwrap_or(defaults.viewport_height),
            row_height: self.row_height.unwrap_or(defaults.row_height),
            overscan: self.overscan.unwrap_or(defaults.overscan),
        }
    }
}

/// Print the virtual window for a scroll position
pub fn cmd_window(options: WindowOptions, defaults: &VirtualizationConfig) -> Result<()> {
    let window = compute_window(options.into_input(defaults));
    print_json(&window)
}
