#[macro_use]
mod macros;

pub mod cli;
pub mod columns;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod navigation;
pub mod pagination;
pub mod parser;
pub mod paths;
pub mod query;
pub mod search;
pub mod types;
pub mod utils;
pub mod view;
pub mod virtualization;

pub use columns::reorder_columns_by_id;
pub use config::Config;
pub use error::{BoardError, Result};
pub use export::build_board_csv;
pub use navigation::{ArrowKey, GridPosition, is_arrow_key, next_grid_position};
pub use pagination::{
    BoardBootstrapEnvelope, BoardPaginationState, BootstrapPayload, NormalizedBootstrap,
    build_paged_bootstrap_path, merge_paged_snapshot, normalize_bootstrap_response,
};
pub use parser::{load_bootstrap_payload, parse_bootstrap_payload, parse_snapshot};
pub use query::{ColumnLookup, ItemFilter, ItemQuery, ItemQueryBuilder, matches, sort_items};
pub use search::{
    default_status_options, filter_board_snapshot_by_item_name, filter_groups_by_item_name,
    flatten_visible_rows, get_status_options, has_no_search_results,
};
pub use types::{
    BoardSnapshot, BoardView, CellValue, Column, ColumnSettings, ColumnType, Group, Item, Member,
    MemberRole, PageInfo, SortBy, StatusOption, ViewConfig, ViewType,
};
pub use view::{
    KanbanLane, PageRequest, PagedSnapshot, TimelineEntry, TimelineOptions, TimelineResult,
    apply_board_view_config, build_kanban_lanes, build_timeline_entries, count_board_items,
    get_date_column_id, get_date_columns, limit_board_items, paginate_board_items,
};
pub use virtualization::{VirtualWindow, VirtualWindowInput, compute_window};
