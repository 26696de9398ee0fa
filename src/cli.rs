use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::navigation::ArrowKey;
use crate::types::{SortBy, ViewConfig};

#[derive(Parser)]
#[command(name = "boardview")]
#[command(about = "Filter, sort, paginate and window board snapshots")]
#[command(version)]
pub struct Cli {
    /// Config file (default: $BOARDVIEW_ROOT/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a view config and name search, print the snapshot
    View {
        /// Board snapshot or {snapshot, pageInfo} envelope
        file: PathBuf,

        #[command(flatten)]
        filters: ViewFilterArgs,

        /// Keep only items whose name contains this text
        #[arg(long)]
        search: Option<String>,

        /// Start from the config saved on this view; flags override it
        #[arg(long)]
        view_id: Option<String>,
    },

    /// Print one page of items as {snapshot, pageInfo}
    Page {
        file: PathBuf,

        /// Items to skip
        #[arg(long, conflicts_with = "query")]
        offset: Option<i64>,

        /// Items per page (default from config, capped at the configured max)
        #[arg(long, conflicts_with = "query")]
        limit: Option<i64>,

        /// Raw query string, e.g. "itemOffset=100&itemLimit=50"
        #[arg(long)]
        query: Option<String>,
    },

    /// Keep only the first N items for a preview
    Limit {
        file: PathBuf,

        /// Item cap (default from config)
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<i64>,
    },

    /// Show items grouped into status lanes
    Kanban {
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show items on a date timeline
    Timeline {
        file: PathBuf,

        /// DATE column used for bar starts
        #[arg(long)]
        start_column: Option<String>,

        /// DATE column used for bar ends
        #[arg(long)]
        end_column: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the board as CSV
    Csv { file: PathBuf },

    /// Merge a fetched page into a held snapshot
    Merge { current: PathBuf, incoming: PathBuf },

    /// Compute the rendered row window for a scroll position
    Window {
        /// Number of rows
        #[arg(long)]
        total: usize,

        #[arg(long)]
        scroll_top: f64,

        #[arg(long)]
        viewport_height: Option<f64>,

        #[arg(long)]
        row_height: Option<f64>,

        #[arg(long)]
        overscan: Option<usize>,
    },

    /// Compute where grid focus moves after an arrow key
    Nav {
        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,

        /// ArrowUp, ArrowDown, ArrowLeft or ArrowRight
        #[arg(long, value_parser = parse_arrow_key)]
        key: ArrowKey,

        /// Row count
        #[arg(long)]
        rows: usize,

        /// Column count
        #[arg(long)]
        cols: usize,
    },
}

/// Filter and sort flags mirroring a saved view config
#[derive(Args, Debug, Default, Clone)]
pub struct ViewFilterArgs {
    /// Exact STATUS value
    #[arg(long)]
    pub status: Option<String>,

    /// PERSON user id
    #[arg(long)]
    pub person: Option<String>,

    /// Earliest DATE (inclusive, ISO 8601)
    #[arg(long)]
    pub date_from: Option<String>,

    /// Latest DATE (inclusive, ISO 8601)
    #[arg(long)]
    pub date_to: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub number_min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub number_max: Option<f64>,

    /// Substring of any tag (case-insensitive)
    #[arg(long)]
    pub tag: Option<String>,

    /// CHECKBOX state (true or false)
    #[arg(long)]
    pub checkbox: Option<bool>,

    /// Substring of the URL (case-insensitive)
    #[arg(long)]
    pub url_query: Option<String>,

    /// Sort: manual, name_asc, name_desc, date_asc, date_desc, number_asc, number_desc
    #[arg(long, value_parser = parse_sort_by)]
    pub sort: Option<SortBy>,
}

impl From<ViewFilterArgs> for ViewConfig {
    fn from(args: ViewFilterArgs) -> Self {
        ViewConfig {
            status_value: args.status,
            person_id: args.person,
            date_from: args.date_from,
            date_to: args.date_to,
            number_min: args.number_min,
            number_max: args.number_max,
            tag_value: args.tag,
            checkbox_value: args.checkbox,
            url_query: args.url_query,
            sort_by: args.sort,
            ..Default::default()
        }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_sort_by(s: &str) -> Result<SortBy, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "sort",
        SortBy::ALL_STRINGS,
    )
}

fn parse_arrow_key(s: &str) -> Result<ArrowKey, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "key",
        &["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_view_flags_build_config() {
        let cli = Cli::try_parse_from([
            "boardview",
            "view",
            "board.json",
            "--status",
            "Done",
            "--number-min",
            "-5",
            "--sort",
            "NUMBER_DESC",
        ])
        .unwrap();

        let Commands::View { filters, .. } = cli.command else {
            panic!("expected view command");
        };
        let config = ViewConfig::from(filters);
        assert_eq!(config.status_value.as_deref(), Some("Done"));
        assert_eq!(config.number_min, Some(-5.0));
        assert_eq!(config.sort_by, Some(SortBy::NumberDesc));
    }

    #[test]
    fn test_invalid_sort_lists_choices() {
        let err = match Cli::try_parse_from(["boardview", "view", "b.json", "--sort", "priority"]) {
            Err(err) => err,
            Ok(_) => panic!("expected parse failure"),
        };
        assert!(err.to_string().contains("name_asc"));
    }

    #[test]
    fn test_nav_parses_arrow_key() {
        let cli = Cli::try_parse_from([
            "boardview", "nav", "--row", "0", "--col", "0", "--key", "ArrowUp", "--rows", "3",
            "--cols", "4",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Nav {
                key: ArrowKey::Up,
                ..
            }
        ));
    }
}
