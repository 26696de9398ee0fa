use clap::Parser;
use std::process::ExitCode;

use boardview::cli::{Cli, Commands};
use boardview::commands::{
    PageOptions, ViewOptions, WindowOptions, cmd_csv, cmd_kanban, cmd_limit, cmd_merge, cmd_nav,
    cmd_page, cmd_timeline, cmd_view, cmd_window, load_config,
};
use boardview::error::Result;
use boardview::navigation::GridPosition;
use boardview::view::TimelineOptions;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::View {
            file,
            filters,
            search,
            view_id,
        } => cmd_view(
            &file,
            ViewOptions {
                config: filters.into(),
                search,
                view_id,
            },
        ),

        Commands::Page {
            file,
            offset,
            limit,
            query,
        } => cmd_page(
            &file,
            PageOptions {
                offset,
                limit,
                query,
            },
            &config,
        ),

        Commands::Limit { file, limit } => cmd_limit(&file, limit, &config),
        Commands::Kanban { file, json } => cmd_kanban(&file, json),

        Commands::Timeline {
            file,
            start_column,
            end_column,
            json,
        } => cmd_timeline(
            &file,
            TimelineOptions {
                start_date_column_id: start_column,
                end_date_column_id: end_column,
            },
            json,
        ),

        Commands::Csv { file } => cmd_csv(&file),
        Commands::Merge { current, incoming } => cmd_merge(&current, &incoming),

        Commands::Window {
            total,
            scroll_top,
            viewport_height,
            row_height,
            overscan,
        } => cmd_window(
            WindowOptions {
                total,
                scroll_top,
                viewport_height,
                row_height,
                overscan,
            },
            &config.virtualization,
        ),

        Commands::Nav {
            row,
            col,
            key,
            rows,
            cols,
        } => cmd_nav(GridPosition::new(row, col), key, rows, cols),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
