use std::path::Path;
use std::time::Instant;

use crate::commands::{load_board, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::pagination::{BoardBootstrapEnvelope, TracingObserver, sample_page};
use crate::view::{PageRequest, limit_board_items, paginate_board_items};

/// Options for the `page` command
pub struct PageOptions {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub query: Option<String>,
}

fn resolve_request(options: &PageOptions, config: &Config) -> Result<Option<PageRequest>> {
    let pagination = &config.pagination;

    if let Some(query) = options.query.as_deref() {
        return PageRequest::from_query(query, pagination);
    }

    let max_limit = i64::try_from(pagination.max_item_limit).unwrap_or(i64::MAX);
    let default_limit = i64::try_from(pagination.default_item_limit).unwrap_or(max_limit);
    let limit = options.limit.unwrap_or(default_limit).min(max_limit);
    Ok(Some(PageRequest::new(options.offset.unwrap_or(0), limit)))
}

/// Print one page as a `{snapshot, pageInfo}` envelope and record a page
/// sample. A query without pagination keys prints the whole board with a
/// null `pageInfo`.
pub fn cmd_page(file: &Path, options: PageOptions, config: &Config) -> Result<()> {
    let started_at = Instant::now();
    let board = load_board(file)?;

    let envelope = match resolve_request(&options, config)? {
        Some(request) => {
            let page = paginate_board_items(&board, request);
            BoardBootstrapEnvelope {
                snapshot: page.snapshot,
                page_info: Some(page.page_info),
            }
        }
        None => BoardBootstrapEnvelope {
            snapshot: board,
            page_info: None,
        },
    };

    sample_page(
        "cli:page",
        &envelope,
        envelope.page_info.as_ref(),
        started_at,
        &TracingObserver,
    )?;

    print_json(&envelope)
}

/// Print the board truncated to its first `limit` items
pub fn cmd_limit(file: &Path, limit: Option<i64>, config: &Config) -> Result<()> {
    let board = load_board(file)?;
    let limit = limit.unwrap_or(config.preview.item_limit);
    print_json(&limit_board_items(&board, limit))
}
