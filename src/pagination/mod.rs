//! Client-side paging: stitching fetched pages back into one snapshot, and
//! the request/response shapes of the paged bootstrap endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::PaginationConfig;
use crate::error::{BoardError, Result};
use crate::types::{BoardSnapshot, Group, Item, PageInfo};
use crate::view::PageRequest;

pub mod sampling;

pub use sampling::{PageSample, PaginationObserver, TracingObserver, sample_page};

/// `{snapshot, pageInfo}` as served by the bootstrap endpoint. `page_info`
/// is `None` when no pagination was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardBootstrapEnvelope {
    pub snapshot: BoardSnapshot,
    pub page_info: Option<PageInfo>,
}

/// Either response shape the bootstrap endpoint may return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BootstrapPayload {
    Envelope(BoardBootstrapEnvelope),
    Snapshot(BoardSnapshot),
}

impl BootstrapPayload {
    pub fn snapshot(&self) -> &BoardSnapshot {
        match self {
            BootstrapPayload::Envelope(envelope) => &envelope.snapshot,
            BootstrapPayload::Snapshot(snapshot) => snapshot,
        }
    }
}

/// Where the next "load more" request should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPaginationState {
    pub next_offset: usize,
    pub item_limit: usize,
    pub loaded_items: usize,
    pub total_items: usize,
    pub has_more: bool,
}

impl From<&PageInfo> for BoardPaginationState {
    fn from(page_info: &PageInfo) -> Self {
        let loaded_items = page_info.item_offset + page_info.returned_items;
        Self {
            next_offset: loaded_items,
            item_limit: page_info.item_limit,
            loaded_items,
            total_items: page_info.total_items,
            has_more: page_info.has_more,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBootstrap {
    pub snapshot: BoardSnapshot,
    pub pagination: Option<BoardPaginationState>,
}

/// Split a bootstrap payload into its snapshot and, for a paged envelope,
/// the state of the next page.
pub fn normalize_bootstrap_response(payload: BootstrapPayload) -> NormalizedBootstrap {
    match payload {
        BootstrapPayload::Envelope(envelope) => NormalizedBootstrap {
            pagination: envelope.page_info.as_ref().map(BoardPaginationState::from),
            snapshot: envelope.snapshot,
        },
        BootstrapPayload::Snapshot(snapshot) => NormalizedBootstrap {
            snapshot,
            pagination: None,
        },
    }
}

/// Set `itemOffset`/`itemLimit` on `base_path`, keeping any other query
/// parameters. Relative paths stay relative.
pub fn build_paged_bootstrap_path(base_path: &str, request: PageRequest) -> Result<String> {
    let (mut url, relative) = match Url::parse(base_path) {
        Ok(url) => (url, false),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let origin = Url::parse("http://localhost/")
                .map_err(|e| BoardError::InvalidUrl(e.to_string()))?;
            let url = origin
                .join(base_path)
                .map_err(|e| BoardError::InvalidUrl(format!("{base_path}: {e}")))?;
            (url, true)
        }
        Err(e) => return Err(BoardError::InvalidUrl(format!("{base_path}: {e}"))),
    };

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "itemOffset" && key != "itemLimit")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair("itemOffset", &request.item_offset.to_string())
        .append_pair("itemLimit", &request.item_limit.to_string());

    if relative {
        let query = url.query().unwrap_or_default();
        Ok(format!("{}?{}", url.path(), query))
    } else {
        Ok(url.to_string())
    }
}

impl PageRequest {
    /// Read `itemOffset`/`itemLimit` from a URL query string.
    ///
    /// Returns `Ok(None)` when neither key is present. A present key must be
    /// an integer: the offset at least 0, the limit within
    /// `1..=max_item_limit`. A missing limit takes the configured default.
    pub fn from_query(query: &str, config: &PaginationConfig) -> Result<Option<PageRequest>> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut offset = None;
        let mut limit = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "itemOffset" if offset.is_none() => offset = Some(value.into_owned()),
                "itemLimit" if limit.is_none() => limit = Some(value.into_owned()),
                _ => {}
            }
        }

        if offset.is_none() && limit.is_none() {
            return Ok(None);
        }

        let item_offset = match offset {
            Some(raw) => parse_bounded("itemOffset", &raw, 0, i64::MAX)?,
            None => 0,
        };
        let max_limit = i64::try_from(config.max_item_limit).unwrap_or(i64::MAX);
        let item_limit = match limit {
            Some(raw) => parse_bounded("itemLimit", &raw, 1, max_limit)?,
            None => i64::try_from(config.default_item_limit).unwrap_or(max_limit),
        };

        Ok(Some(PageRequest::new(item_offset, item_limit)))
    }
}

fn parse_bounded(key: &str, raw: &str, min: i64, max: i64) -> Result<i64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| BoardError::InvalidPagination(format!("{key} must be an integer, got '{raw}'")))?;
    if value < min || value > max {
        return Err(BoardError::InvalidPagination(format!(
            "{key} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(value)
}

/// Fold a freshly fetched page into what the client already holds.
///
/// Board metadata comes from `incoming`. Groups are matched by id; within a
/// shared group, incoming items replace same-id items and everything is
/// re-sorted by `position`. Merging the same page twice changes nothing.
pub fn merge_paged_snapshot(current: &BoardSnapshot, incoming: &BoardSnapshot) -> BoardSnapshot {
    let mut order: Vec<String> = Vec::with_capacity(current.groups.len() + incoming.groups.len());
    let mut merged: HashMap<String, Group> = HashMap::new();

    for group in &current.groups {
        if merged.insert(group.id.clone(), group.clone()).is_none() {
            order.push(group.id.clone());
        }
    }

    for incoming_group in &incoming.groups {
        let Some(existing) = merged.get(&incoming_group.id) else {
            order.push(incoming_group.id.clone());
            merged.insert(incoming_group.id.clone(), incoming_group.clone());
            continue;
        };

        let items = merge_items(&existing.items, &incoming_group.items);
        let next = Group {
            id: existing.id.clone(),
            name: incoming_group.name.clone(),
            position: incoming_group.position,
            is_collapsed: existing.is_collapsed,
            items,
        };
        merged.insert(incoming_group.id.clone(), next);
    }

    let mut groups: Vec<Group> = order
        .iter()
        .filter_map(|id| merged.remove(id))
        .collect();
    groups.sort_by_key(|group| group.position);

    tracing::debug!(
        "Merged page into board {}: {} groups",
        current.board_id,
        groups.len()
    );

    BoardSnapshot {
        workspace_id: current.workspace_id.clone(),
        board_id: current.board_id.clone(),
        board_name: incoming.board_name.clone(),
        views: incoming.views.clone(),
        columns: incoming.columns.clone(),
        groups,
        members: incoming.members.clone(),
    }
}

/// Merge item lists by id, first-seen order, incoming wins, then sort by position.
fn merge_items(existing: &[Arc<Item>], incoming: &[Arc<Item>]) -> Vec<Arc<Item>> {
    let mut items: Vec<Arc<Item>> = Vec::with_capacity(existing.len() + incoming.len());
    let mut index_by_id: HashMap<&str, usize> = HashMap::new();

    for item in existing.iter().chain(incoming) {
        match index_by_id.get(item.id.as_str()) {
            Some(&index) => items[index] = Arc::clone(item),
            None => {
                index_by_id.insert(item.id.as_str(), items.len());
                items.push(Arc::clone(item));
            }
        }
    }

    items.sort_by_key(|item| item.position);
    items
}
