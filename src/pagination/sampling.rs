//! Per-page serving samples.
//!
//! Each served page yields a [`PageSample`] with the response headers the
//! HTTP layer attaches and the figures handed to an explicitly passed
//! [`PaginationObserver`].

use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::types::PageInfo;

pub const DEFAULT_EVENT_NAME: &str = "pagination_served";

/// Metrics for one served page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSample {
    pub event_name: String,
    pub route: String,
    pub page_info: PageInfo,
    pub payload_bytes: usize,
    pub duration_ms: u128,
}

impl PageSample {
    /// Header name/value pairs describing the page, in a fixed order.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let page = &self.page_info;
        vec![
            ("x-page-offset", page.item_offset.to_string()),
            ("x-page-limit", page.item_limit.to_string()),
            ("x-page-returned", page.returned_items.to_string()),
            ("x-page-total", page.total_items.to_string()),
            ("x-page-has-more", page.has_more.to_string()),
            ("x-payload-bytes", self.payload_bytes.to_string()),
            ("x-duration-ms", self.duration_ms.to_string()),
            ("server-timing", format!("pagination;dur={}", self.duration_ms)),
        ]
    }
}

/// Receives a sample for every paginated response.
pub trait PaginationObserver {
    fn record(&self, sample: &PageSample);
}

/// Records samples as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PaginationObserver for TracingObserver {
    fn record(&self, sample: &PageSample) {
        let page = &sample.page_info;
        tracing::info!(
            event = %sample.event_name,
            route = %sample.route,
            item_offset = page.item_offset,
            item_limit = page.item_limit,
            returned_items = page.returned_items,
            total_items = page.total_items,
            has_more = page.has_more,
            payload_bytes = sample.payload_bytes,
            duration_ms = sample.duration_ms as u64,
            "Served page of {} items",
            page.returned_items
        );
    }
}

/// Measure a served payload and report it to `observer`.
///
/// `payload` is what goes over the wire; its serialized JSON length is the
/// reported size. Nothing is sampled when `page_info` is `None`.
pub fn sample_page<T: Serialize>(
    route: &str,
    payload: &T,
    page_info: Option<&PageInfo>,
    started_at: Instant,
    observer: &dyn PaginationObserver,
) -> Result<Option<PageSample>> {
    let Some(page_info) = page_info else {
        return Ok(None);
    };

    let payload_bytes = serde_json::to_vec(payload)?.len();
    let sample = PageSample {
        event_name: DEFAULT_EVENT_NAME.to_string(),
        route: route.to_string(),
        page_info: *page_info,
        payload_bytes,
        duration_ms: started_at.elapsed().as_millis(),
    };

    observer.record(&sample);
    Ok(Some(sample))
}
