use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{BoardSnapshot, Column, Item};
use crate::utils::parse_iso_millis;
use crate::view::get_date_columns;

/// Requested start/end DATE columns. Unknown ids fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineOptions {
    pub start_date_column_id: Option<String>,
    pub end_date_column_id: Option<String>,
}

/// A bar on the timeline. Percentages are `None` for undated items or when
/// nothing on the board is dated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub item: Arc<Item>,
    pub start_date_value: Option<String>,
    pub end_date_value: Option<String>,
    pub start_offset_percent: Option<f64>,
    pub span_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResult {
    pub entries: Vec<TimelineEntry>,
    pub start_date_column_id: Option<String>,
    pub end_date_column_id: Option<String>,
}

struct RawEntry {
    item: Arc<Item>,
    order: usize,
    start_value: Option<String>,
    end_value: Option<String>,
    /// Both set or both unset after normalization.
    range: Option<(i64, i64)>,
}

impl RawEntry {
    fn into_entry(self, percents: Option<(f64, f64)>) -> TimelineEntry {
        TimelineEntry {
            item: self.item,
            start_date_value: self.start_value,
            end_date_value: self.end_value,
            start_offset_percent: percents.map(|(offset, _)| offset),
            span_percent: percents.map(|(_, span)| span),
        }
    }
}

fn resolve_date_column_id(
    date_columns: &[&Column],
    requested: Option<&str>,
    fallback: Option<&str>,
) -> Option<String> {
    requested
        .filter(|id| !id.is_empty())
        .filter(|id| date_columns.iter().any(|column| column.id == *id))
        .or(fallback)
        .map(str::to_string)
}

fn raw_entry(
    item: &Arc<Item>,
    order: usize,
    start_column: Option<&str>,
    end_column: Option<&str>,
) -> RawEntry {
    let mut start_value = item
        .cell(start_column)
        .and_then(|value| value.date_value.clone());
    let mut end_value = item
        .cell(end_column)
        .and_then(|value| value.date_value.clone());
    let start = start_value.as_deref().and_then(parse_iso_millis);
    let end = end_value.as_deref().and_then(parse_iso_millis);

    // A single-sided date becomes a zero-length bar.
    let range = match (start, end) {
        (Some(start), Some(end)) => Some((start, end)),
        (Some(start), None) => {
            end_value = start_value.clone();
            Some((start, start))
        }
        (None, Some(end)) => {
            start_value = end_value.clone();
            Some((end, end))
        }
        (None, None) => None,
    };

    // Inverted ranges are swapped along with their source strings.
    let range = range.map(|(start, end)| {
        if end < start {
            std::mem::swap(&mut start_value, &mut end_value);
            (end, start)
        } else {
            (start, end)
        }
    });

    RawEntry {
        item: Arc::clone(item),
        order,
        start_value,
        end_value,
        range,
    }
}

/// Lay every item of the board out on a shared time axis.
///
/// Items are flattened group by group, each group in `position` order.
/// Entries are ordered by start time with undated items last; ties keep the
/// flattened order.
pub fn build_timeline_entries(board: &BoardSnapshot, options: &TimelineOptions) -> TimelineResult {
    let date_columns = get_date_columns(board);
    let default_column = date_columns.first().map(|column| column.id.as_str());
    let start_date_column_id = resolve_date_column_id(
        &date_columns,
        options.start_date_column_id.as_deref(),
        default_column,
    );
    let end_date_column_id = resolve_date_column_id(
        &date_columns,
        options.end_date_column_id.as_deref(),
        start_date_column_id.as_deref(),
    );

    let mut raw: Vec<RawEntry> = board
        .groups
        .iter()
        .flat_map(|group| {
            let mut items = group.items.clone();
            items.sort_by_key(|item| item.position);
            items
        })
        .enumerate()
        .map(|(order, item)| {
            raw_entry(
                &item,
                order,
                start_date_column_id.as_deref(),
                end_date_column_id.as_deref(),
            )
        })
        .collect();

    raw.sort_by(|a, b| match (a.range, b.range) {
        (Some((a_start, _)), Some((b_start, _))) => {
            a_start.cmp(&b_start).then(a.order.cmp(&b.order))
        }
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.order.cmp(&b.order),
    });

    let bounds = raw
        .iter()
        .filter_map(|entry| entry.range)
        .fold(None, |acc: Option<(i64, i64)>, (start, end)| match acc {
            None => Some((start, end)),
            Some((min, max)) => Some((min.min(start), max.max(end))),
        });

    let entries = match bounds {
        None => raw.into_iter().map(|entry| entry.into_entry(None)).collect(),
        Some((timeline_start, timeline_end)) => {
            let span = (timeline_end - timeline_start).max(1) as f64;
            raw.into_iter()
                .map(|entry| {
                    let percents = entry.range.map(|(start, end)| {
                        let offset = ((start - timeline_start) as f64 / span * 100.0).clamp(0.0, 100.0);
                        let width =
                            ((end - start) as f64 / span * 100.0).clamp(0.0, 100.0 - offset);
                        (offset, width)
                    });
                    entry.into_entry(percents)
                })
                .collect()
        }
    };

    TimelineResult {
        entries,
        start_date_column_id,
        end_date_column_id,
    }
}
