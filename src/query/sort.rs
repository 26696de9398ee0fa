//! Sort functions for board items.
//!
//! Every mode is a total order: ties always fall back to `position`, so
//! repeated calls over the same input produce the same sequence and
//! pagination stays stable.

use std::cmp::Ordering;
use std::sync::Arc;

use unicase::UniCase;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::types::{Item, SortBy};
use crate::utils::parse_iso_millis;

/// Column ids consulted by value-based sorts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortColumns<'a> {
    pub date: Option<&'a str>,
    pub number: Option<&'a str>,
}

fn by_position(a: &Item, b: &Item) -> Ordering {
    a.position.cmp(&b.position)
}

/// Compare optional keys with missing values last, regardless of direction.
fn compare_present_first<T>(
    a: Option<T>,
    b: Option<T>,
    descending: bool,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Option<Ordering> {
    match (a, b) {
        (None, None) => None,
        (None, Some(_)) => Some(Ordering::Greater),
        (Some(_), None) => Some(Ordering::Less),
        (Some(a), Some(b)) => {
            let ordering = cmp(&a, &b);
            if ordering == Ordering::Equal {
                None
            } else if descending {
                Some(ordering.reverse())
            } else {
                Some(ordering)
            }
        }
    }
}

fn number_of(item: &Item, column_id: Option<&str>) -> Option<f64> {
    item.cell(column_id).and_then(|value| value.number_value)
}

fn date_of(item: &Item, column_id: Option<&str>) -> Option<i64> {
    item.cell(column_id)
        .and_then(|value| value.date_value.as_deref())
        .and_then(parse_iso_millis)
}

/// Manual order: `position` ascending.
pub fn sort_by_position(items: &mut [Arc<Item>]) {
    items.sort_by(|a, b| by_position(a, b));
}

/// Strip accents so `É` compares as `E`.
fn base_letters(name: &str) -> String {
    name.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Name order ignoring case and accents, then `position`.
pub fn sort_by_name(items: &mut [Arc<Item>], descending: bool) {
    let mut keyed: Vec<(String, Arc<Item>)> = items
        .iter()
        .map(|item| (base_letters(&item.name), Arc::clone(item)))
        .collect();

    keyed.sort_by(|(a_key, a), (b_key, b)| {
        let ordering = UniCase::new(a_key.as_str()).cmp(&UniCase::new(b_key.as_str()));
        let ordering = if descending {
            ordering.reverse()
        } else {
            ordering
        };
        ordering.then_with(|| by_position(a, b))
    });

    for (slot, (_, item)) in items.iter_mut().zip(keyed) {
        *slot = item;
    }
}

/// NUMBER cell order; items without a number sort last, then `position`.
pub fn sort_by_number(items: &mut [Arc<Item>], column_id: Option<&str>, descending: bool) {
    items.sort_by(|a, b| {
        compare_present_first(
            number_of(a, column_id),
            number_of(b, column_id),
            descending,
            |x, y| x.total_cmp(y),
        )
        .unwrap_or_else(|| by_position(a, b))
    });
}

/// DATE cell order; missing or unparseable dates sort last, then `position`.
pub fn sort_by_date(items: &mut [Arc<Item>], column_id: Option<&str>, descending: bool) {
    items.sort_by(|a, b| {
        compare_present_first(
            date_of(a, column_id),
            date_of(b, column_id),
            descending,
            |x, y| x.cmp(y),
        )
        .unwrap_or_else(|| by_position(a, b))
    });
}

/// Return a sorted copy of `items`. `None` means manual order.
pub fn sort_items(
    items: &[Arc<Item>],
    sort_by: Option<SortBy>,
    columns: SortColumns<'_>,
) -> Vec<Arc<Item>> {
    let mut sorted = items.to_vec();
    match sort_by.unwrap_or_default() {
        SortBy::Manual => sort_by_position(&mut sorted),
        SortBy::NameAsc => sort_by_name(&mut sorted, false),
        SortBy::NameDesc => sort_by_name(&mut sorted, true),
        SortBy::NumberAsc => sort_by_number(&mut sorted, columns.number, false),
        SortBy::NumberDesc => sort_by_number(&mut sorted, columns.number, true),
        SortBy::DateAsc => sort_by_date(&mut sorted, columns.date, false),
        SortBy::DateDesc => sort_by_date(&mut sorted, columns.date, true),
    }
    sorted
}
