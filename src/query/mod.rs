//! Query builder pattern for filtering board items.
//!
//! Each predicate a view can request is its own [`ItemFilter`]. A query is an
//! AND-composition of filters followed by a sort.

use std::sync::Arc;

use crate::types::{BoardSnapshot, ColumnType, Item, SortBy, ViewConfig};
use crate::utils::parse_iso_millis;

pub mod sort;

pub use sort::{SortColumns, sort_by_date, sort_by_name, sort_by_number, sort_by_position, sort_items};

/// The column consulted for each typed predicate: the first column of that
/// type in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLookup {
    pub status: Option<String>,
    pub person: Option<String>,
    pub date: Option<String>,
    pub number: Option<String>,
    pub tags: Option<String>,
    pub checkbox: Option<String>,
    pub url: Option<String>,
}

impl ColumnLookup {
    /// Resolve column ids once per board.
    pub fn from_board(board: &BoardSnapshot) -> Self {
        let first = |column_type| {
            board
                .first_column_of_type(column_type)
                .map(|column| column.id.clone())
        };
        Self {
            status: first(ColumnType::Status),
            person: first(ColumnType::Person),
            date: first(ColumnType::Date),
            number: first(ColumnType::Number),
            tags: first(ColumnType::Tags),
            checkbox: first(ColumnType::Checkbox),
            url: first(ColumnType::Url),
        }
    }

    pub fn sort_columns(&self) -> SortColumns<'_> {
        SortColumns {
            date: self.date.as_deref(),
            number: self.number.as_deref(),
        }
    }
}

/// Trait for item filters
pub trait ItemFilter: Send + Sync {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool;
}

/// Exact match on the STATUS cell
pub struct StatusFilter {
    target: String,
}

impl StatusFilter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl ItemFilter for StatusFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        item.cell(columns.status.as_deref())
            .and_then(|value| value.status_value.as_deref())
            == Some(self.target.as_str())
    }
}

/// Exact match on the PERSON cell
pub struct PersonFilter {
    person_id: String,
}

impl PersonFilter {
    pub fn new(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }
}

impl ItemFilter for PersonFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        item.cell(columns.person.as_deref())
            .and_then(|value| value.person_id.as_deref())
            == Some(self.person_id.as_str())
    }
}

/// Inclusive epoch-millisecond range on the DATE cell.
///
/// The item must carry a parseable date even when a bound itself failed to
/// parse; such a bound just does not constrain.
pub struct DateRangeFilter {
    from: Option<i64>,
    to: Option<i64>,
}

impl DateRangeFilter {
    pub fn new(from: Option<i64>, to: Option<i64>) -> Self {
        Self { from, to }
    }
}

impl ItemFilter for DateRangeFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        let Some(current) = item
            .cell(columns.date.as_deref())
            .and_then(|value| value.date_value.as_deref())
            .and_then(parse_iso_millis)
        else {
            return false;
        };

        if self.from.is_some_and(|from| current < from) {
            return false;
        }
        if self.to.is_some_and(|to| current > to) {
            return false;
        }
        true
    }
}

/// Inclusive range on the NUMBER cell
pub struct NumberRangeFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberRangeFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl ItemFilter for NumberRangeFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        let Some(current) = item
            .cell(columns.number.as_deref())
            .and_then(|value| value.number_value)
        else {
            return false;
        };

        if self.min.is_some_and(|min| current < min) {
            return false;
        }
        if self.max.is_some_and(|max| current > max) {
            return false;
        }
        true
    }
}

/// Case-insensitive substring match against any entry of the TAGS cell
pub struct TagFilter {
    needle: String,
}

impl TagFilter {
    pub fn new(tag: &str) -> Self {
        Self {
            needle: tag.trim().to_lowercase(),
        }
    }
}

impl ItemFilter for TagFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        item.cell(columns.tags.as_deref())
            .and_then(|value| value.tags_value.as_ref())
            .is_some_and(|tags| {
                tags.iter()
                    .any(|tag| tag.to_lowercase().contains(&self.needle))
            })
    }
}

/// Exact match on the CHECKBOX cell
pub struct CheckboxFilter {
    checked: bool,
}

impl CheckboxFilter {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }
}

impl ItemFilter for CheckboxFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        item.cell(columns.checkbox.as_deref())
            .and_then(|value| value.checkbox_value)
            == Some(self.checked)
    }
}

/// Case-insensitive substring match on the URL cell; a missing URL is ""
pub struct UrlFilter {
    needle: String,
}

impl UrlFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }
}

impl ItemFilter for UrlFilter {
    fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        item.cell(columns.url.as_deref())
            .and_then(|value| value.url_value.as_deref())
            .unwrap_or("")
            .to_lowercase()
            .contains(&self.needle)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn parse_bound(label: &str, raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    let parsed = parse_iso_millis(raw);
    if parsed.is_none() {
        tracing::warn!("Ignoring unparseable {label} bound '{raw}' in view config");
    }
    parsed
}

/// A configured filter chain plus sort mode.
pub struct ItemQuery {
    filters: Vec<Box<dyn ItemFilter>>,
    sort_by: Option<SortBy>,
}

impl ItemQuery {
    /// Build the query a saved view config describes. Empty strings count as
    /// unset, matching how the config is edited.
    pub fn from_config(config: &ViewConfig) -> Self {
        let mut builder = ItemQueryBuilder::new();

        if let Some(status) = non_empty(&config.status_value) {
            builder = builder.with_filter(Box::new(StatusFilter::new(status)));
        }
        if let Some(person_id) = non_empty(&config.person_id) {
            builder = builder.with_filter(Box::new(PersonFilter::new(person_id)));
        }

        let date_from = non_empty(&config.date_from);
        let date_to = non_empty(&config.date_to);
        if date_from.is_some() || date_to.is_some() {
            builder = builder.with_filter(Box::new(DateRangeFilter::new(
                parse_bound("dateFrom", date_from),
                parse_bound("dateTo", date_to),
            )));
        }

        if config.number_min.is_some() || config.number_max.is_some() {
            builder = builder.with_filter(Box::new(NumberRangeFilter::new(
                config.number_min,
                config.number_max,
            )));
        }
        if let Some(tag) = non_empty(&config.tag_value) {
            builder = builder.with_filter(Box::new(TagFilter::new(tag)));
        }
        if let Some(checked) = config.checkbox_value {
            builder = builder.with_filter(Box::new(CheckboxFilter::new(checked)));
        }
        if let Some(query) = non_empty(&config.url_query) {
            builder = builder.with_filter(Box::new(UrlFilter::new(query)));
        }

        builder.with_sort(config.sort_by).build()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether `item` passes every filter.
    pub fn matches(&self, item: &Item, columns: &ColumnLookup) -> bool {
        self.filters.iter().all(|f| f.matches(item, columns))
    }

    /// Filter then sort `items`, returning a new list.
    pub fn apply(&self, items: &[Arc<Item>], columns: &ColumnLookup) -> Vec<Arc<Item>> {
        let filtered: Vec<Arc<Item>> = items
            .iter()
            .filter(|item| self.matches(item, columns))
            .cloned()
            .collect();
        sort_items(&filtered, self.sort_by, columns.sort_columns())
    }
}

/// Query builder for filtering and sorting items
pub struct ItemQueryBuilder {
    filters: Vec<Box<dyn ItemFilter>>,
    sort_by: Option<SortBy>,
}

impl ItemQueryBuilder {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort_by: None,
        }
    }

    /// Add a filter to the query (AND composition)
    pub fn with_filter(mut self, filter: Box<dyn ItemFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_sort(mut self, sort_by: Option<SortBy>) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn build(self) -> ItemQuery {
        ItemQuery {
            filters: self.filters,
            sort_by: self.sort_by,
        }
    }
}

impl Default for ItemQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `item` satisfies every predicate set in `config`.
pub fn matches(item: &Item, config: &ViewConfig, columns: &ColumnLookup) -> bool {
    ItemQuery::from_config(config).matches(item, columns)
}
