use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::BoardError;
use crate::parser::{RawBoardView, RawColumn};

/// The closed set of column kinds. The kind selects which field of a
/// [`CellValue`] is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Text,
    Status,
    Person,
    Date,
    Number,
    Tags,
    Checkbox,
    Url,
}

impl ColumnType {
    pub const ALL: [ColumnType; 8] = [
        ColumnType::Text,
        ColumnType::Status,
        ColumnType::Person,
        ColumnType::Date,
        ColumnType::Number,
        ColumnType::Tags,
        ColumnType::Checkbox,
        ColumnType::Url,
    ];
}

enum_display_fromstr!(
    ColumnType,
    BoardError::InvalidColumnType,
    {
        Text => "TEXT",
        Status => "STATUS",
        Person => "PERSON",
        Date => "DATE",
        Number => "NUMBER",
        Tags => "TAGS",
        Checkbox => "CHECKBOX",
        Url => "URL",
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewType {
    #[default]
    Table,
    Kanban,
    Calendar,
    Timeline,
}

enum_display_fromstr!(
    ViewType,
    BoardError::InvalidViewType,
    {
        Table => "TABLE",
        Kanban => "KANBAN",
        Calendar => "CALENDAR",
        Timeline => "TIMELINE",
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    Owner,
    Admin,
    #[default]
    Member,
    Viewer,
}

enum_display_fromstr!(
    MemberRole,
    BoardError::InvalidMemberRole,
    {
        Owner => "OWNER",
        Admin => "ADMIN",
        Member => "MEMBER",
        Viewer => "VIEWER",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOption {
    pub label: String,
    pub color: String,
}

impl StatusOption {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Type-specific column configuration.
///
/// Only STATUS columns carry settings today. Decoding from the loose JSON
/// stored alongside a column happens in [`crate::parser`], keyed by the
/// column's [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnSettings {
    Status { options: Vec<StatusOption> },
}

impl ColumnSettings {
    pub fn status_options(&self) -> &[StatusOption] {
        match self {
            ColumnSettings::Status { options } => options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawColumn")]
pub struct Column {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub position: i64,
    pub settings: Option<ColumnSettings>,
}

impl Column {
    pub fn status_options(&self) -> &[StatusOption] {
        self.settings
            .as_ref()
            .map(ColumnSettings::status_options)
            .unwrap_or_default()
    }
}

/// A single cell. Exactly one typed field is meaningful, selected by the
/// owning column's type; the rest are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellValue {
    pub id: String,
    pub item_id: String,
    pub column_id: String,
    #[serde(default)]
    pub text_value: Option<String>,
    #[serde(default)]
    pub status_value: Option<String>,
    #[serde(default)]
    pub person_id: Option<String>,
    /// ISO 8601 string
    #[serde(default)]
    pub date_value: Option<String>,
    #[serde(default)]
    pub number_value: Option<f64>,
    #[serde(default, deserialize_with = "crate::parser::deserialize_tags")]
    pub tags_value: Option<Vec<String>>,
    #[serde(default)]
    pub checkbox_value: Option<bool>,
    #[serde(default)]
    pub url_value: Option<String>,
}

impl CellValue {
    /// Create an empty value for `(item_id, column_id)`.
    pub fn empty(item_id: &str, column_id: &str) -> Self {
        Self {
            id: format!("{item_id}_{column_id}"),
            item_id: item_id.to_string(),
            column_id: column_id.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub position: i64,
    #[serde(default)]
    pub last_edited_by_id: Option<String>,
    #[serde(default)]
    pub values: Vec<CellValue>,
}

impl Item {
    /// The value for `column_id`, if the item has one.
    pub fn cell(&self, column_id: Option<&str>) -> Option<&CellValue> {
        let column_id = column_id?;
        self.values.iter().find(|value| value.column_id == column_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub position: i64,
    #[serde(default)]
    pub is_collapsed: bool,
    /// Ordered by `position` ascending by convention.
    #[serde(default)]
    pub items: Vec<Arc<Item>>,
}

impl Group {
    /// Copy of the group's metadata carrying a different item list.
    pub fn with_items(&self, items: Vec<Arc<Item>>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            position: self.position,
            is_collapsed: self.is_collapsed,
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: MemberRole,
}

impl Member {
    /// Display name, falling back to the email address.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Sort modes a view can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Manual,
    NameAsc,
    NameDesc,
    DateAsc,
    DateDesc,
    NumberAsc,
    NumberDesc,
}

impl SortBy {
    pub const ALL_STRINGS: &[&str] = &[
        "manual",
        "name_asc",
        "name_desc",
        "date_asc",
        "date_desc",
        "number_asc",
        "number_desc",
    ];
}

enum_display_fromstr!(
    SortBy,
    BoardError::InvalidSortBy,
    {
        Manual => "manual",
        NameAsc => "name_asc",
        NameDesc => "name_desc",
        DateAsc => "date_asc",
        DateDesc => "date_desc",
        NumberAsc => "number_asc",
        NumberDesc => "number_desc",
    }
);

/// Saved filter/sort descriptor. Every field is optional; unset fields do
/// not constrain anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_start_column_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_end_column_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl ViewConfig {
    /// Overlay the fields set in `overrides` on top of `self`.
    pub fn merged_with(&self, overrides: &ViewConfig) -> ViewConfig {
        fn pick<T: Clone>(over: &Option<T>, base: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }

        ViewConfig {
            status_value: pick(&overrides.status_value, &self.status_value),
            person_id: pick(&overrides.person_id, &self.person_id),
            date_from: pick(&overrides.date_from, &self.date_from),
            date_to: pick(&overrides.date_to, &self.date_to),
            timeline_start_column_id: pick(
                &overrides.timeline_start_column_id,
                &self.timeline_start_column_id,
            ),
            timeline_end_column_id: pick(
                &overrides.timeline_end_column_id,
                &self.timeline_end_column_id,
            ),
            number_min: pick(&overrides.number_min, &self.number_min),
            number_max: pick(&overrides.number_max, &self.number_max),
            tag_value: pick(&overrides.tag_value, &self.tag_value),
            checkbox_value: pick(&overrides.checkbox_value, &self.checkbox_value),
            url_query: pick(&overrides.url_query, &self.url_query),
            sort_by: pick(&overrides.sort_by, &self.sort_by),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawBoardView")]
pub struct BoardView {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: ViewType,
    pub position: i64,
    pub config: Option<ViewConfig>,
}

/// The root aggregate: one board's columns, groups, items and values at a
/// point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub workspace_id: String,
    pub board_id: String,
    pub board_name: String,
    #[serde(default)]
    pub views: Vec<BoardView>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl BoardSnapshot {
    /// Copy of the board carrying a different group list.
    pub fn with_groups(&self, groups: Vec<Group>) -> Self {
        Self {
            workspace_id: self.workspace_id.clone(),
            board_id: self.board_id.clone(),
            board_name: self.board_name.clone(),
            views: self.views.clone(),
            columns: self.columns.clone(),
            groups,
            members: self.members.clone(),
        }
    }

    /// First column of the given type in declared order.
    pub fn first_column_of_type(&self, column_type: ColumnType) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.column_type == column_type)
    }

    pub fn view(&self, view_id: &str) -> Option<&BoardView> {
        self.views.iter().find(|view| view.id == view_id)
    }
}

/// Pagination metadata. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub item_offset: usize,
    pub item_limit: usize,
    pub returned_items: usize,
    pub total_items: usize,
    pub has_more: bool,
}
