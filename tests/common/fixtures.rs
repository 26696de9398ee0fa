//! Board builders shared by the integration tests.

use std::sync::Arc;

use boardview::{
    BoardSnapshot, BoardView, CellValue, Column, ColumnSettings, ColumnType, Group, Item, Member,
    MemberRole, StatusOption, ViewConfig, ViewType,
};

/// Builder for a single item and its cell values
pub struct ItemBuilder {
    item: Item,
}

impl ItemBuilder {
    pub fn new(id: &str, name: &str, position: i64) -> Self {
        ItemBuilder {
            item: Item {
                id: id.to_string(),
                group_id: String::new(),
                name: name.to_string(),
                position,
                last_edited_by_id: None,
                values: vec![],
            },
        }
    }

    fn with_cell(mut self, column_id: &str, fill: impl FnOnce(&mut CellValue)) -> Self {
        let mut value = CellValue::empty(&self.item.id, column_id);
        fill(&mut value);
        self.item.values.push(value);
        self
    }

    pub fn text(self, column_id: &str, text: &str) -> Self {
        self.with_cell(column_id, |v| v.text_value = Some(text.to_string()))
    }

    pub fn status(self, column_id: &str, status: &str) -> Self {
        self.with_cell(column_id, |v| v.status_value = Some(status.to_string()))
    }

    pub fn person(self, column_id: &str, user_id: &str) -> Self {
        self.with_cell(column_id, |v| v.person_id = Some(user_id.to_string()))
    }

    pub fn date(self, column_id: &str, date: &str) -> Self {
        self.with_cell(column_id, |v| v.date_value = Some(date.to_string()))
    }

    pub fn number(self, column_id: &str, number: Option<f64>) -> Self {
        self.with_cell(column_id, |v| v.number_value = number)
    }

    pub fn tags(self, column_id: &str, tags: &[&str]) -> Self {
        self.with_cell(column_id, |v| {
            v.tags_value = Some(tags.iter().map(|t| t.to_string()).collect())
        })
    }

    pub fn checkbox(self, column_id: &str, checked: bool) -> Self {
        self.with_cell(column_id, |v| v.checkbox_value = Some(checked))
    }

    pub fn url(self, column_id: &str, url: &str) -> Self {
        self.with_cell(column_id, |v| v.url_value = Some(url.to_string()))
    }

    pub fn build(self) -> Item {
        self.item
    }
}

pub fn column(id: &str, name: &str, column_type: ColumnType, position: i64) -> Column {
    Column {
        id: id.to_string(),
        name: name.to_string(),
        column_type,
        position,
        settings: None,
    }
}

pub fn status_column(id: &str, options: &[(&str, &str)]) -> Column {
    Column {
        settings: Some(ColumnSettings::Status {
            options: options
                .iter()
                .map(|(label, color)| StatusOption::new(*label, *color))
                .collect(),
        }),
        ..column(id, "Status", ColumnType::Status, 0)
    }
}

pub fn group(id: &str, name: &str, position: i64, collapsed: bool, items: Vec<Item>) -> Group {
    Group {
        id: id.to_string(),
        name: name.to_string(),
        position,
        is_collapsed: collapsed,
        items: items
            .into_iter()
            .map(|mut item| {
                item.group_id = id.to_string();
                Arc::new(item)
            })
            .collect(),
    }
}

pub fn board(columns: Vec<Column>, groups: Vec<Group>) -> BoardSnapshot {
    BoardSnapshot {
        workspace_id: "workspace_1".to_string(),
        board_id: "board_1".to_string(),
        board_name: "Launch Plan".to_string(),
        views: vec![],
        columns,
        groups,
        members: vec![Member {
            user_id: "user_1".to_string(),
            email: "owner@example.com".to_string(),
            name: Some("Demo Owner".to_string()),
            role: MemberRole::Owner,
        }],
    }
}

/// A small board touching every column type.
pub fn demo_board() -> BoardSnapshot {
    let columns = vec![
        status_column(
            "col_status",
            &[("Not Started", "slate"), ("Working", "amber"), ("Done", "emerald")],
        ),
        column("col_owner", "Owner", ColumnType::Person, 1),
        column("col_due", "Due", ColumnType::Date, 2),
        column("col_estimate", "Estimate", ColumnType::Number, 3),
        column("col_tags", "Tags", ColumnType::Tags, 4),
        column("col_done", "Reviewed", ColumnType::Checkbox, 5),
        column("col_link", "Link", ColumnType::Url, 6),
        column("col_end", "Ends", ColumnType::Date, 7),
    ];

    let backlog = group(
        "group_backlog",
        "Backlog",
        0,
        false,
        vec![
            ItemBuilder::new("item_scope", "Define MVP scope", 0)
                .status("col_status", "Working")
                .person("col_owner", "user_1")
                .date("col_due", "2026-02-20T00:00:00.000Z")
                .date("col_end", "2026-02-23")
                .number("col_estimate", Some(8.0))
                .tags("col_tags", &["MVP", "Planning"])
                .checkbox("col_done", true)
                .url("col_link", "https://docs.example.com/mvp")
                .build(),
            ItemBuilder::new("item_docs", "Write docs", 1)
                .status("col_status", "Not Started")
                .date("col_due", "2026-02-21")
                .date("col_end", "2026-02-22")
                .number("col_estimate", Some(2.0))
                .tags("col_tags", &["docs"])
                .checkbox("col_done", false)
                .build(),
            ItemBuilder::new("item_triage", "Triage inbox", 2)
                .number("col_estimate", None)
                .build(),
        ],
    );

    let done = group(
        "group_done",
        "Done",
        1,
        true,
        vec![
            ItemBuilder::new("item_kickoff", "Kickoff", 0)
                .status("col_status", "Done")
                .person("col_owner", "user_404")
                .build(),
        ],
    );

    let mut board = board(columns, vec![backlog, done]);
    board.views = vec![BoardView {
        id: "view_working".to_string(),
        name: "In flight".to_string(),
        view_type: ViewType::Table,
        position: 0,
        config: Some(ViewConfig {
            status_value: Some("Working".to_string()),
            ..Default::default()
        }),
    }];
    board
}

/// One group of `count` items with ids `large_item_<n>` in position order.
pub fn large_board(count: usize) -> BoardSnapshot {
    let items = (0..count)
        .map(|i| {
            ItemBuilder::new(&format!("large_item_{i}"), &format!("Large item {i}"), i as i64)
                .build()
        })
        .collect();
    board(vec![], vec![group("group_large", "Large", 0, false, items)])
}

pub fn item_ids(board: &BoardSnapshot) -> Vec<String> {
    board
        .groups
        .iter()
        .flat_map(|g| g.items.iter().map(|i| i.id.clone()))
        .collect()
}
