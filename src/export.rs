//! CSV export of a board snapshot.

use std::collections::HashMap;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{BoardError, Result};
use crate::types::{BoardSnapshot, Column, ColumnType, Item, Member};
use crate::utils::format_date_only;

/// Render a NUMBER the way the board UI prints it: integral values carry
/// no fractional part and negative zero prints as `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn display_value(item: &Item, column: &Column, members: &HashMap<&str, &Member>) -> String {
    let Some(value) = item.cell(Some(&column.id)) else {
        return String::new();
    };

    match column.column_type {
        ColumnType::Text => value.text_value.clone().unwrap_or_default(),
        ColumnType::Status => value.status_value.clone().unwrap_or_default(),
        ColumnType::Person => match value.person_id.as_deref() {
            None | Some("") => String::new(),
            Some(person_id) => members
                .get(person_id)
                .map(|member| member.label())
                .filter(|label| !label.is_empty())
                .unwrap_or(person_id)
                .to_string(),
        },
        ColumnType::Date => match value.date_value.as_deref() {
            None | Some("") => String::new(),
            Some(raw) => format_date_only(raw),
        },
        ColumnType::Number => value.number_value.map(format_number).unwrap_or_default(),
        ColumnType::Tags => value
            .tags_value
            .as_ref()
            .map(|tags| tags.join(", "))
            .unwrap_or_default(),
        ColumnType::Checkbox => match value.checkbox_value {
            Some(true) => "Checked".to_string(),
            Some(false) => "Unchecked".to_string(),
            None => String::new(),
        },
        ColumnType::Url => value.url_value.clone().unwrap_or_default(),
    }
}

/// Flatten the board into CSV: a `Group,Item,<column names>` header, then
/// one row per item in group order.
///
/// Cells containing a quote, comma or line break are quoted with inner
/// quotes doubled. Rows are separated by `\n` with no trailing newline.
pub fn build_board_csv(snapshot: &BoardSnapshot) -> Result<String> {
    let members: HashMap<&str, &Member> = snapshot
        .members
        .iter()
        .map(|member| (member.user_id.as_str(), member))
        .collect();

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header = ["Group", "Item"]
        .into_iter()
        .chain(snapshot.columns.iter().map(|column| column.name.as_str()));
    writer.write_record(header)?;

    let mut rows = 0usize;
    for group in &snapshot.groups {
        for item in &group.items {
            let mut record = Vec::with_capacity(snapshot.columns.len() + 2);
            record.push(group.name.clone());
            record.push(item.name.clone());
            record.extend(
                snapshot
                    .columns
                    .iter()
                    .map(|column| display_value(item, column, &members)),
            );
            writer.write_record(&record)?;
            rows += 1;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BoardError::Io(e.into_error()))?;
    let mut csv = String::from_utf8(bytes)
        .map_err(|e| BoardError::Other(format!("CSV output is not UTF-8: {e}")))?;
    if csv.ends_with('\n') {
        csv.pop();
    }

    tracing::debug!("Exported {} rows from board {}", rows, snapshot.board_id);
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellValue, Group, MemberRole};
    use std::sync::Arc;

    fn column(id: &str, name: &str, column_type: ColumnType) -> Column {
        Column {
            id: id.to_string(),
            name: name.to_string(),
            column_type,
            position: 0,
            settings: None,
        }
    }

    fn cell(column_id: &str, fill: impl FnOnce(&mut CellValue)) -> CellValue {
        let mut value = CellValue::empty("item_1", column_id);
        fill(&mut value);
        value
    }

    fn snapshot(name: &str, values: Vec<CellValue>) -> BoardSnapshot {
        BoardSnapshot {
            workspace_id: "ws_1".to_string(),
            board_id: "board_1".to_string(),
            board_name: "Tasks".to_string(),
            views: vec![],
            columns: vec![
                column("col_text", "Notes", ColumnType::Text),
                column("col_person", "Owner", ColumnType::Person),
                column("col_date", "Due Date", ColumnType::Date),
                column("col_number", "Estimate", ColumnType::Number),
                column("col_tags", "Tags", ColumnType::Tags),
                column("col_done", "Done", ColumnType::Checkbox),
            ],
            groups: vec![Group {
                id: "group_1".to_string(),
                name: "Backlog".to_string(),
                position: 0,
                is_collapsed: false,
                items: vec![Arc::new(Item {
                    id: "item_1".to_string(),
                    group_id: "group_1".to_string(),
                    name: name.to_string(),
                    position: 0,
                    last_edited_by_id: None,
                    values,
                })],
            }],
            members: vec![Member {
                user_id: "user_1".to_string(),
                email: "owner@example.com".to_string(),
                name: Some("Demo Owner".to_string()),
                role: MemberRole::Owner,
            }],
        }
    }

    #[test]
    fn test_typed_values() {
        let csv = build_board_csv(&snapshot(
            "Define MVP scope",
            vec![
                cell("col_text", |v| v.text_value = Some("Capture scope".to_string())),
                cell("col_person", |v| v.person_id = Some("user_1".to_string())),
                cell("col_date", |v| v.date_value = Some("2026-02-20T00:00:00.000Z".to_string())),
                cell("col_number", |v| v.number_value = Some(8.0)),
                cell("col_tags", |v| v.tags_value = Some(vec!["a".to_string(), "b".to_string()])),
                cell("col_done", |v| v.checkbox_value = Some(false)),
            ],
        ))
        .unwrap();

        assert_eq!(
            csv,
            "Group,Item,Notes,Owner,Due Date,Estimate,Tags,Done\n\
             Backlog,Define MVP scope,Capture scope,Demo Owner,2026-02-20,8,\"a, b\",Unchecked"
        );
    }

    #[test]
    fn test_escapes_commas_quotes_and_newlines() {
        let csv = build_board_csv(&snapshot(
            "Ship, \"Stage 1\"",
            vec![cell("col_text", |v| v.text_value = Some("Line 1\nLine 2".to_string()))],
        ))
        .unwrap();

        assert!(csv.contains("\"Ship, \"\"Stage 1\"\"\""));
        assert!(csv.contains("\"Line 1\nLine 2\""));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_unknown_person_and_empty_values() {
        let csv = build_board_csv(&snapshot(
            "Item",
            vec![
                cell("col_person", |v| v.person_id = Some("user_404".to_string())),
                cell("col_number", |v| v.number_value = Some(2.5)),
                cell("col_done", |_| {}),
            ],
        ))
        .unwrap();

        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Backlog,Item,,user_404,,2.5,,");
    }

    #[test]
    fn test_non_ascii_digit_date_is_exported_verbatim() {
        let csv = build_board_csv(&snapshot(
            "Item",
            vec![cell("col_date", |v| v.date_value = Some("٢٠٢٦-٠٢-٢٠".to_string()))],
        ))
        .unwrap();

        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Backlog,Item,,,٢٠٢٦-٠٢-٢٠,,,");
    }

    #[test]
    fn test_number_format() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-3.25), "-3.25");
    }
}
