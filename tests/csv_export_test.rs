mod common;

use boardview::{ColumnType, SortBy, ViewConfig, apply_board_view_config, build_board_csv};
use common::fixtures::{ItemBuilder, board, column, demo_board, group};

#[test]
fn test_demo_board_export() {
    let csv = build_board_csv(&demo_board()).unwrap();

    insta::assert_snapshot!(csv, @r#"
    Group,Item,Status,Owner,Due,Estimate,Tags,Reviewed,Link,Ends
    Backlog,Define MVP scope,Working,Demo Owner,2026-02-20,8,"MVP, Planning",Checked,https://docs.example.com/mvp,2026-02-23
    Backlog,Write docs,Not Started,,2026-02-21,2,docs,Unchecked,,2026-02-22
    Backlog,Triage inbox,,,,,,,,
    Done,Kickoff,Done,user_404,,,,,,
    "#);
}

#[test]
fn test_export_follows_view_order() {
    let board = demo_board();
    let view = apply_board_view_config(
        &board,
        &ViewConfig {
            sort_by: Some(SortBy::NumberAsc),
            ..Default::default()
        },
    );

    let csv = build_board_csv(&view).unwrap();
    let items: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(items, vec!["Write docs", "Define MVP scope", "Triage inbox", "Kickoff"]);
}

#[test]
fn test_escaping_of_special_characters() {
    let snapshot = board(
        vec![
            column("col_notes", "Notes, \"quoted\"", ColumnType::Text, 0),
            column("col_url", "Link", ColumnType::Url, 1),
        ],
        vec![group(
            "group_1",
            "Q1 \"Launch\"",
            0,
            false,
            vec![
                ItemBuilder::new("item_1", "Ship, then celebrate", 0)
                    .text("col_notes", "Line 1\nLine 2")
                    .url("col_url", "https://example.com/?a=1&b=2")
                    .build(),
            ],
        )],
    );

    let csv = build_board_csv(&snapshot).unwrap();

    assert_eq!(
        csv,
        "Group,Item,\"Notes, \"\"quoted\"\"\",Link\n\
         \"Q1 \"\"Launch\"\"\",\"Ship, then celebrate\",\"Line 1\nLine 2\",https://example.com/?a=1&b=2"
    );
}

#[test]
fn test_board_without_columns_or_items() {
    let empty = board(vec![], vec![]);
    assert_eq!(build_board_csv(&empty).unwrap(), "Group,Item");
}
