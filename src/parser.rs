//! Decoding of board snapshots from their JSON wire form.
//!
//! Column settings and view configs arrive as loose JSON blobs. They are
//! converted here into typed values keyed by the column type, so the rest of
//! the crate only ever sees well-typed snapshots.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{BoardError, Result};
use crate::pagination::BootstrapPayload;
use crate::types::{
    BoardSnapshot, BoardView, Column, ColumnSettings, ColumnType, StatusOption, ViewConfig,
    ViewType,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColumn {
    id: String,
    name: String,
    #[serde(rename = "type")]
    column_type: ColumnType,
    position: i64,
    #[serde(default)]
    settings: Option<Value>,
}

impl From<RawColumn> for Column {
    fn from(raw: RawColumn) -> Self {
        let settings = decode_column_settings(&raw.id, raw.column_type, raw.settings.as_ref());
        Column {
            id: raw.id,
            name: raw.name,
            column_type: raw.column_type,
            position: raw.position,
            settings,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoardView {
    id: String,
    name: String,
    #[serde(rename = "type")]
    view_type: ViewType,
    position: i64,
    #[serde(default)]
    config: Option<Value>,
}

impl From<RawBoardView> for BoardView {
    fn from(raw: RawBoardView) -> Self {
        let config = decode_view_config(&raw.id, raw.config);
        BoardView {
            id: raw.id,
            name: raw.name,
            view_type: raw.view_type,
            position: raw.position,
            config,
        }
    }
}

fn decode_column_settings(
    column_id: &str,
    column_type: ColumnType,
    raw: Option<&Value>,
) -> Option<ColumnSettings> {
    let object = raw?.as_object()?;

    match column_type {
        ColumnType::Status => {
            let options = object
                .get("options")
                .and_then(Value::as_array)
                .map(|entries| {
                    entries
                        .iter()
                        .filter_map(|entry| {
                            match serde_json::from_value::<StatusOption>(entry.clone()) {
                                Ok(option) => Some(option),
                                Err(e) => {
                                    tracing::warn!(
                                        "Skipping malformed status option on column {column_id}: {e}"
                                    );
                                    None
                                }
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();
            Some(ColumnSettings::Status { options })
        }
        _ => None,
    }
}

fn decode_view_config(view_id: &str, raw: Option<Value>) -> Option<ViewConfig> {
    let raw = raw?;
    if !raw.is_object() {
        return None;
    }

    match serde_json::from_value::<ViewConfig>(raw) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring malformed config on view {view_id}: {e}");
            None
        }
    }
}

/// Tags arrive as an arbitrary JSON value. Non-string entries are dropped,
/// the rest trimmed, and empty entries removed.
pub fn deserialize_tags<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::Array(entries) => Some(
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }))
}

/// Check structural invariants serde cannot express.
pub fn validate_snapshot(snapshot: &BoardSnapshot) -> Result<()> {
    for group in &snapshot.groups {
        for item in &group.items {
            let mut seen = HashSet::new();
            for value in &item.values {
                if !seen.insert(value.column_id.as_str()) {
                    return Err(BoardError::InvalidSnapshot(format!(
                        "item '{}' has more than one value for column '{}'",
                        item.id, value.column_id
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Parse a bare board snapshot.
pub fn parse_snapshot(content: &str) -> Result<BoardSnapshot> {
    let snapshot: BoardSnapshot = serde_json::from_str(content)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Parse either a bare snapshot or a `{snapshot, pageInfo}` envelope.
pub fn parse_bootstrap_payload(content: &str) -> Result<BootstrapPayload> {
    let payload: BootstrapPayload = serde_json::from_str(content)?;
    validate_snapshot(payload.snapshot())?;
    Ok(payload)
}

/// Read and parse a snapshot or envelope file.
pub fn load_bootstrap_payload(path: &Path) -> Result<BootstrapPayload> {
    let content = fs::read_to_string(path).map_err(|e| {
        BoardError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read board file at {}: {}", path.display(), e),
        ))
    })?;
    parse_bootstrap_payload(&content)
}
