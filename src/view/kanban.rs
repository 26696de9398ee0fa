use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::query::sort_by_position;
use crate::search::get_status_options;
use crate::types::{BoardSnapshot, ColumnType, Item};

pub const UNASSIGNED_LANE_ID: &str = "UNASSIGNED";

/// One kanban column: a status option and the items carrying it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanLane {
    pub id: String,
    pub label: String,
    pub color: String,
    pub items: Vec<Arc<Item>>,
}

/// Group every item of the board into lanes by its STATUS value.
///
/// Lanes follow the first STATUS column's options, with duplicate labels
/// collapsed onto the first occurrence, and end with a synthetic
/// `UNASSIGNED` lane for items whose status is missing or unknown. Returns
/// no lanes when the board has no STATUS column.
pub fn build_kanban_lanes(board: &BoardSnapshot) -> Vec<KanbanLane> {
    let Some(status_column) = board.first_column_of_type(ColumnType::Status) else {
        return Vec::new();
    };

    let options = get_status_options(status_column.status_options());
    let mut lanes: Vec<KanbanLane> = Vec::with_capacity(options.len() + 1);
    let mut lane_by_label: HashMap<&str, usize> = HashMap::new();

    for option in options.iter() {
        if lane_by_label.contains_key(option.label.as_str()) {
            continue;
        }
        lane_by_label.insert(option.label.as_str(), lanes.len());
        lanes.push(KanbanLane {
            id: option.label.clone(),
            label: option.label.clone(),
            color: option.color.clone(),
            items: Vec::new(),
        });
    }

    let mut unassigned = Vec::new();
    for item in board.groups.iter().flat_map(|group| group.items.iter()) {
        let lane = item
            .cell(Some(&status_column.id))
            .and_then(|value| value.status_value.as_deref())
            .filter(|status| !status.is_empty())
            .and_then(|status| lane_by_label.get(status));

        match lane {
            Some(&index) => lanes[index].items.push(Arc::clone(item)),
            None => unassigned.push(Arc::clone(item)),
        }
    }

    lanes.push(KanbanLane {
        id: UNASSIGNED_LANE_ID.to_string(),
        label: "Unassigned".to_string(),
        color: "slate".to_string(),
        items: unassigned,
    });

    for lane in &mut lanes {
        sort_by_position(&mut lane.items);
    }

    tracing::debug!(
        "Built {} kanban lanes from column {}",
        lanes.len(),
        status_column.id
    );

    lanes
}
