use crate::types::Column;

/// Move `moving_id` into the slot held by `target_id` and renumber positions.
///
/// Returns the input order unchanged when either id is unknown or both are
/// the same column.
pub fn reorder_columns_by_id(columns: &[Column], moving_id: &str, target_id: &str) -> Vec<Column> {
    let source_index = columns.iter().position(|column| column.id == moving_id);
    let target_index = columns.iter().position(|column| column.id == target_id);

    let (Some(source_index), Some(target_index)) = (source_index, target_index) else {
        return columns.to_vec();
    };
    if source_index == target_index {
        return columns.to_vec();
    }

    let mut next: Vec<Column> = columns.to_vec();
    let moving = next.remove(source_index);
    let insert_index = next
        .iter()
        .position(|column| column.id == target_id)
        .unwrap_or(next.len());
    next.insert(insert_index, moving);

    for (position, column) in next.iter_mut().enumerate() {
        column.position = position as i64;
    }
    next
}
