use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Todo, TodoId};

/// Split requested IDs into those present in the collection and those not.
/// Bulk commands proceed on the valid subset and report the rest — the
/// skip-invalid-continue policy. Duplicates are collapsed.
pub fn partition_ids(todos: &[Todo], requested: &[TodoId]) -> (Vec<TodoId>, Vec<TodoId>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    for &id in requested {
        if valid.contains(&id) || invalid.contains(&id) {
            continue;
        }
        if todos.iter().any(|t| t.id == id) {
            valid.push(id);
        } else {
            invalid.push(id);
        }
    }
    (valid, invalid)
}

/// Total display order: priority rank first (high, medium, low), then ID
/// ascending within a rank.
pub fn sort_for_display(todos: &mut [Todo]) {
    todos.sort_by_key(|t| (t.priority.rank(), t.id));
}

pub fn join_ids(ids: &[TodoId]) -> String {
    ids.iter()
        .map(|id| format!("#{}", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Record skipped IDs on the result: the list itself plus a warning line.
pub fn report_invalid(result: &mut CmdResult, invalid: Vec<TodoId>) {
    if invalid.is_empty() {
        return;
    }
    result.add_message(CmdMessage::warning(format!(
        "Skipped {} unknown todo ID(s): {}",
        invalid.len(),
        join_ids(&invalid)
    )));
    result.invalid_ids = invalid;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Todo};

    fn collection() -> Vec<Todo> {
        vec![
            Todo::new(0, "Low".into(), Priority::Low, None),
            Todo::new(1, "High".into(), Priority::High, None),
            Todo::new(2, "Medium".into(), Priority::Medium, None),
            Todo::new(3, "Also high".into(), Priority::High, None),
        ]
    }

    #[test]
    fn partition_separates_valid_from_invalid() {
        let todos = collection();
        let (valid, invalid) = partition_ids(&todos, &[1, 7, 3, 99]);
        assert_eq!(valid, vec![1, 3]);
        assert_eq!(invalid, vec![7, 99]);
    }

    #[test]
    fn partition_collapses_duplicates() {
        let todos = collection();
        let (valid, invalid) = partition_ids(&todos, &[2, 2, 9, 9]);
        assert_eq!(valid, vec![2]);
        assert_eq!(invalid, vec![9]);
    }

    #[test]
    fn sort_is_rank_then_id() {
        let mut todos = collection();
        sort_for_display(&mut todos);
        let ids: Vec<_> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 0]);
    }
}
