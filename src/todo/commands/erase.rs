use crate::commands::helpers::{join_ids, partition_ids, report_invalid};
use crate::commands::{CmdMessage, CmdResult, EraseTarget};
use crate::error::{Result, TodoError};
use crate::model::TodoId;
use crate::store::DataStore;

/// Remove records from the collection. Without `force` a non-empty target
/// set yields a confirmation-required result instead of mutating; the
/// caller prompts and re-invokes with `force = true`. Erased IDs become
/// free for future adds.
pub fn run<S: DataStore>(store: &mut S, target: &EraseTarget, force: bool) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let mut result = CmdResult::default();

    let (selected, invalid): (Vec<TodoId>, Vec<TodoId>) = match target {
        EraseTarget::Ids(ids) => {
            let (valid, invalid) = partition_ids(&todos, ids);
            if valid.is_empty() {
                return Err(TodoError::Validation(format!(
                    "No matching todos for IDs: {}",
                    join_ids(&invalid)
                )));
            }
            (valid, invalid)
        }
        EraseTarget::All => (todos.iter().map(|t| t.id).collect(), Vec::new()),
        EraseTarget::Completed => (
            todos.iter().filter(|t| t.completed).map(|t| t.id).collect(),
            Vec::new(),
        ),
        EraseTarget::Pending => (
            todos
                .iter()
                .filter(|t| !t.completed)
                .map(|t| t.id)
                .collect(),
            Vec::new(),
        ),
    };

    if selected.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} to erase.",
            target.describe()
        )));
        return Ok(result);
    }

    result.affected = todos
        .iter()
        .filter(|t| selected.contains(&t.id))
        .cloned()
        .collect();
    report_invalid(&mut result, invalid);

    if !force {
        result.needs_confirmation = true;
        return Ok(result);
    }

    todos.retain(|t| !selected.contains(&t.id));
    store.save(&todos)?;

    result.add_message(CmdMessage::success(format!(
        "Erased {} {}: {}",
        selected.len(),
        target.describe(),
        join_ids(&selected)
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn without_force_nothing_is_removed() {
        let mut fixture = StoreFixture::new()
            .with_todo("A", Priority::Medium)
            .with_todo("B", Priority::Medium);

        let result = run(&mut fixture.store, &EraseTarget::All, false).unwrap();
        assert!(result.needs_confirmation);
        assert_eq!(result.affected.len(), 2);
        assert_eq!(fixture.store.load().unwrap().len(), 2);
    }

    #[test]
    fn with_force_all_targets_are_removed_and_ids_freed() {
        let mut fixture = StoreFixture::new()
            .with_todo("A", Priority::Medium)
            .with_todo("B", Priority::Medium);

        let result = run(&mut fixture.store, &EraseTarget::All, true).unwrap();
        assert!(!result.needs_confirmation);
        assert!(fixture.store.load().unwrap().is_empty());

        // Freed IDs are handed out again.
        let added = add::run(&mut fixture.store, "New", "m", None).unwrap();
        assert_eq!(added.affected[0].id, 0);
    }

    #[test]
    fn completed_predicate_only_removes_completed_records() {
        let mut fixture = StoreFixture::new()
            .with_todo("Open", Priority::Medium)
            .with_completed_todo("Done", Priority::Medium);

        run(&mut fixture.store, &EraseTarget::Completed, true).unwrap();
        let todos = fixture.store.load().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].description, "Open");
    }

    #[test]
    fn pending_predicate_only_removes_pending_records() {
        let mut fixture = StoreFixture::new()
            .with_todo("Open", Priority::Medium)
            .with_completed_todo("Done", Priority::Medium);

        run(&mut fixture.store, &EraseTarget::Pending, true).unwrap();
        let todos = fixture.store.load().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].description, "Done");
    }

    #[test]
    fn invalid_explicit_ids_are_reported_without_aborting() {
        let mut fixture = StoreFixture::new()
            .with_todo("A", Priority::Medium)
            .with_todo("B", Priority::Medium);

        let result = run(&mut fixture.store, &EraseTarget::Ids(vec![0, 77]), true).unwrap();
        assert_eq!(result.invalid_ids, vec![77]);

        let todos = fixture.store.load().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn empty_predicate_target_is_an_informational_noop() {
        let mut fixture = StoreFixture::new().with_todo("Open", Priority::Medium);
        let result = run(&mut fixture.store, &EraseTarget::Completed, false).unwrap();
        assert!(!result.needs_confirmation);
        assert!(result.affected.is_empty());
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }

    #[test]
    fn zero_valid_explicit_ids_is_an_error() {
        let mut fixture = StoreFixture::new().with_todo("A", Priority::Medium);
        assert!(matches!(
            run(&mut fixture.store, &EraseTarget::Ids(vec![9]), true),
            Err(TodoError::Validation(_))
        ));
        assert_eq!(fixture.store.load().unwrap().len(), 1);
    }
}
