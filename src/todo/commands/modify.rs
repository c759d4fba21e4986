use crate::commands::helpers::{join_ids, partition_ids, report_invalid};
use crate::commands::{CmdMessage, CmdResult, Selection};
use crate::error::{Result, TodoError};
use crate::model::Priority;
use crate::store::DataStore;

/// Re-prioritize records. Tokens are normalized exactly as `add` does it;
/// no confirmation is asked — re-running with the old value undoes it.
pub fn run<S: DataStore>(store: &mut S, selection: &Selection, priority: &str) -> Result<CmdResult> {
    let priority = Priority::parse(priority)?;
    let mut todos = store.load()?;
    let mut result = CmdResult::default();

    match selection {
        Selection::All => {
            if todos.is_empty() {
                result.add_message(CmdMessage::info("No todos to modify."));
                return Ok(result);
            }
            for todo in todos.iter_mut() {
                todo.priority = priority;
                result.add_message(CmdMessage::success(format!(
                    "Set #{} to {}: {}",
                    todo.id, priority, todo.description
                )));
                result.affected.push(todo.clone());
            }
        }
        Selection::Ids(ids) => {
            let (valid, invalid) = partition_ids(&todos, ids);
            if valid.is_empty() {
                return Err(TodoError::Validation(format!(
                    "No matching todos for IDs: {}",
                    join_ids(&invalid)
                )));
            }
            for todo in todos.iter_mut().filter(|t| valid.contains(&t.id)) {
                todo.priority = priority;
                result.add_message(CmdMessage::success(format!(
                    "Set #{} to {}: {}",
                    todo.id, priority, todo.description
                )));
                result.affected.push(todo.clone());
            }
            report_invalid(&mut result, invalid);
        }
    }

    store.save(&todos)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shorthand_tokens_normalize_before_storage() {
        let mut fixture = StoreFixture::new().with_todo("Task", Priority::Medium);

        run(&mut fixture.store, &Selection::Ids(vec![0]), "H").unwrap();
        assert_eq!(fixture.store.load().unwrap()[0].priority, Priority::High);

        run(&mut fixture.store, &Selection::Ids(vec![0]), "l").unwrap();
        assert_eq!(fixture.store.load().unwrap()[0].priority, Priority::Low);
    }

    #[test]
    fn bad_token_fails_before_any_mutation() {
        let mut fixture = StoreFixture::new().with_todo("Task", Priority::Medium);
        assert!(matches!(
            run(&mut fixture.store, &Selection::All, "asap"),
            Err(TodoError::Validation(_))
        ));
        assert_eq!(fixture.store.load().unwrap()[0].priority, Priority::Medium);
    }

    #[test]
    fn partial_invalid_ids_still_apply_to_valid_ones() {
        let mut fixture = StoreFixture::new()
            .with_todo("A", Priority::Low)
            .with_todo("B", Priority::Low);

        let result = run(&mut fixture.store, &Selection::Ids(vec![1, 50]), "high").unwrap();
        assert_eq!(result.invalid_ids, vec![50]);

        let todos = fixture.store.load().unwrap();
        assert_eq!(todos[0].priority, Priority::Low);
        assert_eq!(todos[1].priority, Priority::High);
    }

    #[test]
    fn all_touches_every_record() {
        let mut fixture = StoreFixture::new()
            .with_todo("A", Priority::Low)
            .with_completed_todo("B", Priority::High);

        run(&mut fixture.store, &Selection::All, "m").unwrap();
        assert!(fixture
            .store
            .load()
            .unwrap()
            .iter()
            .all(|t| t.priority == Priority::Medium));
    }
}
