use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TodoError};
use crate::model::{Priority, Todo};
use crate::store::{next_id, DataStore};

pub fn run<S: DataStore>(
    store: &mut S,
    description: &str,
    priority: &str,
    file: Option<String>,
) -> Result<CmdResult> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TodoError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }
    let priority = Priority::parse(priority)?;

    let mut todos = store.load()?;
    let id = next_id(&todos)?;
    let todo = Todo::new(id, description.to_string(), priority, file);
    todos.push(todo.clone());
    store.save(&todos)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added todo #{}: {} ({})",
        todo.id, todo.description, todo.priority
    )));
    Ok(result.with_affected(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::show;
    use crate::store::memory::InMemoryStore;
    use crate::store::MAX_TODOS;

    #[test]
    fn add_then_show_round_trips() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            "Fix the login flow",
            "h",
            Some("src/auth.rs".into()),
        )
        .unwrap();

        let shown = show::run(&store, 0).unwrap();
        let todo = &shown.listed[0];
        assert_eq!(todo.description, "Fix the login flow");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.file.as_deref(), Some("src/auth.rs"));
        assert!(!todo.completed);
    }

    #[test]
    fn blank_description_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "   ", "medium", None),
            Err(TodoError::Validation(_))
        ));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn bad_priority_token_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "Task", "urgent", None),
            Err(TodoError::Validation(_))
        ));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn ids_are_assigned_lowest_free_first() {
        let mut store = InMemoryStore::new();
        for desc in ["a", "b", "c"] {
            run(&mut store, desc, "m", None).unwrap();
        }

        // Free ID 1, then add again: the new record takes 1, not 3.
        let mut todos = store.load().unwrap();
        todos.retain(|t| t.id != 1);
        store.save(&todos).unwrap();

        let result = run(&mut store, "d", "m", None).unwrap();
        assert_eq!(result.affected[0].id, 1);
    }

    #[test]
    fn the_hundred_and_first_todo_is_refused() {
        let mut store = InMemoryStore::new();
        for i in 0..MAX_TODOS {
            run(&mut store, &format!("Task {}", i), "m", None).unwrap();
        }
        assert!(matches!(
            run(&mut store, "One too many", "m", None),
            Err(TodoError::CapacityExceeded)
        ));
        assert_eq!(store.load().unwrap().len(), MAX_TODOS);
    }
}
