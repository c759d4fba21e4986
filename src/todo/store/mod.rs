//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts persistence so the command layer can run
//! against different backends:
//!
//! - [`fs::FileStore`]: production storage — one JSON document holding the
//!   full todo array
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! The whole collection is the unit of read and write. Every mutating
//! command loads the full array, changes it in memory, and writes it back;
//! there are no partial updates and no transaction log. A crash mid-write
//! can corrupt the document — a documented limitation of the format, not
//! something this layer defends against.

use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId};

pub mod fs;
pub mod memory;

/// Upper bound on concurrently stored todos. IDs live in [0, MAX_TODOS).
pub const MAX_TODOS: usize = 100;

/// Abstract interface for todo persistence.
pub trait DataStore {
    /// Read the full collection. A store that has never been written yields
    /// an empty collection rather than an error.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Replace the persisted collection with `todos`.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}

/// Smallest ID not used by `todos`. Erased IDs become free again, so this
/// fills gaps before extending the range.
pub fn next_id(todos: &[Todo]) -> Result<TodoId> {
    let mut used = [false; MAX_TODOS];
    for todo in todos {
        if (todo.id as usize) < MAX_TODOS {
            used[todo.id as usize] = true;
        }
    }
    used.iter()
        .position(|&taken| !taken)
        .map(|id| id as TodoId)
        .ok_or(TodoError::CapacityExceeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Todo};

    fn todo_with_id(id: TodoId) -> Todo {
        Todo::new(id, format!("Task {}", id), Priority::Medium, None)
    }

    #[test]
    fn next_id_starts_at_zero() {
        assert_eq!(next_id(&[]).unwrap(), 0);
    }

    #[test]
    fn next_id_fills_gaps_first() {
        let todos = vec![todo_with_id(0), todo_with_id(2), todo_with_id(3)];
        assert_eq!(next_id(&todos).unwrap(), 1);
    }

    #[test]
    fn next_id_extends_past_contiguous_range() {
        let todos = vec![todo_with_id(0), todo_with_id(1), todo_with_id(2)];
        assert_eq!(next_id(&todos).unwrap(), 3);
    }

    #[test]
    fn next_id_fails_when_full() {
        let todos: Vec<Todo> = (0..MAX_TODOS).map(|i| todo_with_id(i as TodoId)).collect();
        assert!(matches!(
            next_id(&todos),
            Err(TodoError::CapacityExceeded)
        ));
    }
}
