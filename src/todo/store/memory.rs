use super::DataStore;
use crate::error::Result;
use crate::model::Todo;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.todos = todos.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Priority;
    use crate::store::next_id;

    /// Builder for pre-populated stores.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todo(self, description: &str, priority: Priority) -> Self {
            self.push(description, priority, None, false)
        }

        pub fn with_completed_todo(self, description: &str, priority: Priority) -> Self {
            self.push(description, priority, None, true)
        }

        pub fn with_file_todo(self, description: &str, file: &str) -> Self {
            self.push(description, Priority::Medium, Some(file.to_string()), false)
        }

        fn push(
            mut self,
            description: &str,
            priority: Priority,
            file: Option<String>,
            completed: bool,
        ) -> Self {
            let mut todos = self.store.load().unwrap();
            let id = next_id(&todos).unwrap();
            let mut todo = Todo::new(id, description.to_string(), priority, file);
            if completed {
                todo.mark_complete();
            }
            todos.push(todo);
            self.store.save(&todos).unwrap();
            self
        }
    }
}
