use crate::commands::CmdResult;
use crate::error::{Result, TodoError};
use crate::model::TodoId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: TodoId) -> Result<CmdResult> {
    let todos = store.load()?;
    let todo = todos
        .into_iter()
        .find(|t| t.id == id)
        .ok_or(TodoError::NotFound(id))?;
    Ok(CmdResult::default().with_listed(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_full_record() {
        let fixture = StoreFixture::new().with_file_todo("Check logging", "src/log.rs");
        let result = run(&fixture.store, 0).unwrap();
        let todo = &result.listed[0];
        assert_eq!(todo.description, "Check logging");
        assert_eq!(todo.file.as_deref(), Some("src/log.rs"));
        assert_eq!(todo.priority, Priority::Medium);
    }

    #[test]
    fn absent_id_is_not_found() {
        let fixture = StoreFixture::new().with_todo("Only #0", Priority::Medium);
        assert!(matches!(
            run(&fixture.store, 1),
            Err(TodoError::NotFound(1))
        ));
    }
}
