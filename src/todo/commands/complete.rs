use crate::commands::helpers::{join_ids, partition_ids, report_invalid};
use crate::commands::{CmdMessage, CmdResult, Selection};
use crate::error::{Result, TodoError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, selection: &Selection) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let mut result = CmdResult::default();

    match selection {
        Selection::All => {
            for todo in todos.iter_mut().filter(|t| !t.completed) {
                todo.mark_complete();
                result.add_message(CmdMessage::success(format!(
                    "Completed #{}: {}",
                    todo.id, todo.description
                )));
                result.affected.push(todo.clone());
            }
            if result.affected.is_empty() {
                result.add_message(CmdMessage::info("No pending todos to complete."));
                return Ok(result);
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
                todo.mark_complete();
                result.add_message(CmdMessage::success(format!(
                    "Completed #{}: {}",
                    todo.id, todo.description
                )));
                result.affected.push(todo.clone());
            }
            report_invalid(&mut result, invalid);
        }
    }

    store.save(&todos)?;
    Ok(result)
}
