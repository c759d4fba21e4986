use crate::commands::helpers::sort_for_display;
use crate::commands::{CmdResult, StatusFilter, TodoFilter};
use crate::error::Result;
use crate::model::Todo;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, filter: &TodoFilter) -> Result<CmdResult> {
    let todos = store.load()?;

    let mut listed: Vec<Todo> = todos
        .into_iter()
        .filter(|t| match filter.status {
            StatusFilter::All => true,
            StatusFilter::Completed => t.completed,
            StatusFilter::Pending => !t.completed,
        })
        .filter(|t| match &filter.file_pattern {
            Some(pattern) => t
                .file
                .as_deref()
                .is_some_and(|file| file.contains(pattern.as_str())),
            None => true,
        })
        .collect();

    sort_for_display(&mut listed);
    Ok(CmdResult::default().with_listed(listed))
}
