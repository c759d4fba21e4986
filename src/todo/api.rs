//! # API Facade
//!
//! Thin facade over the command layer: the single entry point for all todo
//! operations, regardless of the client. It dispatches, nothing more —
//! business logic lives in `commands/*.rs`, and no I/O or presentation
//! concerns exist from here inward.
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::TodoId;
use crate::store::DataStore;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(
        &mut self,
        description: &str,
        priority: &str,
        file: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, description, priority, file)
    }

    pub fn list(&self, filter: &TodoFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn complete(&mut self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::complete::run(&mut self.store, selection)
    }

    pub fn pending(&mut self, selection: &Selection) -> Result<commands::CmdResult> {
        commands::pending::run(&mut self.store, selection)
    }

    pub fn modify(&mut self, selection: &Selection, priority: &str) -> Result<commands::CmdResult> {
        commands::modify::run(&mut self.store, selection, priority)
    }

    pub fn erase(&mut self, target: &EraseTarget, force: bool) -> Result<commands::CmdResult> {
        commands::erase::run(&mut self.store, target, force)
    }

    pub fn show(&self, id: TodoId) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }
}

pub use commands::{
    CmdMessage, CmdResult, EraseTarget, MessageLevel, Selection, StatusFilter, TodoFilter,
};
