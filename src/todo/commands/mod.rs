use crate::model::{Todo, TodoId};

pub mod add;
pub mod complete;
pub mod erase;
pub mod helpers;
pub mod list;
pub mod modify;
pub mod pending;
pub mod show;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Which records a bulk command (complete/pending/modify) acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Ids(Vec<TodoId>),
    All,
}

/// Target set for `erase`: explicit IDs, or one of the bulk predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EraseTarget {
    Ids(Vec<TodoId>),
    All,
    Completed,
    Pending,
}

impl EraseTarget {
    /// Human description of the target set, used in summaries and prompts.
    pub fn describe(&self) -> &'static str {
        match self {
            EraseTarget::Ids(_) => "selected todos",
            EraseTarget::All => "todos",
            EraseTarget::Completed => "completed todos",
            EraseTarget::Pending => "pending todos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub status: StatusFilter,
    /// Case-sensitive substring match against the `file` association.
    /// Records with no file never match.
    pub file_pattern: Option<String>,
}

/// Structured outcome of a command, for the presentation layer to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or mutated (or, for an unconfirmed erase, the records
    /// that WOULD be removed).
    pub affected: Vec<Todo>,
    /// Records selected by a read-only command, in display order.
    pub listed: Vec<Todo>,
    /// Requested IDs that matched nothing. The command still ran against the
    /// valid subset.
    pub invalid_ids: Vec<TodoId>,
    /// Set when a destructive command declined to run without `force`. No
    /// mutation has happened; the caller confirms and re-invokes.
    pub needs_confirmation: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, todos: Vec<Todo>) -> Self {
        self.affected = todos;
        self
    }

    pub fn with_listed(mut self, todos: Vec<Todo>) -> Self {
        self.listed = todos;
        self
    }
}
