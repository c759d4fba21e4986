use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TodoError};

/// User-facing todo identifier. Bounded to [0, 100); freed by `erase` and
/// handed out again to later todos.
pub type TodoId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Normalize a user-supplied priority token. Accepts the full words and
    /// single-letter shorthands, case-insensitively. The CLI and the library
    /// agree on this token set; this is the single place it is defined.
    pub fn parse(token: &str) -> Result<Self> {
        match token.to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            _ => Err(TodoError::Validation(format!(
                "Unrecognized priority '{}' (expected high/h, medium/m or low/l)",
                token
            ))),
        }
    }

    /// Display ordering key: high sorts before medium before low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task entry. Field names and the lowercase priority values are
/// the on-disk contract; the persisted document is a JSON array of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn new(id: TodoId, description: String, priority: Priority, file: Option<String>) -> Self {
        Self {
            id,
            description,
            priority,
            file,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }

    pub fn mark_pending(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}
