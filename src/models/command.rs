// Command values produced by the parser and consumed by the execution layer

use chrono::NaiveDateTime;

use crate::models::Task;

/// A validated reference to one task: its 0-based index at parse time and a
/// snapshot of the task found there.
///
/// The snapshot lets the execution layer detect a list that changed since the
/// line was parsed, without the command borrowing the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRef {
    pub index: usize,
    pub task: Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkTarget {
    Mark,
    Unmark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    /// Dated tasks falling at or before the cut-off
    DueBy(NaiveDateTime),
}

/// Result of parsing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    Delete(TaskRef),
    ToggleMark { target: MarkTarget, task: TaskRef },
    List(ListScope),
    Find(String),
    Exit,
    /// Input that could not be turned into an action, with the reason shown to the user
    Incorrect(String),
}

impl Command {
    /// Build an `Incorrect` command; an empty reason is replaced with a generic one
    pub fn incorrect(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if reason.trim().is_empty() {
            Command::Incorrect("Sorry, I could not understand that.".to_string())
        } else {
            Command::Incorrect(reason)
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Delete(_) => "delete",
            Command::ToggleMark { target: MarkTarget::Mark, .. } => "mark",
            Command::ToggleMark { target: MarkTarget::Unmark, .. } => "unmark",
            Command::List(_) => "list",
            Command::Find(_) => "find",
            Command::Exit => "exit",
            Command::Incorrect(_) => "incorrect",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_reason_never_empty() {
        assert_eq!(Command::incorrect("bad"), Command::Incorrect("bad".to_string()));
        match Command::incorrect("  ") {
            Command::Incorrect(reason) => assert!(!reason.trim().is_empty()),
            other => panic!("Expected Incorrect, got {:?}", other),
        }
    }

    #[test]
    fn test_command_names() {
        assert!(Command::Exit.is_exit());
        assert!(!Command::List(ListScope::All).is_exit());
        assert_eq!(Command::Find("x".to_string()).name(), "find");
    }
}
