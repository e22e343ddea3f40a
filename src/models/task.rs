use chrono::NaiveDateTime;
use std::fmt;

use crate::utils::format_date_time;

/// What kind of task this is, with the date-time it carries (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDateTime },
    Event { at: NaiveDateTime },
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }
}

/// Task model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub kind: TaskKind,
    pub done: bool,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description.into(), TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDateTime) -> Self {
        Self::new(description.into(), TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, at: NaiveDateTime) -> Self {
        Self::new(description.into(), TaskKind::Event { at })
    }

    fn new(description: String, kind: TaskKind) -> Self {
        Self {
            description,
            kind,
            done: false,
        }
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Deadline or event time; to-dos have none
    pub fn when(&self) -> Option<NaiveDateTime> {
        match self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(by),
            TaskKind::Event { at } => Some(at),
        }
    }

    pub fn type_icon(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.type_icon(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_date_time(by)),
            TaskKind::Event { at } => write!(f, " (at: {})", format_date_time(at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::parse_date_time;

    #[test]
    fn test_task_creation() {
        let task = Task::todo("read book");
        assert_eq!(task.description, "read book");
        assert_eq!(task.kind, TaskKind::Todo);
        assert!(!task.done);
        assert!(task.when().is_none());
    }

    #[test]
    fn test_task_mark_toggle() {
        let mut task = Task::todo("read book");
        task.mark_done();
        assert!(task.done);
        assert_eq!(task.status_icon(), 'X');
        task.mark_undone();
        assert!(!task.done);
        assert_eq!(task.status_icon(), ' ');
    }

    #[test]
    fn test_task_display() {
        let by = parse_date_time("2024-12-31 2359").unwrap();
        let at = parse_date_time("2024-01-05 0930").unwrap();

        assert_eq!(Task::todo("read book").to_string(), "[T][ ] read book");

        let mut deadline = Task::deadline("return book", by);
        deadline.mark_done();
        assert_eq!(deadline.to_string(), "[D][X] return book (by: Dec 31 2024 23:59)");

        let event = Task::event("team sync", at);
        assert_eq!(event.to_string(), "[E][ ] team sync (at: Jan 05 2024 09:30)");
        assert_eq!(event.when(), Some(at));
        assert_eq!(event.kind.as_str(), "event");
    }
}
