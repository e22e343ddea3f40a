//! Command-line interpreter for task input
//!
//! Turns one raw input line into exactly one [`Command`]. Parsing never fails
//! outright: anything that cannot become an action comes back as
//! [`Command::Incorrect`] carrying the message to show the user.
//!
//! # Grammar
//!
//! ```text
//! list [yyyy-MM-dd HHmm]
//! todo <description>
//! deadline <description> /by yyyy-MM-dd HHmm
//! event <description> /at yyyy-MM-dd HHmm
//! find <keyword>
//! mark <n> | unmark <n> | delete <n>
//! bye
//! ```
//!
//! Words are split on single spaces, so repeated spaces produce empty words.
//! Arguments to `list`, `todo`, `find`, `deadline` and `event` are cut out of the
//! raw line by position rather than rebuilt from words, which keeps any inner
//! spacing of descriptions intact.
//!
//! The `/by` and `/at` markers are located by their first occurrence anywhere in
//! the line. A description that itself contains the marker text will be cut at
//! the wrong place; existing inputs depend on this rule, so it is kept.

use log::{debug, trace};

use crate::cli::error::ParseError;
use crate::cli::keyword::CommandName;
use crate::models::{Command, ListScope, MarkTarget, Task, TaskRef, TaskView};
use crate::utils::{parse_date_time, parse_int, to_index};

/// Parse one input line against the current tasks.
///
/// The task view is only read for index bounds and to snapshot the referenced
/// task; nothing is retained past the call.
///
/// # Example
///
/// ```
/// use spike::cli::parse_command;
/// use spike::models::{Command, Task, TaskList};
///
/// let tasks = TaskList::from(vec![Task::todo("read book")]);
/// assert!(matches!(parse_command("delete 1", &tasks), Command::Delete(_)));
/// assert!(matches!(parse_command("delete 2", &tasks), Command::Incorrect(_)));
/// ```
pub fn parse_command<T: TaskView + ?Sized>(line: &str, tasks: &T) -> Command {
    match try_parse_command(line, tasks) {
        Ok(command) => command,
        Err(e) => {
            debug!("Rejected input ({:?}): {}", e.category(), e);
            Command::incorrect(e.to_string())
        }
    }
}

/// Same as [`parse_command`] but hands back the failure instead of wrapping it
pub fn try_parse_command<T: TaskView + ?Sized>(
    line: &str,
    tasks: &T,
) -> Result<Command, ParseError> {
    let words = split_words(line);
    trace!("Split {:?} into {:?}", line, words);

    let name = words
        .first()
        .and_then(|word| CommandName::from_keyword(word))
        .ok_or(ParseError::Unrecognized)?;
    debug!("Classified input as '{}'", name.keyword());

    match name {
        CommandName::List => parse_list(line, name),
        CommandName::Mark => parse_toggle_mark(MarkTarget::Mark, &words, tasks),
        CommandName::Unmark => parse_toggle_mark(MarkTarget::Unmark, &words, tasks),
        CommandName::Delete => parse_delete(&words, tasks),
        CommandName::Todo => parse_todo(line, name),
        CommandName::Deadline => parse_dated(Dated::Deadline, line, &words),
        CommandName::Event => parse_dated(Dated::Event, line, &words),
        CommandName::Find => parse_find(line, name),
        CommandName::Bye => Ok(Command::Exit),
    }
}

/// Split on single spaces, dropping trailing empty words
fn split_words(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = line.split(' ').collect();
    while words.last().map_or(false, |word| word.is_empty()) {
        words.pop();
    }
    words
}

/// Everything after the keyword and its separator, verbatim.
/// Empty when the line is the bare keyword.
fn text_after_keyword(line: &str, name: CommandName) -> &str {
    line.get(name.keyword().len() + 1..).unwrap_or("")
}

fn parse_list(line: &str, name: CommandName) -> Result<Command, ParseError> {
    if line.len() == name.keyword().len() {
        return Ok(Command::List(ListScope::All));
    }
    let cutoff = parse_date_time(text_after_keyword(line, name))
        .ok_or(ParseError::InvalidListDate)?;
    Ok(Command::List(ListScope::DueBy(cutoff)))
}

fn parse_todo(line: &str, name: CommandName) -> Result<Command, ParseError> {
    let description = text_after_keyword(line, name);
    if description.is_empty() {
        return Err(ParseError::MissingTodoDescription);
    }
    Ok(Command::Add(Task::todo(description)))
}

fn parse_find(line: &str, name: CommandName) -> Result<Command, ParseError> {
    let keyword = text_after_keyword(line, name);
    if keyword.is_empty() {
        return Err(ParseError::MissingFindKeyword);
    }
    Ok(Command::Find(keyword.to_string()))
}

/// Task kinds that carry a date-time after an inline marker
#[derive(Debug, Clone, Copy)]
enum Dated {
    Deadline,
    Event,
}

impl Dated {
    fn name(self) -> CommandName {
        match self {
            Dated::Deadline => CommandName::Deadline,
            Dated::Event => CommandName::Event,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Dated::Deadline => "/by",
            Dated::Event => "/at",
        }
    }

    fn missing(self) -> ParseError {
        match self {
            Dated::Deadline => ParseError::MissingDeadline,
            Dated::Event => ParseError::MissingEvent,
        }
    }

    fn build(self, description: &str, when: chrono::NaiveDateTime) -> Task {
        match self {
            Dated::Deadline => Task::deadline(description, when),
            Dated::Event => Task::event(description, when),
        }
    }
}

fn parse_dated(kind: Dated, line: &str, words: &[&str]) -> Result<Command, ParseError> {
    let marker = kind.marker();
    let marker_at = line.find(marker).ok_or(kind.missing())?;
    let marker_end = marker_at + marker.len();
    if words.len() < 3 || words[1] == marker || marker_end == line.len() {
        return Err(kind.missing());
    }

    // one separator character follows the marker, whatever its width
    let separator = line[marker_end..].chars().next().map_or(0, char::len_utf8);
    let when_text = &line[marker_end + separator..];
    let when = parse_date_time(when_text).ok_or(ParseError::InvalidDateTime)?;

    // the description stops one character short of the marker
    let start = kind.name().keyword().len() + 1;
    let end = line[..marker_at]
        .char_indices()
        .last()
        .map_or(0, |(i, _)| i);
    let description = line
        .get(start..end)
        .filter(|description| !description.is_empty())
        .ok_or(kind.missing())?;

    Ok(Command::Add(kind.build(description, when)))
}

fn parse_delete<T: TaskView + ?Sized>(words: &[&str], tasks: &T) -> Result<Command, ParseError> {
    let task = resolve_task(words, tasks).ok_or(ParseError::InvalidDeleteIndex)?;
    Ok(Command::Delete(task))
}

fn parse_toggle_mark<T: TaskView + ?Sized>(
    target: MarkTarget,
    words: &[&str],
    tasks: &T,
) -> Result<Command, ParseError> {
    let error = match target {
        MarkTarget::Mark => ParseError::InvalidMarkIndex,
        MarkTarget::Unmark => ParseError::InvalidUnmarkIndex,
    };
    let task = resolve_task(words, tasks).ok_or(error)?;
    Ok(Command::ToggleMark { target, task })
}

/// `<keyword> <n>` with `n` a 1-based position inside the current list
fn resolve_task<T: TaskView + ?Sized>(words: &[&str], tasks: &T) -> Option<TaskRef> {
    if words.len() != 2 {
        return None;
    }
    let index = parse_int(words[1]).and_then(|position| to_index(position, tasks.size()))?;
    let task = tasks.get(index)?.clone();
    Some(TaskRef { index, task })
}
