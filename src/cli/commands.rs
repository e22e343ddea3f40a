use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};

use crate::cli::output::{
    farewell_line, format_numbered, format_reply, format_task_count, greeting_lines,
};
use crate::cli::parser::parse_command;
use crate::models::{Command, ListScope, MarkTarget, Task, TaskList, TaskRef};
use crate::utils::format_date_time;

#[derive(Parser)]
#[command(name = "spike")]
#[command(about = "Spike - a personal task tracker driven by one-line commands")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Skip the greeting and farewell banners
    #[arg(short, long)]
    pub quiet: bool,
}

/// What executing one command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    /// Set once the user asked to leave
    pub exit: bool,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, exit: false }
    }
}

/// Entry point for the `spike` binary
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let tasks = run_session(stdin.lock(), stdout.lock(), cli.quiet)?;
    debug!("Session ended with {} task(s)", tasks.len());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    // a logger may already be installed when running under a test harness
    let _ = builder.try_init();
}

/// Read commands line by line until `bye` or end of input.
///
/// Returns the task list as it stands when the session ends.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, quiet: bool) -> Result<TaskList> {
    let mut tasks = TaskList::new();

    if !quiet {
        write_reply(&mut output, &greeting_lines())?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = parse_command(&line, &tasks);
        debug!("Executing '{}' command", command.name());

        let exit = command.is_exit();
        let reply = execute(command, &mut tasks);
        if exit && quiet {
            break;
        }
        write_reply(&mut output, &reply.lines)?;
        if exit {
            break;
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(tasks)
}

fn write_reply<W: Write>(output: &mut W, lines: &[String]) -> Result<()> {
    output
        .write_all(format_reply(lines).as_bytes())
        .context("Failed to write reply")
}

/// Apply one parsed command to the task list
pub fn execute(command: Command, tasks: &mut TaskList) -> Reply {
    match command {
        Command::Add(task) => handle_add(task, tasks),
        Command::Delete(target) => handle_delete(target, tasks),
        Command::ToggleMark { target, task } => handle_toggle_mark(target, task, tasks),
        Command::List(scope) => handle_list(scope, tasks),
        Command::Find(keyword) => handle_find(&keyword, tasks),
        Command::Exit => Reply {
            lines: vec![farewell_line()],
            exit: true,
        },
        Command::Incorrect(reason) => Reply::lines(vec![reason]),
    }
}

fn handle_add(task: Task, tasks: &mut TaskList) -> Reply {
    debug!("Adding {} task", task.kind.as_str());
    let shown = format!("  {}", task);
    tasks.add(task);
    Reply::lines(vec![
        "Got it. I've added this task:".to_string(),
        shown,
        format_task_count(tasks.len()),
    ])
}

fn handle_delete(target: TaskRef, tasks: &mut TaskList) -> Reply {
    if !still_current(&target, tasks) {
        return stale_reply(&target);
    }
    match tasks.remove(target.index) {
        Some(removed) => Reply::lines(vec![
            "Noted. I've removed this task:".to_string(),
            format!("  {}", removed),
            format_task_count(tasks.len()),
        ]),
        None => stale_reply(&target),
    }
}

fn handle_toggle_mark(mark: MarkTarget, target: TaskRef, tasks: &mut TaskList) -> Reply {
    if !still_current(&target, tasks) {
        return stale_reply(&target);
    }
    let Some(task) = tasks.get_mut(target.index) else {
        return stale_reply(&target);
    };
    let heading = match mark {
        MarkTarget::Mark => {
            task.mark_done();
            "Nice! I've marked this task as done:"
        }
        MarkTarget::Unmark => {
            task.mark_undone();
            "OK, I've marked this task as not done yet:"
        }
    };
    Reply::lines(vec![heading.to_string(), format!("  {}", task)])
}

fn handle_list(scope: ListScope, tasks: &TaskList) -> Reply {
    match scope {
        ListScope::All => {
            if tasks.is_empty() {
                return Reply::lines(vec!["Your list is empty.".to_string()]);
            }
            let numbered: Vec<(usize, &Task)> =
                tasks.iter().enumerate().map(|(i, task)| (i + 1, task)).collect();
            let mut lines = vec!["Here are the tasks in your list:".to_string()];
            lines.extend(format_numbered(&numbered));
            Reply::lines(lines)
        }
        ListScope::DueBy(cutoff) => {
            let due = tasks.due_by(cutoff);
            let when = format_date_time(&cutoff);
            if due.is_empty() {
                return Reply::lines(vec![format!("Nothing is due by {}.", when)]);
            }
            let mut lines = vec![format!("Here are the tasks due by {}:", when)];
            lines.extend(format_numbered(&due));
            Reply::lines(lines)
        }
    }
}

fn handle_find(keyword: &str, tasks: &TaskList) -> Reply {
    let found = tasks.find(keyword);
    if found.is_empty() {
        return Reply::lines(vec![format!("No tasks match \"{}\".", keyword)]);
    }
    let mut lines = vec!["Here are the matching tasks in your list:".to_string()];
    lines.extend(format_numbered(&found));
    Reply::lines(lines)
}

/// The referenced position still holds the task seen at parse time
fn still_current(target: &TaskRef, tasks: &TaskList) -> bool {
    tasks
        .iter()
        .nth(target.index)
        .map_or(false, |task| *task == target.task)
}

fn stale_reply(target: &TaskRef) -> Reply {
    Reply::lines(vec![format!(
        "Task {} has changed since that command was read. Please list your tasks and try again.",
        target.index + 1
    )])
}
