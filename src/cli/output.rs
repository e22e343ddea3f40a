// Output formatting for replies shown in the interactive session

use crate::models::Task;

/// Rule printed above and below every reply
pub const DIVIDER: &str = "____________________________________________________________";

const INDENT: &str = "    ";

pub fn greeting_lines() -> Vec<String> {
    vec!["Hello! I'm Spike".to_string(), "What can I do for you?".to_string()]
}

pub fn farewell_line() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

/// Frame reply lines between two dividers, indented
pub fn format_reply(lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(INDENT);
    out.push_str(DIVIDER);
    out.push('\n');
    for line in lines {
        out.push_str(INDENT);
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(INDENT);
    out.push_str(DIVIDER);
    out.push('\n');
    out
}

/// `1.[T][ ] read book`, using the positions already attached to each task
pub fn format_numbered(tasks: &[(usize, &Task)]) -> Vec<String> {
    tasks
        .iter()
        .map(|(position, task)| format!("{}.{}", position, task))
        .collect()
}

/// "Now you have 3 tasks in the list."
pub fn format_task_count(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", count, noun)
}
