//! Spike - a personal task tracker driven by one-line commands
//!
//! This library provides the core functionality for Spike, including:
//! - Task models, the in-memory task list and parsed command values
//! - The command interpreter that turns an input line into a command
//! - Execution of commands against the task list and the interactive session
//! - Date-time and integer helpers used while parsing
//!
//! # Example
//!
//! ```
//! use spike::cli::{execute, parse_command};
//! use spike::models::TaskList;
//!
//! let mut tasks = TaskList::new();
//! let command = parse_command("todo read book", &tasks);
//! let reply = execute(command, &mut tasks);
//! assert_eq!(tasks.len(), 1);
//! assert!(!reply.exit);
//! ```

pub mod cli;
pub mod models;
pub mod utils;
