// Core data models for Spike
// These types represent tasks, the task list and parsed commands

pub mod task;
pub mod task_list;
pub mod command;

pub use task::*;
pub use task_list::*;
pub use command::*;
