// The in-memory task collection and the read-only view the parser works against

use chrono::NaiveDateTime;

use crate::models::Task;

/// Read-only view of the current tasks.
///
/// Indices are 0-based. The parser only ever reads through this trait, so it can
/// be handed a [`TaskList`] or a plain slice of tasks.
pub trait TaskView {
    fn size(&self) -> usize;
    fn get(&self, index: usize) -> Option<&Task>;
}

impl TaskView for [Task] {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&Task> {
        <[Task]>::get(self, index)
    }
}

impl TaskView for Vec<Task> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&Task> {
        self.as_slice().get(index)
    }
}

/// Owned, ordered list of tasks
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove the task at a 0-based index
    pub fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Tasks whose description contains `keyword` (case-sensitive), paired
    /// with their 1-based position in the full list
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.numbered()
            .filter(|(_, task)| task.description.contains(keyword))
            .collect()
    }

    /// Deadlines and events falling at or before `cutoff`, with 1-based positions
    pub fn due_by(&self, cutoff: NaiveDateTime) -> Vec<(usize, &Task)> {
        self.numbered()
            .filter(|(_, task)| task.when().map_or(false, |when| when <= cutoff))
            .collect()
    }

    fn numbered(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }
}

impl TaskView for TaskList {
    fn size(&self) -> usize {
        self.tasks.len()
    }

    fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
