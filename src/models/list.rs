use crate::error::{Error, Result};
use crate::models::task::Task;

/// Ordered, index-addressable collection of tasks. A task's identity is its
/// position: insertion order is display order is persistence order, and
/// indices shift down when an earlier task is deleted.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or(Error::IndexOutOfRange {
            index: index + 1,
            len: self.tasks.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(Error::IndexOutOfRange {
            index: index + 1,
            len,
        })
    }

    /// Removes and returns the task at `index`; later tasks shift down.
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(Error::IndexOutOfRange {
                index: index + 1,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    /// Tasks whose description contains `keyword` as a literal,
    /// case-sensitive substring.
    pub fn find_all<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Task> {
        self.tasks
            .iter()
            .filter(move |task| task.description().contains(keyword))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
