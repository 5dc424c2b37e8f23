use std::fmt;

use crate::error::Result;
use crate::models::list::TaskList;
use crate::models::log::{append_log, EventAction, LogEvent};
use crate::models::task::Task;
use crate::parser::input::{parse, Command};
use crate::storage::codec::Store;

/// The result of one executed command, carrying enough data for the caller
/// to render a confirmation.
#[derive(Debug)]
pub enum Outcome {
    Added { task: Task, total: usize },
    Deleted { task: Task, remaining: usize },
    Marked { task: Task },
    Unmarked { task: Task },
    List(Vec<Task>),
    Found(Vec<Task>),
    Bye,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { task, total } => write!(
                f,
                "Got it. I've added this task:\n  {task}\nNow you have {total} tasks in the list."
            ),
            Outcome::Deleted { task, remaining } => write!(
                f,
                "Noted. I've removed this task:\n  {task}\nNow you have {remaining} tasks in the list."
            ),
            Outcome::Marked { task } => {
                write!(f, "Nice! I've marked this task as done:\n  {task}")
            }
            Outcome::Unmarked { task } => {
                write!(f, "OK, I've marked this task as not done yet:\n  {task}")
            }
            Outcome::List(tasks) => {
                write!(f, "Here are the tasks in your list:")?;
                write_numbered(f, tasks)
            }
            Outcome::Found(tasks) => {
                write!(f, "Here are the matching tasks in your list:")?;
                write_numbered(f, tasks)
            }
            Outcome::Bye => write!(f, "Bye. Hope to see you again soon!"),
        }
    }
}

fn write_numbered(f: &mut fmt::Formatter<'_>, tasks: &[Task]) -> fmt::Result {
    for (i, task) in tasks.iter().enumerate() {
        write!(f, "\n  {}. {task}", i + 1)?;
    }
    Ok(())
}

/// Orchestrates one command at a time against the task list and persists
/// every successful mutation before reporting it.
pub struct Executor {
    list: TaskList,
    store: Box<dyn Store>,
}

impl Executor {
    /// Hydrates the task list from the store.
    pub fn load(store: Box<dyn Store>) -> Result<Self> {
        let list = TaskList::new(store.load()?);
        Ok(Self { list, store })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.list
    }

    /// Full pipeline for one raw input line: parse, execute, render.
    pub fn process(&mut self, line: &str) -> Result<String> {
        let outcome = self.execute(parse(line)?)?;
        Ok(outcome.to_string())
    }

    /// Executes an already-parsed command. Validation precedes every
    /// mutation, so a returned error means the list and the file are
    /// unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::List => Ok(Outcome::List(self.list.tasks().to_vec())),
            Command::Find { keyword } => {
                Ok(Outcome::Found(self.list.find_all(&keyword).cloned().collect()))
            }
            Command::Bye => Ok(Outcome::Bye),
            Command::AddTodo { description } => self.add(Task::todo(description)),
            Command::AddDeadline { description, by } => self.add(Task::deadline(description, by)),
            Command::AddEvent {
                description,
                from,
                to,
            } => self.add(Task::event(description, from, to)),
            Command::Mark { index, done } => {
                let task = self.list.get_mut(index)?;
                task.set_done(done);
                let task = task.clone();
                self.persist()?;
                if done {
                    self.log(EventAction::Completed, &task);
                    Ok(Outcome::Marked { task })
                } else {
                    self.log(EventAction::Reopened, &task);
                    Ok(Outcome::Unmarked { task })
                }
            }
            Command::Delete { index } => {
                let task = self.list.delete(index)?;
                self.persist()?;
                self.log(EventAction::Deleted, &task);
                Ok(Outcome::Deleted {
                    task,
                    remaining: self.list.len(),
                })
            }
        }
    }

    fn add(&mut self, task: Task) -> Result<Outcome> {
        self.list.add(task.clone());
        self.persist()?;
        self.log(EventAction::Added, &task);
        Ok(Outcome::Added {
            task,
            total: self.list.len(),
        })
    }

    fn persist(&self) -> Result<()> {
        self.store.save(self.list.tasks())
    }

    // History is best effort; a failed append never fails the command.
    fn log(&self, action: EventAction, task: &Task) {
        let _ = append_log(&LogEvent::new(action, task.to_string()));
    }
}
