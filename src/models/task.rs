use chrono::NaiveDate;
use std::fmt;

use crate::error::{Error, Result};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
const DATE_OUTPUT_FORMAT: &str = "%b %d %Y";

/// The variant-specific payload of a task. Fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: String, to: String },
}

impl TaskKind {
    /// Single-letter tag used in both the display and the storage record.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(
        description: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(
            description,
            TaskKind::Event {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// One pipe-delimited line for the storage file, without the trailing
    /// newline. Fields are not escaped: a `|` or newline inside a
    /// description corrupts the record (known format limitation).
    pub fn to_record(&self) -> String {
        let done = u8::from(self.done);
        match &self.kind {
            TaskKind::Todo => format!("T|{}|{}", done, self.description),
            TaskKind::Deadline { by } => format!(
                "D|{}|{}|{}",
                done,
                self.description,
                by.format(DATE_INPUT_FORMAT)
            ),
            TaskKind::Event { from, to } => {
                format!("E|{}|{}|{}|{}", done, self.description, from, to)
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), status, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(DATE_OUTPUT_FORMAT))
            }
            TaskKind::Event { from, to } => write!(f, " (from: {from} to: {to})"),
        }
    }
}

/// Parses a `yyyy-mm-dd` calendar date as used by deadline tasks.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT)
        .map_err(|_| Error::InvalidDate(input.to_string()))
}
