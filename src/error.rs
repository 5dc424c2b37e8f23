use thiserror::Error;

/// Everything a single command can fail with. All variants are recoverable:
/// the front-end prints the message and keeps reading lines.
#[derive(Error, Debug)]
pub enum Error {
    #[error("The description of a task cannot be empty.")]
    EmptyDescription,

    #[error("Malformed arguments: expected {expected}")]
    MalformedArguments { expected: &'static str },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Not a task number: {0}")]
    InvalidIndex(String),

    #[error("No task numbered {index} (the list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid date '{0}': expected yyyy-mm-dd")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
