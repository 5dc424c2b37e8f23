use crate::storage::paths::history_log_path;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub enum EventAction {
    Added,
    Completed,
    Reopened,
    Deleted,
}

/// One line of the append-only mutation history. Tasks have no stable id
/// (identity is positional), so events carry the rendered task instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: EventAction,
    pub details: String,
}

impl LogEvent {
    pub fn new(action: EventAction, details: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            details,
        }
    }
}

pub fn append_log(event: &LogEvent) -> std::io::Result<()> {
    let path = history_log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(event)?;
    writeln!(file, "{}", json)?;
    Ok(())
}
