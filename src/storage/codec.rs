use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::models::task::{parse_date, Task};

/// Persistence port. The executor saves through this trait so tests can
/// substitute an in-memory fake for the real file.
pub trait Store {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Pipe-delimited flat-file store, one task per line:
///
/// ```text
/// T|<0|1>|<description>
/// D|<0|1>|<description>|<yyyy-mm-dd>
/// E|<0|1>|<description>|<from>|<to>
/// ```
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    /// A missing file (or missing parent directory) is not an error: both
    /// are created and the store starts empty.
    fn load(&self) -> Result<Vec<Task>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            fs::File::create(&self.path)?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();
        for (number, line) in content.lines().enumerate() {
            match decode_line(line) {
                Some(task) => tasks.push(task),
                None if line.is_empty() => {}
                None => warn!(line = number + 1, "skipping malformed task record"),
            }
        }
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic write: write to .tmp then rename
        let tmp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path)?;
        for task in tasks {
            writeln!(file, "{}", task.to_record())?;
        }
        file.sync_all()?;

        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }
}

/// Decodes one record, or `None` for anything unusable: an unrecognized
/// kind tag, too few fields, or an unparseable stored date. Splitting
/// preserves empty trailing fields, so `T|0|` yields an empty description
/// rather than a short record.
fn decode_line(line: &str) -> Option<Task> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 3 {
        return None;
    }
    let done = fields[1] == "1";
    let description = fields[2];

    let mut task = match fields[0] {
        "T" => Task::todo(description),
        "D" => {
            let by = parse_date(fields.get(3)?).ok()?;
            Task::deadline(description, by)
        }
        "E" => Task::event(description, *fields.get(3)?, *fields.get(4)?),
        _ => return None,
    };
    task.set_done(done);
    Some(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty_and_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.txt");
        let store = FileStore::new(&path);

        assert!(store.load().unwrap().is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_load_all_variants() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            "T|1|Test Todo\nD|0|Submit report|2025-01-30\nE|1|Team meeting|10:00 AM|12:00 PM\n",
        )
        .unwrap();

        let tasks = FileStore::new(&path).load().unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].to_string(), "[T][X] Test Todo");
        assert_eq!(tasks[1].to_string(), "[D][ ] Submit report (by: Jan 30 2025)");
        assert_eq!(
            tasks[2].to_string(),
            "[E][X] Team meeting (from: 10:00 AM to: 12:00 PM)"
        );
    }

    #[test]
    fn test_round_trip_preserves_display() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("tasks.txt"));

        let mut deadline = Task::deadline("Submit report", parse_date("2025-01-30").unwrap());
        deadline.set_done(true);
        let tasks = vec![
            Task::todo("Read book"),
            deadline,
            Task::event("Team meeting", "10:00 AM", "12:00 PM"),
        ];

        store.save(&tasks).unwrap();
        let reloaded = store.load().unwrap();

        let rendered: Vec<String> = tasks.iter().map(ToString::to_string).collect();
        let rerendered: Vec<String> = reloaded.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, rerendered);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            "T|1|Keep me\n\nX|0|unknown tag\nD|0\nD|0|bad date|someday\nT|0|And me\n",
        )
        .unwrap();

        let tasks = FileStore::new(&path).load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description(), "Keep me");
        assert_eq!(tasks[1].description(), "And me");
    }

    #[test]
    fn test_save_rewrites_in_collection_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        let store = FileStore::new(&path);

        store.save(&[Task::todo("a"), Task::todo("b")]).unwrap();
        store.save(&[Task::todo("b")]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "T|0|b\n");
    }

    #[test]
    fn test_empty_trailing_fields_preserved() {
        // `E|0|standup||` has empty from/to fields, not a short record.
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "E|0|standup||\n").unwrap();

        let tasks = FileStore::new(&path).load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].to_string(), "[E][ ] standup (from:  to: )");
    }
}
