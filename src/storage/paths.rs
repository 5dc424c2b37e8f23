use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

const ENV_DATA_DIR: &str = "TASKLINE_DATA_DIR";
const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "taskline";
const APPLICATION: &str = "taskline";

/// Resolve the base directory for all persisted data.
pub fn data_dir() -> io::Result<PathBuf> {
    let path = determine_data_dir()?;
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Path to the primary pipe-delimited tasks file.
pub fn tasks_file_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("tasks.txt"))
}

/// Path to the mutation history log file.
pub fn history_log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("history.jsonl"))
}

fn determine_data_dir() -> io::Result<PathBuf> {
    // Priority 1: Explicit environment variable override
    if let Some(env_dir) = env::var_os(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    // Priority 2: OS-standard application data directory
    if let Some(project_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        return Ok(project_dirs.data_local_dir().to_path_buf());
    }

    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Could not determine data directory. Please set TASKLINE_DATA_DIR environment variable.",
    ))
}
