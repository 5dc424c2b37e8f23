pub mod list;
pub mod log;
pub mod task;
