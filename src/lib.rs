pub mod cli;
pub mod error;
pub mod executor;
pub mod models;
pub mod parser;
pub mod storage;
