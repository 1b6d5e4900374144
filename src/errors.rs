//! Unified application error type.
//! The core, the storage layer and the CLI all return AppError so that the
//! binary has a single place where failures turn into an exit code.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // ---------------------------
    // Entries
    // ---------------------------
    #[error("No entry with id {0}")]
    EntryNotFound(u64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
