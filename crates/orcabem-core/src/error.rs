use std::io;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Goal not found: {0}")]
    GoalNotFound(Uuid),
    #[error("Alert not found: {0}")]
    AlertNotFound(Uuid),
    #[error("Backup missing required section: {0}")]
    MissingSection(String),
    #[error("Serialization failed: {0}")]
    Serde(String),
    #[error("Storage failure: {0}")]
    Storage(String),
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
    #[error("Report export failed: {0}")]
    Report(String),
}
