use std::path::PathBuf;

use thiserror::Error;

use crate::queue::QueueError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("Can't open input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid arrivals: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Process exit status for this error.
    ///
    /// Queue overflow and underflow get their own statuses; every input or
    /// usage problem exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            SimError::Queue(QueueError::Full { .. }) => 2,
            SimError::Queue(QueueError::Empty) => 3,
            _ => 1,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SimError>;
