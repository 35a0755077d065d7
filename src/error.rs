use thiserror::Error;

/// Custom error types for aibubble
#[derive(Debug, Error)]
pub enum BubbleError {
    #[error("Invalid message JSON: {0}")]
    InvalidMessage(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
