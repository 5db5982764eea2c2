use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The export is not well-formed XML or lacks the `rss/channel` element
    #[error("Failed to parse XML: {0}")]
    Parse(String),

    #[error("Error compiling {name} template: {message}")]
    Template { name: &'static str, message: String },

    #[error("Error writing archive: {0}")]
    Archive(#[from] io::Error),

    #[error("Error reading configuration: {0}")]
    Config(String),

    #[error("Archive task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
