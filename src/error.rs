// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("graph has no nodes to rank")]
    EmptyGraph,

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: i64 },

    #[error("malformed edge record at line {line}: {content:?} (expected `source target`)")]
    Parse { line: usize, content: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RankError>;
