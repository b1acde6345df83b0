use std::io;

use crate::vulkan::result_label;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load vulkan: {0}")]
    Load(String),
    /// A capability query returned a non-success `VkResult`.
    #[error("{} failed: {} ({})", .operation, result_label(*.code), .code)]
    Query { operation: &'static str, code: i32 },
    /// Header and rows of a table disagree on the number of columns.
    #[error("different number of columns in header and rows: expected {expected}, found {found}")]
    ColumnMismatch { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}
