use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("failed to write launcher script to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to mark {path} executable: {source}")]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell {found:?} at row {row}, column {col} (expected '*' or '-')")]
    InvalidCell { row: usize, col: usize, found: char },
}
