use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the cogex helpers.
#[derive(Debug, Error)]
pub enum CogexError {
    #[error("could not find seaborn color for {name}")]
    UnknownColor { name: String },

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("delimited file error: {0}")]
    Delimited(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("no table reader for {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("workbook {} has no sheets", path.display())]
    NoSheets { path: PathBuf },

    #[error("table {} has no header row", path.display())]
    EmptyTable { path: PathBuf },

    #[error("missing column `{column}`")]
    MissingColumn { column: String },

    #[error("column `{column}` row {row}: {value} is not a 32-bit integer")]
    NotInteger {
        column: String,
        row: usize,
        value: String,
    },

    #[error("cannot draw {requested} items from an empty sample")]
    EmptySample { requested: usize },

    #[error("step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },
}

pub type Result<T> = std::result::Result<T, CogexError>;
