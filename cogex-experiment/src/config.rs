use std::path::Path;

use cogex_core::Result;
use serde::{Deserialize, Serialize};

/// Response-log columns stored as floats that really hold whole numbers.
pub const INTEGER_COLUMNS: [&str; 6] = [
    "fixTime",
    "targetTime",
    "SMI",
    "maskTime",
    "orientation",
    "ifcorrect",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseLogConfig {
    /// Columns converted to nullable integers when a log is loaded.
    pub integer_columns: Vec<String>,
}

impl Default for ResponseLogConfig {
    fn default() -> Self {
        Self {
            integer_columns: INTEGER_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ResponseLogConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}
