use std::fs;
use std::path::Path;

use cogex_core::{PadSide, Result, fill_zeros};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Participant identity used to name response files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// File prefix, e.g. `s` or `pilot_b`. May contain underscores.
    pub symbol: String,
    /// Sequence number the subject was assigned.
    pub index: u32,
}

/// Next unused sequence number for a subject symbol and the file stem it
/// implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeFilename {
    pub number: u32,
    pub stem: String,
}

/// Sequence numbers already used by `<symbol>_<NN>` entries in `dir`.
///
/// Only the first two digits after the symbol count, so `s_123.xlsx` is
/// number 12.
pub fn used_numbers(dir: &Path, symbol: &str) -> Result<Vec<u32>> {
    let prefix = format!("{symbol}_");
    let mut used = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let Some(rest) = name.to_str().and_then(|n| n.strip_prefix(&prefix)) else {
            continue;
        };
        let digits: String = rest
            .chars()
            .take_while(char::is_ascii_digit)
            .take(2)
            .collect();
        if let Ok(number) = digits.parse() {
            used.push(number);
        }
    }
    used.sort_unstable();
    debug!(dir = %dir.display(), symbol, ?used, "scanned subject files");
    Ok(used)
}

/// Picks the number following the highest one in use.
///
/// Numbering starts at `01`, and an existing `00` file still yields `02`.
pub fn next_free_filename(dir: &Path, symbol: &str) -> Result<FreeFilename> {
    let used = used_numbers(dir, symbol)?;
    let number = match used.last() {
        None => 1,
        Some(&max) => max.max(1) + 1,
    };
    Ok(FreeFilename {
        number,
        stem: format!("{symbol}_{}", fill_zeros(number, 2, PadSide::Front)),
    })
}

/// Whether a file for `subject.index` already exists in `dir`.
pub fn subject_index_used(dir: &Path, subject: &Subject) -> Result<bool> {
    Ok(used_numbers(dir, &subject.symbol)?.contains(&subject.index))
}
