use serde::{Deserialize, Serialize};

use crate::error::{CogexError, Result};

/// Column truncated by [`ResponseTable::truncate_at_zero`] when none is given.
pub const DEFAULT_TIME_COLUMN: &str = "time";

/// A single value of a response table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// True for empty cells and for NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Bool(b) => Some(f64::from(u8::from(*b))),
            Cell::Missing | Cell::Text(_) => None,
        }
    }

    /// Compares numerically when both sides are numbers, so `Int(0)`
    /// matches `Float(0.0)`.
    pub fn matches(&self, other: &Cell) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// Converts the cell into a nullable 32-bit integer.
    fn to_nullable_int(&self) -> Option<Option<i32>> {
        match self {
            _ if self.is_missing() => Some(None),
            Cell::Int(v) => i32::try_from(*v).ok().map(Some),
            Cell::Bool(b) => Some(Some(i32::from(*b))),
            Cell::Float(v)
                if v.fract() == 0.0 && *v >= i32::MIN as f64 && *v <= i32::MAX as f64 =>
            {
                Some(Some(*v as i32))
            }
            _ => None,
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Option<i32>> for Cell {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Cell::Missing, |v| Cell::Int(v.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// Row-ordered table of named columns, one row per trial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseTable {
    columns: Vec<Column>,
}

impl ResponseTable {
    /// Builds a table from a header and row-major cells. Short rows are
    /// filled with [`Cell::Missing`], extra cells are dropped.
    pub fn from_rows<I, R>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Cell>,
    {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();
        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(cells.next().unwrap_or_default());
            }
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CogexError::MissingColumn {
                column: name.to_string(),
            })
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| CogexError::MissingColumn {
                column: name.to_string(),
            })
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        self.column(column).ok()?.cells.get(row)
    }

    /// Keeps only the first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                cells: c.cells.iter().take(n).cloned().collect(),
            })
            .collect();
        Self { columns }
    }

    /// Converts the named columns to nullable integers in place.
    ///
    /// Every column is checked before any is modified; a missing column or a
    /// value that is not a whole 32-bit number leaves the table untouched.
    pub fn normalize_integers<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let mut converted = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let column = self.column(name)?;
            let cells = column
                .cells
                .iter()
                .enumerate()
                .map(|(row, cell)| {
                    cell.to_nullable_int()
                        .map(Cell::from)
                        .ok_or_else(|| CogexError::NotInteger {
                            column: name.to_string(),
                            row,
                            value: format!("{cell:?}"),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            converted.push((name, cells));
        }
        for (name, cells) in converted {
            self.column_mut(name)?.cells = cells;
        }
        Ok(())
    }

    /// Index of the first missing value in the first column, by position.
    pub fn first_incomplete_row(&self) -> Option<usize> {
        self.columns.first()?.cells.iter().position(Cell::is_missing)
    }

    /// Drops the rows from the first one whose `column` equals `sentinel`.
    ///
    /// The table is returned unchanged when the sentinel never occurs.
    pub fn truncate_at(&self, column: &str, sentinel: &Cell) -> Result<Self> {
        let end = self
            .column(column)?
            .cells
            .iter()
            .position(|cell| cell.matches(sentinel));
        Ok(match end {
            Some(end) => self.head(end),
            None => self.clone(),
        })
    }

    /// [`truncate_at`](Self::truncate_at) with a `0` sentinel.
    pub fn truncate_at_zero(&self, column: &str) -> Result<Self> {
        self.truncate_at(column, &Cell::Float(0.0))
    }
}
