use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Parameter values to expand into one row per experimental condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamGrid<T> {
    /// One list of levels per parameter, crossed with each other.
    Lists(Vec<Vec<T>>),
    /// A single parameter, laid out as a column.
    Column(Vec<T>),
}

/// Expands a [`ParamGrid`] into rows, one per combination.
///
/// Lists are crossed with the last parameter varying fastest. An empty list
/// of parameters gives a single empty row; any parameter with no levels
/// gives no rows.
pub fn expand_grid<T: Clone>(grid: ParamGrid<T>) -> Vec<Vec<T>> {
    match grid {
        ParamGrid::Lists(lists) if lists.is_empty() => vec![Vec::new()],
        ParamGrid::Lists(lists) => lists.into_iter().multi_cartesian_product().collect(),
        ParamGrid::Column(values) => values.into_iter().map(|v| vec![v]).collect(),
    }
}
