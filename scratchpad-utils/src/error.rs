use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid shape: grid has no rows or an empty first row")]
    EmptyGrid,

    #[error("Invalid shape: row {row} has {found} elements, expected {expected}")]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Sample larger than population: requested {requested}, available {available}")]
    SampleSize { requested: usize, available: usize },

    #[error("Cannot draw {requested} elements from an empty collection")]
    EmptyCollection { requested: usize },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
