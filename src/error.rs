use thiserror::Error;

/// Errors raised while loading an edge list or deriving statistics from it.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A year range was requested over a collection with no years in it.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    /// A raw record field could not be coerced to an integer.
    #[error("invalid record at row {row}: column '{column}' has non-integer value '{value}'")]
    InvalidRecord {
        row: usize,
        column: String,
        value: String,
    },

    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
