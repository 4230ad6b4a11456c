use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnnError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read data file: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("dimension {dimension} has zero variance across the dataset")]
    DegenerateDimension { dimension: usize },

    #[error("need at least {required} data points, have {available}")]
    InsufficientData { required: usize, available: usize },
}
