use thiserror::Error;

#[derive(Error, Debug)]
pub enum FissionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Data not available: {0}")]
    NotAvailable(String),

    #[error("Degenerate average at E={energy} MeV: no fragmentation survived")]
    DegenerateAverage { energy: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FissionError {
    /// Missing tabulated datum. Recoverable by skipping one fragmentation.
    pub fn is_not_available(&self) -> bool {
        matches!(self, FissionError::NotAvailable(_))
    }
}

pub type FissionResult<T> = Result<T, FissionError>;
