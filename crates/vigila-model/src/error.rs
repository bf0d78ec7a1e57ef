use thiserror::Error;

#[derive(Debug, Error)]
pub enum VigilaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no column in any source maps to required field '{field}'")]
    MissingRequiredField { field: &'static str },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, VigilaError>;
