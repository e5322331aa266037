use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{field} duration must be greater than zero")]
    InvalidDuration { field: &'static str },
    #[error("win threshold must be at least 1, got {value}")]
    InvalidThreshold { value: u32 },
}
