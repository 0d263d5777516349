// models/src/errors.rs
pub use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
