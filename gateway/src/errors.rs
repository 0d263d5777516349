// gateway/src/errors.rs
pub use thiserror::Error;

use models::FieldErrors;

/// Failure taxonomy of a single request/response exchange.
///
/// `Validation` is the application-level rejection (HTTP success with
/// `success:false` and a field map); everything else is terminal at the
/// page boundary and surfaces as a generic toast.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("server returned HTTP {code}")]
    Status { code: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("request rejected: {0}")]
    Rejected(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
