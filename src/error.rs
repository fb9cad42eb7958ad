use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An argument outside the function's domain, e.g. `k > n`.
    #[error("invalid argument: {details}")]
    InvalidArgument { details: String },

    /// A bounded combinations function was asked for `n` beyond its bound.
    #[error("first parameter n must be less than or equal to {max_n}, got {n}")]
    OutOfRange { n: u64, max_n: u64 },
}

impl MathError {
    pub(crate) fn invalid(details: impl Into<String>) -> Self {
        MathError::InvalidArgument {
            details: details.into(),
        }
    }
}
