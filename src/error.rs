//! Error types for CIDR calculations.

use thiserror::Error;

/// Errors returned by the subnet and address operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidrError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("result too large: {requested} entries requested, limit is {limit}")]
    TooLarge { requested: u64, limit: u64 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CidrError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CidrError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CidrError::invalid("Network length is too long").to_string(),
            "invalid argument: Network length is too long"
        );
        assert_eq!(
            CidrError::TooLarge {
                requested: 256,
                limit: 16
            }
            .to_string(),
            "result too large: 256 entries requested, limit is 16"
        );
    }
}
