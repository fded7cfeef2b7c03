//! Error taxonomy shared by every builder, traceback and solver.
//!
//! Inputs are validated before any table is allocated, so an error never
//! comes with a partially built table.

use thiserror::Error;

/// Coarse classification of a [`DpError`], for boundary layers that map
/// errors onto client-visible responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Unsupported,
    Degenerate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpError {
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("table of {rows}x{cols} cells exceeds the limit of {limit} cells")]
    TooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("{variant} does not support {operation}")]
    Unsupported {
        variant: &'static str,
        operation: &'static str,
    },

    #[error("degenerate input `{field}` at index {index}: {reason}")]
    Degenerate {
        field: &'static str,
        index: usize,
        reason: String,
    },
}

impl DpError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DpError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DpError::InvalidInput { .. } | DpError::TooLarge { .. } => ErrorKind::InvalidInput,
            DpError::Unsupported { .. } => ErrorKind::Unsupported,
            DpError::Degenerate { .. } => ErrorKind::Degenerate,
        }
    }

    /// Name of the offending input field, when the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DpError::InvalidInput { field, .. } | DpError::Degenerate { field, .. } => Some(field),
            DpError::TooLarge { .. } | DpError::Unsupported { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let too_large = DpError::TooLarge {
            rows: 100,
            cols: 100,
            limit: 10,
        };
        assert_eq!(too_large.kind(), ErrorKind::InvalidInput);
        assert_eq!(too_large.field(), None);

        let zero = DpError::Degenerate {
            field: "weights",
            index: 2,
            reason: "zero weight".into(),
        };
        assert_eq!(zero.kind(), ErrorKind::Degenerate);
        assert_eq!(zero.field(), Some("weights"));
    }

    #[test]
    fn messages_name_the_field() {
        let err = DpError::invalid("capacity", "must be non-negative, got -3");
        assert_eq!(
            err.to_string(),
            "invalid input `capacity`: must be non-negative, got -3"
        );
    }
}
