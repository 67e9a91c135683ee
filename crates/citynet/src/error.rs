//! Error type shared by the geometry core.
//!
//! Three kinds of failure exist: contract violations (bad component index,
//! invalid parameters), empty inputs (centroid of nothing, nearest search with
//! no candidates), and nothing else. Degenerate geometry is never an error.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum CoreError {
    /// Component access past the vector dimension.
    IndexOutOfRange { index: usize, dim: usize },
    /// A reduction over an empty point set (e.g. centroid).
    EmptySet { what: &'static str },
    /// Nearest-point search found no candidate other than the query.
    NoCandidates,
    /// Generator or builder parameters out of their domain.
    InvalidParams { reason: String },
}

impl CoreError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, dim } => {
                write!(f, "component index {index} out of range for dimension {dim}")
            }
            Self::EmptySet { what } => write!(f, "empty point set: {what}"),
            Self::NoCandidates => write!(f, "no candidate point other than the query"),
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {}

pub type Result<T> = std::result::Result<T, CoreError>;
