//! # Error Types
//!
//! Two layers of errors exist in this crate:
//!
//! - [`SchedulerError`] covers everything the scheduler itself can reject: invalid
//!   arguments and configuration problems. It never wraps a caller's failure.
//! - [`BatchError`] is what the fail-fast variant surfaces. It is generic over the
//!   caller's operation error `E` so the original failure value is handed back intact.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("Invalid batch size: {batch_size} (must be at least 1)")]
    InvalidBatchSize { batch_size: usize },
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Failure surfaced by a fail-fast batch run.
#[derive(Debug, Error)]
pub enum BatchError<E> {
    /// Arguments were rejected before any batch started
    #[error("Contract violation: {0}")]
    ContractViolation(#[from] SchedulerError),

    /// An operation invocation failed and aborted the run
    #[error("Operation failed for item {index} in batch {batch}: {error}")]
    OperationFailed {
        /// Position of the failed item in the input sequence
        index: usize,
        /// Index of the batch the item belonged to
        batch: usize,
        error: E,
    },
}

impl<E> BatchError<E> {
    /// The caller's failure value, if this error came from an operation.
    pub fn operation_error(&self) -> Option<&E> {
        match self {
            BatchError::OperationFailed { error, .. } => Some(error),
            BatchError::ContractViolation(_) => None,
        }
    }

    pub fn into_operation_error(self) -> Option<E> {
        match self {
            BatchError::OperationFailed { error, .. } => Some(error),
            BatchError::ContractViolation(_) => None,
        }
    }

    /// Input position of the item whose operation failed.
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            BatchError::OperationFailed { index, .. } => Some(*index),
            BatchError::ContractViolation(_) => None,
        }
    }

    pub fn is_contract_violation(&self) -> bool {
        matches!(self, BatchError::ContractViolation(_))
    }
}
