//! Ledger domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the ledger domain
///
/// All errors are local and non-fatal: the failed operation performs no
/// mutation, and the caller may surface the message and continue.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Friend with the given id was not found
    #[error("Friend not found: {0}")]
    FriendNotFound(String),

    /// A split was requested while no friend is selected
    #[error("No friend selected")]
    NoFriendSelected,

    /// Invalid input data (empty required field, expense out of range)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Money arithmetic failed (currency mismatch, invalid allocation)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl LedgerError {
    /// Creates a FriendNotFound error from any id type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        LedgerError::FriendNotFound(id.to_string())
    }

    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation(message.into())
    }
}
