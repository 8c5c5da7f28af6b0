//! Split calculator
//!
//! Pure conversion of a (bill, my expense, payer) triple into the signed
//! balance adjustment to apply to the selected friend. The caller applies
//! the returned delta via [`Ledger::apply_delta`](crate::ledger::Ledger::apply_delta).

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::LedgerError;

/// Who paid the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payer {
    /// The session owner paid
    Me,
    /// The selected friend paid
    Friend,
}

/// Computes the balance delta for a split bill
///
/// The friend's share is `bill - my_expense`. If I paid, the friend now
/// owes me their share (positive delta); if the friend paid, I owe them
/// my share (negative delta).
///
/// # Errors
///
/// - Validation error if `bill` is negative or `my_expense` is outside
///   `[0, bill]`
/// - Money error if the two amounts are in different currencies
pub fn compute_split(bill: Money, my_expense: Money, payer: Payer) -> Result<Money, LedgerError> {
    if bill.is_negative() {
        return Err(LedgerError::validation("Bill amount cannot be negative"));
    }
    if my_expense.is_negative() {
        return Err(LedgerError::validation("Your expense cannot be negative"));
    }

    let friend_expense = bill.checked_sub(&my_expense)?;
    if friend_expense.is_negative() {
        return Err(LedgerError::validation(
            "Your expense cannot exceed the bill",
        ));
    }

    Ok(match payer {
        Payer::Me => friend_expense,
        Payer::Friend => -my_expense,
    })
}

/// Splits a bill evenly into (my share, friend's share)
///
/// Shares are in the currency's minor units; an odd minor unit lands on
/// my share, so the two shares always sum back to the bill.
pub fn even_split(bill: Money) -> Result<(Money, Money), LedgerError> {
    if bill.is_negative() {
        return Err(LedgerError::validation("Bill amount cannot be negative"));
    }

    let shares = bill.allocate(2)?;
    Ok((shares[0], shares[1]))
}
