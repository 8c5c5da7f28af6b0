//! Session state for the bill-splitting surface
//!
//! `SplitSession` bundles the ledger with the two UI toggles the rendering
//! surface drives: the add-friend form visibility and the friend selection.
//! State lives for the session and is gone on reload.

use tracing::{debug, instrument};

use core_kernel::{Currency, FriendId, Money};

use crate::error::LedgerError;
use crate::friend::Friend;
use crate::ledger::Ledger;
use crate::split::{compute_split, Payer};

/// One user's bill-splitting session
#[derive(Debug)]
pub struct SplitSession {
    ledger: Ledger,
    show_add_friend: bool,
}

impl SplitSession {
    /// Creates a session with an empty ledger
    pub fn new(currency: Currency) -> Self {
        Self {
            ledger: Ledger::new(currency),
            show_add_friend: false,
        }
    }

    /// Creates a session with the standard seeded ledger
    pub fn seeded() -> Self {
        Self {
            ledger: Ledger::seeded(),
            show_add_friend: false,
        }
    }

    /// Returns the ledger for rendering
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns true if the add-friend form is open
    pub fn is_add_friend_open(&self) -> bool {
        self.show_add_friend
    }

    /// Flips the add-friend form visibility and returns the new state
    pub fn toggle_add_friend(&mut self) -> bool {
        self.show_add_friend = !self.show_add_friend;
        self.show_add_friend
    }

    /// Adds a friend and closes the add-friend form on success
    ///
    /// Returns the new friend's id.
    #[instrument(skip(self))]
    pub fn add_friend(&mut self, name: &str, image: &str) -> Result<FriendId, LedgerError> {
        let id = self.ledger.add_friend(name, image)?.id;
        self.show_add_friend = false;
        Ok(id)
    }

    /// Toggles the selection for the given friend
    pub fn select_friend(&mut self, id: FriendId) -> Result<Option<&Friend>, LedgerError> {
        self.ledger.select_friend(id)
    }

    /// Splits a bill with the selected friend
    ///
    /// Computes the split, applies the delta to the selected friend, and
    /// clears the selection. Returns the friend's new balance.
    ///
    /// # Errors
    ///
    /// - `NoFriendSelected` if no friend is selected
    /// - Validation or money errors from the split calculator; the ledger
    ///   is untouched in that case
    #[instrument(skip(self))]
    pub fn split_bill(
        &mut self,
        bill: Money,
        my_expense: Money,
        payer: Payer,
    ) -> Result<Money, LedgerError> {
        let friend_id = self
            .ledger
            .selected_friend()
            .map(|f| f.id)
            .ok_or(LedgerError::NoFriendSelected)?;

        let delta = compute_split(bill, my_expense, payer)?;
        let balance = self.ledger.apply_delta(friend_id, delta)?;

        // Toggling the still-selected friend clears the selection.
        self.ledger.select_friend(friend_id)?;

        debug!(friend_id = %friend_id, %balance, "Split applied");
        Ok(balance)
    }
}

impl Default for SplitSession {
    fn default() -> Self {
        Self::seeded()
    }
}
