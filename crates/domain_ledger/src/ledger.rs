//! Friend ledger
//!
//! The ledger owns the ordered friend collection, the single optional
//! selection, and the append-only journal of applied balance deltas.
//!
//! # Invariants
//!
//! - Friend ids are unique within a ledger
//! - Friends are appended, never removed or edited
//! - At most one friend is selected at a time
//! - All balances share the ledger's currency

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{Currency, EntryId, FriendId, LedgerId, Money};

use crate::error::LedgerError;
use crate::friend::Friend;

/// An applied balance delta, recorded for every mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Unique entry identifier
    pub id: EntryId,
    /// Friend whose balance changed
    pub friend_id: FriendId,
    /// Signed adjustment that was applied
    pub delta: Money,
    /// Running balance after the adjustment
    pub balance_after: Money,
    /// When the adjustment was applied
    pub posted_at: DateTime<Utc>,
}

/// In-memory registry of friends and their balances
///
/// State is process-local and lives for the session; nothing is persisted.
#[derive(Debug)]
pub struct Ledger {
    id: LedgerId,
    friends: Vec<Friend>,
    entries: Vec<BalanceEntry>,
    selected: Option<FriendId>,
    currency: Currency,
}

impl Ledger {
    /// Creates an empty ledger in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            id: LedgerId::new_v7(),
            friends: Vec::new(),
            entries: Vec::new(),
            selected: None,
            currency,
        }
    }

    /// Creates a USD ledger seeded with the standard three friends
    ///
    /// Clark starts at -7 (I owe him), Sarah at +20 (she owes me),
    /// Anthony at 0 (even).
    pub fn seeded() -> Self {
        let currency = Currency::USD;
        let mut ledger = Self::new(currency);

        ledger.friends = vec![
            Friend::new("Clark", "https://i.pravatar.cc/48?u=118836", currency)
                .with_balance(Money::new(dec!(-7), currency)),
            Friend::new("Sarah", "https://i.pravatar.cc/48?u=933372", currency)
                .with_balance(Money::new(dec!(20), currency)),
            Friend::new("Anthony", "https://i.pravatar.cc/48?u=499476", currency),
        ];

        ledger
    }

    /// Returns the ledger identifier
    pub fn id(&self) -> LedgerId {
        self.id
    }

    /// Returns the ledger currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the friends in insertion order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// Returns the number of friends
    pub fn len(&self) -> usize {
        self.friends.len()
    }

    /// Returns true if the ledger has no friends
    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Gets a friend by id
    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    /// Returns the applied balance deltas, oldest first
    pub fn entries(&self) -> &[BalanceEntry] {
        &self.entries
    }

    /// Adds a new friend with a zero balance
    ///
    /// The image URI gets the fresh friend id appended as a disambiguating
    /// query parameter. Friends are never removed by any operation.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` or `image` is blank.
    #[instrument(skip(self), fields(ledger_id = %self.id))]
    pub fn add_friend(&mut self, name: &str, image: &str) -> Result<&Friend, LedgerError> {
        let name = name.trim();
        let image = image.trim();

        if name.is_empty() {
            return Err(LedgerError::validation("Friend name is required"));
        }
        if image.is_empty() {
            return Err(LedgerError::validation("Image reference is required"));
        }

        let friend = Friend::new(name, image, self.currency).with_image_tag();
        debug!(friend_id = %friend.id, "Adding friend");

        let index = self.friends.len();
        self.friends.push(friend);
        Ok(&self.friends[index])
    }

    /// Toggles the selection for the given friend
    ///
    /// Selecting an already-selected friend clears the selection and
    /// returns `None`; otherwise the friend becomes the sole selection.
    ///
    /// # Errors
    ///
    /// Returns `FriendNotFound` if no friend has the given id.
    #[instrument(skip(self), fields(ledger_id = %self.id))]
    pub fn select_friend(&mut self, id: FriendId) -> Result<Option<&Friend>, LedgerError> {
        if self.get(id).is_none() {
            return Err(LedgerError::not_found(id));
        }

        if self.selected == Some(id) {
            debug!(friend_id = %id, "Deselecting friend");
            self.selected = None;
            return Ok(None);
        }

        debug!(friend_id = %id, "Selecting friend");
        self.selected = Some(id);
        Ok(self.get(id))
    }

    /// Returns the currently selected friend, if any
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Adds `delta` to the friend's balance and records a journal entry
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// - `FriendNotFound` if no friend has the given id
    /// - A money error if `delta` is in a different currency
    #[instrument(skip(self), fields(ledger_id = %self.id, friend_id = %id))]
    pub fn apply_delta(&mut self, id: FriendId, delta: Money) -> Result<Money, LedgerError> {
        let friend = self
            .friends
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| LedgerError::not_found(id))?;

        let balance_after = friend.balance.checked_add(&delta)?;
        friend.balance = balance_after;

        self.entries.push(BalanceEntry {
            id: EntryId::new_v7(),
            friend_id: id,
            delta,
            balance_after,
            posted_at: Utc::now(),
        });

        debug!(%delta, %balance_after, "Applied balance delta");
        Ok(balance_after)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Currency::USD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ledger_balances() {
        let ledger = Ledger::seeded();
        let balances: Vec<_> = ledger
            .friends()
            .iter()
            .map(|f| f.balance.amount())
            .collect();

        assert_eq!(balances, vec![dec!(-7), dec!(20), dec!(0)]);
    }

    #[test]
    fn test_add_friend_rejects_blank_name() {
        let mut ledger = Ledger::new(Currency::USD);
        let result = ledger.add_friend("   ", "https://i.pravatar.cc/48");
        assert!(matches!(result, Err(LedgerError::Validation(_))));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_selection_toggle() {
        let mut ledger = Ledger::seeded();
        let clark = ledger.friends()[0].id;

        assert!(ledger.select_friend(clark).unwrap().is_some());
        assert!(ledger.select_friend(clark).unwrap().is_none());
        assert!(ledger.selected_friend().is_none());
    }

    #[test]
    fn test_apply_delta_records_entry() {
        let mut ledger = Ledger::seeded();
        let clark = ledger.friends()[0].id;

        let balance = ledger
            .apply_delta(clark, Money::new(dec!(7), Currency::USD))
            .unwrap();

        assert!(balance.is_zero());
        assert_eq!(ledger.entries().len(), 1);
        assert_eq!(ledger.entries()[0].friend_id, clark);
    }
}
