//! Friend entity and balance classification
//!
//! A `Friend` is one counterparty in the ledger: a display name, an opaque
//! image URI for the avatar, and a single signed running balance against
//! the session owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, FriendId, Money};

/// Classification of a running balance, as the sidebar renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceStatus {
    /// Balance is negative: I owe the friend
    YouOwe,
    /// Balance is positive: the friend owes me
    OwesYou,
    /// Balance is zero: we are even
    Settled,
}

/// A friend tracked by the ledger
///
/// The id is immutable once created; the balance is only ever changed
/// through [`Ledger::apply_delta`](crate::ledger::Ledger::apply_delta).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    /// Unique friend identifier
    pub id: FriendId,
    /// Display name
    pub name: String,
    /// Opaque image URI for the avatar
    pub image: String,
    /// Signed running balance against the session owner
    pub balance: Money,
    /// When this friend was added
    pub created_at: DateTime<Utc>,
}

impl Friend {
    /// Creates a new friend with a fresh id and a zero balance
    pub fn new(name: impl Into<String>, image: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: FriendId::new_v7(),
            name: name.into(),
            image: image.into(),
            balance: Money::zero(currency),
            created_at: Utc::now(),
        }
    }

    /// Sets the starting balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Appends this friend's id to the image URI as a disambiguating
    /// query parameter
    ///
    /// Avatar services serve a stable image per query string, so tagging
    /// the URI with the friend id keeps two friends with the same base URI
    /// visually distinct.
    pub fn with_image_tag(mut self) -> Self {
        let separator = if self.image.contains('?') { '&' } else { '?' };
        self.image = format!("{}{}u={}", self.image, separator, self.id.as_uuid());
        self
    }

    /// Classifies the current balance
    pub fn status(&self) -> BalanceStatus {
        if self.balance.is_negative() {
            BalanceStatus::YouOwe
        } else if self.balance.is_positive() {
            BalanceStatus::OwesYou
        } else {
            BalanceStatus::Settled
        }
    }

    /// Returns the sidebar line for this friend's balance
    pub fn summary(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe => {
                format!("You owe {} {}", self.name, self.balance.abs())
            }
            BalanceStatus::OwesYou => {
                format!("{} owes you {}", self.name, self.balance.abs())
            }
            BalanceStatus::Settled => format!("You and {} are even", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_friend_starts_settled() {
        let friend = Friend::new("Clark", "https://i.pravatar.cc/48", Currency::USD);
        assert!(friend.balance.is_zero());
        assert_eq!(friend.status(), BalanceStatus::Settled);
    }

    #[test]
    fn test_status_classification() {
        let base = Friend::new("Sarah", "https://i.pravatar.cc/48", Currency::USD);

        let owes_me = base
            .clone()
            .with_balance(Money::new(dec!(20), Currency::USD));
        assert_eq!(owes_me.status(), BalanceStatus::OwesYou);

        let i_owe = base.with_balance(Money::new(dec!(-7), Currency::USD));
        assert_eq!(i_owe.status(), BalanceStatus::YouOwe);
    }

    #[test]
    fn test_summary_lines() {
        let friend = Friend::new("Clark", "https://i.pravatar.cc/48", Currency::USD)
            .with_balance(Money::new(dec!(-7), Currency::USD));
        assert_eq!(friend.summary(), "You owe Clark $7.00");

        let friend = friend.with_balance(Money::new(dec!(20), Currency::USD));
        assert_eq!(friend.summary(), "Clark owes you $20.00");

        let friend = friend.with_balance(Money::zero(Currency::USD));
        assert_eq!(friend.summary(), "You and Clark are even");
    }

    #[test]
    fn test_image_tag_appends_query_parameter() {
        let friend = Friend::new("Anthony", "https://i.pravatar.cc/48", Currency::USD)
            .with_image_tag();
        assert!(friend
            .image
            .starts_with("https://i.pravatar.cc/48?u="));
        assert!(friend.image.contains(&friend.id.as_uuid().to_string()));
    }

    #[test]
    fn test_image_tag_respects_existing_query() {
        let friend = Friend::new("Anthony", "https://i.pravatar.cc/48?size=96", Currency::USD)
            .with_image_tag();
        assert!(friend.image.contains("?size=96&u="));
    }
}
