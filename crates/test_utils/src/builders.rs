//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults.

use core_kernel::{Currency, Money};
use domain_ledger::{Friend, Ledger};
use rust_decimal::Decimal;

use crate::fixtures::StringFixtures;

/// Builder for constructing test friends
pub struct FriendBuilder {
    name: String,
    image: String,
    balance: Option<Money>,
    currency: Currency,
}

impl Default for FriendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FriendBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: StringFixtures::new_friend_name().to_string(),
            image: StringFixtures::avatar().to_string(),
            balance: None,
            currency: Currency::USD,
        }
    }

    /// Sets the friend name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the image URI
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the starting balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Sets the currency (used when no balance is given)
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the friend
    pub fn build(self) -> Friend {
        let friend = Friend::new(self.name, self.image, self.currency);
        match self.balance {
            Some(balance) => friend.with_balance(balance),
            None => friend,
        }
    }
}

/// Builder for constructing test ledgers through the public API
pub struct LedgerBuilder {
    currency: Currency,
    friends: Vec<(String, Decimal)>,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBuilder {
    /// Creates a new builder for an empty USD ledger
    pub fn new() -> Self {
        Self {
            currency: Currency::USD,
            friends: Vec::new(),
        }
    }

    /// Sets the ledger currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a friend with a zero balance
    pub fn with_friend(mut self, name: impl Into<String>) -> Self {
        self.friends.push((name.into(), Decimal::ZERO));
        self
    }

    /// Adds a friend with a starting balance (positive = they owe me)
    pub fn with_friend_balance(mut self, name: impl Into<String>, balance: Decimal) -> Self {
        self.friends.push((name.into(), balance));
        self
    }

    /// Builds the ledger via `add_friend` and `apply_delta`
    pub fn build(self) -> Ledger {
        let mut ledger = Ledger::new(self.currency);

        for (name, balance) in self.friends {
            let id = ledger
                .add_friend(&name, StringFixtures::avatar())
                .expect("builder friend should be valid")
                .id;

            if !balance.is_zero() {
                ledger
                    .apply_delta(id, Money::new(balance, self.currency))
                    .expect("builder delta should apply");
            }
        }

        ledger
    }
}
