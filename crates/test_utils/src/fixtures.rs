//! Pre-built test fixtures
//!
//! Ready-to-use test data for common entities, consistent and predictable
//! across the suite.

use core_kernel::{Currency, Money};
use domain_ledger::Friend;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard bill amount
    pub fn usd_bill() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Half the standard bill
    pub fn usd_half_bill() -> Money {
        Money::new(dec!(50.00), Currency::USD)
    }

    /// A zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// The seeded debt to Clark (I owe him 7)
    pub fn usd_owed_to_clark() -> Money {
        Money::new(dec!(-7.00), Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// The default avatar base URI
    pub fn avatar() -> &'static str {
        "https://i.pravatar.cc/48"
    }

    /// A friend name not present in the seeded ledger
    pub fn new_friend_name() -> &'static str {
        "Denise"
    }
}

/// Fixture for Friend test data
pub struct FriendFixtures;

impl FriendFixtures {
    /// A friend I owe money to
    pub fn clark() -> Friend {
        Friend::new("Clark", "https://i.pravatar.cc/48?u=118836", Currency::USD)
            .with_balance(MoneyFixtures::usd_owed_to_clark())
    }

    /// A friend who owes me money
    pub fn sarah() -> Friend {
        Friend::new("Sarah", "https://i.pravatar.cc/48?u=933372", Currency::USD)
            .with_balance(Money::new(dec!(20.00), Currency::USD))
    }

    /// A friend with a settled balance
    pub fn anthony() -> Friend {
        Friend::new("Anthony", "https://i.pravatar.cc/48?u=499476", Currency::USD)
    }
}
