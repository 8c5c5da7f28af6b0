//! Core Kernel - Foundational types for the split ledger
//!
//! This crate provides the building blocks shared by the domain modules:
//! - Money with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Common error types

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{EntryId, FriendId, LedgerId};
pub use money::{Currency, Money, MoneyError};
