//! Ledger Domain - Friend Balances and Bill Splitting
//!
//! This crate implements the core of a "split bills with friends" session:
//! a registry of friends with signed running balances, a pure split
//! calculator, and the session state the rendering surface drives.
//!
//! # Balance Sign Convention
//!
//! Each friend carries one signed balance against the session owner:
//! - Negative: I owe the friend
//! - Positive: the friend owes me
//! - Zero: we are even
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{SplitSession, Payer};
//!
//! let mut session = SplitSession::seeded();
//! let clark = session.ledger().friends()[0].id;
//!
//! session.select_friend(clark)?;
//! let balance = session.split_bill(bill, my_expense, Payer::Me)?;
//! ```

pub mod error;
pub mod friend;
pub mod ledger;
pub mod session;
pub mod split;

pub use error::LedgerError;
pub use friend::{BalanceStatus, Friend};
pub use ledger::{BalanceEntry, Ledger};
pub use session::SplitSession;
pub use split::{compute_split, even_split, Payer};
