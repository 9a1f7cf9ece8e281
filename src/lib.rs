//! # TripSplit
//!
//! A shared-expense ledger for group trips: record expenses paid by one
//! member and split across the group, record contributions to a shared
//! pool, and compute who owes whom.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: 2 decimal places via `rust_decimal`
//! - **Pure computation**: balances are a fold over explicit record
//!   collections; persistence stays in the outer layer
//! - **Validate before persist**: expenses pass the allocation
//!   validator before entering storage; the ledger trusts its input
//! - **Deterministic output**: reports sorted by participant id
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//! use tripsplit::{compute_balances, Money};
//! use tripsplit::model::{Allocation, Expense, Participant, SplitMode};
//!
//! let members = vec![
//!     Participant { id: "you".into(), name: "You".into() },
//!     Participant { id: "alice".into(), name: "Alice".into() },
//! ];
//! let dinner = Expense {
//!     id: "e1".into(),
//!     group: "g1".into(),
//!     description: "Dinner".into(),
//!     amount: Money::from_str("100.00").unwrap(),
//!     paid_by: "alice".into(),
//!     date: chrono::NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
//!     split: SplitMode::Equal,
//!     allocations: vec![
//!         Allocation::new("you", Money::from_str("50.00").unwrap()),
//!         Allocation::new("alice", Money::from_str("50.00").unwrap()),
//!     ],
//!     category: None,
//! };
//!
//! let balances = compute_balances(&members, &[&dinner], &[]);
//! assert_eq!(balances["you"], Money::from_str("-50.00").unwrap());
//! assert_eq!(balances["alice"], Money::from_str("50.00").unwrap());
//! ```

pub mod budget;
pub mod error;
pub mod ledger;
pub mod model;
pub mod money;
pub mod settlement;
pub mod split;
pub mod store;

pub use error::{LedgerError, Result};
pub use ledger::{compute_balances, Balances};
pub use model::{
    Allocation, Budget, Contribution, Expense, Group, Participant, ParticipantId, SplitMode,
};
pub use money::Money;
pub use settlement::Transfer;
pub use store::DataSet;
