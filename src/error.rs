//! Error types for the trip ledger.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while validating records or running the CLI.
///
/// The validation variants (`InvalidInput`, `AllocationMismatch`,
/// `UnknownParticipant`, `DuplicateParticipant`) are recoverable: the
/// caller re-prompts with the field-level message. The balance
/// computation itself never fails.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed numeric or count input to a split computation
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Allocation shares do not sum to the expense amount
    #[error(
        "Allocations must equal the total amount: expected {expected}, \
         got {actual} (difference: {difference})"
    )]
    AllocationMismatch {
        expected: Money,
        actual: Money,
        difference: Money,
    },

    /// An allocation references someone outside the group
    #[error("Participant {participant} is not a member of the group")]
    UnknownParticipant { participant: String },

    /// The same participant appears twice in one expense's allocations
    #[error("Participant {participant} is allocated more than once")]
    DuplicateParticipant { participant: String },

    /// Group lookup failed
    #[error("Couldn't find group {group}")]
    GroupNotFound { group: String },

    /// Unparseable monetary amount
    #[error("Invalid amount: {0}")]
    Amount(#[from] rust_decimal::Error),

    /// Failed to open, read, or write the data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file is not valid JSON or doesn't match the schema
    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output error
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Bad command line
    #[error(
        "Usage: tripsplit <data.json> <balances|transfers|budgets|check> <group-id>\n\
         \x20      tripsplit <data.json> settle <group-id> <participant-id> <amount> [date]"
    )]
    Usage,
}
