//! Domain records: groups, expenses, contributions, budgets.
//!
//! Records reference their owning group by id; nothing is embedded.
//! Display names live on the member roster only — allocations and
//! balances carry participant ids, and names are joined back in at
//! render time.

use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Participant identifier, unique within a group.
pub type ParticipantId = String;

/// A member of a trip group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Participant {
    /// Unique id within the group
    pub id: ParticipantId,

    /// Display name, presentation-layer only
    pub name: String,
}

/// A trip group and its member roster.
///
/// Expenses, contributions, and budgets belong to a group by id
/// reference and are stored in flat per-type collections.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub members: Vec<Participant>,
}

impl Group {
    /// Returns `true` if `participant` is on the member roster.
    pub fn is_member(&self, participant: &str) -> bool {
        self.members.iter().any(|m| m.id == participant)
    }

    /// Member ids in roster order.
    pub fn member_ids(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.id.as_str()).collect()
    }

    /// Display name for a member id, falling back to the id itself for
    /// participants no longer on the roster.
    pub fn member_name<'a>(&'a self, participant: &'a str) -> &'a str {
        self.members
            .iter()
            .find(|m| m.id == participant)
            .map(|m| m.name.as_str())
            .unwrap_or(participant)
    }
}

/// How an expense is divided among its allocatees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Evenly across all allocatees
    Equal,

    /// Explicit per-participant shares
    Custom,
}

/// One participant's share of an expense.
///
/// Owned exclusively by its parent expense; carries no identity of
/// its own.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Allocation {
    pub participant: ParticipantId,

    /// Non-negative share of the expense amount
    pub share: Money,
}

impl Allocation {
    pub fn new(participant: impl Into<ParticipantId>, share: Money) -> Self {
        Allocation {
            participant: participant.into(),
            share,
        }
    }
}

/// A shared expense paid by one member and split across some subset
/// of the group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: String,

    /// Owning group id
    pub group: String,

    pub description: String,

    /// Positive total amount
    pub amount: Money,

    /// Who fronted the money
    pub paid_by: ParticipantId,

    pub date: NaiveDate,

    pub split: SplitMode,

    /// One entry per participating member; order is irrelevant
    pub allocations: Vec<Allocation>,

    /// Optional category tag, used by budget reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Money a participant puts into the shared pool.
///
/// Credits the contributor's balance with no offsetting debit, unlike
/// an expense which credits the payer and debits the allocatees.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Contribution {
    pub id: String,

    /// Owning group id
    pub group: String,

    pub participant: ParticipantId,

    /// Positive amount
    pub amount: Money,

    pub date: NaiveDate,
}

/// Estimated spend for one expense category of a group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Budget {
    pub id: String,

    /// Owning group id
    pub group: String,

    pub category: String,

    pub estimated: Money,
}
