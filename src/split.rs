//! Allocation validation and equal-split computation.
//!
//! Every expense passes through [`validate_expense`] before it is
//! accepted into the stored collections. The balance ledger trusts its
//! inputs and does not re-run these checks.

use crate::error::{LedgerError, Result};
use crate::model::{Allocation, Expense, Group};
use crate::money::Money;

/// Divides `amount` evenly among `participant_count` people.
///
/// Remainders are not redistributed; see [`Money::split_even`]. The
/// cumulative rounding across all shares stays within
/// [`Money::TOLERANCE`] of the original amount.
pub fn equal_split(amount: Money, participant_count: usize) -> Result<Money> {
    if participant_count == 0 {
        return Err(LedgerError::InvalidInput {
            message: "cannot split among zero participants".to_string(),
        });
    }
    if amount.is_negative() {
        return Err(LedgerError::InvalidInput {
            message: format!("cannot split a negative amount ({amount})"),
        });
    }
    Ok(amount.split_even(participant_count))
}

/// Builds the allocation set for an equal-mode expense, one share per
/// participant.
pub fn equal_allocations(amount: Money, participants: &[&str]) -> Result<Vec<Allocation>> {
    let share = equal_split(amount, participants.len())?;
    Ok(participants
        .iter()
        .map(|p| Allocation::new(*p, share))
        .collect())
}

/// Checks that allocation shares sum to the expense amount within
/// [`Money::TOLERANCE`].
///
/// On mismatch the error carries the expected total, the actual total,
/// and the signed difference (`actual - expected`) so the caller can
/// render a precise correction hint.
pub fn validate_allocations(amount: Money, allocations: &[Allocation]) -> Result<()> {
    let actual: Money = allocations.iter().map(|a| a.share).sum();
    let difference = actual - amount;
    if difference.abs() <= Money::TOLERANCE {
        Ok(())
    } else {
        Err(LedgerError::AllocationMismatch {
            expected: amount,
            actual,
            difference,
        })
    }
}

/// Checks that every allocation references a group member.
///
/// Fails on the first unknown participant; validation is all-or-nothing
/// before an expense is accepted, never partially applied.
pub fn validate_membership(member_ids: &[&str], allocations: &[Allocation]) -> Result<()> {
    for allocation in allocations {
        if !member_ids.contains(&allocation.participant.as_str()) {
            return Err(LedgerError::UnknownParticipant {
                participant: allocation.participant.clone(),
            });
        }
    }
    Ok(())
}

/// The composed pre-persist gate for an expense.
///
/// Checks, in order: positive amount, payer membership, non-negative
/// shares, no duplicate allocatee, allocatee membership, allocation sum.
pub fn validate_expense(group: &Group, expense: &Expense) -> Result<()> {
    if expense.amount.is_negative() || expense.amount.is_zero() {
        return Err(LedgerError::InvalidInput {
            message: format!("expense amount must be positive, got {}", expense.amount),
        });
    }

    if !group.is_member(&expense.paid_by) {
        return Err(LedgerError::UnknownParticipant {
            participant: expense.paid_by.clone(),
        });
    }

    for allocation in &expense.allocations {
        if allocation.share.is_negative() {
            return Err(LedgerError::InvalidInput {
                message: format!(
                    "allocation share for {} must not be negative, got {}",
                    allocation.participant, allocation.share
                ),
            });
        }
    }

    for (idx, allocation) in expense.allocations.iter().enumerate() {
        let seen_before = expense.allocations[..idx]
            .iter()
            .any(|a| a.participant == allocation.participant);
        if seen_before {
            return Err(LedgerError::DuplicateParticipant {
                participant: allocation.participant.clone(),
            });
        }
    }

    validate_membership(&group.member_ids(), &expense.allocations)?;
    validate_allocations(expense.amount, &expense.allocations)?;

    Ok(())
}
