//! Balance computation over a group's expenses and contributions.
//!
//! A pure fold over the record collections: no storage access, no
//! internal state, recomputed from scratch whenever the underlying
//! records change. Inputs are assumed to have passed the `split`
//! module's validation — the ledger does not re-check allocation sums
//! and will propagate any upstream inconsistency into balances that no
//! longer conserve.

use crate::error::Result;
use crate::model::{Contribution, Expense, Group, Participant, ParticipantId};
use crate::money::Money;
use log::debug;
use std::collections::HashMap;
use std::io::Write;

/// Signed net balance per participant.
///
/// Positive means the group owes the participant; negative means the
/// participant owes the group.
pub type Balances = HashMap<ParticipantId, Money>;

/// Computes every member's net balance for one group.
///
/// Every member starts at exactly zero, so inactive members appear in
/// the result rather than being absent. Per expense the payer is
/// credited the full amount and each allocatee debited its share; a
/// self-paying participant is credited once and debited once, which
/// nets correctly without special-casing. Contributions credit the
/// contributor with no offsetting debit.
///
/// Invariant (given validated expenses): the sum of all balances equals
/// the sum of all contribution amounts.
pub fn compute_balances(
    members: &[Participant],
    expenses: &[&Expense],
    contributions: &[&Contribution],
) -> Balances {
    let mut balances = Balances::new();
    for member in members {
        balances.insert(member.id.clone(), Money::ZERO);
    }

    for expense in expenses {
        debug!(
            "Expense {}: {} paid {} for \"{}\"",
            expense.id, expense.paid_by, expense.amount, expense.description
        );
        *balances.entry(expense.paid_by.clone()).or_insert(Money::ZERO) += expense.amount;

        for allocation in &expense.allocations {
            *balances
                .entry(allocation.participant.clone())
                .or_insert(Money::ZERO) -= allocation.share;
        }
    }

    for contribution in contributions {
        debug!(
            "Contribution {}: {} added {} to the pool",
            contribution.id, contribution.participant, contribution.amount
        );
        *balances
            .entry(contribution.participant.clone())
            .or_insert(Money::ZERO) += contribution.amount;
    }

    balances
}

/// Total spent across the given expenses.
pub fn total_expenses(expenses: &[&Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Total paid into the pool across the given contributions.
pub fn total_contributions(contributions: &[&Contribution]) -> Money {
    contributions.iter().map(|c| c.amount).sum()
}

/// Writes balances as CSV, sorted by participant id for deterministic
/// output.
///
/// Display names are joined from the group roster here, at render
/// time; ids the roster doesn't know (stale records) fall back to the
/// raw id.
pub fn write_balances<W: Write>(group: &Group, balances: &Balances, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["participant", "name", "balance"])?;

    let mut rows: Vec<_> = balances.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    for (participant, balance) in rows {
        csv_writer.write_record([
            participant.as_str(),
            group.member_name(participant),
            &balance.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
