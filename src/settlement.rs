//! Settling debts: recording wallet payments and suggesting transfers.
//!
//! A settlement paid through the external wallet is recorded as a
//! [`Contribution`], so the settled debt stays settled the next time
//! balances are recomputed. The wallet provider itself is outside this
//! crate; only the resulting ledger record lives here.

use crate::error::{LedgerError, Result};
use crate::ledger::Balances;
use crate::model::{Contribution, Group, ParticipantId};
use crate::money::Money;
use chrono::NaiveDate;
use std::io::Write;

/// A suggested payment from one participant to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}

/// Records a settle-up payment as a pool contribution.
///
/// The contributor must be a group member and the amount positive.
pub fn settlement_contribution(
    id: impl Into<String>,
    group: &Group,
    participant: &str,
    amount: Money,
    date: NaiveDate,
) -> Result<Contribution> {
    if !group.is_member(participant) {
        return Err(LedgerError::UnknownParticipant {
            participant: participant.to_string(),
        });
    }
    if amount.is_negative() || amount.is_zero() {
        return Err(LedgerError::InvalidInput {
            message: format!("settlement amount must be positive, got {amount}"),
        });
    }
    Ok(Contribution {
        id: id.into(),
        group: group.id.clone(),
        participant: participant.to_string(),
        amount,
        date,
    })
}

/// Suggests who pays whom to square the group up.
///
/// Greedy pairing: the largest debtor pays the largest creditor, the
/// smaller of the two amounts at a time, until one side is exhausted.
/// Ties break on participant id so the plan is deterministic. When the
/// balances don't net to exactly zero (rounding drift from uneven
/// splits), the residue stays unpaired rather than being invented.
pub fn suggest_transfers(balances: &Balances) -> Vec<Transfer> {
    let mut debtors: Vec<(ParticipantId, Money)> = Vec::new();
    let mut creditors: Vec<(ParticipantId, Money)> = Vec::new();

    for (participant, balance) in balances {
        if balance.is_negative() {
            debtors.push((participant.clone(), balance.abs()));
        } else if !balance.is_zero() {
            creditors.push((participant.clone(), *balance));
        }
    }

    // Ascending, so the largest amount sits at the tail for popping
    debtors.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    creditors.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut transfers = Vec::new();

    while let (Some(debtor), Some(creditor)) = (debtors.last_mut(), creditors.last_mut()) {
        let amount = debtor.1.min(creditor.1);
        transfers.push(Transfer {
            from: debtor.0.clone(),
            to: creditor.0.clone(),
            amount,
        });

        debtor.1 -= amount;
        creditor.1 -= amount;
        if debtors.last().map(|d| d.1.is_zero()).unwrap_or(false) {
            debtors.pop();
        }
        if creditors.last().map(|c| c.1.is_zero()).unwrap_or(false) {
            creditors.pop();
        }
    }

    transfers
}

/// Writes a transfer plan as CSV.
pub fn write_transfers<W: Write>(transfers: &[Transfer], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["from", "to", "amount"])?;
    for transfer in transfers {
        csv_writer.write_record([
            transfer.from.as_str(),
            transfer.to.as_str(),
            &transfer.amount.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
