//! TripSplit CLI
//!
//! Reads a JSON data file and reports on one group: net balances, a
//! settlement plan, budget status, or expense validation. `settle`
//! records a settlement payment as a pool contribution and saves the
//! file back.
//!
//! # Usage
//!
//! ```bash
//! tripsplit trip.json balances g1 > balances.csv
//! tripsplit trip.json settle g1 u1 50.00
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use chrono::{Local, NaiveDate};
use log::warn;
use std::env;
use std::io;
use std::process;
use std::str::FromStr;
use tripsplit::{budget, ledger, settlement, split};
use tripsplit::{DataSet, Expense, Group, LedgerError, Money, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(LedgerError::Usage);
    }

    let data_path = &args[1];
    let command = args[2].as_str();
    let group_id = &args[3];

    match command {
        "balances" => cmd_balances(data_path, group_id),
        "transfers" => cmd_transfers(data_path, group_id),
        "budgets" => cmd_budgets(data_path, group_id),
        "check" => cmd_check(data_path, group_id),
        "settle" => {
            if args.len() < 6 {
                return Err(LedgerError::Usage);
            }
            let participant = &args[4];
            let amount = Money::from_str(&args[5])?;
            let date = match args.get(6) {
                Some(raw) => {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                        LedgerError::InvalidInput {
                            message: format!("date must be YYYY-MM-DD: {e}"),
                        }
                    })?
                }
                None => Local::now().date_naive(),
            };
            cmd_settle(data_path, group_id, participant, amount, date)
        }
        _ => Err(LedgerError::Usage),
    }
}

/// Drops expenses that fail validation, logging each one, so a stale
/// or hand-edited data file still yields a report from its good
/// records.
fn checked_expenses<'a>(group: &Group, expenses: Vec<&'a Expense>) -> Vec<&'a Expense> {
    expenses
        .into_iter()
        .filter(|expense| match split::validate_expense(group, expense) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping expense {}: {}", expense.id, e);
                false
            }
        })
        .collect()
}

fn cmd_balances(data_path: &str, group_id: &str) -> Result<()> {
    let data = DataSet::load(data_path)?;
    let group = data.group(group_id)?;

    let expenses = checked_expenses(group, data.expenses_for(group_id));
    let contributions = data.contributions_for(group_id);
    let balances = ledger::compute_balances(&group.members, &expenses, &contributions);

    let stdout = io::stdout();
    ledger::write_balances(group, &balances, stdout.lock())
}

fn cmd_transfers(data_path: &str, group_id: &str) -> Result<()> {
    let data = DataSet::load(data_path)?;
    let group = data.group(group_id)?;

    let expenses = checked_expenses(group, data.expenses_for(group_id));
    let contributions = data.contributions_for(group_id);
    let balances = ledger::compute_balances(&group.members, &expenses, &contributions);
    let transfers = settlement::suggest_transfers(&balances);

    let stdout = io::stdout();
    settlement::write_transfers(&transfers, stdout.lock())
}

fn cmd_budgets(data_path: &str, group_id: &str) -> Result<()> {
    let data = DataSet::load(data_path)?;
    data.group(group_id)?;

    let report = budget::budget_report(&data.budgets_for(group_id), &data.expenses_for(group_id));

    let stdout = io::stdout();
    budget::write_report(&report, stdout.lock())
}

fn cmd_check(data_path: &str, group_id: &str) -> Result<()> {
    let data = DataSet::load(data_path)?;
    let group = data.group(group_id)?;

    let expenses = data.expenses_for(group_id);
    let mut failures = 0;
    for expense in &expenses {
        if let Err(e) = split::validate_expense(group, expense) {
            eprintln!("Expense {} (\"{}\"): {}", expense.id, expense.description, e);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(LedgerError::InvalidInput {
            message: format!("{failures} of {} expenses failed validation", expenses.len()),
        });
    }

    println!("All {} expenses valid", expenses.len());
    Ok(())
}

fn cmd_settle(
    data_path: &str,
    group_id: &str,
    participant: &str,
    amount: Money,
    date: NaiveDate,
) -> Result<()> {
    let mut data = DataSet::load(data_path)?;
    let group = data.group(group_id)?;

    let contribution = settlement::settlement_contribution(
        data.next_contribution_id(),
        group,
        participant,
        amount,
        date,
    )?;

    println!(
        "Recorded settlement {}: {} paid {} into the pool",
        contribution.id, participant, amount
    );
    data.add_contribution(contribution);
    data.save(data_path)
}
