//! Per-category spend aggregation against budget estimates.

use crate::error::Result;
use crate::model::{Budget, Expense};
use crate::money::Money;
use std::collections::HashMap;
use std::io::Write;

/// Category used for expenses that carry no tag.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One row of a budget report.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    pub estimated: Money,
    pub spent: Money,

    /// Negative when the category is overspent
    pub remaining: Money,
}

/// Sums expense amounts per category tag.
pub fn spend_by_category(expenses: &[&Expense]) -> HashMap<String, Money> {
    let mut spend: HashMap<String, Money> = HashMap::new();
    for expense in expenses {
        let category = expense.category.as_deref().unwrap_or(UNCATEGORIZED);
        *spend.entry(category.to_string()).or_insert(Money::ZERO) += expense.amount;
    }
    spend
}

/// Compares budgeted estimates against actual spend.
///
/// Every budgeted category appears, plus any category that saw spend
/// without a budget (estimated zero). Sorted by category name.
pub fn budget_report(budgets: &[&Budget], expenses: &[&Expense]) -> Vec<BudgetLine> {
    let mut spend = spend_by_category(expenses);

    let mut lines: Vec<BudgetLine> = budgets
        .iter()
        .map(|budget| {
            let spent = spend.remove(&budget.category).unwrap_or(Money::ZERO);
            BudgetLine {
                category: budget.category.clone(),
                estimated: budget.estimated,
                spent,
                remaining: budget.estimated - spent,
            }
        })
        .collect();

    for (category, spent) in spend {
        lines.push(BudgetLine {
            category,
            estimated: Money::ZERO,
            spent,
            remaining: -spent,
        });
    }

    lines.sort_by(|a, b| a.category.cmp(&b.category));
    lines
}

/// Writes a budget report as CSV.
pub fn write_report<W: Write>(lines: &[BudgetLine], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["category", "estimated", "spent", "remaining"])?;
    for line in lines {
        csv_writer.write_record([
            line.category.as_str(),
            &line.estimated.to_string(),
            &line.spent.to_string(),
            &line.remaining.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Allocation, SplitMode};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn expense(id: &str, amount: &str, category: Option<&str>) -> Expense {
        Expense {
            id: id.to_string(),
            group: "g1".to_string(),
            description: "test".to_string(),
            amount: money(amount),
            paid_by: "u1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
            split: SplitMode::Equal,
            allocations: vec![Allocation::new("u1", money(amount))],
            category: category.map(|c| c.to_string()),
        }
    }

    fn budget(category: &str, estimated: &str) -> Budget {
        Budget {
            id: format!("b-{category}"),
            group: "g1".to_string(),
            category: category.to_string(),
            estimated: money(estimated),
        }
    }

    #[test]
    fn test_spend_groups_by_category() {
        let sushi = expense("e1", "180.00", Some("Food & Dining"));
        let ramen = expense("e2", "40.00", Some("Food & Dining"));
        let taxi = expense("e3", "45.00", Some("Transportation"));
        let misc = expense("e4", "12.50", None);

        let spend = spend_by_category(&[&sushi, &ramen, &taxi, &misc]);
        assert_eq!(spend["Food & Dining"], money("220.00"));
        assert_eq!(spend["Transportation"], money("45.00"));
        assert_eq!(spend[UNCATEGORIZED], money("12.50"));
    }

    #[test]
    fn test_report_tracks_remaining_and_overspend() {
        let food_budget = budget("Food & Dining", "200.00");
        let sushi = expense("e1", "180.00", Some("Food & Dining"));
        let ramen = expense("e2", "40.00", Some("Food & Dining"));

        let report = budget_report(&[&food_budget], &[&sushi, &ramen]);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].spent, money("220.00"));
        assert_eq!(report[0].remaining, money("-20.00"));
    }

    #[test]
    fn test_unbudgeted_spend_still_reported() {
        let food_budget = budget("Food & Dining", "200.00");
        let taxi = expense("e1", "45.00", Some("Transportation"));

        let report = budget_report(&[&food_budget], &[&taxi]);
        assert_eq!(report.len(), 2);

        // Sorted by category name
        assert_eq!(report[0].category, "Food & Dining");
        assert_eq!(report[0].spent, Money::ZERO);
        assert_eq!(report[0].remaining, money("200.00"));
        assert_eq!(report[1].category, "Transportation");
        assert_eq!(report[1].estimated, Money::ZERO);
        assert_eq!(report[1].remaining, money("-45.00"));
    }
}
