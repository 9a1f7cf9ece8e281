//! Whole-file JSON persistence for trip data.
//!
//! The computation modules never touch storage; the CLI loads a
//! snapshot here, passes explicit collections down, and saves back
//! after mutations. Records are held in flat per-type collections and
//! tied to their group by id.

use crate::error::{LedgerError, Result};
use crate::model::{Budget, Contribution, Expense, Group};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Everything the app persists, as one JSON document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataSet {
    pub groups: Vec<Group>,
    pub expenses: Vec<Expense>,
    pub contributions: Vec<Contribution>,

    /// Absent in files written before budgets existed
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl DataSet {
    /// Reads a data file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let data: DataSet = serde_json::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} groups, {} expenses, {} contributions, {} budgets from {}",
            data.groups.len(),
            data.expenses.len(),
            data.contributions.len(),
            data.budgets.len(),
            path.as_ref().display()
        );
        Ok(data)
    }

    /// Writes the data file back, replacing its contents.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Looks up a group by id.
    pub fn group(&self, id: &str) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| LedgerError::GroupNotFound {
                group: id.to_string(),
            })
    }

    /// Expenses belonging to one group.
    pub fn expenses_for(&self, group_id: &str) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.group == group_id).collect()
    }

    /// Contributions belonging to one group.
    pub fn contributions_for(&self, group_id: &str) -> Vec<&Contribution> {
        self.contributions
            .iter()
            .filter(|c| c.group == group_id)
            .collect()
    }

    /// Budgets belonging to one group.
    pub fn budgets_for(&self, group_id: &str) -> Vec<&Budget> {
        self.budgets.iter().filter(|b| b.group == group_id).collect()
    }

    /// Appends a contribution (settlements land here).
    pub fn add_contribution(&mut self, contribution: Contribution) {
        self.contributions.push(contribution);
    }

    /// Next free contribution id of the form `c<N>`.
    pub fn next_contribution_id(&self) -> String {
        let max = self
            .contributions
            .iter()
            .filter_map(|c| c.id.strip_prefix('c').and_then(|n| n.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);
        format!("c{}", max + 1)
    }
}
