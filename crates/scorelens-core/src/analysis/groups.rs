/// Group summarizer -- Pass/Fail proportions per value of a categorical column.
///
/// Optional by nature: if the grouping column is absent the summary is
/// simply `None`. Partitions come out sorted by label so the table and bar
/// chart are stable across runs.
use crate::model::{Outcome, RecordTable};
use compact_str::CompactString;
use std::collections::BTreeMap;
use tracing::debug;

/// Outcome proportions within one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupProportion {
    pub group: CompactString,
    /// Number of rows in this partition.
    pub count: usize,
    pub pass: f64,
    pub fail: f64,
}

impl GroupProportion {
    /// Proportion of rows in this partition with `outcome`.
    pub fn share(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Pass => self.pass,
            Outcome::Fail => self.fail,
        }
    }
}

/// Proportions for every partition of the grouping column.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    /// Name of the column that was grouped on.
    pub column: CompactString,
    /// Partitions sorted ascending by group label.
    pub groups: Vec<GroupProportion>,
}

/// Partition rows by `column` and compute normalised outcome frequencies.
///
/// Returns `None` when `column` does not exist. Rows with an empty group
/// cell belong to no partition. `outcomes` must be aligned with the table
/// rows.
pub fn summarize_groups(
    table: &RecordTable,
    column: &str,
    outcomes: &[Outcome],
) -> Option<GroupSummary> {
    let Some(values) = table.column_values(column) else {
        debug!(column, "Grouping column absent, skipping group summary");
        return None;
    };

    // [pass, fail] counts per label.
    let mut counts: BTreeMap<CompactString, [usize; 2]> = BTreeMap::new();
    for (value, outcome) in values.zip(outcomes) {
        let Some(label) = value.group_label() else {
            continue;
        };
        let slot = counts.entry(label).or_insert([0, 0]);
        match outcome {
            Outcome::Pass => slot[0] += 1,
            Outcome::Fail => slot[1] += 1,
        }
    }

    let groups: Vec<GroupProportion> = counts
        .into_iter()
        .map(|(group, [pass, fail])| {
            let count = pass + fail;
            let total = count as f64;
            GroupProportion {
                group,
                count,
                pass: pass as f64 / total,
                fail: fail as f64 / total,
            }
        })
        .collect();

    debug!(column, partitions = groups.len(), "Summarised groups");

    Some(GroupSummary {
        column: CompactString::new(column),
        groups,
    })
}
