use chrono::{Datelike, Weekday};

use super::days::Day;
use crate::models::view_mode::ViewMode;
use crate::utils::date::MONTH_SHORT;

/// Label shown in the leading index column of a grouped row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowLabel {
    /// Zero-based month
    Month(u32),
    /// One-based week number within the year
    Week(u32),
}

impl RowLabel {
    pub fn text(self) -> String {
        match self {
            RowLabel::Month(month0) => MONTH_SHORT
                .get(month0 as usize)
                .copied()
                .unwrap_or("?")
                .to_string(),
            RowLabel::Week(week) => week.to_string(),
        }
    }
}

/// The days of one rendered row. Columns are positions within `days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
    pub index: usize,
    pub label: RowLabel,
    pub days: Vec<Day>,
}

/// How the year's days are split into rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    /// Default view: row-major fill of a fixed column count
    Uniform { columns: usize, day_count: usize },
    /// Months/weeks view: one explicit group per row
    Grouped(Vec<RowGroup>),
}

impl Partition {
    pub fn row_count(&self) -> usize {
        match self {
            Partition::Uniform { columns, day_count } => day_count.div_ceil((*columns).max(1)),
            Partition::Grouped(groups) => groups.len(),
        }
    }

    /// Last column index that exists in `row`.
    ///
    /// Uniform rows always report `columns - 1`, grouped rows their own day
    /// count minus one.
    pub fn last_column(&self, row: usize) -> Option<usize> {
        match self {
            Partition::Uniform { columns, .. } => {
                (row < self.row_count()).then(|| (*columns).max(1) - 1)
            }
            Partition::Grouped(groups) => groups
                .get(row)
                .and_then(|group| group.days.len().checked_sub(1)),
        }
    }

    pub fn groups(&self) -> &[RowGroup] {
        match self {
            Partition::Uniform { .. } => &[],
            Partition::Grouped(groups) => groups,
        }
    }

    pub fn row_label(&self, row: usize) -> Option<RowLabel> {
        self.groups().get(row).map(|group| group.label)
    }
}

/// Split `days` into rows for `view`. `columns` is only used by the default view.
pub fn partition(days: &[Day], view: ViewMode, columns: usize) -> Partition {
    match view {
        ViewMode::Default => Partition::Uniform {
            columns: columns.max(1),
            day_count: days.len(),
        },
        ViewMode::Months => Partition::Grouped(group_by_month(days)),
        ViewMode::Weeks => Partition::Grouped(group_by_week(days)),
    }
}

fn open_group(groups: &mut Vec<RowGroup>, label: RowLabel, first: &Day) {
    groups.push(RowGroup {
        index: groups.len(),
        label,
        days: vec![first.clone()],
    });
}

fn group_by_month(days: &[Day]) -> Vec<RowGroup> {
    let mut groups: Vec<RowGroup> = Vec::with_capacity(12);
    for day in days {
        let label = RowLabel::Month(day.date.month0());
        if let Some(group) = groups.last_mut().filter(|g| g.label == label) {
            group.days.push(day.clone());
            continue;
        }
        open_group(&mut groups, label, day);
    }
    groups
}

/// Weeks start on Sunday. The first day of the year always opens the first
/// group, so that group may hold fewer than seven days; so may the last.
fn group_by_week(days: &[Day]) -> Vec<RowGroup> {
    let mut groups: Vec<RowGroup> = Vec::with_capacity(54);
    for (idx, day) in days.iter().enumerate() {
        let starts_week = idx == 0 || day.date.weekday() == Weekday::Sun;
        if !starts_week {
            if let Some(group) = groups.last_mut() {
                group.days.push(day.clone());
                continue;
            }
        }
        let label = RowLabel::Week(groups.len() as u32 + 1);
        open_group(&mut groups, label, day);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::layout::days::generate_year_days;
    use pretty_assertions::assert_eq;

    fn flatten(groups: &[RowGroup]) -> Vec<Day> {
        groups.iter().flat_map(|g| g.days.iter().cloned()).collect()
    }

    #[test]
    fn test_months_partition_covers_year_in_order() {
        let days = generate_year_days(2024);
        let partition = partition(&days, ViewMode::Months, 0);
        let groups = partition.groups();

        assert_eq!(groups.len(), 12);
        assert_eq!(flatten(groups), days);
        assert_eq!(groups[1].days.len(), 29);
        assert_eq!(partition.last_column(0), Some(30));
        assert_eq!(partition.last_column(1), Some(28));
        assert_eq!(partition.row_label(11).map(RowLabel::text).as_deref(), Some("Dec"));
    }

    #[test]
    fn test_weeks_partition_short_first_and_last_groups() {
        // 2025-01-01 is a Wednesday, 2025-12-31 is a Wednesday
        let days = generate_year_days(2025);
        let partition = partition(&days, ViewMode::Weeks, 0);
        let groups = partition.groups();

        assert_eq!(groups[0].days.len(), 4);
        assert_eq!(groups[0].days[0].key, "2025-01-01");
        assert_eq!(groups[1].days[0].date.weekday(), Weekday::Sun);
        assert_eq!(groups.last().unwrap().days.len(), 4);
        assert_eq!(groups.last().unwrap().days.last().unwrap().key, "2025-12-31");
        assert_eq!(flatten(groups), days);
        assert_eq!(partition.last_column(0), Some(3));
        assert_eq!(partition.row_label(1), Some(RowLabel::Week(2)));
    }

    #[test]
    fn test_weeks_partition_year_starting_on_sunday() {
        // 2023-01-01 is a Sunday: the first group is a full week
        let days = generate_year_days(2023);
        let groups = partition(&days, ViewMode::Weeks, 0).groups().to_vec();

        assert_eq!(groups[0].days.len(), 7);
        assert!(groups
            .iter()
            .all(|g| g.days[0].date.weekday() == Weekday::Sun));
        assert_eq!(groups.len(), 53);
        // 2023-12-31 is also a Sunday, alone in the final group
        assert_eq!(groups.last().unwrap().days.len(), 1);
    }

    #[test]
    fn test_uniform_partition_rows() {
        let days = generate_year_days(2024);
        let partition = partition(&days, ViewMode::Default, 24);

        assert_eq!(partition.row_count(), 16);
        assert_eq!(partition.last_column(15), Some(23));
        assert_eq!(partition.last_column(16), None);
        assert!(partition.groups().is_empty());
    }
}
