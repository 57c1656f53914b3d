use chrono::NaiveDate;
use std::collections::HashMap;

use super::days::Day;
use super::partition::Partition;
use crate::utils::date::parse_date_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

/// Day -> cell coordinate lookup for one (days, partition) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionMap {
    positions: HashMap<NaiveDate, GridPosition>,
}

impl PositionMap {
    pub fn build(days: &[Day], partition: &Partition) -> Self {
        let mut positions = HashMap::with_capacity(days.len());
        match partition {
            Partition::Uniform { columns, .. } => {
                let columns = (*columns).max(1);
                for (idx, day) in days.iter().enumerate() {
                    positions.insert(
                        day.date,
                        GridPosition {
                            row: idx / columns,
                            col: idx % columns,
                        },
                    );
                }
            }
            Partition::Grouped(groups) => {
                for (row, group) in groups.iter().enumerate() {
                    for (col, day) in group.days.iter().enumerate() {
                        positions.insert(day.date, GridPosition { row, col });
                    }
                }
            }
        }
        Self { positions }
    }

    /// `None` means the date is not part of the rendered year.
    pub fn get(&self, date: NaiveDate) -> Option<GridPosition> {
        self.positions.get(&date).copied()
    }

    /// Lookup by canonical `YYYY-MM-DD` key. Malformed keys are a miss.
    pub fn get_key(&self, key: &str) -> Option<GridPosition> {
        parse_date_key(key).and_then(|date| self.get(date))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view_mode::ViewMode;
    use crate::services::layout::days::generate_year_days;
    use crate::services::layout::partition::partition;

    fn map_for(year: i32, view: ViewMode, columns: usize) -> PositionMap {
        let days = generate_year_days(year);
        let partition = partition(&days, view, columns);
        PositionMap::build(&days, &partition)
    }

    #[test]
    fn test_default_view_is_row_major() {
        let map = map_for(2024, ViewMode::Default, 24);
        assert_eq!(map.len(), 366);
        assert_eq!(map.get_key("2024-01-01"), Some(GridPosition { row: 0, col: 0 }));
        assert_eq!(map.get_key("2024-01-25"), Some(GridPosition { row: 1, col: 0 }));
        assert_eq!(map.get_key("2024-12-31"), Some(GridPosition { row: 15, col: 5 }));
    }

    #[test]
    fn test_months_view_columns_are_day_of_month() {
        let map = map_for(2024, ViewMode::Months, 0);
        assert_eq!(map.get_key("2024-03-31"), Some(GridPosition { row: 2, col: 30 }));
        assert_eq!(map.get_key("2024-12-01"), Some(GridPosition { row: 11, col: 0 }));
    }

    #[test]
    fn test_weeks_view_columns_restart_each_group() {
        // 2025-01-01 is a Wednesday, so Jan 4 is the last cell of the short first week
        let map = map_for(2025, ViewMode::Weeks, 0);
        assert_eq!(map.get_key("2025-01-04"), Some(GridPosition { row: 0, col: 3 }));
        assert_eq!(map.get_key("2025-01-05"), Some(GridPosition { row: 1, col: 0 }));
    }

    #[test]
    fn test_misses_are_none() {
        let map = map_for(2024, ViewMode::Months, 0);
        assert_eq!(map.get_key("2025-01-01"), None);
        assert_eq!(map.get_key("garbage"), None);
    }
}
