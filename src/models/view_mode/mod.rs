// View mode module
// The three ways a year can be laid out as rows of day cells.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Square cells, column count chosen to fit the viewport
    #[default]
    Default,
    /// One row per calendar month, columns are day-of-month
    Months,
    /// One row per Sunday-started week, columns are day-of-week
    Weeks,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Default, ViewMode::Months, ViewMode::Weeks];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Default => "Year",
            ViewMode::Months => "Months",
            ViewMode::Weeks => "Weeks",
        }
    }

    /// Months and weeks reserve a leading label column.
    pub fn has_index_column(self) -> bool {
        !matches!(self, ViewMode::Default)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Default => "default",
            ViewMode::Months => "months",
            ViewMode::Weeks => "weeks",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "year" | "" => Ok(ViewMode::Default),
            "months" | "month" => Ok(ViewMode::Months),
            "weeks" | "week" => Ok(ViewMode::Weeks),
            other => Err(format!("Unknown view mode '{}'", other)),
        }
    }
}
