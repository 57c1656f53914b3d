use crate::models::settings::LayoutConstants;
use crate::models::view_mode::ViewMode;

/// Column count and base cell size (pixels) for the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    pub columns: usize,
    pub cell_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Grid dimensions for `view`. Months and weeks use fixed column counts and
/// cell heights; the default view searches for the largest square cell.
pub fn grid_dims(
    view: ViewMode,
    total_days: usize,
    viewport: Viewport,
    constants: &LayoutConstants,
) -> GridDims {
    match view {
        ViewMode::Default => solve_square_grid(
            total_days,
            viewport.width,
            viewport.height,
            constants.gap,
            constants.fallback_cell_size,
        ),
        ViewMode::Months => GridDims {
            columns: constants.month_columns,
            cell_size: constants.month_cell_height,
        },
        ViewMode::Weeks => GridDims {
            columns: constants.week_columns,
            cell_size: constants.week_cell_height,
        },
    }
}

/// Pick the column count that gives the largest square cell while the whole
/// grid still fits in `height`.
///
/// Every count from 1 to `min(total_days, floor(width))` is tried; a later
/// count only wins with a strictly larger cell, so ties go to fewer columns.
/// When nothing fits, one column is used with a cell of at least
/// `fallback_cell` and the host scrolls.
pub fn solve_square_grid(
    total_days: usize,
    width: f32,
    height: f32,
    gap: f32,
    fallback_cell: u32,
) -> GridDims {
    // NaN fails both comparisons
    if !(width > 0.0 && height > 0.0) {
        return GridDims {
            columns: 1,
            cell_size: fallback_cell,
        };
    }

    let width = f64::from(width);
    let height = f64::from(height);
    let gap = f64::from(gap);
    let max_columns = total_days.min((width.floor() as usize).max(1));

    let mut best_columns = 1usize;
    let mut best_cell = 0u32;

    for columns in 1..=max_columns {
        let cell = cell_for(width, gap, columns);
        if cell <= 0.0 {
            break;
        }
        let rows = total_days.div_ceil(columns) as f64;
        let total_height = rows * cell + (rows - 1.0) * gap;
        if total_height <= height && cell as u32 > best_cell {
            best_cell = cell as u32;
            best_columns = columns;
        }
    }

    if best_cell == 0 {
        let cell = cell_for(width, gap, best_columns).max(0.0) as u32;
        log::debug!(
            "No column count fits {}x{} for {} days; falling back to {} column(s)",
            width,
            height,
            total_days,
            best_columns
        );
        best_cell = cell.max(fallback_cell);
    }

    GridDims {
        columns: best_columns,
        cell_size: best_cell,
    }
}

fn cell_for(width: f64, gap: f64, columns: usize) -> f64 {
    let usable = width - (columns as f64 - 1.0) * gap;
    (usable / columns as f64).floor()
}
