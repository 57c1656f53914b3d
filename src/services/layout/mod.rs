//! Year-grid layout engine.
//!
//! Turns `(year, events, view, viewport)` into a [`RenderModel`]: the
//! position of every day cell, the height of every row, and one pixel
//! rectangle per event segment. Every stage is a pure function; the host
//! recomputes on each resize or event change (optionally through
//! [`cache::LayoutCache`]).

pub mod cache;
pub mod chrome;
pub mod days;
pub mod lanes;
pub mod overlay;
pub mod partition;
pub mod positions;
pub mod row_heights;
pub mod segments;
pub mod solver;

pub use cache::LayoutCache;
pub use chrome::{column_headers, day_label, header_row_height, DayLabel};
pub use days::{generate_year_days, Day};
pub use lanes::{assign_lanes, pack_row, LaneLayout};
pub use overlay::{cell_rect, position_bars, row_tops, CellSize, EventBar, PixelRect};
pub use partition::{partition, Partition, RowGroup, RowLabel};
pub use positions::{GridPosition, PositionMap};
pub use row_heights::{row_height, row_heights};
pub use segments::{build_segments, Segment};
pub use solver::{grid_dims, solve_square_grid, GridDims, Viewport};

use crate::models::event::AllDayEvent;
use crate::models::settings::LayoutConstants;
use crate::models::view_mode::ViewMode;

/// Everything one layout pass depends on.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub year: i32,
    pub view: ViewMode,
    pub viewport: Viewport,
    /// Cell size measured from the rendered grid, if the host has one yet
    pub measured_cell: Option<CellSize>,
    pub events: &'a [AllDayEvent],
    pub constants: &'a LayoutConstants,
}

/// A day cell and where it sits.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: Day,
    pub position: GridPosition,
    pub rect: PixelRect,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub index: usize,
    pub top: f32,
    pub height: f32,
    pub lanes: usize,
    /// Leading index-column label (months/weeks views)
    pub label: Option<RowLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub year: i32,
    pub view: ViewMode,
    pub dims: GridDims,
    pub cell: CellSize,
    pub index_column_width: f32,
    pub cells: Vec<DayCell>,
    pub rows: Vec<RowLayout>,
    /// Bars in row order; `segment.event` indexes the input event slice
    pub bars: Vec<EventBar>,
    pub total_width: f32,
    pub total_height: f32,
}

impl RenderModel {
    /// Topmost bar under a grid-relative point.
    pub fn bar_at(&self, x: f32, y: f32) -> Option<&EventBar> {
        self.bars.iter().find(|bar| bar.rect.contains(x, y))
    }

    pub fn cell_at(&self, x: f32, y: f32) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.rect.contains(x, y))
    }
}

/// Cell size used for bar placement. The host's measurement wins; otherwise
/// square cells for the default view and an even split of the remaining
/// width for months/weeks.
pub fn effective_cell_size(
    view: ViewMode,
    dims: GridDims,
    viewport: Viewport,
    constants: &LayoutConstants,
    measured: Option<CellSize>,
) -> CellSize {
    if let Some(cell) = measured.filter(|cell| cell.width > 0.0 && cell.height > 0.0) {
        return cell;
    }
    match view {
        ViewMode::Default => CellSize {
            width: dims.cell_size as f32,
            height: dims.cell_size as f32,
        },
        ViewMode::Months | ViewMode::Weeks => {
            let columns = dims.columns.max(1) as f32;
            let usable = viewport.width
                - constants.index_column_width_for(view)
                - (columns - 1.0) * constants.gap;
            CellSize {
                width: (usable / columns).max(0.0),
                height: dims.cell_size as f32,
            }
        }
    }
}

/// Run the full pipeline for one input tuple.
pub fn compute_layout(input: &LayoutInput<'_>) -> RenderModel {
    let constants = input.constants;
    let gap = constants.gap;

    let days = generate_year_days(input.year);
    let dims = grid_dims(input.view, days.len(), input.viewport, constants);
    let partition = partition(&days, input.view, dims.columns);
    let positions = PositionMap::build(&days, &partition);

    let segments = build_segments(input.events, &positions, &partition);
    let lanes = assign_lanes(&segments);
    let heights = row_heights(partition.row_count(), dims.cell_size, &lanes, constants);
    let tops = row_tops(&heights, gap);

    let cell = effective_cell_size(input.view, dims, input.viewport, constants, input.measured_cell);
    let index_column_width = constants.index_column_width_for(input.view);
    let bars = position_bars(&segments, &lanes, &tops, cell.width, index_column_width, constants);

    let cells = days
        .into_iter()
        .filter_map(|day| {
            let position = positions.get(day.date)?;
            let rect = cell_rect(position, cell.width, &tops, &heights, index_column_width, gap)?;
            Some(DayCell { day, position, rect })
        })
        .collect();

    let rows: Vec<RowLayout> = heights
        .iter()
        .zip(&tops)
        .enumerate()
        .map(|(index, (&height, &top))| RowLayout {
            index,
            top,
            height,
            lanes: lanes.lanes_in_row(index),
            label: partition.row_label(index),
        })
        .collect();

    let columns = dims.columns as f32;
    let total_width = index_column_width + columns * cell.width + (columns - 1.0).max(0.0) * gap;
    let total_height = rows.last().map(|row| row.top + row.height).unwrap_or(0.0);

    log::debug!(
        "Layout {} {}: {} cols x {} rows, cell {}px, {} segments",
        input.year,
        input.view,
        dims.columns,
        rows.len(),
        dims.cell_size,
        segments.len()
    );

    RenderModel {
        year: input.year,
        view: input.view,
        dims,
        cell,
        index_column_width,
        cells,
        rows,
        bars,
        total_width,
        total_height,
    }
}
