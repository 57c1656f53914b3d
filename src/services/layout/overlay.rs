use super::lanes::LaneLayout;
use super::positions::GridPosition;
use super::segments::Segment;
use crate::models::settings::LayoutConstants;

/// Rendered size of one day cell, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

/// Absolute rectangle relative to the grid's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// A positioned event bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBar {
    pub segment: Segment,
    pub lane: usize,
    pub rect: PixelRect,
}

/// Top edge of every row: each row starts one gap below the previous row's
/// (possibly grown) height.
pub fn row_tops(row_heights: &[f32], gap: f32) -> Vec<f32> {
    let mut tops = Vec::with_capacity(row_heights.len());
    let mut cumulative = 0.0;
    for height in row_heights {
        tops.push(cumulative);
        cumulative += height + gap;
    }
    tops
}

/// Rectangle of the day cell at `position`.
pub fn cell_rect(
    position: GridPosition,
    cell_width: f32,
    row_tops: &[f32],
    row_heights: &[f32],
    index_column_width: f32,
    gap: f32,
) -> Option<PixelRect> {
    Some(PixelRect {
        left: index_column_width + position.col as f32 * (cell_width + gap),
        top: *row_tops.get(position.row)?,
        width: cell_width,
        height: *row_heights.get(position.row)?,
    })
}

/// Convert segments and their lanes into bar rectangles.
///
/// Bars are emitted row by row; within a row in start-column order, the same
/// order the lanes were assigned in.
pub fn position_bars(
    segments: &[Segment],
    lanes: &LaneLayout,
    row_tops: &[f32],
    cell_width: f32,
    index_column_width: f32,
    constants: &LayoutConstants,
) -> Vec<EventBar> {
    let gap = constants.gap;
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by_key(|&idx| (segments[idx].row, segments[idx].start_col));

    order
        .into_iter()
        .filter_map(|idx| {
            let segment = segments[idx];
            let lane = lanes.lanes.get(idx).copied().unwrap_or(0);
            let Some(&row_top) = row_tops.get(segment.row) else {
                log::trace!("No row top for segment {:?}", segment);
                return None;
            };
            let span = segment.span() as f32;
            Some(EventBar {
                segment,
                lane,
                rect: PixelRect {
                    left: index_column_width + segment.start_col as f32 * (cell_width + gap),
                    top: row_top + constants.label_offset + lane as f32 * constants.lane_height,
                    width: span * cell_width + (span - 1.0) * gap,
                    height: constants.lane_height - constants.bar_inset,
                },
            })
        })
        .collect()
}
