use super::partition::Partition;
use super::positions::PositionMap;
use crate::models::event::AllDayEvent;

/// One row's share of an event: columns `[start_col, end_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
    /// Index of the owning event in the input slice
    pub event: usize,
}

impl Segment {
    pub fn span(&self) -> usize {
        self.end_col - self.start_col
    }

    pub fn overlaps(&self, other: &Segment) -> bool {
        self.row == other.row && self.start_col < other.end_col && other.start_col < self.end_col
    }
}

/// Split every event into per-row column spans.
///
/// Events whose first or last day is not in the rendered year produce no
/// segments. Output order is event order, then row order, which is what
/// the lane packer's tie-break relies on.
pub fn build_segments(
    events: &[AllDayEvent],
    positions: &PositionMap,
    partition: &Partition,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(events.len());

    for (event_idx, event) in events.iter().enumerate() {
        let Some(start) = positions.get(event.start_date) else {
            log::trace!("Skipping event {}: start {} not in grid", event.id, event.start_date);
            continue;
        };
        // end_date is exclusive
        let Some(end) = event
            .inclusive_end()
            .filter(|end| *end >= event.start_date)
            .and_then(|end| positions.get(end))
        else {
            log::trace!("Skipping event {}: end {} not in grid", event.id, event.end_date);
            continue;
        };

        for row in start.row..=end.row {
            let start_col = if row == start.row { start.col } else { 0 };
            let last_col = if row == end.row {
                Some(end.col)
            } else {
                partition.last_column(row)
            };
            let Some(last_col) = last_col.filter(|last| *last >= start_col) else {
                continue;
            };
            segments.push(Segment {
                row,
                start_col,
                end_col: last_col + 1,
                event: event_idx,
            });
        }
    }

    segments
}
