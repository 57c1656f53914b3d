use std::collections::BTreeMap;

use super::segments::Segment;

/// Lane index per segment (same order as the input) and lanes used per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneLayout {
    pub lanes: Vec<usize>,
    pub max_lanes_by_row: BTreeMap<usize, usize>,
}

impl LaneLayout {
    pub fn lanes_in_row(&self, row: usize) -> usize {
        self.max_lanes_by_row.get(&row).copied().unwrap_or(0)
    }
}

/// Pack one row's segments into the fewest non-overlapping lanes.
///
/// Segments are visited by start column (stable, so equal starts keep input
/// order) and each takes the lowest lane whose last segment ended at or
/// before its start. Returns the lane per input segment and the lane count.
pub fn pack_row(segments: &[Segment]) -> (Vec<usize>, usize) {
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by_key(|&idx| segments[idx].start_col);

    let mut lane_ends: Vec<usize> = Vec::new();
    let mut lanes = vec![0; segments.len()];

    for idx in order {
        let segment = &segments[idx];
        let lane = match lane_ends.iter().position(|&end| end <= segment.start_col) {
            Some(lane) => {
                lane_ends[lane] = segment.end_col;
                lane
            }
            None => {
                lane_ends.push(segment.end_col);
                lane_ends.len() - 1
            }
        };
        lanes[idx] = lane;
    }

    (lanes, lane_ends.len())
}

/// Run [`pack_row`] for every row present in `segments`.
pub fn assign_lanes(segments: &[Segment]) -> LaneLayout {
    let mut by_row: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, segment) in segments.iter().enumerate() {
        by_row.entry(segment.row).or_default().push(idx);
    }

    let mut layout = LaneLayout {
        lanes: vec![0; segments.len()],
        max_lanes_by_row: BTreeMap::new(),
    };

    for (row, indices) in by_row {
        let row_segments: Vec<Segment> = indices.iter().map(|&idx| segments[idx]).collect();
        let (lanes, max_lanes) = pack_row(&row_segments);
        for (&idx, lane) in indices.iter().zip(lanes) {
            layout.lanes[idx] = lane;
        }
        layout.max_lanes_by_row.insert(row, max_lanes);
    }

    layout
}
