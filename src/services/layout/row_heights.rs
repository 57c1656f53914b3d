use super::lanes::LaneLayout;
use crate::models::settings::LayoutConstants;

/// Height a row needs to show `max_lanes` stacked bars without clipping.
/// Rows without events keep the base cell height.
pub fn row_height(base_cell_height: f32, max_lanes: usize, constants: &LayoutConstants) -> f32 {
    if max_lanes == 0 {
        return base_cell_height;
    }
    let required =
        constants.label_offset + max_lanes as f32 * constants.lane_height + constants.row_padding;
    base_cell_height.max(required)
}

/// Heights for rows `0..row_count`.
pub fn row_heights(
    row_count: usize,
    base_cell_height: u32,
    lanes: &LaneLayout,
    constants: &LayoutConstants,
) -> Vec<f32> {
    (0..row_count)
        .map(|row| row_height(base_cell_height as f32, lanes.lanes_in_row(row), constants))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_rows_without_lanes_use_base_height() {
        let constants = LayoutConstants::default();
        assert_eq!(row_height(49.0, 0, &constants), 49.0);
    }

    #[test]
    fn test_tall_base_cell_absorbs_lanes() {
        let constants = LayoutConstants::default();
        // 16 + 2*16 + 2 = 50
        assert_eq!(row_height(50.0, 2, &constants), 50.0);
        assert_eq!(row_height(40.0, 2, &constants), 50.0);
    }

    #[test]
    fn test_more_lanes_never_shrink_the_row() {
        let constants = LayoutConstants::default();
        let heights: Vec<f32> = (0..6).map(|lanes| row_height(20.0, lanes, &constants)).collect();
        assert!(heights.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(row_height(20.0, 3, &constants) > row_height(20.0, 1, &constants));
    }

    #[test]
    fn test_row_heights_cover_every_row() {
        let constants = LayoutConstants::default();
        let lanes = LaneLayout {
            lanes: vec![0, 1, 2],
            max_lanes_by_row: BTreeMap::from([(1, 3)]),
        };
        assert_eq!(row_heights(3, 40, &lanes, &constants), vec![40.0, 66.0, 40.0]);
    }
}
