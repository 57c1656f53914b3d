use std::sync::Arc;

use super::{compute_layout, CellSize, LayoutInput, RenderModel, Viewport};
use crate::models::event::AllDayEvent;
use crate::models::settings::LayoutConstants;
use crate::models::view_mode::ViewMode;

#[derive(Debug, Clone, PartialEq)]
struct LayoutKey {
    year: i32,
    view: ViewMode,
    viewport: Viewport,
    measured_cell: Option<CellSize>,
    constants: LayoutConstants,
    events: Vec<AllDayEvent>,
}

impl LayoutKey {
    fn matches(&self, input: &LayoutInput<'_>) -> bool {
        self.year == input.year
            && self.view == input.view
            && self.viewport == input.viewport
            && self.measured_cell == input.measured_cell
            && self.constants == *input.constants
            && self.events.as_slice() == input.events
    }

    fn from_input(input: &LayoutInput<'_>) -> Self {
        Self {
            year: input.year,
            view: input.view,
            viewport: input.viewport,
            measured_cell: input.measured_cell,
            constants: *input.constants,
            events: input.events.to_vec(),
        }
    }
}

/// Remembers the last layout and its exact inputs. Any difference in the
/// input tuple triggers a full recompute.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(LayoutKey, Arc<RenderModel>)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, input: &LayoutInput<'_>) -> Arc<RenderModel> {
        if let Some((key, model)) = &self.entry {
            if key.matches(input) {
                self.hits += 1;
                return Arc::clone(model);
            }
        }

        self.misses += 1;
        log::trace!("Layout cache miss for {} {}", input.year, input.view);
        let model = Arc::new(compute_layout(input));
        self.entry = Some((LayoutKey::from_input(input), Arc::clone(&model)));
        model
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
