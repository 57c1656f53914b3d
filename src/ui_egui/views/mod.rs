mod palette;
pub mod popover;
pub mod year_grid;

pub use popover::{EventPopover, PopoverAction, PopoverPlacement};
pub use year_grid::{YearGridAction, YearGridView};
