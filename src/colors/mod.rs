pub mod scale;

pub use scale::{HslColor, luck_cell_color, record_cell_color};
