mod color;
mod edges;
mod enums;
mod style;
mod theme;

pub use color::{Color, ColorOp, Rgb};
pub use edges::Edges;
pub use enums::{Border, Direction, Size};
pub use style::{Style, TextStyle};
pub use theme::Theme;
