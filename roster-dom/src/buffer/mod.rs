mod cell;
mod screen;

pub use cell::Cell;
pub use screen::Buffer;
