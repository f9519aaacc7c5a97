//! The grid: columns, immutable state, the controller that owns it, and the
//! derived view handed to renderers.

mod column;
mod controller;
mod state;
mod view;

pub use column::{CellValue, Column, NumericField, TextField};
pub use controller::{GridController, SelectionObserver};
pub use state::{GridMsg, GridState};
pub use view::{GridRow, GridView};
