//! Roster grid library
//!
//! The row pipeline (search, sort, category filter), the selection tracker,
//! and the grid controller behind the roster terminal UI, plus the HTTP row
//! source that feeds them.

pub mod app;
pub mod error;
pub mod grid;
pub mod model;
pub mod pipeline;
pub mod selection;
pub mod source;

pub use app::{LoadState, RosterApp};
pub use error::FetchError;
pub use grid::{GridController, GridMsg, GridState, GridView};
pub use model::{Entity, Health, HealthCategory, SelectedEntity};
