//! Roster data model.

mod entity;
mod health;
mod lenient;

pub use entity::{Entity, SelectedEntity};
pub use health::{Health, HealthCategory, HealthColor};
