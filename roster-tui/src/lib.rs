//! Terminal front end for the roster grid.
//!
//! [`Ui`] wraps a [`RosterApp`](roster_lib::RosterApp) with focus handling
//! and key/click dispatch; [`view`] turns that state into a `roster-dom`
//! element tree every frame; [`run`] owns the terminal and the fetch task.

pub mod action;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod view;
pub mod widgets;

pub use action::Action;
pub use app::{Ui, run};
pub use config::{Args, Config, LogLevel};
pub use error::AppError;
