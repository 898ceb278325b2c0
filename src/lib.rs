//! Teacher and student academic dashboard.
//!
//! Dashboard state changes only through [`state::reduce`]; markup is rebuilt
//! from the state by the [`render`] module after every action.

pub mod charts;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod progress;
pub mod render;
pub mod script;
pub mod seed;
pub mod session;
pub mod state;
pub mod student_views;
pub mod teacher_views;

pub use config::DashboardConfig;
pub use error::DashboardError;
pub use session::{Frame, Session};
pub use state::{reduce, Action, DashboardState, Notice, Transition};
