//! Projection engine for recurring investments

mod engine;
mod records;
mod state;

pub use engine::{project, try_project};
pub use records::{chart_points, ChartPoint, YearRecord};
pub use state::ProjectionState;
