//! compare-chart: dual-axis comparison chart engine.
//!
//! Turns an ordered, pre-aggregated category dataset into bar + line
//! geometry with "nice" axis gradations, hover tooltips and a
//! day-over-day / week-over-week baseline. Drawing is left to the host via
//! the [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartState, ComparisonChart};
pub use error::{ChartError, ChartResult};
