mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
pub mod label_format;
mod render_frame_builder;
mod render_style;

pub use engine::{ChartState, ComparisonChart};
pub use engine_config::ChartConfig;
pub use json_contract::{RENDER_DESCRIPTION_JSON_SCHEMA_V1, RenderDescriptionJsonContractV1};
pub use render_frame_builder::{build_headline_summary, render_chart};
pub use render_style::ChartStyle;
