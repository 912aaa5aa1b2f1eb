pub mod aggregate;
pub mod baseline;
pub mod mapper;
pub mod row;
pub mod scale;
pub mod types;

pub use aggregate::{SeriesSummary, Trend, aggregate, percent_change};
pub use baseline::{
    CompareMode, ComparisonContext, ISO_DATE_FORMAT, parse_base_date, resolve_previous,
    resolve_previous_str,
};
pub use mapper::{CoordinateMapper, PlottedPoint, project_points};
pub use row::{BreakdownKind, DataRow, FieldSelector, FieldValue, RowRecord};
pub use scale::{
    DELTA_NEGATIVE_TICKS, DELTA_POSITIVE_TICKS, DeltaScale, PRIMARY_TICK_COUNT, PrimaryScale,
    ScaleLayout, TickValues, resolve_step,
};
pub use types::Canvas;
