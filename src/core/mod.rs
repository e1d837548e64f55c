pub mod area_series;
pub mod band_scale;
pub mod bar_series;
pub mod date;
pub mod format;
pub mod gauge;
pub mod line_series;
pub mod pie_series;
pub mod scale;
pub mod sizing;
pub mod ticks;
pub mod time_scale;
pub mod types;

pub use area_series::monotone_area_path;
pub use band_scale::BandScale;
pub use bar_series::{BarGeometry, BarOrientation, project_bars};
pub use date::{DEFAULT_DATE_FORMAT, DateInput, datetime_to_unix_millis, parse_date};
pub use format::{Metric, UNAVAILABLE, format_bytes, format_number, format_percent};
pub use gauge::{
    GaugeThreshold, clamp_gauge_value, default_thresholds, gauge_angle, interpolate_angle,
    threshold_color,
};
pub use line_series::{ProjectedPoint, TrendPoint, monotone_line_path, project_trend};
pub use pie_series::{PieLayout, PieSlice, project_pie};
pub use scale::{LinearScale, headroom_domain};
pub use sizing::responsive_size;
pub use time_scale::{TimeScale, format_time};
pub use types::{
    CategoryDatum, LayoutBox, Margin, TimeSeriesDatum, Viewport, category_data_from_json,
    time_series_from_json,
};
