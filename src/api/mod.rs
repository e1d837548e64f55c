mod axis_builder;
mod bar_chart;
mod chart_config;
mod chart_output;
mod document;
mod gauge_chart;
mod line_chart;
mod no_data;
mod pie_chart;

pub use bar_chart::{
    BAR_ALL_FILTERED_MESSAGE, BAR_GROW_DURATION_MS, BAR_NO_DATA_MESSAGE, BAR_PADDING,
    HORIZONTAL_BAR_MARGIN, VERTICAL_BAR_MARGIN, build_bar, render_bar, render_bar_json,
};
pub use chart_config::{BarConfig, GaugeConfig, LineConfig, PieConfig};
pub use chart_output::{ChartOutput, ChartScene, LegendEntry};
pub use document::{Document, MountContent, MountPoint, MountedChart, legend_id, tooltip_id};
pub use gauge_chart::{
    GAUGE_INVALID_RANGE_MESSAGE, GAUGE_RADIUS, GAUGE_SWEEP_DURATION_MS, GAUGE_THICKNESS,
    GAUGE_UNAVAILABLE_MESSAGE, GAUGE_VIEWPORT, build_gauge, gauge_arc, render_gauge,
};
pub use line_chart::{
    AREA_FILL_OPACITY, LINE_ALL_FILTERED_MESSAGE, LINE_INVALID_DATES_MESSAGE, LINE_MARGIN,
    LINE_NO_DATA_MESSAGE, LINE_WIPE_DURATION_MS, build_line, render_line, render_line_json,
    single_point_message,
};
pub use no_data::{DEFAULT_NO_DATA_MESSAGE, NoDataNotice, show_no_data};
pub use pie_chart::{
    MAX_LABELLED_SLICES, MIN_LABEL_PERCENT, PIE_ALL_FILTERED_MESSAGE, PIE_NO_DATA_MESSAGE,
    build_pie, render_pie, render_pie_json,
};
