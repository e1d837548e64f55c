//! dashboard-charts: guardrailed dashboard charts and sortable tables.
//!
//! Every chart is rendered in two phases. A pure `build_*` function validates
//! the caller's data and returns either a "no data" placeholder or a
//! [`render::RenderFrame`] of draw commands with hover targets. The matching
//! `render_*` entry point then mounts that output into an [`api::Document`].
//! Missing data never panics and never errors out to the caller; it becomes a
//! visible placeholder, and a missing mount point is a no-op.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod table;
pub mod telemetry;

pub use api::{
    BarConfig, ChartOutput, ChartScene, Document, GaugeConfig, LineConfig, PieConfig,
    render_bar, render_gauge, render_line, render_pie,
};
pub use error::{ChartError, ChartResult};
pub use table::{TableSortController, sort_table};
