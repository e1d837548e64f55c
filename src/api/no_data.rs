use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Document, MountContent};
use crate::render::escape_markup;

pub const DEFAULT_NO_DATA_MESSAGE: &str = "No data available";

/// Fixed-structure "unavailable" notice shown in place of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoDataNotice {
    pub message: String,
}

impl NoDataNotice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"chart-unavailable\"><span class=\"icon\">📊</span><p>{}</p></div>",
            escape_markup(&self.message)
        )
    }
}

impl Default for NoDataNotice {
    fn default() -> Self {
        Self::new(DEFAULT_NO_DATA_MESSAGE)
    }
}

/// Replaces the content of mount point `id` with a no-data notice.
///
/// A missing mount point is a no-op.
pub fn show_no_data(document: &mut Document, id: &str, message: Option<&str>) {
    let notice = message.map_or_else(NoDataNotice::default, NoDataNotice::new);
    if document.set_content(id, MountContent::Notice(notice.clone())) {
        debug!(id, message = %notice.message, "show no-data placeholder");
    } else {
        trace!(id, "no-data target not mounted");
    }
}
