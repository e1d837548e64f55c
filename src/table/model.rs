use serde::{Deserialize, Serialize};

use crate::render::escape_markup;

/// How a column's cells compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    #[default]
    String,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Unsorted,
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Next state after a click on the same header.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Unsorted | Self::Descending => Self::Ascending,
            Self::Ascending => Self::Descending,
        }
    }

    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Unsorted => None,
            Self::Ascending => Some("sort-asc"),
            Self::Descending => Some("sort-desc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub text: String,
    /// Headers without a key are not clickable.
    #[serde(default)]
    pub sort_key: Option<String>,
    #[serde(default)]
    pub sort_type: SortType,
    #[serde(default)]
    pub order: SortOrder,
}

impl HeaderCell {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sortable(text: impl Into<String>, key: impl Into<String>, sort_type: SortType) -> Self {
        Self {
            text: text.into(),
            sort_key: Some(key.into()),
            sort_type,
            order: SortOrder::Unsorted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    /// Machine-readable numeric attribute, preferred over `text` for numbers.
    #[serde(default)]
    pub value: Option<String>,
}

impl Cell {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    #[must_use]
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Shorthand for rows of plain text cells.
    #[must_use]
    pub fn from_texts<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(texts.into_iter().map(Cell::new).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    #[serde(default)]
    pub sortable: bool,
    pub headers: Vec<HeaderCell>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new(id: impl Into<String>, headers: Vec<HeaderCell>, rows: Vec<Row>) -> Self {
        Self {
            id: id.into(),
            sortable: true,
            headers,
            rows,
        }
    }

    #[must_use]
    pub fn column_index(&self, sort_key: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.sort_key.as_deref() == Some(sort_key))
    }

    /// Trimmed text of one column, in row order.
    #[must_use]
    pub fn column_texts(&self, column: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.cells.get(column).map_or("", |cell| cell.text.trim()))
            .collect()
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<table id=\"{}\" class=\"data-table\"{}><thead><tr>",
            escape_markup(&self.id),
            if self.sortable { " data-sortable=\"true\"" } else { "" }
        );
        for header in &self.headers {
            html.push_str("<th");
            if let Some(key) = &header.sort_key {
                html.push_str(&format!(" data-sort-key=\"{}\"", escape_markup(key)));
                if header.sort_type == SortType::Number {
                    html.push_str(" data-sort-type=\"number\"");
                }
            }
            if let Some(class) = header.order.css_class() {
                html.push_str(&format!(" class=\"{class}\""));
            }
            html.push('>');
            html.push_str(&escape_markup(&header.text));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in &row.cells {
                match &cell.value {
                    Some(value) => html.push_str(&format!("<td data-value=\"{}\">", escape_markup(value))),
                    None => html.push_str("<td>"),
                }
                html.push_str(&escape_markup(&cell.text));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        html
    }
}
