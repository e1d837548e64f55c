use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use super::{Cell, SortOrder, SortType, Table};
use crate::api::Document;
use crate::core::UNAVAILABLE;

/// Comparable form of one cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(OrderedFloat<f64>),
    Text(String),
    /// Sorts after every real value in both directions.
    Unavailable,
}

fn sort_key(cell: Option<&Cell>, sort_type: SortType) -> SortKey {
    let text = cell.map_or("", |cell| cell.text.trim());
    if text == UNAVAILABLE {
        return SortKey::Unavailable;
    }
    match sort_type {
        SortType::String => SortKey::Text(text.to_owned()),
        SortType::Number => {
            let attribute = cell
                .and_then(|cell| cell.value.as_deref())
                .filter(|value| !value.is_empty());
            let parsed = match attribute {
                Some(value) => parse_float_prefix(value),
                None => parse_float_prefix(&strip_non_numeric(text)),
            };
            SortKey::Number(OrderedFloat(parsed.filter(|value| !value.is_nan()).unwrap_or(0.0)))
        }
    }
}

fn strip_non_numeric(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect()
}

/// Longest leading decimal number in `text`, ignoring leading whitespace.
fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let len = float_prefix_len(text.as_bytes());
    (len > 0).then(|| text[..len].parse::<f64>().ok()).flatten()
}

/// Byte length of the longest `[+-]?digits[.digits][(e|E)[+-]?digits]`
/// prefix with at least one mantissa digit, or 0.
fn float_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = digits_from(end);
    end += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = digits_from(end + 1 + sign);
        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }
    end
}

fn compare(a: &SortKey, b: &SortKey, order: SortOrder) -> Ordering {
    match (a, b) {
        (SortKey::Unavailable, SortKey::Unavailable) => Ordering::Equal,
        (SortKey::Unavailable, _) => Ordering::Greater,
        (_, SortKey::Unavailable) => Ordering::Less,
        _ if order == SortOrder::Descending => b.cmp(a),
        _ => a.cmp(b),
    }
}

/// Sorts `table` by the column whose header carries `sort_key`.
///
/// Clicking advances that header through `unsorted -> asc -> desc -> asc`
/// and resets every other header. Rows are reordered in place with a stable
/// sort; `N/A` cells stay last either way. Returns the new order, or `None`
/// when no header has the key.
pub fn sort_table(table: &mut Table, sort_key_name: &str, sort_type: SortType) -> Option<SortOrder> {
    let column = table.column_index(sort_key_name)?;
    let order = table.headers[column].order.toggled();
    for header in &mut table.headers {
        header.order = SortOrder::Unsorted;
    }
    table.headers[column].order = order;

    let mut keyed: Vec<(SortKey, _)> = std::mem::take(&mut table.rows)
        .into_iter()
        .map(|row| (sort_key(row.cells.get(column), sort_type), row))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, order));
    table.rows = keyed.into_iter().map(|(_, row)| row).collect();

    debug!(
        table = %table.id,
        key = sort_key_name,
        ?order,
        rows = table.rows.len(),
        "sorted table"
    );
    Some(order)
}

/// One clickable header found during [`TableSortController::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBinding {
    pub table_id: String,
    pub sort_key: String,
    pub sort_type: SortType,
}

/// Click dispatch for every sortable table in a document.
#[derive(Debug, Clone, Default)]
pub struct TableSortController {
    bindings: Vec<SortBinding>,
}

impl TableSortController {
    /// Binds each keyed header of each table marked sortable.
    #[must_use]
    pub fn init(document: &Document) -> Self {
        let bindings: Vec<SortBinding> = document
            .tables()
            .filter(|table| table.sortable)
            .flat_map(|table| {
                table.headers.iter().filter_map(|header| {
                    Some(SortBinding {
                        table_id: table.id.clone(),
                        sort_key: header.sort_key.clone()?,
                        sort_type: header.sort_type,
                    })
                })
            })
            .collect();
        debug!(bindings = bindings.len(), "table sort controller ready");
        Self { bindings }
    }

    #[must_use]
    pub fn bindings(&self) -> &[SortBinding] {
        &self.bindings
    }

    /// Handles a click on the header `sort_key` of table `table_id`.
    pub fn handle_click(&self, document: &mut Document, table_id: &str, sort_key: &str) -> Option<SortOrder> {
        let Some(binding) = self
            .bindings
            .iter()
            .find(|binding| binding.table_id == table_id && binding.sort_key == sort_key)
        else {
            trace!(table = table_id, key = sort_key, "click on unbound header");
            return None;
        };
        let table = document.table_mut(table_id)?;
        sort_table(table, &binding.sort_key, binding.sort_type)
    }
}
