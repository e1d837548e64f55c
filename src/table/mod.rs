//! Sortable data tables.

mod model;
mod sort;

pub use model::{Cell, HeaderCell, Row, SortOrder, SortType, Table};
pub use sort::{SortBinding, TableSortController, sort_table};
