use dashboard_charts::api::Document;
use dashboard_charts::table::{
    Cell, HeaderCell, Row, SortOrder, SortType, Table, TableSortController, sort_table,
};

fn hits_table() -> Table {
    Table::new(
        "hosts",
        vec![
            HeaderCell::sortable("Host", "host", SortType::String),
            HeaderCell::sortable("Hits", "hits", SortType::Number),
            HeaderCell::new("Notes"),
        ],
        vec![
            Row::from_texts(["alpha", "10", ""]),
            Row::from_texts(["bravo", "N/A", ""]),
            Row::from_texts(["charlie", "3", ""]),
            Row::from_texts(["delta", "7", ""]),
        ],
    )
}

fn column(table: &Table, index: usize) -> Vec<String> {
    table
        .column_texts(index)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[test]
fn numeric_sort_keeps_unavailable_last() {
    let mut table = hits_table();

    assert_eq!(sort_table(&mut table, "hits", SortType::Number), Some(SortOrder::Ascending));
    assert_eq!(column(&table, 1), ["3", "7", "10", "N/A"]);

    assert_eq!(sort_table(&mut table, "hits", SortType::Number), Some(SortOrder::Descending));
    assert_eq!(column(&table, 1), ["10", "7", "3", "N/A"]);

    assert_eq!(sort_table(&mut table, "hits", SortType::Number), Some(SortOrder::Ascending));
    assert_eq!(column(&table, 1), ["3", "7", "10", "N/A"]);
}

#[test]
fn clicking_another_header_resets_the_first() {
    let mut table = hits_table();
    sort_table(&mut table, "hits", SortType::Number);
    sort_table(&mut table, "hits", SortType::Number);
    assert_eq!(table.headers[1].order, SortOrder::Descending);

    assert_eq!(sort_table(&mut table, "host", SortType::String), Some(SortOrder::Ascending));
    assert_eq!(table.headers[1].order, SortOrder::Unsorted);
    assert_eq!(column(&table, 0), ["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn string_sort_is_lexicographic() {
    let mut table = Table::new(
        "t",
        vec![HeaderCell::sortable("Name", "name", SortType::String)],
        vec![
            Row::from_texts(["b"]),
            Row::from_texts(["B"]),
            Row::from_texts(["a"]),
            Row::from_texts(["10"]),
            Row::from_texts(["9"]),
        ],
    );
    sort_table(&mut table, "name", SortType::String);
    assert_eq!(column(&table, 0), ["10", "9", "B", "a", "b"]);
}

#[test]
fn value_attribute_beats_display_text() {
    let mut table = Table::new(
        "disks",
        vec![HeaderCell::sortable("Size", "size", SortType::Number)],
        vec![
            Row::new(vec![Cell::new("1.0 MB").with_value("1048576")]),
            Row::new(vec![Cell::new("900.0 KB").with_value("921600")]),
            Row::new(vec![Cell::new("2.0 KB").with_value("2048")]),
        ],
    );
    sort_table(&mut table, "size", SortType::Number);
    assert_eq!(column(&table, 0), ["2.0 KB", "900.0 KB", "1.0 MB"]);
}

#[test]
fn unparseable_numbers_sort_as_zero_and_stay_stable() {
    let mut table = Table::new(
        "t",
        vec![
            HeaderCell::sortable("Id", "id", SortType::String),
            HeaderCell::sortable("Load", "load", SortType::Number),
        ],
        vec![
            Row::from_texts(["first", "-"]),
            Row::from_texts(["second", "5%"]),
            Row::from_texts(["third", "unknown"]),
            Row::from_texts(["fourth", "-2"]),
        ],
    );
    sort_table(&mut table, "load", SortType::Number);
    assert_eq!(column(&table, 0), ["fourth", "first", "third", "second"]);
}

#[test]
fn unknown_key_leaves_table_untouched() {
    let mut table = hits_table();
    let before = table.clone();
    assert_eq!(sort_table(&mut table, "missing", SortType::Number), None);
    assert_eq!(table, before);
}

#[test]
fn header_markup_reflects_order() {
    let mut table = hits_table();
    sort_table(&mut table, "hits", SortType::Number);
    let html = table.to_html();
    assert!(html.contains("<th data-sort-key=\"hits\" data-sort-type=\"number\" class=\"sort-asc\">Hits</th>"));
    assert!(html.contains("<th data-sort-key=\"host\">Host</th>"));
    assert!(html.contains("<th>Notes</th>"));
}

#[test]
fn controller_binds_only_sortable_tables() {
    let mut plain = hits_table();
    plain.id = "plain".to_owned();
    plain.sortable = false;

    let mut document = Document::new();
    document.add_table(hits_table()).add_table(plain);

    let controller = TableSortController::init(&document);
    assert_eq!(controller.bindings().len(), 2);
    assert!(controller.bindings().iter().all(|binding| binding.table_id == "hosts"));

    assert_eq!(
        controller.handle_click(&mut document, "hosts", "hits"),
        Some(SortOrder::Ascending)
    );
    assert_eq!(
        document.table("hosts").expect("table").column_texts(1),
        ["3", "7", "10", "N/A"]
    );

    assert_eq!(controller.handle_click(&mut document, "plain", "hits"), None);
    assert_eq!(
        document.table("plain").expect("table").column_texts(1),
        ["10", "N/A", "3", "7"]
    );
    assert_eq!(controller.handle_click(&mut document, "hosts", "Notes"), None);
}
