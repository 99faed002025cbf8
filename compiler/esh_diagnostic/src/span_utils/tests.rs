use super::*;

fn line_col(source: &str, offset: u32) -> (u32, u32) {
    LineOffsetTable::build(source).offset_to_line_col(source, offset)
}

#[test]
fn offset_to_line_col_basic() {
    let source = "abc\ndefgh\nij";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 2), (1, 3));
    assert_eq!(line_col(source, 4), (2, 1));
    assert_eq!(line_col(source, 7), (2, 4));
    assert_eq!(line_col(source, 10), (3, 1));
}

#[test]
fn offset_at_end_of_input() {
    assert_eq!(line_col("echo \"a", 7), (1, 8));
    assert_eq!(line_col("", 0), (1, 1));
}

#[test]
fn columns_count_characters() {
    let source = "αβγ\nδε";
    assert_eq!(line_col(source, 2), (1, 2));
    assert_eq!(line_col(source, 4), (1, 3));
    assert_eq!(line_col(source, 7), (2, 1));
    assert_eq!(line_col(source, 9), (2, 2));
}

#[test]
fn table_line_starts() {
    let table = LineOffsetTable::build("a\n\nb\n");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(2));
    assert_eq!(table.line_start_offset(3), Some(3));
    assert_eq!(table.line_start_offset(4), Some(5));
    assert_eq!(table.line_start_offset(5), None);
}

#[test]
fn newline_belongs_to_its_line() {
    let table = LineOffsetTable::build("ab\ncd");
    assert_eq!(table.line_from_offset(2), 1);
    assert_eq!(table.line_from_offset(3), 2);
}
