use dxfio::enums::AcadVersion;
use dxfio::{Drawing, DxfError, Point};

mod test_helpers;
use test_helpers::*;

#[test]
fn totally_empty_file() {
    let _drawing = parse_drawing("");
}

#[test]
fn empty_file_trailing_newline() {
    let _drawing = parse_drawing("0\nEOF\n");
}

#[test]
fn empty_file_no_trailing_newline() {
    let _drawing = parse_drawing("0\nEOF");
}

#[test]
fn unsupported_section_is_skipped() {
    let _drawing = from_section(
        "UNSUPPORTED_SECTION",
        &["1", "garbage value 1", "1", "garbage value 2"].join("\r\n"),
    );
}

#[test]
fn read_header_variables() {
    let drawing = from_section(
        "HEADER",
        &[
            "9", "$ACADVER", "1", "AC1015", "9", "$INSBASE", "10", "1.1", "20", "2.2", "30",
            "3.3",
        ]
        .join("\r\n"),
    );
    assert_eq!(AcadVersion::R2000, drawing.header.version);
    assert_eq!(Point::new(1.1, 2.2, 3.3), drawing.header.insertion_base);
}

#[test]
fn read_layer_table() {
    let drawing = from_section(
        "TABLES",
        &[
            "0",
            "TABLE",
            "2",
            "LAYER",
            "0",
            "LAYER",
            "2",
            "some-layer",
            "62",
            "3",
            "0",
            "ENDTAB",
        ]
        .join("\r\n"),
    );
    let layer = drawing.layers().find(|l| l.name == "some-layer").unwrap();
    assert_eq!(Some(3), layer.color.index());
}

#[test]
fn malformed_code_line_is_a_bad_pair() {
    let result = Drawing::parse("not-a-code\nSECTION\n");
    match result {
        Err(DxfError::BadPair(offset)) => assert_eq!(1, offset),
        other => panic!("expected a bad pair error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn eof_mid_pair_is_unexpected_end_of_input() {
    let result = Drawing::parse("0\nSECTION\n2");
    assert!(matches!(result, Err(DxfError::UnexpectedEndOfInput)));
}

#[test]
fn out_of_range_code_is_rejected() {
    let result = Drawing::parse("5555\nvalue\n");
    assert!(matches!(result, Err(DxfError::UnexpectedCode(5555, _))));
}

#[test]
fn enum_out_of_bounds_reads_as_default() {
    let drawing = from_section(
        "HEADER",
        &["9", "$LUNITS", "70", "42"].join("\r\n"),
    );
    assert_eq!(
        dxfio::enums::UnitFormat::Decimal,
        drawing.header.unit_format
    );
}

#[test]
fn handles_longer_than_sixteen_digits_are_rejected() {
    let result = Drawing::parse(
        &[
            "0",
            "SECTION",
            "2",
            "ENTITIES",
            "0",
            "LINE",
            "5",
            "11112222333344445",
            "0",
            "ENDSEC",
            "0",
            "EOF",
        ]
        .join("\n"),
    );
    assert!(matches!(result, Err(DxfError::BadPair(_))));
}

#[test]
fn unknown_table_record_kinds_are_skipped() {
    let drawing = from_section(
        "TABLES",
        &[
            "0",
            "TABLE",
            "2",
            "LAYER",
            "0",
            "NOT_A_LAYER",
            "2",
            "unexpected",
            "0",
            "LAYER",
            "2",
            "real-layer",
            "0",
            "ENDTAB",
        ]
        .join("\r\n"),
    );
    assert!(drawing.layers().any(|l| l.name == "real-layer"));
    assert!(!drawing.layers().any(|l| l.name == "unexpected"));
}
