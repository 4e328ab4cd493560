use crate::enums::AcadVersion;
use crate::helpers::tests::*;
use crate::{CodePair, Drawing};

#[test]
fn read_lf_and_crlf() {
    let code_pairs = [
        "0", "SECTION", "2", "HEADER", "9", "$ACADVER", "1", "AC1027", "0", "ENDSEC", "0", "EOF",
    ];

    let lf_file = parse_drawing(&code_pairs.join("\n"));
    assert_eq!(AcadVersion::R2013, lf_file.header.version);

    let crlf_file = parse_drawing(&code_pairs.join("\r\n"));
    assert_eq!(AcadVersion::R2013, crlf_file.header.version);
}

#[test]
fn written_lines_end_with_crlf() {
    let drawing = Drawing::new();
    let contents = to_test_string(&drawing);
    assert!(contents.contains("\r\n"));
    assert!(!contents.replace("\r\n", "").contains('\n'));
}

#[test]
fn read_file_with_comments() {
    let drawing = parse_drawing(
        &[
            "999", "comment", "0", "SECTION", "999", "", // empty comment
            "2", "ENTITIES", "0", "LINE", "999", "comment", "10", "1.1", "999", "comment", "0",
            "ENDSEC", "0", "EOF", "999", "comment",
        ]
        .join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        crate::entities::EntityType::Line(ref line) => {
            assert!((line.p1.x - 1.1).abs() < 1e-10);
        }
        _ => panic!("expected a line"),
    }
}

#[test]
fn comments_are_not_written() {
    let drawing = Drawing::new();
    let contents = to_test_string(&drawing);
    assert!(!contents.contains("\r\n999\r\n"));
}

#[test]
fn parse_with_leading_bom() {
    let mut buf = vec![0xEFu8, 0xBB, 0xBF]; // UTF-8 BOM
    buf.extend("0\r\nEOF\r\n".as_bytes());
    let _drawing = unwrap_drawing(Drawing::load(&mut buf.as_slice()));
}

#[test]
fn read_compact_tab_framed_file() {
    let drawing = parse_drawing(
        "0\tSECTION\n2\tENTITIES\n0\tLINE\n10\t1.5\n20\t2.5\n0\tENDSEC\n0\tEOF\n",
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        crate::entities::EntityType::Line(ref line) => {
            assert!((line.p1.x - 1.5).abs() < 1e-10);
            assert!((line.p1.y - 2.5).abs() < 1e-10);
        }
        _ => panic!("expected a line"),
    }
}

#[test]
fn read_string_with_control_characters() {
    let drawing = parse_drawing(
        &[
            "0",
            "SECTION",
            "2",
            "HEADER",
            "9",
            "$LASTSAVEDBY",
            "1",
            "a^G^ ^^ b",
            "0",
            "ENDSEC",
            "0",
            "EOF",
        ]
        .join("\n"),
    );
    assert_eq!("a\u{7}^\u{1E} b", drawing.header.last_saved_by);
}

#[test]
fn write_string_with_control_characters() {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2004;
    drawing.header.last_saved_by = String::from("a\u{7}^\u{1E} b");
    assert_contains(&drawing, String::from("a^G^ ^^ b"));
}

#[test]
fn unicode_is_escaped_when_writing_pre_r2007() {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2004;
    drawing.header.last_saved_by = String::from("Repère");
    assert_contains(&drawing, String::from("Rep\\U+00E8re"));
}

#[test]
fn unicode_is_not_escaped_when_writing_r2007() {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2007;
    drawing.header.last_saved_by = String::from("Repère");
    assert_contains(&drawing, String::from("Repère"));
}

#[test]
fn unicode_escapes_are_read_from_older_files() {
    let drawing = parse_drawing(
        &[
            "0",
            "SECTION",
            "2",
            "HEADER",
            "9",
            "$ACADVER",
            "1",
            "AC1018",
            "9",
            "$LASTSAVEDBY",
            "1",
            "Rep\\U+00E8re",
            "0",
            "ENDSEC",
            "0",
            "EOF",
        ]
        .join("\n"),
    );
    assert_eq!("Repère", drawing.header.last_saved_by);
}

#[test]
fn version_newer_than_r2013_is_read_as_r2013() {
    let drawing = drawing_from_pairs(vec![
        CodePair::new_str(0, "SECTION"),
        CodePair::new_str(2, "HEADER"),
        CodePair::new_str(9, "$ACADVER"),
        CodePair::new_str(1, "AC1032"),
        CodePair::new_str(0, "ENDSEC"),
        CodePair::new_str(0, "EOF"),
    ]);
    assert_eq!(AcadVersion::R2013, drawing.header.version);
}

#[test]
fn unknown_version_is_an_error() {
    let result = Drawing::parse(
        &[
            "0", "SECTION", "2", "HEADER", "9", "$ACADVER", "1", "XX9999", "0", "ENDSEC", "0",
            "EOF",
        ]
        .join("\n"),
    );
    assert!(result.is_err());
}
