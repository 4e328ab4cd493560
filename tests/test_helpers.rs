#![allow(dead_code)]

use dxfio::Drawing;

pub fn unwrap_drawing(result: dxfio::DxfResult<Drawing>) -> Drawing {
    match result {
        Ok(drawing) => drawing,
        Err(e) => panic!("unable to load drawing: {}", e),
    }
}

pub fn parse_drawing(s: &str) -> Drawing {
    unwrap_drawing(Drawing::parse(s))
}

pub fn from_section(section: &str, body: &str) -> Drawing {
    let text = format!(
        "0\r\nSECTION\r\n2\r\n{}\r\n{}\r\n0\r\nENDSEC\r\n0\r\nEOF",
        section,
        body.trim()
    );
    parse_drawing(&text)
}

pub fn to_test_string(drawing: &Drawing) -> String {
    let mut buf = Vec::new();
    drawing.save(&mut buf).unwrap();
    let contents = String::from_utf8(buf).unwrap();
    println!("{}", contents); // only displayed when the test fails
    contents
}

pub fn assert_contains(drawing: &Drawing, contents: &str) {
    let actual = to_test_string(drawing);
    assert!(actual.contains(contents), "missing:\n{}", contents);
}

pub fn assert_not_contains(drawing: &Drawing, contents: &str) {
    let actual = to_test_string(drawing);
    assert!(
        !actual.contains(contents),
        "unexpectedly present:\n{}",
        contents
    );
}
