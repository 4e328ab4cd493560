use dxfio::entities::*;
use dxfio::enums::AcadVersion;
use dxfio::Drawing;

mod test_helpers;
use test_helpers::*;

fn save_as_string(drawing: &Drawing, version: AcadVersion) -> String {
    let mut buf = Vec::new();
    drawing.save_as(&mut buf, version).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn written_file_declares_its_version() {
    let drawing = Drawing::new();
    let contents = save_as_string(&drawing, AcadVersion::R2000);
    assert!(contents.contains("$ACADVER\r\n  1\r\nAC1015"));
    let contents = save_as_string(&drawing, AcadVersion::R12);
    assert!(contents.contains("$ACADVER\r\n  1\r\nAC1009"));
}

#[test]
fn written_file_begins_with_a_section_and_ends_with_eof() {
    let drawing = Drawing::new();
    let contents = to_test_string(&drawing);
    assert!(contents.starts_with("  0\r\nSECTION\r\n"));
    assert!(contents.ends_with("  0\r\nEOF\r\n"));
}

#[test]
fn save_as_does_not_mutate_the_drawing() {
    let drawing = Drawing::new();
    let _ = save_as_string(&drawing, AcadVersion::R12);
    assert_eq!(AcadVersion::R2013, drawing.header.version);
}

#[test]
fn every_block_has_a_matching_endblk() {
    let mut drawing = Drawing::new();
    for name in ["b1", "b2"] {
        let mut block = dxfio::Block {
            name: String::from(name),
            ..Default::default()
        };
        block
            .entities
            .push(Entity::new(EntityType::Line(Default::default())));
        drawing.blocks.push(block);
    }
    let contents = to_test_string(&drawing);
    let block_count = contents.matches("\r\nBLOCK\r\n").count();
    let endblk_count = contents.matches("\r\nENDBLK\r\n").count();
    assert_eq!(2, block_count);
    assert_eq!(2, endblk_count);
}

#[test]
fn entity_handles_are_suppressed_when_disabled_downlevel() {
    let mut drawing = Drawing::new();
    drawing.header.handles_enabled = false;
    drawing.add_entity(Entity::new(EntityType::Line(Default::default())));

    let contents = save_as_string(&drawing, AcadVersion::R12);
    let entities_offset = contents.find("ENTITIES").unwrap();
    let line_offset = contents[entities_offset..].find("LINE").unwrap() + entities_offset;
    assert!(!contents[line_offset..].contains("  5\r\n"));

    // handles are implied at R13 and later regardless of the flag
    let contents = save_as_string(&drawing, AcadVersion::R13);
    let entities_offset = contents.find("ENTITIES").unwrap();
    let line_offset = contents[entities_offset..].find("LINE").unwrap() + entities_offset;
    assert!(contents[line_offset..].contains("  5\r\n"));
}

#[test]
fn thumbnail_is_not_written_downlevel() {
    let mut drawing = Drawing::new();
    drawing.thumbnail = Some(image::DynamicImage::new_rgb8(1, 1));
    let contents = save_as_string(&drawing, AcadVersion::R14);
    assert!(!contents.contains("THUMBNAILIMAGE"));
    let contents = save_as_string(&drawing, AcadVersion::R2000);
    assert!(contents.contains("THUMBNAILIMAGE"));
}

#[test]
fn thumbnail_round_trips() {
    let mut drawing = Drawing::new();
    drawing.thumbnail = Some(image::DynamicImage::new_rgb8(2, 2));
    let contents = save_as_string(&drawing, AcadVersion::R2000);
    let reparsed = parse_drawing(&contents);
    let thumbnail = reparsed.thumbnail.expect("thumbnail should survive");
    assert_eq!(2, thumbnail.width());
    assert_eq!(2, thumbnail.height());
}
