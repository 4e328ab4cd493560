use dxfio::entities::*;
use dxfio::enums::*;
use dxfio::{Drawing, Point, Vector};

mod test_helpers;
use test_helpers::*;

fn read_entity(entity_type: &str, body: &str) -> Entity {
    let drawing = from_section(
        "ENTITIES",
        &format!("0\r\n{}\r\n{}", entity_type, body.trim()),
    );
    let entities = drawing.entities().cloned().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    entities[0].clone()
}

#[test]
fn read_empty_entities_section() {
    let drawing = parse_drawing(
        &["0", "SECTION", "2", "ENTITIES", "0", "ENDSEC", "0", "EOF"].join("\r\n"),
    );
    assert_eq!(0, drawing.entities().count());
}

#[test]
fn read_unsupported_entity_between_supported_entities() {
    let drawing = parse_drawing(
        &[
            "0",
            "SECTION",
            "2",
            "ENTITIES",
            "0",
            "LINE",
            "0",
            "UNSUPPORTED_ENTITY",
            "1",
            "unsupported string",
            "0",
            "CIRCLE",
            "0",
            "ENDSEC",
            "0",
            "EOF",
        ]
        .join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(2, entities.len());
    assert!(matches!(entities[0].specific, EntityType::Line(_)));
    assert!(matches!(entities[1].specific, EntityType::Circle(_)));
}

#[test]
fn read_common_entity_fields() {
    let entity = read_entity("LINE", &["8", "some-layer"].join("\r\n"));
    assert_eq!("some-layer", entity.common.layer);
}

#[test]
fn unknown_codes_within_a_known_entity_are_ignored() {
    let entity = read_entity(
        "LINE",
        &["470", "some unsupported value", "10", "1.5"].join("\r\n"),
    );
    match entity.specific {
        EntityType::Line(ref line) => assert!((line.p1.x - 1.5).abs() < 1e-10),
        _ => panic!("expected a line"),
    }
}

#[test]
fn read_line() {
    let entity = read_entity(
        "LINE",
        &[
            "10", "1.1", "20", "2.2", "30", "3.3", "11", "4.4", "21", "5.5", "31", "6.6",
        ]
        .join("\r\n"),
    );
    match entity.specific {
        EntityType::Line(ref line) => {
            assert_eq!(Point::new(1.1, 2.2, 3.3), line.p1);
            assert_eq!(Point::new(4.4, 5.5, 6.6), line.p2);
        }
        _ => panic!("expected a line"),
    }
}

#[test]
fn read_arc() {
    let entity = read_entity(
        "ARC",
        &[
            "10", "1.0", "20", "2.0", "30", "3.0", "40", "4.0", "50", "30.0", "51", "60.0",
        ]
        .join("\r\n"),
    );
    match entity.specific {
        EntityType::Arc(ref arc) => {
            assert_eq!(Point::new(1.0, 2.0, 3.0), arc.center);
            assert!((arc.radius - 4.0).abs() < 1e-10);
            assert!((arc.start_angle - 30.0).abs() < 1e-10);
            assert!((arc.end_angle - 60.0).abs() < 1e-10);
        }
        _ => panic!("expected an arc"),
    }
}

#[test]
fn read_text_with_justifications() {
    let entity = read_entity(
        "TEXT",
        &["1", "some text", "72", "5", "73", "3"].join("\r\n"),
    );
    match entity.specific {
        EntityType::Text(ref text) => {
            assert_eq!("some text", text.value);
            assert_eq!(
                HorizontalTextJustification::Fit,
                text.horizontal_text_justification
            );
            assert_eq!(
                VerticalTextJustification::Top,
                text.vertical_text_justification
            );
        }
        _ => panic!("expected text"),
    }
}

#[test]
fn read_lw_polyline_vertices() {
    let entity = read_entity(
        "LWPOLYLINE",
        &[
            "90", "3", "70", "1", "10", "0.0", "20", "0.0", "10", "1.0", "20", "0.0", "42", "0.5",
            "10", "1.0", "20", "1.0",
        ]
        .join("\r\n"),
    );
    match entity.specific {
        EntityType::LwPolyline(ref poly) => {
            assert!(poly.is_closed());
            assert_eq!(3, poly.vertices.len());
            assert!((poly.vertices[1].bulge - 0.5).abs() < 1e-10);
            assert!((poly.vertices[2].x - 1.0).abs() < 1e-10);
            assert!((poly.vertices[2].y - 1.0).abs() < 1e-10);
        }
        _ => panic!("expected an lwpolyline"),
    }
}

#[test]
fn read_spline_points() {
    let entity = read_entity(
        "SPLINE",
        &[
            "70", "8", "71", "3", "40", "0.0", "40", "1.0", "10", "1.0", "20", "2.0", "30",
            "3.0", "10", "4.0", "20", "5.0", "30", "6.0", "11", "7.0", "21", "8.0", "31", "9.0",
        ]
        .join("\r\n"),
    );
    match entity.specific {
        EntityType::Spline(ref spline) => {
            assert_eq!(3, spline.degree_of_curve);
            assert_eq!(vec![0.0, 1.0], spline.knot_values);
            assert_eq!(
                vec![Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0)],
                spline.control_points
            );
            assert_eq!(vec![Point::new(7.0, 8.0, 9.0)], spline.fit_points);
        }
        _ => panic!("expected a spline"),
    }
}

#[test]
fn read_mtext_with_extended_text() {
    let entity = read_entity(
        "MTEXT",
        &["3", "first part, ", "1", "second part"].join("\r\n"),
    );
    match entity.specific {
        EntityType::MText(ref mtext) => {
            assert_eq!("first part, second part", mtext.text);
        }
        _ => panic!("expected mtext"),
    }
}

#[test]
fn read_insert_with_attributes() {
    let drawing = from_section(
        "ENTITIES",
        &[
            "0",
            "INSERT",
            "66",
            "1",
            "2",
            "BLOCK-NAME",
            "0",
            "ATTRIB",
            "2",
            "TAG1",
            "1",
            "val1",
            "0",
            "ATTRIB",
            "2",
            "TAG2",
            "1",
            "val2",
            "0",
            "SEQEND",
        ]
        .join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        EntityType::Insert(ref insert) => {
            assert_eq!("BLOCK-NAME", insert.name);
            let tags = insert
                .attributes()
                .map(|a| a.attribute_tag.clone())
                .collect::<Vec<_>>();
            assert_eq!(vec!["TAG1", "TAG2"], tags);
        }
        _ => panic!("expected an insert"),
    }
}

#[test]
fn read_insert_without_attribute_flag_leaves_attributes_top_level() {
    let drawing = from_section(
        "ENTITIES",
        &["0", "INSERT", "2", "BLOCK-NAME", "0", "ATTRIB", "2", "TAG1"].join("\r\n"),
    );
    assert_eq!(2, drawing.entities().count());
}

#[test]
fn read_dimension_via_subclass_marker() {
    let drawing = from_section(
        "ENTITIES",
        &[
            "0",
            "DIMENSION",
            "1",
            "text",
            "100",
            "AcDbOrdinateDimension",
            "13",
            "1.0",
            "23",
            "2.0",
            "33",
            "3.0",
        ]
        .join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        EntityType::OrdinateDimension(ref dim) => {
            assert_eq!("text", dim.dimension_base.text);
            assert_eq!(Point::new(1.0, 2.0, 3.0), dim.definition_point_2);
        }
        _ => panic!("expected an ordinate dimension"),
    }
}

#[test]
fn read_dimension_via_type_flags_without_markers() {
    let drawing = from_section(
        "ENTITIES",
        &["0", "DIMENSION", "70", "4", "1", "text"].join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    assert!(matches!(
        entities[0].specific,
        EntityType::RadialDimension(_)
    ));
}

#[test]
fn write_common_entity_fields() {
    let mut drawing = Drawing::new();
    let mut entity = Entity::new(EntityType::Line(Default::default()));
    entity.common.layer = String::from("some-layer");
    drawing.add_entity(entity);
    assert_contains(
        &drawing,
        &["  0", "LINE"].join("\r\n"),
    );
    assert_contains(
        &drawing,
        &["100", "AcDbEntity", "  8", "some-layer"].join("\r\n"),
    );
}

#[test]
fn write_specific_entity_fields() {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Line(Line {
        p1: Point::new(1.1, 2.2, 3.3),
        p2: Point::new(4.4, 5.5, 6.6),
        ..Default::default()
    })));
    assert_contains(
        &drawing,
        &[
            "100",
            "AcDbLine",
            " 10",
            "1.1",
            " 20",
            "2.2",
            " 30",
            "3.3",
            " 11",
            "4.4",
            " 21",
            "5.5",
            " 31",
            "6.6",
        ]
        .join("\r\n"),
    );
}

#[test]
fn subclass_markers_are_not_written_downlevel() {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R12;
    drawing.add_entity(Entity::new(EntityType::Line(Default::default())));
    assert_not_contains(&drawing, "AcDbLine");
    assert_not_contains(&drawing, "AcDbEntity");
}

#[test]
fn non_default_extrusion_is_written() {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Circle(Circle {
        normal: Vector::new(0.0, 0.0, -1.0),
        ..Default::default()
    })));
    assert_contains(&drawing, &["210", "0.0", "220", "0.0", "230", "-1.0"].join("\r\n"));
}

#[test]
fn default_extrusion_is_suppressed() {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Circle(Default::default())));
    assert_not_contains(&drawing, "210");
}

#[test]
fn entity_transparency_is_version_gated() {
    let mut drawing = Drawing::new();
    let mut entity = Entity::new(EntityType::Line(Default::default()));
    entity.common.transparency = 0x0200_0000;
    drawing.add_entity(entity);

    drawing.header.version = AcadVersion::R2000;
    assert_not_contains(&drawing, "440");
    drawing.header.version = AcadVersion::R2004;
    assert_contains(&drawing, &["440", " 33554432"].join("\r\n"));
}
