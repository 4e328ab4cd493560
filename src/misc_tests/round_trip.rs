use std::collections::HashSet;
use std::mem::discriminant;

use crate::entities::*;
use crate::enums::AcadVersion;
use crate::helpers::tests::*;
use crate::objects::{Object, ObjectType};
use crate::{Block, Drawing, Handle, Point};

fn save_as_string(drawing: &Drawing, version: AcadVersion) -> String {
    let mut buf = Vec::new();
    drawing.save_as(&mut buf, version).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn minimum_line_file() {
    let drawing = parse_drawing(
        &[
            "0", "SECTION", "2", "ENTITIES", "0", "LINE", "8", "0", "10", "0.0", "20", "0.0",
            "30", "0.0", "11", "10.0", "21", "10.0", "31", "0.0", "0", "ENDSEC", "0", "EOF",
        ]
        .join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    assert_eq!("0", entities[0].common.layer);
    match entities[0].specific {
        EntityType::Line(ref line) => {
            assert_eq!(Point::new(0.0, 0.0, 0.0), line.p1);
            assert_eq!(Point::new(10.0, 10.0, 0.0), line.p2);
        }
        _ => panic!("expected a line"),
    }
}

#[test]
fn version_downgrade_drops_transparency() {
    let mut drawing = Drawing::new();
    let mut entity = Entity::new(EntityType::Line(Default::default()));
    entity.common.transparency = 0x0200_0000;
    drawing.add_entity(entity);

    // R12 can't represent transparency; the reloaded line has the default
    let r12 = parse_drawing(&save_as_string(&drawing, AcadVersion::R12));
    assert_eq!(0, r12.entities().next().unwrap().common.transparency);

    // R2004 preserves it
    let r2004 = parse_drawing(&save_as_string(&drawing, AcadVersion::R2004));
    assert_eq!(
        0x0200_0000,
        r2004.entities().next().unwrap().common.transparency
    );
}

#[test]
fn block_round_trip_preserves_contents() {
    let mut drawing = Drawing::new();
    let mut block = Block {
        name: String::from("B1"),
        base_point: Point::new(1.0, 2.0, 3.0),
        ..Default::default()
    };
    block.entities.push(Entity::new(EntityType::Circle(Circle::new(
        Point::new(1.0, 1.0, 0.0),
        0.5,
    ))));
    block.entities.push(Entity::new(EntityType::Circle(Circle::new(
        Point::new(4.0, 4.0, 0.0),
        2.5,
    ))));
    drawing.blocks.push(block);

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2000));
    assert_eq!(1, reparsed.blocks.len());
    let block = &reparsed.blocks[0];
    assert_eq!("B1", block.name);
    assert_eq!(Point::new(1.0, 2.0, 3.0), block.base_point);
    assert_eq!(2, block.entities.len());
    match block.entities[0].specific {
        EntityType::Circle(ref circle) => {
            assert_eq!(Point::new(1.0, 1.0, 0.0), circle.center);
            assert!((circle.radius - 0.5).abs() < 1e-10);
        }
        _ => panic!("expected a circle"),
    }
    match block.entities[1].specific {
        EntityType::Circle(ref circle) => {
            assert_eq!(Point::new(4.0, 4.0, 0.0), circle.center);
            assert!((circle.radius - 2.5).abs() < 1e-10);
        }
        _ => panic!("expected a circle"),
    }
    // child entities carry no handles of their own
    for entity in &block.entities {
        assert!(entity.common.handle.is_empty());
    }
}

#[test]
fn unknown_entity_kinds_are_tolerated() {
    let drawing = parse_drawing(
        &[
            "0",
            "SECTION",
            "2",
            "ENTITIES",
            "0",
            "FROBNICATE",
            "1",
            "unknown string",
            "70",
            "42",
            "0",
            "LINE",
            "0",
            "ENDSEC",
            "0",
            "EOF",
        ]
        .join("\r\n"),
    );
    let entities = drawing.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    assert!(matches!(entities[0].specific, EntityType::Line(_)));
}

#[test]
fn handles_are_assigned_and_handseed_advanced_on_save() {
    let mut drawing = Drawing::new();
    for _ in 0..3 {
        drawing.add_entity(Entity::new(EntityType::Line(Default::default())));
    }

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2000));
    let mut seen = HashSet::new();
    let mut max_handle = Handle::empty();
    for entity in reparsed.entities() {
        let handle = entity.common.handle;
        assert!(!handle.is_empty());
        assert!(seen.insert(handle), "handle {:?} is not unique", handle);
        max_handle = max_handle.max(handle);
    }
    assert!(reparsed.header.next_available_handle > max_handle);
}

#[test]
fn all_default_entities_round_trip_at_r2013() {
    let mut drawing = Drawing::new();
    let expected = EntityType::all_default()
        .into_iter()
        .map(|e| discriminant(&e))
        .collect::<Vec<_>>();
    for specific in EntityType::all_default() {
        drawing.add_entity(Entity::new(specific));
    }

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2013));
    let actual = reparsed
        .entities()
        .map(|e| discriminant(&e.specific))
        .collect::<Vec<_>>();
    assert_eq!(expected, actual);
}

#[test]
fn all_default_objects_round_trip_at_r2013() {
    let mut drawing = Drawing::new();
    let expected = ObjectType::all_default()
        .into_iter()
        .map(|o| discriminant(&o))
        .collect::<Vec<_>>();
    for specific in ObjectType::all_default() {
        drawing.add_object(Object::new(specific));
    }

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2013));
    let actual = reparsed
        .objects()
        .map(|o| discriminant(&o.specific))
        .collect::<Vec<_>>();
    assert_eq!(expected, actual);
}

#[test]
fn files_written_by_the_library_round_trip_byte_for_byte() {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Line(Line::new(
        Point::new(1.0, 2.0, 3.0),
        Point::new(4.0, 5.0, 6.0),
    ))));
    drawing.add_entity(Entity::new(EntityType::Circle(Circle::new(
        Point::new(0.0, 0.0, 0.0),
        2.0,
    ))));
    let mut block = Block {
        name: String::from("B"),
        ..Default::default()
    };
    block
        .entities
        .push(Entity::new(EntityType::Line(Default::default())));
    drawing.blocks.push(block);
    drawing.add_object(Object::new(ObjectType::PlaceHolder(Default::default())));

    let first = save_as_string(&drawing, AcadVersion::R2000);
    let reparsed = parse_drawing(&first);
    let second = save_as_string(&reparsed, AcadVersion::R2000);
    assert_eq!(first, second);
}

#[test]
fn polyline_vertices_round_trip() {
    let mut drawing = Drawing::new();
    // build the vertex list through the drawing so handles are assigned
    let mut poly = Polyline::default();
    poly.add_vertex(&mut drawing, Vertex::new(Point::new(0.0, 0.0, 0.0)));
    poly.add_vertex(&mut drawing, Vertex::new(Point::new(1.0, 1.0, 0.0)));
    poly.add_vertex(&mut drawing, Vertex::new(Point::new(2.0, 0.0, 0.0)));
    drawing.add_entity(Entity::new(EntityType::Polyline(poly)));

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2000));
    let entities = reparsed.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        EntityType::Polyline(ref poly) => {
            let locations = poly.vertices().map(|v| v.location.clone()).collect::<Vec<_>>();
            assert_eq!(
                vec![
                    Point::new(0.0, 0.0, 0.0),
                    Point::new(1.0, 1.0, 0.0),
                    Point::new(2.0, 0.0, 0.0),
                ],
                locations
            );
        }
        _ => panic!("expected a polyline"),
    }
}

#[test]
fn insert_attributes_round_trip() {
    let mut drawing = Drawing::new();
    let mut insert = Insert {
        name: String::from("SOME-BLOCK"),
        ..Default::default()
    };
    insert.add_attribute(
        &mut drawing,
        Attribute {
            attribute_tag: String::from("TAG1"),
            value: String::from("value 1"),
            ..Default::default()
        },
    );
    drawing.add_entity(Entity::new(EntityType::Insert(insert)));

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2000));
    let entities = reparsed.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        EntityType::Insert(ref insert) => {
            assert_eq!("SOME-BLOCK", insert.name);
            let attributes = insert.attributes().collect::<Vec<_>>();
            assert_eq!(1, attributes.len());
            assert_eq!("TAG1", attributes[0].attribute_tag);
            assert_eq!("value 1", attributes[0].value);
        }
        _ => panic!("expected an insert"),
    }
}

#[test]
fn hatch_round_trip() {
    let mut drawing = Drawing::new();
    let mut hatch = Hatch {
        pattern_name: String::from("ANSI31"),
        pattern_angle: 45.0,
        pattern_scale: 2.0,
        ..Default::default()
    };
    hatch.boundary_paths.push(HatchBoundaryPath {
        path_type_flags: 0x2 | 0x1, // external polyline path
        is_polyline_closed: true,
        polyline_vertices: vec![
            LwPolylineVertex {
                x: 0.0,
                y: 0.0,
                ..Default::default()
            },
            LwPolylineVertex {
                x: 1.0,
                y: 0.0,
                ..Default::default()
            },
            LwPolylineVertex {
                x: 1.0,
                y: 1.0,
                ..Default::default()
            },
        ],
        ..Default::default()
    });
    hatch.seed_points.push(Point::new(0.5, 0.5, 0.0));
    drawing.add_entity(Entity::new(EntityType::Hatch(hatch)));

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2004));
    let entities = reparsed.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        EntityType::Hatch(ref hatch) => {
            assert_eq!("ANSI31", hatch.pattern_name);
            assert!((hatch.pattern_angle - 45.0).abs() < 1e-10);
            assert_eq!(1, hatch.boundary_paths.len());
            let path = &hatch.boundary_paths[0];
            assert!(path.is_polyline_path());
            assert!(path.is_polyline_closed);
            assert_eq!(3, path.polyline_vertices.len());
            assert_eq!(1, hatch.seed_points.len());
        }
        _ => panic!("expected a hatch"),
    }
}

#[test]
fn downlevel_save_suppresses_unrepresentable_entities() {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::Spline(Default::default())));
    drawing.add_entity(Entity::new(EntityType::Line(Default::default())));

    let r12 = parse_drawing(&save_as_string(&drawing, AcadVersion::R12));
    let kinds = r12
        .entities()
        .map(|e| e.specific.to_type_string())
        .collect::<Vec<_>>();
    assert_eq!(vec!["LINE"], kinds);

    let r13 = parse_drawing(&save_as_string(&drawing, AcadVersion::R13));
    let kinds = r13
        .entities()
        .map(|e| e.specific.to_type_string())
        .collect::<Vec<_>>();
    assert_eq!(vec!["SPLINE", "LINE"], kinds);
}

#[test]
fn dimension_round_trip() {
    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(EntityType::RadialDimension(RadialDimension {
        dimension_base: DimensionBase {
            definition_point_1: Point::new(1.0, 2.0, 3.0),
            text: String::from("<>"),
            ..Default::default()
        },
        definition_point_2: Point::new(4.0, 5.0, 6.0),
        leader_length: 7.0,
        ..Default::default()
    })));

    let reparsed = parse_drawing(&save_as_string(&drawing, AcadVersion::R2000));
    let entities = reparsed.entities().collect::<Vec<_>>();
    assert_eq!(1, entities.len());
    match entities[0].specific {
        EntityType::RadialDimension(ref dim) => {
            assert_eq!(Point::new(1.0, 2.0, 3.0), dim.dimension_base.definition_point_1);
            assert_eq!("<>", dim.dimension_base.text);
            assert_eq!(Point::new(4.0, 5.0, 6.0), dim.definition_point_2);
            assert!((dim.leader_length - 7.0).abs() < 1e-10);
        }
        _ => panic!("expected a radial dimension"),
    }
}
