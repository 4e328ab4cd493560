//! The drawable record kinds and their shared frame.
//!
//! Every entity is an [`EntityCommon`] frame plus one [`EntityType`] body;
//! the codec for both lives in `entity.rs`.

use crate::color::Color;
use crate::enums::*;
use crate::extension_data::ExtensionGroup;
use crate::handle::Handle;
use crate::line_weight::LineWeight;
use crate::x_data::XData;
use crate::{Point, Vector};

/// The fields shared by every entity kind: identity, placement layer,
/// display properties, and attached extension data.
#[derive(Clone, Debug)]
pub struct EntityCommon {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub is_in_paperspace: bool,
    pub layer: String,
    pub line_type_name: String,
    pub line_type_scale: f64,
    pub color: Color,
    /// A 24-bit RGB color; only written at R2004 and later when non-zero.
    pub color_24_bit: i32,
    pub color_name: String,
    /// Raw transparency value; `0x0200_0000` style encoding, only written
    /// at R2004 and later.
    pub transparency: i32,
    pub line_weight: LineWeight,
    pub is_visible: bool,
    pub material_handle: Handle,
    pub shadow_mode: ShadowMode,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for EntityCommon {
    fn default() -> Self {
        EntityCommon {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            is_in_paperspace: false,
            layer: String::from("0"),
            line_type_name: String::from("BYLAYER"),
            line_type_scale: 1.0,
            color: Color::by_layer(),
            color_24_bit: 0,
            color_name: String::new(),
            transparency: 0,
            line_weight: LineWeight::by_layer(),
            is_visible: true,
            material_handle: Handle::empty(),
            shadow_mode: ShadowMode::CastsAndReceives,
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

/// A drawable record: the shared frame plus the kind-specific body.
#[derive(Clone, Debug)]
pub struct Entity {
    pub common: EntityCommon,
    pub specific: EntityType,
}

//------------------------------------------------------------------------------
//                                                              support records
//------------------------------------------------------------------------------

/// A single vertex of a `LwPolyline` and of hatch polyline boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LwPolylineVertex {
    pub x: f64,
    pub y: f64,
    pub id: i32,
    pub starting_width: f64,
    pub ending_width: f64,
    pub bulge: f64,
}

/// One boundary loop of a `Hatch`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HatchBoundaryPath {
    /// Code 92 flags; bit 0x2 marks a polyline path.
    pub path_type_flags: i32,
    /// Vertices when the path is a polyline path.
    pub polyline_vertices: Vec<LwPolylineVertex>,
    pub is_polyline_closed: bool,
    /// Edges when the path is an edge path.
    pub edges: Vec<HatchBoundaryEdge>,
    /// Handles of the source boundary objects (code 330).
    pub source_boundary_handles: Vec<Handle>,
}

impl HatchBoundaryPath {
    pub fn is_polyline_path(&self) -> bool {
        self.path_type_flags & 0x2 != 0
    }
}

/// One edge of a hatch edge path.
#[derive(Clone, Debug, PartialEq)]
pub enum HatchBoundaryEdge {
    Line {
        p1: Point,
        p2: Point,
    },
    CircularArc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        is_counter_clockwise: bool,
    },
    EllipticArc {
        center: Point,
        major_axis: Vector,
        minor_axis_ratio: f64,
        start_angle: f64,
        end_angle: f64,
        is_counter_clockwise: bool,
    },
    Spline {
        degree: i32,
        is_rational: bool,
        is_periodic: bool,
        knot_values: Vec<f64>,
        control_points: Vec<Point>,
        weights: Vec<f64>,
        fit_points: Vec<Point>,
        start_tangent: Point,
        end_tangent: Point,
    },
}

/// One definition line of a hatch pattern.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HatchPatternDefinitionLine {
    pub angle: f64,
    pub base_point: Point,
    pub offset: Vector,
    pub dash_lengths: Vec<f64>,
}

/// The fields shared by every DIMENSION subtype.
#[derive(Clone, Debug)]
pub struct DimensionBase {
    pub version: EntityVersion,
    pub block_name: String,
    pub definition_point_1: Point,
    pub text_mid_point: Point,
    pub dimension_type: DimensionType,
    pub is_block_reference_referenced_by_this_block_only: bool,
    pub is_ordinate_x_type: bool,
    pub is_at_user_defined_location: bool,
    pub attachment_point: AttachmentPoint,
    pub text_line_spacing_style: TextLineSpacingStyle,
    pub text_line_spacing_factor: f64,
    pub actual_measurement: f64,
    pub text: String,
    pub text_rotation_angle: f64,
    pub horizontal_direction_angle: f64,
    pub normal: Vector,
    pub dimension_style_name: String,
}

impl Default for DimensionBase {
    fn default() -> Self {
        DimensionBase {
            version: EntityVersion::R2010,
            block_name: String::new(),
            definition_point_1: Point::origin(),
            text_mid_point: Point::origin(),
            dimension_type: DimensionType::RotatedHorizontalOrVertical,
            is_block_reference_referenced_by_this_block_only: false,
            is_ordinate_x_type: false,
            is_at_user_defined_location: false,
            attachment_point: AttachmentPoint::TopLeft,
            text_line_spacing_style: TextLineSpacingStyle::AtLeast,
            text_line_spacing_factor: 1.0,
            actual_measurement: 0.0,
            text: String::new(),
            text_rotation_angle: 0.0,
            horizontal_direction_angle: 0.0,
            normal: Vector::z_axis(),
            dimension_style_name: String::from("STANDARD"),
        }
    }
}

//------------------------------------------------------------------------------
//                                                                entity bodies
//------------------------------------------------------------------------------

/// An `ARC` entity.
#[derive(Clone, Debug)]
pub struct Arc {
    pub thickness: f64,
    pub center: Point,
    pub radius: f64,
    pub normal: Vector,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for Arc {
    fn default() -> Self {
        Arc {
            thickness: 0.0,
            center: Point::origin(),
            radius: 0.0,
            normal: Vector::z_axis(),
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }
}

impl Arc {
    pub fn new(center: Point, radius: f64, start: f64, end: f64) -> Self {
        Arc {
            center,
            radius,
            start_angle: start,
            end_angle: end,
            ..Default::default()
        }
    }
}

/// An `ATTRIB` entity: an attribute instance owned by an `INSERT`.
#[derive(Clone, Debug)]
pub struct Attribute {
    pub thickness: f64,
    pub location: Point,
    pub text_height: f64,
    pub value: String,
    pub rotation: f64,
    pub relative_x_scale_factor: f64,
    pub oblique_angle: f64,
    pub text_style_name: String,
    pub text_generation_flags: i16,
    pub horizontal_text_justification: HorizontalTextJustification,
    pub second_alignment_point: Point,
    pub normal: Vector,
    pub attribute_tag: String,
    pub flags: i16,
    pub field_length: i16,
    pub vertical_text_justification: VerticalTextJustification,
    pub version: EntityVersion,
    pub is_locked_in_block: bool,
    pub keep_duplicate_records: bool,
    pub m_text_flag: MTextFlag,
    pub is_really_locked: bool,
    pub alignment_point: Point,
    pub annotation_scale: f64,
    pub x_record_tag: String,
    #[doc(hidden)]
    pub __secondary_attribute_count: i32,
    #[doc(hidden)]
    pub __secondary_attributes_handles: Vec<Handle>,
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute {
            thickness: 0.0,
            location: Point::origin(),
            text_height: 1.0,
            value: String::new(),
            rotation: 0.0,
            relative_x_scale_factor: 1.0,
            oblique_angle: 0.0,
            text_style_name: String::from("STANDARD"),
            text_generation_flags: 0,
            horizontal_text_justification: HorizontalTextJustification::Left,
            second_alignment_point: Point::origin(),
            normal: Vector::z_axis(),
            attribute_tag: String::new(),
            flags: 0,
            field_length: 0,
            vertical_text_justification: VerticalTextJustification::Baseline,
            version: EntityVersion::R2010,
            is_locked_in_block: false,
            keep_duplicate_records: false,
            m_text_flag: MTextFlag::MultilineAttribute,
            is_really_locked: false,
            alignment_point: Point::origin(),
            annotation_scale: 1.0,
            x_record_tag: String::new(),
            __secondary_attribute_count: 0,
            __secondary_attributes_handles: vec![],
        }
    }
}

/// An `ATTDEF` entity: an attribute template owned by a block.
#[derive(Clone, Debug)]
pub struct AttributeDefinition {
    pub thickness: f64,
    pub location: Point,
    pub text_height: f64,
    pub value: String,
    pub prompt: String,
    pub rotation: f64,
    pub relative_x_scale_factor: f64,
    pub oblique_angle: f64,
    pub text_style_name: String,
    pub text_generation_flags: i16,
    pub horizontal_text_justification: HorizontalTextJustification,
    pub second_alignment_point: Point,
    pub normal: Vector,
    pub text_tag: String,
    pub flags: i16,
    pub field_length: i16,
    pub vertical_text_justification: VerticalTextJustification,
    pub version: EntityVersion,
    pub is_locked_in_block: bool,
    pub keep_duplicate_records: bool,
    pub m_text_flag: MTextFlag,
    pub is_really_locked: bool,
    pub alignment_point: Point,
    pub annotation_scale: f64,
    pub x_record_tag: String,
    #[doc(hidden)]
    pub __secondary_attribute_count: i32,
    #[doc(hidden)]
    pub __secondary_attributes_handles: Vec<Handle>,
}

impl Default for AttributeDefinition {
    fn default() -> Self {
        AttributeDefinition {
            thickness: 0.0,
            location: Point::origin(),
            text_height: 1.0,
            value: String::new(),
            prompt: String::new(),
            rotation: 0.0,
            relative_x_scale_factor: 1.0,
            oblique_angle: 0.0,
            text_style_name: String::from("STANDARD"),
            text_generation_flags: 0,
            horizontal_text_justification: HorizontalTextJustification::Left,
            second_alignment_point: Point::origin(),
            normal: Vector::z_axis(),
            text_tag: String::new(),
            flags: 0,
            field_length: 0,
            vertical_text_justification: VerticalTextJustification::Baseline,
            version: EntityVersion::R2010,
            is_locked_in_block: false,
            keep_duplicate_records: false,
            m_text_flag: MTextFlag::MultilineAttribute,
            is_really_locked: false,
            alignment_point: Point::origin(),
            annotation_scale: 1.0,
            x_record_tag: String::new(),
            __secondary_attribute_count: 0,
            __secondary_attributes_handles: vec![],
        }
    }
}

/// A `CIRCLE` entity.
#[derive(Clone, Debug)]
pub struct Circle {
    pub thickness: f64,
    pub center: Point,
    pub radius: f64,
    pub normal: Vector,
}

impl Default for Circle {
    fn default() -> Self {
        Circle {
            thickness: 0.0,
            center: Point::origin(),
            radius: 0.0,
            normal: Vector::z_axis(),
        }
    }
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Circle {
            center,
            radius,
            ..Default::default()
        }
    }
}

/// A rotated, horizontal, or vertical `DIMENSION`.
#[derive(Clone, Debug, Default)]
pub struct RotatedDimension {
    pub dimension_base: DimensionBase,
    pub insertion_point: Point,
    pub definition_point_2: Point,
    pub definition_point_3: Point,
    pub rotation_angle: f64,
    pub extension_line_angle: f64,
}

/// A radial `DIMENSION`.
#[derive(Clone, Debug, Default)]
pub struct RadialDimension {
    pub dimension_base: DimensionBase,
    pub definition_point_2: Point,
    pub leader_length: f64,
}

/// A diametric `DIMENSION`.
#[derive(Clone, Debug, Default)]
pub struct DiameterDimension {
    pub dimension_base: DimensionBase,
    pub definition_point_2: Point,
    pub leader_length: f64,
}

/// An angular three-point `DIMENSION`.
#[derive(Clone, Debug, Default)]
pub struct AngularThreePointDimension {
    pub dimension_base: DimensionBase,
    pub definition_point_2: Point,
    pub definition_point_3: Point,
    pub definition_point_4: Point,
    pub definition_point_5: Point,
}

/// An ordinate `DIMENSION`.
#[derive(Clone, Debug, Default)]
pub struct OrdinateDimension {
    pub dimension_base: DimensionBase,
    pub definition_point_2: Point,
    pub definition_point_3: Point,
}

/// An `ELLIPSE` entity.
#[derive(Clone, Debug)]
pub struct Ellipse {
    pub center: Point,
    /// Endpoint of the major axis, relative to the center.
    pub major_axis: Vector,
    pub normal: Vector,
    pub minor_axis_ratio: f64,
    pub start_parameter: f64,
    pub end_parameter: f64,
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            center: Point::origin(),
            major_axis: Vector::x_axis(),
            normal: Vector::z_axis(),
            minor_axis_ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: std::f64::consts::PI * 2.0,
        }
    }
}

/// A `3DFACE` entity.
#[derive(Clone, Debug, Default)]
pub struct Face3D {
    pub first_corner: Point,
    pub second_corner: Point,
    pub third_corner: Point,
    pub fourth_corner: Point,
    pub edge_flags: i16,
}

impl Face3D {
    pub fn new(
        first_corner: Point,
        second_corner: Point,
        third_corner: Point,
        fourth_corner: Point,
    ) -> Self {
        Face3D {
            first_corner,
            second_corner,
            third_corner,
            fourth_corner,
            ..Default::default()
        }
    }
}

/// A `HATCH` entity: a pattern or solid fill over boundary loops.
#[derive(Clone, Debug)]
pub struct Hatch {
    pub elevation_point: Point,
    pub normal: Vector,
    pub pattern_name: String,
    pub is_solid_fill: bool,
    pub is_associative: bool,
    pub boundary_paths: Vec<HatchBoundaryPath>,
    pub hatch_style: HatchStyle,
    pub pattern_type: HatchPatternType,
    pub pattern_angle: f64,
    pub pattern_scale: f64,
    pub is_pattern_double: bool,
    pub pattern_definition_lines: Vec<HatchPatternDefinitionLine>,
    pub pixel_size: f64,
    pub seed_points: Vec<Point>,
}

impl Default for Hatch {
    fn default() -> Self {
        Hatch {
            elevation_point: Point::origin(),
            normal: Vector::z_axis(),
            pattern_name: String::new(),
            is_solid_fill: false,
            is_associative: false,
            boundary_paths: vec![],
            hatch_style: HatchStyle::OddParity,
            pattern_type: HatchPatternType::Predefined,
            pattern_angle: 0.0,
            pattern_scale: 1.0,
            is_pattern_double: false,
            pattern_definition_lines: vec![],
            pixel_size: 0.0,
            seed_points: vec![],
        }
    }
}

/// An `INSERT` entity: a block reference.
#[derive(Clone, Debug)]
pub struct Insert {
    #[doc(hidden)]
    pub __has_attributes: bool,
    pub name: String,
    pub location: Point,
    pub x_scale_factor: f64,
    pub y_scale_factor: f64,
    pub z_scale_factor: f64,
    pub rotation: f64,
    pub column_count: i16,
    pub row_count: i16,
    pub column_spacing: f64,
    pub row_spacing: f64,
    pub normal: Vector,
    #[doc(hidden)]
    pub __attributes_and_handles: Vec<(Attribute, Handle)>,
    #[doc(hidden)]
    pub __seqend_handle: Handle,
}

impl Default for Insert {
    fn default() -> Self {
        Insert {
            __has_attributes: false,
            name: String::new(),
            location: Point::origin(),
            x_scale_factor: 1.0,
            y_scale_factor: 1.0,
            z_scale_factor: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
            normal: Vector::z_axis(),
            __attributes_and_handles: vec![],
            __seqend_handle: Handle::empty(),
        }
    }
}

/// A `LEADER` entity.
#[derive(Clone, Debug)]
pub struct Leader {
    pub dimension_style_name: String,
    pub use_arrowheads: bool,
    pub path_type: LeaderPathType,
    pub annotation_type: LeaderCreationAnnotationType,
    pub hookline_direction: i16,
    pub use_hookline: bool,
    pub text_annotation_height: f64,
    pub text_annotation_width: f64,
    pub vertices: Vec<Point>,
    pub normal: Vector,
    pub horizontal_direction: Vector,
    pub block_offset: Vector,
    pub annotation_offset: Vector,
    #[doc(hidden)]
    pub __vertices_x: Vec<f64>,
    #[doc(hidden)]
    pub __vertices_y: Vec<f64>,
    #[doc(hidden)]
    pub __vertices_z: Vec<f64>,
}

impl Default for Leader {
    fn default() -> Self {
        Leader {
            dimension_style_name: String::from("STANDARD"),
            use_arrowheads: true,
            path_type: LeaderPathType::StraightLineSegments,
            annotation_type: LeaderCreationAnnotationType::NoAnnotation,
            hookline_direction: 0,
            use_hookline: false,
            text_annotation_height: 0.0,
            text_annotation_width: 0.0,
            vertices: vec![],
            normal: Vector::z_axis(),
            horizontal_direction: Vector::x_axis(),
            block_offset: Vector::zero(),
            annotation_offset: Vector::zero(),
            __vertices_x: vec![],
            __vertices_y: vec![],
            __vertices_z: vec![],
        }
    }
}

/// A `LINE` entity.
#[derive(Clone, Debug)]
pub struct Line {
    pub thickness: f64,
    pub p1: Point,
    pub p2: Point,
    pub normal: Vector,
}

impl Default for Line {
    fn default() -> Self {
        Line {
            thickness: 0.0,
            p1: Point::origin(),
            p2: Point::origin(),
            normal: Vector::z_axis(),
        }
    }
}

impl Line {
    pub fn new(p1: Point, p2: Point) -> Self {
        Line {
            p1,
            p2,
            ..Default::default()
        }
    }
}

/// An `LWPOLYLINE` entity: a lightweight 2D polyline.
#[derive(Clone, Debug)]
pub struct LwPolyline {
    pub flags: i16,
    pub constant_width: f64,
    pub elevation: f64,
    pub thickness: f64,
    pub vertices: Vec<LwPolylineVertex>,
    pub normal: Vector,
}

impl Default for LwPolyline {
    fn default() -> Self {
        LwPolyline {
            flags: 0,
            constant_width: 0.0,
            elevation: 0.0,
            thickness: 0.0,
            vertices: vec![],
            normal: Vector::z_axis(),
        }
    }
}

impl LwPolyline {
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn set_is_closed(&mut self, val: bool) {
        if val {
            self.flags |= 1;
        } else {
            self.flags &= !1;
        }
    }
}

/// An `MLINE` entity.
#[derive(Clone, Debug)]
pub struct MLine {
    pub style_name: String,
    #[doc(hidden)]
    pub __style_handle: Handle,
    pub scale_factor: f64,
    pub justification: MLineJustification,
    pub flags: i16,
    pub start_point: Point,
    pub normal: Vector,
    pub vertices: Vec<Point>,
    pub segment_directions: Vec<Vector>,
    pub miter_directions: Vec<Vector>,
    pub parameters: Vec<f64>,
    pub area_fill_parameters: Vec<f64>,
    #[doc(hidden)]
    pub __vertices_x: Vec<f64>,
    #[doc(hidden)]
    pub __vertices_y: Vec<f64>,
    #[doc(hidden)]
    pub __vertices_z: Vec<f64>,
    #[doc(hidden)]
    pub __segment_direction_x: Vec<f64>,
    #[doc(hidden)]
    pub __segment_direction_y: Vec<f64>,
    #[doc(hidden)]
    pub __segment_direction_z: Vec<f64>,
    #[doc(hidden)]
    pub __miter_direction_x: Vec<f64>,
    #[doc(hidden)]
    pub __miter_direction_y: Vec<f64>,
    #[doc(hidden)]
    pub __miter_direction_z: Vec<f64>,
}

impl Default for MLine {
    fn default() -> Self {
        MLine {
            style_name: String::from("STANDARD"),
            __style_handle: Handle::empty(),
            scale_factor: 1.0,
            justification: MLineJustification::Top,
            flags: 0,
            start_point: Point::origin(),
            normal: Vector::z_axis(),
            vertices: vec![],
            segment_directions: vec![],
            miter_directions: vec![],
            parameters: vec![],
            area_fill_parameters: vec![],
            __vertices_x: vec![],
            __vertices_y: vec![],
            __vertices_z: vec![],
            __segment_direction_x: vec![],
            __segment_direction_y: vec![],
            __segment_direction_z: vec![],
            __miter_direction_x: vec![],
            __miter_direction_y: vec![],
            __miter_direction_z: vec![],
        }
    }
}

/// A `POINT` entity.
#[derive(Clone, Debug)]
pub struct ModelPoint {
    pub location: Point,
    pub thickness: f64,
    pub normal: Vector,
    pub angle: f64,
}

impl Default for ModelPoint {
    fn default() -> Self {
        ModelPoint {
            location: Point::origin(),
            thickness: 0.0,
            normal: Vector::z_axis(),
            angle: 0.0,
        }
    }
}

impl ModelPoint {
    pub fn new(location: Point) -> Self {
        ModelPoint {
            location,
            ..Default::default()
        }
    }
}

/// An `MTEXT` entity: paragraph text.
#[derive(Clone, Debug)]
pub struct MText {
    pub insertion_point: Point,
    pub initial_text_height: f64,
    pub reference_rectangle_width: f64,
    pub attachment_point: AttachmentPoint,
    pub drawing_direction: DrawingDirection,
    pub text: String,
    pub text_style_name: String,
    pub normal: Vector,
    pub x_axis_direction: Vector,
    pub horizontal_width: f64,
    pub vertical_height: f64,
    pub rotation_angle: f64,
    pub line_spacing_style: TextLineSpacingStyle,
    pub line_spacing_factor: f64,
    pub background_fill_setting: i32,
    pub background_fill_color: Color,
    pub fill_box_scale: f64,
    pub background_fill_color_transparency: i32,
    pub column_type: i16,
    pub column_count: i16,
    pub is_column_flow_reversed: bool,
    pub is_column_auto_height: bool,
    pub column_width: f64,
    pub column_gutter: f64,
    pub column_heights: Vec<f64>,
}

impl Default for MText {
    fn default() -> Self {
        MText {
            insertion_point: Point::origin(),
            initial_text_height: 1.0,
            reference_rectangle_width: 1.0,
            attachment_point: AttachmentPoint::TopLeft,
            drawing_direction: DrawingDirection::LeftToRight,
            text: String::new(),
            text_style_name: String::from("STANDARD"),
            normal: Vector::z_axis(),
            x_axis_direction: Vector::x_axis(),
            horizontal_width: 0.0,
            vertical_height: 0.0,
            rotation_angle: 0.0,
            line_spacing_style: TextLineSpacingStyle::AtLeast,
            line_spacing_factor: 1.0,
            background_fill_setting: 0,
            background_fill_color: Color::by_layer(),
            fill_box_scale: 1.0,
            background_fill_color_transparency: 0,
            column_type: 0,
            column_count: 0,
            is_column_flow_reversed: false,
            is_column_auto_height: false,
            column_width: 0.0,
            column_gutter: 0.0,
            column_heights: vec![],
        }
    }
}

/// A `POLYLINE` entity; its vertices follow as child `VERTEX` entities
/// terminated by a `SEQEND`.
#[derive(Clone, Debug)]
pub struct Polyline {
    #[doc(hidden)]
    pub __contains_vertices: bool,
    pub location: Point,
    pub thickness: f64,
    pub flags: i16,
    pub default_starting_width: f64,
    pub default_ending_width: f64,
    pub polygon_mesh_m_vertex_count: i16,
    pub polygon_mesh_n_vertex_count: i16,
    pub smooth_surface_m_density: i16,
    pub smooth_surface_n_density: i16,
    pub surface_type: PolylineCurvedAndSmoothSurfaceType,
    pub normal: Vector,
    #[doc(hidden)]
    pub __vertices_and_handles: Vec<(Vertex, Handle)>,
    #[doc(hidden)]
    pub __seqend_handle: Handle,
}

impl Default for Polyline {
    fn default() -> Self {
        Polyline {
            __contains_vertices: true,
            location: Point::origin(),
            thickness: 0.0,
            flags: 0,
            default_starting_width: 0.0,
            default_ending_width: 0.0,
            polygon_mesh_m_vertex_count: 0,
            polygon_mesh_n_vertex_count: 0,
            smooth_surface_m_density: 0,
            smooth_surface_n_density: 0,
            surface_type: PolylineCurvedAndSmoothSurfaceType::None,
            normal: Vector::z_axis(),
            __vertices_and_handles: vec![],
            __seqend_handle: Handle::empty(),
        }
    }
}

impl Polyline {
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn is_3d_polyline(&self) -> bool {
        self.flags & 8 != 0
    }
}

/// A `RAY` entity: a half-infinite line.
#[derive(Clone, Debug)]
pub struct Ray {
    pub point: Point,
    pub direction_vector: Vector,
}

impl Default for Ray {
    fn default() -> Self {
        Ray {
            point: Point::origin(),
            direction_vector: Vector::x_axis(),
        }
    }
}

/// A `REGION` entity: opaque modeler geometry.
#[derive(Clone, Debug)]
pub struct Region {
    pub format_version: i16,
    pub proprietary_data: Vec<String>,
    pub additional_proprietary_data: Vec<String>,
}

impl Default for Region {
    fn default() -> Self {
        Region {
            format_version: 1,
            proprietary_data: vec![],
            additional_proprietary_data: vec![],
        }
    }
}

/// A `SEQEND` entity: the terminator of a vertex or attribute run.
#[derive(Clone, Debug, Default)]
pub struct Seqend;

/// A `SHAPE` entity.
#[derive(Clone, Debug)]
pub struct Shape {
    pub thickness: f64,
    pub location: Point,
    pub size: f64,
    pub name: String,
    pub rotation_angle: f64,
    pub relative_x_scale_factor: f64,
    pub oblique_angle: f64,
    pub normal: Vector,
}

impl Default for Shape {
    fn default() -> Self {
        Shape {
            thickness: 0.0,
            location: Point::origin(),
            size: 0.0,
            name: String::new(),
            rotation_angle: 0.0,
            relative_x_scale_factor: 1.0,
            oblique_angle: 0.0,
            normal: Vector::z_axis(),
        }
    }
}

/// A `SOLID` entity: a filled quadrilateral.
#[derive(Clone, Debug)]
pub struct Solid {
    pub first_corner: Point,
    pub second_corner: Point,
    pub third_corner: Point,
    pub fourth_corner: Point,
    pub thickness: f64,
    pub normal: Vector,
}

impl Default for Solid {
    fn default() -> Self {
        Solid {
            first_corner: Point::origin(),
            second_corner: Point::origin(),
            third_corner: Point::origin(),
            fourth_corner: Point::origin(),
            thickness: 0.0,
            normal: Vector::z_axis(),
        }
    }
}

impl Solid {
    pub fn new(
        first_corner: Point,
        second_corner: Point,
        third_corner: Point,
        fourth_corner: Point,
    ) -> Self {
        Solid {
            first_corner,
            second_corner,
            third_corner,
            fourth_corner,
            ..Default::default()
        }
    }
}

/// A `SPLINE` entity: a NURBS curve.
#[derive(Clone, Debug)]
pub struct Spline {
    pub normal: Vector,
    pub flags: i16,
    pub degree_of_curve: i16,
    pub knot_tolerance: f64,
    pub control_point_tolerance: f64,
    pub fit_tolerance: f64,
    pub start_tangent: Point,
    pub end_tangent: Point,
    pub knot_values: Vec<f64>,
    pub weights: Vec<f64>,
    pub control_points: Vec<Point>,
    pub fit_points: Vec<Point>,
    #[doc(hidden)]
    pub __control_point_x: Vec<f64>,
    #[doc(hidden)]
    pub __control_point_y: Vec<f64>,
    #[doc(hidden)]
    pub __control_point_z: Vec<f64>,
    #[doc(hidden)]
    pub __fit_point_x: Vec<f64>,
    #[doc(hidden)]
    pub __fit_point_y: Vec<f64>,
    #[doc(hidden)]
    pub __fit_point_z: Vec<f64>,
}

impl Default for Spline {
    fn default() -> Self {
        Spline {
            normal: Vector::z_axis(),
            flags: 0,
            degree_of_curve: 1,
            knot_tolerance: 0.000_000_1,
            control_point_tolerance: 0.000_000_1,
            fit_tolerance: 0.000_000_000_1,
            start_tangent: Point::origin(),
            end_tangent: Point::origin(),
            knot_values: vec![],
            weights: vec![],
            control_points: vec![],
            fit_points: vec![],
            __control_point_x: vec![],
            __control_point_y: vec![],
            __control_point_z: vec![],
            __fit_point_x: vec![],
            __fit_point_y: vec![],
            __fit_point_z: vec![],
        }
    }
}

impl Spline {
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn is_rational(&self) -> bool {
        self.flags & 4 != 0
    }
}

/// A `TEXT` entity: single-line text.
#[derive(Clone, Debug)]
pub struct Text {
    pub thickness: f64,
    pub location: Point,
    pub text_height: f64,
    pub value: String,
    pub rotation: f64,
    pub relative_x_scale_factor: f64,
    pub oblique_angle: f64,
    pub text_style_name: String,
    pub text_generation_flags: i16,
    pub horizontal_text_justification: HorizontalTextJustification,
    pub second_alignment_point: Point,
    pub normal: Vector,
    pub vertical_text_justification: VerticalTextJustification,
}

impl Default for Text {
    fn default() -> Self {
        Text {
            thickness: 0.0,
            location: Point::origin(),
            text_height: 1.0,
            value: String::new(),
            rotation: 0.0,
            relative_x_scale_factor: 1.0,
            oblique_angle: 0.0,
            text_style_name: String::from("STANDARD"),
            text_generation_flags: 0,
            horizontal_text_justification: HorizontalTextJustification::Left,
            second_alignment_point: Point::origin(),
            normal: Vector::z_axis(),
            vertical_text_justification: VerticalTextJustification::Baseline,
        }
    }
}

/// A `TOLERANCE` entity: a feature control frame.
#[derive(Clone, Debug)]
pub struct Tolerance {
    pub dimension_style_name: String,
    pub insertion_point: Point,
    pub display_text: String,
    pub normal: Vector,
    pub direction_vector: Vector,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            dimension_style_name: String::from("STANDARD"),
            insertion_point: Point::origin(),
            display_text: String::new(),
            normal: Vector::z_axis(),
            direction_vector: Vector::x_axis(),
        }
    }
}

/// A `TRACE` entity.
#[derive(Clone, Debug)]
pub struct Trace {
    pub first_corner: Point,
    pub second_corner: Point,
    pub third_corner: Point,
    pub fourth_corner: Point,
    pub thickness: f64,
    pub normal: Vector,
}

impl Default for Trace {
    fn default() -> Self {
        Trace {
            first_corner: Point::origin(),
            second_corner: Point::origin(),
            third_corner: Point::origin(),
            fourth_corner: Point::origin(),
            thickness: 0.0,
            normal: Vector::z_axis(),
        }
    }
}

impl Trace {
    pub fn new(
        first_corner: Point,
        second_corner: Point,
        third_corner: Point,
        fourth_corner: Point,
    ) -> Self {
        Trace {
            first_corner,
            second_corner,
            third_corner,
            fourth_corner,
            ..Default::default()
        }
    }
}

/// A `VERTEX` entity, a child of `POLYLINE`.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub location: Point,
    pub starting_width: f64,
    pub ending_width: f64,
    pub bulge: f64,
    pub flags: i16,
    pub curve_fit_tangent_direction: f64,
    pub polyface_mesh_vertex_index1: i16,
    pub polyface_mesh_vertex_index2: i16,
    pub polyface_mesh_vertex_index3: i16,
    pub polyface_mesh_vertex_index4: i16,
    pub identifier: i32,
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            location: Point::origin(),
            starting_width: 0.0,
            ending_width: 0.0,
            bulge: 0.0,
            flags: 0,
            curve_fit_tangent_direction: 0.0,
            polyface_mesh_vertex_index1: 0,
            polyface_mesh_vertex_index2: 0,
            polyface_mesh_vertex_index3: 0,
            polyface_mesh_vertex_index4: 0,
            identifier: 0,
        }
    }
}

impl Vertex {
    pub fn new(location: Point) -> Self {
        Vertex {
            location,
            ..Default::default()
        }
    }
}

/// A `WIPEOUT` entity: a masking frame.
#[derive(Clone, Debug)]
pub struct Wipeout {
    pub class_version: i32,
    pub location: Point,
    pub u_vector: Vector,
    pub v_vector: Vector,
    pub image_size: Vector,
    pub display_options_flags: i16,
    pub is_clipping_enabled: bool,
    pub brightness: i16,
    pub contrast: i16,
    pub fade: i16,
    pub clipping_type: i16,
    pub clipping_vertices: Vec<Point>,
    #[doc(hidden)]
    pub __clipping_vertices_x: Vec<f64>,
    #[doc(hidden)]
    pub __clipping_vertices_y: Vec<f64>,
}

impl Default for Wipeout {
    fn default() -> Self {
        Wipeout {
            class_version: 0,
            location: Point::origin(),
            u_vector: Vector::x_axis(),
            v_vector: Vector::y_axis(),
            image_size: Vector::zero(),
            display_options_flags: 0,
            is_clipping_enabled: true,
            brightness: 50,
            contrast: 50,
            fade: 0,
            clipping_type: 1,
            clipping_vertices: vec![],
            __clipping_vertices_x: vec![],
            __clipping_vertices_y: vec![],
        }
    }
}

/// An `XLINE` entity: an infinite line.
#[derive(Clone, Debug)]
pub struct XLine {
    pub first_point: Point,
    pub unit_direction_vector: Vector,
}

impl Default for XLine {
    fn default() -> Self {
        XLine {
            first_point: Point::origin(),
            unit_direction_vector: Vector::x_axis(),
        }
    }
}

//------------------------------------------------------------------------------
//                                                                   EntityType
//------------------------------------------------------------------------------

/// The tagged variant over every supported entity kind.
#[derive(Clone, Debug)]
pub enum EntityType {
    Arc(Arc),
    Attribute(Attribute),
    AttributeDefinition(AttributeDefinition),
    Circle(Circle),
    RotatedDimension(RotatedDimension),
    RadialDimension(RadialDimension),
    DiameterDimension(DiameterDimension),
    AngularThreePointDimension(AngularThreePointDimension),
    OrdinateDimension(OrdinateDimension),
    Ellipse(Ellipse),
    Face3D(Face3D),
    Hatch(Hatch),
    Insert(Insert),
    Leader(Leader),
    Line(Line),
    LwPolyline(LwPolyline),
    MLine(MLine),
    ModelPoint(ModelPoint),
    MText(MText),
    Polyline(Polyline),
    Ray(Ray),
    Region(Region),
    Seqend(Seqend),
    Shape(Shape),
    Solid(Solid),
    Spline(Spline),
    Text(Text),
    Tolerance(Tolerance),
    Trace(Trace),
    Vertex(Vertex),
    Wipeout(Wipeout),
    XLine(XLine),
}

impl EntityType {
    /// Resolves a `0/<kind>` type string to a default-constructed body;
    /// `None` for kinds the codec doesn't know (`DIMENSION` is resolved by
    /// its subclass marker instead).
    pub(crate) fn from_type_string(type_string: &str) -> Option<EntityType> {
        match type_string {
            "ARC" => Some(EntityType::Arc(Default::default())),
            "ATTRIB" => Some(EntityType::Attribute(Default::default())),
            "ATTDEF" => Some(EntityType::AttributeDefinition(Default::default())),
            "CIRCLE" => Some(EntityType::Circle(Default::default())),
            "ELLIPSE" => Some(EntityType::Ellipse(Default::default())),
            "3DFACE" => Some(EntityType::Face3D(Default::default())),
            "HATCH" => Some(EntityType::Hatch(Default::default())),
            "INSERT" => Some(EntityType::Insert(Default::default())),
            "LEADER" => Some(EntityType::Leader(Default::default())),
            "LINE" => Some(EntityType::Line(Default::default())),
            "LWPOLYLINE" => Some(EntityType::LwPolyline(Default::default())),
            "MLINE" => Some(EntityType::MLine(Default::default())),
            "POINT" => Some(EntityType::ModelPoint(Default::default())),
            "MTEXT" => Some(EntityType::MText(Default::default())),
            "POLYLINE" => Some(EntityType::Polyline(Default::default())),
            "RAY" => Some(EntityType::Ray(Default::default())),
            "REGION" => Some(EntityType::Region(Default::default())),
            "SEQEND" => Some(EntityType::Seqend(Default::default())),
            "SHAPE" => Some(EntityType::Shape(Default::default())),
            "SOLID" => Some(EntityType::Solid(Default::default())),
            "SPLINE" => Some(EntityType::Spline(Default::default())),
            "TEXT" => Some(EntityType::Text(Default::default())),
            "TOLERANCE" => Some(EntityType::Tolerance(Default::default())),
            "TRACE" => Some(EntityType::Trace(Default::default())),
            "VERTEX" => Some(EntityType::Vertex(Default::default())),
            "WIPEOUT" => Some(EntityType::Wipeout(Default::default())),
            "XLINE" => Some(EntityType::XLine(Default::default())),
            _ => None,
        }
    }
    /// The `0/<kind>` string this body is framed with on the wire.
    pub fn to_type_string(&self) -> &'static str {
        match self {
            EntityType::Arc(_) => "ARC",
            EntityType::Attribute(_) => "ATTRIB",
            EntityType::AttributeDefinition(_) => "ATTDEF",
            EntityType::Circle(_) => "CIRCLE",
            EntityType::RotatedDimension(_)
            | EntityType::RadialDimension(_)
            | EntityType::DiameterDimension(_)
            | EntityType::AngularThreePointDimension(_)
            | EntityType::OrdinateDimension(_) => "DIMENSION",
            EntityType::Ellipse(_) => "ELLIPSE",
            EntityType::Face3D(_) => "3DFACE",
            EntityType::Hatch(_) => "HATCH",
            EntityType::Insert(_) => "INSERT",
            EntityType::Leader(_) => "LEADER",
            EntityType::Line(_) => "LINE",
            EntityType::LwPolyline(_) => "LWPOLYLINE",
            EntityType::MLine(_) => "MLINE",
            EntityType::ModelPoint(_) => "POINT",
            EntityType::MText(_) => "MTEXT",
            EntityType::Polyline(_) => "POLYLINE",
            EntityType::Ray(_) => "RAY",
            EntityType::Region(_) => "REGION",
            EntityType::Seqend(_) => "SEQEND",
            EntityType::Shape(_) => "SHAPE",
            EntityType::Solid(_) => "SOLID",
            EntityType::Spline(_) => "SPLINE",
            EntityType::Text(_) => "TEXT",
            EntityType::Tolerance(_) => "TOLERANCE",
            EntityType::Trace(_) => "TRACE",
            EntityType::Vertex(_) => "VERTEX",
            EntityType::Wipeout(_) => "WIPEOUT",
            EntityType::XLine(_) => "XLINE",
        }
    }
    /// The oldest version whose schema carries this kind; older targets
    /// suppress the entity entirely on write.
    pub(crate) fn min_version(&self) -> AcadVersion {
        match self {
            EntityType::Ellipse(_)
            | EntityType::Leader(_)
            | EntityType::MLine(_)
            | EntityType::MText(_)
            | EntityType::Ray(_)
            | EntityType::Region(_)
            | EntityType::Spline(_)
            | EntityType::Tolerance(_)
            | EntityType::XLine(_) => AcadVersion::R13,
            EntityType::Hatch(_) | EntityType::LwPolyline(_) => AcadVersion::R14,
            EntityType::Wipeout(_) => AcadVersion::R2000,
            _ => AcadVersion::R9,
        }
    }
    /// One default-constructed instance of every kind, in declaration
    /// order.  This is the compile-time registry used by enumeration
    /// tests in place of runtime type discovery.
    pub fn all_default() -> Vec<EntityType> {
        vec![
            EntityType::Arc(Default::default()),
            EntityType::Attribute(Default::default()),
            EntityType::AttributeDefinition(Default::default()),
            EntityType::Circle(Default::default()),
            EntityType::RotatedDimension(Default::default()),
            EntityType::RadialDimension(Default::default()),
            EntityType::DiameterDimension(Default::default()),
            EntityType::AngularThreePointDimension(Default::default()),
            EntityType::OrdinateDimension(Default::default()),
            EntityType::Ellipse(Default::default()),
            EntityType::Face3D(Default::default()),
            EntityType::Hatch(Default::default()),
            EntityType::Insert(Default::default()),
            EntityType::Leader(Default::default()),
            EntityType::Line(Default::default()),
            EntityType::LwPolyline(Default::default()),
            EntityType::MLine(Default::default()),
            EntityType::ModelPoint(Default::default()),
            EntityType::MText(Default::default()),
            EntityType::Polyline(Default::default()),
            EntityType::Ray(Default::default()),
            EntityType::Region(Default::default()),
            EntityType::Seqend(Default::default()),
            EntityType::Shape(Default::default()),
            EntityType::Solid(Default::default()),
            EntityType::Spline(Default::default()),
            EntityType::Text(Default::default()),
            EntityType::Tolerance(Default::default()),
            EntityType::Trace(Default::default()),
            EntityType::Vertex(Default::default()),
            EntityType::Wipeout(Default::default()),
            EntityType::XLine(Default::default()),
        ]
    }
}

//------------------------------------------------------------------------------
//                                                                  convenience
//------------------------------------------------------------------------------

impl Insert {
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.__attributes_and_handles.iter().map(|a| &a.0)
    }
    pub fn attributes_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
        self.__attributes_and_handles.iter_mut().map(|a| &mut a.0)
    }
}

impl Polyline {
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.__vertices_and_handles.iter().map(|v| &v.0)
    }
    pub fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex> {
        self.__vertices_and_handles.iter_mut().map(|v| &mut v.0)
    }
}
