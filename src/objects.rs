//! The non-graphical record kinds of the OBJECTS section.
//!
//! Every object is an [`ObjectCommon`] frame plus one [`ObjectType`] body;
//! the codec for both lives in `object.rs`.

use crate::color::Color;
use crate::enums::*;
use crate::extension_data::ExtensionGroup;
use crate::handle::Handle;
use crate::x_data::XData;
use crate::{CodePair, Point, Vector};

/// The fields shared by every object kind.
#[derive(Clone, Debug, Default)]
pub struct ObjectCommon {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

/// A non-graphical record: the shared frame plus the kind-specific body.
#[derive(Clone, Debug)]
pub struct Object {
    pub common: ObjectCommon,
    pub specific: ObjectType,
}

/// A `DICTIONARY` object: an ordered, keyed mapping of handles.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    pub is_hard_owner: bool,
    pub duplicate_record_handling: DictionaryDuplicateRecordHandling,
    /// The `(3/<key>, 350/<handle>)` entries in file order; duplicate keys
    /// are preserved and the last one wins in lookups.
    pub entries: Vec<(String, Handle)>,
}

impl Dictionary {
    /// The handle bound to `key`; with duplicate keys the last binding
    /// wins.
    pub fn value_of(&self, key: &str) -> Option<Handle> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, handle)| *handle)
    }
}

/// A `DICTIONARYVAR` object.
#[derive(Clone, Debug, Default)]
pub struct DictionaryVariable {
    pub object_schema_number: i16,
    pub value: String,
}

/// A `GROUP` object: a named selection of entities.
#[derive(Clone, Debug)]
pub struct Group {
    pub description: String,
    pub is_unnamed: bool,
    pub is_selectable: bool,
    pub entity_handles: Vec<Handle>,
}

impl Default for Group {
    fn default() -> Self {
        Group {
            description: String::new(),
            is_unnamed: false,
            is_selectable: true,
            entity_handles: vec![],
        }
    }
}

/// An `IMAGEDEF` object: the definition of a referenced raster image.
#[derive(Clone, Debug)]
pub struct ImageDefinition {
    pub class_version: i32,
    pub file_name: String,
    /// Image size in pixels.
    pub image_size: Vector,
    /// Default size of one pixel in drawing units.
    pub pixel_size: Vector,
    pub is_image_loaded: bool,
    pub resolution_units: ImageResolutionUnits,
}

impl Default for ImageDefinition {
    fn default() -> Self {
        ImageDefinition {
            class_version: 0,
            file_name: String::new(),
            image_size: Vector::zero(),
            pixel_size: Vector::new(1.0, 1.0, 0.0),
            is_image_loaded: true,
            resolution_units: ImageResolutionUnits::NoUnits,
        }
    }
}

/// A `LAYOUT` object: a paperspace layout over its plot settings.
#[derive(Clone, Debug)]
pub struct Layout {
    pub plot_settings: PlotSettings,
    pub name: String,
    pub flags: i16,
    pub tab_order: i16,
    pub minimum_limits: Point,
    pub maximum_limits: Point,
    pub insertion_base: Point,
    pub minimum_extents: Point,
    pub maximum_extents: Point,
    pub elevation: f64,
    pub ucs_origin: Point,
    pub ucs_x_axis: Vector,
    pub ucs_y_axis: Vector,
    pub ucs_orthographic_type: i16,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            plot_settings: PlotSettings::default(),
            name: String::new(),
            flags: 0,
            tab_order: 0,
            minimum_limits: Point::origin(),
            maximum_limits: Point::new(12.0, 9.0, 0.0),
            insertion_base: Point::origin(),
            minimum_extents: Point::origin(),
            maximum_extents: Point::origin(),
            elevation: 0.0,
            ucs_origin: Point::origin(),
            ucs_x_axis: Vector::x_axis(),
            ucs_y_axis: Vector::y_axis(),
            ucs_orthographic_type: 0,
        }
    }
}

/// One element of an `MLINESTYLE`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MLineStyleElement {
    pub offset: f64,
    pub color: Color,
    pub line_type_name: String,
}

/// An `MLINESTYLE` object.
#[derive(Clone, Debug)]
pub struct MLineStyle {
    pub style_name: String,
    pub flags: i16,
    pub description: String,
    pub fill_color: Color,
    pub start_angle: f64,
    pub end_angle: f64,
    pub elements: Vec<MLineStyleElement>,
}

impl Default for MLineStyle {
    fn default() -> Self {
        MLineStyle {
            style_name: String::new(),
            flags: 0,
            description: String::new(),
            fill_color: Color::by_layer(),
            start_angle: 90.0,
            end_angle: 90.0,
            elements: vec![],
        }
    }
}

/// An `ACDBPLACEHOLDER` object.
#[derive(Clone, Debug, Default)]
pub struct PlaceHolder;

/// A `PLOTSETTINGS` object.
#[derive(Clone, Debug)]
pub struct PlotSettings {
    pub page_setup_name: String,
    pub printer_name: String,
    pub paper_size: String,
    pub plot_view_name: String,
    pub left_margin: f64,
    pub bottom_margin: f64,
    pub right_margin: f64,
    pub top_margin: f64,
    pub paper_width: f64,
    pub paper_height: f64,
    pub plot_origin_x: f64,
    pub plot_origin_y: f64,
    pub plot_window_x1: f64,
    pub plot_window_y1: f64,
    pub plot_window_x2: f64,
    pub plot_window_y2: f64,
    pub custom_scale_numerator: f64,
    pub custom_scale_denominator: f64,
    pub flags: i16,
    pub paper_units: i16,
    pub rotation: i16,
    pub plot_type: i16,
    pub current_style_sheet: String,
    pub standard_scale_type: i16,
    pub standard_scale_factor: f64,
    pub paper_image_origin_x: f64,
    pub paper_image_origin_y: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            page_setup_name: String::new(),
            printer_name: String::new(),
            paper_size: String::new(),
            plot_view_name: String::new(),
            left_margin: 0.0,
            bottom_margin: 0.0,
            right_margin: 0.0,
            top_margin: 0.0,
            paper_width: 0.0,
            paper_height: 0.0,
            plot_origin_x: 0.0,
            plot_origin_y: 0.0,
            plot_window_x1: 0.0,
            plot_window_y1: 0.0,
            plot_window_x2: 0.0,
            plot_window_y2: 0.0,
            custom_scale_numerator: 1.0,
            custom_scale_denominator: 1.0,
            flags: 0,
            paper_units: 0,
            rotation: 0,
            plot_type: 0,
            current_style_sheet: String::new(),
            standard_scale_type: 0,
            standard_scale_factor: 1.0,
            paper_image_origin_x: 0.0,
            paper_image_origin_y: 0.0,
        }
    }
}

/// A `SORTENTSTABLE` object: entity draw-order overrides.
#[derive(Clone, Debug, Default)]
pub struct SortentsTable {
    pub entity_handles: Vec<Handle>,
    pub sort_handles: Vec<Handle>,
}

/// An `XRECORD` object: an arbitrary pair list preserved verbatim.
#[derive(Clone, Debug, Default)]
pub struct XRecord {
    pub duplicate_record_handling: DictionaryDuplicateRecordHandling,
    pub data_pairs: Vec<CodePair>,
}

/// The tagged variant over every supported object kind.
#[derive(Clone, Debug)]
pub enum ObjectType {
    Dictionary(Dictionary),
    DictionaryVariable(DictionaryVariable),
    Group(Group),
    ImageDefinition(ImageDefinition),
    Layout(Layout),
    MLineStyle(MLineStyle),
    PlaceHolder(PlaceHolder),
    PlotSettings(PlotSettings),
    SortentsTable(SortentsTable),
    XRecord(XRecord),
}

impl ObjectType {
    pub(crate) fn from_type_string(type_string: &str) -> Option<ObjectType> {
        match type_string {
            "DICTIONARY" => Some(ObjectType::Dictionary(Default::default())),
            "DICTIONARYVAR" => Some(ObjectType::DictionaryVariable(Default::default())),
            "GROUP" => Some(ObjectType::Group(Default::default())),
            "IMAGEDEF" => Some(ObjectType::ImageDefinition(Default::default())),
            "LAYOUT" => Some(ObjectType::Layout(Default::default())),
            "MLINESTYLE" => Some(ObjectType::MLineStyle(Default::default())),
            "ACDBPLACEHOLDER" => Some(ObjectType::PlaceHolder(Default::default())),
            "PLOTSETTINGS" => Some(ObjectType::PlotSettings(Default::default())),
            "SORTENTSTABLE" => Some(ObjectType::SortentsTable(Default::default())),
            "XRECORD" => Some(ObjectType::XRecord(Default::default())),
            _ => None,
        }
    }
    pub fn to_type_string(&self) -> &'static str {
        match self {
            ObjectType::Dictionary(_) => "DICTIONARY",
            ObjectType::DictionaryVariable(_) => "DICTIONARYVAR",
            ObjectType::Group(_) => "GROUP",
            ObjectType::ImageDefinition(_) => "IMAGEDEF",
            ObjectType::Layout(_) => "LAYOUT",
            ObjectType::MLineStyle(_) => "MLINESTYLE",
            ObjectType::PlaceHolder(_) => "ACDBPLACEHOLDER",
            ObjectType::PlotSettings(_) => "PLOTSETTINGS",
            ObjectType::SortentsTable(_) => "SORTENTSTABLE",
            ObjectType::XRecord(_) => "XRECORD",
        }
    }
    /// The oldest version whose schema carries this kind.
    pub(crate) fn min_version(&self) -> AcadVersion {
        match self {
            ObjectType::ImageDefinition(_) | ObjectType::SortentsTable(_) => AcadVersion::R14,
            ObjectType::Layout(_)
            | ObjectType::PlaceHolder(_)
            | ObjectType::PlotSettings(_)
            | ObjectType::DictionaryVariable(_) => AcadVersion::R2000,
            _ => AcadVersion::R13,
        }
    }
    /// One default-constructed instance of every kind, in declaration
    /// order.
    pub fn all_default() -> Vec<ObjectType> {
        vec![
            ObjectType::Dictionary(Default::default()),
            ObjectType::DictionaryVariable(Default::default()),
            ObjectType::Group(Default::default()),
            ObjectType::ImageDefinition(Default::default()),
            ObjectType::Layout(Default::default()),
            ObjectType::MLineStyle(Default::default()),
            ObjectType::PlaceHolder(Default::default()),
            ObjectType::PlotSettings(Default::default()),
            ObjectType::SortentsTable(Default::default()),
            ObjectType::XRecord(Default::default()),
        ]
    }
}
