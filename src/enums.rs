use crate::error::{DxfError, DxfResult};

/// The AutoCAD releases the codec can read and write.
///
/// `PartialOrd` ordering follows release order, which is what every
/// version-gated emission decision compares against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AcadVersion {
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R2000,
    R2004,
    R2007,
    R2010,
    R2013,
}

impl AcadVersion {
    /// Parses a `$ACADVER` value.  Database version strings newer than
    /// R2013 are accepted and read as R2013; anything unrecognized is an
    /// error.
    pub fn from_version_string(val: &str) -> DxfResult<AcadVersion> {
        match val {
            "AC1004" => Ok(AcadVersion::R9),
            "AC1006" => Ok(AcadVersion::R10),
            "AC1009" => Ok(AcadVersion::R12),
            "AC1011" | "AC1012" => Ok(AcadVersion::R13),
            "AC1014" | "14" | "14.01" => Ok(AcadVersion::R14),
            "AC1015" | "15.0" | "15.05" | "15.06" => Ok(AcadVersion::R2000),
            "AC1018" | "16.0" | "16.1" | "16.2" => Ok(AcadVersion::R2004),
            "AC1021" | "17.0" | "17.1" | "17.2" => Ok(AcadVersion::R2007),
            "AC1024" | "18.0" | "18.1" | "18.2" => Ok(AcadVersion::R2010),
            "AC1027" | "19.0" | "19.1" | "19.2" | "19.3" => Ok(AcadVersion::R2013),
            // permissive policy: newer database versions load as R2013
            "AC1032" | "AC1035" => Ok(AcadVersion::R2013),
            _ => Err(DxfError::UnknownVersion(val.to_string())),
        }
    }
    pub fn as_version_string(&self) -> &'static str {
        match self {
            AcadVersion::R9 => "AC1004",
            AcadVersion::R10 => "AC1006",
            AcadVersion::R11 | AcadVersion::R12 => "AC1009",
            AcadVersion::R13 => "AC1012",
            AcadVersion::R14 => "AC1014",
            AcadVersion::R2000 => "AC1015",
            AcadVersion::R2004 => "AC1018",
            AcadVersion::R2007 => "AC1021",
            AcadVersion::R2010 => "AC1024",
            AcadVersion::R2013 => "AC1027",
        }
    }
}

enum_from_primitive! {
/// The direction in which angles increase, `$ANGDIR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleDirection {
    CounterClockwise = 0,
    Clockwise = 1,
}
}

enum_from_primitive! {
/// Attribute visibility, `$ATTMODE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeVisibility {
    None = 0,
    Normal = 1,
    All = 2,
}
}

enum_from_primitive! {
/// Drawing measurement base, `$MEASUREMENT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawingUnits {
    English = 0,
    Metric = 1,
}
}

enum_from_primitive! {
/// Linear unit display format, `$LUNITS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitFormat {
    Scientific = 1,
    Decimal = 2,
    Engineering = 3,
    Architectural = 4,
    Fractional = 5,
}
}

enum_from_primitive! {
/// Angular unit display format, `$AUNITS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleFormat {
    DecimalDegrees = 0,
    DegreesMinutesSeconds = 1,
    Gradians = 2,
    Radians = 3,
    SurveyorsUnits = 4,
}
}

enum_from_primitive! {
/// Default drawing unit for inserted content, `$INSUNITS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Unitless = 0,
    Inches = 1,
    Feet = 2,
    Miles = 3,
    Millimeters = 4,
    Centimeters = 5,
    Meters = 6,
    Kilometers = 7,
    Microinches = 8,
    Mils = 9,
    Yards = 10,
    Angstroms = 11,
    Nanometers = 12,
    Microns = 13,
    Decimeters = 14,
    Decameters = 15,
    Hectometers = 16,
    Gigameters = 17,
    AstronomicalUnits = 18,
    LightYears = 19,
    Parsecs = 20,
}
}

enum_from_primitive! {
/// Justification of multiline (MLINE) content, `$CMLJUST`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MLineJustification {
    Top = 0,
    Zero = 1,
    Bottom = 2,
}
}

enum_from_primitive! {
/// Horizontal text justification, code 72 on text-like entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalTextJustification {
    Left = 0,
    Center = 1,
    Right = 2,
    Aligned = 3,
    Middle = 4,
    Fit = 5,
}
}

enum_from_primitive! {
/// Vertical text justification, code 73/74 on text-like entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalTextJustification {
    Baseline = 0,
    Bottom = 1,
    Middle = 2,
    Top = 3,
}
}

enum_from_primitive! {
/// Where dimension/MTEXT content attaches, code 71.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentPoint {
    TopLeft = 1,
    TopCenter = 2,
    TopRight = 3,
    MiddleLeft = 4,
    MiddleCenter = 5,
    MiddleRight = 6,
    BottomLeft = 7,
    BottomCenter = 8,
    BottomRight = 9,
}
}

enum_from_primitive! {
/// MTEXT line spacing style, code 72/73.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextLineSpacingStyle {
    AtLeast = 1,
    Exact = 2,
}
}

enum_from_primitive! {
/// MTEXT drawing direction, code 72.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawingDirection {
    LeftToRight = 1,
    TopToBottom = 3,
    ByStyle = 5,
}
}

enum_from_primitive! {
/// The kind of a DIMENSION entity, packed into the lower bits of code 70.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionType {
    RotatedHorizontalOrVertical = 0,
    Aligned = 1,
    Angular = 2,
    Diameter = 3,
    Radius = 4,
    AngularThreePoint = 5,
    Ordinate = 6,
}
}

enum_from_primitive! {
/// Multiline-attribute flag, ATTRIB/ATTDEF extended data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MTextFlag {
    MultilineAttribute = 2,
    ConstantMultilineAttributeDefinition = 4,
}
}

enum_from_primitive! {
/// Entity schema version, code 280 on R2010+ records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityVersion {
    R2010 = 0,
}
}

enum_from_primitive! {
/// Shadow behavior of an entity, code 284 at R2007+.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowMode {
    CastsAndReceives = 0,
    Casts = 1,
    Receives = 2,
    Ignores = 3,
}
}

enum_from_primitive! {
/// Hatch island detection style, code 75.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HatchStyle {
    OddParity = 0,
    Outermost = 1,
    EntireArea = 2,
}
}

enum_from_primitive! {
/// Hatch pattern fill type, code 76.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HatchPatternType {
    UserDefined = 0,
    Predefined = 1,
    Custom = 2,
}
}

enum_from_primitive! {
/// Polyline curve/smoothing kind, code 75.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolylineCurvedAndSmoothSurfaceType {
    None = 0,
    QuadraticBSpline = 5,
    CubicBSpline = 6,
    Bezier = 8,
}
}

enum_from_primitive! {
/// How a DICTIONARY treats duplicate keys, code 281.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictionaryDuplicateRecordHandling {
    NotApplicable = 0,
    KeepExisting = 1,
    UseClone = 2,
    UpdateXrefAndName = 3,
    UpdateName = 4,
}
}

impl Default for DictionaryDuplicateRecordHandling {
    fn default() -> Self {
        DictionaryDuplicateRecordHandling::NotApplicable
    }
}

enum_from_primitive! {
/// Units of an IMAGEDEF resolution, code 281.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageResolutionUnits {
    NoUnits = 0,
    Centimeters = 2,
    Inches = 5,
}
}

enum_from_primitive! {
/// Leader path type, code 72.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderPathType {
    StraightLineSegments = 0,
    Spline = 1,
}
}

enum_from_primitive! {
/// What a LEADER annotates, code 73.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderCreationAnnotationType {
    TextAnnotation = 0,
    ToleranceAnnotation = 1,
    BlockReferenceAnnotation = 2,
    NoAnnotation = 3,
}
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_primitive::FromPrimitive;

    #[test]
    fn version_strings_round_trip() {
        assert_eq!(
            AcadVersion::R2013,
            AcadVersion::from_version_string("AC1027").unwrap()
        );
        assert_eq!("AC1027", AcadVersion::R2013.as_version_string());
        // R11 and R12 share a database version
        assert_eq!("AC1009", AcadVersion::R11.as_version_string());
        assert_eq!(
            AcadVersion::R12,
            AcadVersion::from_version_string("AC1009").unwrap()
        );
    }

    #[test]
    fn newer_versions_are_clamped() {
        assert_eq!(
            AcadVersion::R2013,
            AcadVersion::from_version_string("AC1032").unwrap()
        );
    }

    #[test]
    fn unknown_versions_are_rejected() {
        assert!(AcadVersion::from_version_string("AC9999").is_err());
    }

    #[test]
    fn versions_are_ordered_by_release() {
        assert!(AcadVersion::R12 < AcadVersion::R13);
        assert!(AcadVersion::R2000 < AcadVersion::R2013);
    }

    #[test]
    fn enums_convert_from_shorts() {
        assert_eq!(Some(UnitFormat::Architectural), UnitFormat::from_i16(4));
        assert_eq!(None, UnitFormat::from_i16(99));
    }
}
