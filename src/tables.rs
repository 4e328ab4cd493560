use std::io::{Read, Write};

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::color::Color;
use crate::enums::AcadVersion;
use crate::error::{DxfError, DxfResult};
use crate::extension_data;
use crate::extension_data::ExtensionGroup;
use crate::handle::Handle;
use crate::helpers::*;
use crate::line_weight::LineWeight;
use crate::x_data;
use crate::x_data::XData;
use crate::{CodePair, Drawing, Point, Vector};

/// A record of one of the nine symbol tables.
///
/// Records share a frame (handle, owner, extension groups, XData, name,
/// flags) and differ in their kind-specific codes; the codes a record
/// accepts and emits are fixed per kind.
pub(crate) trait SymbolTableRecord: Default {
    /// The `0/<type>` string framing each record, which is also the
    /// table's name on code 2.
    fn record_type() -> &'static str;
    /// The code carrying the record handle; DIMSTYLE uses 105.
    fn handle_code() -> i32 {
        5
    }
    fn set_handle(&mut self, handle: Handle);
    fn set_owner_handle(&mut self, handle: Handle);
    fn add_extension_group(&mut self, group: ExtensionGroup);
    fn add_x_data(&mut self, x_data: XData);
    /// Applies a kind-specific pair; unknown codes are ignored.
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<()>;
}

macro_rules! record_frame_impl {
    ($typ:ident, $type_string:expr) => {
        impl SymbolTableRecord for $typ {
            fn record_type() -> &'static str {
                $type_string
            }
            fn set_handle(&mut self, handle: Handle) {
                self.handle = handle;
            }
            fn set_owner_handle(&mut self, handle: Handle) {
                self.__owner_handle = handle;
            }
            fn add_extension_group(&mut self, group: ExtensionGroup) {
                self.extension_data_groups.push(group);
            }
            fn add_x_data(&mut self, x_data: XData) {
                self.x_data.push(x_data);
            }
            fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<()> {
                self.apply(pair)
            }
        }
    };
}

//------------------------------------------------------------------------------
//                                                                         AppId
//------------------------------------------------------------------------------
/// An APPID table record: a registered application name.
#[derive(Clone, Debug)]
pub struct AppId {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for AppId {
    fn default() -> Self {
        AppId {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl AppId {
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbRegAppTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(AppId, "APPID");

//------------------------------------------------------------------------------
//                                                                   BlockRecord
//------------------------------------------------------------------------------
/// A BLOCK_RECORD table record (R13 and later).
#[derive(Clone, Debug)]
pub struct BlockRecord {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    /// Handle of the associated LAYOUT object.
    pub layout_handle: Handle,
    pub explodability: bool,
    pub scalability: bool,
    /// Raw preview bitmap bytes, accumulated from repeated 310 pairs.
    pub preview_data: Vec<u8>,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for BlockRecord {
    fn default() -> Self {
        BlockRecord {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            layout_handle: Handle::empty(),
            explodability: true,
            scalability: true,
            preview_data: vec![],
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl BlockRecord {
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            340 => self.layout_handle = pair.as_handle()?,
            280 => self.explodability = pair.assert_bool()?,
            281 => self.scalability = pair.assert_bool()?,
            310 => parse_hex_string(&pair.assert_string()?, &mut self.preview_data, pair.offset)?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbBlockTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        if version >= AcadVersion::R2000 && !self.layout_handle.is_empty() {
            writer.write_code_pair(&CodePair::new_string(
                340,
                &self.layout_handle.as_string(),
            ))?;
        }
        if version >= AcadVersion::R2007 {
            writer.write_code_pair(&CodePair::new_i16(280, as_i16(self.explodability)))?;
            writer.write_code_pair(&CodePair::new_i16(281, as_i16(self.scalability)))?;
            if !self.preview_data.is_empty() {
                for chunk in self.preview_data.chunks(128) {
                    let mut line = String::new();
                    for b in chunk {
                        line.push_str(&format!("{:02X}", b));
                    }
                    writer.write_code_pair(&CodePair::new_string(310, &line))?;
                }
            }
        }
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(BlockRecord, "BLOCK_RECORD");

//------------------------------------------------------------------------------
//                                                                      DimStyle
//------------------------------------------------------------------------------
/// A DIMSTYLE table record.  The handle lives on code 105 because codes
/// 5, 6, and 7 carry arrow block names in this table.
#[derive(Clone, Debug)]
pub struct DimStyle {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub dimensioning_suffix: String,
    pub alternate_dimensioning_suffix: String,
    pub arrow_block_name: String,
    pub first_arrow_block_name: String,
    pub second_arrow_block_name: String,
    pub dimensioning_scale_factor: f64,
    pub dimensioning_arrow_size: f64,
    pub dimension_extension_line_offset: f64,
    pub dimension_line_increment: f64,
    pub dimension_extension_line_extension: f64,
    pub dimension_distance_rounding_value: f64,
    pub dimension_line_extension: f64,
    pub dimension_plus_tolerance: f64,
    pub dimension_minus_tolerance: f64,
    pub dimensioning_text_height: f64,
    pub center_mark_size: f64,
    pub dimensioning_tick_size: f64,
    pub alternate_dimensioning_scale_factor: f64,
    pub dimension_linear_measurement_scale_factor: f64,
    pub dimension_vertical_text_position: f64,
    pub dimension_tolerance_display_scale_factor: f64,
    pub dimension_line_gap: f64,
    pub generate_dimension_tolerances: bool,
    pub generate_dimension_limits: bool,
    pub dimension_text_inside_horizontal: bool,
    pub dimension_text_outside_horizontal: bool,
    pub suppress_first_dimension_extension_line: bool,
    pub suppress_second_dimension_extension_line: bool,
    pub text_above_dimension_line: i16,
    pub dimension_unit_zero_suppression: i16,
    pub dimension_line_color: Color,
    pub dimension_extension_line_color: Color,
    pub dimension_text_color: Color,
    pub dimension_unit_tolerance_decimal_places: i16,
    pub dimension_text_style_handle: Handle,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for DimStyle {
    fn default() -> Self {
        DimStyle {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            dimensioning_suffix: String::new(),
            alternate_dimensioning_suffix: String::new(),
            arrow_block_name: String::new(),
            first_arrow_block_name: String::new(),
            second_arrow_block_name: String::new(),
            dimensioning_scale_factor: 1.0,
            dimensioning_arrow_size: 0.18,
            dimension_extension_line_offset: 0.0625,
            dimension_line_increment: 0.38,
            dimension_extension_line_extension: 0.18,
            dimension_distance_rounding_value: 0.0,
            dimension_line_extension: 0.0,
            dimension_plus_tolerance: 0.0,
            dimension_minus_tolerance: 0.0,
            dimensioning_text_height: 0.18,
            center_mark_size: 0.09,
            dimensioning_tick_size: 0.0,
            alternate_dimensioning_scale_factor: 25.4,
            dimension_linear_measurement_scale_factor: 1.0,
            dimension_vertical_text_position: 0.0,
            dimension_tolerance_display_scale_factor: 1.0,
            dimension_line_gap: 0.09,
            generate_dimension_tolerances: false,
            generate_dimension_limits: false,
            dimension_text_inside_horizontal: true,
            dimension_text_outside_horizontal: true,
            suppress_first_dimension_extension_line: false,
            suppress_second_dimension_extension_line: false,
            text_above_dimension_line: 0,
            dimension_unit_zero_suppression: 0,
            dimension_line_color: Color::by_block(),
            dimension_extension_line_color: Color::by_block(),
            dimension_text_color: Color::by_block(),
            dimension_unit_tolerance_decimal_places: 4,
            dimension_text_style_handle: Handle::empty(),
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl DimStyle {
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            3 => self.dimensioning_suffix = pair.assert_string()?,
            4 => self.alternate_dimensioning_suffix = pair.assert_string()?,
            5 => self.arrow_block_name = pair.assert_string()?,
            6 => self.first_arrow_block_name = pair.assert_string()?,
            7 => self.second_arrow_block_name = pair.assert_string()?,
            40 => self.dimensioning_scale_factor = pair.assert_f64()?,
            41 => self.dimensioning_arrow_size = pair.assert_f64()?,
            42 => self.dimension_extension_line_offset = pair.assert_f64()?,
            43 => self.dimension_line_increment = pair.assert_f64()?,
            44 => self.dimension_extension_line_extension = pair.assert_f64()?,
            45 => self.dimension_distance_rounding_value = pair.assert_f64()?,
            46 => self.dimension_line_extension = pair.assert_f64()?,
            47 => self.dimension_plus_tolerance = pair.assert_f64()?,
            48 => self.dimension_minus_tolerance = pair.assert_f64()?,
            140 => self.dimensioning_text_height = pair.assert_f64()?,
            141 => self.center_mark_size = pair.assert_f64()?,
            142 => self.dimensioning_tick_size = pair.assert_f64()?,
            143 => self.alternate_dimensioning_scale_factor = pair.assert_f64()?,
            144 => self.dimension_linear_measurement_scale_factor = pair.assert_f64()?,
            145 => self.dimension_vertical_text_position = pair.assert_f64()?,
            146 => self.dimension_tolerance_display_scale_factor = pair.assert_f64()?,
            147 => self.dimension_line_gap = pair.assert_f64()?,
            71 => self.generate_dimension_tolerances = pair.assert_bool()?,
            72 => self.generate_dimension_limits = pair.assert_bool()?,
            73 => self.dimension_text_inside_horizontal = pair.assert_bool()?,
            74 => self.dimension_text_outside_horizontal = pair.assert_bool()?,
            75 => self.suppress_first_dimension_extension_line = pair.assert_bool()?,
            76 => self.suppress_second_dimension_extension_line = pair.assert_bool()?,
            77 => self.text_above_dimension_line = pair.assert_i16()?,
            78 => self.dimension_unit_zero_suppression = pair.assert_i16()?,
            176 => self.dimension_line_color = Color::from_raw_value(pair.assert_i16()?),
            177 => self.dimension_extension_line_color = Color::from_raw_value(pair.assert_i16()?),
            178 => self.dimension_text_color = Color::from_raw_value(pair.assert_i16()?),
            271 => self.dimension_unit_tolerance_decimal_places = pair.assert_i16()?,
            340 => self.dimension_text_style_handle = pair.as_handle()?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbDimStyleTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_code_pair(&CodePair::new_string(3, &self.dimensioning_suffix))?;
        writer.write_code_pair(&CodePair::new_string(4, &self.alternate_dimensioning_suffix))?;
        if version < AcadVersion::R2000 {
            // at R2000 the arrow blocks became style pointers in XData
            writer.write_code_pair(&CodePair::new_string(5, &self.arrow_block_name))?;
            writer.write_code_pair(&CodePair::new_string(6, &self.first_arrow_block_name))?;
            writer.write_code_pair(&CodePair::new_string(7, &self.second_arrow_block_name))?;
        }
        writer.write_code_pair(&CodePair::new_f64(40, self.dimensioning_scale_factor))?;
        writer.write_code_pair(&CodePair::new_f64(41, self.dimensioning_arrow_size))?;
        writer.write_code_pair(&CodePair::new_f64(42, self.dimension_extension_line_offset))?;
        writer.write_code_pair(&CodePair::new_f64(43, self.dimension_line_increment))?;
        writer.write_code_pair(&CodePair::new_f64(
            44,
            self.dimension_extension_line_extension,
        ))?;
        writer.write_code_pair(&CodePair::new_f64(
            45,
            self.dimension_distance_rounding_value,
        ))?;
        writer.write_code_pair(&CodePair::new_f64(46, self.dimension_line_extension))?;
        writer.write_code_pair(&CodePair::new_f64(47, self.dimension_plus_tolerance))?;
        writer.write_code_pair(&CodePair::new_f64(48, self.dimension_minus_tolerance))?;
        writer.write_code_pair(&CodePair::new_f64(140, self.dimensioning_text_height))?;
        writer.write_code_pair(&CodePair::new_f64(141, self.center_mark_size))?;
        writer.write_code_pair(&CodePair::new_f64(142, self.dimensioning_tick_size))?;
        writer.write_code_pair(&CodePair::new_f64(
            143,
            self.alternate_dimensioning_scale_factor,
        ))?;
        writer.write_code_pair(&CodePair::new_f64(
            144,
            self.dimension_linear_measurement_scale_factor,
        ))?;
        writer.write_code_pair(&CodePair::new_f64(
            145,
            self.dimension_vertical_text_position,
        ))?;
        writer.write_code_pair(&CodePair::new_f64(
            146,
            self.dimension_tolerance_display_scale_factor,
        ))?;
        writer.write_code_pair(&CodePair::new_f64(147, self.dimension_line_gap))?;
        writer.write_code_pair(&CodePair::new_i16(
            71,
            as_i16(self.generate_dimension_tolerances),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            72,
            as_i16(self.generate_dimension_limits),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            73,
            as_i16(self.dimension_text_inside_horizontal),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            74,
            as_i16(self.dimension_text_outside_horizontal),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            75,
            as_i16(self.suppress_first_dimension_extension_line),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            76,
            as_i16(self.suppress_second_dimension_extension_line),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(77, self.text_above_dimension_line))?;
        writer.write_code_pair(&CodePair::new_i16(78, self.dimension_unit_zero_suppression))?;
        writer.write_code_pair(&CodePair::new_i16(
            176,
            self.dimension_line_color.raw_value(),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            177,
            self.dimension_extension_line_color.raw_value(),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(
            178,
            self.dimension_text_color.raw_value(),
        ))?;
        if version >= AcadVersion::R13 {
            writer.write_code_pair(&CodePair::new_i16(
                271,
                self.dimension_unit_tolerance_decimal_places,
            ))?;
        }
        if version >= AcadVersion::R2000 && !self.dimension_text_style_handle.is_empty() {
            writer.write_code_pair(&CodePair::new_string(
                340,
                &self.dimension_text_style_handle.as_string(),
            ))?;
        }
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

impl SymbolTableRecord for DimStyle {
    fn record_type() -> &'static str {
        "DIMSTYLE"
    }
    fn handle_code() -> i32 {
        105
    }
    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }
    fn set_owner_handle(&mut self, handle: Handle) {
        self.__owner_handle = handle;
    }
    fn add_extension_group(&mut self, group: ExtensionGroup) {
        self.extension_data_groups.push(group);
    }
    fn add_x_data(&mut self, x_data: XData) {
        self.x_data.push(x_data);
    }
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<()> {
        self.apply(pair)
    }
}

//------------------------------------------------------------------------------
//                                                                         Layer
//------------------------------------------------------------------------------
/// A LAYER table record.
#[derive(Clone, Debug)]
pub struct Layer {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub color: Color,
    /// Layers are switched off by negating their color on the wire.
    pub is_layer_on: bool,
    pub line_type_name: String,
    pub is_layer_plotted: bool,
    pub line_weight: LineWeight,
    pub plot_style_handle: Handle,
    pub material_handle: Handle,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            color: Color::from_raw_value(7),
            is_layer_on: true,
            line_type_name: String::from("CONTINUOUS"),
            is_layer_plotted: true,
            line_weight: LineWeight::default(),
            plot_style_handle: Handle::empty(),
            material_handle: Handle::empty(),
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl Layer {
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        default_if_empty(&mut self.line_type_name, "CONTINUOUS");
        match self.color.raw_value() {
            0 | 256 => self.color = Color::from_raw_value(7), // BYBLOCK and BYLAYER aren't valid layer colors
            _ => (),
        }
    }
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            62 => {
                let color = pair.assert_i16()?;
                self.is_layer_on = color >= 0;
                self.color = Color::from_raw_value(color.abs());
            }
            6 => self.line_type_name = pair.assert_string()?,
            290 => self.is_layer_plotted = pair.assert_bool()?,
            370 => self.line_weight = LineWeight::from_raw_value(pair.assert_i16()?),
            390 => self.plot_style_handle = pair.as_handle()?,
            347 => self.material_handle = pair.as_handle()?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbLayerTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        let color_value = if self.is_layer_on {
            self.color.raw_value()
        } else {
            -self.color.raw_value()
        };
        writer.write_code_pair(&CodePair::new_i16(62, color_value))?;
        writer.write_code_pair(&CodePair::new_string(
            6,
            get_writable_linetype_name(&self.line_type_name),
        ))?;
        if version >= AcadVersion::R2000 {
            writer.write_code_pair(&CodePair::new_bool(290, self.is_layer_plotted))?;
            writer.write_code_pair(&CodePair::new_i16(370, self.line_weight.raw_value()))?;
            if !self.plot_style_handle.is_empty() {
                writer.write_code_pair(&CodePair::new_string(
                    390,
                    &self.plot_style_handle.as_string(),
                ))?;
            }
        }
        if version >= AcadVersion::R2007 && !self.material_handle.is_empty() {
            writer.write_code_pair(&CodePair::new_string(
                347,
                &self.material_handle.as_string(),
            ))?;
        }
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(Layer, "LAYER");

//------------------------------------------------------------------------------
//                                                                      LineType
//------------------------------------------------------------------------------
/// An LTYPE table record.
#[derive(Clone, Debug)]
pub struct LineType {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub description: String,
    pub alignment_code: i16,
    pub total_pattern_length: f64,
    /// The dash/dot/space lengths of the pattern, in order.
    pub dash_lengths: Vec<f64>,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for LineType {
    fn default() -> Self {
        LineType {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            description: String::new(),
            alignment_code: i16::from(b'A'),
            total_pattern_length: 0.0,
            dash_lengths: vec![],
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl LineType {
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            3 => self.description = pair.assert_string()?,
            72 => self.alignment_code = pair.assert_i16()?,
            73 => (), // element count; implied by the 49 pairs
            40 => self.total_pattern_length = pair.assert_f64()?,
            49 => self.dash_lengths.push(pair.assert_f64()?),
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbLinetypeTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_code_pair(&CodePair::new_string(3, &self.description))?;
        writer.write_code_pair(&CodePair::new_i16(72, self.alignment_code))?;
        writer.write_code_pair(&CodePair::new_i16(73, self.dash_lengths.len() as i16))?;
        writer.write_code_pair(&CodePair::new_f64(40, self.total_pattern_length))?;
        for dash in &self.dash_lengths {
            writer.write_code_pair(&CodePair::new_f64(49, *dash))?;
            if version >= AcadVersion::R13 {
                // complex linetype element type; plain dashes only
                writer.write_code_pair(&CodePair::new_i16(74, 0))?;
            }
        }
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(LineType, "LTYPE");

//------------------------------------------------------------------------------
//                                                                         Style
//------------------------------------------------------------------------------
/// A STYLE table record: a text style.
#[derive(Clone, Debug)]
pub struct Style {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub text_height: f64,
    pub width_factor: f64,
    pub oblique_angle: f64,
    pub text_generation_flags: i16,
    pub last_height_used: f64,
    pub primary_font_file_name: String,
    pub big_font_file_name: String,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            text_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            text_generation_flags: 0,
            last_height_used: 0.2,
            primary_font_file_name: String::from("txt"),
            big_font_file_name: String::new(),
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl Style {
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        if self.text_height < 0.0 {
            self.text_height = 0.0;
        }
        ensure_positive_or_default(&mut self.width_factor, 1.0);
    }
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            40 => self.text_height = pair.assert_f64()?,
            41 => self.width_factor = pair.assert_f64()?,
            50 => self.oblique_angle = pair.assert_f64()?,
            71 => self.text_generation_flags = pair.assert_i16()?,
            42 => self.last_height_used = pair.assert_f64()?,
            3 => self.primary_font_file_name = pair.assert_string()?,
            4 => self.big_font_file_name = pair.assert_string()?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbTextStyleTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_code_pair(&CodePair::new_f64(40, self.text_height))?;
        writer.write_code_pair(&CodePair::new_f64(41, self.width_factor))?;
        writer.write_code_pair(&CodePair::new_f64(50, self.oblique_angle))?;
        writer.write_code_pair(&CodePair::new_i16(71, self.text_generation_flags))?;
        writer.write_code_pair(&CodePair::new_f64(42, self.last_height_used))?;
        writer.write_code_pair(&CodePair::new_string(3, &self.primary_font_file_name))?;
        writer.write_code_pair(&CodePair::new_string(4, &self.big_font_file_name))?;
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(Style, "STYLE");

//------------------------------------------------------------------------------
//                                                                           Ucs
//------------------------------------------------------------------------------
/// A UCS table record: a named user coordinate system.
#[derive(Clone, Debug)]
pub struct Ucs {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub origin: Point,
    pub x_axis: Vector,
    pub y_axis: Vector,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for Ucs {
    fn default() -> Self {
        Ucs {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            origin: Point::origin(),
            x_axis: Vector::x_axis(),
            y_axis: Vector::y_axis(),
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl Ucs {
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            10 | 20 | 30 => self.origin.set(pair)?,
            11 | 21 | 31 => self.x_axis.set(pair)?,
            12 | 22 | 32 => self.y_axis.set(pair)?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbUCSTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_point(10, &self.origin)?;
        writer.write_vector(11, &self.x_axis)?;
        writer.write_vector(12, &self.y_axis)?;
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(Ucs, "UCS");

//------------------------------------------------------------------------------
//                                                                          View
//------------------------------------------------------------------------------
/// A VIEW table record: a named view of the drawing.
#[derive(Clone, Debug)]
pub struct View {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub view_height: f64,
    pub view_center: Point,
    pub view_width: f64,
    pub view_direction: Vector,
    pub target_point: Point,
    pub lens_length: f64,
    pub front_clipping_plane: f64,
    pub back_clipping_plane: f64,
    pub twist_angle: f64,
    pub view_mode: i16,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for View {
    fn default() -> Self {
        View {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            view_height: 1.0,
            view_center: Point::origin(),
            view_width: 1.0,
            view_direction: Vector::z_axis(),
            target_point: Point::origin(),
            lens_length: 50.0,
            front_clipping_plane: 0.0,
            back_clipping_plane: 0.0,
            twist_angle: 0.0,
            view_mode: 0,
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl View {
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        ensure_positive_or_default(&mut self.view_height, 1.0);
        ensure_positive_or_default(&mut self.view_width, 1.0);
        ensure_positive_or_default(&mut self.lens_length, 1.0);
    }
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            40 => self.view_height = pair.assert_f64()?,
            10 | 20 => self.view_center.set(pair)?,
            41 => self.view_width = pair.assert_f64()?,
            11 | 21 | 31 => self.view_direction.set(pair)?,
            12 | 22 | 32 => self.target_point.set(pair)?,
            42 => self.lens_length = pair.assert_f64()?,
            43 => self.front_clipping_plane = pair.assert_f64()?,
            44 => self.back_clipping_plane = pair.assert_f64()?,
            50 => self.twist_angle = pair.assert_f64()?,
            71 => self.view_mode = pair.assert_i16()?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbViewTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_code_pair(&CodePair::new_f64(40, self.view_height))?;
        writer.write_code_pair(&CodePair::new_f64(10, self.view_center.x))?;
        writer.write_code_pair(&CodePair::new_f64(20, self.view_center.y))?;
        writer.write_code_pair(&CodePair::new_f64(41, self.view_width))?;
        writer.write_vector(11, &self.view_direction)?;
        writer.write_point(12, &self.target_point)?;
        writer.write_code_pair(&CodePair::new_f64(42, self.lens_length))?;
        writer.write_code_pair(&CodePair::new_f64(43, self.front_clipping_plane))?;
        writer.write_code_pair(&CodePair::new_f64(44, self.back_clipping_plane))?;
        writer.write_code_pair(&CodePair::new_f64(50, self.twist_angle))?;
        writer.write_code_pair(&CodePair::new_i16(71, self.view_mode))?;
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(View, "VIEW");

//------------------------------------------------------------------------------
//                                                                      ViewPort
//------------------------------------------------------------------------------
/// A VPORT table record: a viewport configuration.
#[derive(Clone, Debug)]
pub struct ViewPort {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    pub name: String,
    pub flags: i16,
    pub lower_left: Point,
    pub upper_right: Point,
    pub view_center: Point,
    pub snap_base_point: Point,
    pub snap_spacing: Point,
    pub grid_spacing: Point,
    pub view_direction: Vector,
    pub target_view_point: Point,
    pub view_height: f64,
    pub view_port_aspect_ratio: f64,
    pub lens_length: f64,
    pub front_clipping_plane: f64,
    pub back_clipping_plane: f64,
    pub snap_rotation_angle: f64,
    pub view_twist_angle: f64,
    pub view_mode: i16,
    pub circle_sides: i32,
    pub fast_zoom: bool,
    pub ucs_icon: i16,
    pub snap_on: bool,
    pub grid_on: bool,
    pub snap_style: i16,
    pub snap_isometric_plane: i16,
    pub extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for ViewPort {
    fn default() -> Self {
        ViewPort {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            name: String::new(),
            flags: 0,
            lower_left: Point::origin(),
            upper_right: Point::new(1.0, 1.0, 0.0),
            view_center: Point::origin(),
            snap_base_point: Point::origin(),
            snap_spacing: Point::new(1.0, 1.0, 0.0),
            grid_spacing: Point::new(1.0, 1.0, 0.0),
            view_direction: Vector::z_axis(),
            target_view_point: Point::origin(),
            view_height: 1.0,
            view_port_aspect_ratio: 1.0,
            lens_length: 50.0,
            front_clipping_plane: 0.0,
            back_clipping_plane: 0.0,
            snap_rotation_angle: 0.0,
            view_twist_angle: 0.0,
            view_mode: 0,
            circle_sides: 1000,
            fast_zoom: true,
            ucs_icon: 3,
            snap_on: false,
            grid_on: false,
            snap_style: 0,
            snap_isometric_plane: 0,
            extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

impl ViewPort {
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        ensure_positive_or_default(&mut self.snap_spacing.x, 1.0);
        ensure_positive_or_default(&mut self.snap_spacing.y, 1.0);
        ensure_positive_or_default(&mut self.grid_spacing.x, 1.0);
        ensure_positive_or_default(&mut self.grid_spacing.y, 1.0);
        ensure_positive_or_default(&mut self.view_height, 1.0);
        ensure_positive_or_default(&mut self.view_port_aspect_ratio, 1.0);
        ensure_positive_or_default(&mut self.lens_length, 50.0);
        ensure_positive_or_default_i16(&mut self.ucs_icon, 3);
        ensure_positive_or_default_i32(&mut self.circle_sides, 1000);
    }
    fn apply(&mut self, pair: &CodePair) -> DxfResult<()> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            70 => self.flags = pair.assert_i16()?,
            10 | 20 => self.lower_left.set(pair)?,
            11 | 21 => self.upper_right.set(pair)?,
            12 | 22 => self.view_center.set(pair)?,
            13 | 23 => self.snap_base_point.set(pair)?,
            14 | 24 => self.snap_spacing.set(pair)?,
            15 | 25 => self.grid_spacing.set(pair)?,
            16 | 26 | 36 => self.view_direction.set(pair)?,
            17 | 27 | 37 => self.target_view_point.set(pair)?,
            40 => self.view_height = pair.assert_f64()?,
            41 => self.view_port_aspect_ratio = pair.assert_f64()?,
            42 => self.lens_length = pair.assert_f64()?,
            43 => self.front_clipping_plane = pair.assert_f64()?,
            44 => self.back_clipping_plane = pair.assert_f64()?,
            50 => self.snap_rotation_angle = pair.assert_f64()?,
            51 => self.view_twist_angle = pair.assert_f64()?,
            71 => self.view_mode = pair.assert_i16()?,
            72 => self.circle_sides = i32::from(pair.assert_i16()?),
            73 => self.fast_zoom = pair.assert_bool()?,
            74 => self.ucs_icon = pair.assert_i16()?,
            75 => self.snap_on = pair.assert_bool()?,
            76 => self.grid_on = pair.assert_bool()?,
            77 => self.snap_style = pair.assert_i16()?,
            78 => self.snap_isometric_plane = pair.assert_i16()?,
            _ => (),
        }
        Ok(())
    }
    fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        write_record_frame(
            Self::record_type(),
            Self::handle_code(),
            self.handle,
            self.__owner_handle,
            &self.extension_data_groups,
            "AcDbViewportTableRecord",
            version,
            write_handles,
            writer,
        )?;
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_point_2d(10, &self.lower_left)?;
        writer.write_point_2d(11, &self.upper_right)?;
        writer.write_point_2d(12, &self.view_center)?;
        writer.write_point_2d(13, &self.snap_base_point)?;
        writer.write_point_2d(14, &self.snap_spacing)?;
        writer.write_point_2d(15, &self.grid_spacing)?;
        writer.write_vector(16, &self.view_direction)?;
        writer.write_point(17, &self.target_view_point)?;
        writer.write_code_pair(&CodePair::new_f64(40, self.view_height))?;
        writer.write_code_pair(&CodePair::new_f64(41, self.view_port_aspect_ratio))?;
        writer.write_code_pair(&CodePair::new_f64(42, self.lens_length))?;
        writer.write_code_pair(&CodePair::new_f64(43, self.front_clipping_plane))?;
        writer.write_code_pair(&CodePair::new_f64(44, self.back_clipping_plane))?;
        writer.write_code_pair(&CodePair::new_f64(50, self.snap_rotation_angle))?;
        writer.write_code_pair(&CodePair::new_f64(51, self.view_twist_angle))?;
        writer.write_code_pair(&CodePair::new_i16(71, self.view_mode))?;
        writer.write_code_pair(&CodePair::new_i16(72, self.circle_sides as i16))?;
        writer.write_code_pair(&CodePair::new_i16(73, as_i16(self.fast_zoom)))?;
        writer.write_code_pair(&CodePair::new_i16(74, self.ucs_icon))?;
        writer.write_code_pair(&CodePair::new_i16(75, as_i16(self.snap_on)))?;
        writer.write_code_pair(&CodePair::new_i16(76, as_i16(self.grid_on)))?;
        writer.write_code_pair(&CodePair::new_i16(77, self.snap_style))?;
        writer.write_code_pair(&CodePair::new_i16(78, self.snap_isometric_plane))?;
        for x in &self.x_data {
            x.write(version, writer)?;
        }
        Ok(())
    }
}

record_frame_impl!(ViewPort, "VPORT");

//------------------------------------------------------------------------------
//                                                         reading and writing
//------------------------------------------------------------------------------
#[allow(clippy::too_many_arguments)]
fn write_record_frame<T: Write>(
    record_type: &str,
    handle_code: i32,
    handle: Handle,
    owner_handle: Handle,
    extension_data_groups: &[ExtensionGroup],
    subclass_marker: &str,
    version: AcadVersion,
    write_handles: bool,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()> {
    writer.write_code_pair(&CodePair::new_string(0, record_type))?;
    if write_handles {
        writer.write_code_pair(&CodePair::new_string(handle_code, &handle.as_string()))?;
    }
    if version >= AcadVersion::R14 {
        for group in extension_data_groups {
            group.write(writer)?;
        }
    }
    if version >= AcadVersion::R13 {
        if !owner_handle.is_empty() {
            writer.write_code_pair(&CodePair::new_string(330, &owner_handle.as_string()))?;
        }
        writer.write_code_pair(&CodePair::new_str(100, "AcDbSymbolTableRecord"))?;
        writer.write_code_pair(&CodePair::new_string(100, subclass_marker))?;
    }
    Ok(())
}

/// Reads the records of one table, framed `0/<record-type>` … `0/ENDTAB`.
/// Pairs before the first record (the table's own header) and unknown
/// record kinds are skipped.
fn read_records<R, T>(iter: &mut CodePairBuffer<T>) -> DxfResult<Vec<R>>
where
    R: SymbolTableRecord,
    T: Read,
{
    let mut records: Vec<R> = vec![];
    let mut current: Option<R> = None;
    loop {
        match iter.next() {
            Some(Ok(pair)) => {
                if pair.code == 0 {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                    match &*pair.assert_string()? {
                        "ENDTAB" => break,
                        t if t == R::record_type() => current = Some(R::default()),
                        _ => (), // unknown record kind; its pairs are skipped
                    }
                } else if let Some(record) = current.as_mut() {
                    match pair.code {
                        c if c == R::handle_code() => record.set_handle(pair.as_handle()?),
                        330 => record.set_owner_handle(pair.as_handle()?),
                        100 => (), // subclass markers carry no data here
                        extension_data::EXTENSION_DATA_GROUP => {
                            let group = ExtensionGroup::read_group(
                                pair.assert_string()?,
                                iter,
                                pair.offset,
                            )?;
                            record.add_extension_group(group);
                        }
                        x_data::XDATA_APPLICATION_NAME => {
                            let x = XData::read(pair.assert_string()?, iter)?;
                            record.add_x_data(x);
                        }
                        _ => record.apply_code_pair(&pair)?,
                    }
                }
            }
            Some(Err(e)) => return Err(e),
            None => return Err(DxfError::UnexpectedEndOfInput),
        }
    }

    Ok(records)
}

/// Reads one `0/TABLE` frame and routes it by the `2/<name>` that follows.
/// Unknown tables are drained to their `0/ENDTAB`.
pub(crate) fn read_specific_table<T>(
    drawing: &mut Drawing,
    iter: &mut CodePairBuffer<T>,
) -> DxfResult<()>
where
    T: Read,
{
    match iter.next() {
        Some(Ok(pair)) => {
            if pair.code != 2 {
                return Err(DxfError::UnexpectedCodePair(
                    pair,
                    String::from("expected 2/<table-type>"),
                ));
            }

            match &*pair.assert_string()? {
                "APPID" => {
                    for record in read_records::<AppId, _>(iter)? {
                        drawing.add_app_id_no_handle_set(record);
                    }
                }
                "BLOCK_RECORD" => {
                    for record in read_records::<BlockRecord, _>(iter)? {
                        drawing.add_block_record_no_handle_set(record);
                    }
                }
                "DIMSTYLE" => {
                    for record in read_records::<DimStyle, _>(iter)? {
                        drawing.add_dim_style_no_handle_set(record);
                    }
                }
                "LAYER" => {
                    for record in read_records::<Layer, _>(iter)? {
                        drawing.add_layer_no_handle_set(record);
                    }
                }
                "LTYPE" => {
                    for record in read_records::<LineType, _>(iter)? {
                        drawing.add_line_type_no_handle_set(record);
                    }
                }
                "STYLE" => {
                    for record in read_records::<Style, _>(iter)? {
                        drawing.add_style_no_handle_set(record);
                    }
                }
                "UCS" => {
                    for record in read_records::<Ucs, _>(iter)? {
                        drawing.add_ucs_no_handle_set(record);
                    }
                }
                "VIEW" => {
                    for record in read_records::<View, _>(iter)? {
                        drawing.add_view_no_handle_set(record);
                    }
                }
                "VPORT" => {
                    for record in read_records::<ViewPort, _>(iter)? {
                        drawing.add_view_port_no_handle_set(record);
                    }
                }
                _ => swallow_table(iter)?,
            }

            Ok(())
        }
        Some(Err(e)) => Err(e),
        None => Err(DxfError::UnexpectedEndOfInput),
    }
}

fn swallow_table<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<()>
where
    T: Read,
{
    loop {
        match iter.next() {
            Some(Ok(pair)) => {
                if pair.code == 0 && pair.assert_string()? == "ENDTAB" {
                    break;
                }
            }
            Some(Err(e)) => return Err(e),
            None => return Err(DxfError::UnexpectedEndOfInput),
        }
    }

    Ok(())
}

fn write_table_head<T: Write>(
    name: &str,
    record_count: usize,
    version: AcadVersion,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()> {
    writer.write_code_pair(&CodePair::new_str(0, "TABLE"))?;
    writer.write_code_pair(&CodePair::new_string(2, name))?;
    if version >= AcadVersion::R13 {
        writer.write_code_pair(&CodePair::new_str(100, "AcDbSymbolTable"))?;
    }
    writer.write_code_pair(&CodePair::new_i16(70, record_count as i16))?;
    Ok(())
}

/// Writes all nine symbol tables in their fixed order.
pub(crate) fn write_tables<T>(
    drawing: &Drawing,
    version: AcadVersion,
    write_handles: bool,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()>
where
    T: Write,
{
    write_table_head("VPORT", drawing.view_ports().count(), version, writer)?;
    for record in drawing.view_ports() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("LTYPE", drawing.line_types().count(), version, writer)?;
    for record in drawing.line_types() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("LAYER", drawing.layers().count(), version, writer)?;
    for record in drawing.layers() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("STYLE", drawing.styles().count(), version, writer)?;
    for record in drawing.styles() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("VIEW", drawing.views().count(), version, writer)?;
    for record in drawing.views() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("UCS", drawing.ucss().count(), version, writer)?;
    for record in drawing.ucss() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("APPID", drawing.app_ids().count(), version, writer)?;
    for record in drawing.app_ids() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    write_table_head("DIMSTYLE", drawing.dim_styles().count(), version, writer)?;
    for record in drawing.dim_styles() {
        record.write(version, write_handles, writer)?;
    }
    writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;

    if version >= AcadVersion::R13 {
        write_table_head(
            "BLOCK_RECORD",
            drawing.block_records().count(),
            version,
            writer,
        )?;
        for record in drawing.block_records() {
            record.write(version, write_handles, writer)?;
        }
        writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::tests::*;
    use crate::{ExtensionGroupItem, XDataItem};
    use float_cmp::approx_eq;

    fn read_table(table_name: &str, value_pairs: Vec<CodePair>) -> Drawing {
        let mut pairs = vec![
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "TABLES"),
            CodePair::new_str(0, "TABLE"),
            CodePair::new_str(2, table_name),
            CodePair::new_str(100, "AcDbSymbolTable"),
            CodePair::new_i16(70, 0),
        ];
        for pair in value_pairs {
            pairs.push(pair);
        }
        pairs.push(CodePair::new_str(0, "ENDTAB"));
        pairs.push(CodePair::new_str(0, "ENDSEC"));
        pairs.push(CodePair::new_str(0, "EOF"));
        drawing_from_pairs(pairs)
    }

    #[test]
    fn read_unsupported_table() {
        let drawing = drawing_from_pairs(vec![
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "TABLES"),
            CodePair::new_str(0, "TABLE"),
            CodePair::new_str(2, "UNSUPPORTED"),
            CodePair::new_str(0, "UNSUPPORTED"),
            CodePair::new_str(2, "unsupported-name"),
            CodePair::new_str(0, "ENDTAB"),
            CodePair::new_str(0, "TABLE"),
            CodePair::new_str(2, "LAYER"),
            CodePair::new_str(0, "LAYER"),
            CodePair::new_str(0, "ENDTAB"),
            CodePair::new_str(0, "ENDSEC"),
            CodePair::new_str(0, "EOF"),
        ]);
        assert_eq!(1, drawing.layers().count());
    }

    #[test]
    fn read_single_layer() {
        let drawing = read_table(
            "LAYER",
            vec![
                CodePair::new_str(0, "LAYER"),
                CodePair::new_str(2, "layer-name"),
            ],
        );
        let layers = drawing.layers().collect::<Vec<_>>();
        assert_eq!(1, layers.len());
        assert_eq!("layer-name", layers[0].name);
    }

    #[test]
    fn duplicate_records_are_preserved_in_order() {
        let drawing = read_table(
            "LAYER",
            vec![
                CodePair::new_str(0, "LAYER"),
                CodePair::new_str(2, "same-name"),
                CodePair::new_i16(62, 1),
                CodePair::new_str(0, "LAYER"),
                CodePair::new_str(2, "same-name"),
                CodePair::new_i16(62, 2),
            ],
        );
        let layers = drawing.layers().collect::<Vec<_>>();
        assert_eq!(2, layers.len());
        assert_eq!(Some(1), layers[0].color.index());
        assert_eq!(Some(2), layers[1].color.index());
    }

    #[test]
    fn read_layer_color_and_layer_is_on() {
        let drawing = read_table(
            "LAYER",
            vec![CodePair::new_str(0, "LAYER"), CodePair::new_i16(62, 5)],
        );
        let layer = drawing.layers().next().unwrap();
        assert_eq!(Some(5), layer.color.index());
        assert!(layer.is_layer_on);
    }

    #[test]
    fn read_layer_color_and_layer_is_off() {
        let drawing = read_table(
            "LAYER",
            vec![CodePair::new_str(0, "LAYER"), CodePair::new_i16(62, -5)],
        );
        let layer = drawing.layers().next().unwrap();
        assert_eq!(Some(5), layer.color.index());
        assert!(!layer.is_layer_on);
    }

    #[test]
    fn read_dim_style_with_105_handle() {
        let drawing = read_table(
            "DIMSTYLE",
            vec![
                CodePair::new_str(0, "DIMSTYLE"),
                CodePair::new_str(105, "1C"),
                CodePair::new_str(2, "style-name"),
                CodePair::new_str(5, "arrow-block"),
            ],
        );
        // the default ANNOTATIVE/STANDARD styles come first
        let dim_style = drawing
            .dim_styles()
            .find(|d| d.name == "style-name")
            .unwrap();
        assert_eq!(Handle(0x1C), dim_style.handle);
        assert_eq!("arrow-block", dim_style.arrow_block_name);
    }

    #[test]
    fn read_line_type_with_dashes() {
        let drawing = read_table(
            "LTYPE",
            vec![
                CodePair::new_str(0, "LTYPE"),
                CodePair::new_str(2, "DASHED"),
                CodePair::new_i16(73, 2),
                CodePair::new_f64(40, 0.75),
                CodePair::new_f64(49, 0.5),
                CodePair::new_f64(49, -0.25),
            ],
        );
        let line_type = drawing.line_types().find(|l| l.name == "DASHED").unwrap();
        assert!(approx_eq!(f64, 0.75, line_type.total_pattern_length));
        assert_eq!(vec![0.5, -0.25], line_type.dash_lengths);
    }

    #[test]
    fn read_view_port_values() {
        let drawing = read_table(
            "VPORT",
            vec![
                CodePair::new_str(0, "VPORT"),
                CodePair::new_str(2, "*ACTIVE"),
                CodePair::new_f64(14, 0.5),
                CodePair::new_f64(24, 0.25),
                CodePair::new_i16(72, 2000),
            ],
        );
        let view_port = drawing.view_ports().find(|v| v.name == "*ACTIVE").unwrap();
        assert_eq!(Point::new(0.5, 0.25, 0.0), view_port.snap_spacing);
        assert_eq!(2000, view_port.circle_sides);
    }

    #[test]
    fn write_layer() {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer {
            name: String::from("layer-name"),
            color: Color::from_index(3),
            ..Default::default()
        });
        assert_contains_pairs(
            &drawing,
            vec![
                CodePair::new_str(100, "AcDbSymbolTableRecord"),
                CodePair::new_str(100, "AcDbLayerTableRecord"),
                CodePair::new_str(2, "layer-name"),
                CodePair::new_i16(70, 0),
                CodePair::new_i16(62, 3),
                CodePair::new_str(6, "CONTINUOUS"),
            ],
        );
    }

    #[test]
    fn write_layer_that_is_off() {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer {
            name: String::from("dark-layer"),
            color: Color::from_index(3),
            is_layer_on: false,
            ..Default::default()
        });
        assert_contains_pairs(
            &drawing,
            vec![
                CodePair::new_str(2, "dark-layer"),
                CodePair::new_i16(70, 0),
                CodePair::new_i16(62, -3),
            ],
        );
    }

    #[test]
    fn tables_are_written_in_fixed_order() {
        let drawing = Drawing::new();
        let contents = to_test_string(&drawing);
        let order = ["VPORT", "LTYPE", "LAYER", "STYLE", "VIEW", "UCS", "APPID", "DIMSTYLE"]
            .iter()
            .map(|n| contents.find(&format!("  2\r\n{}", n)).unwrap())
            .collect::<Vec<_>>();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, order);
    }

    #[test]
    fn block_record_table_not_written_on_r12() {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R12;
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(2, "BLOCK_RECORD")]);
    }

    #[test]
    fn block_record_table_is_written_on_r13() {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R13;
        assert_contains_pairs(&drawing, vec![CodePair::new_str(2, "BLOCK_RECORD")]);
    }

    #[test]
    fn read_table_item_with_extension_data() {
        let drawing = read_table(
            "LAYER",
            vec![
                CodePair::new_str(0, "LAYER"),
                CodePair::new_str(102, "{APPLICATION"),
                CodePair::new_str(1, "some string"),
                CodePair::new_str(102, "}"),
            ],
        );
        let layer = drawing.layers().next().unwrap();
        assert_eq!(1, layer.extension_data_groups.len());
        let group = &layer.extension_data_groups[0];
        assert_eq!("APPLICATION", group.application_name);
        assert_eq!(
            vec![ExtensionGroupItem::CodePair(CodePair::new_str(
                1,
                "some string"
            ))],
            group.items
        );
    }

    #[test]
    fn read_table_item_with_x_data() {
        let drawing = read_table(
            "LAYER",
            vec![
                CodePair::new_str(0, "LAYER"),
                CodePair::new_str(1001, "APPLICATION"),
                CodePair::new_f64(1040, 1.1),
            ],
        );
        let layer = drawing.layers().next().unwrap();
        assert_eq!(1, layer.x_data.len());
        let x = &layer.x_data[0];
        assert_eq!("APPLICATION", x.application_name);
        match x.items[0] {
            XDataItem::Real(r) => assert!(approx_eq!(f64, 1.1, r)),
            _ => panic!("expected a real"),
        }
    }

    #[test]
    fn normalize_layer() {
        let mut layer = Layer {
            name: String::from("layer-name"),
            color: Color::by_layer(), // not a valid layer color; normalized to 7
            line_type_name: String::new(),
            ..Default::default()
        };
        layer.normalize();
        assert_eq!(Some(7), layer.color.index());
        assert_eq!("CONTINUOUS", layer.line_type_name);
    }

    #[test]
    fn normalize_view() {
        let mut view = View {
            view_height: 0.0,  // invalid; normalized to 1.0
            view_width: -1.0,  // invalid; normalized to 1.0
            lens_length: 42.0, // valid
            ..Default::default()
        };
        view.normalize();
        assert!(approx_eq!(f64, 1.0, view.view_height));
        assert!(approx_eq!(f64, 1.0, view.view_width));
        assert!(approx_eq!(f64, 42.0, view.lens_length));
    }
}
