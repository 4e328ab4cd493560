//! The entity codec: decoding `0/<kind>` frames from the pair stream and
//! emitting them back in the canonical order for a target version.
//!
//! The data model lives in `entities.rs`.

use std::io::{Read, Write};

use enum_primitive::FromPrimitive;

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::entities::*;
use crate::enums::*;
use crate::error::{DxfError, DxfResult};
use crate::extension_data;
use crate::extension_data::ExtensionGroup;
use crate::handle_tracker::HandleTracker;
use crate::helpers::*;
use crate::x_data;
use crate::x_data::XData;
use crate::{CodePair, Drawing, Point, Vector};

//------------------------------------------------------------------------------
//                                                                 EntityCommon
//------------------------------------------------------------------------------
impl EntityCommon {
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        default_if_empty(&mut self.layer, "0");
    }
    pub(crate) fn apply_individual_pair<T>(
        &mut self,
        pair: &CodePair,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<()>
    where
        T: Read,
    {
        match pair.code {
            5 => self.handle = pair.as_handle()?,
            330 => self.__owner_handle = pair.as_handle()?,
            67 => self.is_in_paperspace = as_bool(pair.assert_i16()?),
            8 => self.layer = pair.assert_string()?,
            6 => self.line_type_name = pair.assert_string()?,
            62 => self.color = crate::Color::from_raw_value(pair.assert_i16()?),
            48 => self.line_type_scale = pair.assert_f64()?,
            60 => self.is_visible = !as_bool(pair.assert_i16()?),
            370 => self.line_weight = crate::LineWeight::from_raw_value(pair.assert_i16()?),
            420 => self.color_24_bit = pair.assert_i32()?,
            430 => self.color_name = pair.assert_string()?,
            440 => self.transparency = pair.assert_i32()?,
            347 => self.material_handle = pair.as_handle()?,
            284 => {
                self.shadow_mode =
                    enum_from_number!(ShadowMode, CastsAndReceives, from_i16, pair.assert_i16()?)
            }
            100 => (), // subclass markers carry no data of their own
            extension_data::EXTENSION_DATA_GROUP => {
                let group = ExtensionGroup::read_group(pair.assert_string()?, iter, pair.offset)?;
                self.extension_data_groups.push(group);
            }
            x_data::XDATA_APPLICATION_NAME => {
                let x = XData::read(pair.assert_string()?, iter)?;
                self.x_data.push(x);
            }
            _ => (), // unknown code; tolerated for version compatibility
        }

        Ok(())
    }
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        if write_handles {
            let handle = handle_tracker.get_or_assign(self.handle);
            writer.write_code_pair(&CodePair::new_string(5, &handle.as_string()))?;
        }
        if version >= AcadVersion::R14 {
            for group in &self.extension_data_groups {
                group.write(writer)?;
            }
        }
        if version >= AcadVersion::R13 {
            if !self.__owner_handle.is_empty() {
                writer.write_code_pair(&CodePair::new_string(
                    330,
                    &self.__owner_handle.as_string(),
                ))?;
            }
            writer.write_code_pair(&CodePair::new_str(100, "AcDbEntity"))?;
        }
        if self.is_in_paperspace {
            writer.write_code_pair(&CodePair::new_i16(67, 1))?;
        }
        writer.write_code_pair(&CodePair::new_string(8, &self.layer))?;
        if self.line_type_name != "BYLAYER" {
            writer.write_code_pair(&CodePair::new_string(6, &self.line_type_name))?;
        }
        if !self.color.is_by_layer() {
            writer.write_code_pair(&CodePair::new_i16(62, self.color.raw_value()))?;
        }
        if version >= AcadVersion::R2000 {
            if self.line_type_scale != 1.0 {
                writer.write_code_pair(&CodePair::new_f64(48, self.line_type_scale))?;
            }
            if !self.line_weight.is_by_layer() {
                writer.write_code_pair(&CodePair::new_i16(370, self.line_weight.raw_value()))?;
            }
        }
        if !self.is_visible {
            writer.write_code_pair(&CodePair::new_i16(60, 1))?;
        }
        if version >= AcadVersion::R2004 {
            if self.color_24_bit != 0 {
                writer.write_code_pair(&CodePair::new_i32(420, self.color_24_bit))?;
            }
            if !self.color_name.is_empty() {
                writer.write_code_pair(&CodePair::new_string(430, &self.color_name))?;
            }
            if self.transparency != 0 {
                writer.write_code_pair(&CodePair::new_i32(440, self.transparency))?;
            }
        }
        if version >= AcadVersion::R2007 {
            if !self.material_handle.is_empty() {
                writer.write_code_pair(&CodePair::new_string(
                    347,
                    &self.material_handle.as_string(),
                ))?;
            }
            if self.shadow_mode != ShadowMode::CastsAndReceives {
                writer.write_code_pair(&CodePair::new_i16(284, self.shadow_mode as i16))?;
            }
        }

        Ok(())
    }
}

//------------------------------------------------------------------------------
//                                                                        Entity
//------------------------------------------------------------------------------
impl Entity {
    /// Creates a new `Entity` with default common values.
    pub fn new(specific: EntityType) -> Self {
        Entity {
            common: Default::default(),
            specific,
        }
    }
    /// Ensures all entity values are valid.
    pub fn normalize(&mut self) {
        self.common.normalize();
    }
    pub(crate) fn read<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<Option<Entity>>
    where
        T: Read,
    {
        'new_entity: loop {
            match iter.next() {
                // the first pair must be 0/<entity-type>
                Some(Ok(pair @ CodePair { code: 0, .. })) => {
                    let type_string = pair.assert_string()?;
                    if type_string == "ENDSEC" || type_string == "ENDBLK" {
                        iter.put_back(Ok(pair));
                        return Ok(None);
                    }

                    if type_string == "DIMENSION" {
                        // dimensions pick their variant from the subclass
                        // marker (or the type flags on older files)
                        match Entity::read_dimension(iter)? {
                            Some(entity) => return Ok(Some(entity)),
                            None => continue 'new_entity,
                        }
                    }

                    match EntityType::from_type_string(&type_string) {
                        Some(specific) => {
                            let mut entity = Entity::new(specific);
                            if !entity.apply_custom_reader(iter)? {
                                // no custom reader; use the declarative map
                                loop {
                                    match iter.next() {
                                        Some(Ok(pair @ CodePair { code: 0, .. })) => {
                                            iter.put_back(Ok(pair));
                                            break;
                                        }
                                        Some(Ok(pair)) => entity.apply_code_pair(&pair, iter)?,
                                        Some(Err(e)) => return Err(e),
                                        None => return Err(DxfError::UnexpectedEndOfInput),
                                    }
                                }
                                entity.post_parse()?;
                            }
                            return Ok(Some(entity));
                        }
                        None => {
                            // swallow the unsupported entity
                            loop {
                                match iter.next() {
                                    Some(Ok(pair @ CodePair { code: 0, .. })) => {
                                        iter.put_back(Ok(pair));
                                        break;
                                    }
                                    Some(Ok(_)) => (), // part of the unsupported entity
                                    Some(Err(e)) => return Err(e),
                                    None => return Err(DxfError::UnexpectedEndOfInput),
                                }
                            }
                        }
                    }
                }
                Some(Ok(pair)) => {
                    return Err(DxfError::UnexpectedCodePair(
                        pair,
                        String::from("expected 0/<entity-type> or 0/ENDSEC"),
                    ))
                }
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
        }
    }
    fn read_dimension<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<Option<Entity>>
    where
        T: Read,
    {
        let mut common = EntityCommon::default();
        let mut dimension_entity: Option<EntityType> = None;
        let mut dimension_base = DimensionBase::default();
        loop {
            match iter.next() {
                Some(Ok(pair @ CodePair { code: 0, .. })) => {
                    iter.put_back(Ok(pair));
                    break;
                }
                Some(Ok(pair)) => match dimension_entity {
                    Some(ref mut dim) => {
                        if !dim.apply_dimension_code_pair(&pair)? {
                            common.apply_individual_pair(&pair, iter)?;
                        }
                    }
                    None => match pair.code {
                        1 => dimension_base.text = pair.assert_string()?,
                        2 => dimension_base.block_name = pair.assert_string()?,
                        3 => dimension_base.dimension_style_name = pair.assert_string()?,
                        10 | 20 | 30 => dimension_base.definition_point_1.set(&pair)?,
                        11 | 21 | 31 => dimension_base.text_mid_point.set(&pair)?,
                        41 => dimension_base.text_line_spacing_factor = pair.assert_f64()?,
                        42 => dimension_base.actual_measurement = pair.assert_f64()?,
                        51 => dimension_base.horizontal_direction_angle = pair.assert_f64()?,
                        53 => dimension_base.text_rotation_angle = pair.assert_f64()?,
                        70 => dimension_base.set_dimension_type(pair.assert_i16()?),
                        71 => {
                            dimension_base.attachment_point = enum_from_number!(
                                AttachmentPoint,
                                TopLeft,
                                from_i16,
                                pair.assert_i16()?
                            )
                        }
                        72 => {
                            dimension_base.text_line_spacing_style = enum_from_number!(
                                TextLineSpacingStyle,
                                AtLeast,
                                from_i16,
                                pair.assert_i16()?
                            )
                        }
                        210 | 220 | 230 => dimension_base.normal.set(&pair)?,
                        280 => {
                            dimension_base.version = enum_from_number!(
                                EntityVersion,
                                R2010,
                                from_i16,
                                pair.assert_i16()?
                            )
                        }
                        100 => {
                            if let Some(specific) =
                                dimension_from_subclass(&pair.assert_string()?, &dimension_base)
                            {
                                dimension_entity = Some(specific);
                            }
                        }
                        _ => common.apply_individual_pair(&pair, iter)?,
                    },
                },
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
        }

        // older files carry no subclass markers; fall back to the type flags
        let dimension_entity =
            dimension_entity.or_else(|| dimension_from_type(&dimension_base));
        Ok(dimension_entity.map(|specific| Entity { common, specific }))
    }
    fn apply_code_pair<T>(&mut self, pair: &CodePair, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        if !self.specific.try_apply_code_pair(pair)? {
            self.common.apply_individual_pair(pair, iter)?;
        }
        Ok(())
    }
    /// Recombines the coordinate lists accumulated by the declarative map.
    fn post_parse(&mut self) -> DxfResult<()> {
        match self.specific {
            EntityType::Leader(ref mut leader) => {
                combine_points_3(
                    &mut leader.__vertices_x,
                    &mut leader.__vertices_y,
                    &mut leader.__vertices_z,
                    &mut leader.vertices,
                    Point::new,
                );
            }
            EntityType::MLine(ref mut mline) => {
                combine_points_3(
                    &mut mline.__vertices_x,
                    &mut mline.__vertices_y,
                    &mut mline.__vertices_z,
                    &mut mline.vertices,
                    Point::new,
                );
                combine_points_3(
                    &mut mline.__segment_direction_x,
                    &mut mline.__segment_direction_y,
                    &mut mline.__segment_direction_z,
                    &mut mline.segment_directions,
                    Vector::new,
                );
                combine_points_3(
                    &mut mline.__miter_direction_x,
                    &mut mline.__miter_direction_y,
                    &mut mline.__miter_direction_z,
                    &mut mline.miter_directions,
                    Vector::new,
                );
            }
            EntityType::Spline(ref mut spline) => {
                combine_points_3(
                    &mut spline.__control_point_x,
                    &mut spline.__control_point_y,
                    &mut spline.__control_point_z,
                    &mut spline.control_points,
                    Point::new,
                );
                combine_points_3(
                    &mut spline.__fit_point_x,
                    &mut spline.__fit_point_y,
                    &mut spline.__fit_point_z,
                    &mut spline.fit_points,
                    Point::new,
                );
            }
            EntityType::Wipeout(ref mut wipeout) => {
                combine_points_2(
                    &mut wipeout.__clipping_vertices_x,
                    &mut wipeout.__clipping_vertices_y,
                    &mut wipeout.clipping_vertices,
                    Point::new,
                );
            }
            _ => (),
        }

        Ok(())
    }
    fn apply_custom_reader<T>(&mut self, iter: &mut CodePairBuffer<T>) -> DxfResult<bool>
    where
        T: Read,
    {
        match self.specific {
            EntityType::Attribute(ref mut att) => {
                Entity::apply_custom_reader_attribute(&mut self.common, att, iter)
            }
            EntityType::AttributeDefinition(ref mut att) => {
                Entity::apply_custom_reader_attribute_definition(&mut self.common, att, iter)
            }
            EntityType::Hatch(ref mut hatch) => {
                Entity::apply_custom_reader_hatch(&mut self.common, hatch, iter)
            }
            EntityType::LwPolyline(ref mut poly) => {
                Entity::apply_custom_reader_lw_polyline(&mut self.common, poly, iter)
            }
            EntityType::MText(ref mut mtext) => {
                Entity::apply_custom_reader_mtext(&mut self.common, mtext, iter)
            }
            _ => Ok(false), // no custom reader
        }
    }
    fn apply_custom_reader_attribute<T>(
        common: &mut EntityCommon,
        att: &mut Attribute,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        let xrecord_text = "AcDbXrecord";
        let mut last_subclass_marker = String::new();
        let mut is_version_set = false;
        let mut xrec_code_70_count = 0;
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                100 => last_subclass_marker = pair.assert_string()?,
                1 => att.value = pair.assert_string()?,
                2 => {
                    if last_subclass_marker == xrecord_text {
                        att.x_record_tag = pair.assert_string()?;
                    } else {
                        att.attribute_tag = pair.assert_string()?;
                    }
                }
                7 => att.text_style_name = pair.assert_string()?,
                10 | 20 | 30 => {
                    if last_subclass_marker == xrecord_text {
                        att.alignment_point.set(&pair)?;
                    } else {
                        att.location.set(&pair)?;
                    }
                }
                11 | 21 | 31 => att.second_alignment_point.set(&pair)?,
                39 => att.thickness = pair.assert_f64()?,
                40 => {
                    if last_subclass_marker == xrecord_text {
                        att.annotation_scale = pair.assert_f64()?;
                    } else {
                        att.text_height = pair.assert_f64()?;
                    }
                }
                41 => att.relative_x_scale_factor = pair.assert_f64()?,
                50 => att.rotation = pair.assert_f64()?,
                51 => att.oblique_angle = pair.assert_f64()?,
                70 => {
                    if last_subclass_marker == xrecord_text {
                        match xrec_code_70_count {
                            0 => {
                                att.m_text_flag = enum_from_number!(
                                    MTextFlag,
                                    MultilineAttribute,
                                    from_i16,
                                    pair.assert_i16()?
                                )
                            }
                            1 => att.is_really_locked = as_bool(pair.assert_i16()?),
                            2 => att.__secondary_attribute_count = i32::from(pair.assert_i16()?),
                            _ => return Err(DxfError::UnexpectedCodePair(pair, String::new())),
                        }
                        xrec_code_70_count += 1;
                    } else {
                        att.flags = pair.assert_i16()?;
                    }
                }
                71 => att.text_generation_flags = pair.assert_i16()?,
                72 => {
                    att.horizontal_text_justification = enum_from_number!(
                        HorizontalTextJustification,
                        Left,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                73 => att.field_length = pair.assert_i16()?,
                74 => {
                    att.vertical_text_justification = enum_from_number!(
                        VerticalTextJustification,
                        Baseline,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                210 | 220 | 230 => att.normal.set(&pair)?,
                280 => {
                    if last_subclass_marker == xrecord_text {
                        att.keep_duplicate_records = as_bool(pair.assert_i16()?);
                    } else if !is_version_set {
                        att.version = enum_from_number!(
                            EntityVersion,
                            R2010,
                            from_i16,
                            pair.assert_i16()?
                        );
                        is_version_set = true;
                    } else {
                        att.is_locked_in_block = as_bool(pair.assert_i16()?);
                    }
                }
                340 => att.__secondary_attributes_handles.push(pair.as_handle()?),
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_attribute_definition<T>(
        common: &mut EntityCommon,
        att: &mut AttributeDefinition,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        let xrecord_text = "AcDbXrecord";
        let mut last_subclass_marker = String::new();
        let mut is_version_set = false;
        let mut xrec_code_70_count = 0;
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                100 => last_subclass_marker = pair.assert_string()?,
                1 => att.value = pair.assert_string()?,
                2 => {
                    if last_subclass_marker == xrecord_text {
                        att.x_record_tag = pair.assert_string()?;
                    } else {
                        att.text_tag = pair.assert_string()?;
                    }
                }
                3 => att.prompt = pair.assert_string()?,
                7 => att.text_style_name = pair.assert_string()?,
                10 | 20 | 30 => {
                    if last_subclass_marker == xrecord_text {
                        att.alignment_point.set(&pair)?;
                    } else {
                        att.location.set(&pair)?;
                    }
                }
                11 | 21 | 31 => att.second_alignment_point.set(&pair)?,
                39 => att.thickness = pair.assert_f64()?,
                40 => {
                    if last_subclass_marker == xrecord_text {
                        att.annotation_scale = pair.assert_f64()?;
                    } else {
                        att.text_height = pair.assert_f64()?;
                    }
                }
                41 => att.relative_x_scale_factor = pair.assert_f64()?,
                50 => att.rotation = pair.assert_f64()?,
                51 => att.oblique_angle = pair.assert_f64()?,
                70 => {
                    if last_subclass_marker == xrecord_text {
                        match xrec_code_70_count {
                            0 => {
                                att.m_text_flag = enum_from_number!(
                                    MTextFlag,
                                    MultilineAttribute,
                                    from_i16,
                                    pair.assert_i16()?
                                )
                            }
                            1 => att.is_really_locked = as_bool(pair.assert_i16()?),
                            2 => att.__secondary_attribute_count = i32::from(pair.assert_i16()?),
                            _ => return Err(DxfError::UnexpectedCodePair(pair, String::new())),
                        }
                        xrec_code_70_count += 1;
                    } else {
                        att.flags = pair.assert_i16()?;
                    }
                }
                71 => att.text_generation_flags = pair.assert_i16()?,
                72 => {
                    att.horizontal_text_justification = enum_from_number!(
                        HorizontalTextJustification,
                        Left,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                73 => att.field_length = pair.assert_i16()?,
                74 => {
                    att.vertical_text_justification = enum_from_number!(
                        VerticalTextJustification,
                        Baseline,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                210 | 220 | 230 => att.normal.set(&pair)?,
                280 => {
                    if last_subclass_marker == xrecord_text {
                        att.keep_duplicate_records = as_bool(pair.assert_i16()?);
                    } else if !is_version_set {
                        att.version = enum_from_number!(
                            EntityVersion,
                            R2010,
                            from_i16,
                            pair.assert_i16()?
                        );
                        is_version_set = true;
                    } else {
                        att.is_locked_in_block = as_bool(pair.assert_i16()?);
                    }
                }
                340 => att.__secondary_attributes_handles.push(pair.as_handle()?),
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_lw_polyline<T>(
        common: &mut EntityCommon,
        poly: &mut LwPolyline,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                70 => poly.flags = pair.assert_i16()?,
                43 => poly.constant_width = pair.assert_f64()?,
                38 => poly.elevation = pair.assert_f64()?,
                39 => poly.thickness = pair.assert_f64()?,
                90 => (), // vertex count; implied by the 10 pairs
                // a code 10 starts a new vertex
                10 => {
                    poly.vertices.push(LwPolylineVertex {
                        x: pair.assert_f64()?,
                        ..Default::default()
                    });
                }
                20 => {
                    if let Some(vertex) = poly.vertices.last_mut() {
                        vertex.y = pair.assert_f64()?;
                    }
                }
                91 => {
                    if let Some(vertex) = poly.vertices.last_mut() {
                        vertex.id = pair.assert_i32()?;
                    }
                }
                40 => {
                    if let Some(vertex) = poly.vertices.last_mut() {
                        vertex.starting_width = pair.assert_f64()?;
                    }
                }
                41 => {
                    if let Some(vertex) = poly.vertices.last_mut() {
                        vertex.ending_width = pair.assert_f64()?;
                    }
                }
                42 => {
                    if let Some(vertex) = poly.vertices.last_mut() {
                        vertex.bulge = pair.assert_f64()?;
                    }
                }
                210 | 220 | 230 => poly.normal.set(&pair)?,
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_mtext<T>(
        common: &mut EntityCommon,
        mtext: &mut MText,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        let mut reading_column_data = false;
        let mut read_column_count = false;
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                10 | 20 | 30 => mtext.insertion_point.set(&pair)?,
                40 => mtext.initial_text_height = pair.assert_f64()?,
                41 => mtext.reference_rectangle_width = pair.assert_f64()?,
                71 => {
                    mtext.attachment_point = enum_from_number!(
                        AttachmentPoint,
                        TopLeft,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                72 => {
                    mtext.drawing_direction = enum_from_number!(
                        DrawingDirection,
                        LeftToRight,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                3 => mtext.text.push_str(&pair.assert_string()?),
                1 => mtext.text.push_str(&pair.assert_string()?),
                7 => mtext.text_style_name = pair.assert_string()?,
                210 | 220 | 230 => mtext.normal.set(&pair)?,
                11 | 21 | 31 => mtext.x_axis_direction.set(&pair)?,
                42 => mtext.horizontal_width = pair.assert_f64()?,
                43 => mtext.vertical_height = pair.assert_f64()?,
                50 => {
                    if reading_column_data {
                        if read_column_count {
                            mtext.column_heights.push(pair.assert_f64()?);
                        } else {
                            // the first post-column 50 is the column count
                            read_column_count = true;
                        }
                    } else {
                        mtext.rotation_angle = pair.assert_f64()?;
                    }
                }
                73 => {
                    mtext.line_spacing_style = enum_from_number!(
                        TextLineSpacingStyle,
                        AtLeast,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                44 => mtext.line_spacing_factor = pair.assert_f64()?,
                90 => mtext.background_fill_setting = pair.assert_i32()?,
                63 => mtext.background_fill_color = crate::Color::from_raw_value(pair.assert_i16()?),
                45 => mtext.fill_box_scale = pair.assert_f64()?,
                441 => mtext.background_fill_color_transparency = pair.assert_i32()?,
                75 => {
                    mtext.column_type = pair.assert_i16()?;
                    reading_column_data = true;
                }
                76 => mtext.column_count = pair.assert_i16()?,
                78 => mtext.is_column_flow_reversed = as_bool(pair.assert_i16()?),
                79 => mtext.is_column_auto_height = as_bool(pair.assert_i16()?),
                48 => mtext.column_width = pair.assert_f64()?,
                49 => mtext.column_gutter = pair.assert_f64()?,
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_hatch<T>(
        common: &mut EntityCommon,
        hatch: &mut Hatch,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                2 => hatch.pattern_name = pair.assert_string()?,
                10 | 20 | 30 => hatch.elevation_point.set(&pair)?,
                210 | 220 | 230 => hatch.normal.set(&pair)?,
                70 => hatch.is_solid_fill = as_bool(pair.assert_i16()?),
                71 => hatch.is_associative = as_bool(pair.assert_i16()?),
                91 => {
                    let count = pair.assert_i32()?;
                    for _ in 0..count {
                        hatch.boundary_paths.push(read_hatch_boundary_path(iter)?);
                    }
                }
                75 => {
                    hatch.hatch_style =
                        enum_from_number!(HatchStyle, OddParity, from_i16, pair.assert_i16()?)
                }
                76 => {
                    hatch.pattern_type = enum_from_number!(
                        HatchPatternType,
                        Predefined,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                52 => hatch.pattern_angle = pair.assert_f64()?,
                41 => hatch.pattern_scale = pair.assert_f64()?,
                77 => hatch.is_pattern_double = as_bool(pair.assert_i16()?),
                78 => {
                    let count = pair.assert_i16()?;
                    for _ in 0..count {
                        hatch
                            .pattern_definition_lines
                            .push(read_hatch_pattern_definition_line(iter)?);
                    }
                }
                47 => hatch.pixel_size = pair.assert_f64()?,
                98 => {
                    let count = pair.assert_i32()?;
                    for _ in 0..count {
                        let x = expect_f64(iter, 10)?;
                        let y = expect_f64(iter, 20)?;
                        hatch.seed_points.push(Point::new(x, y, 0.0));
                    }
                }
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    /// Writes the entity in the canonical order for `version`; kinds the
    /// target version cannot represent are suppressed entirely.
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        if version < self.specific.min_version() {
            return Ok(());
        }

        writer.write_code_pair(&CodePair::new_str(0, self.specific.to_type_string()))?;
        self.common
            .write(version, write_handles, writer, handle_tracker)?;
        self.specific.write(version, writer)?;
        for x in &self.common.x_data {
            x.write(version, writer)?;
        }
        self.write_child_entities(version, write_handles, writer, handle_tracker)?;

        Ok(())
    }
    fn write_child_entities<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        let (children, seqend_handle) = match self.specific {
            EntityType::Polyline(ref poly) => {
                let children = poly
                    .__vertices_and_handles
                    .iter()
                    .map(|(vertex, handle)| Entity {
                        common: EntityCommon {
                            handle: *handle,
                            layer: self.common.layer.clone(),
                            ..Default::default()
                        },
                        specific: EntityType::Vertex(vertex.clone()),
                    })
                    .collect::<Vec<_>>();
                (children, poly.__seqend_handle)
            }
            EntityType::Insert(ref ins) if !ins.__attributes_and_handles.is_empty() => {
                let children = ins
                    .__attributes_and_handles
                    .iter()
                    .map(|(att, handle)| Entity {
                        common: EntityCommon {
                            handle: *handle,
                            layer: self.common.layer.clone(),
                            ..Default::default()
                        },
                        specific: EntityType::Attribute(att.clone()),
                    })
                    .collect::<Vec<_>>();
                (children, ins.__seqend_handle)
            }
            _ => return Ok(()),
        };

        for child in &children {
            child.write(version, write_handles, writer, handle_tracker)?;
        }
        let seqend = Entity {
            common: EntityCommon {
                handle: seqend_handle,
                layer: self.common.layer.clone(),
                ..Default::default()
            },
            specific: EntityType::Seqend(Seqend),
        };
        seqend.write(version, write_handles, writer, handle_tracker)?;

        Ok(())
    }
}

fn dimension_from_subclass(subclass: &str, base: &DimensionBase) -> Option<EntityType> {
    match subclass {
        "AcDbAlignedDimension" => Some(EntityType::RotatedDimension(RotatedDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
        "AcDbRadialDimension" => Some(EntityType::RadialDimension(RadialDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
        "AcDbDiametricDimension" => Some(EntityType::DiameterDimension(DiameterDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
        "AcDb3PointAngularDimension" => Some(EntityType::AngularThreePointDimension(
            AngularThreePointDimension {
                dimension_base: base.clone(),
                ..Default::default()
            },
        )),
        "AcDbOrdinateDimension" => Some(EntityType::OrdinateDimension(OrdinateDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
        _ => None,
    }
}

fn dimension_from_type(base: &DimensionBase) -> Option<EntityType> {
    match base.dimension_type {
        DimensionType::RotatedHorizontalOrVertical | DimensionType::Aligned => {
            Some(EntityType::RotatedDimension(RotatedDimension {
                dimension_base: base.clone(),
                ..Default::default()
            }))
        }
        DimensionType::Radius => Some(EntityType::RadialDimension(RadialDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
        DimensionType::Diameter => Some(EntityType::DiameterDimension(DiameterDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
        DimensionType::Angular | DimensionType::AngularThreePoint => Some(
            EntityType::AngularThreePointDimension(AngularThreePointDimension {
                dimension_base: base.clone(),
                ..Default::default()
            }),
        ),
        DimensionType::Ordinate => Some(EntityType::OrdinateDimension(OrdinateDimension {
            dimension_base: base.clone(),
            ..Default::default()
        })),
    }
}

//------------------------------------------------------------------------------
//                                                                 DimensionBase
//------------------------------------------------------------------------------
impl DimensionBase {
    fn set_dimension_type(&mut self, val: i16) {
        self.is_block_reference_referenced_by_this_block_only = (val & 32) == 32;
        self.is_ordinate_x_type = (val & 64) == 64;
        self.is_at_user_defined_location = (val & 128) == 128;
        self.dimension_type = enum_from_number!(
            DimensionType,
            RotatedHorizontalOrVertical,
            from_i16,
            val & 0x0F
        );
    }
    pub(crate) fn dimension_type_value(&self) -> i16 {
        let mut val = self.dimension_type as i16;
        if self.is_block_reference_referenced_by_this_block_only {
            val |= 32;
        }
        if self.is_ordinate_x_type {
            val |= 64;
        }
        if self.is_at_user_defined_location {
            val |= 128;
        }
        val
    }
    fn write<T>(&self, version: AcadVersion, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        if version >= AcadVersion::R13 {
            writer.write_code_pair(&CodePair::new_str(100, "AcDbDimension"))?;
        }
        if !self.block_name.is_empty() {
            writer.write_code_pair(&CodePair::new_string(2, &self.block_name))?;
        }
        writer.write_point(10, &self.definition_point_1)?;
        writer.write_point(11, &self.text_mid_point)?;
        writer.write_code_pair(&CodePair::new_i16(70, self.dimension_type_value()))?;
        if version >= AcadVersion::R2000 {
            writer.write_code_pair(&CodePair::new_i16(71, self.attachment_point as i16))?;
            if self.text_line_spacing_style != TextLineSpacingStyle::AtLeast {
                writer.write_code_pair(&CodePair::new_i16(
                    72,
                    self.text_line_spacing_style as i16,
                ))?;
            }
            if self.text_line_spacing_factor != 1.0 {
                writer.write_code_pair(&CodePair::new_f64(41, self.text_line_spacing_factor))?;
            }
            if self.actual_measurement != 0.0 {
                writer.write_code_pair(&CodePair::new_f64(42, self.actual_measurement))?;
            }
        }
        if !self.text.is_empty() {
            writer.write_code_pair(&CodePair::new_string(1, &self.text))?;
        }
        if self.text_rotation_angle != 0.0 {
            writer.write_code_pair(&CodePair::new_f64(53, self.text_rotation_angle))?;
        }
        if self.horizontal_direction_angle != 0.0 {
            writer.write_code_pair(&CodePair::new_f64(51, self.horizontal_direction_angle))?;
        }
        if version >= AcadVersion::R13 && self.normal != Vector::z_axis() {
            writer.write_vector(210, &self.normal)?;
        }
        writer.write_code_pair(&CodePair::new_string(3, &self.dimension_style_name))?;
        Ok(())
    }
}

//------------------------------------------------------------------------------
//                                                                    EntityType
//------------------------------------------------------------------------------
impl EntityType {
    fn apply_dimension_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match *self {
            EntityType::RotatedDimension(ref mut dim) => match pair.code {
                12 | 22 | 32 => dim.insertion_point.set(pair)?,
                13 | 23 | 33 => dim.definition_point_2.set(pair)?,
                14 | 24 | 34 => dim.definition_point_3.set(pair)?,
                50 => dim.rotation_angle = pair.assert_f64()?,
                52 => dim.extension_line_angle = pair.assert_f64()?,
                _ => return Ok(false),
            },
            EntityType::RadialDimension(ref mut dim) => match pair.code {
                15 | 25 | 35 => dim.definition_point_2.set(pair)?,
                40 => dim.leader_length = pair.assert_f64()?,
                _ => return Ok(false),
            },
            EntityType::DiameterDimension(ref mut dim) => match pair.code {
                15 | 25 | 35 => dim.definition_point_2.set(pair)?,
                40 => dim.leader_length = pair.assert_f64()?,
                _ => return Ok(false),
            },
            EntityType::AngularThreePointDimension(ref mut dim) => match pair.code {
                13 | 23 | 33 => dim.definition_point_2.set(pair)?,
                14 | 24 | 34 => dim.definition_point_3.set(pair)?,
                15 | 25 | 35 => dim.definition_point_4.set(pair)?,
                16 | 26 | 36 => dim.definition_point_5.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::OrdinateDimension(ref mut dim) => match pair.code {
                13 | 23 | 33 => dim.definition_point_2.set(pair)?,
                14 | 24 | 34 => dim.definition_point_3.set(pair)?,
                _ => return Ok(false),
            },
            _ => return Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
        }
        Ok(true)
    }
    /// Applies a kind-specific pair through the declarative map; returns
    /// `false` when the code belongs to the common frame instead.
    pub(crate) fn try_apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match *self {
            EntityType::Arc(ref mut arc) => match pair.code {
                39 => arc.thickness = pair.assert_f64()?,
                10 | 20 | 30 => arc.center.set(pair)?,
                40 => arc.radius = pair.assert_f64()?,
                210 | 220 | 230 => arc.normal.set(pair)?,
                50 => arc.start_angle = pair.assert_f64()?,
                51 => arc.end_angle = pair.assert_f64()?,
                _ => return Ok(false),
            },
            EntityType::Circle(ref mut circle) => match pair.code {
                39 => circle.thickness = pair.assert_f64()?,
                10 | 20 | 30 => circle.center.set(pair)?,
                40 => circle.radius = pair.assert_f64()?,
                210 | 220 | 230 => circle.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Ellipse(ref mut ellipse) => match pair.code {
                10 | 20 | 30 => ellipse.center.set(pair)?,
                11 | 21 | 31 => ellipse.major_axis.set(pair)?,
                210 | 220 | 230 => ellipse.normal.set(pair)?,
                40 => ellipse.minor_axis_ratio = pair.assert_f64()?,
                41 => ellipse.start_parameter = pair.assert_f64()?,
                42 => ellipse.end_parameter = pair.assert_f64()?,
                _ => return Ok(false),
            },
            EntityType::Face3D(ref mut face) => match pair.code {
                10 | 20 | 30 => face.first_corner.set(pair)?,
                11 | 21 | 31 => face.second_corner.set(pair)?,
                12 | 22 | 32 => face.third_corner.set(pair)?,
                13 | 23 | 33 => face.fourth_corner.set(pair)?,
                70 => face.edge_flags = pair.assert_i16()?,
                _ => return Ok(false),
            },
            EntityType::Insert(ref mut insert) => match pair.code {
                66 => insert.__has_attributes = as_bool(pair.assert_i16()?),
                2 => insert.name = pair.assert_string()?,
                10 | 20 | 30 => insert.location.set(pair)?,
                41 => insert.x_scale_factor = pair.assert_f64()?,
                42 => insert.y_scale_factor = pair.assert_f64()?,
                43 => insert.z_scale_factor = pair.assert_f64()?,
                50 => insert.rotation = pair.assert_f64()?,
                70 => insert.column_count = pair.assert_i16()?,
                71 => insert.row_count = pair.assert_i16()?,
                44 => insert.column_spacing = pair.assert_f64()?,
                45 => insert.row_spacing = pair.assert_f64()?,
                210 | 220 | 230 => insert.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Leader(ref mut leader) => match pair.code {
                3 => leader.dimension_style_name = pair.assert_string()?,
                71 => leader.use_arrowheads = as_bool(pair.assert_i16()?),
                72 => {
                    leader.path_type = enum_from_number!(
                        LeaderPathType,
                        StraightLineSegments,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                73 => {
                    leader.annotation_type = enum_from_number!(
                        LeaderCreationAnnotationType,
                        NoAnnotation,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                74 => leader.hookline_direction = pair.assert_i16()?,
                75 => leader.use_hookline = as_bool(pair.assert_i16()?),
                40 => leader.text_annotation_height = pair.assert_f64()?,
                41 => leader.text_annotation_width = pair.assert_f64()?,
                76 => (), // vertex count; implied by the 10 pairs
                10 => leader.__vertices_x.push(pair.assert_f64()?),
                20 => leader.__vertices_y.push(pair.assert_f64()?),
                30 => leader.__vertices_z.push(pair.assert_f64()?),
                210 | 220 | 230 => leader.normal.set(pair)?,
                211 | 221 | 231 => leader.horizontal_direction.set(pair)?,
                212 | 222 | 232 => leader.block_offset.set(pair)?,
                213 | 223 | 233 => leader.annotation_offset.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Line(ref mut line) => match pair.code {
                39 => line.thickness = pair.assert_f64()?,
                10 | 20 | 30 => line.p1.set(pair)?,
                11 | 21 | 31 => line.p2.set(pair)?,
                210 | 220 | 230 => line.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::MLine(ref mut mline) => match pair.code {
                2 => mline.style_name = pair.assert_string()?,
                340 => mline.__style_handle = pair.as_handle()?,
                40 => mline.scale_factor = pair.assert_f64()?,
                70 => {
                    mline.justification = enum_from_number!(
                        MLineJustification,
                        Top,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                71 => mline.flags = pair.assert_i16()?,
                72 | 73 | 74 | 75 => (), // counts; implied by the lists
                10 | 20 | 30 => mline.start_point.set(pair)?,
                210 | 220 | 230 => mline.normal.set(pair)?,
                11 => mline.__vertices_x.push(pair.assert_f64()?),
                21 => mline.__vertices_y.push(pair.assert_f64()?),
                31 => mline.__vertices_z.push(pair.assert_f64()?),
                12 => mline.__segment_direction_x.push(pair.assert_f64()?),
                22 => mline.__segment_direction_y.push(pair.assert_f64()?),
                32 => mline.__segment_direction_z.push(pair.assert_f64()?),
                13 => mline.__miter_direction_x.push(pair.assert_f64()?),
                23 => mline.__miter_direction_y.push(pair.assert_f64()?),
                33 => mline.__miter_direction_z.push(pair.assert_f64()?),
                41 => mline.parameters.push(pair.assert_f64()?),
                42 => mline.area_fill_parameters.push(pair.assert_f64()?),
                _ => return Ok(false),
            },
            EntityType::ModelPoint(ref mut point) => match pair.code {
                10 | 20 | 30 => point.location.set(pair)?,
                39 => point.thickness = pair.assert_f64()?,
                210 | 220 | 230 => point.normal.set(pair)?,
                50 => point.angle = pair.assert_f64()?,
                _ => return Ok(false),
            },
            EntityType::Polyline(ref mut poly) => match pair.code {
                66 => poly.__contains_vertices = as_bool(pair.assert_i16()?),
                10 | 20 | 30 => poly.location.set(pair)?,
                39 => poly.thickness = pair.assert_f64()?,
                70 => poly.flags = pair.assert_i16()?,
                40 => poly.default_starting_width = pair.assert_f64()?,
                41 => poly.default_ending_width = pair.assert_f64()?,
                71 => poly.polygon_mesh_m_vertex_count = pair.assert_i16()?,
                72 => poly.polygon_mesh_n_vertex_count = pair.assert_i16()?,
                73 => poly.smooth_surface_m_density = pair.assert_i16()?,
                74 => poly.smooth_surface_n_density = pair.assert_i16()?,
                75 => {
                    poly.surface_type = enum_from_number!(
                        PolylineCurvedAndSmoothSurfaceType,
                        None,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                210 | 220 | 230 => poly.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Ray(ref mut ray) => match pair.code {
                10 | 20 | 30 => ray.point.set(pair)?,
                11 | 21 | 31 => ray.direction_vector.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Region(ref mut region) => match pair.code {
                70 => region.format_version = pair.assert_i16()?,
                1 => region.proprietary_data.push(pair.assert_string()?),
                3 => region
                    .additional_proprietary_data
                    .push(pair.assert_string()?),
                _ => return Ok(false),
            },
            EntityType::Seqend(_) => return Ok(false),
            EntityType::Shape(ref mut shape) => match pair.code {
                39 => shape.thickness = pair.assert_f64()?,
                10 | 20 | 30 => shape.location.set(pair)?,
                40 => shape.size = pair.assert_f64()?,
                2 => shape.name = pair.assert_string()?,
                50 => shape.rotation_angle = pair.assert_f64()?,
                41 => shape.relative_x_scale_factor = pair.assert_f64()?,
                51 => shape.oblique_angle = pair.assert_f64()?,
                210 | 220 | 230 => shape.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Solid(ref mut solid) => match pair.code {
                10 | 20 | 30 => solid.first_corner.set(pair)?,
                11 | 21 | 31 => solid.second_corner.set(pair)?,
                12 | 22 | 32 => solid.third_corner.set(pair)?,
                13 | 23 | 33 => solid.fourth_corner.set(pair)?,
                39 => solid.thickness = pair.assert_f64()?,
                210 | 220 | 230 => solid.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Spline(ref mut spline) => match pair.code {
                210 | 220 | 230 => spline.normal.set(pair)?,
                70 => spline.flags = pair.assert_i16()?,
                71 => spline.degree_of_curve = pair.assert_i16()?,
                72 | 73 | 74 => (), // counts; implied by the lists
                42 => spline.knot_tolerance = pair.assert_f64()?,
                43 => spline.control_point_tolerance = pair.assert_f64()?,
                44 => spline.fit_tolerance = pair.assert_f64()?,
                12 | 22 | 32 => spline.start_tangent.set(pair)?,
                13 | 23 | 33 => spline.end_tangent.set(pair)?,
                40 => spline.knot_values.push(pair.assert_f64()?),
                41 => spline.weights.push(pair.assert_f64()?),
                10 => spline.__control_point_x.push(pair.assert_f64()?),
                20 => spline.__control_point_y.push(pair.assert_f64()?),
                30 => spline.__control_point_z.push(pair.assert_f64()?),
                11 => spline.__fit_point_x.push(pair.assert_f64()?),
                21 => spline.__fit_point_y.push(pair.assert_f64()?),
                31 => spline.__fit_point_z.push(pair.assert_f64()?),
                _ => return Ok(false),
            },
            EntityType::Text(ref mut text) => match pair.code {
                39 => text.thickness = pair.assert_f64()?,
                10 | 20 | 30 => text.location.set(pair)?,
                40 => text.text_height = pair.assert_f64()?,
                1 => text.value = pair.assert_string()?,
                50 => text.rotation = pair.assert_f64()?,
                41 => text.relative_x_scale_factor = pair.assert_f64()?,
                51 => text.oblique_angle = pair.assert_f64()?,
                7 => text.text_style_name = pair.assert_string()?,
                71 => text.text_generation_flags = pair.assert_i16()?,
                72 => {
                    text.horizontal_text_justification = enum_from_number!(
                        HorizontalTextJustification,
                        Left,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                11 | 21 | 31 => text.second_alignment_point.set(pair)?,
                210 | 220 | 230 => text.normal.set(pair)?,
                73 => {
                    text.vertical_text_justification = enum_from_number!(
                        VerticalTextJustification,
                        Baseline,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                _ => return Ok(false),
            },
            EntityType::Tolerance(ref mut tolerance) => match pair.code {
                3 => tolerance.dimension_style_name = pair.assert_string()?,
                10 | 20 | 30 => tolerance.insertion_point.set(pair)?,
                1 => tolerance.display_text = pair.assert_string()?,
                210 | 220 | 230 => tolerance.normal.set(pair)?,
                11 | 21 | 31 => tolerance.direction_vector.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Trace(ref mut trace) => match pair.code {
                10 | 20 | 30 => trace.first_corner.set(pair)?,
                11 | 21 | 31 => trace.second_corner.set(pair)?,
                12 | 22 | 32 => trace.third_corner.set(pair)?,
                13 | 23 | 33 => trace.fourth_corner.set(pair)?,
                39 => trace.thickness = pair.assert_f64()?,
                210 | 220 | 230 => trace.normal.set(pair)?,
                _ => return Ok(false),
            },
            EntityType::Vertex(ref mut vertex) => match pair.code {
                10 | 20 | 30 => vertex.location.set(pair)?,
                40 => vertex.starting_width = pair.assert_f64()?,
                41 => vertex.ending_width = pair.assert_f64()?,
                42 => vertex.bulge = pair.assert_f64()?,
                70 => vertex.flags = pair.assert_i16()?,
                50 => vertex.curve_fit_tangent_direction = pair.assert_f64()?,
                71 => vertex.polyface_mesh_vertex_index1 = pair.assert_i16()?,
                72 => vertex.polyface_mesh_vertex_index2 = pair.assert_i16()?,
                73 => vertex.polyface_mesh_vertex_index3 = pair.assert_i16()?,
                74 => vertex.polyface_mesh_vertex_index4 = pair.assert_i16()?,
                91 => vertex.identifier = pair.assert_i32()?,
                _ => return Ok(false),
            },
            EntityType::Wipeout(ref mut wipeout) => match pair.code {
                90 => wipeout.class_version = pair.assert_i32()?,
                10 | 20 | 30 => wipeout.location.set(pair)?,
                11 | 21 | 31 => wipeout.u_vector.set(pair)?,
                12 | 22 | 32 => wipeout.v_vector.set(pair)?,
                13 | 23 => wipeout.image_size.set(pair)?,
                70 => wipeout.display_options_flags = pair.assert_i16()?,
                280 => wipeout.is_clipping_enabled = as_bool(pair.assert_i16()?),
                281 => wipeout.brightness = pair.assert_i16()?,
                282 => wipeout.contrast = pair.assert_i16()?,
                283 => wipeout.fade = pair.assert_i16()?,
                71 => wipeout.clipping_type = pair.assert_i16()?,
                91 => (), // clip vertex count; implied by the 14 pairs
                14 => wipeout.__clipping_vertices_x.push(pair.assert_f64()?),
                24 => wipeout.__clipping_vertices_y.push(pair.assert_f64()?),
                _ => return Ok(false),
            },
            EntityType::XLine(ref mut xline) => match pair.code {
                10 | 20 | 30 => xline.first_point.set(pair)?,
                11 | 21 | 31 => xline.unit_direction_vector.set(pair)?,
                _ => return Ok(false),
            },
            // kinds with custom readers never take this path
            EntityType::Attribute(_)
            | EntityType::AttributeDefinition(_)
            | EntityType::Hatch(_)
            | EntityType::LwPolyline(_)
            | EntityType::MText(_)
            | EntityType::RotatedDimension(_)
            | EntityType::RadialDimension(_)
            | EntityType::DiameterDimension(_)
            | EntityType::AngularThreePointDimension(_)
            | EntityType::OrdinateDimension(_) => return Ok(false),
        }
        Ok(true)
    }
    /// Writes the kind-specific body, subclass markers included.
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        let r13 = version >= AcadVersion::R13;
        match *self {
            EntityType::Arc(ref arc) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbCircle"))?;
                }
                if arc.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, arc.thickness))?;
                }
                writer.write_point(10, &arc.center)?;
                writer.write_code_pair(&CodePair::new_f64(40, arc.radius))?;
                if arc.normal != Vector::z_axis() {
                    writer.write_vector(210, &arc.normal)?;
                }
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbArc"))?;
                }
                writer.write_code_pair(&CodePair::new_f64(50, arc.start_angle))?;
                writer.write_code_pair(&CodePair::new_f64(51, arc.end_angle))?;
            }
            EntityType::Attribute(ref att) => {
                write_text_like(
                    r13,
                    att.thickness,
                    &att.location,
                    att.text_height,
                    &att.value,
                    writer,
                )?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbAttribute"))?;
                }
                if version >= AcadVersion::R2010 {
                    writer.write_code_pair(&CodePair::new_i16(280, att.version as i16))?;
                }
                writer.write_code_pair(&CodePair::new_string(2, &att.attribute_tag))?;
                writer.write_code_pair(&CodePair::new_i16(70, att.flags))?;
                if att.field_length != 0 {
                    writer.write_code_pair(&CodePair::new_i16(73, att.field_length))?;
                }
                write_text_like_options(att.rotation, att.relative_x_scale_factor, att.oblique_angle, &att.text_style_name, att.text_generation_flags, att.horizontal_text_justification, &att.second_alignment_point, &att.normal, writer)?;
                if att.vertical_text_justification != VerticalTextJustification::Baseline {
                    writer.write_code_pair(&CodePair::new_i16(
                        74,
                        att.vertical_text_justification as i16,
                    ))?;
                }
                if version >= AcadVersion::R2010 {
                    writer.write_code_pair(&CodePair::new_i16(
                        280,
                        as_i16(att.is_locked_in_block),
                    ))?;
                }
            }
            EntityType::AttributeDefinition(ref att) => {
                write_text_like(
                    r13,
                    att.thickness,
                    &att.location,
                    att.text_height,
                    &att.value,
                    writer,
                )?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbAttributeDefinition"))?;
                }
                if version >= AcadVersion::R2010 {
                    writer.write_code_pair(&CodePair::new_i16(280, att.version as i16))?;
                }
                writer.write_code_pair(&CodePair::new_string(3, &att.prompt))?;
                writer.write_code_pair(&CodePair::new_string(2, &att.text_tag))?;
                writer.write_code_pair(&CodePair::new_i16(70, att.flags))?;
                if att.field_length != 0 {
                    writer.write_code_pair(&CodePair::new_i16(73, att.field_length))?;
                }
                write_text_like_options(att.rotation, att.relative_x_scale_factor, att.oblique_angle, &att.text_style_name, att.text_generation_flags, att.horizontal_text_justification, &att.second_alignment_point, &att.normal, writer)?;
                if att.vertical_text_justification != VerticalTextJustification::Baseline {
                    writer.write_code_pair(&CodePair::new_i16(
                        74,
                        att.vertical_text_justification as i16,
                    ))?;
                }
                if version >= AcadVersion::R2010 {
                    writer.write_code_pair(&CodePair::new_i16(
                        280,
                        as_i16(att.is_locked_in_block),
                    ))?;
                }
            }
            EntityType::Circle(ref circle) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbCircle"))?;
                }
                if circle.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, circle.thickness))?;
                }
                writer.write_point(10, &circle.center)?;
                writer.write_code_pair(&CodePair::new_f64(40, circle.radius))?;
                if circle.normal != Vector::z_axis() {
                    writer.write_vector(210, &circle.normal)?;
                }
            }
            EntityType::RotatedDimension(ref dim) => {
                dim.dimension_base.write(version, writer)?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbAlignedDimension"))?;
                }
                if dim.insertion_point != Point::origin() {
                    writer.write_point(12, &dim.insertion_point)?;
                }
                writer.write_point(13, &dim.definition_point_2)?;
                writer.write_point(14, &dim.definition_point_3)?;
                if dim.rotation_angle != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(50, dim.rotation_angle))?;
                }
                if dim.extension_line_angle != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(52, dim.extension_line_angle))?;
                }
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbRotatedDimension"))?;
                }
            }
            EntityType::RadialDimension(ref dim) => {
                dim.dimension_base.write(version, writer)?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbRadialDimension"))?;
                }
                writer.write_point(15, &dim.definition_point_2)?;
                writer.write_code_pair(&CodePair::new_f64(40, dim.leader_length))?;
            }
            EntityType::DiameterDimension(ref dim) => {
                dim.dimension_base.write(version, writer)?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbDiametricDimension"))?;
                }
                writer.write_point(15, &dim.definition_point_2)?;
                writer.write_code_pair(&CodePair::new_f64(40, dim.leader_length))?;
            }
            EntityType::AngularThreePointDimension(ref dim) => {
                dim.dimension_base.write(version, writer)?;
                if r13 {
                    writer
                        .write_code_pair(&CodePair::new_str(100, "AcDb3PointAngularDimension"))?;
                }
                writer.write_point(13, &dim.definition_point_2)?;
                writer.write_point(14, &dim.definition_point_3)?;
                writer.write_point(15, &dim.definition_point_4)?;
                writer.write_point(16, &dim.definition_point_5)?;
            }
            EntityType::OrdinateDimension(ref dim) => {
                dim.dimension_base.write(version, writer)?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbOrdinateDimension"))?;
                }
                writer.write_point(13, &dim.definition_point_2)?;
                writer.write_point(14, &dim.definition_point_3)?;
            }
            EntityType::Ellipse(ref ellipse) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbEllipse"))?;
                }
                writer.write_point(10, &ellipse.center)?;
                writer.write_vector(11, &ellipse.major_axis)?;
                if ellipse.normal != Vector::z_axis() {
                    writer.write_vector(210, &ellipse.normal)?;
                }
                writer.write_code_pair(&CodePair::new_f64(40, ellipse.minor_axis_ratio))?;
                writer.write_code_pair(&CodePair::new_f64(41, ellipse.start_parameter))?;
                writer.write_code_pair(&CodePair::new_f64(42, ellipse.end_parameter))?;
            }
            EntityType::Face3D(ref face) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbFace"))?;
                }
                writer.write_point(10, &face.first_corner)?;
                writer.write_point(11, &face.second_corner)?;
                writer.write_point(12, &face.third_corner)?;
                writer.write_point(13, &face.fourth_corner)?;
                if face.edge_flags != 0 {
                    writer.write_code_pair(&CodePair::new_i16(70, face.edge_flags))?;
                }
            }
            EntityType::Hatch(ref hatch) => {
                write_hatch(hatch, writer)?;
            }
            EntityType::Insert(ref insert) => {
                if !insert.__attributes_and_handles.is_empty() {
                    writer.write_code_pair(&CodePair::new_i16(66, 1))?;
                }
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbBlockReference"))?;
                }
                writer.write_code_pair(&CodePair::new_string(2, &insert.name))?;
                writer.write_point(10, &insert.location)?;
                if insert.x_scale_factor != 1.0 {
                    writer.write_code_pair(&CodePair::new_f64(41, insert.x_scale_factor))?;
                }
                if insert.y_scale_factor != 1.0 {
                    writer.write_code_pair(&CodePair::new_f64(42, insert.y_scale_factor))?;
                }
                if insert.z_scale_factor != 1.0 {
                    writer.write_code_pair(&CodePair::new_f64(43, insert.z_scale_factor))?;
                }
                if insert.rotation != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(50, insert.rotation))?;
                }
                if insert.column_count != 1 {
                    writer.write_code_pair(&CodePair::new_i16(70, insert.column_count))?;
                }
                if insert.row_count != 1 {
                    writer.write_code_pair(&CodePair::new_i16(71, insert.row_count))?;
                }
                if insert.column_spacing != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(44, insert.column_spacing))?;
                }
                if insert.row_spacing != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(45, insert.row_spacing))?;
                }
                if insert.normal != Vector::z_axis() {
                    writer.write_vector(210, &insert.normal)?;
                }
            }
            EntityType::Leader(ref leader) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbLeader"))?;
                }
                writer.write_code_pair(&CodePair::new_string(3, &leader.dimension_style_name))?;
                writer.write_code_pair(&CodePair::new_i16(71, as_i16(leader.use_arrowheads)))?;
                writer.write_code_pair(&CodePair::new_i16(72, leader.path_type as i16))?;
                writer.write_code_pair(&CodePair::new_i16(73, leader.annotation_type as i16))?;
                writer.write_code_pair(&CodePair::new_i16(74, leader.hookline_direction))?;
                writer.write_code_pair(&CodePair::new_i16(75, as_i16(leader.use_hookline)))?;
                if leader.text_annotation_height != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(40, leader.text_annotation_height))?;
                }
                if leader.text_annotation_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(41, leader.text_annotation_width))?;
                }
                writer.write_code_pair(&CodePair::new_i16(76, leader.vertices.len() as i16))?;
                for vertex in &leader.vertices {
                    writer.write_point(10, vertex)?;
                }
                if leader.normal != Vector::z_axis() {
                    writer.write_vector(210, &leader.normal)?;
                }
                writer.write_vector(211, &leader.horizontal_direction)?;
                if leader.block_offset != Vector::zero() {
                    writer.write_vector(212, &leader.block_offset)?;
                }
                if leader.annotation_offset != Vector::zero() {
                    writer.write_vector(213, &leader.annotation_offset)?;
                }
            }
            EntityType::Line(ref line) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbLine"))?;
                }
                if line.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, line.thickness))?;
                }
                writer.write_point(10, &line.p1)?;
                writer.write_point(11, &line.p2)?;
                if line.normal != Vector::z_axis() {
                    writer.write_vector(210, &line.normal)?;
                }
            }
            EntityType::LwPolyline(ref poly) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbPolyline"))?;
                }
                writer.write_code_pair(&CodePair::new_i32(90, poly.vertices.len() as i32))?;
                writer.write_code_pair(&CodePair::new_i16(70, poly.flags))?;
                if poly.constant_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(43, poly.constant_width))?;
                }
                if poly.elevation != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(38, poly.elevation))?;
                }
                if poly.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, poly.thickness))?;
                }
                for vertex in &poly.vertices {
                    writer.write_code_pair(&CodePair::new_f64(10, vertex.x))?;
                    writer.write_code_pair(&CodePair::new_f64(20, vertex.y))?;
                    if version >= AcadVersion::R2010 && vertex.id != 0 {
                        writer.write_code_pair(&CodePair::new_i32(91, vertex.id))?;
                    }
                    if vertex.starting_width != 0.0 {
                        writer.write_code_pair(&CodePair::new_f64(40, vertex.starting_width))?;
                    }
                    if vertex.ending_width != 0.0 {
                        writer.write_code_pair(&CodePair::new_f64(41, vertex.ending_width))?;
                    }
                    if vertex.bulge != 0.0 {
                        writer.write_code_pair(&CodePair::new_f64(42, vertex.bulge))?;
                    }
                }
                if poly.normal != Vector::z_axis() {
                    writer.write_vector(210, &poly.normal)?;
                }
            }
            EntityType::MLine(ref mline) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbMline"))?;
                }
                writer.write_code_pair(&CodePair::new_string(2, &mline.style_name))?;
                if !mline.__style_handle.is_empty() {
                    writer.write_code_pair(&CodePair::new_string(
                        340,
                        &mline.__style_handle.as_string(),
                    ))?;
                }
                writer.write_code_pair(&CodePair::new_f64(40, mline.scale_factor))?;
                writer.write_code_pair(&CodePair::new_i16(70, mline.justification as i16))?;
                writer.write_code_pair(&CodePair::new_i16(71, mline.flags))?;
                writer.write_code_pair(&CodePair::new_i16(72, mline.vertices.len() as i16))?;
                writer.write_code_pair(&CodePair::new_i16(
                    73,
                    mline.segment_directions.len() as i16,
                ))?;
                writer.write_point(10, &mline.start_point)?;
                if mline.normal != Vector::z_axis() {
                    writer.write_vector(210, &mline.normal)?;
                }
                for vertex in &mline.vertices {
                    writer.write_point(11, vertex)?;
                }
                for direction in &mline.segment_directions {
                    writer.write_vector(12, direction)?;
                }
                for direction in &mline.miter_directions {
                    writer.write_vector(13, direction)?;
                }
                for parameter in &mline.parameters {
                    writer.write_code_pair(&CodePair::new_f64(41, *parameter))?;
                }
                for parameter in &mline.area_fill_parameters {
                    writer.write_code_pair(&CodePair::new_f64(42, *parameter))?;
                }
            }
            EntityType::ModelPoint(ref point) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbPoint"))?;
                }
                writer.write_point(10, &point.location)?;
                if point.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, point.thickness))?;
                }
                if point.normal != Vector::z_axis() {
                    writer.write_vector(210, &point.normal)?;
                }
                if point.angle != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(50, point.angle))?;
                }
            }
            EntityType::MText(ref mtext) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbMText"))?;
                }
                writer.write_point(10, &mtext.insertion_point)?;
                writer.write_code_pair(&CodePair::new_f64(40, mtext.initial_text_height))?;
                writer.write_code_pair(&CodePair::new_f64(41, mtext.reference_rectangle_width))?;
                writer.write_code_pair(&CodePair::new_i16(71, mtext.attachment_point as i16))?;
                writer.write_code_pair(&CodePair::new_i16(72, mtext.drawing_direction as i16))?;
                // long text spills into 3-coded chunks with the tail on 1;
                // chunks break only at character boundaries
                let mut chunk = String::new();
                for c in mtext.text.chars() {
                    if chunk.len() + c.len_utf8() > 250 {
                        writer.write_code_pair(&CodePair::new_string(3, &chunk))?;
                        chunk.clear();
                    }
                    chunk.push(c);
                }
                writer.write_code_pair(&CodePair::new_string(1, &chunk))?;
                if mtext.text_style_name != "STANDARD" {
                    writer.write_code_pair(&CodePair::new_string(7, &mtext.text_style_name))?;
                }
                if mtext.normal != Vector::z_axis() {
                    writer.write_vector(210, &mtext.normal)?;
                }
                if mtext.x_axis_direction != Vector::x_axis() {
                    writer.write_vector(11, &mtext.x_axis_direction)?;
                }
                if mtext.horizontal_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(42, mtext.horizontal_width))?;
                }
                if mtext.vertical_height != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(43, mtext.vertical_height))?;
                }
                writer.write_code_pair(&CodePair::new_f64(50, mtext.rotation_angle))?;
                if mtext.line_spacing_style != TextLineSpacingStyle::AtLeast {
                    writer
                        .write_code_pair(&CodePair::new_i16(73, mtext.line_spacing_style as i16))?;
                }
                if mtext.line_spacing_factor != 1.0 {
                    writer.write_code_pair(&CodePair::new_f64(44, mtext.line_spacing_factor))?;
                }
                if version >= AcadVersion::R2004 && mtext.background_fill_setting != 0 {
                    writer
                        .write_code_pair(&CodePair::new_i32(90, mtext.background_fill_setting))?;
                    writer.write_code_pair(&CodePair::new_i16(
                        63,
                        mtext.background_fill_color.raw_value(),
                    ))?;
                    writer.write_code_pair(&CodePair::new_f64(45, mtext.fill_box_scale))?;
                    writer.write_code_pair(&CodePair::new_i32(
                        441,
                        mtext.background_fill_color_transparency,
                    ))?;
                }
                if version >= AcadVersion::R2007 && mtext.column_type != 0 {
                    writer.write_code_pair(&CodePair::new_i16(75, mtext.column_type))?;
                    writer.write_code_pair(&CodePair::new_i16(76, mtext.column_count))?;
                    writer.write_code_pair(&CodePair::new_i16(
                        78,
                        as_i16(mtext.is_column_flow_reversed),
                    ))?;
                    writer.write_code_pair(&CodePair::new_i16(
                        79,
                        as_i16(mtext.is_column_auto_height),
                    ))?;
                    writer.write_code_pair(&CodePair::new_f64(48, mtext.column_width))?;
                    writer.write_code_pair(&CodePair::new_f64(49, mtext.column_gutter))?;
                    writer.write_code_pair(&CodePair::new_f64(
                        50,
                        mtext.column_heights.len() as f64,
                    ))?;
                    for height in &mtext.column_heights {
                        writer.write_code_pair(&CodePair::new_f64(50, *height))?;
                    }
                }
            }
            EntityType::Polyline(ref poly) => {
                writer.write_code_pair(&CodePair::new_i16(66, 1))?;
                if r13 {
                    let subclass = if poly.is_3d_polyline() {
                        "AcDb3dPolyline"
                    } else {
                        "AcDb2dPolyline"
                    };
                    writer.write_code_pair(&CodePair::new_string(100, subclass))?;
                }
                writer.write_point(10, &poly.location)?;
                if poly.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, poly.thickness))?;
                }
                if poly.flags != 0 {
                    writer.write_code_pair(&CodePair::new_i16(70, poly.flags))?;
                }
                if poly.default_starting_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(40, poly.default_starting_width))?;
                }
                if poly.default_ending_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(41, poly.default_ending_width))?;
                }
                if poly.polygon_mesh_m_vertex_count != 0 {
                    writer.write_code_pair(&CodePair::new_i16(
                        71,
                        poly.polygon_mesh_m_vertex_count,
                    ))?;
                }
                if poly.polygon_mesh_n_vertex_count != 0 {
                    writer.write_code_pair(&CodePair::new_i16(
                        72,
                        poly.polygon_mesh_n_vertex_count,
                    ))?;
                }
                if poly.smooth_surface_m_density != 0 {
                    writer
                        .write_code_pair(&CodePair::new_i16(73, poly.smooth_surface_m_density))?;
                }
                if poly.smooth_surface_n_density != 0 {
                    writer
                        .write_code_pair(&CodePair::new_i16(74, poly.smooth_surface_n_density))?;
                }
                if poly.surface_type != PolylineCurvedAndSmoothSurfaceType::None {
                    writer.write_code_pair(&CodePair::new_i16(75, poly.surface_type as i16))?;
                }
                if poly.normal != Vector::z_axis() {
                    writer.write_vector(210, &poly.normal)?;
                }
            }
            EntityType::Ray(ref ray) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbRay"))?;
                }
                writer.write_point(10, &ray.point)?;
                writer.write_vector(11, &ray.direction_vector)?;
            }
            EntityType::Region(ref region) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbModelerGeometry"))?;
                }
                writer.write_code_pair(&CodePair::new_i16(70, region.format_version))?;
                for line in &region.proprietary_data {
                    writer.write_code_pair(&CodePair::new_string(1, line))?;
                }
                for line in &region.additional_proprietary_data {
                    writer.write_code_pair(&CodePair::new_string(3, line))?;
                }
            }
            EntityType::Seqend(_) => (),
            EntityType::Shape(ref shape) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbShape"))?;
                }
                if shape.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, shape.thickness))?;
                }
                writer.write_point(10, &shape.location)?;
                writer.write_code_pair(&CodePair::new_f64(40, shape.size))?;
                writer.write_code_pair(&CodePair::new_string(2, &shape.name))?;
                if shape.rotation_angle != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(50, shape.rotation_angle))?;
                }
                if shape.relative_x_scale_factor != 1.0 {
                    writer
                        .write_code_pair(&CodePair::new_f64(41, shape.relative_x_scale_factor))?;
                }
                if shape.oblique_angle != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(51, shape.oblique_angle))?;
                }
                if shape.normal != Vector::z_axis() {
                    writer.write_vector(210, &shape.normal)?;
                }
            }
            EntityType::Solid(ref solid) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbTrace"))?;
                }
                writer.write_point(10, &solid.first_corner)?;
                writer.write_point(11, &solid.second_corner)?;
                writer.write_point(12, &solid.third_corner)?;
                writer.write_point(13, &solid.fourth_corner)?;
                if solid.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, solid.thickness))?;
                }
                if solid.normal != Vector::z_axis() {
                    writer.write_vector(210, &solid.normal)?;
                }
            }
            EntityType::Spline(ref spline) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbSpline"))?;
                }
                if spline.normal != Vector::z_axis() {
                    writer.write_vector(210, &spline.normal)?;
                }
                writer.write_code_pair(&CodePair::new_i16(70, spline.flags))?;
                writer.write_code_pair(&CodePair::new_i16(71, spline.degree_of_curve))?;
                writer.write_code_pair(&CodePair::new_i16(
                    72,
                    spline.knot_values.len() as i16,
                ))?;
                writer.write_code_pair(&CodePair::new_i16(
                    73,
                    spline.control_points.len() as i16,
                ))?;
                writer.write_code_pair(&CodePair::new_i16(74, spline.fit_points.len() as i16))?;
                if spline.knot_tolerance != 0.000_000_1 {
                    writer.write_code_pair(&CodePair::new_f64(42, spline.knot_tolerance))?;
                }
                if spline.control_point_tolerance != 0.000_000_1 {
                    writer
                        .write_code_pair(&CodePair::new_f64(43, spline.control_point_tolerance))?;
                }
                if spline.fit_tolerance != 0.000_000_000_1 {
                    writer.write_code_pair(&CodePair::new_f64(44, spline.fit_tolerance))?;
                }
                if spline.start_tangent != Point::origin() {
                    writer.write_point(12, &spline.start_tangent)?;
                }
                if spline.end_tangent != Point::origin() {
                    writer.write_point(13, &spline.end_tangent)?;
                }
                for knot in &spline.knot_values {
                    writer.write_code_pair(&CodePair::new_f64(40, *knot))?;
                }
                for weight in &spline.weights {
                    writer.write_code_pair(&CodePair::new_f64(41, *weight))?;
                }
                for point in &spline.control_points {
                    writer.write_point(10, point)?;
                }
                for point in &spline.fit_points {
                    writer.write_point(11, point)?;
                }
            }
            EntityType::Text(ref text) => {
                write_text_like(
                    r13,
                    text.thickness,
                    &text.location,
                    text.text_height,
                    &text.value,
                    writer,
                )?;
                write_text_like_options(text.rotation, text.relative_x_scale_factor, text.oblique_angle, &text.text_style_name, text.text_generation_flags, text.horizontal_text_justification, &text.second_alignment_point, &text.normal, writer)?;
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbText"))?;
                }
                if text.vertical_text_justification != VerticalTextJustification::Baseline {
                    writer.write_code_pair(&CodePair::new_i16(
                        73,
                        text.vertical_text_justification as i16,
                    ))?;
                }
            }
            EntityType::Tolerance(ref tolerance) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbFcf"))?;
                }
                writer
                    .write_code_pair(&CodePair::new_string(3, &tolerance.dimension_style_name))?;
                writer.write_point(10, &tolerance.insertion_point)?;
                writer.write_code_pair(&CodePair::new_string(1, &tolerance.display_text))?;
                if tolerance.normal != Vector::z_axis() {
                    writer.write_vector(210, &tolerance.normal)?;
                }
                writer.write_vector(11, &tolerance.direction_vector)?;
            }
            EntityType::Trace(ref trace) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbTrace"))?;
                }
                writer.write_point(10, &trace.first_corner)?;
                writer.write_point(11, &trace.second_corner)?;
                writer.write_point(12, &trace.third_corner)?;
                writer.write_point(13, &trace.fourth_corner)?;
                if trace.thickness != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(39, trace.thickness))?;
                }
                if trace.normal != Vector::z_axis() {
                    writer.write_vector(210, &trace.normal)?;
                }
            }
            EntityType::Vertex(ref vertex) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbVertex"))?;
                    let subclass = if vertex.flags & 32 != 0 {
                        "AcDb3dPolylineVertex"
                    } else {
                        "AcDb2dVertex"
                    };
                    writer.write_code_pair(&CodePair::new_string(100, subclass))?;
                }
                writer.write_point(10, &vertex.location)?;
                if vertex.starting_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(40, vertex.starting_width))?;
                }
                if vertex.ending_width != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(41, vertex.ending_width))?;
                }
                if vertex.bulge != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(42, vertex.bulge))?;
                }
                if vertex.flags != 0 {
                    writer.write_code_pair(&CodePair::new_i16(70, vertex.flags))?;
                }
                if vertex.curve_fit_tangent_direction != 0.0 {
                    writer.write_code_pair(&CodePair::new_f64(
                        50,
                        vertex.curve_fit_tangent_direction,
                    ))?;
                }
                for (code, index) in [
                    (71, vertex.polyface_mesh_vertex_index1),
                    (72, vertex.polyface_mesh_vertex_index2),
                    (73, vertex.polyface_mesh_vertex_index3),
                    (74, vertex.polyface_mesh_vertex_index4),
                ] {
                    if index != 0 {
                        writer.write_code_pair(&CodePair::new_i16(code, index))?;
                    }
                }
                if vertex.identifier != 0 {
                    writer.write_code_pair(&CodePair::new_i32(91, vertex.identifier))?;
                }
            }
            EntityType::Wipeout(ref wipeout) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbWipeout"))?;
                }
                writer.write_code_pair(&CodePair::new_i32(90, wipeout.class_version))?;
                writer.write_point(10, &wipeout.location)?;
                writer.write_vector(11, &wipeout.u_vector)?;
                writer.write_vector(12, &wipeout.v_vector)?;
                writer.write_code_pair(&CodePair::new_f64(13, wipeout.image_size.x))?;
                writer.write_code_pair(&CodePair::new_f64(23, wipeout.image_size.y))?;
                writer.write_code_pair(&CodePair::new_i16(70, wipeout.display_options_flags))?;
                writer
                    .write_code_pair(&CodePair::new_i16(280, as_i16(wipeout.is_clipping_enabled)))?;
                writer.write_code_pair(&CodePair::new_i16(281, wipeout.brightness))?;
                writer.write_code_pair(&CodePair::new_i16(282, wipeout.contrast))?;
                writer.write_code_pair(&CodePair::new_i16(283, wipeout.fade))?;
                writer.write_code_pair(&CodePair::new_i16(71, wipeout.clipping_type))?;
                writer.write_code_pair(&CodePair::new_i32(
                    91,
                    wipeout.clipping_vertices.len() as i32,
                ))?;
                for vertex in &wipeout.clipping_vertices {
                    writer.write_code_pair(&CodePair::new_f64(14, vertex.x))?;
                    writer.write_code_pair(&CodePair::new_f64(24, vertex.y))?;
                }
            }
            EntityType::XLine(ref xline) => {
                if r13 {
                    writer.write_code_pair(&CodePair::new_str(100, "AcDbXline"))?;
                }
                writer.write_point(10, &xline.first_point)?;
                writer.write_vector(11, &xline.unit_direction_vector)?;
            }
        }

        Ok(())
    }
}

fn write_text_like<T: Write>(
    r13: bool,
    thickness: f64,
    location: &Point,
    text_height: f64,
    value: &str,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()> {
    if r13 {
        writer.write_code_pair(&CodePair::new_str(100, "AcDbText"))?;
    }
    if thickness != 0.0 {
        writer.write_code_pair(&CodePair::new_f64(39, thickness))?;
    }
    writer.write_point(10, location)?;
    writer.write_code_pair(&CodePair::new_f64(40, text_height))?;
    writer.write_code_pair(&CodePair::new_string(1, value))?;
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_text_like_options<T: Write>(
    rotation: f64,
    relative_x_scale_factor: f64,
    oblique_angle: f64,
    text_style_name: &str,
    text_generation_flags: i16,
    horizontal_text_justification: HorizontalTextJustification,
    second_alignment_point: &Point,
    normal: &Vector,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()> {
    if rotation != 0.0 {
        writer.write_code_pair(&CodePair::new_f64(50, rotation))?;
    }
    if relative_x_scale_factor != 1.0 {
        writer.write_code_pair(&CodePair::new_f64(41, relative_x_scale_factor))?;
    }
    if oblique_angle != 0.0 {
        writer.write_code_pair(&CodePair::new_f64(51, oblique_angle))?;
    }
    if text_style_name != "STANDARD" {
        writer.write_code_pair(&CodePair::new_string(7, text_style_name))?;
    }
    if text_generation_flags != 0 {
        writer.write_code_pair(&CodePair::new_i16(71, text_generation_flags))?;
    }
    if horizontal_text_justification != HorizontalTextJustification::Left {
        writer.write_code_pair(&CodePair::new_i16(72, horizontal_text_justification as i16))?;
    }
    if *second_alignment_point != Point::origin() {
        writer.write_point(11, second_alignment_point)?;
    }
    if *normal != Vector::z_axis() {
        writer.write_vector(210, normal)?;
    }
    Ok(())
}

//------------------------------------------------------------------------------
//                                                                         Hatch
//------------------------------------------------------------------------------
fn expect_f64<T: Read>(iter: &mut CodePairBuffer<T>, code: i32) -> DxfResult<f64> {
    match iter.next() {
        Some(Ok(ref pair)) if pair.code == code => pair.assert_f64(),
        Some(Ok(pair)) => Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
        Some(Err(e)) => Err(e),
        None => Err(DxfError::UnexpectedEndOfInput),
    }
}

fn expect_i16<T: Read>(iter: &mut CodePairBuffer<T>, code: i32) -> DxfResult<i16> {
    match iter.next() {
        Some(Ok(ref pair)) if pair.code == code => pair.assert_i16(),
        Some(Ok(pair)) => Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
        Some(Err(e)) => Err(e),
        None => Err(DxfError::UnexpectedEndOfInput),
    }
}

fn expect_i32<T: Read>(iter: &mut CodePairBuffer<T>, code: i32) -> DxfResult<i32> {
    match iter.next() {
        Some(Ok(ref pair)) if pair.code == code => pair.assert_i32(),
        Some(Ok(pair)) => Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
        Some(Err(e)) => Err(e),
        None => Err(DxfError::UnexpectedEndOfInput),
    }
}

fn optional_f64<T: Read>(iter: &mut CodePairBuffer<T>, code: i32) -> DxfResult<Option<f64>> {
    match iter.next() {
        Some(Ok(pair)) => {
            if pair.code == code {
                Ok(Some(pair.assert_f64()?))
            } else {
                iter.put_back(Ok(pair));
                Ok(None)
            }
        }
        Some(Err(e)) => Err(e),
        None => Ok(None),
    }
}

fn read_hatch_boundary_path<T: Read>(iter: &mut CodePairBuffer<T>) -> DxfResult<HatchBoundaryPath> {
    let mut path = HatchBoundaryPath {
        path_type_flags: expect_i32(iter, 92)?,
        ..Default::default()
    };
    if path.is_polyline_path() {
        let has_bulge = expect_i16(iter, 72)? != 0;
        path.is_polyline_closed = expect_i16(iter, 73)? != 0;
        let vertex_count = expect_i32(iter, 93)?;
        for _ in 0..vertex_count {
            let x = expect_f64(iter, 10)?;
            let y = expect_f64(iter, 20)?;
            let bulge = if has_bulge {
                optional_f64(iter, 42)?.unwrap_or(0.0)
            } else {
                0.0
            };
            path.polyline_vertices.push(LwPolylineVertex {
                x,
                y,
                bulge,
                ..Default::default()
            });
        }
    } else {
        let edge_count = expect_i32(iter, 93)?;
        for _ in 0..edge_count {
            path.edges.push(read_hatch_boundary_edge(iter)?);
        }
    }

    // the path ends with the handles of its source boundary objects
    let source_count = expect_i32(iter, 97)?;
    for _ in 0..source_count {
        match iter.next() {
            Some(Ok(ref pair)) if pair.code == 330 => {
                path.source_boundary_handles.push(pair.as_handle()?)
            }
            Some(Ok(pair)) => return Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
            Some(Err(e)) => return Err(e),
            None => return Err(DxfError::UnexpectedEndOfInput),
        }
    }

    Ok(path)
}

fn read_hatch_boundary_edge<T: Read>(iter: &mut CodePairBuffer<T>) -> DxfResult<HatchBoundaryEdge> {
    match expect_i16(iter, 72)? {
        1 => {
            let x1 = expect_f64(iter, 10)?;
            let y1 = expect_f64(iter, 20)?;
            let x2 = expect_f64(iter, 11)?;
            let y2 = expect_f64(iter, 21)?;
            Ok(HatchBoundaryEdge::Line {
                p1: Point::new(x1, y1, 0.0),
                p2: Point::new(x2, y2, 0.0),
            })
        }
        2 => {
            let x = expect_f64(iter, 10)?;
            let y = expect_f64(iter, 20)?;
            let radius = expect_f64(iter, 40)?;
            let start_angle = expect_f64(iter, 50)?;
            let end_angle = expect_f64(iter, 51)?;
            let is_counter_clockwise = expect_i16(iter, 73)? != 0;
            Ok(HatchBoundaryEdge::CircularArc {
                center: Point::new(x, y, 0.0),
                radius,
                start_angle,
                end_angle,
                is_counter_clockwise,
            })
        }
        3 => {
            let x = expect_f64(iter, 10)?;
            let y = expect_f64(iter, 20)?;
            let major_x = expect_f64(iter, 11)?;
            let major_y = expect_f64(iter, 21)?;
            let minor_axis_ratio = expect_f64(iter, 40)?;
            let start_angle = expect_f64(iter, 50)?;
            let end_angle = expect_f64(iter, 51)?;
            let is_counter_clockwise = expect_i16(iter, 73)? != 0;
            Ok(HatchBoundaryEdge::EllipticArc {
                center: Point::new(x, y, 0.0),
                major_axis: Vector::new(major_x, major_y, 0.0),
                minor_axis_ratio,
                start_angle,
                end_angle,
                is_counter_clockwise,
            })
        }
        4 => {
            let degree = expect_i32(iter, 94)?;
            let is_rational = expect_i16(iter, 73)? != 0;
            let is_periodic = expect_i16(iter, 74)? != 0;
            let knot_count = expect_i32(iter, 95)?;
            let control_point_count = expect_i32(iter, 96)?;
            let mut knot_values = vec![];
            for _ in 0..knot_count {
                knot_values.push(expect_f64(iter, 40)?);
            }
            let mut control_points = vec![];
            let mut weights = vec![];
            for _ in 0..control_point_count {
                let x = expect_f64(iter, 10)?;
                let y = expect_f64(iter, 20)?;
                control_points.push(Point::new(x, y, 0.0));
                if let Some(weight) = optional_f64(iter, 42)? {
                    weights.push(weight);
                }
            }
            let fit_count = expect_i32(iter, 97)?;
            let mut fit_points = vec![];
            for _ in 0..fit_count {
                let x = expect_f64(iter, 11)?;
                let y = expect_f64(iter, 21)?;
                fit_points.push(Point::new(x, y, 0.0));
            }
            let start_tangent = Point::new(expect_f64(iter, 12)?, expect_f64(iter, 22)?, 0.0);
            let end_tangent = Point::new(expect_f64(iter, 13)?, expect_f64(iter, 23)?, 0.0);
            Ok(HatchBoundaryEdge::Spline {
                degree,
                is_rational,
                is_periodic,
                knot_values,
                control_points,
                weights,
                fit_points,
                start_tangent,
                end_tangent,
            })
        }
        other => Err(DxfError::InvariantViolation(format!(
            "unsupported hatch boundary edge type {}",
            other
        ))),
    }
}

fn read_hatch_pattern_definition_line<T: Read>(
    iter: &mut CodePairBuffer<T>,
) -> DxfResult<HatchPatternDefinitionLine> {
    let mut line = HatchPatternDefinitionLine {
        angle: expect_f64(iter, 53)?,
        ..Default::default()
    };
    line.base_point = Point::new(expect_f64(iter, 43)?, expect_f64(iter, 44)?, 0.0);
    line.offset = Vector::new(expect_f64(iter, 45)?, expect_f64(iter, 46)?, 0.0);
    let dash_count = expect_i16(iter, 79)?;
    for _ in 0..dash_count {
        line.dash_lengths.push(expect_f64(iter, 49)?);
    }
    Ok(line)
}

fn write_hatch<T: Write>(hatch: &Hatch, writer: &mut CodePairWriter<T>) -> DxfResult<()> {
    writer.write_code_pair(&CodePair::new_str(100, "AcDbHatch"))?;
    writer.write_point(10, &hatch.elevation_point)?;
    writer.write_vector(210, &hatch.normal)?;
    writer.write_code_pair(&CodePair::new_string(2, &hatch.pattern_name))?;
    writer.write_code_pair(&CodePair::new_i16(70, as_i16(hatch.is_solid_fill)))?;
    writer.write_code_pair(&CodePair::new_i16(71, as_i16(hatch.is_associative)))?;
    writer.write_code_pair(&CodePair::new_i32(91, hatch.boundary_paths.len() as i32))?;
    for path in &hatch.boundary_paths {
        writer.write_code_pair(&CodePair::new_i32(92, path.path_type_flags))?;
        if path.is_polyline_path() {
            let has_bulge = path.polyline_vertices.iter().any(|v| v.bulge != 0.0);
            writer.write_code_pair(&CodePair::new_i16(72, as_i16(has_bulge)))?;
            writer.write_code_pair(&CodePair::new_i16(73, as_i16(path.is_polyline_closed)))?;
            writer.write_code_pair(&CodePair::new_i32(
                93,
                path.polyline_vertices.len() as i32,
            ))?;
            for vertex in &path.polyline_vertices {
                writer.write_code_pair(&CodePair::new_f64(10, vertex.x))?;
                writer.write_code_pair(&CodePair::new_f64(20, vertex.y))?;
                if has_bulge {
                    writer.write_code_pair(&CodePair::new_f64(42, vertex.bulge))?;
                }
            }
        } else {
            writer.write_code_pair(&CodePair::new_i32(93, path.edges.len() as i32))?;
            for edge in &path.edges {
                write_hatch_boundary_edge(edge, writer)?;
            }
        }
        writer.write_code_pair(&CodePair::new_i32(
            97,
            path.source_boundary_handles.len() as i32,
        ))?;
        for handle in &path.source_boundary_handles {
            writer.write_code_pair(&CodePair::new_string(330, &handle.as_string()))?;
        }
    }
    writer.write_code_pair(&CodePair::new_i16(75, hatch.hatch_style as i16))?;
    writer.write_code_pair(&CodePair::new_i16(76, hatch.pattern_type as i16))?;
    if !hatch.is_solid_fill {
        writer.write_code_pair(&CodePair::new_f64(52, hatch.pattern_angle))?;
        writer.write_code_pair(&CodePair::new_f64(41, hatch.pattern_scale))?;
        writer.write_code_pair(&CodePair::new_i16(77, as_i16(hatch.is_pattern_double)))?;
        writer.write_code_pair(&CodePair::new_i16(
            78,
            hatch.pattern_definition_lines.len() as i16,
        ))?;
        for line in &hatch.pattern_definition_lines {
            writer.write_code_pair(&CodePair::new_f64(53, line.angle))?;
            writer.write_code_pair(&CodePair::new_f64(43, line.base_point.x))?;
            writer.write_code_pair(&CodePair::new_f64(44, line.base_point.y))?;
            writer.write_code_pair(&CodePair::new_f64(45, line.offset.x))?;
            writer.write_code_pair(&CodePair::new_f64(46, line.offset.y))?;
            writer.write_code_pair(&CodePair::new_i16(79, line.dash_lengths.len() as i16))?;
            for dash in &line.dash_lengths {
                writer.write_code_pair(&CodePair::new_f64(49, *dash))?;
            }
        }
    }
    if hatch.pixel_size != 0.0 {
        writer.write_code_pair(&CodePair::new_f64(47, hatch.pixel_size))?;
    }
    writer.write_code_pair(&CodePair::new_i32(98, hatch.seed_points.len() as i32))?;
    for point in &hatch.seed_points {
        writer.write_code_pair(&CodePair::new_f64(10, point.x))?;
        writer.write_code_pair(&CodePair::new_f64(20, point.y))?;
    }
    Ok(())
}

fn write_hatch_boundary_edge<T: Write>(
    edge: &HatchBoundaryEdge,
    writer: &mut CodePairWriter<T>,
) -> DxfResult<()> {
    match edge {
        HatchBoundaryEdge::Line { p1, p2 } => {
            writer.write_code_pair(&CodePair::new_i16(72, 1))?;
            writer.write_code_pair(&CodePair::new_f64(10, p1.x))?;
            writer.write_code_pair(&CodePair::new_f64(20, p1.y))?;
            writer.write_code_pair(&CodePair::new_f64(11, p2.x))?;
            writer.write_code_pair(&CodePair::new_f64(21, p2.y))?;
        }
        HatchBoundaryEdge::CircularArc {
            center,
            radius,
            start_angle,
            end_angle,
            is_counter_clockwise,
        } => {
            writer.write_code_pair(&CodePair::new_i16(72, 2))?;
            writer.write_code_pair(&CodePair::new_f64(10, center.x))?;
            writer.write_code_pair(&CodePair::new_f64(20, center.y))?;
            writer.write_code_pair(&CodePair::new_f64(40, *radius))?;
            writer.write_code_pair(&CodePair::new_f64(50, *start_angle))?;
            writer.write_code_pair(&CodePair::new_f64(51, *end_angle))?;
            writer.write_code_pair(&CodePair::new_i16(73, as_i16(*is_counter_clockwise)))?;
        }
        HatchBoundaryEdge::EllipticArc {
            center,
            major_axis,
            minor_axis_ratio,
            start_angle,
            end_angle,
            is_counter_clockwise,
        } => {
            writer.write_code_pair(&CodePair::new_i16(72, 3))?;
            writer.write_code_pair(&CodePair::new_f64(10, center.x))?;
            writer.write_code_pair(&CodePair::new_f64(20, center.y))?;
            writer.write_code_pair(&CodePair::new_f64(11, major_axis.x))?;
            writer.write_code_pair(&CodePair::new_f64(21, major_axis.y))?;
            writer.write_code_pair(&CodePair::new_f64(40, *minor_axis_ratio))?;
            writer.write_code_pair(&CodePair::new_f64(50, *start_angle))?;
            writer.write_code_pair(&CodePair::new_f64(51, *end_angle))?;
            writer.write_code_pair(&CodePair::new_i16(73, as_i16(*is_counter_clockwise)))?;
        }
        HatchBoundaryEdge::Spline {
            degree,
            is_rational,
            is_periodic,
            knot_values,
            control_points,
            weights,
            fit_points,
            start_tangent,
            end_tangent,
        } => {
            writer.write_code_pair(&CodePair::new_i16(72, 4))?;
            writer.write_code_pair(&CodePair::new_i32(94, *degree))?;
            writer.write_code_pair(&CodePair::new_i16(73, as_i16(*is_rational)))?;
            writer.write_code_pair(&CodePair::new_i16(74, as_i16(*is_periodic)))?;
            writer.write_code_pair(&CodePair::new_i32(95, knot_values.len() as i32))?;
            writer.write_code_pair(&CodePair::new_i32(96, control_points.len() as i32))?;
            for knot in knot_values {
                writer.write_code_pair(&CodePair::new_f64(40, *knot))?;
            }
            for (i, point) in control_points.iter().enumerate() {
                writer.write_code_pair(&CodePair::new_f64(10, point.x))?;
                writer.write_code_pair(&CodePair::new_f64(20, point.y))?;
                if let Some(weight) = weights.get(i) {
                    writer.write_code_pair(&CodePair::new_f64(42, *weight))?;
                }
            }
            writer.write_code_pair(&CodePair::new_i32(97, fit_points.len() as i32))?;
            for point in fit_points {
                writer.write_code_pair(&CodePair::new_f64(11, point.x))?;
                writer.write_code_pair(&CodePair::new_f64(21, point.y))?;
            }
            writer.write_code_pair(&CodePair::new_f64(12, start_tangent.x))?;
            writer.write_code_pair(&CodePair::new_f64(22, start_tangent.y))?;
            writer.write_code_pair(&CodePair::new_f64(13, end_tangent.x))?;
            writer.write_code_pair(&CodePair::new_f64(23, end_tangent.y))?;
        }
    }
    Ok(())
}

//------------------------------------------------------------------------------
//                                                              child ownership
//------------------------------------------------------------------------------
impl Insert {
    pub fn add_attribute(&mut self, drawing: &mut Drawing, attribute: Attribute) {
        let handle = drawing.next_handle();
        self.__attributes_and_handles.push((attribute, handle));
    }
}

impl Polyline {
    pub fn add_vertex(&mut self, drawing: &mut Drawing, vertex: Vertex) {
        let handle = drawing.next_handle();
        self.__vertices_and_handles.push((vertex, handle));
    }
}
