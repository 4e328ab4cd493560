//! The object codec: decoding OBJECTS-section records and emitting them
//! back.  The data model lives in `objects.rs`.

use std::io::{Read, Write};

use enum_primitive::FromPrimitive;

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::enums::*;
use crate::error::{DxfError, DxfResult};
use crate::extension_data;
use crate::extension_data::ExtensionGroup;
use crate::handle_tracker::HandleTracker;
use crate::helpers::*;
use crate::objects::*;
use crate::x_data;
use crate::x_data::XData;
use crate::{CodePair, Color};

impl ObjectCommon {
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
    fn write<T>(
        &self,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        let handle = handle_tracker.get_or_assign(self.handle);
        writer.write_code_pair(&CodePair::new_string(5, &handle.as_string()))?;
        for group in &self.extension_data_groups {
            group.write(writer)?;
        }
        if !self.__owner_handle.is_empty() {
            writer
                .write_code_pair(&CodePair::new_string(330, &self.__owner_handle.as_string()))?;
        }
        Ok(())
    }
}

impl Object {
    /// Creates a new `Object` with default common values.
    pub fn new(specific: ObjectType) -> Self {
        Object {
            common: Default::default(),
            specific,
        }
    }
    pub(crate) fn read<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<Option<Object>>
    where
        T: Read,
    {
        loop {
            match iter.next() {
                Some(Ok(pair @ CodePair { code: 0, .. })) => {
                    let type_string = pair.assert_string()?;
                    if type_string == "ENDSEC" {
                        iter.put_back(Ok(pair));
                        return Ok(None);
                    }

                    match ObjectType::from_type_string(&type_string) {
                        Some(specific) => {
                            let mut object = Object::new(specific);
                            if !object.apply_custom_reader(iter)? {
                                // no custom reader; use the declarative map
                                loop {
                                    match iter.next() {
                                        Some(Ok(pair @ CodePair { code: 0, .. })) => {
                                            iter.put_back(Ok(pair));
                                            break;
                                        }
                                        Some(Ok(pair)) => object.apply_code_pair(&pair, iter)?,
                                        Some(Err(e)) => return Err(e),
                                        None => return Err(DxfError::UnexpectedEndOfInput),
                                    }
                                }
                            }
                            return Ok(Some(object));
                        }
                        None => {
                            // swallow the unsupported object
                            loop {
                                match iter.next() {
                                    Some(Ok(pair @ CodePair { code: 0, .. })) => {
                                        iter.put_back(Ok(pair));
                                        break;
                                    }
                                    Some(Ok(_)) => (), // part of the unsupported object
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
                        String::from("expected 0/<object-type> or 0/ENDSEC"),
                    ))
                }
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
        }
    }
    fn apply_code_pair<T>(&mut self, pair: &CodePair, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        if !self.try_apply_code_pair(pair)? {
            self.common.apply_individual_pair(pair, iter)?;
        }
        Ok(())
    }
    fn apply_custom_reader<T>(&mut self, iter: &mut CodePairBuffer<T>) -> DxfResult<bool>
    where
        T: Read,
    {
        match self.specific {
            ObjectType::Dictionary(ref mut dict) => {
                Object::apply_custom_reader_dictionary(&mut self.common, dict, iter)
            }
            ObjectType::Layout(ref mut layout) => {
                Object::apply_custom_reader_layout(&mut self.common, layout, iter)
            }
            ObjectType::MLineStyle(ref mut style) => {
                Object::apply_custom_reader_mline_style(&mut self.common, style, iter)
            }
            ObjectType::SortentsTable(ref mut table) => {
                Object::apply_custom_reader_sortents_table(&mut self.common, table, iter)
            }
            ObjectType::XRecord(ref mut xrecord) => {
                Object::apply_custom_reader_xrecord(&mut self.common, xrecord, iter)
            }
            _ => Ok(false), // no custom reader
        }
    }
    fn apply_custom_reader_dictionary<T>(
        common: &mut ObjectCommon,
        dict: &mut Dictionary,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        let mut last_entry_name = String::new();
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                3 => last_entry_name = pair.assert_string()?,
                280 => dict.is_hard_owner = as_bool(pair.assert_i16()?),
                281 => {
                    dict.duplicate_record_handling = enum_from_number!(
                        DictionaryDuplicateRecordHandling,
                        NotApplicable,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                350 | 360 => {
                    let handle = pair.as_handle()?;
                    dict.entries.push((last_entry_name.clone(), handle));
                }
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_layout<T>(
        common: &mut ObjectCommon,
        layout: &mut Layout,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        // codes 1 and 70 mean different things before and after the
        // AcDbLayout marker
        let mut in_layout_subclass = false;
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                100 => in_layout_subclass = pair.assert_string()? == "AcDbLayout",
                1 if in_layout_subclass => layout.name = pair.assert_string()?,
                70 if in_layout_subclass => layout.flags = pair.assert_i16()?,
                71 => layout.tab_order = pair.assert_i16()?,
                10 | 20 if in_layout_subclass => layout.minimum_limits.set(&pair)?,
                11 | 21 if in_layout_subclass => layout.maximum_limits.set(&pair)?,
                12 | 22 | 32 => layout.insertion_base.set(&pair)?,
                14 | 24 | 34 => layout.minimum_extents.set(&pair)?,
                15 | 25 | 35 => layout.maximum_extents.set(&pair)?,
                146 => layout.elevation = pair.assert_f64()?,
                13 | 23 | 33 => layout.ucs_origin.set(&pair)?,
                16 | 26 | 36 => layout.ucs_x_axis.set(&pair)?,
                17 | 27 | 37 => layout.ucs_y_axis.set(&pair)?,
                76 => layout.ucs_orthographic_type = pair.assert_i16()?,
                _ => {
                    if !layout.plot_settings.try_apply_code_pair(&pair)? {
                        common.apply_individual_pair(&pair, iter)?;
                    }
                }
            }
        }
    }
    fn apply_custom_reader_mline_style<T>(
        common: &mut ObjectCommon,
        style: &mut MLineStyle,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                2 => style.style_name = pair.assert_string()?,
                70 => style.flags = pair.assert_i16()?,
                3 => style.description = pair.assert_string()?,
                62 => {
                    // the first 62 is the fill color; later ones belong to
                    // the element being defined
                    if let Some(element) = style.elements.last_mut() {
                        element.color = Color::from_raw_value(pair.assert_i16()?);
                    } else {
                        style.fill_color = Color::from_raw_value(pair.assert_i16()?);
                    }
                }
                51 => style.start_angle = pair.assert_f64()?,
                52 => style.end_angle = pair.assert_f64()?,
                71 => (), // element count; implied by the 49 pairs
                49 => style.elements.push(MLineStyleElement {
                    offset: pair.assert_f64()?,
                    ..Default::default()
                }),
                6 => {
                    if let Some(element) = style.elements.last_mut() {
                        element.line_type_name = pair.assert_string()?;
                    }
                }
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_sortents_table<T>(
        common: &mut ObjectCommon,
        table: &mut SortentsTable,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        // code 5 is the record handle before the subclass marker and a sort
        // handle after it
        let mut seen_subclass_marker = false;
        loop {
            let pair = next_pair!(iter);
            match pair.code {
                100 => seen_subclass_marker = pair.assert_string()? == "AcDbSortentsTable",
                5 => {
                    if seen_subclass_marker {
                        table.sort_handles.push(pair.as_handle()?);
                    } else {
                        common.handle = pair.as_handle()?;
                    }
                }
                331 => table.entity_handles.push(pair.as_handle()?),
                _ => common.apply_individual_pair(&pair, iter)?,
            }
        }
    }
    fn apply_custom_reader_xrecord<T>(
        common: &mut ObjectCommon,
        xrecord: &mut XRecord,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<bool>
    where
        T: Read,
    {
        let mut seen_subclass_marker = false;
        loop {
            let pair = next_pair!(iter);
            if seen_subclass_marker {
                match pair.code {
                    280 => {
                        xrecord.duplicate_record_handling = enum_from_number!(
                            DictionaryDuplicateRecordHandling,
                            NotApplicable,
                            from_i16,
                            pair.assert_i16()?
                        )
                    }
                    // everything after the marker is payload, kept verbatim
                    _ => xrecord.data_pairs.push(pair),
                }
            } else if pair.code == 100 {
                seen_subclass_marker = pair.assert_string()? == "AcDbXrecord";
            } else {
                common.apply_individual_pair(&pair, iter)?;
            }
        }
    }
    /// Applies a kind-specific pair through the declarative map; returns
    /// `false` when the code belongs to the common frame instead.
    fn try_apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match self.specific {
            ObjectType::DictionaryVariable(ref mut var) => match pair.code {
                280 => var.object_schema_number = pair.assert_i16()?,
                1 => var.value = pair.assert_string()?,
                _ => return Ok(false),
            },
            ObjectType::Group(ref mut group) => match pair.code {
                300 => group.description = pair.assert_string()?,
                70 => group.is_unnamed = as_bool(pair.assert_i16()?),
                71 => group.is_selectable = as_bool(pair.assert_i16()?),
                340 => group.entity_handles.push(pair.as_handle()?),
                _ => return Ok(false),
            },
            ObjectType::ImageDefinition(ref mut image) => match pair.code {
                90 => image.class_version = pair.assert_i32()?,
                1 => image.file_name = pair.assert_string()?,
                10 | 20 => image.image_size.set(pair)?,
                11 | 21 => image.pixel_size.set(pair)?,
                280 => image.is_image_loaded = as_bool(pair.assert_i16()?),
                281 => {
                    image.resolution_units = enum_from_number!(
                        ImageResolutionUnits,
                        NoUnits,
                        from_i16,
                        pair.assert_i16()?
                    )
                }
                _ => return Ok(false),
            },
            ObjectType::PlaceHolder(_) => return Ok(false),
            ObjectType::PlotSettings(ref mut settings) => {
                return settings.try_apply_code_pair(pair);
            }
            // kinds with custom readers never take this path
            ObjectType::Dictionary(_)
            | ObjectType::Layout(_)
            | ObjectType::MLineStyle(_)
            | ObjectType::SortentsTable(_)
            | ObjectType::XRecord(_) => return Ok(false),
        }
        Ok(true)
    }
    /// Writes the object in the canonical order; kinds the target version
    /// cannot represent are suppressed entirely.
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
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
        self.common.write(writer, handle_tracker)?;
        self.specific.write(version, writer)?;
        for x in &self.common.x_data {
            x.write(version, writer)?;
        }

        Ok(())
    }
}

impl PlotSettings {
    fn try_apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            1 => self.page_setup_name = pair.assert_string()?,
            2 => self.printer_name = pair.assert_string()?,
            4 => self.paper_size = pair.assert_string()?,
            6 => self.plot_view_name = pair.assert_string()?,
            40 => self.left_margin = pair.assert_f64()?,
            41 => self.bottom_margin = pair.assert_f64()?,
            42 => self.right_margin = pair.assert_f64()?,
            43 => self.top_margin = pair.assert_f64()?,
            44 => self.paper_width = pair.assert_f64()?,
            45 => self.paper_height = pair.assert_f64()?,
            46 => self.plot_origin_x = pair.assert_f64()?,
            47 => self.plot_origin_y = pair.assert_f64()?,
            48 => self.plot_window_x1 = pair.assert_f64()?,
            49 => self.plot_window_y1 = pair.assert_f64()?,
            140 => self.plot_window_x2 = pair.assert_f64()?,
            141 => self.plot_window_y2 = pair.assert_f64()?,
            142 => self.custom_scale_numerator = pair.assert_f64()?,
            143 => self.custom_scale_denominator = pair.assert_f64()?,
            70 => self.flags = pair.assert_i16()?,
            72 => self.paper_units = pair.assert_i16()?,
            73 => self.rotation = pair.assert_i16()?,
            74 => self.plot_type = pair.assert_i16()?,
            7 => self.current_style_sheet = pair.assert_string()?,
            75 => self.standard_scale_type = pair.assert_i16()?,
            147 => self.standard_scale_factor = pair.assert_f64()?,
            148 => self.paper_image_origin_x = pair.assert_f64()?,
            149 => self.paper_image_origin_y = pair.assert_f64()?,
            _ => return Ok(false),
        }
        Ok(true)
    }
    fn write_pairs<T>(&self, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(100, "AcDbPlotSettings"))?;
        writer.write_code_pair(&CodePair::new_string(1, &self.page_setup_name))?;
        writer.write_code_pair(&CodePair::new_string(2, &self.printer_name))?;
        writer.write_code_pair(&CodePair::new_string(4, &self.paper_size))?;
        writer.write_code_pair(&CodePair::new_string(6, &self.plot_view_name))?;
        writer.write_code_pair(&CodePair::new_f64(40, self.left_margin))?;
        writer.write_code_pair(&CodePair::new_f64(41, self.bottom_margin))?;
        writer.write_code_pair(&CodePair::new_f64(42, self.right_margin))?;
        writer.write_code_pair(&CodePair::new_f64(43, self.top_margin))?;
        writer.write_code_pair(&CodePair::new_f64(44, self.paper_width))?;
        writer.write_code_pair(&CodePair::new_f64(45, self.paper_height))?;
        writer.write_code_pair(&CodePair::new_f64(46, self.plot_origin_x))?;
        writer.write_code_pair(&CodePair::new_f64(47, self.plot_origin_y))?;
        writer.write_code_pair(&CodePair::new_f64(48, self.plot_window_x1))?;
        writer.write_code_pair(&CodePair::new_f64(49, self.plot_window_y1))?;
        writer.write_code_pair(&CodePair::new_f64(140, self.plot_window_x2))?;
        writer.write_code_pair(&CodePair::new_f64(141, self.plot_window_y2))?;
        writer.write_code_pair(&CodePair::new_f64(142, self.custom_scale_numerator))?;
        writer.write_code_pair(&CodePair::new_f64(143, self.custom_scale_denominator))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags))?;
        writer.write_code_pair(&CodePair::new_i16(72, self.paper_units))?;
        writer.write_code_pair(&CodePair::new_i16(73, self.rotation))?;
        writer.write_code_pair(&CodePair::new_i16(74, self.plot_type))?;
        writer.write_code_pair(&CodePair::new_string(7, &self.current_style_sheet))?;
        writer.write_code_pair(&CodePair::new_i16(75, self.standard_scale_type))?;
        writer.write_code_pair(&CodePair::new_f64(147, self.standard_scale_factor))?;
        writer.write_code_pair(&CodePair::new_f64(148, self.paper_image_origin_x))?;
        writer.write_code_pair(&CodePair::new_f64(149, self.paper_image_origin_y))?;
        Ok(())
    }
}

impl ObjectType {
    /// Writes the kind-specific body, subclass markers included.
    fn write<T>(&self, version: AcadVersion, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        match *self {
            ObjectType::Dictionary(ref dict) => {
                writer.write_code_pair(&CodePair::new_str(100, "AcDbDictionary"))?;
                if version >= AcadVersion::R2000 && dict.is_hard_owner {
                    writer.write_code_pair(&CodePair::new_i16(280, 1))?;
                }
                if version >= AcadVersion::R2000 {
                    writer.write_code_pair(&CodePair::new_i16(
                        281,
                        dict.duplicate_record_handling as i16,
                    ))?;
                }
                for (key, handle) in &dict.entries {
                    writer.write_code_pair(&CodePair::new_string(3, key))?;
                    let code = if dict.is_hard_owner { 360 } else { 350 };
                    writer.write_code_pair(&CodePair::new_string(code, &handle.as_string()))?;
                }
            }
            ObjectType::DictionaryVariable(ref var) => {
                writer.write_code_pair(&CodePair::new_str(100, "DictionaryVariables"))?;
                writer.write_code_pair(&CodePair::new_i16(280, var.object_schema_number))?;
                writer.write_code_pair(&CodePair::new_string(1, &var.value))?;
            }
            ObjectType::Group(ref group) => {
                writer.write_code_pair(&CodePair::new_str(100, "AcDbGroup"))?;
                writer.write_code_pair(&CodePair::new_string(300, &group.description))?;
                writer.write_code_pair(&CodePair::new_i16(70, as_i16(group.is_unnamed)))?;
                writer.write_code_pair(&CodePair::new_i16(71, as_i16(group.is_selectable)))?;
                for handle in &group.entity_handles {
                    writer.write_code_pair(&CodePair::new_string(340, &handle.as_string()))?;
                }
            }
            ObjectType::ImageDefinition(ref image) => {
                writer.write_code_pair(&CodePair::new_str(100, "AcDbRasterImageDef"))?;
                writer.write_code_pair(&CodePair::new_i32(90, image.class_version))?;
                writer.write_code_pair(&CodePair::new_string(1, &image.file_name))?;
                writer.write_code_pair(&CodePair::new_f64(10, image.image_size.x))?;
                writer.write_code_pair(&CodePair::new_f64(20, image.image_size.y))?;
                writer.write_code_pair(&CodePair::new_f64(11, image.pixel_size.x))?;
                writer.write_code_pair(&CodePair::new_f64(21, image.pixel_size.y))?;
                writer.write_code_pair(&CodePair::new_i16(280, as_i16(image.is_image_loaded)))?;
                writer
                    .write_code_pair(&CodePair::new_i16(281, image.resolution_units as i16))?;
            }
            ObjectType::Layout(ref layout) => {
                layout.plot_settings.write_pairs(writer)?;
                writer.write_code_pair(&CodePair::new_str(100, "AcDbLayout"))?;
                writer.write_code_pair(&CodePair::new_string(1, &layout.name))?;
                writer.write_code_pair(&CodePair::new_i16(70, layout.flags))?;
                writer.write_code_pair(&CodePair::new_i16(71, layout.tab_order))?;
                writer.write_point_2d(10, &layout.minimum_limits)?;
                writer.write_point_2d(11, &layout.maximum_limits)?;
                writer.write_point(12, &layout.insertion_base)?;
                writer.write_point(14, &layout.minimum_extents)?;
                writer.write_point(15, &layout.maximum_extents)?;
                writer.write_code_pair(&CodePair::new_f64(146, layout.elevation))?;
                writer.write_point(13, &layout.ucs_origin)?;
                writer.write_vector(16, &layout.ucs_x_axis)?;
                writer.write_vector(17, &layout.ucs_y_axis)?;
                writer.write_code_pair(&CodePair::new_i16(76, layout.ucs_orthographic_type))?;
            }
            ObjectType::MLineStyle(ref style) => {
                writer.write_code_pair(&CodePair::new_str(100, "AcDbMlineStyle"))?;
                writer.write_code_pair(&CodePair::new_string(2, &style.style_name))?;
                writer.write_code_pair(&CodePair::new_i16(70, style.flags))?;
                writer.write_code_pair(&CodePair::new_string(3, &style.description))?;
                writer.write_code_pair(&CodePair::new_i16(62, style.fill_color.raw_value()))?;
                writer.write_code_pair(&CodePair::new_f64(51, style.start_angle))?;
                writer.write_code_pair(&CodePair::new_f64(52, style.end_angle))?;
                writer.write_code_pair(&CodePair::new_i16(71, style.elements.len() as i16))?;
                for element in &style.elements {
                    writer.write_code_pair(&CodePair::new_f64(49, element.offset))?;
                    writer.write_code_pair(&CodePair::new_i16(62, element.color.raw_value()))?;
                    writer
                        .write_code_pair(&CodePair::new_string(6, &element.line_type_name))?;
                }
            }
            ObjectType::PlaceHolder(_) => (),
            ObjectType::PlotSettings(ref settings) => {
                settings.write_pairs(writer)?;
            }
            ObjectType::SortentsTable(ref table) => {
                writer.write_code_pair(&CodePair::new_str(100, "AcDbSortentsTable"))?;
                for handle in &table.entity_handles {
                    writer.write_code_pair(&CodePair::new_string(331, &handle.as_string()))?;
                }
                for handle in &table.sort_handles {
                    writer.write_code_pair(&CodePair::new_string(5, &handle.as_string()))?;
                }
            }
            ObjectType::XRecord(ref xrecord) => {
                writer.write_code_pair(&CodePair::new_str(100, "AcDbXrecord"))?;
                if version >= AcadVersion::R2000 {
                    writer.write_code_pair(&CodePair::new_i16(
                        280,
                        xrecord.duplicate_record_handling as i16,
                    ))?;
                }
                for pair in &xrecord.data_pairs {
                    writer.write_code_pair(pair)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::tests::*;
    use crate::{Drawing, Handle};

    fn read_objects_section(pairs: Vec<CodePair>) -> Drawing {
        let mut all = vec![
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "OBJECTS"),
        ];
        all.extend(pairs);
        all.push(CodePair::new_str(0, "ENDSEC"));
        all.push(CodePair::new_str(0, "EOF"));
        drawing_from_pairs(all)
    }

    fn read_single_object(object_type: &str, pairs: Vec<CodePair>) -> Object {
        let mut all = vec![CodePair::new_str(0, object_type)];
        all.extend(pairs);
        let drawing = read_objects_section(all);
        let objects = drawing.objects().collect::<Vec<_>>();
        assert_eq!(1, objects.len());
        objects[0].clone()
    }

    #[test]
    fn read_empty_objects_section() {
        let drawing = read_objects_section(vec![]);
        assert_eq!(0, drawing.objects().count());
    }

    #[test]
    fn read_unsupported_object() {
        let drawing = read_objects_section(vec![
            CodePair::new_str(0, "UNSUPPORTED_OBJECT"),
            CodePair::new_str(1, "unsupported string"),
            CodePair::new_str(0, "ACDBPLACEHOLDER"),
        ]);
        let objects = drawing.objects().collect::<Vec<_>>();
        assert_eq!(1, objects.len());
        assert!(matches!(objects[0].specific, ObjectType::PlaceHolder(_)));
    }

    #[test]
    fn read_dictionary_entries() {
        let object = read_single_object(
            "DICTIONARY",
            vec![
                CodePair::new_str(100, "AcDbDictionary"),
                CodePair::new_i16(281, 1),
                CodePair::new_str(3, "ACAD_GROUP"),
                CodePair::new_str(350, "A1"),
                CodePair::new_str(3, "ACAD_LAYOUT"),
                CodePair::new_str(350, "A2"),
            ],
        );
        match object.specific {
            ObjectType::Dictionary(ref dict) => {
                assert_eq!(
                    DictionaryDuplicateRecordHandling::KeepExisting,
                    dict.duplicate_record_handling
                );
                assert_eq!(2, dict.entries.len());
                assert_eq!(Some(Handle(0xA1)), dict.value_of("ACAD_GROUP"));
                assert_eq!(Some(Handle(0xA2)), dict.value_of("ACAD_LAYOUT"));
                assert_eq!(None, dict.value_of("MISSING"));
            }
            _ => panic!("expected a dictionary"),
        }
    }

    #[test]
    fn duplicate_dictionary_keys_last_one_wins() {
        let object = read_single_object(
            "DICTIONARY",
            vec![
                CodePair::new_str(3, "KEY"),
                CodePair::new_str(350, "1"),
                CodePair::new_str(3, "KEY"),
                CodePair::new_str(350, "2"),
            ],
        );
        match object.specific {
            ObjectType::Dictionary(ref dict) => {
                assert_eq!(2, dict.entries.len());
                assert_eq!(Some(Handle(2)), dict.value_of("KEY"));
            }
            _ => panic!("expected a dictionary"),
        }
    }

    #[test]
    fn read_xrecord_keeps_pairs_verbatim() {
        let object = read_single_object(
            "XRECORD",
            vec![
                CodePair::new_str(100, "AcDbXrecord"),
                CodePair::new_i16(280, 1),
                CodePair::new_str(1, "some value"),
                CodePair::new_f64(40, 1.5),
                CodePair::new_i16(70, 7),
            ],
        );
        match object.specific {
            ObjectType::XRecord(ref xrecord) => {
                assert_eq!(
                    DictionaryDuplicateRecordHandling::KeepExisting,
                    xrecord.duplicate_record_handling
                );
                assert_eq!(
                    vec![
                        CodePair::new_str(1, "some value"),
                        CodePair::new_f64(40, 1.5),
                        CodePair::new_i16(70, 7),
                    ],
                    xrecord.data_pairs
                );
            }
            _ => panic!("expected an xrecord"),
        }
    }

    #[test]
    fn read_mline_style_elements() {
        let object = read_single_object(
            "MLINESTYLE",
            vec![
                CodePair::new_str(2, "style-name"),
                CodePair::new_i16(62, 3),
                CodePair::new_i16(71, 2),
                CodePair::new_f64(49, 0.5),
                CodePair::new_i16(62, 1),
                CodePair::new_str(6, "DASHED"),
                CodePair::new_f64(49, -0.5),
                CodePair::new_i16(62, 2),
                CodePair::new_str(6, "CONTINUOUS"),
            ],
        );
        match object.specific {
            ObjectType::MLineStyle(ref style) => {
                assert_eq!("style-name", style.style_name);
                assert_eq!(Some(3), style.fill_color.index());
                assert_eq!(2, style.elements.len());
                assert_eq!(Some(1), style.elements[0].color.index());
                assert_eq!("DASHED", style.elements[0].line_type_name);
                assert_eq!(Some(2), style.elements[1].color.index());
            }
            _ => panic!("expected an mline style"),
        }
    }

    #[test]
    fn read_sortents_table_handles() {
        let object = read_single_object(
            "SORTENTSTABLE",
            vec![
                CodePair::new_str(5, "99"),
                CodePair::new_str(100, "AcDbSortentsTable"),
                CodePair::new_str(331, "A"),
                CodePair::new_str(5, "B"),
            ],
        );
        assert_eq!(Handle(0x99), object.common.handle);
        match object.specific {
            ObjectType::SortentsTable(ref table) => {
                assert_eq!(vec![Handle(0xA)], table.entity_handles);
                assert_eq!(vec![Handle(0xB)], table.sort_handles);
            }
            _ => panic!("expected a sortents table"),
        }
    }

    #[test]
    fn objects_section_is_not_written_downlevel() {
        let mut drawing = Drawing::new();
        drawing.add_object(Object::new(ObjectType::PlaceHolder(Default::default())));
        drawing.header.version = AcadVersion::R12;
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(2, "OBJECTS")]);
    }

    #[test]
    fn xrecord_round_trip() {
        let mut drawing = Drawing::new();
        drawing.add_object(Object::new(ObjectType::XRecord(XRecord {
            data_pairs: vec![
                CodePair::new_str(1, "value"),
                CodePair::new_f64(40, 2.25),
            ],
            ..Default::default()
        })));
        let text = to_test_string(&drawing);
        let reparsed = parse_drawing(&text);
        let objects = reparsed.objects().collect::<Vec<_>>();
        assert_eq!(1, objects.len());
        match objects[0].specific {
            ObjectType::XRecord(ref xrecord) => {
                assert_eq!(
                    vec![CodePair::new_str(1, "value"), CodePair::new_f64(40, 2.25)],
                    xrecord.data_pairs
                );
            }
            _ => panic!("expected an xrecord"),
        }
    }

    #[test]
    fn all_object_types_are_enumerable() {
        assert_eq!(10, ObjectType::all_default().len());
    }
}
