use std::io::{Read, Write};

use bitflags::bitflags;

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::drawing_item::{DrawingItem, DrawingItemMut};
use crate::entities::Entity;
use crate::entity_iter::read_entities_into_vec;
use crate::enums::AcadVersion;
use crate::error::{DxfError, DxfResult};
use crate::extension_data;
use crate::extension_data::ExtensionGroup;
use crate::handle::Handle;
use crate::handle_tracker::HandleTracker;
use crate::helpers::*;
use crate::x_data;
use crate::x_data::XData;
use crate::{CodePair, CodePairValue, Drawing, Point};

bitflags! {
    /// Block-type flags, code 70 on a BLOCK record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockTypeFlags: i16 {
        /// An anonymous block generated by the application.
        const ANONYMOUS = 0x1;
        /// The block has non-constant attribute definitions.
        const HAS_NON_CONSTANT_ATTRIBUTE_DEFINITIONS = 0x2;
        /// The block is an external reference.
        const XREF = 0x4;
        /// The block is an xref overlay.
        const XREF_OVERLAY = 0x8;
        /// The block is externally dependent.
        const EXTERNALLY_DEPENDENT = 0x10;
        /// The block is a resolved external reference.
        const RESOLVED_EXTERNAL_REFERENCE = 0x20;
        /// The block's definition is referenced externally.
        const REFERENCED_EXTERNAL_REFERENCE = 0x40;
    }
}

/// A named, reusable group of entities with a base insertion point,
/// framed `0/BLOCK` … `0/ENDBLK` in the BLOCKS section.
///
/// Entities inside a block are written without individual handles; the
/// block's handle governs.
#[derive(Clone, Debug)]
pub struct Block {
    pub handle: Handle,
    #[doc(hidden)]
    pub __owner_handle: Handle,
    /// The name of the layer containing the block.
    pub layer: String,
    /// The name of the block.
    pub name: String,
    pub flags: BlockTypeFlags,
    /// The block's base insertion point.
    pub base_point: Point,
    /// The path name of the XREF, when the block is one.
    pub xref_path_name: String,
    pub description: String,
    pub is_in_paperspace: bool,
    /// The entities contained by the block.
    pub entities: Vec<Entity>,
    /// Extension groups attached to the `BLOCK` record.
    pub extension_data_groups: Vec<ExtensionGroup>,
    /// Extension groups attached to the trailing `ENDBLK` record.
    pub end_extension_data_groups: Vec<ExtensionGroup>,
    pub x_data: Vec<XData>,
}

impl Default for Block {
    fn default() -> Self {
        Block {
            handle: Handle::empty(),
            __owner_handle: Handle::empty(),
            layer: String::from("0"),
            name: String::new(),
            flags: BlockTypeFlags::default(),
            base_point: Point::origin(),
            xref_path_name: String::new(),
            description: String::new(),
            is_in_paperspace: false,
            entities: vec![],
            extension_data_groups: vec![],
            end_extension_data_groups: vec![],
            x_data: vec![],
        }
    }
}

// public implementation
impl Block {
    /// The record owning this block, looked up by handle.
    pub fn owner<'a>(&self, drawing: &'a Drawing) -> Option<DrawingItem<'a>> {
        drawing.item_by_handle(self.__owner_handle)
    }
    /// Makes `item` the owner of this block, assigning `item` a handle if
    /// it doesn't have one yet.
    pub fn set_owner(&mut self, item: &mut DrawingItemMut, drawing: &mut Drawing) {
        self.__owner_handle = drawing.assign_and_get_handle(item);
    }
    pub fn is_anonymous(&self) -> bool {
        self.flags.contains(BlockTypeFlags::ANONYMOUS)
    }
    pub fn is_xref(&self) -> bool {
        self.flags.contains(BlockTypeFlags::XREF)
    }
    pub fn is_xref_overlay(&self) -> bool {
        self.flags.contains(BlockTypeFlags::XREF_OVERLAY)
    }
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        default_if_empty(&mut self.layer, "0");
        for entity in self.entities.iter_mut() {
            entity.normalize();
        }
    }
}

// internal visibility only
impl Block {
    pub(crate) fn read_block<T>(drawing: &mut Drawing, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        // match code pair:
        //   0/ENDBLK -> read trailing codes and return
        //   0/*      -> read an entity and add it to the collection
        //   */*      -> apply to the block header
        let mut current = Block::default();
        loop {
            match iter.next() {
                Some(Ok(pair)) => match pair {
                    CodePair {
                        code: 0,
                        value: CodePairValue::Str(ref s),
                        ..
                    } if s == "ENDBLK" => {
                        current.read_block_end(iter)?;
                        drawing.blocks.push(current);
                        break;
                    }
                    CodePair { code: 0, .. } => {
                        iter.put_back(Ok(pair));
                        read_entities_into_vec(iter, &mut current.entities)?;
                    }
                    _ => match pair.code {
                        1 => current.xref_path_name = pair.assert_string()?,
                        2 => current.name = pair.assert_string()?,
                        3 => (), // another instance of the name
                        4 => current.description = pair.assert_string()?,
                        5 => current.handle = pair.as_handle()?,
                        8 => current.layer = pair.assert_string()?,
                        10 | 20 | 30 => current.base_point.set(&pair)?,
                        67 => current.is_in_paperspace = as_bool(pair.assert_i16()?),
                        70 => current.flags = BlockTypeFlags::from_bits_retain(pair.assert_i16()?),
                        330 => current.__owner_handle = pair.as_handle()?,
                        extension_data::EXTENSION_DATA_GROUP => {
                            let group = ExtensionGroup::read_group(
                                pair.assert_string()?,
                                iter,
                                pair.offset,
                            )?;
                            current.extension_data_groups.push(group);
                        }
                        x_data::XDATA_APPLICATION_NAME => {
                            let x = XData::read(pair.assert_string()?, iter)?;
                            current.x_data.push(x);
                        }
                        _ => (), // unsupported code
                    },
                },
                Some(Err(e)) => return Err(e),
                None => {
                    return Err(DxfError::InvariantViolation(String::from(
                        "BLOCK with no matching ENDBLK",
                    )))
                }
            }
        }

        Ok(())
    }
    /// Reads the codes trailing `ENDBLK` up to the next `0` pair.
    fn read_block_end<T>(&mut self, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        loop {
            match iter.next() {
                Some(Ok(pair @ CodePair { code: 0, .. })) => {
                    iter.put_back(Ok(pair));
                    break;
                }
                Some(Ok(pair)) => {
                    if pair.code == extension_data::EXTENSION_DATA_GROUP {
                        let group =
                            ExtensionGroup::read_group(pair.assert_string()?, iter, pair.offset)?;
                        self.end_extension_data_groups.push(group);
                    }
                    // other trailing codes restate the block's own values
                }
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
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
        let handle = handle_tracker.get_or_assign(self.handle);
        writer.write_code_pair(&CodePair::new_str(0, "BLOCK"))?;
        if write_handles {
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
        if version >= AcadVersion::R13 {
            writer.write_code_pair(&CodePair::new_str(100, "AcDbBlockBegin"))?;
        }
        writer.write_code_pair(&CodePair::new_string(2, &self.name))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.flags.bits()))?;
        writer.write_point(10, &self.base_point)?;
        if version >= AcadVersion::R12 {
            writer.write_code_pair(&CodePair::new_string(3, &self.name))?;
        }
        writer.write_code_pair(&CodePair::new_string(1, &self.xref_path_name))?;
        if !self.description.is_empty() {
            writer.write_code_pair(&CodePair::new_string(4, &self.description))?;
        }

        for entity in &self.entities {
            // entities in blocks never carry their own handles
            entity.write(version, false, writer, handle_tracker)?;
        }

        writer.write_code_pair(&CodePair::new_str(0, "ENDBLK"))?;
        if write_handles {
            writer.write_code_pair(&CodePair::new_string(5, &handle.as_string()))?;
        }
        if version >= AcadVersion::R14 {
            for group in &self.end_extension_data_groups {
                group.write(writer)?;
            }
        }
        if version >= AcadVersion::R13 {
            writer.write_code_pair(&CodePair::new_str(100, "AcDbEntity"))?;
        }
        if self.is_in_paperspace {
            writer.write_code_pair(&CodePair::new_i16(67, 1))?;
        }
        writer.write_code_pair(&CodePair::new_string(8, &self.layer))?;
        if version >= AcadVersion::R13 {
            writer.write_code_pair(&CodePair::new_str(100, "AcDbBlockEnd"))?;
        }

        for x in &self.x_data {
            x.write(version, writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::*;
    use crate::helpers::tests::*;
    use crate::x_data::XDataItem;
    use crate::ExtensionGroupItem;
    use float_cmp::approx_eq;

    fn read_blocks_section(content: Vec<&str>) -> Drawing {
        let mut file = String::new();
        file.push_str(&["0", "SECTION", "2", "BLOCKS"].join("\n"));
        file.push('\n');
        for line in content {
            file.push_str(line);
            file.push('\n');
        }
        file.push_str(&["0", "ENDSEC", "0", "EOF"].join("\n"));
        parse_drawing(&file)
    }

    fn read_single_block(content: Vec<&str>) -> Block {
        let mut full_block = vec!["0", "BLOCK"];
        for line in content {
            full_block.push(line);
        }
        full_block.push("0");
        full_block.push("ENDBLK");
        let drawing = read_blocks_section(full_block);
        assert_eq!(1, drawing.blocks.len());
        drawing.blocks[0].to_owned()
    }

    #[test]
    fn read_empty_blocks_section() {
        let drawing = read_blocks_section(vec![]);
        assert_eq!(0, drawing.blocks.len());
    }

    #[test]
    fn read_empty_block() {
        let _block = read_single_block(vec![]);
    }

    #[test]
    fn read_block_specific_values() {
        let block = read_single_block(vec![
            "2",
            "block-name",
            "10",
            "1.1",
            "20",
            "2.2",
            "30",
            "3.3",
            "70",
            "5",
        ]);
        assert_eq!("block-name", block.name);
        assert_eq!(0, block.entities.len());
        assert_eq!(Point::new(1.1, 2.2, 3.3), block.base_point);
        assert!(block.is_anonymous());
        assert!(block.is_xref());
        assert!(!block.is_xref_overlay());
    }

    #[test]
    fn read_with_end_block_values() {
        // the trailing ENDBLK codes restate values and are not re-applied
        let drawing = read_blocks_section(vec![
            "0",
            "BLOCK",
            "0",
            "ENDBLK",
            "5",
            "1",
            "330",
            "2",
            "100",
            "AcDbEntity",
            "8",
            "layer-name",
            "100",
            "AcDbBlockEnd",
        ]);
        assert_eq!(1, drawing.blocks.len());
        assert_eq!("0", drawing.blocks[0].layer);
    }

    #[test]
    fn read_multiple_blocks() {
        let drawing = read_blocks_section(vec![
            "0", "BLOCK", "0", "ENDBLK", "0", "BLOCK", "0", "ENDBLK",
        ]);
        assert_eq!(2, drawing.blocks.len())
    }

    #[test]
    fn block_with_no_end_is_an_error() {
        let result = Drawing::parse(
            &[
                "0", "SECTION", "2", "BLOCKS", "0", "BLOCK", "2", "incomplete",
            ]
            .join("\n"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn read_block_with_single_entity() {
        let block = read_single_block(vec![
            "0", "LINE", "10", "1.1", "20", "2.2", "30", "3.3", "11", "4.4", "21", "5.5", "31",
            "6.6",
        ]);
        assert_eq!(1, block.entities.len());
        match block.entities[0].specific {
            EntityType::Line(ref line) => {
                assert_eq!(Point::new(1.1, 2.2, 3.3), line.p1);
                assert_eq!(Point::new(4.4, 5.5, 6.6), line.p2);
            }
            _ => panic!("expected a line"),
        }
    }

    #[test]
    fn read_block_with_multiple_entities() {
        let block = read_single_block(vec!["0", "LINE", "0", "CIRCLE"]);
        assert_eq!(2, block.entities.len());
        assert!(matches!(block.entities[0].specific, EntityType::Line(_)));
        assert!(matches!(block.entities[1].specific, EntityType::Circle(_)));
    }

    #[test]
    fn read_block_with_unsupported_entity_first() {
        let block = read_single_block(vec!["0", "FROBNICATE", "0", "LINE"]);
        assert_eq!(1, block.entities.len());
        assert!(matches!(block.entities[0].specific, EntityType::Line(_)));
    }

    #[test]
    fn read_block_with_unsupported_entity_last() {
        let block = read_single_block(vec!["0", "LINE", "0", "FROBNICATE"]);
        assert_eq!(1, block.entities.len());
        assert!(matches!(block.entities[0].specific, EntityType::Line(_)));
    }

    #[test]
    fn read_block_with_polyline() {
        let block = read_single_block(vec![
            "0", "POLYLINE", "0", "VERTEX", "0", "VERTEX", "0", "VERTEX", "0", "SEQEND",
        ]);
        assert_eq!(1, block.entities.len());
        match block.entities[0].specific {
            EntityType::Polyline(ref p) => {
                assert_eq!(3, p.vertices().count());
            }
            _ => panic!("expected a polyline"),
        }
    }

    #[test]
    fn read_block_with_polyline_without_seqend_and_another_entity() {
        let block = read_single_block(vec![
            "0", "POLYLINE", "0", "VERTEX", "0", "VERTEX", "0", "VERTEX", "0", "LINE",
        ]);
        assert_eq!(2, block.entities.len());
        match block.entities[0].specific {
            EntityType::Polyline(ref p) => {
                assert_eq!(3, p.vertices().count());
            }
            _ => panic!("expected a polyline"),
        }
        assert!(matches!(block.entities[1].specific, EntityType::Line(_)));
    }

    #[test]
    fn read_block_with_empty_polyline_without_seqend_and_another_entity() {
        let block = read_single_block(vec!["0", "POLYLINE", "0", "LINE"]);
        assert_eq!(2, block.entities.len());
        match block.entities[0].specific {
            EntityType::Polyline(ref p) => {
                assert_eq!(0, p.vertices().count());
            }
            _ => panic!("expected a polyline"),
        }
        assert!(matches!(block.entities[1].specific, EntityType::Line(_)));
    }

    #[test]
    fn read_extension_group_data() {
        let block = read_single_block(vec![
            "102",
            "{APPLICATION",
            "  1",
            "some string",
            "102",
            "{NESTED",
            " 10",
            "1.1",
            "102",
            "}",
            "102",
            "}",
        ]);
        assert_eq!(1, block.extension_data_groups.len());
        let group = &block.extension_data_groups[0];
        assert_eq!("APPLICATION", group.application_name);
        assert_eq!(2, group.items.len());
        match group.items[0] {
            ExtensionGroupItem::CodePair(ref p) => {
                assert_eq!(&CodePair::new_str(1, "some string"), p)
            }
            _ => panic!("expected a code pair"),
        }
        match group.items[1] {
            ExtensionGroupItem::Group(ref nested) => {
                assert_eq!("NESTED", nested.application_name);
                assert_eq!(
                    vec![ExtensionGroupItem::CodePair(CodePair::new_f64(10, 1.1))],
                    nested.items
                );
            }
            _ => panic!("expected a nested group"),
        }
    }

    #[test]
    fn write_extension_group_data() {
        let mut block = Block::default();
        block.extension_data_groups.push(ExtensionGroup {
            application_name: String::from("APPLICATION"),
            items: vec![
                ExtensionGroupItem::CodePair(CodePair::new_str(1, "some string")),
                ExtensionGroupItem::Group(ExtensionGroup {
                    application_name: String::from("NESTED"),
                    items: vec![ExtensionGroupItem::CodePair(CodePair::new_f64(10, 1.1))],
                }),
            ],
        });
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R14; // extension groups are R14+
        drawing.blocks.push(block);
        assert_contains_pairs(
            &drawing,
            vec![
                CodePair::new_str(102, "{APPLICATION"),
                CodePair::new_str(1, "some string"),
                CodePair::new_str(102, "{NESTED"),
                CodePair::new_f64(10, 1.1),
                CodePair::new_str(102, "}"),
                CodePair::new_str(102, "}"),
            ],
        );
    }

    #[test]
    fn read_x_data() {
        let block = read_single_block(vec![
            "1001",
            "APPLICATION",
            "1000",
            "some string",
            "1002",
            "{",
            "1040",
            "1.1",
            "1002",
            "}",
        ]);
        assert_eq!(1, block.x_data.len());
        let x = &block.x_data[0];
        assert_eq!("APPLICATION", x.application_name);
        assert_eq!(2, x.items.len());
        match x.items[0] {
            XDataItem::Str(ref s) => assert_eq!("some string", s),
            _ => panic!("expected a string"),
        }
        match x.items[1] {
            XDataItem::ControlGroup(ref items) => {
                assert_eq!(1, items.len());
                match items[0] {
                    XDataItem::Real(r) => assert!(approx_eq!(f64, 1.1, r)),
                    _ => panic!("expected a real"),
                }
            }
            _ => panic!("expected a control group"),
        }
    }

    #[test]
    fn dont_write_blocks_section_if_no_blocks() {
        let drawing = Drawing::new();
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(2, "BLOCKS")]);
    }

    #[test]
    fn round_trip_blocks() {
        let mut drawing = Drawing::new();
        let mut b1 = Block {
            name: String::from("b1"),
            ..Default::default()
        };
        b1.entities.push(Entity::new(EntityType::Line(Default::default())));
        drawing.blocks.push(b1);
        let mut b2 = Block {
            name: String::from("b2"),
            ..Default::default()
        };
        b2.entities
            .push(Entity::new(EntityType::Circle(Default::default())));
        drawing.blocks.push(b2);

        let text = to_test_string(&drawing);
        let reparsed = parse_drawing(&text);
        assert_eq!(2, reparsed.blocks.len());
        assert_eq!("b1", reparsed.blocks[0].name);
        assert_eq!(1, reparsed.blocks[0].entities.len());
        assert!(matches!(
            reparsed.blocks[0].entities[0].specific,
            EntityType::Line(_)
        ));
        assert_eq!("b2", reparsed.blocks[1].name);
        assert!(matches!(
            reparsed.blocks[1].entities[0].specific,
            EntityType::Circle(_)
        ));
    }

    #[test]
    fn block_child_entities_have_no_handles() {
        let mut drawing = Drawing::new();
        let mut block = Block {
            name: String::from("b"),
            ..Default::default()
        };
        block
            .entities
            .push(Entity::new(EntityType::Line(Default::default())));
        drawing.blocks.push(block);
        let text = to_test_string(&drawing);
        let block_start = text.find("BLOCK").unwrap();
        let block_end = text.find("ENDBLK").unwrap();
        let body = &text[block_start..block_end];
        let line_offset = body.find("LINE").unwrap();
        assert!(!body[line_offset..].contains("  5\r\n"));
    }
}
