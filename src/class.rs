use std::io::{Read, Write};

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::enums::AcadVersion;
use crate::error::{DxfError, DxfResult};
use crate::helpers::as_i16;
use crate::{CodePair, Drawing};

/// Registered class metadata from the CLASSES section (R13 and later).
///
/// R13 frames each class as `0/<record name>`; R14 and later use
/// `0/CLASS` with the record name on code 1.  Both layouts are accepted
/// and the write layout follows the target version.
#[derive(Clone, Debug, PartialEq)]
pub struct Class {
    /// Class DXF record name.
    pub record_name: String,
    /// C++ class name, binding the record to its implementation.
    pub class_name: String,
    /// The application that defines the class.
    pub application_name: String,
    /// The class's version number (R13 layout only).
    pub version_number: i32,
    /// Capabilities of this class as a proxy.
    pub proxy_capability_flags: i32,
    /// Number of instances of the class in the drawing.
    pub instance_count: usize,
    /// Whether the class was loaded with the file.
    pub was_class_loaded_with_file: bool,
    /// Whether the class derives from an entity class.
    pub is_entity: bool,
}

impl Default for Class {
    fn default() -> Self {
        Class {
            record_name: String::new(),
            class_name: String::new(),
            application_name: String::new(),
            version_number: 0,
            proxy_capability_flags: 0,
            instance_count: 0,
            was_class_loaded_with_file: true,
            is_entity: false,
        }
    }
}

impl Class {
    pub fn is_erase_allowed(&self) -> bool {
        self.proxy_flag(1)
    }
    pub fn is_transform_allowed(&self) -> bool {
        self.proxy_flag(2)
    }
    pub fn is_clone_allowed(&self) -> bool {
        self.proxy_flag(128)
    }
    fn proxy_flag(&self, mask: i32) -> bool {
        self.proxy_capability_flags & mask != 0
    }
}

// internal visibility only
impl Class {
    pub(crate) fn read_classes<T>(
        drawing: &mut Drawing,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<()>
    where
        T: Read,
    {
        loop {
            match iter.next() {
                Some(Ok(pair)) => {
                    if pair.code == 0 {
                        match &*pair.assert_string()? {
                            "ENDSEC" => {
                                iter.put_back(Ok(pair));
                                break;
                            }
                            typ => Class::read_class(typ, drawing, iter)?,
                        }
                    }
                }
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
        }

        Ok(())
    }
    fn read_class<T>(typ: &str, drawing: &mut Drawing, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        let mut class = Class::default();

        // R13 frames the class with its record name
        let is_r13_layout = drawing.header.version <= AcadVersion::R13 && typ != "CLASS";
        if is_r13_layout {
            class.record_name = typ.to_string();
        }

        loop {
            match iter.next() {
                Some(Ok(pair)) => match pair.code {
                    0 => {
                        iter.put_back(Ok(pair));
                        break;
                    }
                    1 => {
                        if is_r13_layout {
                            class.class_name = pair.assert_string()?;
                        } else {
                            class.record_name = pair.assert_string()?;
                        }
                    }
                    2 => {
                        if is_r13_layout {
                            class.application_name = pair.assert_string()?;
                        } else {
                            class.class_name = pair.assert_string()?;
                        }
                    }
                    3 => class.application_name = pair.assert_string()?,
                    90 => {
                        if is_r13_layout {
                            class.version_number = pair.assert_i32()?;
                        } else {
                            class.proxy_capability_flags = pair.assert_i32()?;
                        }
                    }
                    91 => class.instance_count = pair.assert_i32()? as usize,
                    280 => class.was_class_loaded_with_file = !pair.assert_bool()?,
                    281 => class.is_entity = pair.assert_bool()?,
                    _ => (), // unsupported code
                },
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
        }

        drawing.classes.push(class);
        Ok(())
    }
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        if version >= AcadVersion::R14 {
            writer.write_code_pair(&CodePair::new_str(0, "CLASS"))?;
            writer.write_code_pair(&CodePair::new_string(1, &self.record_name))?;
            writer.write_code_pair(&CodePair::new_string(2, &self.class_name))?;
            writer.write_code_pair(&CodePair::new_string(3, &self.application_name))?;
            writer.write_code_pair(&CodePair::new_i32(90, self.proxy_capability_flags))?;
            if version >= AcadVersion::R2004 {
                writer.write_code_pair(&CodePair::new_i32(91, self.instance_count as i32))?;
            }
        } else {
            writer.write_code_pair(&CodePair::new_string(0, &self.record_name))?;
            writer.write_code_pair(&CodePair::new_string(1, &self.class_name))?;
            writer.write_code_pair(&CodePair::new_string(2, &self.application_name))?;
            writer.write_code_pair(&CodePair::new_i32(90, self.version_number))?;
        }
        writer.write_code_pair(&CodePair::new_i16(
            280,
            as_i16(!self.was_class_loaded_with_file),
        ))?;
        writer.write_code_pair(&CodePair::new_i16(281, as_i16(self.is_entity)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::tests::*;

    #[test]
    fn read_r14_class() {
        let drawing = drawing_from_pairs(vec![
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "HEADER"),
            CodePair::new_str(9, "$ACADVER"),
            CodePair::new_str(1, "AC1014"),
            CodePair::new_str(0, "ENDSEC"),
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "CLASSES"),
            CodePair::new_str(0, "CLASS"),
            CodePair::new_str(1, "ACDBDICTIONARYWDFLT"),
            CodePair::new_str(2, "AcDbDictionaryWithDefault"),
            CodePair::new_str(3, "ObjectDBX Classes"),
            CodePair::new_i32(90, 0),
            CodePair::new_i16(280, 0),
            CodePair::new_i16(281, 0),
            CodePair::new_str(0, "ENDSEC"),
            CodePair::new_str(0, "EOF"),
        ]);
        assert_eq!(1, drawing.classes.len());
        let class = &drawing.classes[0];
        assert_eq!("ACDBDICTIONARYWDFLT", class.record_name);
        assert_eq!("AcDbDictionaryWithDefault", class.class_name);
        assert_eq!("ObjectDBX Classes", class.application_name);
        assert!(class.was_class_loaded_with_file);
        assert!(!class.is_entity);
    }

    #[test]
    fn read_r13_class() {
        let drawing = drawing_from_pairs(vec![
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "HEADER"),
            CodePair::new_str(9, "$ACADVER"),
            CodePair::new_str(1, "AC1012"),
            CodePair::new_str(0, "ENDSEC"),
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "CLASSES"),
            CodePair::new_str(0, "ACDBDICTIONARYWDFLT"),
            CodePair::new_str(1, "AcDbDictionaryWithDefault"),
            CodePair::new_str(2, "ObjectDBX Classes"),
            CodePair::new_i32(90, 42),
            CodePair::new_str(0, "ENDSEC"),
            CodePair::new_str(0, "EOF"),
        ]);
        assert_eq!(1, drawing.classes.len());
        let class = &drawing.classes[0];
        assert_eq!("ACDBDICTIONARYWDFLT", class.record_name);
        assert_eq!("AcDbDictionaryWithDefault", class.class_name);
        assert_eq!("ObjectDBX Classes", class.application_name);
        assert_eq!(42, class.version_number);
    }

    #[test]
    fn classes_section_is_not_written_downlevel() {
        let mut drawing = Drawing::new();
        drawing.classes.push(Class::default());
        drawing.header.version = AcadVersion::R12;
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(2, "CLASSES")]);
    }

    #[test]
    fn empty_classes_section_is_not_written() {
        let drawing = Drawing::new();
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(2, "CLASSES")]);
    }

    #[test]
    fn instance_count_is_version_gated() {
        let mut drawing = Drawing::new();
        drawing.classes.push(Class {
            record_name: String::from("RECORD"),
            instance_count: 5,
            ..Default::default()
        });
        drawing.header.version = AcadVersion::R2000;
        assert_not_contains_pairs(&drawing, vec![CodePair::new_i32(91, 5)]);
        drawing.header.version = AcadVersion::R2004;
        assert_contains_pairs(&drawing, vec![CodePair::new_i32(91, 5)]);
    }
}
