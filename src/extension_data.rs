use std::io::{Read, Write};

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::error::{DxfError, DxfResult};
use crate::CodePair;

pub(crate) const EXTENSION_DATA_GROUP: i32 = 102;

/// A named group of code pairs attached to a record, e.g. `{ACAD_REACTORS`.
///
/// Groups open with a `102` pair whose value starts with `{`, close with a
/// `102`/`}` pair, and may nest.  The contents are not interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionGroup {
    pub application_name: String,
    pub items: Vec<ExtensionGroupItem>,
}

/// A single pair or a nested group inside an `ExtensionGroup`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionGroupItem {
    CodePair(CodePair),
    Group(ExtensionGroup),
}

impl ExtensionGroup {
    pub(crate) fn read_group<T>(
        application_name: String,
        iter: &mut CodePairBuffer<T>,
        offset: usize,
    ) -> DxfResult<ExtensionGroup>
    where
        T: Read,
    {
        if !application_name.starts_with('{') {
            return Err(DxfError::BadPair(offset));
        }
        let application_name = application_name[1..].to_string();

        let mut items = vec![];
        loop {
            let pair = match iter.next() {
                Some(Ok(pair)) => pair,
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            };
            if pair.code == EXTENSION_DATA_GROUP {
                let name = pair.assert_string()?;
                if name == "}" {
                    break;
                } else if name.starts_with('{') {
                    let sub_group = ExtensionGroup::read_group(name, iter, pair.offset)?;
                    items.push(ExtensionGroupItem::Group(sub_group));
                } else {
                    return Err(DxfError::UnexpectedCodePair(
                        pair,
                        String::from("expected an extension group start or end"),
                    ));
                }
            } else {
                items.push(ExtensionGroupItem::CodePair(pair));
            }
        }

        Ok(ExtensionGroup {
            application_name,
            items,
        })
    }
    pub(crate) fn write<T>(&self, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        if self.items.is_empty() {
            return Ok(());
        }

        let full_group_name = format!("{{{}", self.application_name);
        writer.write_code_pair(&CodePair::new_string(
            EXTENSION_DATA_GROUP,
            &full_group_name,
        ))?;
        for item in &self.items {
            match item {
                ExtensionGroupItem::CodePair(pair) => writer.write_code_pair(pair)?,
                ExtensionGroupItem::Group(group) => group.write(writer)?,
            }
        }
        writer.write_code_pair(&CodePair::new_str(EXTENSION_DATA_GROUP, "}"))?;
        Ok(())
    }
}
