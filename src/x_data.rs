use std::io::{Read, Write};

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::enums::AcadVersion;
use crate::error::{DxfError, DxfResult};
use crate::handle::Handle;
use crate::helpers::parse_hex_string;
use crate::{CodePair, Point, Vector};

pub(crate) const XDATA_APPLICATION_NAME: i32 = 1001;
const XDATA_STRING: i32 = 1000;
const XDATA_CONTROL_GROUP: i32 = 1002;
const XDATA_LAYER: i32 = 1003;
const XDATA_BINARY_DATA: i32 = 1004;
const XDATA_HANDLE: i32 = 1005;
const XDATA_THREE_REALS: i32 = 1010;
const XDATA_WORLD_SPACE_POSITION: i32 = 1011;
const XDATA_WORLD_SPACE_DISPLACEMENT: i32 = 1012;
const XDATA_WORLD_DIRECTION: i32 = 1013;
const XDATA_REAL: i32 = 1040;
const XDATA_DISTANCE: i32 = 1041;
const XDATA_SCALE_FACTOR: i32 = 1042;
const XDATA_INTEGER: i32 = 1070;
const XDATA_LONG: i32 = 1071;

/// Extended data attached to a record under an application name.
///
/// The items are carried verbatim; the codec never interprets them.
#[derive(Clone, Debug, PartialEq)]
pub struct XData {
    pub application_name: String,
    pub items: Vec<XDataItem>,
}

/// A single piece of extended data, typed by its sub-code family.
#[derive(Clone, Debug, PartialEq)]
pub enum XDataItem {
    Str(String),
    ControlGroup(Vec<XDataItem>),
    LayerName(String),
    BinaryData(Vec<u8>),
    Handle(Handle),
    ThreeReals(f64, f64, f64),
    WorldSpacePosition(Point),
    WorldSpaceDisplacement(Point),
    WorldDirection(Vector),
    Real(f64),
    Distance(f64),
    ScaleFactor(f64),
    Integer(i16),
    Long(i32),
}

impl XData {
    pub(crate) fn read<T>(
        application_name: String,
        iter: &mut CodePairBuffer<T>,
    ) -> DxfResult<XData>
    where
        T: Read,
    {
        let mut xdata = XData {
            application_name,
            items: vec![],
        };
        loop {
            let pair = match iter.next() {
                Some(Ok(pair)) => {
                    if pair.code == XDATA_APPLICATION_NAME || pair.code < XDATA_STRING {
                        // a new XData block or the end of the record
                        iter.put_back(Ok(pair));
                        break;
                    }
                    pair
                }
                Some(Err(e)) => return Err(e),
                None => break,
            };
            xdata.items.push(XDataItem::read_item(&pair, iter)?);
        }

        Ok(xdata)
    }
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        // not supported before R2000
        if version < AcadVersion::R2000 {
            return Ok(());
        }

        writer.write_code_pair(&CodePair::new_string(
            XDATA_APPLICATION_NAME,
            &self.application_name,
        ))?;
        for item in &self.items {
            item.write(writer)?;
        }

        Ok(())
    }
}

impl XDataItem {
    fn read_item<T>(pair: &CodePair, iter: &mut CodePairBuffer<T>) -> DxfResult<XDataItem>
    where
        T: Read,
    {
        match pair.code {
            XDATA_STRING => Ok(XDataItem::Str(pair.assert_string()?)),
            XDATA_CONTROL_GROUP => {
                let mut items = vec![];
                loop {
                    let pair = match iter.next() {
                        Some(Ok(pair)) => {
                            if pair.code < XDATA_STRING {
                                return Err(DxfError::UnexpectedCodePair(
                                    pair,
                                    String::from("expected an XData item"),
                                ));
                            }
                            pair
                        }
                        Some(Err(e)) => return Err(e),
                        None => return Err(DxfError::UnexpectedEndOfInput),
                    };
                    if pair.code == XDATA_CONTROL_GROUP && pair.assert_string()? == "}" {
                        break;
                    }
                    items.push(XDataItem::read_item(&pair, iter)?);
                }
                Ok(XDataItem::ControlGroup(items))
            }
            XDATA_LAYER => Ok(XDataItem::LayerName(pair.assert_string()?)),
            XDATA_BINARY_DATA => {
                let mut data = vec![];
                parse_hex_string(&pair.assert_string()?, &mut data, pair.offset)?;
                Ok(XDataItem::BinaryData(data))
            }
            XDATA_HANDLE => Ok(XDataItem::Handle(pair.as_handle()?)),
            XDATA_THREE_REALS => Ok(XDataItem::ThreeReals(
                pair.assert_f64()?,
                XDataItem::read_double(iter, pair.code)?,
                XDataItem::read_double(iter, pair.code)?,
            )),
            XDATA_WORLD_SPACE_POSITION => Ok(XDataItem::WorldSpacePosition(
                XDataItem::read_point(iter, pair.assert_f64()?, pair.code)?,
            )),
            XDATA_WORLD_SPACE_DISPLACEMENT => Ok(XDataItem::WorldSpaceDisplacement(
                XDataItem::read_point(iter, pair.assert_f64()?, pair.code)?,
            )),
            XDATA_WORLD_DIRECTION => Ok(XDataItem::WorldDirection(XDataItem::read_vector(
                iter,
                pair.assert_f64()?,
                pair.code,
            )?)),
            XDATA_REAL => Ok(XDataItem::Real(pair.assert_f64()?)),
            XDATA_DISTANCE => Ok(XDataItem::Distance(pair.assert_f64()?)),
            XDATA_SCALE_FACTOR => Ok(XDataItem::ScaleFactor(pair.assert_f64()?)),
            XDATA_INTEGER => Ok(XDataItem::Integer(pair.assert_i16()?)),
            XDATA_LONG => Ok(XDataItem::Long(pair.assert_i32()?)),
            _ => Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
        }
    }
    fn read_double<T>(iter: &mut CodePairBuffer<T>, expected_code: i32) -> DxfResult<f64>
    where
        T: Read,
    {
        match iter.next() {
            Some(Ok(ref pair)) if pair.code == expected_code => Ok(pair.assert_f64()?),
            Some(Ok(pair)) => Err(DxfError::UnexpectedCode(pair.code, pair.offset)),
            Some(Err(e)) => Err(e),
            None => Err(DxfError::UnexpectedEndOfInput),
        }
    }
    fn read_point<T>(
        iter: &mut CodePairBuffer<T>,
        first: f64,
        expected_code: i32,
    ) -> DxfResult<Point>
    where
        T: Read,
    {
        Ok(Point::new(
            first,
            XDataItem::read_double(iter, expected_code)?,
            XDataItem::read_double(iter, expected_code)?,
        ))
    }
    fn read_vector<T>(
        iter: &mut CodePairBuffer<T>,
        first: f64,
        expected_code: i32,
    ) -> DxfResult<Vector>
    where
        T: Read,
    {
        Ok(Vector::new(
            first,
            XDataItem::read_double(iter, expected_code)?,
            XDataItem::read_double(iter, expected_code)?,
        ))
    }
    fn write<T>(&self, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        match self {
            XDataItem::Str(s) => writer.write_code_pair(&CodePair::new_string(XDATA_STRING, s))?,
            XDataItem::ControlGroup(items) => {
                writer.write_code_pair(&CodePair::new_str(XDATA_CONTROL_GROUP, "{"))?;
                for item in items {
                    item.write(writer)?;
                }
                writer.write_code_pair(&CodePair::new_str(XDATA_CONTROL_GROUP, "}"))?;
            }
            XDataItem::LayerName(l) => {
                writer.write_code_pair(&CodePair::new_string(XDATA_LAYER, l))?
            }
            XDataItem::BinaryData(data) => {
                let mut line = String::new();
                for b in data {
                    line.push_str(&format!("{:02X}", b));
                }
                writer.write_code_pair(&CodePair::new_string(XDATA_BINARY_DATA, &line))?;
            }
            XDataItem::Handle(h) => {
                writer.write_code_pair(&CodePair::new_string(XDATA_HANDLE, &h.as_string()))?
            }
            XDataItem::ThreeReals(x, y, z) => {
                for v in [x, y, z] {
                    writer.write_code_pair(&CodePair::new_f64(XDATA_THREE_REALS, *v))?;
                }
            }
            XDataItem::WorldSpacePosition(p) => {
                for v in [p.x, p.y, p.z] {
                    writer.write_code_pair(&CodePair::new_f64(XDATA_WORLD_SPACE_POSITION, v))?;
                }
            }
            XDataItem::WorldSpaceDisplacement(p) => {
                for v in [p.x, p.y, p.z] {
                    writer
                        .write_code_pair(&CodePair::new_f64(XDATA_WORLD_SPACE_DISPLACEMENT, v))?;
                }
            }
            XDataItem::WorldDirection(d) => {
                for v in [d.x, d.y, d.z] {
                    writer.write_code_pair(&CodePair::new_f64(XDATA_WORLD_DIRECTION, v))?;
                }
            }
            XDataItem::Real(f) => writer.write_code_pair(&CodePair::new_f64(XDATA_REAL, *f))?,
            XDataItem::Distance(f) => {
                writer.write_code_pair(&CodePair::new_f64(XDATA_DISTANCE, *f))?
            }
            XDataItem::ScaleFactor(f) => {
                writer.write_code_pair(&CodePair::new_f64(XDATA_SCALE_FACTOR, *f))?
            }
            XDataItem::Integer(i) => {
                writer.write_code_pair(&CodePair::new_i16(XDATA_INTEGER, *i))?
            }
            XDataItem::Long(i) => writer.write_code_pair(&CodePair::new_i32(XDATA_LONG, *i))?,
        }

        Ok(())
    }
}
