//! This crate provides the ability to read and write DXF CAD files across
//! the historical range of AutoCAD releases, R9 through R2013.
//!
//! # Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ``` toml
//! [dependencies]
//! dxfio = "0.1.0"
//! ```
//!
//! # Examples
//!
//! Open a DXF file from disk:
//!
//! ``` rust
//! # fn main() { }
//! # fn ex() -> dxfio::DxfResult<()> {
//! use dxfio::Drawing;
//! use dxfio::entities::*;
//!
//! let drawing = Drawing::load_file("path/to/file.dxf")?;
//! for e in drawing.entities() {
//!     println!("found entity on layer {}", e.common.layer);
//!     match e.specific {
//!         EntityType::Circle(ref circle) => {
//!             // do something with the circle
//!         }
//!         EntityType::Line(ref line) => {
//!             // do something with the line
//!         }
//!         _ => (),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Saving a DXF file to disk:
//!
//! ``` rust
//! # fn main() { }
//! # fn ex() -> dxfio::DxfResult<()> {
//! use dxfio::Drawing;
//! use dxfio::entities::*;
//!
//! let mut drawing = Drawing::new();
//! drawing.add_entity(Entity::new(EntityType::Line(Line::default())));
//! drawing.save_file("path/to/file.dxf")?;
//! # Ok(())
//! # }
//! ```
//!
//! Writing at a specific version:
//!
//! ``` rust
//! # fn main() { }
//! # fn ex() -> dxfio::DxfResult<()> {
//! use dxfio::Drawing;
//! use dxfio::enums::AcadVersion;
//!
//! let drawing = Drawing::new();
//! let mut buf = Vec::new();
//! drawing.save_as(&mut buf, AcadVersion::R12)?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate enum_primitive;

#[macro_use]
mod helpers;

mod code_pair;
pub use crate::code_pair::CodePair;

mod code_pair_value;
pub use crate::code_pair_value::CodePairValue;

mod expected_type;
pub use crate::expected_type::ExpectedType;

mod code_pair_reader;

mod code_pair_buffer;

mod code_pair_writer;

mod error;
pub use crate::error::{DxfError, DxfResult};

mod handle;
pub use crate::handle::Handle;

mod handle_tracker;

pub mod enums;

mod color;
pub use crate::color::Color;

mod line_weight;
pub use crate::line_weight::LineWeight;

mod point;
pub use crate::point::Point;

mod vector;
pub use crate::vector::Vector;

mod extension_data;
pub use crate::extension_data::{ExtensionGroup, ExtensionGroupItem};

mod x_data;
pub use crate::x_data::{XData, XDataItem};

mod header;
pub use crate::header::{Header, RetainedHeaderVariable};

mod class;
pub use crate::class::Class;

pub mod tables;

mod block;
pub use crate::block::{Block, BlockTypeFlags};

pub mod entities;

mod entity;
mod entity_iter;

pub mod objects;

mod object;

mod thumbnail;

mod drawing;
pub use crate::drawing::Drawing;

mod drawing_item;
pub use crate::drawing_item::{DrawingItem, DrawingItemMut};

#[cfg(test)]
mod misc_tests;
