use crate::block::Block;
use crate::entities::Entity;
use crate::handle::Handle;
use crate::objects::Object;
use crate::tables::*;

/// A borrowed view of any handle-carrying record in a drawing, returned
/// by handle lookups.
pub enum DrawingItem<'a> {
    AppId(&'a AppId),
    Block(&'a Block),
    BlockRecord(&'a BlockRecord),
    DimStyle(&'a DimStyle),
    Entity(&'a Entity),
    Layer(&'a Layer),
    LineType(&'a LineType),
    Object(&'a Object),
    Style(&'a Style),
    Ucs(&'a Ucs),
    View(&'a View),
    ViewPort(&'a ViewPort),
}

impl<'a> DrawingItem<'a> {
    pub fn handle(&self) -> Handle {
        match self {
            DrawingItem::AppId(item) => item.handle,
            DrawingItem::Block(item) => item.handle,
            DrawingItem::BlockRecord(item) => item.handle,
            DrawingItem::DimStyle(item) => item.handle,
            DrawingItem::Entity(item) => item.common.handle,
            DrawingItem::Layer(item) => item.handle,
            DrawingItem::LineType(item) => item.handle,
            DrawingItem::Object(item) => item.common.handle,
            DrawingItem::Style(item) => item.handle,
            DrawingItem::Ucs(item) => item.handle,
            DrawingItem::View(item) => item.handle,
            DrawingItem::ViewPort(item) => item.handle,
        }
    }
}

/// A mutable view of any handle-carrying record in a drawing.
pub enum DrawingItemMut<'a> {
    AppId(&'a mut AppId),
    Block(&'a mut Block),
    BlockRecord(&'a mut BlockRecord),
    DimStyle(&'a mut DimStyle),
    Entity(&'a mut Entity),
    Layer(&'a mut Layer),
    LineType(&'a mut LineType),
    Object(&'a mut Object),
    Style(&'a mut Style),
    Ucs(&'a mut Ucs),
    View(&'a mut View),
    ViewPort(&'a mut ViewPort),
}

impl<'a> DrawingItemMut<'a> {
    pub fn handle(&self) -> Handle {
        match self {
            DrawingItemMut::AppId(item) => item.handle,
            DrawingItemMut::Block(item) => item.handle,
            DrawingItemMut::BlockRecord(item) => item.handle,
            DrawingItemMut::DimStyle(item) => item.handle,
            DrawingItemMut::Entity(item) => item.common.handle,
            DrawingItemMut::Layer(item) => item.handle,
            DrawingItemMut::LineType(item) => item.handle,
            DrawingItemMut::Object(item) => item.common.handle,
            DrawingItemMut::Style(item) => item.handle,
            DrawingItemMut::Ucs(item) => item.handle,
            DrawingItemMut::View(item) => item.handle,
            DrawingItemMut::ViewPort(item) => item.handle,
        }
    }
    pub fn set_handle(&mut self, handle: Handle) {
        match self {
            DrawingItemMut::AppId(item) => item.handle = handle,
            DrawingItemMut::Block(item) => item.handle = handle,
            DrawingItemMut::BlockRecord(item) => item.handle = handle,
            DrawingItemMut::DimStyle(item) => item.handle = handle,
            DrawingItemMut::Entity(item) => item.common.handle = handle,
            DrawingItemMut::Layer(item) => item.handle = handle,
            DrawingItemMut::LineType(item) => item.handle = handle,
            DrawingItemMut::Object(item) => item.common.handle = handle,
            DrawingItemMut::Style(item) => item.handle = handle,
            DrawingItemMut::Ucs(item) => item.handle = handle,
            DrawingItemMut::View(item) => item.handle = handle,
            DrawingItemMut::ViewPort(item) => item.handle = handle,
        }
    }
}
