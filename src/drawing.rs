use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use encoding_rs::Encoding;
use image::DynamicImage;

use crate::block::Block;
use crate::class::Class;
use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_reader::CodePairReader;
use crate::code_pair_writer::CodePairWriter;
use crate::drawing_item::{DrawingItem, DrawingItemMut};
use crate::entities::*;
use crate::entity_iter::read_entities_into_vec;
use crate::enums::AcadVersion;
use crate::error::{DxfError, DxfResult};
use crate::handle::Handle;
use crate::handle_tracker::HandleTracker;
use crate::header::Header;
use crate::objects::*;
use crate::tables;
use crate::tables::*;
use crate::thumbnail;
use crate::{CodePair, CodePairValue};

/// An in-memory DXF drawing: header variables, classes, the nine symbol
/// tables, blocks, entities, objects, and the optional thumbnail.
///
/// A drawing exclusively owns its records; records refer to each other by
/// handle value only and lookups traverse the owning collections.
pub struct Drawing {
    /// The drawing's header: system variables and settings.
    pub header: Header,
    /// The classes contained by the drawing (R13 and later).
    pub classes: Vec<Class>,

    __app_ids: Vec<AppId>,
    __block_records: Vec<BlockRecord>,
    __dim_styles: Vec<DimStyle>,
    __layers: Vec<Layer>,
    __line_types: Vec<LineType>,
    __styles: Vec<Style>,
    __ucss: Vec<Ucs>,
    __views: Vec<View>,
    __view_ports: Vec<ViewPort>,

    /// The blocks contained by the drawing.
    pub blocks: Vec<Block>,

    __entities: Vec<Entity>,
    __objects: Vec<Object>,

    /// The thumbnail preview of the drawing (R2000 and later).
    pub thumbnail: Option<DynamicImage>,
}

// public implementation
impl Drawing {
    /// Creates a new empty drawing with the expected default records
    /// (layer `0`, the standard line types and styles, an active
    /// viewport).
    pub fn new() -> Self {
        let mut drawing = Drawing {
            header: Header::default(),
            classes: vec![],
            __app_ids: vec![],
            __block_records: vec![],
            __dim_styles: vec![],
            __layers: vec![],
            __line_types: vec![],
            __styles: vec![],
            __ucss: vec![],
            __views: vec![],
            __view_ports: vec![],
            blocks: vec![],
            __entities: vec![],
            __objects: vec![],
            thumbnail: None,
        };
        drawing.normalize();
        drawing
    }
    /// Loads a drawing from anything implementing `Read`.
    pub fn load<T>(reader: &mut T) -> DxfResult<Drawing>
    where
        T: Read + ?Sized,
    {
        Drawing::load_with_encoding(reader, encoding_rs::WINDOWS_1252)
    }
    /// Loads a drawing using the given text encoding for string values.
    pub fn load_with_encoding<T>(reader: &mut T, encoding: &'static Encoding) -> DxfResult<Drawing>
    where
        T: Read + ?Sized,
    {
        let reader = CodePairReader::new(reader, encoding);
        let mut iter = CodePairBuffer::from_reader(reader);
        let mut drawing = Drawing::new();
        drawing.clear();
        Drawing::read_sections(&mut drawing, &mut iter)?;
        if iter.items_remain() {
            match iter.next() {
                Some(Ok(CodePair {
                    code: 0,
                    value: CodePairValue::Str(ref s),
                    ..
                })) if s == "EOF" => (),
                Some(Ok(pair)) => {
                    return Err(DxfError::UnexpectedCodePair(
                        pair,
                        String::from("expected 0/EOF"),
                    ))
                }
                Some(Err(e)) => return Err(e),
                None => (),
            }
        } else {
            tracing::warn!("file ended without 0/EOF");
        }
        drawing.warn_on_duplicate_handles();
        Ok(drawing)
    }
    /// Loads a drawing from disk, using a `BufReader`.
    pub fn load_file(file_name: &str) -> DxfResult<Drawing> {
        let path = Path::new(file_name);
        let file = File::open(path)?;
        let mut buf_reader = BufReader::new(file);
        Drawing::load(&mut buf_reader)
    }
    /// Parses a drawing from its text content.
    pub fn parse(content: &str) -> DxfResult<Drawing> {
        Drawing::load(&mut content.as_bytes())
    }
    /// Writes the drawing at the version declared by its header.
    pub fn save<T>(&self, writer: &mut T) -> DxfResult<()>
    where
        T: Write + ?Sized,
    {
        self.save_internal(writer, self.header.version)
    }
    /// Writes the drawing at the given target version; fields and records
    /// the target cannot represent are dropped or defaulted.
    pub fn save_as<T>(&self, writer: &mut T, version: AcadVersion) -> DxfResult<()>
    where
        T: Write + ?Sized,
    {
        self.save_internal(writer, version)
    }
    /// Writes the drawing to disk, using a `BufWriter`.
    pub fn save_file(&self, file_name: &str) -> DxfResult<()> {
        let path = Path::new(file_name);
        let file = File::create(path)?;
        let mut buf_writer = BufWriter::new(file);
        self.save(&mut buf_writer)
    }
    /// Writes the drawing to disk at the given target version.
    pub fn save_file_as(&self, file_name: &str, version: AcadVersion) -> DxfResult<()> {
        let path = Path::new(file_name);
        let file = File::create(path)?;
        let mut buf_writer = BufWriter::new(file);
        self.save_as(&mut buf_writer, version)
    }
    /// Returns an iterator for all app ids.
    pub fn app_ids(&self) -> impl Iterator<Item = &AppId> {
        self.__app_ids.iter()
    }
    pub fn app_ids_mut(&mut self) -> impl Iterator<Item = &mut AppId> {
        self.__app_ids.iter_mut()
    }
    /// Adds an app id, assigning its handle.
    pub fn add_app_id(&mut self, mut app_id: AppId) -> &AppId {
        app_id.handle = self.next_handle();
        self.add_app_id_no_handle_set(app_id)
    }
    /// Returns an iterator for all block records.
    pub fn block_records(&self) -> impl Iterator<Item = &BlockRecord> {
        self.__block_records.iter()
    }
    pub fn block_records_mut(&mut self) -> impl Iterator<Item = &mut BlockRecord> {
        self.__block_records.iter_mut()
    }
    /// Adds a block record, assigning its handle.
    pub fn add_block_record(&mut self, mut block_record: BlockRecord) -> &BlockRecord {
        block_record.handle = self.next_handle();
        self.add_block_record_no_handle_set(block_record)
    }
    /// Returns an iterator for all dimension styles.
    pub fn dim_styles(&self) -> impl Iterator<Item = &DimStyle> {
        self.__dim_styles.iter()
    }
    pub fn dim_styles_mut(&mut self) -> impl Iterator<Item = &mut DimStyle> {
        self.__dim_styles.iter_mut()
    }
    /// Adds a dimension style, assigning its handle.
    pub fn add_dim_style(&mut self, mut dim_style: DimStyle) -> &DimStyle {
        dim_style.handle = self.next_handle();
        self.add_dim_style_no_handle_set(dim_style)
    }
    /// Returns an iterator for all layers.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.__layers.iter()
    }
    pub fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.__layers.iter_mut()
    }
    /// Adds a layer, assigning its handle.
    pub fn add_layer(&mut self, mut layer: Layer) -> &Layer {
        layer.handle = self.next_handle();
        self.add_layer_no_handle_set(layer)
    }
    /// Returns an iterator for all line types.
    pub fn line_types(&self) -> impl Iterator<Item = &LineType> {
        self.__line_types.iter()
    }
    pub fn line_types_mut(&mut self) -> impl Iterator<Item = &mut LineType> {
        self.__line_types.iter_mut()
    }
    /// Adds a line type, assigning its handle.
    pub fn add_line_type(&mut self, mut line_type: LineType) -> &LineType {
        line_type.handle = self.next_handle();
        self.add_line_type_no_handle_set(line_type)
    }
    /// Returns an iterator for all text styles.
    pub fn styles(&self) -> impl Iterator<Item = &Style> {
        self.__styles.iter()
    }
    pub fn styles_mut(&mut self) -> impl Iterator<Item = &mut Style> {
        self.__styles.iter_mut()
    }
    /// Adds a text style, assigning its handle.
    pub fn add_style(&mut self, mut style: Style) -> &Style {
        style.handle = self.next_handle();
        self.add_style_no_handle_set(style)
    }
    /// Returns an iterator for all user coordinate systems.
    pub fn ucss(&self) -> impl Iterator<Item = &Ucs> {
        self.__ucss.iter()
    }
    pub fn ucss_mut(&mut self) -> impl Iterator<Item = &mut Ucs> {
        self.__ucss.iter_mut()
    }
    /// Adds a user coordinate system, assigning its handle.
    pub fn add_ucs(&mut self, mut ucs: Ucs) -> &Ucs {
        ucs.handle = self.next_handle();
        self.add_ucs_no_handle_set(ucs)
    }
    /// Returns an iterator for all views.
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.__views.iter()
    }
    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut View> {
        self.__views.iter_mut()
    }
    /// Adds a view, assigning its handle.
    pub fn add_view(&mut self, mut view: View) -> &View {
        view.handle = self.next_handle();
        self.add_view_no_handle_set(view)
    }
    /// Returns an iterator for all view ports.
    pub fn view_ports(&self) -> impl Iterator<Item = &ViewPort> {
        self.__view_ports.iter()
    }
    pub fn view_ports_mut(&mut self) -> impl Iterator<Item = &mut ViewPort> {
        self.__view_ports.iter_mut()
    }
    /// Adds a view port, assigning its handle.
    pub fn add_view_port(&mut self, mut view_port: ViewPort) -> &ViewPort {
        view_port.handle = self.next_handle();
        self.add_view_port_no_handle_set(view_port)
    }
    /// Returns an iterator for all top-level entities.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.__entities.iter()
    }
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.__entities.iter_mut()
    }
    /// Adds an entity, assigning its handle (and its children's handles)
    /// and back-filling the symbol table records it references.
    pub fn add_entity(&mut self, mut entity: Entity) -> &Entity {
        entity.common.handle = self.next_handle();

        // set child handles
        match entity.specific {
            EntityType::Insert(ref mut ins) => {
                for pair in ins.__attributes_and_handles.iter_mut() {
                    if pair.1.is_empty() {
                        pair.1 = self.next_handle();
                    }
                }
            }
            EntityType::Polyline(ref mut poly) => {
                for pair in poly.__vertices_and_handles.iter_mut() {
                    if pair.1.is_empty() {
                        pair.1 = self.next_handle();
                    }
                }
            }
            _ => (),
        }

        self.add_entity_no_handle_set(entity)
    }
    /// Returns an iterator for all objects.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.__objects.iter()
    }
    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut Object> {
        self.__objects.iter_mut()
    }
    /// Adds an object, assigning its handle and back-filling referenced
    /// records.
    pub fn add_object(&mut self, mut object: Object) -> &Object {
        object.common.handle = self.next_handle();
        self.add_object_no_handle_set(object)
    }
    /// Clears all items from the drawing and resets the handle seed.
    pub fn clear(&mut self) {
        self.classes.clear();
        self.__app_ids.clear();
        self.__block_records.clear();
        self.__dim_styles.clear();
        self.__layers.clear();
        self.__line_types.clear();
        self.__styles.clear();
        self.__ucss.clear();
        self.__views.clear();
        self.__view_ports.clear();
        self.blocks.clear();
        self.__entities.clear();
        self.__objects.clear();
        self.thumbnail = None;

        self.header.next_available_handle = Handle(1);
    }
    /// Re-establishes the drawing's expected records and value ranges.
    pub fn normalize(&mut self) {
        self.header.normalize();
        for block in self.blocks.iter_mut() {
            block.normalize();
        }
        for entity in self.__entities.iter_mut() {
            entity.normalize();
        }
        for layer in self.__layers.iter_mut() {
            layer.normalize();
        }
        for style in self.__styles.iter_mut() {
            style.normalize();
        }
        for view in self.__views.iter_mut() {
            view.normalize();
        }
        for view_port in self.__view_ports.iter_mut() {
            view_port.normalize();
        }
        self.ensure_layer_is_present(&self.header.current_layer.clone());
        self.ensure_dimension_styles();
        self.ensure_layers();
        self.ensure_line_types();
        self.ensure_text_styles();
        self.ensure_view_ports();
        self.ensure_block_records();
        self.ensure_ucs();

        self.__app_ids.sort_by(|a, b| a.name.cmp(&b.name));
        self.__block_records.sort_by(|a, b| a.name.cmp(&b.name));
        self.__dim_styles.sort_by(|a, b| a.name.cmp(&b.name));
        self.__layers.sort_by(|a, b| a.name.cmp(&b.name));
        self.__line_types.sort_by(|a, b| a.name.cmp(&b.name));
        self.__styles.sort_by(|a, b| a.name.cmp(&b.name));
        self.__ucss.sort_by(|a, b| a.name.cmp(&b.name));
        self.__views.sort_by(|a, b| a.name.cmp(&b.name));
        self.__view_ports.sort_by(|a, b| a.name.cmp(&b.name));
    }
    /// Finds the record carrying `handle`, if any.  With colliding
    /// handles the first-seen record wins.
    pub fn item_by_handle(&self, handle: Handle) -> Option<DrawingItem<'_>> {
        for item in &self.__app_ids {
            if item.handle == handle {
                return Some(DrawingItem::AppId(item));
            }
        }
        for item in &self.blocks {
            if item.handle == handle {
                return Some(DrawingItem::Block(item));
            }
        }
        for item in &self.__block_records {
            if item.handle == handle {
                return Some(DrawingItem::BlockRecord(item));
            }
        }
        for item in &self.__dim_styles {
            if item.handle == handle {
                return Some(DrawingItem::DimStyle(item));
            }
        }
        for item in &self.__entities {
            if item.common.handle == handle {
                return Some(DrawingItem::Entity(item));
            }
        }
        for item in &self.__layers {
            if item.handle == handle {
                return Some(DrawingItem::Layer(item));
            }
        }
        for item in &self.__line_types {
            if item.handle == handle {
                return Some(DrawingItem::LineType(item));
            }
        }
        for item in &self.__objects {
            if item.common.handle == handle {
                return Some(DrawingItem::Object(item));
            }
        }
        for item in &self.__styles {
            if item.handle == handle {
                return Some(DrawingItem::Style(item));
            }
        }
        for item in &self.__ucss {
            if item.handle == handle {
                return Some(DrawingItem::Ucs(item));
            }
        }
        for item in &self.__views {
            if item.handle == handle {
                return Some(DrawingItem::View(item));
            }
        }
        for item in &self.__view_ports {
            if item.handle == handle {
                return Some(DrawingItem::ViewPort(item));
            }
        }

        None
    }
    /// Finds the record carrying `handle` for mutation.
    pub fn item_by_handle_mut(&mut self, handle: Handle) -> Option<DrawingItemMut<'_>> {
        for item in &mut self.__app_ids {
            if item.handle == handle {
                return Some(DrawingItemMut::AppId(item));
            }
        }
        for item in &mut self.blocks {
            if item.handle == handle {
                return Some(DrawingItemMut::Block(item));
            }
        }
        for item in &mut self.__block_records {
            if item.handle == handle {
                return Some(DrawingItemMut::BlockRecord(item));
            }
        }
        for item in &mut self.__dim_styles {
            if item.handle == handle {
                return Some(DrawingItemMut::DimStyle(item));
            }
        }
        for item in &mut self.__entities {
            if item.common.handle == handle {
                return Some(DrawingItemMut::Entity(item));
            }
        }
        for item in &mut self.__layers {
            if item.handle == handle {
                return Some(DrawingItemMut::Layer(item));
            }
        }
        for item in &mut self.__line_types {
            if item.handle == handle {
                return Some(DrawingItemMut::LineType(item));
            }
        }
        for item in &mut self.__objects {
            if item.common.handle == handle {
                return Some(DrawingItemMut::Object(item));
            }
        }
        for item in &mut self.__styles {
            if item.handle == handle {
                return Some(DrawingItemMut::Style(item));
            }
        }
        for item in &mut self.__ucss {
            if item.handle == handle {
                return Some(DrawingItemMut::Ucs(item));
            }
        }
        for item in &mut self.__views {
            if item.handle == handle {
                return Some(DrawingItemMut::View(item));
            }
        }
        for item in &mut self.__view_ports {
            if item.handle == handle {
                return Some(DrawingItemMut::ViewPort(item));
            }
        }

        None
    }
    pub(crate) fn assign_and_get_handle(&mut self, item: &mut DrawingItemMut) -> Handle {
        if item.handle().is_empty() {
            item.set_handle(self.header.next_available_handle);
            self.header.next_available_handle =
                self.header.next_available_handle.next_handle_value();
        }

        item.handle()
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Drawing::new()
    }
}

// private implementation
impl Drawing {
    pub(crate) fn next_handle(&mut self) -> Handle {
        let result = self.header.next_available_handle;
        self.header.next_available_handle = result.next_handle_value();
        result
    }
    fn add_entity_no_handle_set(&mut self, entity: Entity) -> &Entity {
        self.ensure_mline_style_is_present_for_entity(&entity);
        self.ensure_dimension_style_is_present_for_entity(&entity);
        self.ensure_layer_is_present(&entity.common.layer);
        self.ensure_line_type_is_present(&entity.common.line_type_name);
        self.ensure_text_style_is_present_for_entity(&entity);
        self.__entities.push(entity);
        self.__entities.last().unwrap()
    }
    fn add_object_no_handle_set(&mut self, object: Object) -> &Object {
        self.ensure_view_is_present_for_object(&object);
        self.__objects.push(object);
        self.__objects.last().unwrap()
    }
    pub(crate) fn add_app_id_no_handle_set(&mut self, app_id: AppId) -> &AppId {
        self.__app_ids.push(app_id);
        self.__app_ids.last().unwrap()
    }
    pub(crate) fn add_block_record_no_handle_set(
        &mut self,
        block_record: BlockRecord,
    ) -> &BlockRecord {
        self.__block_records.push(block_record);
        self.__block_records.last().unwrap()
    }
    pub(crate) fn add_dim_style_no_handle_set(&mut self, dim_style: DimStyle) -> &DimStyle {
        self.__dim_styles.push(dim_style);
        self.__dim_styles.last().unwrap()
    }
    pub(crate) fn add_layer_no_handle_set(&mut self, layer: Layer) -> &Layer {
        self.__layers.push(layer);
        self.__layers.last().unwrap()
    }
    pub(crate) fn add_line_type_no_handle_set(&mut self, line_type: LineType) -> &LineType {
        self.__line_types.push(line_type);
        self.__line_types.last().unwrap()
    }
    pub(crate) fn add_style_no_handle_set(&mut self, style: Style) -> &Style {
        self.__styles.push(style);
        self.__styles.last().unwrap()
    }
    pub(crate) fn add_ucs_no_handle_set(&mut self, ucs: Ucs) -> &Ucs {
        self.__ucss.push(ucs);
        self.__ucss.last().unwrap()
    }
    pub(crate) fn add_view_no_handle_set(&mut self, view: View) -> &View {
        self.__views.push(view);
        self.__views.last().unwrap()
    }
    pub(crate) fn add_view_port_no_handle_set(&mut self, view_port: ViewPort) -> &ViewPort {
        self.__view_ports.push(view_port);
        self.__view_ports.last().unwrap()
    }
    fn ensure_mline_style_is_present_for_entity(&mut self, entity: &Entity) {
        if let EntityType::MLine(ref mline) = entity.specific {
            if !self.objects().any(|o| match o.specific {
                ObjectType::MLineStyle(ref style) => style.style_name == mline.style_name,
                _ => false,
            }) {
                self.add_object(Object::new(ObjectType::MLineStyle(MLineStyle {
                    style_name: mline.style_name.clone(),
                    ..Default::default()
                })));
            }
        }
    }
    fn ensure_dimension_style_is_present_for_entity(&mut self, entity: &Entity) {
        let dim_style_name = match entity.specific {
            EntityType::RotatedDimension(ref d) => Some(&d.dimension_base.dimension_style_name),
            EntityType::RadialDimension(ref d) => Some(&d.dimension_base.dimension_style_name),
            EntityType::DiameterDimension(ref d) => Some(&d.dimension_base.dimension_style_name),
            EntityType::AngularThreePointDimension(ref d) => {
                Some(&d.dimension_base.dimension_style_name)
            }
            EntityType::OrdinateDimension(ref d) => Some(&d.dimension_base.dimension_style_name),
            EntityType::Leader(ref l) => Some(&l.dimension_style_name),
            EntityType::Tolerance(ref t) => Some(&t.dimension_style_name),
            _ => None,
        };
        if let Some(dim_style_name) = dim_style_name.cloned() {
            self.ensure_dimension_style_is_present(&dim_style_name);
        }
    }
    fn ensure_dimension_style_is_present(&mut self, dim_style_name: &str) {
        if !self.dim_styles().any(|d| d.name == dim_style_name) {
            self.add_dim_style(DimStyle {
                name: String::from(dim_style_name),
                ..Default::default()
            });
        }
    }
    fn ensure_layer_is_present(&mut self, layer_name: &str) {
        if !self.layers().any(|l| l.name == *layer_name) {
            self.add_layer(Layer {
                name: String::from(layer_name),
                ..Default::default()
            });
        }
    }
    fn ensure_line_type_is_present(&mut self, line_type_name: &str) {
        if !self.line_types().any(|lt| lt.name == *line_type_name) {
            self.add_line_type(LineType {
                name: String::from(line_type_name),
                ..Default::default()
            });
        }
    }
    fn ensure_text_style_is_present_for_entity(&mut self, entity: &Entity) {
        let text_style_name = match entity.specific {
            EntityType::Attribute(ref e) => Some(&e.text_style_name),
            EntityType::AttributeDefinition(ref e) => Some(&e.text_style_name),
            EntityType::MText(ref e) => Some(&e.text_style_name),
            EntityType::Text(ref e) => Some(&e.text_style_name),
            _ => None,
        };
        if let Some(text_style_name) = text_style_name.cloned() {
            self.ensure_text_style_is_present(&text_style_name);
        }
    }
    fn ensure_text_style_is_present(&mut self, text_style_name: &str) {
        if !self.styles().any(|s| s.name == text_style_name) {
            self.add_style(Style {
                name: String::from(text_style_name),
                ..Default::default()
            });
        }
    }
    fn ensure_ucs_is_present(&mut self, ucs_name: &str) {
        if !self.ucss().any(|u| u.name == ucs_name) {
            self.add_ucs(Ucs {
                name: String::from(ucs_name),
                ..Default::default()
            });
        }
    }
    fn ensure_view_is_present_for_object(&mut self, object: &Object) {
        if let ObjectType::PlotSettings(ref settings) = object.specific {
            if !settings.plot_view_name.is_empty()
                && !self.views().any(|v| v.name == settings.plot_view_name)
            {
                self.add_view(View {
                    name: settings.plot_view_name.clone(),
                    ..Default::default()
                });
            }
        }
    }
    fn ensure_view_port_is_present(&mut self, name: &str) {
        if !self.view_ports().any(|v| v.name == name) {
            self.add_view_port(ViewPort {
                name: String::from(name),
                ..Default::default()
            });
        }
    }
    fn ensure_block_record_is_present(&mut self, name: &str) {
        if !self.block_records().any(|b| b.name == name) {
            self.add_block_record(BlockRecord {
                name: String::from(name),
                ..Default::default()
            });
        }
    }
    fn ensure_dimension_styles(&mut self) {
        self.ensure_dimension_style_is_present("STANDARD");
        self.ensure_dimension_style_is_present("ANNOTATIVE");
    }
    fn ensure_layers(&mut self) {
        let mut should_exist = HashSet::new();
        should_exist.insert(String::from("0"));
        for block in &self.blocks {
            should_exist.insert(block.layer.clone());
            for entity in &block.entities {
                should_exist.insert(entity.common.layer.clone());
            }
        }
        for entity in &self.__entities {
            should_exist.insert(entity.common.layer.clone());
        }

        for name in &should_exist {
            self.ensure_layer_is_present(name);
        }
    }
    fn ensure_line_types(&mut self) {
        let mut should_exist = HashSet::new();
        should_exist.insert(String::from("BYLAYER"));
        should_exist.insert(String::from("BYBLOCK"));
        should_exist.insert(String::from("CONTINUOUS"));
        for layer in self.layers() {
            should_exist.insert(layer.line_type_name.clone());
        }
        for block in &self.blocks {
            for entity in &block.entities {
                should_exist.insert(entity.common.line_type_name.clone());
            }
        }

        for name in &should_exist {
            self.ensure_line_type_is_present(name);
        }
    }
    fn ensure_text_styles(&mut self) {
        self.ensure_text_style_is_present("STANDARD");
        self.ensure_text_style_is_present("ANNOTATIVE");
    }
    fn ensure_view_ports(&mut self) {
        self.ensure_view_port_is_present("*ACTIVE");
    }
    fn ensure_block_records(&mut self) {
        self.ensure_block_record_is_present("*MODEL_SPACE");
        self.ensure_block_record_is_present("*PAPER_SPACE");
    }
    fn ensure_ucs(&mut self) {
        let mut should_exist = HashSet::new();
        should_exist.insert(self.header.ucs_name.clone());
        should_exist.insert(self.header.paperspace_ucs_name.clone());

        for name in &should_exist {
            if !name.is_empty() {
                self.ensure_ucs_is_present(name);
            }
        }
    }
    fn warn_on_duplicate_handles(&self) {
        let mut seen = HashSet::new();
        let mut check = |handle: Handle| {
            if !handle.is_empty() && !seen.insert(handle) {
                tracing::warn!(
                    handle = %handle.as_string(),
                    "duplicate handle; the first-seen record wins in lookups"
                );
            }
        };
        for item in &self.__app_ids {
            check(item.handle);
        }
        for item in &self.blocks {
            check(item.handle);
        }
        for item in &self.__block_records {
            check(item.handle);
        }
        for item in &self.__dim_styles {
            check(item.handle);
        }
        for item in &self.__layers {
            check(item.handle);
        }
        for item in &self.__line_types {
            check(item.handle);
        }
        for item in &self.__styles {
            check(item.handle);
        }
        for item in &self.__ucss {
            check(item.handle);
        }
        for item in &self.__views {
            check(item.handle);
        }
        for item in &self.__view_ports {
            check(item.handle);
        }
        for item in &self.__entities {
            check(item.common.handle);
        }
        for item in &self.__objects {
            check(item.common.handle);
        }
    }
    fn save_internal<T>(&self, writer: &mut T, version: AcadVersion) -> DxfResult<()>
    where
        T: Write + ?Sized,
    {
        let text_as_ascii = version <= AcadVersion::R2004;
        let write_handles = version >= AcadVersion::R13 || self.header.handles_enabled;

        // the body is written to memory first so the header can carry the
        // final $HANDSEED
        let mut buf = vec![];
        let mut handle_tracker =
            HandleTracker::new(self.header.next_available_handle.max(Handle(1)));
        {
            let mut pair_writer = CodePairWriter::new(&mut buf, text_as_ascii);
            self.write_classes(version, &mut pair_writer)?;
            self.write_tables(version, write_handles, &mut pair_writer)?;
            self.write_blocks(version, write_handles, &mut pair_writer, &mut handle_tracker)?;
            self.write_entities(version, write_handles, &mut pair_writer, &mut handle_tracker)?;
            self.write_objects(version, &mut pair_writer, &mut handle_tracker)?;
            self.write_thumbnail(version, &mut pair_writer)?;
            pair_writer.write_code_pair(&CodePair::new_str(0, "EOF"))?;
        }

        {
            let mut pair_writer = CodePairWriter::new(&mut *writer, text_as_ascii);
            self.header.write(
                version,
                handle_tracker.current_next_handle(),
                &mut pair_writer,
            )?;
        }
        writer.write_all(&buf)?;
        Ok(())
    }
    fn write_classes<T>(&self, version: AcadVersion, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        if version < AcadVersion::R13 || self.classes.is_empty() {
            return Ok(());
        }

        writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
        writer.write_code_pair(&CodePair::new_str(2, "CLASSES"))?;
        for class in &self.classes {
            class.write(version, writer)?;
        }
        writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
        Ok(())
    }
    fn write_tables<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
        writer.write_code_pair(&CodePair::new_str(2, "TABLES"))?;
        tables::write_tables(self, version, write_handles, writer)?;
        writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
        Ok(())
    }
    fn write_blocks<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        if self.blocks.is_empty() {
            return Ok(());
        }

        writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
        writer.write_code_pair(&CodePair::new_str(2, "BLOCKS"))?;
        for block in &self.blocks {
            block.write(version, write_handles, writer, handle_tracker)?;
        }
        writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
        Ok(())
    }
    fn write_entities<T>(
        &self,
        version: AcadVersion,
        write_handles: bool,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
        writer.write_code_pair(&CodePair::new_str(2, "ENTITIES"))?;
        for entity in &self.__entities {
            entity.write(version, write_handles, writer, handle_tracker)?;
        }
        writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
        Ok(())
    }
    fn write_objects<T>(
        &self,
        version: AcadVersion,
        writer: &mut CodePairWriter<T>,
        handle_tracker: &mut HandleTracker,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        if version < AcadVersion::R13 {
            return Ok(());
        }

        writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
        writer.write_code_pair(&CodePair::new_str(2, "OBJECTS"))?;
        for object in &self.__objects {
            object.write(version, writer, handle_tracker)?;
        }
        writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
        Ok(())
    }
    fn write_thumbnail<T>(&self, version: AcadVersion, writer: &mut CodePairWriter<T>) -> DxfResult<()>
    where
        T: Write,
    {
        if version >= AcadVersion::R2000 {
            if let Some(ref image) = self.thumbnail {
                writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
                writer.write_code_pair(&CodePair::new_str(2, "THUMBNAILIMAGE"))?;
                thumbnail::write_thumbnail(image, writer)?;
                writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
            }
        }
        Ok(())
    }
    fn read_sections<T>(drawing: &mut Drawing, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        loop {
            match iter.next() {
                Some(Ok(pair @ CodePair { code: 0, .. })) => match &*pair.assert_string()? {
                    "EOF" => {
                        iter.put_back(Ok(pair));
                        break;
                    }
                    "SECTION" => match iter.next() {
                        Some(Ok(CodePair {
                            code: 2,
                            value: CodePairValue::Str(s),
                            ..
                        })) => {
                            match &*s {
                                "HEADER" => {
                                    drawing.header = Header::read(iter)?;
                                    if drawing.header.version >= AcadVersion::R2007 {
                                        iter.read_as_utf8();
                                    } else if let Some(encoding) =
                                        encoding_from_code_page(&drawing.header.drawing_code_page)
                                    {
                                        iter.set_encoding(encoding);
                                    }
                                }
                                "CLASSES" => Class::read_classes(drawing, iter)?,
                                "TABLES" => {
                                    drawing.read_section_item(iter, "TABLE", tables::read_specific_table)?
                                }
                                "BLOCKS" => {
                                    drawing.read_section_item(iter, "BLOCK", Block::read_block)?
                                }
                                "ENTITIES" => drawing.read_entities(iter)?,
                                "OBJECTS" => drawing.read_objects(iter)?,
                                "THUMBNAILIMAGE" => {
                                    drawing.thumbnail = thumbnail::read_thumbnail(iter)?;
                                }
                                _ => Drawing::swallow_section(iter)?,
                            }

                            match iter.next() {
                                Some(Ok(CodePair {
                                    code: 0,
                                    value: CodePairValue::Str(ref s),
                                    ..
                                })) if s == "ENDSEC" => (),
                                Some(Ok(pair)) => {
                                    return Err(DxfError::UnexpectedCodePair(
                                        pair,
                                        String::from("expected 0/ENDSEC"),
                                    ))
                                }
                                Some(Err(e)) => return Err(e),
                                None => return Err(DxfError::UnexpectedEndOfInput),
                            }
                        }
                        Some(Ok(pair)) => {
                            return Err(DxfError::UnexpectedCodePair(
                                pair,
                                String::from("expected 2/<section-name>"),
                            ))
                        }
                        Some(Err(e)) => return Err(e),
                        None => return Err(DxfError::UnexpectedEndOfInput),
                    },
                    _ => {
                        return Err(DxfError::UnexpectedCodePair(
                            pair,
                            String::from("expected 0/SECTION"),
                        ))
                    }
                },
                Some(Ok(pair)) => {
                    return Err(DxfError::UnexpectedCodePair(
                        pair,
                        String::from("expected 0/SECTION or 0/EOF"),
                    ))
                }
                Some(Err(e)) => return Err(e),
                None => break, // ideally this would have been 0/EOF
            }
        }

        Ok(())
    }
    fn swallow_section<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        loop {
            match iter.next() {
                Some(Ok(pair)) => {
                    if pair.code == 0 && pair.assert_string()? == "ENDSEC" {
                        iter.put_back(Ok(pair));
                        break;
                    }
                }
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        Ok(())
    }
    fn read_section_item<T, F>(
        &mut self,
        iter: &mut CodePairBuffer<T>,
        item_type: &str,
        callback: F,
    ) -> DxfResult<()>
    where
        T: Read,
        F: Fn(&mut Drawing, &mut CodePairBuffer<T>) -> DxfResult<()>,
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
                            val if val == item_type => callback(self, iter)?,
                            _ => {
                                return Err(DxfError::UnexpectedCodePair(pair, String::new()));
                            }
                        }
                    } else {
                        return Err(DxfError::UnexpectedCodePair(pair, String::new()));
                    }
                }
                Some(Err(e)) => return Err(e),
                None => return Err(DxfError::UnexpectedEndOfInput),
            }
        }

        Ok(())
    }
    fn read_entities<T>(&mut self, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        let mut entities = vec![];
        read_entities_into_vec(iter, &mut entities)?;
        for entity in entities {
            if entity.common.handle.is_empty() {
                self.add_entity(entity);
            } else {
                self.add_entity_no_handle_set(entity);
            }
        }
        Ok(())
    }
    fn read_objects<T>(&mut self, iter: &mut CodePairBuffer<T>) -> DxfResult<()>
    where
        T: Read,
    {
        while let Some(object) = Object::read(iter)? {
            if object.common.handle.is_empty() {
                self.add_object(object);
            } else {
                self.add_object_no_handle_set(object);
            }
        }

        Ok(())
    }
}

fn encoding_from_code_page(name: &str) -> Option<&'static Encoding> {
    match name.to_uppercase().as_str() {
        "ANSI_1250" => Some(encoding_rs::WINDOWS_1250),
        "ANSI_1251" => Some(encoding_rs::WINDOWS_1251),
        "ANSI_1252" => Some(encoding_rs::WINDOWS_1252),
        "ANSI_1253" => Some(encoding_rs::WINDOWS_1253),
        "ANSI_1254" => Some(encoding_rs::WINDOWS_1254),
        "ANSI_1255" => Some(encoding_rs::WINDOWS_1255),
        "ANSI_1256" => Some(encoding_rs::WINDOWS_1256),
        "ANSI_1257" => Some(encoding_rs::WINDOWS_1257),
        "ANSI_1258" => Some(encoding_rs::WINDOWS_1258),
        "ANSI_932" | "DOS932" => Some(encoding_rs::SHIFT_JIS),
        "ANSI_936" => Some(encoding_rs::GBK),
        "ANSI_949" => Some(encoding_rs::EUC_KR),
        "ANSI_950" => Some(encoding_rs::BIG5),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::tests::*;

    #[test]
    fn default_layers_are_present() {
        let drawing = Drawing::new();
        let layers = drawing.layers().collect::<Vec<_>>();
        assert_eq!(1, layers.len());
        assert_eq!("0", layers[0].name);
    }

    #[test]
    fn default_dim_styles_are_present() {
        let drawing = Drawing::new();
        let dim_styles = drawing.dim_styles().collect::<Vec<_>>();
        assert_eq!(2, dim_styles.len());
        assert_eq!("ANNOTATIVE", dim_styles[0].name);
        assert_eq!("STANDARD", dim_styles[1].name);
    }

    #[test]
    fn default_line_types_are_present() {
        let drawing = Drawing::new();
        let line_types = drawing.line_types().collect::<Vec<_>>();
        assert_eq!(3, line_types.len());
        assert_eq!("BYBLOCK", line_types[0].name);
        assert_eq!("BYLAYER", line_types[1].name);
        assert_eq!("CONTINUOUS", line_types[2].name);
    }

    #[test]
    fn default_text_styles_are_present() {
        let drawing = Drawing::new();
        let styles = drawing.styles().collect::<Vec<_>>();
        assert_eq!(2, styles.len());
        assert_eq!("ANNOTATIVE", styles[0].name);
        assert_eq!("STANDARD", styles[1].name);
    }

    #[test]
    fn entity_handle_is_set_on_add() {
        let mut drawing = Drawing::new();
        let entity = Entity::new(EntityType::Line(Default::default()));
        assert!(entity.common.handle.is_empty());

        let entity = drawing.add_entity(entity);
        assert!(!entity.common.handle.is_empty());
    }

    #[test]
    fn object_handle_is_set_on_add() {
        let mut drawing = Drawing::new();
        let object = Object::new(ObjectType::PlaceHolder(Default::default()));
        assert!(object.common.handle.is_empty());

        let object = drawing.add_object(object);
        assert!(!object.common.handle.is_empty());
    }

    #[test]
    fn entity_handle_is_set_during_read_if_not_specified() {
        let drawing = parse_drawing(
            &[
                "  0", "SECTION", "  2", "ENTITIES", "  0", "LINE", "  0", "ENDSEC", "  0", "EOF",
            ]
            .join("\r\n"),
        );
        let line = drawing.entities().next().unwrap();
        assert!(!line.common.handle.is_empty());
    }

    #[test]
    fn entity_handle_is_honored_during_read_if_specified() {
        let drawing = parse_drawing(
            &[
                "  0", "SECTION", "  2", "ENTITIES", "  0", "LINE", "  5", "3333", "  0", "ENDSEC",
                "  0", "EOF",
            ]
            .join("\r\n"),
        );
        let line = drawing.entities().next().unwrap();
        assert_eq!(Handle(0x3333), line.common.handle);
    }

    #[test]
    fn next_available_handle_is_reset_on_clear() {
        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::Line(Default::default())));
        assert_ne!(Handle(1), drawing.header.next_available_handle);

        drawing.clear();
        assert_eq!(0, drawing.entities().count());
        assert_eq!(Handle(1), drawing.header.next_available_handle);
    }

    #[test]
    fn mline_style_is_added_with_entity_if_not_already_present() {
        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::MLine(MLine {
            style_name: String::from("some-mline-style"),
            ..Default::default()
        })));
        let mline_styles = drawing
            .objects()
            .filter(|o| match o.specific {
                ObjectType::MLineStyle(ref style) => style.style_name == "some-mline-style",
                _ => false,
            })
            .count();
        assert_eq!(1, mline_styles);
    }

    #[test]
    fn dim_style_is_added_with_entity_if_not_already_present() {
        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::RadialDimension(RadialDimension {
            dimension_base: DimensionBase {
                dimension_style_name: String::from("some-dim-style"),
                ..Default::default()
            },
            ..Default::default()
        })));
        assert_eq!(
            1,
            drawing
                .dim_styles()
                .filter(|d| d.name == "some-dim-style")
                .count()
        );
    }

    #[test]
    fn layer_is_added_for_new_entity() {
        let mut drawing = Drawing::new();
        let mut entity = Entity::new(EntityType::Line(Default::default()));
        entity.common.layer = String::from("fresh-layer");
        drawing.add_entity(entity);
        assert!(drawing.layers().any(|l| l.name == "fresh-layer"));
    }

    #[test]
    fn item_by_handle_finds_entities() {
        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::Line(Default::default())));
        let handle = drawing.entities().next().unwrap().common.handle;
        match drawing.item_by_handle(handle) {
            Some(DrawingItem::Entity(_)) => (),
            _ => panic!("expected the entity"),
        }
    }

    #[test]
    fn sections_are_written_in_canonical_order() {
        let mut drawing = Drawing::new();
        drawing.add_entity(Entity::new(EntityType::Line(Default::default())));
        drawing.add_object(Object::new(ObjectType::PlaceHolder(Default::default())));
        drawing.blocks.push(Block::default());
        let contents = to_test_string(&drawing);
        let order = ["HEADER", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"]
            .iter()
            .map(|n| contents.find(&format!("  2\r\n{}\r\n", n)).unwrap())
            .collect::<Vec<_>>();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, order);
    }

    #[test]
    fn written_files_end_with_eof() {
        let drawing = Drawing::new();
        let contents = to_test_string(&drawing);
        assert!(contents.ends_with("  0\r\nEOF\r\n"));
    }

    #[test]
    fn written_files_begin_with_the_header_section() {
        let drawing = Drawing::new();
        let contents = to_test_string(&drawing);
        assert!(contents.starts_with("  0\r\nSECTION\r\n  2\r\nHEADER\r\n"));
    }

    #[test]
    fn unknown_sections_are_skipped() {
        let drawing = parse_drawing(
            &[
                "0",
                "SECTION",
                "2",
                "NOT_A_REAL_SECTION",
                "1",
                "garbage value",
                "0",
                "ENDSEC",
                "0",
                "SECTION",
                "2",
                "ENTITIES",
                "0",
                "LINE",
                "0",
                "ENDSEC",
                "0",
                "EOF",
            ]
            .join("\n"),
        );
        assert_eq!(1, drawing.entities().count());
    }

    #[test]
    fn missing_eof_is_tolerated() {
        let drawing = parse_drawing(
            &["0", "SECTION", "2", "ENTITIES", "0", "LINE", "0", "ENDSEC"].join("\n"),
        );
        assert_eq!(1, drawing.entities().count());
    }

    #[test]
    fn empty_file_is_tolerated() {
        let _drawing = parse_drawing("");
        let _drawing = parse_drawing("0\nEOF\n");
        let _drawing = parse_drawing("0\nEOF");
    }
}
