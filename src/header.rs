use std::io::{Read, Write};

use chrono::{DateTime, Duration, Local, Utc};
use enum_primitive::FromPrimitive;
use uuid::Uuid;

use crate::code_pair_buffer::CodePairBuffer;
use crate::code_pair_writer::CodePairWriter;
use crate::color::Color;
use crate::enums::*;
use crate::error::{DxfError, DxfResult};
use crate::handle::Handle;
use crate::helpers::*;
use crate::line_weight::LineWeight;
use crate::{CodePair, Point, Vector};

/// A header variable the codec has no schema for, kept verbatim so it
/// survives a round-trip at the version that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct RetainedHeaderVariable {
    pub name: String,
    pub pairs: Vec<CodePair>,
}

/// The drawing's system variables, read from and written to the HEADER
/// section.
///
/// Every field has a fixed group code, a valid version range, and a
/// default; emission is a pure function of the field values and the
/// target version.  Unknown variables found in a file are carried in
/// `retained_variables`.
#[derive(Clone, Debug)]
pub struct Header {
    /// `$ACADVER`: the drawing database version.
    pub version: AcadVersion,
    /// `$ACADMAINTVER`: maintenance release number.
    pub maintenance_version: i16,
    /// `$DWGCODEPAGE`: code page used for non-Unicode text.
    pub drawing_code_page: String,
    /// `$LASTSAVEDBY`: name of the user who last saved the file.
    pub last_saved_by: String,
    /// `$INSBASE`: insertion base point of the drawing.
    pub insertion_base: Point,
    /// `$EXTMIN` / `$EXTMAX`: drawing extents.
    pub minimum_drawing_extents: Point,
    pub maximum_drawing_extents: Point,
    /// `$LIMMIN` / `$LIMMAX`: drawing limits (2D).
    pub minimum_drawing_limits: Point,
    pub maximum_drawing_limits: Point,
    /// `$ORTHOMODE`
    pub draw_orthogonal_lines: bool,
    /// `$REGENMODE`
    pub use_regen_mode: bool,
    /// `$FILLMODE`
    pub fill_mode_on: bool,
    /// `$QTEXTMODE`
    pub use_quick_text_mode: bool,
    /// `$MIRRTEXT`
    pub mirror_text: bool,
    /// `$DRAGMODE` (dropped at R2000 and later)
    pub drag_mode: i16,
    /// `$LTSCALE`
    pub line_type_scale: f64,
    /// `$OSMODE` (dropped at R2000 and later)
    pub object_snap_flags: i16,
    /// `$ATTMODE`
    pub attribute_visibility: AttributeVisibility,
    /// `$TEXTSIZE`
    pub default_text_height: f64,
    /// `$TRACEWID`
    pub trace_width: f64,
    /// `$TEXTSTYLE`
    pub text_style: String,
    /// `$CLAYER`
    pub current_layer: String,
    /// `$CELTYPE`
    pub current_entity_line_type: String,
    /// `$CECOLOR`
    pub current_entity_color: Color,
    /// `$CELTSCALE`
    pub current_entity_line_type_scale: f64,
    /// `$DISPSILH`
    pub display_silhouette_curves_in_wireframe_mode: bool,
    /// `$DIMSTYLE`
    pub dimension_style_name: String,
    /// `$DIMASO` (dropped at R14 and later)
    pub create_associative_dimensioning: bool,
    /// `$DIMSHO` (dropped at R14 and later)
    pub recompute_dimensions_while_dragging: bool,
    /// `$DIMSCALE`
    pub dimensioning_scale_factor: f64,
    /// `$DIMASZ`
    pub dimensioning_arrow_size: f64,
    /// `$DIMEXO`
    pub dimension_extension_line_offset: f64,
    /// `$DIMDLI`
    pub dimension_line_increment: f64,
    /// `$DIMRND`
    pub dimension_distance_rounding_value: f64,
    /// `$DIMDLE`
    pub dimension_line_extension: f64,
    /// `$DIMEXE`
    pub dimension_extension_line_extension: f64,
    /// `$DIMTP` / `$DIMTM`
    pub dimension_plus_tolerance: f64,
    pub dimension_minus_tolerance: f64,
    /// `$DIMTXT`
    pub dimensioning_text_height: f64,
    /// `$DIMCEN`
    pub center_mark_size: f64,
    /// `$DIMTSZ`
    pub dimensioning_tick_size: f64,
    /// `$DIMTOL`
    pub generate_dimension_tolerances: bool,
    /// `$DIMLIM`
    pub generate_dimension_limits: bool,
    /// `$DIMTIH`
    pub dimension_text_inside_horizontal: bool,
    /// `$DIMTOH`
    pub dimension_text_outside_horizontal: bool,
    /// `$DIMSE1` / `$DIMSE2`
    pub suppress_first_dimension_extension_line: bool,
    pub suppress_second_dimension_extension_line: bool,
    /// `$DIMTAD`
    pub text_above_dimension_line: i16,
    /// `$DIMZIN`
    pub dimension_unit_zero_suppression: i16,
    /// `$DIMBLK` / `$DIMBLK1` / `$DIMBLK2`
    pub arrow_block_name: String,
    pub first_arrow_block_name: String,
    pub second_arrow_block_name: String,
    /// `$DIMPOST` / `$DIMAPOST`
    pub dimensioning_suffix: String,
    pub alternate_dimensioning_suffix: String,
    /// `$DIMLFAC`
    pub dimension_linear_measurement_scale_factor: f64,
    /// `$DIMTOFL`
    pub force_dimension_line_inside_extension_lines: bool,
    /// `$DIMTVP`
    pub dimension_vertical_text_position: f64,
    /// `$DIMTIX`
    pub force_dimension_text_inside_extensions: bool,
    /// `$DIMSOXD`
    pub suppress_outside_extension_dimension_lines: bool,
    /// `$DIMSAH`
    pub use_separate_arrow_blocks_for_dimensions: bool,
    /// `$DIMGAP`
    pub dimension_line_gap: f64,
    /// `$DIMCLRD` / `$DIMCLRE` / `$DIMCLRT`
    pub dimension_line_color: Color,
    pub dimension_extension_line_color: Color,
    pub dimension_text_color: Color,
    /// `$DIMTFAC`
    pub dimension_tolerance_display_scale_factor: f64,
    /// `$DIMTXSTY`
    pub dimension_text_style: String,
    /// `$DIMDEC`
    pub dimension_unit_tolerance_decimal_places: i16,
    /// `$DIMASSOC`
    pub dimension_object_associativity: i16,
    /// `$LUNITS` / `$LUPREC`
    pub unit_format: UnitFormat,
    pub unit_precision: i16,
    /// `$SKETCHINC`
    pub sketch_record_increment: f64,
    /// `$FILLETRAD`
    pub fillet_radius: f64,
    /// `$AUNITS` / `$AUPREC`
    pub angle_unit_format: AngleFormat,
    pub angle_unit_precision: i16,
    /// `$MENU`
    pub file_name: String,
    /// `$ELEVATION` / `$PELEVATION`
    pub elevation: f64,
    pub paperspace_elevation: f64,
    /// `$THICKNESS`
    pub thickness: f64,
    /// `$LIMCHECK`
    pub use_limits_checking: bool,
    /// `$BLIPMODE` (dropped at R2000 and later)
    pub blip_mode: bool,
    /// `$CHAMFERA` / `$CHAMFERB` / `$CHAMFERC` / `$CHAMFERD`
    pub first_chamfer_distance: f64,
    pub second_chamfer_distance: f64,
    pub chamfer_length: f64,
    pub chamfer_angle: f64,
    /// `$SKPOLY`
    pub polyline_sketch_mode: bool,
    /// `$TDCREATE` / `$TDUCREATE`
    pub creation_date: DateTime<Local>,
    pub creation_date_universal: DateTime<Utc>,
    /// `$TDUPDATE` / `$TDUUPDATE`
    pub update_date: DateTime<Local>,
    pub update_date_universal: DateTime<Utc>,
    /// `$TDINDWG` / `$TDUSRTIMER`
    pub time_in_drawing: Duration,
    pub user_elapsed_timer: Duration,
    /// `$USRTIMER`
    pub user_timer_on: bool,
    /// `$ANGBASE`
    pub angle_zero_direction: f64,
    /// `$ANGDIR`
    pub angle_direction: AngleDirection,
    /// `$PDMODE` / `$PDSIZE`
    pub point_display_mode: i16,
    pub point_display_size: f64,
    /// `$PLINEWID`
    pub default_polyline_width: f64,
    /// `$SPLFRAME`
    pub display_spline_polygon_control: bool,
    /// `$SPLINETYPE` / `$SPLINESEGS`
    pub pedit_spline_curve_type: i16,
    pub line_segments_per_spline_patch: i16,
    /// `$HANDLING` (dropped at R13 and later; handles are implied there)
    pub handles_enabled: bool,
    /// `$HANDSEED`: the next handle a new record will receive.
    pub next_available_handle: Handle,
    /// `$SURFTAB1` / `$SURFTAB2`
    pub mesh_tabulations_in_first_direction: i16,
    pub mesh_tabulations_in_second_direction: i16,
    /// `$SURFTYPE` / `$SURFU` / `$SURFV`
    pub pedit_smooth_surface_type: i16,
    pub pedit_smooth_m_density: i16,
    pub pedit_smooth_n_density: i16,
    /// `$UCSBASE` (R2000+)
    pub ucs_base: String,
    /// `$UCSNAME` / `$UCSORG` / `$UCSXDIR` / `$UCSYDIR`
    pub ucs_name: String,
    pub ucs_origin: Point,
    pub ucs_x_axis: Vector,
    pub ucs_y_axis: Vector,
    /// `$PUCSBASE` (R2000+)
    pub paperspace_ucs_base: String,
    /// `$PUCSNAME` / `$PUCSORG` / `$PUCSXDIR` / `$PUCSYDIR` (R13+)
    pub paperspace_ucs_name: String,
    pub paperspace_ucs_origin: Point,
    pub paperspace_ucs_x_axis: Vector,
    pub paperspace_ucs_y_axis: Vector,
    /// `$PINSBASE` (R14+)
    pub paperspace_insertion_base: Point,
    /// `$PLIMCHECK` (R13+)
    pub limit_checking_in_paperspace: bool,
    /// `$PEXTMIN` / `$PEXTMAX` (R13+)
    pub paperspace_minimum_drawing_extents: Point,
    pub paperspace_maximum_drawing_extents: Point,
    /// `$PLIMMIN` / `$PLIMMAX` (R13+, 2D)
    pub paperspace_minimum_drawing_limits: Point,
    pub paperspace_maximum_drawing_limits: Point,
    /// `$UNITMODE` (R11+)
    pub display_fractions_in_input: bool,
    /// `$VISRETAIN` (R12+)
    pub retain_deleted_entities: bool,
    /// `$PLINEGEN` (R11+)
    pub is_polyline_continuous_around_vertices: bool,
    /// `$PSLTSCALE` (R11+)
    pub scale_line_types_in_paperspace: bool,
    /// `$TREEDEPTH` (R14+)
    pub spatial_index_max_depth: i16,
    /// `$CMLSTYLE` / `$CMLJUST` / `$CMLSCALE` (R13+)
    pub current_multiline_style: String,
    pub current_multiline_justification: MLineJustification,
    pub current_multiline_scale: f64,
    /// `$PROXYGRAPHICS` (R14+)
    pub save_proxy_graphics: bool,
    /// `$MEASUREMENT` (R14+)
    pub drawing_units: DrawingUnits,
    /// `$CELWEIGHT` (R2000+)
    pub new_object_line_weight: LineWeight,
    /// `$ENDCAPS` / `$JOINSTYLE` (R2000+)
    pub end_cap_setting: i16,
    pub lineweight_joint_setting: i16,
    /// `$LWDISPLAY` (R2000+)
    pub display_line_weight_in_model_space: bool,
    /// `$INSUNITS` (R2000+)
    pub default_drawing_units: Units,
    /// `$HYPERLINKBASE` / `$STYLESHEET` (R2000+)
    pub hyperlink_base: String,
    pub stylesheet: String,
    /// `$XEDIT` (R2000+)
    pub can_use_in_place_reference_editing: bool,
    /// `$CEPSNTYPE` (R2000+)
    pub new_object_plot_style_type: i16,
    /// `$PSTYLEMODE` (R2000+)
    pub uses_color_dependent_plot_style_tables: bool,
    /// `$EXTNAMES` (R2000+)
    pub use_acad2000_symbol_table_naming: bool,
    /// `$FINGERPRINTGUID` / `$VERSIONGUID` (R2000+)
    pub fingerprint_guid: Uuid,
    pub version_guid: Uuid,
    /// `$SORTENTS` / `$INDEXCTL` (R2004+)
    pub object_sorting_methods_flags: i16,
    pub layer_and_spatial_index_save_mode: i16,
    /// `$HIDETEXT` (R2004+)
    pub hide_text_objects_when_hidding_is_on: i16,
    /// `$XCLIPFRAME` (R2004+)
    pub is_xref_clipping_boundary_visible: i16,
    /// `$HALOGAP` (R2004+)
    pub halo_gap_percent: i16,
    /// `$OBSCOLOR` / `$OBSLTYPE` (R2004+)
    pub obscured_line_color: i16,
    pub obscured_line_type_style: i16,
    /// `$INTERSECTIONDISPLAY` / `$INTERSECTIONCOLOR` (R2004+)
    pub display_intersection_polylines: i16,
    pub intersection_polyline_color: i16,
    /// `$MAXACTVP`
    pub maximum_active_viewports: i16,
    /// `$SHADEDGE` / `$SHADEDIF` (R11+)
    pub edge_shading: i16,
    pub percent_ambient_to_diffuse: i16,
    /// `$TILEMODE` (R11+)
    pub previous_release_tile_compatibility: bool,
    /// `$USERI1`–`$USERI5`
    pub user_int1: i16,
    pub user_int2: i16,
    pub user_int3: i16,
    pub user_int4: i16,
    pub user_int5: i16,
    /// `$USERR1`–`$USERR5`
    pub user_real1: f64,
    pub user_real2: f64,
    pub user_real3: f64,
    pub user_real4: f64,
    pub user_real5: f64,
    /// `$WORLDVIEW` (R11+)
    pub set_ucs_to_wcs_in_dview_or_vpoint: bool,
    /// Variables read from a file that the codec has no schema for.
    pub retained_variables: Vec<RetainedHeaderVariable>,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            version: AcadVersion::R2013,
            maintenance_version: 0,
            drawing_code_page: String::from("ANSI_1252"),
            last_saved_by: String::new(),
            insertion_base: Point::origin(),
            minimum_drawing_extents: Point::origin(),
            maximum_drawing_extents: Point::origin(),
            minimum_drawing_limits: Point::origin(),
            maximum_drawing_limits: Point::new(12.0, 9.0, 0.0),
            draw_orthogonal_lines: false,
            use_regen_mode: true,
            fill_mode_on: true,
            use_quick_text_mode: false,
            mirror_text: false,
            drag_mode: 2,
            line_type_scale: 1.0,
            object_snap_flags: 37,
            attribute_visibility: AttributeVisibility::Normal,
            default_text_height: 0.2,
            trace_width: 0.05,
            text_style: String::from("STANDARD"),
            current_layer: String::from("0"),
            current_entity_line_type: String::from("BYLAYER"),
            current_entity_color: Color::by_layer(),
            current_entity_line_type_scale: 1.0,
            display_silhouette_curves_in_wireframe_mode: false,
            dimension_style_name: String::from("STANDARD"),
            create_associative_dimensioning: true,
            recompute_dimensions_while_dragging: true,
            dimensioning_scale_factor: 1.0,
            dimensioning_arrow_size: 0.18,
            dimension_extension_line_offset: 0.0625,
            dimension_line_increment: 0.38,
            dimension_distance_rounding_value: 0.0,
            dimension_line_extension: 0.0,
            dimension_extension_line_extension: 0.18,
            dimension_plus_tolerance: 0.0,
            dimension_minus_tolerance: 0.0,
            dimensioning_text_height: 0.18,
            center_mark_size: 0.09,
            dimensioning_tick_size: 0.0,
            generate_dimension_tolerances: false,
            generate_dimension_limits: false,
            dimension_text_inside_horizontal: true,
            dimension_text_outside_horizontal: true,
            suppress_first_dimension_extension_line: false,
            suppress_second_dimension_extension_line: false,
            text_above_dimension_line: 0,
            dimension_unit_zero_suppression: 0,
            arrow_block_name: String::new(),
            first_arrow_block_name: String::new(),
            second_arrow_block_name: String::new(),
            dimensioning_suffix: String::new(),
            alternate_dimensioning_suffix: String::new(),
            dimension_linear_measurement_scale_factor: 1.0,
            force_dimension_line_inside_extension_lines: false,
            dimension_vertical_text_position: 0.0,
            force_dimension_text_inside_extensions: false,
            suppress_outside_extension_dimension_lines: false,
            use_separate_arrow_blocks_for_dimensions: false,
            dimension_line_gap: 0.09,
            dimension_line_color: Color::by_block(),
            dimension_extension_line_color: Color::by_block(),
            dimension_text_color: Color::by_block(),
            dimension_tolerance_display_scale_factor: 1.0,
            dimension_text_style: String::from("STANDARD"),
            dimension_unit_tolerance_decimal_places: 4,
            dimension_object_associativity: 2,
            unit_format: UnitFormat::Decimal,
            unit_precision: 4,
            sketch_record_increment: 0.1,
            fillet_radius: 0.0,
            angle_unit_format: AngleFormat::DecimalDegrees,
            angle_unit_precision: 0,
            file_name: String::from("."),
            elevation: 0.0,
            paperspace_elevation: 0.0,
            thickness: 0.0,
            use_limits_checking: false,
            blip_mode: false,
            first_chamfer_distance: 0.0,
            second_chamfer_distance: 0.0,
            chamfer_length: 0.0,
            chamfer_angle: 0.0,
            polyline_sketch_mode: false,
            creation_date: as_datetime_local(0.0),
            creation_date_universal: as_datetime_utc(0.0),
            update_date: as_datetime_local(0.0),
            update_date_universal: as_datetime_utc(0.0),
            time_in_drawing: Duration::zero(),
            user_elapsed_timer: Duration::zero(),
            user_timer_on: true,
            angle_zero_direction: 0.0,
            angle_direction: AngleDirection::CounterClockwise,
            point_display_mode: 0,
            point_display_size: 0.0,
            default_polyline_width: 0.0,
            display_spline_polygon_control: false,
            pedit_spline_curve_type: 6,
            line_segments_per_spline_patch: 8,
            handles_enabled: true,
            next_available_handle: Handle(1),
            mesh_tabulations_in_first_direction: 6,
            mesh_tabulations_in_second_direction: 6,
            pedit_smooth_surface_type: 6,
            pedit_smooth_m_density: 6,
            pedit_smooth_n_density: 6,
            ucs_base: String::new(),
            ucs_name: String::new(),
            ucs_origin: Point::origin(),
            ucs_x_axis: Vector::x_axis(),
            ucs_y_axis: Vector::y_axis(),
            paperspace_ucs_base: String::new(),
            paperspace_ucs_name: String::new(),
            paperspace_ucs_origin: Point::origin(),
            paperspace_ucs_x_axis: Vector::x_axis(),
            paperspace_ucs_y_axis: Vector::y_axis(),
            paperspace_insertion_base: Point::origin(),
            limit_checking_in_paperspace: false,
            paperspace_minimum_drawing_extents: Point::origin(),
            paperspace_maximum_drawing_extents: Point::origin(),
            paperspace_minimum_drawing_limits: Point::origin(),
            paperspace_maximum_drawing_limits: Point::new(12.0, 9.0, 0.0),
            display_fractions_in_input: false,
            retain_deleted_entities: true,
            is_polyline_continuous_around_vertices: false,
            scale_line_types_in_paperspace: true,
            spatial_index_max_depth: 3020,
            current_multiline_style: String::from("STANDARD"),
            current_multiline_justification: MLineJustification::Top,
            current_multiline_scale: 1.0,
            save_proxy_graphics: true,
            drawing_units: DrawingUnits::English,
            new_object_line_weight: LineWeight::by_layer(),
            end_cap_setting: 0,
            lineweight_joint_setting: 0,
            display_line_weight_in_model_space: false,
            default_drawing_units: Units::Unitless,
            hyperlink_base: String::new(),
            stylesheet: String::new(),
            can_use_in_place_reference_editing: true,
            new_object_plot_style_type: 0,
            uses_color_dependent_plot_style_tables: true,
            use_acad2000_symbol_table_naming: true,
            fingerprint_guid: Uuid::nil(),
            version_guid: Uuid::nil(),
            object_sorting_methods_flags: 127,
            layer_and_spatial_index_save_mode: 0,
            hide_text_objects_when_hidding_is_on: 0,
            is_xref_clipping_boundary_visible: 0,
            halo_gap_percent: 0,
            obscured_line_color: 257,
            obscured_line_type_style: 0,
            display_intersection_polylines: 0,
            intersection_polyline_color: 257,
            maximum_active_viewports: 64,
            edge_shading: 3,
            percent_ambient_to_diffuse: 70,
            previous_release_tile_compatibility: true,
            user_int1: 0,
            user_int2: 0,
            user_int3: 0,
            user_int4: 0,
            user_int5: 0,
            user_real1: 0.0,
            user_real2: 0.0,
            user_real3: 0.0,
            user_real4: 0.0,
            user_real5: 0.0,
            set_ucs_to_wcs_in_dview_or_vpoint: true,
            retained_variables: vec![],
        }
    }
}

impl Header {
    /// Ensure all values are valid.
    pub fn normalize(&mut self) {
        default_if_empty(&mut self.text_style, "STANDARD");
        default_if_empty(&mut self.current_layer, "0");
        default_if_empty(&mut self.current_entity_line_type, "BYLAYER");
        default_if_empty(&mut self.dimension_style_name, "STANDARD");
        default_if_empty(&mut self.dimension_text_style, "STANDARD");
        default_if_empty(&mut self.current_multiline_style, "STANDARD");
        if self.next_available_handle.is_empty() {
            self.next_available_handle = Handle(1);
        }
    }
    pub(crate) fn read<T>(iter: &mut CodePairBuffer<T>) -> DxfResult<Header>
    where
        T: Read,
    {
        let mut header = Header::default();
        loop {
            match iter.next() {
                Some(Ok(pair)) => match pair.code {
                    0 => {
                        iter.put_back(Ok(pair));
                        break;
                    }
                    9 => {
                        let name = pair.assert_string()?;
                        let mut pairs = vec![];
                        loop {
                            match iter.next() {
                                Some(Ok(pair)) => {
                                    if pair.code == 0 || pair.code == 9 {
                                        iter.put_back(Ok(pair));
                                        break;
                                    }
                                    pairs.push(pair);
                                }
                                Some(Err(e)) => return Err(e),
                                None => break,
                            }
                        }
                        header.apply_variable(&name, pairs)?;
                    }
                    _ => {
                        return Err(DxfError::UnexpectedCodePair(
                            pair,
                            String::from("expected 9/$VARIABLE or 0/ENDSEC"),
                        ))
                    }
                },
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        Ok(header)
    }
    fn apply_variable(&mut self, name: &str, pairs: Vec<CodePair>) -> DxfResult<()> {
        let mut handled = true;
        for pair in &pairs {
            if !self.set_header_value(name, pair)? {
                handled = false;
                break;
            }
        }
        if !handled {
            self.retained_variables.push(RetainedHeaderVariable {
                name: name.to_string(),
                pairs,
            });
        }

        Ok(())
    }
    /// Applies a single pair to the named variable.  Returns `Ok(false)`
    /// when the variable is unknown so the caller can retain it verbatim.
    fn set_header_value(&mut self, name: &str, pair: &CodePair) -> DxfResult<bool> {
        match name {
            "$ACADVER" => {
                self.version = AcadVersion::from_version_string(&pair.assert_string()?)?
            }
            "$ACADMAINTVER" => self.maintenance_version = pair.assert_i16()?,
            "$DWGCODEPAGE" => self.drawing_code_page = pair.assert_string()?,
            "$LASTSAVEDBY" => self.last_saved_by = pair.assert_string()?,
            "$INSBASE" => self.insertion_base.set(pair)?,
            "$EXTMIN" => self.minimum_drawing_extents.set(pair)?,
            "$EXTMAX" => self.maximum_drawing_extents.set(pair)?,
            "$LIMMIN" => self.minimum_drawing_limits.set(pair)?,
            "$LIMMAX" => self.maximum_drawing_limits.set(pair)?,
            "$ORTHOMODE" => self.draw_orthogonal_lines = pair.assert_bool()?,
            "$REGENMODE" => self.use_regen_mode = pair.assert_bool()?,
            "$FILLMODE" => self.fill_mode_on = pair.assert_bool()?,
            "$QTEXTMODE" => self.use_quick_text_mode = pair.assert_bool()?,
            "$MIRRTEXT" => self.mirror_text = pair.assert_bool()?,
            "$DRAGMODE" => self.drag_mode = pair.assert_i16()?,
            "$LTSCALE" => self.line_type_scale = pair.assert_f64()?,
            "$OSMODE" => self.object_snap_flags = pair.assert_i16()?,
            "$ATTMODE" => {
                self.attribute_visibility = enum_from_number!(
                    AttributeVisibility,
                    Normal,
                    from_i16,
                    pair.assert_i16()?
                )
            }
            "$TEXTSIZE" => self.default_text_height = pair.assert_f64()?,
            "$TRACEWID" => self.trace_width = pair.assert_f64()?,
            "$TEXTSTYLE" => self.text_style = pair.assert_string()?,
            "$CLAYER" => self.current_layer = pair.assert_string()?,
            "$CELTYPE" => self.current_entity_line_type = pair.assert_string()?,
            "$CECOLOR" => self.current_entity_color = Color::from_raw_value(pair.assert_i16()?),
            "$CELTSCALE" => self.current_entity_line_type_scale = pair.assert_f64()?,
            "$DISPSILH" => {
                self.display_silhouette_curves_in_wireframe_mode = pair.assert_bool()?
            }
            "$DIMSTYLE" => self.dimension_style_name = pair.assert_string()?,
            "$DIMASO" => self.create_associative_dimensioning = pair.assert_bool()?,
            "$DIMSHO" => self.recompute_dimensions_while_dragging = pair.assert_bool()?,
            "$DIMSCALE" => self.dimensioning_scale_factor = pair.assert_f64()?,
            "$DIMASZ" => self.dimensioning_arrow_size = pair.assert_f64()?,
            "$DIMEXO" => self.dimension_extension_line_offset = pair.assert_f64()?,
            "$DIMDLI" => self.dimension_line_increment = pair.assert_f64()?,
            "$DIMRND" => self.dimension_distance_rounding_value = pair.assert_f64()?,
            "$DIMDLE" => self.dimension_line_extension = pair.assert_f64()?,
            "$DIMEXE" => self.dimension_extension_line_extension = pair.assert_f64()?,
            "$DIMTP" => self.dimension_plus_tolerance = pair.assert_f64()?,
            "$DIMTM" => self.dimension_minus_tolerance = pair.assert_f64()?,
            "$DIMTXT" => self.dimensioning_text_height = pair.assert_f64()?,
            "$DIMCEN" => self.center_mark_size = pair.assert_f64()?,
            "$DIMTSZ" => self.dimensioning_tick_size = pair.assert_f64()?,
            "$DIMTOL" => self.generate_dimension_tolerances = pair.assert_bool()?,
            "$DIMLIM" => self.generate_dimension_limits = pair.assert_bool()?,
            "$DIMTIH" => self.dimension_text_inside_horizontal = pair.assert_bool()?,
            "$DIMTOH" => self.dimension_text_outside_horizontal = pair.assert_bool()?,
            "$DIMSE1" => self.suppress_first_dimension_extension_line = pair.assert_bool()?,
            "$DIMSE2" => self.suppress_second_dimension_extension_line = pair.assert_bool()?,
            "$DIMTAD" => self.text_above_dimension_line = pair.assert_i16()?,
            "$DIMZIN" => self.dimension_unit_zero_suppression = pair.assert_i16()?,
            "$DIMBLK" => self.arrow_block_name = pair.assert_string()?,
            "$DIMBLK1" => self.first_arrow_block_name = pair.assert_string()?,
            "$DIMBLK2" => self.second_arrow_block_name = pair.assert_string()?,
            "$DIMPOST" => self.dimensioning_suffix = pair.assert_string()?,
            "$DIMAPOST" => self.alternate_dimensioning_suffix = pair.assert_string()?,
            "$DIMLFAC" => {
                self.dimension_linear_measurement_scale_factor = pair.assert_f64()?
            }
            "$DIMTOFL" => {
                self.force_dimension_line_inside_extension_lines = pair.assert_bool()?
            }
            "$DIMTVP" => self.dimension_vertical_text_position = pair.assert_f64()?,
            "$DIMTIX" => self.force_dimension_text_inside_extensions = pair.assert_bool()?,
            "$DIMSOXD" => {
                self.suppress_outside_extension_dimension_lines = pair.assert_bool()?
            }
            "$DIMSAH" => self.use_separate_arrow_blocks_for_dimensions = pair.assert_bool()?,
            "$DIMGAP" => self.dimension_line_gap = pair.assert_f64()?,
            "$DIMCLRD" => self.dimension_line_color = Color::from_raw_value(pair.assert_i16()?),
            "$DIMCLRE" => {
                self.dimension_extension_line_color = Color::from_raw_value(pair.assert_i16()?)
            }
            "$DIMCLRT" => self.dimension_text_color = Color::from_raw_value(pair.assert_i16()?),
            "$DIMTFAC" => {
                self.dimension_tolerance_display_scale_factor = pair.assert_f64()?
            }
            "$DIMTXSTY" => self.dimension_text_style = pair.assert_string()?,
            "$DIMDEC" => self.dimension_unit_tolerance_decimal_places = pair.assert_i16()?,
            "$DIMASSOC" => self.dimension_object_associativity = pair.assert_i16()?,
            "$LUNITS" => {
                self.unit_format =
                    enum_from_number!(UnitFormat, Decimal, from_i16, pair.assert_i16()?)
            }
            "$LUPREC" => self.unit_precision = pair.assert_i16()?,
            "$SKETCHINC" => self.sketch_record_increment = pair.assert_f64()?,
            "$FILLETRAD" => self.fillet_radius = pair.assert_f64()?,
            "$AUNITS" => {
                self.angle_unit_format =
                    enum_from_number!(AngleFormat, DecimalDegrees, from_i16, pair.assert_i16()?)
            }
            "$AUPREC" => self.angle_unit_precision = pair.assert_i16()?,
            "$MENU" => self.file_name = pair.assert_string()?,
            "$ELEVATION" => self.elevation = pair.assert_f64()?,
            "$PELEVATION" => self.paperspace_elevation = pair.assert_f64()?,
            "$THICKNESS" => self.thickness = pair.assert_f64()?,
            "$LIMCHECK" => self.use_limits_checking = pair.assert_bool()?,
            "$BLIPMODE" => self.blip_mode = pair.assert_bool()?,
            "$CHAMFERA" => self.first_chamfer_distance = pair.assert_f64()?,
            "$CHAMFERB" => self.second_chamfer_distance = pair.assert_f64()?,
            "$CHAMFERC" => self.chamfer_length = pair.assert_f64()?,
            "$CHAMFERD" => self.chamfer_angle = pair.assert_f64()?,
            "$SKPOLY" => self.polyline_sketch_mode = pair.assert_bool()?,
            "$TDCREATE" => self.creation_date = as_datetime_local(pair.assert_f64()?),
            "$TDUCREATE" => self.creation_date_universal = as_datetime_utc(pair.assert_f64()?),
            "$TDUPDATE" => self.update_date = as_datetime_local(pair.assert_f64()?),
            "$TDUUPDATE" => self.update_date_universal = as_datetime_utc(pair.assert_f64()?),
            "$TDINDWG" => self.time_in_drawing = as_duration(pair.assert_f64()?),
            "$TDUSRTIMER" => self.user_elapsed_timer = as_duration(pair.assert_f64()?),
            "$USRTIMER" => self.user_timer_on = pair.assert_bool()?,
            "$ANGBASE" => self.angle_zero_direction = pair.assert_f64()?,
            "$ANGDIR" => {
                self.angle_direction = enum_from_number!(
                    AngleDirection,
                    CounterClockwise,
                    from_i16,
                    pair.assert_i16()?
                )
            }
            "$PDMODE" => self.point_display_mode = pair.assert_i16()?,
            "$PDSIZE" => self.point_display_size = pair.assert_f64()?,
            "$PLINEWID" => self.default_polyline_width = pair.assert_f64()?,
            "$SPLFRAME" => self.display_spline_polygon_control = pair.assert_bool()?,
            "$SPLINETYPE" => self.pedit_spline_curve_type = pair.assert_i16()?,
            "$SPLINESEGS" => self.line_segments_per_spline_patch = pair.assert_i16()?,
            "$HANDLING" => self.handles_enabled = pair.assert_bool()?,
            "$HANDSEED" => self.next_available_handle = pair.as_handle()?,
            "$SURFTAB1" => self.mesh_tabulations_in_first_direction = pair.assert_i16()?,
            "$SURFTAB2" => self.mesh_tabulations_in_second_direction = pair.assert_i16()?,
            "$SURFTYPE" => self.pedit_smooth_surface_type = pair.assert_i16()?,
            "$SURFU" => self.pedit_smooth_m_density = pair.assert_i16()?,
            "$SURFV" => self.pedit_smooth_n_density = pair.assert_i16()?,
            "$UCSBASE" => self.ucs_base = pair.assert_string()?,
            "$UCSNAME" => self.ucs_name = pair.assert_string()?,
            "$UCSORG" => self.ucs_origin.set(pair)?,
            "$UCSXDIR" => self.ucs_x_axis.set(pair)?,
            "$UCSYDIR" => self.ucs_y_axis.set(pair)?,
            "$PUCSBASE" => self.paperspace_ucs_base = pair.assert_string()?,
            "$PUCSNAME" => self.paperspace_ucs_name = pair.assert_string()?,
            "$PUCSORG" => self.paperspace_ucs_origin.set(pair)?,
            "$PUCSXDIR" => self.paperspace_ucs_x_axis.set(pair)?,
            "$PUCSYDIR" => self.paperspace_ucs_y_axis.set(pair)?,
            "$PINSBASE" => self.paperspace_insertion_base.set(pair)?,
            "$PLIMCHECK" => self.limit_checking_in_paperspace = pair.assert_bool()?,
            "$PEXTMIN" => self.paperspace_minimum_drawing_extents.set(pair)?,
            "$PEXTMAX" => self.paperspace_maximum_drawing_extents.set(pair)?,
            "$PLIMMIN" => self.paperspace_minimum_drawing_limits.set(pair)?,
            "$PLIMMAX" => self.paperspace_maximum_drawing_limits.set(pair)?,
            "$UNITMODE" => self.display_fractions_in_input = pair.assert_bool()?,
            "$VISRETAIN" => self.retain_deleted_entities = pair.assert_bool()?,
            "$PLINEGEN" => self.is_polyline_continuous_around_vertices = pair.assert_bool()?,
            "$PSLTSCALE" => self.scale_line_types_in_paperspace = pair.assert_bool()?,
            "$TREEDEPTH" => self.spatial_index_max_depth = pair.assert_i16()?,
            "$CMLSTYLE" => self.current_multiline_style = pair.assert_string()?,
            "$CMLJUST" => {
                self.current_multiline_justification =
                    enum_from_number!(MLineJustification, Top, from_i16, pair.assert_i16()?)
            }
            "$CMLSCALE" => self.current_multiline_scale = pair.assert_f64()?,
            "$PROXYGRAPHICS" => self.save_proxy_graphics = pair.assert_bool()?,
            "$MEASUREMENT" => {
                self.drawing_units =
                    enum_from_number!(DrawingUnits, English, from_i16, pair.assert_i16()?)
            }
            "$CELWEIGHT" => {
                self.new_object_line_weight = LineWeight::from_raw_value(pair.assert_i16()?)
            }
            "$ENDCAPS" => self.end_cap_setting = pair.assert_i16()?,
            "$JOINSTYLE" => self.lineweight_joint_setting = pair.assert_i16()?,
            "$LWDISPLAY" => self.display_line_weight_in_model_space = pair.assert_bool()?,
            "$INSUNITS" => {
                self.default_drawing_units =
                    enum_from_number!(Units, Unitless, from_i16, pair.assert_i16()?)
            }
            "$HYPERLINKBASE" => self.hyperlink_base = pair.assert_string()?,
            "$STYLESHEET" => self.stylesheet = pair.assert_string()?,
            "$XEDIT" => self.can_use_in_place_reference_editing = pair.assert_bool()?,
            "$CEPSNTYPE" => self.new_object_plot_style_type = pair.assert_i16()?,
            "$PSTYLEMODE" => {
                self.uses_color_dependent_plot_style_tables = pair.assert_bool()?
            }
            "$EXTNAMES" => self.use_acad2000_symbol_table_naming = pair.assert_bool()?,
            "$FINGERPRINTGUID" => {
                self.fingerprint_guid = as_uuid(&pair.assert_string()?, pair.offset)?
            }
            "$VERSIONGUID" => self.version_guid = as_uuid(&pair.assert_string()?, pair.offset)?,
            "$SORTENTS" => self.object_sorting_methods_flags = pair.assert_i16()?,
            "$INDEXCTL" => self.layer_and_spatial_index_save_mode = pair.assert_i16()?,
            "$HIDETEXT" => self.hide_text_objects_when_hidding_is_on = pair.assert_i16()?,
            "$XCLIPFRAME" => self.is_xref_clipping_boundary_visible = pair.assert_i16()?,
            "$HALOGAP" => self.halo_gap_percent = pair.assert_i16()?,
            "$OBSCOLOR" => self.obscured_line_color = pair.assert_i16()?,
            "$OBSLTYPE" => self.obscured_line_type_style = pair.assert_i16()?,
            "$INTERSECTIONDISPLAY" => self.display_intersection_polylines = pair.assert_i16()?,
            "$INTERSECTIONCOLOR" => self.intersection_polyline_color = pair.assert_i16()?,
            "$MAXACTVP" => self.maximum_active_viewports = pair.assert_i16()?,
            "$SHADEDGE" => self.edge_shading = pair.assert_i16()?,
            "$SHADEDIF" => self.percent_ambient_to_diffuse = pair.assert_i16()?,
            "$TILEMODE" => self.previous_release_tile_compatibility = pair.assert_bool()?,
            "$USERI1" => self.user_int1 = pair.assert_i16()?,
            "$USERI2" => self.user_int2 = pair.assert_i16()?,
            "$USERI3" => self.user_int3 = pair.assert_i16()?,
            "$USERI4" => self.user_int4 = pair.assert_i16()?,
            "$USERI5" => self.user_int5 = pair.assert_i16()?,
            "$USERR1" => self.user_real1 = pair.assert_f64()?,
            "$USERR2" => self.user_real2 = pair.assert_f64()?,
            "$USERR3" => self.user_real3 = pair.assert_f64()?,
            "$USERR4" => self.user_real4 = pair.assert_f64()?,
            "$USERR5" => self.user_real5 = pair.assert_f64()?,
            "$WORLDVIEW" => self.set_ucs_to_wcs_in_dview_or_vpoint = pair.assert_bool()?,
            _ => return Ok(false),
        }

        Ok(true)
    }
    pub(crate) fn write<T>(
        &self,
        version: AcadVersion,
        next_handle: Handle,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
        writer.write_code_pair(&CodePair::new_str(2, "HEADER"))?;
        self.write_code_pairs(version, next_handle, writer)?;
        writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))?;
        Ok(())
    }
    fn write_code_pairs<T>(
        &self,
        version: AcadVersion,
        next_handle: Handle,
        writer: &mut CodePairWriter<T>,
    ) -> DxfResult<()>
    where
        T: Write,
    {
        fn var<T: Write>(
            writer: &mut CodePairWriter<T>,
            name: &str,
            value: CodePair,
        ) -> DxfResult<()> {
            writer.write_code_pair(&CodePair::new_str(9, name))?;
            writer.write_code_pair(&value)
        }
        fn point_var<T: Write>(
            writer: &mut CodePairWriter<T>,
            name: &str,
            point: &Point,
            three_d: bool,
        ) -> DxfResult<()> {
            writer.write_code_pair(&CodePair::new_str(9, name))?;
            writer.write_code_pair(&CodePair::new_f64(10, point.x))?;
            writer.write_code_pair(&CodePair::new_f64(20, point.y))?;
            if three_d {
                writer.write_code_pair(&CodePair::new_f64(30, point.z))?;
            }
            Ok(())
        }
        fn vector_var<T: Write>(
            writer: &mut CodePairWriter<T>,
            name: &str,
            v: &Vector,
        ) -> DxfResult<()> {
            writer.write_code_pair(&CodePair::new_str(9, name))?;
            writer.write_code_pair(&CodePair::new_f64(10, v.x))?;
            writer.write_code_pair(&CodePair::new_f64(20, v.y))?;
            writer.write_code_pair(&CodePair::new_f64(30, v.z))?;
            Ok(())
        }

        var(
            writer,
            "$ACADVER",
            CodePair::new_str(1, version.as_version_string()),
        )?;
        if version >= AcadVersion::R14 {
            var(
                writer,
                "$ACADMAINTVER",
                CodePair::new_i16(70, self.maintenance_version),
            )?;
        }
        if version >= AcadVersion::R10 {
            var(
                writer,
                "$DWGCODEPAGE",
                CodePair::new_string(3, &self.drawing_code_page),
            )?;
        }
        if version >= AcadVersion::R2004 {
            var(
                writer,
                "$LASTSAVEDBY",
                CodePair::new_string(1, &self.last_saved_by),
            )?;
        }
        point_var(writer, "$INSBASE", &self.insertion_base, true)?;
        point_var(writer, "$EXTMIN", &self.minimum_drawing_extents, true)?;
        point_var(writer, "$EXTMAX", &self.maximum_drawing_extents, true)?;
        point_var(writer, "$LIMMIN", &self.minimum_drawing_limits, false)?;
        point_var(writer, "$LIMMAX", &self.maximum_drawing_limits, false)?;
        var(
            writer,
            "$ORTHOMODE",
            CodePair::new_i16(70, as_i16(self.draw_orthogonal_lines)),
        )?;
        var(
            writer,
            "$REGENMODE",
            CodePair::new_i16(70, as_i16(self.use_regen_mode)),
        )?;
        var(
            writer,
            "$FILLMODE",
            CodePair::new_i16(70, as_i16(self.fill_mode_on)),
        )?;
        var(
            writer,
            "$QTEXTMODE",
            CodePair::new_i16(70, as_i16(self.use_quick_text_mode)),
        )?;
        var(
            writer,
            "$MIRRTEXT",
            CodePair::new_i16(70, as_i16(self.mirror_text)),
        )?;
        if version <= AcadVersion::R14 {
            var(writer, "$DRAGMODE", CodePair::new_i16(70, self.drag_mode))?;
        }
        var(
            writer,
            "$LTSCALE",
            CodePair::new_f64(40, self.line_type_scale),
        )?;
        if version <= AcadVersion::R14 {
            var(
                writer,
                "$OSMODE",
                CodePair::new_i16(70, self.object_snap_flags),
            )?;
        }
        var(
            writer,
            "$ATTMODE",
            CodePair::new_i16(70, self.attribute_visibility as i16),
        )?;
        var(
            writer,
            "$TEXTSIZE",
            CodePair::new_f64(40, self.default_text_height),
        )?;
        var(writer, "$TRACEWID", CodePair::new_f64(40, self.trace_width))?;
        var(
            writer,
            "$TEXTSTYLE",
            CodePair::new_string(7, &self.text_style),
        )?;
        var(
            writer,
            "$CLAYER",
            CodePair::new_string(8, &self.current_layer),
        )?;
        var(
            writer,
            "$CELTYPE",
            CodePair::new_string(6, &self.current_entity_line_type),
        )?;
        var(
            writer,
            "$CECOLOR",
            CodePair::new_i16(62, self.current_entity_color.raw_value()),
        )?;
        if version >= AcadVersion::R13 {
            var(
                writer,
                "$CELTSCALE",
                CodePair::new_f64(40, self.current_entity_line_type_scale),
            )?;
            var(
                writer,
                "$DISPSILH",
                CodePair::new_i16(
                    70,
                    as_i16(self.display_silhouette_curves_in_wireframe_mode),
                ),
            )?;
        }
        var(
            writer,
            "$DIMSCALE",
            CodePair::new_f64(40, self.dimensioning_scale_factor),
        )?;
        var(
            writer,
            "$DIMASZ",
            CodePair::new_f64(40, self.dimensioning_arrow_size),
        )?;
        var(
            writer,
            "$DIMEXO",
            CodePair::new_f64(40, self.dimension_extension_line_offset),
        )?;
        var(
            writer,
            "$DIMDLI",
            CodePair::new_f64(40, self.dimension_line_increment),
        )?;
        var(
            writer,
            "$DIMRND",
            CodePair::new_f64(40, self.dimension_distance_rounding_value),
        )?;
        var(
            writer,
            "$DIMDLE",
            CodePair::new_f64(40, self.dimension_line_extension),
        )?;
        var(
            writer,
            "$DIMEXE",
            CodePair::new_f64(40, self.dimension_extension_line_extension),
        )?;
        var(
            writer,
            "$DIMTP",
            CodePair::new_f64(40, self.dimension_plus_tolerance),
        )?;
        var(
            writer,
            "$DIMTM",
            CodePair::new_f64(40, self.dimension_minus_tolerance),
        )?;
        var(
            writer,
            "$DIMTXT",
            CodePair::new_f64(40, self.dimensioning_text_height),
        )?;
        var(
            writer,
            "$DIMCEN",
            CodePair::new_f64(40, self.center_mark_size),
        )?;
        var(
            writer,
            "$DIMTSZ",
            CodePair::new_f64(40, self.dimensioning_tick_size),
        )?;
        var(
            writer,
            "$DIMTOL",
            CodePair::new_i16(70, as_i16(self.generate_dimension_tolerances)),
        )?;
        var(
            writer,
            "$DIMLIM",
            CodePair::new_i16(70, as_i16(self.generate_dimension_limits)),
        )?;
        var(
            writer,
            "$DIMTIH",
            CodePair::new_i16(70, as_i16(self.dimension_text_inside_horizontal)),
        )?;
        var(
            writer,
            "$DIMTOH",
            CodePair::new_i16(70, as_i16(self.dimension_text_outside_horizontal)),
        )?;
        var(
            writer,
            "$DIMSE1",
            CodePair::new_i16(70, as_i16(self.suppress_first_dimension_extension_line)),
        )?;
        var(
            writer,
            "$DIMSE2",
            CodePair::new_i16(70, as_i16(self.suppress_second_dimension_extension_line)),
        )?;
        var(
            writer,
            "$DIMTAD",
            CodePair::new_i16(70, self.text_above_dimension_line),
        )?;
        var(
            writer,
            "$DIMZIN",
            CodePair::new_i16(70, self.dimension_unit_zero_suppression),
        )?;
        var(
            writer,
            "$DIMBLK",
            CodePair::new_string(1, &self.arrow_block_name),
        )?;
        if version <= AcadVersion::R13 {
            var(
                writer,
                "$DIMASO",
                CodePair::new_i16(70, as_i16(self.create_associative_dimensioning)),
            )?;
            var(
                writer,
                "$DIMSHO",
                CodePair::new_i16(70, as_i16(self.recompute_dimensions_while_dragging)),
            )?;
        }
        var(
            writer,
            "$DIMPOST",
            CodePair::new_string(1, &self.dimensioning_suffix),
        )?;
        var(
            writer,
            "$DIMAPOST",
            CodePair::new_string(1, &self.alternate_dimensioning_suffix),
        )?;
        var(
            writer,
            "$DIMLFAC",
            CodePair::new_f64(40, self.dimension_linear_measurement_scale_factor),
        )?;
        var(
            writer,
            "$DIMTOFL",
            CodePair::new_i16(
                70,
                as_i16(self.force_dimension_line_inside_extension_lines),
            ),
        )?;
        var(
            writer,
            "$DIMTVP",
            CodePair::new_f64(40, self.dimension_vertical_text_position),
        )?;
        var(
            writer,
            "$DIMTIX",
            CodePair::new_i16(70, as_i16(self.force_dimension_text_inside_extensions)),
        )?;
        var(
            writer,
            "$DIMSOXD",
            CodePair::new_i16(
                70,
                as_i16(self.suppress_outside_extension_dimension_lines),
            ),
        )?;
        var(
            writer,
            "$DIMSAH",
            CodePair::new_i16(70, as_i16(self.use_separate_arrow_blocks_for_dimensions)),
        )?;
        var(
            writer,
            "$DIMBLK1",
            CodePair::new_string(1, &self.first_arrow_block_name),
        )?;
        var(
            writer,
            "$DIMBLK2",
            CodePair::new_string(1, &self.second_arrow_block_name),
        )?;
        var(
            writer,
            "$DIMSTYLE",
            CodePair::new_string(2, &self.dimension_style_name),
        )?;
        if version >= AcadVersion::R11 {
            var(
                writer,
                "$DIMCLRD",
                CodePair::new_i16(70, self.dimension_line_color.raw_value()),
            )?;
            var(
                writer,
                "$DIMCLRE",
                CodePair::new_i16(70, self.dimension_extension_line_color.raw_value()),
            )?;
            var(
                writer,
                "$DIMCLRT",
                CodePair::new_i16(70, self.dimension_text_color.raw_value()),
            )?;
            var(
                writer,
                "$DIMTFAC",
                CodePair::new_f64(40, self.dimension_tolerance_display_scale_factor),
            )?;
            var(
                writer,
                "$DIMGAP",
                CodePair::new_f64(40, self.dimension_line_gap),
            )?;
        }
        if version >= AcadVersion::R13 {
            var(
                writer,
                "$DIMTXSTY",
                CodePair::new_string(7, &self.dimension_text_style),
            )?;
            var(
                writer,
                "$DIMDEC",
                CodePair::new_i16(70, self.dimension_unit_tolerance_decimal_places),
            )?;
        }
        if version >= AcadVersion::R2004 {
            var(
                writer,
                "$DIMASSOC",
                CodePair::new_i16(280, self.dimension_object_associativity),
            )?;
        }
        var(
            writer,
            "$LUNITS",
            CodePair::new_i16(70, self.unit_format as i16),
        )?;
        var(writer, "$LUPREC", CodePair::new_i16(70, self.unit_precision))?;
        var(
            writer,
            "$SKETCHINC",
            CodePair::new_f64(40, self.sketch_record_increment),
        )?;
        var(
            writer,
            "$FILLETRAD",
            CodePair::new_f64(40, self.fillet_radius),
        )?;
        var(
            writer,
            "$AUNITS",
            CodePair::new_i16(70, self.angle_unit_format as i16),
        )?;
        var(
            writer,
            "$AUPREC",
            CodePair::new_i16(70, self.angle_unit_precision),
        )?;
        var(writer, "$MENU", CodePair::new_string(1, &self.file_name))?;
        var(writer, "$ELEVATION", CodePair::new_f64(40, self.elevation))?;
        if version >= AcadVersion::R13 {
            var(
                writer,
                "$PELEVATION",
                CodePair::new_f64(40, self.paperspace_elevation),
            )?;
        }
        var(writer, "$THICKNESS", CodePair::new_f64(40, self.thickness))?;
        var(
            writer,
            "$LIMCHECK",
            CodePair::new_i16(70, as_i16(self.use_limits_checking)),
        )?;
        if version <= AcadVersion::R14 {
            var(
                writer,
                "$BLIPMODE",
                CodePair::new_i16(70, as_i16(self.blip_mode)),
            )?;
        }
        var(
            writer,
            "$CHAMFERA",
            CodePair::new_f64(40, self.first_chamfer_distance),
        )?;
        var(
            writer,
            "$CHAMFERB",
            CodePair::new_f64(40, self.second_chamfer_distance),
        )?;
        if version >= AcadVersion::R14 {
            var(
                writer,
                "$CHAMFERC",
                CodePair::new_f64(40, self.chamfer_length),
            )?;
            var(
                writer,
                "$CHAMFERD",
                CodePair::new_f64(40, self.chamfer_angle),
            )?;
        }
        var(
            writer,
            "$SKPOLY",
            CodePair::new_i16(70, as_i16(self.polyline_sketch_mode)),
        )?;
        var(
            writer,
            "$TDCREATE",
            CodePair::new_f64(40, as_double_local(self.creation_date)),
        )?;
        if version >= AcadVersion::R2000 {
            var(
                writer,
                "$TDUCREATE",
                CodePair::new_f64(40, as_double_utc(self.creation_date_universal)),
            )?;
        }
        var(
            writer,
            "$TDUPDATE",
            CodePair::new_f64(40, as_double_local(self.update_date)),
        )?;
        if version >= AcadVersion::R2000 {
            var(
                writer,
                "$TDUUPDATE",
                CodePair::new_f64(40, as_double_utc(self.update_date_universal)),
            )?;
        }
        var(
            writer,
            "$TDINDWG",
            CodePair::new_f64(40, duration_as_double(self.time_in_drawing)),
        )?;
        var(
            writer,
            "$TDUSRTIMER",
            CodePair::new_f64(40, duration_as_double(self.user_elapsed_timer)),
        )?;
        var(
            writer,
            "$USRTIMER",
            CodePair::new_i16(70, as_i16(self.user_timer_on)),
        )?;
        var(
            writer,
            "$ANGBASE",
            CodePair::new_f64(50, self.angle_zero_direction),
        )?;
        var(
            writer,
            "$ANGDIR",
            CodePair::new_i16(70, self.angle_direction as i16),
        )?;
        var(
            writer,
            "$PDMODE",
            CodePair::new_i16(70, self.point_display_mode),
        )?;
        var(
            writer,
            "$PDSIZE",
            CodePair::new_f64(40, self.point_display_size),
        )?;
        var(
            writer,
            "$PLINEWID",
            CodePair::new_f64(40, self.default_polyline_width),
        )?;
        if version <= AcadVersion::R2010 {
            var(
                writer,
                "$SPLFRAME",
                CodePair::new_i16(70, as_i16(self.display_spline_polygon_control)),
            )?;
        }
        var(
            writer,
            "$SPLINETYPE",
            CodePair::new_i16(70, self.pedit_spline_curve_type),
        )?;
        var(
            writer,
            "$SPLINESEGS",
            CodePair::new_i16(70, self.line_segments_per_spline_patch),
        )?;
        if version <= AcadVersion::R12 {
            var(
                writer,
                "$HANDLING",
                CodePair::new_i16(70, as_i16(self.handles_enabled)),
            )?;
        }
        var(
            writer,
            "$HANDSEED",
            CodePair::new_string(5, &next_handle.as_string()),
        )?;
        var(
            writer,
            "$SURFTAB1",
            CodePair::new_i16(70, self.mesh_tabulations_in_first_direction),
        )?;
        var(
            writer,
            "$SURFTAB2",
            CodePair::new_i16(70, self.mesh_tabulations_in_second_direction),
        )?;
        var(
            writer,
            "$SURFTYPE",
            CodePair::new_i16(70, self.pedit_smooth_surface_type),
        )?;
        var(
            writer,
            "$SURFU",
            CodePair::new_i16(70, self.pedit_smooth_m_density),
        )?;
        var(
            writer,
            "$SURFV",
            CodePair::new_i16(70, self.pedit_smooth_n_density),
        )?;
        if version >= AcadVersion::R2000 {
            var(writer, "$UCSBASE", CodePair::new_string(2, &self.ucs_base))?;
        }
        var(writer, "$UCSNAME", CodePair::new_string(2, &self.ucs_name))?;
        point_var(writer, "$UCSORG", &self.ucs_origin, true)?;
        vector_var(writer, "$UCSXDIR", &self.ucs_x_axis)?;
        vector_var(writer, "$UCSYDIR", &self.ucs_y_axis)?;
        if version >= AcadVersion::R2000 {
            var(
                writer,
                "$PUCSBASE",
                CodePair::new_string(2, &self.paperspace_ucs_base),
            )?;
        }
        if version >= AcadVersion::R13 {
            var(
                writer,
                "$PUCSNAME",
                CodePair::new_string(2, &self.paperspace_ucs_name),
            )?;
            point_var(writer, "$PUCSORG", &self.paperspace_ucs_origin, true)?;
            vector_var(writer, "$PUCSXDIR", &self.paperspace_ucs_x_axis)?;
            vector_var(writer, "$PUCSYDIR", &self.paperspace_ucs_y_axis)?;
        }
        if version >= AcadVersion::R14 {
            point_var(writer, "$PINSBASE", &self.paperspace_insertion_base, true)?;
        }
        if version >= AcadVersion::R13 {
            var(
                writer,
                "$PLIMCHECK",
                CodePair::new_i16(70, as_i16(self.limit_checking_in_paperspace)),
            )?;
            point_var(
                writer,
                "$PEXTMIN",
                &self.paperspace_minimum_drawing_extents,
                true,
            )?;
            point_var(
                writer,
                "$PEXTMAX",
                &self.paperspace_maximum_drawing_extents,
                true,
            )?;
            point_var(
                writer,
                "$PLIMMIN",
                &self.paperspace_minimum_drawing_limits,
                false,
            )?;
            point_var(
                writer,
                "$PLIMMAX",
                &self.paperspace_maximum_drawing_limits,
                false,
            )?;
        }
        if version >= AcadVersion::R11 {
            var(
                writer,
                "$UNITMODE",
                CodePair::new_i16(70, as_i16(self.display_fractions_in_input)),
            )?;
        }
        if version >= AcadVersion::R12 {
            var(
                writer,
                "$VISRETAIN",
                CodePair::new_i16(70, as_i16(self.retain_deleted_entities)),
            )?;
        }
        if version >= AcadVersion::R11 {
            var(
                writer,
                "$PLINEGEN",
                CodePair::new_i16(70, as_i16(self.is_polyline_continuous_around_vertices)),
            )?;
            var(
                writer,
                "$PSLTSCALE",
                CodePair::new_i16(70, as_i16(self.scale_line_types_in_paperspace)),
            )?;
        }
        if version >= AcadVersion::R14 {
            var(
                writer,
                "$TREEDEPTH",
                CodePair::new_i16(70, self.spatial_index_max_depth),
            )?;
        }
        if version >= AcadVersion::R13 {
            var(
                writer,
                "$CMLSTYLE",
                CodePair::new_string(2, &self.current_multiline_style),
            )?;
            var(
                writer,
                "$CMLJUST",
                CodePair::new_i16(70, self.current_multiline_justification as i16),
            )?;
            var(
                writer,
                "$CMLSCALE",
                CodePair::new_f64(40, self.current_multiline_scale),
            )?;
        }
        if version >= AcadVersion::R14 {
            var(
                writer,
                "$PROXYGRAPHICS",
                CodePair::new_i16(70, as_i16(self.save_proxy_graphics)),
            )?;
            var(
                writer,
                "$MEASUREMENT",
                CodePair::new_i16(70, self.drawing_units as i16),
            )?;
        }
        if version >= AcadVersion::R2000 {
            var(
                writer,
                "$CELWEIGHT",
                CodePair::new_i16(370, self.new_object_line_weight.raw_value()),
            )?;
            var(
                writer,
                "$ENDCAPS",
                CodePair::new_i16(280, self.end_cap_setting),
            )?;
            var(
                writer,
                "$JOINSTYLE",
                CodePair::new_i16(280, self.lineweight_joint_setting),
            )?;
            var(
                writer,
                "$LWDISPLAY",
                CodePair::new_bool(290, self.display_line_weight_in_model_space),
            )?;
            var(
                writer,
                "$INSUNITS",
                CodePair::new_i16(70, self.default_drawing_units as i16),
            )?;
            var(
                writer,
                "$HYPERLINKBASE",
                CodePair::new_string(1, &self.hyperlink_base),
            )?;
            var(
                writer,
                "$STYLESHEET",
                CodePair::new_string(1, &self.stylesheet),
            )?;
            var(
                writer,
                "$XEDIT",
                CodePair::new_bool(290, self.can_use_in_place_reference_editing),
            )?;
            var(
                writer,
                "$CEPSNTYPE",
                CodePair::new_i16(380, self.new_object_plot_style_type),
            )?;
            var(
                writer,
                "$PSTYLEMODE",
                CodePair::new_bool(290, self.uses_color_dependent_plot_style_tables),
            )?;
            var(
                writer,
                "$EXTNAMES",
                CodePair::new_bool(290, self.use_acad2000_symbol_table_naming),
            )?;
            var(
                writer,
                "$FINGERPRINTGUID",
                CodePair::new_string(2, &uuid_string(&self.fingerprint_guid)),
            )?;
            var(
                writer,
                "$VERSIONGUID",
                CodePair::new_string(2, &uuid_string(&self.version_guid)),
            )?;
        }
        if version >= AcadVersion::R2004 {
            var(
                writer,
                "$SORTENTS",
                CodePair::new_i16(280, self.object_sorting_methods_flags),
            )?;
            var(
                writer,
                "$INDEXCTL",
                CodePair::new_i16(280, self.layer_and_spatial_index_save_mode),
            )?;
            var(
                writer,
                "$HIDETEXT",
                CodePair::new_i16(280, self.hide_text_objects_when_hidding_is_on),
            )?;
            var(
                writer,
                "$XCLIPFRAME",
                CodePair::new_i16(280, self.is_xref_clipping_boundary_visible),
            )?;
            var(
                writer,
                "$HALOGAP",
                CodePair::new_i16(280, self.halo_gap_percent),
            )?;
            var(
                writer,
                "$OBSCOLOR",
                CodePair::new_i16(70, self.obscured_line_color),
            )?;
            var(
                writer,
                "$OBSLTYPE",
                CodePair::new_i16(280, self.obscured_line_type_style),
            )?;
            var(
                writer,
                "$INTERSECTIONDISPLAY",
                CodePair::new_i16(280, self.display_intersection_polylines),
            )?;
            var(
                writer,
                "$INTERSECTIONCOLOR",
                CodePair::new_i16(70, self.intersection_polyline_color),
            )?;
        }
        var(
            writer,
            "$MAXACTVP",
            CodePair::new_i16(70, self.maximum_active_viewports),
        )?;
        if version >= AcadVersion::R11 {
            var(
                writer,
                "$SHADEDGE",
                CodePair::new_i16(70, self.edge_shading),
            )?;
            var(
                writer,
                "$SHADEDIF",
                CodePair::new_i16(70, self.percent_ambient_to_diffuse),
            )?;
            var(
                writer,
                "$TILEMODE",
                CodePair::new_i16(70, as_i16(self.previous_release_tile_compatibility)),
            )?;
        }
        var(writer, "$USERI1", CodePair::new_i16(70, self.user_int1))?;
        var(writer, "$USERI2", CodePair::new_i16(70, self.user_int2))?;
        var(writer, "$USERI3", CodePair::new_i16(70, self.user_int3))?;
        var(writer, "$USERI4", CodePair::new_i16(70, self.user_int4))?;
        var(writer, "$USERI5", CodePair::new_i16(70, self.user_int5))?;
        var(writer, "$USERR1", CodePair::new_f64(40, self.user_real1))?;
        var(writer, "$USERR2", CodePair::new_f64(40, self.user_real2))?;
        var(writer, "$USERR3", CodePair::new_f64(40, self.user_real3))?;
        var(writer, "$USERR4", CodePair::new_f64(40, self.user_real4))?;
        var(writer, "$USERR5", CodePair::new_f64(40, self.user_real5))?;
        if version >= AcadVersion::R11 {
            var(
                writer,
                "$WORLDVIEW",
                CodePair::new_i16(70, as_i16(self.set_ucs_to_wcs_in_dview_or_vpoint)),
            )?;
        }
        for retained in &self.retained_variables {
            writer.write_code_pair(&CodePair::new_string(9, &retained.name))?;
            for pair in &retained.pairs {
                writer.write_code_pair(pair)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::tests::*;
    use crate::Drawing;

    fn header_from_pairs(pairs: Vec<CodePair>) -> Header {
        let mut all = vec![
            CodePair::new_str(0, "SECTION"),
            CodePair::new_str(2, "HEADER"),
        ];
        all.extend(pairs);
        all.push(CodePair::new_str(0, "ENDSEC"));
        all.push(CodePair::new_str(0, "EOF"));
        drawing_from_pairs(all).header
    }

    #[test]
    fn read_scalar_variables() {
        let header = header_from_pairs(vec![
            CodePair::new_str(9, "$ACADVER"),
            CodePair::new_str(1, "AC1015"),
            CodePair::new_str(9, "$LTSCALE"),
            CodePair::new_f64(40, 2.5),
            CodePair::new_str(9, "$CLAYER"),
            CodePair::new_str(8, "some-layer"),
        ]);
        assert_eq!(AcadVersion::R2000, header.version);
        assert!((header.line_type_scale - 2.5).abs() < 1e-10);
        assert_eq!("some-layer", header.current_layer);
    }

    #[test]
    fn read_point_variable() {
        let header = header_from_pairs(vec![
            CodePair::new_str(9, "$INSBASE"),
            CodePair::new_f64(10, 1.1),
            CodePair::new_f64(20, 2.2),
            CodePair::new_f64(30, 3.3),
        ]);
        assert_eq!(Point::new(1.1, 2.2, 3.3), header.insertion_base);
    }

    #[test]
    fn read_handseed() {
        let header = header_from_pairs(vec![
            CodePair::new_str(9, "$HANDSEED"),
            CodePair::new_str(5, "FF"),
        ]);
        assert_eq!(Handle(0xFF), header.next_available_handle);
    }

    #[test]
    fn unknown_variables_are_retained() {
        let header = header_from_pairs(vec![
            CodePair::new_str(9, "$UNKNOWN_VARIABLE"),
            CodePair::new_f64(40, 1.5),
        ]);
        assert_eq!(1, header.retained_variables.len());
        assert_eq!("$UNKNOWN_VARIABLE", header.retained_variables[0].name);
        assert_eq!(
            vec![CodePair::new_f64(40, 1.5)],
            header.retained_variables[0].pairs
        );
    }

    #[test]
    fn unknown_variables_survive_a_round_trip() {
        let mut drawing = Drawing::new();
        drawing.header.retained_variables.push(RetainedHeaderVariable {
            name: String::from("$UNKNOWN_VARIABLE"),
            pairs: vec![CodePair::new_f64(40, 1.5)],
        });
        let text = to_test_string(&drawing);
        let reparsed = parse_drawing(&text);
        assert_eq!(1, reparsed.header.retained_variables.len());
        assert_eq!(
            "$UNKNOWN_VARIABLE",
            reparsed.header.retained_variables[0].name
        );
    }

    #[test]
    fn enum_out_of_bounds_reads_as_default() {
        let header = header_from_pairs(vec![
            CodePair::new_str(9, "$LUNITS"),
            CodePair::new_i16(70, 55),
        ]);
        assert_eq!(UnitFormat::Decimal, header.unit_format);
    }

    #[test]
    fn version_gated_variables_are_not_written_downlevel() {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R12;
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(9, "$CELTSCALE")]);
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(9, "$LWDISPLAY")]);
    }

    #[test]
    fn version_gated_variables_are_written_uplevel() {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2000;
        assert_contains_pairs(&drawing, vec![CodePair::new_str(9, "$CELTSCALE")]);
        assert_contains_pairs(
            &drawing,
            vec![
                CodePair::new_str(9, "$LWDISPLAY"),
                CodePair::new_bool(290, false),
            ],
        );
    }

    #[test]
    fn dropped_variables_are_still_written_downlevel() {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R12;
        assert_contains_pairs(&drawing, vec![CodePair::new_str(9, "$HANDLING")]);
        drawing.header.version = AcadVersion::R2000;
        assert_not_contains_pairs(&drawing, vec![CodePair::new_str(9, "$HANDLING")]);
    }
}
