//! PPTX parser implementation.
//!
//! Walks each slide's shape tree and produces slide documents in the JSON
//! intermediate form: positions and extents converted from EMU to pixels,
//! solid fills as `rgb(r, g, b)` strings, text bodies with insets and run
//! styling, custom geometry as SVG path fragments, and images resolved
//! through slide relationships. Z-order follows shape-tree document order.

use std::collections::HashMap;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::model::{
    BodyProperties, Deck, ElementContent, Fill, ImageContent, Measure, PageElement,
    PageProperties, Paragraph, PathContent, Position, Resource, ShapeContent, Size, SlideDocument,
    TextBody, TextRun, TextSpan, Underline,
};
use crate::units::EMU_PER_PIXEL;

use super::package::{resolve_target, PptxPackage};

/// Parser for PPTX presentations.
pub struct PptxParser {
    package: PptxPackage,
}

impl PptxParser {
    /// Open a PPTX file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            package: PptxPackage::open(path)?,
        })
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            package: PptxPackage::from_bytes(data)?,
        })
    }

    /// Parse the presentation into a deck.
    ///
    /// Fails with one descriptive error; no partial deck is returned.
    pub fn parse(&self) -> Result<Deck> {
        let mut deck = Deck::new();

        for slide_path in self.package.slide_paths()? {
            let rels = self.package.relationships(&slide_path)?;
            let xml = self.package.read_xml(&slide_path)?;
            let slide = parse_slide_xml(&xml, &rels, parent_dir(&slide_path))?;
            deck.add_slide(slide);
        }

        for name in self.package.part_names() {
            if let Some(file) = name.strip_prefix("ppt/media/") {
                let data = self.package.read_part(&name)?;
                deck.add_resource(format!("media/{}", file), Resource::new(file, data));
            }
        }

        Ok(deck)
    }
}

fn parent_dir(part: &str) -> &str {
    match part.rfind('/') {
        Some(slash) => &part[..slash],
        None => "",
    }
}

/// Convert an EMU magnitude to pixels.
fn emu_to_px(emu: f64) -> f64 {
    emu / EMU_PER_PIXEL
}

/// Convert a 6-digit hex color to the schema's `rgb(r, g, b)` textual form.
fn rgb_from_hex(hex: &str) -> Option<String> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("rgb({}, {}, {})", r, g, b))
}

/// Map a preset geometry tag to the schema's shape kind.
fn shape_type_from_preset(preset: &str) -> String {
    match preset {
        "rect" => "RECTANGLE".to_string(),
        "roundRect" => "ROUND_RECTANGLE".to_string(),
        "ellipse" => "ELLIPSE".to_string(),
        "triangle" => "TRIANGLE".to_string(),
        "line" => "LINE".to_string(),
        other => other.to_uppercase(),
    }
}

fn attr_value(e: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == local)
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

fn attr_f64(e: &BytesStart<'_>, local: &[u8]) -> Option<f64> {
    attr_value(e, local).and_then(|v| v.parse().ok())
}

fn attr_bool(e: &BytesStart<'_>, local: &[u8]) -> bool {
    matches!(attr_value(e, local).as_deref(), Some("1") | Some("true"))
}

/// Format a path coordinate: three decimals, trailing zeros trimmed.
fn fmt_coord(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Geometry accumulated for a shape or picture.
#[derive(Debug, Default)]
struct FrameAcc {
    x: f64,
    y: f64,
    cx: f64,
    cy: f64,
    rotation: f64,
    flip_h: bool,
    flip_v: bool,
}

impl FrameAcc {
    fn read_xfrm(&mut self, e: &BytesStart<'_>) {
        if let Some(rot) = attr_f64(e, b"rot") {
            // Rotation is stored in 60000ths of a degree.
            self.rotation = rot / 60_000.0;
        }
        if attr_bool(e, b"flipH") {
            self.flip_h = true;
        }
        if attr_bool(e, b"flipV") {
            self.flip_v = true;
        }
    }
}

/// A shape under construction.
#[derive(Debug, Default)]
struct ShapeAcc {
    name: String,
    frame: FrameAcc,
    fill: Option<String>,
    line_color: Option<String>,
    line_width: Option<f64>,
    shape_type: Option<String>,
    path_data: Vec<String>,
    body: Option<TextBody>,
}

/// A picture under construction.
#[derive(Debug, Default)]
struct PicAcc {
    name: String,
    frame: FrameAcc,
    rel_id: Option<String>,
}

#[derive(Debug, Default)]
enum Building {
    #[default]
    None,
    Shape(Box<ShapeAcc>),
    Pic(Box<PicAcc>),
}

/// Where a `solidFill` color lands.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum FillTarget {
    #[default]
    None,
    Background,
    Shape,
    Line,
    Run,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum SpcTarget {
    #[default]
    None,
    Before,
    After,
}

/// One custom-geometry path command being collected.
#[derive(Debug)]
struct PathCmd {
    letter: char,
    points: Vec<(f64, f64)>,
}

/// Event-loop state for one slide.
struct SlideWalker<'a> {
    rels: &'a HashMap<String, String>,
    slide_dir: &'a str,

    elements: Vec<PageElement>,
    background: Option<Fill>,
    order: i64,

    building: Building,
    in_bg: bool,
    in_ln: bool,
    fill_target: FillTarget,

    in_txbody: bool,
    in_rpr: bool,
    in_t: bool,
    para: Option<Paragraph>,
    run: Option<TextRun>,
    spc_target: SpcTarget,

    in_custgeom: bool,
    path_w: f64,
    path_h: f64,
    cmd: Option<PathCmd>,
}

/// Parse one slide's XML into a slide document.
pub(crate) fn parse_slide_xml(
    xml: &str,
    rels: &HashMap<String, String>,
    slide_dir: &str,
) -> Result<SlideDocument> {
    let mut walker = SlideWalker {
        rels,
        slide_dir,
        elements: Vec::new(),
        background: None,
        order: 0,
        building: Building::None,
        in_bg: false,
        in_ln: false,
        fill_target: FillTarget::None,
        in_txbody: false,
        in_rpr: false,
        in_t: false,
        para: None,
        run: None,
        spc_target: SpcTarget::None,
        in_custgeom: false,
        path_w: 0.0,
        path_h: 0.0,
        cmd: None,
    };

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => walker.on_open(e, false),
            Ok(Event::Empty(ref e)) => walker.on_open(e, true),
            Ok(Event::End(ref e)) => walker.on_close(e.name().local_name().as_ref()),
            Ok(Event::Text(ref t)) => {
                if walker.in_t {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::ParseFailure(e.to_string()))?;
                    if let Some(ref mut run) = walker.run {
                        run.content.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::ParseFailure(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(SlideDocument {
        page_elements: walker.elements,
        page_properties: PageProperties {
            page_background_fill: walker.background,
        },
    })
}

impl<'a> SlideWalker<'a> {
    fn on_open(&mut self, e: &BytesStart<'_>, is_empty: bool) {
        match e.name().local_name().as_ref() {
            b"bg" if !is_empty => self.in_bg = true,
            b"sp" if !is_empty => {
                if matches!(self.building, Building::None) {
                    self.building = Building::Shape(Box::default());
                }
            }
            b"pic" if !is_empty => {
                if matches!(self.building, Building::None) {
                    self.building = Building::Pic(Box::default());
                }
            }
            b"cNvPr" => {
                if let Some(name) = attr_value(e, b"name") {
                    match &mut self.building {
                        Building::Shape(shape) => shape.name = name,
                        Building::Pic(pic) => pic.name = name,
                        Building::None => {}
                    }
                }
            }
            b"xfrm" => {
                if let Some(frame) = self.frame_mut() {
                    frame.read_xfrm(e);
                }
            }
            b"off" => {
                let x = attr_f64(e, b"x");
                let y = attr_f64(e, b"y");
                if let Some(frame) = self.frame_mut() {
                    if let Some(x) = x {
                        frame.x = emu_to_px(x);
                    }
                    if let Some(y) = y {
                        frame.y = emu_to_px(y);
                    }
                }
            }
            b"ext" => {
                let cx = attr_f64(e, b"cx");
                let cy = attr_f64(e, b"cy");
                if let Some(frame) = self.frame_mut() {
                    if let Some(cx) = cx {
                        frame.cx = emu_to_px(cx);
                    }
                    if let Some(cy) = cy {
                        frame.cy = emu_to_px(cy);
                    }
                }
            }
            b"solidFill" if !is_empty => {
                self.fill_target = if self.in_rpr {
                    FillTarget::Run
                } else if self.in_ln {
                    FillTarget::Line
                } else if self.in_bg {
                    FillTarget::Background
                } else if matches!(self.building, Building::Shape(_)) && !self.in_txbody {
                    FillTarget::Shape
                } else {
                    FillTarget::None
                };
            }
            b"srgbClr" => {
                if let Some(color) = attr_value(e, b"val").as_deref().and_then(rgb_from_hex) {
                    self.assign_color(color);
                }
            }
            b"ln" => {
                if let Building::Shape(ref mut shape) = self.building {
                    if let Some(w) = attr_f64(e, b"w") {
                        shape.line_width = Some(emu_to_px(w));
                    }
                }
                if !is_empty {
                    self.in_ln = true;
                }
            }
            b"prstGeom" => {
                if let Building::Shape(ref mut shape) = self.building {
                    if let Some(preset) = attr_value(e, b"prst") {
                        shape.shape_type = Some(shape_type_from_preset(&preset));
                    }
                }
            }
            b"custGeom" if !is_empty => self.in_custgeom = true,
            b"path" if self.in_custgeom => {
                self.path_w = attr_f64(e, b"w").unwrap_or(0.0);
                self.path_h = attr_f64(e, b"h").unwrap_or(0.0);
            }
            b"moveTo" if !is_empty => self.cmd = Some(PathCmd::new('M')),
            b"lnTo" if !is_empty => self.cmd = Some(PathCmd::new('L')),
            b"cubicBezTo" if !is_empty => self.cmd = Some(PathCmd::new('C')),
            b"quadBezTo" if !is_empty => self.cmd = Some(PathCmd::new('Q')),
            b"close" => {
                if let Building::Shape(ref mut shape) = self.building {
                    if self.in_custgeom {
                        shape.path_data.push("Z".to_string());
                    }
                }
            }
            b"pt" => {
                let x = attr_f64(e, b"x");
                let y = attr_f64(e, b"y");
                if let (Some(ref mut cmd), Some(x), Some(y)) = (self.cmd.as_mut(), x, y) {
                    cmd.points.push((x, y));
                }
            }
            b"txBody" if !is_empty => {
                if let Building::Shape(ref mut shape) = self.building {
                    self.in_txbody = true;
                    shape.body.get_or_insert_with(TextBody::default);
                }
            }
            b"bodyPr" if self.in_txbody => {
                if let Building::Shape(ref mut shape) = self.building {
                    if let Some(ref mut body) = shape.body {
                        body.body_property = read_body_insets(e);
                    }
                }
            }
            b"p" if self.in_txbody => {
                if is_empty {
                    self.push_paragraph(Paragraph::default());
                } else {
                    self.para = Some(Paragraph::default());
                }
            }
            b"pPr" => {
                if let Some(ref mut para) = self.para {
                    if let Some(align) = attr_value(e, b"algn") {
                        para.paragraph_property.alignment = match align.as_str() {
                            "ctr" => crate::model::Alignment::Center,
                            "r" => crate::model::Alignment::Right,
                            _ => crate::model::Alignment::Left,
                        };
                    }
                }
            }
            b"spcBef" if !is_empty => self.spc_target = SpcTarget::Before,
            b"spcAft" if !is_empty => self.spc_target = SpcTarget::After,
            b"spcPts" => {
                // Value is in hundredths of a point.
                if let Some(val) = attr_f64(e, b"val") {
                    if let Some(ref mut para) = self.para {
                        let measure = Measure::pt(val / 100.0);
                        match self.spc_target {
                            SpcTarget::Before => {
                                para.paragraph_property.space_before = Some(measure)
                            }
                            SpcTarget::After => para.paragraph_property.space_after = Some(measure),
                            SpcTarget::None => {}
                        }
                    }
                }
            }
            b"r" if !is_empty && self.para.is_some() => {
                self.run = Some(TextRun::default());
            }
            b"rPr" => {
                if let Some(ref mut run) = self.run {
                    if let Some(sz) = attr_f64(e, b"sz") {
                        // Font size is in hundredths of a point.
                        run.style.font_size = Some(Measure::pt(sz / 100.0));
                    }
                    if attr_bool(e, b"b") {
                        run.style.bold = true;
                    }
                    if attr_bool(e, b"i") {
                        run.style.italic = true;
                    }
                    if let Some(u) = attr_value(e, b"u") {
                        run.style.underline = Some(Underline {
                            form: u,
                            color: None,
                        });
                    }
                    if !is_empty {
                        self.in_rpr = true;
                    }
                }
            }
            b"latin" if self.in_rpr => {
                if let Some(ref mut run) = self.run {
                    if let Some(typeface) = attr_value(e, b"typeface") {
                        run.style.font_family = Some(typeface);
                    }
                }
            }
            b"t" if !is_empty && self.run.is_some() => self.in_t = true,
            b"br" => {
                // Line break: a span without a run.
                if let Some(ref mut para) = self.para {
                    para.text_spans.push(TextSpan::marker());
                }
            }
            b"blip" => {
                if let Building::Pic(ref mut pic) = self.building {
                    if let Some(embed) = attr_value(e, b"embed") {
                        pic.rel_id = Some(embed);
                    }
                }
            }
            _ => {}
        }
    }

    fn on_close(&mut self, local: &[u8]) {
        match local {
            b"bg" => self.in_bg = false,
            b"sp" => self.finish_shape(),
            b"pic" => self.finish_pic(),
            b"solidFill" => self.fill_target = FillTarget::None,
            b"ln" => self.in_ln = false,
            b"custGeom" => self.in_custgeom = false,
            b"moveTo" | b"lnTo" | b"cubicBezTo" | b"quadBezTo" => self.flush_cmd(),
            b"txBody" => self.in_txbody = false,
            b"p" => {
                if let Some(para) = self.para.take() {
                    self.push_paragraph(para);
                }
            }
            b"r" => {
                if let Some(run) = self.run.take() {
                    if let Some(ref mut para) = self.para {
                        para.text_spans.push(TextSpan::run(run));
                    }
                }
            }
            b"rPr" => self.in_rpr = false,
            b"t" => self.in_t = false,
            b"spcBef" | b"spcAft" => self.spc_target = SpcTarget::None,
            _ => {}
        }
    }

    fn frame_mut(&mut self) -> Option<&mut FrameAcc> {
        match &mut self.building {
            Building::Shape(shape) => Some(&mut shape.frame),
            Building::Pic(pic) => Some(&mut pic.frame),
            Building::None => None,
        }
    }

    fn assign_color(&mut self, color: String) {
        match self.fill_target {
            FillTarget::Background => self.background = Some(Fill::solid(color)),
            FillTarget::Shape => {
                if let Building::Shape(ref mut shape) = self.building {
                    shape.fill = Some(color);
                }
            }
            FillTarget::Line => {
                if let Building::Shape(ref mut shape) = self.building {
                    shape.line_color = Some(color);
                }
            }
            FillTarget::Run => {
                if let Some(ref mut run) = self.run {
                    run.style.foreground_color = Some(color);
                }
            }
            FillTarget::None => {}
        }
    }

    fn push_paragraph(&mut self, para: Paragraph) {
        if let Building::Shape(ref mut shape) = self.building {
            if let Some(ref mut body) = shape.body {
                body.paragraphs.push(para);
            }
        }
    }

    /// Flush the current path command, scaled to a 0-100 viewBox.
    fn flush_cmd(&mut self) {
        let Some(cmd) = self.cmd.take() else {
            return;
        };
        let (path_w, path_h) = (self.path_w, self.path_h);
        let Building::Shape(ref mut shape) = self.building else {
            return;
        };

        let scale = |(x, y): (f64, f64)| {
            let sx = if path_w > 0.0 { x * 100.0 / path_w } else { x };
            let sy = if path_h > 0.0 { y * 100.0 / path_h } else { y };
            format!("{} {}", fmt_coord(sx), fmt_coord(sy))
        };

        let coords: Vec<String> = cmd.points.into_iter().map(scale).collect();
        if !coords.is_empty() {
            shape
                .path_data
                .push(format!("{} {}", cmd.letter, coords.join(" ")));
        }
    }

    fn finish_shape(&mut self) {
        let Building::Shape(shape) = std::mem::take(&mut self.building) else {
            return;
        };
        let shape = *shape;

        let has_text = shape
            .body
            .as_ref()
            .map(|b| !b.is_empty())
            .unwrap_or(false);

        // Text wins over geometry: a custom-geometry shape that carries
        // text is emitted as a text shape.
        let content = if has_text {
            ElementContent::Shape(ShapeContent {
                shape_type: shape.shape_type,
                text: shape.body,
            })
        } else if !shape.path_data.is_empty() {
            ElementContent::Path(PathContent {
                path_data: shape.path_data,
            })
        } else {
            ElementContent::Shape(ShapeContent {
                shape_type: shape.shape_type,
                text: None,
            })
        };

        let outline = if shape.line_color.is_some() || shape.line_width.is_some() {
            Some(crate::model::Outline {
                outline_fill: shape.line_color.map(Fill::solid),
                weight: shape.line_width.map(Measure::px),
            })
        } else {
            None
        };

        let order = self.next_order();
        self.elements.push(PageElement {
            name: shape.name,
            size: Size::px(shape.frame.cx, shape.frame.cy),
            position: Position::px(shape.frame.x, shape.frame.y),
            order,
            rotate: (shape.frame.rotation != 0.0).then_some(shape.frame.rotation),
            flip_h: shape.frame.flip_h,
            flip_v: shape.frame.flip_v,
            fill: shape.fill.map(Fill::solid),
            outline,
            content,
        });
    }

    fn finish_pic(&mut self) {
        let Building::Pic(pic) = std::mem::take(&mut self.building) else {
            return;
        };
        let pic = *pic;

        // A picture without a resolvable image relationship is dropped.
        let Some(target) = pic.rel_id.as_ref().and_then(|id| self.rels.get(id)) else {
            return;
        };

        let resolved = resolve_target(self.slide_dir, target);
        let content_url = resolved
            .strip_prefix("ppt/")
            .unwrap_or(&resolved)
            .to_string();

        let order = self.next_order();
        self.elements.push(PageElement {
            name: pic.name.clone(),
            size: Size::px(pic.frame.cx, pic.frame.cy),
            position: Position::px(pic.frame.x, pic.frame.y),
            order,
            rotate: (pic.frame.rotation != 0.0).then_some(pic.frame.rotation),
            flip_h: pic.frame.flip_h,
            flip_v: pic.frame.flip_v,
            fill: None,
            outline: None,
            content: ElementContent::Image(ImageContent {
                name: pic.name,
                content_url,
                clip_path: Vec::new(),
                crop_properties: None,
            }),
        });
    }

    fn next_order(&mut self) -> i64 {
        let order = self.order;
        self.order += 1;
        order
    }
}

impl PathCmd {
    fn new(letter: char) -> Self {
        Self {
            letter,
            points: Vec::new(),
        }
    }
}

/// Read body insets (EMU) into pixel padding measures.
fn read_body_insets(e: &BytesStart<'_>) -> BodyProperties {
    let inset = |name: &[u8]| Measure::px(attr_f64(e, name).map(emu_to_px).unwrap_or(0.0));
    BodyProperties {
        padding_top: inset(b"tIns"),
        padding_right: inset(b"rIns"),
        padding_bottom: inset(b"bIns"),
        padding_left: inset(b"lIns"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alignment;

    const SLIDE_NS: &str = r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#;

    fn slide_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0"?><p:sld {}><p:cSld>{}</p:cSld></p:sld>"#,
            SLIDE_NS, body
        )
    }

    fn parse(body: &str) -> SlideDocument {
        parse_slide_xml(&slide_xml(body), &HashMap::new(), "ppt/slides").unwrap()
    }

    #[test]
    fn test_background_color() {
        let doc = parse(
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></p:bgPr></p:bg>
               <p:spTree/>"#,
        );
        let fill = doc.background_fill().unwrap();
        assert!(fill.is_solid());
        assert_eq!(fill.solid_color(), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn test_filled_rectangle() {
        let doc = parse(
            r#"<p:spTree><p:sp>
                 <p:nvSpPr><p:cNvPr id="2" name="Box 1"/></p:nvSpPr>
                 <p:spPr>
                   <a:xfrm rot="2700000" flipH="1">
                     <a:off x="914400" y="457200"/>
                     <a:ext cx="1828800" cy="914400"/>
                   </a:xfrm>
                   <a:prstGeom prst="rect"/>
                   <a:solidFill><a:srgbClr val="FF0000"/></a:solidFill>
                   <a:ln w="19050"><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:ln>
                 </p:spPr>
               </p:sp></p:spTree>"#,
        );

        assert_eq!(doc.page_elements.len(), 1);
        let el = &doc.page_elements[0];
        assert_eq!(el.name, "Box 1");
        assert_eq!(el.position.x.value, 96.0);
        assert_eq!(el.position.y.value, 48.0);
        assert_eq!(el.size.width.value, 192.0);
        assert_eq!(el.size.height.value, 96.0);
        assert_eq!(el.rotate, Some(45.0));
        assert!(el.flip_h);
        assert!(!el.flip_v);
        assert_eq!(
            el.fill.as_ref().unwrap().solid_color(),
            Some("rgb(255, 0, 0)")
        );

        let outline = el.outline.as_ref().unwrap();
        assert_eq!(outline.weight.unwrap().value, 2.0);
        assert_eq!(
            outline.outline_fill.as_ref().unwrap().solid_color(),
            Some("rgb(0, 0, 0)")
        );

        match &el.content {
            ElementContent::Shape(s) => {
                assert_eq!(s.shape_type.as_deref(), Some("RECTANGLE"));
                assert!(s.text.is_none());
            }
            other => panic!("expected shape, got {:?}", other),
        }
    }

    #[test]
    fn test_text_body() {
        let doc = parse(
            r#"<p:spTree><p:sp>
                 <p:nvSpPr><p:cNvPr id="3" name="Title 1"/></p:nvSpPr>
                 <p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="9525" cy="9525"/></a:xfrm></p:spPr>
                 <p:txBody>
                   <a:bodyPr lIns="91440" tIns="45720" rIns="91440" bIns="45720"/>
                   <a:p>
                     <a:pPr algn="ctr">
                       <a:spcBef><a:spcPts val="600"/></a:spcBef>
                     </a:pPr>
                     <a:r>
                       <a:rPr sz="1800" b="1" u="sng">
                         <a:solidFill><a:srgbClr val="112233"/></a:solidFill>
                         <a:latin typeface="Arial"/>
                       </a:rPr>
                       <a:t>Hello</a:t>
                     </a:r>
                     <a:br/>
                     <a:r><a:rPr i="1"/><a:t>world</a:t></a:r>
                   </a:p>
                 </p:txBody>
               </p:sp></p:spTree>"#,
        );

        let el = &doc.page_elements[0];
        let body = match &el.content {
            ElementContent::Shape(s) => s.text.as_ref().unwrap(),
            other => panic!("expected shape with text, got {:?}", other),
        };

        // 91440 EMU = 9.6 px, 45720 EMU = 4.8 px
        assert!((body.body_property.padding_left.value - 9.6).abs() < 1e-9);
        assert!((body.body_property.padding_top.value - 4.8).abs() < 1e-9);

        assert_eq!(body.paragraphs.len(), 1);
        let para = &body.paragraphs[0];
        assert_eq!(para.paragraph_property.alignment, Alignment::Center);
        assert_eq!(
            para.paragraph_property.space_before.unwrap(),
            Measure::pt(6.0)
        );

        // run, break marker, run
        assert_eq!(para.text_spans.len(), 3);
        let first = para.text_spans[0].text_run.as_ref().unwrap();
        assert_eq!(first.content, "Hello");
        assert!(first.style.bold);
        assert_eq!(first.style.font_size.unwrap(), Measure::pt(18.0));
        assert_eq!(
            first.style.foreground_color.as_deref(),
            Some("rgb(17, 34, 51)")
        );
        assert_eq!(first.style.font_family.as_deref(), Some("Arial"));
        assert_eq!(first.style.underline.as_ref().unwrap().form, "sng");

        assert!(para.text_spans[1].text_run.is_none());

        let second = para.text_spans[2].text_run.as_ref().unwrap();
        assert_eq!(second.content, "world");
        assert!(second.style.italic);
        assert!(!second.style.bold);
    }

    #[test]
    fn test_custom_geometry() {
        let doc = parse(
            r#"<p:spTree><p:sp>
                 <p:nvSpPr><p:cNvPr id="4" name="Arrow"/></p:nvSpPr>
                 <p:spPr>
                   <a:xfrm><a:off x="0" y="0"/><a:ext cx="9525" cy="9525"/></a:xfrm>
                   <a:custGeom>
                     <a:pathLst>
                       <a:path w="200" h="200">
                         <a:moveTo><a:pt x="0" y="0"/></a:moveTo>
                         <a:lnTo><a:pt x="200" y="100"/></a:lnTo>
                         <a:close/>
                       </a:path>
                     </a:pathLst>
                   </a:custGeom>
                 </p:spPr>
               </p:sp></p:spTree>"#,
        );

        match &doc.page_elements[0].content {
            ElementContent::Path(p) => {
                assert_eq!(p.path_data, vec!["M 0 0", "L 100 50", "Z"]);
            }
            other => panic!("expected path, got {:?}", other),
        }
    }

    #[test]
    fn test_picture_resolved_through_rels() {
        let mut rels = HashMap::new();
        rels.insert("rId2".to_string(), "../media/image1.png".to_string());

        let xml = slide_xml(
            r#"<p:spTree><p:pic>
                 <p:nvPicPr><p:cNvPr id="5" name="Picture 1"/></p:nvPicPr>
                 <p:blipFill><a:blip r:embed="rId2"/></p:blipFill>
                 <p:spPr><a:xfrm><a:off x="9525" y="9525"/><a:ext cx="95250" cy="95250"/></a:xfrm></p:spPr>
               </p:pic></p:spTree>"#,
        );
        let doc = parse_slide_xml(&xml, &rels, "ppt/slides").unwrap();

        let el = &doc.page_elements[0];
        match &el.content {
            ElementContent::Image(image) => {
                assert_eq!(image.content_url, "media/image1.png");
                assert_eq!(image.name, "Picture 1");
            }
            other => panic!("expected image, got {:?}", other),
        }
        assert_eq!(el.position.x.value, 1.0);
        assert_eq!(el.size.width.value, 10.0);
    }

    #[test]
    fn test_picture_without_rel_dropped() {
        let doc = parse(
            r#"<p:spTree><p:pic>
                 <p:nvPicPr><p:cNvPr id="5" name="Orphan"/></p:nvPicPr>
                 <p:blipFill><a:blip r:embed="rId9"/></p:blipFill>
               </p:pic></p:spTree>"#,
        );
        assert!(doc.page_elements.is_empty());
    }

    #[test]
    fn test_z_order_follows_tree_order() {
        let doc = parse(
            r#"<p:spTree>
                 <p:sp><p:nvSpPr><p:cNvPr id="1" name="a"/></p:nvSpPr></p:sp>
                 <p:sp><p:nvSpPr><p:cNvPr id="2" name="b"/></p:nvSpPr></p:sp>
                 <p:sp><p:nvSpPr><p:cNvPr id="3" name="c"/></p:nvSpPr></p:sp>
               </p:spTree>"#,
        );
        let orders: Vec<i64> = doc.page_elements.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(rgb_from_hex("FF0000").as_deref(), Some("rgb(255, 0, 0)"));
        assert_eq!(rgb_from_hex("ffffff").as_deref(), Some("rgb(255, 255, 255)"));
        assert_eq!(rgb_from_hex("xyz"), None);
    }
}
