//! Serializes a [`PptxDeck`] into an Office Open XML package.

use crate::catalog::{LayoutSpec, PlaceholderSpec};
use crate::deck::{Media, PptxDeck, PptxSlide, Shape, ShapeBody};
use deck_core::{Alignment, Error, Paragraph, PlaceholderRole, Rect, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::{Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const REL_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_MASTER: &str = "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_LAYOUT: &str = "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

/// First id handed to slide layouts in the master's id list.
const LAYOUT_ID_BASE: u64 = 2_147_483_649;

fn xml_error(e: impl std::fmt::Display) -> Error {
    Error::XmlError(e.to_string())
}

fn zip_error(e: impl std::fmt::Display) -> Error {
    Error::ZipError(e.to_string())
}

/// Drop characters XML 1.0 cannot carry, even escaped.
fn xml_chars(text: &str) -> Cow<'_, str> {
    let allowed = |c: char| {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
    };
    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| allowed(c)).collect())
    }
}

/// Thin wrapper over the quick-xml writer for one package part.
struct Part {
    writer: Writer<Vec<u8>>,
}

impl Part {
    fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_error)?;
        Ok(Self { writer })
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer
            .write_event(Event::Start(start))
            .map_err(xml_error)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let start = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer
            .write_event(Event::Empty(start))
            .map_err(xml_error)
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_error)
    }

    fn text(&mut self, text: &str) -> Result<()> {
        let text = xml_chars(text);
        self.writer
            .write_event(Event::Text(BytesText::new(&text)))
            .map_err(xml_error)
    }

    /// `<name>text</name>`
    fn leaf(&mut self, name: &str, text: &str) -> Result<()> {
        self.open(name, &[])?;
        self.text(text)?;
        self.close(name)
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

/// Distinct images across the deck, each stored once under `ppt/media`.
struct MediaStore<'a> {
    entries: Vec<&'a Media>,
}

impl<'a> MediaStore<'a> {
    fn collect(deck: &'a PptxDeck) -> Self {
        let mut entries: Vec<&Media> = Vec::new();
        for shape in deck.slides().iter().flat_map(|s| s.shapes.iter()) {
            if let ShapeBody::Picture { media, .. } = &shape.body {
                if !entries.iter().any(|m| m.data == media.data) {
                    entries.push(media);
                }
            }
        }
        Self { entries }
    }

    fn index_of(&self, media: &Media) -> usize {
        self.entries
            .iter()
            .position(|m| m.data == media.data)
            .unwrap_or_default()
    }

    fn file_name(&self, index: usize) -> String {
        format!("image{}.{}", index + 1, self.entries[index].format.extension())
    }
}

/// Write the deck as a complete `.pptx` package into `inner`.
pub fn write_package<W: Write + Seek>(deck: &PptxDeck, inner: W) -> Result<W> {
    let mut zip = ZipWriter::new(inner);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let media = MediaStore::collect(deck);

    let mut put = |name: &str, data: &[u8]| -> Result<()> {
        zip.start_file(name, options).map_err(zip_error)?;
        zip.write_all(data)?;
        Ok(())
    };

    put("[Content_Types].xml", &content_types_xml(deck, &media)?)?;
    put("_rels/.rels", &package_rels_xml()?)?;
    put("ppt/presentation.xml", &presentation_xml(deck)?)?;
    put("ppt/_rels/presentation.xml.rels", &presentation_rels_xml(deck)?)?;
    put("ppt/slideMasters/slideMaster1.xml", &slide_master_xml(deck.layouts())?)?;
    put(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &slide_master_rels_xml(deck.layouts())?,
    )?;
    put("ppt/theme/theme1.xml", THEME_XML.as_bytes())?;

    for (i, layout) in deck.layouts().iter().enumerate() {
        put(
            &format!("ppt/slideLayouts/slideLayout{}.xml", i + 1),
            &slide_layout_xml(layout)?,
        )?;
        put(
            &format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", i + 1),
            &relationships_xml(&[("rId1", REL_MASTER, "../slideMasters/slideMaster1.xml".into())])?,
        )?;
    }

    for (i, slide) in deck.slides().iter().enumerate() {
        let rels = SlideRels::new(deck, slide, &media);
        put(
            &format!("ppt/slides/slide{}.xml", i + 1),
            &slide_xml(slide, &rels, &media)?,
        )?;
        put(
            &format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            &rels.to_xml(&media)?,
        )?;
    }

    for (i, entry) in media.entries.iter().enumerate() {
        put(&format!("ppt/media/{}", media.file_name(i)), &entry.data)?;
    }

    zip.finish().map_err(zip_error)
}

fn content_types_xml(deck: &PptxDeck, media: &MediaStore) -> Result<Vec<u8>> {
    let mut part = Part::new()?;
    part.open("Types", &[("xmlns", NS_TYPES)])?;
    part.empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    part.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;

    let mut formats = Vec::new();
    for format in media.entries.iter().map(|m| m.format) {
        if !formats.contains(&format) {
            formats.push(format);
            part.empty(
                "Default",
                &[
                    ("Extension", format.extension()),
                    ("ContentType", format.content_type()),
                ],
            )?;
        }
    }

    let mut overrides = vec![
        ("/ppt/presentation.xml".to_string(), CT_PRESENTATION),
        ("/ppt/slideMasters/slideMaster1.xml".to_string(), CT_MASTER),
        ("/ppt/theme/theme1.xml".to_string(), CT_THEME),
    ];
    overrides.extend(
        (1..=deck.layouts().len()).map(|i| (format!("/ppt/slideLayouts/slideLayout{i}.xml"), CT_LAYOUT)),
    );
    overrides.extend(
        (1..=deck.slides().len()).map(|i| (format!("/ppt/slides/slide{i}.xml"), CT_SLIDE)),
    );
    for (name, content_type) in &overrides {
        part.empty("Override", &[("PartName", name.as_str()), ("ContentType", *content_type)])?;
    }

    part.close("Types")?;
    Ok(part.finish())
}

fn relationships_xml(rels: &[(&str, &str, String)]) -> Result<Vec<u8>> {
    let mut part = Part::new()?;
    part.open("Relationships", &[("xmlns", NS_RELS)])?;
    for (id, kind, target) in rels {
        part.empty(
            "Relationship",
            &[("Id", *id), ("Type", *kind), ("Target", target.as_str())],
        )?;
    }
    part.close("Relationships")?;
    Ok(part.finish())
}

fn package_rels_xml() -> Result<Vec<u8>> {
    relationships_xml(&[("rId1", REL_DOCUMENT, "ppt/presentation.xml".into())])
}

fn presentation_rels_xml(deck: &PptxDeck) -> Result<Vec<u8>> {
    let ids: Vec<String> = (0..deck.slides().len()).map(|i| format!("rId{}", i + 3)).collect();
    let mut rels = vec![
        ("rId1", REL_MASTER, "slideMasters/slideMaster1.xml".to_string()),
        ("rId2", REL_THEME, "theme/theme1.xml".to_string()),
    ];
    rels.extend(
        ids.iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), REL_SLIDE, format!("slides/slide{}.xml", i + 1))),
    );
    relationships_xml(&rels)
}

fn presentation_xml(deck: &PptxDeck) -> Result<Vec<u8>> {
    let (width, height) = deck.size();
    let mut part = Part::new()?;
    part.open(
        "p:presentation",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P), ("saveSubsetFonts", "1")],
    )?;
    part.open("p:sldMasterIdLst", &[])?;
    part.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    part.close("p:sldMasterIdLst")?;

    if !deck.slides().is_empty() {
        part.open("p:sldIdLst", &[])?;
        for i in 0..deck.slides().len() {
            let id = (256 + i).to_string();
            let rel = format!("rId{}", i + 3);
            part.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel.as_str())])?;
        }
        part.close("p:sldIdLst")?;
    }

    let (cx, cy) = (width.to_string(), height.to_string());
    part.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    part.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    part.close("p:presentation")?;
    Ok(part.finish())
}

fn slide_master_rels_xml(layouts: &[LayoutSpec]) -> Result<Vec<u8>> {
    let ids: Vec<String> = (1..=layouts.len()).map(|i| format!("rId{i}")).collect();
    let theme_id = format!("rId{}", layouts.len() + 1);
    let mut rels: Vec<(&str, &str, String)> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), REL_LAYOUT, format!("../slideLayouts/slideLayout{}.xml", i + 1)))
        .collect();
    rels.push((theme_id.as_str(), REL_THEME, "../theme/theme1.xml".to_string()));
    relationships_xml(&rels)
}

fn slide_master_xml(layouts: &[LayoutSpec]) -> Result<Vec<u8>> {
    let mut part = Part::new()?;
    part.open("p:sldMaster", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
    part.open("p:cSld", &[])?;
    part.open("p:bg", &[])?;
    part.open("p:bgRef", &[("idx", "1001")])?;
    part.empty("a:schemeClr", &[("val", "bg1")])?;
    part.close("p:bgRef")?;
    part.close("p:bg")?;
    part.open("p:spTree", &[])?;
    group_header(&mut part)?;
    part.close("p:spTree")?;
    part.close("p:cSld")?;

    part.empty(
        "p:clrMap",
        &[
            ("bg1", "lt1"),
            ("tx1", "dk1"),
            ("bg2", "lt2"),
            ("tx2", "dk2"),
            ("accent1", "accent1"),
            ("accent2", "accent2"),
            ("accent3", "accent3"),
            ("accent4", "accent4"),
            ("accent5", "accent5"),
            ("accent6", "accent6"),
            ("hlink", "hlink"),
            ("folHlink", "folHlink"),
        ],
    )?;

    part.open("p:sldLayoutIdLst", &[])?;
    for i in 0..layouts.len() {
        let id = (LAYOUT_ID_BASE + i as u64).to_string();
        let rel = format!("rId{}", i + 1);
        part.empty("p:sldLayoutId", &[("id", id.as_str()), ("r:id", rel.as_str())])?;
    }
    part.close("p:sldLayoutIdLst")?;

    part.open("p:txStyles", &[])?;
    for (style, size) in [("p:titleStyle", "4400"), ("p:bodyStyle", "2800"), ("p:otherStyle", "1800")] {
        part.open(style, &[])?;
        part.open("a:lvl1pPr", &[])?;
        part.open("a:defRPr", &[("sz", size)])?;
        part.empty("a:latin", &[("typeface", "+mn-lt")])?;
        part.close("a:defRPr")?;
        part.close("a:lvl1pPr")?;
        part.close(style)?;
    }
    part.close("p:txStyles")?;
    part.close("p:sldMaster")?;
    Ok(part.finish())
}

fn slide_layout_xml(layout: &LayoutSpec) -> Result<Vec<u8>> {
    let mut part = Part::new()?;
    part.open(
        "p:sldLayout",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("type", layout.kind),
            ("preserve", "1"),
        ],
    )?;
    part.open("p:cSld", &[("name", layout.name)])?;
    part.open("p:spTree", &[])?;
    group_header(&mut part)?;
    for (spec, id) in layout.placeholders.iter().zip(2u32..) {
        layout_placeholder(&mut part, spec, id)?;
    }
    part.close("p:spTree")?;
    part.close("p:cSld")?;
    part.open("p:clrMapOvr", &[])?;
    part.empty("a:masterClrMapping", &[])?;
    part.close("p:clrMapOvr")?;
    part.close("p:sldLayout")?;
    Ok(part.finish())
}

fn layout_placeholder(part: &mut Part, spec: &PlaceholderSpec, id: u32) -> Result<()> {
    let shape = Shape {
        id,
        name: spec.name.to_string(),
        bounds: spec.bounds,
        body: ShapeBody::Placeholder {
            role: spec.role,
            idx: spec.idx,
            vertical: spec.vertical,
            paragraphs: Vec::new(),
        },
    };
    text_shape(part, &shape)
}

/// Relationship ids of one slide: its layout, then each distinct image.
struct SlideRels {
    layout: Option<usize>,
    images: Vec<usize>,
}

impl SlideRels {
    fn new(deck: &PptxDeck, slide: &PptxSlide, media: &MediaStore) -> Self {
        let layout = slide
            .layout
            .or_else(|| deck.layouts().iter().position(|l| l.kind == "blank"))
            .or_else(|| (!deck.layouts().is_empty()).then_some(0));
        let mut images = Vec::new();
        for shape in &slide.shapes {
            if let ShapeBody::Picture { media: m, .. } = &shape.body {
                let index = media.index_of(m);
                if !images.contains(&index) {
                    images.push(index);
                }
            }
        }
        Self { layout, images }
    }

    fn image_rel(&self, media_index: usize) -> String {
        let pos = self
            .images
            .iter()
            .position(|&i| i == media_index)
            .unwrap_or_default();
        format!("rId{}", pos + 2)
    }

    fn to_xml(&self, media: &MediaStore) -> Result<Vec<u8>> {
        let mut rels = Vec::new();
        if let Some(layout) = self.layout {
            rels.push((
                "rId1".to_string(),
                REL_LAYOUT,
                format!("../slideLayouts/slideLayout{}.xml", layout + 1),
            ));
        }
        for &index in &self.images {
            rels.push((
                self.image_rel(index),
                REL_IMAGE,
                format!("../media/{}", media.file_name(index)),
            ));
        }
        let borrowed: Vec<(&str, &str, String)> = rels
            .iter()
            .map(|(id, kind, target)| (id.as_str(), *kind, target.clone()))
            .collect();
        relationships_xml(&borrowed)
    }
}

fn slide_xml(slide: &PptxSlide, rels: &SlideRels, store: &MediaStore) -> Result<Vec<u8>> {
    let mut part = Part::new()?;
    part.open("p:sld", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
    part.open("p:cSld", &[])?;
    part.open("p:spTree", &[])?;
    group_header(&mut part)?;
    for shape in &slide.shapes {
        match &shape.body {
            ShapeBody::Picture { .. } => picture_shape(&mut part, shape, rels, store)?,
            _ => text_shape(&mut part, shape)?,
        }
    }
    part.close("p:spTree")?;
    part.close("p:cSld")?;
    part.open("p:clrMapOvr", &[])?;
    part.empty("a:masterClrMapping", &[])?;
    part.close("p:clrMapOvr")?;
    part.close("p:sld")?;
    Ok(part.finish())
}

/// The group properties every shape tree starts with.
fn group_header(part: &mut Part) -> Result<()> {
    part.open("p:nvGrpSpPr", &[])?;
    part.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    part.empty("p:cNvGrpSpPr", &[])?;
    part.empty("p:nvPr", &[])?;
    part.close("p:nvGrpSpPr")?;
    part.open("p:grpSpPr", &[])?;
    part.open("a:xfrm", &[])?;
    for (name, (a, b)) in [("a:off", ("x", "y")), ("a:ext", ("cx", "cy")), ("a:chOff", ("x", "y")), ("a:chExt", ("cx", "cy"))] {
        part.empty(name, &[(a, "0"), (b, "0")])?;
    }
    part.close("a:xfrm")?;
    part.close("p:grpSpPr")
}

fn transform(part: &mut Part, bounds: Rect) -> Result<()> {
    let (x, y) = (bounds.left.to_string(), bounds.top.to_string());
    let (cx, cy) = (bounds.width.to_string(), bounds.height.to_string());
    part.open("a:xfrm", &[])?;
    part.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    part.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    part.close("a:xfrm")
}

/// Value of a placeholder's `type` attribute; `None` for the default `obj`.
fn placeholder_type(role: PlaceholderRole) -> Option<&'static str> {
    match role {
        PlaceholderRole::Title => Some("title"),
        PlaceholderRole::CenterTitle => Some("ctrTitle"),
        PlaceholderRole::Subtitle => Some("subTitle"),
        PlaceholderRole::Body => Some("body"),
        PlaceholderRole::Object => None,
        PlaceholderRole::Picture => Some("pic"),
        PlaceholderRole::Date => Some("dt"),
        PlaceholderRole::Footer => Some("ftr"),
        PlaceholderRole::SlideNumber => Some("sldNum"),
    }
}

fn text_shape(part: &mut Part, shape: &Shape) -> Result<()> {
    let id = shape.id.to_string();
    let (paragraphs, vertical) = match &shape.body {
        ShapeBody::Placeholder {
            paragraphs,
            vertical,
            ..
        } => (paragraphs.as_slice(), *vertical),
        ShapeBody::TextBox { paragraphs } => (paragraphs.as_slice(), false),
        ShapeBody::Picture { .. } => {
            return Err(Error::UnsupportedOperation(format!(
                "{} is not a text shape",
                shape.name
            )))
        }
    };

    part.open("p:sp", &[])?;
    part.open("p:nvSpPr", &[])?;
    part.empty("p:cNvPr", &[("id", id.as_str()), ("name", shape.name.as_str())])?;
    match &shape.body {
        ShapeBody::Placeholder { role, idx, .. } => {
            part.open("p:cNvSpPr", &[])?;
            part.empty("a:spLocks", &[("noGrp", "1")])?;
            part.close("p:cNvSpPr")?;
            part.open("p:nvPr", &[])?;
            let idx = idx.map(|i| i.to_string());
            let mut attrs = Vec::new();
            if let Some(kind) = placeholder_type(*role) {
                attrs.push(("type", kind));
            }
            if vertical {
                attrs.push(("orient", "vert"));
            }
            if let Some(idx) = idx.as_deref() {
                attrs.push(("idx", idx));
            }
            part.empty("p:ph", &attrs)?;
            part.close("p:nvPr")?;
        }
        _ => {
            part.empty("p:cNvSpPr", &[("txBox", "1")])?;
            part.empty("p:nvPr", &[])?;
        }
    }
    part.close("p:nvSpPr")?;

    part.open("p:spPr", &[])?;
    transform(part, shape.bounds)?;
    if matches!(shape.body, ShapeBody::TextBox { .. }) {
        part.open("a:prstGeom", &[("prst", "rect")])?;
        part.empty("a:avLst", &[])?;
        part.close("a:prstGeom")?;
        part.empty("a:noFill", &[])?;
    }
    part.close("p:spPr")?;

    part.open("p:txBody", &[])?;
    let mut body_attrs = vec![("wrap", "square")];
    if vertical {
        body_attrs.push(("vert", "eaVert"));
    }
    part.empty("a:bodyPr", &body_attrs)?;
    part.empty("a:lstStyle", &[])?;
    if paragraphs.is_empty() {
        part.empty("a:p", &[])?;
    }
    for paragraph in paragraphs {
        write_paragraph(part, paragraph)?;
    }
    part.close("p:txBody")?;
    part.close("p:sp")
}

fn write_paragraph(part: &mut Part, paragraph: &Paragraph) -> Result<()> {
    if paragraph.runs.is_empty() && paragraph.alignment.is_none() {
        return part.empty("a:p", &[]);
    }
    part.open("a:p", &[])?;
    if let Some(alignment) = paragraph.alignment {
        let algn = match alignment {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        };
        part.empty("a:pPr", &[("algn", algn)])?;
    }
    for run in &paragraph.runs {
        let size = ((run.font.size_pt * 100.0).round() as i64).to_string();
        let mut attrs = vec![("lang", "en-US"), ("sz", size.as_str())];
        if run.font.bold {
            attrs.push(("b", "1"));
        }
        attrs.push(("dirty", "0"));

        part.open("a:r", &[])?;
        part.open("a:rPr", &attrs)?;
        if let Some(color) = run.font.color {
            let hex = color.to_hex();
            part.open("a:solidFill", &[])?;
            part.empty("a:srgbClr", &[("val", hex.as_str())])?;
            part.close("a:solidFill")?;
        }
        part.empty("a:latin", &[("typeface", run.font.family.as_str())])?;
        part.close("a:rPr")?;
        part.leaf("a:t", &run.text)?;
        part.close("a:r")?;
    }
    part.close("a:p")
}

fn picture_shape(part: &mut Part, shape: &Shape, rels: &SlideRels, store: &MediaStore) -> Result<()> {
    let ShapeBody::Picture { media, description } = &shape.body else {
        return Err(Error::UnsupportedOperation(format!("{} is not a picture", shape.name)));
    };
    let id = shape.id.to_string();
    let description = xml_chars(description);
    let embed = rels.image_rel(store.index_of(media));

    part.open("p:pic", &[])?;
    part.open("p:nvPicPr", &[])?;
    part.empty(
        "p:cNvPr",
        &[("id", id.as_str()), ("name", shape.name.as_str()), ("descr", &*description)],
    )?;
    part.open("p:cNvPicPr", &[])?;
    part.empty("a:picLocks", &[("noChangeAspect", "1")])?;
    part.close("p:cNvPicPr")?;
    part.empty("p:nvPr", &[])?;
    part.close("p:nvPicPr")?;

    part.open("p:blipFill", &[])?;
    part.empty("a:blip", &[("r:embed", embed.as_str())])?;
    part.open("a:stretch", &[])?;
    part.empty("a:fillRect", &[])?;
    part.close("a:stretch")?;
    part.close("p:blipFill")?;

    part.open("p:spPr", &[])?;
    transform(part, shape.bounds)?;
    part.open("a:prstGeom", &[("prst", "rect")])?;
    part.empty("a:avLst", &[])?;
    part.close("a:prstGeom")?;
    part.close("p:spPr")?;
    part.close("p:pic")
}

const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
      <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#;
