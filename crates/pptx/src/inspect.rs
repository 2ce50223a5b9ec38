//! Reads a `.pptx` package back into plain slide and shape summaries for
//! assertions on written output.

use deck_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// A text run as stored in the package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub text: String,
    /// Size in hundredths of a point.
    pub size: Option<u32>,
    pub bold: bool,
    /// `RRGGBB` fill color.
    pub color: Option<String>,
    pub typeface: Option<String>,
}

/// One shape of a slide's tree, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeSummary {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
    /// Paragraph texts joined with `\n`.
    pub text: String,
    pub runs: Vec<RunSummary>,
    pub picture: bool,
    /// Relationship id of a picture's image.
    pub embed: Option<String>,
    /// `algn` of the first aligned paragraph.
    pub alignment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSummary {
    pub number: usize,
    pub shapes: Vec<ShapeSummary>,
}

impl SlideSummary {
    pub fn shape(&self, name: &str) -> Option<&ShapeSummary> {
        self.shapes.iter().find(|s| s.name == name)
    }

    pub fn pictures(&self) -> impl Iterator<Item = &ShapeSummary> {
        self.shapes.iter().filter(|s| s.picture)
    }
}

/// Everything read back from a package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageSummary {
    pub part_names: Vec<String>,
    pub slide_size: (i64, i64),
    pub slides: Vec<SlideSummary>,
}

/// Reader for `.pptx` packages.
pub struct PptxInspector;

impl PptxInspector {
    pub fn new() -> Self {
        Self
    }

    /// Read a package from `reader`, slides in presentation order.
    pub fn inspect<R: Read + Seek>(&self, reader: R) -> Result<PackageSummary> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;
        let part_names = archive.file_names().map(str::to_string).collect();

        let presentation = read_part(&mut archive, "ppt/presentation.xml")?;
        let (slide_size, slide_rels) = read_presentation(&presentation)?;
        let targets = read_relationships(&read_part(
            &mut archive,
            "ppt/_rels/presentation.xml.rels",
        )?)?;

        let mut slides = Vec::with_capacity(slide_rels.len());
        for (idx, rel) in slide_rels.iter().enumerate() {
            let target = targets
                .iter()
                .find(|(id, _)| id == rel)
                .map(|(_, target)| target)
                .ok_or_else(|| Error::XmlError(format!("Slide relationship {} missing", rel)))?;
            let content = read_part(&mut archive, &format!("ppt/{}", target))?;
            slides.push(SlideSummary {
                number: idx + 1,
                shapes: extract_shapes_from_xml(&content)?,
            });
        }

        Ok(PackageSummary {
            part_names,
            slide_size,
            slides,
        })
    }
}

impl Default for PptxInspector {
    fn default() -> Self {
        Self::new()
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::ZipError(format!("{}: {}", path, e)))?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Slide size and the relationship ids of `sldIdLst`, in order.
fn read_presentation(xml: &str) -> Result<((i64, i64), Vec<String>)> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut size = (0, 0);
    let mut slides = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"sldSz" => {
                    size = (
                        attr_i64(e, b"cx").unwrap_or_default(),
                        attr_i64(e, b"cy").unwrap_or_default(),
                    )
                }
                b"sldId" => slides.extend(attr(e, b"r:id")),
                _ => {}
            },
            Ok(Event::Eof) => return Ok((size, slides)),
            Err(e) => return Err(Error::XmlError(format!("presentation.xml: {}", e))),
            _ => {}
        }
    }
}

/// `(Id, Target)` pairs of a relationships part.
fn read_relationships(xml: &str) -> Result<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut rels = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                if let (Some(id), Some(target)) = (attr(e, b"Id"), attr(e, b"Target")) {
                    rels.push((id, target));
                }
            }
            Ok(Event::Eof) => return Ok(rels),
            Err(e) => return Err(Error::XmlError(format!("relationships: {}", e))),
            _ => {}
        }
    }
}

/// Walk one slide's XML, collecting every `sp` and `pic`.
fn extract_shapes_from_xml(xml_content: &str) -> Result<Vec<ShapeSummary>> {
    let mut shapes = Vec::new();
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(true);

    let mut current_shape: Option<ShapeSummary> = None;
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current_run: Option<RunSummary> = None;
    let mut in_text_body = false;
    let mut in_run_props = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::XmlError(format!("Error parsing slide: {}", e)))?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = e.local_name();
                if current_shape.is_none() {
                    if matches!(name.as_ref(), b"sp" | b"pic") && !is_empty {
                        current_shape = Some(ShapeSummary {
                            picture: name.as_ref() == b"pic",
                            ..Default::default()
                        });
                    }
                    continue;
                }
                let Some(shape) = current_shape.as_mut() else {
                    continue;
                };

                match name.as_ref() {
                    b"cNvPr" => shape.name = attr(e, b"name").unwrap_or_default(),
                    b"off" => {
                        shape.x = attr_i64(e, b"x").unwrap_or_default();
                        shape.y = attr_i64(e, b"y").unwrap_or_default();
                    }
                    b"ext" => {
                        shape.cx = attr_i64(e, b"cx").unwrap_or_default();
                        shape.cy = attr_i64(e, b"cy").unwrap_or_default();
                    }
                    b"blip" => shape.embed = attr(e, b"r:embed"),
                    b"txBody" => in_text_body = true,
                    b"p" if in_text_body => paragraphs.push(String::new()),
                    b"pPr" if shape.alignment.is_none() => shape.alignment = attr(e, b"algn"),
                    b"r" => current_run = Some(RunSummary::default()),
                    b"rPr" => {
                        if let Some(run) = current_run.as_mut() {
                            run.size = attr(e, b"sz").and_then(|v| v.parse().ok());
                            run.bold = attr(e, b"b").is_some_and(|v| v == "1");
                        }
                        in_run_props = !is_empty;
                    }
                    b"srgbClr" if in_run_props => {
                        if let Some(run) = current_run.as_mut() {
                            run.color = attr(e, b"val");
                        }
                    }
                    b"latin" if in_run_props => {
                        if let Some(run) = current_run.as_mut() {
                            run.typeface = attr(e, b"typeface");
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(ref e) => {
                if let Some(run) = current_run.as_mut() {
                    let text = e.unescape().unwrap_or_default();
                    run.text.push_str(&text);
                    if let Some(paragraph) = paragraphs.last_mut() {
                        paragraph.push_str(&text);
                    }
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"sp" | b"pic" => {
                    if let Some(mut shape) = current_shape.take() {
                        shape.text = paragraphs.join("\n");
                        shapes.push(shape);
                    }
                    paragraphs.clear();
                    in_text_body = false;
                }
                b"txBody" => in_text_body = false,
                b"rPr" => in_run_props = false,
                b"r" => {
                    if let (Some(shape), Some(run)) = (current_shape.as_mut(), current_run.take()) {
                        shape.runs.push(run);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(shapes)
}

fn attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

fn attr_i64(e: &BytesStart, key: &[u8]) -> Option<i64> {
    attr(e, key).and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_shapes() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p" xmlns:r="r"><p:cSld><p:spTree>
            <p:nvGrpSpPr><p:cNvPr id="1" name=""/></p:nvGrpSpPr>
            <p:pic><p:nvPicPr><p:cNvPr id="5" name="Picture 4"/></p:nvPicPr>
              <p:blipFill><a:blip r:embed="rId2"/></p:blipFill>
              <p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="100" cy="50"/></a:xfrm></p:spPr></p:pic>
            <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/></p:nvSpPr>
              <p:spPr><a:xfrm><a:off x="10" y="20"/><a:ext cx="30" cy="40"/></a:xfrm></p:spPr>
              <p:txBody><a:bodyPr/><a:p><a:pPr algn="l"/><a:r><a:rPr sz="3200" b="1"><a:solidFill><a:srgbClr val="FF0000"/></a:solidFill><a:latin typeface="Tenorite"/></a:rPr><a:t>Hello &amp; bye</a:t></a:r></a:p><a:p/><a:p><a:r><a:rPr sz="1800"/><a:t>again</a:t></a:r></a:p></p:txBody></p:sp>
            </p:spTree></p:cSld></p:sld>"#;

        let shapes = extract_shapes_from_xml(xml).unwrap();
        assert_eq!(shapes.len(), 2);

        let pic = &shapes[0];
        assert!(pic.picture);
        assert_eq!(pic.embed.as_deref(), Some("rId2"));
        assert_eq!((pic.cx, pic.cy), (100, 50));

        let title = &shapes[1];
        assert_eq!(title.name, "Title 1");
        assert_eq!((title.x, title.y), (10, 20));
        assert_eq!(title.text, "Hello & bye\n\nagain");
        assert_eq!(title.alignment.as_deref(), Some("l"));
        assert_eq!(title.runs.len(), 2);
        assert_eq!(
            title.runs[0],
            RunSummary {
                text: "Hello & bye".to_string(),
                size: Some(3200),
                bold: true,
                color: Some("FF0000".to_string()),
                typeface: Some("Tenorite".to_string()),
            }
        );
        assert!(!title.runs[1].bold);
    }
}
