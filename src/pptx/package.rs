//! OOXML package access for PPTX presentations.
//!
//! Thin wrapper over the ZIP container: reads parts, resolves
//! relationships, and orders slides from `presentation.xml`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;

use crate::error::{Error, Result};

/// The main presentation part every PPTX package carries.
const PRESENTATION_PART: &str = "ppt/presentation.xml";

/// A PPTX package opened from a file or from bytes.
pub struct PptxPackage {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl PptxPackage {
    /// Open a package from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Open a package from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        let package = Self {
            archive: RefCell::new(archive),
        };

        if !package.has_part(PRESENTATION_PART) {
            return Err(Error::MissingComponent(PRESENTATION_PART.to_string()));
        }

        Ok(package)
    }

    /// Whether a part exists in the package.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.borrow_mut().by_name(name).is_ok()
    }

    /// Read a part as raw bytes.
    pub fn read_part(&self, name: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(name)
            .map_err(|_| Error::MissingComponent(name.to_string()))?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read a part as an XML string.
    pub fn read_xml(&self, name: &str) -> Result<String> {
        let data = self.read_part(name)?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// All part names in the package.
    pub fn part_names(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(String::from)
            .collect()
    }

    /// Parse the `.rels` file for a part into an id-to-target map.
    ///
    /// A part without relationships yields an empty map.
    pub fn relationships(&self, part: &str) -> Result<HashMap<String, String>> {
        let mut rels = HashMap::new();

        let Ok(xml) = self.read_xml(&rels_path_for(part)) else {
            return Ok(rels);
        };

        let mut reader = quick_xml::Reader::from_str(&xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"Relationship" {
                        let mut id = String::new();
                        let mut target = String::new();

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"Id" => id = String::from_utf8_lossy(&attr.value).to_string(),
                                b"Target" => {
                                    target = String::from_utf8_lossy(&attr.value).to_string()
                                }
                                _ => {}
                            }
                        }

                        if !id.is_empty() && !target.is_empty() {
                            rels.insert(id, target);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Slide part paths in presentation order.
    ///
    /// Reads `presentation.xml` for the `p:sldId` sequence and resolves
    /// each `r:id` through the presentation relationships.
    pub fn slide_paths(&self) -> Result<Vec<String>> {
        let rels = self.relationships(PRESENTATION_PART)?;
        let xml = self.read_xml(PRESENTATION_PART)?;

        let mut paths = Vec::new();
        let mut reader = quick_xml::Reader::from_str(&xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => {
                    if e.name().local_name().as_ref() == b"sldId" {
                        for attr in e.attributes().flatten() {
                            // r:id carries the relationship reference; the
                            // plain id attribute is the slide id.
                            if attr.key.as_ref().ends_with(b":id") {
                                let rel_id = String::from_utf8_lossy(&attr.value).to_string();
                                if let Some(target) = rels.get(&rel_id) {
                                    paths.push(resolve_target("ppt", target));
                                }
                            }
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(paths)
    }
}

/// The `.rels` path for a part: `ppt/slides/slide1.xml` becomes
/// `ppt/slides/_rels/slide1.xml.rels`.
pub fn rels_path_for(part: &str) -> String {
    match part.rfind('/') {
        Some(slash) => format!("{}/_rels/{}.rels", &part[..slash], &part[slash + 1..]),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against a base directory.
///
/// Handles package-absolute targets (`/ppt/media/a.png`) and parent
/// references (`../media/a.png`).
pub fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut dir = base_dir.trim_end_matches('/');
    let mut rest = target;

    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
        dir = match dir.rfind('/') {
            Some(slash) => &dir[..slash],
            None => "",
        };
    }

    if dir.is_empty() {
        rest.to_string()
    } else {
        format!("{}/{}", dir, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_package(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            for (name, content) in parts {
                writer
                    .start_file(name.to_string(), SimpleFileOptions::default())
                    .unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    fn minimal_package() -> Vec<u8> {
        build_package(&[
            (
                "ppt/presentation.xml",
                r#"<?xml version="1.0"?>
                <p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"
                                xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
                  <p:sldIdLst>
                    <p:sldId id="256" r:id="rId2"/>
                    <p:sldId id="257" r:id="rId3"/>
                  </p:sldIdLst>
                </p:presentation>"#,
            ),
            (
                "ppt/_rels/presentation.xml.rels",
                r#"<?xml version="1.0"?>
                <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
                  <Relationship Id="rId2" Type="slide" Target="slides/slide1.xml"/>
                  <Relationship Id="rId3" Type="slide" Target="slides/slide2.xml"/>
                </Relationships>"#,
            ),
            ("ppt/slides/slide1.xml", "<p:sld/>"),
            ("ppt/slides/slide2.xml", "<p:sld/>"),
        ])
    }

    #[test]
    fn test_missing_presentation_part_rejected() {
        let data = build_package(&[("other.xml", "<x/>")]);
        let result = PptxPackage::from_bytes(data);
        assert!(matches!(result, Err(Error::MissingComponent(_))));
    }

    #[test]
    fn test_slide_paths_in_presentation_order() {
        let package = PptxPackage::from_bytes(minimal_package()).unwrap();
        assert_eq!(
            package.slide_paths().unwrap(),
            vec!["ppt/slides/slide1.xml", "ppt/slides/slide2.xml"]
        );
    }

    #[test]
    fn test_read_missing_part() {
        let package = PptxPackage::from_bytes(minimal_package()).unwrap();
        assert!(matches!(
            package.read_part("ppt/media/none.png"),
            Err(Error::MissingComponent(_))
        ));
    }

    #[test]
    fn test_rels_path_for() {
        assert_eq!(
            rels_path_for("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(rels_path_for("presentation.xml"), "_rels/presentation.xml.rels");
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/slides", "../media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(
            resolve_target("ppt", "slides/slide1.xml"),
            "ppt/slides/slide1.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides", "/ppt/media/a.png"),
            "ppt/media/a.png"
        );
    }
}
