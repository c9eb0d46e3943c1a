//! In-memory package assembly and ZIP serialization.

use crate::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::rels::{rels_part_name, Relationships};
use crate::xml::XmlWriter;
use guide_core::{Error, Result};
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// A package under construction.
///
/// Parts are written in insertion order after `[Content_Types].xml`.
#[derive(Debug, Default)]
pub struct Package {
    parts: Vec<(String, Vec<u8>)>,
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
    package_rels: Relationships,
}

impl Package {
    /// Create an empty package with the `rels` and `xml` default content types.
    pub fn new() -> Self {
        Self {
            defaults: vec![
                ("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string()),
                ("xml".to_string(), ct::XML.to_string()),
            ],
            ..Self::default()
        }
    }

    /// Add a part with a content type override.
    pub fn add_part(&mut self, name: &str, content_type: &str, data: Vec<u8>) {
        log::trace!("Adding part {} ({} bytes)", name, data.len());
        self.overrides
            .push((format!("/{}", name), content_type.to_string()));
        self.parts.push((name.to_string(), data));
    }

    /// Add the main document part and link it from the package root.
    pub fn add_main_part(&mut self, name: &str, content_type: &str, data: Vec<u8>) {
        self.package_rels.add(rt::OFFICE_DOCUMENT, name);
        self.add_part(name, content_type, data);
    }

    /// Add the relationships of a source part.
    pub fn add_relationships(&mut self, source_part: &str, rels: &Relationships) -> Result<()> {
        let data = rels.to_xml()?;
        self.parts.push((rels_part_name(source_part), data));
        Ok(())
    }

    /// Add `docProps/core.xml` with a title and creator.
    ///
    /// No timestamps are written so that output stays reproducible.
    pub fn add_core_properties(&mut self, title: &str, creator: &str) -> Result<()> {
        let mut xml = XmlWriter::new()?;
        xml.start(
            "cp:coreProperties",
            &[
                ("xmlns:cp", namespace::OPC_CORE_PROPERTIES),
                ("xmlns:dc", namespace::DC),
                ("xmlns:dcterms", namespace::DCTERMS),
            ],
        )?;
        xml.text_element("dc:title", &[], title)?;
        xml.text_element("dc:creator", &[], creator)?;
        xml.end("cp:coreProperties")?;

        self.package_rels.add(rt::CORE_PROPERTIES, CORE_PROPERTIES_PART);
        self.add_part(CORE_PROPERTIES_PART, ct::OPC_CORE_PROPERTIES, xml.into_bytes());
        Ok(())
    }

    /// Names of all parts added so far, excluding generated ones.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    fn content_types_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlWriter::new()?;
        xml.start("Types", &[("xmlns", namespace::OPC_CONTENT_TYPES)])?;
        for (extension, content_type) in &self.defaults {
            xml.empty(
                "Default",
                &[
                    ("Extension", extension.as_str()),
                    ("ContentType", content_type.as_str()),
                ],
            )?;
        }
        for (part_name, content_type) in &self.overrides {
            xml.empty(
                "Override",
                &[
                    ("PartName", part_name.as_str()),
                    ("ContentType", content_type.as_str()),
                ],
            )?;
        }
        xml.end("Types")?;
        Ok(xml.into_bytes())
    }

    /// Write the package as a ZIP archive.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let content_types = self.content_types_xml()?;
        let package_rels = self.package_rels.to_xml()?;
        let generated = [
            (CONTENT_TYPES_PART.to_string(), content_types),
            (rels_part_name(""), package_rels),
        ];

        for (name, data) in generated.iter().chain(self.parts.iter()) {
            zip.start_file(name.as_str(), options)
                .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
            zip.write_all(data)?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let cursor = self.write_to(Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Serialize the package and write it to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_package() -> Package {
        let mut package = Package::new();
        package.add_main_part("word/document.xml", ct::WML_DOCUMENT_MAIN, b"<doc/>".to_vec());
        package.add_core_properties("Title", "Author").unwrap();
        package
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_content_types_come_first() {
        let bytes = sample_package().to_bytes().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
        assert_eq!(archive.by_index(1).unwrap().name(), "_rels/.rels");
    }

    #[test]
    fn test_content_types_list_overrides() {
        let bytes = sample_package().to_bytes().unwrap();
        let types = read_entry(&bytes, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="rels""#));
        assert!(types.contains(r#"PartName="/word/document.xml""#));
        assert!(types.contains(r#"PartName="/docProps/core.xml""#));
    }

    #[test]
    fn test_package_rels_point_at_main_part() {
        let bytes = sample_package().to_bytes().unwrap();
        let rels = read_entry(&bytes, "_rels/.rels");
        assert!(rels.contains(r#"Target="word/document.xml""#));
        assert!(rels.contains(rt::CORE_PROPERTIES));
    }

    #[test]
    fn test_output_is_reproducible() {
        let first = sample_package().to_bytes().unwrap();
        let second = sample_package().to_bytes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_part_relationships() {
        let mut package = sample_package();
        let mut rels = Relationships::new();
        rels.add(rt::STYLES, "styles.xml");
        package.add_relationships("word/document.xml", &rels).unwrap();
        assert!(package
            .part_names()
            .any(|name| name == "word/_rels/document.xml.rels"));
    }
}
