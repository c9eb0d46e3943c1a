//! Relationship collections (`.rels` parts).

use crate::constants::namespace;
use crate::xml::XmlWriter;
use guide_core::Result;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    /// Target, relative to the source part's directory.
    pub target: String,
}

/// Ordered relationships of one source part, with sequential `rIdN` ids.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id.
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to a `.rels` part.
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlWriter::new()?;
        xml.start("Relationships", &[("xmlns", namespace::OPC_RELATIONSHIPS)])?;
        for rel in &self.rels {
            xml.empty(
                "Relationship",
                &[
                    ("Id", rel.id.as_str()),
                    ("Type", rel.rel_type.as_str()),
                    ("Target", rel.target.as_str()),
                ],
            )?;
        }
        xml.end("Relationships")?;
        Ok(xml.into_bytes())
    }
}

/// Path of the `.rels` part for a source part.
///
/// The package itself is the empty source `""`, whose rels live at
/// `_rels/.rels`.
pub fn rels_part_name(source_part: &str) -> String {
    match source_part.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", source_part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::relationship_type;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(relationship_type::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.add(relationship_type::NUMBERING, "numbering.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_rels_part_name() {
        assert_eq!(rels_part_name(""), "_rels/.rels");
        assert_eq!(rels_part_name("word/document.xml"), "word/_rels/document.xml.rels");
        assert_eq!(
            rels_part_name("ppt/slides/slide3.xml"),
            "ppt/slides/_rels/slide3.xml.rels"
        );
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.add(relationship_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");
        let xml = String::from_utf8(rels.to_xml().unwrap()).unwrap();
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout2.xml"/>"#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
