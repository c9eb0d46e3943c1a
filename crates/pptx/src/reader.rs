//! Minimal PPTX text reader used to check written decks.

use guide_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";

/// Read the paragraph texts of every slide, in presentation order.
pub fn read_slide_texts<R: Read + Seek>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

    slide_order(&mut archive)?
        .iter()
        .map(|path| {
            let content = read_file_from_archive(&mut archive, path)?;
            paragraph_texts(&content)
        })
        .collect()
}

/// Slide part paths ordered by their number.
fn slide_order<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
    let rels_content = read_file_from_archive(archive, PRESENTATION_RELS)?;
    let mut slides: Vec<(usize, String)> = Vec::new();

    let mut reader = Reader::from_str(&rels_content);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"Relationship" => {
                let mut rel_type = String::new();
                let mut target = String::new();
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Type" => rel_type = String::from_utf8_lossy(&attr.value).to_string(),
                        b"Target" => target = String::from_utf8_lossy(&attr.value).to_string(),
                        _ => {}
                    }
                }
                if rel_type.ends_with("/slide") {
                    let number = extract_slide_number(&target).unwrap_or(usize::MAX);
                    slides.push((number, format!("ppt/{}", target)));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing relationships: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    slides.sort();
    Ok(slides.into_iter().map(|(_, path)| path).collect())
}

/// Text of each non-empty `a:p` in document order.
fn paragraph_texts(xml_content: &str) -> Result<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(true);

    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"p" => {
                current = Some(String::new());
            }
            Ok(Event::Text(ref e)) => {
                if let Some(text) = current.as_mut() {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| Error::XmlError(e.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::End(ref e)) if local_name(e.name().as_ref()) == b"p" => {
                if let Some(text) = current.take().filter(|t| !t.is_empty()) {
                    paragraphs.push(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(format!("Error parsing slide: {}", e))),
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn read_file_from_archive<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Strip the namespace prefix from an element name.
fn local_name(name: &[u8]) -> &[u8] {
    match name.iter().position(|&b| b == b':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Trailing number of a part name like "slides/slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml");
    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.chars().rev().collect::<String>().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("slides/slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slides/slide12.xml"), Some(12));
        assert_eq!(extract_slide_number("nodigits"), None);
        assert_eq!(extract_slide_number("slides/slidé.xml"), None);
        assert_eq!(extract_slide_number("slides/diapó7.xml"), Some(7));
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"a:p"), b"p");
        assert_eq!(local_name(b"p"), b"p");
    }

    #[test]
    fn test_paragraph_texts_joins_runs() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><a:p><a:r><a:t>A &amp;</a:t></a:r><a:r><a:t>B</a:t></a:r></a:p><a:p/><a:p><a:r><a:t>C</a:t></a:r></a:p></p:sld>"#;
        assert_eq!(paragraph_texts(xml).unwrap(), vec!["A &B", "C"]);
    }
}
