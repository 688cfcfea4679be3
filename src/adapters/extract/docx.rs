//! Word-processor document extraction.
//!
//! A `.docx` file is an OOXML zip package; the body lives in
//! `word/document.xml`. Extraction concatenates every paragraph's text in
//! document order, paragraphs joined by `\n`. Empty paragraphs are kept.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::domain::DomainError;

/// Extract paragraph text from an in-memory `.docx` package.
pub fn extract_docx(data: &[u8]) -> Result<String, DomainError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| DomainError::Extract(format!("not a valid docx package: {}", e)))?;

    let mut document = archive.by_name("word/document.xml").map_err(|e| match e {
        ZipError::FileNotFound => {
            DomainError::Extract("docx package has no word/document.xml".into())
        }
        other => DomainError::Extract(format!("read docx package: {}", other)),
    })?;

    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| DomainError::Extract(format!("read word/document.xml: {}", e)))?;

    paragraphs_from_xml(&xml).map(|paragraphs| paragraphs.join("\n"))
}

/// Walk the document XML and collect one string per `w:p` element.
///
/// Text comes from `w:t` runs; `w:tab` and `w:br` map to `\t` and `\n`
/// inside the paragraph, matching how word processors render them.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, DomainError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                // Self-closing <w:p/> is an empty paragraph, not nothing.
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                b"tab" => current.push('\t'),
                b"br" => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| DomainError::Extract(format!("malformed document text: {}", e)))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(DomainError::Extract(format!(
                    "malformed word/document.xml: {}",
                    e
                )))
            }
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Build a minimal docx package in memory with one `w:p` per entry.
    fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for p in paragraphs {
            if p.is_empty() {
                body.push_str("<w:p/>");
            } else {
                body.push_str(&format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p));
            }
        }
        let document = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn paragraphs_join_with_newlines() {
        let data = docx_with_paragraphs(&["First paragraph.", "Second paragraph."]);
        assert_eq!(
            extract_docx(&data).unwrap(),
            "First paragraph.\nSecond paragraph."
        );
    }

    #[test]
    fn empty_trailing_paragraph_is_preserved() {
        let data = docx_with_paragraphs(&["A", "B", ""]);
        assert_eq!(extract_docx(&data).unwrap(), "A\nB\n");
    }

    #[test]
    fn split_runs_concatenate_within_a_paragraph() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer
            .write_all(
                b"<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
                  <w:body><w:p><w:r><w:t>Hello, </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>\
                  </w:body></w:document>",
            )
            .unwrap();
        let data = writer.finish().unwrap().into_inner();

        assert_eq!(extract_docx(&data).unwrap(), "Hello, world");
    }

    #[test]
    fn escaped_entities_are_unescaped() {
        let data = docx_with_paragraphs(&["Q&amp;A session &lt;recorded&gt;"]);
        assert_eq!(extract_docx(&data).unwrap(), "Q&A session <recorded>");
    }

    #[test]
    fn package_without_document_xml_is_an_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        let err = extract_docx(&data).unwrap_err();
        assert!(matches!(err, DomainError::Extract(_)));
        assert!(err.to_string().contains("word/document.xml"));
    }

    #[test]
    fn garbage_bytes_are_not_a_package() {
        let err = extract_docx(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, DomainError::Extract(_)));
    }
}
