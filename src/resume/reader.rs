// src/resume/reader.rs
//! Raw text extraction for uploaded résumés.

use quick_xml::events::Event;
use std::io::{Cursor, Read};
use tracing::debug;

use super::{DocumentFormat, RawDocument};
use crate::error::{CoverLetterError, Result};

const DOCUMENT_XML: &str = "word/document.xml";
/// Upper bound on the decompressed document body (zip-bomb protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// Extract the unnormalized text of a résumé.
///
/// Word documents yield their non-empty paragraphs joined with newlines, PDFs
/// the text of each page in page order.
pub fn read_resume(document: &RawDocument) -> Result<String> {
    let text = match document.format()? {
        DocumentFormat::Docx => read_docx(&document.bytes)?,
        DocumentFormat::Pdf => read_pdf(&document.bytes)?,
    };
    debug!("Extracted {} chars of resume text", text.len());
    Ok(text)
}

fn read_pdf(bytes: &[u8]) -> Result<String> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| CoverLetterError::Document(format!("PDF extraction failed: {}", e)))?;
    Ok(pages.concat())
}

fn read_docx(bytes: &[u8]) -> Result<String> {
    let xml = read_document_xml(bytes)?;
    let paragraphs = docx_paragraphs(&xml)?;
    Ok(paragraphs.join("\n"))
}

fn read_document_xml(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| CoverLetterError::Document(format!("Invalid .docx archive: {}", e)))?;
    let entry = archive.by_name(DOCUMENT_XML).map_err(|_| {
        CoverLetterError::Document(format!("{} not found in .docx archive", DOCUMENT_XML))
    })?;

    let mut xml = Vec::new();
    entry
        .take(MAX_XML_ENTRY_BYTES)
        .read_to_end(&mut xml)
        .map_err(|e| CoverLetterError::Document(e.to_string()))?;
    if xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
        return Err(CoverLetterError::Document(format!(
            "{} exceeds size limit ({} bytes)",
            DOCUMENT_XML, MAX_XML_ENTRY_BYTES
        )));
    }
    Ok(xml)
}

/// Text of every non-empty `w:p`, in document order. Table cells are
/// included; a paragraph nested in another (text boxes) is merged into its
/// outer paragraph.
fn docx_paragraphs(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = quick_xml::Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => {
                    if depth == 0 {
                        current.clear();
                    }
                    depth += 1;
                }
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" if depth > 0 => current.push('\t'),
                b"br" | b"cr" if depth > 0 => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(te)) if in_text && depth > 0 => {
                let text = te
                    .unescape()
                    .map_err(|e| CoverLetterError::Document(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if depth > 0 => {
                    depth -= 1;
                    if depth == 0 && !current.is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(CoverLetterError::Document(format!(
                    "Malformed document.xml: {}",
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
