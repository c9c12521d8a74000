// src/resume/mod.rs
use serde::{Deserialize, Serialize};

use crate::error::{CoverLetterError, Result};
use crate::utils::get_file_extension;

pub mod fields;
pub mod reader;

pub use fields::extract_profile;
pub use reader::read_resume;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MIME_OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Word document, read paragraph by paragraph.
    Docx,
    /// PDF, read page by page.
    Pdf,
}

/// An uploaded résumé as received from the user.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub media_type: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

impl DocumentFormat {
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        // ignore parameters such as "; charset=binary"
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            MIME_DOCX => Some(Self::Docx),
            MIME_PDF => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        match get_file_extension(file_name).as_deref() {
            Some("docx") => Some(Self::Docx),
            Some("pdf") => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, media_type: Option<String>, file_name: Option<String>) -> Self {
        Self {
            bytes,
            media_type,
            file_name,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resolve the document format from the declared media type. The file
    /// name is only consulted when the browser sent no useful type.
    pub fn format(&self) -> Result<DocumentFormat> {
        match self.media_type.as_deref() {
            Some(media_type) if !media_type.starts_with(MIME_OCTET_STREAM) => {
                DocumentFormat::from_media_type(media_type)
                    .ok_or_else(|| CoverLetterError::UnsupportedFormat(media_type.to_string()))
            }
            _ => self
                .file_name
                .as_deref()
                .and_then(DocumentFormat::from_file_name)
                .ok_or_else(|| {
                    CoverLetterError::UnsupportedFormat(
                        self.file_name
                            .clone()
                            .unwrap_or_else(|| "unknown".to_string()),
                    )
                }),
        }
    }
}
