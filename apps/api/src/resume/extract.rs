//! Resume text extraction for uploaded files.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Minimum non-whitespace characters for extracted text to be worth analysing.
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    PlainText,
}

impl ResumeFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "pdf",
            ResumeFormat::Docx => "docx",
            ResumeFormat::PlainText => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResumeFormat::Pdf => "application/pdf",
            ResumeFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ResumeFormat::PlainText => "text/plain",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported resume format '{0}'. Upload a PDF, DOCX or plain-text file.")]
    Unsupported(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Text file is not valid UTF-8")]
    Encoding,

    #[error("Resume contains too little text to analyse")]
    TooShort,
}

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const DOCX_BODY: &str = "word/document.xml";

/// Decides the format from magic bytes first, then the file extension.
/// A `.docx` name must also carry the zip signature.
pub fn detect_format(file_name: &str, bytes: &[u8]) -> Result<ResumeFormat, ExtractError> {
    if bytes.starts_with(b"%PDF") {
        return Ok(ResumeFormat::Pdf);
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => Ok(ResumeFormat::Pdf),
        "docx" if bytes.starts_with(ZIP_MAGIC) => Ok(ResumeFormat::Docx),
        "docx" => Err(ExtractError::Docx("file is not a zip archive".to_string())),
        "txt" | "md" => Ok(ResumeFormat::PlainText),
        "" => Err(ExtractError::Unsupported("unknown".to_string())),
        other => Err(ExtractError::Unsupported(other.to_string())),
    }
}

/// Extracts and normalises the resume text.
pub fn extract_text(format: ResumeFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    let raw = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        ResumeFormat::Docx => extract_docx(bytes)?,
        ResumeFormat::PlainText => std::str::from_utf8(bytes)
            .map_err(|_| ExtractError::Encoding)?
            .to_string(),
    };

    let text = normalize_whitespace(&raw);
    let meaningful = text.chars().filter(|c| !c.is_whitespace()).count();
    if meaningful < MIN_TEXT_CHARS {
        return Err(ExtractError::TooShort);
    }
    Ok(text)
}

/// Reads `word/document.xml` out of the archive and flattens it to text.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| ExtractError::Docx(format!("{DOCX_BODY}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    document_xml_to_text(&xml)
}

/// Joins `<w:t>` runs, one line per `<w:p>` paragraph.
fn document_xml_to_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| ExtractError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
            _ => {}
        }
    }
    Ok(out)
}

/// Collapses runs of blank lines and trailing spaces left behind by PDF extraction.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME_TXT: &str = "Jordan Rivera\nSoftware Engineer\n\n\n\nSkills: Rust, Python, PostgreSQL   \nExperience: Built APIs serving 2M requests/day\n";

    #[test]
    fn test_detect_pdf_by_magic_bytes() {
        assert_eq!(
            detect_format("resume.bin", b"%PDF-1.7 ...").unwrap(),
            ResumeFormat::Pdf
        );
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_format("CV.TXT", b"hello").unwrap(), ResumeFormat::PlainText);
        assert_eq!(detect_format("cv.md", b"hello").unwrap(), ResumeFormat::PlainText);
    }

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        use std::io::Write;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCX_BODY, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
<w:p><w:r><w:t>Priya Shah</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">Data Analyst &amp; </w:t></w:r><w:r><w:t>BI Developer</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t>SQL, Tableau, Python, dbt, Looker</w:t></w:r></w:p>
</w:body></w:document>"#;

    #[test]
    fn test_detect_docx_needs_zip_signature() {
        assert_eq!(
            detect_format("Resume.DOCX", b"PK\x03\x04rest").unwrap(),
            ResumeFormat::Docx
        );
        assert!(matches!(
            detect_format("resume.docx", b"not a zip"),
            Err(ExtractError::Docx(_))
        ));
        assert!(matches!(
            detect_format("resume.doc", b"PK\x03\x04"),
            Err(ExtractError::Unsupported(ref ext)) if ext == "doc"
        ));
        assert!(matches!(
            detect_format("resume", b"abc"),
            Err(ExtractError::Unsupported(_))
        ));
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let bytes = docx_bytes(DOCUMENT_XML);
        let format = detect_format("cv.docx", &bytes).unwrap();
        let text = extract_text(format, &bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Priya Shah");
        assert_eq!(lines[1], "Data Analyst & BI Developer");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Skills:\tSQL, Tableau, Python, dbt, Looker");
    }

    #[test]
    fn test_docx_without_document_body_rejected() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::FileOptions::default())
            .unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let err = extract_text(ResumeFormat::Docx, &bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Docx(ref msg) if msg.contains(DOCX_BODY)));
    }

    #[test]
    fn test_plain_text_is_normalized() {
        let text = extract_text(ResumeFormat::PlainText, RESUME_TXT.as_bytes()).unwrap();
        assert!(text.starts_with("Jordan Rivera"));
        assert!(!text.contains("\n\n\n"));
        assert!(text.contains("PostgreSQL\n"));
    }

    #[test]
    fn test_short_text_rejected() {
        let err = extract_text(ResumeFormat::PlainText, b"  just a name  ").unwrap_err();
        assert!(matches!(err, ExtractError::TooShort));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = extract_text(ResumeFormat::PlainText, &[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::Encoding));
    }
}
