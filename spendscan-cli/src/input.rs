//! Document text for the parser: PDFs go through text extraction, anything
//! else is read as UTF-8 text (for example a saved `pdftotext` dump).

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;

pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Page-ordered plain text of one document
pub fn read_document(path: &Path) -> Result<String> {
    if is_pdf(path) {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        return pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow!("extract text from {}: {}", path.display(), e));
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Display name used to key per-document statement info
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
