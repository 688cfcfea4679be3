//! Document text extraction. Turns uploaded files into plain text.
//!
//! Recognized formats: plain text (`.txt`, UTF-8) and word-processor
//! documents (`.docx`). Anything else is an explicit `UnsupportedFormat`
//! error rather than a silent no-op.

pub mod docx;
pub mod text;

use std::path::Path;

use crate::domain::{DomainError, Transcript};

/// Extensions the extractor understands.
const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "docx"];

/// True if the file's extension is one the extractor can handle.
pub fn is_supported(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Read a file and extract its plain text, dispatching on extension.
pub async fn extract_file(path: &Path) -> Result<Transcript, DomainError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string();

    let ext = extension_of(path)
        .ok_or_else(|| DomainError::UnsupportedFormat(format!("{} has no extension", name)))?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::Extract(format!("read {}: {}", path.display(), e)))?;

    let text = match ext.as_str() {
        "txt" => text::decode_plain_text(&bytes)?,
        "docx" => docx::extract_docx(&bytes)?,
        other => {
            return Err(DomainError::UnsupportedFormat(format!(
                "{} (.{} files are not recognized)",
                name, other
            )))
        }
    };

    Ok(Transcript::new(name, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported(Path::new("notes.txt")));
        assert!(is_supported(Path::new("Interview.DOCX")));
        assert!(!is_supported(Path::new("deck.pdf")));
        assert!(!is_supported(Path::new("README")));
    }

    #[tokio::test]
    async fn extract_file_reads_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("call.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all("minutes of the call".as_bytes()).unwrap();

        let transcript = extract_file(&path).await.unwrap();
        assert_eq!(transcript.name, "call.txt");
        assert_eq!(transcript.text, "minutes of the call");
    }

    #[tokio::test]
    async fn extract_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let err = extract_file(&path).await.unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat(_)));
    }
}
