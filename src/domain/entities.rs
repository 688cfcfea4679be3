//! Domain entities. Pure data structures for the core business.
//!
//! No file/network types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// One uploaded transcript: source name plus extracted plain text.
///
/// Immutable once extracted; consumed by [`CombinedContent::combine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub name: String,
    pub text: String,
}

impl Transcript {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// All transcripts concatenated into one corpus, each wrapped in a
/// source-boundary header. Created once per generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedContent(String);

impl CombinedContent {
    /// Combine transcripts in input order. Each entry contributes a header
    /// line `--- File {i}: {name} ---` (1-based), its text, and a blank-line
    /// separator. No normalization, deduplication, or size limiting.
    pub fn combine(transcripts: &[Transcript]) -> Self {
        let mut combined = String::new();
        for (i, t) in transcripts.iter().enumerate() {
            combined.push_str(&format!("--- File {}: {} ---\n", i + 1, t.name));
            combined.push_str(&t.text);
            combined.push_str("\n\n");
        }
        Self(combined)
    }

    /// Precondition check: the pipeline must not run on empty content.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Final text produced by an orchestration run. Transient: held only for
/// display and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub article: String,
    /// Unix timestamp of run completion.
    pub generated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transcript> {
        vec![
            Transcript::new("interview.txt", "first transcript body"),
            Transcript::new("panel.docx", "second transcript body"),
            Transcript::new("keynote.txt", "third transcript body"),
        ]
    }

    #[test]
    fn combine_emits_one_header_per_transcript_in_order() {
        let combined = CombinedContent::combine(&sample());
        let headers: Vec<&str> = combined
            .as_str()
            .lines()
            .filter(|l| l.starts_with("--- File "))
            .collect();
        assert_eq!(
            headers,
            vec![
                "--- File 1: interview.txt ---",
                "--- File 2: panel.docx ---",
                "--- File 3: keynote.txt ---",
            ]
        );
    }

    #[test]
    fn combine_contains_every_input_verbatim() {
        let transcripts = sample();
        let combined = CombinedContent::combine(&transcripts);
        for t in &transcripts {
            assert!(combined.as_str().contains(&t.text));
        }
    }

    #[test]
    fn combine_preserves_input_order() {
        let combined = CombinedContent::combine(&sample());
        let text = combined.as_str();
        let first = text.find("first transcript body").unwrap();
        let second = text.find("second transcript body").unwrap();
        let third = text.find("third transcript body").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn combine_of_nothing_is_empty() {
        assert!(CombinedContent::combine(&[]).is_empty());
        assert!(!CombinedContent::combine(&sample()).is_empty());
    }
}
