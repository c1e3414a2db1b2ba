//! Document critique: prompt the model about one piece of evidence and parse its answer.

use tracing::{info, warn};

use crate::critique::prompts::{critique_prompt, critique_system};
use crate::critique::summary::{parse_summary, ParsedSummary};
use crate::errors::AppError;
use crate::evidence::EvidenceCategory;
use crate::llm_client::CompletionProvider;

/// Longest document excerpt sent to the model, in characters.
pub const MAX_DOCUMENT_CHARS: usize = 24_000;

/// Critiques a document's text as evidence for `category`.
pub async fn critique_document(
    provider: &dyn CompletionProvider,
    category: EvidenceCategory,
    document_text: &str,
) -> Result<ParsedSummary, AppError> {
    let document_text = document_text.trim();
    if document_text.is_empty() {
        return Err(AppError::Validation(
            "document text cannot be empty".to_string(),
        ));
    }

    let excerpt = truncate_chars(document_text, MAX_DOCUMENT_CHARS);
    if excerpt.len() < document_text.len() {
        warn!(
            category = category.key(),
            original_bytes = document_text.len(),
            "Document truncated to {MAX_DOCUMENT_CHARS} characters before critique"
        );
    }

    let prompt = critique_prompt(category, excerpt);
    let raw = provider
        .complete(&prompt, &critique_system())
        .await
        .map_err(|e| AppError::Llm(format!("Document critique failed: {e}")))?;

    let summary = parse_summary(&raw);
    if summary.is_empty() {
        warn!(
            category = category.key(),
            "Critique response had no recognizable sections"
        );
    }
    info!(
        category = category.key(),
        strengths = summary.strengths.len(),
        weaknesses = summary.weaknesses.len(),
        recommendations = summary.recommendations.len(),
        "Document critique complete"
    );

    Ok(summary)
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Replies with a canned answer and remembers the last prompt it saw.
    struct CannedProvider {
        reply: Result<String, u16>,
        last_prompt: Mutex<Option<String>>,
    }

    impl CannedProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "overloaded".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_critique_parses_provider_reply() {
        let provider = CannedProvider::replying(
            "Strengths: Signed by a department chair[SEP]Names the award\n\
             Weaknesses: No selection criteria\n\
             Recommendations: Attach the award rules",
        );
        let summary = critique_document(&provider, EvidenceCategory::Recognition, "Award letter")
            .await
            .unwrap();
        assert_eq!(summary.strengths.len(), 2);
        assert_eq!(summary.weaknesses, vec!["No selection criteria".to_string()]);
        assert_eq!(
            summary.recommendations,
            vec!["Attach the award rules".to_string()]
        );

        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Award letter"));
        assert!(prompt.contains("Awards & Recognition"));
    }

    #[tokio::test]
    async fn test_unstructured_reply_gives_empty_summary() {
        let provider = CannedProvider::replying("I cannot review this document.");
        let summary = critique_document(&provider, EvidenceCategory::Judging, "text")
            .await
            .unwrap();
        assert!(summary.is_empty());
    }

    #[tokio::test]
    async fn test_empty_document_rejected_without_calling_provider() {
        let provider = CannedProvider::replying("Strengths: x");
        let err = critique_document(&provider, EvidenceCategory::Publications, "  \n ")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(provider.last_prompt.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_llm_error() {
        let provider = CannedProvider::failing(529);
        let err = critique_document(&provider, EvidenceCategory::MediaCoverage, "Article")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_long_document_truncated_in_prompt() {
        let provider = CannedProvider::replying("Strengths: long");
        let document = "é".repeat(MAX_DOCUMENT_CHARS + 50);
        critique_document(&provider, EvidenceCategory::Memberships, &document)
            .await
            .unwrap();
        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(prompt.matches('é').count(), MAX_DOCUMENT_CHARS);
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("naïve", 3), "naï");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 3), "");
    }
}
