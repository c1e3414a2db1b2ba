//! Axum route handlers for the Critique API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::critique::critic::critique_document;
use crate::critique::extract::extract_document_text;
use crate::critique::summary::{
    parse_line_marked, parse_separated, parse_summary, ParsedSummary,
};
use crate::errors::{AppError, AppJson};
use crate::evidence::EvidenceCategory;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Which bullet convention to read a stored response with.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletConvention {
    #[default]
    Auto,
    Separated,
    LineMarked,
}

#[derive(Debug, Deserialize)]
pub struct ParseSummaryRequest {
    pub text: String,
    #[serde(default)]
    pub convention: BulletConvention,
}

#[derive(Debug, Deserialize)]
pub struct CritiqueRequest {
    pub category: EvidenceCategory,
    pub document_text: String,
}

#[derive(Debug, Serialize)]
pub struct CritiqueResponse {
    pub analysis_id: Uuid,
    pub category: EvidenceCategory,
    pub summary: ParsedSummary,
    pub generated_at: DateTime<Utc>,
}

impl CritiqueResponse {
    fn new(category: EvidenceCategory, summary: ParsedSummary) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            category,
            summary,
            generated_at: Utc::now(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/summaries/parse
///
/// Re-parses a stored critique response. Detects the bullet convention unless one is given.
pub async fn handle_parse_summary(
    AppJson(request): AppJson<ParseSummaryRequest>,
) -> Json<ParsedSummary> {
    let summary = match request.convention {
        BulletConvention::Auto => parse_summary(&request.text),
        BulletConvention::Separated => parse_separated(&request.text),
        BulletConvention::LineMarked => parse_line_marked(&request.text),
    };
    Json(summary)
}

/// POST /api/v1/documents/critique
pub async fn handle_critique(
    State(state): State<AppState>,
    AppJson(request): AppJson<CritiqueRequest>,
) -> Result<Json<CritiqueResponse>, AppError> {
    let summary = critique_document(
        state.llm.as_ref(),
        request.category,
        &request.document_text,
    )
    .await?;

    Ok(Json(CritiqueResponse::new(request.category, summary)))
}

/// POST /api/v1/documents/critique/upload
///
/// Multipart form with a `category` text field and a `file` part (PDF or plain text).
pub async fn handle_critique_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CritiqueResponse>, AppError> {
    let mut multipart = multipart?;
    let mut category: Option<EvidenceCategory> = None;
    let mut document_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("category") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable category: {e}")))?;
                category = Some(parse_category(&raw)?);
            }
            Some("file") => {
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable file: {e}")))?;
                document_text = Some(extract_document_text(content_type.as_deref(), data).await?);
            }
            _ => {}
        }
    }

    let category =
        category.ok_or_else(|| AppError::Validation("missing 'category' field".to_string()))?;
    let document_text =
        document_text.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    let summary = critique_document(state.llm.as_ref(), category, &document_text).await?;

    Ok(Json(CritiqueResponse::new(category, summary)))
}

fn parse_category(raw: &str) -> Result<EvidenceCategory, AppError> {
    let key = raw.trim();
    EvidenceCategory::ALL
        .into_iter()
        .find(|c| c.key() == key)
        .ok_or_else(|| AppError::Validation(format!("unknown evidence category '{key}'")))
}
