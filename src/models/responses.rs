use crate::core::questions::Phase;
use crate::models::domain::SpecialistProfile;
use serde::{Deserialize, Serialize};

/// Matched profile for on-screen display
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub profile: &'static SpecialistProfile,
    pub credentials: String,
    #[serde(rename = "matchedRule")]
    pub matched_rule: Option<usize>,
    pub fallback: bool,
}

/// One entry of the vetting protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub number: usize,
    pub phase: Option<Phase>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionEntry>,
    pub total: usize,
}

/// Generated spec sheet, base64 encoded for a JSON channel
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    #[serde(rename = "reportId")]
    pub report_id: uuid::Uuid,
    pub profile: &'static SpecialistProfile,
    pub filename: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub document: String,
    #[serde(rename = "downloadHref")]
    pub download_href: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
