use crate::config::ReportSettings;
use crate::core::{ProfileMatcher, PROFILES};
use crate::models::{
    ErrorResponse, GenerateReportRequest, HealthResponse, MatchProfileRequest, ProfileResponse,
    QuestionsResponse, ReportResponse, SpecialistProfile,
};
use crate::report::{delivery, Report, ReportRenderer, CONTENT_TYPE, FILENAME};
use actix_web::{http::header, web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub matcher: ProfileMatcher,
    pub renderer: ReportRenderer,
    pub report: Arc<ReportSettings>,
}

impl AppState {
    pub fn new(report: ReportSettings) -> Self {
        Self {
            matcher: ProfileMatcher::default(),
            renderer: ReportRenderer::new(report.report_options()),
            report: Arc::new(report),
        }
    }
}

/// Configure all questionnaire and report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles", web::get().to(list_profiles))
        .route("/questions", web::get().to(list_questions))
        .route("/profile/match", web::post().to(match_profile))
        .route("/reports", web::post().to(generate_report))
        .route("/reports/download", web::post().to(download_report));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// All five specialist profiles
async fn list_profiles() -> impl Responder {
    HttpResponse::Ok().json(&PROFILES[..])
}

/// Configured vetting protocol
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    let questions = state.report.question_entries();
    HttpResponse::Ok().json(QuestionsResponse {
        total: questions.len(),
        questions,
    })
}

/// Preview the matched profile
///
/// POST /api/v1/profile/match
///
/// Request body:
/// ```json
/// {
///   "lifeStages": ["Pre-Retirement"],
///   "priorities": ["Tax Reduction"]
/// }
/// ```
async fn match_profile(
    state: web::Data<AppState>,
    req: web::Json<MatchProfileRequest>,
) -> impl Responder {
    let (life_stages, priorities) = req.tag_sets();
    let outcome = state.matcher.match_profile(&life_stages, &priorities);

    HttpResponse::Ok().json(ProfileResponse {
        profile: outcome.profile,
        credentials: outcome.profile.credentials_line(),
        matched_rule: outcome.rule_index,
        fallback: outcome.is_fallback(),
    })
}

/// Generate the spec sheet and return it base64 encoded
///
/// POST /api/v1/reports
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "lifeStages": ["Business Owner"],
///   "priorities": ["Business Exit", "Tax Reduction"]
/// }
/// ```
async fn generate_report(
    state: web::Data<AppState>,
    req: web::Json<GenerateReportRequest>,
) -> impl Responder {
    let (profile, document) = match build_report(&state, &req) {
        Ok(built) => built,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(ReportResponse {
        report_id: uuid::Uuid::new_v4(),
        profile,
        filename: FILENAME.to_string(),
        content_type: CONTENT_TYPE.to_string(),
        document: delivery::encode(&document),
        download_href: delivery::download_href(&document),
        generated_at: chrono::Utc::now(),
    })
}

/// Generate the spec sheet and return the raw document as an attachment
///
/// POST /api/v1/reports/download
async fn download_report(
    state: web::Data<AppState>,
    req: web::Json<GenerateReportRequest>,
) -> impl Responder {
    match build_report(&state, &req) {
        Ok((_, document)) => HttpResponse::Ok()
            .content_type(CONTENT_TYPE)
            .insert_header((header::CONTENT_DISPOSITION, delivery::content_disposition()))
            .body(document),
        Err(response) => response,
    }
}

/// Validate, match and render. Errors come back as ready-made responses.
fn build_report(
    state: &AppState,
    req: &GenerateReportRequest,
) -> Result<(&'static SpecialistProfile, Vec<u8>), HttpResponse> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for report request: {}", errors);
        return Err(HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        }));
    }

    // Lead capture is out of scope; the address is only checked and logged
    tracing::debug!("Report requested by {} <{}>", req.name, req.email);

    let (life_stages, priorities) = req.tag_sets();
    let outcome = state.matcher.match_profile(&life_stages, &priorities);
    let questions = state.report.vetting_questions();

    let document = state
        .renderer
        .render(&Report::new(&req.name, outcome.profile, &questions))
        .map_err(|e| {
            tracing::error!("Failed to render spec sheet: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate report".to_string(),
                message: "The spec sheet could not be generated. Please check your entries and try again."
                    .to_string(),
                status_code: 500,
            })
        })?;

    tracing::info!(
        "Generated spec sheet: profile={:?}, questions={}, bytes={}",
        outcome.profile.id,
        questions.len(),
        document.len()
    );

    Ok((outcome.profile, document))
}
