// Integration tests for the HTTP surface

use actix_web::{http::header, http::StatusCode, test, web, App};
use educated_investor::config::ReportSettings;
use educated_investor::core::Questionnaire;
use educated_investor::report::{delivery, render, CONTENT_TYPE, FILENAME};
use educated_investor::routes::{self, AppState};
use educated_investor::{match_profile, LifeStageTag};
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn state(report: ReportSettings) -> web::Data<AppState> {
    web::Data::new(AppState::new(report))
}

macro_rules! app {
    ($report:expr) => {
        test::init_service(
            App::new()
                .app_data(state($report))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn submission() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "lifeStages": ["Business Owner"],
        "priorities": ["Tax Reduction"]
    })
}

#[actix_web::test]
async fn test_health() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_list_profiles() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::get().uri("/api/v1/profiles").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let profiles = body.as_array().unwrap();
    assert_eq!(profiles.len(), 5);
    assert_eq!(profiles[4]["id"], "E");
    assert!(profiles[0]["recommendedCredentials"].is_array());
}

#[actix_web::test]
async fn test_list_questions_follows_config() {
    let report = ReportSettings {
        questionnaire: Questionnaire::Essentials,
        ..ReportSettings::default()
    };
    let app = app!(report);
    let req = test::TestRequest::get().uri("/api/v1/questions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 8);
    assert_eq!(body["questions"][0]["number"], 1);
    assert_eq!(body["questions"][0]["phase"], "credentials_stability");
}

#[actix_web::test]
async fn test_match_profile_endpoint() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::post()
        .uri("/api/v1/profile/match")
        .set_json(json!({"lifeStages": ["Windfall", "Special Situation"]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["profile"]["id"], "C");
    assert_eq!(body["matchedRule"], 2);
    assert_eq!(body["fallback"], false);
}

#[actix_web::test]
async fn test_match_profile_empty_falls_back() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::post()
        .uri("/api/v1/profile/match")
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["profile"]["id"], "E");
    assert!(body["matchedRule"].is_null());
    assert_eq!(body["fallback"], true);
}

#[actix_web::test]
async fn test_unknown_tag_is_bad_request() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::post()
        .uri("/api/v1/profile/match")
        .set_json(json!({"lifeStages": ["Retired"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_generate_report() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::post()
        .uri("/api/v1/reports")
        .set_json(submission())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["profile"]["id"], "B");
    assert_eq!(body["filename"], FILENAME);
    assert_eq!(body["contentType"], CONTENT_TYPE);

    let encoded = body["document"].as_str().unwrap();
    let document = delivery::decode(encoded).unwrap();
    assert!(document.starts_with(b"%PDF"));

    let href = body["downloadHref"].as_str().unwrap();
    assert_eq!(href, format!("data:application/octet-stream;base64,{}", encoded));
}

#[actix_web::test]
async fn test_generate_report_validation() {
    let app = app!(ReportSettings::default());

    let cases = [
        json!({"name": "", "email": "jane@example.com", "lifeStages": ["Windfall"]}),
        json!({"name": "Jane", "email": "", "lifeStages": ["Windfall"]}),
        json!({"name": "Jane", "email": "jane@example.com", "lifeStages": []}),
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "lifeStages": ["Windfall"],
            "priorities": ["Tax Reduction", "Business Exit", "Estate Planning", "Wealth Growth"]
        }),
    ];

    for case in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/reports")
            .set_json(&case)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", case);
    }
}

#[actix_web::test]
async fn test_repeated_priority_labels_are_one_selection() {
    let app = app!(ReportSettings::default());
    let mut body = submission();
    body["priorities"] = json!(["Tax Reduction", "Tax Reduction", "Tax Reduction", "Tax Reduction"]);

    let req = test::TestRequest::post()
        .uri("/api/v1/reports")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_render_failure_is_server_error() {
    let app = app!(ReportSettings::default());
    let mut body = submission();
    body["name"] = json!("王小明");

    let req = test::TestRequest::post()
        .uri("/api/v1/reports")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to generate report");
}

#[actix_web::test]
async fn test_download_report() {
    let app = app!(ReportSettings::default());
    let req = test::TestRequest::post()
        .uri("/api/v1/reports/download")
        .set_json(submission())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), CONTENT_TYPE);
    assert_eq!(
        headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"Educated_Investor_Spec_Sheet.pdf\""
    );

    let bytes = test::read_body(resp).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[actix_web::test]
async fn test_document_survives_base64_transport() {
    let profile = match_profile(&BTreeSet::from([LifeStageTag::Distribution]), &BTreeSet::new());
    let questions = Questionnaire::Quick.questions();
    let document = render("Jane Doe", profile, &questions).unwrap();

    let decoded = delivery::decode(&delivery::encode(&document)).unwrap();
    assert_eq!(decoded, document);
}
