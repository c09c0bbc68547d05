//! HttpHypothesisApi against a mock hypothesis service

use hypoboard::schemas::{Dashboard, HypothesisDetail, StageUpdate};
use hypoboard::sync::{HttpHypothesisApi, HypothesisApi};
use hypoboard::{BoardError, StageKey, StageSummary};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_dashboard_decodes_camel_case_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hypotheses/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stages": [{
                "key": "IDEATION",
                "title": "Ideation",
                "description": "New ideas",
                "slaHours": 72,
                "stageOwner": "Innovation Office",
                "stageHealth": "warning",
                "conversionRate": 0.4,
                "averageDaysInStage": 3.5,
                "items": [{
                    "id": "HYP-001",
                    "title": "Predictive downtime alerts",
                    "owner": "Ana Ruiz",
                    "stage": "IDEATION",
                    "impact": 8.0,
                    "feasibility": 6.5,
                    "confidence": 7.0,
                    "tags": ["ops"]
                }]
            }],
            "highlights": {},
            "tasks": [],
            "activity": []
        })))
        .mount(&server)
        .await;

    let api = HttpHypothesisApi::new(format!("{}/", server.uri()));
    let dashboard: Dashboard = api.fetch_dashboard().await.unwrap();

    assert_eq!(dashboard.stages.len(), 1);
    let stage: &StageSummary = &dashboard.stages[0];
    assert_eq!(stage.sla_hours, 72);
    assert_eq!(stage.items[0].id, "HYP-001");
    assert!(dashboard.focus_hypothesis.is_none());
}

#[tokio::test]
async fn update_stage_sends_patch_body() {
    let server = MockServer::start().await;
    let updated = HypothesisDetail::new("HYP-001", "Predictive downtime alerts", StageKey::Scoping);
    Mock::given(method("PATCH"))
        .and(path("/hypotheses/HYP-001"))
        .and(body_json(json!({ "stage": "SCOPING", "updatedBy": "System" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpHypothesisApi::new(server.uri());
    let update = StageUpdate {
        stage: StageKey::Scoping,
        updated_by: "System".to_string(),
    };
    let detail = api.update_stage("HYP-001", &update).await.unwrap();
    assert_eq!(detail, updated);
}

#[tokio::test]
async fn error_status_carries_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hypotheses/HYP-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Hypothesis not found"))
        .mount(&server)
        .await;

    let api = HttpHypothesisApi::new(server.uri());
    let err = api.fetch_detail("HYP-404").await.unwrap_err();

    match &err {
        BoardError::Api { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message, "Hypothesis not found");
        }
        other => panic!("expected an API error, got {:?}", other),
    }
    assert_eq!(err.user_message().as_deref(), Some("Hypothesis not found"));
}

#[tokio::test]
async fn undecodable_body_is_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hypotheses/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let api = HttpHypothesisApi::new(server.uri());
    let err = api.fetch_dashboard().await.unwrap_err();
    assert_eq!(err.code(), "INVALID_JSON");
}
