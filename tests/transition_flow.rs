//! End-to-end stage transitions against a mock hypothesis service

use std::time::Duration;

use hypoboard::domain;
use hypoboard::schemas::{ChecklistItem, ChecklistStatus, Dashboard, HypothesisDetail, HypothesisItem};
use hypoboard::sync::{HttpHypothesisApi, SyncEngine};
use hypoboard::transition::{
    TransitionController, TransitionOrigin, TransitionOutcome, TransitionRequest, STAGE_MOVE_FAILED,
};
use hypoboard::workspace::{SharedWorkspace, ToastVariant, WorkspaceState};
use hypoboard::{StageKey, StageSummary};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn board_with(stage_of_001: StageKey) -> Dashboard {
    let stages = domain::STAGE_ORDER
        .iter()
        .map(|&key| {
            let mut items = Vec::new();
            if key == stage_of_001 {
                items.push(HypothesisItem::new("HYP-001", "Predictive downtime alerts", key));
            }
            if key == StageKey::Evaluation {
                items.push(HypothesisItem::new("HYP-007", "Churn early warning", key));
            }
            StageSummary::new(key).with_items(items)
        })
        .collect();
    Dashboard::from_stages(stages)
}

fn detail_in(stage: StageKey) -> HypothesisDetail {
    HypothesisDetail::new("HYP-001", "Predictive downtime alerts", stage)
        .with_owner("Ana Ruiz")
        .with_description("Cut unplanned downtime on line 4")
        .with_checklist(vec![ChecklistItem::new("Problem statement", ChecklistStatus::Complete)])
}

/// Workspace showing the IDEATION board with HYP-001 open in the detail panel
fn open_workspace() -> SharedWorkspace {
    let mut state = WorkspaceState::from_dashboard(board_with(StageKey::Ideation), Duration::from_millis(4200));
    state.active_detail = Some(detail_in(StageKey::Ideation));
    state.into_shared()
}

fn controller_for(server: &MockServer) -> TransitionController<HttpHypothesisApi> {
    let api = HttpHypothesisApi::new(server.uri());
    TransitionController::new(SyncEngine::new(api), "Ana Ruiz")
}

fn drag_to_scoping() -> TransitionRequest {
    TransitionRequest::new("HYP-001", StageKey::Ideation, StageKey::Scoping, TransitionOrigin::Drag)
}

async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| format!("{} {}", r.method.as_str(), r.url.path()))
        .collect()
}

#[tokio::test]
async fn successful_drag_patches_then_refetches_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/hypotheses/HYP-001"))
        .and(body_json(json!({ "stage": "SCOPING", "updatedBy": "Ana Ruiz" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_in(StageKey::Scoping)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hypotheses/HYP-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_in(StageKey::Scoping)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hypotheses/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(board_with(StageKey::Scoping)))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = open_workspace();
    let outcome = controller_for(&server)
        .submit(&workspace, drag_to_scoping())
        .await
        .unwrap();

    assert!(outcome.is_moved());
    assert_eq!(
        request_log(&server).await,
        vec![
            "PATCH /hypotheses/HYP-001".to_string(),
            "GET /hypotheses/HYP-001".to_string(),
            "GET /hypotheses/dashboard".to_string(),
        ]
    );

    let state = workspace.lock().await;
    let toasts: Vec<_> = state.toasts.active().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].variant, ToastVariant::Success);
    assert!(toasts[0].message.contains("SCOPING"));
    assert_eq!(domain::stage_of(&state.stages, "HYP-001"), Some(StageKey::Scoping));
    assert_eq!(state.active_detail.as_ref().unwrap().stage, StageKey::Scoping);
    assert_eq!(state.total_items(), 2);
    assert!(state.error.is_none());
    assert!(!state.busy);
}

#[tokio::test]
async fn rejected_patch_resyncs_board_and_shows_one_error_toast() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/hypotheses/HYP-001"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/hypotheses/HYP-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail_in(StageKey::Ideation)))
        .expect(0)
        .mount(&server)
        .await;
    let server_board = board_with(StageKey::Ideation);
    Mock::given(method("GET"))
        .and(path("/hypotheses/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&server_board))
        .expect(1)
        .mount(&server)
        .await;

    let workspace = open_workspace();
    let outcome = controller_for(&server)
        .submit(&workspace, drag_to_scoping())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Failed {
            message: STAGE_MOVE_FAILED.to_string()
        }
    );

    let state = workspace.lock().await;
    assert_eq!(state.stages, server_board.stages);
    let toasts: Vec<_> = state.toasts.active().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].variant, ToastVariant::Error);
    assert_eq!(toasts[0].message, STAGE_MOVE_FAILED);
    assert_eq!(state.error.as_deref(), Some(STAGE_MOVE_FAILED));
}

#[tokio::test]
async fn unreachable_service_rolls_back_optimistic_move() {
    // Nothing listens on this port once the server is dropped
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let api = HttpHypothesisApi::new(uri);
    let controller = TransitionController::new(SyncEngine::new(api), "Ana Ruiz");

    let workspace = open_workspace();
    let outcome = controller.submit(&workspace, drag_to_scoping()).await.unwrap();

    assert!(matches!(outcome, TransitionOutcome::Failed { .. }));
    let state = workspace.lock().await;
    assert_eq!(domain::stage_of(&state.stages, "HYP-001"), Some(StageKey::Ideation));
    assert_eq!(state.total_items(), 2);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn blocked_dialog_move_sends_nothing() {
    let server = MockServer::start().await;
    let workspace = open_workspace();

    let outcome = controller_for(&server)
        .submit(
            &workspace,
            TransitionRequest::new(
                "HYP-001",
                StageKey::Ideation,
                StageKey::Prioritization,
                TransitionOrigin::Dialog,
            ),
        )
        .await
        .unwrap();

    match outcome {
        TransitionOutcome::Blocked(report) => {
            assert!(!report.is_ready());
            assert_eq!(report.blocking_checks()[0].field, "ROI Metrics");
        }
        other => panic!("expected a blocked outcome, got {:?}", other),
    }
    assert!(request_log(&server).await.is_empty());
}
