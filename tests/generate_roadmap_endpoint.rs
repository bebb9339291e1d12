//! Endpoint-level tests for /generate-roadmap.
//!
//! These drive the axum handler directly with an offline generator, so they
//! cover the request-to-response path without a live Gemini credential.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use roadmapper::config::Config;
use roadmapper::error::RoadmapError;
use roadmapper::generation::{FakeGenerator, Generator};
use roadmapper::http::{AppState, AspirationRequest, build_router, generate_roadmap_handler};
use roadmapper::prompts::PromptStyle;
use roadmapper::roadmap::{Roadmap, RoadmapGenerator};
use serde_json::json;

fn state_with(reply: Option<&str>, style: PromptStyle) -> AppState {
    let generator = reply.map(|r| Arc::new(FakeGenerator::new(r)) as Arc<dyn Generator>);
    AppState {
        config: Arc::new(Config::default()),
        roadmap: RoadmapGenerator::new(generator, style),
    }
}

fn request(aspiration: &str) -> Json<AspirationRequest> {
    Json(AspirationRequest {
        aspiration: aspiration.to_string(),
    })
}

#[tokio::test]
async fn markdown_reply_round_trips_the_model_text() {
    let state = state_with(Some("# Your roadmap\n1. start"), PromptStyle::Checklist);
    let Json(reply) = generate_roadmap_handler(State(state), request("become a pilot"))
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&reply).unwrap(),
        json!({"roadmap": "# Your roadmap\n1. start"})
    );
}

#[tokio::test]
async fn unavailable_generator_answers_500_with_fixed_detail() {
    let state = state_with(None, PromptStyle::Checklist);
    let err = generate_roadmap_handler(State(state), request("become a pilot"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Generative AI model not initialized. Check your API key."
    );

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unavailable_detail_ignores_aspiration_content() {
    let long = "a".repeat(10_000);
    for aspiration in ["become a pilot", "", "🚀", long.as_str()] {
        let state = state_with(None, PromptStyle::Markdown);
        let err = generate_roadmap_handler(State(state), request(aspiration))
            .await
            .unwrap_err();
        assert!(matches!(err, RoadmapError::Unavailable));
    }
}

#[tokio::test]
async fn structured_reply_is_the_decoded_object() {
    let payload = r#"{"steps": [{"step":1,"title":"Get a medical certificate","description":"...","timeline":"1 month","status":false,"notes":""}], "resources": [], "skills": [], "tips": []}"#;
    let state = state_with(Some(payload), PromptStyle::Structured);
    let Json(reply) = generate_roadmap_handler(State(state), request("become a pilot"))
        .await
        .unwrap();
    match reply {
        Roadmap::Structured(value) => {
            assert_eq!(value["steps"][0]["step"], json!(1));
            assert_eq!(value["steps"].as_array().unwrap().len(), 1);
        }
        Roadmap::Markdown { .. } => panic!("expected structured reply"),
    }
}

#[tokio::test]
async fn malformed_model_json_answers_500_generation_error() {
    let state = state_with(Some("not valid json"), PromptStyle::Structured);
    let err = generate_roadmap_handler(State(state), request("become a pilot"))
        .await
        .unwrap_err();
    assert!(matches!(err, RoadmapError::Generation { .. }));
    assert!(
        err.to_string()
            .contains("An error occurred with the AI service")
    );
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn empty_aspiration_is_accepted() {
    // No input validation beyond "it is a string"
    let state = state_with(Some("do something first"), PromptStyle::Markdown);
    let Json(reply) = generate_roadmap_handler(State(state), request(""))
        .await
        .unwrap();
    match reply {
        Roadmap::Markdown { roadmap } => assert_eq!(roadmap, "do something first"),
        Roadmap::Structured(_) => panic!("expected markdown reply"),
    }
}

#[test]
fn router_builds_with_default_cors_origin() {
    let state = state_with(None, PromptStyle::Checklist);
    assert!(build_router(state).is_ok());
}

#[test]
fn router_rejects_unparsable_cors_origin() {
    let mut config = Config::default();
    config.runtime.cors_origin = "not a header\nvalue".to_string();
    let state = AppState {
        config: Arc::new(config),
        roadmap: RoadmapGenerator::new(None, PromptStyle::Checklist),
    };
    assert!(build_router(state).is_err());
}
