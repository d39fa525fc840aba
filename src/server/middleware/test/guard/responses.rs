//! Tests for the HTTP shape of guard outcomes.
//!
//! Denials answer their status with a `{"error": code}` body; faults answer
//! a bare 500 with an empty body. The two must never look alike on the wire.

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use sea_orm::DbErr;

use super::*;
use crate::server::{error::AppError, validation::Violation};

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Tests a permission denial answers 403 with its stable code.
#[tokio::test]
async fn denial_answers_status_and_code() {
    let response = GuardError::Denied(Denial::NotLoggedIn).into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_bytes(response).await;
    assert_eq!(body, br#"{"error":"notLoggedIn"}"#);
}

/// Tests a malformed-id denial answers 400.
#[tokio::test]
async fn bad_id_denial_answers_400() {
    let response = GuardError::Denied(Denial::IdMustBeInteger).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(response).await;
    assert_eq!(body, br#"{"error":"IdMustBeInteger"}"#);
}

/// Tests a collaborator fault answers a bare 500 with no body.
#[tokio::test]
async fn fault_answers_bare_500() {
    let response = GuardError::Fault(fake_failure()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(response).await;
    assert!(body.is_empty());
}

/// Tests a handler-side database failure also answers a bare 500.
///
/// Guards passing does not protect the handler's own collaborator calls;
/// their failures collapse into the same opaque fault response.
#[tokio::test]
async fn handler_database_failure_answers_bare_500() {
    let response =
        AppError::DbErr(DbErr::Custom("fake storage error".to_string())).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(response).await;
    assert!(body.is_empty());
}

/// Tests a validation violation answers 400 with its code.
#[tokio::test]
async fn violation_answers_400_with_code() {
    let response = AppError::ValidationErr(Violation::NameTooLong).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(response).await;
    assert_eq!(body, br#"{"error":"nameTooLong"}"#);
}
