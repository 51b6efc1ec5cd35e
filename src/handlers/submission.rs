// src/handlers/submission.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::submission::{NewQuizSubmission, QuizSubmission, SubmitQuizRequest},
};

/// Accepts a quiz submission and persists it.
///
/// Every payload field is optional; missing fields take fixed defaults
/// (username "Anonymous", empty answers map, zero counts). The stored
/// row, including its generated id, is not echoed back.
///
/// GET requests carry no JSON body, so the extractor yields `None` and a
/// fully-defaulted record is written. The original service routed GET and
/// POST to the same creation logic; existing clients depend on it.
pub async fn submit_quiz(
    State(pool): State<PgPool>,
    payload: Result<Option<Json<SubmitQuizRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // A body that is present but malformed (bad JSON, wrong field type)
    // is rejected here instead of being handed to the store.
    let req = payload
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?
        .map(|Json(req)| req)
        .unwrap_or_default();
    let new = NewQuizSubmission::from(req);

    let submission = QuizSubmission::create(&pool, new).await.map_err(|e| {
        tracing::error!("Failed to store quiz submission: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!(
        id = submission.id,
        username = %submission.username,
        "Quiz submission stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Quiz submitted successfully"
        })),
    ))
}
