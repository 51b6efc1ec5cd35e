// src/models/submission.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Represents the 'quiz_submissions' table in the database.
/// One row per quiz attempt; rows are never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub id: i64,

    /// Submitter name. Not unique: repeat attempts keep the same name.
    pub username: String,

    /// Answers map, e.g. {"q1": "b", "q2": "d"}.
    pub answers: sqlx::types::Json<HashMap<String, String>>,

    pub attempted_count: i64,
    pub unattempted_count: i64,

    /// Time in seconds.
    pub total_time_taken: i64,

    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Candidate record, everything except the store-assigned fields.
#[derive(Debug, Clone)]
pub struct NewQuizSubmission {
    pub username: String,
    pub answers: HashMap<String, String>,
    pub attempted_count: i64,
    pub unattempted_count: i64,
    pub total_time_taken: i64,
}

/// DTO for submitting a quiz attempt.
///
/// Every field is optional; absent fields fall back to the defaults in
/// `NewQuizSubmission::from`. A field that is present with the wrong type
/// fails deserialization and never reaches the store.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitQuizRequest {
    pub username: Option<String>,
    pub answers: Option<HashMap<String, String>>,
    pub attempted_count: Option<i64>,
    pub unattempted_count: Option<i64>,
    pub total_time_taken: Option<i64>,
}

impl From<SubmitQuizRequest> for NewQuizSubmission {
    fn from(req: SubmitQuizRequest) -> Self {
        Self {
            // An empty username is treated the same as a missing one.
            username: req
                .username
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            answers: req.answers.unwrap_or_default(),
            attempted_count: req.attempted_count.unwrap_or(0),
            unattempted_count: req.unattempted_count.unwrap_or(0),
            total_time_taken: req.total_time_taken.unwrap_or(0),
        }
    }
}

impl QuizSubmission {
    /// Inserts one submission row and returns it with the generated
    /// `id` and `submitted_at`. Both are assigned here, once, by the
    /// database; nothing in this crate writes to the row afterwards.
    pub async fn create(pool: &PgPool, new: NewQuizSubmission) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, QuizSubmission>(
            r#"
            INSERT INTO quiz_submissions
                (username, answers, attempted_count, unattempted_count, total_time_taken)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, answers, attempted_count, unattempted_count,
                      total_time_taken, submitted_at
            "#,
        )
        .bind(new.username)
        .bind(sqlx::types::Json(new.answers))
        .bind(new.attempted_count)
        .bind(new.unattempted_count)
        .bind(new.total_time_taken)
        .fetch_one(pool)
        .await
    }
}
