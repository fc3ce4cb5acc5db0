use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    quiz::{pick_unseen, ALL_CATEGORIES},
    server::{app::AppState, extract::ApiJson},
    telemetry::QUIZ_QUESTION_CNTR,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizPayload {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

// The frontend sends the id as a string, older clients as a number.
#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

#[derive(Serialize)]
struct QuizRound {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(payload): ApiJson<QuizPayload>,
) -> ApiResponse<QuizRound> {
    let pool_of_questions = if payload.quiz_category.id == ALL_CATEGORIES {
        get_all_questions(&pool).await?
    } else {
        get_questions_for_category(&pool, payload.quiz_category.id).await?
    };

    let question = pick_unseen(
        &pool_of_questions,
        &payload.previous_questions,
        &mut rand::thread_rng(),
    )
    .cloned();

    if question.is_some() {
        let label = payload.quiz_category.kind.as_deref().unwrap_or("all");
        QUIZ_QUESTION_CNTR.with_label_values(&[label]).inc();
    }

    Ok(Json(QuizRound {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
