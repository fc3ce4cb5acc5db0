use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::get_all_categories,
        queries::questions::{self, create_question, delete_question, search_questions},
        Question,
    },
    server::{app::AppState, extract::ApiJson, pagination::paginate},
};

use super::{categories_map, ApiError, ApiResponse, ListParams};

// One payload for the dual-purpose collection POST: a non-empty searchTerm
// selects the search branch, anything else must be a complete new question.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionPayload {
    search_term: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct Created {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
    deleted: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListParams>,
) -> ApiResponse<QuestionList> {
    let questions = questions::get_all_questions(&pool).await?;
    let total_questions = questions.len() as i64;
    let current = paginate(&questions, params.page.unwrap_or(1));
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_all_categories(&pool).await?;
    Ok(Json(QuestionList {
        success: true,
        questions: current.to_vec(),
        total_questions,
        categories: categories_map(categories),
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    Query(params): Query<ListParams>,
    ApiJson(payload): ApiJson<QuestionPayload>,
) -> Result<Response, ApiError> {
    if let Some(term) = payload.search_term.as_deref().filter(|t| !t.is_empty()) {
        let matches = search_questions(&pool, term).await?;
        let total_questions = matches.len() as i64;
        let current = paginate(&matches, params.page.unwrap_or(1));
        return Ok(Json(SearchResults {
            success: true,
            questions: current.to_vec(),
            total_questions,
        })
        .into_response());
    }

    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) else {
        return Err(ApiError::Unprocessable);
    };

    let id = create_question(&pool, &question, &answer, category, difficulty)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    Ok(Json(Created {
        success: true,
        created: id,
    })
    .into_response())
}

async fn remove_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> ApiResponse<Deleted> {
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound)?;
    let removed = delete_question(&pool, id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    if removed == 0 {
        return Err(ApiError::Unprocessable);
    }
    Ok(Json(Deleted {
        success: true,
        deleted: id,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(remove_question))
        .with_state(state)
}
