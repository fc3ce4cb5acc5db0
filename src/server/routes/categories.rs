use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::categories::{get_all_categories, get_category},
        queries::questions::get_questions_for_category,
        Question,
    },
    server::{app::AppState, pagination::paginate},
};

use super::{categories_map, ApiError, ApiResponse, ListParams};

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: String,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoryList> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryList {
        success: true,
        categories: categories_map(categories),
    }))
}

// The id arrives as a raw path segment so that "/categories/a/questions"
// answers 404 instead of the router's 400.
async fn questions_for_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Query(params): Query<ListParams>,
) -> ApiResponse<CategoryQuestionList> {
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound)?;
    let category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;

    let questions = get_questions_for_category(&pool, id).await?;
    let total_questions = questions.len() as i64;
    let current = paginate(&questions, params.page.unwrap_or(1));
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionList {
        success: true,
        questions: current.to_vec(),
        total_questions,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
        .with_state(state)
}
