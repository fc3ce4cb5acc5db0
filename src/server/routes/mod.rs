mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use super::error::{ApiError, ApiResponse};

use crate::db::Category;

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
}

// The frontend consumes categories as an id -> type object; integer keys
// serialize as JSON strings.
pub fn categories_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
