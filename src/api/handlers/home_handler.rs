//! Home page handler.

use axum::{extract::State, response::Html};

use crate::api::AppState;
use crate::errors::AppResult;

/// Render the static home page
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.home()
}
