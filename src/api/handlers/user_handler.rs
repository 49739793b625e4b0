//! User list and registration handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};

use crate::api::AppState;
use crate::domain::{CreateUser, NewUser};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/new", get(new_user_form))
}

/// Render every stored user
pub async fn list_users(State(state): State<AppState>) -> AppResult<Html<String>> {
    let users = state.users.get_all_users().await?;
    state.views.users(&users)
}

/// Store a user from the submitted form and go back to the list
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<CreateUser>,
) -> AppResult<Response> {
    let user = NewUser::from(form);
    state.users.create_user(&user).await?;
    tracing::info!(username = %user.username, "User created");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/users")]).into_response())
}

/// Render the registration form
pub async fn new_user_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.new_user()
}
