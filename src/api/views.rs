//! Server-rendered HTML views.
//!
//! Templates are compiled into the binary and registered once at startup.

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::config::DATE_TIME_PATTERN;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

const HOME: &str = "home";
const USERS: &str = "users";
const NEW_USER: &str = "new_user";

/// Row shown in the user list
#[derive(Debug, Serialize)]
struct UserRow<'a> {
    id: i32,
    username: &'a str,
    created_at: String,
}

impl<'a> From<&'a User> for UserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id,
            username: &user.username,
            created_at: user
                .created_at
                .map(|at| at.format(DATE_TIME_PATTERN).to_string())
                .unwrap_or_default(),
        }
    }
}

/// Registry of the three page templates
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    /// Register the embedded templates.
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        for (name, source) in [
            (HOME, include_str!("../../templates/home.hbs")),
            (USERS, include_str!("../../templates/users.hbs")),
            (NEW_USER, include_str!("../../templates/new_user.hbs")),
        ] {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::internal(format!("Invalid template {}: {}", name, e)))?;
        }

        Ok(Self { registry })
    }

    /// Static home page
    pub fn home(&self) -> AppResult<Html<String>> {
        self.render(HOME, &json!({}))
    }

    /// List of all users
    pub fn users(&self, users: &[User]) -> AppResult<Html<String>> {
        let rows: Vec<UserRow<'_>> = users.iter().map(UserRow::from).collect();
        self.render(USERS, &json!({ "users": rows }))
    }

    /// Creation form
    pub fn new_user(&self) -> AppResult<Html<String>> {
        self.render(NEW_USER, &json!({}))
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(name, data)?))
    }
}
