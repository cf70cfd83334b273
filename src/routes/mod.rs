use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod add;
mod complete;
mod delete;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub habit_command: habitrack_habit::Command,
    pub habit_query: habitrack_habit::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: habitrack_shared::State) -> Self {
        Self {
            config,
            pool: state.read_db.clone(),
            habit_query: habitrack_habit::Query(state.clone()),
            habit_command: habitrack_habit::Command(state),
        }
    }

    pub fn timezone(&self) -> &str {
        &self.config.app.timezone
    }
}

/// Trimmed value of a required form field
pub(crate) fn required<'a>(value: &'a str, field: &str) -> habitrack_shared::Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        habitrack_shared::invalid!("missing field '{field}'");
    }

    Ok(value)
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(axum::http::StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/complete", post(complete::action))
        .route("/add", get(add::page).post(add::action))
        .route("/delete", get(delete::page))
        .route("/delete_habit", post(delete::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
