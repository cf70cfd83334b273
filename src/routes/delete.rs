use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Redirect},
};
use habitrack_habit::Habit;
use serde::Deserialize;
use time::Date;

use crate::routes::{AppState, required};
use crate::template::{StripDay, Template, date_strip, filters};

#[derive(askama::Template)]
#[template(path = "delete.html")]
pub struct DeleteTemplate {
    pub current_path: String,
    pub day: Date,
    pub strip: Vec<StripDay>,
    pub habits: Vec<Habit>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub date: Option<String>,
}

/// GET /delete - every stored habit, whatever the selected day
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let day = crate::try_page_response!(
        sync: habitrack_shared::resolve_day(query.date.as_deref(), app.timezone()),
        template
    );

    let habits = crate::try_page_response!(app.habit_query.all(), template);

    template
        .render(DeleteTemplate {
            current_path: "/delete".to_owned(),
            day,
            strip: date_strip(day),
            habits,
        })
        .into_response()
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(rename = "habitId", default)]
    pub habit_id: String,
}

#[tracing::instrument(skip_all, fields(habit_id = %input.habit_id))]
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let habit_id = crate::try_page_response!(sync: required(&input.habit_id, "habitId"), template);

    crate::try_page_response!(app.habit_command.delete(habit_id), template);

    Redirect::to("/delete").into_response()
}
