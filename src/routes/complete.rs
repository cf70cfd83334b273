use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::routes::{AppState, required};
use crate::template::Template;

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "habitId", default)]
    pub habit_id: String,
}

/// POST /complete - flips the completion of one habit for one day
#[tracing::instrument(skip_all, fields(habit_id = %input.habit_id, date = %input.date))]
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let day = crate::try_page_response!(
        sync: required(&input.date, "date").and_then(habitrack_shared::parse_day),
        template
    );

    let habit_id = crate::try_page_response!(sync: required(&input.habit_id, "habitId"), template);

    crate::try_page_response!(app.habit_command.toggle(habit_id, day), template);

    Redirect::to(&format!("/?date={}", habitrack_shared::format_day(day))).into_response()
}
