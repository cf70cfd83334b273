use axum::{
    extract::{Form, Query, State},
    response::IntoResponse,
};
use habitrack_habit::{CreateInput, Frequency};
use serde::Deserialize;
use strum::VariantArray;
use time::Date;

use crate::routes::{AppState, required};
use crate::template::{StripDay, Template, date_strip, filters};

#[derive(askama::Template)]
#[template(path = "add_habit.html")]
pub struct AddHabitTemplate {
    pub current_path: String,
    pub day: Date,
    pub strip: Vec<StripDay>,
    pub frequencies: &'static [Frequency],
    pub message: Option<String>,
}

impl AddHabitTemplate {
    fn new(day: Date) -> Self {
        Self {
            current_path: "/add".to_owned(),
            day,
            strip: date_strip(day),
            frequencies: Frequency::VARIANTS,
            message: None,
        }
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub date: Option<String>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let day = crate::try_page_response!(
        sync: habitrack_shared::resolve_day(query.date.as_deref(), app.timezone()),
        template
    );

    template.render(AddHabitTemplate::new(day)).into_response()
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub habit: String,
    #[serde(default)]
    pub frequency: String,
}

/// POST /add - creates a habit starting on the selected day
#[tracing::instrument(skip_all, fields(date = ?query.date, frequency = %input.frequency))]
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let day = crate::try_page_response!(
        sync: habitrack_shared::resolve_day(query.date.as_deref(), app.timezone()),
        template
    );

    let frequency = crate::try_page_response!(
        sync: required(&input.frequency, "frequency").and_then(Frequency::parse),
        template
    );

    crate::try_page_response!(
        app.habit_command.create(CreateInput {
            name: input.habit.to_owned(),
            frequency,
            added: day,
        }),
        template
    );

    template
        .render(AddHabitTemplate {
            message: Some(format!("Habit '{}' added", input.habit.trim())),
            ..AddHabitTemplate::new(day)
        })
        .into_response()
}
