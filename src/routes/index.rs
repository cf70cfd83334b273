use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use habitrack_habit::Agenda;
use serde::Deserialize;
use time::Date;

use crate::routes::AppState;
use crate::template::{StripDay, Template, date_strip, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: String,
    pub day: Date,
    pub strip: Vec<StripDay>,
    pub agenda: Agenda,
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub date: Option<String>,
}

#[tracing::instrument(skip_all, fields(date = ?query.date))]
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let day = crate::try_page_response!(
        sync: habitrack_shared::resolve_day(query.date.as_deref(), app.timezone()),
        template
    );

    let agenda = crate::try_page_response!(app.habit_query.agenda(day), template);

    template
        .render(IndexTemplate {
            current_path: "/".to_owned(),
            day,
            strip: date_strip(day),
            agenda,
        })
        .into_response()
}
