use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};
use time::Date;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    use time::{Date, Duration};

    #[askama::filter_fn]
    pub fn iso(value: &Date, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(habitrack_shared::format_day(*value))
    }

    #[askama::filter_fn]
    pub fn weekday(value: &Date, _values: &dyn askama::Values) -> askama::Result<String> {
        let name = value.weekday().to_string();

        Ok(name.chars().take(3).collect())
    }

    #[askama::filter_fn]
    pub fn long_date(value: &Date, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(format!(
            "{}, {} {} {}",
            value.weekday(),
            value.month(),
            value.day(),
            value.year()
        ))
    }

    /// "Today", "Yesterday", "Tomorrow" or the weekday name, relative to
    /// today in the configured timezone
    #[askama::filter_fn]
    pub fn relative_day(value: &Date, values: &dyn askama::Values) -> askama::Result<String> {
        let timezone = askama::get_value::<String>(values, "timezone")?;
        let today = habitrack_shared::today(timezone);

        let label = match *value {
            day if day == today => "Today".to_owned(),
            day if Some(day) == today.checked_sub(Duration::DAY) => "Yesterday".to_owned(),
            day if Some(day) == today.checked_add(Duration::DAY) => "Tomorrow".to_owned(),
            day => day.weekday().to_string(),
        };

        Ok(label)
    }
}

/// One entry of the seven-day navigation
pub struct StripDay {
    pub day: Date,
    pub selected: bool,
}

pub fn date_strip(selected: Date) -> Vec<StripDay> {
    habitrack_shared::date_range(selected)
        .into_iter()
        .map(|day| StripDay {
            day,
            selected: day == selected,
        })
        .collect()
}

pub struct Template {
    pub timezone: String,
}

impl Template {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("timezone", Box::new(self.timezone.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.app.timezone.as_str()))
    }
}

#[derive(askama::Template)]
#[template(path = "400.html")]
pub struct BadRequestTemplate<'a> {
    pub message: &'a str,
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate<'a> {
    pub message: &'a str,
}

/// Unwraps a `habitrack_shared::Result` or returns the matching error page
///
/// - `InvalidInput` renders 400
/// - `Validate` renders 422
/// - `NotFound` (and `Ok(None)` with `opt:`) renders 404
/// - anything else is logged and renders 500
#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        $crate::try_page_response!(sync: $result.await, $template)
    };

    (opt: $result:expr, $template:expr) => {
        $crate::try_page_response!(sync opt: $result.await, $template)
    };

    (sync opt: $result:expr, $template:expr) => {
        match $crate::try_page_response!(sync: $result, $template) {
            Some(r) => r,
            _ => {
                return $template
                    .render_with_status(
                        axum::http::StatusCode::NOT_FOUND,
                        $crate::template::NotFoundTemplate,
                    )
                    .into_response();
            }
        }
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(habitrack_shared::Error::InvalidInput(message)) => {
                return $template
                    .render_with_status(
                        axum::http::StatusCode::BAD_REQUEST,
                        $crate::template::BadRequestTemplate { message: &message },
                    )
                    .into_response();
            }
            Err(habitrack_shared::Error::Validate(err)) => {
                return $template
                    .render_with_status(
                        axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                        $crate::template::BadRequestTemplate {
                            message: &err.to_string(),
                        },
                    )
                    .into_response();
            }
            Err(habitrack_shared::Error::NotFound) => {
                return $template
                    .render_with_status(
                        axum::http::StatusCode::NOT_FOUND,
                        $crate::template::NotFoundTemplate,
                    )
                    .into_response();
            }
            Err(err) => {
                tracing::error!("{err}");

                return $template
                    .render_with_status(
                        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                        $crate::template::ServerTemplate {
                            message: $crate::template::SERVER_ERROR_MESSAGE,
                        },
                    )
                    .into_response();
            }
        }
    };
}
