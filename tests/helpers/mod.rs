#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use habitrack::config::{
    AppConfig, Config, DatabaseConfig, ObservabilityConfig, ServerConfig,
};
use habitrack_shared::State;
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: State,
    _dir: TempDir,
}

pub fn test_config(database_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: database_url.to_owned(),
            max_connections: 4,
        },
        observability: ObservabilityConfig::default(),
        app: AppConfig::default(),
    }
}

/// Router backed by a migrated SQLite file in a temporary directory
pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let url = format!("sqlite:{}", path.display());

    let write_db = habitrack::db::create_write_pool(&url).await?;
    let mut conn = write_db.acquire().await?;
    habitrack_db::migrate(&mut conn).await?;
    drop(conn);

    let read_db = habitrack::db::create_read_pool(&url, 4).await?;
    let state = State { read_db, write_db };

    let router = habitrack::router(habitrack::AppState::new(test_config(&url), state.clone()));

    Ok(TestApp {
        router,
        state,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> anyhow::Result<Response<Body>> {
        let request = Request::builder().uri(uri).body(Body::empty())?;

        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn post_form(
        &self,
        uri: &str,
        form: &[(&str, &str)],
    ) -> anyhow::Result<Response<Body>> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(serde_urlencoded::to_string(form)?))?;

        Ok(self.router.clone().oneshot(request).await?)
    }

    pub async fn habit_id(&self, name: &str) -> anyhow::Result<String> {
        let habits = habitrack_habit::Query(self.state.clone()).all().await?;

        habits
            .into_iter()
            .find(|habit| habit.name == name)
            .map(|habit| habit.id)
            .ok_or_else(|| anyhow::anyhow!("habit '{name}' not found"))
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
