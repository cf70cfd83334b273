use std::{path::PathBuf, str::FromStr};

use habitrack_habit::{CreateInput, Frequency};
use habitrack_shared::State;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use time::Date;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .foreign_keys(true);

    let write_db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            opts.clone()
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal),
        )
        .await?;

    let mut conn = write_db.acquire().await?;
    habitrack_db::migrate(&mut conn).await?;
    drop(conn);

    let read_db = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(opts.read_only(true))
        .await?;

    Ok(State { read_db, write_db })
}

#[allow(dead_code)]
pub async fn create_habit(
    cmd: &habitrack_habit::Command,
    name: impl Into<String>,
    frequency: Frequency,
    added: Date,
) -> anyhow::Result<String> {
    Ok(cmd
        .create(CreateInput {
            name: name.into(),
            frequency,
            added,
        })
        .await?)
}

#[allow(dead_code)]
pub async fn count_completions(state: &State) -> anyhow::Result<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM completion")
        .fetch_one(&state.write_db)
        .await?;

    Ok(count.0)
}
