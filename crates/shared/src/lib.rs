mod command;
mod date;

pub use command::*;
pub use date::*;

/// Storage handle handed to commands and queries.
///
/// `write_db` is expected to hold a single connection so that every write,
/// toggles included, goes through one SQLite writer.
#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}
