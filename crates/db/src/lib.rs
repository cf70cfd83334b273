use sqlx_migrator::{Info, Migrator};

mod m0001;
pub mod table;

pub use sqlx_migrator::{Migrate, Plan};

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::<sqlx::Sqlite>::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}

/// Applies every pending migration on the given connection.
pub async fn migrate(conn: &mut sqlx::SqliteConnection) -> anyhow::Result<()> {
    migrator()?.run(conn, &Plan::apply_all()).await?;

    Ok(())
}
