use std::ops::Deref;

use habitrack_db::table::{Completion as CompletionTable, Habit as HabitTable};
use habitrack_shared::to_timestamp;
use sea_query::{Expr, ExprTrait, OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::Date;
use ulid::Ulid;
use validator::Validate;

use crate::{CompletionState, Frequency};

#[derive(Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub frequency: Frequency,
    pub added: Date,
}

#[derive(Clone)]
pub struct Command(pub habitrack_shared::State);

impl Deref for Command {
    type Target = habitrack_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub async fn create(&self, input: CreateInput) -> habitrack_shared::Result<String> {
        let input = CreateInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let id = Ulid::new().to_string();
        let mut statement = sea_query::Query::insert()
            .into_table(HabitTable::Table)
            .columns([
                HabitTable::Id,
                HabitTable::Name,
                HabitTable::Frequency,
                HabitTable::Added,
            ])
            .to_owned();

        statement
            .values([
                id.to_owned().into(),
                input.name.into(),
                input.frequency.to_string().into(),
                to_timestamp(input.added).into(),
            ])
            .map_err(anyhow::Error::from)?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(habit = %id, frequency = %input.frequency, added = %input.added, "habit created");

        Ok(id)
    }

    /// Removes the habit, its completions go with it through the cascade.
    pub async fn delete(&self, id: impl Into<String>) -> habitrack_shared::Result<()> {
        let id = id.into();
        let statement = sea_query::Query::delete()
            .from_table(HabitTable::Table)
            .and_where(Expr::col(HabitTable::Id).eq(id.as_str()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        if result.rows_affected() == 0 {
            return Err(habitrack_shared::Error::NotFound);
        }

        tracing::info!(habit = %id, "habit deleted");

        Ok(())
    }

    /// Flips the completion of `habit_id` on `day`.
    ///
    /// Delete and insert share one write transaction and the insert only
    /// selects from an existing habit, an unknown id writes nothing and
    /// returns [`habitrack_shared::Error::NotFound`].
    pub async fn toggle(
        &self,
        habit_id: impl Into<String>,
        day: Date,
    ) -> habitrack_shared::Result<CompletionState> {
        let habit_id = habit_id.into();
        let timestamp = to_timestamp(day);
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = sea_query::Query::delete()
            .from_table(CompletionTable::Table)
            .and_where(Expr::col(CompletionTable::HabitId).eq(habit_id.as_str()))
            .and_where(Expr::col(CompletionTable::Day).eq(timestamp))
            .build_sqlx(SqliteQueryBuilder);

        let deleted = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted > 0 {
            tx.commit().await?;
            tracing::info!(habit = %habit_id, day = %day, "completion removed");

            return Ok(CompletionState::Incomplete);
        }

        let existing_habit = sea_query::Query::select()
            .column(HabitTable::Id)
            .expr(Expr::val(timestamp))
            .from(HabitTable::Table)
            .and_where(Expr::col(HabitTable::Id).eq(habit_id.as_str()))
            .to_owned();

        let mut statement = sea_query::Query::insert()
            .into_table(CompletionTable::Table)
            .columns([CompletionTable::HabitId, CompletionTable::Day])
            .to_owned();

        statement
            .select_from(existing_habit)
            .map_err(anyhow::Error::from)?
            .on_conflict(
                OnConflict::columns([CompletionTable::HabitId, CompletionTable::Day])
                    .do_nothing()
                    .to_owned(),
            );

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let inserted = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if inserted == 0 {
            tx.rollback().await?;

            return Err(habitrack_shared::Error::NotFound);
        }

        tx.commit().await?;
        tracing::info!(habit = %habit_id, day = %day, "completion added");

        Ok(CompletionState::Complete)
    }
}
