use std::ops::Deref;

use habitrack_db::table::{Completion as CompletionTable, Habit as HabitTable};
use habitrack_shared::{from_timestamp, to_timestamp};
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use time::Date;

use crate::{Agenda, Completions, Frequency, Habit};

#[derive(Debug, FromRow)]
pub struct HabitRow {
    pub id: String,
    pub name: String,
    pub frequency: sqlx::types::Text<Frequency>,
    pub added: i64,
}

impl TryFrom<HabitRow> for Habit {
    type Error = habitrack_shared::Error;

    fn try_from(row: HabitRow) -> Result<Self, Self::Error> {
        Ok(Habit {
            id: row.id,
            name: row.name,
            frequency: row.frequency.0,
            added: from_timestamp(row.added)?,
        })
    }
}

#[derive(Clone)]
pub struct Query(pub habitrack_shared::State);

impl Deref for Query {
    type Target = habitrack_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Habits in storage order, rowid follows insertion.
fn select_habits() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            HabitTable::Id,
            HabitTable::Name,
            HabitTable::Frequency,
            HabitTable::Added,
        ])
        .from(HabitTable::Table)
        .order_by_expr(Expr::cust("rowid"), Order::Asc)
        .to_owned()
}

impl Query {
    async fn fetch_habits(&self, statement: SelectStatement) -> habitrack_shared::Result<Vec<Habit>> {
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, HabitRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?
            .into_iter()
            .map(Habit::try_from)
            .collect()
    }

    pub async fn all(&self) -> habitrack_shared::Result<Vec<Habit>> {
        self.fetch_habits(select_habits()).await
    }

    /// Habits that already existed on `day`.
    pub async fn added_until(&self, day: Date) -> habitrack_shared::Result<Vec<Habit>> {
        let statement = select_habits()
            .and_where(Expr::col(HabitTable::Added).lte(to_timestamp(day)))
            .to_owned();

        self.fetch_habits(statement).await
    }

    pub async fn find(&self, id: impl Into<String>) -> habitrack_shared::Result<Option<Habit>> {
        let id: String = id.into();
        let statement = select_habits()
            .and_where(Expr::col(HabitTable::Id).eq(id))
            .limit(1)
            .to_owned();

        Ok(self.fetch_habits(statement).await?.into_iter().next())
    }

    pub async fn completions_on(&self, day: Date) -> habitrack_shared::Result<Completions> {
        let statement = sea_query::Query::select()
            .column(CompletionTable::HabitId)
            .from(CompletionTable::Table)
            .and_where(Expr::col(CompletionTable::Day).eq(to_timestamp(day)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(|(habit_id,)| (habit_id, day)).collect())
    }

    /// Due habits of `day` with their completion state.
    pub async fn agenda(&self, day: Date) -> habitrack_shared::Result<Agenda> {
        let habits = self.added_until(day).await?;
        let completions = self.completions_on(day).await?;

        Ok(Agenda::new(habits, &completions, day))
    }
}
