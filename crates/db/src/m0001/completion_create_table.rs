use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{Completion, Habit};

pub struct Operation;

// The composite primary key is the only guard against a second completion
// for the same (habit, day).
fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Completion::Table)
        .col(
            ColumnDef::new(Completion::HabitId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(Completion::Day).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(Completion::HabitId)
                .col(Completion::Day),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_completion_habit")
                .from(Completion::Table, Completion::HabitId)
                .to(Habit::Table, Habit::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Completion::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
