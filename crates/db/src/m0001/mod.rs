mod completion_create_day_idx;
mod completion_create_table;
mod habit_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "habitrack",
    "m0001",
    vec_box![],
    vec_box![
        habit_create_table::Operation,
        completion_create_table::Operation,
        completion_create_day_idx::Operation
    ]
);
