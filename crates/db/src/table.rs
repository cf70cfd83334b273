use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Habit {
    Table,
    Id,
    Name,
    Frequency,
    Added,
}

#[derive(Iden, Clone)]
pub enum Completion {
    Table,
    HabitId,
    Day,
}
