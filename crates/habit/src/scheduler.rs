use time::Date;

use crate::Habit;

/// Habits due on `day`, daily ones first, then weekly, monthly and weekdays.
///
/// Within a frequency group the input order is kept, callers pass habits in
/// storage order.
pub fn due_habits(habits: impl IntoIterator<Item = Habit>, day: Date) -> Vec<Habit> {
    let mut due = habits
        .into_iter()
        .filter(|habit| habit.is_due_on(day))
        .collect::<Vec<_>>();

    due.sort_by_key(|habit| habit.frequency.rank());

    due
}
