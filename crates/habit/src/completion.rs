use std::collections::HashSet;

use time::Date;

use crate::{Habit, due_habits};

/// Completion records as (habit id, day) pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Completions(HashSet<(String, Date)>);

impl Completions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, habit_id: impl Into<String>, day: Date) -> bool {
        self.0.insert((habit_id.into(), day))
    }

    pub fn is_completed(&self, habit_id: &str, day: Date) -> bool {
        self.0.contains(&(habit_id.to_owned(), day))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Date)> for Completions {
    fn from_iter<T: IntoIterator<Item = (String, Date)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An empty due list is never reported as completed.
pub fn all_completed<'a>(
    due: impl IntoIterator<Item = &'a Habit>,
    completions: &Completions,
    day: Date,
) -> bool {
    let mut due = due.into_iter().peekable();

    due.peek().is_some() && due.all(|habit| completions.is_completed(&habit.id, day))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub habit: Habit,
    pub completed: bool,
}

/// Habits due on one day with their completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agenda {
    pub day: Date,
    pub items: Vec<AgendaItem>,
    pub all_completed: bool,
}

impl Agenda {
    pub fn new(habits: impl IntoIterator<Item = Habit>, completions: &Completions, day: Date) -> Self {
        let due = due_habits(habits, day);
        let all_completed = all_completed(&due, completions, day);
        let items = due
            .into_iter()
            .map(|habit| AgendaItem {
                completed: completions.is_completed(&habit.id, day),
                habit,
            })
            .collect();

        Self {
            day,
            items,
            all_completed,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Frequency;
    use time::macros::date;

    fn habit(id: &str, frequency: Frequency) -> Habit {
        Habit {
            id: id.to_owned(),
            name: id.to_owned(),
            frequency,
            added: date!(2024 - 01 - 01),
        }
    }

    #[test]
    fn test_is_completed_matches_habit_and_day() {
        let day = date!(2024 - 06 - 15);
        let completions = Completions::from_iter([("water".to_owned(), day)]);

        assert!(completions.is_completed("water", day));
        assert!(!completions.is_completed("water", date!(2024 - 06 - 16)));
        assert!(!completions.is_completed("run", day));
    }

    #[test]
    fn test_all_completed_is_false_without_due_habits() {
        let day = date!(2024 - 06 - 15);
        let none: Vec<Habit> = Vec::new();
        let mut completions = Completions::new();

        assert!(!all_completed(&none, &completions, day));

        completions.insert("water", day);
        assert!(!all_completed(&none, &completions, day));
    }

    #[test]
    fn test_all_completed_requires_every_due_habit() {
        let day = date!(2024 - 06 - 15);
        let due = vec![habit("water", Frequency::Daily), habit("read", Frequency::Daily)];
        let mut completions = Completions::new();

        completions.insert("water", day);
        assert!(!all_completed(&due, &completions, day));

        completions.insert("read", date!(2024 - 06 - 14));
        assert!(!all_completed(&due, &completions, day));

        completions.insert("read", day);
        assert!(all_completed(&due, &completions, day));
    }

    #[test]
    fn test_agenda_flags_completed_items() {
        // Saturday: the weekdays habit is not due
        let day = date!(2024 - 06 - 15);
        let habits = vec![
            habit("desk", Frequency::Weekdays),
            habit("water", Frequency::Daily),
        ];
        let completions = Completions::from_iter([("water".to_owned(), day)]);

        let agenda = Agenda::new(habits, &completions, day);

        assert_eq!(agenda.items.len(), 1);
        assert_eq!(agenda.items[0].habit.id, "water");
        assert!(agenda.items[0].completed);
        assert!(agenda.all_completed);
        assert_eq!(agenda.completed_count(), 1);
    }

    #[test]
    fn test_agenda_ignores_completions_of_habits_not_due() {
        let day = date!(2024 - 06 - 15);
        let completions = Completions::from_iter([("desk".to_owned(), day)]);

        let agenda = Agenda::new(vec![habit("desk", Frequency::Weekdays)], &completions, day);

        assert!(agenda.items.is_empty());
        assert!(!agenda.all_completed);
    }
}
