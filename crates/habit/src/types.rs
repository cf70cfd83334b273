use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Weekday};

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    /// Same weekday as the day the habit was added.
    Weekly,
    /// Same day of month as the day the habit was added, never clamped to
    /// shorter months.
    Monthly,
    /// Monday to Friday.
    Weekdays,
}

impl Frequency {
    pub fn parse(value: &str) -> habitrack_shared::Result<Self> {
        match Self::from_str(value.trim()) {
            Ok(frequency) => Ok(frequency),
            Err(_) => habitrack_shared::invalid!(
                "unknown frequency '{value}', expected one of daily, weekly, monthly, weekdays"
            ),
        }
    }

    /// Frequency rule alone, `added <= day` is checked by [`Habit::is_due_on`].
    pub fn is_due(self, added: Date, day: Date) -> bool {
        match self {
            Frequency::Daily => true,
            Frequency::Weekly => day.weekday() == added.weekday(),
            Frequency::Monthly => day.day() == added.day(),
            Frequency::Weekdays => !matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday),
        }
    }

    /// Position of the frequency group in a day listing.
    pub fn rank(self) -> u8 {
        match self {
            Frequency::Daily => 0,
            Frequency::Weekly => 1,
            Frequency::Monthly => 2,
            Frequency::Weekdays => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub frequency: Frequency,
    pub added: Date,
}

impl Habit {
    pub fn is_due_on(&self, day: Date) -> bool {
        self.added <= day && self.frequency.is_due(self.added, day)
    }
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum CompletionState {
    Complete,
    Incomplete,
}
