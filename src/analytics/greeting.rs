use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

use crate::analytics::window::{resolve_reference, DateFormat};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Greeting {
    Morning,
    Day,
    Evening,
    Night
}

impl Greeting {
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Greeting::Morning,
            12..=16 => Greeting::Day,
            17..=23 => Greeting::Evening,
            _ => Greeting::Night
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Greeting::Morning => "Доброе утро",
            Greeting::Day => "Добрый день",
            Greeting::Evening => "Добрый вечер",
            Greeting::Night => "Доброй ночи"
        }
    }
}

impl Display for Greeting {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for Greeting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Greeting for the hour of a `DD.MM.YYYY HH:MM:SS` timestamp, or of `now` if it does not parse.
pub fn greeting(date: &str, now: NaiveDateTime) -> Greeting {
    Greeting::for_hour(resolve_reference(date, DateFormat::Dotted, now).hour())
}
