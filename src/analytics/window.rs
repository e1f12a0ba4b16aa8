use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

/// Display format of dates in every query output.
pub const DAY_FORMAT: &str = "%d.%m.%Y";
pub const ROLLING_WINDOW_DAYS: i64 = 90;

const DOTTED_DATE_TIME: &str = "%d.%m.%Y %H:%M:%S";
const ISO_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
const ISO_DATE: &str = "%Y-%m-%d";

/// Textual format of a reference date. Callers pick the one they expect;
/// a value in the other format is treated as unparseable.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DateFormat {
    /// `31.12.2021 16:44:00`
    Dotted,
    /// `2021-12-31 16:44:00`, or a bare `2021-12-31` meaning midnight.
    Iso
}

impl DateFormat {
    pub fn format(self, moment: NaiveDateTime) -> String {
        match self {
            DateFormat::Dotted => moment.format(DOTTED_DATE_TIME).to_string(),
            DateFormat::Iso => moment.format(ISO_DATE_TIME).to_string()
        }
    }

    pub fn parse(self, value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();

        match self {
            DateFormat::Dotted => NaiveDateTime::parse_from_str(value, DOTTED_DATE_TIME).ok(),
            DateFormat::Iso => NaiveDateTime::parse_from_str(value, ISO_DATE_TIME).ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(value, ISO_DATE).ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                })
        }
    }
}

/// A closed interval `[start, reference]`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateWindow {
    pub start: NaiveDateTime,
    pub reference: NaiveDateTime
}

impl DateWindow {
    /// From midnight on the first of the reference month up to the reference.
    pub fn month_to_date(value: &str, format: DateFormat, now: NaiveDateTime) -> Self {
        let reference = resolve_reference(value, format, now);
        Self::month_ending_at(reference)
    }

    /// The 90 days leading up to the reference, without snapping to day boundaries.
    pub fn rolling(value: &str, format: DateFormat, now: NaiveDateTime) -> Self {
        let reference = resolve_reference(value, format, now);
        Self::rolling_ending_at(reference)
    }

    pub fn month_ending_at(reference: NaiveDateTime) -> Self {
        let date = reference.date();
        let first_day = date.with_day0(0).unwrap_or(date);

        Self {
            start: first_day.and_time(NaiveTime::MIN),
            reference
        }
    }

    /// The start is clamped to `NaiveDateTime::MIN` for references near the calendar's lower bound.
    pub fn rolling_ending_at(reference: NaiveDateTime) -> Self {
        Self {
            start: reference.checked_sub_signed(Duration::days(ROLLING_WINDOW_DAYS))
                .unwrap_or(NaiveDateTime::MIN),
            reference
        }
    }

    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        self.start <= moment && moment <= self.reference
    }
}

/// Parses a reference date, falling back to `now` when the value does not match `format`.
pub fn resolve_reference(value: &str, format: DateFormat, now: NaiveDateTime) -> NaiveDateTime {
    format.parse(value).unwrap_or_else(|| {
        warn!("Reference date '{value}' does not match the {format:?} format, using the current time");
        now
    })
}

pub fn format_day(moment: NaiveDateTime) -> String {
    moment.format(DAY_FORMAT).to_string()
}
