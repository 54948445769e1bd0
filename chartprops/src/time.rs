// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time vocabulary for date and period axes.
//!
//! - [`PeriodClass`] is the bucket class of one label segment of a period axis.
//! - [`DateTickUnit`] is the tick spacing of a date axis, e.g. `3 months`.

use crate::value::parse_token;
use crate::ValueError;

/// A calendar bucket used for period axis segments and auto-ranging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodClass {
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// One day.
    Day,
    /// One week.
    Week,
    /// One month.
    Month,
    /// One quarter.
    Quarter,
    /// One year.
    Year,
}

impl PeriodClass {
    /// Parses a class name such as `month` (case-insensitive).
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        parse_token(
            text,
            &[
                ("second", Self::Second),
                ("minute", Self::Minute),
                ("hour", Self::Hour),
                ("day", Self::Day),
                ("week", Self::Week),
                ("month", Self::Month),
                ("quarter", Self::Quarter),
                ("year", Self::Year),
            ],
            "second, minute, hour, day, week, month, quarter, year",
        )
    }

    /// Date format pattern used when a segment has no explicit format.
    pub fn default_format(self) -> &'static str {
        match self {
            Self::Second => "ss",
            Self::Minute => "mm",
            Self::Hour => "HH",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "MMM",
            Self::Quarter => "'Q'q",
            Self::Year => "yyyy",
        }
    }

    /// Class given to a segment that is created without one.
    ///
    /// Segment 0 counts days, segment 1 months, every later segment years.
    pub fn default_for_segment(index: usize) -> Self {
        match index {
            0 => Self::Day,
            1 => Self::Month,
            _ => Self::Year,
        }
    }
}

/// Calendar unit of a date tick step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// Seconds.
    Second,
    /// Minutes.
    Minute,
    /// Hours.
    Hour,
    /// Days.
    Day,
    /// Weeks.
    Week,
    /// Months.
    Month,
    /// Years.
    Year,
}

/// Tick spacing of a date axis: `multiple` × `unit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateTickUnit {
    /// Calendar unit.
    pub unit: DateUnit,
    /// Positive count of units per tick.
    pub multiple: u32,
}

impl DateTickUnit {
    /// Creates a tick unit.
    pub const fn new(unit: DateUnit, multiple: u32) -> Self {
        Self { unit, multiple }
    }

    /// Parses `month`, `months`, `3 month` or `3 months`.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::Token {
            value: text.into(),
            expected: "[count] second|minute|hour|day|week|month|year",
        };
        let mut words = text.split_whitespace();
        let (count, unit) = match (words.next(), words.next(), words.next()) {
            (Some(unit), None, None) => (None, unit),
            (Some(count), Some(unit), None) => (Some(count), unit),
            _ => return Err(invalid()),
        };
        let multiple = match count {
            None => 1,
            Some(count) => match count.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid()),
            },
        };
        let singular = unit
            .strip_suffix(['s', 'S'])
            .filter(|s| !s.is_empty())
            .unwrap_or(unit);
        let unit = parse_token(
            singular,
            &[
                ("second", DateUnit::Second),
                ("minute", DateUnit::Minute),
                ("hour", DateUnit::Hour),
                ("day", DateUnit::Day),
                ("week", DateUnit::Week),
                ("month", DateUnit::Month),
                ("year", DateUnit::Year),
            ],
            "second, minute, hour, day, week, month, year",
        )
        .map_err(|_| invalid())?;
        Ok(Self::new(unit, multiple))
    }
}

impl Default for DateTickUnit {
    fn default() -> Self {
        Self::new(DateUnit::Day, 1)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn segment_defaults_follow_day_month_year() {
        let classes = [0, 1, 2, 5].map(PeriodClass::default_for_segment);
        assert_eq!(
            classes,
            [PeriodClass::Day, PeriodClass::Month, PeriodClass::Year, PeriodClass::Year]
        );
        assert_eq!(PeriodClass::Day.default_format(), "d");
        assert_eq!(PeriodClass::Month.default_format(), "MMM");
        assert_eq!(PeriodClass::Year.default_format(), "yyyy");
    }

    #[test]
    fn tick_units_parse_with_optional_multiple() {
        assert_eq!(
            DateTickUnit::parse("month"),
            Ok(DateTickUnit::new(DateUnit::Month, 1))
        );
        assert_eq!(
            DateTickUnit::parse(" 3  Weeks "),
            Ok(DateTickUnit::new(DateUnit::Week, 3))
        );
        assert!(DateTickUnit::parse("banana").is_err());
        assert!(DateTickUnit::parse("0 day").is_err());
        assert!(DateTickUnit::parse("2 day extra").is_err());
        assert!(DateTickUnit::parse("").is_err());
    }
}
