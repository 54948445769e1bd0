// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date axis attributes and handlers.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::axis::{Axis, ValueScale};
use crate::dispatch::{HandlerEntry, HandlerTable, on_facet};
use crate::time::DateTickUnit;
use crate::value::parse_token;
use crate::{Resolution, ValueError};

/// Where a tick mark sits within its date period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TickMarkPosition {
    /// At the first instant of the period.
    #[default]
    Start,
    /// At the middle of the period.
    Middle,
    /// At the last instant of the period.
    End,
}

/// Date axis attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateScale {
    /// Tick spacing; only used when automatic selection is off.
    pub tick_unit: DateTickUnit,
    /// Date format pattern for tick labels.
    pub date_format: Option<String>,
    /// Tick placement within each period.
    pub tick_mark_position: TickMarkPosition,
}

// An explicit tick unit turns off automatic selection.
fn set_tick_unit(axis: &mut Axis, value: &str, _: Resolution) -> Result<(), ValueError> {
    let unit = DateTickUnit::parse(value)?;
    on_facet(axis.value_mut(), |v| {
        if let ValueScale::Date(d) = &mut v.scale {
            d.tick_unit = unit;
            v.auto_tick_unit_selection = false;
        }
        Ok(())
    })
}

pub(crate) static DATE_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "tick-unit",
            apply: set_tick_unit,
        },
        HandlerEntry {
            name: "date-format",
            apply: |a, v, _| {
                on_facet(a.date_scale_mut(), |d| {
                    let v = v.trim();
                    d.date_format = (!v.is_empty()).then(|| v.to_string());
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "tick-mark-position",
            apply: |a, v, _| {
                let position = parse_token(
                    v,
                    &[
                        ("start", TickMarkPosition::Start),
                        ("middle", TickMarkPosition::Middle),
                        ("end", TickMarkPosition::End),
                    ],
                    "start, middle, end",
                )?;
                on_facet(a.date_scale_mut(), |d| {
                    d.tick_mark_position = position;
                    Ok(())
                })
            },
        },
    ],
    indexed: &[],
};

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::dispatch::resolve;
    use crate::time::DateUnit;

    const RES: Resolution = Resolution::Ppi(96.0);

    #[test]
    fn tick_unit_month() {
        let mut axis = Axis::date();
        assert!(resolve(&mut axis, "tick-unit", "month", RES));
        assert_eq!(
            axis.date_scale().unwrap().tick_unit,
            DateTickUnit::new(DateUnit::Month, 1)
        );
        assert!(!axis.value().unwrap().auto_tick_unit_selection);
    }

    #[test]
    fn invalid_tick_unit_is_applied_but_changes_nothing() {
        let mut axis = Axis::date();
        assert!(resolve(&mut axis, "tick-unit", "2 week", RES));
        let before = axis.clone();
        assert!(resolve(&mut axis, "tick-unit", "banana", RES));
        assert_eq!(axis, before);
        assert_eq!(
            axis.date_scale().unwrap().tick_unit,
            DateTickUnit::new(DateUnit::Week, 2)
        );
    }

    #[test]
    fn number_tick_unit_syntax_is_not_a_date_unit() {
        let mut axis = Axis::date();
        let before = axis.clone();
        assert!(resolve(&mut axis, "tick-unit", "2.5", RES));
        assert_eq!(axis, before);
    }

    #[test]
    fn format_and_position() {
        let mut axis = Axis::date();
        assert!(resolve(&mut axis, "date-format", "yyyy-MM", RES));
        assert!(resolve(&mut axis, "tick-mark-position", "Middle", RES));
        let date = axis.date_scale().unwrap();
        assert_eq!(date.date_format.as_deref(), Some("yyyy-MM"));
        assert_eq!(date.tick_mark_position, TickMarkPosition::Middle);
    }
}
