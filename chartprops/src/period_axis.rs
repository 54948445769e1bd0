// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Period axis: a time axis labelled by stacked calendar segments.
//!
//! Segments are addressed by 1-based indexed properties (`period1-class`, `period2-format`,
//! ...). The backing list grows on first use; every segment created on the way gets the
//! day/month/year defaults for its position and inherits the axis tick-label font and paint
//! as they are at that moment.
//!
//! `periodN-class` has a second effect for the first segment only: it also sets the class
//! the axis auto-ranges by.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use peniko::Brush;

use crate::axis::Axis;
use crate::dispatch::{HandlerEntry, HandlerTable, IndexedEntry, on_facet};
use crate::font::{Font, FontComponent, FontEdit, derive_font};
use crate::time::PeriodClass;
use crate::value::{parse_bool, parse_paint};
use crate::{Resolution, ValueError};

/// Highest segment count a property may create.
pub const MAX_SEGMENTS: usize = 32;

/// Label metadata for one segment of a period axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodSegment {
    /// Bucket class labelled by this segment.
    pub class: PeriodClass,
    /// Explicit date format; `None` uses the class default.
    pub format: Option<String>,
    /// Label font.
    pub font: Font,
    /// Label paint.
    pub paint: Brush,
    /// Whether divider lines are drawn between periods.
    pub dividers_visible: bool,
}

impl PeriodSegment {
    /// A segment with the defaults for position `index`.
    pub fn with_defaults(index: usize, font: &Font, paint: &Brush) -> Self {
        Self {
            class: PeriodClass::default_for_segment(index),
            format: None,
            font: font.clone(),
            paint: paint.clone(),
            dividers_visible: true,
        }
    }

    /// Effective date format: the explicit one, or the class default.
    pub fn date_format(&self) -> &str {
        self.format
            .as_deref()
            .unwrap_or_else(|| self.class.default_format())
    }
}

/// Period axis attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodScale {
    /// Class the axis range snaps to when auto-ranging.
    pub auto_range_class: PeriodClass,
    /// Label segments, finest first.
    pub segments: Vec<PeriodSegment>,
}

impl Default for PeriodScale {
    fn default() -> Self {
        Self {
            auto_range_class: PeriodClass::Day,
            segments: Vec::new(),
        }
    }
}

impl PeriodScale {
    /// Returns segment `index`, if it exists.
    pub fn segment(&self, index: usize) -> Option<&PeriodSegment> {
        self.segments.get(index)
    }

    /// Returns segment `index`, default-filling the list up to it.
    pub fn segment_or_insert(
        &mut self,
        index: usize,
        font: &Font,
        paint: &Brush,
    ) -> &mut PeriodSegment {
        while self.segments.len() <= index {
            let next = self.segments.len();
            self.segments
                .push(PeriodSegment::with_defaults(next, font, paint));
        }
        &mut self.segments[index]
    }

    pub(crate) fn resolve_fonts(&mut self, resolution: Resolution) {
        for segment in &mut self.segments {
            segment.font = segment.font.to_pixels(resolution);
        }
    }
}

/// Runs `apply` on segment `index` of a period axis, creating it if needed.
fn with_segment(
    axis: &mut Axis,
    index: usize,
    apply: impl FnOnce(&mut PeriodScale, &mut PeriodSegment),
) -> Result<(), ValueError> {
    if index >= MAX_SEGMENTS {
        return Err(ValueError::OutOfRange(alloc::format!("period{}", index + 1)));
    }
    let font = axis.tick_label_font.clone();
    let paint = axis.tick_label_paint.clone();
    on_facet(axis.period_scale_mut(), |period| {
        let mut segment = period.segment_or_insert(index, &font, &paint).clone();
        apply(period, &mut segment);
        period.segments[index] = segment;
        Ok(())
    })
}

fn set_class(axis: &mut Axis, index: usize, value: &str, _: Resolution) -> Result<(), ValueError> {
    let class = PeriodClass::parse(value)?;
    with_segment(axis, index, |period, segment| {
        segment.class = class;
        if index == 0 {
            period.auto_range_class = class;
        }
    })
}

fn set_format(axis: &mut Axis, index: usize, value: &str, _: Resolution) -> Result<(), ValueError> {
    let format = value.trim();
    if format.is_empty() {
        return Err(ValueError::Token {
            value: value.to_string(),
            expected: "a date format pattern",
        });
    }
    with_segment(axis, index, |_, segment| segment.format = Some(format.to_string()))
}

fn edit_segment_font(
    axis: &mut Axis,
    index: usize,
    component: FontComponent,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    let edit = FontEdit::parse(component, value)?;
    with_segment(axis, index, |_, segment| {
        segment.font = derive_font(Some(&segment.font), &edit, resolution);
    })
}

pub(crate) static PERIOD_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[HandlerEntry {
        name: "auto-range-class",
        apply: |a, v, _| {
            let class = PeriodClass::parse(v)?;
            on_facet(a.period_scale_mut(), |p| {
                p.auto_range_class = class;
                Ok(())
            })
        },
    }],
    indexed: &[
        IndexedEntry {
            prefix: "period",
            field: "class",
            apply: set_class,
        },
        IndexedEntry {
            prefix: "period",
            field: "format",
            apply: set_format,
        },
        IndexedEntry {
            prefix: "period",
            field: "font-family",
            apply: |a, i, v, r| edit_segment_font(a, i, FontComponent::Family, v, r),
        },
        IndexedEntry {
            prefix: "period",
            field: "font-size",
            apply: |a, i, v, r| edit_segment_font(a, i, FontComponent::Size, v, r),
        },
        IndexedEntry {
            prefix: "period",
            field: "font-style",
            apply: |a, i, v, r| edit_segment_font(a, i, FontComponent::Style, v, r),
        },
        IndexedEntry {
            prefix: "period",
            field: "paint",
            apply: |a, i, v, _| {
                let paint = parse_paint(v)?;
                with_segment(a, i, |_, s| s.paint = paint)
            },
        },
        IndexedEntry {
            prefix: "period",
            field: "dividers",
            apply: |a, i, v, _| {
                let visible = parse_bool(v)?;
                with_segment(a, i, |_, s| s.dividers_visible = visible)
            },
        },
    ],
};
