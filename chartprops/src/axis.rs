// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis targets.
//!
//! A single [`Axis`] type carries the attributes every axis has, plus an [`AxisScale`] facet
//! for the attributes of its concrete kind. The kind is never stored separately: it is read
//! off the facet, so the variant used for dispatch always matches the data the handlers see.
//!
//! ```text
//! Axis
//! ├── ValueAxis
//! │   ├── NumberAxis
//! │   ├── LogAxis
//! │   ├── DateAxis
//! │   └── PeriodAxis
//! └── CategoryAxis
//!     └── ExtendedCategoryAxis
//! ```

extern crate alloc;

use alloc::string::{String, ToString};

use kurbo::Insets;
use peniko::Brush;
use peniko::color::palette::css;

use crate::category_axis::{CATEGORY_AXIS, CategoryAxis, EXTENDED_CATEGORY_AXIS};
use crate::date_axis::{DATE_AXIS, DateScale};
use crate::dispatch::{Configurable, HandlerEntry, HandlerTable, Variant, on_facet};
use crate::font::{Font, FontComponent, FontStyle, edit_font};
use crate::insets::{Side, set_inset, set_length};
use crate::period_axis::{PERIOD_AXIS, PeriodScale};
use crate::value::{
    assign, parse_bool, parse_double, parse_int, parse_paint, parse_positive, parse_token,
};
use crate::{Resolution, ValueError};

/// Axis variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Any axis.
    Axis,
    /// A continuous axis.
    ValueAxis,
    /// A linear numeric axis.
    NumberAxis,
    /// A logarithmic axis.
    LogAxis,
    /// A continuous time axis.
    DateAxis,
    /// A time axis labelled by calendar periods in stacked segments.
    PeriodAxis,
    /// A discrete axis.
    CategoryAxis,
    /// A category axis with a second row of sub-labels.
    ExtendedCategoryAxis,
}

impl Variant for AxisKind {
    type Target = Axis;

    fn parent(self) -> Option<Self> {
        match self {
            Self::Axis => None,
            Self::ValueAxis | Self::CategoryAxis => Some(Self::Axis),
            Self::NumberAxis | Self::LogAxis | Self::DateAxis | Self::PeriodAxis => {
                Some(Self::ValueAxis)
            }
            Self::ExtendedCategoryAxis => Some(Self::CategoryAxis),
        }
    }

    fn handlers(self) -> &'static HandlerTable<Axis> {
        match self {
            Self::Axis => &AXIS,
            Self::ValueAxis => &VALUE_AXIS,
            Self::NumberAxis => &NUMBER_AXIS,
            Self::LogAxis => &LOG_AXIS,
            Self::DateAxis => &DATE_AXIS,
            Self::PeriodAxis => &PERIOD_AXIS,
            Self::CategoryAxis => &CATEGORY_AXIS,
            Self::ExtendedCategoryAxis => &EXTENDED_CATEGORY_AXIS,
        }
    }
}

/// A configurable axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Axis title.
    pub label: Option<String>,
    /// Whether the axis is drawn at all.
    pub visible: bool,
    /// Title font.
    pub label_font: Font,
    /// Title paint.
    pub label_paint: Brush,
    /// Title rotation in degrees.
    pub label_angle: f64,
    /// Space around the title, in pixels.
    pub label_insets: Insets,
    /// Tick label font.
    pub tick_label_font: Font,
    /// Tick label paint.
    pub tick_label_paint: Brush,
    /// Whether tick labels are drawn.
    pub tick_labels_visible: bool,
    /// Whether tick marks are drawn.
    pub tick_marks_visible: bool,
    /// Tick mark length inside the plot area, in pixels.
    pub tick_mark_inside_length: f64,
    /// Tick mark length outside the plot area, in pixels.
    pub tick_mark_outside_length: f64,
    /// Tick mark paint.
    pub tick_mark_paint: Brush,
    /// Whether the axis line is drawn.
    pub axis_line_visible: bool,
    /// Axis line paint.
    pub axis_line_paint: Brush,
    /// Kind-specific attributes.
    pub scale: AxisScale,
}

/// Kind-specific axis attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// A continuous axis.
    Value(ValueAxis),
    /// A discrete axis.
    Category(CategoryAxis),
}

/// Attributes shared by continuous axes.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    /// Whether the range follows the data.
    pub auto_range: bool,
    /// Lower end of a fixed range.
    pub lower_bound: f64,
    /// Upper end of a fixed range.
    pub upper_bound: f64,
    /// Fraction of the range added below the data when auto-ranging.
    pub lower_margin: f64,
    /// Fraction of the range added above the data when auto-ranging.
    pub upper_margin: f64,
    /// Whether values increase towards the origin.
    pub inverted: bool,
    /// Whether the tick unit is picked automatically.
    pub auto_tick_unit_selection: bool,
    /// Whether minor tick marks are drawn.
    pub minor_tick_marks_visible: bool,
    /// Whether tick labels are rotated to run along the axis.
    pub vertical_tick_labels: bool,
    /// Scale-specific attributes.
    pub scale: ValueScale,
}

/// Scale-specific attributes of a continuous axis.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueScale {
    /// Linear numbers.
    Number(NumberScale),
    /// Logarithmic numbers.
    Log(LogScale),
    /// Continuous time.
    Date(DateScale),
    /// Calendar periods.
    Period(PeriodScale),
}

/// Which part of the number line an auto-ranged number axis may cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RangeType {
    /// Any value.
    #[default]
    Full,
    /// Non-negative values only.
    Positive,
    /// Non-positive values only.
    Negative,
}

/// Linear number axis attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumberScale {
    /// Fixed tick spacing; `None` while selection is automatic.
    pub tick_unit: Option<f64>,
    /// Whether auto-ranging always includes zero.
    pub auto_range_includes_zero: bool,
    /// Decimal format pattern for tick labels.
    pub number_format: Option<String>,
    /// Allowed auto-range.
    pub range_type: RangeType,
}

/// Logarithmic axis attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct LogScale {
    /// Logarithm base, greater than 1.
    pub base: f64,
    /// Smallest value shown; values at or below it are clamped.
    pub smallest_value: f64,
    /// Number of minor ticks between major ticks.
    pub minor_tick_count: u32,
}

impl Default for LogScale {
    fn default() -> Self {
        Self {
            base: 10.0,
            smallest_value: 1e-100,
            minor_tick_count: 9,
        }
    }
}

impl ValueAxis {
    fn new(scale: ValueScale) -> Self {
        Self {
            auto_range: true,
            lower_bound: 0.0,
            upper_bound: 1.0,
            lower_margin: 0.05,
            upper_margin: 0.05,
            inverted: false,
            auto_tick_unit_selection: true,
            minor_tick_marks_visible: false,
            vertical_tick_labels: false,
            scale,
        }
    }
}

impl Axis {
    /// Creates an axis with default styling around `scale`.
    ///
    /// Fonts start unresolved (in points); they become pixel sizes during the cascade.
    pub fn new(scale: AxisScale) -> Self {
        Self {
            label: None,
            visible: true,
            label_font: Font::points("sans-serif", FontStyle::Plain, 12.0),
            label_paint: Brush::Solid(css::BLACK),
            label_angle: 0.0,
            label_insets: Insets::uniform(3.0),
            tick_label_font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            tick_label_paint: Brush::Solid(css::BLACK),
            tick_labels_visible: true,
            tick_marks_visible: true,
            tick_mark_inside_length: 0.0,
            tick_mark_outside_length: 2.0,
            tick_mark_paint: Brush::Solid(css::GRAY),
            axis_line_visible: true,
            axis_line_paint: Brush::Solid(css::GRAY),
            scale,
        }
    }

    fn value_axis(scale: ValueScale) -> Self {
        Self::new(AxisScale::Value(ValueAxis::new(scale)))
    }

    /// A linear number axis.
    pub fn number() -> Self {
        Self::value_axis(ValueScale::Number(NumberScale::default()))
    }

    /// A logarithmic axis.
    pub fn log() -> Self {
        Self::value_axis(ValueScale::Log(LogScale::default()))
    }

    /// A date axis.
    pub fn date() -> Self {
        Self::value_axis(ValueScale::Date(DateScale::default()))
    }

    /// A period axis with no label segments yet.
    pub fn period() -> Self {
        Self::value_axis(ValueScale::Period(PeriodScale::default()))
    }

    /// A category axis.
    pub fn category() -> Self {
        Self::new(AxisScale::Category(CategoryAxis::default()))
    }

    /// A category axis with sub-labels.
    pub fn extended_category() -> Self {
        Self::new(AxisScale::Category(CategoryAxis::extended()))
    }

    /// Continuous-axis attributes, if this is a value axis.
    pub fn value(&self) -> Option<&ValueAxis> {
        match &self.scale {
            AxisScale::Value(v) => Some(v),
            AxisScale::Category(_) => None,
        }
    }

    /// Mutable [`Axis::value`].
    pub fn value_mut(&mut self) -> Option<&mut ValueAxis> {
        match &mut self.scale {
            AxisScale::Value(v) => Some(v),
            AxisScale::Category(_) => None,
        }
    }

    /// Number-axis attributes, if this is a number axis.
    pub fn number_scale(&self) -> Option<&NumberScale> {
        match &self.value()?.scale {
            ValueScale::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Mutable [`Axis::number_scale`].
    pub fn number_scale_mut(&mut self) -> Option<&mut NumberScale> {
        match &mut self.value_mut()?.scale {
            ValueScale::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Log-axis attributes, if this is a log axis.
    pub fn log_scale(&self) -> Option<&LogScale> {
        match &self.value()?.scale {
            ValueScale::Log(l) => Some(l),
            _ => None,
        }
    }

    /// Mutable [`Axis::log_scale`].
    pub fn log_scale_mut(&mut self) -> Option<&mut LogScale> {
        match &mut self.value_mut()?.scale {
            ValueScale::Log(l) => Some(l),
            _ => None,
        }
    }

    /// Date-axis attributes, if this is a date axis.
    pub fn date_scale(&self) -> Option<&DateScale> {
        match &self.value()?.scale {
            ValueScale::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Mutable [`Axis::date_scale`].
    pub fn date_scale_mut(&mut self) -> Option<&mut DateScale> {
        match &mut self.value_mut()?.scale {
            ValueScale::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Period-axis attributes, if this is a period axis.
    pub fn period_scale(&self) -> Option<&PeriodScale> {
        match &self.value()?.scale {
            ValueScale::Period(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable [`Axis::period_scale`].
    pub fn period_scale_mut(&mut self) -> Option<&mut PeriodScale> {
        match &mut self.value_mut()?.scale {
            ValueScale::Period(p) => Some(p),
            _ => None,
        }
    }

    /// Category-axis attributes, if this is a category axis.
    pub fn category_axis(&self) -> Option<&CategoryAxis> {
        match &self.scale {
            AxisScale::Category(c) => Some(c),
            AxisScale::Value(_) => None,
        }
    }

    /// Mutable [`Axis::category_axis`].
    pub fn category_axis_mut(&mut self) -> Option<&mut CategoryAxis> {
        match &mut self.scale {
            AxisScale::Category(c) => Some(c),
            AxisScale::Value(_) => None,
        }
    }
}

impl Configurable for Axis {
    type Variant = AxisKind;

    fn variant(&self) -> AxisKind {
        match &self.scale {
            AxisScale::Value(v) => match v.scale {
                ValueScale::Number(_) => AxisKind::NumberAxis,
                ValueScale::Log(_) => AxisKind::LogAxis,
                ValueScale::Date(_) => AxisKind::DateAxis,
                ValueScale::Period(_) => AxisKind::PeriodAxis,
            },
            AxisScale::Category(c) if c.sublabels.is_some() => AxisKind::ExtendedCategoryAxis,
            AxisScale::Category(_) => AxisKind::CategoryAxis,
        }
    }

    fn resolve_fonts(&mut self, resolution: Resolution) {
        self.label_font = self.label_font.to_pixels(resolution);
        self.tick_label_font = self.tick_label_font.to_pixels(resolution);
        match &mut self.scale {
            AxisScale::Value(v) => {
                if let ValueScale::Period(period) = &mut v.scale {
                    period.resolve_fonts(resolution);
                }
            }
            AxisScale::Category(c) => c.resolve_fonts(resolution),
        }
    }
}

fn set_label(axis: &mut Axis, value: &str, _: Resolution) -> Result<(), ValueError> {
    let value = value.trim();
    axis.label = (!value.is_empty()).then(|| value.to_string());
    Ok(())
}

static AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "label",
            apply: set_label,
        },
        HandlerEntry {
            name: "visible",
            apply: |a, v, _| assign(&mut a.visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "label-font-family",
            apply: |a, v, r| edit_font(&mut a.label_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "label-font-size",
            apply: |a, v, r| edit_font(&mut a.label_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "label-font-style",
            apply: |a, v, r| edit_font(&mut a.label_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "label-paint",
            apply: |a, v, _| assign(&mut a.label_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "label-angle",
            apply: |a, v, _| assign(&mut a.label_angle, parse_double(v)),
        },
        HandlerEntry {
            name: "tick-label-font-family",
            apply: |a, v, r| edit_font(&mut a.tick_label_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "tick-label-font-size",
            apply: |a, v, r| edit_font(&mut a.tick_label_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "tick-label-font-style",
            apply: |a, v, r| edit_font(&mut a.tick_label_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "tick-label-paint",
            apply: |a, v, _| assign(&mut a.tick_label_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "tick-labels-visible",
            apply: |a, v, _| assign(&mut a.tick_labels_visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "tick-marks-visible",
            apply: |a, v, _| assign(&mut a.tick_marks_visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "tick-mark-inside-length",
            apply: |a, v, r| set_length(&mut a.tick_mark_inside_length, v, r),
        },
        HandlerEntry {
            name: "tick-mark-outside-length",
            apply: |a, v, r| set_length(&mut a.tick_mark_outside_length, v, r),
        },
        HandlerEntry {
            name: "tick-mark-paint",
            apply: |a, v, _| assign(&mut a.tick_mark_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "axis-line-visible",
            apply: |a, v, _| assign(&mut a.axis_line_visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "axis-line-paint",
            apply: |a, v, _| assign(&mut a.axis_line_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "padding-top",
            apply: |a, v, r| set_inset(&mut a.label_insets, Side::Top, v, r),
        },
        HandlerEntry {
            name: "padding-left",
            apply: |a, v, r| set_inset(&mut a.label_insets, Side::Left, v, r),
        },
        HandlerEntry {
            name: "padding-bottom",
            apply: |a, v, r| set_inset(&mut a.label_insets, Side::Bottom, v, r),
        },
        HandlerEntry {
            name: "padding-right",
            apply: |a, v, r| set_inset(&mut a.label_insets, Side::Right, v, r),
        },
    ],
    indexed: &[],
};

// A fixed bound switches the axis to a fixed range.
fn set_bound(axis: &mut Axis, value: &str, upper: bool) -> Result<(), ValueError> {
    let bound = parse_double(value)?;
    on_facet(axis.value_mut(), |v| {
        if upper {
            v.upper_bound = bound;
        } else {
            v.lower_bound = bound;
        }
        v.auto_range = false;
        Ok(())
    })
}

static VALUE_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "auto-range",
            apply: |a, v, _| on_facet(a.value_mut(), |x| assign(&mut x.auto_range, parse_bool(v))),
        },
        HandlerEntry {
            name: "lower-bound",
            apply: |a, v, _| set_bound(a, v, false),
        },
        HandlerEntry {
            name: "upper-bound",
            apply: |a, v, _| set_bound(a, v, true),
        },
        HandlerEntry {
            name: "lower-margin",
            apply: |a, v, _| {
                on_facet(a.value_mut(), |x| assign(&mut x.lower_margin, parse_double(v)))
            },
        },
        HandlerEntry {
            name: "upper-margin",
            apply: |a, v, _| {
                on_facet(a.value_mut(), |x| assign(&mut x.upper_margin, parse_double(v)))
            },
        },
        HandlerEntry {
            name: "inverted",
            apply: |a, v, _| on_facet(a.value_mut(), |x| assign(&mut x.inverted, parse_bool(v))),
        },
        HandlerEntry {
            name: "auto-tick-unit-selection",
            apply: |a, v, _| {
                on_facet(a.value_mut(), |x| {
                    assign(&mut x.auto_tick_unit_selection, parse_bool(v))
                })
            },
        },
        HandlerEntry {
            name: "minor-tick-marks-visible",
            apply: |a, v, _| {
                on_facet(a.value_mut(), |x| {
                    assign(&mut x.minor_tick_marks_visible, parse_bool(v))
                })
            },
        },
        HandlerEntry {
            name: "vertical-tick-labels",
            apply: |a, v, _| {
                on_facet(a.value_mut(), |x| assign(&mut x.vertical_tick_labels, parse_bool(v)))
            },
        },
    ],
    indexed: &[],
};

// An explicit tick unit turns off automatic selection.
fn set_number_tick_unit(axis: &mut Axis, value: &str, _: Resolution) -> Result<(), ValueError> {
    let unit = parse_positive(value)?;
    on_facet(axis.value_mut(), |v| {
        if let ValueScale::Number(n) = &mut v.scale {
            n.tick_unit = Some(unit);
            v.auto_tick_unit_selection = false;
        }
        Ok(())
    })
}

static NUMBER_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "tick-unit",
            apply: set_number_tick_unit,
        },
        HandlerEntry {
            name: "auto-range-includes-zero",
            apply: |a, v, _| {
                on_facet(a.number_scale_mut(), |n| {
                    assign(&mut n.auto_range_includes_zero, parse_bool(v))
                })
            },
        },
        HandlerEntry {
            name: "number-format",
            apply: |a, v, _| {
                on_facet(a.number_scale_mut(), |n| {
                    let v = v.trim();
                    n.number_format = (!v.is_empty()).then(|| v.to_string());
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "range-type",
            apply: |a, v, _| {
                let range_type = parse_token(
                    v,
                    &[
                        ("full", RangeType::Full),
                        ("positive", RangeType::Positive),
                        ("negative", RangeType::Negative),
                    ],
                    "full, positive, negative",
                )?;
                on_facet(a.number_scale_mut(), |n| {
                    n.range_type = range_type;
                    Ok(())
                })
            },
        },
    ],
    indexed: &[],
};

static LOG_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "base",
            apply: |a, v, _| {
                let base = parse_double(v)?;
                if base <= 1.0 {
                    return Err(ValueError::OutOfRange(v.to_string()));
                }
                on_facet(a.log_scale_mut(), |l| {
                    l.base = base;
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "smallest-value",
            apply: |a, v, _| {
                on_facet(a.log_scale_mut(), |l| assign(&mut l.smallest_value, parse_positive(v)))
            },
        },
        HandlerEntry {
            name: "minor-tick-count",
            apply: |a, v, _| {
                on_facet(a.log_scale_mut(), |l| assign(&mut l.minor_tick_count, parse_int(v)))
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
    use crate::font::FontSize;

    const RES: Resolution = Resolution::Unspecified;

    #[test]
    fn variant_follows_the_scale_facet() {
        assert_eq!(Axis::number().variant(), AxisKind::NumberAxis);
        assert_eq!(Axis::log().variant(), AxisKind::LogAxis);
        assert_eq!(Axis::date().variant(), AxisKind::DateAxis);
        assert_eq!(Axis::period().variant(), AxisKind::PeriodAxis);
        assert_eq!(Axis::category().variant(), AxisKind::CategoryAxis);
        assert_eq!(
            Axis::extended_category().variant(),
            AxisKind::ExtendedCategoryAxis
        );
        assert_eq!(
            AxisKind::PeriodAxis.chain().as_slice(),
            &[AxisKind::Axis, AxisKind::ValueAxis, AxisKind::PeriodAxis]
        );
    }

    #[test]
    fn common_properties_apply_to_every_kind() {
        for mut axis in [Axis::number(), Axis::date(), Axis::category()] {
            assert!(resolve(&mut axis, "label", "Revenue", RES));
            assert!(resolve(&mut axis, "tick-mark-outside-length", "1in", RES));
            assert_eq!(axis.label.as_deref(), Some("Revenue"));
            assert_eq!(axis.tick_mark_outside_length, 100.0);
        }
    }

    #[test]
    fn tick_unit_depends_on_the_variant() {
        let mut number = Axis::number();
        assert!(resolve(&mut number, "tick-unit", "2.5", RES));
        assert_eq!(number.number_scale().unwrap().tick_unit, Some(2.5));
        assert!(!number.value().unwrap().auto_tick_unit_selection);

        let mut category = Axis::category();
        let before = category.clone();
        assert!(!resolve(&mut category, "tick-unit", "2.5", RES));
        assert_eq!(category, before);
    }

    #[test]
    fn value_properties_are_ignored_on_category_axes() {
        let mut axis = Axis::category();
        let before = axis.clone();
        assert!(!resolve(&mut axis, "inverted", "true", RES));
        assert!(!resolve(&mut axis, "base", "2", RES));
        assert_eq!(axis, before);
    }

    #[test]
    fn bounds_fix_the_range() {
        let mut axis = Axis::number();
        assert!(resolve(&mut axis, "upper-bound", "120", RES));
        let value = axis.value().unwrap();
        assert_eq!(value.upper_bound, 120.0);
        assert!(!value.auto_range);
    }

    #[test]
    fn log_base_must_exceed_one() {
        let mut axis = Axis::log();
        assert!(resolve(&mut axis, "base", "1", RES));
        assert_eq!(axis.log_scale().unwrap().base, 10.0);
        assert!(resolve(&mut axis, "base", "2", RES));
        assert_eq!(axis.log_scale().unwrap().base, 2.0);
    }

    #[test]
    fn resolving_fonts_twice_scales_once() {
        let mut axis = Axis::number();
        axis.resolve_fonts(Resolution::Ppi(144.0));
        assert_eq!(axis.tick_label_font.size(), FontSize::Pixels(20));
        axis.resolve_fonts(Resolution::Ppi(144.0));
        assert_eq!(axis.tick_label_font.size(), FontSize::Pixels(20));
        assert_eq!(axis.label_font.size(), FontSize::Pixels(24));
    }
}
