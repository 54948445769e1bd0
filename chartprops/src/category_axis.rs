// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category axis attributes and handlers.
//!
//! Category axes accept per-category label overrides written as `category:value` lists, e.g.
//! `category-label-paint = "Q1:red, Q4:#336699"`. A list is applied as a whole or not at all.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Brush;
use peniko::color::palette::css;

use crate::axis::Axis;
use crate::dispatch::{HandlerEntry, HandlerTable, on_facet};
use crate::font::{Font, FontComponent, FontEdit, FontStyle, derive_font, edit_font};
use crate::value::{
    assign, parse_double, parse_int, parse_pairs, parse_pairs_with, parse_paint, parse_token,
    parse_unit_interval,
};
use crate::{Resolution, ValueError};

/// Orientation of category tick labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryLabelPositions {
    /// Horizontal labels.
    #[default]
    Standard,
    /// Rotated 45° counter-clockwise.
    Up45,
    /// Rotated 90° counter-clockwise.
    Up90,
    /// Rotated 45° clockwise.
    Down45,
    /// Rotated 90° clockwise.
    Down90,
}

/// The second label row of an extended category axis.
#[derive(Clone, Debug, PartialEq)]
pub struct SubLabels {
    /// Sub-label text by category.
    pub labels: HashMap<String, String>,
    /// Sub-label font.
    pub font: Font,
    /// Sub-label paint.
    pub paint: Brush,
}

impl Default for SubLabels {
    fn default() -> Self {
        Self {
            labels: HashMap::new(),
            font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            paint: Brush::Solid(css::BLACK),
        }
    }
}

/// Category axis attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryAxis {
    /// Fraction of the axis length left between categories.
    pub category_margin: f64,
    /// Fraction of the axis length before the first category.
    pub lower_margin: f64,
    /// Fraction of the axis length after the last category.
    pub upper_margin: f64,
    /// Maximum number of lines a tick label may wrap to.
    pub max_label_lines: u32,
    /// Tick label orientation.
    pub label_positions: CategoryLabelPositions,
    /// Per-category tick label paint overrides.
    pub label_paints: HashMap<String, Brush>,
    /// Per-category tick label font overrides, derived from the axis tick label font.
    pub label_fonts: HashMap<String, Font>,
    /// Present on extended category axes only.
    pub sublabels: Option<SubLabels>,
    // Components set explicitly per category; `label_fonts` is rebuilt from these.
    font_edits: HashMap<String, FontEdit>,
}

impl Default for CategoryAxis {
    fn default() -> Self {
        Self {
            category_margin: 0.2,
            lower_margin: 0.05,
            upper_margin: 0.05,
            max_label_lines: 1,
            label_positions: CategoryLabelPositions::Standard,
            label_paints: HashMap::new(),
            label_fonts: HashMap::new(),
            sublabels: None,
            font_edits: HashMap::new(),
        }
    }
}

impl CategoryAxis {
    /// A category axis with an empty sub-label row.
    pub fn extended() -> Self {
        Self {
            sublabels: Some(SubLabels::default()),
            ..Self::default()
        }
    }

    /// Tick label font for `category`, falling back to `axis_font`.
    pub fn label_font<'a>(&'a self, category: &str, axis_font: &'a Font) -> &'a Font {
        self.label_fonts.get(category).unwrap_or(axis_font)
    }

    // An explicit per-category component always wins over the axis-wide font, whichever
    // property was applied last.
    fn derive_label_fonts(&mut self, axis_font: &Font, resolution: Resolution) {
        for (category, edit) in &self.font_edits {
            let font = derive_font(Some(axis_font), edit, resolution);
            self.label_fonts.insert(category.clone(), font);
        }
    }

    pub(crate) fn resolve_fonts(&mut self, resolution: Resolution) {
        for font in self.label_fonts.values_mut() {
            *font = font.to_pixels(resolution);
        }
        if let Some(sub) = &mut self.sublabels {
            sub.font = sub.font.to_pixels(resolution);
        }
    }
}

// Records a list of per-category font edits and rebuilds the overrides from the axis tick
// label font.
fn edit_category_fonts(
    axis: &mut Axis,
    component: FontComponent,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    let edits = parse_pairs_with(value, |v| FontEdit::parse(component, v))?;
    let axis_font = axis.tick_label_font.clone();
    on_facet(axis.category_axis_mut(), |c| {
        for (category, edit) in edits {
            c.font_edits.entry(category).or_default().merge(edit);
        }
        c.derive_label_fonts(&axis_font, resolution);
        Ok(())
    })
}

// Runs after the generic tick label handler has updated the axis font.
fn rederive_override_fonts(
    axis: &mut Axis,
    component: FontComponent,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    FontEdit::parse(component, value)?;
    let axis_font = axis.tick_label_font.clone();
    on_facet(axis.category_axis_mut(), |c| {
        c.derive_label_fonts(&axis_font, resolution);
        Ok(())
    })
}

fn set_margin(
    axis: &mut Axis,
    value: &str,
    slot: fn(&mut CategoryAxis) -> &mut f64,
) -> Result<(), ValueError> {
    let margin = parse_double(value)?;
    if margin < 0.0 {
        return Err(ValueError::OutOfRange(value.to_string()));
    }
    on_facet(axis.category_axis_mut(), |c| {
        *slot(c) = margin;
        Ok(())
    })
}

pub(crate) static CATEGORY_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "category-margin",
            apply: |a, v, _| {
                on_facet(a.category_axis_mut(), |c| {
                    assign(&mut c.category_margin, parse_unit_interval(v))
                })
            },
        },
        HandlerEntry {
            name: "lower-margin",
            apply: |a, v, _| set_margin(a, v, |c| &mut c.lower_margin),
        },
        HandlerEntry {
            name: "upper-margin",
            apply: |a, v, _| set_margin(a, v, |c| &mut c.upper_margin),
        },
        HandlerEntry {
            name: "max-label-lines",
            apply: |a, v, _| {
                let lines: u32 = parse_int(v)?;
                if lines == 0 {
                    return Err(ValueError::OutOfRange(v.to_string()));
                }
                on_facet(a.category_axis_mut(), |c| {
                    c.max_label_lines = lines;
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "label-positions",
            apply: |a, v, _| {
                let positions = parse_token(
                    v,
                    &[
                        ("standard", CategoryLabelPositions::Standard),
                        ("up-45", CategoryLabelPositions::Up45),
                        ("up-90", CategoryLabelPositions::Up90),
                        ("down-45", CategoryLabelPositions::Down45),
                        ("down-90", CategoryLabelPositions::Down90),
                    ],
                    "standard, up-45, up-90, down-45, down-90",
                )?;
                on_facet(a.category_axis_mut(), |c| {
                    c.label_positions = positions;
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "category-label-paint",
            apply: |a, v, _| {
                let paints = parse_pairs_with(v, parse_paint)?;
                on_facet(a.category_axis_mut(), |c| {
                    c.label_paints.extend(paints);
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "category-label-font-family",
            apply: |a, v, r| edit_category_fonts(a, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "category-label-font-size",
            apply: |a, v, r| edit_category_fonts(a, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "category-label-font-style",
            apply: |a, v, r| edit_category_fonts(a, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "tick-label-font-family",
            apply: |a, v, r| rederive_override_fonts(a, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "tick-label-font-size",
            apply: |a, v, r| rederive_override_fonts(a, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "tick-label-font-style",
            apply: |a, v, r| rederive_override_fonts(a, FontComponent::Style, v, r),
        },
    ],
    indexed: &[],
};

fn sublabels_mut(axis: &mut Axis) -> Option<&mut SubLabels> {
    axis.category_axis_mut()?.sublabels.as_mut()
}

pub(crate) static EXTENDED_CATEGORY_AXIS: HandlerTable<Axis> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "sublabels",
            apply: |a, v, _| {
                let labels: Vec<(String, String)> = parse_pairs(v)?;
                on_facet(sublabels_mut(a), |s| {
                    s.labels.extend(labels);
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "sublabel-font-family",
            apply: |a, v, r| {
                on_facet(sublabels_mut(a), |s| edit_font(&mut s.font, FontComponent::Family, v, r))
            },
        },
        HandlerEntry {
            name: "sublabel-font-size",
            apply: |a, v, r| {
                on_facet(sublabels_mut(a), |s| edit_font(&mut s.font, FontComponent::Size, v, r))
            },
        },
        HandlerEntry {
            name: "sublabel-font-style",
            apply: |a, v, r| {
                on_facet(sublabels_mut(a), |s| edit_font(&mut s.font, FontComponent::Style, v, r))
            },
        },
        HandlerEntry {
            name: "sublabel-paint",
            apply: |a, v, _| on_facet(sublabels_mut(a), |s| assign(&mut s.paint, parse_paint(v))),
        },
    ],
    indexed: &[],
};
