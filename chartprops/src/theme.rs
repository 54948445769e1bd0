// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-wide theme.
//!
//! A theme carries the four font tiers and the paints charts fall back to when an object does
//! not set its own.

use peniko::Brush;
use peniko::color::palette::css;

use crate::dispatch::{Configurable, HandlerEntry, HandlerTable, Variant};
use crate::font::{Font, FontComponent, FontStyle, edit_font};
use crate::value::{assign, parse_bool, parse_paint};
use crate::Resolution;

/// The only theme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    /// A theme.
    Theme,
}

impl Variant for ThemeKind {
    type Target = Theme;

    fn parent(self) -> Option<Self> {
        None
    }

    fn handlers(self) -> &'static HandlerTable<Theme> {
        &THEME
    }
}

/// Chart-wide fonts and paints.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Title font.
    pub extra_large_font: Font,
    /// Subtitle font.
    pub large_font: Font,
    /// Axis label font.
    pub regular_font: Font,
    /// Tick label and legend font.
    pub small_font: Font,
    /// Title paint.
    pub title_paint: Brush,
    /// Subtitle paint.
    pub subtitle_paint: Brush,
    /// Chart background.
    pub chart_background_paint: Brush,
    /// Plot background.
    pub plot_background_paint: Brush,
    /// Plot outline paint.
    pub plot_outline_paint: Brush,
    /// Axis label paint.
    pub axis_label_paint: Brush,
    /// Tick label paint.
    pub tick_label_paint: Brush,
    /// Gridline paint.
    pub gridline_paint: Brush,
    /// Legend background.
    pub legend_background_paint: Brush,
    /// Legend item paint.
    pub legend_item_paint: Brush,
    /// Whether renderers draw shadows.
    pub shadow_visible: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            extra_large_font: Font::points("sans-serif", FontStyle::Bold, 20.0),
            large_font: Font::points("sans-serif", FontStyle::Bold, 14.0),
            regular_font: Font::points("sans-serif", FontStyle::Plain, 12.0),
            small_font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            title_paint: Brush::Solid(css::BLACK),
            subtitle_paint: Brush::Solid(css::BLACK),
            chart_background_paint: Brush::Solid(css::WHITE),
            plot_background_paint: Brush::Solid(css::LIGHT_GRAY),
            plot_outline_paint: Brush::Solid(css::GRAY),
            axis_label_paint: Brush::Solid(css::DARK_GRAY),
            tick_label_paint: Brush::Solid(css::DARK_GRAY),
            gridline_paint: Brush::Solid(css::WHITE),
            legend_background_paint: Brush::Solid(css::WHITE),
            legend_item_paint: Brush::Solid(css::DARK_GRAY),
            shadow_visible: false,
        }
    }
}

impl Theme {
    fn fonts_mut(&mut self) -> [&mut Font; 4] {
        [
            &mut self.extra_large_font,
            &mut self.large_font,
            &mut self.regular_font,
            &mut self.small_font,
        ]
    }
}

impl Configurable for Theme {
    type Variant = ThemeKind;

    fn variant(&self) -> ThemeKind {
        ThemeKind::Theme
    }

    fn resolve_fonts(&mut self, resolution: Resolution) {
        for font in self.fonts_mut() {
            *font = font.to_pixels(resolution);
        }
    }
}

static THEME: HandlerTable<Theme> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "extra-large-font-family",
            apply: |t, v, r| edit_font(&mut t.extra_large_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "extra-large-font-size",
            apply: |t, v, r| edit_font(&mut t.extra_large_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "extra-large-font-style",
            apply: |t, v, r| edit_font(&mut t.extra_large_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "large-font-family",
            apply: |t, v, r| edit_font(&mut t.large_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "large-font-size",
            apply: |t, v, r| edit_font(&mut t.large_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "large-font-style",
            apply: |t, v, r| edit_font(&mut t.large_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "regular-font-family",
            apply: |t, v, r| edit_font(&mut t.regular_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "regular-font-size",
            apply: |t, v, r| edit_font(&mut t.regular_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "regular-font-style",
            apply: |t, v, r| edit_font(&mut t.regular_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "small-font-family",
            apply: |t, v, r| edit_font(&mut t.small_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "small-font-size",
            apply: |t, v, r| edit_font(&mut t.small_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "small-font-style",
            apply: |t, v, r| edit_font(&mut t.small_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "title-paint",
            apply: |t, v, _| assign(&mut t.title_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "subtitle-paint",
            apply: |t, v, _| assign(&mut t.subtitle_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "chart-background-paint",
            apply: |t, v, _| assign(&mut t.chart_background_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "plot-background-paint",
            apply: |t, v, _| assign(&mut t.plot_background_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "plot-outline-paint",
            apply: |t, v, _| assign(&mut t.plot_outline_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "axis-label-paint",
            apply: |t, v, _| assign(&mut t.axis_label_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "tick-label-paint",
            apply: |t, v, _| assign(&mut t.tick_label_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "gridline-paint",
            apply: |t, v, _| assign(&mut t.gridline_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "legend-background-paint",
            apply: |t, v, _| assign(&mut t.legend_background_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "legend-item-paint",
            apply: |t, v, _| assign(&mut t.legend_item_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "shadow-visible",
            apply: |t, v, _| assign(&mut t.shadow_visible, parse_bool(v)),
        },
    ],
    indexed: &[],
};
