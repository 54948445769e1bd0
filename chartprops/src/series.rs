// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-series renderer views.
//!
//! A view holds the attributes one series overrides on its renderer. Paints and stroke width
//! start unset and fall back to the renderer; item label settings start as a copy of the
//! configured renderer, so font edits on a series build on the renderer's font.

use peniko::Brush;
use peniko::color::palette::css;

use crate::dispatch::{Configurable, HandlerEntry, HandlerTable, Variant};
use crate::font::{Font, FontComponent, FontStyle, edit_font};
use crate::insets::pixels;
use crate::renderer::Renderer;
use crate::value::{assign, parse_bool, parse_paint};
use crate::Resolution;

/// The only series view variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesViewKind {
    /// A series view.
    SeriesView,
}

impl Variant for SeriesViewKind {
    type Target = SeriesView;

    fn parent(self) -> Option<Self> {
        None
    }

    fn handlers(self) -> &'static HandlerTable<SeriesView> {
        &SERIES_VIEW
    }
}

/// Renderer attributes for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesView {
    /// Zero-based series index.
    pub index: usize,
    /// Series paint override.
    pub paint: Option<Brush>,
    /// Fill paint override.
    pub fill_paint: Option<Brush>,
    /// Outline paint override.
    pub outline_paint: Option<Brush>,
    /// Stroke width override, in pixels.
    pub stroke_width: Option<f64>,
    /// Whether the series is drawn.
    pub visible: bool,
    /// Whether the series has a legend item.
    pub visible_in_legend: bool,
    /// Whether item labels are drawn for this series.
    pub item_labels_visible: bool,
    /// Item label font.
    pub item_label_font: Font,
    /// Item label paint.
    pub item_label_paint: Brush,
}

impl SeriesView {
    /// A view of series `index` with renderer-default styling.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            paint: None,
            fill_paint: None,
            outline_paint: None,
            stroke_width: None,
            visible: true,
            visible_in_legend: true,
            item_labels_visible: false,
            item_label_font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            item_label_paint: Brush::Solid(css::BLACK),
        }
    }

    /// Copies the item label settings of `renderer` into this view.
    pub fn inherit(&mut self, renderer: &Renderer) {
        self.item_labels_visible = renderer.item_labels_visible;
        self.item_label_font = renderer.item_label_font.clone();
        self.item_label_paint = renderer.item_label_paint.clone();
    }
}

impl Configurable for SeriesView {
    type Variant = SeriesViewKind;

    fn variant(&self) -> SeriesViewKind {
        SeriesViewKind::SeriesView
    }

    fn resolve_fonts(&mut self, resolution: Resolution) {
        self.item_label_font = self.item_label_font.to_pixels(resolution);
    }
}

static SERIES_VIEW: HandlerTable<SeriesView> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "paint",
            apply: |s, v, _| {
                s.paint = Some(parse_paint(v)?);
                Ok(())
            },
        },
        HandlerEntry {
            name: "fill-paint",
            apply: |s, v, _| {
                s.fill_paint = Some(parse_paint(v)?);
                Ok(())
            },
        },
        HandlerEntry {
            name: "outline-paint",
            apply: |s, v, _| {
                s.outline_paint = Some(parse_paint(v)?);
                Ok(())
            },
        },
        HandlerEntry {
            name: "stroke-width",
            apply: |s, v, r| {
                s.stroke_width = Some(pixels(v, r)?);
                Ok(())
            },
        },
        HandlerEntry {
            name: "visible",
            apply: |s, v, _| assign(&mut s.visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "visible-in-legend",
            apply: |s, v, _| assign(&mut s.visible_in_legend, parse_bool(v)),
        },
        HandlerEntry {
            name: "item-labels-visible",
            apply: |s, v, _| assign(&mut s.item_labels_visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "item-label-font-family",
            apply: |s, v, r| edit_font(&mut s.item_label_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "item-label-font-size",
            apply: |s, v, r| edit_font(&mut s.item_label_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "item-label-font-style",
            apply: |s, v, r| edit_font(&mut s.item_label_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "item-label-paint",
            apply: |s, v, _| assign(&mut s.item_label_paint, parse_paint(v)),
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
    fn overrides_start_unset() {
        let mut view = SeriesView::new(1);
        assert_eq!(view.paint, None);
        assert!(resolve(&mut view, "stroke-width", "2", RES));
        assert!(resolve(&mut view, "fill-paint", "not-a-color", RES));
        assert_eq!(view.stroke_width, Some(2.0));
        assert_eq!(view.fill_paint, None);
    }

    #[test]
    fn item_label_font_builds_on_the_renderer() {
        let mut renderer = Renderer::bar();
        assert!(resolve(&mut renderer, "item-label-font-family", "Inter", RES));

        let mut view = SeriesView::new(0);
        view.inherit(&renderer);
        assert!(resolve(&mut view, "item-label-font-style", "bold", RES));
        assert_eq!(view.item_label_font.family(), "Inter");
        assert_eq!(view.item_label_font.style(), FontStyle::Bold);
        assert_eq!(view.item_label_font.size(), FontSize::Pixels(14));
    }
}
