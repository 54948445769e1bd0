// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer targets.
//!
//! ```text
//! Renderer
//! ├── XyLineAndShape
//! ├── XyBar
//! ├── Bar
//! └── LineAndShape
//! ```

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::Vec2;
use peniko::Brush;
use peniko::color::palette::css;

use crate::dispatch::{Configurable, HandlerEntry, HandlerTable, Variant, on_facet};
use crate::font::{Font, FontComponent, FontStyle, edit_font};
use crate::insets::{Axis2, pixels, set_offset};
use crate::series::SeriesView;
use crate::value::{assign, parse_bool, parse_double, parse_paint, parse_unit_interval};
use crate::{Resolution, ValueError};

/// Renderer variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RendererKind {
    /// Any renderer.
    Renderer,
    /// Lines and shapes over XY data.
    XyLineAndShape,
    /// Bars over XY data.
    XyBar,
    /// Bars over category data.
    Bar,
    /// Lines and shapes over category data.
    LineAndShape,
}

impl Variant for RendererKind {
    type Target = Renderer;

    fn parent(self) -> Option<Self> {
        match self {
            Self::Renderer => None,
            _ => Some(Self::Renderer),
        }
    }

    fn handlers(self) -> &'static HandlerTable<Renderer> {
        match self {
            Self::Renderer => &RENDERER,
            Self::XyLineAndShape | Self::LineAndShape => &LINE_AND_SHAPE,
            Self::XyBar => &XY_BAR,
            Self::Bar => &BAR,
        }
    }
}

/// A configurable renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Renderer {
    /// Whether item labels are drawn.
    pub item_labels_visible: bool,
    /// Item label font.
    pub item_label_font: Font,
    /// Item label paint.
    pub item_label_paint: Brush,
    /// Paint for every series; `None` cycles through a palette.
    pub default_paint: Option<Brush>,
    /// Outline paint for every series.
    pub default_outline_paint: Brush,
    /// Stroke width for every series, in pixels.
    pub default_stroke_width: f64,
    /// Item label displacement from its anchor, in pixels.
    pub label_offset: Vec2,
    /// Kind-specific attributes.
    pub style: RendererStyle,
    /// Per-series views, by series index.
    pub series: Vec<SeriesView>,
}

/// Kind-specific renderer attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum RendererStyle {
    /// Lines and shapes over XY data.
    XyLineAndShape(LineAndShape),
    /// Bars over XY data.
    XyBar(XyBar),
    /// Bars over category data.
    Bar(Bar),
    /// Lines and shapes over category data.
    LineAndShape(LineAndShape),
}

/// Line and shape renderer attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineAndShape {
    /// Whether lines join the points.
    pub lines_visible: bool,
    /// Whether a shape marks each point.
    pub shapes_visible: bool,
    /// Whether shapes are filled.
    pub shapes_filled: bool,
}

impl Default for LineAndShape {
    fn default() -> Self {
        Self {
            lines_visible: true,
            shapes_visible: true,
            shapes_filled: true,
        }
    }
}

/// XY bar renderer attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyBar {
    /// Fraction of each bar's width trimmed away.
    pub margin: f64,
    /// Whether bars cast a shadow.
    pub shadow_visible: bool,
    /// Whether bars are outlined.
    pub draw_bar_outline: bool,
}

/// Category bar renderer attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Fraction of the category width left between bars of one category.
    pub item_margin: f64,
    /// Maximum bar width as a fraction of the data area.
    pub maximum_bar_width: f64,
    /// Whether bars cast a shadow.
    pub shadow_visible: bool,
    /// Whether bars are outlined.
    pub draw_bar_outline: bool,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            item_margin: 0.2,
            maximum_bar_width: 1.0,
            shadow_visible: false,
            draw_bar_outline: false,
        }
    }
}

impl Renderer {
    /// Creates a renderer with default styling around `style` and no series views.
    pub fn new(style: RendererStyle) -> Self {
        Self {
            item_labels_visible: false,
            item_label_font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            item_label_paint: Brush::Solid(css::BLACK),
            default_paint: None,
            default_outline_paint: Brush::Solid(css::GRAY),
            default_stroke_width: 1.0,
            label_offset: Vec2::ZERO,
            style,
            series: Vec::new(),
        }
    }

    /// Lines and shapes over XY data.
    pub fn xy_line_and_shape() -> Self {
        Self::new(RendererStyle::XyLineAndShape(LineAndShape::default()))
    }

    /// Bars over XY data.
    pub fn xy_bar() -> Self {
        Self::new(RendererStyle::XyBar(XyBar::default()))
    }

    /// Bars over category data.
    pub fn bar() -> Self {
        Self::new(RendererStyle::Bar(Bar::default()))
    }

    /// Lines and shapes over category data.
    pub fn line_and_shape() -> Self {
        Self::new(RendererStyle::LineAndShape(LineAndShape::default()))
    }

    /// Adds views for series `0..count`.
    pub fn with_series(mut self, count: usize) -> Self {
        self.series = (0..count).map(SeriesView::new).collect();
        self
    }

    /// Line and shape attributes, if this renderer draws lines.
    pub fn line_and_shape_style(&self) -> Option<&LineAndShape> {
        match &self.style {
            RendererStyle::XyLineAndShape(l) | RendererStyle::LineAndShape(l) => Some(l),
            _ => None,
        }
    }

    /// Mutable [`Renderer::line_and_shape_style`].
    pub fn line_and_shape_style_mut(&mut self) -> Option<&mut LineAndShape> {
        match &mut self.style {
            RendererStyle::XyLineAndShape(l) | RendererStyle::LineAndShape(l) => Some(l),
            _ => None,
        }
    }

    /// XY bar attributes.
    pub fn xy_bar_style_mut(&mut self) -> Option<&mut XyBar> {
        match &mut self.style {
            RendererStyle::XyBar(b) => Some(b),
            _ => None,
        }
    }

    /// Category bar attributes.
    pub fn bar_style(&self) -> Option<&Bar> {
        match &self.style {
            RendererStyle::Bar(b) => Some(b),
            _ => None,
        }
    }

    /// Mutable [`Renderer::bar_style`].
    pub fn bar_style_mut(&mut self) -> Option<&mut Bar> {
        match &mut self.style {
            RendererStyle::Bar(b) => Some(b),
            _ => None,
        }
    }
}

impl Configurable for Renderer {
    type Variant = RendererKind;

    fn variant(&self) -> RendererKind {
        match self.style {
            RendererStyle::XyLineAndShape(_) => RendererKind::XyLineAndShape,
            RendererStyle::XyBar(_) => RendererKind::XyBar,
            RendererStyle::Bar(_) => RendererKind::Bar,
            RendererStyle::LineAndShape(_) => RendererKind::LineAndShape,
        }
    }

    fn resolve_fonts(&mut self, resolution: Resolution) {
        self.item_label_font = self.item_label_font.to_pixels(resolution);
        for view in &mut self.series {
            view.resolve_fonts(resolution);
        }
    }
}

static RENDERER: HandlerTable<Renderer> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "item-labels-visible",
            apply: |r, v, _| assign(&mut r.item_labels_visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "item-label-font-family",
            apply: |r, v, res| edit_font(&mut r.item_label_font, FontComponent::Family, v, res),
        },
        HandlerEntry {
            name: "item-label-font-size",
            apply: |r, v, res| edit_font(&mut r.item_label_font, FontComponent::Size, v, res),
        },
        HandlerEntry {
            name: "item-label-font-style",
            apply: |r, v, res| edit_font(&mut r.item_label_font, FontComponent::Style, v, res),
        },
        HandlerEntry {
            name: "item-label-paint",
            apply: |r, v, _| assign(&mut r.item_label_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "default-paint",
            apply: |r, v, _| {
                r.default_paint = Some(parse_paint(v)?);
                Ok(())
            },
        },
        HandlerEntry {
            name: "default-outline-paint",
            apply: |r, v, _| assign(&mut r.default_outline_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "default-stroke-width",
            apply: |r, v, res| assign(&mut r.default_stroke_width, pixels(v, res)),
        },
        HandlerEntry {
            name: "label-offset-x",
            apply: |r, v, res| set_offset(&mut r.label_offset, Axis2::X, v, res),
        },
        HandlerEntry {
            name: "label-offset-y",
            apply: |r, v, res| set_offset(&mut r.label_offset, Axis2::Y, v, res),
        },
    ],
    indexed: &[],
};

static LINE_AND_SHAPE: HandlerTable<Renderer> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "lines-visible",
            apply: |r, v, _| {
                on_facet(r.line_and_shape_style_mut(), |l| {
                    assign(&mut l.lines_visible, parse_bool(v))
                })
            },
        },
        HandlerEntry {
            name: "shapes-visible",
            apply: |r, v, _| {
                on_facet(r.line_and_shape_style_mut(), |l| {
                    assign(&mut l.shapes_visible, parse_bool(v))
                })
            },
        },
        HandlerEntry {
            name: "shapes-filled",
            apply: |r, v, _| {
                on_facet(r.line_and_shape_style_mut(), |l| {
                    assign(&mut l.shapes_filled, parse_bool(v))
                })
            },
        },
    ],
    indexed: &[],
};

// Bar flags shared by both bar renderers.
fn set_bar_flag(renderer: &mut Renderer, value: &str, shadow: bool) -> Result<(), ValueError> {
    let flag = parse_bool(value)?;
    match &mut renderer.style {
        RendererStyle::XyBar(b) if shadow => b.shadow_visible = flag,
        RendererStyle::XyBar(b) => b.draw_bar_outline = flag,
        RendererStyle::Bar(b) if shadow => b.shadow_visible = flag,
        RendererStyle::Bar(b) => b.draw_bar_outline = flag,
        _ => {}
    }
    Ok(())
}

static XY_BAR: HandlerTable<Renderer> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "margin",
            apply: |r, v, _| {
                on_facet(r.xy_bar_style_mut(), |b| assign(&mut b.margin, parse_unit_interval(v)))
            },
        },
        HandlerEntry {
            name: "shadow-visible",
            apply: |r, v, _| set_bar_flag(r, v, true),
        },
        HandlerEntry {
            name: "draw-bar-outline",
            apply: |r, v, _| set_bar_flag(r, v, false),
        },
    ],
    indexed: &[],
};

static BAR: HandlerTable<Renderer> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "item-margin",
            apply: |r, v, _| {
                on_facet(r.bar_style_mut(), |b| assign(&mut b.item_margin, parse_unit_interval(v)))
            },
        },
        HandlerEntry {
            name: "maximum-bar-width",
            apply: |r, v, _| {
                let width = parse_double(v)?;
                if width <= 0.0 || width > 1.0 {
                    return Err(ValueError::OutOfRange(v.to_string()));
                }
                on_facet(r.bar_style_mut(), |b| {
                    b.maximum_bar_width = width;
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "shadow-visible",
            apply: |r, v, _| set_bar_flag(r, v, true),
        },
        HandlerEntry {
            name: "draw-bar-outline",
            apply: |r, v, _| set_bar_flag(r, v, false),
        },
    ],
    indexed: &[],
};
