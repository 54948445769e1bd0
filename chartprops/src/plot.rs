// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot targets.
//!
//! ```text
//! Plot
//! ├── XyPlot
//! ├── CategoryPlot
//! └── PiePlot
//!     └── RingPlot
//! ```
//!
//! XY and category plots share their attributes ([`GridPlot`]); they differ only in which
//! axes and renderers a chart pairs them with.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Insets;
use peniko::Brush;
use peniko::color::palette::css;

use crate::dispatch::{Configurable, HandlerEntry, HandlerTable, Variant, on_facet};
use crate::font::{Font, FontComponent, FontStyle, edit_font};
use crate::insets::{Side, set_inset};
use crate::pie_section::PieSection;
use crate::value::{
    assign, parse_bool, parse_double, parse_paint, parse_token, parse_unit_interval,
};
use crate::{Resolution, ValueError};

/// Plot variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// Any plot.
    Plot,
    /// A plot of numeric x/y data.
    XyPlot,
    /// A plot of values by category.
    CategoryPlot,
    /// A pie.
    PiePlot,
    /// A pie with a hole.
    RingPlot,
}

impl Variant for PlotKind {
    type Target = Plot;

    fn parent(self) -> Option<Self> {
        match self {
            Self::Plot => None,
            Self::XyPlot | Self::CategoryPlot | Self::PiePlot => Some(Self::Plot),
            Self::RingPlot => Some(Self::PiePlot),
        }
    }

    fn handlers(self) -> &'static HandlerTable<Plot> {
        match self {
            Self::Plot => &PLOT,
            Self::XyPlot | Self::CategoryPlot => &GRID_PLOT,
            Self::PiePlot => &PIE_PLOT,
            Self::RingPlot => &RING_PLOT,
        }
    }
}

/// Which way the range axis runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Range axis vertical.
    #[default]
    Vertical,
    /// Range axis horizontal.
    Horizontal,
}

/// Direction in which pie sections are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Clockwise from the start angle.
    #[default]
    Clockwise,
    /// Anticlockwise from the start angle.
    Anticlockwise,
}

/// A configurable plot.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    /// Background paint.
    pub background_paint: Brush,
    /// Background opacity.
    pub background_alpha: f64,
    /// Opacity of the plotted data.
    pub foreground_alpha: f64,
    /// Whether the plot outline is drawn.
    pub outline_visible: bool,
    /// Outline paint.
    pub outline_paint: Brush,
    /// Space around the plot area, in pixels.
    pub insets: Insets,
    /// Message drawn when there is nothing to plot.
    pub no_data_message: Option<String>,
    /// Font of the no-data message.
    pub no_data_message_font: Font,
    /// Paint of the no-data message.
    pub no_data_message_paint: Brush,
    /// Kind-specific attributes.
    pub layout: PlotLayout,
}

/// Kind-specific plot attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum PlotLayout {
    /// An XY plot.
    Xy(GridPlot),
    /// A category plot.
    Category(GridPlot),
    /// A pie or ring plot.
    Pie(PiePlot),
}

/// Attributes of plots with a domain and a range axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlot {
    /// Axis orientation.
    pub orientation: Orientation,
    /// Gap between the data area and the axes, in pixels.
    pub axis_offset: Insets,
    /// Whether domain gridlines are drawn.
    pub domain_gridlines_visible: bool,
    /// Whether range gridlines are drawn.
    pub range_gridlines_visible: bool,
    /// Domain gridline paint.
    pub domain_gridline_paint: Brush,
    /// Range gridline paint.
    pub range_gridline_paint: Brush,
}

impl Default for GridPlot {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            axis_offset: Insets::ZERO,
            domain_gridlines_visible: true,
            range_gridlines_visible: true,
            domain_gridline_paint: Brush::Solid(css::LIGHT_GRAY),
            range_gridline_paint: Brush::Solid(css::LIGHT_GRAY),
        }
    }
}

/// Pie and ring plot attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct PiePlot {
    /// Section label font.
    pub label_font: Font,
    /// Section label paint.
    pub label_paint: Brush,
    /// Section label background.
    pub label_background_paint: Brush,
    /// Gap between labels and the pie, as a fraction of the plot width.
    pub label_gap: f64,
    /// Whether labels sit on the sections instead of beside the pie.
    pub simple_labels: bool,
    /// Space between simple labels and the pie bounds, in pixels.
    pub simple_label_offset: Insets,
    /// Whether the pie is kept circular.
    pub circular: bool,
    /// Angle of the first section edge, in degrees.
    pub start_angle: f64,
    /// Section direction.
    pub direction: Rotation,
    /// Whether zero-valued sections are skipped.
    pub ignore_zero_values: bool,
    /// Whether missing values are skipped.
    pub ignore_null_values: bool,
    /// Whether section outlines are drawn.
    pub section_outlines_visible: bool,
    /// Ring attributes, for ring plots.
    pub ring: Option<Ring>,
    /// The sections, in data order.
    pub sections: Vec<PieSection>,
}

/// Ring plot attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    /// Ring thickness as a fraction of the radius.
    pub section_depth: f64,
    /// Whether separator lines are drawn between sections.
    pub separators_visible: bool,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            section_depth: 0.2,
            separators_visible: true,
        }
    }
}

impl PiePlot {
    fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            label_font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            label_paint: Brush::Solid(css::BLACK),
            label_background_paint: Brush::Solid(css::WHITE),
            label_gap: 0.025,
            simple_labels: false,
            simple_label_offset: Insets::uniform(18.0),
            circular: true,
            start_angle: 90.0,
            direction: Rotation::Clockwise,
            ignore_zero_values: false,
            ignore_null_values: false,
            section_outlines_visible: true,
            ring: None,
            sections: keys.into_iter().map(PieSection::new).collect(),
        }
    }

    /// The section for `key`.
    pub fn section(&self, key: &str) -> Option<&PieSection> {
        self.sections.iter().find(|s| s.key == key)
    }
}

impl Plot {
    /// Creates a plot with default styling around `layout`.
    pub fn new(layout: PlotLayout) -> Self {
        Self {
            background_paint: Brush::Solid(css::WHITE),
            background_alpha: 1.0,
            foreground_alpha: 1.0,
            outline_visible: true,
            outline_paint: Brush::Solid(css::GRAY),
            insets: Insets::new(8.0, 4.0, 8.0, 4.0),
            no_data_message: None,
            no_data_message_font: Font::points("sans-serif", FontStyle::Plain, 10.0),
            no_data_message_paint: Brush::Solid(css::BLACK),
            layout,
        }
    }

    /// An XY plot.
    pub fn xy() -> Self {
        Self::new(PlotLayout::Xy(GridPlot::default()))
    }

    /// A category plot.
    pub fn category() -> Self {
        Self::new(PlotLayout::Category(GridPlot::default()))
    }

    /// A pie plot with one section per key.
    pub fn pie(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(PlotLayout::Pie(PiePlot::new(keys)))
    }

    /// A ring plot with one section per key.
    pub fn ring(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut pie = PiePlot::new(keys);
        pie.ring = Some(Ring::default());
        Self::new(PlotLayout::Pie(pie))
    }

    /// Axis attributes, for XY and category plots.
    pub fn grid(&self) -> Option<&GridPlot> {
        match &self.layout {
            PlotLayout::Xy(g) | PlotLayout::Category(g) => Some(g),
            PlotLayout::Pie(_) => None,
        }
    }

    /// Mutable [`Plot::grid`].
    pub fn grid_mut(&mut self) -> Option<&mut GridPlot> {
        match &mut self.layout {
            PlotLayout::Xy(g) | PlotLayout::Category(g) => Some(g),
            PlotLayout::Pie(_) => None,
        }
    }

    /// Pie attributes, for pie and ring plots.
    pub fn pie_plot(&self) -> Option<&PiePlot> {
        match &self.layout {
            PlotLayout::Pie(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable [`Plot::pie_plot`].
    pub fn pie_plot_mut(&mut self) -> Option<&mut PiePlot> {
        match &mut self.layout {
            PlotLayout::Pie(p) => Some(p),
            _ => None,
        }
    }

    fn ring_mut(&mut self) -> Option<&mut Ring> {
        self.pie_plot_mut()?.ring.as_mut()
    }
}

impl Configurable for Plot {
    type Variant = PlotKind;

    fn variant(&self) -> PlotKind {
        match &self.layout {
            PlotLayout::Xy(_) => PlotKind::XyPlot,
            PlotLayout::Category(_) => PlotKind::CategoryPlot,
            PlotLayout::Pie(p) if p.ring.is_some() => PlotKind::RingPlot,
            PlotLayout::Pie(_) => PlotKind::PiePlot,
        }
    }

    fn resolve_fonts(&mut self, resolution: Resolution) {
        self.no_data_message_font = self.no_data_message_font.to_pixels(resolution);
        if let Some(pie) = self.pie_plot_mut() {
            pie.label_font = pie.label_font.to_pixels(resolution);
        }
    }
}

fn set_alpha(slot: &mut f64, value: &str) -> Result<(), ValueError> {
    assign(slot, parse_unit_interval(value))
}

static PLOT: HandlerTable<Plot> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "background-paint",
            apply: |p, v, _| assign(&mut p.background_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "background-alpha",
            apply: |p, v, _| set_alpha(&mut p.background_alpha, v),
        },
        HandlerEntry {
            name: "foreground-alpha",
            apply: |p, v, _| set_alpha(&mut p.foreground_alpha, v),
        },
        HandlerEntry {
            name: "outline-visible",
            apply: |p, v, _| assign(&mut p.outline_visible, parse_bool(v)),
        },
        HandlerEntry {
            name: "outline-paint",
            apply: |p, v, _| assign(&mut p.outline_paint, parse_paint(v)),
        },
        HandlerEntry {
            name: "padding-top",
            apply: |p, v, r| set_inset(&mut p.insets, Side::Top, v, r),
        },
        HandlerEntry {
            name: "padding-left",
            apply: |p, v, r| set_inset(&mut p.insets, Side::Left, v, r),
        },
        HandlerEntry {
            name: "padding-bottom",
            apply: |p, v, r| set_inset(&mut p.insets, Side::Bottom, v, r),
        },
        HandlerEntry {
            name: "padding-right",
            apply: |p, v, r| set_inset(&mut p.insets, Side::Right, v, r),
        },
        HandlerEntry {
            name: "no-data-message",
            apply: |p, v, _| {
                p.no_data_message = Some(v.to_string());
                Ok(())
            },
        },
        HandlerEntry {
            name: "no-data-message-font-family",
            apply: |p, v, r| edit_font(&mut p.no_data_message_font, FontComponent::Family, v, r),
        },
        HandlerEntry {
            name: "no-data-message-font-size",
            apply: |p, v, r| edit_font(&mut p.no_data_message_font, FontComponent::Size, v, r),
        },
        HandlerEntry {
            name: "no-data-message-font-style",
            apply: |p, v, r| edit_font(&mut p.no_data_message_font, FontComponent::Style, v, r),
        },
        HandlerEntry {
            name: "no-data-message-paint",
            apply: |p, v, _| assign(&mut p.no_data_message_paint, parse_paint(v)),
        },
    ],
    indexed: &[],
};

fn set_axis_offset(
    plot: &mut Plot,
    side: Side,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    on_facet(plot.grid_mut(), |g| set_inset(&mut g.axis_offset, side, value, resolution))
}

fn set_gridlines_visible(plot: &mut Plot, value: &str, domain: bool) -> Result<(), ValueError> {
    let visible = parse_bool(value)?;
    on_facet(plot.grid_mut(), |g| {
        if domain {
            g.domain_gridlines_visible = visible;
        } else {
            g.range_gridlines_visible = visible;
        }
        Ok(())
    })
}

static GRID_PLOT: HandlerTable<Plot> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "orientation",
            apply: |p, v, _| {
                let orientation = parse_token(
                    v,
                    &[
                        ("vertical", Orientation::Vertical),
                        ("horizontal", Orientation::Horizontal),
                    ],
                    "vertical, horizontal",
                )?;
                on_facet(p.grid_mut(), |g| {
                    g.orientation = orientation;
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "axis-offset-top",
            apply: |p, v, r| set_axis_offset(p, Side::Top, v, r),
        },
        HandlerEntry {
            name: "axis-offset-left",
            apply: |p, v, r| set_axis_offset(p, Side::Left, v, r),
        },
        HandlerEntry {
            name: "axis-offset-bottom",
            apply: |p, v, r| set_axis_offset(p, Side::Bottom, v, r),
        },
        HandlerEntry {
            name: "axis-offset-right",
            apply: |p, v, r| set_axis_offset(p, Side::Right, v, r),
        },
        HandlerEntry {
            name: "domain-gridlines-visible",
            apply: |p, v, _| set_gridlines_visible(p, v, true),
        },
        HandlerEntry {
            name: "range-gridlines-visible",
            apply: |p, v, _| set_gridlines_visible(p, v, false),
        },
        HandlerEntry {
            name: "domain-gridline-paint",
            apply: |p, v, _| {
                on_facet(p.grid_mut(), |g| assign(&mut g.domain_gridline_paint, parse_paint(v)))
            },
        },
        HandlerEntry {
            name: "range-gridline-paint",
            apply: |p, v, _| {
                on_facet(p.grid_mut(), |g| assign(&mut g.range_gridline_paint, parse_paint(v)))
            },
        },
    ],
    indexed: &[],
};

fn on_pie(
    plot: &mut Plot,
    apply: impl FnOnce(&mut PiePlot) -> Result<(), ValueError>,
) -> Result<(), ValueError> {
    on_facet(plot.pie_plot_mut(), apply)
}

fn set_simple_label_offset(
    plot: &mut Plot,
    side: Side,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    on_pie(plot, |pie| set_inset(&mut pie.simple_label_offset, side, value, resolution))
}

static PIE_PLOT: HandlerTable<Plot> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "label-font-family",
            apply: |p, v, r| {
                on_pie(p, |pie| edit_font(&mut pie.label_font, FontComponent::Family, v, r))
            },
        },
        HandlerEntry {
            name: "label-font-size",
            apply: |p, v, r| {
                on_pie(p, |pie| edit_font(&mut pie.label_font, FontComponent::Size, v, r))
            },
        },
        HandlerEntry {
            name: "label-font-style",
            apply: |p, v, r| {
                on_pie(p, |pie| edit_font(&mut pie.label_font, FontComponent::Style, v, r))
            },
        },
        HandlerEntry {
            name: "label-paint",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.label_paint, parse_paint(v))),
        },
        HandlerEntry {
            name: "label-background-paint",
            apply: |p, v, _| {
                on_pie(p, |pie| assign(&mut pie.label_background_paint, parse_paint(v)))
            },
        },
        HandlerEntry {
            name: "label-gap",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.label_gap, parse_unit_interval(v))),
        },
        HandlerEntry {
            name: "simple-labels",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.simple_labels, parse_bool(v))),
        },
        HandlerEntry {
            name: "simple-label-offset-top",
            apply: |p, v, r| set_simple_label_offset(p, Side::Top, v, r),
        },
        HandlerEntry {
            name: "simple-label-offset-left",
            apply: |p, v, r| set_simple_label_offset(p, Side::Left, v, r),
        },
        HandlerEntry {
            name: "simple-label-offset-bottom",
            apply: |p, v, r| set_simple_label_offset(p, Side::Bottom, v, r),
        },
        HandlerEntry {
            name: "simple-label-offset-right",
            apply: |p, v, r| set_simple_label_offset(p, Side::Right, v, r),
        },
        HandlerEntry {
            name: "circular",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.circular, parse_bool(v))),
        },
        HandlerEntry {
            name: "start-angle",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.start_angle, parse_double(v))),
        },
        HandlerEntry {
            name: "direction",
            apply: |p, v, _| {
                let direction = parse_token(
                    v,
                    &[
                        ("clockwise", Rotation::Clockwise),
                        ("anticlockwise", Rotation::Anticlockwise),
                        ("counterclockwise", Rotation::Anticlockwise),
                    ],
                    "clockwise, anticlockwise",
                )?;
                on_pie(p, |pie| {
                    pie.direction = direction;
                    Ok(())
                })
            },
        },
        HandlerEntry {
            name: "ignore-zero-values",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.ignore_zero_values, parse_bool(v))),
        },
        HandlerEntry {
            name: "ignore-null-values",
            apply: |p, v, _| on_pie(p, |pie| assign(&mut pie.ignore_null_values, parse_bool(v))),
        },
        HandlerEntry {
            name: "section-outlines-visible",
            apply: |p, v, _| {
                on_pie(p, |pie| assign(&mut pie.section_outlines_visible, parse_bool(v)))
            },
        },
    ],
    indexed: &[],
};

static RING_PLOT: HandlerTable<Plot> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "section-depth",
            apply: |p, v, _| {
                on_facet(p.ring_mut(), |ring| {
                    assign(&mut ring.section_depth, parse_unit_interval(v))
                })
            },
        },
        HandlerEntry {
            name: "separators-visible",
            apply: |p, v, _| {
                on_facet(p.ring_mut(), |ring| assign(&mut ring.separators_visible, parse_bool(v)))
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
    fn variant_follows_the_layout() {
        assert_eq!(Plot::xy().variant(), PlotKind::XyPlot);
        assert_eq!(Plot::category().variant(), PlotKind::CategoryPlot);
        assert_eq!(Plot::pie(["a"]).variant(), PlotKind::PiePlot);
        assert_eq!(Plot::ring(["a"]).variant(), PlotKind::RingPlot);
        assert_eq!(
            PlotKind::RingPlot.chain().as_slice(),
            &[PlotKind::Plot, PlotKind::PiePlot, PlotKind::RingPlot]
        );
    }

    #[test]
    fn padding_sides_set_plot_insets() {
        let mut plot = Plot::xy();
        assert!(resolve(&mut plot, "padding-top", "10", RES));
        assert!(resolve(&mut plot, "padding-right", "72pt", RES));
        assert_eq!(plot.insets, Insets::new(8.0, 10.0, 100.0, 4.0));
    }

    #[test]
    fn axis_offset_only_exists_on_grid_plots() {
        let mut xy = Plot::xy();
        assert!(resolve(&mut xy, "axis-offset-left", "5", RES));
        assert_eq!(xy.grid().unwrap().axis_offset.x0, 5.0);

        let mut pie = Plot::pie(["a"]);
        assert!(!resolve(&mut pie, "axis-offset-left", "5", RES));
    }

    #[test]
    fn ring_inherits_pie_properties() {
        let mut ring = Plot::ring(["a", "b"]);
        assert!(resolve(&mut ring, "start-angle", "0", RES));
        assert!(resolve(&mut ring, "section-depth", "0.5", RES));
        assert!(resolve(&mut ring, "section-depth", "2", RES));
        let pie = ring.pie_plot().unwrap();
        assert_eq!(pie.start_angle, 0.0);
        assert_eq!(pie.ring.as_ref().unwrap().section_depth, 0.5);
        assert_eq!(pie.sections.len(), 2);

        let mut plain = Plot::pie(["a"]);
        assert!(!resolve(&mut plain, "section-depth", "0.5", RES));
    }

    #[test]
    fn alpha_must_be_a_fraction() {
        let mut plot = Plot::category();
        assert!(resolve(&mut plot, "foreground-alpha", "0.6", RES));
        assert!(resolve(&mut plot, "background-alpha", "1.2", RES));
        assert_eq!(plot.foreground_alpha, 0.6);
        assert_eq!(plot.background_alpha, 1.0);
    }

    #[test]
    fn fonts_resolve_on_the_pie_label() {
        let mut plot = Plot::pie(["a"]);
        plot.resolve_fonts(Resolution::Ppi(72.0));
        assert_eq!(plot.pie_plot().unwrap().label_font.size(), FontSize::Pixels(10));
        assert_eq!(plot.no_data_message_font.size(), FontSize::Pixels(10));
    }
}
