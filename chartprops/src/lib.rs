// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property cascade and variant-aware dispatch for configuring chart object graphs.
//!
//! Charts are described by flat, string-valued declarations grouped in scopes (theme, plot,
//! axes, renderer, per-series, per-section). This crate turns those declarations into typed
//! attributes on a [`Chart`]:
//!
//! - **Layers** of declarations are merged by specificity into a [`PropertyStore`]; shorthand
//!   keys such as `padding` expand into side keys unless a side is given explicitly.
//! - **Dispatch** applies each `name = value` to a target by walking its variant chain (e.g.
//!   `Axis > ValueAxis > DateAxis`), so one name can mean different things on different
//!   kinds of axis, plot or renderer.
//! - **Lengths** in `pt`, `px`, `in`, `cm`, `mm` or `pc` are normalized to pixels with a
//!   [`Resolution`], and **fonts** are derived one component at a time.
//!
//! Unknown names and malformed values never fail a cascade; they are logged through the
//! `log` facade and skipped. Only chart sizing can fail, with a [`CascadeError`].
//!
//! ```
//! use chartprops::{Axis, Chart, Plot, Renderer, Resolution, Scope, ScopeMap};
//!
//! let source = ScopeMap::new()
//!     .with(Scope::Chart, "width", "6in")
//!     .with(Scope::Chart, "height", "4in")
//!     .with(Scope::Axis, "tick-label-font-size", "9pt")
//!     .with(Scope::Axis, "range-axis-label", "Revenue")
//!     .with(Scope::Plot, "padding", "12");
//!
//! let mut chart = Chart::new(Plot::category())
//!     .with_axes(Axis::category(), Axis::number())
//!     .with_renderer(Renderer::bar().with_series(2));
//! let size = chart.configure(&source, Resolution::Ppi(96.0)).unwrap();
//!
//! assert_eq!((size.width, size.height), (576.0, 384.0));
//! assert_eq!(chart.range_axis.unwrap().label.as_deref(), Some("Revenue"));
//! ```

#![no_std]

extern crate alloc;

mod axis;
mod cascade;
#[cfg(test)]
mod cascade_tests;
mod category_axis;
mod chart;
mod date_axis;
mod dispatch;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod font;
mod insets;
mod length;
mod period_axis;
mod pie_section;
mod plot;
mod renderer;
mod series;
mod store;
mod theme;
mod time;
mod value;

pub use axis::{
    Axis, AxisKind, AxisScale, LogScale, NumberScale, RangeType, ValueAxis, ValueScale,
};
pub use cascade::{ApplyReport, apply_properties, apply_store};
pub use category_axis::{CategoryAxis, CategoryLabelPositions, SubLabels};
pub use chart::{AXIS_ROLES, Chart, DEFAULT_SIZE, PropertySource, Scope, ScopeMap, chart_size};
pub use date_axis::{DateScale, TickMarkPosition};
pub use dispatch::{
    Configurable, Handler, HandlerEntry, HandlerTable, IndexedEntry, IndexedHandler, Variant,
    resolve,
};
pub use error::{CascadeError, ValueError};
pub use font::{Font, FontComponent, FontEdit, FontSize, FontStyle, derive_font};
pub use length::{Length, LengthUnit, Resolution, parse_length, to_pixels};
pub use period_axis::{MAX_SEGMENTS, PeriodScale, PeriodSegment};
pub use pie_section::{PieSection, PieSectionKind};
pub use plot::{GridPlot, Orientation, PiePlot, Plot, PlotKind, PlotLayout, Ring, Rotation};
pub use renderer::{Bar, LineAndShape, Renderer, RendererKind, RendererStyle, XyBar};
pub use series::{SeriesView, SeriesViewKind};
pub use store::{PropertyLayer, PropertyStore, Shorthand};
pub use theme::{Theme, ThemeKind};
pub use time::{DateTickUnit, DateUnit, PeriodClass};
pub use value::{
    parse_bool, parse_color, parse_double, parse_int, parse_pairs, parse_pairs_with, parse_paint,
    parse_positive, parse_token, parse_unit_interval,
};
