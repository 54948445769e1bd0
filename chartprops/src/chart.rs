// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-chart configuration.
//!
//! A [`Chart`] owns every configurable object. [`Chart::configure`] pulls the declarations of
//! each [`Scope`] from a [`PropertySource`] and runs the cascade once per object, in the order
//! theme, plot, pie sections, domain axis, range axis, renderer, series views.
//!
//! Layering per object, lowest precedence first:
//!
//! | Object        | Layers                                                              |
//! |---------------|---------------------------------------------------------------------|
//! | theme         | `Theme`                                                             |
//! | plot          | `Plot`                                                              |
//! | pie section   | `Section(key)`                                                      |
//! | domain axis   | `Axis` without role names, `Axis` `domain-axis-*` stripped          |
//! | range axis    | `Axis` without role names, `Axis` `range-axis-*` stripped           |
//! | renderer      | `Renderer` without `series*` names                                  |
//! | series view n | `Renderer` `series-*`, `Renderer` `series{n+1}-*`, `Series(n)`      |

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use hashbrown::HashMap;
use kurbo::Size;

use crate::axis::Axis;
use crate::cascade::{ApplyReport, apply_properties};
use crate::dispatch::Configurable;
use crate::length::{Length, LengthUnit, parse_length, to_pixels};
use crate::plot::Plot;
use crate::renderer::Renderer;
use crate::store::{PropertyLayer, Shorthand};
use crate::theme::Theme;
use crate::{CascadeError, Resolution};

/// Axis role prefixes recognised in the `Axis` scope.
pub const AXIS_ROLES: &[&str] = &[DOMAIN_AXIS, RANGE_AXIS];

const DOMAIN_AXIS: &str = "domain-axis-";
const RANGE_AXIS: &str = "range-axis-";
const SERIES: &str = "series";

/// Chart size used when the chart scope gives no dimensions.
pub const DEFAULT_SIZE: Size = Size::new(680.0, 420.0);

/// A group of declarations in the source document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Chart dimensions.
    Chart,
    /// The theme.
    Theme,
    /// The plot.
    Plot,
    /// Both axes, with optional `domain-axis-`/`range-axis-` role prefixes.
    Axis,
    /// The renderer, with optional `series-`/`seriesN-` prefixes.
    Renderer,
    /// One series, by zero-based index.
    Series(usize),
    /// One pie section, by key.
    Section(String),
}

/// Supplies the raw declarations of each scope.
pub trait PropertySource {
    /// The declarations of `scope`, if the document has any.
    fn layer(&self, scope: &Scope) -> Option<&PropertyLayer>;
}

/// An in-memory [`PropertySource`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScopeMap {
    layers: HashMap<Scope, PropertyLayer>,
}

impl ScopeMap {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name = value` in `scope`.
    pub fn insert(&mut self, scope: Scope, name: impl Into<String>, value: impl Into<String>) {
        self.layers.entry(scope).or_default().insert(name, value);
    }

    /// Builder-style [`ScopeMap::insert`].
    #[must_use]
    pub fn with(mut self, scope: Scope, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(scope, name, value);
        self
    }

    /// Replaces the whole layer of `scope`.
    pub fn set_layer(&mut self, scope: Scope, layer: PropertyLayer) {
        self.layers.insert(scope, layer);
    }
}

impl PropertySource for ScopeMap {
    fn layer(&self, scope: &Scope) -> Option<&PropertyLayer> {
        self.layers.get(scope)
    }
}

fn layer_of(source: &impl PropertySource, scope: &Scope) -> PropertyLayer {
    source.layer(scope).cloned().unwrap_or_default()
}

/// The configurable object graph of one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    /// Chart-wide fonts and paints.
    pub theme: Theme,
    /// The plot.
    pub plot: Plot,
    /// Horizontal (or category) axis, if the plot has axes.
    pub domain_axis: Option<Axis>,
    /// Vertical (or value) axis, if the plot has axes.
    pub range_axis: Option<Axis>,
    /// The renderer, if the plot has one.
    pub renderer: Option<Renderer>,
}

impl Chart {
    /// A chart around `plot` with the default theme and no axes or renderer.
    pub fn new(plot: Plot) -> Self {
        Self {
            theme: Theme::default(),
            plot,
            domain_axis: None,
            range_axis: None,
            renderer: None,
        }
    }

    /// Sets the domain and range axes.
    #[must_use]
    pub fn with_axes(mut self, domain: Axis, range: Axis) -> Self {
        self.domain_axis = Some(domain);
        self.range_axis = Some(range);
        self
    }

    /// Sets the renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Configures every object of the chart from `source` and returns the chart size in pixels.
    ///
    /// The size is checked first; on error nothing is configured. Malformed or unknown
    /// properties never fail the call.
    pub fn configure(
        &mut self,
        source: &impl PropertySource,
        resolution: Resolution,
    ) -> Result<Size, CascadeError> {
        let size = chart_size(&layer_of(source, &Scope::Chart), resolution)?;
        let shorthands = Shorthand::STANDARD;

        let mut total = ApplyReport::default();
        total += run("theme", &mut self.theme, &[layer_of(source, &Scope::Theme)], resolution);
        total += run("plot", &mut self.plot, &[layer_of(source, &Scope::Plot)], resolution);

        if let Some(pie) = self.plot.pie_plot_mut() {
            for section in &mut pie.sections {
                let layer = layer_of(source, &Scope::Section(section.key.clone()));
                total += apply_properties(section, &[layer], shorthands, resolution);
            }
        }

        let axis_scope = layer_of(source, &Scope::Axis);
        if let Some(axis) = &mut self.domain_axis {
            let layers = axis_scope.role_layers(DOMAIN_AXIS, AXIS_ROLES);
            total += run("domain axis", axis, &layers, resolution);
        }
        if let Some(axis) = &mut self.range_axis {
            let layers = axis_scope.role_layers(RANGE_AXIS, AXIS_ROLES);
            total += run("range axis", axis, &layers, resolution);
        }

        if let Some(renderer) = &mut self.renderer {
            let renderer_scope = layer_of(source, &Scope::Renderer);
            let generic = renderer_scope.without_prefixes(&[SERIES]);
            total += run("renderer", renderer, &[generic], resolution);

            let all_series = renderer_scope.strip_prefix("series-");
            let mut views = core::mem::take(&mut renderer.series);
            for view in &mut views {
                view.inherit(renderer);
                let layers = [
                    all_series.clone(),
                    renderer_scope.strip_prefix(&format!("{SERIES}{}-", view.index + 1)),
                    layer_of(source, &Scope::Series(view.index)),
                ];
                total += apply_properties(view, &layers, shorthands, resolution);
            }
            renderer.series = views;
        }

        log::debug!(
            "configured {}x{} chart: {} properties applied, {} ignored",
            size.width,
            size.height,
            total.applied,
            total.ignored
        );
        Ok(size)
    }
}

fn run<T: Configurable>(
    what: &str,
    target: &mut T,
    layers: &[PropertyLayer],
    resolution: Resolution,
) -> ApplyReport {
    let report = apply_properties(target, layers, Shorthand::STANDARD, resolution);
    log::trace!("{what}: {report:?}");
    report
}

/// Reads `width` and `height` from the chart scope.
///
/// Bare numbers are pixels. When both are given they must use the same unit; a missing
/// dimension takes its [`DEFAULT_SIZE`] value.
pub fn chart_size(chart: &PropertyLayer, resolution: Resolution) -> Result<Size, CascadeError> {
    let parse = |dimension: &'static str| {
        chart
            .get(dimension)
            .map(|value| {
                parse_length(value, LengthUnit::Pixels).map_err(|_| {
                    CascadeError::InvalidDimension {
                        dimension,
                        value: value.to_string(),
                    }
                })
            })
            .transpose()
    };
    let width = parse("width")?;
    let height = parse("height")?;
    if let (Some(w), Some(h)) = (width, height) {
        if w.unit != h.unit {
            return Err(CascadeError::MismatchedUnits {
                width: chart.get("width").unwrap_or_default().to_string(),
                height: chart.get("height").unwrap_or_default().to_string(),
            });
        }
    }
    let px = |length: Option<Length>, fallback: f64| {
        length.map_or(fallback, |l| f64::from(to_pixels(l, resolution)))
    };
    Ok(Size::new(
        px(width, DEFAULT_SIZE.width),
        px(height, DEFAULT_SIZE.height),
    ))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn chart_layer(pairs: &[(&str, &str)]) -> PropertyLayer {
        pairs.iter().copied().collect()
    }

    #[test]
    fn missing_dimensions_use_the_default_size() {
        let size = chart_size(&PropertyLayer::new(), Resolution::Unspecified).unwrap();
        assert_eq!(size, DEFAULT_SIZE);
        let size = chart_size(&chart_layer(&[("width", "800")]), Resolution::Unspecified).unwrap();
        assert_eq!(size, Size::new(800.0, 420.0));
    }

    #[test]
    fn physical_dimensions_scale_with_resolution() {
        let layer = chart_layer(&[("width", "6in"), ("height", "4in")]);
        assert_eq!(
            chart_size(&layer, Resolution::Ppi(300.0)).unwrap(),
            Size::new(1800.0, 1200.0)
        );
    }

    #[test]
    fn mismatched_units_are_an_error() {
        let layer = chart_layer(&[("width", "6in"), ("height", "400px")]);
        assert_eq!(
            chart_size(&layer, Resolution::Unspecified),
            Err(CascadeError::MismatchedUnits {
                width: "6in".into(),
                height: "400px".into(),
            })
        );
    }

    #[test]
    fn unparseable_dimension_is_an_error() {
        let layer = chart_layer(&[("width", "wide")]);
        assert!(matches!(
            chart_size(&layer, Resolution::Unspecified),
            Err(CascadeError::InvalidDimension { dimension: "width", .. })
        ));
    }

    #[test]
    fn scope_map_collects_layers() {
        let source = ScopeMap::new()
            .with(Scope::Plot, "background-paint", "white")
            .with(Scope::Section("Other".into()), "explode", "0.1")
            .with(Scope::Plot, "outline-visible", "false");
        assert_eq!(source.layer(&Scope::Plot).map(PropertyLayer::len), Some(2));
        assert!(source.layer(&Scope::Series(0)).is_none());
    }
}
