// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use kurbo::{Insets, Size};

use crate::{
    Axis, CascadeError, Chart, DateTickUnit, DateUnit, FontSize, FontStyle, PeriodClass, Plot,
    PropertyLayer, Renderer, Resolution, Scope, ScopeMap, Shorthand, apply_properties,
    parse_paint, resolve,
};

fn layer(pairs: &[(&str, &str)]) -> PropertyLayer {
    pairs.iter().copied().collect()
}

fn bar_chart() -> Chart {
    Chart::new(Plot::category())
        .with_axes(Axis::category(), Axis::number())
        .with_renderer(Renderer::bar().with_series(3))
}

#[test]
fn side_value_wins_over_shorthand_in_every_layer_order() {
    let orders: [[&[(&str, &str)]; 2]; 2] = [
        [&[("padding", "10")], &[("padding-left", "3")]],
        [&[("padding-left", "3")], &[("padding", "10")]],
    ];
    for [first, second] in orders {
        let mut plot = Plot::xy();
        apply_properties(
            &mut plot,
            &[layer(first), layer(second)],
            Shorthand::STANDARD,
            Resolution::Unspecified,
        );
        assert_eq!(
            plot.insets,
            Insets::new(3.0, 10.0, 10.0, 10.0),
            "order {first:?} then {second:?}"
        );
    }
}

#[test]
fn role_padding_and_generic_padding_combine_per_side() {
    for (generic, role) in [
        (("padding", "10"), ("domain-axis-padding-left", "3")),
        (("padding-left", "3"), ("domain-axis-padding", "10")),
    ] {
        let source = ScopeMap::new()
            .with(Scope::Axis, generic.0, generic.1)
            .with(Scope::Axis, role.0, role.1);
        let mut chart = bar_chart();
        chart.configure(&source, Resolution::Unspecified).unwrap();
        assert_eq!(
            chart.domain_axis.unwrap().label_insets,
            Insets::new(3.0, 10.0, 10.0, 10.0)
        );
    }
}

#[test]
fn role_prefixed_properties_only_reach_their_axis() {
    let source = ScopeMap::new()
        .with(Scope::Axis, "label", "Generic")
        .with(Scope::Axis, "range-axis-label", "Revenue")
        .with(Scope::Axis, "range-axis-tick-unit", "50");
    let mut chart = bar_chart();
    chart.configure(&source, Resolution::Unspecified).unwrap();

    let domain = chart.domain_axis.as_ref().unwrap();
    let range = chart.range_axis.as_ref().unwrap();
    assert_eq!(domain.label.as_deref(), Some("Generic"));
    assert_eq!(range.label.as_deref(), Some("Revenue"));
    assert_eq!(range.number_scale().unwrap().tick_unit, Some(50.0));
}

#[test]
fn repeated_font_edit_gives_the_same_pixel_size() {
    let res = Resolution::Ppi(96.0);
    let sizes: Vec<FontSize> = [1, 2, 5]
        .into_iter()
        .map(|n| {
            let mut axis = Axis::number();
            for _ in 0..n {
                assert!(resolve(&mut axis, "label-font-size", "11pt", res));
            }
            axis.label_font.size()
        })
        .collect();
    assert!(sizes.iter().all(|s| *s == FontSize::Pixels(15)), "{sizes:?}");
}

#[test]
fn unknown_names_leave_every_kind_unchanged() {
    let names = ["no-such-property", "period1-colour", "domain-axis-label", "padding"];
    for axis in [
        Axis::number(),
        Axis::log(),
        Axis::date(),
        Axis::period(),
        Axis::category(),
        Axis::extended_category(),
    ] {
        let mut target = axis.clone();
        for name in names {
            assert!(!resolve(&mut target, name, "1", Resolution::Unspecified));
        }
        assert_eq!(target, axis);
    }
    let mut plot = Plot::ring(["a"]);
    let before = plot.clone();
    let report = apply_properties(
        &mut plot,
        &[layer(&[("tick-unit", "1"), ("series1-paint", "red")])],
        &[],
        Resolution::Unspecified,
    );
    assert_eq!(report.ignored, 2);
    assert_eq!(plot, before);
}

#[test]
fn date_axis_tick_unit() {
    let mut axis = Axis::date();
    assert!(resolve(&mut axis, "tick-unit", "month", Resolution::Unspecified));
    let unit = axis.date_scale().unwrap().tick_unit;
    assert_eq!(unit, DateTickUnit::new(DateUnit::Month, 1));

    assert!(resolve(&mut axis, "tick-unit", "banana", Resolution::Unspecified));
    assert_eq!(axis.date_scale().unwrap().tick_unit, unit);
}

#[test]
fn tick_unit_depends_on_the_axis_kind() {
    let source = ScopeMap::new().with(Scope::Axis, "tick-unit", "2 weeks");
    let mut chart = Chart::new(Plot::xy()).with_axes(Axis::date(), Axis::category());
    chart.configure(&source, Resolution::Unspecified).unwrap();

    let date = chart.domain_axis.as_ref().unwrap();
    assert_eq!(
        date.date_scale().unwrap().tick_unit,
        DateTickUnit::new(DateUnit::Week, 2)
    );
    assert!(!date.value().unwrap().auto_tick_unit_selection);
    assert_eq!(chart.range_axis.unwrap(), Axis::category());
}

#[test]
fn period_classes_set_auto_range_from_the_first_segment() {
    for pairs in [
        [("period1-class", "month"), ("period2-class", "year")],
        [("period2-class", "year"), ("period1-class", "month")],
    ] {
        let mut axis = Axis::period();
        apply_properties(&mut axis, &[layer(&pairs)], &[], Resolution::Unspecified);
        let period = axis.period_scale().unwrap();
        assert_eq!(period.auto_range_class, PeriodClass::Month);
        assert_eq!(period.segments.len(), 2);
        assert_eq!(period.segments[0].date_format(), "MMM");
        assert_eq!(period.segments[1].class, PeriodClass::Year);
        assert_eq!(period.segments[1].date_format(), "yyyy");
    }
}

#[test]
fn period_segments_inherit_the_configured_tick_label_font() {
    let source = ScopeMap::new()
        .with(Scope::Axis, "tick-label-font-family", "Inter")
        .with(Scope::Axis, "tick-label-paint", "navy")
        .with(Scope::Axis, "domain-axis-period3-format", "yy")
        .with(Scope::Axis, "domain-axis-period1-font-style", "bold");
    let mut chart = Chart::new(Plot::xy()).with_axes(Axis::period(), Axis::number());
    chart.configure(&source, Resolution::Ppi(72.0)).unwrap();

    let period = chart.domain_axis.as_ref().unwrap().period_scale().unwrap();
    assert_eq!(period.segments.len(), 3);
    let classes: Vec<_> = period.segments.iter().map(|s| s.class).collect();
    assert_eq!(classes, [PeriodClass::Day, PeriodClass::Month, PeriodClass::Year]);
    assert_eq!(period.segments[2].date_format(), "yy");
    for segment in &period.segments {
        assert_eq!(segment.font.family(), "Inter");
        assert_eq!(segment.paint, parse_paint("navy").unwrap());
        assert_eq!(segment.font.size(), FontSize::Pixels(10));
    }
    assert_eq!(period.segments[0].font.style(), FontStyle::Bold);
    assert_eq!(period.segments[1].font.style(), FontStyle::Plain);
}

#[test]
fn series_layers_override_renderer_defaults() {
    let source = ScopeMap::new()
        .with(Scope::Renderer, "series-paint", "red")
        .with(Scope::Renderer, "series2-paint", "blue")
        .with(Scope::Renderer, "item-label-font-style", "bold")
        .with(Scope::Series(1), "stroke-width", "3")
        .with(Scope::Series(2), "paint", "green");
    let mut chart = bar_chart();
    chart.configure(&source, Resolution::Ppi(72.0)).unwrap();

    let renderer = chart.renderer.as_ref().unwrap();
    assert_eq!(renderer.default_paint, None);
    let paints: Vec<_> = renderer.series.iter().map(|s| s.paint.clone()).collect();
    assert_eq!(
        paints,
        [
            Some(parse_paint("red").unwrap()),
            Some(parse_paint("blue").unwrap()),
            Some(parse_paint("green").unwrap()),
        ]
    );
    assert_eq!(renderer.series[1].stroke_width, Some(3.0));
    assert!(renderer.series.iter().all(|s| {
        s.item_label_font.style() == FontStyle::Bold
            && s.item_label_font.size() == FontSize::Pixels(10)
    }));
}

#[test]
fn pie_sections_are_configured_by_key() {
    let source = ScopeMap::new()
        .with(Scope::Plot, "section-outlines-visible", "false")
        .with(Scope::Plot, "simple-label-offset", "6")
        .with(Scope::Section("B".into()), "explode", "0.3")
        .with(Scope::Section("B".into()), "paint", "orange");
    let mut chart = Chart::new(Plot::pie(["A", "B"]));
    chart.configure(&source, Resolution::Unspecified).unwrap();

    let pie = chart.plot.pie_plot().unwrap();
    assert!(!pie.section_outlines_visible);
    assert_eq!(pie.simple_label_offset, Insets::uniform(6.0));
    assert_eq!(pie.section("A").unwrap().explode, 0.0);
    let b = pie.section("B").unwrap();
    assert_eq!(b.explode, 0.3);
    assert_eq!(b.paint, Some(parse_paint("orange").unwrap()));
}

#[test]
fn post_pass_depends_on_the_resolution() {
    let mut unspecified = bar_chart();
    unspecified.configure(&ScopeMap::new(), Resolution::Unspecified).unwrap();
    assert_eq!(unspecified.theme.regular_font.size(), FontSize::Points(12.0));
    assert_eq!(
        unspecified.domain_axis.as_ref().unwrap().tick_label_font.size(),
        FontSize::Points(10.0)
    );

    let mut known = bar_chart();
    known.configure(&ScopeMap::new(), Resolution::Ppi(144.0)).unwrap();
    assert_eq!(known.theme.regular_font.size(), FontSize::Pixels(24));
    assert_eq!(
        known.domain_axis.as_ref().unwrap().tick_label_font.size(),
        FontSize::Pixels(20)
    );
}

#[test]
fn post_pass_reaches_category_overrides_and_sublabels() {
    let layers = [layer(&[
        ("category-label-font-style", "Q4:bold"),
        ("sublabels", "Q4:Oct-Dec"),
    ])];
    let mut axis = Axis::extended_category();
    apply_properties(&mut axis, &layers, Shorthand::STANDARD, Resolution::Ppi(144.0));

    let category = axis.category_axis().unwrap();
    let q4 = &category.label_fonts["Q4"];
    assert_eq!(q4.style(), FontStyle::Bold);
    assert_eq!(q4.size(), FontSize::Pixels(20));
    let sublabels = category.sublabels.as_ref().unwrap();
    assert_eq!(sublabels.font.size(), FontSize::Pixels(20));

    let first = axis.clone();
    apply_properties(&mut axis, &layers, Shorthand::STANDARD, Resolution::Ppi(144.0));
    assert_eq!(axis, first, "a second pass must not rescale fonts");
}

#[test]
fn unusable_resolution_skips_the_post_pass() {
    let mut axis = Axis::category();
    apply_properties(&mut axis, &[], Shorthand::STANDARD, Resolution::Ppi(-1.0));
    assert_eq!(axis.tick_label_font.size(), FontSize::Points(10.0));
}

#[test]
fn mismatched_units_fail_before_anything_is_configured() {
    let source = ScopeMap::new()
        .with(Scope::Chart, "width", "8in")
        .with(Scope::Chart, "height", "500")
        .with(Scope::Axis, "label", "Never applied");
    let mut chart = bar_chart();
    let before = chart.clone();
    assert!(matches!(
        chart.configure(&source, Resolution::Unspecified),
        Err(CascadeError::MismatchedUnits { .. })
    ));
    assert_eq!(chart, before);
}

#[test]
fn chart_size_follows_the_resolution() {
    let source = ScopeMap::new()
        .with(Scope::Chart, "width", "10cm")
        .with(Scope::Chart, "height", "5cm");
    let size = bar_chart().configure(&source, Resolution::Ppi(254.0)).unwrap();
    assert_eq!(size, Size::new(1000.0, 500.0));
}

#[test]
fn one_bad_value_does_not_stop_the_cascade() {
    let source = ScopeMap::new()
        .with(Scope::Plot, "background-alpha", "lots")
        .with(Scope::Plot, "outline-visible", "false")
        .with(Scope::Plot, "orientation", "diagonal")
        .with(Scope::Plot, "range-gridlines-visible", "false");
    let mut chart = bar_chart();
    chart.configure(&source, Resolution::Unspecified).unwrap();
    assert_eq!(chart.plot.background_alpha, 1.0);
    assert!(!chart.plot.outline_visible);
    assert!(!chart.plot.grid().unwrap().range_gridlines_visible);
}
