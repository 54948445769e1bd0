// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configures sample charts from a sectioned property file and prints what they ended up with.
//!
//! Usage: `chartprops_demo [FILE] [--ppi <PPI>]`. Without a file, a built-in sample is used.
//! Set `RUST_LOG=debug` to see rejected values and `RUST_LOG=trace` for ignored names.
//!
//! The file format is one `name = value` per line under `[scope]` headers, where scope is one
//! of `chart`, `theme`, `plot`, `axis`, `renderer`, `series N` (1-based) or `section KEY`.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chartprops::{Axis, Chart, Plot, Renderer, Resolution, Scope, ScopeMap};
use clap::Parser;
use kurbo::Size;

/// Configure sample charts from a sectioned property file.
#[derive(Parser, Debug)]
#[command(name = "chartprops_demo")]
struct Args {
    /// Property file; the built-in sample is used when omitted.
    file: Option<PathBuf>,

    /// Output resolution in pixels per inch; zero or negative leaves it unspecified.
    #[arg(long, default_value_t = 96.0, allow_negative_numbers = true)]
    ppi: f64,
}

const SAMPLE: &str = "\
[chart]
width = 6in
height = 4in

[theme]
regular-font-family = DejaVu Sans
large-font-size = 16pt

[plot]
padding = 12
padding-top = 4
background-paint = #f4f4f4
foreground-alpha = 0.8
orientation = horizontal

[axis]
tick-label-font-size = 9pt
domain-axis-label = Quarter
domain-axis-category-label-paint = Q4:crimson
domain-axis-category-label-font-style = Q4:bold
range-axis-label = Revenue
range-axis-tick-unit = 250
range-axis-lower-bound = 0
range-axis-visible = perhaps

[renderer]
item-labels-visible = true
series-outline-paint = gray
series1-paint = steelblue
label-offset = 4

[series 2]
paint = rgb(230, 159, 0)
item-label-font-style = italic

[section Other]
explode = 0.2
";

fn parse_scope(header: &str) -> Option<Scope> {
    let mut words = header.split_whitespace();
    let scope = match (words.next()?, words.next()) {
        ("chart", None) => Scope::Chart,
        ("theme", None) => Scope::Theme,
        ("plot", None) => Scope::Plot,
        ("axis", None) => Scope::Axis,
        ("renderer", None) => Scope::Renderer,
        ("series", Some(n)) => Scope::Series(n.parse::<usize>().ok()?.checked_sub(1)?),
        ("section", Some(key)) => Scope::Section(key.to_string()),
        _ => return None,
    };
    words.next().is_none().then_some(scope)
}

fn parse_source(text: &str) -> Result<ScopeMap> {
    let mut source = ScopeMap::new();
    let mut scope = None;
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            scope = Some(
                parse_scope(header)
                    .ok_or_else(|| anyhow!("line {}: unknown scope `{header}`", number + 1))?,
            );
            continue;
        }
        let (Some(scope), Some((name, value))) = (&scope, line.split_once('=')) else {
            bail!("line {}: expected `name = value` under a scope", number + 1);
        };
        source.insert(scope.clone(), name.trim(), value.trim());
    }
    Ok(source)
}

fn report_bar_chart(source: &ScopeMap, resolution: Resolution) -> Result<Size> {
    let mut chart = Chart::new(Plot::category())
        .with_axes(Axis::category(), Axis::number())
        .with_renderer(Renderer::bar().with_series(3));
    let size = chart
        .configure(source, resolution)
        .context("configuring the bar chart")?;

    println!("bar chart: {} x {} px", size.width, size.height);
    println!("  plot insets: {:?}", chart.plot.insets);
    if let Some(grid) = chart.plot.grid() {
        println!("  orientation: {:?}", grid.orientation);
    }
    for (role, axis) in [("domain", &chart.domain_axis), ("range", &chart.range_axis)] {
        let Some(axis) = axis else { continue };
        println!(
            "  {role} axis: label {:?}, visible {}, tick font {} {:?} {:?}",
            axis.label,
            axis.visible,
            axis.tick_label_font.family(),
            axis.tick_label_font.style(),
            axis.tick_label_font.size(),
        );
        if let Some(number) = axis.number_scale() {
            println!("    tick unit {:?}", number.tick_unit);
        }
        if let Some(category) = axis.category_axis() {
            for (key, font) in &category.label_fonts {
                println!("    category {key}: {:?} {:?}", font.style(), font.size());
            }
        }
    }
    if let Some(renderer) = &chart.renderer {
        println!("  label offset: {:?}", renderer.label_offset);
        for view in &renderer.series {
            println!(
                "  series {}: paint {:?}, item label {:?}",
                view.index + 1,
                view.paint,
                view.item_label_font.style(),
            );
        }
    }
    Ok(size)
}

fn report_period_chart(source: &ScopeMap, resolution: Resolution) -> Result<Size> {
    let mut periods = source.clone();
    periods.insert(Scope::Axis, "domain-axis-period1-class", "month");
    periods.insert(Scope::Axis, "domain-axis-period2-class", "year");
    let mut chart = Chart::new(Plot::xy()).with_axes(Axis::period(), Axis::number());
    let size = chart
        .configure(&periods, resolution)
        .context("configuring the period chart")?;

    println!("period chart: {} x {} px", size.width, size.height);
    if let Some(period) = chart.domain_axis.as_ref().and_then(Axis::period_scale) {
        println!("  auto-range class: {:?}", period.auto_range_class);
        for (i, segment) in period.segments.iter().enumerate() {
            println!(
                "  period{}: {:?} `{}`",
                i + 1,
                segment.class,
                segment.date_format()
            );
        }
    }
    Ok(size)
}

fn report_pie_chart(source: &ScopeMap, resolution: Resolution) -> Result<Size> {
    let mut chart = Chart::new(Plot::ring(["North", "South", "Other"]));
    let size = chart
        .configure(source, resolution)
        .context("configuring the ring chart")?;

    println!("ring chart: {} x {} px", size.width, size.height);
    if let Some(pie) = chart.plot.pie_plot() {
        for section in &pie.sections {
            println!("  {}: explode {}", section.key, section.explode);
        }
    }
    Ok(size)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE.to_string(),
    };
    let source = parse_source(&text)?;
    let resolution = Resolution::from_raw(args.ppi);
    log::info!("configuring sample charts at {resolution:?}");

    report_bar_chart(&source, resolution)?;
    report_period_chart(&source, resolution)?;
    report_pie_chart(&source, resolution)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses_into_scopes() {
        let source = parse_source(SAMPLE).unwrap();
        let series = chartprops::PropertySource::layer(&source, &Scope::Series(1)).unwrap();
        assert_eq!(series.get("item-label-font-style"), Some("italic"));
        assert!(parse_source("label = x").is_err());
        let err = parse_source("[series 0]\npaint = red").unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown scope `series 0`");
    }

    #[test]
    fn arguments_default_to_the_sample_at_96_ppi() {
        let args = Args::try_parse_from(["chartprops_demo"]).unwrap();
        assert_eq!(args.file, None);
        assert_eq!(args.ppi, 96.0);

        let args = Args::try_parse_from(["chartprops_demo", "chart.props", "--ppi", "-1"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("chart.props")));
        assert_eq!(Resolution::from_raw(args.ppi), Resolution::Unspecified);
        assert!(Args::try_parse_from(["chartprops_demo", "--ppi", "wide"]).is_err());
    }

    #[test]
    fn sample_charts_configure() {
        let source = parse_source(SAMPLE).unwrap();
        let size = report_bar_chart(&source, Resolution::Ppi(96.0)).unwrap();
        assert_eq!(size, Size::new(576.0, 384.0));
        report_period_chart(&source, Resolution::Unspecified).unwrap();
        report_pie_chart(&source, Resolution::Unspecified).unwrap();
    }
}
