// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-section pie attributes.

extern crate alloc;

use alloc::string::String;

use peniko::Brush;

use crate::dispatch::{Configurable, HandlerEntry, HandlerTable, Variant};
use crate::value::{parse_paint, parse_unit_interval};
use crate::Resolution;

/// The only pie section variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieSectionKind {
    /// A pie section.
    PieSection,
}

impl Variant for PieSectionKind {
    type Target = PieSection;

    fn parent(self) -> Option<Self> {
        None
    }

    fn handlers(self) -> &'static HandlerTable<PieSection> {
        &PIE_SECTION
    }
}

/// One section of a pie, identified by its data key.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSection {
    /// Data key.
    pub key: String,
    /// Fill paint; `None` uses the plot's default sequence.
    pub paint: Option<Brush>,
    /// Outline paint; `None` uses the plot default.
    pub outline_paint: Option<Brush>,
    /// Radial offset as a fraction of the radius.
    pub explode: f64,
}

impl PieSection {
    /// A section with plot-default styling.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            paint: None,
            outline_paint: None,
            explode: 0.0,
        }
    }
}

impl Configurable for PieSection {
    type Variant = PieSectionKind;

    fn variant(&self) -> PieSectionKind {
        PieSectionKind::PieSection
    }

    fn resolve_fonts(&mut self, _: Resolution) {}
}

static PIE_SECTION: HandlerTable<PieSection> = HandlerTable {
    exact: &[
        HandlerEntry {
            name: "paint",
            apply: |s, v, _| {
                s.paint = Some(parse_paint(v)?);
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
            name: "explode",
            apply: |s, v, _| {
                s.explode = parse_unit_interval(v)?;
                Ok(())
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

    #[test]
    fn explode_is_a_fraction() {
        let mut section = PieSection::new("Other");
        assert!(resolve(&mut section, "explode", "0.25", Resolution::Unspecified));
        assert!(resolve(&mut section, "explode", "3", Resolution::Unspecified));
        assert_eq!(section.explode, 0.25);
    }

    #[test]
    fn paint_overrides_start_unset() {
        let mut section = PieSection::new("Other");
        assert_eq!(section.paint, None);
        assert!(resolve(&mut section, "paint", "#ff0000", Resolution::Unspecified));
        assert_eq!(section.paint, Some(parse_paint("red").unwrap()));
        assert!(!resolve(&mut section, "label", "x", Resolution::Unspecified));
    }
}
