// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-target cascade: merge, expand, dispatch, then resolve fonts.

use crate::dispatch::{Configurable, resolve};
use crate::store::{PropertyLayer, PropertyStore, Shorthand};
use crate::Resolution;

/// What happened to the entries of one store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ApplyReport {
    /// Entries some handler accepted the name of (including rejected values).
    pub applied: usize,
    /// Entries no handler on the target's variant chain knows.
    pub ignored: usize,
}

impl ApplyReport {
    /// Total entries visited.
    pub fn total(&self) -> usize {
        self.applied + self.ignored
    }
}

impl core::ops::AddAssign for ApplyReport {
    fn add_assign(&mut self, other: Self) {
        self.applied += other.applied;
        self.ignored += other.ignored;
    }
}

/// Configures `target` from `layers` (lowest precedence first).
///
/// Builds the merged store with `shorthands` expanded, then applies every entry in store
/// order. A rejected value never stops the pass. When `resolution` is known, every font on
/// the target is resolved to pixels afterwards.
pub fn apply_properties<T: Configurable>(
    target: &mut T,
    layers: &[PropertyLayer],
    shorthands: &[Shorthand],
    resolution: Resolution,
) -> ApplyReport {
    let store = PropertyStore::build(layers, shorthands);
    apply_store(target, &store, resolution)
}

/// Applies an already merged store to `target`, then runs the font post-pass.
pub fn apply_store<T: Configurable>(
    target: &mut T,
    store: &PropertyStore,
    resolution: Resolution,
) -> ApplyReport {
    let mut report = ApplyReport::default();
    for (name, value) in store.iter() {
        if resolve(target, name, value, resolution) {
            report.applied += 1;
        } else {
            report.ignored += 1;
        }
    }
    if resolution.is_known() {
        target.resolve_fonts(resolution);
    }
    report
}
