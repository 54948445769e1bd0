// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property layers and the merged per-target property store.
//!
//! A [`PropertyLayer`] is the flat `name -> value` map of one scope. Layers are merged in
//! specificity order (generic, then role-qualified, then indexed) into a [`PropertyStore`],
//! after which shorthand keys are expanded into their side keys.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

type Entries = IndexMap<String, String, DefaultHashBuilder>;

/// The raw declarations of one scope, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyLayer {
    entries: Entries,
}

impl PropertyLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a declaration, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), value.into())
    }

    /// Builder-style [`PropertyLayer::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value declared for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the layer has no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates declarations in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keeps only the names starting with `prefix`, with the prefix removed.
    ///
    /// This turns e.g. the `domain-axis-` declarations of an axis scope into a role layer.
    pub fn strip_prefix(&self, prefix: &str) -> Self {
        self.iter()
            .filter_map(|(name, value)| {
                let rest = name.strip_prefix(prefix)?;
                (!rest.is_empty()).then_some((rest, value))
            })
            .collect()
    }

    /// Drops every name starting with one of `prefixes`.
    pub fn without_prefixes(&self, prefixes: &[&str]) -> Self {
        self.iter()
            .filter(|(name, _)| !prefixes.iter().any(|p| name.starts_with(p)))
            .collect()
    }

    /// Splits a scope into its generic layer and the layer for one role.
    ///
    /// The generic layer excludes the names of every role in `all_roles`, so a
    /// `range-axis-label` never reaches the domain axis as an unknown property.
    pub fn role_layers(&self, role: &str, all_roles: &[&str]) -> [Self; 2] {
        [self.without_prefixes(all_roles), self.strip_prefix(role)]
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyLayer {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut layer = Self::new();
        for (k, v) in iter {
            layer.insert(k, v);
        }
        layer
    }
}

/// A compound key that expands into side keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shorthand {
    /// The compound key, e.g. `padding`.
    pub key: &'static str,
    /// The side keys it fills, e.g. `padding-top`.
    pub sides: &'static [&'static str],
}

impl Shorthand {
    /// `padding` → `padding-{top,left,bottom,right}`.
    pub const PADDING: Self = Self {
        key: "padding",
        sides: &["padding-top", "padding-left", "padding-bottom", "padding-right"],
    };

    /// `axis-offset` → `axis-offset-{top,left,bottom,right}`.
    pub const AXIS_OFFSET: Self = Self {
        key: "axis-offset",
        sides: &[
            "axis-offset-top",
            "axis-offset-left",
            "axis-offset-bottom",
            "axis-offset-right",
        ],
    };

    /// `label-offset` → `label-offset-{x,y}`.
    pub const LABEL_OFFSET: Self = Self {
        key: "label-offset",
        sides: &["label-offset-x", "label-offset-y"],
    };

    /// `simple-label-offset` → `simple-label-offset-{top,left,bottom,right}`.
    pub const SIMPLE_LABEL_OFFSET: Self = Self {
        key: "simple-label-offset",
        sides: &[
            "simple-label-offset-top",
            "simple-label-offset-left",
            "simple-label-offset-bottom",
            "simple-label-offset-right",
        ],
    };

    /// The shorthand set used for every chart target.
    pub const STANDARD: &'static [Self] = &[
        Self::PADDING,
        Self::AXIS_OFFSET,
        Self::LABEL_OFFSET,
        Self::SIMPLE_LABEL_OFFSET,
    ];
}

/// The merged, shorthand-expanded declarations for one target.
///
/// No name appears twice. Iteration follows first-declaration order across layers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: Entries,
}

impl PropertyStore {
    /// Merges `layers` (lowest precedence first) and expands `shorthands`.
    ///
    /// A side key already present after the merge is never overwritten by its shorthand,
    /// whichever layers the two came from. Expanded shorthand keys are removed.
    pub fn build(layers: &[PropertyLayer], shorthands: &[Shorthand]) -> Self {
        let mut entries = Entries::default();
        for layer in layers {
            for (name, value) in &layer.entries {
                entries.insert(name.clone(), value.clone());
            }
        }
        for shorthand in shorthands {
            let Some(value) = entries.shift_remove(shorthand.key) else {
                continue;
            };
            for side in shorthand.sides {
                if !entries.contains_key(*side) {
                    entries.insert(side.to_string(), value.clone());
                }
            }
        }
        Self { entries }
    }

    /// Returns the value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns `true` if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in merge order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entry names in merge order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn layer(pairs: &[(&str, &str)]) -> PropertyLayer {
        pairs.iter().copied().collect()
    }

    #[test]
    fn later_layers_override_earlier_ones() {
        let store = PropertyStore::build(
            &[
                layer(&[("label", "generic"), ("visible", "true")]),
                layer(&[("label", "role")]),
            ],
            &[],
        );
        assert_eq!(store.get("label"), Some("role"));
        assert_eq!(store.get("visible"), Some("true"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn padding_alone_expands_to_four_sides() {
        let store = PropertyStore::build(&[layer(&[("padding", "10px")])], Shorthand::STANDARD);
        let mut names = store.names();
        names.sort_unstable();
        assert_eq!(
            names,
            vec!["padding-bottom", "padding-left", "padding-right", "padding-top"]
        );
        assert!(store.iter().all(|(_, v)| v == "10px"));
    }

    #[test]
    fn explicit_side_wins_over_shorthand() {
        let store = PropertyStore::build(
            &[layer(&[("padding", "10px")]), layer(&[("padding-left", "3px")])],
            Shorthand::STANDARD,
        );
        assert_eq!(store.get("padding-left"), Some("3px"));
        assert_eq!(store.get("padding-top"), Some("10px"));
        assert_eq!(store.get("padding-bottom"), Some("10px"));
        assert_eq!(store.get("padding-right"), Some("10px"));
        assert!(!store.contains("padding"));
    }

    #[test]
    fn explicit_side_wins_in_every_layer_order() {
        let side = layer(&[("axis-offset-top", "1")]);
        let short = layer(&[("axis-offset", "9")]);
        let both = layer(&[("axis-offset", "9"), ("axis-offset-top", "1")]);
        let reversed = layer(&[("axis-offset-top", "1"), ("axis-offset", "9")]);
        for layers in [
            vec![side.clone(), short.clone()],
            vec![short.clone(), side.clone()],
            vec![both],
            vec![reversed],
        ] {
            let store = PropertyStore::build(&layers, Shorthand::STANDARD);
            assert_eq!(store.get("axis-offset-top"), Some("1"), "{layers:?}");
            assert_eq!(store.get("axis-offset-right"), Some("9"), "{layers:?}");
        }
    }

    #[test]
    fn label_offset_expands_to_x_and_y() {
        let store = PropertyStore::build(&[layer(&[("label-offset", "4")])], Shorthand::STANDARD);
        assert_eq!(store.get("label-offset-x"), Some("4"));
        assert_eq!(store.get("label-offset-y"), Some("4"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn role_layers_strip_the_role_and_hide_other_roles() {
        let scope = layer(&[
            ("label", "Value"),
            ("domain-axis-label", "Time"),
            ("range-axis-visible", "false"),
        ]);
        let roles = ["domain-axis-", "range-axis-"];
        let [generic, domain] = scope.role_layers("domain-axis-", &roles);
        assert_eq!(generic, layer(&[("label", "Value")]));
        assert_eq!(domain, layer(&[("label", "Time")]));

        let store = PropertyStore::build(&[generic, domain], &[]);
        assert_eq!(store.get("label"), Some("Time"));
        assert!(!store.contains("visible"));
    }
}
