// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variant-aware property dispatch.
//!
//! Each configurable target reports a [`Variant`] from a closed set. Variants form a fixed
//! "is-a" tree (a `DateAxis` is a `ValueAxis` is an `Axis`), and every variant owns a static
//! [`HandlerTable`] with the properties it understands at its own level.
//!
//! [`resolve`] walks the chain from the root variant down to the concrete one and runs every
//! matching handler on the way, so a more specific handler always runs last and its effect
//! is the one left on the target.

use core::fmt;

use smallvec::SmallVec;

use crate::{Resolution, ValueError};

/// Applies one property value to a target.
pub type Handler<T> = fn(&mut T, &str, Resolution) -> Result<(), ValueError>;

/// Applies one indexed property value (`period2-class`) to a target; the index is zero-based.
pub type IndexedHandler<T> = fn(&mut T, usize, &str, Resolution) -> Result<(), ValueError>;

/// A handler registered under an exact property name.
pub struct HandlerEntry<T: 'static> {
    /// Property name.
    pub name: &'static str,
    /// Mutation function.
    pub apply: Handler<T>,
}

impl<T> fmt::Debug for HandlerEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerEntry").field(&self.name).finish()
    }
}

/// A handler registered for `<prefix><n>-<field>` names, with `n` counting from 1.
pub struct IndexedEntry<T: 'static> {
    /// Name prefix before the index, e.g. `period`.
    pub prefix: &'static str,
    /// Field after the index and dash, e.g. `class`.
    pub field: &'static str,
    /// Mutation function.
    pub apply: IndexedHandler<T>,
}

impl<T> fmt::Debug for IndexedEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexedEntry")
            .field(&self.prefix)
            .field(&self.field)
            .finish()
    }
}

/// The properties one variant handles at its own level of the chain.
pub struct HandlerTable<T: 'static> {
    /// Handlers keyed by exact name.
    pub exact: &'static [HandlerEntry<T>],
    /// Handlers keyed by indexed name pattern.
    pub indexed: &'static [IndexedEntry<T>],
}

impl<T> fmt::Debug for HandlerTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("exact", &self.exact)
            .field("indexed", &self.indexed)
            .finish()
    }
}

/// A handler found for a name, ready to run.
enum Found<T: 'static> {
    Exact(Handler<T>),
    Indexed(IndexedHandler<T>, usize),
}

impl<T> HandlerTable<T> {
    /// A table with no handlers, for variants that only add structure.
    pub const EMPTY: Self = Self {
        exact: &[],
        indexed: &[],
    };

    /// Returns `true` if this table has a handler for `name`.
    pub fn handles(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn find(&self, name: &str) -> Option<Found<T>> {
        if let Some(entry) = self.exact.iter().find(|e| e.name == name) {
            return Some(Found::Exact(entry.apply));
        }
        self.indexed.iter().find_map(|entry| {
            let index = parse_indexed(name, entry.prefix, entry.field)?;
            Some(Found::Indexed(entry.apply, index))
        })
    }
}

/// Extracts the zero-based index from `<prefix><n>-<field>`, where `n >= 1`.
fn parse_indexed(name: &str, prefix: &str, field: &str) -> Option<usize> {
    let (digits, rest) = name.strip_prefix(prefix)?.split_once('-')?;
    if rest != field || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()?.checked_sub(1)
}

/// A closed set of runtime kinds for one target family.
pub trait Variant: Copy + Eq + fmt::Debug + 'static {
    /// The target type the handlers of this family mutate.
    type Target: 'static;

    /// The variant this one "is-a", or `None` at the root.
    fn parent(self) -> Option<Self>;

    /// Handlers defined at this level.
    fn handlers(self) -> &'static HandlerTable<Self::Target>;

    /// The chain from the root variant down to `self`.
    fn chain(self) -> SmallVec<[Self; 4]> {
        let mut chain = SmallVec::new();
        let mut next = Some(self);
        while let Some(variant) = next {
            chain.push(variant);
            next = variant.parent();
        }
        chain.reverse();
        chain
    }
}

/// A target the cascade can configure.
pub trait Configurable: Sized + 'static {
    /// The variant family of this target.
    type Variant: Variant<Target = Self>;

    /// The concrete variant of this instance.
    fn variant(&self) -> Self::Variant;

    /// Resolves every font owned by the target (and its sub-objects) to pixels.
    ///
    /// Implementations must only use [`crate::Font::to_pixels`], so that running this more
    /// than once has no further effect.
    fn resolve_fonts(&mut self, resolution: Resolution);
}

/// Runs `apply` on a variant-specific facet of a target, if the target has it.
///
/// Handlers are only registered on variants that own the facet, so `None` means the target
/// and its variant disagree; the property is then a no-op rather than an error.
pub(crate) fn on_facet<S>(
    facet: Option<&mut S>,
    apply: impl FnOnce(&mut S) -> Result<(), ValueError>,
) -> Result<(), ValueError> {
    match facet {
        Some(facet) => apply(facet),
        None => Ok(()),
    }
}

/// Applies `name = value` to `target`, running every handler on its variant chain.
///
/// Returns `false` if no variant in the chain handles `name`; the target is untouched.
/// A handler rejecting the value still counts as applied: the rejection is logged and the
/// handler leaves its attribute unchanged.
pub fn resolve<T: Configurable>(
    target: &mut T,
    name: &str,
    value: &str,
    resolution: Resolution,
) -> bool {
    let mut applied = false;
    for variant in target.variant().chain() {
        let Some(found) = variant.handlers().find(name) else {
            continue;
        };
        applied = true;
        let result = match found {
            Found::Exact(apply) => apply(target, value, resolution),
            Found::Indexed(apply, index) => apply(target, index, value, resolution),
        };
        if let Err(err) = result {
            log::debug!("{variant:?}: ignoring `{name}`: {err}");
        }
    }
    if !applied {
        log::trace!("no handler for `{name}`");
    }
    applied
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec::Vec;

    use super::*;
    use crate::value::{parse_double, parse_int};

    #[derive(Debug, Default)]
    struct Shape {
        kind: Option<ShapeKind>,
        width: f64,
        log: Vec<&'static str>,
        labels: Vec<String>,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum ShapeKind {
        Base,
        Rect,
        Square,
    }

    static BASE: HandlerTable<Shape> = HandlerTable {
        exact: &[
            HandlerEntry {
                name: "width",
                apply: |s, v, _| {
                    s.width = parse_double(v)?;
                    s.log.push("base");
                    Ok(())
                },
            },
            HandlerEntry {
                name: "name",
                apply: |s, _, _| {
                    s.log.push("base-name");
                    Ok(())
                },
            },
        ],
        indexed: &[IndexedEntry {
            prefix: "label",
            field: "text",
            apply: |s, i, v, _| {
                if s.labels.len() <= i {
                    s.labels.resize(i + 1, String::new());
                }
                s.labels[i] = v.into();
                Ok(())
            },
        }],
    };

    static RECT: HandlerTable<Shape> = HandlerTable::EMPTY;

    static SQUARE: HandlerTable<Shape> = HandlerTable {
        exact: &[HandlerEntry {
            name: "width",
            apply: |s, v, _| {
                s.width = 2.0 * f64::from(parse_int::<u16>(v)?);
                s.log.push("square");
                Ok(())
            },
        }],
        indexed: &[],
    };

    impl Variant for ShapeKind {
        type Target = Shape;

        fn parent(self) -> Option<Self> {
            match self {
                Self::Base => None,
                Self::Rect => Some(Self::Base),
                Self::Square => Some(Self::Rect),
            }
        }

        fn handlers(self) -> &'static HandlerTable<Shape> {
            match self {
                Self::Base => &BASE,
                Self::Rect => &RECT,
                Self::Square => &SQUARE,
            }
        }
    }

    impl Configurable for Shape {
        type Variant = ShapeKind;

        fn variant(&self) -> ShapeKind {
            self.kind.unwrap_or(ShapeKind::Base)
        }

        fn resolve_fonts(&mut self, _: Resolution) {}
    }

    fn shape(kind: ShapeKind) -> Shape {
        Shape {
            kind: Some(kind),
            ..Shape::default()
        }
    }

    #[test]
    fn chain_runs_from_root_to_leaf() {
        assert_eq!(
            ShapeKind::Square.chain().as_slice(),
            &[ShapeKind::Base, ShapeKind::Rect, ShapeKind::Square]
        );
        assert_eq!(ShapeKind::Base.chain().as_slice(), &[ShapeKind::Base]);
    }

    #[test]
    fn general_handler_runs_before_specific_one() {
        let mut s = shape(ShapeKind::Square);
        assert!(resolve(&mut s, "width", "3", Resolution::Unspecified));
        assert_eq!(s.log, ["base", "square"]);
        assert_eq!(s.width, 6.0, "the specific handler's effect wins");

        let mut r = shape(ShapeKind::Rect);
        assert!(resolve(&mut r, "width", "3", Resolution::Unspecified));
        assert_eq!(r.log, ["base"]);
        assert_eq!(r.width, 3.0);
    }

    #[test]
    fn unknown_property_is_a_no_op() {
        let mut s = shape(ShapeKind::Square);
        assert!(!resolve(&mut s, "height", "3", Resolution::Unspecified));
        assert!(s.log.is_empty());
        assert_eq!(s.width, 0.0);
    }

    #[test]
    fn malformed_value_counts_as_applied_and_changes_nothing() {
        let mut s = shape(ShapeKind::Square);
        s.width = 1.0;
        assert!(resolve(&mut s, "width", "wide", Resolution::Unspecified));
        assert!(s.log.is_empty());
        assert_eq!(s.width, 1.0);

        // Accepted by the general handler, rejected by the specific one.
        assert!(resolve(&mut s, "width", "2.5", Resolution::Unspecified));
        assert_eq!(s.log, ["base"]);
        assert_eq!(s.width, 2.5);
    }

    #[test]
    fn indexed_names_carry_zero_based_index() {
        let mut s = shape(ShapeKind::Rect);
        assert!(resolve(&mut s, "label2-text", "b", Resolution::Unspecified));
        assert_eq!(s.labels, ["", "b"]);
        assert!(!resolve(&mut s, "label0-text", "x", Resolution::Unspecified));
        assert!(!resolve(&mut s, "label-text", "x", Resolution::Unspecified));
        assert!(!resolve(&mut s, "label2-font", "x", Resolution::Unspecified));
        assert!(!resolve(&mut s, "label+2-text", "x", Resolution::Unspecified));
    }

    #[test]
    fn parse_indexed_names() {
        assert_eq!(parse_indexed("period1-class", "period", "class"), Some(0));
        assert_eq!(parse_indexed("period12-class", "period", "class"), Some(11));
        assert_eq!(parse_indexed("period1-font-size", "period", "font-size"), Some(0));
        assert_eq!(parse_indexed("periodx-class", "period", "class"), None);
    }
}
