// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable font descriptors and layered font derivation.
//!
//! Font properties arrive one component at a time (`*-font-family`, `*-font-size`,
//! `*-font-style`) and possibly from different cascade layers. [`derive_font`] folds one such
//! edit into the current descriptor, copying every component the edit does not touch.
//!
//! A size is either still in points or already resolved to pixels. Once resolved, it is
//! carried verbatim through later edits, so repeating an edit never scales twice.

extern crate alloc;

use alloc::string::ToString;
use alloc::sync::Arc;

use crate::length::{Length, LengthUnit, Resolution, parse_length, to_pixels};
use crate::value::parse_token;
use crate::ValueError;

/// Font style, combining weight and slant the way chart libraries usually do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Regular weight, upright.
    #[default]
    Plain,
    /// Bold weight, upright.
    Bold,
    /// Regular weight, italic.
    Italic,
    /// Bold weight, italic.
    BoldItalic,
}

impl FontStyle {
    /// Parses `plain`, `bold`, `italic` or `bold-italic` (case-insensitive).
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        parse_token(
            text,
            &[
                ("plain", Self::Plain),
                ("normal", Self::Plain),
                ("bold", Self::Bold),
                ("italic", Self::Italic),
                ("bold-italic", Self::BoldItalic),
                ("bolditalic", Self::BoldItalic),
                ("bold italic", Self::BoldItalic),
            ],
            "plain, bold, italic, bold-italic",
        )
    }

    /// Returns `true` for bold styles.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns `true` for italic styles.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// A font size that is either still in points or already resolved to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    /// Typographic points; not yet scaled to the output resolution.
    Points(f64),
    /// Whole pixels; already scaled.
    Pixels(i32),
}

impl FontSize {
    /// Resolves a point size to pixels; pixel sizes are returned unchanged.
    pub fn to_pixels(self, resolution: Resolution) -> Self {
        match self {
            Self::Points(pt) => Self::Pixels(to_pixels(Length::pt(pt), resolution)),
            px @ Self::Pixels(_) => px,
        }
    }

    /// Returns `true` once the size has been resolved to pixels.
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Pixels(_))
    }
}

/// An immutable font descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Arc<str>,
    style: FontStyle,
    size: FontSize,
}

impl Font {
    /// Family used when no font exists yet.
    pub const DEFAULT_FAMILY: &'static str = "serif";
    /// Point size used when no font exists yet.
    pub const DEFAULT_POINT_SIZE: f64 = 12.0;

    /// Creates a font descriptor.
    pub fn new(family: impl Into<Arc<str>>, style: FontStyle, size: FontSize) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }

    /// Creates an unresolved font with a point size.
    pub fn points(family: impl Into<Arc<str>>, style: FontStyle, points: f64) -> Self {
        Self::new(family, style, FontSize::Points(points))
    }

    /// Font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Font size.
    pub fn size(&self) -> FontSize {
        self.size
    }

    /// Pixel size at `resolution`, resolving a point size on the fly.
    pub fn pixel_size(&self, resolution: Resolution) -> i32 {
        match self.size {
            FontSize::Pixels(px) => px,
            FontSize::Points(pt) => to_pixels(Length::pt(pt), resolution),
        }
    }

    /// Returns a copy with a different family.
    #[must_use]
    pub fn with_family(&self, family: impl Into<Arc<str>>) -> Self {
        Self {
            family: family.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a different style.
    #[must_use]
    pub fn with_style(&self, style: FontStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    /// Returns a copy with a different size.
    #[must_use]
    pub fn with_size(&self, size: FontSize) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Returns a copy whose size is resolved to pixels. Idempotent.
    #[must_use]
    pub fn to_pixels(&self, resolution: Resolution) -> Self {
        self.with_size(self.size.to_pixels(resolution))
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::points(Self::DEFAULT_FAMILY, FontStyle::Plain, Self::DEFAULT_POINT_SIZE)
    }
}

/// Which component of a font a property addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontComponent {
    /// `*-font-family`.
    Family,
    /// `*-font-size`.
    Size,
    /// `*-font-style`.
    Style,
}

/// A partial font update. Components left as `None` are copied from the current font.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontEdit {
    /// New family name.
    pub family: Option<Arc<str>>,
    /// New size; bare numbers are points.
    pub size: Option<Length>,
    /// New style.
    pub style: Option<FontStyle>,
}

impl FontEdit {
    /// An edit that only changes the family.
    pub fn family(family: impl Into<Arc<str>>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    /// An edit that only changes the size.
    pub fn size(size: Length) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// An edit that only changes the style.
    pub fn style(style: FontStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Layers `later` over this edit; components `later` sets replace the current ones.
    pub fn merge(&mut self, later: Self) {
        if later.family.is_some() {
            self.family = later.family;
        }
        if later.size.is_some() {
            self.size = later.size;
        }
        if later.style.is_some() {
            self.style = later.style;
        }
    }

    /// Parses a raw property value for one font component.
    pub fn parse(component: FontComponent, value: &str) -> Result<Self, ValueError> {
        match component {
            FontComponent::Family => {
                let family = value.trim();
                if family.is_empty() {
                    return Err(ValueError::Token {
                        value: value.to_string(),
                        expected: "a font family name",
                    });
                }
                Ok(Self::family(family))
            }
            FontComponent::Size => {
                let size = parse_length(value, LengthUnit::Points)?;
                if size.value <= 0.0 {
                    return Err(ValueError::OutOfRange(value.to_string()));
                }
                Ok(Self::size(size))
            }
            FontComponent::Style => FontStyle::parse(value).map(Self::style),
        }
    }
}

/// Folds `edit` into `current` (or into the default font when there is none).
///
/// The result always carries a pixel size. An explicit size edit is converted with
/// [`to_pixels`]; otherwise the current size is resolved if it is still in points and kept
/// verbatim if it is already in pixels.
pub fn derive_font(current: Option<&Font>, edit: &FontEdit, resolution: Resolution) -> Font {
    let base = current.cloned().unwrap_or_default();
    let size = match edit.size {
        Some(length) => FontSize::Pixels(to_pixels(length, resolution)),
        None => base.size.to_pixels(resolution),
    };
    Font {
        family: edit.family.clone().unwrap_or(base.family),
        style: edit.style.unwrap_or(base.style),
        size,
    }
}

/// Parses `value` for `component` and folds it into `slot`.
///
/// `slot` is left untouched when the value is malformed.
pub(crate) fn edit_font(
    slot: &mut Font,
    component: FontComponent,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    let edit = FontEdit::parse(component, value)?;
    *slot = derive_font(Some(slot), &edit, resolution);
    Ok(())
}
