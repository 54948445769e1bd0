// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setters for length-valued compound attributes (insets and offsets).
//!
//! Insets are `kurbo::Insets` (`x0` left, `y0` top, `x1` right, `y1` bottom) and offsets are
//! `kurbo::Vec2`. Each side is set from its own property after shorthand expansion.

use kurbo::{Insets, Vec2};

use crate::length::{LengthUnit, Resolution, parse_length, to_pixels};
use crate::ValueError;

/// One side of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

/// One component of a 2D offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Axis2 {
    X,
    Y,
}

/// Parses a length (bare numbers are pixels) and normalizes it to pixels.
pub(crate) fn pixels(value: &str, resolution: Resolution) -> Result<f64, ValueError> {
    let length = parse_length(value, LengthUnit::Pixels)?;
    Ok(f64::from(to_pixels(length, resolution)))
}

/// Sets a pixel length attribute.
pub(crate) fn set_length(
    slot: &mut f64,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    *slot = pixels(value, resolution)?;
    Ok(())
}

/// Sets one side of `insets`, keeping the other three.
pub(crate) fn set_inset(
    insets: &mut Insets,
    side: Side,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    let px = pixels(value, resolution)?;
    match side {
        Side::Top => insets.y0 = px,
        Side::Left => insets.x0 = px,
        Side::Bottom => insets.y1 = px,
        Side::Right => insets.x1 = px,
    }
    Ok(())
}

/// Sets one component of `offset`, keeping the other.
pub(crate) fn set_offset(
    offset: &mut Vec2,
    axis: Axis2,
    value: &str,
    resolution: Resolution,
) -> Result<(), ValueError> {
    let px = pixels(value, resolution)?;
    match axis {
        Axis2::X => offset.x = px,
        Axis2::Y => offset.y = px,
    }
    Ok(())
}
