// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Only [`CascadeError`] ever reaches callers of the cascade. [`ValueError`] is produced by
//! handlers that reject a value and is swallowed (and logged) by the dispatch resolver.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// A property value that failed its handler's syntactic check.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Not `true` or `false`.
    #[error("`{0}` is not a boolean")]
    Boolean(String),
    /// Not a base-10 integer in range.
    #[error("`{0}` is not an integer")]
    Integer(String),
    /// Not a finite decimal number.
    #[error("`{0}` is not a number")]
    Number(String),
    /// Not a CSS color.
    #[error("`{0}` is not a color")]
    Color(String),
    /// Not one of the accepted tokens.
    #[error("`{value}` is not one of {expected}")]
    Token {
        /// The rejected value.
        value: String,
        /// Human-readable list of accepted tokens.
        expected: &'static str,
    },
    /// Not a non-negative length with a known unit.
    #[error("`{0}` is not a length")]
    Length(String),
    /// Syntactically valid but outside the accepted range.
    #[error("`{0}` is out of range")]
    OutOfRange(String),
    /// Not a comma-separated list of `key:value` pairs.
    #[error("`{0}` is not a list of `key:value` pairs")]
    Pairs(String),
}

/// A chart that cannot be configured or sized at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CascadeError {
    /// Width and height were given in different units.
    #[error("chart width `{width}` and height `{height}` use different units")]
    MismatchedUnits {
        /// Raw width value.
        width: String,
        /// Raw height value.
        height: String,
    },
    /// A chart dimension was present but could not be parsed.
    #[error("chart {dimension} `{value}` is not a valid length")]
    InvalidDimension {
        /// `"width"` or `"height"`.
        dimension: &'static str,
        /// Raw value.
        value: String,
    },
}
