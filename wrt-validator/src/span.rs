// WRT - wrt-validator
// Module: Source Spans
// SW-REQ-ID: REQ_VALIDATOR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Source spans used exclusively for diagnostic attribution.
//!
//! The validator never interprets a [`Span`]; it only carries it from the
//! AST node under inspection into the [`wrt_error::Error`] raised on
//! failure.

/// A byte range into the module's source representation.
///
/// `start` and `end` are relative to whatever unit the AST producer chose
/// (typically file-relative byte offsets into the binary or text format);
/// the validator treats them as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Inclusive start offset.
    pub start: u32,
    /// Exclusive end offset.
    pub end: u32,
}

impl Span {
    /// A span with no extent, used for synthesized diagnostics that have no
    /// single AST node to point at (e.g. module-wide invariants).
    pub const NONE: Span = Span { start: 0, end: 0 };

    /// Creates a span covering `[start, end)`.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// Pairs a payload with the span it was parsed from.
///
/// Every AST node carries its payload (`it`) alongside the span (`at`) it
/// was parsed from, so a checker can always attribute a diagnostic back to
/// source without threading position tracking through every signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spanned<T> {
    /// The node's payload.
    pub it: T,
    /// The node's source span.
    pub at: Span,
}

impl<T> Spanned<T> {
    /// Wraps `it` with `at`.
    pub const fn new(it: T, at: Span) -> Self {
        Self { it, at }
    }
}
