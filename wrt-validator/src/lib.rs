// WRT - wrt-validator
// Module: WebAssembly Core Module Static Validator
// SW-REQ-ID: REQ_VALIDATOR_001
// SW-REQ-ID: REQ_VALIDATOR_002
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Static validator for WRT core WebAssembly modules.
//!
//! This crate decides whether a parsed module AST is well-typed under a
//! declarative, stack-polymorphic type system and, if not, returns exactly
//! one [`wrt_error::Error`] pinned to the offending [`span::Span`].
//!
//! Validation is a pure function of the AST: it performs no I/O, never
//! mutates its input, and never retries. See [`module`] for the entry
//! points ([`module::validate_module`] and
//! [`module::validate_module_with_config`]).
//!
//! The crate treats three concerns as external collaborators it must still
//! implement locally, since no sibling crate in this workspace supplies
//! them: reference-type subtyping ([`match_types`]), free-variable analysis
//! for function references ([`refs`]), and the AST itself ([`ast`]), which a
//! real deployment would receive from a decoder/parser crate instead of
//! constructing directly.

#[cfg(feature = "std")]
extern crate std;

#[cfg(any(feature = "std", feature = "alloc"))]
extern crate alloc;

pub mod ast;
pub mod constexpr;
pub mod context;
pub mod decls;
pub mod instr;
pub mod match_types;
pub mod module;
pub mod prelude;
pub mod refs;
pub mod seq;
pub mod span;
pub mod stack;
pub mod types;
pub mod wf;

pub use context::Context;
pub use module::{validate_module, validate_module_with_config, ValidationConfig};
pub use span::{Span, Spanned};
