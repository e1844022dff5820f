// WRT - wrt-validator
// Module: Validator Prelude
// SW-REQ-ID: REQ_VALIDATOR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified imports for both `std` and `no_std + alloc` builds.
//!
//! Every module in this crate pulls its collection and string types from
//! here rather than choosing `std`/`alloc` directly, so the `std`/`alloc`
//! split only has to be made once.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};
#[cfg(feature = "std")]
pub use std::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

pub use core::{
    cmp::{Eq, PartialEq},
    fmt,
    fmt::{Debug, Display},
};

pub use wrt_error::{codes, Error, ErrorCategory, Result};
