// WRT - wrt-error
// Module: WRT Error Context
// SW-REQ-ID: REQ_004
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error context utilities.
//!
//! This module is currently a placeholder. Its original content, which provided
//! context-aware error handling (e.g., `ResultExt`), was removed due to
//! dependencies on `alloc`. Future work may reintroduce `no_std` and `no_alloc`
//! compatible context mechanisms here.

// Binary std/no_std choice
// Binary std/no_std choice
// mechanisms.
