// WRT - wrt-validator
// Module: Validation Context
// SW-REQ-ID: REQ_VALIDATOR_004
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Indexed environments a checker resolves indices against.
//!
//! A [`Context`] is built strictly monotonically by the module driver (see
//! [`crate::module`]) and is never mutated once handed to a checker;
//! extending it for a nested scope (a block's label, a function's locals)
//! produces a new value rather than mutating the original, matching the
//! "contexts are passed by value" design note.

use crate::{
    prelude::{Error, ErrorCategory, Result, Vec},
    types::{DefType, GlobalType, MemoryType, RefType, TableType, ValueType},
};

#[cfg(feature = "std")]
use std::collections::BTreeSet as IndexSet;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::collections::BTreeSet as IndexSet;

/// The category named in an "unknown `<category>` `<idx>`" diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// A type-section index.
    Type,
    /// A function index.
    Function,
    /// A table index.
    Table,
    /// A memory index.
    Memory,
    /// A global index.
    Global,
    /// An element-segment index.
    ElemSegment,
    /// A data-segment index.
    DataSegment,
    /// A local index.
    Local,
    /// A label (relative block nesting depth).
    Label,
}

impl IndexKind {
    const fn name(self) -> &'static str {
        match self {
            IndexKind::Type => "type",
            IndexKind::Function => "function",
            IndexKind::Table => "table",
            IndexKind::Memory => "memory",
            IndexKind::Global => "global",
            IndexKind::ElemSegment => "elem segment",
            IndexKind::DataSegment => "data segment",
            IndexKind::Local => "local",
            IndexKind::Label => "label",
        }
    }
}

/// Raises the canonical "unknown `<category>` `<idx>`" diagnostic.
pub fn unknown_index(kind: IndexKind, idx: u32) -> Error {
    Error::new(
        ErrorCategory::Validation,
        crate::prelude::codes::VALIDATION_UNKNOWN_INDEX,
        crate::prelude::format!("unknown {} {}", kind.name(), idx),
    )
}

/// The immutable environment snapshot every checker resolves indices
/// against.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// The module's type section.
    pub types: Vec<DefType>,
    /// Each function's type-section index; imports first, then
    /// declarations.
    pub funcs: Vec<u32>,
    /// Table types; imports first, then declarations.
    pub tables: Vec<TableType>,
    /// Memory types; imports first, then declarations.
    pub memories: Vec<MemoryType>,
    /// Global types; imports first, then declarations.
    pub globals: Vec<GlobalType>,
    /// Each element segment's reference type.
    pub elems: Vec<RefType>,
    /// The number of data segments (their contents carry no type).
    pub data_count: usize,
    /// The enclosing function's locals (parameters first).
    pub locals: Vec<ValueType>,
    /// The enclosing function's declared result types.
    pub results: Vec<ValueType>,
    /// The chain of enclosing labels' expected branch-target types,
    /// innermost first.
    pub labels: Vec<Vec<ValueType>>,
    /// Function indices that appear as `ref.func` sub-expressions anywhere
    /// in the module's element section.
    pub refs: IndexSet<u32>,
}

impl Context {
    /// Resolves a type-section index.
    pub fn type_at(&self, idx: u32) -> Result<&DefType> {
        self.types
            .get(idx as usize)
            .ok_or_else(|| unknown_index(IndexKind::Type, idx))
    }

    /// Resolves a function's type-section index.
    pub fn func_type_idx(&self, idx: u32) -> Result<u32> {
        self.funcs
            .get(idx as usize)
            .copied()
            .ok_or_else(|| unknown_index(IndexKind::Function, idx))
    }

    /// Resolves a function's signature.
    pub fn func_signature(&self, idx: u32) -> Result<&crate::types::FuncType> {
        let type_idx = self.func_type_idx(idx)?;
        let def = self.type_at(type_idx)?;
        Ok(def
            .as_func()
            .expect("DefType currently has only the Func variant"))
    }

    /// Resolves a table type.
    pub fn table_at(&self, idx: u32) -> Result<&TableType> {
        self.tables
            .get(idx as usize)
            .ok_or_else(|| unknown_index(IndexKind::Table, idx))
    }

    /// Resolves a memory type.
    pub fn memory_at(&self, idx: u32) -> Result<&MemoryType> {
        self.memories
            .get(idx as usize)
            .ok_or_else(|| unknown_index(IndexKind::Memory, idx))
    }

    /// Resolves a global's type.
    pub fn global_at(&self, idx: u32) -> Result<&GlobalType> {
        self.globals
            .get(idx as usize)
            .ok_or_else(|| unknown_index(IndexKind::Global, idx))
    }

    /// Resolves an element segment's declared reference type.
    pub fn elem_at(&self, idx: u32) -> Result<RefType> {
        self.elems
            .get(idx as usize)
            .copied()
            .ok_or_else(|| unknown_index(IndexKind::ElemSegment, idx))
    }

    /// Confirms a data segment index resolves; data segments carry no type
    /// beyond their existence.
    pub fn data_at(&self, idx: u32) -> Result<()> {
        if (idx as usize) < self.data_count {
            Ok(())
        } else {
            Err(unknown_index(IndexKind::DataSegment, idx))
        }
    }

    /// Resolves a local's type.
    pub fn local_at(&self, idx: u32) -> Result<ValueType> {
        self.locals
            .get(idx as usize)
            .copied()
            .ok_or_else(|| unknown_index(IndexKind::Local, idx))
    }

    /// Resolves a label's expected branch-target types, innermost = 0.
    pub fn label_at(&self, idx: u32) -> Result<&[ValueType]> {
        self.labels
            .get(idx as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| unknown_index(IndexKind::Label, idx))
    }

    /// Returns a context with a new label prepended (innermost), as
    /// entering a `block`/`if` (whose branch target is the block's result
    /// types) or `loop` (whose branch target is empty, since branches
    /// target the head) does.
    #[must_use]
    pub fn with_label(&self, ts: Vec<ValueType>) -> Self {
        let mut labels = Vec::with_capacity(self.labels.len() + 1);
        labels.push(ts);
        labels.extend(self.labels.iter().cloned());
        Self {
            labels,
            ..self.clone()
        }
    }

    /// Returns a context with additional locals appended, as entering a
    /// `let` block does.
    #[must_use]
    pub fn with_extra_locals(&self, extra: impl IntoIterator<Item = ValueType>) -> Self {
        let mut locals = self.locals.clone();
        locals.extend(extra);
        Self {
            locals,
            ..self.clone()
        }
    }
}
