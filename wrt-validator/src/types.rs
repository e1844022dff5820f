// WRT - wrt-validator
// Module: Value, Reference and Composite Types
// SW-REQ-ID: REQ_VALIDATOR_003
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The type algebra the validator reasons about.
//!
//! This mirrors the WebAssembly core type system extended with typed
//! function references and explicit reference nullability. [`ValueType`]
//! additionally carries [`ValueType::Bot`], an internal placeholder that
//! subtype-matches every value type and is never part of the surface
//! syntax — it only ever appears inside an [`crate::stack::InferredStack`].

use crate::prelude::Vec;

/// Numeric value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumType {
    /// 32-bit integer.
    I32,
    /// 64-bit integer.
    I64,
    /// 32-bit IEEE-754 float.
    F32,
    /// 64-bit IEEE-754 float.
    F64,
}

impl NumType {
    /// The natural width of this type in bytes, used as the default
    /// transfer size for an unpacked `load`/`store`.
    #[must_use]
    pub const fn natural_size(self) -> u32 {
        match self {
            NumType::I32 | NumType::F32 => 4,
            NumType::I64 | NumType::F64 => 8,
        }
    }
}

impl core::fmt::Display for NumType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            NumType::I32 => "i32",
            NumType::I64 => "i64",
            NumType::F32 => "f32",
            NumType::F64 => "f64",
        })
    }
}

/// Whether a reference type admits the null reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// The null reference is a valid value of this type.
    Nullable,
    /// The null reference is not a valid value of this type.
    NonNullable,
}

/// Reference types.
///
/// `Any` and `Func` are the top types of the reference hierarchy (externref
/// and funcref's un-indexed forms); `Null` is the bottom reference type
/// (the type of `ref.null` before it is refined); `Def` names a concrete
/// function type by index with explicit nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefType {
    /// Top of the reference hierarchy: any reference value.
    Any,
    /// Bottom of the reference hierarchy: the null reference alone.
    Null,
    /// Any function reference, typed or not.
    Func,
    /// A reference to the function type named by `type_idx`, with the given
    /// nullability.
    Def {
        /// Whether the null reference also inhabits this type.
        nullability: Nullability,
        /// Index into [`crate::context::Context::types`].
        type_idx: u32,
    },
}

impl RefType {
    /// The nullability of this reference type, where defined.
    ///
    /// `Any` and `Func` are always treated as nullable top types; `Null` is
    /// the null reference itself.
    #[must_use]
    pub const fn nullability(self) -> Nullability {
        match self {
            RefType::Def { nullability, .. } => nullability,
            RefType::Any | RefType::Null | RefType::Func => Nullability::Nullable,
        }
    }

    /// Returns the same reference type refined to non-nullable, if
    /// refinement is meaningful (only `Def` carries nullability in the
    /// surface syntax).
    #[must_use]
    pub const fn as_non_null(self) -> Self {
        match self {
            RefType::Def { type_idx, .. } => RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx,
            },
            other => other,
        }
    }
}

impl core::fmt::Display for RefType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RefType::Any => f.write_str("anyref"),
            RefType::Null => f.write_str("nullref"),
            RefType::Func => f.write_str("funcref"),
            RefType::Def {
                nullability: Nullability::Nullable,
                type_idx,
            } => write!(f, "(ref null {type_idx})"),
            RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx,
            } => write!(f, "(ref {type_idx})"),
        }
    }
}

/// A value type, or the internal bottom type used to fill unreachable
/// stack slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A numeric type.
    Num(NumType),
    /// A reference type.
    Ref(RefType),
    /// Matches every value type; populates slots below unreachable code.
    Bot,
}

impl ValueType {
    /// Shorthand for `ValueType::Num(NumType::I32)`.
    pub const I32: ValueType = ValueType::Num(NumType::I32);
    /// Shorthand for `ValueType::Num(NumType::I64)`.
    pub const I64: ValueType = ValueType::Num(NumType::I64);
    /// Shorthand for `ValueType::Num(NumType::F32)`.
    pub const F32: ValueType = ValueType::Num(NumType::F32);
    /// Shorthand for `ValueType::Num(NumType::F64)`.
    pub const F64: ValueType = ValueType::Num(NumType::F64);

    /// A value type has a canonical zero value iff it is numeric, or a
    /// nullable reference (whose default is the null reference).
    #[must_use]
    pub const fn is_defaultable(self) -> bool {
        match self {
            ValueType::Num(_) | ValueType::Bot => true,
            ValueType::Ref(r) => matches!(r.nullability(), Nullability::Nullable),
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueType::Num(n) => write!(f, "{n}"),
            ValueType::Ref(r) => write!(f, "{r}"),
            ValueType::Bot => f.write_str("bot"),
        }
    }
}

/// Formats a sequence of value types the way a diagnostic names a stack
/// shape: `[i32, i64]`.
#[must_use]
pub fn fmt_value_types(types: &[ValueType]) -> crate::prelude::String {
    let mut out = crate::prelude::String::from("[");
    for (i, t) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&crate::prelude::format!("{t}"));
    }
    out.push(']');
    out
}

/// A function signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuncType {
    /// Parameter types, in order.
    pub ins: Vec<ValueType>,
    /// Result types, in order.
    pub out: Vec<ValueType>,
}

/// Size bounds shared by tables and memories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Minimum size.
    pub min: u32,
    /// Maximum size, if bounded.
    pub max: Option<u32>,
}

/// A table type: an element reference type plus size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableType {
    /// Bounds on the number of elements.
    pub limits: Limits,
    /// The type of values stored in the table.
    pub element: RefType,
}

/// A linear memory's size bounds, in 64 KiB pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryType {
    /// Bounds on the memory size, in pages.
    pub limits: Limits,
}

/// Whether a global can be written to after initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// `global.set` is permitted.
    Mutable,
    /// The global is fixed at its initializer value.
    Immutable,
}

/// A global variable's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlobalType {
    /// The type of value stored.
    pub value_type: ValueType,
    /// Whether the global is mutable.
    pub mutability: Mutability,
}

/// A type defined in the module's type section.
///
/// Currently only function types are defined; the enum is kept open
/// (rather than collapsed to a bare `FuncType`) so a future struct/array
/// type extension is additive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefType {
    /// A function signature.
    Func(FuncType),
}

impl DefType {
    /// Views this definition as a function type, if it is one.
    ///
    /// Every `DefType` happens to be a function type at this profile, but
    /// the accessor exists so call sites read as "this must be a function
    /// type" rather than silently assuming there is only one variant.
    #[must_use]
    pub const fn as_func(&self) -> Option<&FuncType> {
        match self {
            DefType::Func(f) => Some(f),
        }
    }
}

/// The result-type shape a `block`/`loop`/`if` declares, before it is
/// resolved against the module's type section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// No parameters, no results.
    Empty,
    /// No parameters, a single result.
    Value(ValueType),
    /// Parameters and results drawn from `types[idx]`.
    FuncType(u32),
}
