// WRT - wrt-validator
// Module: Type Well-Formedness (C3)
// SW-REQ-ID: REQ_VALIDATOR_008
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Checks that value, reference, function, table, memory and global types
//! are well-formed in a [`Context`] — every index a type mentions must
//! resolve, and every [`Limits`] must be internally consistent.

use crate::{
    context::{unknown_index, Context, IndexKind},
    prelude::{codes, Error, ErrorCategory, Result},
    types::{DefType, FuncType, GlobalType, Limits, MemoryType, RefType, TableType, ValueType},
};

/// The largest table size this profile admits: `2^32 - 1` elements.
pub const TABLE_RANGE: u64 = u32::MAX as u64;
/// The largest memory size this profile admits: `65536` pages (4 GiB).
pub const MEMORY_RANGE: u64 = 65536;

/// Checks a value type is well-formed: numeric types and [`ValueType::Bot`]
/// always are; reference types delegate to [`check_ref_type`].
pub fn check_value_type(ctx: &Context, vt: ValueType) -> Result<()> {
    match vt {
        ValueType::Num(_) | ValueType::Bot => Ok(()),
        ValueType::Ref(r) => check_ref_type(ctx, r),
    }
}

/// Checks a reference type is well-formed: a `Def` reference's type index
/// must resolve in the context's type section.
pub fn check_ref_type(ctx: &Context, rt: RefType) -> Result<()> {
    match rt {
        RefType::Any | RefType::Null | RefType::Func => Ok(()),
        RefType::Def { type_idx, .. } => {
            ctx.type_at(type_idx)?;
            Ok(())
        },
    }
}

/// Checks a function type: every parameter and result type is well-formed.
pub fn check_func_type(ctx: &Context, ft: &FuncType) -> Result<()> {
    for &vt in ft.ins.iter().chain(ft.out.iter()) {
        check_value_type(ctx, vt)?;
    }
    Ok(())
}

/// Checks a defined type (currently only the function-type variant).
pub fn check_def_type(ctx: &Context, dt: &DefType) -> Result<()> {
    match dt {
        DefType::Func(ft) => check_func_type(ctx, ft),
    }
}

fn check_limits(limits: Limits, range: u64, too_big_code: u16, too_big_message: &'static str) -> Result<()> {
    if limits.min as u64 > range || limits.max.is_some_and(|m| m as u64 > range) {
        return Err(Error::new(ErrorCategory::Validation, too_big_code, too_big_message));
    }
    if let Some(max) = limits.max {
        if limits.min > max {
            return Err(Error::new(
                ErrorCategory::Validation,
                codes::VALIDATION_LIMIT_MAX_LESS_THAN_MIN,
                "size minimum must not be greater than maximum",
            ));
        }
    }
    Ok(())
}

/// Checks a table type: the element type is well-formed, and its limits
/// fit within [`TABLE_RANGE`].
pub fn check_table_type(ctx: &Context, tt: &TableType) -> Result<()> {
    check_ref_type(ctx, tt.element)?;
    if !ValueType::Ref(tt.element).is_defaultable() {
        return Err(Error::new(
            ErrorCategory::Validation,
            codes::VALIDATION_NON_DEFAULTABLE_TYPE,
            "non-defaultable element type",
        ));
    }
    check_limits(
        tt.limits,
        TABLE_RANGE,
        codes::VALIDATION_LIMIT_MAX_EXCEEDS_U32,
        "table size must be at most 2^32",
    )
}

/// Checks a memory type: its limits fit within [`MEMORY_RANGE`] pages.
pub fn check_memory_type(_ctx: &Context, mt: &MemoryType) -> Result<()> {
    check_limits(
        mt.limits,
        MEMORY_RANGE,
        codes::VALIDATION_MEMORY_SIZE_TOO_BIG,
        "memory size must be at most 65536 pages (4GiB)",
    )
}

/// Checks a global type: its value type is well-formed.
pub fn check_global_type(ctx: &Context, gt: &GlobalType) -> Result<()> {
    check_value_type(ctx, gt.value_type)
}

/// Enforces the result-arity guard configurable via [`crate::module::ValidationConfig`]:
/// under the default profile, block boundaries and `select` may not carry
/// more than one result type. `allow_multi_value` is threaded down from
/// [`crate::module::ValidationConfig`].
pub fn check_arity(arity: usize, allow_multi_value: bool) -> Result<()> {
    if allow_multi_value || arity <= 1 {
        return Ok(());
    }
    Err(Error::new(
        ErrorCategory::Validation,
        codes::VALIDATION_INVALID_RESULT_ARITY,
        "invalid result arity, larger than 1 is not (yet) allowed",
    ))
}

/// Resolves a function index's signature, wrapping
/// [`unknown_index`]-shaped errors consistently with the rest of the
/// crate.
pub fn resolve_func(ctx: &Context, idx: u32) -> Result<&FuncType> {
    ctx.func_signature(idx)
        .map_err(|_| unknown_index(IndexKind::Function, idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Nullability, RefType};

    #[test]
    fn non_nullable_table_element_is_rejected() {
        let ctx = Context::default();
        let tt = TableType {
            limits: Limits { min: 0, max: None },
            element: RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx: 0,
            },
        };
        let ctx = Context {
            types: crate::prelude::vec![DefType::Func(FuncType {
                ins: crate::prelude::Vec::new(),
                out: crate::prelude::Vec::new(),
            })],
            ..ctx
        };
        assert!(check_table_type(&ctx, &tt).is_err());
    }

    #[test]
    fn nullable_table_element_is_accepted() {
        let tt = TableType {
            limits: Limits { min: 0, max: None },
            element: RefType::Func,
        };
        assert!(check_table_type(&Context::default(), &tt).is_ok());
    }
}
