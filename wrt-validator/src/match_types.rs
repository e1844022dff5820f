// WRT - wrt-validator
// Module: Subtype Matching
// SW-REQ-ID: REQ_VALIDATOR_005
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Subtyping and type-equivalence.
//!
//! The declarative type system treats subtyping as an external collaborator
//! (a `match` module consumed as a black box); this module is that
//! collaborator's implementation. It is the only place `ValueType`,
//! `RefType` or `FuncType` equality is ever widened — every other module
//! calls into here rather than comparing types directly.

use crate::types::{DefType, FuncType, Nullability, RefType, ValueType};

/// Whether `actual` may be used where `expected` is required.
///
/// - `BotType` matches anything (it fills unreachable stack slots).
/// - Identical types always match.
/// - Reference types additionally match per [`match_ref_type`].
#[must_use]
pub fn match_value_type(types: &[DefType], actual: ValueType, expected: ValueType) -> bool {
    match (actual, expected) {
        (ValueType::Bot, _) => true,
        (a, b) if a == b => true,
        (ValueType::Ref(a), ValueType::Ref(b)) => match_ref_type(types, a, b),
        _ => false,
    }
}

/// Whether reference type `actual` is a subtype of `expected`.
///
/// Rules, in order: reflexivity; `Null <: Def(Nullable, _)`; `Def(_, x) <:
/// Def(Nullable, x)` (nullability may only widen, never narrow); `Def(_, x)
/// <: Func` when `x` resolves to a function type; `Null <: Func` (the null
/// reference inhabits every nullable top type, by the same reasoning as the
/// `Def` case — an extension of the source rules consistent with their
/// intent, recorded as an explicit decision in `DESIGN.md`); everything
/// `<: Any`. No width or depth variance beyond nullability is admitted.
#[must_use]
pub fn match_ref_type(types: &[DefType], actual: RefType, expected: RefType) -> bool {
    if actual == expected {
        return true;
    }
    match expected {
        RefType::Any => true,
        RefType::Def {
            nullability: Nullability::Nullable,
            type_idx: expected_idx,
        } => match actual {
            RefType::Null => true,
            RefType::Def {
                type_idx: actual_idx,
                ..
            } => actual_idx == expected_idx,
            RefType::Any | RefType::Func => false,
        },
        RefType::Func => match actual {
            RefType::Null => true,
            RefType::Def { type_idx, .. } => {
                matches!(types.get(type_idx as usize), Some(DefType::Func(_)))
            },
            RefType::Any => false,
            RefType::Func => true,
        },
        RefType::Def { .. } | RefType::Null => false,
    }
}

/// Whether `actual` may be called where a value of type `expected` is
/// required: equal arity, and each parameter/result pairwise matches under
/// [`match_value_type`] (covariant in both positions — this profile has no
/// function subtyping beyond structural equality plus nullability in
/// nested reference types).
#[must_use]
pub fn match_func_type(types: &[DefType], actual: &FuncType, expected: &FuncType) -> bool {
    actual.ins.len() == expected.ins.len()
        && actual.out.len() == expected.out.len()
        && actual
            .ins
            .iter()
            .zip(expected.ins.iter())
            .all(|(&a, &e)| match_value_type(types, a, e))
        && actual
            .out
            .iter()
            .zip(expected.out.iter())
            .all(|(&a, &e)| match_value_type(types, a, e))
}

/// Whether every element of `actual` matches the corresponding element of
/// `expected`, pairwise, requiring equal length.
#[must_use]
pub fn match_stack_type(types: &[DefType], actual: &[ValueType], expected: &[ValueType]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(&a, &e)| match_value_type(types, a, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FuncType, NumType};

    fn def_types() -> Vec<DefType> {
        vec![DefType::Func(FuncType {
            ins: vec![],
            out: vec![],
        })]
    }

    #[test]
    fn bot_matches_everything() {
        let types = def_types();
        assert!(match_value_type(&types, ValueType::Bot, ValueType::I32));
        assert!(match_value_type(
            &types,
            ValueType::Bot,
            ValueType::Ref(RefType::Func)
        ));
    }

    #[test]
    fn null_is_subtype_of_nullable_def_not_non_null() {
        let types = def_types();
        let nullable = RefType::Def {
            nullability: Nullability::Nullable,
            type_idx: 0,
        };
        let non_null = RefType::Def {
            nullability: Nullability::NonNullable,
            type_idx: 0,
        };
        assert!(match_ref_type(&types, RefType::Null, nullable));
        assert!(!match_ref_type(&types, RefType::Null, non_null));
    }

    #[test]
    fn nullability_widens_but_never_narrows() {
        let types = def_types();
        let nullable = RefType::Def {
            nullability: Nullability::Nullable,
            type_idx: 0,
        };
        let non_null = RefType::Def {
            nullability: Nullability::NonNullable,
            type_idx: 0,
        };
        assert!(match_ref_type(&types, non_null, nullable));
        assert!(!match_ref_type(&types, nullable, non_null));
    }

    #[test]
    fn def_matches_func_top_type() {
        let types = def_types();
        let def = RefType::Def {
            nullability: Nullability::NonNullable,
            type_idx: 0,
        };
        assert!(match_ref_type(&types, def, RefType::Func));
    }

    #[test]
    fn everything_matches_any() {
        let types = def_types();
        assert!(match_ref_type(&types, RefType::Func, RefType::Any));
        assert!(match_ref_type(&types, RefType::Null, RefType::Any));
    }

    #[test]
    fn any_does_not_match_func() {
        let types = def_types();
        assert!(!match_ref_type(&types, RefType::Any, RefType::Func));
    }

    #[test]
    fn func_types_match_depth_equal() {
        let types = def_types();
        let a = FuncType {
            ins: vec![ValueType::Num(NumType::I32)],
            out: vec![],
        };
        let b = FuncType {
            ins: vec![ValueType::Num(NumType::I32)],
            out: vec![],
        };
        let c = FuncType {
            ins: vec![ValueType::Num(NumType::I64)],
            out: vec![],
        };
        assert!(match_func_type(&types, &a, &b));
        assert!(!match_func_type(&types, &a, &c));
    }
}
