// WRT - wrt-validator
// Module: Constant Expressions (C7)
// SW-REQ-ID: REQ_VALIDATOR_011
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Constant expressions: the restricted instruction sub-language allowed
//! in global initializers and element/data segment offsets.
//!
//! Unlike a function body, a constant expression is not checked by
//! [`crate::seq::check_seq`] — only four instruction forms are even legal,
//! so it is simpler to check the finite instruction list directly and
//! thread a classical (never `Open`) stack of concrete value types through
//! it.

use crate::{
    ast::Instruction,
    context::Context,
    match_types::match_value_type,
    prelude::{codes, Error, ErrorCategory, Result, Vec},
    span::{Span, Spanned},
    types::{Mutability, Nullability, RefType, ValueType},
};

fn constexpr_error(msg: impl Into<crate::prelude::String>) -> Error {
    Error::new(ErrorCategory::Validation, codes::VALIDATION_CONSTANT_EXPRESSION_REQUIRED, msg)
}

/// Checks a constant expression produces exactly `expected`, a single
/// value type (global initializers, and element/data segment offsets, are
/// always single-valued in this profile).
pub fn check_constexpr(
    ctx: &Context,
    expr: &[Spanned<Instruction>],
    expected: ValueType,
    span: Span,
) -> Result<()> {
    let mut produced: Vec<ValueType> = Vec::new();
    for ins in expr {
        match &ins.it {
            Instruction::I32Const(_) => produced.push(ValueType::I32),
            Instruction::I64Const(_) => produced.push(ValueType::I64),
            Instruction::F32Const(_) => produced.push(ValueType::F32),
            Instruction::F64Const(_) => produced.push(ValueType::F64),
            Instruction::RefNull(ht) => {
                let rt = match ht {
                    crate::ast::HeapType::Func => RefType::Func,
                    crate::ast::HeapType::Any => RefType::Any,
                    crate::ast::HeapType::Def(idx) => {
                        ctx.type_at(*idx)?;
                        RefType::Def {
                            nullability: Nullability::Nullable,
                            type_idx: *idx,
                        }
                    },
                };
                produced.push(ValueType::Ref(rt));
            },
            Instruction::RefFunc(x) => {
                if !ctx.refs.contains(x) {
                    return Err(Error::new(
                        ErrorCategory::Validation,
                        codes::VALIDATION_UNDECLARED_FUNCTION_REFERENCE,
                        crate::prelude::format!("undeclared function reference {x}"),
                    ));
                }
                let type_idx = ctx.func_type_idx(*x)?;
                produced.push(ValueType::Ref(RefType::Def {
                    nullability: Nullability::NonNullable,
                    type_idx,
                }));
            },
            Instruction::GlobalGet(x) => {
                let g = ctx.global_at(*x)?;
                if g.mutability != Mutability::Immutable {
                    return Err(constexpr_error(crate::prelude::format!(
                        "constant expression requires global {x} to be immutable"
                    )));
                }
                produced.push(g.value_type);
            },
            _ => {
                return Err(constexpr_error(
                    "constant expression requires const, ref.null, ref.func or global.get",
                ));
            },
        }
    }
    if produced.len() != 1 || !match_value_type(&ctx.types, produced[0], expected) {
        return Err(Error::new(
            ErrorCategory::Validation,
            codes::VALIDATION_TYPE_MISMATCH_ERROR,
            crate::prelude::format!(
                "type mismatch: constant expression produces {} at {}..{}, expected {}",
                crate::types::fmt_value_types(&produced),
                span.start,
                span.end,
                expected
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i32_const_satisfies_i32_expectation() {
        let ctx = Context::default();
        let expr = crate::prelude::vec![Spanned::new(Instruction::I32Const(42), Span::NONE)];
        check_constexpr(&ctx, &expr, ValueType::I32, Span::NONE).unwrap();
    }

    #[test]
    fn mutable_global_get_is_rejected() {
        let mut ctx = Context::default();
        ctx.globals.push(crate::types::GlobalType {
            value_type: ValueType::I32,
            mutability: Mutability::Mutable,
        });
        let expr = crate::prelude::vec![Spanned::new(Instruction::GlobalGet(0), Span::NONE)];
        let err = check_constexpr(&ctx, &expr, ValueType::I32, Span::NONE);
        assert!(err.is_err());
    }

    #[test]
    fn local_get_is_not_a_constant_expression() {
        let ctx = Context::default();
        let expr = crate::prelude::vec![Spanned::new(Instruction::LocalGet(0), Span::NONE)];
        let err = check_constexpr(&ctx, &expr, ValueType::I32, Span::NONE);
        assert!(err.is_err());
    }

    #[test]
    fn empty_expression_is_rejected() {
        let ctx = Context::default();
        let err = check_constexpr(&ctx, &[], ValueType::I32, Span::NONE);
        assert!(err.is_err());
    }
}
