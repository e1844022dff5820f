// WRT - wrt-validator
// Module: Instruction Sequence and Block Checking (C6)
// SW-REQ-ID: REQ_VALIDATOR_010
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Folds [`crate::instr::check_instr`] over an instruction sequence, and
//! checks a block's body reaches exactly its declared exit shape.

use crate::{
    context::Context,
    instr::check_instr,
    prelude::{codes, Error, ErrorCategory, Result, Vec},
    span::{Span, Spanned},
    stack::InferredStack,
    types::ValueType,
};

/// Runs every instruction in `es` in order, threading the inferred stack
/// through each one, and returns the stack as it stands after the last
/// instruction (or `start` unchanged for an empty sequence).
pub fn check_seq(
    ctx: &Context,
    allow_multi_value: bool,
    es: &[Spanned<crate::ast::Instruction>],
    start: InferredStack,
) -> Result<InferredStack> {
    let mut stack = start;
    for instr in es {
        stack = check_instr(ctx, allow_multi_value, &stack, instr)?;
    }
    Ok(stack)
}

/// Checks a block body reaches exactly `exit_ts`: runs [`check_seq`], then
/// requires the resulting stack equal `exit_ts` with nothing left over
/// beneath it (an `Open` residual with an empty tail is fine — the
/// unknown prefix could supply anything — but a non-empty residual, open
/// or closed, means the body left values on the stack beyond its declared
/// result).
pub fn check_block(
    ctx: &Context,
    allow_multi_value: bool,
    es: &[Spanned<crate::ast::Instruction>],
    start: InferredStack,
    exit_ts: &[ValueType],
    span: Span,
) -> Result<()> {
    let end = check_seq(ctx, allow_multi_value, es, start)?;
    let residual = end.pop(&ctx.types, exit_ts, span)?;
    let exhausted = residual.tail.is_empty();
    if !exhausted {
        return Err(Error::new(
            ErrorCategory::Validation,
            codes::VALIDATION_CONTROL_FLOW_ERROR,
            crate::prelude::format!(
                "type mismatch: block exits with {:?} left over beyond its declared result {:?}",
                residual.tail,
                exit_ts
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::Instruction,
        types::{DefType, FuncType},
    };

    fn empty_ctx() -> Context {
        Context::default()
    }

    #[test]
    fn empty_sequence_returns_start_unchanged() {
        let ctx = empty_ctx();
        let start = InferredStack::closed(crate::prelude::vec![ValueType::I32]);
        let end = check_seq(&ctx, false, &[], start.clone()).unwrap();
        assert_eq!(end, start);
    }

    #[test]
    fn const_then_drop_reaches_empty_exit() {
        let ctx = empty_ctx();
        let es = crate::prelude::vec![
            Spanned::new(Instruction::I32Const(1), Span::NONE),
            Spanned::new(Instruction::Drop, Span::NONE),
        ];
        check_block(&ctx, false, &es, InferredStack::closed(crate::prelude::vec![]), &[], Span::NONE).unwrap();
    }

    #[test]
    fn leftover_value_is_rejected() {
        let ctx = empty_ctx();
        let es = crate::prelude::vec![Spanned::new(Instruction::I32Const(1), Span::NONE)];
        let err = check_block(&ctx, false, &es, InferredStack::closed(crate::prelude::vec![]), &[], Span::NONE);
        assert!(err.is_err());
    }

    #[test]
    fn unreachable_body_satisfies_any_exit_shape() {
        let mut ctx = empty_ctx();
        ctx.types.push(DefType::Func(FuncType {
            ins: Vec::new(),
            out: Vec::new(),
        }));
        let es = crate::prelude::vec![Spanned::new(Instruction::Unreachable, Span::NONE)];
        check_block(
            &ctx,
            false,
            &es,
            InferredStack::closed(crate::prelude::vec![]),
            &[ValueType::I32, ValueType::I64],
            Span::NONE,
        )
        .unwrap();
    }
}
