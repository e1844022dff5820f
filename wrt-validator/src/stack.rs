// WRT - wrt-validator
// Module: Inferred Stack Algebra
// SW-REQ-ID: REQ_VALIDATOR_006
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The deterministic algorithm behind the declarative type system's
//! stack-polymorphic, non-deterministic rules.
//!
//! An [`InferredStack`] is the validator's running model of the operand
//! stack below the instruction currently being checked: a known tail plus
//! a flag saying whether an arbitrary, unknown prefix lies below it. That
//! flag becomes `Open` the moment unreachable code is entered (after
//! `unreachable`, `br`, `return`, ...) and stays `Open` until a block
//! boundary re-closes it — modeling "unreachable code and branch-to-return
//! instructions leave the expected stack shape unspecified" without a
//! lazy unification variable per slot.

use crate::{
    match_types::match_value_type,
    prelude::{Error, ErrorCategory, Result, Vec},
    span::Span,
    types::{DefType, ValueType},
};

/// Whether an inferred stack has a known bottom (`Closed`) or an arbitrary
/// unknown prefix below its `tail` (`Open`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyTail {
    /// The stack's full contents are `tail`; nothing unknown lies beneath.
    Closed,
    /// An arbitrary, unknown sequence of values lies below `tail`.
    Open,
}

/// The validator's model of the operand stack at one point in a function
/// body: a known tail, and whether an unknown prefix lies below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredStack {
    /// Whether an unknown prefix lies below `tail`.
    pub poly: PolyTail,
    /// The known portion, ordered bottom to top.
    pub tail: Vec<ValueType>,
}

impl InferredStack {
    /// The empty, closed stack: the state on entry to a function body or
    /// block.
    #[must_use]
    pub fn closed(tail: Vec<ValueType>) -> Self {
        Self {
            poly: PolyTail::Closed,
            tail,
        }
    }

    /// An open stack with the given known tail, as produced by a
    /// stack-polymorphic instruction.
    #[must_use]
    pub fn open(tail: Vec<ValueType>) -> Self {
        Self {
            poly: PolyTail::Open,
            tail,
        }
    }

    /// Returns the `i`-th element from the top, or [`ValueType::Bot`] if
    /// out of range — always well-defined, since an out-of-range peek below
    /// an `Open` tail stands for an arbitrary unreachable value.
    #[must_use]
    pub fn peek(&self, i: usize) -> ValueType {
        let len = self.tail.len();
        if i < len {
            self.tail[len - 1 - i]
        } else {
            ValueType::Bot
        }
    }

    /// Pops `expected` off this stack, checking each popped value against
    /// the corresponding expected type under subtyping.
    ///
    /// Only the top `min(|expected|, |actual|)` slots are compared
    /// directly; if `expected` reaches below the bottom of an `Open`
    /// stack, the missing slots are treated as [`ValueType::Bot`] (they
    /// stand for unreachable values the unknown prefix could supply).
    /// Returns the residual stack: `Open` with an empty tail if this stack
    /// was `Open` and got exhausted, otherwise the untouched prefix below
    /// what was popped.
    pub fn pop(&self, types: &[DefType], expected: &[ValueType], at: Span) -> Result<Self> {
        let n = expected.len().min(self.tail.len());
        let actual_top = &self.tail[self.tail.len() - n..];
        let expected_top = &expected[expected.len() - n..];
        for (&actual, &exp) in actual_top.iter().zip(expected_top.iter()) {
            if !match_value_type(types, actual, exp) {
                return Err(type_mismatch(expected, &self.tail, at));
            }
        }
        if expected.len() > self.tail.len() {
            // The request reaches below our known tail.
            if self.poly == PolyTail::Open {
                return Ok(Self::open(Vec::new()));
            }
            return Err(type_mismatch(expected, &self.tail, at));
        }
        let residual_len = self.tail.len() - n;
        Ok(Self {
            poly: self.poly,
            tail: self.tail[..residual_len].to_vec(),
        })
    }

    /// Pushes `outs` above this (already-popped) residual stack. The
    /// combined tail is `Open` iff either operand was `Open`.
    #[must_use]
    pub fn push(mut self, outs: &[ValueType]) -> Self {
        self.tail.extend_from_slice(outs);
        self
    }

    /// Combines this stack's polymorphism with another's (used when an
    /// instruction's own contract is itself polymorphic).
    #[must_use]
    pub fn join_poly(mut self, other: PolyTail) -> Self {
        if other == PolyTail::Open {
            self.poly = PolyTail::Open;
        }
        self
    }
}

fn type_mismatch(expected: &[ValueType], actual: &[ValueType], _at: Span) -> Error {
    Error::new(
        ErrorCategory::Validation,
        crate::prelude::codes::VALIDATION_TYPE_MISMATCH_ERROR,
        crate::prelude::format!(
            "type mismatch: operator requires {} but stack has {}",
            crate::types::fmt_value_types(expected),
            crate::types::fmt_value_types(actual)
        ),
    )
}

/// The full contract of one instruction: what it pops, what it pushes, and
/// whether applying it leaves the result `Open` regardless of the input
/// (stack-polymorphic instructions such as `br`, `return`, `unreachable`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorType {
    /// Types popped off the stack, bottom to top.
    pub ins: Vec<ValueType>,
    /// Types pushed onto the stack, bottom to top.
    pub out: Vec<ValueType>,
    /// `Open` for a stack-polymorphic instruction (`ts1 -->... ts2`);
    /// `Closed` for a classical contract (`ts1 --> ts2`).
    pub polymorphic: PolyTail,
}

impl OperatorType {
    /// A classical, non-polymorphic contract.
    #[must_use]
    pub fn closed(ins: Vec<ValueType>, out: Vec<ValueType>) -> Self {
        Self {
            ins,
            out,
            polymorphic: PolyTail::Closed,
        }
    }

    /// A stack-polymorphic contract: any prefix matching `ins`'s shape is
    /// accepted and the result is always `Open`.
    #[must_use]
    pub fn polymorphic(ins: Vec<ValueType>, out: Vec<ValueType>) -> Self {
        Self {
            ins,
            out,
            polymorphic: PolyTail::Open,
        }
    }

    /// Applies this contract to `stack`: pops `self.ins`, pushes
    /// `self.out`, and forces the result `Open` if this contract is
    /// itself polymorphic.
    pub fn apply(&self, types: &[DefType], stack: &InferredStack, at: Span) -> Result<InferredStack> {
        let residual = stack.pop(types, &self.ins, at)?;
        Ok(residual.push(&self.out).join_poly(self.polymorphic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_types() -> Vec<DefType> {
        Vec::new()
    }

    #[test]
    fn peek_past_open_tail_is_bot() {
        let s = InferredStack::open(vec![ValueType::I32]);
        assert_eq!(s.peek(0), ValueType::I32);
        assert_eq!(s.peek(1), ValueType::Bot);
    }

    #[test]
    fn pop_underflow_on_closed_stack_errors() {
        let s = InferredStack::closed(Vec::new());
        let err = s.pop(&no_types(), &[ValueType::I32], Span::NONE);
        assert!(err.is_err());
    }

    #[test]
    fn pop_past_open_tail_succeeds_and_residual_is_open_empty() {
        let s = InferredStack::open(Vec::new());
        let residual = s.pop(&no_types(), &[ValueType::I32, ValueType::I64], Span::NONE).unwrap();
        assert_eq!(residual.poly, PolyTail::Open);
        assert!(residual.tail.is_empty());
    }

    #[test]
    fn push_then_pop_round_trips() {
        let s = InferredStack::closed(Vec::new()).push(&[ValueType::I32]);
        let residual = s.pop(&no_types(), &[ValueType::I32], Span::NONE).unwrap();
        assert!(residual.tail.is_empty());
        assert_eq!(residual.poly, PolyTail::Closed);
    }

    #[test]
    fn polymorphic_operator_forces_open_output() {
        let op = OperatorType::polymorphic(vec![], vec![]);
        let s = InferredStack::closed(Vec::new());
        let out = op.apply(&no_types(), &s, Span::NONE).unwrap();
        assert_eq!(out.poly, PolyTail::Open);
    }
}
