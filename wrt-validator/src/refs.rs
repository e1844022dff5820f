// WRT - wrt-validator
// Module: Declared Function Reference Analysis
// SW-REQ-ID: REQ_VALIDATOR_007
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Collects the set of function indices that appear as `ref.func`
//! sub-expressions anywhere in the module's element section.
//!
//! `ref.func x` is only valid when `x` is a member of this set, regardless
//! of which element segment mode it was found in (`Passive`, `Active`, and
//! `Declarative` all contribute identically).

#[cfg(feature = "std")]
use std::collections::BTreeSet as IndexSet;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::collections::BTreeSet as IndexSet;

use crate::{
    ast::{ElemMode, Instruction, Module},
    span::Spanned,
};

fn collect_from_expr(expr: &[Spanned<Instruction>], out: &mut IndexSet<u32>) {
    for ins in expr {
        if let Instruction::RefFunc(idx) = ins.it {
            out.insert(idx);
        }
    }
}

/// Scans every element segment's initializer expressions (and, for active
/// segments, the offset expression — which cannot itself contain
/// `ref.func` under the constant-expression grammar, but is scanned
/// uniformly for robustness) and returns the set of referenced function
/// indices.
#[must_use]
pub fn declared_function_refs(module: &Module) -> IndexSet<u32> {
    let mut out = IndexSet::new();
    for elem in &module.elems {
        for init in &elem.it.init {
            collect_from_expr(init, &mut out);
        }
        if let ElemMode::Active { offset, .. } = &elem.it.mode {
            collect_from_expr(offset, &mut out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::ElemSegment,
        span::Span,
        types::RefType,
    };

    #[test]
    fn collects_across_all_segment_modes() {
        let mut module = Module::default();
        module.elems.push(Spanned::new(
            ElemSegment {
                ref_type: RefType::Func,
                init: vec![vec![Spanned::new(Instruction::RefFunc(3), Span::NONE)]],
                mode: ElemMode::Declarative,
            },
            Span::NONE,
        ));
        module.elems.push(Spanned::new(
            ElemSegment {
                ref_type: RefType::Func,
                init: vec![vec![Spanned::new(Instruction::RefFunc(7), Span::NONE)]],
                mode: ElemMode::Passive,
            },
            Span::NONE,
        ));
        let refs = declared_function_refs(&module);
        assert!(refs.contains(&3));
        assert!(refs.contains(&7));
        assert!(!refs.contains(&0));
    }
}
