// WRT - wrt-validator
// Module: Property and End-to-End Validation Tests
// SW-REQ-ID: REQ_VALIDATOR_014
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Property tests over small generated modules, plus the end-to-end
//! acceptance/rejection scenarios a reviewer would reach for first.

use proptest::prelude::*;
use wrt_validator::{
    ast::{Function, Global, HeapType, Instruction, Module},
    context::Context,
    module::{validate_module, validate_module_with_config, ValidationConfig},
    span::{Span, Spanned},
    types::{DefType, FuncType, GlobalType, Limits, MemoryType, Mutability, ValueType},
};

fn spanned<T>(it: T) -> Spanned<T> {
    Spanned::new(it, Span::NONE)
}

fn i32_returning_function(body: Vec<Spanned<Instruction>>) -> Module {
    let mut module = Module::default();
    module.types.push(DefType::Func(FuncType {
        ins: Vec::new(),
        out: vec![ValueType::I32],
    }));
    module.functions.push(Function {
        type_idx: 0,
        locals: Vec::new(),
        body,
        span: Span::NONE,
    });
    module
}

// -- End-to-end scenarios -------------------------------------------------

#[test]
fn scenario_valid_function_body_is_accepted() {
    let module = i32_returning_function(vec![spanned(Instruction::I32Const(7))]);
    assert!(validate_module(&module).is_ok());
}

#[test]
fn scenario_type_mismatch_in_body_is_rejected() {
    let module = i32_returning_function(vec![spanned(Instruction::I64Const(7))]);
    assert!(validate_module(&module).is_err());
}

#[test]
fn scenario_stack_underflow_is_rejected() {
    let mut module = Module::default();
    module.types.push(DefType::Func(FuncType {
        ins: Vec::new(),
        out: Vec::new(),
    }));
    module.functions.push(Function {
        type_idx: 0,
        locals: Vec::new(),
        body: vec![spanned(Instruction::Drop)],
        span: Span::NONE,
    });
    assert!(validate_module(&module).is_err());
}

#[test]
fn scenario_ref_func_requires_declaration_via_element_section() {
    let mut module = Module::default();
    module.types.push(DefType::Func(FuncType {
        ins: Vec::new(),
        out: vec![ValueType::Ref(wrt_validator::types::RefType::Func)],
    }));
    module.functions.push(Function {
        type_idx: 0,
        locals: Vec::new(),
        body: vec![spanned(Instruction::RefFunc(0))],
        span: Span::NONE,
    });
    // Never referenced from an element segment: undeclared.
    assert!(validate_module(&module).is_err());
}

#[test]
fn scenario_unreachable_absorbs_any_downstream_type_error() {
    let module = i32_returning_function(vec![
        spanned(Instruction::Unreachable),
        spanned(Instruction::I64Const(1)),
        spanned(Instruction::F64Const(2.0)),
    ]);
    assert!(validate_module(&module).is_ok());
}

#[test]
fn scenario_br_on_null_refines_to_non_null_in_the_fallthrough_path() {
    let mut module = Module::default();
    module.types.push(DefType::Func(FuncType {
        ins: Vec::new(),
        out: Vec::new(),
    }));
    let body = vec![spanned(Instruction::Block(
        wrt_validator::types::BlockType::Empty,
        vec![
            spanned(Instruction::RefNull(HeapType::Def(0))),
            spanned(Instruction::BrOnNull(0)),
            spanned(Instruction::Drop),
        ],
    ))];
    module.functions.push(Function {
        type_idx: 0,
        locals: Vec::new(),
        body,
        span: Span::NONE,
    });
    assert!(validate_module(&module).is_ok());
}

#[test]
fn scenario_let_declares_a_local_initialized_from_the_stack() {
    let mut module = Module::default();
    module.types.push(DefType::Func(FuncType {
        ins: Vec::new(),
        out: vec![ValueType::I32],
    }));
    // `let` pops one i32 off the stack to initialize its freshly declared
    // local, appended after the function's own (empty) locals at index 0.
    let body = vec![
        spanned(Instruction::I32Const(1)),
        spanned(Instruction::Let(
            wrt_validator::types::BlockType::Value(ValueType::I32),
            vec![wrt_validator::ast::LetLocal {
                value_type: ValueType::I32,
            }],
            vec![spanned(Instruction::LocalGet(0))],
        )),
    ];
    module.functions.push(Function {
        type_idx: 0,
        locals: Vec::new(),
        body,
        span: Span::NONE,
    });
    assert!(validate_module(&module).is_ok());
}

#[test]
fn scenario_let_local_is_not_visible_outside_its_block() {
    let mut module = Module::default();
    module.types.push(DefType::Func(FuncType {
        ins: Vec::new(),
        out: Vec::new(),
    }));
    let body = vec![
        spanned(Instruction::I32Const(1)),
        spanned(Instruction::Let(
            wrt_validator::types::BlockType::Empty,
            vec![wrt_validator::ast::LetLocal {
                value_type: ValueType::I32,
            }],
            Vec::new(),
        )),
        // Index 0 was never declared in the enclosing function.
        spanned(Instruction::LocalGet(0)),
        spanned(Instruction::Drop),
    ];
    module.functions.push(Function {
        type_idx: 0,
        locals: Vec::new(),
        body,
        span: Span::NONE,
    });
    assert!(validate_module(&module).is_err());
}

#[test]
fn scenario_global_initializer_cannot_see_itself_or_later_globals() {
    let mut module = Module::default();
    module.globals.push(spanned(Global {
        global_type: GlobalType {
            value_type: ValueType::I32,
            mutability: Mutability::Immutable,
        },
        init: vec![spanned(Instruction::GlobalGet(0))],
    }));
    assert!(validate_module(&module).is_err());
}

#[test]
fn scenario_default_profile_rejects_second_memory_permissive_allows_it() {
    let mut module = Module::default();
    for _ in 0..2 {
        module.memories.push(spanned(MemoryType {
            limits: Limits { min: 1, max: None },
        }));
    }
    assert!(validate_module(&module).is_err());
    assert!(validate_module_with_config(&module, &ValidationConfig::permissive()).is_ok());
}

// -- Properties -------------------------------------------------------------

proptest! {
    /// Validation is a pure function of the module: running it twice never
    /// disagrees with itself.
    #[test]
    fn validation_is_deterministic(n in 0i32..64) {
        let module = i32_returning_function(vec![spanned(Instruction::I32Const(n))]);
        let first = validate_module(&module).is_ok();
        let second = validate_module(&module).is_ok();
        prop_assert_eq!(first, second);
    }

    /// Adding an `unreachable` before any instruction sequence can only
    /// relax acceptance, never tighten it: if the original body validates,
    /// prefixing it with `unreachable` must too (the stack becomes `Open`,
    /// widening every subsequent requirement to `BotType`).
    #[test]
    fn unreachable_prefix_never_breaks_an_accepted_function(n in 0i32..64) {
        let plain = i32_returning_function(vec![spanned(Instruction::I32Const(n))]);
        prop_assume!(validate_module(&plain).is_ok());
        let widened = i32_returning_function(vec![
            spanned(Instruction::Unreachable),
            spanned(Instruction::I32Const(n)),
        ]);
        prop_assert!(validate_module(&widened).is_ok());
    }

    /// `ref.func x` is accepted exactly when `x` is declared via the
    /// element section, regardless of which element segment mode carries
    /// it.
    #[test]
    fn ref_func_acceptance_matches_declaration(declared in any::<bool>()) {
        let mut module = Module::default();
        module.types.push(DefType::Func(FuncType { ins: Vec::new(), out: Vec::new() }));
        module.functions.push(Function {
            type_idx: 0,
            locals: Vec::new(),
            body: Vec::new(),
            span: Span::NONE,
        });
        if declared {
            module.elems.push(spanned(wrt_validator::ast::ElemSegment {
                ref_type: wrt_validator::types::RefType::Func,
                init: vec![vec![spanned(Instruction::RefFunc(0))]],
                mode: wrt_validator::ast::ElemMode::Declarative,
            }));
        }
        module.globals.push(spanned(Global {
            global_type: GlobalType {
                value_type: ValueType::Ref(wrt_validator::types::RefType::Func),
                mutability: Mutability::Immutable,
            },
            init: vec![spanned(Instruction::RefFunc(0))],
        }));
        prop_assert_eq!(validate_module(&module).is_ok(), declared);
    }
}

#[test]
fn context_default_is_the_empty_environment() {
    let ctx = Context::default();
    assert!(ctx.types.is_empty());
    assert!(ctx.funcs.is_empty());
}
