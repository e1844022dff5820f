// WRT - wrt-validator
// Module: Instruction Contracts (C5)
// SW-REQ-ID: REQ_VALIDATOR_009
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! One contract per instruction form.
//!
//! [`check_instr`] is handed the [`InferredStack`] as it stands immediately
//! before the instruction, not just the instruction itself — most forms
//! only need it to apply a fixed [`OperatorType`], but a handful of
//! reference-typed forms (`select` without an annotation, `call_ref`,
//! `br_on_null`, `func.bind`, ...) resolve part of their own contract by
//! peeking the operand directly above them, exactly as the declarative
//! rules read an operand's type off the stack before stating the rule that
//! applies to it.
//!
//! Control-flow forms (`block`, `loop`, `if`, `let`) are not expressible as
//! a single [`OperatorType`]: checking them recursively checks a nested
//! instruction sequence, so they call back into [`crate::seq`], which in
//! turn calls back here for every instruction in that sequence.

use crate::{
    ast::{HeapType, Instruction, LetLocal},
    context::Context,
    match_types::{match_ref_type, match_stack_type},
    prelude::{codes, Error, ErrorCategory, Result, Vec},
    seq::check_block,
    span::{Span, Spanned},
    stack::{InferredStack, OperatorType},
    types::{FuncType, Mutability, NumType, Nullability, RefType, ValueType},
    wf,
};

fn control_error(msg: impl Into<crate::prelude::String>) -> Error {
    Error::new(ErrorCategory::Validation, codes::VALIDATION_CONTROL_FLOW_ERROR, msg)
}

fn memory_error(msg: impl Into<crate::prelude::String>) -> Error {
    Error::new(ErrorCategory::Validation, codes::VALIDATION_MEMORY_ACCESS_ERROR, msg)
}

fn type_error(msg: impl Into<crate::prelude::String>) -> Error {
    Error::new(ErrorCategory::Validation, codes::VALIDATION_TYPE_MISMATCH_ERROR, msg)
}

/// Resolves a `blocktype` to the parameter/result types it stands for.
fn block_func_type(ctx: &Context, bt: &crate::types::BlockType) -> Result<FuncType> {
    use crate::types::BlockType;
    match bt {
        BlockType::Empty => Ok(FuncType {
            ins: Vec::new(),
            out: Vec::new(),
        }),
        BlockType::Value(vt) => Ok(FuncType {
            ins: Vec::new(),
            out: crate::prelude::vec![*vt],
        }),
        BlockType::FuncType(idx) => {
            let def = ctx.type_at(*idx)?;
            Ok(def
                .as_func()
                .expect("DefType currently has only the Func variant")
                .clone())
        },
    }
}

/// Checks one instruction against the stack as it stands immediately
/// before it, returning the resulting stack.
pub fn check_instr(
    ctx: &Context,
    allow_multi_value: bool,
    stack: &InferredStack,
    instr: &Spanned<Instruction>,
) -> Result<InferredStack> {
    let at = instr.at;
    match &instr.it {
        Instruction::Unreachable => {
            OperatorType::polymorphic(Vec::new(), Vec::new()).apply(&ctx.types, stack, at)
        },
        Instruction::Nop => Ok(stack.clone()),

        Instruction::Block(bt, body) => check_block_like(ctx, allow_multi_value, stack, bt, body, at, false),
        Instruction::Loop(bt, body) => check_block_like(ctx, allow_multi_value, stack, bt, body, at, true),
        Instruction::If(bt, then_body, else_body) => {
            let ft = block_func_type(ctx, bt)?;
            wf::check_arity(ft.out.len(), allow_multi_value)?;
            let mut ins = ft.ins.clone();
            ins.push(ValueType::I32);
            let residual = stack.pop(&ctx.types, &ins, at)?;
            let label_ctx = ctx.with_label(ft.out.clone());
            let start = InferredStack::closed(ft.ins.clone());
            check_block(&label_ctx, allow_multi_value, then_body, start.clone(), &ft.out, at)?;
            check_block(&label_ctx, allow_multi_value, else_body, start, &ft.out, at)?;
            Ok(residual.push(&ft.out))
        },
        Instruction::Let(bt, locals, body) => {
            let ft = block_func_type(ctx, bt)?;
            wf::check_arity(ft.out.len(), allow_multi_value)?;
            let local_types: Vec<ValueType> = locals.iter().map(|l: &LetLocal| l.value_type).collect();
            for &lt in &local_types {
                wf::check_value_type(ctx, lt)?;
            }
            let mut ins = ft.ins.clone();
            ins.extend(local_types.iter().copied());
            let residual = stack.pop(&ctx.types, &ins, at)?;
            let inner_ctx = ctx.with_label(ft.out.clone()).with_extra_locals(local_types);
            let start = InferredStack::closed(ft.ins.clone());
            check_block(&inner_ctx, allow_multi_value, body, start, &ft.out, at)?;
            Ok(residual.push(&ft.out))
        },

        Instruction::Br(x) => {
            let ts = ctx.label_at(*x)?.to_vec();
            OperatorType::polymorphic(ts, Vec::new()).apply(&ctx.types, stack, at)
        },
        Instruction::BrIf(x) => {
            let ts = ctx.label_at(*x)?.to_vec();
            let mut ins = ts.clone();
            ins.push(ValueType::I32);
            OperatorType::closed(ins, ts).apply(&ctx.types, stack, at)
        },
        Instruction::BrTable(targets, default) => check_br_table(ctx, stack, targets, *default, at),
        Instruction::BrOnNull(x) => check_br_on_null(ctx, stack, *x, at),

        Instruction::Return => {
            let ts = ctx.results.clone();
            OperatorType::polymorphic(ts, Vec::new()).apply(&ctx.types, stack, at)
        },
        Instruction::Call(x) => {
            let sig = wf::resolve_func(ctx, *x)?.clone();
            OperatorType::closed(sig.ins, sig.out).apply(&ctx.types, stack, at)
        },
        Instruction::CallRef => check_call_ref(ctx, stack, at, false),
        Instruction::ReturnCallRef => check_call_ref(ctx, stack, at, true),
        Instruction::CallIndirect(x, y) => {
            let table = ctx.table_at(*y)?;
            if !match_ref_type(&ctx.types, table.element, RefType::Func) {
                return Err(type_error(crate::prelude::format!(
                    "type mismatch: call_indirect table {y} element type {} is not a subtype of funcref",
                    table.element
                )));
            }
            let def = ctx.type_at(*x)?;
            let sig = def
                .as_func()
                .expect("DefType currently has only the Func variant")
                .clone();
            let mut ins = sig.ins;
            ins.push(ValueType::I32);
            OperatorType::closed(ins, sig.out).apply(&ctx.types, stack, at)
        },
        Instruction::FuncBind(x) => check_func_bind(ctx, stack, *x, at),

        Instruction::LocalGet(x) => {
            let t = ctx.local_at(*x)?;
            OperatorType::closed(Vec::new(), crate::prelude::vec![t]).apply(&ctx.types, stack, at)
        },
        Instruction::LocalSet(x) => {
            let t = ctx.local_at(*x)?;
            OperatorType::closed(crate::prelude::vec![t], Vec::new()).apply(&ctx.types, stack, at)
        },
        Instruction::LocalTee(x) => {
            let t = ctx.local_at(*x)?;
            OperatorType::closed(crate::prelude::vec![t], crate::prelude::vec![t]).apply(&ctx.types, stack, at)
        },
        Instruction::GlobalGet(x) => {
            let g = ctx.global_at(*x)?;
            OperatorType::closed(Vec::new(), crate::prelude::vec![g.value_type]).apply(&ctx.types, stack, at)
        },
        Instruction::GlobalSet(x) => {
            let g = ctx.global_at(*x)?;
            if g.mutability != Mutability::Mutable {
                return Err(Error::new(
                    ErrorCategory::Validation,
                    codes::VALIDATION_GLOBAL_IMMUTABLE,
                    "global is immutable",
                ));
            }
            OperatorType::closed(crate::prelude::vec![g.value_type], Vec::new()).apply(&ctx.types, stack, at)
        },

        Instruction::TableGet(x) => {
            let t = ctx.table_at(*x)?.element;
            OperatorType::closed(crate::prelude::vec![ValueType::I32], crate::prelude::vec![ValueType::Ref(t)])
                .apply(&ctx.types, stack, at)
        },
        Instruction::TableSet(x) => {
            let t = ctx.table_at(*x)?.element;
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::Ref(t)],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::TableSize(x) => {
            ctx.table_at(*x)?;
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::I32]).apply(&ctx.types, stack, at)
        },
        Instruction::TableGrow(x) => {
            let t = ctx.table_at(*x)?.element;
            OperatorType::closed(
                crate::prelude::vec![ValueType::Ref(t), ValueType::I32],
                crate::prelude::vec![ValueType::I32],
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::TableFill(x) => {
            let t = ctx.table_at(*x)?.element;
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::Ref(t), ValueType::I32],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::TableCopy(dst, src) => {
            let dst_elem = ctx.table_at(*dst)?.element;
            let src_elem = ctx.table_at(*src)?.element;
            if !match_ref_type(&ctx.types, src_elem, dst_elem) {
                return Err(type_error(crate::prelude::format!(
                    "type mismatch: table.copy source element type {src_elem:?} does not match destination {dst_elem:?}"
                )));
            }
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::I32, ValueType::I32],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::TableInit { table, elem } => {
            let table_elem = ctx.table_at(*table)?.element;
            let elem_ty = ctx.elem_at(*elem)?;
            if !match_ref_type(&ctx.types, elem_ty, table_elem) {
                return Err(type_error(crate::prelude::format!(
                    "type mismatch: table.init element type {elem_ty:?} does not match table {table_elem:?}"
                )));
            }
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::I32, ValueType::I32],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::ElemDrop(x) => {
            ctx.elem_at(*x)?;
            Ok(stack.clone())
        },

        Instruction::Load { ty, arg, pack } => {
            check_memarg(ctx, *ty, arg, pack.map(|(p, _)| p))?;
            OperatorType::closed(crate::prelude::vec![ValueType::I32], crate::prelude::vec![ValueType::Num(*ty)])
                .apply(&ctx.types, stack, at)
        },
        Instruction::Store { ty, arg, pack } => {
            check_memarg(ctx, *ty, arg, *pack)?;
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::Num(*ty)],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::MemorySize => {
            ctx.memory_at(0)?;
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::I32]).apply(&ctx.types, stack, at)
        },
        Instruction::MemoryGrow => {
            ctx.memory_at(0)?;
            OperatorType::closed(crate::prelude::vec![ValueType::I32], crate::prelude::vec![ValueType::I32])
                .apply(&ctx.types, stack, at)
        },
        Instruction::MemoryFill => {
            ctx.memory_at(0)?;
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::I32, ValueType::I32],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::MemoryCopy => {
            ctx.memory_at(0)?;
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::I32, ValueType::I32],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::MemoryInit(x) => {
            ctx.memory_at(0)?;
            ctx.data_at(*x)?;
            OperatorType::closed(
                crate::prelude::vec![ValueType::I32, ValueType::I32, ValueType::I32],
                Vec::new(),
            )
            .apply(&ctx.types, stack, at)
        },
        Instruction::DataDrop(x) => {
            ctx.data_at(*x)?;
            Ok(stack.clone())
        },

        Instruction::RefNull(ht) => {
            let rt = heap_type_to_ref(ctx, *ht)?;
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::Ref(rt)]).apply(&ctx.types, stack, at)
        },
        Instruction::RefIsNull => {
            let top = stack.peek(0);
            let rt = match top {
                ValueType::Ref(r) => r,
                ValueType::Bot => RefType::Any,
                ValueType::Num(_) => {
                    return Err(type_error("type mismatch: ref.is_null requires a reference type"))
                },
            };
            OperatorType::closed(crate::prelude::vec![ValueType::Ref(rt)], crate::prelude::vec![ValueType::I32])
                .apply(&ctx.types, stack, at)
        },
        Instruction::RefAsNonNull => {
            let top = stack.peek(0);
            match top {
                ValueType::Ref(r) => OperatorType::closed(
                    crate::prelude::vec![ValueType::Ref(r)],
                    crate::prelude::vec![ValueType::Ref(r.as_non_null())],
                )
                .apply(&ctx.types, stack, at),
                ValueType::Bot => {
                    OperatorType::polymorphic(Vec::new(), Vec::new()).apply(&ctx.types, stack, at)
                },
                ValueType::Num(_) => {
                    Err(type_error("type mismatch: ref.as_non_null requires a reference type"))
                },
            }
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
            let rt = RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx,
            };
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::Ref(rt)]).apply(&ctx.types, stack, at)
        },

        Instruction::I32Const(_) => {
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::I32]).apply(&ctx.types, stack, at)
        },
        Instruction::I64Const(_) => {
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::I64]).apply(&ctx.types, stack, at)
        },
        Instruction::F32Const(_) => {
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::F32]).apply(&ctx.types, stack, at)
        },
        Instruction::F64Const(_) => {
            OperatorType::closed(Vec::new(), crate::prelude::vec![ValueType::F64]).apply(&ctx.types, stack, at)
        },

        Instruction::Unary(ty, _) => {
            let t = ValueType::Num(*ty);
            OperatorType::closed(crate::prelude::vec![t], crate::prelude::vec![t]).apply(&ctx.types, stack, at)
        },
        Instruction::Binary(ty, _) => {
            let t = ValueType::Num(*ty);
            OperatorType::closed(crate::prelude::vec![t, t], crate::prelude::vec![t]).apply(&ctx.types, stack, at)
        },
        Instruction::Test(ty, _) => {
            let t = ValueType::Num(*ty);
            OperatorType::closed(crate::prelude::vec![t], crate::prelude::vec![ValueType::I32])
                .apply(&ctx.types, stack, at)
        },
        Instruction::Compare(ty, _) => {
            let t = ValueType::Num(*ty);
            OperatorType::closed(crate::prelude::vec![t, t], crate::prelude::vec![ValueType::I32])
                .apply(&ctx.types, stack, at)
        },
        Instruction::Convert(op) => {
            let (from, to) = convert_types(*op)?;
            OperatorType::closed(crate::prelude::vec![from], crate::prelude::vec![to]).apply(&ctx.types, stack, at)
        },

        Instruction::Drop => {
            let t = stack.peek(0);
            OperatorType::closed(crate::prelude::vec![t], Vec::new()).apply(&ctx.types, stack, at)
        },
        Instruction::Select(annotated) => check_select(ctx, stack, *annotated, at),
    }
}

#[allow(clippy::too_many_arguments)]
fn check_block_like(
    ctx: &Context,
    allow_multi_value: bool,
    stack: &InferredStack,
    bt: &crate::types::BlockType,
    body: &[Spanned<Instruction>],
    at: Span,
    is_loop: bool,
) -> Result<InferredStack> {
    let ft = block_func_type(ctx, bt)?;
    wf::check_arity(ft.out.len(), allow_multi_value)?;
    let residual = stack.pop(&ctx.types, &ft.ins, at)?;
    let label_ts = if is_loop { Vec::new() } else { ft.out.clone() };
    let inner_ctx = ctx.with_label(label_ts);
    let start = InferredStack::closed(ft.ins.clone());
    check_block(&inner_ctx, allow_multi_value, body, start, &ft.out, at)?;
    Ok(residual.push(&ft.out))
}

fn heap_type_to_ref(ctx: &Context, ht: HeapType) -> Result<RefType> {
    match ht {
        HeapType::Func => Ok(RefType::Func),
        HeapType::Any => Ok(RefType::Any),
        HeapType::Def(idx) => {
            ctx.type_at(idx)?;
            Ok(RefType::Def {
                nullability: Nullability::Nullable,
                type_idx: idx,
            })
        },
    }
}

/// Resolves a [`ConvertOp`](crate::ast::ConvertOp) to its operand/result
/// type, rejecting `from`/`to` combinations the opcode can't mean (e.g. a
/// `Trunc` whose `from` is an integer, or a `Convert` whose `to` is one) —
/// the AST carries `from`/`to` as free fields rather than baking the
/// finite table into the variant name, so this is the one place that
/// table is enforced.
fn convert_types(op: crate::ast::ConvertOp) -> Result<(ValueType, ValueType)> {
    use crate::ast::ConvertOp;
    let pair = match op {
        ConvertOp::WrapI64 => (ValueType::I64, ValueType::I32),
        ConvertOp::ExtendI32(_) => (ValueType::I32, ValueType::I64),
        ConvertOp::Trunc { from, to, .. } | ConvertOp::TruncSat { from, to, .. } => {
            if !matches!(from, NumType::F32 | NumType::F64) || !matches!(to, NumType::I32 | NumType::I64) {
                return Err(invalid_conversion());
            }
            (ValueType::Num(from), ValueType::Num(to))
        },
        ConvertOp::Convert { from, to, .. } => {
            if !matches!(from, NumType::I32 | NumType::I64) || !matches!(to, NumType::F32 | NumType::F64) {
                return Err(invalid_conversion());
            }
            (ValueType::Num(from), ValueType::Num(to))
        },
        ConvertOp::DemoteF64 => (ValueType::F64, ValueType::F32),
        ConvertOp::PromoteF32 => (ValueType::F32, ValueType::F64),
        ConvertOp::Reinterpret { from } => {
            let to = match from {
                NumType::I32 => ValueType::F32,
                NumType::I64 => ValueType::F64,
                NumType::F32 => ValueType::I32,
                NumType::F64 => ValueType::I64,
            };
            (ValueType::Num(from), to)
        },
    };
    Ok(pair)
}

fn invalid_conversion() -> Error {
    Error::new(
        ErrorCategory::Validation,
        codes::VALIDATION_INVALID_CONVERSION,
        "conversion operand/result type does not match this opcode's finite conversion table",
    )
}

fn check_memarg(
    ctx: &Context,
    ty: NumType,
    arg: &crate::ast::MemArg,
    pack: Option<crate::ast::PackedSize>,
) -> Result<()> {
    ctx.memory_at(arg.memory)?;
    if matches!(pack, Some(crate::ast::PackedSize::Pack32)) && matches!(ty, NumType::I32) {
        return Err(memory_error("memory size too big"));
    }
    let accessed = pack.map_or_else(|| ty.natural_size(), crate::ast::PackedSize::byte_size);
    if (1u32 << arg.align_exponent) > accessed {
        return Err(memory_error("alignment must not be larger than natural"));
    }
    Ok(())
}

fn check_br_table(
    ctx: &Context,
    stack: &InferredStack,
    targets: &[u32],
    default: u32,
    at: Span,
) -> Result<InferredStack> {
    let default_label = ctx.label_at(default)?;
    let n = default_label.len();
    let mut ts = Vec::with_capacity(n);
    for i in (0..n).rev() {
        ts.push(stack.peek(i + 1));
    }
    for &x in targets.iter().chain(core::iter::once(&default)) {
        let label = ctx.label_at(x)?;
        if !match_stack_type(&ctx.types, &ts, label) {
            return Err(Error::new(
                ErrorCategory::Validation,
                codes::VALIDATION_BRANCH_TARGET_ERROR,
                crate::prelude::format!("type mismatch: br_table target {x} expects {label:?} but found {ts:?}"),
            ));
        }
    }
    let mut ins = ts;
    ins.push(ValueType::I32);
    OperatorType::polymorphic(ins, Vec::new()).apply(&ctx.types, stack, at)
}

fn check_br_on_null(ctx: &Context, stack: &InferredStack, x: u32, at: Span) -> Result<InferredStack> {
    let label = ctx.label_at(x)?.to_vec();
    match stack.peek(0) {
        ValueType::Ref(RefType::Def { type_idx, .. }) => {
            let nullable = ValueType::Ref(RefType::Def {
                nullability: Nullability::Nullable,
                type_idx,
            });
            let non_null = ValueType::Ref(RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx,
            });
            let mut ins = label.clone();
            ins.push(nullable);
            let mut out = label;
            out.push(non_null);
            OperatorType::closed(ins, out).apply(&ctx.types, stack, at)
        },
        ValueType::Bot => OperatorType::polymorphic(Vec::new(), Vec::new()).apply(&ctx.types, stack, at),
        _ => Err(type_error("type mismatch: br_on_null requires a typed reference")),
    }
}

fn degenerate(ctx: &Context, stack: &InferredStack, at: Span) -> Result<InferredStack> {
    OperatorType::polymorphic(Vec::new(), Vec::new()).apply(&ctx.types, stack, at)
}

fn check_call_ref(ctx: &Context, stack: &InferredStack, at: Span, is_tail_call: bool) -> Result<InferredStack> {
    match stack.peek(0) {
        ValueType::Ref(RefType::Def { type_idx, .. }) => {
            let def = ctx.type_at(type_idx)?;
            let sig = def
                .as_func()
                .expect("DefType currently has only the Func variant")
                .clone();
            if is_tail_call && !match_stack_type(&ctx.types, &sig.out, &ctx.results) {
                return Err(control_error(
                    "type mismatch: return_call_ref callee results do not match the enclosing function",
                ));
            }
            let mut ins = sig.ins;
            ins.push(ValueType::Ref(RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx,
            }));
            if is_tail_call {
                OperatorType::polymorphic(ins, Vec::new()).apply(&ctx.types, stack, at)
            } else {
                OperatorType::closed(ins, sig.out).apply(&ctx.types, stack, at)
            }
        },
        ValueType::Bot => degenerate(ctx, stack, at),
        _ => Err(type_error("type mismatch: call_ref requires a typed function reference")),
    }
}

fn check_func_bind(ctx: &Context, stack: &InferredStack, x: u32, at: Span) -> Result<InferredStack> {
    match stack.peek(0) {
        ValueType::Ref(RefType::Def {
            type_idx: callee_idx, ..
        }) => {
            let callee = ctx
                .type_at(callee_idx)?
                .as_func()
                .expect("DefType currently has only the Func variant")
                .clone();
            let target = ctx
                .type_at(x)?
                .as_func()
                .expect("DefType currently has only the Func variant")
                .clone();
            if callee.out.len() != target.out.len() || callee.ins.len() < target.ins.len() {
                return Err(control_error(
                    "type mismatch: func.bind target is not a suffix-compatible specialization",
                ));
            }
            let split = callee.ins.len() - target.ins.len();
            let (prefix, suffix) = callee.ins.split_at(split);
            if !match_stack_type(&ctx.types, suffix, &target.ins) || !match_stack_type(&ctx.types, &callee.out, &target.out) {
                return Err(control_error(
                    "type mismatch: func.bind target is not a suffix-compatible specialization",
                ));
            }
            let mut ins = prefix.to_vec();
            ins.push(ValueType::Ref(RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx: callee_idx,
            }));
            let out = crate::prelude::vec![ValueType::Ref(RefType::Def {
                nullability: Nullability::NonNullable,
                type_idx: x,
            })];
            OperatorType::closed(ins, out).apply(&ctx.types, stack, at)
        },
        ValueType::Bot => degenerate(ctx, stack, at),
        _ => Err(type_error("type mismatch: func.bind requires a typed function reference")),
    }
}

fn check_select(
    ctx: &Context,
    stack: &InferredStack,
    annotated: Option<ValueType>,
    at: Span,
) -> Result<InferredStack> {
    let t = match annotated {
        Some(t) => t,
        None => match stack.peek(1) {
            ValueType::Ref(_) => {
                return Err(type_error(
                    "type mismatch: select without an explicit type requires numeric operands",
                ))
            },
            t => t,
        },
    };
    OperatorType::closed(crate::prelude::vec![t, t, ValueType::I32], crate::prelude::vec![t]).apply(&ctx.types, stack, at)
}
