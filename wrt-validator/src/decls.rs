// WRT - wrt-validator
// Module: Declaration Checkers (C8)
// SW-REQ-ID: REQ_VALIDATOR_012
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Checks every module-level declaration: types, functions, tables,
//! memories, globals, element and data segments, the start function,
//! imports, and exports.
//!
//! Each checker here takes the [`Context`] it needs rather than the whole
//! [`crate::ast::Module`], so [`crate::module::validate_module`] controls
//! exactly which phase of context each declaration kind sees — in
//! particular, a global's own initializer is checked against a context
//! whose `globals` contains only the *imported* globals declared before
//! it, never its module-local siblings.

use crate::{
    ast::{
        DataMode, ElemMode, Export, ExportKind, Global, Import, ImportDesc, Module,
    },
    constexpr::check_constexpr,
    context::Context,
    match_types::match_ref_type,
    prelude::{codes, Error, ErrorCategory, Result, Vec},
    seq::check_block,
    span::Span,
    stack::InferredStack,
    types::ValueType,
    wf,
};

#[cfg(feature = "std")]
use std::collections::BTreeSet;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::collections::BTreeSet;

/// Checks every entry in the type section is itself well-formed.
pub fn check_types(ctx: &Context) -> Result<()> {
    for dt in &ctx.types {
        wf::check_def_type(ctx, dt)?;
    }
    Ok(())
}

/// Checks one function declaration: its body, checked with a context
/// extended by its parameters-plus-locals and its declared result types.
///
/// `ctx` must already contain the full module context (all phases): a
/// function body may call any other function, read/write any table,
/// memory or global, and reference any element/data segment regardless
/// of declaration order.
pub fn check_function(ctx: &Context, allow_multi_value: bool, func: &crate::ast::Function) -> Result<()> {
    let sig = ctx
        .type_at(func.type_idx)?
        .as_func()
        .expect("DefType currently has only the Func variant")
        .clone();
    for &local in &func.locals {
        wf::check_value_type(ctx, local)?;
        if !local.is_defaultable() {
            return Err(Error::new(
                ErrorCategory::Validation,
                codes::VALIDATION_NON_DEFAULTABLE_TYPE,
                "non-defaultable local type",
            ));
        }
    }
    let mut locals = sig.ins.clone();
    locals.extend(func.locals.iter().copied());
    let func_ctx = Context {
        locals,
        results: sig.out.clone(),
        labels: Vec::new(),
        ..ctx.clone()
    };
    check_block(
        &func_ctx,
        allow_multi_value,
        &func.body,
        InferredStack::closed(Vec::new()),
        &sig.out,
        func.span,
    )
}

/// Checks a table declaration's type is well-formed.
pub fn check_table(ctx: &Context, tt: &crate::types::TableType) -> Result<()> {
    wf::check_table_type(ctx, tt)
}

/// Checks a memory declaration's type is well-formed.
pub fn check_memory(ctx: &Context, mt: &crate::types::MemoryType) -> Result<()> {
    wf::check_memory_type(ctx, mt)
}

/// Checks one global declaration: its type is well-formed, and its
/// initializer is a constant expression producing that type. `ctx` must
/// contain only the imported globals declared before this one — a
/// global's initializer may never read another module-local global.
pub fn check_global(ctx: &Context, global: &Global, span: Span) -> Result<()> {
    wf::check_global_type(ctx, &global.global_type)?;
    check_constexpr(ctx, &global.init, global.global_type.value_type, span)
}

/// Checks one element segment: its declared reference type is
/// well-formed, every initializer is a constant expression of that type,
/// and (for `Active` segments) the target table's element type accepts
/// it and the offset is a constant `i32` expression.
pub fn check_elem(ctx: &Context, elem: &crate::ast::ElemSegment, span: Span) -> Result<()> {
    wf::check_ref_type(ctx, elem.ref_type)?;
    for init in &elem.init {
        check_constexpr(ctx, init, ValueType::Ref(elem.ref_type), span)?;
    }
    match &elem.mode {
        ElemMode::Passive | ElemMode::Declarative => {},
        ElemMode::Active { table, offset } => {
            let table_ty = ctx.table_at(*table)?;
            if !match_ref_type(&ctx.types, elem.ref_type, table_ty.element) {
                return Err(Error::new(
                    ErrorCategory::Validation,
                    codes::VALIDATION_TYPE_MISMATCH_ERROR,
                    crate::prelude::format!(
                        "type mismatch: element segment type {:?} does not match table element type {:?}",
                        elem.ref_type,
                        table_ty.element
                    ),
                ));
            }
            check_constexpr(ctx, offset, ValueType::I32, span)?;
        },
    }
    Ok(())
}

/// Checks one data segment: `Active` segments name an existing memory and
/// a constant `i32` offset expression. `Passive` segments need no further
/// checking; unlike element segments, there is no `Declarative` data
/// segment mode in this profile's grammar (see [`crate::ast::DataMode`]),
/// so that combination is unrepresentable rather than merely rejected.
pub fn check_data(ctx: &Context, data: &crate::ast::DataSegment, span: Span) -> Result<()> {
    match &data.mode {
        DataMode::Passive => Ok(()),
        DataMode::Active { memory, offset } => {
            ctx.memory_at(*memory)?;
            check_constexpr(ctx, offset, ValueType::I32, span)
        },
    }
}

/// Checks the start function, if present: it must take no parameters and
/// return no results.
pub fn check_start(ctx: &Context, idx: u32) -> Result<()> {
    let sig = ctx.func_signature(idx)?;
    if !sig.ins.is_empty() || !sig.out.is_empty() {
        return Err(Error::new(
            ErrorCategory::Validation,
            codes::VALIDATION_START_FUNCTION_ERROR,
            "start function must take no parameters and return no results",
        ));
    }
    Ok(())
}

/// Checks one import's declared type is well-formed. Population of
/// `Context`'s index spaces from imports is the module driver's job, not
/// this checker's.
pub fn check_import(ctx: &Context, import: &Import) -> Result<()> {
    match &import.desc {
        ImportDesc::Func(type_idx) => {
            ctx.type_at(*type_idx)?;
            Ok(())
        },
        ImportDesc::Table(tt) => wf::check_table_type(ctx, tt),
        ImportDesc::Memory(mt) => wf::check_memory_type(ctx, mt),
        ImportDesc::Global(gt) => wf::check_global_type(ctx, gt),
    }
}

/// Checks one export: its index resolves in the environment named by its
/// kind.
pub fn check_export_index(ctx: &Context, export: &Export) -> Result<()> {
    match export.kind {
        ExportKind::Func => ctx.func_type_idx(export.index).map(|_| ()),
        ExportKind::Table => ctx.table_at(export.index).map(|_| ()),
        ExportKind::Memory => ctx.memory_at(export.index).map(|_| ()),
        ExportKind::Global => ctx.global_at(export.index).map(|_| ()),
    }
}

/// Checks every export name is unique across the module, regardless of
/// kind.
pub fn check_unique_export_names(module: &Module) -> Result<()> {
    let mut seen = BTreeSet::new();
    for export in &module.exports {
        if !seen.insert(export.it.name.clone()) {
            return Err(Error::new(
                ErrorCategory::Validation,
                codes::VALIDATION_DUPLICATE_EXPORT_NAME,
                crate::prelude::format!("duplicate export name {:?}", export.it.name),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{DataSegment, ElemSegment},
        span::Spanned,
        types::RefType,
    };

    #[test]
    fn declarative_data_segment_is_unrepresentable() {
        // `DataMode` has no `Declarative` variant; this match is exhaustive
        // without one, which is the point of this test.
        let data = DataSegment {
            mode: DataMode::Passive,
        };
        let ctx = Context::default();
        check_data(&ctx, &data, Span::NONE).unwrap();
    }

    #[test]
    fn start_function_with_params_is_rejected() {
        let mut ctx = Context::default();
        ctx.types.push(crate::types::DefType::Func(crate::types::FuncType {
            ins: crate::prelude::vec![ValueType::I32],
            out: Vec::new(),
        }));
        ctx.funcs.push(0);
        let err = check_start(&ctx, 0);
        assert!(err.is_err());
    }

    #[test]
    fn passive_elem_segment_needs_no_table() {
        let mut ctx = Context::default();
        ctx.types.push(crate::types::DefType::Func(crate::types::FuncType {
            ins: Vec::new(),
            out: Vec::new(),
        }));
        ctx.funcs.push(0);
        ctx.refs.insert(0);
        let elem = ElemSegment {
            ref_type: RefType::Func,
            init: crate::prelude::vec![crate::prelude::vec![Spanned::new(
                crate::ast::Instruction::RefFunc(0),
                Span::NONE
            )]],
            mode: ElemMode::Passive,
        };
        check_elem(&ctx, &elem, Span::NONE).unwrap();
    }

    #[test]
    fn duplicate_export_names_are_rejected() {
        let mut module = Module::default();
        module.exports.push(Spanned::new(
            Export {
                name: crate::prelude::String::from("main"),
                kind: ExportKind::Func,
                index: 0,
            },
            Span::NONE,
        ));
        module.exports.push(Spanned::new(
            Export {
                name: crate::prelude::String::from("main"),
                kind: ExportKind::Func,
                index: 1,
            },
            Span::NONE,
        ));
        assert!(check_unique_export_names(&module).is_err());
    }
}
