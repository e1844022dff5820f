// WRT - wrt-validator
// Module: Module Driver (C9)
// SW-REQ-ID: REQ_VALIDATOR_013
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Ties every checker together into whole-module validation.
//!
//! A [`Context`] is built in three strictly additive phases, mirroring the
//! order module items may legally reference each other:
//!
//! 1. **imports-only** — index spaces populated from the import section
//!    alone.
//! 2. **+declarations, no globals** — local function/table/memory
//!    declarations and element/data segment shapes are added, but
//!    module-local globals are not yet visible. This is the context every
//!    constant expression (global initializers, element/data segment
//!    offsets) is checked against: a constant expression may read an
//!    *imported* global, never a module-local one, regardless of
//!    declaration order.
//! 3. **+globals** — module-local globals are added, producing the
//!    context function bodies are checked against (a function body may
//!    read or write any global, mutable or not).

use crate::{
    ast::Module,
    context::Context,
    decls,
    prelude::{codes, Error, ErrorCategory, Result, Vec},
    refs::declared_function_refs,
};

#[cfg(feature = "std")]
use log::{debug, trace};

/// Profile flags for validation rules the declarative type system leaves
/// as explicit module-level configuration rather than hard invariants.
///
/// The default profile matches the stricter, widely deployed WebAssembly
/// core validation rules; `permissive()` relaxes both toggles for
/// embedders that have opted into the multi-value and multi-memory
/// extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    /// Whether more than one memory may be declared/imported.
    pub allow_multiple_memories: bool,
    /// Whether blocks, functions and `select` may carry a result arity
    /// greater than one.
    pub allow_multi_value: bool,
}

impl ValidationConfig {
    /// A profile with both toggles relaxed.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            allow_multiple_memories: true,
            allow_multi_value: true,
        }
    }
}

/// Builds the three context phases described in the module docs.
fn build_contexts(module: &Module) -> (Context, Context) {
    let refs = declared_function_refs(module);

    let mut phase1 = Context {
        types: module.types.clone(),
        refs: refs.clone(),
        ..Context::default()
    };
    for import in &module.imports {
        match &import.it.desc {
            crate::ast::ImportDesc::Func(type_idx) => phase1.funcs.push(*type_idx),
            crate::ast::ImportDesc::Table(tt) => phase1.tables.push(*tt),
            crate::ast::ImportDesc::Memory(mt) => phase1.memories.push(*mt),
            crate::ast::ImportDesc::Global(gt) => phase1.globals.push(*gt),
        }
    }

    let mut const_ctx = phase1.clone();
    for func in &module.functions {
        const_ctx.funcs.push(func.type_idx);
    }
    for table in &module.tables {
        const_ctx.tables.push(table.it);
    }
    for memory in &module.memories {
        const_ctx.memories.push(memory.it);
    }
    for elem in &module.elems {
        const_ctx.elems.push(elem.it.ref_type);
    }
    const_ctx.data_count = module.datas.len();

    let mut full_ctx = const_ctx.clone();
    for global in &module.globals {
        full_ctx.globals.push(global.it.global_type);
    }

    (const_ctx, full_ctx)
}

/// Validates a module under the default [`ValidationConfig`].
pub fn validate_module(module: &Module) -> Result<()> {
    validate_module_with_config(module, &ValidationConfig::default())
}

/// Validates a module under an explicit [`ValidationConfig`].
pub fn validate_module_with_config(module: &Module, config: &ValidationConfig) -> Result<()> {
    #[cfg(feature = "std")]
    debug!(
        "validating module: {} types, {} functions, {} imports",
        module.types.len(),
        module.functions.len(),
        module.imports.len()
    );

    let (const_ctx, full_ctx) = build_contexts(module);

    decls::check_types(&full_ctx)?;

    for import in &module.imports {
        decls::check_import(&full_ctx, &import.it)?;
    }

    for table in &module.tables {
        decls::check_table(&full_ctx, &table.it)?;
    }
    for memory in &module.memories {
        decls::check_memory(&full_ctx, &memory.it)?;
    }
    if !config.allow_multiple_memories && full_ctx.memories.len() > 1 {
        return Err(Error::new(
            ErrorCategory::Validation,
            codes::VALIDATION_MULTIPLE_MEMORIES,
            "at most one memory is allowed",
        ));
    }

    for global in &module.globals {
        decls::check_global(&const_ctx, &global.it, global.at)?;
    }

    for elem in &module.elems {
        decls::check_elem(&const_ctx, &elem.it, elem.at)?;
    }

    for data in &module.datas {
        decls::check_data(&const_ctx, &data.it, data.at)?;
    }

    if let Some(start) = &module.start {
        decls::check_start(&full_ctx, start.it)?;
    }

    for export in &module.exports {
        decls::check_export_index(&full_ctx, &export.it)?;
    }
    decls::check_unique_export_names(module)?;

    for func in &module.functions {
        #[cfg(feature = "std")]
        trace!("checking function body with type index {}", func.type_idx);
        decls::check_function(&full_ctx, config.allow_multi_value, func)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Export, ExportKind, Function, Global},
        span::{Span, Spanned},
        types::{DefType, FuncType, GlobalType, Mutability, ValueType},
    };

    #[test]
    fn empty_module_validates() {
        let module = Module::default();
        validate_module(&module).unwrap();
    }

    #[test]
    fn well_formed_function_validates() {
        let mut module = Module::default();
        module.types.push(DefType::Func(FuncType {
            ins: Vec::new(),
            out: crate::prelude::vec![ValueType::I32],
        }));
        module.functions.push(Function {
            type_idx: 0,
            locals: Vec::new(),
            body: crate::prelude::vec![Spanned::new(crate::ast::Instruction::I32Const(1), Span::NONE)],
            span: Span::NONE,
        });
        validate_module(&module).unwrap();
    }

    #[test]
    fn function_leaving_wrong_type_is_rejected() {
        let mut module = Module::default();
        module.types.push(DefType::Func(FuncType {
            ins: Vec::new(),
            out: crate::prelude::vec![ValueType::I32],
        }));
        module.functions.push(Function {
            type_idx: 0,
            locals: Vec::new(),
            body: crate::prelude::vec![Spanned::new(crate::ast::Instruction::I64Const(1), Span::NONE)],
            span: Span::NONE,
        });
        assert!(validate_module(&module).is_err());
    }

    #[test]
    fn global_initializer_cannot_reference_a_module_local_global() {
        let mut module = Module::default();
        module.globals.push(Spanned::new(
            Global {
                global_type: GlobalType {
                    value_type: ValueType::I32,
                    mutability: Mutability::Immutable,
                },
                init: crate::prelude::vec![Spanned::new(crate::ast::Instruction::I32Const(1), Span::NONE)],
            },
            Span::NONE,
        ));
        module.globals.push(Spanned::new(
            Global {
                global_type: GlobalType {
                    value_type: ValueType::I32,
                    mutability: Mutability::Immutable,
                },
                init: crate::prelude::vec![Spanned::new(crate::ast::Instruction::GlobalGet(0), Span::NONE)],
            },
            Span::NONE,
        ));
        assert!(validate_module(&module).is_err());
    }

    #[test]
    fn second_memory_rejected_by_default_but_allowed_permissively() {
        let mut module = Module::default();
        module.memories.push(Spanned::new(
            crate::types::MemoryType {
                limits: crate::types::Limits { min: 1, max: None },
            },
            Span::NONE,
        ));
        module.memories.push(Spanned::new(
            crate::types::MemoryType {
                limits: crate::types::Limits { min: 1, max: None },
            },
            Span::NONE,
        ));
        assert!(validate_module(&module).is_err());
        assert!(validate_module_with_config(&module, &ValidationConfig::permissive()).is_ok());
    }

    #[test]
    fn call_indirect_through_a_non_funcref_table_is_rejected() {
        use crate::types::{Limits, RefType, TableType};
        let mut module = Module::default();
        module.types.push(DefType::Func(FuncType {
            ins: Vec::new(),
            out: Vec::new(),
        }));
        module.tables.push(Spanned::new(
            TableType {
                limits: Limits { min: 0, max: None },
                element: RefType::Any,
            },
            Span::NONE,
        ));
        module.functions.push(Function {
            type_idx: 0,
            locals: Vec::new(),
            body: crate::prelude::vec![
                Spanned::new(crate::ast::Instruction::I32Const(0), Span::NONE),
                Spanned::new(crate::ast::Instruction::CallIndirect(0, 0), Span::NONE),
            ],
            span: Span::NONE,
        });
        assert!(validate_module(&module).is_err());
    }

    #[test]
    fn duplicate_export_name_across_kinds_is_rejected() {
        let mut module = Module::default();
        module.types.push(DefType::Func(FuncType {
            ins: Vec::new(),
            out: Vec::new(),
        }));
        module.functions.push(Function {
            type_idx: 0,
            locals: Vec::new(),
            body: Vec::new(),
            span: Span::NONE,
        });
        module.memories.push(Spanned::new(
            crate::types::MemoryType {
                limits: crate::types::Limits { min: 1, max: None },
            },
            Span::NONE,
        ));
        module.exports.push(Spanned::new(
            Export {
                name: crate::prelude::String::from("x"),
                kind: ExportKind::Func,
                index: 0,
            },
            Span::NONE,
        ));
        module.exports.push(Spanned::new(
            Export {
                name: crate::prelude::String::from("x"),
                kind: ExportKind::Memory,
                index: 0,
            },
            Span::NONE,
        ));
        assert!(validate_module(&module).is_err());
    }
}
