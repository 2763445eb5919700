//! Main compiler module.
//!
//! This module contains the `Compiler` structure driving translation of a
//! typed tree into three-address code. It owns the translation helper for
//! one translation unit and lowers functions one at a time.

use log::debug;

use crate::{
    config::CompilerConfig,
    errors::errors::{Error, ErrorImpl},
    scope::{scope::SymbolTable, symbols::SymbolId},
    type_checker::typed_ast::{TypedFnDeclStmt, TypedProgram},
    Span,
};

use super::{stmt::gen_statement, tac::TacProgram, tac::Temp, trans_helper::TransHelper};

/// The state of one translation.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the symbol table and configuration
pub struct Compiler<'a> {
    /// Temporary and label allocation plus the emitted functions
    pub helper: TransHelper,
    /// Symbols of the tree being translated. Temporaries and entry labels
    /// are attached here.
    pub symbols: &'a mut SymbolTable,
    pub config: &'a CompilerConfig,
}

impl<'a> Compiler<'a> {
    pub fn new(symbols: &'a mut SymbolTable, config: &'a CompilerConfig) -> Self {
        Compiler {
            helper: TransHelper::new(),
            symbols,
            config,
        }
    }

    /// Returns the temporary attached to variable `id`.
    ///
    /// # Errors
    ///
    /// `UnresolvedSymbol` if `id` is not a variable or has not been given a
    /// temporary yet.
    pub fn variable_temp(&self, id: SymbolId, name: &str, span: &Span) -> Result<Temp, Error> {
        self.symbols
            .variable(id)
            .and_then(|variable| variable.get_temp())
            .ok_or_else(|| unresolved(name, span))
    }

    /// Allocates a fresh temporary and attaches it to variable `id`.
    pub fn bind_new_temp(&mut self, id: SymbolId, name: &str, span: &Span) -> Result<Temp, Error> {
        if self.symbols.variable(id).is_none() {
            return Err(unresolved(name, span));
        }
        let temp = self.helper.get_new_temp_i4();
        if let Some(variable) = self.symbols.variable_mut(id) {
            variable.attach_temp(temp);
        }
        Ok(temp)
    }

    /// Lowers one function.
    ///
    /// Formals get their order, a temporary and a parameter offset before
    /// the body is lowered. When `implicit_return` is set a trailing
    /// `return 0` is emitted.
    pub fn compile_function(&mut self, fn_decl: &TypedFnDeclStmt) -> Result<(), Error> {
        debug!("lowering function `{}`", fn_decl.identifier);

        let function = self
            .symbols
            .function_mut(fn_decl.symbol)
            .ok_or_else(|| unresolved(&fn_decl.identifier, &fn_decl.span))?;
        let entry = self.helper.get_new_entry_label(function);
        function.attach_entry_label(entry);

        let mut parameters = vec![];
        for (order, parameter) in fn_decl.parameters.iter().enumerate() {
            let temp =
                self.bind_new_temp(parameter.symbol, &parameter.identifier, &parameter.span)?;
            if let Some(variable) = self.symbols.variable_mut(parameter.symbol) {
                variable.set_order(order);
            }
            parameters.push(temp);
        }

        let pointer_size = self.config.pointer_size;
        self.helper.get_offset_counter().reset();
        for parameter in fn_decl.parameters.iter() {
            let offset = self.helper.get_offset_counter().next(pointer_size);
            if let Some(variable) = self.symbols.variable_mut(parameter.symbol) {
                variable.set_offset(offset);
            }
        }

        let function = self
            .symbols
            .function_mut(fn_decl.symbol)
            .ok_or_else(|| unresolved(&fn_decl.identifier, &fn_decl.span))?;
        function.offset = parameters.len() as i32 * pointer_size;
        self.helper.start_func(function, parameters);

        for statement in fn_decl.body.iter() {
            gen_statement(self, statement, None)?;
        }

        if self.config.implicit_return {
            let zero = self.helper.gen_load_imm4(0)?;
            self.helper.gen_return(zero)?;
        }

        self.helper.end_func()
    }
}

pub(crate) fn unresolved(name: &str, span: &Span) -> Error {
    Error::new(
        ErrorImpl::UnresolvedSymbol {
            symbol: name.to_string(),
        },
        span.start.clone(),
    )
}

/// Translates a type-checked program into three-address code.
///
/// # Arguments
///
/// * `ast` - The typed program. It must have checked without diagnostics
/// * `symbols` - The symbol table the program was checked against
/// * `config` - Translation settings
///
/// # Errors
///
/// Only internal errors: a reference without a bound temporary, `break`
/// or `continue` outside a loop, or an unsupported lvalue.
pub fn compile(
    ast: &TypedProgram,
    symbols: &mut SymbolTable,
    config: &CompilerConfig,
) -> Result<TacProgram, Error> {
    let mut compiler = Compiler::new(symbols, config);

    for function in ast.functions.iter() {
        compiler.compile_function(function)?;
    }

    let program = compiler.helper.get_piece();
    debug!("lowered {} functions", program.functions.len());
    Ok(program)
}
