//! Symbol building, the first semantic pass.
//!
//! Creates one scope per scope-owning node and declares every function,
//! parameter and local variable in it. Scopes are keyed by node id so the
//! type checker can reopen them in the same nesting.

use log::{debug, trace};

use crate::{
    ast::{
        ast::Stmt,
        statements::{FnDeclStmt, Program, VarDeclStmt},
    },
    errors::errors::{Diagnostics, ErrorImpl},
    scope::{
        scope::{Environment, ScopeKind, ScopeStack, SymbolTable},
        symbols::{Function, Symbol, SymbolId, Variable},
    },
    Position,
};

struct SymbolBuilder {
    symbols: SymbolTable,
    scopes: ScopeStack,
    diagnostics: Diagnostics,
}

impl SymbolBuilder {
    fn open_scope(&mut self, id: i32, kind: ScopeKind) {
        let index = self.symbols.add_environment(Environment::new(id, kind));
        self.scopes.open(index);
    }

    fn close_scope(&mut self) {
        self.scopes.close();
    }

    /// Declares `symbol` in the innermost scope. A duplicate name is
    /// reported and the earlier declaration stays in effect.
    fn declare(&mut self, symbol: Symbol, position: &Position) -> Option<SymbolId> {
        let index = self.scopes.current()?;
        let name = symbol.name().to_string();
        let is_function = !symbol.is_variable();

        let id = self.symbols.add_symbol(symbol);
        match self
            .symbols
            .environment_mut(index)
            .declare_variable(name.clone(), id, position.clone())
        {
            Ok(()) => Some(id),
            Err(_) if is_function => {
                self.diagnostics.issue(
                    position.clone(),
                    ErrorImpl::FunctionAlreadyDeclared { function: name },
                );
                None
            }
            Err(error) => {
                self.diagnostics.push(error);
                None
            }
        }
    }

    fn declare_variable(&mut self, var_decl: &VarDeclStmt) {
        trace!("declare variable `{}`", var_decl.identifier);
        self.declare(
            Symbol::Variable(Variable::new(
                var_decl.identifier.clone(),
                var_decl.var_type,
                var_decl.span.start.clone(),
                false,
            )),
            &var_decl.span.start,
        );
    }

    fn build_function(&mut self, fn_decl: &FnDeclStmt, function: Option<SymbolId>) {
        self.open_scope(fn_decl.body.id, ScopeKind::Function);

        let mut parameters = vec![];
        for parameter in fn_decl.parameters.iter() {
            let declared = self.declare(
                Symbol::Variable(Variable::new(
                    parameter.identifier.clone(),
                    parameter.param_type,
                    parameter.span.start.clone(),
                    true,
                )),
                &parameter.span.start,
            );
            parameters.extend(declared);
        }

        if let Some(function) = function {
            if let Some(function) = self.symbols.function_mut(function) {
                function.parameters = parameters;
            }
        }

        for stmt in fn_decl.body.iter() {
            self.build_stmt(stmt);
        }

        self.close_scope();
    }

    fn build_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(var_decl) => self.declare_variable(var_decl),
            Stmt::Block(block) => {
                self.open_scope(block.id, ScopeKind::Local);
                for stmt in block.iter() {
                    self.build_stmt(stmt);
                }
                self.close_scope();
            }
            Stmt::If(if_stmt) => {
                self.build_stmt(&if_stmt.then_body);
                self.build_stmt(&if_stmt.else_body);
            }
            Stmt::While(while_stmt) => self.build_stmt(&while_stmt.body),
            Stmt::DoWhile(do_while_stmt) => self.build_stmt(&do_while_stmt.body),
            Stmt::For(for_stmt) => {
                self.open_scope(for_stmt.id, ScopeKind::Local);
                if let Some(var_decl) = for_stmt.vardecl() {
                    self.declare_variable(var_decl);
                }
                self.build_stmt(&for_stmt.body);
                self.close_scope();
            }
            Stmt::Expression(_)
            | Stmt::Empty(_)
            | Stmt::Break(_)
            | Stmt::Continue(_)
            | Stmt::Return(_) => {}
        }
    }
}

/// Builds the symbol table of `program`.
///
/// Duplicate declarations are reported in the returned diagnostics; the
/// table is complete either way.
pub fn build_symbols(program: &Program) -> (SymbolTable, Diagnostics) {
    debug!("building symbols for {} functions", program.functions.len());

    let mut builder = SymbolBuilder {
        symbols: SymbolTable::new(),
        scopes: ScopeStack::new(),
        diagnostics: Diagnostics::new(),
    };

    builder.open_scope(program.id, ScopeKind::Global);

    // Every function is declared before any body is walked.
    let functions: Vec<Option<SymbolId>> = program
        .functions
        .iter()
        .map(|fn_decl| {
            builder.declare(
                Symbol::Function(Function::new(
                    fn_decl.identifier.clone(),
                    fn_decl.return_type,
                    fn_decl.body.id,
                    fn_decl.span.start.clone(),
                )),
                &fn_decl.span.start,
            )
        })
        .collect();

    for (fn_decl, function) in program.functions.iter().zip(functions) {
        builder.build_function(fn_decl, function);
    }

    builder.close_scope();

    debug!(
        "built {} scopes, {} diagnostics",
        builder.symbols.environment_count(),
        builder.diagnostics.len()
    );
    (builder.symbols, builder.diagnostics)
}
