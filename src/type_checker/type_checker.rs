use log::{debug, trace};

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::VarRef,
        statements::{FnDeclStmt, ForInit, Program, VarDeclStmt},
        types::Type,
    },
    config::CompilerConfig,
    errors::errors::{Diagnostics, Error, ErrorImpl},
    scope::{
        scope::{ScopeStack, SymbolTable},
        symbols::SymbolId,
    },
    Position, Span,
};

use super::typed_ast::{
    LvalueKind, TypedExpr, TypedExprKind, TypedFnDeclStmt, TypedForInit, TypedParameter,
    TypedProgram, TypedStmt, TypedVarDeclStmt, TypedVarRef,
};

/// State of the function whose body is being checked.
#[derive(Debug, Clone, Copy)]
pub struct FunctionContext {
    pub return_type: Type,
}

pub struct TypeChecker<'a> {
    symbols: &'a SymbolTable,
    scopes: ScopeStack,
    diagnostics: Diagnostics,
    config: &'a CompilerConfig,
}

impl<'a> TypeChecker<'a> {
    pub fn new(symbols: &'a SymbolTable, config: &'a CompilerConfig) -> Self {
        TypeChecker {
            symbols,
            scopes: ScopeStack::new(),
            diagnostics: Diagnostics::new(),
            config,
        }
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    fn issue(&mut self, position: &Position, error: ErrorImpl) {
        self.diagnostics.issue(position.clone(), error);
    }

    /// Runs `f` with the scope built for node `id` open. The scope is
    /// closed again on every exit path.
    pub fn in_scope<T>(
        &mut self,
        id: i32,
        position: &Position,
        f: impl FnOnce(&mut TypeChecker<'a>) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let index = self
            .symbols
            .environment_index(id)
            .ok_or_else(|| Error::new(ErrorImpl::UnknownScope { id }, position.clone()))?;

        self.scopes.open(index);
        let result = f(self);
        self.scopes.close();
        result
    }

    /// Issues `UnexpectedType` unless `expr` has type `ty`. Error-typed
    /// expressions are accepted silently.
    fn expect(&mut self, expr: &TypedExpr, ty: Type) {
        if !expr.ty.is_error() && !expr.ty.equal(&ty) {
            self.issue(
                &expr.span.start,
                ErrorImpl::UnexpectedType {
                    expected: ty.to_string(),
                    received: expr.ty.to_string(),
                },
            );
        }
    }

    fn expect_compatible(&mut self, position: &Position, expected: Type, received: Type) {
        if !expected.is_error() && !received.is_compatible_with(&expected) {
            self.issue(
                position,
                ErrorImpl::Incompatible {
                    expected: expected.to_string(),
                    received: received.to_string(),
                },
            );
        }
    }

    /// Conditions of `if`, `while`, `do-while` and conditional expressions
    /// must be exactly `int`. An Error-typed condition was already reported.
    fn check_test_expr(&mut self, condition: &TypedExpr) {
        if !condition.ty.is_error() && !condition.ty.equal(&Type::Int) {
            self.issue(&condition.span.start, ErrorImpl::BadTestExpr);
        }
    }

    /// The symbol a declaration introduced in the innermost scope.
    fn declared_symbol(&self, name: &str, position: &Position) -> Result<SymbolId, Error> {
        self.scopes
            .current()
            .and_then(|index| self.symbols.environment(index).get_variable(name))
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnresolvedSymbol {
                        symbol: name.to_string(),
                    },
                    position.clone(),
                )
            })
    }
}

fn error_var_ref(var_ref: &VarRef) -> TypedVarRef {
    TypedVarRef {
        name: var_ref.name.clone(),
        symbol: None,
        lv_kind: None,
        ty: Type::Error,
        span: var_ref.span.clone(),
    }
}

pub fn type_check_var_ref(type_checker: &mut TypeChecker, var_ref: &VarRef) -> TypedVarRef {
    let symbols = type_checker.symbols;
    let Some(id) = symbols.lookup(type_checker.scopes.path(), &var_ref.name, &var_ref.span.start)
    else {
        type_checker.issue(
            &var_ref.span.start,
            ErrorImpl::SymbolNotFound {
                symbol: var_ref.name.clone(),
            },
        );
        return error_var_ref(var_ref);
    };

    let Some(variable) = symbols.symbol(id).as_variable() else {
        type_checker.issue(
            &var_ref.span.start,
            ErrorImpl::NotVariable {
                symbol: var_ref.name.clone(),
            },
        );
        return error_var_ref(var_ref);
    };

    trace!("`{}` resolved to {:?}", var_ref.name, id);
    TypedVarRef {
        name: var_ref.name.clone(),
        symbol: Some(id),
        lv_kind: variable.is_local_var().then_some(LvalueKind::SimpleVar),
        ty: variable.var_type,
        span: var_ref.span.clone(),
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> TypedExpr {
    trace!("checking {:?} at {}", ast.get_expr_type(), ast.get_span().start.0);
    match ast {
        Expr::IntConst(int_const) => TypedExpr {
            kind: TypedExprKind::IntConst(int_const.value),
            ty: Type::Int,
            span: int_const.span.clone(),
        },
        Expr::Unary(unary) => {
            let operand = type_check_expr(type_checker, &unary.operand);
            type_checker.expect(&operand, Type::Int);

            TypedExpr {
                kind: TypedExprKind::Unary {
                    operator: unary.operator,
                    operand: Box::new(operand),
                },
                ty: Type::Int,
                span: unary.span.clone(),
            }
        }
        Expr::Binary(binary) => {
            let left = type_check_expr(type_checker, &binary.left);
            type_checker.expect(&left, Type::Int);
            let right = type_check_expr(type_checker, &binary.right);
            type_checker.expect(&right, Type::Int);

            TypedExpr {
                kind: TypedExprKind::Binary {
                    left: Box::new(left),
                    operator: binary.operator,
                    right: Box::new(right),
                },
                ty: Type::Int,
                span: binary.span.clone(),
            }
        }
        Expr::Assignment(assignment) => {
            let assignee = type_check_var_ref(type_checker, &assignment.assignee);
            let value = type_check_expr(type_checker, &assignment.value);
            type_checker.expect_compatible(&assignment.span.start, assignee.ty, value.ty);

            TypedExpr {
                ty: assignee.ty,
                kind: TypedExprKind::Assignment {
                    assignee,
                    value: Box::new(value),
                },
                span: assignment.span.clone(),
            }
        }
        Expr::Lvalue(lvalue) => {
            let var_ref = type_check_var_ref(type_checker, &lvalue.lvalue);
            TypedExpr {
                ty: var_ref.ty,
                kind: TypedExprKind::Lvalue(var_ref),
                span: lvalue.span.clone(),
            }
        }
        Expr::If(if_expr) => {
            let condition = type_check_expr(type_checker, &if_expr.condition);
            type_checker.check_test_expr(&condition);

            let true_branch = type_check_expr(type_checker, &if_expr.true_branch);
            let false_branch = type_check_expr(type_checker, &if_expr.false_branch);

            if type_checker.config.strict_conditional_types {
                type_checker.expect_compatible(
                    &false_branch.span.start,
                    true_branch.ty,
                    false_branch.ty,
                );
            }

            TypedExpr {
                ty: false_branch.ty,
                kind: TypedExprKind::If {
                    condition: Box::new(condition),
                    true_branch: Box::new(true_branch),
                    false_branch: Box::new(false_branch),
                },
                span: if_expr.span.clone(),
            }
        }
    }
}

fn type_check_var_decl(
    type_checker: &mut TypeChecker,
    var_decl: &VarDeclStmt,
) -> Result<TypedVarDeclStmt, Error> {
    let symbol = type_checker.declared_symbol(&var_decl.identifier, &var_decl.span.start)?;

    let assigned_value = match &var_decl.assigned_value {
        Some(value) => {
            let value = type_check_expr(type_checker, value);
            type_checker.expect_compatible(&value.span.start, var_decl.var_type, value.ty);
            Some(value)
        }
        None => None,
    };

    Ok(TypedVarDeclStmt {
        identifier: var_decl.identifier.clone(),
        symbol,
        var_type: var_decl.var_type,
        assigned_value,
        span: var_decl.span.clone(),
    })
}

fn type_check_condition(type_checker: &mut TypeChecker, condition: &Expr) -> TypedExpr {
    let condition = type_check_expr(type_checker, condition);
    type_checker.check_test_expr(&condition);
    condition
}

pub fn type_check_stmt(
    type_checker: &mut TypeChecker,
    ast: &Stmt,
    function: FunctionContext,
) -> Result<TypedStmt, Error> {
    trace!("checking {:?} at {}", ast.get_stmt_type(), ast.get_span().start.0);
    match ast {
        Stmt::VarDecl(var_decl) => Ok(TypedStmt::VarDecl(type_check_var_decl(
            type_checker,
            var_decl,
        )?)),
        Stmt::Expression(expression_stmt) => Ok(TypedStmt::Expression(type_check_expr(
            type_checker,
            &expression_stmt.expression,
        ))),
        Stmt::Empty(_) => Ok(TypedStmt::Empty),
        Stmt::Block(block) => {
            let body = type_checker.in_scope(block.id, &block.span.start, |type_checker| {
                type_check_block(type_checker, &block.body, function)
            })?;
            Ok(TypedStmt::Block(body))
        }
        Stmt::If(if_stmt) => {
            let condition = type_check_condition(type_checker, &if_stmt.condition);
            let then_body = type_check_stmt(type_checker, &if_stmt.then_body, function)?;
            let else_body = type_check_stmt(type_checker, &if_stmt.else_body, function)?;

            Ok(TypedStmt::If {
                condition,
                then_body: Box::new(then_body),
                else_body: Box::new(else_body),
            })
        }
        Stmt::While(while_stmt) => {
            let condition = type_check_condition(type_checker, &while_stmt.condition);
            let body = type_check_stmt(type_checker, &while_stmt.body, function)?;

            Ok(TypedStmt::While {
                condition,
                body: Box::new(body),
            })
        }
        Stmt::DoWhile(do_while_stmt) => {
            let condition = type_check_condition(type_checker, &do_while_stmt.condition);
            let body = type_check_stmt(type_checker, &do_while_stmt.body, function)?;

            Ok(TypedStmt::DoWhile {
                body: Box::new(body),
                condition,
            })
        }
        Stmt::For(for_stmt) => {
            type_checker.in_scope(for_stmt.id, &for_stmt.span.start, |type_checker| {
                let init = match for_stmt.init() {
                    Some(ForInit::Declaration(var_decl)) => Some(TypedForInit::Declaration(
                        Box::new(type_check_var_decl(type_checker, var_decl)?),
                    )),
                    Some(ForInit::Expression(expression)) => Some(TypedForInit::Expression(
                        type_check_expr(type_checker, expression),
                    )),
                    None => None,
                };
                let test = for_stmt
                    .test
                    .as_ref()
                    .map(|test| type_check_expr(type_checker, test));
                let step = for_stmt
                    .step
                    .as_ref()
                    .map(|step| type_check_expr(type_checker, step));
                let body = type_check_stmt(type_checker, &for_stmt.body, function)?;

                Ok(TypedStmt::For {
                    init,
                    test,
                    step,
                    body: Box::new(body),
                })
            })
        }
        Stmt::Break(break_stmt) => Ok(TypedStmt::Break(break_stmt.span.clone())),
        Stmt::Continue(continue_stmt) => Ok(TypedStmt::Continue(continue_stmt.span.clone())),
        Stmt::Return(return_stmt) => {
            let value = type_check_expr(type_checker, &return_stmt.value);
            type_checker.expect_compatible(&value.span.start, function.return_type, value.ty);
            Ok(TypedStmt::Return(value))
        }
    }
}

pub fn type_check_block(
    type_checker: &mut TypeChecker,
    body: &[Stmt],
    function: FunctionContext,
) -> Result<Vec<TypedStmt>, Error> {
    body.iter()
        .map(|stmt| type_check_stmt(type_checker, stmt, function))
        .collect()
}

fn unresolved(name: &str, span: &Span) -> Error {
    Error::new(
        ErrorImpl::UnresolvedSymbol {
            symbol: name.to_string(),
        },
        span.start.clone(),
    )
}

pub fn type_check_function(
    type_checker: &mut TypeChecker,
    fn_decl: &FnDeclStmt,
) -> Result<TypedFnDeclStmt, Error> {
    debug!("type checking function `{}`", fn_decl.identifier);

    let symbol = type_checker.declared_symbol(&fn_decl.identifier, &fn_decl.span.start)?;
    if type_checker.symbols.function(symbol).is_none() {
        return Err(unresolved(&fn_decl.identifier, &fn_decl.span));
    }

    let function = FunctionContext {
        return_type: fn_decl.return_type,
    };

    type_checker.in_scope(fn_decl.body.id, &fn_decl.body.span.start, |type_checker| {
        let parameters = fn_decl
            .parameters
            .iter()
            .map(|parameter| {
                let symbol =
                    type_checker.declared_symbol(&parameter.identifier, &parameter.span.start)?;
                Ok(TypedParameter {
                    identifier: parameter.identifier.clone(),
                    symbol,
                    span: parameter.span.clone(),
                })
            })
            .collect::<Result<Vec<TypedParameter>, Error>>()?;

        let body = type_check_block(type_checker, &fn_decl.body.body, function)?;

        Ok(TypedFnDeclStmt {
            identifier: fn_decl.identifier.clone(),
            symbol,
            parameters,
            return_type: fn_decl.return_type,
            body,
            span: fn_decl.span.clone(),
        })
    })
}

/// Type checks `ast` against the scopes and symbols built for it.
///
/// Semantic problems are collected into the returned diagnostics and never
/// stop the walk. `Err` is reserved for a symbol table that does not match
/// the tree.
pub fn type_check(
    ast: &Program,
    symbols: &SymbolTable,
    config: &CompilerConfig,
) -> Result<(TypedProgram, Diagnostics), Error> {
    let mut type_checker = TypeChecker::new(symbols, config);

    let functions = type_checker.in_scope(ast.id, &ast.span.start, |type_checker| {
        ast.functions
            .iter()
            .map(|fn_decl| type_check_function(type_checker, fn_decl))
            .collect::<Result<Vec<TypedFnDeclStmt>, Error>>()
    })?;

    debug!(
        "type checking finished with {} diagnostics",
        type_checker.diagnostics().len()
    );
    Ok((TypedProgram { functions }, type_checker.into_diagnostics()))
}
