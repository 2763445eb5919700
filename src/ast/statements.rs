use std::slice::Iter;

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    types::Type,
};

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub var_type: Type,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct EmptyStmt {
    pub span: Span,
}

/// Compound statement.
///
/// `id` keys the block's scope, which the symbol builder creates before
/// type checking.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub id: i32,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Box<Stmt>,
    pub span: Span,
}

impl IfStmt {
    /// A missing `else` becomes an empty statement, so the false branch is
    /// always present.
    pub fn new(condition: Expr, then_body: Stmt, else_body: Option<Stmt>, span: Span) -> Self {
        let else_body = else_body.unwrap_or_else(|| {
            Stmt::Empty(EmptyStmt {
                span: span.clone(),
            })
        });

        IfStmt {
            condition,
            then_body: Box::new(then_body),
            else_body: Box::new(else_body),
            span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub condition: Expr,
    pub span: Span,
}

/// Initializer of a C-style `for`.
#[derive(Debug, Clone)]
pub enum ForInit {
    Declaration(Box<VarDeclStmt>),
    Expression(Expr),
}

/// C-style `for (init; test; step) body`.
///
/// The initializer is a declaration, an arbitrary expression or nothing,
/// never more than one of them. `id` keys the scope holding a declared
/// loop variable.
#[derive(Debug, Clone)]
pub struct ForStmt {
    init: Option<ForInit>,
    pub test: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub id: i32,
    pub span: Span,
}

impl ForStmt {
    pub fn with_declaration(
        declaration: VarDeclStmt,
        test: Option<Expr>,
        step: Option<Expr>,
        body: Stmt,
        id: i32,
        span: Span,
    ) -> Self {
        ForStmt {
            init: Some(ForInit::Declaration(Box::new(declaration))),
            test,
            step,
            body: Box::new(body),
            id,
            span,
        }
    }

    pub fn with_expression(
        init: Expr,
        test: Option<Expr>,
        step: Option<Expr>,
        body: Stmt,
        id: i32,
        span: Span,
    ) -> Self {
        ForStmt {
            init: Some(ForInit::Expression(init)),
            test,
            step,
            body: Box::new(body),
            id,
            span,
        }
    }

    pub fn without_init(
        test: Option<Expr>,
        step: Option<Expr>,
        body: Stmt,
        id: i32,
        span: Span,
    ) -> Self {
        ForStmt {
            init: None,
            test,
            step,
            body: Box::new(body),
            id,
            span,
        }
    }

    pub fn init(&self) -> Option<&ForInit> {
        self.init.as_ref()
    }

    pub fn vardecl(&self) -> Option<&VarDeclStmt> {
        match &self.init {
            Some(ForInit::Declaration(declaration)) => Some(declaration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub identifier: String,
    pub param_type: Type,
    pub span: Span,
}

/// Function definition.
///
/// Parameters and the body's top-level statements share one function
/// scope keyed by `body.id`; the body block does not open a scope of its
/// own.
#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: BlockStmt,
    pub span: Span,
}

/// A translation unit: the function definitions in source order, inside
/// the global scope keyed by `id`.
#[derive(Debug, Clone)]
pub struct Program {
    pub functions: Vec<FnDeclStmt>,
    pub id: i32,
    pub span: Span,
}
