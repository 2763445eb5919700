//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the decorated tree produced by the type checker.
//! It mirrors the untyped AST but every expression carries its type
//! (possibly `Type::Error`) and every variable reference carries the
//! symbol it resolved to.
//!
//! The typed tree is consumed by translation, which never re-checks
//! types.

use crate::{
    ast::{
        expressions::{BinaryOp, UnaryOp},
        types::Type,
    },
    scope::symbols::SymbolId,
    Span,
};

/// How an lvalue is stored. Only plain local variables exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LvalueKind {
    SimpleVar,
}

#[derive(Debug, Clone)]
pub struct TypedVarRef {
    pub name: String,
    /// `None` exactly when resolution failed and `ty` is `Type::Error`.
    pub symbol: Option<SymbolId>,
    pub lv_kind: Option<LvalueKind>,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypedExprKind {
    IntConst(i32),
    Unary {
        operator: UnaryOp,
        operand: Box<TypedExpr>,
    },
    Binary {
        left: Box<TypedExpr>,
        operator: BinaryOp,
        right: Box<TypedExpr>,
    },
    Assignment {
        assignee: TypedVarRef,
        value: Box<TypedExpr>,
    },
    Lvalue(TypedVarRef),
    If {
        condition: Box<TypedExpr>,
        true_branch: Box<TypedExpr>,
        false_branch: Box<TypedExpr>,
    },
}

#[derive(Debug, Clone)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedVarDeclStmt {
    pub identifier: String,
    pub symbol: SymbolId,
    pub var_type: Type,
    pub assigned_value: Option<TypedExpr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypedForInit {
    Declaration(Box<TypedVarDeclStmt>),
    Expression(TypedExpr),
}

#[derive(Debug, Clone)]
pub enum TypedStmt {
    VarDecl(TypedVarDeclStmt),
    Expression(TypedExpr),
    Empty,
    Block(Vec<TypedStmt>),
    If {
        condition: TypedExpr,
        then_body: Box<TypedStmt>,
        else_body: Box<TypedStmt>,
    },
    While {
        condition: TypedExpr,
        body: Box<TypedStmt>,
    },
    DoWhile {
        body: Box<TypedStmt>,
        condition: TypedExpr,
    },
    For {
        init: Option<TypedForInit>,
        test: Option<TypedExpr>,
        step: Option<TypedExpr>,
        body: Box<TypedStmt>,
    },
    Break(Span),
    Continue(Span),
    Return(TypedExpr),
}

#[derive(Debug, Clone)]
pub struct TypedParameter {
    pub identifier: String,
    pub symbol: SymbolId,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedFnDeclStmt {
    pub identifier: String,
    pub symbol: SymbolId,
    /// Parameters in declaration order.
    pub parameters: Vec<TypedParameter>,
    pub return_type: Type,
    pub body: Vec<TypedStmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedProgram {
    pub functions: Vec<TypedFnDeclStmt>,
}
