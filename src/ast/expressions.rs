use crate::Span;

use super::ast::Expr;

// LITERALS

/// Integer Constant Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntConstExpr {
    pub value: i32,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-e`
    Negate,
    /// `!e`
    Not,
    /// `~e`
    BitNot,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    And,
    Or,
    Equal,
    NotEqual,
}

/// Binary Expression
/// Every operator here takes two `int` operands and produces an `int`;
/// comparisons and logical operators yield 0 or 1.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

// LVALUES

/// Variable Reference
/// A plain (non-member, non-indexed) reference to a local variable.
#[derive(Debug, Clone)]
pub struct VarRef {
    pub name: String,
    pub span: Span,
}

/// Wraps a variable reference so it can appear where an expression is
/// expected.
#[derive(Debug, Clone)]
pub struct LvalueExpr {
    pub lvalue: VarRef,
    pub span: Span,
}

/// Assignment Expression
/// `assignee = value`, itself producing the assigned value.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub assignee: VarRef,
    pub value: Box<Expr>,
    pub span: Span,
}

/// Conditional Expression
/// `condition ? true_branch : false_branch`
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub true_branch: Box<Expr>,
    pub false_branch: Box<Expr>,
    pub span: Span,
}
