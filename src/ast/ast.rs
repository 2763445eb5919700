use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, IfExpr, IntConstExpr, LvalueExpr, UnaryExpr,
    },
    statements::{
        BlockStmt, BreakStmt, ContinueStmt, DoWhileStmt, EmptyStmt, ExpressionStmt, ForStmt,
        IfStmt, ReturnStmt, VarDeclStmt, WhileStmt,
    },
};

/// Statement Types
///
/// The kind discriminant of every statement node.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    VarDeclStmt,
    ExpressionStmt,
    EmptyStmt,
    BlockStmt,
    IfStmt,
    WhileStmt,
    DoWhileStmt,
    ForStmt,
    BreakStmt,
    ContinueStmt,
    ReturnStmt,
}

/// Statement node.
///
/// Built once by the front end and never restructured afterwards; the
/// semantic passes only read it.
#[derive(Debug, Clone)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Expression(ExpressionStmt),
    Empty(EmptyStmt),
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    DoWhile(DoWhileStmt),
    For(ForStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::VarDecl(_) => StmtType::VarDeclStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::Empty(_) => StmtType::EmptyStmt,
            Stmt::Block(_) => StmtType::BlockStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::DoWhile(_) => StmtType::DoWhileStmt,
            Stmt::For(_) => StmtType::ForStmt,
            Stmt::Break(_) => StmtType::BreakStmt,
            Stmt::Continue(_) => StmtType::ContinueStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
        }
    }

    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Empty(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::DoWhile(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::Break(stmt) => &stmt.span,
            Stmt::Continue(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    IntConst,
    Unary,
    Binary,
    Assignment,
    Lvalue,
    IfExpr,
}

#[derive(Debug, Clone)]
pub enum Expr {
    IntConst(IntConstExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
    Lvalue(LvalueExpr),
    If(IfExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::IntConst(_) => ExprType::IntConst,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Assignment(_) => ExprType::Assignment,
            Expr::Lvalue(_) => ExprType::Lvalue,
            Expr::If(_) => ExprType::IfExpr,
        }
    }

    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::IntConst(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Lvalue(expr) => &expr.span,
            Expr::If(expr) => &expr.span,
        }
    }
}
