//! Tree construction helper.
//!
//! `AstBuilder` hands out monotonically increasing source positions and
//! node ids, so trees built through it satisfy what the semantic passes
//! expect from a parser: every node is positioned after the nodes built
//! before it, and every scope-owning node has a unique id.

use std::rc::Rc;

use crate::{Position, Span};

use super::{
    ast::{Expr, Stmt},
    expressions::{
        AssignmentExpr, BinaryExpr, BinaryOp, IfExpr, IntConstExpr, LvalueExpr, UnaryExpr,
        UnaryOp, VarRef,
    },
    statements::{
        BlockStmt, BreakStmt, ContinueStmt, DoWhileStmt, EmptyStmt, ExpressionStmt, FnDeclStmt,
        ForStmt, IfStmt, Parameter, Program, ReturnStmt, VarDeclStmt, WhileStmt,
    },
    types::Type,
};

pub struct AstBuilder {
    file: Rc<String>,
    pos: u32,
    next_id: i32,
}

impl AstBuilder {
    pub fn new(file_name: &str) -> Self {
        AstBuilder {
            file: Rc::new(String::from(file_name)),
            pos: 0,
            next_id: 0,
        }
    }

    pub fn span(&mut self) -> Span {
        let start = self.pos;
        self.pos += 1;
        Span {
            start: Position(start, Rc::clone(&self.file)),
            end: Position(start, Rc::clone(&self.file)),
        }
    }

    pub fn id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // EXPRESSIONS

    pub fn int(&mut self, value: i32) -> Expr {
        Expr::IntConst(IntConstExpr {
            value,
            span: self.span(),
        })
    }

    pub fn var_ref(&mut self, name: &str) -> VarRef {
        VarRef {
            name: String::from(name),
            span: self.span(),
        }
    }

    pub fn var(&mut self, name: &str) -> Expr {
        let lvalue = self.var_ref(name);
        Expr::Lvalue(LvalueExpr {
            span: lvalue.span.clone(),
            lvalue,
        })
    }

    pub fn unary(&mut self, operator: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary(UnaryExpr {
            operator,
            operand: Box::new(operand),
            span: self.span(),
        })
    }

    pub fn binary(&mut self, left: Expr, operator: BinaryOp, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            span: self.span(),
        })
    }

    pub fn assign(&mut self, name: &str, value: Expr) -> Expr {
        let assignee = self.var_ref(name);
        Expr::Assignment(AssignmentExpr {
            assignee,
            value: Box::new(value),
            span: self.span(),
        })
    }

    pub fn if_expr(&mut self, condition: Expr, true_branch: Expr, false_branch: Expr) -> Expr {
        Expr::If(IfExpr {
            condition: Box::new(condition),
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
            span: self.span(),
        })
    }

    // STATEMENTS

    pub fn declaration(&mut self, name: &str, var_type: Type, init: Option<Expr>) -> VarDeclStmt {
        VarDeclStmt {
            identifier: String::from(name),
            var_type,
            assigned_value: init,
            span: self.span(),
        }
    }

    pub fn var_decl(&mut self, name: &str, var_type: Type, init: Option<Expr>) -> Stmt {
        Stmt::VarDecl(self.declaration(name, var_type, init))
    }

    pub fn expr_stmt(&mut self, expression: Expr) -> Stmt {
        Stmt::Expression(ExpressionStmt {
            expression,
            span: self.span(),
        })
    }

    pub fn empty(&mut self) -> Stmt {
        Stmt::Empty(EmptyStmt { span: self.span() })
    }

    pub fn block(&mut self, body: Vec<Stmt>) -> Stmt {
        Stmt::Block(BlockStmt {
            body,
            id: self.id(),
            span: self.span(),
        })
    }

    pub fn if_stmt(&mut self, condition: Expr, then_body: Stmt, else_body: Option<Stmt>) -> Stmt {
        let span = self.span();
        Stmt::If(IfStmt::new(condition, then_body, else_body, span))
    }

    pub fn while_stmt(&mut self, condition: Expr, body: Stmt) -> Stmt {
        Stmt::While(WhileStmt {
            condition,
            body: Box::new(body),
            span: self.span(),
        })
    }

    pub fn do_while(&mut self, body: Stmt, condition: Expr) -> Stmt {
        Stmt::DoWhile(DoWhileStmt {
            body: Box::new(body),
            condition,
            span: self.span(),
        })
    }

    pub fn for_decl(
        &mut self,
        declaration: VarDeclStmt,
        test: Option<Expr>,
        step: Option<Expr>,
        body: Stmt,
    ) -> Stmt {
        let id = self.id();
        let span = self.span();
        Stmt::For(ForStmt::with_declaration(
            declaration,
            test,
            step,
            body,
            id,
            span,
        ))
    }

    pub fn for_expr(
        &mut self,
        init: Expr,
        test: Option<Expr>,
        step: Option<Expr>,
        body: Stmt,
    ) -> Stmt {
        let id = self.id();
        let span = self.span();
        Stmt::For(ForStmt::with_expression(init, test, step, body, id, span))
    }

    pub fn for_loop(&mut self, test: Option<Expr>, step: Option<Expr>, body: Stmt) -> Stmt {
        let id = self.id();
        let span = self.span();
        Stmt::For(ForStmt::without_init(test, step, body, id, span))
    }

    pub fn break_stmt(&mut self) -> Stmt {
        Stmt::Break(BreakStmt { span: self.span() })
    }

    pub fn continue_stmt(&mut self) -> Stmt {
        Stmt::Continue(ContinueStmt { span: self.span() })
    }

    pub fn return_stmt(&mut self, value: Expr) -> Stmt {
        Stmt::Return(ReturnStmt {
            value,
            span: self.span(),
        })
    }

    // DECLARATIONS

    pub fn param(&mut self, name: &str, param_type: Type) -> Parameter {
        Parameter {
            identifier: String::from(name),
            param_type,
            span: self.span(),
        }
    }

    pub fn function(
        &mut self,
        name: &str,
        parameters: Vec<Parameter>,
        return_type: Type,
        body: Vec<Stmt>,
    ) -> FnDeclStmt {
        let body = BlockStmt {
            body,
            id: self.id(),
            span: self.span(),
        };

        FnDeclStmt {
            identifier: String::from(name),
            parameters,
            return_type,
            body,
            span: self.span(),
        }
    }

    pub fn program(&mut self, functions: Vec<FnDeclStmt>) -> Program {
        Program {
            functions,
            id: self.id(),
            span: self.span(),
        }
    }
}
