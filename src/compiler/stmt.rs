use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    type_checker::typed_ast::{TypedExpr, TypedForInit, TypedStmt, TypedVarDeclStmt},
};

use super::{compiler::Compiler, expr::gen_expression, tac::Label};

/// Jump targets of the innermost enclosing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTargets {
    pub break_label: Label,
    pub continue_label: Label,
}

fn gen_var_decl(compiler: &mut Compiler, var_decl: &TypedVarDeclStmt) -> Result<(), Error> {
    let temp = compiler.bind_new_temp(var_decl.symbol, &var_decl.identifier, &var_decl.span)?;
    trace!("`{}` bound to {}", var_decl.identifier, temp);

    if let Some(value) = &var_decl.assigned_value {
        let value = gen_expression(compiler, value)?;
        compiler.helper.gen_assign(temp, value)?;
    }
    Ok(())
}

/// `L1: cond; if zero goto L2; body; goto L1; L2:`
///
/// Shared by `while` and `do-while`.
fn gen_test_first_loop(
    compiler: &mut Compiler,
    condition: &TypedExpr,
    body: &TypedStmt,
) -> Result<(), Error> {
    let top = compiler.helper.get_new_label();
    let exit = compiler.helper.get_new_label();

    compiler.helper.gen_mark_label(top)?;
    let condition = gen_expression(compiler, condition)?;
    compiler.helper.gen_jump_on_zero(exit, condition)?;

    let targets = LoopTargets {
        break_label: exit,
        continue_label: top,
    };
    gen_statement(compiler, body, Some(targets))?;

    compiler.helper.gen_jump(top)?;
    compiler.helper.gen_mark_label(exit)
}

/// Lowers `statement`. `targets` are the jump targets of the innermost
/// enclosing loop, `None` outside of any loop.
pub fn gen_statement(
    compiler: &mut Compiler,
    statement: &TypedStmt,
    targets: Option<LoopTargets>,
) -> Result<(), Error> {
    match statement {
        TypedStmt::VarDecl(var_decl) => gen_var_decl(compiler, var_decl),
        TypedStmt::Expression(expression) => gen_expression(compiler, expression).map(|_| ()),
        TypedStmt::Empty => Ok(()),
        TypedStmt::Block(body) => {
            for statement in body.iter() {
                gen_statement(compiler, statement, targets)?;
            }
            Ok(())
        }
        TypedStmt::If {
            condition,
            then_body,
            else_body,
        } => {
            let false_label = compiler.helper.get_new_label();
            let exit = compiler.helper.get_new_label();

            let condition = gen_expression(compiler, condition)?;
            compiler.helper.gen_jump_on_zero(false_label, condition)?;
            gen_statement(compiler, then_body, targets)?;
            compiler.helper.gen_jump(exit)?;

            compiler.helper.gen_mark_label(false_label)?;
            gen_statement(compiler, else_body, targets)?;
            compiler.helper.gen_mark_label(exit)
        }
        TypedStmt::While { condition, body } => gen_test_first_loop(compiler, condition, body),
        // Lowered exactly like `while`: the condition is tested before the
        // first iteration.
        TypedStmt::DoWhile { body, condition } => gen_test_first_loop(compiler, condition, body),
        TypedStmt::For {
            init,
            test,
            step,
            body,
        } => {
            let top = compiler.helper.get_new_label();
            let exit = compiler.helper.get_new_label();
            let next = compiler.helper.get_new_label();

            match init {
                Some(TypedForInit::Declaration(var_decl)) => gen_var_decl(compiler, var_decl)?,
                Some(TypedForInit::Expression(expression)) => {
                    gen_expression(compiler, expression)?;
                }
                None => {}
            }

            compiler.helper.gen_mark_label(top)?;
            if let Some(test) = test {
                let test = gen_expression(compiler, test)?;
                compiler.helper.gen_jump_on_zero(exit, test)?;
            }

            let targets = LoopTargets {
                break_label: exit,
                continue_label: next,
            };
            gen_statement(compiler, body, Some(targets))?;

            compiler.helper.gen_mark_label(next)?;
            if let Some(step) = step {
                gen_expression(compiler, step)?;
            }
            compiler.helper.gen_jump(top)?;
            compiler.helper.gen_mark_label(exit)
        }
        TypedStmt::Break(span) => {
            let targets = targets
                .ok_or_else(|| Error::new(ErrorImpl::BreakOutsideLoop, span.start.clone()))?;
            compiler.helper.gen_jump(targets.break_label)
        }
        TypedStmt::Continue(span) => {
            let targets = targets
                .ok_or_else(|| Error::new(ErrorImpl::ContinueOutsideLoop, span.start.clone()))?;
            compiler.helper.gen_jump(targets.continue_label)
        }
        TypedStmt::Return(value) => {
            let value = gen_expression(compiler, value)?;
            compiler.helper.gen_return(value)
        }
    }
}
