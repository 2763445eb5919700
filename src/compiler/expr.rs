use crate::{
    ast::expressions::{BinaryOp, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    type_checker::typed_ast::{LvalueKind, TypedExpr, TypedExprKind, TypedVarRef},
};

use super::{
    compiler::{unresolved, Compiler},
    tac::Temp,
};

/// Resolves a variable reference to the temporary of its symbol. Emits
/// nothing.
pub fn gen_var_ref(compiler: &mut Compiler, var_ref: &TypedVarRef) -> Result<Temp, Error> {
    let symbol = var_ref
        .symbol
        .ok_or_else(|| unresolved(&var_ref.name, &var_ref.span))?;

    match var_ref.lv_kind {
        Some(LvalueKind::SimpleVar) => compiler.variable_temp(symbol, &var_ref.name, &var_ref.span),
        None => Err(Error::new(
            ErrorImpl::UnsupportedLvalue {
                symbol: var_ref.name.clone(),
            },
            var_ref.span.start.clone(),
        )),
    }
}

fn gen_unary(compiler: &mut Compiler, operator: UnaryOp, operand: Temp) -> Result<Temp, Error> {
    let helper = &mut compiler.helper;
    match operator {
        UnaryOp::Negate => helper.gen_neg(operand),
        UnaryOp::Not => helper.gen_not(operand),
        UnaryOp::BitNot => helper.gen_bnot(operand),
    }
}

fn gen_binary(
    compiler: &mut Compiler,
    left: Temp,
    operator: BinaryOp,
    right: Temp,
) -> Result<Temp, Error> {
    let helper = &mut compiler.helper;
    match operator {
        BinaryOp::Add => helper.gen_add(left, right),
        BinaryOp::Sub => helper.gen_sub(left, right),
        BinaryOp::Mul => helper.gen_mul(left, right),
        BinaryOp::Div => helper.gen_div(left, right),
        BinaryOp::Mod => helper.gen_mod(left, right),
        BinaryOp::Less => helper.gen_les(left, right),
        BinaryOp::Greater => helper.gen_gtr(left, right),
        BinaryOp::LessEq => helper.gen_leq(left, right),
        BinaryOp::GreaterEq => helper.gen_geq(left, right),
        BinaryOp::And => helper.gen_land(left, right),
        BinaryOp::Or => helper.gen_lor(left, right),
        BinaryOp::Equal => helper.gen_equ(left, right),
        BinaryOp::NotEqual => helper.gen_neq(left, right),
    }
}

/// Lowers `expression` and returns the temporary holding its value.
pub fn gen_expression(compiler: &mut Compiler, expression: &TypedExpr) -> Result<Temp, Error> {
    match &expression.kind {
        TypedExprKind::IntConst(value) => compiler.helper.gen_load_imm4(*value),
        TypedExprKind::Unary { operator, operand } => {
            let operand = gen_expression(compiler, operand)?;
            gen_unary(compiler, *operator, operand)
        }
        TypedExprKind::Binary {
            left,
            operator,
            right,
        } => {
            let left = gen_expression(compiler, left)?;
            let right = gen_expression(compiler, right)?;
            gen_binary(compiler, left, *operator, right)
        }
        TypedExprKind::Assignment { assignee, value } => {
            let target = gen_var_ref(compiler, assignee)?;
            let value = gen_expression(compiler, value)?;
            compiler.helper.gen_assign(target, value)?;
            Ok(target)
        }
        TypedExprKind::Lvalue(var_ref) => gen_var_ref(compiler, var_ref),
        TypedExprKind::If {
            condition,
            true_branch,
            false_branch,
        } => {
            let result = compiler.helper.get_new_temp_i4();
            let false_label = compiler.helper.get_new_label();
            let end_label = compiler.helper.get_new_label();

            let condition = gen_expression(compiler, condition)?;
            compiler.helper.gen_jump_on_zero(false_label, condition)?;

            let value = gen_expression(compiler, true_branch)?;
            compiler.helper.gen_assign(result, value)?;
            compiler.helper.gen_jump(end_label)?;

            compiler.helper.gen_mark_label(false_label)?;
            let value = gen_expression(compiler, false_branch)?;
            compiler.helper.gen_assign(result, value)?;

            compiler.helper.gen_mark_label(end_label)?;
            Ok(result)
        }
    }
}
