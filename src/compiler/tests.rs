//! Unit tests for translation.

use crate::{
    ast::{
        ast::Stmt,
        builder::AstBuilder,
        expressions::{BinaryOp, UnaryOp},
        statements::Program,
        types::Type,
    },
    config::CompilerConfig,
    errors::errors::{Error, ErrorImpl},
    scope::{
        scope::SymbolTable,
        symbols::{Function, Symbol, SymbolId, Variable},
    },
    type_checker::{
        symbol_builder::build_symbols,
        type_checker::type_check,
        typed_ast::{
            LvalueKind, TypedExpr, TypedExprKind, TypedFnDeclStmt, TypedParameter, TypedVarRef,
        },
    },
    Position, Span,
};

use super::{
    compiler::{compile, Compiler},
    expr::gen_expression,
    tac::{EntryLabel, Label, Tac, TacBinary, TacProgram, TacUnary, Temp},
    trans_helper::TransHelper,
};

fn lower_with(program: &Program, config: &CompilerConfig) -> (Result<TacProgram, Error>, SymbolTable) {
    let _ = env_logger::builder().is_test(true).try_init();

    let (mut symbols, diagnostics) = build_symbols(program);
    assert!(diagnostics.is_empty());
    let (typed, issued) = type_check(program, &symbols, config).unwrap();
    assert!(issued.is_empty(), "unexpected diagnostics: {:?}", issued.into_vec());

    let result = compile(&typed, &mut symbols, config);
    (result, symbols)
}

fn lower(program: &Program) -> TacProgram {
    lower_with(program, &CompilerConfig::default()).0.unwrap()
}

fn null_span() -> Span {
    Span {
        start: Position::null(),
        end: Position::null(),
    }
}

fn main_with(body: Vec<Stmt>, b: &mut AstBuilder) -> Program {
    let main = b.function("main", vec![], Type::Int, body);
    b.program(vec![main])
}

#[test]
fn test_helper_counters_start_at_zero() {
    let mut helper = TransHelper::new();

    assert_eq!(helper.get_new_temp_i4(), Temp(0));
    assert_eq!(helper.get_new_temp_i4(), Temp(1));
    assert_eq!(helper.get_new_label(), Label(0));
    assert_eq!(helper.get_new_label(), Label(1));
}

#[test]
fn test_helper_rejects_emission_outside_function() {
    let mut helper = TransHelper::new();

    let error = helper.gen_load_imm4(1).unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::NoOpenFunction);
    assert!(helper.gen_add(Temp(0), Temp(0)).is_err());
    assert!(helper.gen_neg(Temp(0)).is_err());
    assert!(helper.end_func().is_err());

    let function = Function::new("main".to_string(), Type::Int, 0, Position::null());
    helper.start_func(&function, vec![]);
    let value = helper.gen_load_imm4(7).unwrap();
    helper.gen_return(value).unwrap();
    helper.end_func().unwrap();

    let program = helper.get_piece();
    assert_eq!(program.functions[0].entry, EntryLabel("main".to_string()));
    assert_eq!(
        program.functions[0].body,
        vec![
            Tac::LoadImm4 {
                dst: Temp(0),
                value: 7
            },
            Tac::Return(Temp(0)),
        ]
    );
}

#[test]
fn test_offset_counter_resets() {
    let mut helper = TransHelper::new();
    let counter = helper.get_offset_counter();

    assert_eq!(counter.next(4), 0);
    assert_eq!(counter.next(4), 4);
    counter.reset();
    assert_eq!(counter.next(4), 0);
}

#[test]
fn test_parameters_get_temps_orders_and_offsets() {
    let mut b = AstBuilder::new("lower.mind");
    let a = b.param("a", Type::Int);
    let c = b.param("c", Type::Int);
    let left = b.var("a");
    let right = b.var("c");
    let sum = b.binary(left, BinaryOp::Add, right);
    let ret = b.return_stmt(sum);
    let add = b.function("add", vec![a, c], Type::Int, vec![ret]);
    let program = b.program(vec![add]);

    let (result, symbols) = lower_with(&program, &CompilerConfig::default());
    let tac = result.unwrap();

    let piece = tac.function("add").unwrap();
    assert_eq!(piece.parameters, vec![Temp(0), Temp(1)]);
    assert_eq!(piece.offset, 8);
    assert_eq!(
        piece.body,
        vec![
            Tac::Binary {
                op: TacBinary::Add,
                dst: Temp(2),
                left: Temp(0),
                right: Temp(1)
            },
            Tac::Return(Temp(2)),
            Tac::LoadImm4 {
                dst: Temp(3),
                value: 0
            },
            Tac::Return(Temp(3)),
        ]
    );

    let global = symbols.environment_index(program.id).unwrap();
    let add = symbols.environment(global).get_variable("add").unwrap();
    let function = symbols.function(add).unwrap();
    assert_eq!(
        function.get_entry_label().map(|label| label.to_string()),
        Some("_add".to_string())
    );
    let orders: Vec<_> = function
        .parameters
        .iter()
        .map(|id| {
            let variable = symbols.variable(*id).unwrap();
            (variable.get_order(), variable.get_offset(), variable.get_temp())
        })
        .collect();
    assert_eq!(
        orders,
        vec![
            (Some(0), Some(0), Some(Temp(0))),
            (Some(1), Some(4), Some(Temp(1))),
        ]
    );
}

#[test]
fn test_implicit_return_can_be_disabled() {
    let mut b = AstBuilder::new("lower.mind");
    let one = b.int(1);
    let ret = b.return_stmt(one);
    let program = main_with(vec![ret], &mut b);
    let config = CompilerConfig {
        implicit_return: false,
        ..CompilerConfig::default()
    };

    let tac = lower_with(&program, &config).0.unwrap();

    assert_eq!(
        tac.functions[0].body,
        vec![
            Tac::LoadImm4 {
                dst: Temp(0),
                value: 1
            },
            Tac::Return(Temp(0)),
        ]
    );
}

#[test]
fn test_unary_operators_map_to_ir() {
    let mut b = AstBuilder::new("lower.mind");
    let one = b.int(1);
    let decl = b.var_decl("x", Type::Int, Some(one));
    let mut body = vec![decl];
    for operator in [UnaryOp::Negate, UnaryOp::Not, UnaryOp::BitNot] {
        let x = b.var("x");
        let value = b.unary(operator, x);
        let assign = b.assign("x", value);
        body.push(b.expr_stmt(assign));
    }
    let program = main_with(body, &mut b);

    let tac = lower(&program);

    let operators: Vec<TacUnary> = tac.functions[0]
        .body
        .iter()
        .filter_map(|instruction| match instruction {
            Tac::Unary { op, src, .. } => {
                assert_eq!(*src, Temp(0));
                Some(*op)
            }
            _ => None,
        })
        .collect();
    assert_eq!(operators, vec![TacUnary::Neg, TacUnary::LNot, TacUnary::BNot]);
}

#[test]
fn test_if_without_else_marks_both_labels() {
    let mut b = AstBuilder::new("lower.mind");
    let one = b.int(1);
    let decl = b.var_decl("x", Type::Int, Some(one));
    let x = b.var("x");
    let two = b.int(2);
    let assign = b.assign("x", two);
    let then_body = b.expr_stmt(assign);
    let if_stmt = b.if_stmt(x, then_body, None);
    let program = main_with(vec![decl, if_stmt], &mut b);

    let tac = lower(&program);

    assert_eq!(
        tac.functions[0].body,
        vec![
            Tac::LoadImm4 {
                dst: Temp(1),
                value: 1
            },
            Tac::Assign {
                dst: Temp(0),
                src: Temp(1)
            },
            Tac::JumpOnZero {
                target: Label(0),
                condition: Temp(0)
            },
            Tac::LoadImm4 {
                dst: Temp(2),
                value: 2
            },
            Tac::Assign {
                dst: Temp(0),
                src: Temp(2)
            },
            Tac::Jump(Label(1)),
            Tac::Mark(Label(0)),
            Tac::Mark(Label(1)),
            Tac::LoadImm4 {
                dst: Temp(3),
                value: 0
            },
            Tac::Return(Temp(3)),
        ]
    );
}

fn counting_loop(do_while: bool) -> Program {
    let mut b = AstBuilder::new("lower.mind");
    let zero = b.int(0);
    let decl = b.var_decl("x", Type::Int, Some(zero));
    let x = b.var("x");
    let one = b.int(1);
    let sum = b.binary(x, BinaryOp::Add, one);
    let assign = b.assign("x", sum);
    let stmt = b.expr_stmt(assign);
    let body = b.block(vec![stmt]);
    let x = b.var("x");
    let three = b.int(3);
    let test = b.binary(x, BinaryOp::Less, three);
    let loop_stmt = if do_while {
        b.do_while(body, test)
    } else {
        b.while_stmt(test, body)
    };
    main_with(vec![decl, loop_stmt], &mut b)
}

#[test]
fn test_do_while_tests_condition_before_first_iteration() {
    let tac = lower(&counting_loop(true));

    let body = &tac.functions[0].body;
    assert_eq!(body[2], Tac::Mark(Label(0)));
    assert_eq!(
        body[5],
        Tac::JumpOnZero {
            target: Label(1),
            condition: Temp(3)
        }
    );
    assert_eq!(*body, lower(&counting_loop(false)).functions[0].body);
}

#[test]
fn test_break_outside_loop_is_internal_error() {
    let mut b = AstBuilder::new("lower.mind");
    let stmt = b.break_stmt();
    let program = main_with(vec![stmt], &mut b);

    let error = lower_with(&program, &CompilerConfig::default()).0.unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::BreakOutsideLoop);
    assert!(!error.is_diagnostic());
}

#[test]
fn test_continue_outside_loop_is_internal_error() {
    let mut b = AstBuilder::new("lower.mind");
    let stmt = b.continue_stmt();
    let block = b.block(vec![stmt]);
    let program = main_with(vec![block], &mut b);

    let error = lower_with(&program, &CompilerConfig::default()).0.unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::ContinueOutsideLoop);
}

#[test]
fn test_unlowerable_references_are_internal_errors() {
    let mut symbols = SymbolTable::new();
    let x = symbols.add_symbol(Symbol::Variable(Variable::new(
        "x".to_string(),
        Type::Int,
        Position::null(),
        false,
    )));
    let config = CompilerConfig::default();
    let mut compiler = Compiler::new(&mut symbols, &config);
    let function = Function::new("main".to_string(), Type::Int, 0, Position::null());
    compiler.helper.start_func(&function, vec![]);

    let reference = |symbol: Option<SymbolId>, lv_kind: Option<LvalueKind>| TypedExpr {
        kind: TypedExprKind::Lvalue(TypedVarRef {
            name: "x".to_string(),
            symbol,
            lv_kind,
            ty: Type::Int,
            span: null_span(),
        }),
        ty: Type::Int,
        span: null_span(),
    };

    let error = gen_expression(&mut compiler, &reference(Some(x), None)).unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnsupportedLvalue {
            symbol: "x".to_string()
        }
    );

    // no temporary bound yet
    let error = gen_expression(&mut compiler, &reference(Some(x), Some(LvalueKind::SimpleVar)))
        .unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnresolvedSymbol {
            symbol: "x".to_string()
        }
    );

    let error = gen_expression(&mut compiler, &reference(None, Some(LvalueKind::SimpleVar)))
        .unwrap_err();
    assert_eq!(error.get_error_name(), "UnresolvedSymbol");

    let temp = compiler.bind_new_temp(x, "x", &null_span()).unwrap();
    let value = gen_expression(&mut compiler, &reference(Some(x), Some(LvalueKind::SimpleVar)));
    assert_eq!(value.unwrap(), temp);
}

#[test]
fn test_unbound_parameter_is_reported_by_its_own_name() {
    let mut symbols = SymbolTable::new();
    let main = symbols.add_symbol(Symbol::Function(Function::new(
        "main".to_string(),
        Type::Int,
        0,
        Position::null(),
    )));
    let config = CompilerConfig::default();
    let mut compiler = Compiler::new(&mut symbols, &config);

    let fn_decl = TypedFnDeclStmt {
        identifier: "main".to_string(),
        symbol: main,
        parameters: vec![TypedParameter {
            identifier: "a".to_string(),
            symbol: SymbolId(7),
            span: null_span(),
        }],
        return_type: Type::Int,
        body: vec![],
        span: null_span(),
    };

    let error = compiler.compile_function(&fn_decl).unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnresolvedSymbol {
            symbol: "a".to_string()
        }
    );
    assert_eq!(compiler.helper.get_new_temp_i4(), Temp(0));
}
