#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    ast::statements::Program,
    compiler::{compiler::compile, tac::TacProgram},
    config::CompilerConfig,
    errors::errors::Error,
    type_checker::{symbol_builder::build_symbols, type_checker::type_check},
};

pub mod ast;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod macros;
pub mod scope;
pub mod type_checker;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs symbol building, type checking and translation over one
/// translation unit.
///
/// Translation only runs on a tree that checked cleanly; otherwise every
/// issued diagnostic is returned in issue order.
pub fn translate_unit(program: &Program, config: &CompilerConfig) -> Result<TacProgram, Vec<Error>> {
    let (mut symbols, mut diagnostics) = build_symbols(program);

    let (typed_ast, type_diagnostics) =
        type_check(program, &symbols, config).map_err(|error| vec![error])?;
    diagnostics.extend(type_diagnostics);

    if !diagnostics.is_empty() {
        debug!("{} diagnostics issued, skipping translation", diagnostics.len());
        return Err(diagnostics.into_vec());
    }

    compile(&typed_ast, &mut symbols, config).map_err(|error| vec![error])
}
