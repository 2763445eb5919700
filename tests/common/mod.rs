//! Helpers shared by the integration tests.

use mind::{
    compiler::tac::TacProgram, config::CompilerConfig, errors::errors::Error, translate_unit,
    ast::statements::Program,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Translates a program that is expected to check cleanly.
pub fn translate(program: &Program) -> TacProgram {
    init_logger();
    match translate_unit(program, &CompilerConfig::default()) {
        Ok(tac) => tac,
        Err(errors) => panic!("translation failed: {:?}", errors),
    }
}

/// Runs the pipeline on a program that is expected to be rejected.
pub fn rejected(program: &Program) -> Vec<Error> {
    init_logger();
    match translate_unit(program, &CompilerConfig::default()) {
        Ok(tac) => panic!("expected diagnostics, got:\n{}", tac),
        Err(errors) => errors,
    }
}

pub fn names(errors: &[Error]) -> Vec<&str> {
    errors.iter().map(|error| error.get_error_name()).collect()
}
