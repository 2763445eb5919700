/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Statement and expression sum types with their kind discriminants
/// - builder: Tree construction with positions and node ids
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: The type values the semantic passes work with
pub mod ast;
pub mod builder;
pub mod expressions;
pub mod statements;
pub mod types;
