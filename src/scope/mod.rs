//! Symbols and scopes.
//!
//! The symbol builder fills a `SymbolTable` with one environment per
//! scope-owning node (program, function body, block, `for`). The type
//! checker then walks the same scopes through a `ScopeStack` and resolves
//! names with `SymbolTable::lookup`. Lowering attaches temporaries and
//! entry labels to the symbols.

pub mod scope;
pub mod symbols;
