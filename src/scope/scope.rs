use std::collections::HashMap;

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbols::{Function, Symbol, SymbolId, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function,
    Local,
}

#[derive(Debug)]
pub struct Environment {
    pub variable_lookup: HashMap<String, SymbolId>,
    /// Id of the AST node owning this scope.
    pub id: i32,
    pub kind: ScopeKind,
}

impl Environment {
    pub fn new(id: i32, kind: ScopeKind) -> Self {
        Environment {
            variable_lookup: HashMap::new(),
            id,
            kind,
        }
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        symbol: SymbolId,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable_name,
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(variable_name, symbol);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<SymbolId> {
        self.variable_lookup.get(variable_name).copied()
    }
}

/// Owns every symbol and scope of one translation unit.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    environments: Vec<Environment>,
    environment_lookup: HashMap<i32, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: vec![],
            environments: vec![],
            environment_lookup: HashMap::new(),
        }
    }

    pub fn add_environment(&mut self, environment: Environment) -> usize {
        let index = self.environments.len();
        self.environment_lookup.insert(environment.id, index);
        self.environments.push(environment);
        index
    }

    /// Index of the scope owned by node `id`.
    pub fn environment_index(&self, id: i32) -> Option<usize> {
        self.environment_lookup.get(&id).copied()
    }

    pub fn environment(&self, index: usize) -> &Environment {
        &self.environments[index]
    }

    pub fn environment_mut(&mut self, index: usize) -> &mut Environment {
        &mut self.environments[index]
    }

    pub fn environment_count(&self) -> usize {
        self.environments.len()
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.push(symbol);
        SymbolId(self.symbols.len() - 1)
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub fn variable(&self, id: SymbolId) -> Option<&Variable> {
        self.symbols.get(id.0).and_then(Symbol::as_variable)
    }

    pub fn variable_mut(&mut self, id: SymbolId) -> Option<&mut Variable> {
        self.symbols.get_mut(id.0).and_then(Symbol::as_variable_mut)
    }

    pub fn function(&self, id: SymbolId) -> Option<&Function> {
        self.symbols.get(id.0).and_then(Symbol::as_function)
    }

    pub fn function_mut(&mut self, id: SymbolId) -> Option<&mut Function> {
        self.symbols.get_mut(id.0).and_then(Symbol::as_function_mut)
    }

    /// Resolves `name` through the open scopes, innermost first.
    ///
    /// Inside function and block scopes a symbol only becomes visible after
    /// its declaration, so a use positioned before the declaration falls
    /// through to the enclosing scopes. Global symbols are visible
    /// everywhere.
    pub fn lookup(&self, path: &[usize], name: &str, position: &Position) -> Option<SymbolId> {
        for &index in path.iter().rev() {
            let environment = &self.environments[index];
            if let Some(id) = environment.get_variable(name) {
                let declared_before = self.symbol(id).position().0 < position.0;
                if environment.kind == ScopeKind::Global || declared_before {
                    trace!("resolved `{}` in scope {}", name, environment.id);
                    return Some(id);
                }
            }
        }
        None
    }
}

/// The path of currently open scopes, as indices into a `SymbolTable`.
#[derive(Debug, Default)]
pub struct ScopeStack {
    environment_path: Vec<usize>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            environment_path: vec![],
        }
    }

    pub fn open(&mut self, index: usize) {
        self.environment_path.push(index);
    }

    pub fn close(&mut self) {
        self.environment_path.pop();
    }

    pub fn current(&self) -> Option<usize> {
        self.environment_path.last().copied()
    }

    pub fn path(&self) -> &[usize] {
        &self.environment_path
    }

    pub fn depth(&self) -> usize {
        self.environment_path.len()
    }
}
