use crate::{
    ast::types::Type,
    compiler::tac::{EntryLabel, Temp},
    Position,
};

/// Index of a symbol inside its `SymbolTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub usize);

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub var_type: Type,
    pub position: Position,
    pub is_parameter: bool,
    order: Option<usize>,
    temp: Option<Temp>,
    offset: Option<i32>,
}

impl Variable {
    pub fn new(name: String, var_type: Type, position: Position, is_parameter: bool) -> Self {
        Variable {
            name,
            var_type,
            position,
            is_parameter,
            order: None,
            temp: None,
            offset: None,
        }
    }

    /// Parameters and block locals both live in function-local storage.
    pub fn is_local_var(&self) -> bool {
        true
    }

    pub fn set_order(&mut self, order: usize) {
        self.order = Some(order);
    }

    pub fn get_order(&self) -> Option<usize> {
        self.order
    }

    pub fn attach_temp(&mut self, temp: Temp) {
        self.temp = Some(temp);
    }

    pub fn get_temp(&self) -> Option<Temp> {
        self.temp
    }

    pub fn set_offset(&mut self, offset: i32) {
        self.offset = Some(offset);
    }

    pub fn get_offset(&self) -> Option<i32> {
        self.offset
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<SymbolId>,
    /// Id of the body block, which keys the function scope.
    pub scope_id: i32,
    pub position: Position,
    /// Base stack offset, derived from the parameter count during lowering.
    pub offset: i32,
    entry_label: Option<EntryLabel>,
}

impl Function {
    pub fn new(name: String, return_type: Type, scope_id: i32, position: Position) -> Self {
        Function {
            name,
            return_type,
            parameters: vec![],
            scope_id,
            position,
            offset: 0,
            entry_label: None,
        }
    }

    pub fn attach_entry_label(&mut self, label: EntryLabel) {
        self.entry_label = Some(label);
    }

    pub fn get_entry_label(&self) -> Option<&EntryLabel> {
        self.entry_label.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum Symbol {
    Variable(Variable),
    Function(Function),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Variable(variable) => &variable.name,
            Symbol::Function(function) => &function.name,
        }
    }

    pub fn position(&self) -> &Position {
        match self {
            Symbol::Variable(variable) => &variable.position,
            Symbol::Function(function) => &function.position,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Symbol::Variable(_))
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Symbol::Variable(variable) => Some(variable),
            Symbol::Function(_) => None,
        }
    }

    pub fn as_variable_mut(&mut self) -> Option<&mut Variable> {
        match self {
            Symbol::Variable(variable) => Some(variable),
            Symbol::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Symbol::Function(function) => Some(function),
            Symbol::Variable(_) => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut Function> {
        match self {
            Symbol::Function(function) => Some(function),
            Symbol::Variable(_) => None,
        }
    }
}
