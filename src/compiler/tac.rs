//! Three-address code.
//!
//! The flat instruction form produced by translation. Every instruction
//! writes at most one temporary; control flow is expressed with labels
//! and jumps only.

use std::fmt::Display;

/// A compiler-allocated 4-byte integer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Temp(pub u32);

/// A jump target inside a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub u32);

/// The label a function is entered through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryLabel(pub String);

impl Display for Temp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.0)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_L{}", self.0)
    }
}

impl Display for EntryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacUnary {
    Neg,
    LNot,
    BNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacBinary {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Les,
    Gtr,
    Leq,
    Geq,
    LAnd,
    LOr,
    Equ,
    Neq,
}

impl TacUnary {
    fn symbol(&self) -> &'static str {
        match self {
            TacUnary::Neg => "-",
            TacUnary::LNot => "!",
            TacUnary::BNot => "~",
        }
    }
}

impl TacBinary {
    fn symbol(&self) -> &'static str {
        match self {
            TacBinary::Add => "+",
            TacBinary::Sub => "-",
            TacBinary::Mul => "*",
            TacBinary::Div => "/",
            TacBinary::Mod => "%",
            TacBinary::Les => "<",
            TacBinary::Gtr => ">",
            TacBinary::Leq => "<=",
            TacBinary::Geq => ">=",
            TacBinary::LAnd => "&&",
            TacBinary::LOr => "||",
            TacBinary::Equ => "==",
            TacBinary::Neq => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tac {
    LoadImm4 {
        dst: Temp,
        value: i32,
    },
    Unary {
        op: TacUnary,
        dst: Temp,
        src: Temp,
    },
    Binary {
        op: TacBinary,
        dst: Temp,
        left: Temp,
        right: Temp,
    },
    Assign {
        dst: Temp,
        src: Temp,
    },
    Jump(Label),
    JumpOnZero {
        target: Label,
        condition: Temp,
    },
    Mark(Label),
    Return(Temp),
}

impl Display for Tac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tac::LoadImm4 { dst, value } => write!(f, "    {} <- {}", dst, value),
            Tac::Unary { op, dst, src } => write!(f, "    {} <- {}{}", dst, op.symbol(), src),
            Tac::Binary {
                op,
                dst,
                left,
                right,
            } => write!(f, "    {} <- ({} {} {})", dst, left, op.symbol(), right),
            Tac::Assign { dst, src } => write!(f, "    {} <- {}", dst, src),
            Tac::Jump(target) => write!(f, "    JUMP {}", target),
            Tac::JumpOnZero { target, condition } => {
                write!(f, "    IF ({} == 0) JUMP {}", condition, target)
            }
            Tac::Mark(label) => write!(f, "{}:", label),
            Tac::Return(value) => write!(f, "    RETURN {}", value),
        }
    }
}

/// The lowered body of one function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPiece {
    pub entry: EntryLabel,
    /// Base stack offset of the frame.
    pub offset: i32,
    pub parameters: Vec<Temp>,
    pub body: Vec<Tac>,
}

impl Display for FunctionPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|t| t.to_string()).collect();
        writeln!(f, "FUNCTION<{}>({}):", self.entry, parameters.join(", "))?;
        for instruction in self.body.iter() {
            writeln!(f, "{}", instruction)?;
        }
        write!(f, "END")
    }
}

/// Translation output for a whole program, functions in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TacProgram {
    pub functions: Vec<FunctionPiece>,
}

impl TacProgram {
    pub fn function(&self, name: &str) -> Option<&FunctionPiece> {
        self.functions.iter().find(|piece| piece.entry.0 == name)
    }
}

impl Display for TacProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, piece) in self.functions.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", piece)?;
        }
        Ok(())
    }
}
