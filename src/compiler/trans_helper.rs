//! Translation helper.
//!
//! Allocates temporaries and labels for one translation unit and collects
//! the emitted instructions function by function. Counters are shared by
//! every function of the unit, so a helper must not be used by more than
//! one translation at a time.

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    scope::symbols::Function,
    Position, MK_BINARY_GEN, MK_UNARY_GEN,
};

use super::tac::{
    EntryLabel, FunctionPiece, Label, Tac, TacBinary, TacProgram, TacUnary, Temp,
};

/// Hands out parameter offsets within the current function's frame.
#[derive(Debug, Default)]
pub struct OffsetCounter {
    parameter: i32,
}

impl OffsetCounter {
    pub fn reset(&mut self) {
        self.parameter = 0;
    }

    /// Returns the next free offset and reserves `size` bytes after it.
    pub fn next(&mut self, size: i32) -> i32 {
        let offset = self.parameter;
        self.parameter += size;
        offset
    }
}

#[derive(Debug, Default)]
pub struct TransHelper {
    temp_count: u32,
    label_count: u32,
    offset_counter: OffsetCounter,
    current: Option<FunctionPiece>,
    pieces: Vec<FunctionPiece>,
}

impl TransHelper {
    pub fn new() -> Self {
        TransHelper::default()
    }

    pub fn get_new_temp_i4(&mut self) -> Temp {
        let temp = Temp(self.temp_count);
        self.temp_count += 1;
        temp
    }

    pub fn get_new_label(&mut self) -> Label {
        let label = Label(self.label_count);
        self.label_count += 1;
        label
    }

    pub fn get_new_entry_label(&mut self, function: &Function) -> EntryLabel {
        EntryLabel(function.name.clone())
    }

    pub fn get_offset_counter(&mut self) -> &mut OffsetCounter {
        &mut self.offset_counter
    }

    /// Opens `function` for emission. Its entry label must already be
    /// attached; one is allocated otherwise.
    pub fn start_func(&mut self, function: &Function, parameters: Vec<Temp>) {
        let entry = match function.get_entry_label() {
            Some(label) => label.clone(),
            None => self.get_new_entry_label(function),
        };
        trace!("start function {}", entry);

        self.current = Some(FunctionPiece {
            entry,
            offset: function.offset,
            parameters,
            body: vec![],
        });
    }

    pub fn end_func(&mut self) -> Result<(), Error> {
        let piece = self
            .current
            .take()
            .ok_or_else(|| Error::new(ErrorImpl::NoOpenFunction, Position::null()))?;
        trace!("end function {} ({} instructions)", piece.entry, piece.body.len());
        self.pieces.push(piece);
        Ok(())
    }

    fn open_piece(&mut self) -> Result<&mut FunctionPiece, Error> {
        self.current
            .as_mut()
            .ok_or_else(|| Error::new(ErrorImpl::NoOpenFunction, Position::null()))
    }

    fn emit(&mut self, instruction: Tac) -> Result<(), Error> {
        let current = self.open_piece()?;
        trace!("emit {}", instruction);
        current.body.push(instruction);
        Ok(())
    }

    /// Emits the instruction `build` makes for a fresh temporary. No
    /// temporary is consumed when no function is open.
    fn emit_to_temp(&mut self, build: impl FnOnce(Temp) -> Tac) -> Result<Temp, Error> {
        self.open_piece()?;
        let dst = self.get_new_temp_i4();
        self.emit(build(dst))?;
        Ok(dst)
    }

    pub fn gen_binary(&mut self, op: TacBinary, left: Temp, right: Temp) -> Result<Temp, Error> {
        self.emit_to_temp(|dst| Tac::Binary {
            op,
            dst,
            left,
            right,
        })
    }

    pub fn gen_unary(&mut self, op: TacUnary, src: Temp) -> Result<Temp, Error> {
        self.emit_to_temp(|dst| Tac::Unary { op, dst, src })
    }

    MK_BINARY_GEN!(gen_add, TacBinary::Add);
    MK_BINARY_GEN!(gen_sub, TacBinary::Sub);
    MK_BINARY_GEN!(gen_mul, TacBinary::Mul);
    MK_BINARY_GEN!(gen_div, TacBinary::Div);
    MK_BINARY_GEN!(gen_mod, TacBinary::Mod);
    MK_BINARY_GEN!(gen_les, TacBinary::Les);
    MK_BINARY_GEN!(gen_gtr, TacBinary::Gtr);
    MK_BINARY_GEN!(gen_leq, TacBinary::Leq);
    MK_BINARY_GEN!(gen_geq, TacBinary::Geq);
    MK_BINARY_GEN!(gen_land, TacBinary::LAnd);
    MK_BINARY_GEN!(gen_lor, TacBinary::LOr);
    MK_BINARY_GEN!(gen_equ, TacBinary::Equ);
    MK_BINARY_GEN!(gen_neq, TacBinary::Neq);

    MK_UNARY_GEN!(gen_neg, TacUnary::Neg);
    MK_UNARY_GEN!(gen_not, TacUnary::LNot);
    MK_UNARY_GEN!(gen_bnot, TacUnary::BNot);

    pub fn gen_load_imm4(&mut self, value: i32) -> Result<Temp, Error> {
        self.emit_to_temp(|dst| Tac::LoadImm4 { dst, value })
    }

    pub fn gen_assign(&mut self, dst: Temp, src: Temp) -> Result<(), Error> {
        self.emit(Tac::Assign { dst, src })
    }

    pub fn gen_jump(&mut self, target: Label) -> Result<(), Error> {
        self.emit(Tac::Jump(target))
    }

    pub fn gen_jump_on_zero(&mut self, target: Label, condition: Temp) -> Result<(), Error> {
        self.emit(Tac::JumpOnZero { target, condition })
    }

    pub fn gen_mark_label(&mut self, label: Label) -> Result<(), Error> {
        self.emit(Tac::Mark(label))
    }

    pub fn gen_return(&mut self, value: Temp) -> Result<(), Error> {
        self.emit(Tac::Return(value))
    }

    /// Consumes the helper, returning every finished function in the order
    /// it was ended.
    pub fn get_piece(self) -> TacProgram {
        TacProgram {
            functions: self.pieces,
        }
    }
}
