use rand::Rng;

use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations;
use crate::state::State;

/// A decoded Chip-8 instruction along with its operands.
///
/// `x` and `y` name registers, `kk` is an immediate byte, `n` an immediate
/// nibble and `addr` a 12-bit address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clear,
    /// `00EE`
    Return,
    /// `1nnn`
    Jump { addr: u16 },
    /// `2nnn`
    Call { addr: u16 },
    /// `3xkk`
    SkipEqual { x: u8, kk: u8 },
    /// `4xkk`
    SkipNotEqual { x: u8, kk: u8 },
    /// `5xy0`
    SkipRegistersEqual { x: u8, y: u8 },
    /// `6xkk`
    Load { x: u8, kk: u8 },
    /// `7xkk`
    Add { x: u8, kk: u8 },
    /// `8xy0`
    Move { x: u8, y: u8 },
    /// `8xy1`
    Or { x: u8, y: u8 },
    /// `8xy2`
    And { x: u8, y: u8 },
    /// `8xy3`
    Xor { x: u8, y: u8 },
    /// `8xy4`
    AddRegisters { x: u8, y: u8 },
    /// `8xy5`
    Sub { x: u8, y: u8 },
    /// `8xy6`
    ShiftRight { x: u8 },
    /// `8xy7`
    SubN { x: u8, y: u8 },
    /// `8xyE`
    ShiftLeft { x: u8 },
    /// `9xy0`
    SkipRegistersNotEqual { x: u8, y: u8 },
    /// `Annn`
    LoadIndex { addr: u16 },
    /// `Bnnn`
    JumpOffset { addr: u16 },
    /// `Cxkk`
    Random { x: u8, kk: u8 },
    /// `Dxyn`
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E`
    SkipPressed { x: u8 },
    /// `ExA1`
    SkipNotPressed { x: u8 },
    /// `Fx07`
    LoadDelay { x: u8 },
    /// `Fx0A`
    WaitKey { x: u8 },
    /// `Fx15`
    SetDelay { x: u8 },
    /// `Fx18`
    SetSound { x: u8 },
    /// `Fx1E`
    AddIndex { x: u8 },
    /// `Fx29`
    LoadSprite { x: u8 },
    /// `Fx33`
    StoreBcd { x: u8 },
    /// `Fx55`
    StoreRegisters { x: u8 },
    /// `Fx65`
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a raw opcode, or `None` if it is unknown.
    pub fn decode(op: u16) -> Option<Self> {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.dispatch_key() {
            0x00E0 => Instruction::Clear,
            0x00EE => Instruction::Return,
            0x1000 => Instruction::Jump { addr },
            0x2000 => Instruction::Call { addr },
            0x3000 => Instruction::SkipEqual { x, kk },
            0x4000 => Instruction::SkipNotEqual { x, kk },
            0x5000 => Instruction::SkipRegistersEqual { x, y },
            0x6000 => Instruction::Load { x, kk },
            0x7000 => Instruction::Add { x, kk },
            0x8000 => Instruction::Move { x, y },
            0x8001 => Instruction::Or { x, y },
            0x8002 => Instruction::And { x, y },
            0x8003 => Instruction::Xor { x, y },
            0x8004 => Instruction::AddRegisters { x, y },
            0x8005 => Instruction::Sub { x, y },
            0x8006 => Instruction::ShiftRight { x },
            0x8007 => Instruction::SubN { x, y },
            0x800E => Instruction::ShiftLeft { x },
            0x9000 => Instruction::SkipRegistersNotEqual { x, y },
            0xA000 => Instruction::LoadIndex { addr },
            0xB000 => Instruction::JumpOffset { addr },
            0xC000 => Instruction::Random { x, kk },
            0xD000 => Instruction::Draw { x, y, n },
            0xE09E => Instruction::SkipPressed { x },
            0xE0A1 => Instruction::SkipNotPressed { x },
            0xF007 => Instruction::LoadDelay { x },
            0xF00A => Instruction::WaitKey { x },
            0xF015 => Instruction::SetDelay { x },
            0xF018 => Instruction::SetSound { x },
            0xF01E => Instruction::AddIndex { x },
            0xF029 => Instruction::LoadSprite { x },
            0xF033 => Instruction::StoreBcd { x },
            0xF055 => Instruction::StoreRegisters { x },
            0xF065 => Instruction::LoadRegisters { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Applies the Instruction to `state`.
    ///
    /// `rng` is only drawn from by `Random`.
    pub fn execute<R: Rng>(self, state: &mut State, rng: &mut R) -> Result<()> {
        match self {
            Instruction::Clear => operations::clr(state),
            Instruction::Return => operations::rts(state)?,
            Instruction::Jump { addr } => operations::jump(state, addr),
            Instruction::Call { addr } => operations::call(state, addr)?,
            Instruction::SkipEqual { x, kk } => operations::ske(state, x, kk),
            Instruction::SkipNotEqual { x, kk } => operations::skne(state, x, kk),
            Instruction::SkipRegistersEqual { x, y } => operations::skre(state, x, y),
            Instruction::Load { x, kk } => operations::load(state, x, kk),
            Instruction::Add { x, kk } => operations::add(state, x, kk),
            Instruction::Move { x, y } => operations::mv(state, x, y),
            Instruction::Or { x, y } => operations::or(state, x, y),
            Instruction::And { x, y } => operations::and(state, x, y),
            Instruction::Xor { x, y } => operations::xor(state, x, y),
            Instruction::AddRegisters { x, y } => operations::addr(state, x, y),
            Instruction::Sub { x, y } => operations::sub(state, x, y),
            Instruction::ShiftRight { x } => operations::shr(state, x),
            Instruction::SubN { x, y } => operations::subn(state, x, y),
            Instruction::ShiftLeft { x } => operations::shl(state, x),
            Instruction::SkipRegistersNotEqual { x, y } => operations::skrne(state, x, y),
            Instruction::LoadIndex { addr } => operations::loadi(state, addr),
            Instruction::JumpOffset { addr } => operations::jumpi(state, addr),
            Instruction::Random { x, kk } => operations::rand(state, x, kk, rng.gen()),
            Instruction::Draw { x, y, n } => operations::draw(state, x, y, n)?,
            Instruction::SkipPressed { x } => operations::skpr(state, x),
            Instruction::SkipNotPressed { x } => operations::skup(state, x),
            Instruction::LoadDelay { x } => operations::moved(state, x),
            Instruction::WaitKey { x } => operations::keyd(state, x),
            Instruction::SetDelay { x } => operations::loads(state, x),
            Instruction::SetSound { x } => operations::ld(state, x),
            Instruction::AddIndex { x } => operations::addi(state, x),
            Instruction::LoadSprite { x } => operations::ldspr(state, x),
            Instruction::StoreBcd { x } => operations::bcd(state, x)?,
            Instruction::StoreRegisters { x } => operations::stor(state, x)?,
            Instruction::LoadRegisters { x } => operations::read(state, x)?,
        }
        Ok(())
    }
}
