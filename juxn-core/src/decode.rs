//! Opcode byte -> [`Instruction`] decoding.
//!
//! The decoder is pure: given a `u8` it produces an [`Instruction`] record
//! with no side effects and no dependency on VM state, so it can be tested
//! in isolation from the execution core.

/// The 32 base operators, plus the three "instant" jump pseudo-operators
/// that share opcode space with `BRK`/`LIT` (see [`decode`]).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum Operator {
    Brk,
    Inc,
    Pop,
    Nip,
    Swp,
    Rot,
    Dup,
    Ovr,
    Equ,
    Neq,
    Gth,
    Lth,
    Jmp,
    Jcn,
    Jsr,
    Sth,
    Ldz,
    Stz,
    Ldr,
    Str,
    Lda,
    Sta,
    Dei,
    Deo,
    Add,
    Sub,
    Mul,
    Div,
    And,
    Ora,
    Eor,
    Sft,
    Lit,
    Jci,
    Jmi,
    Jsi,
}

impl Operator {
    /// Base mnemonic, without mode suffixes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operator::Brk => "BRK",
            Operator::Inc => "INC",
            Operator::Pop => "POP",
            Operator::Nip => "NIP",
            Operator::Swp => "SWP",
            Operator::Rot => "ROT",
            Operator::Dup => "DUP",
            Operator::Ovr => "OVR",
            Operator::Equ => "EQU",
            Operator::Neq => "NEQ",
            Operator::Gth => "GTH",
            Operator::Lth => "LTH",
            Operator::Jmp => "JMP",
            Operator::Jcn => "JCN",
            Operator::Jsr => "JSR",
            Operator::Sth => "STH",
            Operator::Ldz => "LDZ",
            Operator::Stz => "STZ",
            Operator::Ldr => "LDR",
            Operator::Str => "STR",
            Operator::Lda => "LDA",
            Operator::Sta => "STA",
            Operator::Dei => "DEI",
            Operator::Deo => "DEO",
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mul => "MUL",
            Operator::Div => "DIV",
            Operator::And => "AND",
            Operator::Ora => "ORA",
            Operator::Eor => "EOR",
            Operator::Sft => "SFT",
            Operator::Lit => "LIT",
            Operator::Jci => "JCI",
            Operator::Jmi => "JMI",
            Operator::Jsi => "JSI",
        }
    }

    #[inline]
    fn from_low5(bits: u8) -> Self {
        match bits & 0x1f {
            op::BRK => Operator::Brk,
            op::INC => Operator::Inc,
            op::POP => Operator::Pop,
            op::NIP => Operator::Nip,
            op::SWP => Operator::Swp,
            op::ROT => Operator::Rot,
            op::DUP => Operator::Dup,
            op::OVR => Operator::Ovr,
            op::EQU => Operator::Equ,
            op::NEQ => Operator::Neq,
            op::GTH => Operator::Gth,
            op::LTH => Operator::Lth,
            op::JMP => Operator::Jmp,
            op::JCN => Operator::Jcn,
            op::JSR => Operator::Jsr,
            op::STH => Operator::Sth,
            op::LDZ => Operator::Ldz,
            op::STZ => Operator::Stz,
            op::LDR => Operator::Ldr,
            op::STR => Operator::Str,
            op::LDA => Operator::Lda,
            op::STA => Operator::Sta,
            op::DEI => Operator::Dei,
            op::DEO => Operator::Deo,
            op::ADD => Operator::Add,
            op::SUB => Operator::Sub,
            op::MUL => Operator::Mul,
            op::DIV => Operator::Div,
            op::AND => Operator::And,
            op::ORA => Operator::Ora,
            op::EOR => Operator::Eor,
            op::SFT => Operator::Sft,
            _ => unreachable!("low 5 bits are masked to 0..=0x1f"),
        }
    }
}

/// A decoded opcode: an [`Operator`] plus its three mode flags.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    /// The operator to execute.
    pub operator: Operator,
    /// Operate on 16-bit shorts instead of bytes.
    pub short: bool,
    /// Operate on the return stack instead of the working stack.
    pub ret: bool,
    /// Read operands without consuming them.
    pub keep: bool,
}

/// Decodes a single opcode byte.
///
/// See module docs and §4.1 of the design notes for the `BRK`/`LIT`/`JCI`/
/// `JMI`/`JSI` opcode-space sharing rule.
#[must_use]
pub fn decode(opcode: u8) -> Instruction {
    let low5 = opcode & 0x1f;
    let short = (opcode & 0x20) != 0;
    let ret = (opcode & 0x40) != 0;
    let keep = (opcode & 0x80) != 0;

    if low5 != op::BRK || opcode == op::BRK {
        return Instruction {
            operator: Operator::from_low5(low5),
            short,
            ret,
            keep,
        };
    }

    match opcode {
        0x20 => Instruction {
            operator: Operator::Jci,
            short: false,
            ret: false,
            keep: false,
        },
        0x40 => Instruction {
            operator: Operator::Jmi,
            short: false,
            ret: false,
            keep: false,
        },
        0x60 => Instruction {
            operator: Operator::Jsi,
            short: false,
            ret: false,
            keep: false,
        },
        _ => Instruction {
            operator: Operator::Lit,
            short,
            ret,
            keep: false,
        },
    }
}

/// Renders the mnemonic for a single opcode byte, with mode suffixes
/// (`2` for short, `k` for keep, `r` for return) in the conventional order.
///
/// This is a diagnostic aid, not a disassembler: it names one opcode byte
/// in isolation and has no notion of operand bytes or instruction
/// boundaries.
#[cfg(feature = "alloc")]
#[must_use]
pub fn mnemonic(opcode: u8) -> alloc::string::String {
    use alloc::string::String;
    let i = decode(opcode);
    let mut s = String::from(i.operator.name());
    if i.short {
        s.push('2');
    }
    if i.keep {
        s.push('k');
    }
    if i.ret {
        s.push('r');
    }
    s
}

/// Byte values of the 32 base operators, plus the three instant-jump
/// pseudo-opcodes and the bare `LIT` opcode, for assembling test ROMs.
#[allow(non_upper_case_globals, missing_docs)]
pub mod op {
    pub const BRK: u8 = 0x00;
    pub const INC: u8 = 0x01;
    pub const POP: u8 = 0x02;
    pub const NIP: u8 = 0x03;
    pub const SWP: u8 = 0x04;
    pub const ROT: u8 = 0x05;
    pub const DUP: u8 = 0x06;
    pub const OVR: u8 = 0x07;
    pub const EQU: u8 = 0x08;
    pub const NEQ: u8 = 0x09;
    pub const GTH: u8 = 0x0a;
    pub const LTH: u8 = 0x0b;
    pub const JMP: u8 = 0x0c;
    pub const JCN: u8 = 0x0d;
    pub const JSR: u8 = 0x0e;
    pub const STH: u8 = 0x0f;
    pub const LDZ: u8 = 0x10;
    pub const STZ: u8 = 0x11;
    pub const LDR: u8 = 0x12;
    pub const STR: u8 = 0x13;
    pub const LDA: u8 = 0x14;
    pub const STA: u8 = 0x15;
    pub const DEI: u8 = 0x16;
    pub const DEO: u8 = 0x17;
    pub const ADD: u8 = 0x18;
    pub const SUB: u8 = 0x19;
    pub const MUL: u8 = 0x1a;
    pub const DIV: u8 = 0x1b;
    pub const AND: u8 = 0x1c;
    pub const ORA: u8 = 0x1d;
    pub const EOR: u8 = 0x1e;
    pub const SFT: u8 = 0x1f;

    pub const JCI: u8 = 0x20;
    pub const JMI: u8 = 0x40;
    pub const JSI: u8 = 0x60;
    pub const LIT: u8 = 0x80;

    /// Mode-flag bits, or'd onto a base opcode.
    pub const SHORT: u8 = 0x20;
    pub const RETURN: u8 = 0x40;
    pub const KEEP: u8 = 0x80;
}
