//! Register definitions for SMIPS (MIPS o32 calling convention names)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 32;

/// Register ($0-$31)
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R0 = 0,   // zero - hardwired to 0
    R1 = 1,   // at   - assembler temporary
    R2 = 2,   // v0   - syscall code / return value
    R3 = 3,   // v1
    R4 = 4,   // a0   - syscall argument
    R5 = 5,   // a1
    R6 = 6,   // a2
    R7 = 7,   // a3
    R8 = 8,   // t0   - temporaries (caller-saved)
    R9 = 9,   // t1
    R10 = 10, // t2
    R11 = 11, // t3
    R12 = 12, // t4
    R13 = 13, // t5
    R14 = 14, // t6
    R15 = 15, // t7
    R16 = 16, // s0   - saved (callee-saved)
    R17 = 17, // s1
    R18 = 18, // s2
    R19 = 19, // s3
    R20 = 20, // s4
    R21 = 21, // s5
    R22 = 22, // s6
    R23 = 23, // s7
    R24 = 24, // t8
    R25 = 25, // t9
    R26 = 26, // k0
    R27 = 27, // k1
    R28 = 28, // gp
    R29 = 29, // sp
    R30 = 30, // fp
    R31 = 31, // ra
}

impl Register {
    pub const ZERO: Self = Self::R0;
    pub const AT: Self = Self::R1;
    pub const V0: Self = Self::R2;
    pub const V1: Self = Self::R3;
    pub const A0: Self = Self::R4;
    pub const A1: Self = Self::R5;
    pub const T0: Self = Self::R8;
    pub const S0: Self = Self::R16;
    pub const GP: Self = Self::R28;
    pub const SP: Self = Self::R29;
    pub const FP: Self = Self::R30;
    pub const RA: Self = Self::R31;

    /// All registers in index order
    pub const ALL: [Self; NUM_REGISTERS] = [
        Self::R0, Self::R1, Self::R2, Self::R3, Self::R4, Self::R5, Self::R6, Self::R7,
        Self::R8, Self::R9, Self::R10, Self::R11, Self::R12, Self::R13, Self::R14, Self::R15,
        Self::R16, Self::R17, Self::R18, Self::R19, Self::R20, Self::R21, Self::R22, Self::R23,
        Self::R24, Self::R25, Self::R26, Self::R27, Self::R28, Self::R29, Self::R30, Self::R31,
    ];

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Build a register from a 5-bit instruction field.
    ///
    /// Only the low five bits are used, so every field value maps to a register.
    #[inline]
    pub const fn from_field(field: u32) -> Self {
        Self::ALL[(field & 0x1F) as usize]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// ABI name without the `$` sigil
    pub fn name(self) -> &'static str {
        match self {
            Self::R0 => "zero",
            Self::R1 => "at",
            Self::R2 => "v0",
            Self::R3 => "v1",
            Self::R4 => "a0",
            Self::R5 => "a1",
            Self::R6 => "a2",
            Self::R7 => "a3",
            Self::R8 => "t0",
            Self::R9 => "t1",
            Self::R10 => "t2",
            Self::R11 => "t3",
            Self::R12 => "t4",
            Self::R13 => "t5",
            Self::R14 => "t6",
            Self::R15 => "t7",
            Self::R16 => "s0",
            Self::R17 => "s1",
            Self::R18 => "s2",
            Self::R19 => "s3",
            Self::R20 => "s4",
            Self::R21 => "s5",
            Self::R22 => "s6",
            Self::R23 => "s7",
            Self::R24 => "t8",
            Self::R25 => "t9",
            Self::R26 => "k0",
            Self::R27 => "k1",
            Self::R28 => "gp",
            Self::R29 => "sp",
            Self::R30 => "fp",
            Self::R31 => "ra",
        }
    }

    /// Look up a register by ABI name (without `$`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|reg| reg.name() == name)
    }
}

/// Registers render numerically, as in `$4`
impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.index())
    }
}
