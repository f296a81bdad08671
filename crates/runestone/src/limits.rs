//! Protocol constants and bounds for Runestone encoding/decoding.

use bitcoin::opcodes::{self, Opcode};

/// Opcode that follows `OP_RETURN` in a Runestone output (`0x5d`).
pub const MAGIC_NUMBER: Opcode = opcodes::all::OP_PUSHNUM_13;

/// Maximum number of decimal places a rune may declare.
pub const MAX_DIVISIBILITY: u8 = 38;

/// Mask of the spacer bits that can sit between the letters of a rune name.
pub const MAX_SPACERS: u32 = 0b00000111_11111111_11111111_11111111;

/// Largest single data push allowed by the script interpreter.
pub const MAX_PUSH_SIZE: usize = 520;

/// Maximum length of an encoded varint (`u128::MAX` takes 19 bytes).
pub const MAX_VARINT_LEN: usize = 19;
