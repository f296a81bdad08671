//! Error types for Runestone encoding, decoding and name parsing.

use thiserror::Error;

/// Error while reading an integer from the payload.
///
/// Either variant turns the whole message into a cenotaph; neither is ever
/// surfaced from [`Runestone::decipher`](crate::Runestone::decipher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("varint truncated: stream ended before a terminating byte")]
    Truncated,

    #[error("varint overflow (value exceeds u128)")]
    VarintOverflow,
}

/// Error while building a Runestone output script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A payload chunk was rejected as a script push. Chunks are cut at
    /// [`MAX_PUSH_SIZE`](crate::limits::MAX_PUSH_SIZE), so this only occurs
    /// if that limit exceeds what the script builder accepts.
    #[error("data push of {len} bytes exceeds the script push limit")]
    PushTooLarge { len: usize },

    /// A mint or edict names an id with block zero and a non-zero index,
    /// which no decoder would accept.
    #[error("invalid rune id {0}")]
    InvalidRuneId(crate::RuneId),
}

/// Error from checked 128-bit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("arithmetic overflow")]
    Overflow,
}

/// Error parsing a [`Rune`](crate::Rune) from its letter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuneParseError {
    #[error("invalid character `{0}`")]
    Character(char),

    #[error("empty name")]
    Empty,

    #[error("name out of range")]
    Range,
}

/// Error parsing a [`RuneId`](crate::RuneId) from `BLOCK:TX`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuneIdParseError {
    #[error("missing `:` separator")]
    Separator,

    #[error("invalid block height: {0}")]
    Block(std::num::ParseIntError),

    #[error("invalid transaction index: {0}")]
    Transaction(std::num::ParseIntError),

    #[error("index without block height")]
    ZeroBlock,
}

/// Error parsing a [`SpacedRune`](crate::SpacedRune).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpacedRuneParseError {
    #[error("invalid character `{0}`")]
    Character(char),

    #[error("double spacer")]
    DoubleSpacer,

    #[error("leading spacer")]
    LeadingSpacer,

    #[error("trailing spacer")]
    TrailingSpacer,

    #[error("spacer after letter {0} is out of range")]
    SpacerPosition(usize),

    #[error(transparent)]
    Rune(#[from] RuneParseError),
}

/// Reason a Runestone was classified as a cenotaph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flaw {
    #[error("edict output greater than transaction output count")]
    EdictOutput,

    #[error("invalid rune ID in edict")]
    EdictRuneId,

    #[error("invalid script in OP_RETURN")]
    InvalidScript,

    #[error("non-pushdata opcode in OP_RETURN")]
    Opcode,

    #[error("supply overflows u128")]
    SupplyOverflow,

    #[error("trailing integers in body")]
    TrailingIntegers,

    #[error("field with missing value")]
    TruncatedField,

    #[error("unrecognized even tag")]
    UnrecognizedEvenTag,

    #[error("unrecognized flag")]
    UnrecognizedFlag,

    #[error("invalid varint")]
    Varint,
}
