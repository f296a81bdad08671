//! Runestone: encoder and decoder for rune protocol messages.
//!
//! A Runestone is a compact binary message carried in an `OP_RETURN` output
//! of a Bitcoin transaction. It can etch (issue) a new rune, mint units of an
//! existing rune, and transfer balances between the transaction's outputs.
//!
//! # Quick Start
//!
//! ```rust
//! use bitcoin::{Amount, Transaction, TxOut, absolute::LockTime, transaction::Version};
//! use runestone::{Edict, RuneId, Runestone};
//!
//! let runestone = Runestone {
//!     edicts: vec![Edict {
//!         id: RuneId { block: 840_000, tx: 1 },
//!         amount: 1_000,
//!         output: 0,
//!     }],
//!     ..Default::default()
//! };
//!
//! // Encode to an OP_RETURN script
//! let script_pubkey = runestone.encipher().unwrap();
//!
//! // Decode back from a transaction carrying it
//! let tx = Transaction {
//!     version: Version::TWO,
//!     lock_time: LockTime::ZERO,
//!     input: Vec::new(),
//!     output: vec![TxOut { value: Amount::ZERO, script_pubkey }],
//! };
//! assert_eq!(Runestone::decipher(&tx), Some(runestone));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (RuneId, Rune, Edict, Etching, Runestone)
//! - [`codec`]: Varints and the Runestone wire format
//! - [`arith`]: Checked 128-bit arithmetic
//! - [`error`]: Error types and cenotaph flaws
//! - [`limits`]: Protocol constants
//!
//! # Cenotaphs
//!
//! Decoding never fails. A message that is malformed, or that uses an even
//! tag or a flag this crate does not understand, decodes as a *cenotaph*:
//! `cenotaph` is set, and its edicts, etching and pointer are dropped.
//! [`Runestone::decipher_with_flaws`] reports why.
//!
//! # Wire Format
//!
//! ```text
//! OP_RETURN OP_PUSHNUM_13 <push>...
//! payload  = (tag value)* [0 edict*]
//! edict    = block-delta tx-delta amount output
//! ```
//!
//! Every integer is a bijective base-128 varint of up to 128 bits.

pub mod arith;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use error::{ArithmeticError, DecodeError, EncodeError, Flaw};
pub use model::{Edict, Etching, Rune, RuneId, Runestone, SpacedRune, Terms};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
