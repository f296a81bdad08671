//! Binary encoding/decoding for Runestones.
//!
//! Decoding runs leaf-first: script pushes → varints ([`primitives`]) →
//! tagged fields and edicts (`message`) → interpreted [`Runestone`](crate::Runestone)
//! (`runestone`). Encoding runs the same path backwards.

mod flag;
mod message;
pub mod primitives;
mod runestone;
mod tag;

pub use primitives::{Reader, Writer, decode, encode, encode_to_vec};
