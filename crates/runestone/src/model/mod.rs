//! Data model types for Runestones.
//!
//! - Identifiers ([`RuneId`]) and names ([`Rune`], [`SpacedRune`])
//! - Transfers ([`Edict`])
//! - Issuance ([`Etching`], [`Terms`])
//! - The decoded message ([`Runestone`])

pub mod edict;
pub mod etching;
pub mod id;
pub mod rune;
pub mod runestone;

pub use edict::Edict;
pub use etching::{Etching, Terms};
pub use id::RuneId;
pub use rune::{Rune, SpacedRune};
pub use runestone::Runestone;
