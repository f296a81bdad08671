//! The decoded Runestone message.

use serde::{Deserialize, Serialize};

use crate::model::{Edict, Etching, RuneId};

/// A rune protocol message carried by one transaction.
///
/// A message with `cenotaph` set carries no transfers or issuance: its
/// `edicts`, `etching` and `pointer` are always empty after decoding, and
/// every rune input to the transaction is burned. `mint` is kept so that the
/// claimed mint is still counted.
///
/// Encoding a runestone with `cenotaph` set emits the reserved cenotaph tag,
/// producing a message that decodes as a cenotaph.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runestone {
    pub edicts: Vec<Edict>,
    pub etching: Option<Etching>,
    pub cenotaph: bool,
    pub mint: Option<RuneId>,
    pub pointer: Option<u128>,
}
