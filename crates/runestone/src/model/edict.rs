//! Balance transfer instructions.

use serde::{Deserialize, Serialize};

use crate::model::RuneId;

/// Moves `amount` units of rune `id` to transaction output `output`.
///
/// `output` may equal the number of outputs, which indexers read as "split
/// across all non-`OP_RETURN` outputs".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edict {
    pub id: RuneId,
    pub amount: u128,
    pub output: u128,
}

impl Edict {
    /// Builds an edict from decoded integers, checking `output` against the
    /// carrying transaction's output count.
    pub fn from_integers(
        output_count: usize,
        id: RuneId,
        amount: u128,
        output: u128,
    ) -> Option<Self> {
        if output > output_count as u128 {
            return None;
        }

        Some(Self { id, amount, output })
    }
}
