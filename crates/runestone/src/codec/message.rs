//! Splits the integer stream into tagged fields and edicts.

use tracing::trace;

use crate::codec::tag::{Fields, Tag};
use crate::error::Flaw;
use crate::model::{Edict, RuneId};

/// Structural view of a payload before any field is interpreted.
#[derive(Debug, Default)]
pub(crate) struct Message {
    pub(crate) flaws: Vec<Flaw>,
    pub(crate) edicts: Vec<Edict>,
    pub(crate) fields: Fields,
}

impl Message {
    /// Reads `(tag, value)` pairs until the body tag, then edict quadruples
    /// `(block delta, tx delta, amount, output)` until the end.
    pub(crate) fn from_integers(output_count: usize, payload: &[u128]) -> Self {
        let mut message = Message::default();

        for i in (0..payload.len()).step_by(2) {
            let tag = Tag::from(payload[i]);

            if tag == Tag::Body {
                message.read_edicts(output_count, &payload[i + 1..]);
                break;
            }

            let Some(&value) = payload.get(i + 1) else {
                message.flaws.push(Flaw::TruncatedField);
                break;
            };

            message.fields.entry(tag).or_default().push_back(value);
        }

        trace!(
            fields = message.fields.len(),
            edicts = message.edicts.len(),
            flaws = message.flaws.len(),
            "extracted message"
        );

        message
    }

    fn read_edicts(&mut self, output_count: usize, body: &[u128]) {
        let mut id = RuneId::default();

        for chunk in body.chunks(4) {
            let &[block, tx, amount, output] = chunk else {
                self.flaws.push(Flaw::TrailingIntegers);
                break;
            };

            let Some(next) = id.next(block, tx) else {
                self.flaws.push(Flaw::EdictRuneId);
                break;
            };

            let Some(edict) = Edict::from_integers(output_count, next, amount, output) else {
                self.flaws.push(Flaw::EdictOutput);
                break;
            };

            id = next;
            self.edicts.push(edict);
        }
    }
}
