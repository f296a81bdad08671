//! Runestone encoding/decoding.
//!
//! A Runestone lives in the first transaction output whose script starts
//! with `OP_RETURN OP_PUSHNUM_13`. The data pushes after the magic number are
//! concatenated into one payload of varints, read as tagged fields followed by
//! an optional body of delta-encoded edicts.

use bitcoin::Transaction;
use bitcoin::opcodes;
use bitcoin::script::{self, Instruction, PushBytes, ScriptBuf};
use tracing::{debug, trace};

use crate::codec::flag::Flag;
use crate::codec::message::Message;
use crate::codec::primitives::{Reader, Writer};
use crate::codec::tag::Tag;
use crate::error::{EncodeError, Flaw};
use crate::limits::{MAGIC_NUMBER, MAX_DIVISIBILITY, MAX_PUSH_SIZE, MAX_SPACERS};
use crate::model::{Etching, Rune, RuneId, Runestone, Terms};

#[derive(Debug, PartialEq)]
enum Payload {
    Valid(Vec<u8>),
    Invalid(Flaw),
}

// =============================================================================
// DECODING
// =============================================================================

impl Runestone {
    /// Decodes the Runestone carried by `transaction`, if any.
    ///
    /// Returns `None` when no output carries the Runestone marker. Malformed
    /// messages are returned as cenotaphs rather than errors.
    pub fn decipher(transaction: &Transaction) -> Option<Runestone> {
        Self::decipher_with_flaws(transaction).map(|(runestone, _)| runestone)
    }

    /// Like [`Runestone::decipher`], also returning every flaw found, in
    /// detection order. The list is empty exactly when the runestone is not a
    /// cenotaph.
    pub fn decipher_with_flaws(transaction: &Transaction) -> Option<(Runestone, Vec<Flaw>)> {
        let payload = match Runestone::payload(transaction)? {
            Payload::Valid(payload) => payload,
            Payload::Invalid(flaw) => {
                debug!(%flaw, "runestone payload is invalid");
                return Some((
                    Runestone {
                        cenotaph: true,
                        ..Default::default()
                    },
                    vec![flaw],
                ));
            }
        };

        let (integers, err) = Reader::new(&payload).read_all();

        let mut flaws = Vec::new();
        if let Some(err) = err {
            trace!(%err, read = integers.len(), "payload ends in a bad varint");
            flaws.push(Flaw::Varint);
        }

        Some(Runestone::assemble(transaction.output.len(), &integers, flaws))
    }

    /// Interprets the integer stream of a payload.
    fn assemble(
        output_count: usize,
        integers: &[u128],
        mut flaws: Vec<Flaw>,
    ) -> (Runestone, Vec<Flaw>) {
        let Message {
            flaws: structural,
            edicts,
            mut fields,
        } = Message::from_integers(output_count, integers);

        flaws.extend(structural);

        let mut flags = Tag::Flags
            .take(&mut fields, |[flags]| Some(flags))
            .unwrap_or_default();

        let etch = Flag::Etching.take(&mut flags);
        let terms = etch && Flag::Terms.take(&mut flags);

        // Issuance fields are consumed whether or not the etching flag is set
        let divisibility = Tag::Divisibility.take(&mut fields, |[divisibility]| {
            let divisibility = u8::try_from(divisibility).ok()?;
            (divisibility <= MAX_DIVISIBILITY).then_some(divisibility)
        });
        let premine = Tag::Premine.take(&mut fields, |[premine]| Some(premine));
        let rune = Tag::Rune.take(&mut fields, |[rune]| Some(Rune(rune)));
        let spacers = Tag::Spacers.take(&mut fields, |[spacers]| {
            let spacers = u32::try_from(spacers).ok()?;
            (spacers <= MAX_SPACERS).then_some(spacers)
        });
        let symbol = Tag::Symbol.take(&mut fields, |[symbol]| {
            char::from_u32(u32::try_from(symbol).ok()?)
        });

        let cap = Tag::Cap.take(&mut fields, |[cap]| Some(cap));
        let amount = Tag::Amount.take(&mut fields, |[amount]| Some(amount));
        let height = (
            Tag::HeightStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
            Tag::HeightEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
        );
        let offset = (
            Tag::OffsetStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
            Tag::OffsetEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
        );

        let etching = etch.then(|| Etching {
            divisibility,
            premine,
            rune,
            spacers,
            symbol,
            terms: terms.then_some(Terms {
                amount,
                cap,
                height,
                offset,
            }),
        });

        let mint = Tag::Mint.take(&mut fields, |[block, tx]| {
            RuneId::new(block.try_into().ok()?, tx.try_into().ok()?)
        });

        let pointer = Tag::Pointer.take(&mut fields, |[pointer]| {
            (pointer < output_count as u128).then_some(pointer)
        });

        if etching.is_some_and(|etching| etching.supply().is_none()) {
            flaws.push(Flaw::SupplyOverflow);
        }

        if flags != 0 {
            flaws.push(Flaw::UnrecognizedFlag);
        }

        if fields.keys().any(|tag| tag.is_even()) {
            flaws.push(Flaw::UnrecognizedEvenTag);
        }

        if !flaws.is_empty() {
            debug!(?flaws, ?mint, "runestone is a cenotaph");
            return (
                Runestone {
                    cenotaph: true,
                    mint,
                    ..Default::default()
                },
                flaws,
            );
        }

        (
            Runestone {
                edicts,
                etching,
                cenotaph: false,
                mint,
                pointer,
            },
            flaws,
        )
    }

    /// Finds the first marker output and concatenates its data pushes.
    fn payload(transaction: &Transaction) -> Option<Payload> {
        for (vout, output) in transaction.output.iter().enumerate() {
            let mut instructions = output.script_pubkey.instructions();

            if instructions.next() != Some(Ok(Instruction::Op(opcodes::all::OP_RETURN))) {
                continue;
            }

            // OP_RETURN scripts may be invalid, so errors before the magic
            // number just mean this is not a runestone
            if instructions.next() != Some(Ok(Instruction::Op(MAGIC_NUMBER))) {
                continue;
            }

            trace!(vout, "found runestone marker");

            let mut payload = Vec::new();

            for result in instructions {
                match result {
                    Ok(Instruction::PushBytes(push)) => {
                        payload.extend_from_slice(push.as_bytes());
                    }
                    Ok(Instruction::Op(_)) => {
                        return Some(Payload::Invalid(Flaw::Opcode));
                    }
                    Err(_) => {
                        return Some(Payload::Invalid(Flaw::InvalidScript));
                    }
                }
            }

            return Some(Payload::Valid(payload));
        }

        None
    }
}

// =============================================================================
// ENCODING
// =============================================================================

fn valid_id(id: RuneId) -> Result<RuneId, EncodeError> {
    RuneId::new(id.block, id.tx).ok_or(EncodeError::InvalidRuneId(id))
}

impl Runestone {
    /// Encodes the tagged-field payload, without the script framing.
    pub fn payload_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut writer = Writer::new();

        if let Some(etching) = self.etching {
            let mut flags = 0;
            Flag::Etching.set(&mut flags);

            if etching.terms.is_some() {
                Flag::Terms.set(&mut flags);
            }

            Tag::Flags.encode([flags], &mut writer);

            Tag::Rune.encode_option(etching.rune.map(|rune| rune.0), &mut writer);
            Tag::Divisibility.encode_option(etching.divisibility, &mut writer);
            Tag::Spacers.encode_option(etching.spacers, &mut writer);
            Tag::Symbol.encode_option(etching.symbol, &mut writer);
            Tag::Premine.encode_option(etching.premine, &mut writer);

            if let Some(terms) = etching.terms {
                Tag::Amount.encode_option(terms.amount, &mut writer);
                Tag::Cap.encode_option(terms.cap, &mut writer);
                Tag::HeightStart.encode_option(terms.height.0, &mut writer);
                Tag::HeightEnd.encode_option(terms.height.1, &mut writer);
                Tag::OffsetStart.encode_option(terms.offset.0, &mut writer);
                Tag::OffsetEnd.encode_option(terms.offset.1, &mut writer);
            }
        }

        if let Some(RuneId { block, tx }) = self.mint.map(valid_id).transpose()? {
            Tag::Mint.encode([block.into(), tx.into()], &mut writer);
        }

        Tag::Pointer.encode_option(self.pointer, &mut writer);

        if self.cenotaph {
            Tag::Cenotaph.encode([0], &mut writer);
        }

        if !self.edicts.is_empty() {
            writer.write_varint(Tag::Body.into());

            let mut edicts = self.edicts.clone();
            edicts.sort_by_key(|edict| edict.id);

            let mut previous = RuneId::default();
            for edict in edicts {
                let (block, tx) = previous
                    .delta(valid_id(edict.id)?)
                    .ok_or(EncodeError::InvalidRuneId(edict.id))?;
                writer.write_varint(block);
                writer.write_varint(tx);
                writer.write_varint(edict.amount);
                writer.write_varint(edict.output);
                previous = edict.id;
            }
        }

        Ok(writer.into_bytes())
    }

    /// Encodes this runestone as an `OP_RETURN` output script.
    ///
    /// The payload is split into pushes of at most 520 bytes.
    pub fn encipher(&self) -> Result<ScriptBuf, EncodeError> {
        let payload = self.payload_bytes()?;

        let mut builder = script::Builder::new()
            .push_opcode(opcodes::all::OP_RETURN)
            .push_opcode(MAGIC_NUMBER);

        for chunk in payload.chunks(MAX_PUSH_SIZE) {
            let push: &PushBytes = chunk
                .try_into()
                .map_err(|_| EncodeError::PushTooLarge { len: chunk.len() })?;
            builder = builder.push_slice(push);
        }

        Ok(builder.into_script())
    }
}
