//! Transaction builders shared by the integration tests.

#![allow(dead_code)]

use bitcoin::absolute::LockTime;
use bitcoin::opcodes;
use bitcoin::script::{Builder, PushBytesBuf, ScriptBuf};
use bitcoin::transaction::Version;
use bitcoin::{Amount, Transaction, TxOut};
use runestone::codec::encode_to_vec;
use runestone::limits::MAGIC_NUMBER;

/// Wraps output scripts in an otherwise empty transaction.
pub fn transaction(scripts: Vec<ScriptBuf>) -> Transaction {
    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: Vec::new(),
        output: scripts
            .into_iter()
            .map(|script_pubkey| TxOut {
                value: Amount::ZERO,
                script_pubkey,
            })
            .collect(),
    }
}

/// Builds a marker script whose single push holds `integers` as varints.
pub fn script(integers: &[u128]) -> ScriptBuf {
    let mut payload = Vec::new();
    for integer in integers {
        encode_to_vec(*integer, &mut payload);
    }

    let push = PushBytesBuf::try_from(payload).unwrap();

    Builder::new()
        .push_opcode(opcodes::all::OP_RETURN)
        .push_opcode(MAGIC_NUMBER)
        .push_slice(push)
        .into_script()
}

/// A transaction whose first output carries `integers`, followed by
/// `extra_outputs` empty outputs.
pub fn with_integers(integers: &[u128], extra_outputs: usize) -> Transaction {
    let mut scripts = vec![script(integers)];
    scripts.extend(std::iter::repeat_n(ScriptBuf::new(), extra_outputs));
    transaction(scripts)
}
