//! Encode/decode round trips over generated runestones.

mod common;

use bitcoin::ScriptBuf;
use bitcoin::script::{Builder, PushBytesBuf};
use proptest::prelude::*;
use runestone::limits::{MAGIC_NUMBER, MAX_DIVISIBILITY, MAX_SPACERS};
use runestone::{Edict, Etching, Rune, RuneId, Runestone, Terms};

/// Outputs in the carrying transaction, marker included.
const OUTPUTS: usize = 4;

fn rune_id() -> impl Strategy<Value = RuneId> {
    prop_oneof![
        1 => Just(RuneId::default()),
        9 => (1..=u64::MAX, any::<u32>()).prop_map(|(block, tx)| RuneId { block, tx }),
    ]
}

fn edict() -> impl Strategy<Value = Edict> {
    (rune_id(), any::<u128>(), 0..=OUTPUTS as u128)
        .prop_map(|(id, amount, output)| Edict { id, amount, output })
}

/// Amounts bounded so that `premine + cap * amount` always fits.
fn amount() -> impl Strategy<Value = Option<u128>> {
    proptest::option::of(any::<u64>().prop_map(u128::from))
}

fn terms() -> impl Strategy<Value = Terms> {
    (
        amount(),
        amount(),
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<u64>()),
        proptest::option::of(any::<u64>()),
    )
        .prop_map(|(amount, cap, height_start, height_end, offset_start, offset_end)| Terms {
            amount,
            cap,
            height: (height_start, height_end),
            offset: (offset_start, offset_end),
        })
}

fn etching() -> impl Strategy<Value = Etching> {
    (
        proptest::option::of(0..=MAX_DIVISIBILITY),
        amount(),
        proptest::option::of(any::<u128>().prop_map(Rune)),
        proptest::option::of(0..=MAX_SPACERS),
        proptest::option::of(any::<char>()),
        proptest::option::of(terms()),
    )
        .prop_map(|(divisibility, premine, rune, spacers, symbol, terms)| Etching {
            divisibility,
            premine,
            rune,
            spacers,
            symbol,
            terms,
        })
}

fn runestone() -> impl Strategy<Value = Runestone> {
    (
        proptest::collection::vec(edict(), 0..16),
        proptest::option::of(etching()),
        proptest::option::of(rune_id()),
        proptest::option::of(0..OUTPUTS as u128),
    )
        .prop_map(|(edicts, etching, mint, pointer)| Runestone {
            edicts,
            etching,
            cenotaph: false,
            mint,
            pointer,
        })
}

fn carry(script: ScriptBuf) -> bitcoin::Transaction {
    let mut scripts = vec![script];
    scripts.extend(std::iter::repeat_n(ScriptBuf::new(), OUTPUTS - 1));
    common::transaction(scripts)
}

proptest! {
    #[test]
    fn decipher_inverts_encipher(runestone in runestone()) {
        let tx = carry(runestone.encipher().unwrap());

        let mut expected = runestone.clone();
        expected.edicts.sort_by_key(|edict| edict.id);

        let (decoded, flaws) = Runestone::decipher_with_flaws(&tx).unwrap();
        prop_assert!(flaws.is_empty(), "unexpected flaws: {:?}", flaws);
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn decipher_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let push = PushBytesBuf::try_from(bytes).unwrap();
        let script = Builder::new()
            .push_opcode(bitcoin::opcodes::all::OP_RETURN)
            .push_opcode(MAGIC_NUMBER)
            .push_slice(push)
            .into_script();

        let (runestone, flaws) = Runestone::decipher_with_flaws(&carry(script)).unwrap();
        prop_assert_eq!(runestone.cenotaph, !flaws.is_empty());
        if runestone.cenotaph {
            prop_assert!(runestone.edicts.is_empty());
            prop_assert!(runestone.etching.is_none());
            prop_assert!(runestone.pointer.is_none());
        }
    }

    #[test]
    fn arbitrary_scripts_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let tx = carry(ScriptBuf::from_bytes(bytes));
        if let Some((runestone, flaws)) = Runestone::decipher_with_flaws(&tx) {
            prop_assert_eq!(runestone.cenotaph, !flaws.is_empty());
        }
    }
}

#[test]
fn sorted_edict_ids_survive_delta_chain() {
    let ids = [
        RuneId { block: 1, tx: 1 },
        RuneId { block: 1, tx: 5 },
        RuneId { block: 2, tx: 0 },
    ];

    let runestone = Runestone {
        edicts: ids
            .iter()
            .map(|&id| Edict {
                id,
                amount: 2,
                output: 0,
            })
            .collect(),
        ..Default::default()
    };

    let decoded = Runestone::decipher(&carry(runestone.encipher().unwrap())).unwrap();
    assert_eq!(
        decoded.edicts.iter().map(|edict| edict.id).collect::<Vec<_>>(),
        ids
    );
}

#[test]
fn unsorted_edicts_are_sorted_by_encipher() {
    let edict = |block, tx| Edict {
        id: RuneId { block, tx },
        amount: 1,
        output: 0,
    };

    let runestone = Runestone {
        edicts: vec![edict(3, 0), edict(1, 7), edict(1, 2)],
        ..Default::default()
    };

    let decoded = Runestone::decipher(&carry(runestone.encipher().unwrap())).unwrap();
    assert_eq!(decoded.edicts, [edict(1, 2), edict(1, 7), edict(3, 0)]);
}
