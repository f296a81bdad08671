//! Classification of well-formed and poisoned messages.

mod common;

use pretty_assertions::assert_eq;
use runestone::{Edict, Etching, Flaw, Rune, RuneId, Runestone};

use common::with_integers;

const BODY: u128 = 0;
const FLAGS: u128 = 2;
const RUNE: u128 = 4;
const DIVISIBILITY: u128 = 1;
const ETCHING: u128 = 1;

fn single_edict() -> Vec<Edict> {
    vec![Edict {
        id: RuneId { block: 1, tx: 1 },
        amount: 2,
        output: 0,
    }]
}

#[test]
fn unrecognized_even_tag_poisons_message() {
    let tx = with_integers(&[126, 0, BODY, 1, 1, 2, 0], 0);

    let (runestone, flaws) = Runestone::decipher_with_flaws(&tx).unwrap();

    assert!(runestone.cenotaph);
    assert_eq!(flaws, [Flaw::UnrecognizedEvenTag]);
    // a cenotaph carries no transfers
    assert!(runestone.edicts.is_empty());
}

#[test]
fn unrecognized_odd_tag_is_tolerated() {
    let tx = with_integers(&[127, 0, BODY, 1, 1, 2, 0], 0);

    assert_eq!(
        Runestone::decipher(&tx),
        Some(Runestone {
            edicts: single_edict(),
            ..Default::default()
        })
    );
}

#[test]
fn divisibility_above_max_is_dropped_from_etching() {
    let tx = with_integers(&[FLAGS, ETCHING, RUNE, 10, DIVISIBILITY, 39], 0);

    let runestone = Runestone::decipher(&tx).unwrap();

    assert!(!runestone.cenotaph);
    assert_eq!(
        runestone.etching,
        Some(Etching {
            rune: Some(Rune(10)),
            divisibility: None,
            ..Default::default()
        })
    );
}

#[test]
fn divisibility_at_max_is_kept() {
    let tx = with_integers(&[FLAGS, ETCHING, DIVISIBILITY, 38], 0);

    let etching = Runestone::decipher(&tx).unwrap().etching.unwrap();
    assert_eq!(etching.divisibility, Some(38));
}

#[test]
fn zero_height_identifier_poisons_message() {
    let tx = with_integers(&[BODY, 0, 1, 2, 0], 0);

    let (runestone, flaws) = Runestone::decipher_with_flaws(&tx).unwrap();

    assert_eq!(
        runestone,
        Runestone {
            cenotaph: true,
            ..Default::default()
        }
    );
    assert_eq!(flaws, [Flaw::EdictRuneId]);
}

#[test]
fn named_etching_is_not_a_cenotaph() {
    let tx = with_integers(&[FLAGS, ETCHING, RUNE, 0], 0);

    let (runestone, flaws) = Runestone::decipher_with_flaws(&tx).unwrap();
    assert!(flaws.is_empty());
    assert_eq!(runestone.etching.unwrap().rune, Some(Rune(0)));
}

#[test]
fn cenotaph_keeps_mint_claim() {
    let tx = with_integers(&[20, 1, 20, 5, 126, 0], 0);

    assert_eq!(
        Runestone::decipher(&tx),
        Some(Runestone {
            cenotaph: true,
            mint: Some(RuneId { block: 1, tx: 5 }),
            ..Default::default()
        })
    );
}

#[test]
fn split_output_is_bounded_by_output_count() {
    // three outputs: the marker plus two
    let tx = with_integers(&[BODY, 1, 1, 2, 3], 2);
    assert!(!Runestone::decipher(&tx).unwrap().cenotaph);

    let tx = with_integers(&[BODY, 1, 1, 2, 4], 2);
    assert!(Runestone::decipher(&tx).unwrap().cenotaph);
}

#[test]
fn burn_roundtrips_as_cenotaph() {
    let runestone = Runestone {
        edicts: single_edict(),
        cenotaph: true,
        ..Default::default()
    };

    let tx = common::transaction(vec![runestone.encipher().unwrap()]);

    let (decoded, flaws) = Runestone::decipher_with_flaws(&tx).unwrap();
    assert!(decoded.cenotaph);
    assert!(decoded.edicts.is_empty());
    assert_eq!(flaws, [Flaw::UnrecognizedEvenTag]);
}
