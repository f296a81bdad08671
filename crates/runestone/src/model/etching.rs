//! Issuance of a new rune.

use serde::{Deserialize, Serialize};

use crate::arith;
use crate::limits::{MAX_DIVISIBILITY, MAX_SPACERS};
use crate::model::{Rune, SpacedRune};

/// Parameters of a rune created by a Runestone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etching {
    pub divisibility: Option<u8>,
    pub premine: Option<u128>,
    pub rune: Option<Rune>,
    pub spacers: Option<u32>,
    pub symbol: Option<char>,
    pub terms: Option<Terms>,
}

/// Open-mint terms.
///
/// `height` bounds are absolute block heights, `offset` bounds are relative
/// to the etching block. `None` means unbounded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terms {
    pub amount: Option<u128>,
    pub cap: Option<u128>,
    pub height: (Option<u64>, Option<u64>),
    pub offset: (Option<u64>, Option<u64>),
}

impl Etching {
    pub const MAX_DIVISIBILITY: u8 = MAX_DIVISIBILITY;
    pub const MAX_SPACERS: u32 = MAX_SPACERS;

    /// Total units that can ever exist: `premine + cap * amount`.
    ///
    /// Returns `None` if that does not fit in a `u128`.
    pub fn supply(&self) -> Option<u128> {
        let premine = self.premine.unwrap_or_default();
        let cap = self.terms.and_then(|terms| terms.cap).unwrap_or_default();
        let amount = self
            .terms
            .and_then(|terms| terms.amount)
            .unwrap_or_default();

        arith::add(premine, arith::mul(cap, amount).ok()?).ok()
    }

    /// Name with spacers applied, if the etching names its rune.
    pub fn spaced_rune(&self) -> Option<SpacedRune> {
        self.rune
            .map(|rune| SpacedRune::new(rune, self.spacers.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_terms(premine: Option<u128>, cap: Option<u128>, amount: Option<u128>) -> Etching {
        Etching {
            premine,
            terms: Some(Terms {
                cap,
                amount,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_supply() {
        assert_eq!(Etching::default().supply(), Some(0));
        assert_eq!(
            Etching {
                premine: Some(5),
                ..Default::default()
            }
            .supply(),
            Some(5)
        );
        assert_eq!(with_terms(Some(1), Some(2), Some(3)).supply(), Some(7));
        assert_eq!(with_terms(None, Some(1), Some(u128::MAX)).supply(), Some(u128::MAX));
        assert_eq!(with_terms(None, None, Some(u128::MAX)).supply(), Some(0));
    }

    #[test]
    fn test_supply_overflow() {
        assert_eq!(with_terms(Some(1), Some(1), Some(u128::MAX)).supply(), None);
        assert_eq!(with_terms(None, Some(2), Some(u128::MAX / 2 + 1)).supply(), None);
    }

    #[test]
    fn test_spaced_rune() {
        let etching = Etching {
            rune: Some(Rune(26)),
            spacers: Some(1),
            ..Default::default()
        };
        assert_eq!(etching.spaced_rune().unwrap().to_string(), "A•A");
        assert_eq!(Etching::default().spaced_rune(), None);
    }
}
