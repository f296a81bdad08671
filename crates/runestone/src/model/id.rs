//! Rune identifiers.
//!
//! A rune is identified by the block height and transaction index of the
//! transaction that etched it. Inside a Runestone body, identifiers are
//! written as deltas from the previous edict's identifier.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RuneIdParseError;

/// Identifier of an etched rune: `(block, tx)`.
///
/// Ordering is by block, then transaction index, which is the order edicts
/// are sorted into before their identifiers are delta-encoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuneId {
    pub block: u64,
    pub tx: u32,
}

impl RuneId {
    /// Creates an identifier, rejecting a non-zero index at block zero.
    ///
    /// `(0, 0)` is allowed: it is the start of the delta chain and, in an
    /// edict, refers to the rune etched by the same transaction.
    pub fn new(block: u64, tx: u32) -> Option<RuneId> {
        if block == 0 && tx > 0 {
            return None;
        }

        Some(RuneId { block, tx })
    }

    /// Returns the `(block, tx)` delta that leads from `self` to `next`.
    ///
    /// When the block changes, the index is written absolutely. Returns `None`
    /// if `next` sorts before `self`.
    pub fn delta(self, next: RuneId) -> Option<(u128, u128)> {
        let block = next.block.checked_sub(self.block)?;

        let tx = if block == 0 {
            next.tx.checked_sub(self.tx)?
        } else {
            next.tx
        };

        Some((block.into(), tx.into()))
    }

    /// Applies a `(block, tx)` delta read from an edict.
    ///
    /// Returns `None` if either component leaves its range or the result is
    /// not a valid identifier.
    pub fn next(self, block: u128, tx: u128) -> Option<RuneId> {
        let block = self.block.checked_add(u64::try_from(block).ok()?)?;

        let tx = if block == self.block {
            self.tx.checked_add(u32::try_from(tx).ok()?)?
        } else {
            u32::try_from(tx).ok()?
        };

        RuneId::new(block, tx)
    }

    /// Packs the identifier into one integer as `(block << 16) | tx`.
    ///
    /// Only defined for indexes that fit in 16 bits.
    pub fn pack(self) -> Option<u128> {
        let tx = u16::try_from(self.tx).ok()?;
        Some(u128::from(self.block) << 16 | u128::from(tx))
    }

    /// Inverse of [`RuneId::pack`].
    pub fn unpack(n: u128) -> Option<RuneId> {
        let block = u64::try_from(n >> 16).ok()?;
        let tx = u32::from((n & 0xFFFF) as u16);
        RuneId::new(block, tx)
    }
}

impl Display for RuneId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.block, self.tx)
    }
}

impl FromStr for RuneId {
    type Err = RuneIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (block, tx) = s.split_once(':').ok_or(RuneIdParseError::Separator)?;

        let block = block.parse().map_err(RuneIdParseError::Block)?;
        let tx = tx.parse().map_err(RuneIdParseError::Transaction)?;

        RuneId::new(block, tx).ok_or(RuneIdParseError::ZeroBlock)
    }
}

impl Serialize for RuneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RuneId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
