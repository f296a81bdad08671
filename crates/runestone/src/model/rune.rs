//! Rune names.
//!
//! On the wire a rune name is a single integer. Its human form is bijective
//! base-26 over `A..=Z`: `0 = A`, `25 = Z`, `26 = AA`, and so on. Spacers are
//! display-only separators stored as a bitmask next to the name.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::arith;
use crate::error::{RuneParseError, SpacedRuneParseError};

/// Name of `u128::MAX`, which the general loop below cannot reach.
const MAX_NAME: &str = "BCGDENLQRQWDSLRUGSNLBTMFIJAV";

/// Number of spacer bits a name can carry.
const SPACER_BITS: usize = 32;

/// A rune name in its numeric wire form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rune(pub u128);

impl Rune {
    /// Returns the numeric wire value.
    pub fn n(self) -> u128 {
        self.0
    }
}

impl Display for Rune {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.0 == u128::MAX {
            return f.write_str(MAX_NAME);
        }

        let mut n = self.0 + 1;
        let mut letters = Vec::new();
        while n > 0 {
            letters.push(b'A' + ((n - 1) % 26) as u8);
            n = (n - 1) / 26;
        }

        for letter in letters.iter().rev() {
            write!(f, "{}", char::from(*letter))?;
        }

        Ok(())
    }
}

impl FromStr for Rune {
    type Err = RuneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RuneParseError::Empty);
        }

        let mut x = 0u128;
        for (i, c) in s.chars().enumerate() {
            if i > 0 {
                x = arith::add(x, 1).map_err(|_| RuneParseError::Range)?;
            }
            x = arith::mul(x, 26).map_err(|_| RuneParseError::Range)?;
            match c {
                'A'..='Z' => {
                    x = arith::add(x, u128::from(c) - u128::from('A'))
                        .map_err(|_| RuneParseError::Range)?;
                }
                _ => return Err(RuneParseError::Character(c)),
            }
        }
        Ok(Rune(x))
    }
}

impl Serialize for Rune {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rune {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// A rune name together with its spacers, e.g. `UNCOMMON•GOODS`.
///
/// Bit `i` of `spacers` places a spacer after letter `i`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpacedRune {
    pub rune: Rune,
    pub spacers: u32,
}

impl SpacedRune {
    pub fn new(rune: Rune, spacers: u32) -> Self {
        Self { rune, spacers }
    }
}

impl Display for SpacedRune {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = self.rune.to_string();

        for (i, c) in name.chars().enumerate() {
            write!(f, "{c}")?;

            if i + 1 < name.len() && i < SPACER_BITS && self.spacers & (1 << i) != 0 {
                f.write_str("•")?;
            }
        }

        Ok(())
    }
}

impl FromStr for SpacedRune {
    type Err = SpacedRuneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut name = String::new();
        let mut spacers = 0u32;

        for c in s.chars() {
            match c {
                'A'..='Z' => name.push(c),
                '.' | '•' => {
                    let position = name
                        .len()
                        .checked_sub(1)
                        .ok_or(SpacedRuneParseError::LeadingSpacer)?;

                    if position >= SPACER_BITS {
                        return Err(SpacedRuneParseError::SpacerPosition(position));
                    }

                    let flag = 1 << position;
                    if spacers & flag != 0 {
                        return Err(SpacedRuneParseError::DoubleSpacer);
                    }
                    spacers |= flag;
                }
                _ => return Err(SpacedRuneParseError::Character(c)),
            }
        }

        // highest spacer must sit before the last letter
        if (SPACER_BITS - spacers.leading_zeros() as usize) >= name.len() && spacers != 0 {
            return Err(SpacedRuneParseError::TrailingSpacer);
        }

        Ok(SpacedRune {
            rune: name.parse()?,
            spacers,
        })
    }
}

impl Serialize for SpacedRune {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpacedRune {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
