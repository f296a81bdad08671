//! Field tags of the Runestone payload.
//!
//! Even tags must be understood by a decoder: one that is left over after
//! all recognized fields have been taken turns the message into a cenotaph.
//! Odd tags may be ignored.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::codec::primitives::Writer;

/// Decoded fields, keyed by tag, with every value in stream order.
pub(crate) type Fields = FxHashMap<Tag, VecDeque<u128>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Tag {
    Body,
    Flags,
    Rune,
    Premine,
    Cap,
    Amount,
    HeightStart,
    HeightEnd,
    OffsetStart,
    OffsetEnd,
    Mint,
    Pointer,
    Cenotaph,

    Divisibility,
    Spacers,
    Symbol,
    Nop,

    Unrecognized(u128),
}

impl Tag {
    /// Takes the first `N` values of this tag and converts them with `with`.
    ///
    /// Nothing is removed if fewer than `N` values are present or `with`
    /// rejects them, so an even tag with a bad value stays behind and is
    /// caught by the leftover check.
    pub(crate) fn take<const N: usize, T>(
        self,
        fields: &mut Fields,
        with: impl Fn([u128; N]) -> Option<T>,
    ) -> Option<T> {
        let field = fields.get_mut(&self)?;

        let mut values: [u128; N] = [0; N];

        for (i, v) in values.iter_mut().enumerate() {
            *v = *field.get(i)?;
        }

        let value = with(values)?;

        field.drain(0..N);

        if field.is_empty() {
            fields.remove(&self);
        }

        Some(value)
    }

    /// Writes one `tag value` pair per element of `values`.
    pub(crate) fn encode<const N: usize>(self, values: [u128; N], writer: &mut Writer) {
        for value in values {
            writer.write_varint(self.into());
            writer.write_varint(value);
        }
    }

    pub(crate) fn encode_option<T: Into<u128>>(self, value: Option<T>, writer: &mut Writer) {
        if let Some(value) = value {
            self.encode([value.into()], writer)
        }
    }

    pub(crate) fn is_even(self) -> bool {
        u128::from(self) % 2 == 0
    }
}

impl From<Tag> for u128 {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Body => 0,
            Tag::Flags => 2,
            Tag::Rune => 4,
            Tag::Premine => 6,
            Tag::Cap => 8,
            Tag::Amount => 10,
            Tag::HeightStart => 12,
            Tag::HeightEnd => 14,
            Tag::OffsetStart => 16,
            Tag::OffsetEnd => 18,
            Tag::Mint => 20,
            Tag::Pointer => 22,
            Tag::Cenotaph => 126,

            Tag::Divisibility => 1,
            Tag::Spacers => 3,
            Tag::Symbol => 5,
            Tag::Nop => 127,

            Tag::Unrecognized(n) => n,
        }
    }
}

impl From<u128> for Tag {
    fn from(n: u128) -> Self {
        match n {
            0 => Tag::Body,
            2 => Tag::Flags,
            4 => Tag::Rune,
            6 => Tag::Premine,
            8 => Tag::Cap,
            10 => Tag::Amount,
            12 => Tag::HeightStart,
            14 => Tag::HeightEnd,
            16 => Tag::OffsetStart,
            18 => Tag::OffsetEnd,
            20 => Tag::Mint,
            22 => Tag::Pointer,
            126 => Tag::Cenotaph,

            1 => Tag::Divisibility,
            3 => Tag::Spacers,
            5 => Tag::Symbol,
            127 => Tag::Nop,

            n => Tag::Unrecognized(n),
        }
    }
}
