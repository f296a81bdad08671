//! Primitive encoding/decoding for the Runestone payload.
//!
//! Integers use bijective base-128: every byte with the high bit set is a
//! continuation byte carrying `b - 127`, the first byte below `0x80`
//! terminates. Unlike LEB128 there is no zero padding, so each value has
//! exactly one encoding. Groups are written most-significant first.

use crate::error::DecodeError;
use crate::limits::MAX_VARINT_LEN;

/// Encodes `n` as a bijective base-128 varint.
pub fn encode(n: u128) -> Vec<u8> {
    let mut v = Vec::with_capacity(MAX_VARINT_LEN);
    encode_to_vec(n, &mut v);
    v
}

/// Appends the varint encoding of `n` to `v`.
#[inline]
pub fn encode_to_vec(mut n: u128, v: &mut Vec<u8>) {
    // Fill a stack buffer from the back, then copy once
    let mut out = [0u8; MAX_VARINT_LEN];
    let mut i = MAX_VARINT_LEN - 1;

    out[i] = (n & 0x7F) as u8;

    while n > 0x7F {
        n = n / 128 - 1;
        i -= 1;
        out[i] = (n & 0xFF) as u8 | 0x80;
    }

    v.extend_from_slice(&out[i..]);
}

/// Decodes one varint from the front of `buffer`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode(buffer: &[u8]) -> Result<(u128, usize), DecodeError> {
    let mut n: u128 = 0;

    for (i, &byte) in buffer.iter().enumerate() {
        let b = u128::from(byte);

        if b < 128 {
            return n
                .checked_add(b)
                .map(|n| (n, i + 1))
                .ok_or(DecodeError::VarintOverflow);
        }

        n = n
            .checked_add(b - 127)
            .and_then(|n| n.checked_mul(128))
            .ok_or(DecodeError::VarintOverflow)?;
    }

    Err(DecodeError::Truncated)
}

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding the integer stream of a payload.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads one varint.
    ///
    /// On error the position is left unchanged.
    #[inline]
    pub fn read_varint(&mut self) -> Result<u128, DecodeError> {
        let (n, len) = decode(&self.data[self.pos..])?;
        self.pos += len;
        Ok(n)
    }

    /// Reads varints until the data is exhausted or one fails to decode.
    ///
    /// The integers read before a failure are returned together with the
    /// error, since a malformed tail does not invalidate what came before.
    pub fn read_all(&mut self) -> (Vec<u128>, Option<DecodeError>) {
        let mut integers = Vec::new();

        while !self.is_empty() {
            match self.read_varint() {
                Ok(n) => integers.push(n),
                Err(err) => return (integers, Some(err)),
            }
        }

        (integers, None)
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for building a payload.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes an unsigned varint.
    #[inline]
    pub fn write_varint(&mut self, value: u128) {
        encode_to_vec(value, &mut self.buf);
    }
}
