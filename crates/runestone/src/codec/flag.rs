//! Boolean protocol flags packed into the `Flags` field.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flag {
    /// The message etches a new rune.
    Etching = 0,
    /// The etching carries open-mint terms.
    Terms = 1,
    /// Reserved; never recognized, so setting it makes a cenotaph.
    Cenotaph = 127,
}

impl Flag {
    pub(crate) fn mask(self) -> u128 {
        1 << self as u128
    }

    /// Clears this flag in `flags`, returning whether it was set.
    pub(crate) fn take(self, flags: &mut u128) -> bool {
        let mask = self.mask();
        let set = *flags & mask != 0;
        *flags &= !mask;
        set
    }

    pub(crate) fn set(self, flags: &mut u128) {
        *flags |= self.mask()
    }
}

impl From<Flag> for u128 {
    fn from(flag: Flag) -> Self {
        flag.mask()
    }
}
