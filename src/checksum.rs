//! Adler-32 running checksum.
//!
//! A checksum packs two 16-bit sums into one `u32`: `S1`, the running byte
//! sum, lives in the low word and `S2`, the sum of sums, in the high word.
//! Both are reduced modulo [`MOD`] once a block of input has been consumed.

use std::fmt;

/// Largest prime below 65536.
pub const MOD: u32 = 65521;

/// Largest `n` such that `255 * n * (n + 1) / 2 + (n + 1) * (MOD - 1)` fits in
/// a `u32`. See RFC 1950.
const NMAX: usize = 5552;

/// An Adler-32 checksum value.
///
/// Values are immutable; [`Checksum::update`] consumes `self` and returns the
/// extended checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum(u32);

impl Checksum {
    /// Checksum of the empty input (`S1 = 1`, `S2 = 0`).
    pub const IDENTITY: Checksum = Checksum(1);

    /// Pack two component sums into a checksum.
    pub const fn from_parts(s1: u16, s2: u16) -> Self {
        Checksum(((s2 as u32) << 16) | s1 as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Low word, the running byte sum.
    pub const fn s1(self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    /// High word, the running sum of sums.
    pub const fn s2(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Extend this checksum as if `data` had been appended to the input that
    /// produced it.
    pub fn update(self, data: &[u8]) -> Checksum {
        update_blocked(self, data, NMAX)
    }

    /// Big-endian byte layout, as written in a zlib stream trailer.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.to_be_bytes())
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Checksum::IDENTITY
    }
}

impl From<u32> for Checksum {
    fn from(value: u32) -> Self {
        Checksum(value)
    }
}

impl From<Checksum> for u32 {
    fn from(c: Checksum) -> Self {
        c.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Returns the Adler-32 checksum of `data`.
pub fn checksum(data: &[u8]) -> Checksum {
    update(Checksum::IDENTITY, data)
}

/// Add `data` to the running checksum `prior`.
///
/// Chunked calls compose: `update(update(c, a), b) == update(c, a ++ b)`.
pub fn update(prior: Checksum, data: &[u8]) -> Checksum {
    prior.update(data)
}

pub fn s1(c: Checksum) -> u16 {
    c.s1()
}

pub fn s2(c: Checksum) -> u16 {
    c.s2()
}

/// Core loop. Sums are reduced once per `block` bytes, so `block` must not
/// exceed `NMAX` or the accumulators may wrap before reduction.
pub(crate) fn update_blocked(prior: Checksum, data: &[u8], block: usize) -> Checksum {
    debug_assert!(block > 0 && block <= NMAX);
    let mut s1 = prior.0 & 0xffff;
    let mut s2 = prior.0 >> 16;

    for chunk in data.chunks(block) {
        for &x in chunk {
            s1 = s1.wrapping_add(x as u32);
            s2 = s2.wrapping_add(s1);
        }
        s1 %= MOD;
        s2 %= MOD;
    }

    Checksum((s2 << 16) | s1)
}
