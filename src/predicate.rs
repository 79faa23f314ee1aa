//! Charset-constrained validity of a checksum.
//!
//! A checksum passes when its high word `S2` reads as a valid, non-overlong
//! two-byte UTF-8 sequence and its low word `S1` is one of the allowed
//! combinations.

use tracing::trace;

use crate::charset::{AllowedSet, Charset};
use crate::checksum::Checksum;

/// `S2` must be strictly greater than this. `0xC080` is the overlong encoding
/// of NUL; every two-byte pair at or below it is invalid or overlong.
pub const MIN_UTF8_PAIR: u16 = 0xC080;

/// Why a checksum was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    /// High word is not a valid two-byte UTF-8 sequence above [`MIN_UTF8_PAIR`].
    S2NotUtf8,
    /// Low word is missing from the allow-list.
    S1NotInCharset,
}

impl Verdict {
    pub fn is_allowed(self) -> bool {
        self == Verdict::Allowed
    }
}

pub fn checksum_allowed(checksum: Checksum, charset: &Charset) -> bool {
    s1_s2_allowed(checksum.s1(), checksum.s2(), charset)
}

/// Same test as [`checksum_allowed`] on already decomposed words.
pub fn s1_s2_allowed(s1: u16, s2: u16, charset: &Charset) -> bool {
    s_allowed_utf8(s2) && s_allowed(s1, charset)
}

/// [`s1_s2_allowed`] against any membership structure.
pub fn s1_s2_allowed_in<S: AllowedSet + ?Sized>(s1: u16, s2: u16, set: &S) -> bool {
    s_allowed_utf8(s2) && set.contains_value(s1)
}

/// Whether `value` is literally present in the charset.
pub fn s_allowed(value: u16, charset: &Charset) -> bool {
    let combinations = charset.combinations();
    let idx = combinations.partition_point(|&c| c < value);
    // Past the end means every entry is smaller.
    idx < combinations.len() && combinations[idx] == value
}

pub fn s_allowed_utf8(value: u16) -> bool {
    value > MIN_UTF8_PAIR && is_utf8(value)
}

/// Validate `value` as a standalone two-byte buffer, high byte first.
///
/// Two ASCII bytes are also valid UTF-8; [`s_allowed_utf8`] excludes them
/// through its threshold.
pub fn is_utf8(value: u16) -> bool {
    std::str::from_utf8(&value.to_be_bytes()).is_ok()
}

/// Judge a checksum and report the first failing condition.
pub fn judge<S: AllowedSet + ?Sized>(checksum: Checksum, set: &S) -> Verdict {
    let (s1, s2) = (checksum.s1(), checksum.s2());
    let verdict = if !s_allowed_utf8(s2) {
        Verdict::S2NotUtf8
    } else if !set.contains_value(s1) {
        Verdict::S1NotInCharset
    } else {
        Verdict::Allowed
    };
    if !verdict.is_allowed() {
        trace!(%checksum, s1, s2, ?verdict, "checksum rejected");
    }
    verdict
}
