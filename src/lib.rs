//! Adler-32 checksums and a charset-constrained validity predicate.
//!
//! [`checksum`] and [`update`] compute the running checksum. The predicate
//! functions decide whether a checksum's high word is a valid two-byte UTF-8
//! sequence and its low word a member of an allow-list ([`Charset`]).

pub mod charset;
pub mod checksum;
pub mod config;
pub mod error;
pub mod predicate;

pub use charset::{AllowedSet, Charset};
pub use checksum::{checksum, s1, s2, update, Checksum, MOD};
pub use config::CharsetConfig;
pub use error::{Error, Result};
pub use predicate::{
    checksum_allowed, is_utf8, judge, s1_s2_allowed, s1_s2_allowed_in, s_allowed,
    s_allowed_utf8, Verdict, MIN_UTF8_PAIR,
};
