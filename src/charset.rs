//! Allow-lists of 16-bit values.
//!
//! A [`Charset`] holds every two-byte combination whose high and low byte
//! both belong to a set of allowed bytes. The combinations are kept sorted so
//! membership is a binary search.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::error::{Error, Result};

/// Exact-match membership over 16-bit values.
pub trait AllowedSet {
    fn contains_value(&self, value: u16) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    allowed: Vec<u8>,
    combinations: Vec<u16>,
}

const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

impl Charset {
    /// Build the combinations of every ordered pair of `allowed` bytes.
    ///
    /// Duplicate bytes are ignored.
    pub fn from_bytes(allowed: &[u8]) -> Self {
        let mut allowed = allowed.to_vec();
        allowed.sort_unstable();
        allowed.dedup();

        let mut combinations = Vec::with_capacity(allowed.len() * allowed.len());
        // `allowed` is sorted, so the nested loop already yields ascending values.
        for &hi in &allowed {
            for &lo in &allowed {
                combinations.push(u16::from_be_bytes([hi, lo]));
            }
        }

        debug!(
            bytes = allowed.len(),
            combinations = combinations.len(),
            "built charset"
        );
        Charset {
            allowed,
            combinations,
        }
    }

    /// `[0-9A-Za-z]`.
    pub fn alphanumeric() -> Self {
        Self::from_bytes(ALPHANUMERIC)
    }

    /// Wrap a precomputed list of combinations.
    ///
    /// The list must be strictly ascending. `allowed_bytes` is left empty
    /// since the combinations need not form a full byte product.
    pub fn from_combinations(combinations: Vec<u16>) -> Result<Self> {
        if let Some(pos) = combinations.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::Charset(format!(
                "combinations not strictly ascending at index {}: {:#06x} then {:#06x}",
                pos + 1,
                combinations[pos],
                combinations[pos + 1]
            )));
        }
        debug!(combinations = combinations.len(), "loaded charset combinations");
        Ok(Charset {
            allowed: Vec::new(),
            combinations,
        })
    }

    pub fn combinations(&self) -> &[u16] {
        &self.combinations
    }

    pub fn allowed_bytes(&self) -> &[u8] {
        &self.allowed
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::alphanumeric()
    }
}

impl AllowedSet for Charset {
    fn contains_value(&self, value: u16) -> bool {
        crate::predicate::s_allowed(value, self)
    }
}

impl AllowedSet for HashSet<u16> {
    fn contains_value(&self, value: u16) -> bool {
        self.contains(&value)
    }
}

impl AllowedSet for BTreeSet<u16> {
    fn contains_value(&self, value: u16) -> bool {
        self.contains(&value)
    }
}

impl<S: AllowedSet + ?Sized> AllowedSet for &S {
    fn contains_value(&self, value: u16) -> bool {
        (**self).contains_value(value)
    }
}
