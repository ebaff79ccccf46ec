//! Unsigned 64-bit values over signed storage
//!
//! `UnsignedLong` keeps a value in `[0, 2^64 - 1]` inside a native `i64`
//! cell. The bit pattern is shared with the signed interpretation, so
//! `get` can read negative; ordering, printing, and the
//! arbitrary-precision accessors reinterpret the same bits as unsigned.
//!
//! # Example
//!
//! ```
//! use ndpixel::value::UnsignedLong;
//!
//! // Bit pattern -1 is the unsigned maximum.
//! let max = UnsignedLong::new(-1);
//! let one = UnsignedLong::new(1);
//! assert!(max > one);
//! assert_eq!(max.to_string(), "18446744073709551615");
//! ```

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Unsigned 64-bit value emulated over an `i64` storage cell
///
/// The cell holds the value's raw bit pattern. Storing and reading raw
/// bits never transforms them; comparison, hashing-compatible equality,
/// and the arbitrary-precision conversions define the unsigned meaning
/// of those bits. Every instance owns its own cell, and mutation happens
/// only through the explicit `set` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UnsignedLong {
    bits: i64,
}

impl UnsignedLong {
    /// Smallest value (zero), bit pattern `0`
    pub const MIN: UnsignedLong = UnsignedLong { bits: 0 };

    /// Largest value (`2^64 - 1`), bit pattern `-1`
    pub const MAX: UnsignedLong = UnsignedLong { bits: -1 };

    /// Create a value from a raw 64-bit pattern
    ///
    /// The pattern is stored unchanged. A negative `bits` reads back as
    /// `2^64 + bits` under the unsigned interpretation.
    pub fn new(bits: i64) -> Self {
        Self { bits }
    }

    /// Create a value from an arbitrary-precision integer
    ///
    /// Keeps `v mod 2^64`: oversized and negative inputs truncate to
    /// their low 64 bits silently. That narrowing is the contract, not a
    /// failure mode.
    pub fn from_big_int(v: &BigInt) -> Self {
        Self {
            bits: low_64_bits(v) as i64,
        }
    }

    /// The raw bit pattern under signed interpretation
    ///
    /// Values above `i64::MAX` read negative here by design; use
    /// [`UnsignedLong::to_u64`] or [`UnsignedLong::to_big_int`] for the
    /// unsigned magnitude.
    pub fn get(&self) -> i64 {
        self.bits
    }

    /// Store a raw 64-bit pattern
    pub fn set(&mut self, bits: i64) {
        self.bits = bits;
    }

    /// Store the low 64 bits of an arbitrary-precision integer
    ///
    /// Same truncation contract as [`UnsignedLong::from_big_int`].
    pub fn set_big_int(&mut self, v: &BigInt) {
        self.bits = low_64_bits(v) as i64;
    }

    /// The value as a native `u64`
    pub fn to_u64(&self) -> u64 {
        self.bits as u64
    }

    /// The value as a non-negative arbitrary-precision integer
    ///
    /// Always in `[0, 2^64 - 1]`. For a bit pattern reading negative via
    /// [`UnsignedLong::get`], the result equals `2^64 + get()`.
    pub fn to_big_int(&self) -> BigInt {
        BigInt::from(self.bits as u64)
    }

    /// The value as an unsigned arbitrary-precision integer
    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from(self.bits as u64)
    }
}

/// Low 64 bits of the two's complement representation of `v`
///
/// Bitwise ops on `BigInt` treat negative values as infinite two's
/// complement, so masking yields a non-negative result that always fits.
fn low_64_bits(v: &BigInt) -> u64 {
    (v & &BigInt::from(u64::MAX)).to_u64().unwrap_or(0)
}

impl Ord for UnsignedLong {
    /// Unsigned ordering over the stored bit patterns
    ///
    /// Signed comparison misorders operands when exactly one has its top
    /// bit set, so both patterns get the sign bit flipped first; signed
    /// order of the flipped patterns is unsigned order of the originals.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.bits ^ i64::MIN).cmp(&(other.bits ^ i64::MIN))
    }
}

impl PartialOrd for UnsignedLong {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Conversions from primitive and arbitrary-precision types

impl From<i64> for UnsignedLong {
    fn from(bits: i64) -> Self {
        Self { bits }
    }
}

impl From<u64> for UnsignedLong {
    fn from(value: u64) -> Self {
        Self { bits: value as i64 }
    }
}

impl From<&BigInt> for UnsignedLong {
    fn from(v: &BigInt) -> Self {
        Self::from_big_int(v)
    }
}

impl From<UnsignedLong> for u64 {
    fn from(value: UnsignedLong) -> u64 {
        value.to_u64()
    }
}

impl From<UnsignedLong> for BigUint {
    fn from(value: UnsignedLong) -> BigUint {
        value.to_big_uint()
    }
}

// Display implementation

impl fmt::Display for UnsignedLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits as u64)
    }
}
