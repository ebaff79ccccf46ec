//! Sample Value Types
//!
//! Numeric values as stored per data element:
//! - `UnsignedLong`: the full unsigned 64-bit range over native signed
//!   storage, with unsigned ordering and arbitrary-precision interop

pub mod unsigned_long;

pub use unsigned_long::UnsignedLong;
