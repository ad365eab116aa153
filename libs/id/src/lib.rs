//! # stamp-id
//!
//! Human-readable, mostly-unique identifiers.
//!
//! ## ID Format
//!
//! An identifier is the non-empty subset of these components, in order,
//! joined by a separator (default `.`):
//!
//! 1. prefix (trimmed; omitted when blank)
//! 2. epoch-millisecond timestamp (omitted when disabled)
//! 3. random base-36 segment (omitted when its length is zero)
//! 4. suffix (trimmed; omitted when blank)
//!
//! Examples:
//! - `1725026144072.8rp09zp5ewa4z`
//! - `ID-1725026185691-128g0f6vdhyh5`
//! - `ID-1725026458372-UIH1JU9NT1-END`
//!
//! The random segment uses a non-cryptographic rng. Do not use these IDs as
//! secrets; plug a secure [`RandomSource`] into [`IdGenerator`] if
//! unpredictability matters.

mod error;
mod generator;
mod options;
mod source;

pub use error::IdError;
pub use generator::{generate, generate_default, IdGenerator, ALPHABET};
pub use options::{CaseOption, GenerationOptions, DEFAULT_RANDOM_LENGTH, DEFAULT_SEPARATOR};
pub use source::{Clock, FixedClock, FixedDraws, RandomSource, RngSource, SystemClock, ThreadRandom};
