//! Time-ordered 128-bit identifiers.
//!
//! `trove-id` builds identifiers in the UUID version 7 layout: a 48-bit
//! millisecond Unix timestamp in the most significant bytes, fixed version and
//! variant markers, and random bits everywhere else. Sorting ids by their bytes
//! sorts them by creation time, to the millisecond.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use trove_id::Uuid;
//!
//! let a = Uuid::now_v7();
//! assert!(a.is_v7());
//!
//! let text = a.to_string(); // e.g. "01891234-5678-7bab-abab-abababababab"
//! assert_eq!(text.len(), 36);
//! assert_eq!(text.parse::<Uuid>(), Ok(a));
//! # }
//! ```
//!
//! # Deterministic Generation
//!
//! [`Uuid::now_v7`] reads the wall clock and the thread-local RNG. For tests
//! or replay, pass both in explicitly:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use trove_id::{FixedClock, Uuid};
//!
//! let clock = FixedClock(1_700_000_000_000);
//! let a = Uuid::new_v7(&clock, &mut SmallRng::seed_from_u64(1));
//! let b = Uuid::new_v7(&clock, &mut SmallRng::seed_from_u64(1));
//!
//! assert_eq!(a, b);
//! assert_eq!(a.timestamp_ms(), 1_700_000_000_000);
//! ```
//!
//! # Uniqueness
//!
//! There is no shared counter. Ids from the same millisecond are told apart
//! by their 74 random bits alone, so collisions are improbable but possible.
//!
//! # Feature Flags
//!
//! - `std` (default) - [`SystemClock`], [`Uuid::now_v7`], `std::error::Error`
//! - `serde` - `Serialize`/`Deserialize` as the hyphenated string

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

mod clock;
mod error;
mod field;
mod uuid;

#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use error::ParseError;
pub use field::Field;
pub use uuid::{TIMESTAMP, Uuid, VARIANT, VARIANT_RFC, VERSION, VERSION_7};
