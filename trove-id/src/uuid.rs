//! The [`Uuid`] type and version 7 generation.

use core::fmt::{self, Write as _};
use core::str::FromStr;

use rand_core::RngCore;

use crate::clock::Clock;
use crate::error::ParseError;
use crate::field::Field;

/// Milliseconds since the Unix epoch: bytes 0-5.
pub const TIMESTAMP: Field = Field::new(80, 48);

/// Version nibble: top four bits of byte 6.
pub const VERSION: Field = Field::new(76, 4);

/// Variant: top two bits of byte 8.
pub const VARIANT: Field = Field::new(62, 2);

/// Version marker written by [`Uuid::new_v7`].
pub const VERSION_7: u8 = 7;

/// Variant marker (`0b10`) written by [`Uuid::new_v7`].
pub const VARIANT_RFC: u8 = 0b10;

/// Byte offsets of the `-` separators in the hyphenated text form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A 128-bit identifier.
///
/// Stored as 16 bytes, most significant first. Ordering compares the bytes
/// lexicographically, which for version 7 ids is timestamp order.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                         unix_ts_ms                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          unix_ts_ms           |  ver  |       rand_a          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |var|                        rand_b                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            rand_b                             |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use trove_id::{FixedClock, Uuid};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let id = Uuid::new_v7(&FixedClock(1_700_000_000_000), &mut rng);
///
/// assert!(id.is_v7());
/// assert_eq!(id.timestamp_ms(), 1_700_000_000_000);
///
/// let text = id.to_string();
/// assert_eq!(text.parse::<Uuid>(), Ok(id));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero id.
    pub const NIL: Self = Self([0; 16]);

    /// Builds a version 7 id from an explicit clock and random source.
    ///
    /// The low 48 bits of `clock.now_ms()` fill bytes 0-5, big-endian.
    /// Bytes 6-15 come from `rng`, after which the version and variant
    /// markers overwrite their bits. Two calls in the same millisecond
    /// differ only by their random bits.
    pub fn new_v7<C, R>(clock: &C, rng: &mut R) -> Self
    where
        C: Clock + ?Sized,
        R: RngCore + ?Sized,
    {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes[6..]);

        let mut value = u128::from_be_bytes(bytes);
        value = TIMESTAMP.set(value, u128::from(clock.now_ms()));
        value = VERSION.set(value, u128::from(VERSION_7));
        value = VARIANT.set(value, u128::from(VARIANT_RFC));

        Self::from_u128(value)
    }

    /// Builds a version 7 id from the system clock and the thread-local RNG.
    ///
    /// Calls share no state, so this is safe to call from any thread.
    #[cfg(feature = "std")]
    pub fn now_v7() -> Self {
        Self::new_v7(&crate::SystemClock, &mut rand::thread_rng())
    }

    /// Creates an id from its 16 bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns the 16 bytes, most significant first.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the id, returning its bytes.
    #[inline]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates an id from its big-endian integer form.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns the big-endian integer form.
    #[inline]
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns the embedded millisecond timestamp.
    ///
    /// Only meaningful for version 7 ids.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn timestamp_ms(&self) -> u64 {
        TIMESTAMP.get(self.as_u128()) as u64
    }

    /// Returns the version nibble.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn version(&self) -> u8 {
        VERSION.get(self.as_u128()) as u8
    }

    /// Returns the two variant bits.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn variant(&self) -> u8 {
        VARIANT.get(self.as_u128()) as u8
    }

    /// Returns `true` if both the version 7 and RFC variant markers are set.
    #[inline]
    pub const fn is_v7(&self) -> bool {
        self.version() == VERSION_7 && self.variant() == VARIANT_RFC
    }

    /// Returns `true` for [`Uuid::NIL`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(id: Uuid) -> Self {
        id.into_bytes()
    }
}

impl From<u128> for Uuid {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Uuid> for u128 {
    fn from(id: Uuid) -> Self {
        id.as_u128()
    }
}

impl fmt::Display for Uuid {
    /// Lowercase hyphenated form: `8-4-4-4-12` hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, byte) in self.0.iter().enumerate() {
            if matches!(idx, 4 | 6 | 8 | 10) {
                f.write_char('-')?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({self})")
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    /// Accepts the hyphenated (36 chars) or simple (32 chars) form, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let src = s.as_bytes();
        let hyphenated = match src.len() {
            32 => false,
            36 => true,
            len => return Err(ParseError::InvalidLength { len }),
        };

        let mut bytes = [0u8; 16];
        let mut nibble = 0;

        for (index, &c) in src.iter().enumerate() {
            if hyphenated && HYPHENS.contains(&index) {
                if c != b'-' {
                    return Err(ParseError::InvalidGroup { index });
                }
                continue;
            }

            let digit = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                b'A'..=b'F' => c - b'A' + 10,
                _ => {
                    // Everything before `index` was ASCII, so it's a char boundary.
                    let ch = s[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(ParseError::InvalidChar { ch, index });
                }
            };

            bytes[nibble / 2] |= if nibble % 2 == 0 { digit << 4 } else { digit };
            nibble += 1;
        }

        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UuidVisitor;

        impl serde::de::Visitor<'_> for UuidVisitor {
            type Value = Uuid;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hyphenated or simple hex UUID string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Uuid, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(UuidVisitor)
    }
}
