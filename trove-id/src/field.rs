//! Bit field descriptors over the big-endian `u128` form of an id.

/// A contiguous run of bits inside a `u128`.
///
/// Bit 0 is the least significant bit, so in the big-endian form byte 0 of
/// the id occupies bits 120..=127.
///
/// # Example
///
/// ```
/// use trove_id::Field;
///
/// const NIBBLE: Field = Field::new(4, 4); // bits 4-7
///
/// let packed = NIBBLE.set(0, 0xA);
/// assert_eq!(packed, 0xA0);
/// assert_eq!(NIBBLE.get(packed), 0xA);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    start: u32,
    len: u32,
    mask: u128,
}

impl Field {
    /// Creates a field at bit position `start` with width `len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0 or `start + len` exceeds 128.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        assert!(len > 0, "field length must be > 0");
        assert!(start + len <= u128::BITS, "field exceeds integer bounds");

        let unshifted = if len == u128::BITS {
            !0
        } else {
            (1 << len) - 1
        };

        Self {
            start,
            len,
            mask: unshifted << start,
        }
    }

    /// Start bit position.
    #[inline]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Field width in bits.
    #[inline]
    pub const fn len(self) -> u32 {
        self.len
    }

    /// Mask with 1s in field position.
    #[inline]
    pub const fn mask(self) -> u128 {
        self.mask
    }

    /// Maximum value this field can hold.
    #[inline]
    pub const fn max_value(self) -> u128 {
        self.mask >> self.start
    }

    /// Extracts the field value.
    #[inline]
    pub const fn get(self, val: u128) -> u128 {
        (val & self.mask) >> self.start
    }

    /// Replaces the field with the low `len` bits of `field_val`.
    ///
    /// Higher bits of `field_val` are dropped.
    #[inline]
    pub const fn set(self, val: u128, field_val: u128) -> u128 {
        (val & !self.mask) | ((field_val << self.start) & self.mask)
    }
}
