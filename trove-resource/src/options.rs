//! Decoding options.

/// How JSON object keys map onto Rust field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Use keys exactly as written in the file.
    #[default]
    UseDefaultKeys,
    /// Rewrite `camelCase` keys to `snake_case` before decoding, at every
    /// nesting level. Keys that are already snake case are left alone.
    ConvertFromCamelCase,
}

/// Options for [`ResourceDir::decode_with`](crate::ResourceDir::decode_with)
/// and [`decode_str`](crate::decode_str).
///
/// # Example
///
/// ```
/// use trove_resource::{DecodeOptions, KeyStrategy};
///
/// let options = DecodeOptions::new().key_strategy(KeyStrategy::ConvertFromCamelCase);
/// assert_eq!(options.key_strategy, KeyStrategy::ConvertFromCamelCase);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Key mapping applied before deserializing.
    pub key_strategy: KeyStrategy,
}

impl DecodeOptions {
    /// Default options: keys used as written.
    pub const fn new() -> Self {
        Self {
            key_strategy: KeyStrategy::UseDefaultKeys,
        }
    }

    /// Sets the key strategy.
    #[must_use]
    pub const fn key_strategy(mut self, key_strategy: KeyStrategy) -> Self {
        self.key_strategy = key_strategy;
        self
    }
}
