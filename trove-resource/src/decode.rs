//! The decode pipeline shared by files and in-memory strings.

use serde::de::{self, DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::ResourceError;
use crate::options::{DecodeOptions, KeyStrategy};

/// Decodes `json` into `T`, reporting failures against `name`.
///
/// # Errors
///
/// Returns [`ResourceError::Syntax`] for malformed JSON and
/// [`ResourceError::Data`] when the JSON does not fit `T`. Under
/// [`KeyStrategy::ConvertFromCamelCase`], two keys of one object that convert
/// to the same name (`fooBar` and `foo_bar`) are also a `Data` error.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use trove_resource::{DecodeOptions, KeyStrategy, decode_str};
///
/// #[derive(Deserialize)]
/// struct Star {
///     display_name: String,
///     max_rating: u8,
/// }
///
/// let options = DecodeOptions::new().key_strategy(KeyStrategy::ConvertFromCamelCase);
/// let star: Star = decode_str("star.json", r#"{"displayName":"Vega","maxRating":5}"#, &options)?;
///
/// assert_eq!(star.display_name, "Vega");
/// assert_eq!(star.max_rating, 5);
/// # Ok::<(), trove_resource::ResourceError>(())
/// ```
pub fn decode_str<T: DeserializeOwned>(
    name: &str,
    json: &str,
    options: &DecodeOptions,
) -> Result<T, ResourceError> {
    decode_slice(name, json.as_bytes(), options)
}

pub(crate) fn decode_slice<T: DeserializeOwned>(
    name: &str,
    data: &[u8],
    options: &DecodeOptions,
) -> Result<T, ResourceError> {
    match options.key_strategy {
        KeyStrategy::UseDefaultKeys => {
            serde_json::from_slice(data).map_err(|err| ResourceError::from_json(name, err))
        }
        KeyStrategy::ConvertFromCamelCase => {
            let value: Value =
                serde_json::from_slice(data).map_err(|err| ResourceError::from_json(name, err))?;
            snake_case_keys(value)
                .and_then(serde_json::from_value)
                .map_err(|err| ResourceError::from_json(name, err))
        }
    }
}

/// Rewrites every object key in `value` to snake case.
///
/// Fails if two keys of one object convert to the same name.
fn snake_case_keys(value: Value) -> Result<Value, serde_json::Error> {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                let snake = to_snake_case(&key);
                if out.contains_key(&snake) {
                    return Err(de::Error::custom(format_args!(
                        "key `{key}` collides with another key as `{snake}`"
                    )));
                }
                out.insert(snake, snake_case_keys(value)?);
            }
            Ok(Value::Object(out))
        }
        Value::Array(items) => items
            .into_iter()
            .map(snake_case_keys)
            .collect::<Result<_, _>>()
            .map(Value::Array),
        other => Ok(other),
    }
}

/// `camelCase` -> `camel_case`.
///
/// A run of capitals is one word, split before its last letter when a
/// lowercase letter follows: `userID` -> `user_id`, `URLValue` -> `url_value`.
fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (idx, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && idx > 0 {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
