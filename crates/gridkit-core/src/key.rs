//! String keys for coordinate tuples.
//!
//! Searches key on [`Point`](crate::Point) directly; these helpers exist for
//! callers that need a plain string, e.g. to persist or print a visited set.

use std::error::Error as StdError;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Field separator used by [`tuple_to_key`].
pub const DELIMITER: char = ',';

/// Errors from decoding a key with [`key_to_tuple`].
#[derive(Debug, Error)]
pub enum KeyError {
    /// The key splits into a different number of fields than decoders given.
    #[error("key {key:?} has {found} fields but {expected} decoders were supplied")]
    Arity {
        key: String,
        expected: usize,
        found: usize,
    },
    /// A decoder rejected its field.
    #[error("key {key:?}: cannot decode field {index} ({segment:?})")]
    Field {
        key: String,
        index: usize,
        segment: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

/// Join `values` with [`DELIMITER`].
///
/// No escaping is done; values are expected to be integers.
pub fn tuple_to_key<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&v.to_string());
    }
    out
}

/// Split `key` on [`DELIMITER`] and decode field `i` with `decoders[i]`.
///
/// Every decoder produces the same `T`. For mixed keys such as `"3,7,^"`
/// (row, column, facing), decode into a shared enum with one `fn` decoder
/// per field, or split the key by hand.
///
/// # Errors
///
/// [`KeyError::Arity`] if the field count differs from `decoders.len()`,
/// [`KeyError::Field`] if a decoder fails.
pub fn key_to_tuple<T, E, F>(key: &str, decoders: &[F]) -> Result<Vec<T>, KeyError>
where
    F: Fn(&str) -> Result<T, E>,
    E: StdError + Send + Sync + 'static,
{
    let segments: Vec<&str> = key.split(DELIMITER).collect();
    if segments.len() != decoders.len() {
        return Err(KeyError::Arity {
            key: key.to_string(),
            expected: decoders.len(),
            found: segments.len(),
        });
    }
    segments
        .into_iter()
        .zip(decoders)
        .enumerate()
        .map(|(index, (segment, decode))| {
            decode(segment).map_err(|e| KeyError::Field {
                key: key.to_string(),
                index,
                segment: segment.to_string(),
                source: Box::new(e),
            })
        })
        .collect()
}

/// Stock decoder: parse a field with [`FromStr`].
pub fn decode<T: FromStr>(segment: &str) -> Result<T, T::Err> {
    segment.parse()
}
