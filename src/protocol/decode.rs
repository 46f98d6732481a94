//! Message decoding

use crate::types::{Kind, Message};
use thiserror::Error;

/// Width of the tag prefix in bytes
pub const TAG_LEN: usize = 3;

/// A reply that carries no actionable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The first three bytes are not a known tag (or the body is shorter)
    #[error("unrecognized message tag in {raw:?}")]
    UnrecognizedTag {
        /// Full reply body
        raw: String,
    },
}

/// Decode a raw response body into a tagged message
///
/// The payload is everything after the tag, passed through unmodified.
pub fn decode(raw: &str) -> Result<Message, DecodeError> {
    let kind = raw
        .get(..TAG_LEN)
        .and_then(Kind::from_tag)
        .ok_or_else(|| DecodeError::UnrecognizedTag {
            raw: raw.to_string(),
        })?;

    Ok(Message {
        kind,
        payload: raw[TAG_LEN..].to_string(),
    })
}
