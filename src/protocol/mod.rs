//! Wire protocol shared with the laspad server
//!
//! Every response body is `<TAG><PAYLOAD>`: a three-character tag followed
//! by the payload, one message per HTTP response.

mod decode;
pub mod endpoint;

pub use decode::{decode, DecodeError, TAG_LEN};
