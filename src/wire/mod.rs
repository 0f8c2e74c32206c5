//! Wire-format layer: ordered JSON documents and tokenized enums.
//!
//! Everything a response body goes through before it becomes a typed
//! resource lives here:
//!
//! - [`WireObject`]: an ordered string-keyed view of one JSON object with
//!   lazy typed extraction
//! - [`WireEnum`]: string-token enums with a forward-compatible catch-all
//! - [`DecodeError`]: the parse / absent / mismatch error taxonomy

mod document;
mod enums;
mod errors;

pub use document::WireObject;
pub use enums::WireEnum;
pub use errors::DecodeError;
