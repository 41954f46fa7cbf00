//! Foundational primitive types and byte/serde helpers.

mod field;
mod identity;
mod utils;

pub use field::{FIELD_SIZE, FieldRepr};
pub use identity::{IDENTITY_KEY_SIZE, IdentityKey};
pub use utils::{ParseHexError, parse_hex_array};
