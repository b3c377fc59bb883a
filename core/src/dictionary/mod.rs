//! Tag dictionary extension
//!
//! - [`TagDictionaryEntry`]: one attribute definition
//! - [`PRIVATE_TAGS`]: the vendor private tag table
//! - [`TagRegistry`]: keyword/tag resolution over the standard dictionary
//!   plus registered extensions

pub mod entry;
pub mod private;
pub mod registry;

pub use entry::{tag_from_code, TagDefinition, TagDictionaryEntry};
pub use private::{private_tag_entries, PRIVATE_TAGS};
pub use registry::TagRegistry;
