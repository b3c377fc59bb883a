//! Unique identifier generation
//!
//! Study, series, frame of reference and SOP instance UIDs are produced by a
//! [`UidGenerator`]. The default implementation derives UIDs from random
//! UUIDs under the `2.25` root (ISO/IEC 9834-8).

use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

/// Maximum length of a UID value
pub const MAX_UID_LEN: usize = 64;

/// UID root for UUID-derived identifiers
pub const UUID_UID_ROOT: &str = "2.25";

/// UID identifying this implementation in the file meta group
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.248347301846715338394560417725640131923";

/// Source of globally unique identifiers
pub trait UidGenerator: Send + Sync {
    /// Produces a fresh UID on every call
    fn generate(&self) -> String;
}

/// Generates `2.25.<uuid as decimal>` identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidUidGenerator;

impl UidGenerator for UuidUidGenerator {
    fn generate(&self) -> String {
        format!("{}.{}", UUID_UID_ROOT, Uuid::new_v4().as_u128())
    }
}

/// Generates a fresh UID with the default generator
pub fn generate_uid() -> String {
    UuidUidGenerator.generate()
}

/// Checks that a UID is well formed
///
/// Components are digits separated by dots, without leading zeros
/// (except for a lone `0`), and the whole value fits in 64 characters.
pub fn is_valid_uid(uid: &str) -> bool {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^(0|[1-9]\d*)(\.(0|[1-9]\d*))*$").expect("Failed to compile regex")
    });
    uid.len() <= MAX_UID_LEN && re.is_match(uid)
}
