//! Card tag computation
//!
//! The "signature" printed into a card token is the first 15 hex characters
//! of `SHA-256(name || ref_id || secret)` with no separators. The truncation
//! (60 bits) keeps the QR payload small and is fixed by the tokens already in
//! the field; it is an integrity tag, not collision-resistant at scale and
//! not an authenticity guarantee against anyone holding the shared secret.

use sha2::{Digest, Sha256};

/// Length of the tag in hex characters
pub const TAG_LEN: usize = 15;

/// Compute the card tag for a record
///
/// Deterministic: the same inputs always produce the same tag.
pub fn card_tag(name: &str, ref_id: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(ref_id.as_bytes());
    hasher.update(secret.as_bytes());
    let mut digest = hex::encode(hasher.finalize());
    digest.truncate(TAG_LEN);
    digest
}
