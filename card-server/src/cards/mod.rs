//! Card domain logic
//!
//! - [`signing`] - truncated keyed digest binding a record to the shared secret
//! - [`issue`] - issuance: validate, normalize, sign, persist
//! - [`verify`] - verification policy over a decoded token and the store

pub mod issue;
pub mod signing;
pub mod verify;

pub use issue::issue_card;
pub use signing::card_tag;
pub use verify::verify_card;
