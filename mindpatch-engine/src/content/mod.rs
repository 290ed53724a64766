//! Content Module
//!
//! Round records and the loader that validates them before a session may
//! start.
//!
//! ## Module Structure
//!
//! - `record`: Raw and validated round records, round ids
//! - `loader`: File loading, validation, dataset digest

pub mod loader;
pub mod record;

// Re-export key types
pub use loader::{load, parse, validate, content_digest, ContentError, ValidationError, RecordField};
pub use record::{RawRoundRecord, RoundId, RoundRecord};
