//! Content Loader
//!
//! Reads a JSON array of round records, validates every record, and hands
//! back the rounds in source order. Either the whole dataset is valid or
//! loading fails; no partial content is ever returned.
//!
//! Checks per record, in order:
//! 1. `trigger_fragment` present and non-empty
//! 2. `category` present and non-empty
//! 3. `technique` present and non-empty
//! 4. `trigger_fragment` occurs verbatim (case-sensitive) in `argument_text`
//! 5. `id` not already used by an earlier record

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::content::record::{RawRoundRecord, RoundId, RoundRecord};
use crate::core::hash::{to_hex, ContentHasher};

/// A record field checked by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordField {
    /// `trigger_fragment`
    TriggerFragment,
    /// `category`
    Category,
    /// `technique`
    Technique,
}

impl RecordField {
    /// Field name as written in the content source.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::TriggerFragment => "trigger_fragment",
            RecordField::Category => "category",
            RecordField::Technique => "technique",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A round record that breaks a content invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent or empty.
    #[error("missing '{field}' in item {id}")]
    MissingField {
        /// Offending record
        id: RoundId,
        /// Field that is absent or empty
        field: RecordField,
    },

    /// Trigger fragment is not a substring of the argument text.
    #[error("trigger fragment '{fragment}' not found in argument text for item ID {id}")]
    FragmentNotFound {
        /// Offending record
        id: RoundId,
        /// The fragment that could not be located
        fragment: String,
    },

    /// Two records share an id.
    #[error("duplicate id {id}")]
    DuplicateId {
        /// The repeated id
        id: RoundId,
    },
}

impl ValidationError {
    /// Id of the record that failed validation.
    pub fn record_id(&self) -> &RoundId {
        match self {
            ValidationError::MissingField { id, .. }
            | ValidationError::FragmentNotFound { id, .. }
            | ValidationError::DuplicateId { id } => id,
        }
    }
}

/// Content loading errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content source does not exist.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Requested location
        path: PathBuf,
    },

    /// Content source exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Requested location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Content is not a well-formed array of records.
    #[error("malformed content in {}: {source}", path.display())]
    Parse {
        /// Requested location
        path: PathBuf,
        /// Underlying JSON failure
        #[source]
        source: serde_json::Error,
    },

    /// A record breaks a content invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Load and validate round records from a JSON file.
///
/// Round order is the order of records in the file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<RoundRecord>, ContentError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ContentError::NotFound { path: path.to_path_buf() });
    }

    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ContentError::NotFound { path: path.to_path_buf() },
        _ => ContentError::Io { path: path.to_path_buf(), source },
    })?;

    let raw: Vec<RawRoundRecord> = serde_json::from_str(&text)
        .map_err(|source| ContentError::Parse { path: path.to_path_buf(), source })?;

    let rounds = validate(raw)?;

    info!(
        "Loaded {} rounds from {} (digest {})",
        rounds.len(),
        path.display(),
        &content_digest(&rounds)[..12]
    );

    Ok(rounds)
}

/// Parse and validate an in-memory JSON document.
///
/// `origin` only labels parse errors.
pub fn parse(text: &str, origin: impl Into<PathBuf>) -> Result<Vec<RoundRecord>, ContentError> {
    let raw: Vec<RawRoundRecord> = serde_json::from_str(text)
        .map_err(|source| ContentError::Parse { path: origin.into(), source })?;
    Ok(validate(raw)?)
}

/// Validate parsed records, stopping at the first violation.
pub fn validate(raw: Vec<RawRoundRecord>) -> Result<Vec<RoundRecord>, ValidationError> {
    let mut seen = HashSet::new();
    let mut rounds = Vec::with_capacity(raw.len());

    for record in raw {
        let round = validate_record(record)?;

        if !seen.insert(round.id.clone()) {
            return Err(ValidationError::DuplicateId { id: round.id });
        }

        debug!("Validated round {} ({} / {})", round.id, round.category, round.technique);
        rounds.push(round);
    }

    Ok(rounds)
}

fn validate_record(raw: RawRoundRecord) -> Result<RoundRecord, ValidationError> {
    let RawRoundRecord {
        id,
        claim,
        argument_text,
        trigger_fragment,
        category,
        technique,
        antidote,
    } = raw;

    let trigger_fragment = require(&id, RecordField::TriggerFragment, trigger_fragment)?;
    let category = require(&id, RecordField::Category, category)?;
    let technique = require(&id, RecordField::Technique, technique)?;

    if !argument_text.contains(trigger_fragment.as_str()) {
        return Err(ValidationError::FragmentNotFound { id, fragment: trigger_fragment });
    }

    Ok(RoundRecord {
        id,
        claim,
        argument_text,
        trigger_fragment,
        category,
        technique,
        antidote,
    })
}

fn require(id: &RoundId, field: RecordField, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { id: id.clone(), field }),
    }
}

/// Hex SHA-256 fingerprint of a validated dataset.
pub fn content_digest(rounds: &[RoundRecord]) -> String {
    let mut hasher = ContentHasher::for_rounds();
    hasher.update_u64(rounds.len() as u64);
    for round in rounds {
        round.hash_into(&mut hasher);
    }
    to_hex(&hasher.finalize())
}
