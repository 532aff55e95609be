//! Versioned serialization of skin definitions.
//!
//! The core performs no I/O: an external loader owns the bytes, this module
//! owns the schema. The payload is the [`SkinDefinition`] serde tree wrapped
//! in an envelope carrying the format version.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SkinDefinition;

/// Schema version written by [`to_json`].
pub const FORMAT_VERSION: u32 = 1;

/// Errors produced when decoding a persisted skin definition.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unsupported skin format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("malformed skin definition: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Envelope for the persisted form of a skin definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinAsset {
    /// Schema version, bumped on incompatible changes.
    pub version: u32,
    /// The definition payload.
    pub definition: SkinDefinition,
}

/// Encode a definition at the current format version.
pub fn to_json(definition: &SkinDefinition) -> Result<String, AssetError> {
    let asset = SkinAsset {
        version: FORMAT_VERSION,
        definition: definition.clone(),
    };
    Ok(serde_json::to_string_pretty(&asset)?)
}

/// Decode a definition, rejecting unknown format versions.
pub fn from_json(json: &str) -> Result<SkinDefinition, AssetError> {
    let asset: SkinAsset = serde_json::from_str(json)?;
    if asset.version != FORMAT_VERSION {
        return Err(AssetError::UnsupportedVersion {
            found: asset.version,
            supported: FORMAT_VERSION,
        });
    }
    Ok(asset.definition)
}
