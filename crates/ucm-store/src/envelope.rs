//! Versioned on-disk payload.
//!
//! Every saved file wraps the configuration in an envelope naming the
//! schema, its version, and the save time, so a future build can migrate
//! old payloads and an old build can recognize payloads it should not
//! touch.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ucm_model::CurveConfig;

/// Schema identifier written into every saved file.
pub const SCHEMA_NAME: &str = "ucm.curve-config";

/// Version this build writes, and the highest it reads.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// On-disk wrapper around a configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub schema: String,
    pub schema_version: u32,
    /// RFC 3339 timestamp of the save.
    pub saved_at: String,
    pub config: CurveConfig,
}

impl Envelope {
    /// Wrap a configuration for writing, stamping the current time.
    pub fn wrap(config: CurveConfig) -> Self {
        Self {
            schema: SCHEMA_NAME.to_string(),
            schema_version: CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            config,
        }
    }
}

/// Decode a stored payload, refusing foreign or newer-versioned files.
///
/// The reason string feeds the load-path diagnostics; callers fall back to
/// defaults rather than propagate it.
pub fn decode(content: &str) -> std::result::Result<CurveConfig, String> {
    let envelope: Envelope = serde_json::from_str(content).map_err(|e| e.to_string())?;
    if envelope.schema != SCHEMA_NAME {
        return Err(format!("unexpected schema {:?}", envelope.schema));
    }
    if envelope.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(format!(
            "payload version {} is newer than supported version {}",
            envelope.schema_version, CURRENT_SCHEMA_VERSION
        ));
    }
    Ok(envelope.config)
}
