//! Metering state
//!
//! The cached record of how much gated content a reader has consumed.
//! Persisted as one whole JSON value; there is no partial update.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single metering signal (a view, a grace period, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeteringAttribute {
    /// Signal name
    pub name: String,
    /// When the signal was recorded, as provided by the caller
    pub timestamp: String,
}

impl MeteringAttribute {
    /// Create an attribute with an explicit timestamp
    pub fn new(name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Create an attribute stamped with the current UTC time (RFC 3339)
    pub fn now(name: impl Into<String>) -> Self {
        Self::new(name, Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Metering state for a single publication.
///
/// Attributes keep insertion order and are not deduplicated here;
/// that is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteringState {
    /// Publication/article context identifier
    pub id: String,
    /// Accrued metering signals, oldest first
    pub attributes: Vec<MeteringAttribute>,
}

impl MeteringState {
    /// Create an empty state for a publication
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute (builder form)
    pub fn with_attribute(mut self, attribute: MeteringAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append an attribute
    pub fn push_attribute(&mut self, attribute: MeteringAttribute) {
        self.attributes.push(attribute);
    }

    /// Number of recorded signals with the given name
    pub fn count(&self, name: &str) -> usize {
        self.attributes.iter().filter(|a| a.name == name).count()
    }
}
