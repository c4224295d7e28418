//! Types exchanged with the subscription orchestrator
//!
//! These are the shapes the facade passes through untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score factors keyed by platform key
pub type ScoreFactorStates = serde_json::Map<String, serde_json::Value>;

/// Why an entitlement was granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrantReason {
    Subscriber,
    Metering,
    Free,
    Unlocked,
}

/// A grant resolved by a local or remote platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entitlement {
    /// Where the entitlement came from
    pub source: String,
    /// Platform key of the resolving platform
    pub platform_key: String,
    /// Whether access is granted
    pub granted: bool,
    pub grant_reason: Option<GrantReason>,
    /// Platform-specific payload
    pub data: Option<serde_json::Value>,
}

impl Entitlement {
    /// An empty, non-granting entitlement for a platform
    pub fn empty(platform_key: impl Into<String>) -> Self {
        Self {
            source: String::new(),
            platform_key: platform_key.into(),
            granted: false,
            grant_reason: None,
            data: None,
        }
    }

    pub fn is_subscriber(&self) -> bool {
        self.granted && self.grant_reason == Some(GrantReason::Subscriber)
    }
}

/// Publication configuration of the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub publication_id: String,
    pub product_id: Option<String>,
    /// Whether the page content is gated
    pub is_locked: bool,
}

/// Handle to a UI element that a platform may decorate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionElement {
    pub id: String,
    pub attributes: BTreeMap<String, String>,
}

impl ActionElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}
