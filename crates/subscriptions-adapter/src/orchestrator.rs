//! Orchestrator surface
//!
//! The central subscription service owns platforms, entitlements and the
//! metering capability. The facade depends on it only through this trait.

use async_trait::async_trait;
use std::sync::Arc;

use subscriptions_common::{ActionElement, Entitlement, PageConfig, Result, ScoreFactorStates};
use subscriptions_metering::Metering;

/// Analytics sink for subscription events
pub trait SubscriptionAnalytics: Send + Sync {
    fn event(&self, name: &str, params: &serde_json::Value);
}

/// The shared subscription dialog
pub trait Dialog: Send + Sync {
    fn is_open(&self) -> bool;
    fn close(&self);
}

/// A local or remote subscription platform
pub trait SubscriptionPlatform: Send + Sync {
    fn platform_key(&self) -> &str;
}

#[async_trait]
pub trait Orchestrator: Send + Sync {
    fn analytics(&self) -> Arc<dyn SubscriptionAnalytics>;

    async fn all_platforms_entitlements(&self) -> Result<Vec<Entitlement>>;

    fn dialog(&self) -> Arc<dyn Dialog>;

    fn encrypted_document_key(&self, platform_key: &str) -> Option<String>;

    fn page_config(&self) -> PageConfig;

    async fn reader_id(&self, platform_key: &str) -> Result<String>;

    async fn score_factor_states(&self) -> Result<ScoreFactorStates>;

    async fn delegate_action_to_service(
        &self,
        action: &str,
        platform_key: &str,
        source_id: Option<&str>,
    ) -> Result<bool>;

    fn decorate_service_action(
        &self,
        element: &ActionElement,
        platform_key: &str,
        action: &str,
        options: Option<&serde_json::Value>,
    );

    /// Re-authorize all platforms
    fn reset_platforms(&self);

    fn select_platform_for_login(&self) -> Arc<dyn SubscriptionPlatform>;

    /// The metering capability, if one is installed for this document.
    /// Absent is distinct from installed-but-disabled.
    fn metering(&self) -> Option<Arc<Metering>>;
}
