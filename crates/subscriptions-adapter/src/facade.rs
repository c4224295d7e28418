//! Service facade contract
//!
//! Everything framework components may ask of the subscription service.

use async_trait::async_trait;
use std::sync::Arc;

use subscriptions_common::{
    ActionElement, Entitlement, MeteringState, PageConfig, Result, ScoreFactorStates,
};

use crate::orchestrator::{Dialog, SubscriptionAnalytics, SubscriptionPlatform};

#[async_trait]
pub trait ServiceFacade: Send + Sync {
    /// Analytics service for subscriptions
    fn get_analytics(&self) -> Arc<dyn SubscriptionAnalytics>;

    /// Entitlements from every platform
    async fn get_all_platforms_entitlements(&self) -> Result<Vec<Entitlement>>;

    fn get_dialog(&self) -> Arc<dyn Dialog>;

    fn get_encrypted_document_key(&self, platform_key: &str) -> Option<String>;

    fn get_page_config(&self) -> PageConfig;

    async fn get_reader_id(&self, platform_key: &str) -> Result<String>;

    /// Score factors for all platforms
    async fn get_score_factor_states(&self) -> Result<ScoreFactorStates>;

    /// `None` when metering is absent, disabled, or nothing is stored
    async fn load_metering_state(&self) -> Option<MeteringState>;

    /// Best-effort; never fails
    async fn save_metering_state(&self, state: &MeteringState);

    /// Suppress a redundant entitlement fetch under the current metering state.
    ///
    /// Fails with `MeteringUnavailable` when no metering capability exists.
    fn mark_metering_entitlements_fetched(&self) -> Result<()>;

    /// Delegate an action to the publisher's own site
    async fn delegate_action_to_local(&self, action: &str, source_id: Option<&str>)
        -> Result<bool>;

    async fn delegate_action_to_service(
        &self,
        action: &str,
        platform_key: &str,
        source_id: Option<&str>,
    ) -> Result<bool>;

    /// Let a platform decorate a UI element for an action
    fn decorate_service_action(
        &self,
        element: &ActionElement,
        platform_key: &str,
        action: &str,
        options: Option<&serde_json::Value>,
    );

    fn reset_platforms(&self);

    /// Login platform chosen by platform selection
    fn select_platform_for_login(&self) -> Arc<dyn SubscriptionPlatform>;
}
