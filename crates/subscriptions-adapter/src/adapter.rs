//! Service adapter
//!
//! Concrete [`ServiceFacade`] holding an owned reference to the orchestrator.
//! Non-metering calls are forwarded verbatim, errors included.

use async_trait::async_trait;
use std::sync::Arc;

use subscriptions_common::{
    ActionElement, Entitlement, MeteringState, PageConfig, Result, ScoreFactorStates,
    SubscriptionsError, LOCAL_PLATFORM_KEY,
};
use tracing::debug;

use crate::facade::ServiceFacade;
use crate::orchestrator::{Dialog, Orchestrator, SubscriptionAnalytics, SubscriptionPlatform};

pub struct ServiceAdapter {
    orchestrator: Arc<dyn Orchestrator>,
}

impl ServiceAdapter {
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl ServiceFacade for ServiceAdapter {
    fn get_analytics(&self) -> Arc<dyn SubscriptionAnalytics> {
        self.orchestrator.analytics()
    }

    async fn get_all_platforms_entitlements(&self) -> Result<Vec<Entitlement>> {
        self.orchestrator.all_platforms_entitlements().await
    }

    fn get_dialog(&self) -> Arc<dyn Dialog> {
        self.orchestrator.dialog()
    }

    fn get_encrypted_document_key(&self, platform_key: &str) -> Option<String> {
        self.orchestrator.encrypted_document_key(platform_key)
    }

    fn get_page_config(&self) -> PageConfig {
        self.orchestrator.page_config()
    }

    async fn get_reader_id(&self, platform_key: &str) -> Result<String> {
        self.orchestrator.reader_id(platform_key).await
    }

    async fn get_score_factor_states(&self) -> Result<ScoreFactorStates> {
        self.orchestrator.score_factor_states().await
    }

    async fn load_metering_state(&self) -> Option<MeteringState> {
        match self.orchestrator.metering() {
            Some(metering) => metering.store().load().await,
            None => {
                debug!("No metering capability installed, nothing to load");
                None
            }
        }
    }

    async fn save_metering_state(&self, state: &MeteringState) {
        match self.orchestrator.metering() {
            Some(metering) => metering.store().save(state).await,
            None => debug!("No metering capability installed, dropping save"),
        }
    }

    fn mark_metering_entitlements_fetched(&self) -> Result<()> {
        let metering = self
            .orchestrator
            .metering()
            .ok_or(SubscriptionsError::MeteringUnavailable)?;
        metering.mark_entitlements_fetched();
        Ok(())
    }

    async fn delegate_action_to_local(
        &self,
        action: &str,
        source_id: Option<&str>,
    ) -> Result<bool> {
        self.delegate_action_to_service(action, LOCAL_PLATFORM_KEY, source_id)
            .await
    }

    async fn delegate_action_to_service(
        &self,
        action: &str,
        platform_key: &str,
        source_id: Option<&str>,
    ) -> Result<bool> {
        self.orchestrator
            .delegate_action_to_service(action, platform_key, source_id)
            .await
    }

    fn decorate_service_action(
        &self,
        element: &ActionElement,
        platform_key: &str,
        action: &str,
        options: Option<&serde_json::Value>,
    ) {
        self.orchestrator
            .decorate_service_action(element, platform_key, action, options)
    }

    fn reset_platforms(&self) {
        self.orchestrator.reset_platforms()
    }

    fn select_platform_for_login(&self) -> Arc<dyn SubscriptionPlatform> {
        self.orchestrator.select_platform_for_login()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use serde_json::json;

    /// Records every orchestrator call it receives
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Analytics,
        Entitlements,
        Dialog,
        DocumentKey(String),
        PageConfig,
        ReaderId(String),
        ScoreFactors,
        Delegate {
            action: String,
            platform_key: String,
            source_id: Option<String>,
        },
        Decorate {
            element_id: String,
            platform_key: String,
            action: String,
            options: Option<serde_json::Value>,
        },
        ResetPlatforms,
        SelectForLogin,
        Metering,
    }

    struct NullAnalytics;
    impl SubscriptionAnalytics for NullAnalytics {
        fn event(&self, _name: &str, _params: &serde_json::Value) {}
    }

    struct ClosedDialog;
    impl Dialog for ClosedDialog {
        fn is_open(&self) -> bool {
            false
        }
        fn close(&self) {}
    }

    struct NamedPlatform(&'static str);
    impl SubscriptionPlatform for NamedPlatform {
        fn platform_key(&self) -> &str {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingOrchestrator {
        calls: Mutex<Vec<Call>>,
        fail_reader_id: bool,
    }

    impl RecordingOrchestrator {
        fn record(&self, call: Call) {
            self.calls.lock().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl Orchestrator for RecordingOrchestrator {
        fn analytics(&self) -> Arc<dyn SubscriptionAnalytics> {
            self.record(Call::Analytics);
            Arc::new(NullAnalytics)
        }

        async fn all_platforms_entitlements(&self) -> Result<Vec<Entitlement>> {
            self.record(Call::Entitlements);
            Ok(vec![Entitlement::empty("local"), Entitlement::empty("google")])
        }

        fn dialog(&self) -> Arc<dyn Dialog> {
            self.record(Call::Dialog);
            Arc::new(ClosedDialog)
        }

        fn encrypted_document_key(&self, platform_key: &str) -> Option<String> {
            self.record(Call::DocumentKey(platform_key.to_string()));
            (platform_key == "google").then(|| "encrypted-key".to_string())
        }

        fn page_config(&self) -> PageConfig {
            self.record(Call::PageConfig);
            PageConfig {
                publication_id: "example.com".to_string(),
                product_id: Some("example.com:premium".to_string()),
                is_locked: true,
            }
        }

        async fn reader_id(&self, platform_key: &str) -> Result<String> {
            self.record(Call::ReaderId(platform_key.to_string()));
            if self.fail_reader_id {
                return Err(SubscriptionsError::PlatformNotFound(platform_key.to_string()));
            }
            Ok(format!("reader-{}", platform_key))
        }

        async fn score_factor_states(&self) -> Result<ScoreFactorStates> {
            self.record(Call::ScoreFactors);
            let mut states = ScoreFactorStates::new();
            states.insert("local".to_string(), json!({"isReadyToPay": 0}));
            Ok(states)
        }

        async fn delegate_action_to_service(
            &self,
            action: &str,
            platform_key: &str,
            source_id: Option<&str>,
        ) -> Result<bool> {
            self.record(Call::Delegate {
                action: action.to_string(),
                platform_key: platform_key.to_string(),
                source_id: source_id.map(str::to_string),
            });
            Ok(action == "login")
        }

        fn decorate_service_action(
            &self,
            element: &ActionElement,
            platform_key: &str,
            action: &str,
            options: Option<&serde_json::Value>,
        ) {
            self.record(Call::Decorate {
                element_id: element.id.clone(),
                platform_key: platform_key.to_string(),
                action: action.to_string(),
                options: options.cloned(),
            });
        }

        fn reset_platforms(&self) {
            self.record(Call::ResetPlatforms);
        }

        fn select_platform_for_login(&self) -> Arc<dyn SubscriptionPlatform> {
            self.record(Call::SelectForLogin);
            Arc::new(NamedPlatform("google"))
        }

        fn metering(&self) -> Option<Arc<subscriptions_metering::Metering>> {
            self.record(Call::Metering);
            None
        }
    }

    fn adapter() -> (Arc<RecordingOrchestrator>, ServiceAdapter) {
        let orchestrator = Arc::new(RecordingOrchestrator::default());
        let adapter = ServiceAdapter::new(orchestrator.clone());
        (orchestrator, adapter)
    }

    #[tokio::test]
    async fn test_local_delegation_matches_service_delegation() {
        let (orchestrator, adapter) = adapter();

        let local = adapter.delegate_action_to_local("login", Some("btn-1")).await.unwrap();
        let service = adapter
            .delegate_action_to_service("login", "local", Some("btn-1"))
            .await
            .unwrap();

        assert_eq!(local, service);
        let calls = orchestrator.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(
            calls[0],
            Call::Delegate {
                action: "login".to_string(),
                platform_key: "local".to_string(),
                source_id: Some("btn-1".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_async_forwards_return_orchestrator_values() {
        let (orchestrator, adapter) = adapter();

        let entitlements = adapter.get_all_platforms_entitlements().await.unwrap();
        assert_eq!(entitlements.len(), 2);
        assert_eq!(adapter.get_reader_id("google").await.unwrap(), "reader-google");
        let factors = adapter.get_score_factor_states().await.unwrap();
        assert_eq!(factors["local"]["isReadyToPay"], 0);
        assert!(!adapter.delegate_action_to_service("subscribe", "google", None).await.unwrap());

        assert_eq!(
            orchestrator.calls(),
            vec![
                Call::Entitlements,
                Call::ReaderId("google".to_string()),
                Call::ScoreFactors,
                Call::Delegate {
                    action: "subscribe".to_string(),
                    platform_key: "google".to_string(),
                    source_id: None,
                },
            ]
        );
    }

    #[test]
    fn test_sync_forwards() {
        let (orchestrator, adapter) = adapter();
        let element = ActionElement::new("subscribe-button").with_attribute("subscriptions-action", "subscribe");
        let options = json!({"theme": "dark"});

        adapter.get_analytics().event("shown", &json!({}));
        assert!(!adapter.get_dialog().is_open());
        assert_eq!(adapter.get_encrypted_document_key("google").as_deref(), Some("encrypted-key"));
        assert_eq!(adapter.get_encrypted_document_key("local"), None);
        assert!(adapter.get_page_config().is_locked);
        adapter.decorate_service_action(&element, "google", "subscribe", Some(&options));
        adapter.reset_platforms();
        assert_eq!(adapter.select_platform_for_login().platform_key(), "google");

        assert_eq!(
            orchestrator.calls(),
            vec![
                Call::Analytics,
                Call::Dialog,
                Call::DocumentKey("google".to_string()),
                Call::DocumentKey("local".to_string()),
                Call::PageConfig,
                Call::Decorate {
                    element_id: "subscribe-button".to_string(),
                    platform_key: "google".to_string(),
                    action: "subscribe".to_string(),
                    options: Some(options),
                },
                Call::ResetPlatforms,
                Call::SelectForLogin,
            ]
        );
    }

    #[tokio::test]
    async fn test_orchestrator_errors_pass_through() {
        let orchestrator = Arc::new(RecordingOrchestrator {
            fail_reader_id: true,
            ..Default::default()
        });
        let adapter = ServiceAdapter::new(orchestrator);

        let err = adapter.get_reader_id("unknown").await.unwrap_err();
        assert!(matches!(err, SubscriptionsError::PlatformNotFound(ref key) if key == "unknown"));
    }

    #[tokio::test]
    async fn test_absent_metering_short_circuits() {
        let (orchestrator, adapter) = adapter();

        assert!(adapter.load_metering_state().await.is_none());
        adapter.save_metering_state(&MeteringState::new("pub")).await;

        assert_eq!(orchestrator.calls(), vec![Call::Metering, Call::Metering]);
    }

    #[test]
    fn test_mark_fetched_without_metering_is_an_error() {
        let (_, adapter) = adapter();

        let err = adapter.mark_metering_entitlements_fetched().unwrap_err();
        assert!(matches!(err, SubscriptionsError::MeteringUnavailable));
    }
}
