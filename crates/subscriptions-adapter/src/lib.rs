//! # Subscriptions Adapter
//!
//! A single facade through which framework components (UI, analytics,
//! login flows) reach the subscription orchestrator without depending on
//! its full interface.
//!
//! - [`Orchestrator`]: surface of the central subscription service
//! - [`ServiceFacade`]: the contract callers depend on
//! - [`ServiceAdapter`]: routes each facade call to the orchestrator, or to
//!   its metering capability
//!
//! Every call is a 1:1 forward. The only added behavior is null-safety when
//! metering is absent and the redundant-fetch flag.

pub mod adapter;
pub mod facade;
pub mod orchestrator;

pub use adapter::ServiceAdapter;
pub use facade::ServiceFacade;
pub use orchestrator::{Dialog, Orchestrator, SubscriptionAnalytics, SubscriptionPlatform};
