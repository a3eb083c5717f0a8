//! Service layer for business logic
//!
//! Shared by the HTTP handlers of both services.

mod analytics_service;
pub mod click_notifier;
mod link_service;

pub use analytics_service::*;
pub use click_notifier::{ClickNotifier, HttpClickNotifier, NoopNotifier, notifier_from_url};
pub use link_service::*;
