pub mod analytics;
pub mod health;
pub mod helpers;
pub mod links;

pub use analytics::{AnalyticsApi, analytics_routes};
pub use health::{HealthService, analytics_health_routes, links_health_routes};
pub use helpers::{ErrorBody, error_response, json_response, service_error_response};
pub use links::{LinkApi, LinkResponse, ShortenResponse, link_api_routes};
