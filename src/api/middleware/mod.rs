pub mod cors;
pub mod request_id;
pub mod timing;

pub use cors::{build_cors_middleware, validate_cors_config};
pub use request_id::{RequestId, RequestIdMiddleware};
pub use timing::TimingMiddleware;
