//! Request ID middleware
//!
//! 每个请求带一个 ID：上游（网关、链接服务）已经给了合法的 `X-Request-ID`
//! 就沿用，否则生成 UUID v4。ID 进入 tracing span 并回写到响应头。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{Instrument, info_span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 上游 ID 的最大长度
const MAX_UPSTREAM_ID_LEN: usize = 64;

/// 请求 ID，可从 request extensions 中提取
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    /// 沿用合法的上游 ID，否则生成新的
    pub fn from_upstream(upstream: Option<&str>) -> Self {
        match upstream {
            Some(id) if is_acceptable_id(id) => RequestId(id.to_string()),
            _ => RequestId(Uuid::new_v4().to_string()),
        }
    }
}

fn is_acceptable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_UPSTREAM_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[derive(Clone, Default)]
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestIdService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        let upstream = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok());
        let request_id = RequestId::from_upstream(upstream);
        let id = request_id.0.clone();
        req.extensions_mut().insert(request_id);

        let span = info_span!("request", request_id = %id);

        Box::pin(
            async move {
                let mut response = srv.call(req).await?;
                if let Ok(value) = HeaderValue::from_str(&id) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Ok(response)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_reused_when_valid() {
        assert_eq!(RequestId::from_upstream(Some("abc-123")).0, "abc-123");
    }

    #[test]
    fn test_invalid_upstream_id_replaced() {
        for bad in [Some(""), Some("has space"), Some("x\ny"), None] {
            let id = RequestId::from_upstream(bad).0;
            assert!(Uuid::parse_str(&id).is_ok(), "{:?}", bad);
        }
        let long = "a".repeat(MAX_UPSTREAM_ID_LEN + 1);
        assert_ne!(RequestId::from_upstream(Some(&long)).0, long);
    }
}
