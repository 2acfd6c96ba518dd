//! Per-request tracing: a request id header, a span carrying request
//! context, and one completion event with status and latency.

use std::future::Future;
use std::time::Instant;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::Error;
use tracing::{info, Instrument, Span};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Get client IP address from request.
///
/// Uses realip_remote_addr(), which honours Forwarded/X-Forwarded-For headers.
/// Treat the value as informational only.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent
    )
}

/// Get HTTP status class for grouping (2xx, 3xx, 4xx, 5xx)
pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}

/// `wrap_fn` middleware that logs every completed request.
pub fn log_request<S, B>(
    req: ServiceRequest,
    srv: &S,
) -> impl Future<Output = Result<ServiceResponse<B>, Error>>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    let request_id = Uuid::new_v4().to_string();
    let span = create_request_span(
        &request_id,
        req.method().as_str(),
        req.path(),
        &get_client_ip(&req),
        &get_user_agent(&req),
    );
    let start = Instant::now();
    let fut = srv.call(req);

    async move {
        let mut response = fut.await?;
        response.headers_mut().insert(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_str(&request_id)
                .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
        );

        let status = response.status().as_u16();
        info!(
            status = status,
            status_class = get_status_class(status),
            latency_ms = start.elapsed().as_millis() as u64,
            "request completed"
        );
        Ok(response)
    }
    .instrument(span)
}
