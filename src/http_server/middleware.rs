//! Request Logging Middleware
//!
//! Tags every request with a request id, echoes it in `x-request-id`, and logs
//! an `HTTP_REQUEST` line. In debug mode every request is logged; otherwise
//! only responses outside 2xx.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::{Event, Logger, Severity};

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging settings
#[derive(Debug, Clone, Copy)]
pub struct RequestLogSettings {
    /// Log successful requests as well as failures
    pub log_all: bool,
}

impl RequestLogSettings {
    pub fn new(log_all: bool) -> Self {
        Self { log_all }
    }

    /// Severity for a response status, or None when the line is suppressed
    pub fn severity_for(&self, status: u16) -> Option<Severity> {
        match status {
            500..=599 => Some(Severity::Error),
            400..=499 => Some(Severity::Warn),
            _ if self.log_all => Some(Severity::Info),
            _ => None,
        }
    }
}

/// Axum middleware: `from_fn_with_state(settings, log_requests)`
pub async fn log_requests(
    State(settings): State<Arc<RequestLogSettings>>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status().as_u16();
    if let Some(severity) = settings.severity_for(status) {
        let status = status.to_string();
        let elapsed_ms = started_at.elapsed().as_millis().to_string();
        Logger::log(
            severity,
            Event::HttpRequest.as_str(),
            &[
                ("elapsed_ms", elapsed_ms.as_str()),
                ("method", method.as_str()),
                ("path", path.as_str()),
                ("request_id", request_id.as_str()),
                ("status", status.as_str()),
            ],
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_always_logged() {
        let quiet = RequestLogSettings::new(false);
        assert_eq!(quiet.severity_for(404), Some(Severity::Warn));
        assert_eq!(quiet.severity_for(422), Some(Severity::Warn));
        assert_eq!(quiet.severity_for(500), Some(Severity::Error));
    }

    #[test]
    fn test_success_logged_only_in_debug() {
        assert_eq!(RequestLogSettings::new(false).severity_for(200), None);
        assert_eq!(
            RequestLogSettings::new(true).severity_for(201),
            Some(Severity::Info)
        );
    }
}
