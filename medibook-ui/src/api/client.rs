//! HTTP API Client
//!
//! Calls the appointments backend from the browser.

use gloo_net::http::{Request, Response};
use std::fmt;

use medibook::models::{
    detail_message, AppointmentPage, Appointment, CreateAppointmentRequest, HealthStatus,
};

/// Backend used when `MEDIBOOK_API_URL` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

const APPOINTMENTS_PATH: &str = "/api/v1/appointments/";

/// Backend base URL without a trailing slash
pub fn get_api_base() -> String {
    normalize_base(option_env!("MEDIBOOK_API_URL").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        url.trim_end_matches('/').to_string()
    }
}

/// A failed call. `detail` is the backend's own message, when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub reason: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
}

impl ApiError {
    fn network(e: gloo_net::Error) -> Self {
        Self {
            reason: format!("Network error: {}", e),
            status: None,
            detail: None,
        }
    }

    fn parse(e: gloo_net::Error) -> Self {
        Self {
            reason: format!("Parse error: {}", e),
            status: None,
            detail: None,
        }
    }

    async fn from_response(response: Response) -> Self {
        let status = response.status();
        let detail = response
            .binary()
            .await
            .ok()
            .and_then(|body| detail_message(&body));
        Self {
            reason: format!("HTTP {}", status),
            status: Some(status),
            detail,
        }
    }

    /// Backend detail if present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail.clone().unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.reason, detail),
            None => f.write_str(&self.reason),
        }
    }
}

/// Check API health
pub async fn check_health() -> Result<HealthStatus, ApiError> {
    let response = Request::get(&format!("{}/health", get_api_base()))
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Fetch the appointment list, in server order
pub async fn fetch_appointments() -> Result<Vec<Appointment>, ApiError> {
    let response = Request::get(&format!("{}{}", get_api_base(), APPOINTMENTS_PATH))
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    let page: AppointmentPage = response.json().await.map_err(ApiError::parse)?;
    Ok(page.items)
}

/// Create an appointment. The created record in the response is not used.
pub async fn create_appointment(request: &CreateAppointmentRequest) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}{}", get_api_base(), APPOINTMENTS_PATH))
        .json(request)
        .map_err(ApiError::network)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::from_response(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://api.local:9000/"), "http://api.local:9000");
        assert_eq!(normalize_base("  "), DEFAULT_API_BASE);
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let mut error = ApiError {
            reason: "HTTP 409".to_string(),
            status: Some(409),
            detail: Some("Conflict".to_string()),
        };
        assert_eq!(error.user_message("Failed to create appointment"), "Conflict");
        assert_eq!(error.to_string(), "HTTP 409: Conflict");

        error.detail = None;
        assert_eq!(
            error.user_message("Failed to create appointment"),
            "Failed to create appointment"
        );
    }
}
