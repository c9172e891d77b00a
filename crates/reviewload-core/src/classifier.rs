//! Response classification.
//!
//! Separates transport success from business success: statuses the service
//! answers under normal contention are not counted as failures.

use reviewload_api_interface::{types::ApiResponse, ApiError};
use reviewload_models::{Endpoint, Outcome};

/// Classify a status code for an endpoint.
pub fn classify(endpoint: Endpoint, status: u16, body: &str) -> Outcome {
    if endpoint.accepted_statuses().contains(&status) {
        Outcome::Success
    } else {
        Outcome::failure(format!(
            "Unexpected status code for {endpoint}: {status}, body={body}"
        ))
    }
}

/// Classify a raw response.
pub fn classify_response(endpoint: Endpoint, response: &ApiResponse) -> Outcome {
    classify(endpoint, response.status, &response.body)
}

/// Classify a call which did not get any response.
pub fn classify_error(endpoint: Endpoint, error: &ApiError) -> Outcome {
    Outcome::failure(format!("Request failed for {endpoint}: {error}"))
}
