//! Requests against the auth service's dashboard endpoints.
//!
//! Responses are either `{"response": ...}` on success or `{"error": ...}` with a 400 status.

use crate::{
    error::api::ApiError,
    model::api::{ErrorDto, ResponseDto},
};

#[cfg(feature = "web")]
use crate::model::auth::SigninDto;

pub const SIGNIN_PATH: &str = "/auth/v1/signin";
pub const SIGNOUT_PATH: &str = "/auth/v1/signout";

/// Joins the configured API base URL with an endpoint path.
pub fn endpoint(api_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Builds the error for a non-success response, preferring the `{"error": ...}` body.
pub fn parse_error(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    };

    ApiError::Status { status, message }
}

pub fn parse_response(status: u16, body: &str) -> Result<ResponseDto, ApiError> {
    match status {
        200..=299 => serde_json::from_str::<ResponseDto>(body)
            .map_err(|e| ApiError::Parse(format!("{} in {:?}", e, body.trim()))),
        _ => Err(parse_error(status, body)),
    }
}

/// Outcome of the last sign-in attempt, shown under the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigninState {
    Idle,
    Pending,
    Accepted,
    Failed(String),
}

pub fn signin_state(result: &Result<ResponseDto, ApiError>) -> SigninState {
    match result {
        Ok(response) if response.is_ok() => SigninState::Accepted,
        Ok(response) => SigninState::Failed(response.response.clone()),
        Err(err) => SigninState::Failed(err.to_string()),
    }
}

/// What the logout page shows for the state of its sign-out request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignoutState {
    Pending,
    SignedOut,
    Failed(String),
}

/// `None` means the request has not finished yet; only an `"OK"` response counts as signed out.
pub fn signout_state(result: Option<&Result<ResponseDto, ApiError>>) -> SignoutState {
    match result {
        None => SignoutState::Pending,
        Some(Ok(response)) if response.is_ok() => SignoutState::SignedOut,
        Some(Ok(response)) => SignoutState::Failed(response.response.clone()),
        Some(Err(err)) => SignoutState::Failed(err.to_string()),
    }
}

/// Posts the credentials to the sign-in endpoint.
#[cfg(feature = "web")]
pub async fn sign_in(api_url: &str, credentials: &SigninDto) -> Result<ResponseDto, ApiError> {
    use reqwasm::http::Request;

    let body = serde_json::to_string(credentials)?;

    let response = Request::post(&endpoint(api_url, SIGNIN_PATH))
        .header("Content-Type", "application/json")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    read_response(response).await
}

/// Ends the current dashboard session.
#[cfg(feature = "web")]
pub async fn sign_out(api_url: &str) -> Result<ResponseDto, ApiError> {
    use reqwasm::http::Request;

    let response = Request::delete(&endpoint(api_url, SIGNOUT_PATH))
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    read_response(response).await
}

#[cfg(feature = "web")]
async fn read_response(response: reqwasm::http::Response) -> Result<ResponseDto, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    parse_response(status, &body)
}
