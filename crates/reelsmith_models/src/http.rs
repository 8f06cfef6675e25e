//! Request plumbing shared by the provider clients.

use reelsmith_core::Provider;
use reelsmith_error::{GenerationError, GenerationErrorKind, HttpError, ReelsmithResult};
use reelsmith_interface::CredentialStore;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::error;

/// Builds a reqwest client with an optional request timeout.
pub(crate) fn build_client(timeout: Option<Duration>) -> ReelsmithResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)).into())
}

/// Resolves the provider secret or fails with `CredentialMissing`.
pub(crate) fn require_credential(
    store: &dyn CredentialStore,
    provider: Provider,
) -> ReelsmithResult<String> {
    store.get(provider).ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::CredentialMissing(provider.to_string())).into()
    })
}

/// Maps a transport failure to an `HttpError`.
pub(crate) fn transport_error(provider: Provider, err: reqwest::Error) -> HttpError {
    error!(provider = %provider, error = ?err, "Request failed");
    HttpError::new(format!("{} request failed: {}", provider, err))
}

/// Passes successful responses through and classifies everything else.
pub(crate) async fn check_status(provider: Provider, response: Response) -> ReelsmithResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(provider = %provider, status = %status, body = %body, "Provider returned error");
    Err(GenerationError::new(GenerationErrorKind::from_status(
        provider.to_string(),
        status.as_u16(),
        body,
    ))
    .into())
}

/// Error for a success response whose body is not usable.
#[track_caller]
pub(crate) fn unexpected_response(provider: Provider, message: impl Into<String>) -> GenerationError {
    GenerationError::new(GenerationErrorKind::UpstreamResponse {
        provider: provider.to_string(),
        message: message.into(),
    })
}

/// Strips a trailing slash so paths can be appended with `format!`.
pub(crate) fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
