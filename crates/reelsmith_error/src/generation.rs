//! Generation error types shared by every provider client and workflow stage.

/// Failure conditions for remote generation calls.
///
/// The five families are:
/// - a credential that was never configured
/// - a credential the provider rejected (HTTP 401/403)
/// - any other upstream failure (status or response shape)
/// - malformed structured output
/// - a scene whose whole model fallback ladder failed
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No secret is configured for the provider
    #[display("No credential configured for {}", _0)]
    CredentialMissing(String),
    /// The provider rejected the configured secret
    #[display("Credential for {} was rejected (HTTP {})", provider, status)]
    CredentialInvalid {
        /// Provider name
        provider: String,
        /// HTTP status returned by the provider
        status: u16,
    },
    /// Provider answered with a non-success status
    #[display("{} returned HTTP {}: {}", provider, status, message)]
    UpstreamStatus {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Provider answered successfully but the body was not usable
    #[display("{} returned an unexpected response: {}", provider, message)]
    UpstreamResponse {
        /// Provider name
        provider: String,
        /// What was wrong with the response
        message: String,
    },
    /// Structured payload missing or malformed
    #[display("Failed to parse structured response: {}", _0)]
    Parse(String),
    /// Every fallback model failed for one scene
    #[display("Every candidate model failed for scene {}", scene_index)]
    SceneGenerationFailed {
        /// Zero-based index of the failing scene
        scene_index: usize,
        /// One entry per attempted model, in attempt order
        attempts: Vec<String>,
    },
}

impl GenerationErrorKind {
    /// Classify a non-success HTTP status from a provider.
    ///
    /// 401 and 403 mean the credential was rejected; everything else is an
    /// upstream failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelsmith_error::GenerationErrorKind;
    ///
    /// let kind = GenerationErrorKind::from_status("speech-provider", 401, "bad key");
    /// assert!(kind.is_credential_error());
    ///
    /// let kind = GenerationErrorKind::from_status("speech-provider", 500, "boom");
    /// assert!(kind.is_upstream());
    /// ```
    pub fn from_status(provider: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => GenerationErrorKind::CredentialInvalid {
                provider: provider.into(),
                status,
            },
            _ => GenerationErrorKind::UpstreamStatus {
                provider: provider.into(),
                status,
                message: message.into(),
            },
        }
    }

    /// True for missing or rejected credentials.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::CredentialMissing(_) | GenerationErrorKind::CredentialInvalid { .. }
        )
    }

    /// True for non-success statuses and unusable response bodies.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::UpstreamStatus { .. } | GenerationErrorKind::UpstreamResponse { .. }
        )
    }

    /// Index of the failing scene for `SceneGenerationFailed`.
    pub fn scene_index(&self) -> Option<usize> {
        match self {
            GenerationErrorKind::SceneGenerationFailed { scene_index, .. } => Some(*scene_index),
            _ => None,
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Parse("no array found".to_string()));
/// assert!(format!("{}", err).contains("no array found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}
