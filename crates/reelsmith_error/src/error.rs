//! Top-level error wrapper types.

use crate::{ConfigError, ExportError, GenerationError, HttpError, StorageError};

/// Every error condition a Reelsmith operation can surface.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ReelsmithError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ReelsmithError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelsmithErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Media or credential storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Remote generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Bundle export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Reelsmith error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelsmith_error::{ConfigError, ReelsmithResult};
///
/// fn might_fail() -> ReelsmithResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelsmith Error: {}", _0)]
pub struct ReelsmithError(Box<ReelsmithErrorKind>);

impl ReelsmithError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelsmithErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelsmithErrorKind {
        &self.0
    }

    /// The generation error kind, if this is a generation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelsmith_error::{GenerationError, GenerationErrorKind, ReelsmithError};
    ///
    /// let err: ReelsmithError = GenerationError::new(GenerationErrorKind::SceneGenerationFailed {
    ///     scene_index: 1,
    ///     attempts: vec![],
    /// })
    /// .into();
    /// assert_eq!(err.generation_kind().and_then(|k| k.scene_index()), Some(1));
    /// ```
    pub fn generation_kind(&self) -> Option<&crate::GenerationErrorKind> {
        match self.kind() {
            ReelsmithErrorKind::Generation(err) => Some(err.kind()),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ReelsmithErrorKind
impl<T> From<T> for ReelsmithError
where
    T: Into<ReelsmithErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelsmith operations.
pub type ReelsmithResult<T> = std::result::Result<T, ReelsmithError>;
