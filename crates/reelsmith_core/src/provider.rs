//! Provider identities and credentials.

use serde::{Deserialize, Serialize};

/// The three remote services a workflow talks to.
///
/// The kebab-case form (`script-provider`, ...) is the key under which the
/// credential is stored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Provider {
    /// Text generation (script and scene decomposition)
    ScriptProvider,
    /// Text-to-speech
    SpeechProvider,
    /// Text-to-image
    ImageProvider,
}

impl Provider {
    /// Storage key for this provider's credential.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelsmith_core::Provider;
    ///
    /// assert_eq!(Provider::ImageProvider.key(), "image-provider");
    /// ```
    pub fn key(&self) -> &str {
        self.as_ref()
    }
}

/// A provider secret.
///
/// Never logged: the `Debug` implementation redacts the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Provider this secret authenticates against
    pub provider: Provider,
    /// The secret itself
    pub secret: String,
}

impl Credential {
    /// Creates a credential.
    pub fn new(provider: Provider, secret: impl Into<String>) -> Self {
        Self {
            provider,
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("provider", &self.provider)
            .field("secret", &"<redacted>")
            .finish()
    }
}
