//! Credential store implementations.
//!
//! An empty secret is treated the same as an absent one everywhere.

use reelsmith_core::Provider;
use reelsmith_error::{ReelsmithResult, StorageError, StorageErrorKind};
use reelsmith_interface::CredentialStore;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

fn non_empty(secret: Option<String>) -> Option<String> {
    secret.filter(|s| !s.trim().is_empty())
}

/// Credentials held in a map, for tests and programmatic setup.
///
/// # Examples
///
/// ```
/// use reelsmith_core::Provider;
/// use reelsmith_interface::CredentialStore;
/// use reelsmith_storage::InMemoryCredentialStore;
///
/// let store = InMemoryCredentialStore::new().with(Provider::SpeechProvider, "xi-123");
/// assert_eq!(store.get(Provider::SpeechProvider).as_deref(), Some("xi-123"));
/// assert!(store.get(Provider::ImageProvider).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    secrets: HashMap<Provider, String>,
}

impl InMemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, provider: Provider, secret: impl Into<String>) -> Self {
        self.insert(provider, secret);
        self
    }

    /// Sets or replaces the secret for `provider`.
    pub fn insert(&mut self, provider: Provider, secret: impl Into<String>) {
        self.secrets.insert(provider, secret.into());
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, provider: Provider) -> Option<String> {
        non_empty(self.secrets.get(&provider).cloned())
    }
}

/// Credentials read from environment variables at lookup time.
///
/// Defaults: `REELSMITH_SCRIPT_API_KEY`, `REELSMITH_SPEECH_API_KEY`,
/// `REELSMITH_IMAGE_API_KEY`.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    variables: HashMap<Provider, String>,
}

impl EnvCredentialStore {
    /// Store using the default variable names.
    pub fn new() -> Self {
        let variables = HashMap::from([
            (Provider::ScriptProvider, "REELSMITH_SCRIPT_API_KEY".to_string()),
            (Provider::SpeechProvider, "REELSMITH_SPEECH_API_KEY".to_string()),
            (Provider::ImageProvider, "REELSMITH_IMAGE_API_KEY".to_string()),
        ]);
        Self { variables }
    }

    /// Read `provider`'s secret from `variable` instead of the default.
    pub fn with_variable(mut self, provider: Provider, variable: impl Into<String>) -> Self {
        self.variables.insert(provider, variable.into());
        self
    }

    /// Variable consulted for `provider`.
    pub fn variable(&self, provider: Provider) -> Option<&str> {
        self.variables.get(&provider).map(String::as_str)
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for EnvCredentialStore {
    fn get(&self, provider: Provider) -> Option<String> {
        let variable = self.variables.get(&provider)?;
        non_empty(std::env::var(variable).ok())
    }
}

#[derive(Debug, Deserialize)]
struct KeyFile {
    #[serde(default)]
    keys: HashMap<String, String>,
}

/// Credentials loaded once from a TOML key file.
///
/// ```toml
/// [keys]
/// script-provider = "..."
/// speech-provider = "..."
/// image-provider = "..."
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileCredentialStore {
    secrets: HashMap<String, String>,
}

impl FileCredentialStore {
    /// Read and parse a key file.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or is not valid TOML.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> ReelsmithResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        let store = Self::parse(&contents)?;
        tracing::debug!(entries = store.secrets.len(), "Loaded key file");
        Ok(store)
    }

    /// Parse key file contents.
    ///
    /// # Errors
    ///
    /// Returns a storage error if `contents` is not valid TOML.
    pub fn parse(contents: &str) -> ReelsmithResult<Self> {
        let file: KeyFile = toml::from_str(contents).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidConfig(format!(
                "invalid key file: {}",
                e
            )))
        })?;
        Ok(Self { secrets: file.keys })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, provider: Provider) -> Option<String> {
        non_empty(self.secrets.get(provider.key()).cloned())
    }
}

/// Consults stores in order; the first one holding a secret wins.
#[derive(Clone, Default)]
pub struct ChainedCredentialStore {
    stores: Vec<Arc<dyn CredentialStore>>,
}

impl ChainedCredentialStore {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a store at lowest priority.
    pub fn with(mut self, store: impl CredentialStore + 'static) -> Self {
        self.stores.push(Arc::new(store));
        self
    }

    /// Number of stores in the chain.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// True when the chain has no stores.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl std::fmt::Debug for ChainedCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedCredentialStore")
            .field("stores", &self.stores.len())
            .finish()
    }
}

impl CredentialStore for ChainedCredentialStore {
    fn get(&self, provider: Provider) -> Option<String> {
        self.stores.iter().find_map(|store| store.get(provider))
    }
}
