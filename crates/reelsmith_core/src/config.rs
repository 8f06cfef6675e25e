//! Layered configuration for provider endpoints and workflow parameters.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (include_str! from reelsmith.toml)
//! 2. `~/.config/reelsmith/reelsmith.toml`
//! 3. `./reelsmith.toml`
//! 4. `REELSMITH__<SECTION>__<KEY>` environment variables

use crate::ScriptLength;
use config::{Config, Environment, File, FileFormat};
use reelsmith_error::{ConfigError, ReelsmithError, ReelsmithResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../reelsmith.toml");

/// Script and scene provider settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScriptConfig {
    /// API base URL
    pub base_url: String,
    /// Model used for both script and scene generation
    pub model: String,
}

/// Image provider settings.
///
/// # Example
///
/// ```toml
/// [images]
/// base_url = "https://api-inference.huggingface.co"
/// probe_url = "https://huggingface.co/api/whoami-v2"
/// models = ["stabilityai/stable-diffusion-xl-base-1.0", "runwayml/stable-diffusion-v1-5"]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Inference API base URL
    pub base_url: String,
    /// Authenticated endpoint used to validate the credential before a batch
    pub probe_url: String,
    /// Ordered fallback ladder of model identifiers
    pub models: Vec<String>,
}

/// Speech provider settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpeechConfig {
    /// API base URL
    pub base_url: String,
    /// Synthesis model identifier
    pub model_id: String,
    /// Voice stability (0.0 to 1.0)
    pub stability: f32,
    /// Voice similarity boost (0.0 to 1.0)
    pub similarity_boost: f32,
}

/// Workflow parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Number of scenes requested per run
    pub scene_count: usize,
    /// Default narration length
    pub length: ScriptLength,
}

/// Media storage settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory for the content-addressed media store
    pub media_dir: PathBuf,
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct HttpConfig {
    /// Request timeout in seconds; absent means no timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    /// Request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Top-level Reelsmith configuration.
///
/// # Example
///
/// ```no_run
/// use reelsmith_core::ReelsmithConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ReelsmithConfig::load()?;
/// println!("Image ladder: {:?}", config.images.models);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReelsmithConfig {
    /// Script and scene provider
    pub script: ScriptConfig,
    /// Image provider
    pub images: ImageConfig,
    /// Speech provider
    pub speech: SpeechConfig,
    /// Workflow parameters
    pub workflow: WorkflowConfig,
    /// Media storage
    pub storage: StorageConfig,
    /// HTTP client
    #[serde(default)]
    pub http: HttpConfig,
}

impl ReelsmithConfig {
    /// Bundled defaults only, ignoring user files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn defaults() -> ReelsmithResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ReelsmithResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse or the merged
    /// configuration is invalid.
    #[instrument]
    pub fn load() -> ReelsmithResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/reelsmith/reelsmith.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("reelsmith").required(false))
            .add_source(
                Environment::with_prefix("REELSMITH")
                    .prefix_separator("__")
                    .separator("__"),
            );

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ReelsmithResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                ReelsmithError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ReelsmithError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first offending field.
    pub fn validate(&self) -> ReelsmithResult<()> {
        if self.workflow.scene_count == 0 {
            return Err(ConfigError::new("workflow.scene_count must be at least 1").into());
        }
        if self.images.models.is_empty() {
            return Err(ConfigError::new("images.models must list at least one model").into());
        }
        if !(0.0..=1.0).contains(&self.speech.stability) {
            return Err(ConfigError::new(format!(
                "speech.stability must be within 0.0..=1.0, got {}",
                self.speech.stability
            ))
            .into());
        }
        if !(0.0..=1.0).contains(&self.speech.similarity_boost) {
            return Err(ConfigError::new(format!(
                "speech.similarity_boost must be within 0.0..=1.0, got {}",
                self.speech.similarity_boost
            ))
            .into());
        }
        Ok(())
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> ReelsmithResult<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::new(format!("Failed to serialize configuration: {}", e)).into()
        })
    }
}
