// crates/message-gate-config/src/config.rs
// ============================================================================
// Module: Message Gate Configuration
// Description: Configuration loading and validation for Message Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path
//! limits. Missing or invalid configuration fails closed: the gateway never
//! starts with a trust mode it cannot honor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "message-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "MESSAGE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum clock-skew leeway in seconds.
pub(crate) const MAX_LEEWAY_SECS: u64 = 300;
/// Default token issuer.
pub const DEFAULT_ISSUER: &str = "messaging-api";
/// Default environment variable naming the shared secret.
pub const DEFAULT_SECRET_VARIABLE: &str = "MESSAGE_GATE_SECRET";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Message Gate configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayConfig {
    /// Authorization configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Email channel configuration.
    #[serde(default)]
    pub email: EmailChannelConfig,
    /// SMS channel configuration.
    #[serde(default)]
    pub sms: SmsChannelConfig,
    /// Template catalog configuration.
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl GatewayConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit path, then `MESSAGE_GATE_CONFIG`, then
    /// `message-gate.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        self.email.validate()?;
        self.sms.validate()?;
        self.templates.validate()?;
        Ok(())
    }
}

/// Authorization configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected token issuer, matched for equality.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Clock-skew leeway in seconds applied to expiry validation.
    #[serde(default)]
    pub leeway_secs: u64,
    /// Trust mode selected at startup.
    #[serde(default)]
    pub trust: TrustModeConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: DEFAULT_ISSUER.to_string(),
            leeway_secs: 0,
            trust: TrustModeConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Validates authorization settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.issuer.trim().is_empty() {
            return Err(ConfigError::Invalid("auth.issuer must be non-empty".to_string()));
        }
        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::Invalid("auth.leeway_secs exceeds maximum".to_string()));
        }
        self.trust.validate()
    }
}

/// Trust mode selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TrustModeConfig {
    /// Symmetric verification with a shared secret from the environment.
    SharedSecret {
        /// Environment variable holding the secret.
        #[serde(default = "default_secret_variable")]
        secret_variable: String,
    },
    /// Asymmetric verification against an external key set.
    KeySet {
        /// Key set endpoint URL, http(s) only.
        jwks_url: String,
    },
}

impl Default for TrustModeConfig {
    fn default() -> Self {
        Self::SharedSecret {
            secret_variable: DEFAULT_SECRET_VARIABLE.to_string(),
        }
    }
}

impl TrustModeConfig {
    /// Validates the trust mode settings.
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::SharedSecret {
                secret_variable,
            } => {
                if secret_variable.trim().is_empty() {
                    return Err(ConfigError::Invalid(
                        "auth.trust.secret_variable must be non-empty".to_string(),
                    ));
                }
            }
            Self::KeySet {
                jwks_url,
            } => {
                if !jwks_url.starts_with("https://") && !jwks_url.starts_with("http://") {
                    return Err(ConfigError::Invalid(
                        "auth.trust.jwks_url must be an http(s) url".to_string(),
                    ));
                }
                if jwks_url.len() > MAX_TOTAL_PATH_LENGTH {
                    return Err(ConfigError::Invalid(
                        "auth.trust.jwks_url exceeds max length".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Email channel configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailChannelConfig {
    /// Optional delivery-tracking configuration set name.
    pub configuration_set: Option<String>,
}

impl EmailChannelConfig {
    /// Validates email channel settings.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_optional_name("email.configuration_set", self.configuration_set.as_deref())
    }
}

/// SMS channel configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmsChannelConfig {
    /// Optional delivery-tracking configuration set name.
    pub configuration_set: Option<String>,
}

impl SmsChannelConfig {
    /// Validates SMS channel settings.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_optional_name("sms.configuration_set", self.configuration_set.as_deref())
    }
}

/// Template catalog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateConfig {
    /// Optional path to a JSON template catalog.
    pub catalog_path: Option<PathBuf>,
}

impl TemplateConfig {
    /// Validates template catalog settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog_path {
            validate_path_string("templates.catalog_path", &path.to_string_lossy())?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serde default for the token issuer.
fn default_issuer() -> String {
    DEFAULT_ISSUER.to_string()
}

/// Serde default for the shared-secret variable name.
fn default_secret_variable() -> String {
    DEFAULT_SECRET_VARIABLE.to_string()
}

/// Resolves the configuration path from explicit, environment, or default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates path length limits on the resolved config path.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a configured path string.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    let path = Path::new(trimmed);
    for component in path.components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates an optional name field as non-empty when present.
fn validate_optional_name(field: &str, value: Option<&str>) -> Result<(), ConfigError> {
    if let Some(value) = value {
        if value.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{field} must be non-empty when set")));
        }
    }
    Ok(())
}
