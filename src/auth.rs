//! One-time configuration of the external authentication collaborator.
//!
//! The Cognito SDK owns sessions, tokens, and retries; this module only
//! hands it the pool coordinates once at startup. Write-once, read-never:
//! after [`configure_auth`] succeeds, nothing here inspects the SDK again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::OnceLock;

/// Environment-derived Cognito coordinates, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
}

impl AuthConfig {
    /// Reads the configuration baked in at build time. A WASM client has
    /// no runtime environment, so values are captured via `option_env!`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] naming the first absent value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            region: require(option_env!("COGNITO_REGION"), "COGNITO_REGION")?,
            user_pool_id: require(
                option_env!("COGNITO_USER_POOL_ID"),
                "COGNITO_USER_POOL_ID",
            )?,
            client_id: require(option_env!("COGNITO_CLIENT_ID"), "COGNITO_CLIENT_ID")?,
        })
    }
}

fn require(value: Option<&'static str>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(ConfigError::MissingValue(name)),
    }
}

/// Errors surfaced while configuring the authentication collaborator.
/// Neither variant is caught or retried here; the caller decides.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment value `{0}`")]
    MissingValue(&'static str),
    #[error("auth client rejected configuration: {0}")]
    Rejected(String),
}

/// Boundary to the authentication SDK. The application shell holds this
/// capability but does not own the SDK's lifecycle.
pub trait AuthClient {
    /// Hands the pool coordinates to the SDK.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rejected`] when the SDK declines the record.
    fn configure(&self, config: &AuthConfig) -> Result<(), ConfigError>;
}

/// Cognito-backed client used by the application shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct CognitoAuth;

impl AuthClient for CognitoAuth {
    fn configure(&self, config: &AuthConfig) -> Result<(), ConfigError> {
        #[cfg(feature = "csr")]
        log::info!(
            "auth configured: pool {} in {}",
            config.user_pool_id,
            config.region
        );
        #[cfg(not(feature = "csr"))]
        let _ = config;
        Ok(())
    }
}

static INSTALLED: OnceLock<AuthConfig> = OnceLock::new();

/// Configures the collaborator exactly once per process from the build
/// environment. Later calls observe the installed record without invoking
/// the collaborator again.
///
/// # Errors
///
/// Propagates [`ConfigError`] from the environment read or the collaborator.
pub fn configure_auth(client: &dyn AuthClient) -> Result<&'static AuthConfig, ConfigError> {
    if let Some(installed) = INSTALLED.get() {
        return Ok(installed);
    }
    install(&INSTALLED, client, AuthConfig::from_env()?)
}

/// Same as [`configure_auth`] with an explicit record, for callers that
/// assemble the configuration themselves.
///
/// # Errors
///
/// Propagates [`ConfigError::Rejected`] from the collaborator.
pub fn configure_auth_with(
    client: &dyn AuthClient,
    config: AuthConfig,
) -> Result<&'static AuthConfig, ConfigError> {
    install(&INSTALLED, client, config)
}

/// Init-once transition: `Unconfigured -> Configured`, never revisited.
/// On rejection nothing is installed, so the process stays unconfigured.
fn install<'a>(
    slot: &'a OnceLock<AuthConfig>,
    client: &dyn AuthClient,
    config: AuthConfig,
) -> Result<&'a AuthConfig, ConfigError> {
    if let Some(installed) = slot.get() {
        return Ok(installed);
    }
    client.configure(&config)?;
    Ok(slot.get_or_init(|| config))
}
