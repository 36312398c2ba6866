//! Environment-based credential source
//!
//! Reads provider API keys from the well-known environment variables
//! (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, `GROQ_API_KEY`) once at start-up.

use std::env;

use application::CredentialSet;
use domain::ProviderKind;
use tracing::{debug, info, warn};

/// Loads provider credentials from environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    /// Create a new environment credential source
    pub const fn new() -> Self {
        Self
    }

    /// Read every provider's key from the process environment
    pub fn load(&self) -> CredentialSet {
        self.load_with(|name| match env::var(name) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                warn!(env_var = %name, "Credential contains invalid UTF-8, ignoring");
                None
            },
        })
    }

    /// Read every provider's key through `lookup`
    pub fn load_with(&self, lookup: impl Fn(&str) -> Option<String>) -> CredentialSet {
        let mut credentials = CredentialSet::new();

        for kind in ProviderKind::ALL {
            let env_var = kind.credential_env_var();
            match lookup(env_var) {
                Some(value) => {
                    debug!(provider = %kind, env_var = %env_var, "Credential found");
                    credentials.insert(kind, value);
                },
                None => debug!(provider = %kind, env_var = %env_var, "No credential in environment"),
            }
        }

        info!(
            configured = credentials.configured().len(),
            "Loaded provider credentials from environment"
        );
        credentials
    }
}
