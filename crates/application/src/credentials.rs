//! Provider credentials for one run

use std::collections::BTreeMap;

use domain::ProviderKind;
use secrecy::{ExposeSecret, SecretString};

/// API keys by provider
///
/// A provider without a key is skipped silently. Blank keys count as absent.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    keys: BTreeMap<ProviderKind, SecretString>,
}

impl CredentialSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key, builder style
    #[must_use]
    pub fn with(mut self, provider: ProviderKind, key: impl Into<String>) -> Self {
        self.insert(provider, key);
        self
    }

    /// Add or replace a key; blank keys are ignored
    pub fn insert(&mut self, provider: ProviderKind, key: impl Into<String>) {
        let key = key.into();
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            self.keys
                .insert(provider, SecretString::from(trimmed.to_string()));
        }
    }

    /// Key for a provider
    #[must_use]
    pub fn get(&self, provider: ProviderKind) -> Option<&SecretString> {
        self.keys.get(&provider)
    }

    /// Whether a provider has a key
    #[must_use]
    pub fn has(&self, provider: ProviderKind) -> bool {
        self.keys.contains_key(&provider)
    }

    /// Providers with a key, in dispatch order
    #[must_use]
    pub fn configured(&self) -> Vec<ProviderKind> {
        self.keys.keys().copied().collect()
    }

    /// Whether no provider has a key
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Fill providers missing here from `fallback`
    ///
    /// Keys already present win, so environment keys take precedence over
    /// keys typed into the page.
    #[must_use]
    pub fn or_else(mut self, fallback: &Self) -> Self {
        for (provider, key) in &fallback.keys {
            self.keys
                .entry(*provider)
                .or_insert_with(|| SecretString::from(key.expose_secret().to_string()));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_absent() {
        let credentials = CredentialSet::new()
            .with(ProviderKind::OpenAi, "   ")
            .with(ProviderKind::Groq, "");
        assert!(credentials.is_empty());
        assert!(!credentials.has(ProviderKind::OpenAi));
    }

    #[test]
    fn keys_are_trimmed() {
        let credentials = CredentialSet::new().with(ProviderKind::Anthropic, " ak-1 \n");
        assert_eq!(
            credentials
                .get(ProviderKind::Anthropic)
                .map(ExposeSecret::expose_secret),
            Some("ak-1")
        );
    }

    #[test]
    fn configured_is_in_dispatch_order() {
        let credentials = CredentialSet::new()
            .with(ProviderKind::Groq, "g")
            .with(ProviderKind::OpenAi, "o");
        assert_eq!(
            credentials.configured(),
            vec![ProviderKind::OpenAi, ProviderKind::Groq]
        );
    }

    #[test]
    fn existing_keys_win_over_fallback() {
        let env = CredentialSet::new().with(ProviderKind::OpenAi, "env-key");
        let page = CredentialSet::new()
            .with(ProviderKind::OpenAi, "page-key")
            .with(ProviderKind::Groq, "page-groq");

        let merged = env.or_else(&page);

        assert_eq!(
            merged.get(ProviderKind::OpenAi).map(ExposeSecret::expose_secret),
            Some("env-key")
        );
        assert_eq!(
            merged.get(ProviderKind::Groq).map(ExposeSecret::expose_secret),
            Some("page-groq")
        );
        assert!(!merged.has(ProviderKind::Anthropic));
    }

    #[test]
    fn debug_does_not_leak_keys() {
        let credentials = CredentialSet::new().with(ProviderKind::OpenAi, "sk-secret");
        assert!(!format!("{credentials:?}").contains("sk-secret"));
    }
}
