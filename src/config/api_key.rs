use std::env;

/// Name of the environment variable holding the upstream credential.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Supplies the upstream credential at invocation time.
///
/// The relay asks on every request rather than caching the value, so a key
/// added to the environment after startup is picked up without a restart.
pub trait ApiKeySource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads the credential from the process environment.
#[derive(Debug, Clone)]
pub struct EnvApiKey {
    var: String,
}

impl EnvApiKey {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvApiKey {
    fn default() -> Self {
        Self::new(OPENAI_API_KEY_VAR)
    }
}

impl ApiKeySource for EnvApiKey {
    fn api_key(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed credential, or a fixed absence of one.
#[derive(Debug, Clone, Default)]
pub struct StaticApiKey(Option<String>);

impl StaticApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl ApiKeySource for StaticApiKey {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }
}

impl<F> ApiKeySource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn api_key(&self) -> Option<String> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_key() {
        assert_eq!(StaticApiKey::new("sk-test").api_key(), Some("sk-test".to_string()));
        assert_eq!(StaticApiKey::missing().api_key(), None);
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        assert_eq!(StaticApiKey::new("").api_key(), None);
    }

    #[test]
    fn test_unset_env_var() {
        let source = EnvApiKey::new("CONCIERGE_RELAY_TEST_KEY_THAT_IS_NEVER_SET");
        assert_eq!(source.api_key(), None);
    }

    #[test]
    fn test_closure_source() {
        let source = || Some("from-closure".to_string());
        assert_eq!(source.api_key(), Some("from-closure".to_string()));
    }
}
