//! Site configuration.
//!
//! The server loads it with `SiteConfig::from_env()` after calling
//! `dotenvy::dotenv()`, then writes the contact endpoint into the page head
//! as `<meta name="brdg-contact-endpoint">`. The browser reads it back with
//! `SiteConfig::from_document()`.

/// Endpoint the contact form posts to when nothing else is configured
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://brdg-contact-form.legalljp.workers.dev/";

/// Environment variable overriding the contact endpoint
pub const CONTACT_ENDPOINT_VAR: &str = "CONTACT_ENDPOINT";

/// `name` of the meta tag carrying the endpoint to the browser
pub const CONTACT_ENDPOINT_META: &str = "brdg-contact-endpoint";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// URL receiving contact form submissions as a JSON POST
    pub contact_endpoint: String,
}

impl SiteConfig {
    /// Build from any key lookup. Missing or blank values use the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let contact_endpoint = lookup(CONTACT_ENDPOINT_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string());
        Self { contact_endpoint }
    }

    /// Load from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the endpoint the server rendered into the page head.
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{CONTACT_ENDPOINT_META}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));
        Self::from_lookup(|key| (key == CONTACT_ENDPOINT_VAR).then(|| content.clone()).flatten())
    }

    /// Whether the endpoint differs from the built-in one
    pub fn is_custom_endpoint(&self) -> bool {
        self.contact_endpoint != DEFAULT_CONTACT_ENDPOINT
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Lookup Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert!(!config.is_custom_endpoint());
    }

    #[test]
    fn test_config_uses_configured_endpoint() {
        let config = SiteConfig::from_lookup(lookup_from(&[(
            "CONTACT_ENDPOINT",
            "https://contact.example.com/submit",
        )]));
        assert_eq!(config.contact_endpoint, "https://contact.example.com/submit");
        assert!(config.is_custom_endpoint());
    }

    #[test]
    fn test_config_blank_value_falls_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[("CONTACT_ENDPOINT", "   ")]));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_config_trims_whitespace() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[("CONTACT_ENDPOINT", " http://localhost:8787/ \n")]));
        assert_eq!(config.contact_endpoint, "http://localhost:8787/");
    }

    #[test]
    fn test_config_ignores_other_keys() {
        let config = SiteConfig::from_lookup(lookup_from(&[("DATABASE_URL", "mysql://localhost")]));
        assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_returns_config() {
        // Actual value depends on the environment
        let config = SiteConfig::from_env();
        assert!(!config.contact_endpoint.is_empty());
    }
}
