//! Deploy-time configuration
//!
//! A static WASM bundle has no process environment, so settings are baked in
//! from the build environment with `option_env!`.

const DEFAULT_MAP_QUERY: &str = "Heliopolis Cairo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// POST target for the contact form; `None` leaves the form unconnected
    pub contact_endpoint: Option<String>,
    /// Search query for the embedded map
    pub map_query: String,
}

impl SiteConfig {
    /// Read `GULF_CONTACT_ENDPOINT` and `GULF_MAP_QUERY` from the build environment
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GULF_CONTACT_ENDPOINT"), option_env!("GULF_MAP_QUERY"))
    }

    fn from_values(endpoint: Option<&str>, map_query: Option<&str>) -> Self {
        let contact_endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        let map_query = map_query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_MAP_QUERY)
            .to_string();

        Self {
            contact_endpoint,
            map_query,
        }
    }

    /// Embed URL for the map iframe
    pub fn map_embed_url(&self) -> String {
        format!(
            "https://maps.google.com/maps?q={}&t=&z=13&ie=UTF8&iwloc=&output=embed",
            urlencoding::encode(&self.map_query)
        )
    }

    /// Link for "Open in Maps"
    pub fn map_link_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&self.map_query)
        )
    }
}

/// Most verbose level forwarded to the browser console
pub fn log_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let config = SiteConfig::default();
        assert!(config.contact_endpoint.is_none());
        assert_eq!(config.map_query, "Heliopolis Cairo");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = SiteConfig::from_values(Some("   "), Some(""));
        assert!(config.contact_endpoint.is_none());
        assert_eq!(config.map_query, DEFAULT_MAP_QUERY);
    }

    #[test]
    fn test_endpoint_is_trimmed() {
        let config = SiteConfig::from_values(Some(" https://forms.example.com/gulf "), None);
        assert_eq!(
            config.contact_endpoint.as_deref(),
            Some("https://forms.example.com/gulf")
        );
    }

    #[test]
    fn test_map_query_with_reserved_characters() {
        let config = SiteConfig::from_values(None, Some("Smith & Sons, Heliopolis #2"));
        let encoded = "Smith%20%26%20Sons%2C%20Heliopolis%20%232";

        let embed = config.map_embed_url();
        assert!(embed.contains(&format!("q={}&t=", encoded)), "{embed}");
        assert!(!embed.contains('#'));

        let link = config.map_link_url();
        assert!(link.ends_with(&format!("query={}", encoded)), "{link}");
    }

    #[test]
    fn test_log_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        assert_eq!(log_level(), expected);
    }

    #[test]
    fn test_map_embed_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.map_embed_url(),
            "https://maps.google.com/maps?q=Heliopolis%20Cairo&t=&z=13&ie=UTF8&iwloc=&output=embed"
        );
        assert!(config.map_link_url().ends_with("query=Heliopolis%20Cairo"));
    }
}
