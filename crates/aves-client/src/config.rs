//! Client configuration

/// Where the remote services live and how we identify ourselves.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the bird/user services.
    pub base_url: String,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            user_agent: "aves-client/0.1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081");
    }

    #[test]
    fn custom_base_url() {
        let config = ClientConfig::new("https://aves.example.cl");
        assert_eq!(config.base_url, "https://aves.example.cl");
        assert_eq!(config.user_agent, "aves-client/0.1");
    }
}
