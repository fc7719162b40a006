use std::any::Any;

use triage_states::State;

/// Where the request backend lives.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn api_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: std::env::var("TRIAGE_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_owned()),
        }
    }
}

impl State for AppConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let config = AppConfig::new("http://localhost:3000/".to_owned());
        assert_eq!(config.api_url(), "http://localhost:3000");

        let config = AppConfig::new("http://localhost:3000".to_owned());
        assert_eq!(config.api_url(), "http://localhost:3000");
    }
}
