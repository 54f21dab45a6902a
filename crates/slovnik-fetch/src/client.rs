use std::time::Duration;

use slovnik_config::network::NetworkConfig;

/// The site serves the Czech-side entry when the source language is Czech.
pub fn force_lang_flag(source: &str) -> u8 {
    if source == "cz" { 1 } else { 0 }
}

/// Blocking client for the dictionary site. One lookup is one GET; there
/// are no retries, a transport failure ends the invocation.
pub struct SlovnikClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl SlovnikClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Fetch the raw result page for a query. The query string is
    /// URL-encoded by the client.
    pub fn fetch_page(&self, source: &str, target: &str, query: &str) -> Result<String, FetchError> {
        let url = result_url(&self.base_url, source, target);
        tracing::debug!(%url, query, "fetching result page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("forceLang", &force_lang_flag(source).to_string()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.text()?)
    }
}

fn result_url(base_url: &str, source: &str, target: &str) -> String {
    format!("{}/{}-{}/", base_url.trim_end_matches('/'), source, target)
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_lang_follows_the_source_language() {
        assert_eq!(force_lang_flag("cz"), 1);
        assert_eq!(force_lang_flag("en"), 0);
    }

    #[test]
    fn test_result_url_shape() {
        assert_eq!(
            result_url("https://slovnik.seznam.cz", "cz", "en"),
            "https://slovnik.seznam.cz/cz-en/"
        );
        assert_eq!(
            result_url("https://slovnik.seznam.cz/", "en", "cz"),
            "https://slovnik.seznam.cz/en-cz/"
        );
    }
}
