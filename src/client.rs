//! C More EPG API client implementation.

use crate::api::EpgApi;
use crate::error::{EpgError, Result};
use crate::types::{Country, Language, Meta, Response};
use crate::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Configuration for the EPG client
#[derive(Debug, Clone)]
pub struct EpgClientConfig {
    /// Base URL for the EPG API
    pub base_url: String,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for EpgClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

/// Main EPG API client.
///
/// Holds no per-request state, so one client can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct EpgClient {
    /// HTTP client
    http_client: Client,
    /// Parsed base URL
    base_url: Url,
    /// Client configuration
    config: EpgClientConfig,
}

impl EpgClient {
    /// Create a new EPG client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(EpgClientConfig::default())
    }

    /// Create a new EPG client with custom configuration
    pub fn with_config(config: EpgClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Self::with_http_client(config, http_client)
    }

    /// Create a new EPG client on top of a caller supplied HTTP client.
    ///
    /// `config.timeout_seconds` is not applied; the HTTP client's own timeout is used.
    pub fn with_http_client(config: EpgClientConfig, http_client: Client) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(EpgError::invalid_input(format!(
                "Base URL cannot be a base: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &EpgClientConfig {
        &self.config
    }

    /// Get the EPG for a single date
    pub async fn get(
        &self,
        country: &Country,
        language: &Language,
        date: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        let url = self.build_url(&["epg", country.as_str(), language.as_str(), date], params)?;
        self.fetch(url, params).await
    }

    /// Get the EPG for a period of dates
    pub async fn get_period(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        let url = self.build_url(
            &["epg", country.as_str(), language.as_str(), from_date, to_date],
            params,
        )?;
        self.fetch(url, params).await
    }

    /// Get the EPG of a channel group for a period of dates
    pub async fn get_channel_group(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        channel_group: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        let url = self.build_url(
            &[
                "epg",
                country.as_str(),
                language.as_str(),
                from_date,
                to_date,
                channel_group,
            ],
            params,
        )?;
        self.fetch(url, params).await
    }

    /// Get the EPG of a single channel for a period of dates
    pub async fn get_channel(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        channel_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        let url = self.build_url(
            &[
                "epg",
                country.as_str(),
                language.as_str(),
                from_date,
                to_date,
                channel_id,
            ],
            params,
        )?;
        self.fetch(url, params).await
    }

    /// Build a request URL from path segments and query parameters.
    ///
    /// Segments replace any path of the base URL. No query string is added when
    /// `params` is empty.
    pub fn build_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|_| EpgError::invalid_input("Base URL cannot be a base"))?
            .clear()
            .extend(segments);

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Perform the GET request and decode the XML response
    async fn fetch(&self, url: Url, params: &[(&str, &str)]) -> Result<Response> {
        let path = url.path().to_string();
        debug!("Making request to: {}", url);

        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/xml")
            .header(USER_AGENT, self.config.user_agent.as_str())
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                warn!("EPG resource not found: {}", path);
                return Err(EpgError::not_found(path));
            }
            status => {
                warn!("Unexpected HTTP status {} for {}", status, path);
                return Err(EpgError::UnknownError {
                    status: status.as_u16(),
                });
            }
        }

        let xml_content = response.text().await?;
        debug!("Received {} bytes of XML for {}", xml_content.len(), path);

        let mut parsed: Response = quick_xml::de::from_str(&xml_content).map_err(|e| {
            warn!("Failed to decode EPG response for {}: {}", path, e);
            e
        })?;

        info!(
            "Fetched EPG {} ({} - {}): {} day(s)",
            path,
            parsed.from_date,
            parsed.until_date,
            parsed.days.len()
        );

        parsed.meta = Some(Meta {
            path,
            query: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });

        Ok(parsed)
    }
}

impl EpgApi for EpgClient {
    async fn get(
        &self,
        country: &Country,
        language: &Language,
        date: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        EpgClient::get(self, country, language, date, params).await
    }

    async fn get_period(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        EpgClient::get_period(self, country, language, from_date, to_date, params).await
    }

    async fn get_channel_group(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        channel_group: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        EpgClient::get_channel_group(
            self,
            country,
            language,
            from_date,
            to_date,
            channel_group,
            params,
        )
        .await
    }

    async fn get_channel(
        &self,
        country: &Country,
        language: &Language,
        from_date: &str,
        to_date: &str,
        channel_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Response> {
        EpgClient::get_channel(
            self, country, language, from_date, to_date, channel_id, params,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EpgClient::new().unwrap();
        assert_eq!(client.config().base_url, "https://api.cmore.se");
        assert_eq!(client.config().timeout_seconds, 20);
        assert!(client.config().user_agent.contains("cmore-epg"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = EpgClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            EpgClient::with_config(config),
            Err(EpgError::UrlParsing(_))
        ));

        let config = EpgClientConfig {
            base_url: "mailto:epg@example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            EpgClient::with_config(config),
            Err(EpgError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_url_building() {
        let client = EpgClient::new().unwrap();

        let url = client.build_url(&["foo"], &[("bar", "baz")]).unwrap();
        assert_eq!(url.as_str(), "https://api.cmore.se/foo?bar=baz");

        let url = client
            .build_url(&["epg", "se", "sv", "2017-01-25"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.cmore.se/epg/se/sv/2017-01-25");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_building_encodes() {
        let client = EpgClient::new().unwrap();

        let url = client
            .build_url(&["epg", "se", "sv", "a b/c"], &[("genre", "drama & comedy")])
            .unwrap();
        assert_eq!(url.path(), "/epg/se/sv/a%20b%2Fc");
        assert_eq!(url.query(), Some("genre=drama+%26+comedy"));
    }

    #[test]
    fn test_url_building_replaces_base_path() {
        let config = EpgClientConfig {
            base_url: "http://example.com/api/?token=1".to_string(),
            ..Default::default()
        };
        let client = EpgClient::with_config(config).unwrap();

        let url = client.build_url(&["epg", "dk", "da"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/epg/dk/da");
    }

    #[test]
    fn test_with_http_client() {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let config = EpgClientConfig {
            user_agent: "Test-Agent".to_string(),
            ..Default::default()
        };

        let client = EpgClient::with_http_client(config, http_client).unwrap();
        assert_eq!(client.config().user_agent, "Test-Agent");
    }
}
