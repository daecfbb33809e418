use super::ieee_csv::parse_ieee_csv;
use async_trait::async_trait;
use oui_data_application::ports::OuiFeed;
use oui_data_domain::config::GeneratorConfig;
use oui_data_domain::{DomainError, OuiMapping};
use std::time::Duration;
use tracing::{debug, info};

/// Upper bound on the registry download. The MA-L export is a few MB.
pub const MAX_FEED_BYTES: usize = 50_000_000;

/// Downloads the IEEE MA-L registry CSV over HTTP(S).
pub struct HttpOuiFeed {
    url: String,
    client: reqwest::Client,
    max_bytes: usize,
}

impl HttpOuiFeed {
    pub fn new(url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::FeedError(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
            max_bytes: MAX_FEED_BYTES,
        })
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, DomainError> {
        Self::new(
            config.feed_url.clone(),
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }

    async fn fetch_text(&self) -> Result<String, DomainError> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::FeedError(format!("fetch error for {}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(DomainError::FeedError(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        if let Some(len) = response.content_length() {
            if len > self.max_bytes as u64 {
                return Err(self.too_large());
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DomainError::FeedError(format!("read error for {}: {}", self.url, e)))?
        {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(self.too_large());
            }
            body.extend_from_slice(&chunk);
        }

        String::from_utf8(body)
            .map_err(|e| DomainError::FeedError(format!("invalid UTF-8 from {}: {}", self.url, e)))
    }

    fn too_large(&self) -> DomainError {
        DomainError::FeedError(format!(
            "response from {} exceeds {} bytes",
            self.url, self.max_bytes
        ))
    }
}

#[async_trait]
impl OuiFeed for HttpOuiFeed {
    async fn fetch(&self) -> Result<OuiMapping, DomainError> {
        info!(url = %self.url, "Downloading IEEE OUI registry");
        let text = self.fetch_text().await?;
        debug!(bytes = text.len(), "IEEE OUI registry downloaded");

        parse_ieee_csv(&text)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on an ephemeral local port.
    async fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/oui.csv", addr)
    }

    fn feed(url: String) -> HttpOuiFeed {
        HttpOuiFeed::new(url, Duration::from_secs(5), "oui-data-test").unwrap()
    }

    const REGISTRY: &str = "Registry,Assignment,Organization Name,Organization Address\nMA-L,B827EB,Raspberry Pi Foundation,Mitchell Wood House Caldecote Cambridgeshire CB23 7NU US\n";

    #[test]
    fn test_from_config_uses_feed_url() {
        let config = GeneratorConfig::default();
        let feed = HttpOuiFeed::from_config(&config).unwrap();
        assert_eq!(feed.describe(), config.feed_url);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_feed_error() {
        let feed = HttpOuiFeed::new(
            "http://127.0.0.1:9/oui.csv",
            Duration::from_secs(2),
            "oui-data-test",
        )
        .unwrap();

        let result = feed.fetch().await;

        assert!(matches!(result, Err(DomainError::FeedError(_))));
    }

    #[tokio::test]
    async fn test_fetch_parses_registry() {
        let url = serve_once("200 OK", REGISTRY).await;

        let mapping = feed(url).fetch().await.unwrap();

        assert_eq!(mapping.len(), 1);
        assert!(mapping["B827EB"].starts_with("Raspberry Pi Foundation\n"));
    }

    #[tokio::test]
    async fn test_server_error_is_feed_error() {
        let url = serve_once("500 Internal Server Error", "oops").await;

        let result = feed(url).fetch().await;

        match result {
            Err(DomainError::FeedError(msg)) => assert!(msg.contains("HTTP 500"), "{}", msg),
            other => panic!("expected FeedError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_oversized_body_is_feed_error() {
        let url = serve_once("200 OK", REGISTRY).await;

        let result = feed(url).with_max_bytes(16).fetch().await;

        match result {
            Err(DomainError::FeedError(msg)) => assert!(msg.contains("exceeds 16 bytes"), "{}", msg),
            other => panic!("expected FeedError, got {:?}", other),
        }
    }
}
