use crate::utils::error::{KataError, Result};
use futures_util::future::try_join_all;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collected {
    pub char_count: usize,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

/// 只接受 http/https 的絕對網址
fn check_url(url: &str) -> Result<()> {
    let invalid = |reason: String| KataError::InvalidUrl {
        url: url.to_string(),
        reason,
    };
    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme '{}'", scheme))),
    }
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// 非 2xx 狀態視為錯誤
    pub async fn get_text(&self, url: &str) -> Result<String> {
        check_url(url)?;
        tracing::debug!("Making GET request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status from {}: {}", url, status);

        if !status.is_success() {
            return Err(KataError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    pub async fn get_lines(&self, url: &str) -> Result<Vec<String>> {
        let body = self.get_text(url).await?;
        Ok(body.lines().map(str::to_string).collect())
    }

    pub async fn collect(&self, url: &str) -> Result<Collected> {
        let body = self.get_text(url).await?;
        Ok(Collected {
            char_count: body.chars().count(),
            body,
        })
    }

    /// 同時發出所有請求，結果依參數順序排列
    pub async fn juggle(&self, urls: &[String]) -> Result<Vec<String>> {
        tracing::info!("🤹 Fetching {} URLs concurrently", urls.len());
        try_join_all(urls.iter().map(|url| self.get_text(url))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client() -> HttpClient {
        HttpClient::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_collect_counts_characters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/story");
            then.status(200).body("héllo\nworld");
        });

        let collected = client().collect(&server.url("/story")).await.unwrap();

        mock.assert();
        assert_eq!(collected.char_count, 11);
        assert_eq!(collected.body, "héllo\nworld");
    }

    #[tokio::test]
    async fn test_get_lines() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lines");
            then.status(200).body("one\ntwo\r\nthree");
        });

        let lines = client().get_lines(&server.url("/lines")).await.unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let err = client().get_text(&server.url("/missing")).await.unwrap_err();
        assert!(matches!(err, KataError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_rejects_non_http_url() {
        let err = client().get_text("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, KataError::InvalidUrl { .. }));
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Input);

        let err = client().get_text("not a url").await.unwrap_err();
        assert!(matches!(err, KataError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_juggle_preserves_argument_order() {
        let server = MockServer::start();
        for (path, body) in [("/a", "first"), ("/b", "second"), ("/c", "third")] {
            server.mock(|when, then| {
                when.method(GET).path(path);
                then.status(200).body(body);
            });
        }
        // 第一個回應最慢
        let slow = MockServer::start();
        slow.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_millis(200))
                .body("slowest");
        });

        let urls = vec![
            slow.url("/slow"),
            server.url("/a"),
            server.url("/b"),
            server.url("/c"),
        ];
        let bodies = client().juggle(&urls).await.unwrap();
        assert_eq!(bodies, vec!["slowest", "first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_juggle_fails_fast() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("fine");
        });
        server.mock(|when, then| {
            when.method(GET).path("/boom");
            then.status(500);
        });

        let urls = vec![server.url("/ok"), server.url("/boom")];
        assert!(client().juggle(&urls).await.is_err());
    }
}
