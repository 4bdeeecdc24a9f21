//! HTTP implementation of [`NetworkingService`].
//!
//! Talks to the campaign API over reqwest and maps transport failures onto
//! [`FetchError`]. Refused connections, DNS failures and timeouts all count
//! as "no internet connection".

use crate::config::ApiConfig;
use crate::listing::model::{Campaign, CampaignList};
use crate::network::error::FetchError;
use crate::network::request::CampaignListingRequest;
use crate::network::service::NetworkingService;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    metadata: ListingMetadata,
}

#[derive(Debug, Deserialize)]
struct ListingMetadata {
    #[serde(default)]
    data: Vec<CampaignRecord>,
}

#[derive(Debug, Deserialize)]
struct CampaignRecord {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<ImageRecord>,
}

#[derive(Debug, Deserialize)]
struct ImageRecord {
    url: String,
}

impl From<CampaignRecord> for Campaign {
    fn from(record: CampaignRecord) -> Self {
        Campaign {
            name: record.name,
            description: record.description.unwrap_or_default(),
            image_url: record.image.map(|i| i.url),
        }
    }
}

pub struct HttpNetworkingService {
    client: Client,
    base_url: Url,
}

impl HttpNetworkingService {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            bail!("Invalid API timeout: timeout_secs must be at least 1");
        }
        let base_url = base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, base_url })
    }

    /// Absolute URL of an endpoint path.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Invalid endpoint path: {}", path))
    }
}

fn base_url(base_url: &str) -> Result<Url> {
    // Without a trailing slash, join() would replace the last path segment
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base).with_context(|| format!("Invalid API base URL: {}", base_url))
}

#[async_trait]
impl NetworkingService for HttpNetworkingService {
    async fn list_campaigns(
        &self,
        request: CampaignListingRequest,
    ) -> Result<CampaignList, FetchError> {
        let url = self
            .resolve(&request.path)
            .map_err(|e| FetchError::Transport(format!("{:#}", e)))?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let envelope: ListingEnvelope = response.json().await?;
        Ok(CampaignList::new(
            envelope
                .metadata
                .data
                .into_iter()
                .map(Campaign::from)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn api_config(base_url: String) -> ApiConfig {
        ApiConfig {
            base_url,
            listing_path: "campaigns".into(),
            timeout_secs: 5,
            ..ApiConfig::default()
        }
    }

    fn listing() -> CampaignListingRequest {
        CampaignListingRequest::new("campaigns")
    }

    #[test]
    fn test_resolve_joins_paths() {
        let service = HttpNetworkingService::new(&api_config("http://example.com/api".into())).unwrap();
        let url = service.resolve("/campaigns").unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/campaigns");

        let service = HttpNetworkingService::new(&api_config("http://example.com/api/".into())).unwrap();
        let url = service.resolve("campaigns").unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/campaigns");

        assert!(HttpNetworkingService::new(&api_config("not a url".into())).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..api_config("http://example.com".into())
        };
        let err = HttpNetworkingService::new(&config).err().unwrap();
        assert!(err.to_string().contains("timeout_secs"), "got {}", err);
    }

    #[tokio::test]
    async fn test_request_path_selects_endpoint() {
        let router = Router::new()
            .route(
                "/campaigns",
                get(|| async { Json(serde_json::json!({ "metadata": { "data": [] } })) }),
            )
            .route(
                "/featured",
                get(|| async {
                    Json(serde_json::json!({ "metadata": { "data": [{ "name": "Featured" }] } }))
                }),
            );
        let base = serve(router).await;
        let service = HttpNetworkingService::new(&api_config(base)).unwrap();

        let list = service
            .list_campaigns(CampaignListingRequest::new("/featured"))
            .await
            .unwrap();
        assert_eq!(list.get(0).map(|c| c.name.as_str()), Some("Featured"));

        let list = service.list_campaigns(listing()).await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_lists_campaigns() {
        let router = Router::new().route(
            "/campaigns",
            get(|| async {
                Json(serde_json::json!({
                    "metadata": { "data": [
                        {
                            "name": "Summer Sale",
                            "description": "Everything must go",
                            "image": { "url": "https://img.example.com/summer.jpg" }
                        },
                        { "name": "Bare" }
                    ] }
                }))
            }),
        );
        let base = serve(router).await;
        let service = HttpNetworkingService::new(&api_config(base)).unwrap();

        let list = service
            .list_campaigns(listing())
            .await
            .unwrap();
        assert_eq!(list.len(), 2);
        let first = list.get(0).unwrap();
        assert_eq!(first.name, "Summer Sale");
        assert_eq!(first.description, "Everything must go");
        assert_eq!(
            first.image_url.as_deref(),
            Some("https://img.example.com/summer.jpg")
        );
        let second = list.get(1).unwrap();
        assert_eq!(second.description, "");
        assert_eq!(second.image_url, None);
    }

    #[tokio::test]
    async fn test_server_error_is_not_connectivity() {
        let router = Router::new().route(
            "/campaigns",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;
        let service = HttpNetworkingService::new(&api_config(base)).unwrap();

        let err = service
            .list_campaigns(listing())
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Http { status: 500 });
        assert!(!err.is_connectivity());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route("/campaigns", get(|| async { "not json" }));
        let base = serve(router).await;
        let service = HttpNetworkingService::new(&api_config(base)).unwrap();

        let err = service
            .list_campaigns(listing())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_refused_connection_is_connectivity() {
        // Grab a free port, then close it so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let service =
            HttpNetworkingService::new(&api_config(format!("http://127.0.0.1:{}", port)))
                .unwrap();

        let err = service
            .list_campaigns(listing())
            .await
            .unwrap_err();
        assert!(err.is_connectivity(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_slow_server_is_connectivity() {
        let router = Router::new().route(
            "/campaigns",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(serde_json::json!({ "metadata": { "data": [] } }))
            }),
        );
        let base = serve(router).await;
        let config = ApiConfig {
            timeout_secs: 1,
            ..api_config(base)
        };
        let service = HttpNetworkingService::new(&config).unwrap();

        let err = service.list_campaigns(listing()).await.unwrap_err();
        assert!(err.is_connectivity(), "got {:?}", err);
    }
}
