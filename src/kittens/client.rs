//! HTTP client for TheCatApi

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::traits::CatImageSource;

/// Default endpoint for random cat images
pub const DEFAULT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Gif hunting gives up after this many fetches
const GIF_ATTEMPTS: usize = 32;

/// One entry of the images/search response
#[derive(Debug, Clone, Deserialize)]
struct CatImage {
    url: String,
}

/// Client for TheCatApi images/search endpoint
#[derive(Debug, Clone)]
pub struct TheCatApiClient {
    http: reqwest::Client,
    api_url: String,
    api_token: Option<String>,
}

impl TheCatApiClient {
    pub fn new(api_url: Option<String>, api_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token,
        }
    }

    async fn fetch_one(&self) -> Result<String> {
        let mut request = self.http.get(&self.api_url);
        if let Some(token) = &self.api_token {
            request = request.header("x-api-key", token);
        }
        let images: Vec<CatImage> = request
            .send()
            .await
            .context("cat API request failed")?
            .error_for_status()
            .context("cat API returned an error status")?
            .json()
            .await
            .context("cat API returned malformed JSON")?;
        match images.into_iter().next() {
            Some(image) => Ok(image.url),
            None => bail!("cat API returned an empty result"),
        }
    }
}

/// True for URLs the kittens page treats as animated
fn is_gif_url(url: &str) -> bool {
    url.ends_with(".gif")
}

#[async_trait]
impl CatImageSource for TheCatApiClient {
    async fn random_image(&self) -> Result<String> {
        self.fetch_one().await
    }

    async fn random_gif(&self) -> Result<String> {
        // The endpoint has no format filter; refetch until a gif shows up,
        // bounded so a run of stills cannot hang the key handler
        for _ in 0..GIF_ATTEMPTS {
            let url = self.fetch_one().await?;
            if is_gif_url(&url) {
                return Ok(url);
            }
        }
        bail!("no gif among {GIF_ATTEMPTS} fetches")
    }
}
