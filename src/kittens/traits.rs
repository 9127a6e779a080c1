//! Trait abstraction for the cat image API to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Trait for cat image fetching operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatImageSource: Send + Sync {
    /// Fetch the URL of a random cat image
    async fn random_image(&self) -> Result<String>;

    /// Fetch the URL of a random cat gif
    async fn random_gif(&self) -> Result<String>;
}
