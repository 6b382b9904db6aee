//! Fetches users and posts and joins them into the page's initial data.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::domain::{Post, User};
use tracing::{debug, info};
use url::Url;

use crate::{aggregate::attach_posts, config::Settings, error::LoadError};

#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, LoadError>;
    async fn fetch_posts(&self) -> Result<Vec<Post>, LoadError>;
}

pub struct HttpDirectorySource {
    http: Client,
    users_url: Url,
    posts_url: Url,
}

impl HttpDirectorySource {
    pub fn new(users_url: Url, posts_url: Url) -> Self {
        Self {
            http: Client::new(),
            users_url,
            posts_url,
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, LoadError> {
        Ok(Self::new(settings.users_url()?, settings.posts_url()?))
    }

    async fn get_json_array<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        url: &Url,
    ) -> Result<Vec<T>, LoadError> {
        debug!(resource, %url, "fetching");
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;

        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Status { resource, status });
        }

        let body = res
            .bytes()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;
        let records: Vec<T> = serde_json::from_slice(&body)
            .map_err(|source| LoadError::Decode { resource, source })?;
        debug!(resource, count = records.len(), "fetched");
        Ok(records)
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch_users(&self) -> Result<Vec<User>, LoadError> {
        self.get_json_array("users", &self.users_url).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, LoadError> {
        self.get_json_array("posts", &self.posts_url).await
    }
}

/// Runs both fetches concurrently and attaches each user's posts. Either
/// failure fails the whole load.
pub async fn load_directory<S>(source: &S) -> Result<Vec<User>, LoadError>
where
    S: DirectorySource + ?Sized,
{
    let (users, posts) = futures::try_join!(source.fetch_users(), source.fetch_posts())?;
    info!(
        users = users.len(),
        posts = posts.len(),
        "loaded user directory"
    );
    Ok(attach_posts(users, &posts))
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
