use crate::error::{FollowerError, Result};
use crate::models::{Follower, User};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 100;

/// HTTP client for the GitHub REST API.
///
/// Issues exactly one GET per call: no retry, no backoff, no cancellation
/// beyond dropping the future. Clones share the underlying connection pool,
/// so consumers take a cheap clone instead of an ambient singleton.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let base_url = Url::parse(API_BASE_URL).map_err(|_| FollowerError::InvalidUsername)?;
        Ok(GitHubClient {
            client: build_client()?,
            base_url,
        })
    }

    /// Client pointed at an alternate API host. Test fixtures and GitHub
    /// Enterprise installs use this; everything else wants [`Self::new`].
    pub fn with_base_url(base_url: Url) -> Result<Self> {
        Ok(GitHubClient {
            client: build_client()?,
            base_url,
        })
    }

    /// Fetch one page of followers for `username`.
    ///
    /// Pages are 1-based and 100 items wide; the page number is passed
    /// through unclamped, so pages past the end decode as an empty list per
    /// the server's semantics.
    pub async fn get_followers(&self, username: &str, page: u32) -> Result<Vec<Follower>> {
        let path = format!(
            "users/{}/followers?per_page={}&page={}",
            validated(username)?,
            PER_PAGE,
            page
        );
        let body = self.get(&path).await?;
        let followers: Vec<Follower> =
            serde_json::from_slice(&body).map_err(|_| FollowerError::InvalidData)?;
        debug!(username, page, count = followers.len(), "fetched follower page");
        Ok(followers)
    }

    /// Fetch the full profile for `username`. A malformed `created_at`
    /// timestamp in the response is a decode failure, not a transport one.
    pub async fn get_user(&self, username: &str) -> Result<User> {
        let path = format!("users/{}", validated(username)?);
        let body = self.get(&path).await?;
        let user: User = serde_json::from_slice(&body).map_err(|_| FollowerError::InvalidData)?;
        debug!(username, "fetched user profile");
        Ok(user)
    }

    /// GET an absolute URL and return the raw body. The avatar cache goes
    /// through here so image downloads share the transport error mapping.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let url = Url::parse(url).map_err(|_| FollowerError::InvalidUsername)?;
        self.execute(url).await
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| FollowerError::InvalidUsername)?;
        self.execute(url).await
    }

    async fn execute(&self, url: Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await
            .map_err(FollowerError::UnableToComplete)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FollowerError::InvalidResponse(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(FollowerError::UnableToComplete)?;
        if body.is_empty() {
            return Err(FollowerError::InvalidData);
        }
        Ok(body.to_vec())
    }
}

fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent("github-followers/0.1.0")
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(FollowerError::UnableToComplete)
}

/// A username that cannot form a valid request path is rejected before any
/// I/O happens.
fn validated(username: &str) -> Result<&str> {
    let malformed = username.is_empty()
        || username.chars().any(|c| c.is_whitespace())
        || username.contains(['/', '?', '#']);
    if malformed {
        return Err(FollowerError::InvalidUsername);
    }
    Ok(username)
}
