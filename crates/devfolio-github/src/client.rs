//! GitHub lookup client with builder pattern.
//!
//! Provides the interface the profile API uses to list a username's
//! most recently created repositories.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::error::{GithubError, Result};

/// Default GitHub API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default User-Agent header. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "devfolio";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How many repositories a lookup requests.
const REPOS_PER_PAGE: u8 = 5;

/// Looks up a username's recently created repositories.
#[async_trait]
pub trait RepoLookup: Send + Sync {
    /// Return the raw JSON body listing the user's most recently created
    /// repositories.
    async fn recent_repos(&self, username: &str) -> Result<Value>;
}

/// GitHub REST API client.
///
/// Use [`GithubClient::builder`] to construct instances with custom
/// configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use devfolio_github::{GithubClient, RepoLookup};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GithubClient::builder()
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
///
/// let repos = client.recent_repos("octocat").await?;
/// println!("{}", repos);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GithubClient {
    base_url: String,
    http_client: reqwest::Client,
    token: Option<String>,
}

impl GithubClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> GithubClientBuilder {
        GithubClientBuilder::new()
    }
}

#[async_trait]
impl RepoLookup for GithubClient {
    async fn recent_repos(&self, username: &str) -> Result<Value> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=created",
            self.base_url, username, REPOS_PER_PAGE
        );
        debug!("fetching github repos: {}", url);

        let mut request = self.http_client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GithubError::Decode(e.to_string()))
    }
}

/// Builder for [`GithubClient`].
pub struct GithubClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
    token: Option<String>,
}

impl GithubClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }

    /// Override the API base URL (used by tests and proxies).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Authenticate requests with a bearer token for a higher rate limit.
    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<GithubClient> {
        let http_client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| GithubError::Configuration(e.to_string()))?;

        Ok(GithubClient {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            http_client,
            token: self.token,
        })
    }
}

impl Default for GithubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GithubClient {
        GithubClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn passes_upstream_body_through() {
        let server = MockServer::start().await;
        let body = json!([{"name": "repo-one"}, {"name": "repo-two"}]);
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .and(query_param("per_page", "5"))
            .and(query_param("sort", "created"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let repos = client_for(&server).await.recent_repos("octocat").await.unwrap();
        assert_eq!(repos, body);
    }

    #[tokio::test]
    async fn maps_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .recent_repos("nonexistent-user")
            .await
            .unwrap_err();
        assert!(matches!(err, GithubError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn maps_connect_failure_to_transport() {
        // Nothing listens on port 1; the connection is refused.
        let client = GithubClient::builder()
            .base_url("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let err = client.recent_repos("octocat").await.unwrap_err();
        assert!(matches!(err, GithubError::Transport(_)));
    }

    #[tokio::test]
    async fn maps_invalid_json_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .recent_repos("octocat")
            .await
            .unwrap_err();
        assert!(matches!(err, GithubError::Decode(_)));
    }
}
