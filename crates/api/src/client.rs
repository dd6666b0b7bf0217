use rblog_types::post::{NewPost, Post, PostId};
use tracing::{debug, error};

use super::{
    endpoint::Endpoint,
    error::Error,
    response::{ClientResponse, ErrorBody},
};
use std::sync::Arc;

/// Configuration for the client.
/// base_url: Root of the posts API. (default: http://localhost:8080,
/// env: RBLOG_API_BASE_URL)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";
    pub const BASE_URL_ENV: &'static str = "RBLOG_API_BASE_URL";

    pub fn new(base_url: Option<String>) -> Self {
        Config { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var(Self::BASE_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty()),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(Self::DEFAULT_BASE_URL)
    }
}

/// A client for the blog's posts API.
/// Every call is a single request: no retries, no caching.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(cfg: Option<Config>) -> Self {
        Self {
            cfg: cfg.unwrap_or_default(),
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn url(&self, endpoint: &Endpoint) -> Result<reqwest::Url, Error> {
        endpoint.url(self.cfg.base_url())
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        let url = self.url(endpoint)?;
        debug!("Sending GET to {}", url);
        let resp = self.http.get(url).send().await?;
        let resp = Self::handle_response(endpoint, resp).await?;
        Ok(ClientResponse::parse(endpoint, resp).await?)
    }

    pub async fn post(&self, endpoint: &Endpoint, body: &NewPost) -> Result<(), Error> {
        let url = self.url(endpoint)?;
        debug!("Sending POST to {}", url);
        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(endpoint, resp).await.map(|_| ())
    }

    pub async fn handle_response(
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            debug!("request: {} status: {}", endpoint, status);
            Ok(resp)
        } else {
            error!("request {} status: {}", endpoint, status);
            Err(ErrorBody::into_error(endpoint, resp).await)
        }
    }

    pub async fn get_posts(&self) -> Result<Arc<Vec<Post>>, Error> {
        match self.get(&Endpoint::Posts).await? {
            ClientResponse::Posts(posts) => Ok(posts),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_post(&self, id: &PostId) -> Result<Arc<Post>, Error> {
        match self.get(&Endpoint::Post(id.clone())).await? {
            ClientResponse::Post(post) => Ok(post),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn create_post(&self, new_post: &NewPost) -> Result<(), Error> {
        self.post(&Endpoint::Posts, new_post).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
