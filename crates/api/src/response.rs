use std::sync::Arc;

use super::{endpoint::Endpoint, error::Error};
use rblog_types::post::Post;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Posts(Arc<Vec<Post>>),
    Post(Arc<Post>),
}

impl ClientResponse {
    pub async fn parse(
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<Self, reqwest::Error> {
        match endpoint {
            Endpoint::Posts => Ok(ClientResponse::Posts(Arc::new(resp.json().await?))),
            Endpoint::Post(_) => Ok(ClientResponse::Post(Arc::new(resp.json().await?))),
        }
    }
}

/// Error payload sent by the posts API, e.g. `{"error": "Post not found"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Turns a non-success response into an error, keeping the server's
    /// message when the body carries one.
    pub async fn into_error(endpoint: &Endpoint, resp: reqwest::Response) -> Error {
        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().map(|body| body.error);
        if status == reqwest::StatusCode::NOT_FOUND {
            Error::NotFound(message.unwrap_or_else(|| endpoint.to_string()))
        } else {
            Error::StatusCode {
                status: status.as_u16(),
                message,
            }
        }
    }
}
