use rblog_types::post::PostId;
use reqwest::Url;
use std::fmt::{Display, Formatter};

use crate::error::Error;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    Posts,
    Post(PostId),
}

impl Endpoint {
    fn segments(&self) -> Vec<&str> {
        match self {
            Self::Posts => vec!["posts"],
            Self::Post(id) => vec!["posts", id.as_str()],
        }
    }

    /// Joins the endpoint onto `base_url` segment by segment, so an id is
    /// always one percent-encoded path segment. Ids that would name the
    /// collection or its parent (`""`, `.`, `..`) cannot exist.
    pub fn url(&self, base_url: &str) -> Result<Url, Error> {
        if let Self::Post(id) = self {
            if matches!(id.as_str(), "" | "." | "..") {
                return Err(Error::NotFound(self.to_string()));
            }
        }
        let invalid = || Error::InvalidUrl(base_url.to_string());
        let mut url = Url::parse(base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posts => write!(f, "posts"),
            Self::Post(id) => write!(f, "posts/{}", id),
        }
    }
}
