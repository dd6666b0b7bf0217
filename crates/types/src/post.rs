use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned post identifier.
/// The API may send it as a number or a string; it is kept as text and used
/// verbatim when building paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        PostId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        PostId(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => PostId(n.to_string()),
            RawId::Text(s) => PostId(s),
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    #[serde(
        rename = "authorId",
        alias = "user_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub author_id: Option<i64>,
}

impl Post {
    /// Client-side path of this post's detail view.
    pub fn path(&self) -> String {
        format!("/posts/{}", self.id)
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

/// Body of a create request. The server assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(rename = "authorId")]
    pub author_id: i64,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(author_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        NewPost {
            author_id,
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_numeric_id() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"title":"A","content":"x","authorId":2}"#).unwrap();
        assert_eq!(post.id.as_str(), "1");
        assert_eq!(post.author_id, Some(2));
        assert_eq!(post.path(), "/posts/1");
    }

    #[test]
    fn test_post_from_string_id() {
        let post: Post =
            serde_json::from_str(r#"{"id":"abc-9","title":"A","content":"x"}"#).unwrap();
        assert_eq!(post.id, PostId::from("abc-9"));
        assert_eq!(post.author_id, None);
    }

    #[test]
    fn test_post_accepts_user_id_alias() {
        let post: Post =
            serde_json::from_str(r#"{"id":7,"user_id":3,"title":"t","content":"c"}"#).unwrap();
        assert_eq!(post.author_id, Some(3));
    }

    #[test]
    fn test_new_post_uses_author_id_field() {
        let body = serde_json::to_value(NewPost::new(2, "Hello", "World")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"authorId": 2, "title": "Hello", "content": "World"})
        );
    }

    #[test]
    fn test_post_equality_is_by_id() {
        let a = Post {
            id: PostId::from(1),
            title: "a".to_string(),
            content: "x".to_string(),
            author_id: None,
        };
        let b = Post {
            title: "b".to_string(),
            ..a.clone()
        };
        assert_eq!(a, b);
    }
}
