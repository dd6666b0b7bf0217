use rblog_types::post::PostId;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

static POST_DETAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/posts/(?P<id>[^/]+)$").expect("valid post route pattern"));

/// The four client-side routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    PostList,
    PostDetail(PostId),
    CreatePost,
}

impl Route {
    /// Matches a path against the route table.
    /// Query strings, fragments and one trailing slash are ignored.
    /// Returns `None` for paths no view handles.
    pub fn parse(path: &str) -> Option<Route> {
        let path = normalize(path);
        match path {
            "/" => Some(Route::Home),
            "/posts" => Some(Route::PostList),
            "/create" => Some(Route::CreatePost),
            _ => POST_DETAIL
                .captures(path)
                .map(|caps| Route::PostDetail(PostId::new(&caps["id"]))),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PostList => "/posts".to_string(),
            Route::PostDetail(id) => format!("/posts/{}", id),
            Route::CreatePost => "/create".to_string(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ if path.is_empty() => "/",
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/posts"), Some(Route::PostList));
        assert_eq!(Route::parse("/create"), Some(Route::CreatePost));
        assert_eq!(
            Route::parse("/posts/1"),
            Some(Route::PostDetail(PostId::from(1)))
        );
    }

    #[test]
    fn test_id_is_taken_verbatim() {
        assert_eq!(
            Route::parse("/posts/abc%20def"),
            Some(Route::PostDetail(PostId::from("abc%20def")))
        );
    }

    #[test]
    fn test_trailing_slash_query_and_fragment() {
        assert_eq!(Route::parse("/posts/"), Some(Route::PostList));
        assert_eq!(Route::parse("/posts?page=2"), Some(Route::PostList));
        assert_eq!(Route::parse("/create#form"), Some(Route::CreatePost));
        assert_eq!(
            Route::parse("/posts/5/"),
            Some(Route::PostDetail(PostId::from(5)))
        );
        assert_eq!(Route::parse(""), Some(Route::Home));
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("/posts/1/edit"), None);
        assert_eq!(Route::parse("posts"), None);
    }

    #[test]
    fn test_path_round_trips() {
        for path in ["/", "/posts", "/posts/12", "/create"] {
            assert_eq!(Route::parse(path).unwrap().path(), path);
        }
    }
}
