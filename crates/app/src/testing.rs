use async_trait::async_trait;
use rblog_api::Error;
use rblog_types::post::{NewPost, Post, PostId};
use scraper::{Html, Selector};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};
use tokio::sync::Semaphore;

use crate::dispatch::PostsApi;

pub fn post(id: i64, title: &str, content: &str) -> Post {
    Post {
        id: PostId::from(id),
        title: title.to_string(),
        content: content.to_string(),
        author_id: Some(2),
    }
}

fn select(html: &str, selector: &str) -> (Html, Selector) {
    (
        Html::parse_fragment(html),
        Selector::parse(selector).unwrap(),
    )
}

/// Text of every element matching `selector` in rendered markup.
pub fn texts(html: &str, selector: &str) -> Vec<String> {
    let (doc, selector) = select(html, selector);
    let found = doc
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    found
}

/// Value of `attr` on every matching element that carries it.
pub fn attrs(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let (doc, selector) = select(html, selector);
    let found = doc
        .select(&selector)
        .filter_map(|el| el.value().attr(attr))
        .map(str::to_string)
        .collect();
    found
}

pub fn count(html: &str, selector: &str) -> usize {
    let (doc, selector) = select(html, selector);
    let found = doc.select(&selector).count();
    found
}

/// In-memory stand-in for the posts API.
#[derive(Default)]
pub struct FakeApi {
    posts: Vec<Post>,
    fail_reads: bool,
    fail_writes: bool,
    panic_on_reads: bool,
    gate: Option<Semaphore>,
    created: Mutex<Vec<NewPost>>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        FakeApi {
            posts,
            ..Default::default()
        }
    }

    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn panic_on_reads(mut self) -> Self {
        self.panic_on_reads = true;
        self
    }

    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Requests block until [`FakeApi::release`] is called.
    pub fn hold_requests(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1024);
        }
    }

    pub fn created(&self) -> Vec<NewPost> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }

    fn server_error() -> Error {
        Error::StatusCode {
            status: 500,
            message: Some("boom".to_string()),
        }
    }
}

#[async_trait]
impl PostsApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        if self.panic_on_reads {
            panic!("read exploded");
        }
        if self.fail_reads {
            return Err(Self::server_error());
        }
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, Error> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        if self.panic_on_reads {
            panic!("read exploded");
        }
        if self.fail_reads {
            return Err(Self::server_error());
        }
        self.posts
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Post not found".to_string()))
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<(), Error> {
        self.created.lock().unwrap().push(new_post.clone());
        self.wait_for_gate().await;
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }
}
