use askama::Template;
use rblog_types::post::Post;
use tracing::{debug, error, info};

use crate::dispatch::{Dispatcher, Event, Pending, LOST_REASON};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed,
}

/// All posts, fetched once when the view mounts.
#[derive(Debug)]
pub struct PostListView {
    posts: Vec<Post>,
    status: ListStatus,
    pending: Option<Pending>,
}

impl PostListView {
    pub fn mount(dispatcher: &Dispatcher) -> Self {
        info!("Mounting post list");
        PostListView {
            posts: vec![],
            status: ListStatus::Loading,
            pending: Some(dispatcher.fetch_posts()),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the result of this view's fetch. Returns false for any other
    /// event, including results of earlier, superseded fetches.
    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::PostsLoaded { ticket, result }
                if self.pending.as_ref().is_some_and(|p| p.is_for(ticket)) =>
            {
                self.pending = None;
                match result {
                    Ok(posts) => {
                        debug!("Loaded {} posts", posts.len());
                        self.posts = posts;
                        self.status = ListStatus::Ready;
                    }
                    Err(e) => {
                        error!("Error fetching posts: {}", e);
                        self.posts.clear();
                        self.status = ListStatus::Failed;
                    }
                }
                true
            }
            Event::Lost { ticket }
                if self.pending.as_ref().is_some_and(|p| p.is_for(ticket)) =>
            {
                self.pending = None;
                error!("Error fetching posts: {}", LOST_REASON);
                self.posts.clear();
                self.status = ListStatus::Failed;
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, theme: &Theme) -> askama::Result<String> {
        PostList {
            theme,
            posts: &self.posts,
            loading: self.status == ListStatus::Loading,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "post_list.html")]
struct PostList<'a> {
    theme: &'a Theme,
    posts: &'a [Post],
    loading: bool,
}
