use askama::Template;
use rblog_types::post::{Post, PostId};
use tracing::{error, info, warn};

use crate::dispatch::{Dispatcher, Event, Pending, LOST_REASON};
use crate::theme::Theme;

pub const NOT_FOUND_MESSAGE: &str = "Post not found.";
pub const FAILED_MESSAGE: &str = "Could not load post.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(Post),
    NotFound,
    Failed(String),
}

/// One post, fetched by the id from the route.
#[derive(Debug)]
pub struct PostDetailView {
    id: PostId,
    state: DetailState,
    pending: Option<Pending>,
}

impl PostDetailView {
    pub fn mount(id: PostId, dispatcher: &Dispatcher) -> Self {
        info!("Mounting post detail for {}", id);
        let pending = Some(dispatcher.fetch_post(id.clone()));
        PostDetailView {
            id,
            state: DetailState::Loading,
            pending,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::PostLoaded { ticket, result }
                if self.pending.as_ref().is_some_and(|p| p.is_for(ticket)) =>
            {
                self.pending = None;
                self.state = match result {
                    Ok(post) => DetailState::Loaded(post),
                    Err(e) if e.is_not_found() => {
                        warn!("Post {} not found", self.id);
                        DetailState::NotFound
                    }
                    Err(e) => {
                        error!("Error fetching post {}: {}", self.id, e);
                        DetailState::Failed(e.to_string())
                    }
                };
                true
            }
            Event::Lost { ticket }
                if self.pending.as_ref().is_some_and(|p| p.is_for(ticket)) =>
            {
                self.pending = None;
                error!("Error fetching post {}: {}", self.id, LOST_REASON);
                self.state = DetailState::Failed(LOST_REASON.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, theme: &Theme) -> askama::Result<String> {
        PostDetail {
            theme,
            state: &self.state,
            not_found: NOT_FOUND_MESSAGE,
            failed: FAILED_MESSAGE,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "post_detail.html")]
struct PostDetail<'a> {
    theme: &'a Theme,
    state: &'a DetailState,
    not_found: &'static str,
    failed: &'static str,
}
