use askama::Template;
use rblog_types::post::NewPost;
use tracing::{debug, error, info};

use crate::dispatch::{Dispatcher, Event, Pending, Ticket, LOST_REASON};
use crate::session::Session;
use crate::theme::Theme;

pub const CREATED_MESSAGE: &str = "Post created successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dispatched(Ticket),
    /// Required fields were empty; nothing was sent.
    Blocked(Vec<Field>),
}

/// Form for writing a new post.
#[derive(Debug)]
pub struct CreatePostView {
    title: String,
    content: String,
    notice: Option<Notice>,
    session: Session,
    dispatcher: Dispatcher,
    pending: Option<Pending>,
}

impl CreatePostView {
    pub fn mount(session: Session, dispatcher: &Dispatcher) -> Self {
        info!("Mounting create post form");
        CreatePostView {
            title: String::new(),
            content: String::new(),
            notice: None,
            session,
            dispatcher: dispatcher.clone(),
            pending: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn missing_fields(&self) -> Vec<Field> {
        let mut missing = vec![];
        if self.title.is_empty() {
            missing.push(Field::Title);
        }
        if self.content.is_empty() {
            missing.push(Field::Content);
        }
        missing
    }

    /// Sends the form. A submission made while an earlier one is still in
    /// flight replaces it; only the latest result is applied.
    pub fn submit(&mut self) -> SubmitOutcome {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!("Submission blocked, missing {:?}", missing);
            return SubmitOutcome::Blocked(missing);
        }
        let new_post = NewPost::new(
            self.session.author_id(),
            self.title.clone(),
            self.content.clone(),
        );
        self.notice = None;
        let pending = self.dispatcher.create_post(new_post);
        let ticket = pending.ticket();
        self.pending = Some(pending);
        SubmitOutcome::Dispatched(ticket)
    }

    pub fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::PostCreated { ticket, result }
                if self.pending.as_ref().is_some_and(|p| p.is_for(ticket)) =>
            {
                self.pending = None;
                match result {
                    Ok(()) => {
                        info!("Post created");
                        self.title.clear();
                        self.content.clear();
                        self.notice = Some(Notice::Created);
                    }
                    Err(e) => {
                        error!("Error creating post: {}", e);
                        self.notice = Some(Notice::Failed(e.to_string()));
                    }
                }
                true
            }
            Event::Lost { ticket }
                if self.pending.as_ref().is_some_and(|p| p.is_for(ticket)) =>
            {
                self.pending = None;
                error!("Error creating post: {}", LOST_REASON);
                self.notice = Some(Notice::Failed(LOST_REASON.to_string()));
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, theme: &Theme) -> askama::Result<String> {
        let failure = match &self.notice {
            Some(Notice::Failed(reason)) => Some(reason.as_str()),
            _ => None,
        };
        CreatePost {
            theme,
            title: &self.title,
            content: &self.content,
            created: self.notice == Some(Notice::Created),
            created_message: CREATED_MESSAGE,
            failure,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "create_post.html")]
struct CreatePost<'a> {
    theme: &'a Theme,
    title: &'a str,
    content: &'a str,
    created: bool,
    created_message: &'static str,
    failure: Option<&'a str>,
}
