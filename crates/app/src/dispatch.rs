use async_trait::async_trait;
use futures::future::{AbortHandle, Abortable, Aborted};
use futures::FutureExt;
use rblog_api::Client;
use rblog_types::post::{NewPost, Post, PostId};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, error};

use super::error::ViewError;

/// The remote posts API as seen by the views.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, rblog_api::Error>;
    async fn get_post(&self, id: &PostId) -> Result<Post, rblog_api::Error>;
    async fn create_post(&self, new_post: &NewPost) -> Result<(), rblog_api::Error>;
}

#[async_trait]
impl PostsApi for Client {
    async fn list_posts(&self) -> Result<Vec<Post>, rblog_api::Error> {
        self.get_posts().await.map(Arc::unwrap_or_clone)
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, rblog_api::Error> {
        Client::get_post(self, id).await.map(Arc::unwrap_or_clone)
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<(), rblog_api::Error> {
        Client::create_post(self, new_post).await
    }
}

/// Sequence number of one request. A view only applies the result whose
/// ticket it is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub(crate) u64);

/// Shown in place of an error when a request never produced a result.
pub const LOST_REASON: &str = "Request did not complete";

/// A finished request, delivered to the shell.
#[derive(Debug)]
pub enum Event {
    PostsLoaded {
        ticket: Ticket,
        result: Result<Vec<Post>, ViewError>,
    },
    PostLoaded {
        ticket: Ticket,
        result: Result<Post, ViewError>,
    },
    PostCreated {
        ticket: Ticket,
        result: Result<(), ViewError>,
    },
    /// The request task panicked before producing a result.
    Lost { ticket: Ticket },
}

impl Event {
    pub fn ticket(&self) -> Ticket {
        match self {
            Event::PostsLoaded { ticket, .. }
            | Event::PostLoaded { ticket, .. }
            | Event::PostCreated { ticket, .. }
            | Event::Lost { ticket } => *ticket,
        }
    }
}

/// Handle to an in-flight request. Dropping it aborts the request.
#[derive(Debug)]
pub struct Pending {
    ticket: Ticket,
    abort: AbortHandle,
}

impl Pending {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn is_for(&self, ticket: Ticket) -> bool {
        self.ticket == ticket
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Starts requests on behalf of views and routes their results back through
/// one event channel.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn PostsApi>,
    events_tx: Sender<Event>,
    next_ticket: Arc<AtomicU64>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("next_ticket", &self.next_ticket.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    const EVENT_BUFFER: usize = 100;

    pub fn new(api: Arc<dyn PostsApi>) -> (Self, Receiver<Event>) {
        let (events_tx, events_rx) = tokio::sync::mpsc::channel(Self::EVENT_BUFFER);
        let dispatcher = Dispatcher {
            api,
            events_tx,
            next_ticket: Arc::new(AtomicU64::new(1)),
        };
        (dispatcher, events_rx)
    }

    fn issue(&self) -> Ticket {
        Ticket(self.next_ticket.fetch_add(1, Ordering::Relaxed))
    }

    pub fn fetch_posts(&self) -> Pending {
        let ticket = self.issue();
        let api = self.api.clone();
        self.spawn(ticket, async move {
            let result = api.list_posts().await.map_err(ViewError::Read);
            Event::PostsLoaded { ticket, result }
        })
    }

    pub fn fetch_post(&self, id: PostId) -> Pending {
        let ticket = self.issue();
        let api = self.api.clone();
        self.spawn(ticket, async move {
            let result = api.get_post(&id).await.map_err(ViewError::Read);
            Event::PostLoaded { ticket, result }
        })
    }

    pub fn create_post(&self, new_post: NewPost) -> Pending {
        let ticket = self.issue();
        let api = self.api.clone();
        self.spawn(ticket, async move {
            let result = api.create_post(&new_post).await.map_err(ViewError::Write);
            Event::PostCreated { ticket, result }
        })
    }

    fn spawn<F>(&self, ticket: Ticket, request: F) -> Pending
    where
        F: Future<Output = Event> + Send + 'static,
    {
        debug!("Dispatching request {:?}", ticket);
        let (abort, registration) = AbortHandle::new_pair();
        let request = Abortable::new(AssertUnwindSafe(request).catch_unwind(), registration);
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match request.await {
                Ok(Ok(event)) => event,
                Ok(Err(_)) => {
                    error!("Request {:?} panicked", ticket);
                    Event::Lost { ticket }
                }
                Err(Aborted) => {
                    debug!("Request {:?} aborted", ticket);
                    return;
                }
            };
            if events_tx.send(event).await.is_err() {
                debug!("Shell gone, dropping result of {:?}", ticket);
            }
        });
        Pending { ticket, abort }
    }
}
