use askama::Template;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info};

use crate::dispatch::{Dispatcher, Event, PostsApi};
use crate::route::Route;
use crate::session::Session;
use crate::theme::Theme;
use crate::views::{nav, View};

/// The application shell: navigation bar, router and the mounted view.
///
/// Request results arrive on one event channel and are handed to the current
/// view, which drops anything it is not waiting on.
pub struct App {
    theme: Theme,
    session: Session,
    dispatcher: Dispatcher,
    events_rx: Receiver<Event>,
    route: Option<Route>,
    view: Option<View>,
    history: Vec<String>,
}

impl App {
    pub fn new(api: Arc<dyn PostsApi>, session: Session, theme: Theme) -> Self {
        let (dispatcher, events_rx) = Dispatcher::new(api);
        App {
            theme,
            session,
            dispatcher,
            events_rx,
            route: None,
            view: None,
            history: vec![],
        }
    }

    /// In-process navigation. The previous view is unmounted first, which
    /// aborts its in-flight request, and results it left queued are dropped.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        match &route {
            Some(route) => info!("Navigating to {}", route),
            None => info!("No view for {}", path),
        }
        if let Some(view) = self.view.take() {
            let name = view.name();
            drop(view);
            while let Ok(event) = self.events_rx.try_recv() {
                debug!("Discarding stale result {:?} for {}", event.ticket(), name);
            }
        }
        self.view = route
            .as_ref()
            .map(|route| View::mount(route, self.session, &self.dispatcher));
        self.route = route;
        self.history.push(path.to_string());
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut View> {
        self.view.as_mut()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_pending(&self) -> bool {
        self.view.as_ref().is_some_and(View::is_pending)
    }

    /// Waits for the next request result and hands it to the current view.
    /// Returns whether the view applied it. Returns immediately with `false`
    /// when the view is not waiting on anything.
    pub async fn process_next_event(&mut self) -> bool {
        let Some(view) = self.view.as_mut().filter(|view| view.is_pending()) else {
            return false;
        };
        match self.events_rx.recv().await {
            Some(event) => {
                let ticket = event.ticket();
                let applied = view.handle(event);
                if !applied {
                    debug!("Discarding stale result {:?} for {}", ticket, view.name());
                }
                applied
            }
            None => false,
        }
    }

    /// Processes events until the current view has nothing in flight.
    pub async fn settle(&mut self) {
        while self.is_pending() {
            self.process_next_event().await;
        }
    }

    pub fn render(&self) -> askama::Result<String> {
        let view = self
            .view
            .as_ref()
            .map(|view| view.render(&self.theme))
            .transpose()?;
        Page {
            theme: &self.theme,
            nav: nav::render(&self.theme)?,
            view,
        }
        .render()
    }
}

/// The navigation bar with the mounted view below it. Both arrive already
/// rendered and escaped.
#[derive(Template)]
#[template(path = "page.html")]
struct Page<'a> {
    theme: &'a Theme,
    nav: String,
    view: Option<String>,
}
