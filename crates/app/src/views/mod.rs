pub mod create_post;
pub mod home;
pub mod nav;
pub mod post_detail;
pub mod post_list;

use crate::dispatch::{Dispatcher, Event};
use crate::route::Route;
use crate::session::Session;
use crate::theme::Theme;

pub use create_post::CreatePostView;
pub use post_detail::PostDetailView;
pub use post_list::PostListView;

/// The view mounted for the current route.
#[derive(Debug)]
pub enum View {
    Home,
    PostList(PostListView),
    PostDetail(PostDetailView),
    CreatePost(CreatePostView),
}

impl View {
    pub fn mount(route: &Route, session: Session, dispatcher: &Dispatcher) -> Self {
        match route {
            Route::Home => View::Home,
            Route::PostList => View::PostList(PostListView::mount(dispatcher)),
            Route::PostDetail(id) => View::PostDetail(PostDetailView::mount(id.clone(), dispatcher)),
            Route::CreatePost => View::CreatePost(CreatePostView::mount(session, dispatcher)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::PostList(_) => "post-list",
            View::PostDetail(_) => "post-detail",
            View::CreatePost(_) => "create-post",
        }
    }

    pub fn is_pending(&self) -> bool {
        match self {
            View::Home => false,
            View::PostList(view) => view.is_pending(),
            View::PostDetail(view) => view.is_pending(),
            View::CreatePost(view) => view.is_pending(),
        }
    }

    pub fn handle(&mut self, event: Event) -> bool {
        match self {
            View::Home => false,
            View::PostList(view) => view.handle(event),
            View::PostDetail(view) => view.handle(event),
            View::CreatePost(view) => view.handle(event),
        }
    }

    pub fn render(&self, theme: &Theme) -> askama::Result<String> {
        match self {
            View::Home => home::render(),
            View::PostList(view) => view.render(theme),
            View::PostDetail(view) => view.render(theme),
            View::CreatePost(view) => view.render(theme),
        }
    }
}
