use askama::Template;

pub const HEADING: &str = "Welcome to the Blog App";

#[derive(Template)]
#[template(path = "home.html")]
struct Home {
    heading: &'static str,
}

pub fn render() -> askama::Result<String> {
    Home { heading: HEADING }.render()
}
