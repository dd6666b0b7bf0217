/// Static color tokens shared by every view.
/// Passed to render functions explicitly; there is no global theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl Theme {
    pub const fn dark() -> Self {
        Theme {
            background: "#121212",
            text: "#e0e0e0",
            primary: "#1f4e79",
            secondary: "#2a2a2a",
        }
    }

    pub fn page_style(&self) -> String {
        format!(
            "background-color: {}; color: {}; min-height: 100vh;",
            self.background, self.text
        )
    }

    pub fn header_style(&self) -> String {
        format!("background-color: {}; padding: 1rem;", self.primary)
    }

    pub fn nav_link_style(&self) -> String {
        format!(
            "color: {}; text-decoration: none; margin-right: 1rem;",
            self.text
        )
    }

    pub fn card_style(&self) -> String {
        format!(
            "margin-bottom: 1rem; padding: 1rem; background-color: {}; border-radius: 4px;",
            self.secondary
        )
    }

    pub fn field_style(&self) -> String {
        format!(
            "margin-bottom: 1rem; padding: 0.5rem; background-color: {}; color: {}; border: 1px solid {};",
            self.background, self.text, self.text
        )
    }

    pub fn button_style(&self) -> String {
        format!(
            "background-color: {}; color: {}; padding: 0.5rem; border: none; cursor: pointer;",
            self.primary, self.text
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
