use tracing::warn;

/// The acting user. Views read the author of new posts from here instead of
/// carrying their own identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    author_id: i64,
}

impl Session {
    const DEFAULT_AUTHOR_ID: i64 = 2;
    pub const AUTHOR_ID_ENV: &'static str = "RBLOG_AUTHOR_ID";

    pub fn new(author_id: i64) -> Self {
        Session { author_id }
    }

    pub fn from_env() -> Self {
        match std::env::var(Self::AUTHOR_ID_ENV) {
            Ok(raw) => Self::parse(&raw),
            Err(_) => Self::default(),
        }
    }

    fn parse(raw: &str) -> Self {
        match raw.trim().parse() {
            Ok(author_id) => Self::new(author_id),
            Err(e) => {
                warn!(
                    "Ignoring {}={:?}: {}, using {}",
                    Self::AUTHOR_ID_ENV,
                    raw,
                    e,
                    Self::DEFAULT_AUTHOR_ID
                );
                Self::default()
            }
        }
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AUTHOR_ID)
    }
}
