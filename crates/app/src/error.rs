/// The two failure categories a view can observe. Transport errors, 4xx and
/// 5xx all collapse into one of these.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Read failure: {0}")]
    Read(#[source] rblog_api::Error),

    #[error("Write failure: {0}")]
    Write(#[source] rblog_api::Error),
}

impl ViewError {
    pub fn is_not_found(&self) -> bool {
        match self {
            ViewError::Read(e) | ViewError::Write(e) => e.is_not_found(),
        }
    }
}
