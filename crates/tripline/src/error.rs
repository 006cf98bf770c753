/// Content boundary errors.
///
/// The organizer itself never fails: degenerate itinerary input degrades
/// to an empty or partial view. Errors only arise when fetching or
/// decoding the page record from the content store.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generic error: {0}")]
    Generic(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
