use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("typing animation needs at least one word")]
    EmptyWordList,

    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("site content could not be decoded: {0}")]
    Content(#[from] serde_json::Error),

    #[error("link `{url}` in {owner} is not an http(s) or mailto URL")]
    InvalidLink { owner: String, url: String },
}
