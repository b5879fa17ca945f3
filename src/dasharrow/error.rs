use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no element with id `{0}` in the document")]
    MissingElement(String),

    /// Render was asked to write into a node that is not in the document.
    #[error("text node `{0}` is missing, the page was not wired up")]
    MissingTextNode(String),

    #[error("document rejected the update: {0}")]
    Dom(String),

    #[error("could not write page: {0}")]
    Io(String),

    #[error("`{0}` is not an arrow")]
    MalformedText(String),
}
