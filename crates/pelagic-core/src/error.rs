use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("section {index} has no '__component' tag")]
    MissingComponentTag { index: usize },
    #[error("section {index} ({component}) is malformed: {reason}")]
    MalformedSection {
        index: usize,
        component: String,
        reason: String,
    },
    #[error("invalid media path '{path}' in {field}: {reason}")]
    InvalidMediaPath {
        field: String,
        path: String,
        reason: &'static str,
    },
}
