use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client url '{0}': {1}")]
    InvalidClientUrl(String, #[source] url::ParseError),
}
