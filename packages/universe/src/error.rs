use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("type `{name}` was not found in the universe")]
    NotFound { name: String },
}
