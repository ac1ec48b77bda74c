use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("selection target `{name}` was not found in the universe")]
    TargetNotFound { name: String },
}
