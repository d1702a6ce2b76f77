use crate::repository;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("user not authenticated")]
    Unauthenticated,

    #[error("notifications store unavailable")]
    StoreUnavailable,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}
