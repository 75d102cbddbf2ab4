use thiserror::Error;

use crate::schemas::FriendId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no friend with id {0}")]
    FriendNotFound(FriendId),

    #[error("unknown payer {0:?}, expected \"user\" or \"friend\"")]
    UnknownPayer(String),

    #[error("not a number: {0:?}")]
    InvalidAmount(String),

    #[error("no friend is selected")]
    NoFriendSelected,

    #[error("malformed event: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    #[error("input is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
