use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    pub fn generate() -> Self {
        FriendId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for FriendId {
    fn from(id: u64) -> Self {
        FriendId(id.to_string())
    }
}

impl From<&str> for FriendId {
    fn from(id: &str) -> Self {
        FriendId(id.to_owned())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A friend and the running balance between them and the user.
///
/// A positive balance means the friend owes the user, a negative one means
/// the user owes the friend.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: f64,
}

impl Friend {
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Friend {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }
}

/// Who fronted the bill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl FromStr for Payer {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Payer::User),
            "friend" => Ok(Payer::Friend),
            other => Err(AppError::UnknownPayer(other.to_owned())),
        }
    }
}
