use tracing::info;

use crate::error::AppError;
use crate::schemas::{Friend, FriendId};

/// Ordered collection of friends, in the order they were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    pub fn new(friends: Vec<Friend>) -> Self {
        Roster { friends }
    }

    pub fn sample() -> Self {
        let friend = |id: u64, name: &str, balance: f64| Friend {
            id: id.into(),
            name: name.to_owned(),
            image: format!("https://i.pravatar.cc/48?u={}", id),
            balance,
        };
        Roster::new(vec![
            friend(118836, "Clark", -7.0),
            friend(933372, "Sarah", 20.0),
            friend(499476, "Anthony", 0.0),
        ])
    }

    /// Appends `friend` to the end of the roster with a settled balance.
    pub fn add_friend(&mut self, mut friend: Friend) {
        friend.balance = 0.0;
        info!(id = %friend.id, name = %friend.name, "friend added");
        self.friends.push(friend);
    }

    pub fn apply_balance_delta(&mut self, id: &FriendId, delta: f64) -> Result<(), AppError> {
        let friend = self
            .friends
            .iter_mut()
            .find(|friend| &friend.id == id)
            .ok_or_else(|| AppError::FriendNotFound(id.clone()))?;
        friend.balance += delta;
        info!(id = %id, delta, balance = friend.balance, "balance updated");
        Ok(())
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| &friend.id == id)
    }

    pub fn contains(&self, id: &FriendId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
