//! Friends and shared bills.
//!
//! Keeps a list of friends with a running balance each, and updates a
//! friend's balance when a bill is split with them.

pub mod app;
pub mod balance;
pub mod config;
pub mod error;
pub mod forms;
pub mod roster;
pub mod schemas;
pub mod session;
pub mod view;

pub use app::{App, AppAction, AppEvent, Panel};
pub use balance::{compute_delta, BalanceStatus};
pub use config::Config;
pub use error::AppError;
pub use roster::Roster;
pub use schemas::{Friend, FriendId, Payer};
