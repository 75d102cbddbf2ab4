//! Transient form state.
//!
//! Both forms are driven by explicit setters mirroring the input fields and a
//! `submit` that either yields a result or leaves everything as it was.

use tracing::debug;

use crate::balance::{clamp_expense, compute_delta, paid_by_friend};
use crate::error::AppError;
use crate::schemas::{Friend, FriendId, Payer};

pub const DEFAULT_IMAGE: &str = "https://i.pravatar.cc/48";

/// Parses a numeric text input. Blank input clears the field.
pub fn parse_amount(input: &str) -> Result<Option<f64>, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(Some(amount)),
        _ => Err(AppError::InvalidAmount(input.to_owned())),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddFriendForm {
    name: String,
    image: String,
    default_image: String,
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        AddFriendForm {
            name: String::new(),
            image: default_image.clone(),
            default_image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
    }

    /// Builds a new friend from the inputs and resets them, or returns `None`
    /// if a field is empty.
    pub fn submit(&mut self) -> Option<Friend> {
        let name = self.name.trim();
        let image = self.image.trim();
        if name.is_empty() || image.is_empty() {
            debug!(friend = name, image, "add friend rejected, empty field");
            return None;
        }

        let id = FriendId::generate();
        // Pins the avatar to this friend
        let image = format!("{}?u={}", image, id);
        let friend = Friend::new(id, name, image);
        self.reset();
        Some(friend)
    }
}

impl Default for AddFriendForm {
    fn default() -> Self {
        AddFriendForm::new(DEFAULT_IMAGE)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitBillForm {
    bill: Option<f64>,
    paid_by_user: Option<f64>,
    payer: Payer,
}

impl SplitBillForm {
    pub fn bill(&self) -> Option<f64> {
        self.bill
    }

    pub fn paid_by_user(&self) -> Option<f64> {
        self.paid_by_user
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    pub fn paid_by_friend(&self) -> Option<f64> {
        paid_by_friend(self.bill, self.paid_by_user)
    }

    pub fn set_bill(&mut self, bill: Option<f64>) {
        self.bill = bill;
        // The user's expense never exceeds the bill
        if self.paid_by_user.unwrap_or(0.0) > bill.unwrap_or(0.0) {
            self.paid_by_user = bill;
        }
    }

    pub fn set_paid_by_user(&mut self, paid_by_user: Option<f64>) {
        self.paid_by_user = clamp_expense(paid_by_user, self.bill, self.paid_by_user);
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// The delta for the friend's balance, or `None` while the bill or the
    /// user's expense is empty.
    pub fn submit(&self) -> Option<f64> {
        let filled = |value: Option<f64>| value.filter(|v| *v != 0.0);
        match (filled(self.bill), filled(self.paid_by_user)) {
            (Some(bill), Some(paid_by_user)) => Some(compute_delta(bill, paid_by_user, self.payer)),
            _ => {
                debug!(bill = ?self.bill, paid_by_user = ?self.paid_by_user, "split bill rejected, empty field");
                None
            }
        }
    }
}
