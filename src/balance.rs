use std::fmt;

use crate::schemas::Payer;

/// The signed adjustment to apply to the friend's balance after splitting
/// a bill of `bill` of which the user's own share is `paid_by_user`.
pub fn compute_delta(bill: f64, paid_by_user: f64, payer: Payer) -> f64 {
    match payer {
        // The friend owes the user their share
        Payer::User => bill - paid_by_user,
        // The user owes the friend their own share
        Payer::Friend => -paid_by_user,
    }
}

/// The friend's share of the bill. Empty while no bill has been entered.
pub fn paid_by_friend(bill: Option<f64>, paid_by_user: Option<f64>) -> Option<f64> {
    let bill = bill.filter(|bill| *bill != 0.0)?;
    Some(bill - paid_by_user.unwrap_or(0.0))
}

/// Keeps `current` when `proposed` would exceed the bill. A missing bill
/// counts as zero.
pub fn clamp_expense(
    proposed: Option<f64>,
    bill: Option<f64>,
    current: Option<f64>,
) -> Option<f64> {
    if proposed.unwrap_or(0.0) > bill.unwrap_or(0.0) {
        current
    } else {
        proposed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BalanceStatus {
    YouOwe(f64),
    OwesYou(f64),
    Even,
}

impl BalanceStatus {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe(balance.abs())
        } else if balance > 0.0 {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Even
        }
    }

    pub fn describe<'a>(&self, name: &'a str) -> StatusLine<'a> {
        StatusLine { status: *self, name }
    }
}

pub struct StatusLine<'a> {
    status: BalanceStatus,
    name: &'a str,
}

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            BalanceStatus::YouOwe(amount) => write!(f, "You owe {} £{}", self.name, amount),
            BalanceStatus::OwesYou(amount) => write!(f, "{} owes you {}", self.name, amount),
            BalanceStatus::Even => write!(f, "You and {} are even", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_paying_credits_the_friend_share() {
        assert_eq!(compute_delta(100.0, 40.0, Payer::User), 60.0);
        assert_eq!(compute_delta(50.0, 50.0, Payer::User), 0.0);
    }

    #[test]
    fn friend_paying_debits_the_user_share() {
        assert_eq!(compute_delta(50.0, 50.0, Payer::Friend), -50.0);
        assert_eq!(compute_delta(100.0, 40.0, Payer::Friend), -40.0);
    }

    #[test]
    fn friend_share_is_empty_without_a_bill() {
        assert_eq!(paid_by_friend(None, Some(10.0)), None);
        assert_eq!(paid_by_friend(Some(0.0), None), None);
        assert_eq!(paid_by_friend(Some(80.0), None), Some(80.0));
        assert_eq!(paid_by_friend(Some(80.0), Some(30.0)), Some(50.0));
    }

    #[test]
    fn expense_above_bill_keeps_previous_value() {
        assert_eq!(clamp_expense(Some(120.0), Some(100.0), Some(40.0)), Some(40.0));
        assert_eq!(clamp_expense(Some(100.0), Some(100.0), Some(40.0)), Some(100.0));
        assert_eq!(clamp_expense(Some(5.0), None, None), None);
        assert_eq!(clamp_expense(None, Some(100.0), Some(40.0)), None);
    }

    #[test]
    fn status_lines() {
        assert_eq!(BalanceStatus::of(-7.0).describe("Clark").to_string(), "You owe Clark £7");
        assert_eq!(BalanceStatus::of(20.0).describe("Sarah").to_string(), "Sarah owes you 20");
        assert_eq!(BalanceStatus::of(0.0).describe("Anthony").to_string(), "You and Anthony are even");
    }
}
