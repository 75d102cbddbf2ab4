//! Application state machine.
//!
//! [`App`] holds the roster together with everything the UI needs to know:
//! whether the add-friend form is open, which friend is selected and the
//! contents of both forms. It consumes [`AppEvent`]s and answers with
//! [`AppAction`]s for the session to carry out, without doing any I/O itself.

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::AppError;
use crate::forms::{parse_amount, AddFriendForm, SplitBillForm};
use crate::roster::Roster;
use crate::schemas::{Friend, FriendId, Payer};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    ToggleAddFriend,
    FriendName { value: String },
    FriendImage { value: String },
    SubmitFriend,
    Select { id: FriendId },
    Bill { value: String },
    Expense { value: String },
    Payer { value: String },
    SubmitBill,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppAction {
    Render,
    Quit,
}

/// Which panel is showing next to the friend list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    Idle,
    AddingFriend,
    FriendSelected(FriendId),
}

#[derive(Clone, Debug)]
pub struct App {
    roster: Roster,
    show_add_friend: bool,
    // Never set while the add-friend form is open
    selected: Option<FriendId>,
    add_friend_form: AddFriendForm,
    split_form: SplitBillForm,
}

impl App {
    pub fn new(roster: Roster, default_image: impl Into<String>) -> Self {
        App {
            roster,
            show_add_friend: false,
            selected: None,
            add_friend_form: AddFriendForm::new(default_image),
            split_form: SplitBillForm::default(),
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Result<Vec<AppAction>, AppError> {
        match event {
            AppEvent::ToggleAddFriend => {
                self.toggle_add_friend();
                Ok(vec![AppAction::Render])
            }
            AppEvent::FriendName { value } => {
                if !self.show_add_friend {
                    debug!("add friend form is closed, ignoring name input");
                    return Ok(vec![]);
                }
                self.add_friend_form.set_name(value);
                Ok(vec![AppAction::Render])
            }
            AppEvent::FriendImage { value } => {
                if !self.show_add_friend {
                    debug!("add friend form is closed, ignoring image input");
                    return Ok(vec![]);
                }
                self.add_friend_form.set_image(value);
                Ok(vec![AppAction::Render])
            }
            AppEvent::SubmitFriend => {
                if !self.show_add_friend {
                    debug!("add friend form is closed, ignoring submit");
                    return Ok(vec![]);
                }
                match self.add_friend_form.submit() {
                    Some(friend) => {
                        self.add_friend(friend);
                        Ok(vec![AppAction::Render])
                    }
                    None => Ok(vec![]),
                }
            }
            AppEvent::Select { id } => {
                self.toggle_selection(&id)?;
                Ok(vec![AppAction::Render])
            }
            AppEvent::Bill { value } => {
                let bill = parse_amount(&value)?;
                self.split_form_mut()?.set_bill(bill);
                Ok(vec![AppAction::Render])
            }
            AppEvent::Expense { value } => {
                let paid_by_user = parse_amount(&value)?;
                self.split_form_mut()?.set_paid_by_user(paid_by_user);
                Ok(vec![AppAction::Render])
            }
            AppEvent::Payer { value } => {
                let payer: Payer = value.parse()?;
                self.split_form_mut()?.set_payer(payer);
                Ok(vec![AppAction::Render])
            }
            AppEvent::SubmitBill => {
                if self.split_bill()? {
                    Ok(vec![AppAction::Render])
                } else {
                    Ok(vec![])
                }
            }
            AppEvent::Quit => Ok(vec![AppAction::Quit]),
        }
    }

    pub fn toggle_add_friend(&mut self) {
        self.show_add_friend = !self.show_add_friend;
        if self.show_add_friend {
            self.select(None);
        } else {
            self.add_friend_form.reset();
        }
        debug!(open = self.show_add_friend, "add friend form toggled");
    }

    /// Appends `friend` to the roster and closes the add-friend form.
    pub fn add_friend(&mut self, friend: Friend) {
        self.roster.add_friend(friend);
        self.close_add_friend();
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn toggle_selection(&mut self, id: &FriendId) -> Result<(), AppError> {
        if !self.roster.contains(id) {
            return Err(AppError::FriendNotFound(id.clone()));
        }
        if self.selected.as_ref() == Some(id) {
            self.select(None);
        } else {
            self.select(Some(id.clone()));
        }
        self.close_add_friend();
        Ok(())
    }

    /// Applies the split-bill form to the selected friend. Returns `false`
    /// when the form is incomplete and nothing changed.
    pub fn split_bill(&mut self) -> Result<bool, AppError> {
        let id = self.selected.clone().ok_or(AppError::NoFriendSelected)?;
        let Some(delta) = self.split_form.submit() else {
            return Ok(false);
        };
        self.roster.apply_balance_delta(&id, delta)?;
        info!(id = %id, delta, "bill split");
        self.select(None);
        Ok(true)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn show_add_friend(&self) -> bool {
        self.show_add_friend
    }

    pub fn selected(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.as_ref().and_then(|id| self.roster.get(id))
    }

    pub fn add_friend_form(&self) -> &AddFriendForm {
        &self.add_friend_form
    }

    pub fn split_form(&self) -> &SplitBillForm {
        &self.split_form
    }

    pub fn panel(&self) -> Panel {
        match (&self.selected, self.show_add_friend) {
            (Some(id), _) => Panel::FriendSelected(id.clone()),
            (None, true) => Panel::AddingFriend,
            (None, false) => Panel::Idle,
        }
    }

    fn select(&mut self, id: Option<FriendId>) {
        if self.selected != id {
            self.split_form = SplitBillForm::default();
        }
        self.selected = id;
    }

    fn close_add_friend(&mut self) {
        self.show_add_friend = false;
        self.add_friend_form.reset();
    }

    fn split_form_mut(&mut self) -> Result<&mut SplitBillForm, AppError> {
        if self.selected.is_none() {
            return Err(AppError::NoFriendSelected);
        }
        Ok(&mut self.split_form)
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Roster::sample(), crate::forms::DEFAULT_IMAGE)
    }
}
