use std::fmt::{self, Write};

use crate::app::App;
use crate::balance::BalanceStatus;
use crate::schemas::Payer;

pub fn add_friend_button_label(app: &App) -> &'static str {
    if app.show_add_friend() {
        "Close"
    } else {
        "Add Friend"
    }
}

pub fn select_button_label(is_selected: bool) -> &'static str {
    if is_selected {
        "Close"
    } else {
        "Select"
    }
}

fn amount(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Renders the whole app as plain text, one line per element.
pub fn render(app: &App) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for friend in app.roster().iter() {
        let is_selected = app.selected() == Some(&friend.id);
        writeln!(
            out,
            "{} {} [{}] {} | {} [{}]",
            if is_selected { ">" } else { " " },
            friend.name,
            friend.id,
            friend.image,
            BalanceStatus::of(friend.balance).describe(&friend.name),
            select_button_label(is_selected),
        )?;
    }

    if app.show_add_friend() {
        let form = app.add_friend_form();
        writeln!(out, "Friend name: {}", form.name())?;
        writeln!(out, "Image URL: {}", form.image())?;
        writeln!(out, "[Add]")?;
    }
    writeln!(out, "[{}]", add_friend_button_label(app))?;

    if let Some(friend) = app.selected_friend() {
        let form = app.split_form();
        writeln!(out, "Split a bill with {}", friend.name)?;
        writeln!(out, "Bill value: {}", amount(form.bill()))?;
        writeln!(out, "Your expense: {}", amount(form.paid_by_user()))?;
        writeln!(out, "{}'s expense: {}", friend.name, amount(form.paid_by_friend()))?;
        let payer = match form.payer() {
            Payer::User => "You",
            Payer::Friend => friend.name.as_str(),
        };
        writeln!(out, "Who is paying the bill? {}", payer)?;
        writeln!(out, "[Add]")?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_view_lists_friends() {
        let app = App::default();
        let text = render(&app).unwrap();

        assert!(text.contains("You owe Clark £7 [Select]"));
        assert!(text.contains("Sarah owes you 20 [Select]"));
        assert!(text.contains("You and Anthony are even [Select]"));
        assert!(text.ends_with("[Add Friend]\n"));
        assert!(!text.contains("Split a bill"));
    }

    #[test]
    fn selected_view_shows_split_form() {
        let mut app = App::default();
        app.toggle_selection(&933372.into()).unwrap();
        let text = render(&app).unwrap();

        assert!(text.contains("> Sarah"));
        assert!(text.contains("Sarah owes you 20 [Close]"));
        assert!(text.contains("Split a bill with Sarah"));
        assert!(text.contains("Sarah's expense: \n"));
        assert!(text.contains("Who is paying the bill? You"));
    }

    #[test]
    fn add_friend_view_shows_form_and_close_button() {
        let mut app = App::default();
        app.toggle_add_friend();
        let text = render(&app).unwrap();

        assert!(text.contains("Image URL: https://i.pravatar.cc/48"));
        assert!(text.contains("[Close]"));
    }
}
