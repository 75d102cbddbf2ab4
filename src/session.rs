//! Terminal session driving an [`App`].
//!
//! Each input line is one JSON-encoded [`AppEvent`], for example
//! `{"type":"select","id":"118836"}`. The view is written to the output after
//! every event that changes what is shown.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::app::{App, AppAction, AppEvent};
use crate::error::AppError;
use crate::view::render;

fn write_view<W: Write>(app: &App, output: &mut W) -> Result<(), AppError> {
    let view = render(app).map_err(io::Error::other)?;
    writeln!(output, "{}", view)?;
    output.flush()?;
    Ok(())
}

fn dispatch(app: &mut App, line: &[u8]) -> Result<Vec<AppAction>, AppError> {
    let line = std::str::from_utf8(line)?.trim();
    if line.is_empty() {
        return Ok(vec![]);
    }
    let event: AppEvent = serde_json::from_str(line)?;
    debug!(?event, "event received");
    app.handle(event)
}

pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut output: W) -> Result<(), AppError> {
    write_view(app, &mut output)?;
    // Raw lines, so a line that isn't UTF-8 is reported instead of ending the session
    for line in input.split(b'\n') {
        let line = line?;
        let actions = match dispatch(app, &line) {
            Ok(actions) => actions,
            Err(err) => {
                warn!(%err, "event failed");
                writeln!(output, "! {}", err)?;
                continue;
            }
        };
        for action in actions {
            match action {
                AppAction::Render => write_view(app, &mut output)?,
                AppAction::Quit => return Ok(()),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::FriendId;

    fn run_lines(app: &mut App, lines: &str) -> String {
        let mut output = Vec::new();
        run(app, lines.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let mut app = App::default();
        let output = run_lines(&mut app, "not json\n\n{\"type\":\"select\",\"id\":\"118836\"}\n");

        assert!(output.contains("! malformed event"));
        assert_eq!(app.selected(), Some(&FriendId::from(118836)));
    }

    #[test]
    fn non_utf8_line_is_reported_and_skipped() {
        let mut app = App::default();
        let mut output = Vec::new();
        let input: &[u8] = b"\xff\xfe\n{\"type\":\"select\",\"id\":\"118836\"}\n";
        run(&mut app, input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("! input is not valid UTF-8"));
        assert_eq!(app.selected(), Some(&FriendId::from(118836)));
    }

    #[test]
    fn quit_stops_reading() {
        let mut app = App::default();
        let output = run_lines(
            &mut app,
            "{\"type\":\"quit\"}\n{\"type\":\"toggle_add_friend\"}\n",
        );

        assert!(!app.show_add_friend());
        assert_eq!(output.matches("[Add Friend]").count(), 1);
    }

    #[test]
    fn operation_errors_do_not_end_the_session() {
        let mut app = App::default();
        let output = run_lines(
            &mut app,
            "{\"type\":\"submit_bill\"}\n{\"type\":\"toggle_add_friend\"}\n",
        );

        assert!(output.contains("! no friend is selected"));
        assert!(app.show_add_friend());
    }
}
