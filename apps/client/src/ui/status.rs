//! Loading indicator bound to a form's in-flight state.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::submission::FormWatcher;

const CLEAR_LINE: &str = "\r\x1b[2K";

/// Shows `message` while the watched form is loading and clears it when the request
/// settles. Returns once the form is idle again, or when its owner goes away.
///
/// A request that starts and ends before this is first polled never shows anything.
pub async fn show_while_loading<W: Write>(
    mut form: FormWatcher,
    message: &str,
    out: &mut W,
) -> io::Result<()> {
    let mut shown = false;
    while form.changed().await.is_ok() {
        let state = *form.borrow_and_update();
        if state.loading && !shown {
            write!(out, "{}", message.dimmed())?;
            out.flush()?;
            shown = true;
        } else if state.submit_enabled && !state.loading {
            break;
        }
    }
    if shown {
        write!(out, "{CLEAR_LINE}")?;
        out.flush()?;
    }
    Ok(())
}
