//! Interactive résumé picker: reads 1-based choices until `q` or end of input.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::state::ClientSession;

#[derive(Debug, PartialEq, Eq)]
enum PickerInput {
    Pick(usize),
    Quit,
    Invalid,
}

fn parse_input(line: &str) -> PickerInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return PickerInput::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if n >= 1 => PickerInput::Pick(n - 1),
        _ => PickerInput::Invalid,
    }
}

pub async fn run_picker<R, W>(session: &mut ClientSession, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let count = session.surface().picker.len();
    if count == 0 {
        writeln!(out, "No results to pick from.")?;
        return Ok(());
    }

    let mut lines = input.lines();
    loop {
        write!(out, "{}", session.surface().render_picker())?;
        write!(out, "Select a résumé (1-{count}, q to quit): ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(());
        };

        match parse_input(&line) {
            PickerInput::Quit => return Ok(()),
            PickerInput::Pick(index) => {
                session.pick(index);
                writeln!(out)?;
                write!(out, "{}", session.surface().render_detail())?;
            }
            PickerInput::Invalid => {
                writeln!(out, "Enter a number between 1 and {count}, or q.")?;
            }
        }
    }
}
