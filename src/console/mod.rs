// Terminal front end exports
pub mod commands;
pub mod render;

use std::io::{BufRead, Write};

use crate::core::{RandomSource, SwipeSession};

pub use commands::{Command, CommandError};
pub use render::{render_matches, render_session};

/// Drive a session from line-oriented input until `quit` or end of input
pub fn run<R, I, O>(session: &mut SwipeSession<R>, input: I, mut output: O) -> std::io::Result<()>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    write!(output, "{}", render_session(session))?;

    for line in input.lines() {
        let line = line?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                tracing::debug!("Rejected console input: {}", e);
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Gesture(gesture) => {
                let report = session.apply(gesture);
                tracing::debug!("Gesture {:?} -> {:?}", gesture, report);
            }
            Command::Dismiss => session.dismiss_alert(),
            Command::Chat => {
                if let Some(summary) = session.start_chat() {
                    writeln!(output, "Opening chat with {}...", summary.name)?;
                } else {
                    writeln!(output, "No match to chat with")?;
                }
            }
            Command::Show => {}
            Command::Matches => {
                write!(output, "{}", render_matches(session.matches()))?;
                continue;
            }
            Command::Quit => break,
        }

        write!(output, "{}", render_session(session))?;
    }

    output.flush()
}
