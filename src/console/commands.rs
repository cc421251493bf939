use std::str::FromStr;
use thiserror::Error;

use crate::models::Gesture;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (try: pass, like, super, next, dismiss, chat, show, matches, quit)")]
    Unknown(String),

    #[error("Empty command")]
    Empty,
}

/// One line of user input from the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Gesture(Gesture),
    Dismiss,
    Chat,
    Show,
    Matches,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let word = input.trim().to_lowercase();

        let command = match word.as_str() {
            "" => return Err(CommandError::Empty),
            "pass" | "left" | "x" | "nope" => Command::Gesture(Gesture::Pass),
            "like" | "right" | "heart" => Command::Gesture(Gesture::Like),
            "super" | "superlike" | "super-like" | "star" | "zap" => {
                Command::Gesture(Gesture::SuperLike)
            }
            "next" | "photo" | ">" => Command::Gesture(Gesture::NextPhoto),
            "dismiss" | "keep" | "close" => Command::Dismiss,
            "chat" => Command::Chat,
            "show" | "card" => Command::Show,
            "matches" => Command::Matches,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(word)),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gestures() {
        assert_eq!("pass".parse(), Ok(Command::Gesture(Gesture::Pass)));
        assert_eq!("  Right ".parse(), Ok(Command::Gesture(Gesture::Like)));
        assert_eq!("star".parse(), Ok(Command::Gesture(Gesture::SuperLike)));
        assert_eq!("next".parse(), Ok(Command::Gesture(Gesture::NextPhoto)));
    }

    #[test]
    fn test_parse_alert_commands() {
        assert_eq!("keep".parse(), Ok(Command::Dismiss));
        assert_eq!("chat".parse(), Ok(Command::Chat));
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "rewind".parse::<Command>(),
            Err(CommandError::Unknown("rewind".to_string()))
        );
    }
}
