//! Command vocabulary and the chat-message router.
//!
//! A router turns a raw chat message into a `Command`, or nothing, given the
//! current phase. `Game::run_command` re-checks every rule itself, so a
//! router only decides what a message means, never whether it is allowed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::Phase;

/// Symbolic commands accepted by `Game::run_command`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Join,
    Start,
    Roll,
    Buy,
    Pass,
    Status,
    Board,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Join,
        Command::Start,
        Command::Roll,
        Command::Buy,
        Command::Pass,
        Command::Status,
        Command::Board,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Command::Join => "join",
            Command::Start => "start",
            Command::Roll => "roll",
            Command::Buy => "buy",
            Command::Pass => "pass",
            Command::Status => "status",
            Command::Board => "board",
        }
    }

    /// Phases in which a chat router offers this command.
    #[must_use]
    pub fn offered_in(self, phase: Phase) -> bool {
        match self {
            Command::Join | Command::Start => phase == Phase::Waiting,
            Command::Roll | Command::Buy | Command::Pass => phase == Phase::InProgress,
            Command::Status | Command::Board => true,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps raw messages to commands.
pub trait CommandRouter {
    /// Return the command `message` asks for in `phase`, if any.
    fn route(&self, message: &str, phase: Phase) -> Option<Command>;
}

/// Router for `!command` chat messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChatRouter;

impl CommandRouter for ChatRouter {
    fn route(&self, message: &str, phase: Phase) -> Option<Command> {
        parse_command(message, phase)
    }
}

/// Anything that is not a word character, `!` or a space.
static NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w! ]").expect("valid noise pattern"));

/// Parse a chat message such as `"!roll"` into a command.
///
/// Matching is case-insensitive and ignores emoji and punctuation other than
/// `!`. Commands not offered in `phase` parse to `None`.
pub fn parse_command(message: &str, phase: Phase) -> Option<Command> {
    let lowered = message.to_lowercase();
    let cleaned = NOISE.replace_all(&lowered, "");
    let word = cleaned.trim().strip_prefix('!')?;

    Command::ALL
        .into_iter()
        .find(|cmd| cmd.name() == word)
        .filter(|cmd| cmd.offered_in(phase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_command("!join", Phase::Waiting), Some(Command::Join));
        assert_eq!(parse_command("!start", Phase::Waiting), Some(Command::Start));
        assert_eq!(parse_command("!roll", Phase::InProgress), Some(Command::Roll));
        assert_eq!(parse_command("!buy", Phase::InProgress), Some(Command::Buy));
        assert_eq!(parse_command("!pass", Phase::InProgress), Some(Command::Pass));
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(parse_command("  !ROLL  ", Phase::InProgress), Some(Command::Roll));
        assert_eq!(parse_command("!roll 🎲", Phase::InProgress), Some(Command::Roll));
        assert_eq!(parse_command("!jo.in", Phase::Waiting), Some(Command::Join));
    }

    #[test]
    fn test_parse_respects_phase() {
        assert_eq!(parse_command("!join", Phase::InProgress), None);
        assert_eq!(parse_command("!roll", Phase::Waiting), None);
        assert_eq!(parse_command("!buy", Phase::Finished), None);

        for phase in [Phase::Waiting, Phase::InProgress, Phase::Finished] {
            assert_eq!(parse_command("!status", phase), Some(Command::Status));
            assert_eq!(parse_command("!board", phase), Some(Command::Board));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(parse_command("roll", Phase::InProgress), None);
        assert_eq!(parse_command("!dance", Phase::InProgress), None);
        assert_eq!(parse_command("!roll now", Phase::InProgress), None);
        assert_eq!(parse_command("", Phase::Waiting), None);
    }

    #[test]
    fn test_chat_router() {
        let router = ChatRouter;
        assert_eq!(router.route("!Status", Phase::Waiting), Some(Command::Status));
    }

    #[test]
    fn test_command_serde() {
        let json = serde_json::to_string(&Command::Roll).unwrap();
        assert_eq!(json, "\"roll\"");
        assert_eq!(Command::Buy.to_string(), "buy");
    }
}
