use tictactoe_bot_common::{PlayerName, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Play,
    Ai,
    Score,
    Leaderboard,
    Unknown(String),
}

impl Command {
    /// Accepts `/play` as well as the addressed form `/play@some_bot`.
    pub fn parse(text: &str) -> Self {
        let name = text.trim().trim_start_matches('/');
        let name = name.split('@').next().unwrap_or(name);

        match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "play" => Command::Play,
            "ai" => Command::Ai,
            "score" => Command::Score,
            "leaderboard" => Command::Leaderboard,
            _ => Command::Unknown(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    Command(Command),
    /// Raw callback data of a pressed board button.
    ButtonPress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub chat_id: SessionId,
    pub user: PlayerName,
    pub payload: EventPayload,
}

impl InboundEvent {
    /// Parses `<chat_id> <user_name> <payload>`.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let line = line.trim();

        let (chat_id, rest) = line
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("Expected '<chat_id> <user> <payload>', got '{}'", line))?;
        let (user, payload) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(|| format!("Missing payload in '{}'", line))?;
        let payload = payload.trim();

        let payload = if payload.starts_with('/') {
            EventPayload::Command(Command::parse(payload))
        } else {
            EventPayload::ButtonPress(payload.to_string())
        };

        Ok(Self {
            chat_id: SessionId::new(chat_id),
            user: PlayerName::new(user),
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/play"), Command::Play);
        assert_eq!(Command::parse("/AI"), Command::Ai);
        assert_eq!(Command::parse("/score"), Command::Score);
        assert_eq!(Command::parse("/leaderboard"), Command::Leaderboard);
    }

    #[test]
    fn test_parse_addressed_command() {
        assert_eq!(Command::parse("/play@tictactoe_bot"), Command::Play);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::parse("/stop"), Command::Unknown("stop".to_string()));
    }

    #[test]
    fn test_parse_command_line() {
        let event = InboundEvent::parse_line("42 alice /ai").unwrap();

        assert_eq!(event.chat_id, SessionId::new("42"));
        assert_eq!(event.user, PlayerName::new("alice"));
        assert_eq!(event.payload, EventPayload::Command(Command::Ai));
    }

    #[test]
    fn test_parse_button_line_with_extra_spaces() {
        let event = InboundEvent::parse_line("  -100   bob    7 ").unwrap();

        assert_eq!(event.chat_id, SessionId::new("-100"));
        assert_eq!(event.user, PlayerName::new("bob"));
        assert_eq!(event.payload, EventPayload::ButtonPress("7".to_string()));
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert!(InboundEvent::parse_line("42").is_err());
        assert!(InboundEvent::parse_line("42 alice").is_err());
        assert!(InboundEvent::parse_line("").is_err());
    }
}
