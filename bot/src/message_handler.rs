use tictactoe_bot_common::{
    GameService, MoveError, PlayerName, RenderState, ScoreEntry, SessionId, log, log_debug,
};

use crate::command::{Command, EventPayload, InboundEvent};
use crate::keyboard::Keyboard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: SessionId,
    pub text: String,
    pub keyboard: Option<Keyboard>,
    /// Replaces the previous game message instead of posting a new one.
    pub edits_previous: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleResult {
    Reply(OutboundMessage),
    Ignored,
}

pub struct MessageHandler {
    service: GameService,
}

impl MessageHandler {
    pub fn new(service: GameService) -> Self {
        Self { service }
    }

    pub fn handle_event(&self, event: InboundEvent) -> HandleResult {
        match event.payload {
            EventPayload::Command(command) => {
                self.handle_command(event.chat_id, event.user, command)
            }
            EventPayload::ButtonPress(data) => self.handle_button_press(event.chat_id, &data),
        }
    }

    fn handle_command(&self, chat_id: SessionId, user: PlayerName, command: Command) -> HandleResult {
        let reply = |text: String, keyboard: Option<Keyboard>| {
            HandleResult::Reply(OutboundMessage {
                chat_id: chat_id.clone(),
                text,
                keyboard,
                edits_previous: false,
            })
        };

        match command {
            Command::Start => reply(help_text(), None),
            Command::Play => {
                let render = self.service.start_session(chat_id.clone(), user, false);
                reply(render.status_text, Some(Keyboard::from_cells(&render.cells)))
            }
            Command::Ai => {
                let render = self.service.start_session(chat_id.clone(), user, true);
                reply(render.status_text, Some(Keyboard::from_cells(&render.cells)))
            }
            Command::Score => {
                let score = self.service.get_score(&user);
                reply(format!("🏆 {}, your score: {}", user, score), None)
            }
            Command::Leaderboard => {
                let entries = self.service.get_leaderboard(None);
                reply(leaderboard_text(&entries), None)
            }
            Command::Unknown(name) => {
                log_debug!("[chat:{}] Unknown command /{} ignored", chat_id, name);
                HandleResult::Ignored
            }
        }
    }

    fn handle_button_press(&self, chat_id: SessionId, data: &str) -> HandleResult {
        let Ok(index) = data.trim().parse::<usize>() else {
            log_debug!("[chat:{}] Ignoring button data '{}'", chat_id, data);
            return HandleResult::Ignored;
        };

        match self.service.submit_move(&chat_id, index) {
            Ok(render) => HandleResult::Reply(game_message(chat_id, &render)),
            Err(MoveError::NotFound { .. }) | Err(MoveError::IllegalMove { .. }) => {
                HandleResult::Ignored
            }
        }
    }
}

fn game_message(chat_id: SessionId, render: &RenderState) -> OutboundMessage {
    if render.is_terminal {
        log!("[chat:{}] {}", chat_id, render.status_text);
    }

    OutboundMessage {
        chat_id,
        text: render.status_text.clone(),
        keyboard: Some(Keyboard::from_cells(&render.cells)),
        edits_previous: true,
    }
}

pub fn help_text() -> String {
    [
        "🎮 Tic Tac Toe Bot",
        "",
        "/play – Play with a friend",
        "/ai – Play vs AI",
        "/score – Your score",
        "/leaderboard – Global rankings",
    ]
    .join("\n")
}

pub fn leaderboard_text(entries: &[ScoreEntry]) -> String {
    if entries.is_empty() {
        return "📉 No games played yet.".to_string();
    }

    let mut text = String::from("🏆 Global Leaderboard\n");
    for (i, entry) in entries.iter().enumerate() {
        let rank = i + 1;
        let medal = match rank {
            1 => "🥇",
            2 => "🥈",
            3 => "🥉",
            _ => "🔹",
        };
        text.push_str(&format!("\n{} {}. {} — {} wins", medal, rank, entry.name, entry.wins));
    }
    text
}
