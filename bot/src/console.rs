use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use tictactoe_bot_common::log;

use crate::command::InboundEvent;
use crate::message_handler::{HandleResult, MessageHandler, OutboundMessage};

/// Line-based stand-in for a chat network: one inbound event per line,
/// replies written to the output stream.
pub struct ConsoleTransport {
    handler: MessageHandler,
}

impl ConsoleTransport {
    pub fn new(handler: MessageHandler) -> Self {
        Self { handler }
    }

    /// Runs until the input is exhausted. Returns the number of replies sent.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut replies = 0;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let event = match InboundEvent::parse_line(&line) {
                Ok(event) => event,
                Err(e) => {
                    log!("Dropping malformed input: {}", e);
                    continue;
                }
            };

            if let HandleResult::Reply(message) = self.handler.handle_event(event) {
                writer.write_all(format_outbound(&message).as_bytes()).await?;
                writer.flush().await?;
                replies += 1;
            }
        }

        Ok(replies)
    }
}

pub fn format_outbound(message: &OutboundMessage) -> String {
    let action = if message.edits_previous { "edit" } else { "send" };
    let mut out = format!("[chat {}][{}]\n{}\n", message.chat_id, action, message.text);
    if let Some(ref keyboard) = message.keyboard {
        out.push_str(&keyboard.render_text());
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_bot_common::games::SessionRng;
    use tictactoe_bot_common::games::tictactoe::RandomMoveStrategy;
    use tictactoe_bot_common::{GameService, ServiceSettings};

    fn create_transport() -> ConsoleTransport {
        let strategy = Box::new(RandomMoveStrategy::new(SessionRng::new(12345)));
        let service = GameService::new(ServiceSettings::default_settings(), strategy);
        ConsoleTransport::new(MessageHandler::new(service))
    }

    #[tokio::test]
    async fn test_scripted_game_is_printed() {
        let transport = create_transport();
        let input = "1 alice /play\n1 alice 0\n1 alice 4\n\n1 alice 1\n1 alice 3\n1 alice 2\n1 alice /score\n";
        let mut output = Vec::new();

        let replies = transport.run(input.as_bytes(), &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(replies, 7);
        assert!(text.starts_with("[chat 1][send]\nGame started!"));
        assert!(text.contains("[chat 1][edit]\n🏆 alice wins!\n❌ ❌ ❌\n⭕ ⭕ ➖\n➖ ➖ ➖\n"));
        assert!(text.ends_with("🏆 alice, your score: 1\n\n"));
    }

    #[tokio::test]
    async fn test_malformed_and_ignored_lines_produce_no_output() {
        let transport = create_transport();
        let input = "garbage\n1 alice 4\n1 alice /unknown\n";
        let mut output = Vec::new();

        let replies = transport.run(input.as_bytes(), &mut output).await.unwrap();

        assert_eq!(replies, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_format_outbound_without_keyboard() {
        let message = OutboundMessage {
            chat_id: "9".into(),
            text: "hello".to_string(),
            keyboard: None,
            edits_previous: false,
        };

        assert_eq!(format_outbound(&message), "[chat 9][send]\nhello\n\n");
    }
}
