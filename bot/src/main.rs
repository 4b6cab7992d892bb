mod bot_config;
mod command;
mod console;
mod keyboard;
mod message_handler;

use clap::Parser;
use tokio::io::BufReader;

use bot_config::BotConfig;
use console::ConsoleTransport;
use message_handler::MessageHandler;
use tictactoe_bot_common::config::{ConfigManager, ConfigSource, FileContentConfigProvider};
use tictactoe_bot_common::games::SessionRng;
use tictactoe_bot_common::games::tictactoe::RandomMoveStrategy;
use tictactoe_bot_common::{GameService, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_bot", about = "Tic-tac-toe chat bot on a console transport")]
struct Args {
    /// YAML config file; defaults apply when it does not exist
    #[arg(long, default_value = "tictactoe_bot.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Seed for the automated opponent, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config to --config and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager =
        ConfigManager::<FileContentConfigProvider, BotConfig>::from_yaml_file(&args.config);

    if args.write_default_config {
        config_manager.set_config(&BotConfig::default())?;
        println!("Default config written to {}", args.config);
        return Ok(());
    }

    let (config, source) = config_manager.load()?;

    let prefix = match config.log_prefix.clone() {
        Some(prefix) => Some(prefix),
        None if args.use_log_prefix => Some("Bot".to_string()),
        None => None,
    };
    logger::init_logger(prefix, config.verbose_logging);

    match source {
        ConfigSource::Stored => log!("Config loaded from {}", config_manager.describe_source()),
        ConfigSource::Defaults => log!(
            "No config found at {}, using defaults",
            config_manager.describe_source()
        ),
    }

    let rng = SessionRng::from_optional_seed(args.seed.or(config.rng_seed));
    log!("Automated opponent seed: {}", rng.seed());

    let service = GameService::new(
        config.service_settings(),
        Box::new(RandomMoveStrategy::new(rng)),
    );
    let transport = ConsoleTransport::new(MessageHandler::new(service));

    log!("Tic-tac-toe bot ready, reading '<chat_id> <user> <command|cell>' lines from stdin");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = transport.run(stdin, stdout) => {
            let replies = result?;
            log!("Input closed after {} replies", replies);
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                log!("Failed to listen for Ctrl+C: {}", e);
            }
            log!("Shutdown signal received");
        }
    }

    log!("Bot shut down gracefully");

    Ok(())
}
