// cyberguardian - a chatbot that helps you stay safe online
//
// Entry point. Sets up logging and config, greets the user, then hands the
// terminal over to the chat session.

use cyberguardian_lib::{
    ui::{Presenter, TerminalPresenter, WelcomeSound},
    ChatConfig, KnowledgeBase, Session,
};
use std::env;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_NAME: &str = "friend";
const TAGLINE: &str = "[:: Your AI Guide to Cybersecurity ::]";

const CHAT_HELP: &[&str] = &[
    "You can ask about:",
    " - Password safety",
    " - Scams",
    " - Privacy",
    " - Phishing",
    " - Safe browsing",
    " - My purpose",
    " - What can I help with",
    "Type 'exit' to leave the chat.",
    "Type 'start quiz' to begin the cybersecurity quiz.",
    "Type 'add task - <title>' or 'remind me to <something> tomorrow' to track a task.",
    "Type 'show activity log' or 'what have you done for me?' to view recent actions.",
];

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "version" | "-v" | "--version" => {
                println!("cyberguardian v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "help" | "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
            }
        }
    }

    let mut presenter = TerminalPresenter::new(true);
    let config = match ChatConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "falling back to default config");
            presenter.show_error(&e.user_message())?;
            ChatConfig::default()
        }
    };
    let mut presenter = TerminalPresenter::new(config.color);

    if let Err(e) = run(&config, &mut presenter) {
        presenter.show_error(&format!("An unexpected error occurred: {}", e))?;
        return Err(e);
    }
    Ok(())
}

fn run(config: &ChatConfig, presenter: &mut TerminalPresenter) -> anyhow::Result<()> {
    presenter.show_banner("CyberGuardian")?;
    presenter.write_line(&format!("      {}", TAGLINE))?;

    if let Some(path) = &config.welcome_sound {
        // a missing or broken sound never stops the chat
        if let Err(e) = WelcomeSound::new(path, config.sound_player.as_str()).play() {
            warn!(error = %e, "welcome sound failed");
            presenter.show_error(&e.user_message())?;
        }
    }

    presenter.write_line("")?;
    presenter.write_prompt("Please enter your name: ")?;
    let user_name = presenter
        .read_line()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let welcome = [
        format!("Welcome, {}!", user_name),
        "I'm CyberGuardian, your cybersecurity companion.".to_string(),
        "Ask me anything about staying safe online.".to_string(),
    ];
    presenter.show_welcome(&welcome, config.banner_delay_ms)?;

    presenter.show_divider("Chat Help")?;
    for line in CHAT_HELP {
        presenter.write_line(line)?;
    }

    let knowledge = Arc::new(KnowledgeBase::builtin());
    let mut session = Session::new(knowledge, config)?;
    session.run_chat(&user_name, presenter)?;

    presenter.show_divider("Session Ended")?;
    presenter.say(
        &format!("Thank you for using CyberGuardian, {}!", user_name),
        config.typing_delay_ms,
    )?;
    presenter.say(
        "Stay safe, stay smart. Press Enter to exit.",
        config.typing_delay_ms,
    )?;
    // wait for the final Enter; EOF is fine too
    let _ = presenter.read_line();

    Ok(())
}

fn print_usage() {
    println!(
        r#"cyberguardian v{} - Your AI guide to cybersecurity

USAGE:
    cyberguardian [OPTIONS]

OPTIONS:
    -v, --version          Show version
    -h, --help             Show this help

CHAT COMMANDS:
    add task - <title>     Track a cybersecurity task
    remind me to <x>       Add a reminder ("... tomorrow", "in 3 days")
    show tasks             List your tasks
    start quiz             Take the cybersecurity quiz
    show activity log      See what CyberGuardian did for you
    exit                   Leave the chat

CONFIG:
    ~/.cyberguardian/config.json (optional)
        typing_delay_ms, banner_delay_ms, welcome_sound,
        sound_player, rng_seed, color

LOGGING:
    RUST_LOG=debug cyberguardian    Diagnostics on stderr
"#,
        env!("CARGO_PKG_VERSION")
    );
}
