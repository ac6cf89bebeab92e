use std::io::{self, Write};

use color_eyre::Result;
use streamchat::app::ChatController;
use streamchat::cli::{parse_args, version_line, ChatArgs, CliCommand, Renderer, USAGE};
use streamchat::config::Config;
use streamchat::conversation::{await_notification, CLEAR_GRACE_PERIOD};
use streamchat::error::ChatError;
use streamchat::stream::UpdateOutcome;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter (e.g. `debug`, `streamchat=trace`).
const LOG_ENV: &str = "STREAMCHAT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

fn setup_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout carries the transcript, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn build_config(args: &ChatArgs) -> Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(url) = &args.base_url {
        config = config.with_base_url(url);
        config.validate_base_url("--url")?;
    }
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir.clone());
    }

    Ok(config)
}

/// Send one prompt, print the reply as it arrives, and exit.
async fn run_once(chat: &mut ChatController, prompt: &str) -> Result<()> {
    if !chat.submit(prompt) {
        return Err(color_eyre::eyre::eyre!("prompt is empty"));
    }

    let mut stdout = io::stdout();
    let mut renderer = Renderer::new();
    renderer.render(chat.messages(), &mut stdout)?;

    while chat.is_streaming() {
        let Some(update) = chat.next_update().await else {
            break;
        };
        let outcome = chat.handle_update(update);
        renderer.render(chat.messages(), &mut stdout)?;

        if let UpdateOutcome::Failed(error) = outcome {
            renderer.finish(&mut stdout)?;
            return Err(ChatError::from(error).into());
        }
    }

    renderer.finish(&mut stdout)?;
    Ok(())
}

async fn run_interactive(chat: &mut ChatController) -> Result<()> {
    let mut stdout = io::stdout();
    let mut renderer = Renderer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending_clear = None;

    writeln!(
        stdout,
        "streamchat {} (session {}). /clear, /cancel, /quit",
        streamchat::cli::VERSION,
        chat.session_id()
    )?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match line.trim() {
                    "" => {}
                    "/quit" | "/exit" => break,
                    "/cancel" => {
                        if chat.is_streaming() {
                            chat.cancel();
                            renderer.finish(&mut stdout)?;
                        }
                    }
                    "/clear" => match chat.clear() {
                        Some(notification) => {
                            pending_clear = Some(notification);
                            renderer.reset();
                            writeln!(stdout, "(conversation cleared)")?;
                        }
                        None => eprintln!("(a reply is streaming; /cancel it first)"),
                    },
                    prompt => {
                        if chat.submit(prompt) {
                            renderer.render(chat.messages(), &mut stdout)?;
                        } else {
                            eprintln!("(wait for the current reply to finish)");
                        }
                    }
                }
            }
            Some(update) = chat.next_update() => {
                let outcome = chat.handle_update(update);
                renderer.render(chat.messages(), &mut stdout)?;

                match outcome {
                    UpdateOutcome::Finished => renderer.finish(&mut stdout)?,
                    UpdateOutcome::Failed(error) => {
                        renderer.finish(&mut stdout)?;
                        eprintln!("Error: {}", error.user_message());
                    }
                    UpdateOutcome::Merged | UpdateOutcome::Stale => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if !chat.is_streaming() {
                    break;
                }
                chat.cancel();
                renderer.finish(&mut stdout)?;
            }
        }
    }

    // Leaving drops the runtime, which would cut off an in-flight clear
    if let Some(notification) = pending_clear {
        await_notification(notification, CLEAR_GRACE_PERIOD).await;
    }

    Ok(())
}

async fn run_chat(args: ChatArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut chat = ChatController::from_config(config)?;

    match args.prompt.as_deref() {
        Some(prompt) => run_once(&mut chat, prompt).await,
        None => run_interactive(&mut chat).await,
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Chat(args) => {
            setup_logging();
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_chat(args))
        }
    }
}
