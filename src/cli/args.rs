//! Command-line argument parsing for streamchat.

use std::fmt;
use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the chat (interactive unless a prompt is given)
    Chat(ChatArgs),
}

/// Overrides and mode for a chat run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatArgs {
    /// `--url <URL>`: backend base URL
    pub base_url: Option<String>,
    /// `--data-dir <DIR>`: where the session identity is kept
    pub data_dir: Option<PathBuf>,
    /// `--prompt <TEXT>`: send one prompt, print the reply and exit
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue(String),
    UnknownArgument(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue(flag) => write!(f, "{} requires a value", flag),
            ArgsError::UnknownArgument(arg) => write!(f, "unknown argument '{}'", arg),
        }
    }
}

impl std::error::Error for ArgsError {}

pub const USAGE: &str = "\
Usage: streamchat [OPTIONS]

Options:
  -u, --url <URL>        Backend base URL, alias --base-url (env: STREAMCHAT_BASE_URL)
  -d, --data-dir <DIR>   Directory holding the session identity (env: STREAMCHAT_DATA_DIR)
  -p, --prompt <TEXT>    Send one prompt, print the reply and exit
  -V, --version          Print version
  -h, --help             Print this help

Interactive commands: /clear, /cancel, /quit";

/// Parse command-line arguments (including the program name).
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use streamchat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["streamchat".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut chat = ChatArgs::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" | "--base-url" | "-u" => chat.base_url = Some(value_for(&arg, args.next())?),
            "--data-dir" | "-d" => chat.data_dir = Some(value_for(&arg, args.next())?.into()),
            "--prompt" | "-p" => chat.prompt = Some(value_for(&arg, args.next())?),
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::Chat(chat))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["streamchat".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_wins_over_options() {
        assert_eq!(parse(&["--url", "http://x", "-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Chat(ChatArgs::default())));
    }

    #[test]
    fn test_parse_all_options() {
        let command = parse(&[
            "--url",
            "https://abcd.ngrok-free.app",
            "-d",
            "/tmp/chat",
            "--prompt",
            "hello there",
        ]);

        assert_eq!(
            command,
            Ok(CliCommand::Chat(ChatArgs {
                base_url: Some("https://abcd.ngrok-free.app".to_string()),
                data_dir: Some(PathBuf::from("/tmp/chat")),
                prompt: Some("hello there".to_string()),
            }))
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--url"]),
            Err(ArgsError::MissingValue("--url".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ArgsError::UnknownArgument("--unknown".to_string()))
        );
    }
}
