//! CLI module for streamchat.
//!
//! - Argument parsing
//! - Version display
//! - Incremental transcript rendering for the terminal
//!
//! ```ignore
//! use streamchat::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("{}", version_line()),
//!     CliCommand::Help => println!("{}", USAGE),
//!     CliCommand::Chat(args) => run_chat(args).await?,
//! }
//! ```

pub mod args;
pub mod render;
pub mod version;

pub use args::{parse_args, ArgsError, ChatArgs, CliCommand, USAGE};
pub use render::Renderer;
pub use version::{version_line, VERSION};
