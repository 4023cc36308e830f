// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, sync::Arc};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use eventdesk_api::EventClient;
use eventdesk_core::{APP_NAME, Route};
use futures::{FutureExt, future::LocalBoxFuture};

use crate::cmd_event::{CmdEventAdd, CmdEventEdit, CmdEventList};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_tui::CmdOpen;
use crate::config::{Config, parse_config};
use crate::logging;

/// Run the eventdesk command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration file
    pub base_url: Option<String>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse, filter and edit events on a REST backend.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // default to the event list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $EVENTDESK_CONFIG, then to \
$XDG_CONFIG_HOME/eventdesk/config.toml on Linux and MacOS, \
%APPDATA%/eventdesk/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--"base-url" <URL> "Base URL of the events backend")
                    .value_hint(ValueHint::Url),
            )
            .subcommand(CmdOpen::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage your events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventAdd::command())
                    .subcommand(CmdEventEdit::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdOpen::NAME, matches)) => Tui(CmdOpen::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventAdd::NAME, matches)) => EventAdd(CmdEventAdd::from(matches)),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Tui(CmdOpen::new(Route::List)),
            _ => unreachable!(),
        };

        Ok(Cli {
            config: matches.get_one("config").cloned(),
            base_url: matches.get_one("base-url").cloned(),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.base_url).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the terminal UI at a page
    Tui(CmdOpen),

    /// List events
    EventList(CmdEventList),

    /// Add an event in the terminal UI
    EventAdd(CmdEventAdd),

    /// Edit an event in the terminal UI
    EventEdit(CmdEventEdit),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Tui(_) | Self::EventAdd(_) | Self::EventEdit(_))
    }

    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        let interactive = self.is_interactive();
        match self {
            Tui(a)       => Self::run_with(config, base_url, interactive, |x| a.run(x).boxed_local()).await,
            EventList(a) => Self::run_with(config, base_url, interactive, |x| a.run(x).boxed_local()).await,
            EventAdd(a)  => Self::run_with(config, base_url, interactive, |x| a.run(x).boxed_local()).await,
            EventEdit(a) => Self::run_with(config, base_url, interactive, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        base_url: Option<String>,
        interactive: bool,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Session) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        let config = parse_config(config, base_url).await?;
        logging::init(interactive, config.log_file.as_deref())?;
        tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

        let session = Session::new(config)?;
        f(&session).await
    }
}

/// Everything a command needs to talk to the backend.
#[derive(Debug)]
pub struct Session {
    pub client: Arc<EventClient>,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let client = EventClient::new(config.api)?;
        tracing::debug!(base_url = client.base_url(), "backend client ready");
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cmd_generate_completion::Shell, util::ArgOutputFormat};
    use eventdesk_core::EventId;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_parse_base_url() {
        let args = vec!["test", "--base-url", "http://example.com:3001", "event", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://example.com:3001"));
    }

    #[test]
    fn test_parse_default_opens_list() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        match cli.command {
            Commands::Tui(cmd) => assert_eq!(cmd.route, Route::List),
            _ => panic!("Expected Tui command"),
        }
    }

    #[test]
    fn test_parse_open() {
        let cli = Cli::try_parse_from(vec!["test", "open", "/event/mod/3"]).unwrap();
        match cli.command {
            Commands::Tui(cmd) => assert_eq!(cmd.route, Route::Edit(EventId::new(3))),
            _ => panic!("Expected Tui command"),
        }
    }

    #[test]
    fn test_parse_open_unknown_path() {
        assert!(Cli::try_parse_from(vec!["test", "open", "/nowhere"]).is_err());
    }

    #[test]
    fn test_parse_event_list() {
        let args = vec!["test", "event", "list", "--output-format", "json", "--page", "2"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::EventList(cmd) => {
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
                assert_eq!(cmd.page, 2);
            }
            _ => panic!("Expected EventList command"),
        }
    }

    #[test]
    fn test_parse_event_add() {
        let cli = Cli::try_parse_from(vec!["test", "e", "add"]).unwrap();
        assert!(matches!(cli.command, Commands::EventAdd(_)));
        assert!(cli.command.is_interactive());
    }

    #[test]
    fn test_parse_event_edit() {
        let cli = Cli::try_parse_from(vec!["test", "event", "edit", "12"]).unwrap();
        match cli.command {
            Commands::EventEdit(cmd) => assert_eq!(cmd.id, EventId::new(12)),
            _ => panic!("Expected EventEdit command"),
        }
    }

    #[test]
    fn test_parse_event_edit_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(vec!["test", "event", "edit", "abc"]).is_err());
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
                assert!(!Commands::GenerateCompletion(cmd).is_interactive());
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
