// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Commands that hand the terminal over to the TUI.

use std::{error::Error, sync::Arc};

use clap::{ArgMatches, Command, arg};
use eventdesk_core::{EventBackend, Route};

use crate::cli::Session;
use crate::tui;

#[derive(Debug, Clone, Copy)]
pub struct CmdOpen {
    pub route: Route,
}

impl CmdOpen {
    pub const NAME: &str = "open";

    pub const fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the terminal UI at a page")
            .long_about(
                "\
Open the terminal UI at a page. Known pages are /event/list, /event/add and \
/event/mod/<ID>.",
            )
            .arg(
                arg!(path: [PATH] "Page to open")
                    .default_value("/event/list")
                    .value_parser(|s: &str| s.parse::<Route>()),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self::new(matches.get_one("path").copied().unwrap_or_default())
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(route = %self.route, "opening terminal UI...");
        let backend: Arc<dyn EventBackend> = session.client.clone();
        tui::open(backend, self.route).await
    }
}
