// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, sync::Arc};

use clap::{ArgMatches, Command, arg, builder::RangedU64ValueParser};
use eventdesk_core::{
    Event, EventBackend, EventId, EventQuery, Route, SearchTerm, filter_events, paginate,
    sort_events,
};
use jiff::civil::Date;

use crate::cli::Session;
use crate::event_formatter::EventFormatter;
use crate::tui;
use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub date: Option<Date>,
    pub name: Option<SearchTerm>,
    pub page: usize,
    pub output_format: ArgOutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events, earliest first")
            .arg(
                arg!(--date <DATE> "Only events on this date (YYYY-MM-DD)")
                    .value_parser(parse_date),
            )
            .arg(
                arg!(--name <TERM> "Only events whose name contains TERM, ignoring case")
                    .value_parser(|s: &str| s.parse::<SearchTerm>()),
            )
            .arg(
                arg!(-p --page <N> "Page to show")
                    .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
                    .default_value("1"),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: matches.get_one("date").copied(),
            name: matches.get_one("name").cloned(),
            page: matches.get_one("page").copied().unwrap_or(1),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = session.client.list_events().await?;
        println!("{}", self.render(&events)?);
        Ok(())
    }

    /// Runs the list pipeline over `events` and formats the requested page.
    pub fn render(&self, events: &[Event]) -> Result<String, Box<dyn Error>> {
        let query = EventQuery {
            date: self.date,
            name: self.name.clone(),
        };
        let mut visible = filter_events(events, &query);
        sort_events(&mut visible);

        let page = paginate(&visible, self.page);
        if page.count > 0 && self.page > page.count {
            return Err(format!(
                "Page {} is out of range, there are only {} pages",
                self.page, page.count
            )
            .into());
        }

        let formatter = EventFormatter::new().with_output_format(self.output_format);
        Ok(formatter.format(&page).to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventAdd;

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new event using TUI")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        let backend: Arc<dyn EventBackend> = session.client.clone();
        tui::open(backend, Route::Add).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventEdit {
    pub id: EventId,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event using TUI")
            .arg(
                arg!(id: <ID> "The id of the event to edit")
                    .value_parser(|s: &str| s.parse::<EventId>()),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one("id").copied().unwrap_or_default(),
        }
    }

    pub async fn run(self, session: &Session) -> Result<(), Box<dyn Error>> {
        let backend: Arc<dyn EventBackend> = session.client.clone();
        tui::open(backend, Route::Edit(self.id)).await
    }
}
