// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use eventdesk_core::{Event, Page, Row};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{ArgOutputFormat, summarize};

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Number,
                EventColumn::Name,
                EventColumn::Date,
                EventColumn::Time,
                EventColumn::Location,
                EventColumn::Description,
                EventColumn::Id,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, page: &'a Page<'a>) -> Display<'a> {
        Display {
            page,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    page: &'a Page<'a>,
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let rows: Vec<JsonRow<'_>> = self
                    .page
                    .rows
                    .iter()
                    .map(|row| JsonRow {
                        number: row.number,
                        event: row.event,
                    })
                    .collect();
                let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table if self.page.rows.is_empty() => write!(f, "No events found."),
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, &self.page.rows))?;
                write!(
                    f,
                    "Page {}/{} ({} events)",
                    self.page.number, self.page.count, self.page.total
                )
            }
        }
    }
}

#[derive(serde::Serialize)]
struct JsonRow<'a> {
    number: usize,
    #[serde(flatten)]
    event: &'a Event,
}

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Number,
    Name,
    Date,
    Time,
    Location,
    Description,
    Id,
}

impl TableColumn<Row<'_>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Number => "NO",
            EventColumn::Name => "Name",
            EventColumn::Date => "Date",
            EventColumn::Time => "Time",
            EventColumn::Location => "Location",
            EventColumn::Description => "Description",
            EventColumn::Id => "ID",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a Row<'_>) -> Cow<'a, str> {
        match self {
            EventColumn::Number => row.number.to_string().into(),
            EventColumn::Name => row.event.name.as_str().into(),
            EventColumn::Date => row.event.date.as_str().into(),
            EventColumn::Time => row.event.time.as_str().into(),
            EventColumn::Location => row.event.location.as_str().into(),
            EventColumn::Description => summarize(&row.event.description, DESCRIPTION_WIDTH),
            EventColumn::Id => format!("#{}", row.event.id).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Number | EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _row: &Row<'_>) -> Option<Color> {
        match self {
            EventColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
