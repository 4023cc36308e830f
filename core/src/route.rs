// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::EventId;

/// The page the user is on, addressed by a URL-like path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` or `/event/list`: the event list.
    #[default]
    List,

    /// `/event/add`: the form in create mode.
    Add,

    /// `/event/mod/{id}`: the form in edit mode.
    Edit(EventId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("/event/list"),
            Self::Add => f.write_str("/event/add"),
            Self::Edit(id) => write!(f, "/event/mod/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = match path.len() {
            0 | 1 => path,
            _ => path.trim_end_matches('/'),
        };

        match path {
            "" | "/" | "/event/list" => Ok(Self::List),
            "/event/add" => Ok(Self::Add),
            _ => match path.strip_prefix("/event/mod/") {
                Some(id) => id
                    .parse()
                    .map(Self::Edit)
                    .map_err(|_| RouteError::InvalidId(id.to_string())),
                None => Err(RouteError::Unknown(s.to_string())),
            },
        }
    }
}

/// A path that does not address any page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No page lives at this path.
    #[error("No page at path: {0}")]
    Unknown(String),

    /// The event id in an edit path is not a number.
    #[error("Invalid event id: {0}")]
    InvalidId(String),
}
