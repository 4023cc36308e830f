// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, ops::Range};

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::civil::Date;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Parses a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<Date, String> {
    s.trim()
        .parse()
        .map_err(|e| format!("Invalid date `{s}`, expected YYYY-MM-DD: {e}"))
}

/// Parses the text of a date filter input.
///
/// Empty or incomplete input means no filter, like a cleared date picker.
pub fn parse_date_input(s: &str) -> Option<Date> {
    let s = s.trim();
    if s.len() < "YYYY-MM-DD".len() {
        return None;
    }
    s.parse().ok()
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Display width of the first `n` grapheme clusters of `s`.
pub fn unicode_width_of_graphemes(s: &str, n: usize) -> usize {
    s.graphemes(true).take(n).map(UnicodeWidthStr::width).sum()
}

/// Byte offset where grapheme `g_idx` starts, the string length past the end.
pub fn byte_offset_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map_or(s.len(), |(i, _)| i)
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

/// The first line of `s`, cut to at most `max_width` columns with a trailing `…`.
pub fn summarize(s: &str, max_width: usize) -> Cow<'_, str> {
    let line = s.lines().next().unwrap_or_default().trim_end();
    let multiline = line.len() < s.trim_end().len();
    if !multiline && line.width() <= max_width {
        return Cow::Borrowed(line);
    }

    let mut out = String::new();
    let mut width = 0;
    for g in line.graphemes(true) {
        let w = g.width();
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push_str(g);
    }
    out.push('…');
    Cow::Owned(out)
}
