// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain-text table, one line per record, columns padded to a common width.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: "  ",
        }
    }

    fn widths(&self, cells: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .fold(col.name().width(), usize::max)
            })
            .collect()
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|record| self.columns.iter().map(|col| col.format(record)).collect())
            .collect();
        let widths = self.widths(&cells);
        let last = self.columns.len().saturating_sub(1);

        for (i, (col, width)) in self.columns.iter().zip(&widths).enumerate() {
            let name = pad(&col.name(), *width, col.padding_direction(), i == last);
            write!(f, "{}", name.as_str().bold())?;
            if i < last {
                f.write_str(self.separator)?;
            }
        }
        writeln!(f)?;

        for (record, row) in self.data.iter().zip(&cells) {
            for (i, ((col, cell), width)) in self.columns.iter().zip(row).zip(&widths).enumerate()
            {
                let cell = pad(cell, *width, col.padding_direction(), i == last);
                match col.color(record) {
                    Some(color) => write!(f, "{}", cell.as_str().color(color))?,
                    None => f.write_str(&cell)?,
                }
                if i < last {
                    f.write_str(self.separator)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, is_last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // last column does not need trailing spaces
        PaddingDirection::Left if is_last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
