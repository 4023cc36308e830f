// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventdesk_core::{Notice, NoticeLevel};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Message;
use crate::tui::dispatcher::{Action, Dispatcher};

const POPUP_WIDTH: u16 = 48;

/// A popup drawn over the page, it swallows every key while open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// A yes/no question, `yes` labels the confirming choice.
    Confirm {
        title: &'static str,
        body: String,
        yes: &'static str,
    },

    /// A message to acknowledge.
    Notice(Notice),
}

impl Modal {
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let (title, body, hint, color) = match self {
            Modal::Confirm { title, body, yes } => {
                let hint = format!("[n] No  [y] {yes}");
                (*title, body.as_str(), hint, Color::Yellow)
            }
            Modal::Notice(notice) => {
                let (title, color) = match notice.level {
                    NoticeLevel::Success => ("Done", Color::Green),
                    NoticeLevel::Error => ("Error", Color::Red),
                };
                (title, notice.text.as_str(), "[Enter] OK".to_string(), color)
            }
        };

        let width = POPUP_WIDTH.min(area.width);
        let text_width = usize::from(width.saturating_sub(4).max(1));
        let lines = body
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum::<usize>()
            .max(1);
        let height = u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.height);
        let popup = centered(area, width, height);

        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(format!(" {title} ").bold()).centered())
            .title_bottom(Line::from(format!(" {hint} ")).centered())
            .padding(Padding::horizontal(1))
            .fg(color);

        Clear.render(popup, buf);
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .white()
            .block(block)
            .render(popup, buf);
    }

    pub fn on_key(&self, dispatcher: &mut Dispatcher, event: KeyEvent) -> Message {
        let action = match (self, event.code) {
            (Modal::Confirm { .. }, KeyCode::Char('y' | 'Y') | KeyCode::Enter) => {
                Some(Action::Confirm)
            }
            (Modal::Confirm { .. }, KeyCode::Char('n' | 'N') | KeyCode::Esc) => {
                Some(Action::Cancel)
            }
            (Modal::Notice(_), KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) => {
                Some(Action::DismissNotice)
            }
            _ => None,
        };

        if let Some(action) = action {
            dispatcher.dispatch(&action);
        }
        Message::Handled
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
