// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme_at, grapheme_count, unicode_width_of_graphemes,
};

/// A vertical list of labelled items, one of them focused.
pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: PhantomData,
        }
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Max(3))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, index: usize) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
        self.item_index = index;
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        // draw bottom-up so the side line of an item never covers the title below it
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate().rev() {
            item_render(i == last, item.item_title(), item.item_state(), *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, item_inner(*area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let Some(item) = self.items.get_mut(self.item_index)
            && let Some(area) = areas.get(self.item_index)
            && let Some(msg) = item.on_key(dispatcher, store, item_inner(*area), event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab if self.item_index > 0 => {
                self.navigate(dispatcher, store, self.item_index - 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab if self.item_index + 1 < self.items.len() => {
                self.navigate(dispatcher, store, self.item_index + 1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(&Action::RequestSubmit);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self) -> &str;
    fn item_state(&self) -> FormItemState;
}

impl<S> Component<S> for Box<dyn FormItem<S>> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        (**self).get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        (**self).on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).deactivate(dispatcher, store);
    }
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self) -> &str {
        (**self).item_title()
    }

    fn item_state(&self) -> FormItemState {
        (**self).item_state()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    Active,
    Inactive,
}

/// Reads and writes the text behind an [`Input`].
pub trait Access<S> {
    fn get(store: &RefCell<S>) -> String;

    fn set(dispatcher: &mut Dispatcher, value: String);

    fn accepts(c: char) -> bool {
        !c.is_control()
    }

    fn max_len() -> Option<usize> {
        None
    }

    fn placeholder() -> Option<&'static str> {
        None
    }
}

/// A single-line text input, the cursor moves by grapheme cluster.
///
/// Inputs that accept `\n` take a line break on Alt+Enter or Ctrl+J and show it as `↵`.
pub struct Input<S, A: Access<S>> {
    title: String,
    active: bool,
    character_index: usize,
    _phantom: PhantomData<(S, A)>,
}

impl<S, A: Access<S>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            character_index: 0,
            _phantom: PhantomData,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn edit(&mut self, dispatcher: &mut Dispatcher, value: &str, code: KeyCode) -> bool {
        let len = grapheme_count(value);
        match code {
            KeyCode::Left if self.character_index > 0 => self.character_index -= 1,
            KeyCode::Right if self.character_index < len => self.character_index += 1,
            KeyCode::Home => self.character_index = 0,
            KeyCode::End => self.character_index = len,
            KeyCode::Backspace if self.character_index > 0 => {
                if let Some(range) = byte_range_of_grapheme_at(value, self.character_index - 1) {
                    let mut v = value.to_owned();
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                    self.character_index -= 1;
                }
            }
            KeyCode::Delete => {
                if let Some(range) = byte_range_of_grapheme_at(value, self.character_index) {
                    let mut v = value.to_owned();
                    v.replace_range(range, "");
                    A::set(dispatcher, v);
                }
            }
            KeyCode::Char(c) => {
                let full = A::max_len().is_some_and(|max| value.chars().count() >= max);
                if A::accepts(c) && !full {
                    let mut v = value.to_owned();
                    v.insert(byte_offset_of_grapheme(value, self.character_index), c);
                    A::set(dispatcher, v);
                    self.character_index += 1;
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Backspace => {}
            _ => return false,
        }
        true
    }
}

impl<S, A: Access<S>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        match A::placeholder() {
            Some(placeholder) if v.is_empty() => Paragraph::new(placeholder.dark_gray()),
            _ => Paragraph::new(display(&v).into_owned()),
        }
        .render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = display(&A::get(store)).into_owned();
        let index = self.character_index.min(grapheme_count(&v));
        let width = u16::try_from(unicode_width_of_graphemes(&v, index)).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(width).min(area.right().saturating_sub(1));
        Some((x, area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active {
            return None;
        }

        let code = match (event.code, event.modifiers) {
            (KeyCode::Enter, m) if m.contains(KeyModifiers::ALT) && A::accepts('\n') => {
                KeyCode::Char('\n')
            }
            (KeyCode::Char('j'), m) if m.contains(KeyModifiers::CONTROL) && A::accepts('\n') => {
                KeyCode::Char('\n')
            }
            (_, m) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => return None,
            (code, _) => code,
        };

        // the value may have changed under us, e.g. after a load
        let v = A::get(store);
        self.character_index = self.character_index.min(grapheme_count(&v));
        self.edit(dispatcher, &v, code)
            .then_some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.character_index = grapheme_count(&A::get(store));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S, A: Access<S>> FormItem<S> for Input<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn item_state(&self) -> FormItemState {
        if self.active {
            FormItemState::Active
        } else {
            FormItemState::Inactive
        }
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render(is_last: bool, title: &str, state: FormItemState, area: Rect, buf: &mut Buffer) {
    let (color, step) = match state {
        FormItemState::Active => (Color::Blue, S_STEP_ACTIVE),
        FormItemState::Inactive => (Color::Gray, S_STEP_INACTIVE),
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(title)
        .bold()
        .fg(color)
        .render(area_title, buf);

    let bottom = area.y + area.height.saturating_sub(1);
    for y in area.y..=bottom {
        let symbol = match y {
            y if y == area.y => step,
            y if y == bottom && is_last => S_SIDER_BOTTOM,
            _ => S_SIDER_CONNECTOR,
        };
        if let Some(c) = buf.cell_mut((area.x, y)) {
            c.set_symbol(symbol);
            c.set_fg(color);
        }
    }
}

/// The value as drawn on one line, each line break becomes a single `↵`.
fn display(value: &str) -> Cow<'_, str> {
    if value.contains('\n') {
        Cow::Owned(value.replace("\r\n", "↵").replace('\n', "↵"))
    } else {
        Cow::Borrowed(value)
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
