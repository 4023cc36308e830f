// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use eventdesk_core::{DELETE_PROMPT, EDIT_PROMPT, EventId, EventList, LoadState, Page};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph, Row as TableRow, Table};

use crate::tui::component::{Component, Message};
use crate::tui::component_dialog::Modal;
use crate::tui::component_form::{Access, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::list_store::ListStore;
use crate::util::summarize;

const HINTS: &[(&str, &str)] = &[
    ("Add", "a"),
    ("Edit", "e"),
    ("Delete", "d"),
    ("Search", "/"),
    ("Reload", "r"),
    ("Quit", "q"),
];

pub type ListPage = SinglePage<ListStore, ListView>;

pub fn new_list_page() -> ListPage {
    SinglePage::new("Events", HINTS, ListView::new())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Table,
    Date,
    Search,
}

/// Filters, the event table and the pager.
pub struct ListView {
    focus: Focus,
    date: Input<ListStore, DateAccess>,
    search: Input<ListStore, SearchAccess>,
}

impl ListView {
    fn new() -> Self {
        Self {
            focus: Focus::Table,
            date: Input::new("Date"),
            search: Input::new("Search"),
        }
    }

    fn focus_to(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<ListStore>, to: Focus) {
        match self.focus {
            Focus::Date => self.date.deactivate(dispatcher, store),
            Focus::Search => self.search.deactivate(dispatcher, store),
            Focus::Table => {}
        }
        self.focus = to;
        match self.focus {
            Focus::Date => self.date.activate(dispatcher, store),
            Focus::Search => self.search.activate(dispatcher, store),
            Focus::Table => {}
        }
    }

    fn on_table_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<ListStore>,
        event: KeyEvent,
    ) -> Option<Message> {
        let (selected, current, count) = {
            let s = store.borrow();
            (s.selected, s.list.current_page(), s.list.page_count())
        };

        let action = match event.code {
            KeyCode::Up | KeyCode::Char('k') => Action::SelectRow(selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => Action::SelectRow(selected + 1),
            KeyCode::Left | KeyCode::Char('h') if current > 1 => Action::SelectPage(current - 1),
            KeyCode::Right | KeyCode::Char('l') if current < count => {
                Action::SelectPage(current + 1)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let number = c.to_digit(10).and_then(|n| usize::try_from(n).ok())?;
                Action::SelectPage(number)
            }
            KeyCode::Enter | KeyCode::Char('e') => Action::EditSelected,
            KeyCode::Delete | KeyCode::Char('d') => Action::DeleteSelected,
            KeyCode::Char('a') => Action::AddEvent,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('/') | KeyCode::BackTab => {
                self.focus_to(dispatcher, store, Focus::Search);
                return Some(Message::CursorUpdated);
            }
            KeyCode::Tab => {
                self.focus_to(dispatcher, store, Focus::Date);
                return Some(Message::CursorUpdated);
            }
            KeyCode::Char('q') => return Some(Message::Exit),
            // already on the first or last page
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l') => {
                return Some(Message::Handled);
            }
            _ => return None,
        };

        dispatcher.dispatch(&action);
        Some(Message::Handled)
    }

    fn render_filter(
        &self,
        store: &RefCell<ListStore>,
        focus: Focus,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let (title, active) = match focus {
            Focus::Date => ("Date", self.date.is_active()),
            _ => ("Search", self.search.is_active()),
        };
        let block = filter_block(title, active);
        let inner = block.inner(area);
        block.render(area, buf);
        match focus {
            Focus::Date => self.date.render(store, inner, buf),
            _ => self.search.render(store, inner, buf),
        }
    }
}

impl Component<ListStore> for ListView {
    fn render(&self, store: &RefCell<ListStore>, area: Rect, buf: &mut Buffer) {
        let areas = Areas::new(area);
        self.render_filter(store, Focus::Date, areas.date, buf);
        self.render_filter(store, Focus::Search, areas.search, buf);

        let s = store.borrow();
        let page = s.list.page();
        render_table(&s, &page, self.focus == Focus::Table, areas.table, buf);
        pager_line(&page).render(areas.pager, buf);
        status_line(&s.list).render(areas.status, buf);

        if let Some(modal) = list_modal(&s) {
            modal.render(area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<ListStore>, area: Rect) -> Option<(u16, u16)> {
        if list_modal(&store.borrow()).is_some() {
            return None;
        }

        let areas = Areas::new(area);
        match self.focus {
            Focus::Date => {
                let inner = filter_block("", true).inner(areas.date);
                self.date.get_cursor_position(store, inner)
            }
            Focus::Search => {
                let inner = filter_block("", true).inner(areas.search);
                self.search.get_cursor_position(store, inner)
            }
            Focus::Table => None,
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<ListStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let modal = list_modal(&store.borrow());
        if let Some(modal) = modal {
            return Some(modal.on_key(dispatcher, event));
        }

        match (self.focus, event.code) {
            (Focus::Table, _) => self.on_table_key(dispatcher, store, event),
            (Focus::Search, KeyCode::Enter) => {
                dispatcher.dispatch(&Action::SubmitSearch);
                self.focus_to(dispatcher, store, Focus::Table);
                Some(Message::CursorUpdated)
            }
            (Focus::Search, KeyCode::Esc) => {
                dispatcher.dispatch(&Action::ClearSearch);
                self.focus_to(dispatcher, store, Focus::Table);
                Some(Message::CursorUpdated)
            }
            (Focus::Date, KeyCode::Enter | KeyCode::Esc) => {
                self.focus_to(dispatcher, store, Focus::Table);
                Some(Message::CursorUpdated)
            }
            (Focus::Date, KeyCode::Tab) | (Focus::Search, KeyCode::BackTab) => {
                let next = match self.focus {
                    Focus::Date => Focus::Search,
                    _ => Focus::Date,
                };
                self.focus_to(dispatcher, store, next);
                Some(Message::CursorUpdated)
            }
            (Focus::Date, KeyCode::BackTab) | (Focus::Search, KeyCode::Tab) => {
                self.focus_to(dispatcher, store, Focus::Table);
                Some(Message::CursorUpdated)
            }
            (Focus::Date, _) => self.date.on_key(dispatcher, store, area, event),
            (Focus::Search, _) => self.search.on_key(dispatcher, store, area, event),
        }
    }
}

struct Areas {
    date: Rect,
    search: Rect,
    table: Rect,
    pager: Rect,
    status: Rect,
}

impl Areas {
    fn new(area: Rect) -> Self {
        let [filters, table, pager, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let [date, search] =
            Layout::horizontal([Constraint::Length(16), Constraint::Min(0)]).areas(filters);
        Self {
            date,
            search,
            table,
            pager,
            status,
        }
    }
}

fn filter_block(title: &str, active: bool) -> Block<'_> {
    let color = if active { Color::Blue } else { Color::Gray };
    Block::bordered()
        .border_set(border::ROUNDED)
        .title(format!(" {title} "))
        .fg(color)
}

fn render_table(
    store: &ListStore,
    page: &Page<'_>,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let list = &store.list;
    if page.rows.is_empty() {
        let text = match list.load_state() {
            LoadState::Loading => "Loading events...",
            LoadState::Failed(_) => "Failed to load events. Press r to retry.",
            LoadState::Ready => "No events found.",
        };
        Paragraph::new(text)
            .centered()
            .dark_gray()
            .render(area, buf);
        return;
    }

    let widths = [
        Constraint::Length(4),
        Constraint::Fill(3),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Fill(2),
        Constraint::Fill(4),
    ];
    // the description is the only column that gets cut, to its share of the row
    let [_, _, _, _, _, description] = Layout::horizontal(widths).spacing(2).areas(area);

    let header = TableRow::new(["NO", "Name", "Date", "Time", "Location", "Description"]).bold();
    let rows = page.rows.iter().enumerate().map(|(i, row)| {
        let event = row.event;
        let cells = [
            row.number.to_string(),
            event.name.clone(),
            event.date.clone(),
            event.time.clone(),
            event.location.clone(),
            summarize(&event.description, usize::from(description.width)).into_owned(),
        ];
        let r = TableRow::new(cells);
        if list.is_deleting(event.id) {
            r.dark_gray()
        } else if focused && i == store.selected {
            r.reversed()
        } else {
            r
        }
    });
    Widget::render(
        Table::new(rows, widths).header(header).column_spacing(2),
        area,
        buf,
    );
}

fn pager_line(page: &Page<'_>) -> Line<'static> {
    let count = page.count;
    let mut spans: Vec<Span<'static>> = vec!["Page:".into()];
    if count == 0 {
        spans.push(" -".dark_gray());
    }
    for number in 1..=count {
        spans.push(" ".into());
        if number == page.number {
            spans.push(format!("[{number}]").blue().bold());
        } else {
            spans.push(number.to_string().into());
        }
    }
    spans.push(format!("  ({} events)", page.total).dark_gray());
    Line::from(spans)
}

fn status_line(list: &EventList) -> Line<'static> {
    let query = list.query();
    let mut parts = Vec::new();
    if let Some(date) = query.date {
        parts.push(format!("date {date}"));
    }
    if let Some(term) = &query.name {
        parts.push(format!("name contains \"{}\"", term.as_str()));
    }

    if parts.is_empty() {
        Line::from("No filters".dark_gray())
    } else {
        Line::from(format!("Filtered by {}", parts.join(", ")).italic())
    }
}

fn list_modal(store: &ListStore) -> Option<Modal> {
    let list = &store.list;
    if let Some(notice) = list.notice() {
        return Some(Modal::Notice(notice.clone()));
    }
    if let Some(id) = list.edit_dialog().target() {
        return Some(Modal::Confirm {
            title: "Edit",
            body: describe(list, *id, EDIT_PROMPT),
            yes: "Yes",
        });
    }
    if let Some(id) = list.delete_dialog().target() {
        return Some(Modal::Confirm {
            title: "Delete",
            body: describe(list, *id, DELETE_PROMPT),
            yes: "Yes, delete it",
        });
    }
    None
}

fn describe(list: &EventList, id: EventId, prompt: &str) -> String {
    match list.events().iter().find(|e| e.id == id) {
        Some(e) => format!("{prompt}\n{} ({} {})", e.name, e.date, e.time),
        None => prompt.to_string(),
    }
}

struct DateAccess;

impl Access<ListStore> for DateAccess {
    fn get(store: &RefCell<ListStore>) -> String {
        store.borrow().date_input.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) {
        dispatcher.dispatch(&Action::UpdateDateFilter(value));
    }

    fn accepts(c: char) -> bool {
        c.is_ascii_digit() || c == '-'
    }

    fn max_len() -> Option<usize> {
        Some(10)
    }

    fn placeholder() -> Option<&'static str> {
        Some("YYYY-MM-DD")
    }
}

struct SearchAccess;

impl Access<ListStore> for SearchAccess {
    fn get(store: &RefCell<ListStore>) -> String {
        store.borrow().search_input.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) {
        dispatcher.dispatch(&Action::UpdateSearch(value));
    }

    fn placeholder() -> Option<&'static str> {
        Some("name, then Enter")
    }
}
