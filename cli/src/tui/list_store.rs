// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, mem, rc::Rc};

use eventdesk_core::{EventId, EventList, Outcome, Route};

use crate::tui::dispatcher::{Action, Dispatcher, Effect, Store};
use crate::util::parse_date_input;

#[derive(Debug)]
pub struct ListStore {
    pub list: EventList,

    /// Raw text of the date filter input
    pub date_input: String,

    /// Raw text of the search input, applied on submit only
    pub search_input: String,

    /// Selected row on the current page
    pub selected: usize,

    effects: Vec<Effect>,
}

impl ListStore {
    pub fn mount() -> Self {
        let (list, request) = EventList::mount();
        Self {
            list,
            date_input: String::new(),
            search_input: String::new(),
            selected: 0,
            effects: vec![Effect::Request(request)],
        }
    }

    pub fn selected_id(&self) -> Option<EventId> {
        self.list
            .page()
            .rows
            .get(self.selected)
            .map(|row| row.event.id)
    }

    pub fn handle(&mut self, action: &Action) {
        match action {
            Action::UpdateDateFilter(input) => {
                self.date_input.clone_from(input);
                let date = parse_date_input(input);
                if self.list.query().date != date {
                    self.list.set_date_filter(date);
                    self.selected = 0;
                }
            }
            Action::UpdateSearch(input) => self.search_input.clone_from(input),
            Action::SubmitSearch => {
                if self.list.submit_search(&self.search_input).is_ok() {
                    self.selected = 0;
                }
            }
            Action::ClearSearch => {
                self.search_input.clear();
                self.list.clear_search();
                self.selected = 0;
            }
            Action::SelectRow(index) => {
                let rows = self.list.page().rows.len();
                self.selected = (*index).min(rows.saturating_sub(1));
            }
            Action::SelectPage(number) => {
                if self.list.select_page(*number) {
                    self.selected = 0;
                }
            }
            Action::Reload => {
                if let Some(request) = self.list.reload() {
                    self.effects.push(Effect::Request(request));
                }
            }
            Action::AddEvent => self.effects.push(Effect::Navigate(Route::Add)),
            Action::EditSelected => {
                if let Some(id) = self.selected_id() {
                    self.list.request_edit(id);
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.selected_id()
                    && !self.list.is_deleting(id)
                {
                    self.list.request_delete(id);
                }
            }
            Action::Confirm => {
                if self.list.edit_dialog().is_open() {
                    if let Some(route) = self.list.confirm_edit() {
                        self.effects.push(Effect::Navigate(route));
                    }
                } else if let Some(request) = self.list.confirm_delete() {
                    self.effects.push(Effect::Request(request));
                }
            }
            Action::Cancel => {
                self.list.cancel_edit();
                self.list.cancel_delete();
            }
            Action::DismissNotice => self.list.dismiss_notice(),
            Action::UpdateField(..) | Action::RequestSubmit | Action::Back => {}
        }
    }

    fn clamp_selection(&mut self) {
        let rows = self.list.page().rows.len();
        self.selected = self.selected.min(rows.saturating_sub(1));
    }
}

impl Store for ListStore {
    fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().handle(action);
        }));
        dispatcher.register(callback);
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        let consumed = self.list.apply(outcome);
        self.clamp_selection();
        consumed
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        mem::take(&mut self.effects)
    }
}
