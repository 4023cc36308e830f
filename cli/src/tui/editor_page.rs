// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use eventdesk_core::{Field, LoadState};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::tui::component::{Component, Message};
use crate::tui::component_dialog::Modal;
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::editor_store::EditorStore;

const HINTS: &[(&str, &str)] = &[
    ("Next", "Tab"),
    ("Prev", "Shift-Tab"),
    ("Submit", "Enter"),
    ("Back", "Esc"),
];

pub type EditorPage = SinglePage<EditorStore, EditorView>;

pub fn new_editor_page(store: &RefCell<EditorStore>) -> EditorPage {
    let title = store.borrow().editor.title();
    SinglePage::new(title, HINTS, EditorView::new())
}

/// The event form with its status line and dialogs.
pub struct EditorView {
    form: Form<EditorStore, Box<dyn FormItem<EditorStore>>>,
}

impl EditorView {
    fn new() -> Self {
        let items: Vec<Box<dyn FormItem<EditorStore>>> = vec![
            Box::new(new_name()),
            Box::new(new_date()),
            Box::new(new_time()),
            Box::new(new_location()),
            Box::new(new_description()),
        ];
        Self {
            form: Form::new(items),
        }
    }

    fn layout(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area)
    }
}

impl Component<EditorStore> for EditorView {
    fn render(&self, store: &RefCell<EditorStore>, area: Rect, buf: &mut Buffer) {
        let [form, status] = Self::layout(area);
        self.form.render(store, form, buf);

        let s = store.borrow();
        status_line(&s).render(status, buf);
        if let Some(modal) = editor_modal(&s) {
            modal.render(area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<EditorStore>, area: Rect) -> Option<(u16, u16)> {
        if editor_modal(&store.borrow()).is_some() {
            return None;
        }
        let [form, _] = Self::layout(area);
        self.form.get_cursor_position(store, form)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EditorStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let modal = editor_modal(&store.borrow());
        if let Some(modal) = modal {
            return Some(modal.on_key(dispatcher, event));
        }

        if event.code == KeyCode::Esc {
            dispatcher.dispatch(&Action::Back);
            return Some(Message::Handled);
        }

        let [form, _] = Self::layout(area);
        self.form.on_key(dispatcher, store, form, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EditorStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EditorStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

fn status_line(store: &EditorStore) -> Line<'static> {
    let editor = &store.editor;
    match editor.load_state() {
        LoadState::Loading => Line::from("Loading event...".dark_gray()),
        LoadState::Failed(_) => Line::from("Failed to load event, press Esc to go back".red()),
        LoadState::Ready if editor.is_saving() => Line::from("Saving...".yellow()),
        LoadState::Ready => Line::from("Press Enter to submit".dark_gray()),
    }
}

fn editor_modal(store: &EditorStore) -> Option<Modal> {
    let editor = &store.editor;
    if let Some(ack) = editor.ack() {
        return Some(Modal::Notice(ack.clone()));
    }
    if editor.submit_dialog().is_open() {
        return Some(Modal::Confirm {
            title: editor.title(),
            body: editor.submit_prompt().to_string(),
            yes: "Yes",
        });
    }
    None
}

macro_rules! new_input {
    ($fn: ident, $acc: ident, $field: expr, $placeholder: expr) => {
        fn $fn() -> Input<EditorStore, $acc> {
            Input::new($field.label())
        }

        struct $acc;

        impl Access<EditorStore> for $acc {
            fn get(store: &RefCell<EditorStore>) -> String {
                store.borrow().editor.field($field).to_string()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) {
                dispatcher.dispatch(&Action::UpdateField($field, value));
            }

            fn accepts(c: char) -> bool {
                $field.accepts(c)
            }

            fn max_len() -> Option<usize> {
                $field.max_len()
            }

            fn placeholder() -> Option<&'static str> {
                $placeholder
            }
        }
    };
}

new_input!(new_name, NameAccess, Field::Name, None);
new_input!(new_date, DateAccess, Field::Date, Some("YYYY-MM-DD"));
new_input!(new_time, TimeAccess, Field::Time, Some("HH:MM"));
new_input!(new_location, LocationAccess, Field::Location, None);
new_input!(new_description, DescriptionAccess, Field::Description, None);
