// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, mem, rc::Rc};

use eventdesk_core::{EventEditor, Outcome, Route};

use crate::tui::dispatcher::{Action, Dispatcher, Effect, Store};

#[derive(Debug)]
pub struct EditorStore {
    pub editor: EventEditor,
    effects: Vec<Effect>,
}

impl EditorStore {
    /// The form for `route`, `None` unless it is a form page.
    pub fn from_route(route: Route) -> Option<Self> {
        let (editor, request) = EventEditor::from_route(route)?;
        Some(Self {
            editor,
            effects: request.map(Effect::Request).into_iter().collect(),
        })
    }

    pub fn handle(&mut self, action: &Action) {
        match action {
            Action::UpdateField(field, value) => self.editor.set_field(*field, value.clone()),
            Action::RequestSubmit => {
                if !self.editor.request_submit() {
                    tracing::debug!("form not ready for submit");
                }
            }
            Action::Confirm => {
                if let Some(request) = self.editor.confirm_submit() {
                    self.effects.push(Effect::Request(request));
                }
            }
            Action::Cancel => self.editor.cancel_submit(),
            Action::DismissNotice => {
                if let Some(route) = self.editor.dismiss_ack() {
                    self.effects.push(Effect::Navigate(route));
                }
            }
            Action::Back => {
                let route = self.editor.back();
                self.effects.push(Effect::Navigate(route));
            }
            _ => {}
        }
    }
}

impl Store for EditorStore {
    fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().handle(action);
        }));
        dispatcher.register(callback);
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        self.editor.apply(outcome)
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        mem::take(&mut self.effects)
    }
}
