// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use eventdesk_core::{Field, Outcome, Request, Route};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

/// Fans user actions out to the stores of the current page.
pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: &Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // list page
    UpdateDateFilter(String),
    UpdateSearch(String),
    SubmitSearch,
    ClearSearch,
    SelectRow(usize),
    SelectPage(usize),
    Reload,
    AddEvent,
    EditSelected,
    DeleteSelected,

    // form page
    UpdateField(Field, String),
    RequestSubmit,
    Back,

    // dialogs
    Confirm,
    Cancel,
    DismissNotice,
}

/// Work a store asks the app loop to do on its behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    Navigate(Route),
}

/// State behind one page of the TUI.
pub trait Store {
    /// Subscribes the store to the actions of its page.
    fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher)
    where
        Self: Sized;

    /// Feeds the outcome of a request back. Returns whether it was consumed.
    fn apply(&mut self, outcome: Outcome) -> bool;

    /// Drains the effects queued since the last call.
    fn take_effects(&mut self) -> Vec<Effect>;
}
