// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, sync::Arc};

use eventdesk_core::{EventBackend, Outcome, Request, Route, execute};
use futures::StreamExt;
use ratatui::crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use ratatui::prelude::*;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Dispatcher, Effect, Store};
use crate::tui::editor_page::new_editor_page;
use crate::tui::editor_store::EditorStore;
use crate::tui::list_page::new_list_page;
use crate::tui::list_store::ListStore;

/// Opens the TUI on `route` and runs it until the user quits.
pub async fn open(backend: Arc<dyn EventBackend>, route: Route) -> Result<(), Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, backend, route).await;
    ratatui::restore();
    result
}

async fn run(
    terminal: &mut DefaultTerminal,
    backend: Arc<dyn EventBackend>,
    route: Route,
) -> Result<(), Box<dyn Error>> {
    let (mut app, mut rx) = App::new(backend, route);
    let mut events = EventStream::new();

    loop {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            app.screen.draw(frame);
        })?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if is_interrupt(key) || app.screen.on_key(area, key) == Some(Message::Exit) {
                        break;
                    }
                }
                Some(Ok(_)) => {} // resize and friends only need a redraw
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some((generation, outcome)) = rx.recv() => app.deliver(generation, outcome),
        }
        app.flush_effects();
    }

    tracing::info!("closing tui");
    Ok(())
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// The mounted page and the plumbing that runs its requests.
struct App {
    backend: Arc<dyn EventBackend>,
    tx: UnboundedSender<(u64, Outcome)>,

    /// Bumped on every navigation, outcomes tagged with an older value are dropped
    generation: u64,

    screen: Box<dyn Screen>,
}

impl App {
    fn new(
        backend: Arc<dyn EventBackend>,
        route: Route,
    ) -> (Self, UnboundedReceiver<(u64, Outcome)>) {
        let (tx, rx) = unbounded_channel();
        tracing::info!(%route, "opening page");
        let mut app = Self {
            backend,
            tx,
            generation: 0,
            screen: mount(route),
        };
        app.flush_effects();
        (app, rx)
    }

    fn deliver(&mut self, generation: u64, outcome: Outcome) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale outcome");
            return;
        }
        if !self.screen.apply(outcome) {
            tracing::debug!("outcome ignored by page");
        }
    }

    fn flush_effects(&mut self) {
        loop {
            let effects = self.screen.take_effects();
            if effects.is_empty() {
                return;
            }

            for effect in effects {
                match effect {
                    Effect::Request(request) => self.spawn(request),
                    Effect::Navigate(route) => {
                        tracing::info!(%route, "navigating");
                        self.generation += 1;
                        self.screen = mount(route);
                        break; // the rest belonged to the page we just left
                    }
                }
            }
        }
    }

    fn spawn(&self, request: Request) {
        let backend = self.backend.clone();
        let tx = self.tx.clone();
        let generation = self.generation;
        tokio::spawn(async move {
            let outcome = execute(backend.as_ref(), request).await;
            // the receiver is gone once the TUI has closed
            let _ = tx.send((generation, outcome));
        });
    }
}

/// A page with its store, type-erased so the app can switch between them.
trait Screen {
    fn draw(&self, frame: &mut Frame);

    fn on_key(&mut self, area: Rect, event: KeyEvent) -> Option<Message>;

    fn apply(&mut self, outcome: Outcome) -> bool;

    fn take_effects(&mut self) -> Vec<Effect>;
}

struct Mounted<S: Store, C: Component<S>> {
    store: Rc<RefCell<S>>,
    page: C,
    dispatcher: Dispatcher,
}

impl<S: Store + 'static, C: Component<S>> Mounted<S, C> {
    fn new(store: S, new_page: impl FnOnce(&RefCell<S>) -> C) -> Self {
        let store = Rc::new(RefCell::new(store));
        let mut dispatcher = Dispatcher::new();
        S::register_to(store.clone(), &mut dispatcher);

        let mut page = new_page(store.as_ref());
        page.activate(&mut dispatcher, &store);
        Self {
            store,
            page,
            dispatcher,
        }
    }
}

impl<S: Store, C: Component<S>> Screen for Mounted<S, C> {
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        self.page.render(&self.store, area, frame.buffer_mut());
        if let Some(position) = self.page.get_cursor_position(&self.store, area) {
            frame.set_cursor_position(position);
        }
    }

    fn on_key(&mut self, area: Rect, event: KeyEvent) -> Option<Message> {
        self.page
            .on_key(&mut self.dispatcher, &self.store, area, event)
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        self.store.borrow_mut().apply(outcome)
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        self.store.borrow_mut().take_effects()
    }
}

fn mount(route: Route) -> Box<dyn Screen> {
    match EditorStore::from_route(route) {
        Some(store) => Box::new(Mounted::new(store, new_editor_page)),
        None => Box::new(Mounted::new(ListStore::mount(), |_| new_list_page())),
    }
}
