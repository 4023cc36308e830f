// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use jiff::civil::Date;

use crate::dialog::ConfirmDialog;
use crate::query::{self, EventQuery, Page, SearchRejected, SearchTerm};
use crate::request::{Outcome, Request};
use crate::route::Route;
use crate::status::{LoadState, Notice};
use crate::{ApiError, Event, EventId};

/// Prompt of the edit confirmation.
pub const EDIT_PROMPT: &str = "Edit this event?";

/// Prompt of the delete confirmation.
pub const DELETE_PROMPT: &str = "Delete this event?";

/// State of the event list page.
///
/// The list fetches all events once when mounted and keeps them in a local
/// cache. Filters, ordering and pagination are computed from the cache on
/// demand. Deletes patch the cache in place instead of fetching again.
#[derive(Debug)]
pub struct EventList {
    events: Vec<Event>,
    load: LoadState,
    query: EventQuery,
    page: usize,
    edit_dialog: ConfirmDialog<EventId>,
    delete_dialog: ConfirmDialog<EventId>,
    deleting: HashSet<EventId>,
    notice: Option<Notice>,
}

impl EventList {
    /// Creates the list together with the request that fills it.
    pub fn mount() -> (Self, Request) {
        let list = Self {
            events: Vec::new(),
            load: LoadState::Loading,
            query: EventQuery::default(),
            page: 1,
            edit_dialog: ConfirmDialog::new(),
            delete_dialog: ConfirmDialog::new(),
            deleting: HashSet::new(),
            notice: None,
        };
        (list, Request::List)
    }

    /// Fetches the events again, `None` while a fetch is already pending.
    pub fn reload(&mut self) -> Option<Request> {
        if self.load.is_loading() {
            return None;
        }
        self.load = LoadState::Loading;
        Some(Request::List)
    }

    /// Applies the result of a list request.
    pub fn on_listed(&mut self, result: Result<Vec<Event>, ApiError>) {
        match result {
            Ok(events) => {
                tracing::debug!(count = events.len(), "events loaded");
                self.events = events;
                self.load = LoadState::Ready;
                self.clamp_page();
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load events");
                self.events.clear();
                self.page = 1;
                self.notice = Some(Notice::error(format!("Failed to load events. {err}")));
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// Progress of the list request.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// All cached events, unfiltered and in backend order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The active filters.
    pub fn query(&self) -> &EventQuery {
        &self.query
    }

    /// Sets or clears the date filter and goes back to the first page.
    pub fn set_date_filter(&mut self, date: Option<Date>) {
        self.query.date = date;
        self.page = 1;
    }

    /// Applies a name search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchRejected`] if the term is too short. The filter stays as
    /// it was and an error notice is raised.
    pub fn submit_search(&mut self, input: &str) -> Result<(), SearchRejected> {
        match SearchTerm::parse(input) {
            Ok(term) => {
                self.query.name = Some(term);
                self.page = 1;
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Removes the name filter and goes back to the first page.
    pub fn clear_search(&mut self) {
        self.query.name = None;
        self.page = 1;
    }

    /// The filtered events in chronological order.
    pub fn visible_events(&self) -> Vec<&Event> {
        let mut events = query::filter_events(&self.events, &self.query);
        query::sort_events(&mut events);
        events
    }

    /// The current page of [`EventList::visible_events`].
    pub fn page(&self) -> Page<'_> {
        query::paginate(&self.visible_events(), self.page)
    }

    /// Number of pages of visible events.
    pub fn page_count(&self) -> usize {
        query::page_count(self.visible_events().len())
    }

    /// The current page number, starting at 1.
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Jumps to page `number`, refused unless it exists.
    pub fn select_page(&mut self, number: usize) -> bool {
        if (1..=self.page_count()).contains(&number) {
            self.page = number;
            true
        } else {
            false
        }
    }

    /// Asks whether to edit the event.
    pub fn request_edit(&mut self, id: EventId) {
        self.edit_dialog.open(id);
    }

    /// The open edit confirmation.
    pub fn edit_dialog(&self) -> &ConfirmDialog<EventId> {
        &self.edit_dialog
    }

    /// Accepts the edit confirmation, yielding the page to go to.
    pub fn confirm_edit(&mut self) -> Option<Route> {
        self.edit_dialog.confirm_with(Route::Edit)
    }

    /// Closes the edit confirmation.
    pub fn cancel_edit(&mut self) {
        self.edit_dialog.cancel();
    }

    /// Asks whether to delete the event.
    pub fn request_delete(&mut self, id: EventId) {
        self.delete_dialog.open(id);
    }

    /// The open delete confirmation.
    pub fn delete_dialog(&self) -> &ConfirmDialog<EventId> {
        &self.delete_dialog
    }

    /// Accepts the delete confirmation, yielding the delete request.
    ///
    /// Nothing is sent while a delete for the same event is pending.
    pub fn confirm_delete(&mut self) -> Option<Request> {
        let id = self.delete_dialog.confirm_with(|id| id)?;
        if !self.deleting.insert(id) {
            tracing::debug!(%id, "delete already in flight");
            return None;
        }
        Some(Request::Delete(id))
    }

    /// Closes the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.delete_dialog.cancel();
    }

    /// Whether a delete for the event is pending.
    pub fn is_deleting(&self, id: EventId) -> bool {
        self.deleting.contains(&id)
    }

    /// Applies the result of a delete request.
    pub fn on_deleted(&mut self, id: EventId, result: Result<(), ApiError>) {
        self.deleting.remove(&id);
        match result {
            Ok(()) => {
                self.events.retain(|e| e.id != id);
                self.clamp_page();
                self.notice = Some(Notice::success("Event deleted :)"));
            }
            Err(err) => {
                tracing::warn!(%id, %err, "failed to delete event");
                self.notice = Some(Notice::error("Failed to delete the event."));
            }
        }
    }

    /// The message waiting for acknowledgment.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Acknowledges the pending message.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Feeds an outcome to the list. Returns whether it was consumed.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Listed(result) => self.on_listed(result),
            Outcome::Deleted(id, result) => self.on_deleted(id, result),
            Outcome::Loaded(..) | Outcome::Created(_) | Outcome::Updated(..) => return false,
        }
        true
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count().max(1));
    }
}
