// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::dialog::ConfirmDialog;
use crate::request::{Outcome, Request};
use crate::route::Route;
use crate::status::{LoadState, Notice, NoticeLevel};
use crate::{ApiError, Event, EventFields, EventId};

/// Whether the form creates a new event or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start from an empty draft and create the event on submit.
    Create,

    /// Load the event first and replace it on submit.
    Edit(EventId),
}

/// A field of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The event name.
    Name,

    /// The date, `YYYY-MM-DD`.
    Date,

    /// The time, `HH:MM`.
    Time,

    /// Where the event takes place.
    Location,

    /// Free text.
    Description,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Date,
        Field::Time,
        Field::Location,
        Field::Description,
    ];

    /// Label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Location => "Location",
            Field::Description => "Description",
        }
    }

    /// Whether the input for this field accepts the character.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Field::Date => c.is_ascii_digit() || c == '-',
            Field::Time => c.is_ascii_digit() || c == ':',
            Field::Description => c == '\n' || !c.is_control(),
            Field::Name | Field::Location => !c.is_control(),
        }
    }

    /// Maximum number of characters the input holds.
    pub const fn max_len(self) -> Option<usize> {
        match self {
            Field::Date => Some(10),
            Field::Time => Some(5),
            Field::Name | Field::Location | Field::Description => None,
        }
    }

    fn slot(self, draft: &mut EventFields) -> &mut String {
        match self {
            Field::Name => &mut draft.name,
            Field::Date => &mut draft.date,
            Field::Time => &mut draft.time,
            Field::Location => &mut draft.location,
            Field::Description => &mut draft.description,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of the event form page.
#[derive(Debug)]
pub struct EventEditor {
    mode: Mode,
    draft: EventFields,
    load: LoadState,
    submit_dialog: ConfirmDialog<()>,
    saving: bool,
    ack: Option<Notice>,
}

impl EventEditor {
    /// An empty form that creates a new event.
    pub fn create() -> Self {
        Self {
            mode: Mode::Create,
            draft: EventFields::default(),
            load: LoadState::Ready,
            submit_dialog: ConfirmDialog::new(),
            saving: false,
            ack: None,
        }
    }

    /// A form for an existing event, together with the request that loads it.
    pub fn edit(id: EventId) -> (Self, Request) {
        let editor = Self {
            mode: Mode::Edit(id),
            load: LoadState::Loading,
            ..Self::create()
        };
        (editor, Request::Get(id))
    }

    /// The form for a route, `None` for routes that are not a form.
    pub fn from_route(route: Route) -> Option<(Self, Option<Request>)> {
        match route {
            Route::Add => Some((Self::create(), None)),
            Route::Edit(id) => {
                let (editor, request) = Self::edit(id);
                Some((editor, Some(request)))
            }
            Route::List => None,
        }
    }

    /// The mode of the form.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self.mode {
            Mode::Create => "Add event",
            Mode::Edit(_) => "Edit event",
        }
    }

    /// Progress of loading the edited event.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Applies the result of loading the edited event.
    pub fn on_loaded(&mut self, id: EventId, result: Result<Event, ApiError>) {
        if self.mode != Mode::Edit(id) {
            tracing::debug!(%id, "ignoring event loaded for another form");
            return;
        }

        match result {
            Ok(event) => {
                self.draft = event.fields();
                self.load = LoadState::Ready;
            }
            Err(err) => {
                tracing::warn!(%id, %err, "failed to load event");
                let text = if err.is_not_found() {
                    "This event no longer exists.".to_string()
                } else {
                    format!("Failed to load the event. {err}")
                };
                self.ack = Some(Notice::error(text));
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    /// The draft as edited so far.
    pub fn draft(&self) -> &EventFields {
        &self.draft
    }

    /// Current value of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Date => &self.draft.date,
            Field::Time => &self.draft.time,
            Field::Location => &self.draft.location,
            Field::Description => &self.draft.description,
        }
    }

    /// Replaces a field of the draft. Ignored until the event is loaded.
    pub fn set_field(&mut self, field: Field, value: String) {
        if !self.load.is_ready() {
            return;
        }
        *field.slot(&mut self.draft) = value;
    }

    /// Whether the form may be submitted now.
    pub fn can_submit(&self) -> bool {
        self.load.is_ready() && !self.saving
    }

    /// Whether a save request is pending.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Question asked before submitting.
    pub fn submit_prompt(&self) -> &'static str {
        match self.mode {
            Mode::Create => "Add this new event?",
            Mode::Edit(_) => "Save changes to this event?",
        }
    }

    /// Opens the submit confirmation. Returns whether it opened.
    pub fn request_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.submit_dialog.open(());
        true
    }

    /// The submit confirmation.
    pub fn submit_dialog(&self) -> &ConfirmDialog<()> {
        &self.submit_dialog
    }

    /// Accepts the submit confirmation, yielding the save request.
    pub fn confirm_submit(&mut self) -> Option<Request> {
        self.submit_dialog.confirm_with(|()| ())?;
        if !self.can_submit() {
            return None;
        }

        self.saving = true;
        let draft = self.draft.clone();
        Some(match self.mode {
            Mode::Create => Request::Create(draft),
            Mode::Edit(id) => Request::Update(id, draft),
        })
    }

    /// Closes the submit confirmation.
    pub fn cancel_submit(&mut self) {
        self.submit_dialog.cancel();
    }

    /// Applies the result of a save request.
    pub fn on_saved(&mut self, result: Result<(), ApiError>) {
        self.saving = false;
        let ack = match (self.mode, result) {
            (Mode::Create, Ok(())) => Notice::success("New event added :)"),
            (Mode::Edit(_), Ok(())) => Notice::success("Event updated successfully :)"),
            (Mode::Create, Err(err)) => {
                tracing::warn!(%err, "failed to create event");
                Notice::error("Failed to add the new event.")
            }
            (Mode::Edit(id), Err(err)) => {
                tracing::warn!(%id, %err, "failed to update event");
                Notice::error("Failed to update the event.")
            }
        };
        self.ack = Some(ack);
    }

    /// Applies the result of a create request.
    pub fn on_created(&mut self, result: Result<Event, ApiError>) {
        if let Ok(event) = &result {
            tracing::debug!(id = %event.id, "event created");
        }
        self.on_saved(result.map(|_| ()));
    }

    /// Applies the result of an update request.
    pub fn on_updated(&mut self, id: EventId, result: Result<(), ApiError>) {
        if self.mode != Mode::Edit(id) {
            tracing::debug!(%id, "ignoring update for another form");
            return;
        }
        self.on_saved(result);
    }

    /// The message waiting for acknowledgment.
    pub fn ack(&self) -> Option<&Notice> {
        self.ack.as_ref()
    }

    /// Acknowledges the pending message.
    ///
    /// After a successful save this yields the list page.
    pub fn dismiss_ack(&mut self) -> Option<Route> {
        let ack = self.ack.take()?;
        (ack.level == NoticeLevel::Success).then_some(Route::List)
    }

    /// Leaves the form, dropping the draft.
    pub fn back(&mut self) -> Route {
        self.submit_dialog.cancel();
        Route::List
    }

    /// Feeds an outcome to the form. Returns whether it was consumed.
    pub fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Loaded(id, result) => self.on_loaded(id, result),
            Outcome::Created(result) if self.mode == Mode::Create => self.on_created(result),
            Outcome::Updated(id, result) => self.on_updated(id, result),
            Outcome::Created(_) | Outcome::Listed(_) | Outcome::Deleted(..) => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(id: u64) -> EventEditor {
        let (mut editor, _) = EventEditor::edit(EventId::new(id));
        editor.on_loaded(
            EventId::new(id),
            Ok(Event {
                id: EventId::new(id),
                name: "Standup".to_string(),
                date: "2024-05-01".to_string(),
                time: "09:30".to_string(),
                ..Default::default()
            }),
        );
        editor
    }

    #[test]
    fn date_and_time_inputs_accept_widget_characters() {
        assert!(Field::Date.accepts('2'));
        assert!(Field::Date.accepts('-'));
        assert!(!Field::Date.accepts('/'));
        assert!(Field::Time.accepts(':'));
        assert!(!Field::Time.accepts('a'));
        assert!(Field::Name.accepts('a'));
        assert!(!Field::Name.accepts('\n'));
        assert_eq!(Field::Date.max_len(), Some(10));
        assert_eq!(Field::Time.max_len(), Some(5));
    }

    #[test]
    fn description_keeps_line_breaks() {
        assert!(Field::Description.accepts('\n'));
        assert!(!Field::Description.accepts('\t'));
        assert!(!Field::Location.accepts('\n'));

        let mut editor = loaded(4);
        editor.set_field(Field::Description, "Agenda:\n- demo".to_string());
        assert_eq!(editor.field(Field::Description), "Agenda:\n- demo");
    }

    #[test]
    fn create_starts_empty_and_ready() {
        let editor = EventEditor::create();
        assert_eq!(editor.mode(), Mode::Create);
        assert_eq!(editor.draft(), &EventFields::default());
        assert!(editor.can_submit());
        assert_eq!(editor.submit_prompt(), "Add this new event?");
    }

    #[test]
    fn from_route_picks_mode() {
        let (_, request) = EventEditor::from_route(Route::Add).unwrap();
        assert_eq!(request, None);

        let (editor, request) = EventEditor::from_route(Route::Edit(EventId::new(5))).unwrap();
        assert_eq!(editor.mode(), Mode::Edit(EventId::new(5)));
        assert_eq!(request, Some(Request::Get(EventId::new(5))));

        assert!(EventEditor::from_route(Route::List).is_none());
    }

    #[test]
    fn edit_prefills_after_load() {
        let (mut editor, request) = EventEditor::edit(EventId::new(2));
        assert_eq!(request, Request::Get(EventId::new(2)));
        assert!(!editor.can_submit());
        assert!(!editor.request_submit());

        editor.set_field(Field::Name, "ignored".to_string());
        assert_eq!(editor.field(Field::Name), "");

        editor = loaded(2);
        assert_eq!(editor.field(Field::Name), "Standup");
        assert_eq!(editor.field(Field::Time), "09:30");
        assert_eq!(editor.submit_prompt(), "Save changes to this event?");
    }

    #[test]
    fn stale_load_is_ignored() {
        let (mut editor, _) = EventEditor::edit(EventId::new(2));
        editor.on_loaded(EventId::new(3), Ok(Event::default()));
        assert!(editor.load_state().is_loading());
    }

    #[test]
    fn failed_load_blocks_submit() {
        let (mut editor, _) = EventEditor::edit(EventId::new(9));
        editor.on_loaded(EventId::new(9), Err(ApiError::NotFound(EventId::new(9))));

        assert!(matches!(editor.load_state(), LoadState::Failed(_)));
        assert!(!editor.request_submit());
        assert_eq!(editor.ack().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(
            editor.ack().map(|n| n.text.as_str()),
            Some("This event no longer exists.")
        );
        assert_eq!(editor.dismiss_ack(), None);
    }

    #[test]
    fn failed_load_over_network_shows_cause() {
        let (mut editor, _) = EventEditor::edit(EventId::new(9));
        editor.on_loaded(
            EventId::new(9),
            Err(ApiError::Network("500 Internal Server Error".to_string())),
        );

        let text = editor.ack().map(|n| n.text.clone()).unwrap_or_default();
        assert!(text.starts_with("Failed to load the event."));
        assert!(text.contains("500"));
    }

    #[test]
    fn submit_requires_confirmation() {
        let mut editor = EventEditor::create();
        editor.set_field(Field::Name, "Party".to_string());

        assert_eq!(editor.confirm_submit(), None);

        assert!(editor.request_submit());
        editor.cancel_submit();
        assert_eq!(editor.confirm_submit(), None);
        assert!(!editor.is_saving());

        assert!(editor.request_submit());
        let request = editor.confirm_submit().unwrap();
        let Request::Create(fields) = request else {
            panic!("expected a create request, got {request:?}");
        };
        assert_eq!(fields.name, "Party");
        assert!(editor.is_saving());
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut editor = loaded(4);
        assert!(editor.request_submit());
        assert!(editor.confirm_submit().is_some());

        assert!(!editor.request_submit());
        assert_eq!(editor.confirm_submit(), None);
    }

    #[test]
    fn successful_update_returns_to_list() {
        let mut editor = loaded(4);
        editor.set_field(Field::Location, "Room 1".to_string());
        editor.request_submit();
        assert_eq!(
            editor.confirm_submit(),
            Some(Request::Update(
                EventId::new(4),
                EventFields {
                    name: "Standup".to_string(),
                    date: "2024-05-01".to_string(),
                    time: "09:30".to_string(),
                    location: "Room 1".to_string(),
                    description: String::new(),
                }
            ))
        );

        assert!(editor.apply(Outcome::Updated(EventId::new(4), Ok(()))));
        assert_eq!(
            editor.ack().map(|n| n.text.as_str()),
            Some("Event updated successfully :)")
        );
        assert_eq!(editor.dismiss_ack(), Some(Route::List));
    }

    #[test]
    fn failed_create_keeps_draft() {
        let mut editor = EventEditor::create();
        editor.set_field(Field::Description, "bring snacks".to_string());
        editor.request_submit();
        editor.confirm_submit();

        editor.on_created(Err(ApiError::Network("503".to_string())));
        assert_eq!(
            editor.ack().map(|n| n.text.as_str()),
            Some("Failed to add the new event.")
        );
        assert_eq!(editor.dismiss_ack(), None);
        assert_eq!(editor.field(Field::Description), "bring snacks");
        assert!(editor.can_submit());
    }

    #[test]
    fn successful_create_acknowledges() {
        let mut editor = EventEditor::create();
        editor.request_submit();
        editor.confirm_submit();
        assert!(editor.apply(Outcome::Created(Ok(Event::default()))));
        assert_eq!(editor.ack().map(|n| n.text.as_str()), Some("New event added :)"));
        assert_eq!(editor.dismiss_ack(), Some(Route::List));
    }

    #[test]
    fn back_always_goes_to_list() {
        let mut editor = loaded(1);
        editor.request_submit();
        assert_eq!(editor.back(), Route::List);
        assert!(!editor.submit_dialog().is_open());
    }

    #[test]
    fn apply_ignores_list_outcomes() {
        let mut editor = EventEditor::create();
        assert!(!editor.apply(Outcome::Listed(Ok(Vec::new()))));
        assert!(!editor.apply(Outcome::Deleted(EventId::new(1), Ok(()))));
    }
}
