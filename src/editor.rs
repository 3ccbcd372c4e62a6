use crate::api::SettingsStore;
use crate::availability::{
    add_timeslot_template, validate_timeslot_template, AvailabilitySettings, DayHours, DayOfWeek,
    TemplateValidation, TimeslotTemplate,
};
use tracing::{info, warn};

/// Lifecycle of the availability settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Read-only display of the current weekly schedule
    Viewing,
    /// Inputs open for business hours and the driving-time buffer
    Editing,
    /// Async persist in flight
    Saving,
}

/// Independent lifecycle of the timeslot-template modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateModalState {
    Closed,
    Open,
}

/// Outcome of submitting the template form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSubmit {
    /// Validation failed; the modal stays open with inline errors
    Invalid(TemplateValidation),
    /// Template appended and the document persisted; the modal closed
    Saved,
    /// Validation passed but the persist failed; the modal stays open
    SaveFailed(String),
}

/// Controller for one settings-page instance.
///
/// Owns exactly one mutable copy of the settings document. All mutation is
/// synchronous between the async load/save boundaries; there is no
/// cancellation of in-flight calls and no conflict detection, so the last
/// save wins across concurrent editors.
pub struct SettingsEditor<S: SettingsStore> {
    store: S,
    user_id: String,
    state: EditorState,
    modal: TemplateModalState,
    /// Working copy the UI binds to
    current: AvailabilitySettings,
    /// Snapshot restored on cancel, refreshed on load and successful save
    saved: AvailabilitySettings,
    notice: Option<String>,
}

impl<S: SettingsStore> SettingsEditor<S> {
    pub fn new(store: S, user_id: impl Into<String>) -> Self {
        let defaults = AvailabilitySettings::default();
        Self {
            store,
            user_id: user_id.into(),
            state: EditorState::Viewing,
            modal: TemplateModalState::Closed,
            current: defaults.clone(),
            saved: defaults,
            notice: None,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The underlying store, mainly for callers that also edit worker
    /// availability through the same connection
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn modal_state(&self) -> TemplateModalState {
        self.modal
    }

    pub fn settings(&self) -> &AvailabilitySettings {
        &self.current
    }

    /// The current user-visible warning or error, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Load the settings document, falling back to full defaults with a
    /// categorized notice when the load fails. Load failures are never fatal.
    pub async fn load(&mut self) {
        match self.store.fetch_settings(&self.user_id).await {
            Ok(settings) => {
                info!("Loaded availability settings for user {}", self.user_id);
                self.current = settings.clone();
                self.saved = settings;
                self.notice = None;
            }
            Err(e) => {
                warn!(
                    "Falling back to default availability settings for user {}: {}",
                    self.user_id, e
                );
                self.current = AvailabilitySettings::default();
                self.saved = self.current.clone();
                self.notice = Some(e.user_message());
            }
        }
        self.state = EditorState::Viewing;
    }

    /// Open the business-hours inputs
    pub fn begin_edit(&mut self) {
        if self.state == EditorState::Viewing {
            self.state = EditorState::Editing;
        }
    }

    /// Discard in-memory changes and return to viewing; no reload is forced
    pub fn cancel_edit(&mut self) {
        if self.state == EditorState::Editing {
            self.current = self.saved.clone();
            self.state = EditorState::Viewing;
            self.notice = None;
        }
    }

    /// Update one day's hours; applies only while editing
    pub fn set_day_hours(&mut self, day: DayOfWeek, hours: DayHours) {
        if self.state == EditorState::Editing {
            self.current.business_hours.set_day(day, hours);
        }
    }

    /// Update the global driving-time buffer; applies only while editing
    pub fn set_driving_time(&mut self, minutes: u32) {
        if self.state == EditorState::Editing {
            self.current.driving_time = minutes;
        }
    }

    /// Persist the whole document. On success the editor returns to viewing;
    /// on failure it returns to editing with the edits retained so the user
    /// can retry without re-entering data.
    pub async fn save(&mut self) {
        if self.state != EditorState::Editing {
            return;
        }
        self.state = EditorState::Saving;

        match self.store.save_settings(&self.user_id, &self.current).await {
            Ok(()) => {
                info!("Saved availability settings for user {}", self.user_id);
                self.saved = self.current.clone();
                self.state = EditorState::Viewing;
                self.notice = None;
            }
            Err(e) => {
                warn!(
                    "Failed to save availability settings for user {}: {}",
                    self.user_id, e
                );
                self.state = EditorState::Editing;
                self.notice = Some(e.user_message());
            }
        }
    }

    pub fn open_template_modal(&mut self) {
        self.modal = TemplateModalState::Open;
    }

    pub fn close_template_modal(&mut self) {
        self.modal = TemplateModalState::Closed;
    }

    /// Submit the template form: validate, append, persist the whole
    /// document. The modal closes only after a successful validation and
    /// save; a failed save keeps the catalog unchanged.
    pub async fn submit_template(&mut self, candidate: TimeslotTemplate) -> TemplateSubmit {
        let validation = validate_timeslot_template(&candidate);
        if !validation.is_valid() {
            return TemplateSubmit::Invalid(validation);
        }

        let mut updated = self.current.clone();
        updated.templates = add_timeslot_template(updated.templates, candidate);

        match self.store.save_settings(&self.user_id, &updated).await {
            Ok(()) => {
                self.current = updated.clone();
                self.saved = updated;
                self.modal = TemplateModalState::Closed;
                TemplateSubmit::Saved
            }
            Err(e) => {
                warn!(
                    "Failed to save timeslot template for user {}: {}",
                    self.user_id, e
                );
                let message = e.user_message();
                self.notice = Some(message.clone());
                TemplateSubmit::SaveFailed(message)
            }
        }
    }
}
