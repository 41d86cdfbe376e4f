use caliber_core::clock::Clock;
use caliber_core::error::CaliberError;
use caliber_core::models::review::ReviewId;
use caliber_db::KeyValueStore;

use crate::bindings::{Action, Bindings, EventPayload, FormFields, UiEvent};
use crate::form::{ReviewDraft, SubmissionForm};
use crate::rating_input::RatingInput;
use crate::render::render_list;
use crate::repository::ReviewRepository;
use crate::session::AdminSession;
use crate::ui::{ScrollBehavior, Ui};

pub const SUBMIT_SUCCESS: &str = "Thank you for your review!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this review?";
pub const LOGIN_SUCCESS: &str = "Admin mode activated!";
pub const LOGIN_FAILURE: &str = "Incorrect password";

/// One page instance of the review widget.
///
/// Every `dispatch` runs a single event callback to completion. Recoverable
/// errors (validation, wrong password) are shown through `Ui::alert` before
/// being returned.
pub struct ReviewWidget<S, C> {
    repository: ReviewRepository<S>,
    form: SubmissionForm<C>,
    rating: RatingInput,
    session: AdminSession,
    bindings: Bindings,
}

impl<S: KeyValueStore, C: Clock> ReviewWidget<S, C> {
    pub fn new(repository: ReviewRepository<S>, clock: C) -> Self {
        Self {
            repository,
            form: SubmissionForm::new(clock),
            rating: RatingInput::new(),
            session: AdminSession::new(),
            bindings: Bindings::default(),
        }
    }

    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn repository(&self) -> &ReviewRepository<S> {
        &self.repository
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn rating_input(&self) -> &RatingInput {
        &self.rating
    }

    /// Page-load sequence: reset the star picker, hide admin controls, render once.
    pub fn init(&mut self, ui: &mut impl Ui) -> Result<(), CaliberError> {
        self.rating.reset();
        ui.set_rating_value(0);
        ui.set_star_highlights(self.rating.highlights());
        ui.set_admin_panel_visible(self.session.panel_open());
        ui.set_admin_content_visible(self.session.is_admin());
        ui.set_login_prompt_visible(!self.session.is_admin());
        self.refresh(ui)
    }

    /// Re-render the list view from storage.
    pub fn refresh(&self, ui: &mut impl Ui) -> Result<(), CaliberError> {
        let reviews = self.repository.list()?;
        ui.set_list_markup(&render_list(&reviews, &self.session));
        Ok(())
    }

    pub fn dispatch(&mut self, event: UiEvent, ui: &mut impl Ui) -> Result<(), CaliberError> {
        let Some(action) = self.bindings.action_for(event.role, event.kind) else {
            tracing::debug!(role = %event.role, kind = ?event.kind, "unbound event");
            return Ok(());
        };

        match (action, event.payload) {
            (Action::CommitRating, EventPayload::Star(k)) => {
                if self.rating.activate(k) {
                    ui.set_rating_value(k);
                }
                ui.set_star_highlights(self.rating.highlights());
                Ok(())
            }
            (Action::PreviewRating, EventPayload::Star(k)) => {
                self.rating.pointer_enter(k);
                ui.set_star_highlights(self.rating.highlights());
                Ok(())
            }
            (Action::RevertPreview, _) => {
                self.rating.pointer_leave();
                ui.set_star_highlights(self.rating.highlights());
                Ok(())
            }
            (Action::SubmitReview, EventPayload::Form(fields)) => self.submit(fields, ui),
            (Action::DeleteReview, EventPayload::Review(id)) => self.delete(id, ui),
            (Action::ToggleAdminPanel, _) => {
                let visible = self.session.toggle_panel();
                ui.set_admin_panel_visible(visible);
                Ok(())
            }
            (Action::AttemptLogin, EventPayload::Password(password)) => self.login(&password, ui),
            (Action::LoginOnEnter, EventPayload::Key { key, password }) => {
                if key == "Enter" {
                    self.login(&password, ui)
                } else {
                    Ok(())
                }
            }
            (action, payload) => {
                tracing::debug!(?action, ?payload, "payload does not match action");
                Ok(())
            }
        }
    }

    fn submit(&mut self, fields: FormFields, ui: &mut impl Ui) -> Result<(), CaliberError> {
        let draft = ReviewDraft {
            name: fields.name,
            position: Some(fields.position),
            rating: self.rating.committed(),
            text: fields.text,
        };
        let review = match self.form.submit(&draft) {
            Ok(review) => review,
            Err(err) => {
                tracing::warn!(%err, "review submission rejected");
                ui.alert(&err.to_string());
                return Err(err.into());
            }
        };

        let persisted = match self.repository.add(review) {
            // Nothing was written; keep the user's draft on screen.
            Err(err @ CaliberError::CorruptStore { .. }) => return Err(err),
            other => other,
        };

        // The form resets even when the write failed; there is no rollback.
        self.rating.reset();
        ui.reset_form();
        ui.set_rating_value(0);
        ui.set_star_highlights(self.rating.highlights());
        persisted?;

        ui.alert(SUBMIT_SUCCESS);
        self.refresh(ui)?;
        ui.scroll_list_into_view(ScrollBehavior::Smooth);
        Ok(())
    }

    fn delete(&mut self, id: ReviewId, ui: &mut impl Ui) -> Result<(), CaliberError> {
        if !self.session.is_admin() {
            tracing::debug!(%id, "delete ignored outside admin mode");
            return Ok(());
        }
        if !ui.confirm(CONFIRM_DELETE) {
            return Ok(());
        }
        self.repository.remove_by_id(id)?;
        self.refresh(ui)
    }

    fn login(&mut self, password: &str, ui: &mut impl Ui) -> Result<(), CaliberError> {
        match self.session.attempt_login(password) {
            Ok(()) => {
                ui.set_admin_content_visible(true);
                ui.set_login_prompt_visible(false);
                self.refresh(ui)?;
                ui.alert(LOGIN_SUCCESS);
                Ok(())
            }
            Err(err) => {
                ui.alert(LOGIN_FAILURE);
                ui.clear_password_field();
                Err(err)
            }
        }
    }
}
