use std::collections::HashMap;

use caliber_core::models::review::ReviewId;

/// Role of the element an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Star,
    StarContainer,
    ReviewForm,
    DeleteButton,
    AdminToggle,
    AdminLogin,
    AdminPassword,
}

impl ElementRole {
    /// Value of the `data-role` attribute carrying this role in markup.
    pub fn data_role(&self) -> &'static str {
        match self {
            ElementRole::Star => "star",
            ElementRole::StarContainer => "star-rating",
            ElementRole::ReviewForm => "review-form",
            ElementRole::DeleteButton => "delete-review",
            ElementRole::AdminToggle => "admin-toggle",
            ElementRole::AdminLogin => "admin-login",
            ElementRole::AdminPassword => "admin-password",
        }
    }
}

impl std::fmt::Display for ElementRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data_role())
    }
}

impl std::str::FromStr for ElementRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "star" => Ok(ElementRole::Star),
            "star-rating" => Ok(ElementRole::StarContainer),
            "review-form" => Ok(ElementRole::ReviewForm),
            "delete-review" => Ok(ElementRole::DeleteButton),
            "admin-toggle" => Ok(ElementRole::AdminToggle),
            "admin-login" => Ok(ElementRole::AdminLogin),
            "admin-password" => Ok(ElementRole::AdminPassword),
            _ => Err(format!("unknown element role: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
    Submit,
    KeyPress,
}

/// What the widget does in response to a bound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CommitRating,
    PreviewRating,
    RevertPreview,
    SubmitReview,
    DeleteReview,
    ToggleAdminPanel,
    AttemptLogin,
    LoginOnEnter,
}

/// Text fields of the review form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub position: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    None,
    /// `data-rating` of the star control.
    Star(u8),
    Form(FormFields),
    /// `data-review-id` of the card's delete button.
    Review(ReviewId),
    Password(String),
    Key { key: String, password: String },
}

/// One host event, delivered to `ReviewWidget::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub role: ElementRole,
    pub kind: EventKind,
    pub payload: EventPayload,
}

impl UiEvent {
    pub fn new(role: ElementRole, kind: EventKind, payload: EventPayload) -> Self {
        Self {
            role,
            kind,
            payload,
        }
    }

    pub fn click_star(k: u8) -> Self {
        Self::new(ElementRole::Star, EventKind::Click, EventPayload::Star(k))
    }

    pub fn hover_star(k: u8) -> Self {
        Self::new(ElementRole::Star, EventKind::PointerEnter, EventPayload::Star(k))
    }

    pub fn leave_stars() -> Self {
        Self::new(
            ElementRole::StarContainer,
            EventKind::PointerLeave,
            EventPayload::None,
        )
    }

    pub fn submit(fields: FormFields) -> Self {
        Self::new(
            ElementRole::ReviewForm,
            EventKind::Submit,
            EventPayload::Form(fields),
        )
    }

    pub fn delete(id: ReviewId) -> Self {
        Self::new(
            ElementRole::DeleteButton,
            EventKind::Click,
            EventPayload::Review(id),
        )
    }

    pub fn toggle_admin() -> Self {
        Self::new(ElementRole::AdminToggle, EventKind::Click, EventPayload::None)
    }

    pub fn login(password: impl Into<String>) -> Self {
        Self::new(
            ElementRole::AdminLogin,
            EventKind::Click,
            EventPayload::Password(password.into()),
        )
    }

    pub fn password_key(key: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(
            ElementRole::AdminPassword,
            EventKind::KeyPress,
            EventPayload::Key {
                key: key.into(),
                password: password.into(),
            },
        )
    }
}

/// Event-to-action table keyed by element role and event kind.
#[derive(Debug, Clone)]
pub struct Bindings {
    table: HashMap<(ElementRole, EventKind), Action>,
}

impl Bindings {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn bind(&mut self, role: ElementRole, kind: EventKind, action: Action) -> &mut Self {
        self.table.insert((role, kind), action);
        self
    }

    pub fn unbind(&mut self, role: ElementRole, kind: EventKind) -> Option<Action> {
        self.table.remove(&(role, kind))
    }

    pub fn action_for(&self, role: ElementRole, kind: EventKind) -> Option<Action> {
        self.table.get(&(role, kind)).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(ElementRole::Star, EventKind::Click, Action::CommitRating)
            .bind(ElementRole::Star, EventKind::PointerEnter, Action::PreviewRating)
            .bind(
                ElementRole::StarContainer,
                EventKind::PointerLeave,
                Action::RevertPreview,
            )
            .bind(ElementRole::ReviewForm, EventKind::Submit, Action::SubmitReview)
            .bind(ElementRole::DeleteButton, EventKind::Click, Action::DeleteReview)
            .bind(ElementRole::AdminToggle, EventKind::Click, Action::ToggleAdminPanel)
            .bind(ElementRole::AdminLogin, EventKind::Click, Action::AttemptLogin)
            .bind(
                ElementRole::AdminPassword,
                EventKind::KeyPress,
                Action::LoginOnEnter,
            );
        bindings
    }
}
