//! Star-rated review widget: collect testimonials, persist them in an
//! origin-scoped key-value store, render them, and gate deletion behind an
//! admin session.

pub mod bindings;
pub mod form;
pub mod rating_input;
pub mod render;
pub mod repository;
pub mod session;
pub mod storage;
pub mod ui;
pub mod widget;

pub use bindings::{Action, Bindings, ElementRole, EventKind, EventPayload, FormFields, UiEvent};
pub use form::{ReviewDraft, SubmissionForm};
pub use rating_input::RatingInput;
pub use repository::ReviewRepository;
pub use session::AdminSession;
pub use storage::ReviewStorage;
pub use ui::{ScrollBehavior, Ui};
pub use widget::ReviewWidget;
