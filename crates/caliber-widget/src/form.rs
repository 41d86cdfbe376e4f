use caliber_core::clock::{format_display_date, Clock};
use caliber_core::error::ValidationError;
use caliber_core::models::rating::Rating;
use caliber_core::models::review::{Review, ReviewId};

/// Strip leading and trailing whitespace the way browser form values are
/// trimmed: the byte-order mark counts as whitespace, NEL does not.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Raw form field values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub position: Option<String>,
    /// Committed rating; `0` when no star was picked.
    pub rating: u8,
    pub text: String,
}

/// Validates drafts and turns them into reviews stamped by the clock.
pub struct SubmissionForm<C> {
    clock: C,
}

impl<C: Clock> SubmissionForm<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Check required fields and build the review. Nothing is persisted here.
    pub fn submit(&self, draft: &ReviewDraft) -> Result<Review, ValidationError> {
        let name = trim_field(&draft.name);
        let text = trim_field(&draft.text);
        if name.is_empty() || text.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let rating = Rating::new(draft.rating).ok_or(ValidationError::MissingRating)?;
        let position = draft.position.as_deref().map(trim_field).unwrap_or_default();

        Ok(Review {
            id: ReviewId::from_millis(self.clock.now_millis()),
            name: name.to_string(),
            position: position.to_string(),
            rating,
            text: text.to_string(),
            date: format_display_date(self.clock.today()),
        })
    }
}
