/// How the list view should be scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// The page surface the widget drives: form fields, the list container,
/// admin panels, and blocking prompts.
pub trait Ui {
    /// Blocking notice.
    fn alert(&mut self, message: &str);

    /// Blocking yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Highlight state for stars 1 through 5.
    fn set_star_highlights(&mut self, highlights: [bool; 5]);

    /// Value of the form's bound rating field.
    fn set_rating_value(&mut self, value: u8);

    /// Clear name, position and text fields.
    fn reset_form(&mut self);

    fn set_list_markup(&mut self, markup: &str);

    fn scroll_list_into_view(&mut self, behavior: ScrollBehavior);

    fn set_admin_panel_visible(&mut self, visible: bool);

    fn set_admin_content_visible(&mut self, visible: bool);

    fn set_login_prompt_visible(&mut self, visible: bool);

    fn clear_password_field(&mut self);
}
