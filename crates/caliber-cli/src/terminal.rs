use caliber_widget::{ScrollBehavior, Ui};
use console::{style, Term};

/// Terminal stand-in for the page: prompts go to stderr, markup is captured.
pub struct TerminalUi {
    term: Term,
    assume_yes: bool,
    markup: String,
}

impl TerminalUi {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            term: Term::stderr(),
            assume_yes,
            markup: String::new(),
        }
    }

    /// Markup from the most recent list render.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Ui for TerminalUi {
    fn alert(&mut self, message: &str) {
        let _ = self.term.write_line(&style(message).bold().to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if self.term.write_str(&format!("{message} [y/N] ")).is_err() {
            return false;
        }
        match self.term.read_line() {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn set_star_highlights(&mut self, highlights: [bool; 5]) {
        tracing::trace!(?highlights, "star highlights");
    }

    fn set_rating_value(&mut self, value: u8) {
        tracing::trace!(value, "rating value");
    }

    fn reset_form(&mut self) {}

    fn set_list_markup(&mut self, markup: &str) {
        self.markup = markup.to_string();
    }

    fn scroll_list_into_view(&mut self, _behavior: ScrollBehavior) {}

    fn set_admin_panel_visible(&mut self, _visible: bool) {}

    fn set_admin_content_visible(&mut self, _visible: bool) {}

    fn set_login_prompt_visible(&mut self, _visible: bool) {}

    fn clear_password_field(&mut self) {}
}

/// Read the admin password without echoing it.
pub fn prompt_password() -> anyhow::Result<String> {
    let term = Term::stderr();
    term.write_str("Admin password: ")?;
    Ok(term.read_secure_line()?)
}
