use caliber_core::error::CaliberError;

/// Shared admin password. It ships with every client, so it is a UI
/// convenience gate only and must be changed before real use.
pub const SHARED_SECRET: &str = "admin123";

/// Admin state for one page session. Once logged in it stays logged in.
///
/// Nothing here authorizes storage writes; it only decides which controls are shown.
#[derive(Debug, Default, Clone)]
pub struct AdminSession {
    logged_in: bool,
    panel_open: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.logged_in
    }

    pub fn attempt_login(&mut self, password: &str) -> Result<(), CaliberError> {
        if password == SHARED_SECRET {
            self.logged_in = true;
            tracing::info!("admin mode activated");
            Ok(())
        } else {
            tracing::warn!("admin login rejected");
            Err(CaliberError::AuthFailed)
        }
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Show or hide the admin panel. Returns the new visibility.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_secret() {
        let mut session = AdminSession::new();
        assert!(!session.is_admin());
        session.attempt_login(SHARED_SECRET).unwrap();
        assert!(session.is_admin());
    }

    #[test]
    fn test_wrong_password_stays_logged_out() {
        let mut session = AdminSession::new();
        assert!(matches!(
            session.attempt_login("hunter2"),
            Err(CaliberError::AuthFailed)
        ));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_wrong_password_after_login_keeps_session() {
        let mut session = AdminSession::new();
        session.attempt_login(SHARED_SECRET).unwrap();
        let _ = session.attempt_login("nope");
        assert!(session.is_admin());
    }

    #[test]
    fn test_toggle_panel() {
        let mut session = AdminSession::new();
        assert!(session.toggle_panel());
        assert!(!session.toggle_panel());
    }
}
