//! Session-token glue.
//!
//! The reader core only ever asks "is a session present". Producing the
//! token (credential login or a Telegram Mini-App handshake) and verifying
//! it belong entirely to the host.

/// Read-only view of the login state.
pub trait SessionAuth {
    /// Current opaque session token, if any.
    fn session_token(&self) -> Option<&str>;

    fn is_authenticated(&self) -> bool {
        self.session_token().is_some()
    }
}

/// In-memory token holder for a completed login.
#[derive(Clone, Debug, Default)]
pub struct TokenAuth {
    token: Option<String>,
}

impl TokenAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the opaque token produced by a login flow.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the session on logout.
    pub fn clear(&mut self) {
        self.token = None;
    }
}

impl SessionAuth for TokenAuth {
    fn session_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_drives_auth_state() {
        let mut auth = TokenAuth::new();
        assert!(!auth.is_authenticated());

        auth.set_token("tg-session-abc");
        assert!(auth.is_authenticated());
        assert_eq!(auth.session_token(), Some("tg-session-abc"));

        auth.clear();
        assert!(!auth.is_authenticated());
    }
}
