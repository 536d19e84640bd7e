//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{SessionError, SessionUser};

use crate::session::{make_session, AppSession};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the stored record has been read once.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// What a route guard should do with the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    pub fn resolved(user: Option<SessionUser>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// State after a logout attempt. A failed removal keeps the user signed
    /// in, since the record would be read back on the next load.
    pub fn after_logout(&self, outcome: &Result<(), SessionError>) -> Self {
        match outcome {
            Ok(()) => Self::resolved(None),
            Err(_) => self.clone(),
        }
    }

    pub fn guard(&self) -> GuardState {
        match (self.loading, &self.user) {
            (true, _) => GuardState::Loading,
            (false, Some(_)) => GuardState::Authenticated,
            (false, None) => GuardState::Unauthenticated,
        }
    }
}

/// Session actions that keep the stored record and [`AuthState`] in step.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: Signal<AppSession>,
    state: Signal<AuthState>,
}

impl SessionHandle {
    pub fn login(mut self, email: &str, password: &str) -> Result<SessionUser, SessionError> {
        let user = self.session.peek().login(email, password)?;
        self.state.set(AuthState::resolved(Some(user.clone())));
        Ok(user)
    }

    pub fn register(mut self, name: &str, email: &str, password: &str) -> Result<SessionUser, SessionError> {
        let user = self.session.peek().register(name, email, password)?;
        self.state.set(AuthState::resolved(Some(user.clone())));
        Ok(user)
    }

    pub fn logout(mut self) -> Result<(), SessionError> {
        let outcome = self.session.peek().logout();
        let next = self.state.peek().after_logout(&outcome);
        self.state.set(next);
        outcome
    }
}

/// Message shown under an auth form. Only missing fields are worth spelling
/// out; backend failures get the generic `fallback`.
pub fn form_error(err: &SessionError, fallback: &str) -> String {
    match err {
        SessionError::MissingField(_) => err.to_string(),
        _ => fallback.to_string(),
    }
}

/// Checks the registration form makes before touching the session: the
/// password confirmation first, then the terms checkbox.
pub fn validate_registration(password: &str, confirm: &str, agreed: bool) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match");
    }
    if !agreed {
        return Err("Please accept the Terms of Service");
    }
    Ok(())
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the login/register/logout actions.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session store.
/// Wrap your router with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(make_session);
    let mut auth_state = use_signal(AuthState::default);

    // Read the stored record once, on mount
    use_effect(move || {
        let user = session.peek().current();
        tracing::debug!("Restored session: {}", user.is_some());
        auth_state.set(AuthState::resolved(user));
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| SessionHandle {
        session,
        state: auth_state,
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_states() {
        assert_eq!(AuthState::default().guard(), GuardState::Loading);
        assert_eq!(AuthState::resolved(None).guard(), GuardState::Unauthenticated);

        let user = SessionUser::demo("farmer@example.com");
        assert_eq!(AuthState::resolved(Some(user)).guard(), GuardState::Authenticated);
    }

    #[test]
    fn test_form_error() {
        let missing = SessionError::MissingField("Email");
        assert_eq!(form_error(&missing, "Failed to log in"), "Email is required");

        let storage = SessionError::Storage("quota exceeded".to_string());
        assert_eq!(form_error(&storage, "Failed to log in"), "Failed to log in");
    }

    #[test]
    fn test_failed_logout_keeps_user() {
        let signed_in = AuthState::resolved(Some(SessionUser::demo("farmer@example.com")));

        let failed = signed_in.after_logout(&Err(SessionError::Storage("read-only".to_string())));
        assert_eq!(failed, signed_in);
        assert_eq!(failed.guard(), GuardState::Authenticated);

        let cleared = signed_in.after_logout(&Ok(()));
        assert_eq!(cleared.guard(), GuardState::Unauthenticated);
    }

    #[test]
    fn test_registration_checks_confirmation_before_terms() {
        assert_eq!(validate_registration("pw", "other", false), Err("Passwords do not match"));
        assert_eq!(validate_registration("pw", "other", true), Err("Passwords do not match"));
        assert_eq!(
            validate_registration("pw", "pw", false),
            Err("Please accept the Terms of Service")
        );
        assert_eq!(validate_registration("pw", "pw", true), Ok(()));
    }

    #[test]
    fn test_rejected_registration_writes_nothing() {
        let store = store::MemoryStore::new();
        let session = store::Session::new(store.clone());

        // The form only reaches the session once the checks pass
        for (password, confirm, agreed) in [("pw", "other", true), ("pw", "pw", false)] {
            if validate_registration(password, confirm, agreed).is_ok() {
                session.register("Asha", "asha@example.com", password).unwrap();
            }
        }
        assert!(store.is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_loading_wins_over_user() {
        let state = AuthState {
            user: Some(SessionUser::registered("Asha", "asha@example.com")),
            loading: true,
        };
        assert_eq!(state.guard(), GuardState::Loading);
    }
}
