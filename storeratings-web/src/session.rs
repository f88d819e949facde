//! Session state shared across the application.
//!
//! The token and the profile it belongs to travel as one value, so a
//! token-without-user state is unrepresentable. Writes go through
//! [`establish`] and [`clear`], which keep durable storage and the API
//! client's bearer header in sync with the published state.

use crate::api::StoreRatingsClient;
use gloo_storage::{LocalStorage, Storage};
use shared::models::{User, UserRole};
use yewdux::{Dispatch, Store};

const TOKEN_STORAGE_KEY: &str = "token";
const USER_STORAGE_KEY: &str = "user";

/// An authenticated session: the bearer token and the profile it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token issued by login or signup.
    pub token: String,
    /// Profile of the signed-in user.
    pub user: User,
}

/// The session store injected into components through yewdux.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    /// The current session, or `None` when signed out.
    pub session: Option<Session>,
}

impl SessionState {
    /// Rebuild the session from durable storage at startup.
    ///
    /// The token is stored as a raw string and the profile as JSON, under
    /// independent keys. If either entry is absent or corrupt the app starts
    /// signed out; no error is surfaced.
    #[must_use]
    pub fn restore() -> Self {
        let token = LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten();
        let user: Option<User> = LocalStorage::get(USER_STORAGE_KEY).ok();
        let session = match (token, user) {
            (Some(token), Some(user)) if !token.is_empty() => Some(Session { token, user }),
            _ => None,
        };
        Self { session }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// The signed-in user's role, if any.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.session.as_ref().map(|session| session.user.role)
    }
}

/// Persist `session`, install its token on the shared API client, and
/// publish the new state. Requests constructed after this call carry the
/// new bearer header.
pub fn establish(dispatch: &Dispatch<SessionState>, session: Session) {
    let _ = LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, &session.token);
    let _ = LocalStorage::set(USER_STORAGE_KEY, &session.user);
    StoreRatingsClient::shared().set_bearer_token(Some(session.token.clone()));
    dispatch.set(SessionState {
        session: Some(session),
    });
}

/// Remove the session from storage and the API client, then publish the
/// signed-out state. Token and user are always cleared together.
pub fn clear(dispatch: &Dispatch<SessionState>) {
    let _ = LocalStorage::raw().remove_item(TOKEN_STORAGE_KEY);
    LocalStorage::delete(USER_STORAGE_KEY);
    StoreRatingsClient::shared().set_bearer_token(None);
    dispatch.set(SessionState::default());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_user() -> User {
        User {
            id: 5,
            name: "Noor Haddad".to_string(),
            email: "noor@example.com".to_string(),
            address: None,
            role: UserRole::User,
        }
    }

    #[wasm_bindgen_test]
    fn restore_roundtrips_token_and_user() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionState>::new(&cx);
        establish(
            &dispatch,
            Session {
                token: "tok-123".to_string(),
                user: sample_user(),
            },
        );

        // Simulated restart: rebuild purely from storage.
        let restored = SessionState::restore();
        let session = restored.session.expect("session should survive restart");
        assert_eq!(session.token, "tok-123");
        assert_eq!(session.user.email, "noor@example.com");

        clear(&dispatch);
    }

    #[wasm_bindgen_test]
    fn clear_removes_storage_and_header() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<SessionState>::new(&cx);
        establish(
            &dispatch,
            Session {
                token: "tok-456".to_string(),
                user: sample_user(),
            },
        );

        clear(&dispatch);
        assert!(SessionState::restore().session.is_none());
        assert!(StoreRatingsClient::shared().current_bearer_token().is_none());
    }

    #[wasm_bindgen_test]
    fn corrupt_user_entry_yields_empty_session() {
        let _ = LocalStorage::raw().set_item("token", "tok-789");
        let _ = LocalStorage::raw().set_item("user", "{not json");
        assert!(SessionState::restore().session.is_none());
        let _ = LocalStorage::raw().remove_item("token");
        let _ = LocalStorage::raw().remove_item("user");
    }
}
