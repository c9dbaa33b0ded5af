use dioxus::prelude::*;

use crate::model::user::{AuthResponseDto, Role, UserDto};

#[cfg(feature = "web")]
use crate::client::api::helper::{clear_token, store_token};

/// Logged in user shared through context. The token itself lives in `localStorage`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    /// Stores the token from a login or registration and marks the user as logged in.
    pub fn login(&mut self, response: AuthResponseDto) {
        #[cfg(feature = "web")]
        store_token(&response.token);

        self.inner.set(AuthState::Authenticated(response.user));
    }

    /// Replaces the cached user after a profile or company change.
    pub fn update_user(&mut self, user: UserDto) {
        self.inner.set(AuthState::Authenticated(user));
    }

    pub fn logout(&mut self) {
        #[cfg(feature = "web")]
        clear_token();

        self.inner.set(AuthState::NotLoggedIn);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq)]
pub enum AuthState {
    /// Stored token not checked yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_employer(&self) -> bool {
        self.user().is_some_and(|user| user.role == Role::Employer)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn company_id(&self) -> Option<i32> {
        self.user().and_then(|user| user.company_id)
    }
}
