//! Signed-in user storage.

use skillstack_core::User;
use std::sync::RwLock;

/// Holds the signed-in user between requests.
///
/// The client clears it whenever the backend rejects the session, which is
/// the signal for the front end to route to the login page.
pub trait SessionStore: Send + Sync {
    /// Current user, if signed in.
    fn user(&self) -> Option<User>;

    /// Record a successful login.
    fn set_user(&self, user: User);

    /// Forget the user.
    fn clear(&self);

    /// Whether a user is signed in.
    fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }
}

/// In-process session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user: RwLock<Option<User>>,
}

impl MemorySessionStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn user(&self) -> Option<User> {
        self.user.read().map(|u| (*u).clone()).unwrap_or_default()
    }

    fn set_user(&self, user: User) {
        if let Ok(mut slot) = self.user.write() {
            *slot = Some(user);
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.user.write() {
            *slot = None;
        }
    }
}
