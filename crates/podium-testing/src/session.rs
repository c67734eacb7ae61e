//! Mock session helpers for integration tests.
//!
//! Gated routes read the signed `podium_session` cookie. In tests,
//! `MockSession` signs that cookie directly so no login round-trip is needed.

use axum_extra::extract::cookie::Cookie;

use podium_session::cookie::SESSION_COOKIE;
use podium_session::token::issue_session_token;

/// Secret shared by the test router and the cookies it is handed.
pub const TEST_SESSION_SECRET: &str = "podium-test-session-secret";

/// Identity carried into test requests.
pub struct MockSession {
    pub user_id: i32,
}

impl MockSession {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    /// Session cookie signed with [`TEST_SESSION_SECRET`].
    pub fn cookie(&self) -> Cookie<'static> {
        self.cookie_with_secret(TEST_SESSION_SECRET)
    }

    /// Session cookie signed with an arbitrary secret.
    pub fn cookie_with_secret(&self, secret: &str) -> Cookie<'static> {
        let (token, _) = issue_session_token(self.user_id, secret).unwrap();
        Cookie::new(SESSION_COOKIE, token)
    }
}
