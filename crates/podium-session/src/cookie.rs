//! Cookie builders for the session and flash cookies.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::SESSION_TTL_SECS;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "podium_session";

/// Cookie name for the one-shot flash message.
pub const FLASH_COOKIE: &str = "podium_flash";

/// Flash messages survive one redirect; anything older is stale.
const FLASH_MAX_AGE_SECS: i64 = 60;

/// Deployment-specific cookie attributes.
#[derive(Debug, Clone, Default)]
pub struct CookieSettings {
    /// `Domain` attribute; host-only cookie when `None`.
    pub domain: Option<String>,
    /// `Secure` attribute; enable behind TLS.
    pub secure: bool,
}

fn build(
    name: &'static str,
    value: String,
    max_age: Duration,
    settings: &CookieSettings,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path("/")
        .max_age(max_age)
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::Lax);
    if let Some(domain) = &settings.domain {
        builder = builder.domain(domain.clone());
    }
    builder.build()
}

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use podium_session::cookie::{CookieSettings, SESSION_COOKIE, set_session_cookie};
///
/// let jar = set_session_cookie(CookieJar::new(), "token".to_owned(), &CookieSettings::default());
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, token: String, settings: &CookieSettings) -> CookieJar {
    jar.add(build(
        SESSION_COOKIE,
        token,
        Duration::seconds(SESSION_TTL_SECS as i64),
        settings,
    ))
}

/// Read the raw session token, if present.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

/// Clear the session cookie by setting Max-Age to 0.
pub fn clear_session_cookie(jar: CookieJar, settings: &CookieSettings) -> CookieJar {
    jar.add(build(SESSION_COOKIE, String::new(), Duration::ZERO, settings))
}

/// Queue a flash message for the next rendered page.
pub fn set_flash(
    jar: CookieJar,
    message: impl Into<String>,
    settings: &CookieSettings,
) -> CookieJar {
    jar.add(build(
        FLASH_COOKIE,
        message.into(),
        Duration::seconds(FLASH_MAX_AGE_SECS),
        settings,
    ))
}

/// Consume the pending flash message, clearing its cookie.
pub fn take_flash(jar: CookieJar, settings: &CookieSettings) -> (CookieJar, Option<String>) {
    let message = jar
        .get(FLASH_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty());
    match message {
        Some(message) => (
            jar.add(build(FLASH_COOKIE, String::new(), Duration::ZERO, settings)),
            Some(message),
        ),
        None => (jar, None),
    }
}
