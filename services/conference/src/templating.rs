//! Server-side HTML rendering with handlebars.
//!
//! Templates are compiled into the binary and registered once. Every page
//! wraps its own data in [`Page`], which carries what the shared layout
//! needs.

use axum::http::StatusCode;
use axum::response::Html;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::types::User;
use crate::error::ConferenceError;

const PARTIALS: &[(&str, &str)] = &[("layout", include_str!("../templates/layout.hbs"))];

const TEMPLATES: &[(&str, &str)] = &[
    ("index", include_str!("../templates/index.hbs")),
    ("login", include_str!("../templates/login.hbs")),
    ("register", include_str!("../templates/register.hbs")),
    ("main", include_str!("../templates/main.hbs")),
    ("presenter", include_str!("../templates/presenter.hbs")),
    ("error", include_str!("../templates/error.hbs")),
    ("admin/index", include_str!("../templates/admin/index.hbs")),
    (
        "admin/presentations",
        include_str!("../templates/admin/presentations.hbs"),
    ),
    (
        "admin/presentation_form",
        include_str!("../templates/admin/presentation_form.hbs"),
    ),
    ("admin/schedule", include_str!("../templates/admin/schedule.hbs")),
    (
        "admin/schedule_form",
        include_str!("../templates/admin/schedule_form.hbs"),
    ),
    ("admin/rooms", include_str!("../templates/admin/rooms.hbs")),
    ("admin/room_form", include_str!("../templates/admin/room_form.hbs")),
    ("admin/users", include_str!("../templates/admin/users.hbs")),
    ("admin/user_form", include_str!("../templates/admin/user_form.hbs")),
    ("admin/authors", include_str!("../templates/admin/authors.hbs")),
    (
        "admin/author_form",
        include_str!("../templates/admin/author_form.hbs"),
    ),
    ("admin/roles", include_str!("../templates/admin/roles.hbs")),
];

static HANDLEBARS: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut handlebars = Handlebars::new();
    for (name, source) in PARTIALS {
        if let Err(e) = handlebars.register_partial(name, *source) {
            tracing::error!(template = name, error = %e, "invalid partial");
        }
    }
    for (name, source) in TEMPLATES {
        if let Err(e) = handlebars.register_template_string(name, *source) {
            tracing::error!(template = name, error = %e, "invalid template");
        }
    }
    handlebars
});

/// The logged-in user as the layout shows it.
#[derive(Debug, Serialize)]
pub struct Viewer {
    pub name: String,
    pub is_admin: bool,
    /// Whether the admin area is reachable at all.
    pub has_admin_access: bool,
}

impl From<&User> for Viewer {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            is_admin: user.is_admin(),
            has_admin_access: user.scope().is_some(),
        }
    }
}

/// Template context: layout fields plus the page's own data, flattened.
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    pub title: &'a str,
    pub viewer: Option<Viewer>,
    pub flash: Option<String>,
    pub error: Option<String>,
    #[serde(flatten)]
    pub inner: T,
}

impl<'a, T: Serialize> Page<'a, T> {
    pub fn new(title: &'a str, inner: T) -> Self {
        Self {
            title,
            viewer: None,
            flash: None,
            error: None,
            inner,
        }
    }

    pub fn viewer(mut self, user: Option<&User>) -> Self {
        self.viewer = user.map(Viewer::from);
        self
    }

    pub fn flash(mut self, flash: Option<String>) -> Self {
        self.flash = flash;
        self
    }

    pub fn error(mut self, error: Option<&ConferenceError>) -> Self {
        self.error = error.map(ToString::to_string);
        self
    }
}

/// Page data for templates that only need the layout fields.
#[derive(Debug, Default, Serialize)]
pub struct Blank {}

pub fn render<T: Serialize>(
    template: &str,
    page: &Page<'_, T>,
) -> Result<Html<String>, ConferenceError> {
    HANDLEBARS
        .render(template, page)
        .map(Html)
        .map_err(|e| ConferenceError::Internal(anyhow::anyhow!("render {template}: {e}")))
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    message: &'a str,
}

/// Body of an error response. Falls back to plain text if the template fails.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let page = Page::new(
        title,
        ErrorBody {
            status: status.as_u16(),
            message,
        },
    );
    HANDLEBARS.render("error", &page).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to render error page");
        format!("{} {}: {}", status.as_u16(), title, message)
    })
}
