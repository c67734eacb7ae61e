use chrono::NaiveDateTime;

use podium_domain::role::{Role, Scope};

/// An account. `password_hash` is an Argon2id PHC string.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub password_hash: String,
    pub role_id: Option<i32>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        self.role_id.and_then(Role::from_id)
    }

    /// Row filter for the admin views; `None` when the role grants nothing.
    pub fn scope(&self) -> Option<Scope> {
        Scope::for_user(self.id, self.role_id)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Administrator)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
    pub role_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub name: Option<String>,
}

impl Room {
    /// Display label: the name, or `Room #<id>` when unnamed.
    pub fn label(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("Room #{}", self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub id: i32,
    pub name: String,
    pub text: Option<String>,
}

/// Editable presentation fields.
#[derive(Debug, Clone)]
pub struct PresentationDraft {
    pub name: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub id: i32,
    pub date_start: NaiveDateTime,
    pub presentation_id: i32,
    pub room_id: i32,
}

/// A presentation placed in a room at a start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub date_start: NaiveDateTime,
    pub presentation_id: i32,
    pub room_id: i32,
}

/// Schedule entry joined with what listings display.
#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub entry: ScheduleEntry,
    pub presentation_name: String,
    pub room: Room,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorLink {
    pub presentation_id: i32,
    pub user_id: i32,
}

/// Author link joined with the user and presentation names.
#[derive(Debug, Clone)]
pub struct AuthorRow {
    pub link: AuthorLink,
    pub presentation_name: String,
    pub user_name: String,
}
