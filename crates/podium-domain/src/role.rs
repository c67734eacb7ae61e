//! Role and visibility scope.

/// Access level attached to a user through `users.role_id`.
///
/// Wire format: the `roles.id` value (1 = Presenter, 2 = Administrator).
/// Role rows with any other id grant no access to the admin views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Presenter = 1,
    Administrator = 2,
}

impl Role {
    /// Convert from a `roles.id` value. Returns `None` for unknown ids.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Presenter),
            2 => Some(Self::Administrator),
            _ => None,
        }
    }

    /// Convert to the `roles.id` value.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Seeded `roles.name` value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Presenter => "presenter",
            Self::Administrator => "administrator",
        }
    }
}

/// Row filter applied to presentations and schedule entries before any
/// list or edit view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every row.
    All,
    /// Only rows linked to this user id through the author join table.
    AuthoredBy(i32),
}

impl Scope {
    /// Derive the scope for a logged-in user.
    ///
    /// Returns `None` when the user's role grants no access at all.
    pub fn for_user(user_id: i32, role_id: Option<i32>) -> Option<Self> {
        match role_id.and_then(Role::from_id)? {
            Role::Presenter => Some(Self::AuthoredBy(user_id)),
            Role::Administrator => Some(Self::All),
        }
    }
}
