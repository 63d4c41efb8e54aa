//! User records: the data the table widget manages.

use serde::{Deserialize, Serialize};

/// Access role attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
    User,
}

impl Role {
    /// All roles, in the order the role selector cycles through them.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Editor, Role::Viewer, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Viewer => "Viewer",
            Role::User => "User",
        }
    }

    /// The next role in selector order, wrapping.
    pub fn next(&self) -> Role {
        let index = Role::ALL.iter().position(|r| r == self).unwrap_or(0);
        Role::ALL[(index + 1) % Role::ALL.len()]
    }

    /// The previous role in selector order, wrapping.
    pub fn prev(&self) -> Role {
        let index = Role::ALL.iter().position(|r| r == self).unwrap_or(0);
        Role::ALL[(index + Role::ALL.len() - 1) % Role::ALL.len()]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user row. Identity is `id`; everything else is editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

impl UserRecord {
    pub fn new(id: u32, name: &str, email: &str, role: Role, active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            active,
        }
    }
}

/// The fixed seed list the simulated load produces.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "John Doe", "john@example.com", Role::Admin, true),
        UserRecord::new(2, "Jane Smith", "jane@example.com", Role::User, true),
        UserRecord::new(3, "Bob Johnson", "bob@example.com", Role::User, false),
        UserRecord::new(4, "Alice Brown", "alice@example.com", Role::Editor, true),
        UserRecord::new(5, "Charlie Wilson", "charlie@example.com", Role::Viewer, false),
    ]
}

// =============================================================================
// Tests
// =============================================================================
