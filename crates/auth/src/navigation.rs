//! Role-based navigation filter.

use crate::{Role, TokenStore};

/// Anything whose visibility depends on the viewer's role.
pub trait RoleGated {
    fn permitted_roles(&self) -> &[Role];

    fn permits(&self, role: Role) -> bool {
        self.permitted_roles().contains(&role)
    }
}

/// A sidebar entry and the roles allowed to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub roles: &'static [Role],
}

impl RoleGated for NavEntry {
    fn permitted_roles(&self) -> &[Role] {
        self.roles
    }
}

const EVERYONE: &[Role] = &[Role::Admin, Role::Ambassador];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// The console's sidebar, in display order.
pub const MENU: &[NavEntry] = &[
    NavEntry {
        path: "/dashboard",
        label: "Dashboard",
        roles: EVERYONE,
    },
    NavEntry {
        path: "/indications",
        label: "Indications",
        roles: EVERYONE,
    },
    NavEntry {
        path: "/commissions",
        label: "Commissions",
        roles: EVERYONE,
    },
    NavEntry {
        path: "/commission-installments",
        label: "Installments",
        roles: EVERYONE,
    },
    NavEntry {
        path: "/users",
        label: "Users",
        roles: ADMIN_ONLY,
    },
];

/// Entries visible to `role`, in their original order.
///
/// No role (nobody signed in) yields an empty list rather than an error.
pub fn visible_entries<T: RoleGated>(entries: &[T], role: Option<Role>) -> Vec<&T> {
    let Some(role) = role else {
        return Vec::new();
    };
    entries.iter().filter(|e| e.permits(role)).collect()
}

/// The sidebar for whoever is currently signed in.
pub fn visible_menu(store: &TokenStore) -> Vec<&'static NavEntry> {
    visible_entries(MENU, store.role())
}
