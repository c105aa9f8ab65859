use serde::{Deserialize, Serialize};

use crate::navigation::{RoleGated, visible_entries};
use crate::{Role, TokenStore};

/// An in-page action the console may offer.
///
/// A role lacking a capability simply does not get the control; nothing is
/// raised. The backend still checks every request on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CreateIndication,
    ChangeIndicationStatus,
    ChangeCommissionStatus,
    MarkCommissionPaid,
    ManageUsers,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::CreateIndication,
        Capability::ChangeIndicationStatus,
        Capability::ChangeCommissionStatus,
        Capability::MarkCommissionPaid,
        Capability::ManageUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::CreateIndication => "create_indication",
            Capability::ChangeIndicationStatus => "change_indication_status",
            Capability::ChangeCommissionStatus => "change_commission_status",
            Capability::MarkCommissionPaid => "mark_commission_paid",
            Capability::ManageUsers => "manage_users",
        }
    }
}

impl RoleGated for Capability {
    fn permitted_roles(&self) -> &[Role] {
        match self {
            Capability::CreateIndication => &[Role::Admin, Role::Ambassador],
            Capability::ChangeIndicationStatus
            | Capability::ChangeCommissionStatus
            | Capability::MarkCommissionPaid
            | Capability::ManageUsers => &[Role::Admin],
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities granted to `role`, in declaration order.
pub fn allowed_capabilities(role: Option<Role>) -> Vec<Capability> {
    visible_entries(&Capability::ALL, role)
        .into_iter()
        .copied()
        .collect()
}

/// Whether the signed-in user may be offered `capability`.
pub fn can(store: &TokenStore, capability: Capability) -> bool {
    store.role().is_some_and(|role| capability.permits(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambassadors_can_only_create_indications() {
        assert_eq!(
            allowed_capabilities(Some(Role::Ambassador)),
            vec![Capability::CreateIndication]
        );
    }

    #[test]
    fn admins_get_every_capability() {
        assert_eq!(
            allowed_capabilities(Some(Role::Admin)),
            Capability::ALL.to_vec()
        );
    }

    #[test]
    fn anonymous_gets_nothing() {
        assert!(allowed_capabilities(None).is_empty());
        assert!(!can(&TokenStore::in_memory(), Capability::CreateIndication));
    }
}
