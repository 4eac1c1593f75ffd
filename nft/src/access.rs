use crate::*;

// Capabilities of the administrative surface. The contract owner holds
// the Admin role, nobody else holds any role.
#[derive(Clone, Copy)]
pub enum Role {
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
        }
    }
}

impl Contract {
    pub fn has_role(&self, account_id: &AccountId, role: Role) -> bool {
        match role {
            Role::Admin => *account_id == self.owner_id,
        }
    }

    pub(crate) fn assert_role(&self, account_id: &AccountId, role: Role) {
        assert!(
            self.has_role(account_id, role),
            "Only accounts holding the {} role can do this",
            role.as_str()
        );
    }
}
