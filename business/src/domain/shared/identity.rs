use serde::{Deserialize, Serialize};

use super::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// The authenticated caller of a use case.
///
/// Built by the presentation layer from a verified bearer token and passed
/// explicitly to every operation that needs to know who is asking.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: UserId,
    pub roles: Vec<Role>,
}

impl Identity {
    pub fn new(user_id: UserId, roles: Vec<Role>) -> Self {
        Self { user_id, roles }
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }

    /// Owners and admins may read a user-scoped resource.
    pub fn can_access(&self, owner: &UserId) -> bool {
        self.user_id == *owner || self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_grant_access_to_owner() {
        let owner = UserId::generate();
        let identity = Identity::new(owner, vec![Role::User]);

        assert!(identity.can_access(&owner));
        assert!(!identity.is_admin());
    }

    #[test]
    fn should_deny_access_to_other_customer() {
        let identity = Identity::new(UserId::generate(), vec![Role::User]);

        assert!(!identity.can_access(&UserId::generate()));
    }

    #[test]
    fn should_grant_access_to_admin_for_any_owner() {
        let identity = Identity::new(UserId::generate(), vec![Role::Admin, Role::User]);

        assert!(identity.is_admin());
        assert!(identity.can_access(&UserId::generate()));
    }

    #[test]
    fn should_round_trip_role_names() {
        for role in [Role::User, Role::Admin] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("ROLE_ROOT".parse::<Role>().is_err());
    }
}
