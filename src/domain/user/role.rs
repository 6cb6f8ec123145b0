//! Role allow-list

use std::str::FromStr;

use serde::Serialize;

use super::validation::UserValidationError;

/// Roles accepted by the sign-up endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_CLIENT")]
    Client,
}

impl Role {
    /// Every role on the allow-list
    pub const ALL: [Role; 2] = [Role::Admin, Role::Client];

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Client => "ROLE_CLIENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UserValidationError::InvalidRole(s.to_string()))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::Admin.as_str(), "ROLE_ADMIN");
        assert_eq!(Role::Client.as_str(), "ROLE_CLIENT");
        assert_eq!(
            serde_json::to_string(&Role::Client).unwrap(),
            "\"ROLE_CLIENT\""
        );
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("ROLE_ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(
            "INVALID_ROLE".parse::<Role>(),
            Err(UserValidationError::InvalidRole("INVALID_ROLE".to_string()))
        );
    }

    #[test]
    fn test_role_from_str_is_case_sensitive() {
        assert!("role_admin".parse::<Role>().is_err());
    }
}
