//! Role-based access checks on verified claims

use crate::errors::{AuthError, DomainResult};

/// How the listed roles must be held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    Any,
    All,
}

/// Role requirement for a protected operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequirement {
    roles: Vec<String>,
    mode: Match,
}

impl RoleRequirement {
    /// Satisfied when at least one role is held; an empty list admits everyone
    pub fn any_of<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            mode: Match::Any,
        }
    }

    /// Satisfied only when every listed role is held
    pub fn all_of<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            mode: Match::All,
        }
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn is_satisfied_by(&self, held: &[String]) -> bool {
        let holds = |role: &String| held.iter().any(|h| h == role);
        match self.mode {
            Match::Any => self.roles.is_empty() || self.roles.iter().any(holds),
            Match::All => self.roles.iter().all(holds),
        }
    }

    /// Role names compare exactly, case included
    pub fn check(&self, held: &[String]) -> DomainResult<()> {
        if self.is_satisfied_by(held) {
            Ok(())
        } else {
            Err(AuthError::InsufficientPermissions.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    fn held(roles: &[&str]) -> Vec<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn test_any_of() {
        let requirement = RoleRequirement::any_of(["ADMIN", "AUDITOR"]);

        assert!(requirement.check(&held(&["USER", "AUDITOR"])).is_ok());
        assert!(requirement.check(&held(&["ADMIN"])).is_ok());
        assert!(matches!(
            requirement.check(&held(&["USER"])),
            Err(DomainError::Auth(AuthError::InsufficientPermissions))
        ));
        assert!(requirement.check(&[]).is_err());
    }

    #[test]
    fn test_all_of() {
        let requirement = RoleRequirement::all_of(["ADMIN", "USER"]);

        assert!(requirement.check(&held(&["USER", "ADMIN", "X"])).is_ok());
        assert!(requirement.check(&held(&["ADMIN"])).is_err());
    }

    #[test]
    fn test_empty_requirements_admit_everyone() {
        assert!(RoleRequirement::any_of(Vec::<String>::new()).check(&[]).is_ok());
        assert!(RoleRequirement::all_of(Vec::<String>::new()).check(&[]).is_ok());
    }

    #[test]
    fn test_role_names_are_case_sensitive() {
        let requirement = RoleRequirement::any_of(["ADMIN"]);
        assert!(requirement.check(&held(&["admin"])).is_err());
    }
}
