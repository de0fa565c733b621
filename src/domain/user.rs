/// User profile entity
///
/// The server tracks routines for a single user profile. The profile only
/// carries what the prompt builders need: a username and an optional
/// first name used as the preferred display name.

use serde::{Deserialize, Serialize};
use crate::domain::DomainError;

/// The user whose routines are being tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login-style identifier, always present
    pub username: String,
    /// Preferred name for addressing the user, if they gave one
    pub first_name: Option<String>,
}

impl User {
    /// Create a new user profile with validation
    pub fn new(username: String, first_name: Option<String>) -> Result<Self, DomainError> {
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation {
                message: "Username cannot be empty".to_string(),
            });
        }
        if trimmed.len() > 80 {
            return Err(DomainError::Validation {
                message: "Username cannot be longer than 80 characters".to_string(),
            });
        }
        if let Some(ref name) = first_name {
            if name.len() > 80 {
                return Err(DomainError::Validation {
                    message: "First name cannot be longer than 80 characters".to_string(),
                });
            }
        }

        Ok(Self {
            username: trimmed.to_string(),
            first_name,
        })
    }

    /// Name used to address the user in prompts
    ///
    /// Falls back to the username when no usable first name is set.
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_first_name() {
        let user = User::new("dgoggins".to_string(), Some("David".to_string())).unwrap();
        assert_eq!(user.display_name(), "David");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user = User::new("dgoggins".to_string(), None).unwrap();
        assert_eq!(user.display_name(), "dgoggins");

        let blank = User::new("dgoggins".to_string(), Some("   ".to_string())).unwrap();
        assert_eq!(blank.display_name(), "dgoggins");
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(User::new("  ".to_string(), None).is_err());
    }
}
