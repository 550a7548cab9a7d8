//! Registration and sign-in validation.
//!
//! Passwords are compared as plain strings against the local user list.
//! There is no hashing and no session token.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::accounts::{Role, User};
use crate::CommerceError;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Characters that count as "special" in a password.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Trim and lower-case an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether an email has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Which of the five password rules a password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
    pub long_enough: bool,
}

impl PasswordChecks {
    pub fn of(password: &str) -> Self {
        Self {
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
            long_enough: password.chars().count() >= MIN_PASSWORD_LEN,
        }
    }

    /// Number of rules satisfied, 0 to 5.
    pub fn score(&self) -> u8 {
        [self.upper, self.lower, self.digit, self.special, self.long_enough]
            .into_iter()
            .filter(|&ok| ok)
            .count() as u8
    }

    pub fn all_pass(&self) -> bool {
        self.score() == 5
    }
}

/// Password strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Rate a password; `None` for an empty one.
    pub fn of(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        Some(match PasswordChecks::of(password).score() {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Fair,
            4 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        })
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Fair => "Fair",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }
}

/// The sign-up form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Registration {
    /// Validate the form against `existing` accounts and build the new user.
    pub fn into_user(self, existing: &[User]) -> Result<User, CommerceError> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.phone, "phone"),
            (&self.password, "password"),
            (&self.confirm_password, "confirm password"),
        ] {
            if value.is_empty() {
                return Err(CommerceError::MissingField(field));
            }
        }

        let email = normalize_email(&self.email);
        if !is_valid_email(&email) {
            return Err(CommerceError::InvalidEmail(email));
        }
        if !is_valid_phone(&self.phone) {
            return Err(CommerceError::InvalidPhone(self.phone));
        }
        if !PasswordChecks::of(&self.password).all_pass() {
            return Err(CommerceError::WeakPassword);
        }
        if self.password != self.confirm_password {
            return Err(CommerceError::PasswordMismatch);
        }
        if existing.iter().any(|u| u.email == email) {
            return Err(CommerceError::EmailTaken(email));
        }

        Ok(User::new(self.name, email, self.phone, self.role, self.password))
    }
}

/// The sign-in form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// The role the user is signing in as.
    pub role: Role,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// Find the matching account in `users`.
    pub fn authenticate<'a>(&self, users: &'a [User]) -> Result<&'a User, CommerceError> {
        if self.email.is_empty() {
            return Err(CommerceError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(CommerceError::MissingField("password"));
        }

        let email = normalize_email(&self.email);
        let user = users
            .iter()
            .find(|u| u.email == email)
            .ok_or_else(|| CommerceError::AccountNotFound(email.clone()))?;
        if user.role != self.role {
            return Err(CommerceError::RoleMismatch(user.role));
        }
        if user.password != self.password {
            return Err(CommerceError::IncorrectPassword);
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            name: "Asha".to_string(),
            email: "  Asha@Example.COM ".to_string(),
            phone: "9876543210".to_string(),
            password: "Green#2024".to_string(),
            confirm_password: "Green#2024".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("98765 4321"));
    }

    #[test]
    fn test_password_strength() {
        assert_eq!(PasswordStrength::of(""), None);
        assert_eq!(PasswordStrength::of("abc"), Some(PasswordStrength::Weak));
        assert_eq!(PasswordStrength::of("abcD1"), Some(PasswordStrength::Fair));
        assert_eq!(PasswordStrength::of("abcdefG1"), Some(PasswordStrength::Good));
        assert_eq!(PasswordStrength::of("abcdeG1!"), Some(PasswordStrength::Strong));
    }

    #[test]
    fn test_register_normalizes_email() {
        let user = registration().into_user(&[]).unwrap();
        assert_eq!(user.email, "asha@example.com");
        assert_eq!(user.eco_points, 0);
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let first = registration().into_user(&[]).unwrap();
        let err = registration().into_user(&[first]).unwrap_err();
        assert!(matches!(err, CommerceError::EmailTaken(_)));
    }

    #[test]
    fn test_register_rejects_weak_and_mismatched() {
        let mut r = registration();
        r.password = "password".to_string();
        r.confirm_password = "password".to_string();
        assert!(matches!(r.into_user(&[]), Err(CommerceError::WeakPassword)));

        let mut r = registration();
        r.confirm_password = "Green#2025".to_string();
        assert!(matches!(r.into_user(&[]), Err(CommerceError::PasswordMismatch)));

        let mut r = registration();
        r.phone = "98765".to_string();
        assert!(matches!(r.into_user(&[]), Err(CommerceError::InvalidPhone(_))));
    }

    #[test]
    fn test_authenticate() {
        let users = vec![registration().into_user(&[]).unwrap()];

        let ok = Credentials::new("ASHA@example.com ", "Green#2024", Role::User);
        assert_eq!(ok.authenticate(&users).unwrap().name, "Asha");

        let wrong_role = Credentials::new("asha@example.com", "Green#2024", Role::Admin);
        assert!(matches!(
            wrong_role.authenticate(&users),
            Err(CommerceError::RoleMismatch(Role::User))
        ));

        let wrong_password = Credentials::new("asha@example.com", "green#2024", Role::User);
        assert!(matches!(
            wrong_password.authenticate(&users),
            Err(CommerceError::IncorrectPassword)
        ));

        let unknown = Credentials::new("ravi@example.com", "Green#2024", Role::User);
        assert!(matches!(
            unknown.authenticate(&users),
            Err(CommerceError::AccountNotFound(_))
        ));
    }
}
