//! User accounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::CommerceError;

/// Points needed per eco level.
pub const POINTS_PER_LEVEL: i64 = 100;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// A shopper.
    #[default]
    User,
    /// A store administrator.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(CommerceError::UnknownValue {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email, trimmed and lower-cased.
    pub email: String,
    /// Ten-digit phone number.
    pub phone: String,
    /// Account role.
    pub role: Role,
    /// Running total of eco-points. May be negative.
    pub eco_points: i64,
    /// Carbon of every order placed, in kilograms.
    pub total_co2_kg: f64,
    /// Earned badge names.
    #[serde(default)]
    pub eco_badges: Vec<String>,
    /// Stored as entered; this is a local demo store.
    pub password: String,
}

impl User {
    /// Create a new account with no points.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
            eco_points: 0,
            total_co2_kg: 0.0,
            eco_badges: Vec::new(),
            password: password.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Eco level, one per hundred points.
    pub fn level(&self) -> i64 {
        self.eco_points.div_euclid(POINTS_PER_LEVEL)
    }

    /// Points still needed to reach the next level.
    pub fn points_to_next_level(&self) -> i64 {
        POINTS_PER_LEVEL - self.eco_points.rem_euclid(POINTS_PER_LEVEL)
    }

    /// Credit points and carbon from a placed order.
    pub(crate) fn record_order(&mut self, points: i64, co2_kg: f64) {
        self.eco_points = self.eco_points.saturating_add(points);
        self.total_co2_kg += co2_kg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new("Asha", "asha@example.com", "9876543210", Role::User, "Secret1!")
    }

    #[test]
    fn test_new_user_defaults() {
        let u = user();
        assert_eq!(u.eco_points, 0);
        assert_eq!(u.total_co2_kg, 0.0);
        assert!(u.eco_badges.is_empty());
        assert!(!u.is_admin());
    }

    #[test]
    fn test_levels() {
        let mut u = user();
        assert_eq!(u.level(), 0);
        assert_eq!(u.points_to_next_level(), 100);

        u.record_order(250, 3.0);
        assert_eq!(u.level(), 2);
        assert_eq!(u.points_to_next_level(), 50);
        assert_eq!(u.total_co2_kg, 3.0);
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::User.to_string(), "user");
        assert!("guest".parse::<Role>().is_err());
    }
}
