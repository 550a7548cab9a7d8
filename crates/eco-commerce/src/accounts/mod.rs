//! Accounts module.
//!
//! Users, roles, registration and sign-in.

mod auth;
mod user;

pub use auth::{
    is_valid_email, is_valid_phone, normalize_email, Credentials, PasswordChecks, PasswordStrength,
    Registration, MIN_PASSWORD_LEN, PASSWORD_SPECIALS,
};
pub use user::{Role, User, POINTS_PER_LEVEL};
