//! Shipping address.

use serde::{Deserialize, Serialize};

use crate::CommerceError;

/// Length of an Indian postal code.
pub const PINCODE_LEN: usize = 6;

/// A delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingAddress {
    /// Street and house number.
    pub street: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Six-digit postal code.
    pub pincode: String,
}

impl ShippingAddress {
    /// Create a new address.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
        }
    }

    /// Check that every field is filled and the pincode is six ASCII digits.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (value, field) in [
            (&self.street, "street"),
            (&self.city, "city"),
            (&self.state, "state"),
            (&self.pincode, "pincode"),
        ] {
            if value.is_empty() {
                return Err(CommerceError::MissingField(field));
            }
        }
        if !is_valid_pincode(&self.pincode) {
            return Err(CommerceError::InvalidPincode(self.pincode.clone()));
        }
        Ok(())
    }

    /// Check if address is complete.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} - {}", self.street, self.city, self.state, self.pincode)
    }
}

/// Exactly six ASCII digits.
pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == PINCODE_LEN && pincode.bytes().all(|b| b.is_ascii_digit())
}
