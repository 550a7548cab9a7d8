//! Eco-points reward curve and carbon ratings.
//!
//! Points rise ten per kilogram up to 10 kg, then fall two per kilogram
//! beyond it. The curve is left unclamped, so a very heavy order earns
//! negative points.

use serde::{Deserialize, Serialize};

/// Products below this per-unit carbon carry the Eco Star badge.
pub const ECO_STAR_MAX_CO2_KG: f64 = 2.0;

/// Carbon at which the reward curve peaks.
pub const PEAK_CO2_KG: f64 = 10.0;

/// Eco-points earned for an order with `total_co2_kg` of carbon.
///
/// ```
/// use eco_commerce::rewards::eco_points_for;
/// assert_eq!(eco_points_for(5.0), 50);
/// assert_eq!(eco_points_for(10.0), 100);
/// assert_eq!(eco_points_for(15.0), 90);
/// ```
pub fn eco_points_for(total_co2_kg: f64) -> i64 {
    if total_co2_kg <= PEAK_CO2_KG {
        (total_co2_kg * 10.0).floor() as i64
    } else {
        100 - ((total_co2_kg - PEAK_CO2_KG) * 2.0).floor() as i64
    }
}

/// Points actually credited to an account, optionally floored at zero.
pub fn credited_points(earned: i64, floor_negative: bool) -> i64 {
    if floor_negative {
        earned.max(0)
    } else {
        earned
    }
}

/// Carbon rating of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarbonLevel {
    Excellent,
    Good,
    Moderate,
    High,
}

impl CarbonLevel {
    /// Rate a cart's total carbon: under 10, 20 and 30 kg.
    pub fn for_cart(total_co2_kg: f64) -> Self {
        Self::from_thresholds(total_co2_kg, [10.0, 20.0, 30.0])
    }

    /// Rate a user's lifetime order carbon: under 20, 50 and 100 kg.
    pub fn for_footprint(total_co2_kg: f64) -> Self {
        Self::from_thresholds(total_co2_kg, [20.0, 50.0, 100.0])
    }

    fn from_thresholds(value: f64, [excellent, good, moderate]: [f64; 3]) -> Self {
        if value < excellent {
            CarbonLevel::Excellent
        } else if value < good {
            CarbonLevel::Good
        } else if value < moderate {
            CarbonLevel::Moderate
        } else {
            CarbonLevel::High
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CarbonLevel::Excellent => "Excellent",
            CarbonLevel::Good => "Good",
            CarbonLevel::Moderate => "Moderate",
            CarbonLevel::High => "High",
        }
    }
}

impl std::fmt::Display for CarbonLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
