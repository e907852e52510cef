//! Units of measurement and conversion to the canonical unit

use serde::{Deserialize, Serialize};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Unit of measurement for entered dimensions.
///
/// All stored dimensions and computed areas are expressed in
/// centimeters regardless of the input unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Centimeters,
    Inches,
}

impl Unit {
    /// All selectable units, in dropdown order
    pub const ALL: [Unit; 2] = [Unit::Centimeters, Unit::Inches];

    /// Convert a value in this unit to centimeters
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            Unit::Centimeters => value,
            Unit::Inches => value * CM_PER_INCH,
        }
    }

    /// Short name used for logging
    pub fn name(self) -> &'static str {
        match self {
            Unit::Centimeters => "cm",
            Unit::Inches => "in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_pass_through() {
        assert_eq!(Unit::Centimeters.to_cm(10.0), 10.0);
    }

    #[test]
    fn test_inches_convert() {
        assert_eq!(Unit::Inches.to_cm(1.0), 2.54);
        assert_eq!(Unit::Inches.to_cm(10.0), 25.4);
    }
}
