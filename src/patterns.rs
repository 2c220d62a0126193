use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CombinatorError, Result};

// =============================================================================
// Enum with associated data
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Address { street: String, city: String },
    LatLong { lat: f64, long: f64 },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Address { street, city } => write!(f, "{street}, {city}"),
            Location::LatLong { lat, long } => write!(f, "{lat}, {long}"),
        }
    }
}

// =============================================================================
// Tuples as multi-value returns
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    pub quotient: i64,
    pub remainder: i64,
}

impl From<Division> for (i64, i64) {
    fn from(d: Division) -> Self {
        (d.quotient, d.remainder)
    }
}

/// Truncating division, as `/` and `%` do for `i64`.
pub fn int_division(a: i64, b: i64) -> Result<Division> {
    match (a.checked_div(b), a.checked_rem(b)) {
        (Some(quotient), Some(remainder)) => Ok(Division { quotient, remainder }),
        _ if b == 0 => Err(CombinatorError::invalid_argument("b", "division by zero")),
        _ => Err(CombinatorError::invalid_argument(
            "a",
            format!("{a} / {b} overflows"),
        )),
    }
}

// =============================================================================
// Matching on tuples with guards
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexKind {
    Zero,
    PositiveReal,
    NegativeReal,
    Imaginary,
    /// Both parts non-zero; `distance` is the squared magnitude.
    Complex { distance: i64 },
}

pub fn classify_complex(number: (i64, i64)) -> ComplexKind {
    match number {
        (0, 0) => ComplexKind::Zero,
        (a, 0) if a > 0 => ComplexKind::PositiveReal,
        (_, 0) => ComplexKind::NegativeReal,
        (0, _) => ComplexKind::Imaginary,
        (a, b) => ComplexKind::Complex {
            distance: a.saturating_mul(a).saturating_add(b.saturating_mul(b)),
        },
    }
}

impl fmt::Display for ComplexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexKind::Zero => write!(f, "Number is zero"),
            ComplexKind::PositiveReal => write!(f, "Number is real and positive"),
            ComplexKind::NegativeReal => write!(f, "Number is real and negative"),
            ComplexKind::Imaginary => write!(f, "Number has only imaginary part"),
            ComplexKind::Complex { distance } => {
                write!(f, "Number is imaginary with distance {distance}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_description() {
        let location = Location::Address {
            street: "94 Adams St".into(),
            city: "Waltham".into(),
        };
        assert_eq!(location.to_string(), "94 Adams St, Waltham");

        let lat_long = Location::LatLong {
            lat: 41.45,
            long: -71.90,
        };
        assert_eq!(lat_long.to_string(), "41.45, -71.9");
    }

    #[test]
    fn test_location_serde_tagging() {
        let json = r#"{"kind":"lat_long","lat":1.5,"long":2.0}"#;
        let parsed: Location = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Location::LatLong { lat: 1.5, long: 2.0 });

        let address = Location::Address {
            street: "Main".into(),
            city: "Town".into(),
        };
        let encoded = serde_json::to_value(&address).unwrap();
        assert_eq!(encoded["kind"], "address");
    }

    #[test]
    fn test_int_division() {
        let result = int_division(15, 5).unwrap();
        assert_eq!(result.quotient, 3);
        assert_eq!(result.remainder, 0);

        let (q, r): (i64, i64) = int_division(-7, 2).unwrap().into();
        assert_eq!((q, r), (-3, -1));
    }

    #[test]
    fn test_int_division_errors() {
        assert!(matches!(
            int_division(1, 0),
            Err(CombinatorError::InvalidArgument { ref name, .. }) if name == "b"
        ));
        assert!(int_division(i64::MIN, -1).is_err());
    }

    #[test]
    fn test_classify_complex() {
        assert_eq!(classify_complex((0, 0)), ComplexKind::Zero);
        assert_eq!(classify_complex((3, 0)), ComplexKind::PositiveReal);
        assert_eq!(classify_complex((-3, 0)), ComplexKind::NegativeReal);
        assert_eq!(classify_complex((0, 2)), ComplexKind::Imaginary);
        assert_eq!(
            classify_complex((1, 1)),
            ComplexKind::Complex { distance: 2 }
        );
        assert_eq!(
            classify_complex((1, 1)).to_string(),
            "Number is imaginary with distance 2"
        );
    }
}
