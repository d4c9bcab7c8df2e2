//! Measurements such as "3 inches" or "98.5 degrees Fahrenheit".
//!
//! A `Units` keeps the raw value and unit tag. The tag is open-ended:
//! applications may define their own units, so nothing here validates it.
//! [`STANDARD_UNITS`] lists the tags the Apple Event Manager defines.

mod value;

pub use value::UnitValue;

use crate::error::{MacTypesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Units<V> {
    value: V,
    unit: String,
}

impl<V> Units<V> {
    pub fn new(value: V, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// The raw unit tag, e.g. `square_feet`.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn into_parts(self) -> (V, String) {
        (self.value, self.unit)
    }

    pub fn is_standard_unit(&self) -> bool {
        STANDARD_UNITS.contains(&self.unit.as_str())
    }
}

impl<V: UnitValue + fmt::Display> Units<V> {
    pub fn to_int(&self) -> Result<i64> {
        self.value.to_int().ok_or_else(|| self.conversion_error("integer"))
    }

    pub fn to_float(&self) -> Result<f64> {
        self.value.to_float().ok_or_else(|| self.conversion_error("float"))
    }

    fn conversion_error(&self, target: &'static str) -> MacTypesError {
        MacTypesError::UnitConversion {
            value: self.value.to_string(),
            target,
        }
    }
}

/// Renders as `<value> <unit>` with underscores in the tag shown as spaces.
impl<V: fmt::Display> fmt::Display for Units<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.replace('_', " "))
    }
}

impl<V: fmt::Debug> fmt::Debug for Units<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Units::new({:?}, {:?})", self.value, self.unit)
    }
}

macro_rules! standard_units {
    ($($name:ident => $tag:literal),* $(,)?) => {
        /// Unit tags defined by the Apple Event Manager.
        pub const STANDARD_UNITS: &[&str] = &[$($tag),*];

        impl<V> Units<V> {
            $(
                #[doc = concat!("`", $tag, "`")]
                pub fn $name(value: V) -> Self {
                    Self::new(value, $tag)
                }
            )*
        }
    };
}

standard_units! {
    centimeters => "centimeters",
    meters => "meters",
    kilometers => "kilometers",
    inches => "inches",
    feet => "feet",
    yards => "yards",
    miles => "miles",
    square_meters => "square_meters",
    square_kilometers => "square_kilometers",
    square_feet => "square_feet",
    square_yards => "square_yards",
    square_miles => "square_miles",
    cubic_centimeters => "cubic_centimeters",
    cubic_meters => "cubic_meters",
    cubic_inches => "cubic_inches",
    cubic_feet => "cubic_feet",
    cubic_yards => "cubic_yards",
    liters => "liters",
    quarts => "quarts",
    gallons => "gallons",
    grams => "grams",
    kilograms => "kilograms",
    ounces => "ounces",
    pounds => "pounds",
    degrees_celsius => "degrees_Celsius",
    degrees_fahrenheit => "degrees_Fahrenheit",
    degrees_kelvin => "degrees_Kelvin",
}
