//! Physical quantities as typed by users, e.g. `"2.5 gal"` or `"500 g"`.

use std::cmp::Ordering;

use crate::error::SchemaError;
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalQuantity {
    Volume,
    Mass,
}

impl PhysicalQuantity {
    pub fn from_str(s: &str) -> Result<Self, SchemaError> {
        match s.to_lowercase().as_str() {
            "volume" => Ok(Self::Volume),
            "mass" | "weight" => Ok(Self::Mass),
            _ => Err(SchemaError::UnknownQuantity(s.to_string())),
        }
    }

    pub fn si_unit(self) -> Unit {
        match self {
            Self::Volume => Unit::Liters,
            Self::Mass => Unit::Kilograms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    // Volume
    Liters,
    Milliliters,
    UsGallons,
    UsQuarts,
    UsPints,
    UsCups,
    Tablespoons,
    Teaspoons,
    Barrels,
    // Mass
    Kilograms,
    Grams,
    Milligrams,
    Pounds,
    Ounces,
}

impl Unit {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" | "liter" | "liters" | "litre" | "litres" => Some(Self::Liters),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Some(Self::Milliliters)
            }
            "gal" | "gallon" | "gallons" => Some(Self::UsGallons),
            "qt" | "quart" | "quarts" => Some(Self::UsQuarts),
            "pt" | "pint" | "pints" => Some(Self::UsPints),
            "cup" | "cups" => Some(Self::UsCups),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Self::Tablespoons),
            "tsp" | "teaspoon" | "teaspoons" => Some(Self::Teaspoons),
            "bbl" | "barrel" | "barrels" => Some(Self::Barrels),
            "kg" | "kilogram" | "kilograms" => Some(Self::Kilograms),
            "g" | "gram" | "grams" => Some(Self::Grams),
            "mg" | "milligram" | "milligrams" => Some(Self::Milligrams),
            "lb" | "lbs" | "pound" | "pounds" => Some(Self::Pounds),
            "oz" | "ounce" | "ounces" => Some(Self::Ounces),
            _ => None,
        }
    }

    pub fn quantity(self) -> PhysicalQuantity {
        match self {
            Self::Liters
            | Self::Milliliters
            | Self::UsGallons
            | Self::UsQuarts
            | Self::UsPints
            | Self::UsCups
            | Self::Tablespoons
            | Self::Teaspoons
            | Self::Barrels => PhysicalQuantity::Volume,
            Self::Kilograms | Self::Grams | Self::Milligrams | Self::Pounds | Self::Ounces => {
                PhysicalQuantity::Mass
            }
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Liters => "L",
            Self::Milliliters => "mL",
            Self::UsGallons => "gal",
            Self::UsQuarts => "qt",
            Self::UsPints => "pt",
            Self::UsCups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Barrels => "bbl",
            Self::Kilograms => "kg",
            Self::Grams => "g",
            Self::Milligrams => "mg",
            Self::Pounds => "lb",
            Self::Ounces => "oz",
        }
    }

    /// Multiplier converting this unit to the SI unit of its quantity.
    pub fn to_si_factor(self) -> f64 {
        match self {
            Self::Liters => 1.0,
            Self::Milliliters => 0.001,
            Self::UsGallons => 3.785_411_784,
            Self::UsQuarts => 0.946_352_946,
            Self::UsPints => 0.473_176_473,
            Self::UsCups => 0.236_588_236_5,
            Self::Tablespoons => 0.014_786_764_781_25,
            Self::Teaspoons => 0.004_928_921_593_75,
            Self::Barrels => 117.347_765_304,
            Self::Kilograms => 1.0,
            Self::Grams => 0.001,
            Self::Milligrams => 0.000_001,
            Self::Pounds => 0.453_592_37,
            Self::Ounces => 0.028_349_523_125,
        }
    }
}

/// A quantity normalized to SI (liters or kilograms).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    pub quantity: f64,
    pub unit: Unit,
}

impl Amount {
    pub fn zero(quantity: PhysicalQuantity) -> Self {
        Self {
            quantity: 0.0,
            unit: quantity.si_unit(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.quantity == 0.0
    }

    /// Orders by magnitude only. A mass and a volume compare as plain numbers.
    pub fn cmp_quantity(&self, other: &Self) -> Ordering {
        self.quantity.total_cmp(&other.quantity)
    }
}

/// Parse `"<number> [unit]"` into SI. Without a unit the SI unit of
/// `quantity` is assumed.
pub fn string_to_si(
    text: &str,
    quantity: PhysicalQuantity,
    locale: &Locale,
) -> Result<Amount, SchemaError> {
    let text = text.trim();
    // the unit is the trailing alphabetic run, so exponents stay with the number
    let split = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphabetic())
        .last()
        .map_or(text.len(), |(i, _)| i);
    let (number, unit) = text.split_at(split);

    let value = locale.to_double(number)?;
    let unit = match unit.trim() {
        "" => quantity.si_unit(),
        u => Unit::from_str(u).ok_or_else(|| SchemaError::UnknownUnit {
            unit: u.to_string(),
            text: text.to_string(),
        })?,
    };

    Ok(Amount {
        quantity: value * unit.to_si_factor(),
        unit: unit.quantity().si_unit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_liters() {
        let a = string_to_si("5 L", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert_eq!(a.quantity, 5.0);
        assert_eq!(a.unit, Unit::Liters);
    }

    #[test]
    fn test_no_space_and_case() {
        let a = string_to_si("500mL", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert!(close(a.quantity, 0.5));
    }

    #[test]
    fn test_gallons() {
        let a = string_to_si("2 gal", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert!(close(a.quantity, 7.570_823_568));
    }

    #[test]
    fn test_default_unit() {
        let a = string_to_si("3", PhysicalQuantity::Mass, &Locale::C).unwrap();
        assert_eq!(a.unit, Unit::Kilograms);
        assert_eq!(a.quantity, 3.0);
    }

    #[test]
    fn test_mass_unit_on_volume_request() {
        let a = string_to_si("1 lb", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert_eq!(a.unit, Unit::Kilograms);
        assert!(close(a.quantity, 0.453_592_37));
    }

    #[test]
    fn test_comma_locale() {
        let a = string_to_si("1,5 L", PhysicalQuantity::Volume, &Locale::COMMA_DECIMAL).unwrap();
        assert_eq!(a.quantity, 1.5);
    }

    #[test]
    fn test_exponent_notation() {
        let a = string_to_si("1e3 mL", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert!(close(a.quantity, 1.0));
        assert_eq!(a.unit, Unit::Liters);

        let a = string_to_si("2.5E-1kg", PhysicalQuantity::Mass, &Locale::C).unwrap();
        assert!(close(a.quantity, 0.25));
    }

    #[test]
    fn test_group_separator_is_not_a_decimal() {
        assert_eq!(
            string_to_si("1,5 L", PhysicalQuantity::Volume, &Locale::C),
            Err(SchemaError::InvalidNumber("1,5 ".to_string()))
        );
        let a = string_to_si("1,000 mL", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert!(close(a.quantity, 1.0));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            string_to_si("5 furlongs", PhysicalQuantity::Volume, &Locale::C),
            Err(SchemaError::UnknownUnit { .. })
        ));
        assert!(matches!(
            string_to_si("L", PhysicalQuantity::Volume, &Locale::C),
            Err(SchemaError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_quantity_names() {
        assert_eq!(PhysicalQuantity::from_str("Volume"), Ok(PhysicalQuantity::Volume));
        assert_eq!(PhysicalQuantity::from_str("weight"), Ok(PhysicalQuantity::Mass));
        assert_eq!(
            PhysicalQuantity::from_str("time"),
            Err(SchemaError::UnknownQuantity("time".to_string()))
        );
        assert_eq!(PhysicalQuantity::Mass.si_unit().symbol(), "kg");
    }

    #[test]
    fn test_cmp_quantity() {
        let small = string_to_si("1 qt", PhysicalQuantity::Volume, &Locale::C).unwrap();
        let large = string_to_si("1 L", PhysicalQuantity::Volume, &Locale::C).unwrap();
        assert_eq!(small.cmp_quantity(&large), Ordering::Less);
        assert!(Amount::zero(PhysicalQuantity::Volume).is_zero());
    }
}
