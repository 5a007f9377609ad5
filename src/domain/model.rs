use crate::utils::error::KombuchaError;
use crate::utils::validation::FieldError;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_WATER_LITERS: f64 = 1.0;
pub const TEA_GRAMS_PER_LITER: f64 = 7.0;
pub const SUGAR_GRAMS_PER_LITER: f64 = 70.0;
pub const STARTER_LITERS_PER_LITER: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Water,
    Starter,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Water => "Total Water (liters)",
            Field::Starter => "Starter Liquid (liters)",
        }
    }

    pub fn min(&self) -> f64 {
        match self {
            Field::Water => 0.0,
            Field::Starter => 0.01,
        }
    }

    pub fn step(&self) -> f64 {
        match self {
            Field::Water => 0.1,
            Field::Starter => 0.01,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Water => "water",
            Field::Starter => "starter",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = KombuchaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "water" | "w" => Ok(Field::Water),
            "starter" | "s" => Ok(Field::Starter),
            other => Err(KombuchaError::UnknownFieldError {
                name: other.to_string(),
            }),
        }
    }
}

/// 釀造比例 (每公升水)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub tea_grams_per_liter: f64,
    pub sugar_grams_per_liter: f64,
    pub starter_liters_per_liter: f64,
}

impl Default for Ratios {
    fn default() -> Self {
        Self {
            tea_grams_per_liter: TEA_GRAMS_PER_LITER,
            sugar_grams_per_liter: SUGAR_GRAMS_PER_LITER,
            starter_liters_per_liter: STARTER_LITERS_PER_LITER,
        }
    }
}

/// The last valid water/starter pair. Everything displayed is derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    pub water: f64,
    pub starter: f64,
}

/// One user edit: a field and the number typed into it (possibly NaN).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldEdit {
    pub field: Field,
    pub value: f64,
}

impl FieldEdit {
    pub fn new(field: Field, value: f64) -> Self {
        Self { field, value }
    }

    /// Unparseable text becomes NaN, the same as an empty number input.
    pub fn parse(field: Field, raw: &str) -> Self {
        let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self { field, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldState {
    pub value: f64,
    pub error: Option<FieldError>,
}

impl FieldState {
    pub fn valid(value: f64) -> Self {
        Self { value, error: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormState {
    pub water: FieldState,
    pub starter: FieldState,
    pub recipe: Recipe,
}

impl FormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Water => &self.water,
            Field::Starter => &self.starter,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.water.error.is_some() || self.starter.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str_accepts_aliases() {
        assert_eq!("water".parse::<Field>().unwrap(), Field::Water);
        assert_eq!("W".parse::<Field>().unwrap(), Field::Water);
        assert_eq!(" starter ".parse::<Field>().unwrap(), Field::Starter);
        assert_eq!("s".parse::<Field>().unwrap(), Field::Starter);
        assert!("sugar".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(Field::Water.min(), 0.0);
        assert_eq!(Field::Water.step(), 0.1);
        assert_eq!(Field::Starter.min(), 0.01);
        assert_eq!(Field::Starter.step(), 0.01);
    }

    #[test]
    fn test_field_edit_parse_tolerates_garbage() {
        assert_eq!(FieldEdit::parse(Field::Water, "2.5").value, 2.5);
        assert!(FieldEdit::parse(Field::Water, "two").value.is_nan());
        assert!(FieldEdit::parse(Field::Starter, "").value.is_nan());
    }
}
