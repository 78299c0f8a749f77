//! Starfish record model and the typed form-coercion step
//!
//! Form input arrives as text. `StarfishForm::parse` coerces the numeric
//! fields exactly once; it is the only place a request can fail validation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// A starfish row from the `starfish` table.
///
/// The serialized shape is also the JSON listing's element shape: all nine
/// fields, `id` first.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Starfish {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub limbs: i64,
    pub depth: f64,
    pub age: i64,
    pub gender: String,
    pub latin_name: String,
    pub habitat: String,
}

/// Raw form payload shared by the create and update routes.
///
/// Nominal column limits (name 80, color 50, gender 10, latin_name 80,
/// habitat 120) are documented, not enforced; numeric coercion is the only
/// validation failure path.
#[derive(Debug, Clone, Deserialize)]
pub struct StarfishForm {
    pub name: String,
    pub color: String,
    pub limbs: String,
    pub depth: String,
    pub age: String,
    pub gender: String,
    pub latin_name: String,
    pub habitat: String,
}

/// The eight typed fields of a starfish, ready for insert or update.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfishFields {
    pub name: String,
    pub color: String,
    pub limbs: i64,
    pub depth: f64,
    pub age: i64,
    pub gender: String,
    pub latin_name: String,
    pub habitat: String,
}

impl StarfishForm {
    /// Coerce `limbs`, `depth` and `age`, passing text fields through
    /// untouched.
    ///
    /// Whitespace around numeric input is tolerated. Empty text fields are
    /// legal; the schema requires presence, not non-emptiness.
    pub fn parse(self) -> Result<StarfishFields, ValidationError> {
        let limbs = parse_int("limbs", &self.limbs)?;
        let depth = parse_float("depth", &self.depth)?;
        let age = parse_int("age", &self.age)?;

        Ok(StarfishFields {
            name: self.name,
            color: self.color,
            limbs,
            depth,
            age,
            gender: self.gender,
            latin_name: self.latin_name,
            habitat: self.habitat,
        })
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::InvalidInt {
        field,
        value: value.to_owned(),
    })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::InvalidFloat {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> StarfishForm {
        StarfishForm {
            name: "Sunny".into(),
            color: "orange".into(),
            limbs: "5".into(),
            depth: "12.5".into(),
            age: "2".into(),
            gender: "unknown".into(),
            latin_name: "Asterias rubens".into(),
            habitat: "tide pool".into(),
        }
    }

    #[test]
    fn parses_valid_form() {
        let fields = form().parse().expect("valid form");
        assert_eq!(fields.name, "Sunny");
        assert_eq!(fields.limbs, 5);
        assert_eq!(fields.depth, 12.5);
        assert_eq!(fields.age, 2);
        assert_eq!(fields.habitat, "tide pool");
    }

    #[test]
    fn rejects_non_numeric_limbs() {
        let mut f = form();
        f.limbs = "five".into();
        let err = f.parse().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidInt {
                field: "limbs",
                value: "five".into()
            }
        );
    }

    #[test]
    fn rejects_fractional_limbs() {
        let mut f = form();
        f.limbs = "4.5".into();
        assert!(matches!(
            f.parse().unwrap_err(),
            ValidationError::InvalidInt { field: "limbs", .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_depth() {
        let mut f = form();
        f.depth = "shallow".into();
        assert!(matches!(
            f.parse().unwrap_err(),
            ValidationError::InvalidFloat { field: "depth", .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_age() {
        let mut f = form();
        f.age = "".into();
        assert!(matches!(
            f.parse().unwrap_err(),
            ValidationError::InvalidInt { field: "age", .. }
        ));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let mut f = form();
        f.limbs = " 5 ".into();
        f.depth = "\t12.5".into();
        let fields = f.parse().expect("whitespace trimmed");
        assert_eq!(fields.limbs, 5);
        assert_eq!(fields.depth, 12.5);
    }

    #[test]
    fn accepts_integer_depth() {
        let mut f = form();
        f.depth = "12".into();
        assert_eq!(f.parse().expect("integer is a valid float").depth, 12.0);
    }

    #[test]
    fn accepts_empty_text_fields() {
        let mut f = form();
        f.name = String::new();
        f.habitat = String::new();
        let fields = f.parse().expect("empty text is legal");
        assert_eq!(fields.name, "");
        assert_eq!(fields.habitat, "");
    }

    #[test]
    fn accepts_negative_numbers() {
        let mut f = form();
        f.depth = "-3.2".into();
        f.age = "-1".into();
        let fields = f.parse().expect("sign is part of the number");
        assert_eq!(fields.depth, -3.2);
        assert_eq!(fields.age, -1);
    }
}
