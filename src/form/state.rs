//! Form state and the calculate operation

use thiserror::Error;

use crate::domain::{Shape, ShapeKind, Unit};

/// An input field on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Side,
    Length,
    Width,
    Base,
    Height,
    Diameter,
}

impl Field {
    /// The visible field set for a shape kind, in display order
    pub fn for_kind(kind: ShapeKind) -> &'static [Field] {
        match kind {
            ShapeKind::Square => &[Field::Side],
            ShapeKind::Rectangle => &[Field::Length, Field::Width],
            ShapeKind::Triangle => &[Field::Base, Field::Height],
            ShapeKind::Circle => &[Field::Diameter],
        }
    }
}

/// Error produced by a single calculate attempt.
///
/// The display text is shown verbatim in the result area. Nothing is
/// retried; the form stays editable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A field's raw text could not be parsed as a decimal number
    #[error("could not convert string to float: '{raw}'")]
    Parse { raw: String },
    /// A parsed dimension was zero or negative
    #[error("{}", validation_message(.0))]
    Validation(ShapeKind),
}

fn validation_message(kind: &ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Square => "Side length must be positive.",
        ShapeKind::Rectangle => "Length and width must be positive.",
        ShapeKind::Triangle => "Base and height must be positive.",
        ShapeKind::Circle => "Diameter must be positive.",
    }
}

/// Current form state: shape kind, unit, and raw field text.
///
/// Owned by the application and mutated only inside `update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub kind: ShapeKind,
    pub unit: Unit,
    first: String,
    second: String,
}

impl FormState {
    pub fn new(kind: ShapeKind, unit: Unit) -> Self {
        Self {
            kind,
            unit,
            first: String::new(),
            second: String::new(),
        }
    }

    /// The fields currently shown, a pure function of the shape kind
    pub fn visible_fields(&self) -> &'static [Field] {
        Field::for_kind(self.kind)
    }

    /// Switch to another shape kind, discarding the previous field text
    pub fn select_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
        self.first.clear();
        self.second.clear();
    }

    /// Raw text of a field, or "" if it is not visible for the current kind
    pub fn value(&self, field: Field) -> &str {
        match self.slot(field) {
            Some(0) => &self.first,
            Some(1) => &self.second,
            _ => "",
        }
    }

    /// Update the raw text of a field; hidden fields are ignored
    pub fn set_value(&mut self, field: Field, text: String) {
        match self.slot(field) {
            Some(0) => self.first = text,
            Some(1) => self.second = text,
            _ => {}
        }
    }

    fn slot(&self, field: Field) -> Option<usize> {
        self.visible_fields().iter().position(|f| *f == field)
    }

    /// Parse and validate the visible fields, construct the matching
    /// shape, and format its area.
    pub fn calculate(&self) -> Result<String, CalcError> {
        let shape = self.build_shape()?;
        Ok(format!("Area: {:.3} square centimeters", shape.area()))
    }

    fn build_shape(&self) -> Result<Shape, CalcError> {
        let invalid = |_| CalcError::Validation(self.kind);

        match self.kind {
            ShapeKind::Square => {
                let side = parse_field(&self.first)?;
                Shape::square(side, self.unit).map_err(invalid)
            }
            ShapeKind::Rectangle => {
                let length = parse_field(&self.first)?;
                let width = parse_field(&self.second)?;
                Shape::rectangle(length, width, self.unit).map_err(invalid)
            }
            ShapeKind::Triangle => {
                let base = parse_field(&self.first)?;
                let height = parse_field(&self.second)?;
                Shape::triangle(base, height, self.unit).map_err(invalid)
            }
            ShapeKind::Circle => {
                let diameter = parse_field(&self.first)?;
                Shape::circle(diameter, self.unit).map_err(invalid)
            }
        }
    }
}

fn parse_field(raw: &str) -> Result<f64, CalcError> {
    raw.trim().parse::<f64>().map_err(|_| CalcError::Parse {
        raw: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(kind: ShapeKind, unit: Unit, values: &[&str]) -> FormState {
        let mut form = FormState::new(kind, unit);
        for (field, value) in form.visible_fields().iter().zip(values) {
            form.set_value(*field, (*value).to_owned());
        }
        form
    }

    #[test]
    fn test_square_centimeters() {
        let form = filled(ShapeKind::Square, Unit::Centimeters, &["10"]);
        assert_eq!(
            form.calculate().unwrap(),
            "Area: 100.000 square centimeters"
        );
    }

    #[test]
    fn test_square_inches() {
        let form = filled(ShapeKind::Square, Unit::Inches, &["10"]);
        assert_eq!(
            form.calculate().unwrap(),
            "Area: 645.160 square centimeters"
        );
    }

    #[test]
    fn test_rectangle() {
        let form = filled(ShapeKind::Rectangle, Unit::Centimeters, &["10", "5"]);
        assert_eq!(form.calculate().unwrap(), "Area: 50.000 square centimeters");
    }

    #[test]
    fn test_triangle() {
        let form = filled(ShapeKind::Triangle, Unit::Centimeters, &["10", "5"]);
        assert_eq!(form.calculate().unwrap(), "Area: 25.000 square centimeters");
    }

    #[test]
    fn test_circle() {
        let form = filled(ShapeKind::Circle, Unit::Centimeters, &["10"]);
        assert_eq!(form.calculate().unwrap(), "Area: 78.540 square centimeters");
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let form = filled(ShapeKind::Circle, Unit::Inches, &["3.5"]);
        assert_eq!(form.calculate(), form.calculate());
    }

    #[test]
    fn test_zero_base_rejected() {
        let form = filled(ShapeKind::Triangle, Unit::Centimeters, &["0", "5"]);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "Base and height must be positive."
        );
    }

    #[test]
    fn test_negative_side_rejected() {
        let form = filled(ShapeKind::Square, Unit::Centimeters, &["-10"]);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "Side length must be positive."
        );
    }

    #[test]
    fn test_negative_width_rejected() {
        let form = filled(ShapeKind::Rectangle, Unit::Centimeters, &["10", "-5"]);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "Length and width must be positive."
        );
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let form = filled(ShapeKind::Circle, Unit::Centimeters, &["0"]);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "Diameter must be positive."
        );
    }

    #[test]
    fn test_non_numeric_text() {
        let form = filled(ShapeKind::Square, Unit::Centimeters, &["abc"]);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "could not convert string to float: 'abc'"
        );
    }

    #[test]
    fn test_empty_field() {
        let form = FormState::new(ShapeKind::Circle, Unit::Centimeters);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "could not convert string to float: ''"
        );
    }

    #[test]
    fn test_parse_failure_reported_before_validation() {
        // First field unparsable, second invalid: the parse error wins.
        let form = filled(ShapeKind::Rectangle, Unit::Centimeters, &["ten", "-5"]);
        assert_eq!(
            form.calculate().unwrap_err().to_string(),
            "could not convert string to float: 'ten'"
        );
    }

    #[test]
    fn test_visible_fields_per_kind() {
        assert_eq!(Field::for_kind(ShapeKind::Square), &[Field::Side]);
        assert_eq!(
            Field::for_kind(ShapeKind::Rectangle),
            &[Field::Length, Field::Width]
        );
        assert_eq!(
            Field::for_kind(ShapeKind::Triangle),
            &[Field::Base, Field::Height]
        );
        assert_eq!(Field::for_kind(ShapeKind::Circle), &[Field::Diameter]);
    }

    #[test]
    fn test_select_kind_clears_fields() {
        let mut form = filled(ShapeKind::Rectangle, Unit::Centimeters, &["10", "5"]);
        form.select_kind(ShapeKind::Square);
        assert_eq!(form.value(Field::Side), "");
    }

    #[test]
    fn test_hidden_field_edit_ignored() {
        let mut form = FormState::new(ShapeKind::Square, Unit::Centimeters);
        form.set_value(Field::Diameter, "10".to_owned());
        assert_eq!(form.value(Field::Side), "");
        assert_eq!(form.value(Field::Diameter), "");
    }
}
