//! Message types for the calculator form

use crate::domain::{ShapeKind, Unit};

use super::state::Field;

/// Form events, handled synchronously by the application update loop
#[derive(Debug, Clone)]
pub enum Msg {
    /// A shape kind was picked in the dropdown
    ShapeSelected(ShapeKind),
    /// A unit was picked in the dropdown
    UnitSelected(Unit),
    /// The text of an input field changed
    FieldEdited(Field, String),
    /// The calculate button was pressed
    Calculate,
}
