//! Shape variants and area computation in canonical units

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::unit::Unit;

/// A raw dimension that was zero, negative, or not a finite number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dimensions must be positive")]
pub struct InvalidDimension;

/// Discriminator selecting which input fields and area formula apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Square,
    Rectangle,
    Triangle,
    Circle,
}

impl ShapeKind {
    /// All selectable shape kinds, in dropdown order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Triangle,
        ShapeKind::Circle,
    ];

    /// Short name used for logging
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
        }
    }
}

/// A shape with its dimensions already converted to centimeters.
///
/// Constructed fresh for each calculate action and dropped once its
/// area has been computed. Invariant: every stored dimension is a
/// positive finite value in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
    Triangle { base: f64, height: f64 },
    Circle { diameter: f64 },
}

impl Shape {
    pub fn square(side: f64, unit: Unit) -> Result<Self, InvalidDimension> {
        check_positive(&[side])?;
        Ok(Shape::Square {
            side: unit.to_cm(side),
        })
    }

    pub fn rectangle(length: f64, width: f64, unit: Unit) -> Result<Self, InvalidDimension> {
        check_positive(&[length, width])?;
        Ok(Shape::Rectangle {
            length: unit.to_cm(length),
            width: unit.to_cm(width),
        })
    }

    pub fn triangle(base: f64, height: f64, unit: Unit) -> Result<Self, InvalidDimension> {
        check_positive(&[base, height])?;
        Ok(Shape::Triangle {
            base: unit.to_cm(base),
            height: unit.to_cm(height),
        })
    }

    pub fn circle(diameter: f64, unit: Unit) -> Result<Self, InvalidDimension> {
        check_positive(&[diameter])?;
        Ok(Shape::Circle {
            diameter: unit.to_cm(diameter),
        })
    }

    /// The kind of this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Area in square centimeters
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Square { side } => side * side,
            Shape::Rectangle { length, width } => length * width,
            Shape::Triangle { base, height } => 0.5 * base * height,
            Shape::Circle { diameter } => PI * (diameter / 2.0).powi(2),
        }
    }
}

fn check_positive(dimensions: &[f64]) -> Result<(), InvalidDimension> {
    if dimensions.iter().all(|d| d.is_finite() && *d > 0.0) {
        Ok(())
    } else {
        Err(InvalidDimension)
    }
}
