//! Pure domain types with minimal dependencies
//!
//! This module contains the shape model and unit conversion used for
//! area computation. Types here should have no framework dependencies
//! (cosmic, iced, etc.) so they stay testable in isolation.

pub mod shape;
pub mod unit;

pub use shape::*;
pub use unit::*;
