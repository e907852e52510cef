//! Form controller for the calculator
//!
//! This module contains:
//! - Msg enum for events dispatched by the form widgets
//! - FormState bridging raw field text to the shape model

pub mod messages;
pub mod state;

pub use messages::*;
pub use state::*;
