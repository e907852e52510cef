//! View builders for the calculator window

pub mod form_view;
