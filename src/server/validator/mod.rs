//! Validation of uploaded category icons.

pub mod icon;
