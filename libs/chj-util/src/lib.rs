//! Utilities shared between the phtml crates.

pub mod warn;
