//! Feature implementations for stint.

pub mod focus;
