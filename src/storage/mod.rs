//! Storage layer for stint.
//!
//! `SQLite`-backed named key-value entries; the focus feature keeps its
//! session list in one of them.

mod database;
mod migrations;

pub use database::Database;
